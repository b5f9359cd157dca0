pub mod fat_content;
pub mod item_type;
pub mod outlet;

pub use fat_content::FatContent;
pub use item_type::ItemType;
pub use outlet::{OutletLocationType, OutletSize, OutletType};
