pub mod app;
pub mod layout;
pub mod shared;
pub mod usecases;

use wasm_bindgen::prelude::wasm_bindgen;

/// Client-side render of the pricing page into `<body>`.
#[wasm_bindgen]
pub fn mount() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    log::debug!("mounting pricing app");
    leptos::mount::mount_to_body(app::App);
}

#[wasm_bindgen(start)]
pub fn start() {
    mount();
}
