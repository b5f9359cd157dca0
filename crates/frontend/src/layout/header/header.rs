use crate::shared::number_format::format_number;
use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero-section">
            <div class="hero-text-container">
                <h1>"Dynamic Price Services"</h1>
                <p>"Empowering businesses with data-driven pricing strategies for optimal revenue."</p>
            </div>
        </div>

        <header data-zone="header" class="hero">
            <div class="hero-inner">
                <div>
                    <h1>"Dynamic Pricing"</h1>
                    <p class="hero-sub">
                        "Smart prices powered by ML — see predicted sales & recommended dynamic price."
                    </p>
                    <div class="hero-badges">
                        <span class="badge">"Realtime"</span>
                        <span class="badge green">"Model v1"</span>
                        <span class="badge">"Alpha " {format_number(Some(0.05), 2)}</span>
                    </div>
                </div>
                <div class="hero-image" role="img" aria-label="pricing hero"></div>
            </div>
        </header>
    }
}
