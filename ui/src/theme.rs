use dioxus::prelude::*;

const THEME_CSS: Asset = asset!("/assets/theme/main.css");

/// Shared theme stylesheet, compiled in for native builds that cannot serve assets.
pub const THEME_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));

/// Links the shared theme; release native builds inline it instead.
#[component]
pub fn Theme() -> Element {
    rsx! {
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{THEME_CSS_INLINE}" }
        } else {
            document::Link { rel: "stylesheet", href: THEME_CSS }
        }
    }
}
