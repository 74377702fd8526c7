use dioxus::prelude::*;
use time::OffsetDateTime;

use crate::t;

#[component]
pub fn AppFooter() -> Element {
    let year = OffsetDateTime::now_utc().year().to_string();

    rsx! {
        footer { class: "app-footer",
            div { class: "app-footer__inner", {t!("footer-rights", year = year)} }
        }
    }
}
