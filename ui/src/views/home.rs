use dioxus::prelude::*;

use crate::components::{AppFooter, AppHeader, QuoteDialog, TopicForm};
use crate::core::selection::{QuoteDialog as QuoteDialogState, TopicForm as TopicFormState};

#[cfg(debug_assertions)]
fn log_home_render(lang: &str, dialog: &QuoteDialogState) {
    tracing::trace!(lang, ?dialog, "home render");
}

/// The single page: topic form plus the quote dialog it drives.
///
/// Form and dialog state live here for the lifetime of the page view and
/// are dropped with it.
#[component]
pub fn Home() -> Element {
    // Subscribe to global language code (if provided) so we re-render on change.
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_marker = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let form = use_signal(TopicFormState::new);
    let dialog = use_signal(QuoteDialogState::default);

    #[cfg(debug_assertions)]
    {
        log_home_render(&lang_marker, &dialog.peek());
    }

    rsx! {
        div { class: "page-shell",
            AppHeader {}

            main { class: "page page-home",
                div { style: "display:none", "{lang_marker}" }
                section { class: "card page-home__card",
                    h1 { class: "page-home__title", {crate::t!("home-title")} }
                    TopicForm { form, dialog }
                    QuoteDialog { dialog }
                }
            }

            AppFooter {}
        }
    }
}
