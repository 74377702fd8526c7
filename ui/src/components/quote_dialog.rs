use dioxus::prelude::*;

use crate::core::selection::QuoteDialog as QuoteDialogState;
use crate::t;

/// Modal listing the three quotes for the submitted topic.
///
/// Renders nothing while idle. Close button, backdrop click and Escape all
/// dismiss it.
#[component]
pub fn QuoteDialog(dialog: Signal<QuoteDialogState>) -> Element {
    let mut dialog = dialog;

    let state = dialog();
    let (Some(topic), Some(quotes)) = (state.topic(), state.quotes()) else {
        return rsx! {};
    };

    let title = t!("dialog-title", topic = topic.name());

    rsx! {
        div {
            class: "quote-dialog__backdrop",
            onclick: move |_| dialog.with_mut(|d| d.dismiss()),
            onkeydown: move |evt: KeyboardEvent| {
                if evt.key() == Key::Escape {
                    dialog.with_mut(|d| d.dismiss());
                }
            },

            div {
                class: "quote-dialog",
                role: "dialog",
                aria_modal: "true",
                aria_labelledby: "quote-dialog-title",
                tabindex: 0,
                onmounted: move |evt: MountedEvent| async move {
                    // Focus the dialog so Escape reaches the backdrop handler.
                    let _ = evt.set_focus(true).await;
                },
                onclick: move |evt| evt.stop_propagation(),

                header { class: "quote-dialog__header",
                    h2 { id: "quote-dialog-title", class: "quote-dialog__title", "{title}" }
                    p { class: "quote-dialog__description", {t!("dialog-description")} }
                    button {
                        r#type: "button",
                        class: "button button--ghost quote-dialog__close",
                        aria_label: t!("dialog-close"),
                        onclick: move |_| dialog.with_mut(|d| d.dismiss()),
                        "×"
                    }
                }

                ul { class: "quote-dialog__quotes",
                    for (index, quote) in quotes.iter().enumerate() {
                        li { key: "{index}", class: "quote-dialog__quote", "\"{quote}\"" }
                    }
                }
            }
        }
    }
}
