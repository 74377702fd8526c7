use dioxus::prelude::*;

use crate::core::catalog::Topic;
use crate::core::selection::{QuoteDialog, TopicForm as TopicFormState};
use crate::t;

/// Single-field topic form. Submitting a valid choice opens `dialog`; an
/// empty choice shows the required-field message under the selector.
#[component]
pub fn TopicForm(form: Signal<TopicFormState>, dialog: Signal<QuoteDialog>) -> Element {
    let mut form = form;
    let mut dialog = dialog;

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        // Rejections are kept in the form state and rendered inline.
        let _ = form.with_mut(|state| dialog.with_mut(|d| state.submit(d)));
    };

    let snapshot = form();
    let has_error = snapshot.error().is_some();
    let (select_class, described_by) = if has_error {
        ("topic-form__select topic-form__select--invalid", "topic-error")
    } else {
        ("topic-form__select", "")
    };

    rsx! {
        form {
            class: "topic-form",
            novalidate: true,
            onsubmit: on_submit,

            div { class: "topic-form__field",
                label {
                    class: "topic-form__label",
                    r#for: "topic-select",
                    {t!("form-topic-label")}
                }
                select {
                    id: "topic-select",
                    name: "topic",
                    class: select_class,
                    aria_invalid: has_error,
                    aria_describedby: described_by,
                    value: "{snapshot.value()}",
                    oninput: move |evt: FormEvent| form.with_mut(|state| state.select(evt.value())),
                    option { value: "", disabled: true, {t!("form-topic-placeholder")} }
                    for topic in Topic::ALL {
                        option {
                            key: "{topic.name()}",
                            value: "{topic.name()}",
                            "{topic.label()}"
                        }
                    }
                }
                if has_error {
                    p {
                        id: "topic-error",
                        class: "topic-form__error",
                        role: "alert",
                        {t!("form-topic-required")}
                    }
                }
            }

            button {
                r#type: "submit",
                class: "button button--primary topic-form__submit",
                {t!("form-submit")}
            }
        }
    }
}
