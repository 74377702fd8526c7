use dioxus::prelude::*;

use ui::views::Home;
use ui::Theme;

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);

    use_effect(|| {
        tracing::info!("Topic Quotes mobile started");
    });

    rsx! {
        Theme {}

        // Remount on language change so every translated string refreshes.
        div { key: "{lang_code()}", Home {} }
    }
}
