use dioxus::prelude::*;

use ui::views::Home;
use ui::Theme;

const FAVICON: Asset = asset!("/assets/favicon.svg");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Global reactive language code; AppHeader updates it on locale change.
    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);

    use_effect(|| {
        tracing::info!("Topic Quotes web started");
    });

    rsx! {
        document::Title { "Topic Quotes" }
        document::Link { rel: "icon", href: FAVICON }
        Theme {}

        // Remount on language change so every translated string refreshes.
        div { key: "{lang_code()}", Home {} }
    }
}
