use dioxus::prelude::*;
use starter_page::configs::{ init_logging, ThemeConfig };
use starter_page::use_theme_provider;
use starter_page::Route;

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/styling/main.css");
const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    init_logging();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_theme_provider(ThemeConfig::default());

    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        Router::<Route> {}
    }
}
