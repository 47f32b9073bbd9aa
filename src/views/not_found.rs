use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    use_hook(|| log::warn!("No route for /{}", path));

    rsx! {
        div {
            class: "min-h-screen flex flex-col items-center justify-center gap-4 bg-white dark:bg-gray-900 text-gray-800 dark:text-gray-100",
            h1 { class: "text-2xl font-bold", "Page not found" }
            p {
                class: "text-gray-600 dark:text-gray-400",
                "Nothing lives at /{path}."
            }
            Link {
                class: "underline underline-offset-2 hover:text-purple-600",
                to: Route::Home,
                "Back home"
            }
        }
    }
}
