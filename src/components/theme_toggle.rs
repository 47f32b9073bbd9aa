use dioxus::prelude::*;

use crate::components::icons::{ Moon, Sun };
use crate::components::Switch;
use crate::utils::use_theme;

#[component]
pub fn ThemeToggle() -> Element {
    let theme = use_theme();

    rsx! {
        div {
            class: "flex items-center gap-4",
            Sun { class: "text-yellow-400" }
            Switch {
                checked: theme.is_dark(),
                on_checked_change: move |value: bool| theme.set_dark(value),
                class: "data-[state=checked]:bg-purple-600 data-[state=unchecked]:bg-gray-300 w-12 h-6 rounded-full relative transition-colors",
                span { class: "sr-only", "Toggle dark mode" }
            }
            Moon { class: "text-gray-700 dark:text-gray-200" }
        }
    }
}
