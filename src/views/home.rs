use dioxus::prelude::*;

use crate::components::icons::{ ArrowRight, BookOpen, Github, Rocket };
use crate::components::{ Button, ThemeToggle };

const LOGO: Asset = asset!("/assets/logo.svg");

struct DocLink {
    label: &'static str,
    href: &'static str,
    hover: &'static str,
}

const DOC_LINKS: &[DocLink] = &[
    DocLink { label: "Dioxus docs", href: "https://dioxuslabs.com/learn/0.6/", hover: "hover:text-purple-600" },
    DocLink { label: "Tailwind CSS docs", href: "https://tailwindcss.com/docs", hover: "hover:text-pink-600" },
    DocLink { label: "Lucide icons", href: "https://lucide.dev/", hover: "hover:text-emerald-600" },
];

#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            class: "min-h-screen flex flex-col items-center justify-center bg-gradient-to-br from-blue-50 to-purple-100 dark:from-gray-900 dark:to-gray-800 transition-colors duration-500",
            Header {}
            main {
                class: "flex-1 flex flex-col items-center justify-center w-full px-4",
                div {
                    class: "max-w-lg w-full p-8 rounded-2xl shadow-2xl bg-white/80 dark:bg-black/60 backdrop-blur-md flex flex-col gap-8 items-center",
                    h1 {
                        class: "text-4xl font-extrabold flex items-center gap-2 text-center text-gray-900 dark:text-gray-100",
                        Rocket { class: "text-purple-500 animate-bounce" }
                        "Welcome to Your Dioxus App"
                    }
                    p {
                        class: "text-center text-gray-700 dark:text-gray-300 text-lg",
                        span { class: "font-semibold text-blue-600", "Dioxus" }
                        ", "
                        span { class: "font-semibold text-purple-600", "Tailwind CSS" }
                        " and "
                        span { class: "font-semibold text-emerald-600", "Lucide" }
                        " are ready to use."
                        br {}
                        "Toggle dark mode, try the button, and see the icons in action!"
                    }
                    ThemeToggle {}
                    Button {
                        class: "w-full mt-4 group",
                        onclick: move |_| log::info!("Explore Components clicked"),
                        BookOpen { class: "w-5 h-5 group-hover:scale-110 transition-transform" }
                        "Explore Components"
                        ArrowRight { class: "w-5 h-5 group-hover:translate-x-1 transition-transform" }
                    }
                }
            }
            Footer {}
        }
    }
}

#[component]
fn Header() -> Element {
    rsx! {
        header {
            class: "w-full flex justify-between items-center px-8 py-6 max-w-4xl",
            div {
                class: "flex items-center gap-3",
                img { src: LOGO, alt: "Dioxus logo", width: "40", height: "40", class: "dark:invert" }
                span {
                    class: "text-lg font-bold tracking-tight text-gray-800 dark:text-gray-100",
                    "Dioxus Starter"
                }
            }
            a {
                href: "https://github.com/DioxusLabs/dioxus",
                target: "_blank",
                rel: "noopener noreferrer",
                class: "flex items-center gap-1 text-gray-600 dark:text-gray-300 hover:text-purple-600 dark:hover:text-purple-400 transition-colors",
                Github { class: "w-5 h-5" }
                span { class: "hidden sm:inline", "Dioxus" }
            }
        }
    }
}

#[component]
fn Footer() -> Element {
    rsx! {
        footer {
            class: "mt-10 text-center text-gray-500 dark:text-gray-400 text-sm pb-4",
            p {
                "Built with "
                span { class: "font-semibold", "Dioxus" }
                ", "
                span { class: "font-semibold", "Tailwind CSS" }
                " and "
                span { class: "font-semibold", "Lucide" }
                "."
            }
            p {
                class: "mt-2",
                for (idx, link) in DOC_LINKS.iter().enumerate() {
                    if idx > 0 {
                        " | "
                    }
                    a {
                        key: "{link.href}",
                        href: link.href,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        class: "underline underline-offset-2 {link.hover}",
                        "{link.label}"
                    }
                }
            }
        }
    }
}
