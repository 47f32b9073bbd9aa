use dioxus::prelude::*;

pub fn switch_state(checked: bool) -> &'static str {
    if checked { "checked" } else { "unchecked" }
}

/// Controlled on/off switch. The parent owns `checked` and receives the
/// requested value through `on_checked_change`.
#[component]
pub fn Switch(
    checked: bool,
    on_checked_change: EventHandler<bool>,
    #[props(default)] class: String,
    #[props(default)] disabled: bool,
    children: Element,
) -> Element {
    let state = switch_state(checked);

    rsx! {
        button {
            r#type: "button",
            role: "switch",
            aria_checked: "{checked}",
            "data-state": state,
            class: "{class}",
            disabled: disabled,
            onclick: move |_| on_checked_change.call(!checked),
            span {
                "data-state": state,
                class: "switch-thumb pointer-events-none block h-5 w-5 rounded-full bg-white shadow transition-transform data-[state=checked]:translate-x-6 data-[state=unchecked]:translate-x-0.5",
            }
            {children}
        }
    }
}
