mod button;
pub mod icons;
mod switch;
mod theme_toggle;

pub use button::{ button_class, Button, ButtonSize, ButtonVariant };
pub use switch::{ switch_state, Switch };
pub use theme_toggle::ThemeToggle;
