use dioxus::prelude::*;
use crate::views::{ Home, PageNotFound };

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home,
    #[route("/:..segments")]
    PageNotFound {
        segments: Vec<String>,
    },
}
