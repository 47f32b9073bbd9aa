mod views;
pub mod components;
pub mod utils;
mod routes;
pub mod configs;
#[cfg(test)]
mod tests;
mod error;

pub use crate::routes::*;
pub use crate::utils::*;
pub use crate::error::ThemeError;
