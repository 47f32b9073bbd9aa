use std::fmt::{ Display, Formatter };

#[derive(Debug, Clone, PartialEq)]
pub enum ThemeError {
    NoWindow,
    NoDocument,
    NoRootElement,
    Dom(String),
    Eval(String),
}

impl Display for ThemeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeError::NoWindow => write!(f, "DOM Error: no global window"),
            ThemeError::NoDocument => write!(f, "DOM Error: window has no document"),
            ThemeError::NoRootElement => write!(f, "DOM Error: document has no root element"),
            ThemeError::Dom(msg) => write!(f, "DOM Error: {}", msg),
            ThemeError::Eval(msg) => write!(f, "Eval Error: {}", msg),
        }
    }
}

impl std::error::Error for ThemeError {}

impl From<wasm_bindgen::JsValue> for ThemeError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        ThemeError::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}
