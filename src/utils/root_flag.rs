use crate::error::ThemeError;

/// A boolean marker on the document root that the stylesheet keys off.
pub trait RootFlag {
    fn is_present(&self) -> Result<bool, ThemeError>;
    fn set_present(&mut self, present: bool) -> Result<(), ThemeError>;
}

/// Marker class on `document.documentElement`, written through `DomTokenList`.
#[cfg(target_arch = "wasm32")]
pub struct DomRoot {
    class: &'static str,
}

#[cfg(target_arch = "wasm32")]
impl DomRoot {
    pub fn new(class: &'static str) -> Self {
        Self { class }
    }

    fn root(&self) -> Result<web_sys::Element, ThemeError> {
        let window = web_sys::window().ok_or(ThemeError::NoWindow)?;
        let document = window.document().ok_or(ThemeError::NoDocument)?;
        document.document_element().ok_or(ThemeError::NoRootElement)
    }
}

#[cfg(target_arch = "wasm32")]
impl RootFlag for DomRoot {
    fn is_present(&self) -> Result<bool, ThemeError> {
        Ok(self.root()?.class_list().contains(self.class))
    }

    fn set_present(&mut self, present: bool) -> Result<(), ThemeError> {
        self.root()?.class_list().toggle_with_force(self.class, present)?;
        Ok(())
    }
}

/// Marker class written by script for renderers that host a webview
/// (desktop, mobile). The webview cannot be read back synchronously, and a
/// write only queues the script: its failure is logged when the eval resolves
/// and is never returned from `set_present`.
#[cfg(not(target_arch = "wasm32"))]
pub struct EvalRoot {
    class: &'static str,
}

#[cfg(not(target_arch = "wasm32"))]
impl EvalRoot {
    pub fn new(class: &'static str) -> Self {
        Self { class }
    }

    fn script(&self, present: bool) -> String {
        format!("document.documentElement.classList.toggle({:?}, {});", self.class, present)
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl RootFlag for EvalRoot {
    fn is_present(&self) -> Result<bool, ThemeError> {
        Err(ThemeError::Eval("root class cannot be read back from the webview".to_string()))
    }

    fn set_present(&mut self, present: bool) -> Result<(), ThemeError> {
        let eval = dioxus::document::eval(&self.script(present));
        dioxus::prelude::spawn(async move {
            if let Err(e) = eval.await {
                log::warn!("Failed to sync root theme flag: {}", ThemeError::Eval(e.to_string()));
            }
        });
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub type PlatformRoot = DomRoot;

#[cfg(not(target_arch = "wasm32"))]
pub type PlatformRoot = EvalRoot;
