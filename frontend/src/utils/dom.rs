use thiserror::Error;
use wasm_bindgen::JsValue;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::content::Section;

/// Browser capabilities the page leans on but can live without.
#[derive(Debug, Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("no element matches {0}")]
    MissingElement(String),
    #[error("{context}: {message}")]
    Js { context: &'static str, message: String },
}

impl DomError {
    pub fn js(context: &'static str, value: JsValue) -> Self {
        DomError::Js {
            context,
            message: value.as_string().unwrap_or_else(|| format!("{:?}", value)),
        }
    }
}

pub fn window() -> Result<web_sys::Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

/// Smoothly brings a section to the top of the viewport.
pub fn scroll_to(section: Section) -> Result<(), DomError> {
    let document = window()?.document().ok_or(DomError::NoDocument)?;
    let selector = section.anchor();
    let element = document
        .query_selector(&selector)
        .map_err(|e| DomError::js("query_selector", e))?
        .ok_or(DomError::MissingElement(selector))?;
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    Ok(())
}

/// `scroll_to` for event handlers, where a failure only deserves a log line.
pub fn scroll_to_or_log(section: Section) {
    if let Err(e) = scroll_to(section) {
        log::warn!("Failed to scroll to {}: {}", section.id(), e);
    }
}

pub fn scroll_y() -> Result<f64, DomError> {
    window()?.scroll_y().map_err(|e| DomError::js("scroll_y", e))
}
