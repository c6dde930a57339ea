use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;
use crate::utils::dom::DomError;

#[derive(Clone, Debug, PartialEq)]
pub struct VisibilityOptions {
    /// Fraction of the element that must be on screen.
    pub threshold: f64,
    /// CSS margin around the viewport, e.g. `"0px 0px -50px 0px"`.
    pub root_margin: String,
    /// Stop watching after the first time the element shows up.
    pub once: bool,
}

impl Default for VisibilityOptions {
    fn default() -> Self {
        Self {
            threshold: config::VIEW_THRESHOLD,
            root_margin: config::VIEW_ROOT_MARGIN.to_string(),
            once: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Observation {
    Continue,
    Release,
}

/// Visibility of one element as reported by the viewport observer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisibilityState {
    once: bool,
    visible: bool,
    released: bool,
}

impl VisibilityState {
    pub fn new(once: bool) -> Self {
        Self { once, visible: false, released: false }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Records an intersection report. Reports arriving after a one-shot
    /// release are ignored.
    pub fn apply(&mut self, intersecting: bool) -> Observation {
        if self.released {
            return Observation::Release;
        }
        self.visible = intersecting;
        if intersecting && self.once {
            self.released = true;
            Observation::Release
        } else {
            Observation::Continue
        }
    }
}

/// Live `IntersectionObserver` registration. Dropping it stops observation.
struct ViewportWatch {
    observer: IntersectionObserver,
    target: Element,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for ViewportWatch {
    fn drop(&mut self) {
        self.observer.unobserve(&self.target);
        self.observer.disconnect();
    }
}

fn watch(
    target: Element,
    options: &VisibilityOptions,
    on_change: Callback<bool>,
) -> Result<ViewportWatch, DomError> {
    let mut state = VisibilityState::new(options.once);
    let watched = target.clone();
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            // Records are queued oldest first.
            let len = entries.length();
            if len == 0 {
                return;
            }
            let entry: IntersectionObserverEntry = entries.get(len - 1).unchecked_into();
            let observation = state.apply(entry.is_intersecting());
            on_change.emit(state.is_visible());
            if observation == Observation::Release {
                observer.unobserve(&watched);
            }
        },
    );
    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(&options.root_margin);
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
        .map_err(|e| DomError::js("IntersectionObserver", e))?;
    observer.observe(&target);
    Ok(ViewportWatch { observer, target, _callback: callback })
}

/// Returns a ref to attach to an element and whether that element is
/// currently in view. Stays `false` until the ref is attached.
#[hook]
pub fn use_in_view(options: VisibilityOptions) -> (NodeRef, bool) {
    let node = use_node_ref();
    let visible = use_state_eq(|| false);
    {
        let node = node.clone();
        let visible = visible.clone();
        use_effect_with_deps(
            move |options: &VisibilityOptions| {
                let on_change = Callback::from(move |is_visible: bool| visible.set(is_visible));
                let registration = node.cast::<Element>().and_then(|target| {
                    watch(target, options, on_change)
                        .map_err(|e| log::warn!("Viewport tracking unavailable: {}", e))
                        .ok()
                });
                move || drop(registration)
            },
            options,
        );
    }
    (node, *visible)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        assert!(!VisibilityState::new(false).is_visible());
        assert!(!VisibilityState::new(true).is_visible());
    }

    #[test]
    fn follows_every_change_when_not_once() {
        let mut state = VisibilityState::new(false);
        assert_eq!(state.apply(true), Observation::Continue);
        assert!(state.is_visible());
        assert_eq!(state.apply(false), Observation::Continue);
        assert!(!state.is_visible());
        assert_eq!(state.apply(true), Observation::Continue);
        assert!(state.is_visible());
    }

    #[test]
    fn once_releases_on_first_sighting_and_stays_visible() {
        let mut state = VisibilityState::new(true);
        assert_eq!(state.apply(false), Observation::Continue);
        assert!(!state.is_visible());
        assert_eq!(state.apply(true), Observation::Release);
        assert!(state.is_visible());
        assert_eq!(state.apply(false), Observation::Release);
        assert!(state.is_visible());
    }

    #[test]
    fn defaults_match_section_reveal() {
        let options = VisibilityOptions::default();
        assert_eq!(options.threshold, 0.1);
        assert_eq!(options.root_margin, "0px");
        assert!(!options.once);
    }
}
