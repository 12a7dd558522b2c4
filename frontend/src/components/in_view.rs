use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewOptions {
    /// Fraction of the element that must be on screen, 0.0 to 1.0.
    pub threshold: f64,
    /// Stay visible after the first sighting.
    pub once: bool,
}

impl ViewOptions {
    pub fn tracking(threshold: f64) -> Self {
        Self { threshold, once: false }
    }
}

pub fn next_visibility(current: bool, intersecting: bool, ratio: f64, options: ViewOptions) -> bool {
    let crossed = intersecting && ratio >= options.threshold;
    if options.once {
        current || crossed
    } else {
        crossed
    }
}

struct Observation {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for Observation {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn observe<F>(element: &Element, options: ViewOptions, on_change: F) -> Option<Observation>
where
    F: Fn(bool) + 'static,
{
    let mut visible = false;
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    visible = next_visibility(
                        visible,
                        entry.is_intersecting(),
                        entry.intersection_ratio(),
                        options,
                    );
                }
            }
            on_change(visible);
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).ok()?;
    observer.observe(element);

    Some(Observation {
        observer,
        _callback: callback,
    })
}

/// Tracks whether the element behind `node` is on screen.
///
/// Falls back to "visible" when the browser has no IntersectionObserver so
/// content is never left hidden.
#[hook]
pub fn use_in_view(node: NodeRef, options: ViewOptions) -> bool {
    let in_view = use_state_eq(|| false);

    {
        let in_view = in_view.clone();
        use_effect_with_deps(
            move |(node, options)| {
                let observation = node.cast::<Element>().and_then(|element| {
                    let in_view = in_view.clone();
                    observe(&element, *options, move |visible| in_view.set(visible))
                });
                if observation.is_none() {
                    log::debug!("IntersectionObserver unavailable, showing content");
                    in_view.set(true);
                }
                move || drop(observation)
            },
            (node, options),
        );
    }

    *in_view
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn needs_enough_of_the_element_on_screen() {
        let options = ViewOptions::tracking(0.2);
        assert!(!next_visibility(false, true, 0.1, options));
        assert!(next_visibility(false, true, 0.2, options));
        assert!(next_visibility(false, true, 0.9, options));
    }

    #[test]
    fn tracking_hides_again_on_exit() {
        let options = ViewOptions::tracking(0.5);
        let shown = next_visibility(false, true, 0.6, options);
        assert!(shown);
        assert!(!next_visibility(shown, false, 0.0, options));
    }

    #[test]
    fn once_latches_visible() {
        let options = ViewOptions { threshold: 0.1, once: true };
        let shown = next_visibility(false, true, 0.3, options);
        assert!(next_visibility(shown, false, 0.0, options));
        assert!(!next_visibility(false, false, 0.0, options));
    }

    #[test]
    fn zero_threshold_fires_on_any_intersection() {
        let options = ViewOptions::tracking(0.0);
        assert!(next_visibility(false, true, 0.0, options));
        assert!(!next_visibility(true, false, 0.0, options));
    }
}
