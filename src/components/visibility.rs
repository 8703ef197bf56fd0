use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Tracks whether `node` is inside the viewport, re-arming on every
/// entry/exit so scroll-triggered effects can replay.
///
/// `threshold` is the fraction of the element that has to be on screen
/// before it counts as visible. The observer is owned by this hook: one is
/// created when the node attaches, and it is disconnected before any
/// re-observe and on unmount.
///
/// On platforms without IntersectionObserver the hook reports `true`
/// immediately, so dependent animations play on mount instead of never.
#[hook]
pub fn use_in_view(node: NodeRef, threshold: f64) -> bool {
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |(node, threshold)| {
                let mut observer = None;
                if let Some(element) = node.cast::<Element>() {
                    let on_intersect = {
                        let visible = visible.clone();
                        Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
                            if let Ok(entry) =
                                entries.get(0).dyn_into::<IntersectionObserverEntry>()
                            {
                                visible.set(entry.is_intersecting());
                            }
                        })
                    };

                    let options = IntersectionObserverInit::new();
                    options.set_threshold(&JsValue::from_f64(*threshold));

                    match IntersectionObserver::new_with_options(
                        on_intersect.as_ref().unchecked_ref(),
                        &options,
                    ) {
                        Ok(obs) => {
                            obs.observe(&element);
                            // The closure has to outlive the observer.
                            observer = Some((obs, on_intersect));
                        }
                        Err(_) => {
                            log::warn!("IntersectionObserver unavailable, showing section immediately");
                            visible.set(true);
                        }
                    }
                }

                move || {
                    if let Some((obs, _on_intersect)) = observer {
                        obs.disconnect();
                    }
                }
            },
            (node, threshold),
        );
    }

    *visible
}
