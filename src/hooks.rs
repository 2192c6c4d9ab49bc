//! Hooks wiring the pure scroll core to the browser.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use yew::prelude::*;

use crate::listener;
use crate::scroll::{ScrollState, ScrollTracker};

fn viewport_metrics() -> Option<(f64, f64, f64)> {
    let window = web_sys::window()?;
    let document_root = window.document()?.document_element()?;
    let offset = window.scroll_y().ok()?;
    let viewport = window.inner_height().ok()?.as_f64()?;
    let document_height = document_root.scroll_height() as f64;
    Some((offset, viewport, document_height))
}

/// Owns the page's one scroll listener and republishes the derived state on
/// every event. Mounted once at the page root; everything else reads the
/// state through a `ContextProvider`, so the nav bar and the root widgets
/// never recompute it independently.
#[hook]
pub fn use_scroll_tracker() -> ScrollState {
    let state = use_state_eq(ScrollState::default);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                let tracker = Rc::new(RefCell::new(ScrollTracker::new()));
                let subscription = listener::on_window_scroll(move || {
                    if let Some((offset, viewport, document_height)) = viewport_metrics() {
                        let next = tracker.borrow_mut().on_scroll(
                            offset,
                            viewport,
                            document_height,
                            js_sys::Date::now(),
                        );
                        state.set(next);
                    }
                });
                move || drop(subscription)
            },
            (),
        );
    }

    *state
}

/// One-shot visibility: flips to true the first time `node` enters the
/// viewport, then disconnects its observer. Drives the card entrance
/// animations.
#[hook]
pub fn use_reveal(node: NodeRef) -> bool {
    let visible = use_state_eq(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let mut observer = None;
                let mut callback = None;

                if let Some(element) = node.cast::<web_sys::Element>() {
                    let on_intersect = Closure::wrap(Box::new(
                        move |entries: js_sys::Array, obs: web_sys::IntersectionObserver| {
                            let entered = entries.iter().any(|entry| {
                                entry
                                    .dyn_into::<web_sys::IntersectionObserverEntry>()
                                    .map(|entry| entry.is_intersecting())
                                    .unwrap_or(false)
                            });
                            if entered {
                                visible.set(true);
                                obs.disconnect();
                            }
                        },
                    )
                        as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);

                    let options = web_sys::IntersectionObserverInit::new();
                    options.set_threshold(&JsValue::from_f64(0.2));
                    match web_sys::IntersectionObserver::new_with_options(
                        on_intersect.as_ref().unchecked_ref(),
                        &options,
                    ) {
                        Ok(obs) => {
                            obs.observe(&element);
                            observer = Some(obs);
                        }
                        Err(err) => log::warn!("intersection observer unavailable: {:?}", err),
                    }
                    callback = Some(on_intersect);
                }

                move || {
                    if let Some(obs) = observer {
                        obs.disconnect();
                    }
                    drop(callback);
                }
            },
            node,
        );
    }

    *visible
}

/// Small translation offset following the pointer, used to let the breath
/// widget drift with the mouse. `(x, y)` in pixels, each within ±10.
#[hook]
pub fn use_mouse_parallax() -> (f64, f64) {
    let offset = use_state_eq(|| (0.0, 0.0));

    {
        let offset = offset.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let on_move = Closure::wrap(Box::new(move |event: web_sys::MouseEvent| {
                    let window = match web_sys::window() {
                        Some(window) => window,
                        None => return,
                    };
                    let width = window
                        .inner_width()
                        .ok()
                        .and_then(|v| v.as_f64())
                        .unwrap_or(1.0);
                    let height = window
                        .inner_height()
                        .ok()
                        .and_then(|v| v.as_f64())
                        .unwrap_or(1.0);
                    offset.set((
                        (event.client_x() as f64 / width - 0.5) * 20.0,
                        (event.client_y() as f64 / height - 0.5) * 20.0,
                    ));
                }) as Box<dyn FnMut(web_sys::MouseEvent)>);

                window
                    .add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "mousemove",
                            on_move.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    *offset
}
