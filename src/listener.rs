//! Scoped window-event subscriptions.
//!
//! Raw `addEventListener`/`removeEventListener` pairs are easy to leak when
//! a component unmounts on an unexpected path. [`EventSubscription`] ties
//! the pair to a value: the listener attaches on construction and detaches
//! in `Drop`, unconditionally. The [`EventHost`] seam keeps the mechanics
//! testable without a browser.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Something listeners can be attached to. In production this is the
/// browser window; tests substitute a counting fake.
pub trait EventHost {
    type Handle;

    fn attach(&self, event: &'static str, callback: Box<dyn FnMut()>) -> Self::Handle;
    fn detach(&self, event: &'static str, handle: &Self::Handle);
}

/// Listeners on the browser `window` object.
pub struct WindowHost;

impl EventHost for WindowHost {
    type Handle = Closure<dyn FnMut()>;

    fn attach(&self, event: &'static str, callback: Box<dyn FnMut()>) -> Self::Handle {
        let closure = Closure::wrap(callback);
        web_sys::window()
            .unwrap()
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .unwrap();
        closure
    }

    fn detach(&self, event: &'static str, handle: &Self::Handle) {
        web_sys::window()
            .unwrap()
            .remove_event_listener_with_callback(event, handle.as_ref().unchecked_ref())
            .unwrap();
    }
}

/// A live listener. Dropping it removes the listener, so holding it in an
/// effect's cleanup closure gives mount/unmount symmetry for free.
pub struct EventSubscription<H: EventHost> {
    host: H,
    event: &'static str,
    handle: Option<H::Handle>,
}

impl<H: EventHost> EventSubscription<H> {
    pub fn new(host: H, event: &'static str, callback: Box<dyn FnMut()>) -> Self {
        let handle = host.attach(event, callback);
        Self {
            host,
            event,
            handle: Some(handle),
        }
    }
}

impl<H: EventHost> Drop for EventSubscription<H> {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.host.detach(self.event, &handle);
        }
    }
}

/// Window scroll listener, detached when the returned value is dropped.
pub fn on_window_scroll(callback: impl FnMut() + 'static) -> EventSubscription<WindowHost> {
    EventSubscription::new(WindowHost, "scroll", Box::new(callback))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    /// Fake host that records attached callbacks so tests can fire them and
    /// count live listeners.
    #[derive(Clone, Default)]
    struct FakeHost {
        slots: Rc<RefCell<Vec<Option<Box<dyn FnMut()>>>>>,
    }

    impl FakeHost {
        fn live_listeners(&self) -> usize {
            self.slots
                .borrow()
                .iter()
                .filter(|slot| slot.is_some())
                .count()
        }

        fn fire(&self, index: usize) {
            let mut slots = self.slots.borrow_mut();
            if let Some(callback) = slots[index].as_mut() {
                callback();
            }
        }
    }

    impl EventHost for FakeHost {
        type Handle = usize;

        fn attach(&self, _event: &'static str, callback: Box<dyn FnMut()>) -> usize {
            let mut slots = self.slots.borrow_mut();
            slots.push(Some(callback));
            slots.len() - 1
        }

        fn detach(&self, _event: &'static str, handle: &usize) {
            self.slots.borrow_mut()[*handle] = None;
        }
    }

    #[test]
    fn drop_releases_the_listener() {
        let host = FakeHost::default();
        let subscription = EventSubscription::new(host.clone(), "scroll", Box::new(|| {}));
        assert_eq!(host.live_listeners(), 1);
        drop(subscription);
        assert_eq!(host.live_listeners(), 0);
    }

    #[test]
    fn remounting_never_stacks_listeners() {
        let host = FakeHost::default();
        for _ in 0..3 {
            let subscription = EventSubscription::new(host.clone(), "scroll", Box::new(|| {}));
            assert_eq!(host.live_listeners(), 1);
            drop(subscription);
        }
        assert_eq!(host.live_listeners(), 0);
    }

    #[test]
    fn events_reach_the_callback_until_drop() {
        let host = FakeHost::default();
        let hits = Rc::new(Cell::new(0u32));
        let subscription = {
            let hits = hits.clone();
            EventSubscription::new(
                host.clone(),
                "scroll",
                Box::new(move || hits.set(hits.get() + 1)),
            )
        };
        host.fire(0);
        host.fire(0);
        assert_eq!(hits.get(), 2);

        drop(subscription);
        host.fire(0);
        assert_eq!(hits.get(), 2);
    }
}
