//! Leptos Color Scheme
//!
//! The OS light/dark preference as a subscribable event source.
//! Subscriptions are scoped: dropping a [`Subscription`] removes the listener.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Media query matching a dark OS preference
pub const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Anything that reports the OS color scheme and notifies on change
pub trait ColorSchemeSource {
    /// Current value of the signal
    fn prefers_dark(&self) -> bool;

    /// Register `on_change`; it stays registered until the returned
    /// subscription is dropped.
    fn subscribe(&self, on_change: Box<dyn Fn(bool)>) -> Subscription;
}

/// Handle for a live listener. Releases it on drop.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self { release: Some(Box::new(release)) }
    }

    /// Subscription with nothing to release (no source available)
    pub fn noop() -> Self {
        Self { release: None }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

// ========================
// Browser source
// ========================

/// `window.matchMedia("(prefers-color-scheme: dark)")`
///
/// Falls back to "light, never changes" when there is no window
/// (e.g. native test runs).
#[derive(Clone, Default)]
pub struct MediaQuerySource {
    query: Option<web_sys::MediaQueryList>,
}

impl MediaQuerySource {
    pub fn new() -> Self {
        let query = web_sys::window()
            .and_then(|win| win.match_media(DARK_QUERY).ok().flatten());
        Self { query }
    }
}

impl ColorSchemeSource for MediaQuerySource {
    fn prefers_dark(&self) -> bool {
        self.query.as_ref().map(|q| q.matches()).unwrap_or(false)
    }

    fn subscribe(&self, on_change: Box<dyn Fn(bool)>) -> Subscription {
        let Some(query) = self.query.clone() else {
            return Subscription::noop();
        };

        let on_event = Closure::<dyn FnMut(web_sys::MediaQueryListEvent)>::new(
            move |ev: web_sys::MediaQueryListEvent| on_change(ev.matches()),
        );
        let _ = query.add_event_listener_with_callback("change", on_event.as_ref().unchecked_ref());

        Subscription::new(move || {
            let _ = query.remove_event_listener_with_callback("change", on_event.as_ref().unchecked_ref());
            drop(on_event);
        })
    }
}

// ========================
// Simulated source
// ========================

type Listener = Rc<dyn Fn(bool)>;

#[derive(Default)]
struct SimulatedState {
    dark: bool,
    next_id: usize,
    listeners: Vec<(usize, Listener)>,
}

/// In-memory source whose value is flipped by hand. Used by tests.
#[derive(Clone, Default)]
pub struct SimulatedSource {
    state: Rc<RefCell<SimulatedState>>,
}

impl SimulatedSource {
    pub fn new(dark: bool) -> Self {
        let source = Self::default();
        source.state.borrow_mut().dark = dark;
        source
    }

    /// Change the simulated OS preference and notify every listener
    pub fn set_dark(&self, dark: bool) {
        let listeners: Vec<Listener> = {
            let mut state = self.state.borrow_mut();
            if state.dark == dark {
                return;
            }
            state.dark = dark;
            state.listeners.iter().map(|(_, l)| l.clone()).collect()
        };
        // Borrow released: listeners may subscribe or unsubscribe
        for listener in listeners {
            listener(dark);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.state.borrow().listeners.len()
    }
}

impl ColorSchemeSource for SimulatedSource {
    fn prefers_dark(&self) -> bool {
        self.state.borrow().dark
    }

    fn subscribe(&self, on_change: Box<dyn Fn(bool)>) -> Subscription {
        let id = {
            let mut state = self.state.borrow_mut();
            let id = state.next_id;
            state.next_id += 1;
            state.listeners.push((id, Rc::from(on_change)));
            id
        };
        let state = Rc::downgrade(&self.state);
        Subscription::new(move || {
            if let Some(state) = state.upgrade() {
                state.borrow_mut().listeners.retain(|(lid, _)| *lid != id);
            }
        })
    }
}

// ========================
// Leptos hook
// ========================

/// Track the OS preference as a signal.
///
/// The listener belongs to the calling component's owner and is released
/// when that owner is cleaned up.
pub fn use_prefers_dark<S>(source: S) -> ReadSignal<bool>
where
    S: ColorSchemeSource + 'static,
{
    let (prefers_dark, set_prefers_dark) = signal(source.prefers_dark());
    let subscription = source.subscribe(Box::new(move |dark| set_prefers_dark.set(dark)));

    let held = StoredValue::new_local((source, subscription));
    on_cleanup(move || held.dispose());

    prefers_dark
}
