//! The browser-window surface the bridge consumes: a readable
//! current-location string and the single history-navigation handler slot.

use std::cell::RefCell;

#[derive(Default)]
pub struct Window {
    location: RefCell<String>,
    on_pop_state: RefCell<Option<Box<dyn FnMut()>>>,
}

impl Window {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_location(url: impl Into<String>) -> Self {
        let window = Self::default();
        *window.location.borrow_mut() = url.into();
        window
    }

    pub fn location(&self) -> String {
        self.location.borrow().clone()
    }

    /// The host page rewrites this on every history transition.
    pub fn set_location(&self, url: impl Into<String>) {
        *self.location.borrow_mut() = url.into();
    }

    pub fn set_pop_state_handler(&self, handler: impl FnMut() + 'static) {
        *self.on_pop_state.borrow_mut() = Some(Box::new(handler));
    }

    pub fn has_pop_state_handler(&self) -> bool {
        self.on_pop_state.borrow().is_some()
    }

    /// Raises the history-navigation signal. The handler is taken out of
    /// its slot for the duration of the call so it may itself read or write
    /// the window.
    pub fn pop_state(&self) {
        let handler = self.on_pop_state.borrow_mut().take();
        let Some(mut handler) = handler else {
            return;
        };
        handler();
        let mut slot = self.on_pop_state.borrow_mut();
        if slot.is_none() {
            *slot = Some(handler);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn location_round_trips() {
        let window = Window::with_location("https://domain.tld/secure/Dashboard.jspa");
        assert_eq!(window.location(), "https://domain.tld/secure/Dashboard.jspa");
        window.set_location("https://domain.tld/browse/BOARD-1");
        assert_eq!(window.location(), "https://domain.tld/browse/BOARD-1");
    }

    #[test]
    fn pop_state_without_a_handler_is_a_no_op() {
        let window = Window::new();
        window.pop_state();
        assert!(!window.has_pop_state_handler());
    }

    #[test]
    fn pop_state_invokes_the_handler_each_time() {
        let window = Window::new();
        let hits = Rc::new(Cell::new(0u32));
        {
            let hits = Rc::clone(&hits);
            window.set_pop_state_handler(move || hits.set(hits.get() + 1));
        }

        window.pop_state();
        window.pop_state();
        assert_eq!(hits.get(), 2);
        assert!(window.has_pop_state_handler());
    }

    #[test]
    fn handler_can_read_the_location_that_triggered_it() {
        let window = Rc::new(Window::new());
        let seen = Rc::new(RefCell::new(String::new()));
        {
            let captured = Rc::clone(&window);
            let seen = Rc::clone(&seen);
            window.set_pop_state_handler(move || {
                *seen.borrow_mut() = captured.location();
            });
        }

        window.set_location("https://domain.tld/browse/BOARD-7");
        window.pop_state();
        assert_eq!(*seen.borrow(), "https://domain.tld/browse/BOARD-7");
    }
}
