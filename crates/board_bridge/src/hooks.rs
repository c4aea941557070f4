//! Method interception: wrap a host-owned callable so each successful call
//! is followed by exactly one bus dispatch.

use std::rc::Rc;

use board_host::HostApp;

use crate::bus::DocumentBus;
use crate::events::EventKind;

/// One (host method, published event) pairing.
pub struct HookSpec {
    pub path: &'static [&'static str],
    pub event: EventKind,
}

impl HookSpec {
    pub fn dotted_path(&self) -> String {
        self.path.join(".")
    }
}

/// Replaces the method at `spec.path` with a wrapper that invokes the
/// original with the same arguments, dispatches `spec.event` on `bus`
/// strictly after a successful return, and hands the original's value back
/// unchanged. Errors from the original propagate as-is and suppress the
/// dispatch.
///
/// Returns `false` without mutating anything when the path does not resolve
/// to an installed method. Installing twice wraps twice; nothing dedups.
pub fn install_hook(host: &mut HostApp, spec: &HookSpec, bus: Rc<DocumentBus>) -> bool {
    let Some(slot) = host.method_slot_mut(spec.path) else {
        return false;
    };
    let Some(mut original) = slot.take() else {
        return false;
    };
    let event = spec.event;
    *slot = Some(Box::new(move |args| {
        let value = original(args)?;
        bus.dispatch(event);
        Ok(value)
    }));
    true
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use board_host::{HostApp, HostCallError};
    use serde_json::{json, Value};

    use super::*;

    const DRAW_HOOK: HookSpec = HookSpec {
        path: &["backlog_view", "draw"],
        event: EventKind::BacklogDrawn,
    };

    fn host_with_draw() -> HostApp {
        let mut host = HostApp::new();
        host.backlog_view.draw = Some(Box::new(|args| Ok(json!({ "drew": args }))));
        host
    }

    #[test]
    fn wrapped_method_keeps_arguments_and_return_value() {
        let mut host = host_with_draw();
        let bus = Rc::new(DocumentBus::new());
        assert!(install_hook(&mut host, &DRAW_HOOK, Rc::clone(&bus)));

        let out = host
            .invoke(&["backlog_view", "draw"], json!(["column-a"]))
            .expect("call");
        assert_eq!(out, json!({ "drew": ["column-a"] }));
    }

    #[test]
    fn event_fires_once_per_call_after_the_original_ran() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut host = HostApp::new();
        {
            let order = Rc::clone(&order);
            host.backlog_view.draw = Some(Box::new(move |_| {
                order.borrow_mut().push("original");
                Ok(Value::Null)
            }));
        }
        let bus = Rc::new(DocumentBus::new());
        {
            let order = Rc::clone(&order);
            bus.listen(EventKind::BacklogDrawn, move || {
                order.borrow_mut().push("event");
            });
        }
        assert!(install_hook(&mut host, &DRAW_HOOK, Rc::clone(&bus)));

        host.invoke(&["backlog_view", "draw"], Value::Null).expect("call");
        assert_eq!(*order.borrow(), ["original", "event"]);

        host.invoke(&["backlog_view", "draw"], Value::Null).expect("call");
        assert_eq!(*order.borrow(), ["original", "event", "original", "event"]);
    }

    #[test]
    fn an_erroring_original_fires_no_event() {
        let mut host = HostApp::new();
        host.backlog_view.draw = Some(Box::new(|_| Err(HostCallError::raised("render failed"))));
        let bus = Rc::new(DocumentBus::new());
        let hits = Rc::new(Cell::new(0u32));
        {
            let hits = Rc::clone(&hits);
            bus.listen(EventKind::BacklogDrawn, move || hits.set(hits.get() + 1));
        }
        assert!(install_hook(&mut host, &DRAW_HOOK, Rc::clone(&bus)));

        let err = host
            .invoke(&["backlog_view", "draw"], Value::Null)
            .expect_err("should fail");
        assert!(matches!(err, HostCallError::Raised { .. }));
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn missing_method_is_skipped_without_mutation() {
        let mut host = HostApp::new();
        let bus = Rc::new(DocumentBus::new());
        assert!(!install_hook(&mut host, &DRAW_HOOK, Rc::clone(&bus)));
        assert!(host.backlog_view.draw.is_none());
    }

    #[test]
    fn unknown_path_is_skipped() {
        let mut host = host_with_draw();
        let bus = Rc::new(DocumentBus::new());
        let spec = HookSpec {
            path: &["backlog_view", "redraw"],
            event: EventKind::BacklogDrawn,
        };
        assert!(!install_hook(&mut host, &spec, bus));
    }

    #[test]
    fn installing_twice_wraps_twice() {
        let mut host = host_with_draw();
        let bus = Rc::new(DocumentBus::new());
        let hits = Rc::new(Cell::new(0u32));
        {
            let hits = Rc::clone(&hits);
            bus.listen(EventKind::BacklogDrawn, move || hits.set(hits.get() + 1));
        }
        assert!(install_hook(&mut host, &DRAW_HOOK, Rc::clone(&bus)));
        assert!(install_hook(&mut host, &DRAW_HOOK, Rc::clone(&bus)));

        host.invoke(&["backlog_view", "draw"], Value::Null).expect("call");
        assert_eq!(hits.get(), 2);
    }
}
