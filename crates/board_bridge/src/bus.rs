//! Document-level event bus: named events, ordered fire-and-forget
//! handlers.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::events::EventKind;

type Handler = Rc<RefCell<dyn FnMut()>>;

/// Opaque handle for one registered listener. There is no unsubscription;
/// listeners live for the document's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// The shared dispatch/listen mechanism all published events go through.
///
/// Handlers run synchronously, in registration order, before `dispatch`
/// returns. The handler list is snapshotted per dispatch, so a handler may
/// register further listeners (effective from the next dispatch) or trigger
/// a nested dispatch of another event kind.
#[derive(Default)]
pub struct DocumentBus {
    listeners: RefCell<BTreeMap<EventKind, Vec<Handler>>>,
    next_id: Cell<u64>,
}

impl DocumentBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn listen(&self, kind: EventKind, handler: impl FnMut() + 'static) -> SubscriptionId {
        let handler: Handler = Rc::new(RefCell::new(handler));
        self.listeners
            .borrow_mut()
            .entry(kind)
            .or_default()
            .push(handler);
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        SubscriptionId(id)
    }

    pub fn dispatch(&self, kind: EventKind) {
        let snapshot: Vec<Handler> = self
            .listeners
            .borrow()
            .get(&kind)
            .map(|handlers| handlers.clone())
            .unwrap_or_default();
        for handler in snapshot {
            (&mut *handler.borrow_mut())();
        }
    }

    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.listeners.borrow().get(&kind).map_or(0, Vec::len)
    }

    pub fn total_listeners(&self) -> usize {
        self.listeners.borrow().values().map(Vec::len).sum()
    }
}
