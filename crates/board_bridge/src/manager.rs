//! Installs the bridge onto a live host and owns the derived view state.

use std::cell::RefCell;
use std::rc::Rc;

use board_host::{compat, HostApp};

use crate::bus::{DocumentBus, SubscriptionId};
use crate::events::EventKind;
use crate::hooks::{install_hook, HookSpec};
use crate::view::{classify, ActiveView};
use crate::window::Window;

/// The fixed set of host methods the bridge observes. Navigation is not a
/// host method; the manager wires the window's pop-state signal separately.
pub const HOST_HOOKS: [HookSpec; 4] = [
    HookSpec {
        path: &["plan_controller", "show"],
        event: EventKind::BacklogShown,
    },
    HookSpec {
        path: &["backlog_view", "draw"],
        event: EventKind::BacklogDrawn,
    },
    HookSpec {
        path: &["plan_drag_and_drop", "enable_drag_and_drop"],
        event: EventKind::BacklogUpdated,
    },
    HookSpec {
        path: &["work_controller", "set_pool_data"],
        event: EventKind::ActiveSprintsUpdated,
    },
];

/// Bridges host controller methods and history navigation onto the
/// document-level bus.
///
/// View state has exactly one writer, the internal pop-state listener.
/// It runs and finishes before `ViewChanged` handlers are invoked, so
/// those handlers always observe the classification of the URL that
/// triggered them.
pub struct EventManager {
    document: Rc<DocumentBus>,
    window: Rc<Window>,
    active_view: Rc<RefCell<ActiveView>>,
}

impl EventManager {
    pub fn new(document: Rc<DocumentBus>, window: Rc<Window>) -> Self {
        Self {
            document,
            window,
            active_view: Rc::new(RefCell::new(ActiveView::Unknown)),
        }
    }

    /// Wires every host hook plus the navigation bridge. Returns `false`
    /// without touching anything when the host is absent or its shape is
    /// unsupported; the caller may probe again later.
    ///
    /// A hook whose target is missing is logged and skipped; the rest still
    /// install. Calling this twice re-wraps the host methods.
    pub fn add_event_emitters(&self, host: Option<&mut HostApp>) -> bool {
        let Some(host) = host else {
            tracing::warn!("host object not present; bridge not installed");
            return false;
        };
        if !compat::is_host_compatible(host) {
            tracing::warn!("host shape unsupported; bridge not installed");
            return false;
        }

        for spec in &HOST_HOOKS {
            if install_hook(host, spec, Rc::clone(&self.document)) {
                tracing::debug!(event = %spec.event, "host hook installed");
            } else {
                tracing::warn!(
                    path = %spec.dotted_path(),
                    event = %spec.event,
                    "hook target not found; skipped"
                );
            }
        }

        let bus = Rc::clone(&self.document);
        self.window
            .set_pop_state_handler(move || bus.dispatch(EventKind::PopState));

        let window = Rc::clone(&self.window);
        let view = Rc::clone(&self.active_view);
        let bus = Rc::clone(&self.document);
        self.document.listen(EventKind::PopState, move || {
            *view.borrow_mut() = classify(&window.location());
            bus.dispatch(EventKind::ViewChanged);
        });

        true
    }

    pub fn on_backlog_shown(&self, handler: impl FnMut() + 'static) -> SubscriptionId {
        self.document.listen(EventKind::BacklogShown, handler)
    }

    pub fn on_backlog_drawn(&self, handler: impl FnMut() + 'static) -> SubscriptionId {
        self.document.listen(EventKind::BacklogDrawn, handler)
    }

    pub fn on_backlog_updated(&self, handler: impl FnMut() + 'static) -> SubscriptionId {
        self.document.listen(EventKind::BacklogUpdated, handler)
    }

    pub fn on_active_sprints_updated(&self, handler: impl FnMut() + 'static) -> SubscriptionId {
        self.document.listen(EventKind::ActiveSprintsUpdated, handler)
    }

    pub fn on_pop_state(&self, handler: impl FnMut() + 'static) -> SubscriptionId {
        self.document.listen(EventKind::PopState, handler)
    }

    pub fn on_active_view_changed(&self, handler: impl FnMut() + 'static) -> SubscriptionId {
        self.document.listen(EventKind::ViewChanged, handler)
    }

    /// Last classification computed by the navigation bridge; `Unknown`
    /// until the first pop-state fires.
    pub fn active_view(&self) -> ActiveView {
        *self.active_view.borrow()
    }
}
