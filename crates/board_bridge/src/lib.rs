//! Event bridge between the agile-board host application and page-level
//! subscribers.
//!
//! The bridge wraps a fixed set of host controller methods so every call,
//! host-internal or user-driven, republishes a named event on the
//! document-level bus, and it watches history navigation to keep a derived
//! "active view" classification current. Everything runs synchronously on
//! the dispatching call; there is no I/O and no locking.

pub mod bus;
pub mod events;
pub mod hooks;
pub mod manager;
pub mod view;
pub mod window;

pub use bus::{DocumentBus, SubscriptionId};
pub use events::EventKind;
pub use manager::{EventManager, HOST_HOOKS};
pub use view::{classify, ActiveView};
pub use window::Window;
