//! In-process surface of the agile-board host application.
//!
//! The host is owned by the embedding page, not by this workspace: its
//! controllers may be missing entirely, and any individual method slot may
//! be absent. The bridge only resolves slots by accessor path and replaces
//! them; it never authors host behavior.

use serde_json::Value;

pub mod compat;
pub mod error;

pub use error::HostCallError;

/// A callable slot on the host object. Arguments and return values are the
/// host's own opaque payloads.
pub type HostFn = Box<dyn FnMut(Value) -> Result<Value, HostCallError>>;

/// `None` models a method the running host version does not provide.
pub type MethodSlot = Option<HostFn>;

#[derive(Default)]
pub struct PlanController {
    pub show: MethodSlot,
}

#[derive(Default)]
pub struct BacklogView {
    pub draw: MethodSlot,
}

#[derive(Default)]
pub struct PlanDragAndDrop {
    pub enable_drag_and_drop: MethodSlot,
}

#[derive(Default)]
pub struct WorkController {
    pub set_pool_data: MethodSlot,
}

/// Root of the host application surface.
#[derive(Default)]
pub struct HostApp {
    pub plan_controller: PlanController,
    pub backlog_view: BacklogView,
    pub plan_drag_and_drop: PlanDragAndDrop,
    pub work_controller: WorkController,
}

impl HostApp {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves a nested accessor path to its method slot. Unknown paths
    /// resolve to `None`, the same as a missing object level on the live
    /// host.
    pub fn method_slot_mut(&mut self, path: &[&str]) -> Option<&mut MethodSlot> {
        match path {
            ["plan_controller", "show"] => Some(&mut self.plan_controller.show),
            ["backlog_view", "draw"] => Some(&mut self.backlog_view.draw),
            ["plan_drag_and_drop", "enable_drag_and_drop"] => {
                Some(&mut self.plan_drag_and_drop.enable_drag_and_drop)
            }
            ["work_controller", "set_pool_data"] => Some(&mut self.work_controller.set_pool_data),
            _ => None,
        }
    }

    /// Calls a host method the way the host itself would: whatever wrapper
    /// currently occupies the slot runs, and its result or error is returned
    /// unchanged.
    pub fn invoke(&mut self, path: &[&str], args: Value) -> Result<Value, HostCallError> {
        let method = self
            .method_slot_mut(path)
            .and_then(|slot| slot.as_mut())
            .ok_or_else(|| HostCallError::MissingMethod {
                path: path.join("."),
            })?;
        method(args)
    }
}
