//! Capability probe: whether the running host version exposes the surface
//! the bridge wraps.

use crate::HostApp;

/// Whether the host object is present in the page at all.
pub fn is_host_available(host: Option<&HostApp>) -> bool {
    host.is_some()
}

/// Whether the host exposes every method the bridge wraps. A host that
/// fails this check is a different (or newer) version than the bridge
/// understands.
pub fn is_host_compatible(host: &HostApp) -> bool {
    host.plan_controller.show.is_some()
        && host.backlog_view.draw.is_some()
        && host.plan_drag_and_drop.enable_drag_and_drop.is_some()
        && host.work_controller.set_pool_data.is_some()
}

/// Installation precondition: host present and shape-compatible.
pub fn is_bridge_supported(host: Option<&HostApp>) -> bool {
    match host {
        Some(host) => is_host_compatible(host),
        None => false,
    }
}
