use std::fmt;

use serde::{Deserialize, Serialize};

/// Every event the bridge republishes on the document-level bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventKind {
    BacklogShown,
    BacklogDrawn,
    BacklogUpdated,
    ActiveSprintsUpdated,
    PopState,
    ViewChanged,
}

impl EventKind {
    /// Published name of the event.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::BacklogShown => "backlog-shown",
            EventKind::BacklogDrawn => "backlog-drawn",
            EventKind::BacklogUpdated => "backlog-updated",
            EventKind::ActiveSprintsUpdated => "active-sprints-updated",
            EventKind::PopState => "pop-state",
            EventKind::ViewChanged => "view-changed",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
