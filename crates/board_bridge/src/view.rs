use std::fmt;

use serde::{Deserialize, Serialize};

/// Semantic category of the page the user is currently on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ActiveView {
    Backlog,
    Reports,
    #[serde(rename = "Active Sprints")]
    ActiveSprints,
    #[serde(rename = "Open Issue")]
    OpenIssue,
    #[default]
    Unknown,
}

impl ActiveView {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActiveView::Backlog => "Backlog",
            ActiveView::Reports => "Reports",
            ActiveView::ActiveSprints => "Active Sprints",
            ActiveView::OpenIssue => "Open Issue",
            ActiveView::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for ActiveView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies a raw location string into its view category.
///
/// Total over arbitrary input. `rapidView` gates the board family before
/// any `view=` sub-case is consulted, and `browse` is only consulted when
/// `rapidView` is absent entirely. Board URLs carrying an unrecognized
/// `view=` value stay `ActiveSprints`.
pub fn classify(url: &str) -> ActiveView {
    if url.contains("rapidView") {
        if url.contains("view=planning") {
            ActiveView::Backlog
        } else if url.contains("view=reporting") {
            ActiveView::Reports
        } else {
            ActiveView::ActiveSprints
        }
    } else if url.contains("browse") {
        ActiveView::OpenIssue
    } else {
        ActiveView::Unknown
    }
}
