//! User-facing reports collected during event handling.
//!
//! Every failure in §7's taxonomy is non-fatal and surfaced exactly once;
//! the bus is drained by the view layer after each handled event.

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    StatesLoadFailed(String),
    DistrictsLoadFailed(String),
    MetricsLoadFailed(String),
    LocationDenied(String),
    LocationLookupFailed(String),
    LocationInvalid,
    LocationDetected {
        district_name: String,
        state_name: String,
    },
}

impl Notice {
    pub fn severity(&self) -> Severity {
        match self {
            Notice::StatesLoadFailed(_)
            | Notice::DistrictsLoadFailed(_)
            | Notice::MetricsLoadFailed(_)
            | Notice::LocationLookupFailed(_) => Severity::Error,
            Notice::LocationDenied(_) | Notice::LocationInvalid => Severity::Warning,
            Notice::LocationDetected { .. } => Severity::Info,
        }
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Notice::StatesLoadFailed(msg) => write!(f, "error loading states: {msg}"),
            Notice::DistrictsLoadFailed(msg) => write!(f, "error loading districts: {msg}"),
            Notice::MetricsLoadFailed(msg) => write!(f, "error loading employment data: {msg}"),
            Notice::LocationDenied(_) => write!(f, "please allow location access"),
            Notice::LocationLookupFailed(_) => write!(f, "location detection failed"),
            Notice::LocationInvalid => write!(f, "couldn't detect your district"),
            Notice::LocationDetected {
                district_name,
                state_name,
            } => write!(f, "detected: {district_name}, {state_name}"),
        }
    }
}

/// Collects notices during a transition; the consumer drains them afterwards.
#[derive(Debug, Default)]
pub struct NoticeBus {
    notices: Vec<Notice>,
}

impl NoticeBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn drain(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }
}
