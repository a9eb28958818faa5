use catalog::{District, DistrictSeq, Region};
use metrics::MetricsSnapshot;
use protocol::{ApiError, NearestRegion};

/// Monotonic tag for one metrics request.
///
/// Attached at dispatch time, checked at completion time; a response whose
/// tag is no longer the highest issued is discarded, so the visible snapshot
/// always belongs to the latest requested selection.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FetchSeq(pub u64);

/// A device geolocation fix.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Platform geolocation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationError {
    PermissionDenied,
    Unavailable(String),
}

impl std::fmt::Display for LocationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LocationError::PermissionDenied => write!(f, "location permission denied"),
            LocationError::Unavailable(msg) => write!(f, "location unavailable: {msg}"),
        }
    }
}

impl std::error::Error for LocationError {}

/// Everything the controller reacts to: manual UI actions and asynchronous
/// completions, delivered in whatever order they happen to land.
#[derive(Debug)]
pub enum Event {
    StatesLoaded(Result<Vec<Region>, ApiError>),
    StateSelected(String),
    DistrictSelected(String),
    DistrictsLoaded {
        seq: DistrictSeq,
        result: Result<Vec<District>, ApiError>,
    },
    LocationFix(Result<Coordinates, LocationError>),
    NearestResolved(Result<NearestRegion, ApiError>),
    MetricsLoaded {
        seq: FetchSeq,
        result: Result<MetricsSnapshot, ApiError>,
    },
}

/// Side effects the caller must run; each one completes as exactly one
/// [`Event`] fed back into the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    LoadStates,
    LoadDistricts {
        seq: DistrictSeq,
        state_id: String,
    },
    RequestLocationFix,
    LookupNearest {
        latitude: f64,
        longitude: f64,
    },
    FetchMetrics {
        seq: FetchSeq,
        state_id: String,
        district_name: String,
    },
}
