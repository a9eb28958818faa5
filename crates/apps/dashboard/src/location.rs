//! Platform geolocation capability.
//!
//! A terminal client has no browser geolocation API, so the capability is a
//! trait: coordinates supplied on the command line act as a granted fix, and
//! the absence of configuration acts as a denial. The one-prompt-per-session
//! rule lives in the controller's resolver, not here.

use controller::{Coordinates, LocationError};

use crate::transport::BoxFuture;

pub trait LocationProvider: Send + Sync {
    fn current_position(&self) -> BoxFuture<'_, Result<Coordinates, LocationError>>;
}

/// Fix from explicitly configured coordinates.
pub struct FixedLocation {
    pub coordinates: Coordinates,
}

impl LocationProvider for FixedLocation {
    fn current_position(&self) -> BoxFuture<'_, Result<Coordinates, LocationError>> {
        let coordinates = self.coordinates;
        Box::pin(async move { Ok(coordinates) })
    }
}

/// No location configured; behaves like a refused permission prompt.
pub struct DeniedLocation;

impl LocationProvider for DeniedLocation {
    fn current_position(&self) -> BoxFuture<'_, Result<Coordinates, LocationError>> {
        Box::pin(async move { Err(LocationError::PermissionDenied) })
    }
}
