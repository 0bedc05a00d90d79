#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Great-circle distance and proximity filtering over normalized incidents.
//!
//! Backs both the "nearby incidents" view (device location + fixed radius)
//! and the map-tap flow (user-picked point + adjustable radius). Both flows
//! share the single [`haversine_km`] implementation so the two call sites
//! can never drift apart.
//!
//! The filter is a stateless pure transform: it is re-run from scratch on
//! every location refresh, map tap, or radius change, and a record with
//! unusable coordinates is simply excluded rather than failing the batch.

use incident_watch_incident_models::NormalizedIncident;

/// Mean Earth radius in kilometers, as used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A validated point on the globe, in degrees (WGS84).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    /// Latitude in degrees, expected within [-90, 90].
    pub latitude: f64,
    /// Longitude in degrees, expected within [-180, 180].
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a coordinate without validating it; see [`Self::is_valid`].
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Whether both components are finite and within WGS84 degree ranges.
    #[must_use]
    pub fn is_valid(self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// Great-circle distance between two points in kilometers, via the
/// haversine formula. Adequate at city/country scale; sub-meter accuracy
/// is not a goal.
#[must_use]
pub fn haversine_km(from: Coordinate, to: Coordinate) -> f64 {
    let d_lat = (to.latitude - from.latitude).to_radians();
    let d_lng = (to.longitude - from.longitude).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + from.latitude.to_radians().cos()
            * to.latitude.to_radians().cos()
            * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Extracts a usable coordinate from a normalized incident.
///
/// Returns `None` when either component is null, non-numeric text,
/// non-finite, or outside WGS84 degree ranges. Corrupt upstream data lands
/// here as an exclusion, never an error.
#[must_use]
pub fn incident_coordinate(incident: &NormalizedIncident) -> Option<Coordinate> {
    let latitude = incident.location.latitude.as_f64()?;
    let longitude = incident.location.longitude.as_f64()?;

    let coordinate = Coordinate::new(latitude, longitude);
    coordinate.is_valid().then_some(coordinate)
}

/// Returns the incidents within `radius_km` of `center`, preserving input
/// order.
///
/// The boundary is inclusive: an incident exactly `radius_km` away is
/// kept. Incidents without a usable coordinate (see
/// [`incident_coordinate`]) are excluded, so one corrupt record never
/// aborts filtering the rest.
#[must_use]
pub fn filter_by_proximity<'a>(
    center: Coordinate,
    radius_km: f64,
    incidents: &'a [NormalizedIncident],
) -> Vec<&'a NormalizedIncident> {
    let nearby: Vec<&NormalizedIncident> = incidents
        .iter()
        .filter(|incident| {
            incident_coordinate(incident)
                .is_some_and(|coordinate| haversine_km(center, coordinate) <= radius_km)
        })
        .collect();

    log::debug!(
        "Proximity filter kept {} of {} incidents within {radius_km} km",
        nearby.len(),
        incidents.len()
    );

    nearby
}
