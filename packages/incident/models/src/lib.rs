#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Canonical incident record types and the incident taxonomy.
//!
//! The incident service returns loosely-structured JSON where fields may be
//! missing, stringified, or malformed. Everything downstream of the
//! normalizer works with [`NormalizedIncident`], which guarantees every
//! field is present (coordinates may still be null or non-numeric text --
//! value validation is the proximity filter's job, not the record's).

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Severity level for an incident, as color-coded on the station dashboard.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum IncidentSeverity {
    /// Routine reports (lost property, minor disputes)
    Low,
    /// Reports needing follow-up within the day
    Medium,
    /// Reports needing immediate dispatch
    High,
}

/// The incident categories offered by the report screen.
///
/// Free-text `incidentType` values from older clients are classified into
/// this taxonomy by keyword matching; anything unrecognized falls back to
/// [`IncidentCategory::Other`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum IncidentCategory {
    /// Violence within a household or intimate relationship
    #[serde(rename = "Domestic Violence")]
    #[strum(serialize = "Domestic Violence")]
    DomesticViolence,
    /// Abuse or neglect of a minor
    #[serde(rename = "Child Abuse")]
    #[strum(serialize = "Child Abuse")]
    ChildAbuse,
    /// Unwanted sexual advances or conduct
    #[serde(rename = "Sexual Harassment")]
    #[strum(serialize = "Sexual Harassment")]
    SexualHarassment,
    /// Repeated unwanted surveillance or contact
    Stalking,
    /// Trafficking of persons
    #[serde(rename = "Human Trafficking")]
    #[strum(serialize = "Human Trafficking")]
    HumanTrafficking,
    /// Fire or explosion
    Fire,
    /// Theft of property
    Theft,
    /// Traffic or workplace accident
    Accident,
    /// Reported missing person
    #[serde(rename = "Missing Persons")]
    #[strum(serialize = "Missing Persons")]
    MissingPersons,
    /// Medical emergency requiring responders
    #[serde(rename = "Medical Emergency")]
    #[strum(serialize = "Medical Emergency")]
    MedicalEmergency,
    /// Reports that don't fit any other category
    Other,
}

impl IncidentCategory {
    /// Returns the default severity for this category.
    #[must_use]
    pub const fn default_severity(self) -> IncidentSeverity {
        match self {
            Self::DomesticViolence
            | Self::ChildAbuse
            | Self::HumanTrafficking
            | Self::Fire
            | Self::MedicalEmergency => IncidentSeverity::High,
            Self::SexualHarassment
            | Self::Stalking
            | Self::Theft
            | Self::Accident
            | Self::MissingPersons => IncidentSeverity::Medium,
            Self::Other => IncidentSeverity::Low,
        }
    }

    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::DomesticViolence,
            Self::ChildAbuse,
            Self::SexualHarassment,
            Self::Stalking,
            Self::HumanTrafficking,
            Self::Fire,
            Self::Theft,
            Self::Accident,
            Self::MissingPersons,
            Self::MedicalEmergency,
            Self::Other,
        ]
    }
}

/// A single latitude or longitude value as it appears on the wire.
///
/// The service sometimes emits coordinates as numbers, sometimes as
/// strings, and sometimes as null. The normalizer preserves whatever shape
/// arrived; [`CoordValue::as_f64`] is the one place a usable number is
/// extracted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum CoordValue {
    /// A plain JSON number.
    Number(f64),
    /// A stringified number (or garbage -- parsed lazily).
    Text(String),
    /// JSON null or an absent key.
    #[default]
    Null,
}

impl CoordValue {
    /// Extracts a finite numeric value, if one can be recovered.
    ///
    /// Returns `None` for null, non-numeric text, NaN, and infinities.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        let value = match self {
            Self::Number(n) => *n,
            Self::Text(s) => s.trim().parse::<f64>().ok()?,
            Self::Null => return None,
        };
        value.is_finite().then_some(value)
    }
}

/// Where an incident happened. Always present on a normalized record, even
/// when the source had no usable location (both fields null).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Location {
    /// Latitude in degrees (WGS84), in whatever shape the source sent.
    #[serde(default)]
    pub latitude: CoordValue,
    /// Longitude in degrees (WGS84), in whatever shape the source sent.
    #[serde(default)]
    pub longitude: CoordValue,
}

/// A comment left on an incident.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Comment {
    /// Server-assigned comment id.
    #[serde(default)]
    pub id: Option<i64>,
    /// The comment body.
    #[serde(default)]
    pub comment: String,
    /// Display name of the author.
    #[serde(default)]
    pub commented_by: Option<String>,
    /// When the comment was posted, as reported by the server.
    #[serde(default)]
    pub commented_at: Option<String>,
}

/// An incident record after normalization, safe for rendering and
/// filtering.
///
/// Every field is guaranteed present: missing source fields are replaced
/// with documented defaults rather than surfacing as errors. Wire field
/// names are mixed-case because the service is (`incidentType` is
/// camelCase while `reported_at` is snake_case).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedIncident {
    /// Unique id; synthesized (`temp-<uuid>`) when the source omitted one.
    pub id: String,
    /// Incident type label, `"Unknown"` when absent.
    #[serde(rename = "incidentType")]
    pub incident_type: String,
    /// Free-text description, `"No description provided"` when absent.
    pub description: String,
    /// Workflow status (`"submitted"`, `"Resolved"`, ...); defaults to
    /// `"submitted"`.
    pub status: String,
    /// When the incident was reported, RFC 3339; defaults to the time of
    /// normalization.
    pub reported_at: String,
    /// Station-assigned severity, when the server provided a recognized one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<IncidentSeverity>,
    /// Location object, always present (coordinates may be null).
    pub location: Location,
    /// Comments in server order, empty when absent.
    #[serde(default)]
    pub comments: Vec<Comment>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coord_value_extracts_numbers_and_numeric_text() {
        assert_eq!(CoordValue::Number(19.07).as_f64(), Some(19.07));
        assert_eq!(CoordValue::Text("72.87".to_string()).as_f64(), Some(72.87));
        assert_eq!(CoordValue::Text(" -12.5 ".to_string()).as_f64(), Some(-12.5));
    }

    #[test]
    fn coord_value_rejects_garbage() {
        assert_eq!(CoordValue::Null.as_f64(), None);
        assert_eq!(CoordValue::Text("abc".to_string()).as_f64(), None);
        assert_eq!(CoordValue::Number(f64::NAN).as_f64(), None);
        assert_eq!(CoordValue::Number(f64::INFINITY).as_f64(), None);
    }

    #[test]
    fn coord_value_serializes_null_as_json_null() {
        let location = Location::default();
        let json = serde_json::to_value(&location).unwrap();
        assert_eq!(json, serde_json::json!({ "latitude": null, "longitude": null }));
    }

    #[test]
    fn location_deserializes_mixed_shapes() {
        let location: Location =
            serde_json::from_value(serde_json::json!({ "latitude": "19.07", "longitude": 72.87 }))
                .unwrap();
        assert_eq!(location.latitude.as_f64(), Some(19.07));
        assert_eq!(location.longitude.as_f64(), Some(72.87));
    }

    #[test]
    fn category_display_matches_report_screen_labels() {
        assert_eq!(
            IncidentCategory::DomesticViolence.to_string(),
            "Domestic Violence"
        );
        assert_eq!(IncidentCategory::Fire.to_string(), "Fire");
        assert_eq!(
            "Missing Persons".parse::<IncidentCategory>().unwrap(),
            IncidentCategory::MissingPersons
        );
    }

    #[test]
    fn every_category_has_a_severity() {
        for category in IncidentCategory::all() {
            let severity = category.default_severity();
            assert!(matches!(
                severity,
                IncidentSeverity::Low | IncidentSeverity::Medium | IncidentSeverity::High
            ));
        }
    }

    #[test]
    fn severity_parses_dashboard_strings() {
        assert_eq!(
            "high".parse::<IncidentSeverity>().unwrap(),
            IncidentSeverity::High
        );
        assert_eq!(IncidentSeverity::Low.to_string(), "low");
    }
}
