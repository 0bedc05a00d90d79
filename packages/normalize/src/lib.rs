#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Normalization of raw incident payloads into the canonical record format.
//!
//! The incident service returns records where any field may be missing,
//! stringified JSON, or outright garbage. [`normalize`] is the single choke
//! point that turns one of those records into a [`NormalizedIncident`] with
//! every field guaranteed present. It is total: malformed input produces
//! documented defaults, never an error, so one bad record can never keep
//! the rest of a dashboard from rendering.

pub mod type_mapping;

use chrono::Utc;
use incident_watch_incident_models::{Comment, CoordValue, Location, NormalizedIncident};
use serde_json::Value;
use uuid::Uuid;

/// Default incident type when the source omitted one.
pub const DEFAULT_INCIDENT_TYPE: &str = "Unknown";
/// Default description when the source omitted one.
pub const DEFAULT_DESCRIPTION: &str = "No description provided";
/// Default workflow status for fresh reports.
pub const DEFAULT_STATUS: &str = "submitted";

/// Normalizes a single raw incident record.
///
/// Pure and total: the input is never mutated and every possible JSON value
/// produces a fully-populated record. Defaults applied on missing or empty
/// fields:
///
/// * `id` -> a synthesized `temp-<uuid>` string (numeric ids are
///   stringified)
/// * `incidentType` -> `"Unknown"`
/// * `description` -> `"No description provided"`
/// * `status` -> `"submitted"`
/// * `reported_at` -> the current time, RFC 3339
/// * `location` -> `{latitude: null, longitude: null}`, including when the
///   field is a JSON-encoded string that fails to parse
/// * `comments` -> empty
///
/// Non-numeric coordinate *strings* inside a location object are carried
/// through unchanged; deciding whether they hold a usable number is the
/// proximity filter's job.
#[must_use]
pub fn normalize(raw: &Value) -> NormalizedIncident {
    NormalizedIncident {
        id: resolve_id(raw.get("id")),
        incident_type: non_empty_string(raw, "incidentType")
            .unwrap_or_else(|| DEFAULT_INCIDENT_TYPE.to_string()),
        description: non_empty_string(raw, "description")
            .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
        status: non_empty_string(raw, "status").unwrap_or_else(|| DEFAULT_STATUS.to_string()),
        reported_at: non_empty_string(raw, "reported_at")
            .unwrap_or_else(|| Utc::now().to_rfc3339()),
        severity: non_empty_string(raw, "severity").and_then(|s| s.parse().ok()),
        location: resolve_location(raw.get("location")),
        comments: resolve_comments(raw.get("comments")),
    }
}

/// Normalizes every record in a slice, preserving order.
#[must_use]
pub fn normalize_all(raw: &[Value]) -> Vec<NormalizedIncident> {
    let incidents: Vec<NormalizedIncident> = raw.iter().map(normalize).collect();
    log::info!("Normalized {} incident records", incidents.len());
    incidents
}

/// Normalizes a whole response payload.
///
/// Accepts either a bare JSON array of records or the
/// `{"incidents": [...]}` envelope some endpoints use. Anything else is
/// treated as an empty collection.
#[must_use]
pub fn normalize_payload(payload: &Value) -> Vec<NormalizedIncident> {
    let records = payload
        .as_array()
        .or_else(|| payload.get("incidents").and_then(Value::as_array));

    match records {
        Some(records) => normalize_all(records),
        None => {
            log::warn!("Unexpected incident payload shape; treating as empty");
            Vec::new()
        }
    }
}

/// Resolves the record id, synthesizing one when the source id is missing
/// or falsy. Synthesized ids only need to be unique within the session --
/// the set is replaced wholesale on every fetch.
fn resolve_id(id: Option<&Value>) -> String {
    match id {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => format!("temp-{}", Uuid::new_v4()),
    }
}

fn non_empty_string(raw: &Value, key: &str) -> Option<String> {
    raw.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
}

/// Recovers a location object from whatever shape arrived.
///
/// Strings are parsed as embedded JSON (some clients double-encode the
/// location); parse failures fall back to the null location rather than
/// propagating.
fn resolve_location(location: Option<&Value>) -> Location {
    match location {
        Some(Value::Object(fields)) => Location {
            latitude: coord_value(fields.get("latitude")),
            longitude: coord_value(fields.get("longitude")),
        },
        Some(Value::String(encoded)) => match serde_json::from_str::<Value>(encoded) {
            Ok(decoded) => resolve_location(Some(&decoded)),
            Err(err) => {
                log::warn!("Discarding unparseable location string: {err}");
                Location::default()
            }
        },
        _ => Location::default(),
    }
}

fn coord_value(value: Option<&Value>) -> CoordValue {
    match value {
        Some(Value::Number(n)) => n.as_f64().map_or(CoordValue::Null, CoordValue::Number),
        Some(Value::String(s)) => CoordValue::Text(s.clone()),
        _ => CoordValue::Null,
    }
}

fn resolve_comments(comments: Option<&Value>) -> Vec<Comment> {
    let Some(entries) = comments.and_then(Value::as_array) else {
        return Vec::new();
    };

    entries
        .iter()
        .filter_map(|entry| match serde_json::from_value(entry.clone()) {
            Ok(comment) => Some(comment),
            Err(err) => {
                log::warn!("Dropping malformed comment: {err}");
                None
            }
        })
        .collect()
}
