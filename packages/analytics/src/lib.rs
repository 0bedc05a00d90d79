#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Dashboard summaries and list filters over normalized incidents.
//!
//! Pure functions backing the station dashboard: headline counts, status
//! and severity filters, and per-category tallies. All of them take the
//! canonical in-memory incident set and return a view over it; nothing
//! here mutates or stores state.

use std::collections::BTreeMap;

use incident_watch_incident_models::{IncidentCategory, IncidentSeverity, NormalizedIncident};
use incident_watch_normalize::type_mapping::map_incident_type;
use serde::Serialize;

/// Status value the dashboard treats as resolved. Capitalized by the
/// service, unlike the lowercase `"submitted"` it assigns to new reports.
pub const STATUS_RESOLVED: &str = "Resolved";
/// Status value for reports nobody has picked up yet.
pub const STATUS_SUBMITTED: &str = "submitted";

/// Headline counts shown at the top of the station dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    /// All incidents in the set.
    pub total: usize,
    /// Incidents with status `"Resolved"`.
    pub resolved: usize,
    /// Everything that isn't resolved.
    pub unresolved: usize,
    /// Incidents still in status `"submitted"`.
    pub new_reports: usize,
}

/// Computes the dashboard headline counts.
#[must_use]
pub fn summarize(incidents: &[NormalizedIncident]) -> DashboardSummary {
    let resolved = incidents
        .iter()
        .filter(|incident| incident.status == STATUS_RESOLVED)
        .count();
    let new_reports = incidents
        .iter()
        .filter(|incident| incident.status == STATUS_SUBMITTED)
        .count();

    DashboardSummary {
        total: incidents.len(),
        resolved,
        unresolved: incidents.len() - resolved,
        new_reports,
    }
}

/// Incidents with the given workflow status, preserving input order.
#[must_use]
pub fn filter_by_status<'a>(
    status: &str,
    incidents: &'a [NormalizedIncident],
) -> Vec<&'a NormalizedIncident> {
    incidents
        .iter()
        .filter(|incident| incident.status == status)
        .collect()
}

/// Incidents being worked on: neither freshly submitted nor resolved.
#[must_use]
pub fn in_progress(incidents: &[NormalizedIncident]) -> Vec<&NormalizedIncident> {
    incidents
        .iter()
        .filter(|incident| {
            incident.status != STATUS_SUBMITTED && incident.status != STATUS_RESOLVED
        })
        .collect()
}

/// Incidents carrying the given severity, preserving input order.
///
/// Incidents the server never assigned a severity are never matched.
#[must_use]
pub fn filter_by_severity(
    severity: IncidentSeverity,
    incidents: &[NormalizedIncident],
) -> Vec<&NormalizedIncident> {
    incidents
        .iter()
        .filter(|incident| incident.severity == Some(severity))
        .collect()
}

/// Tally of incidents per canonical category, classifying each record's
/// free-text type label.
#[must_use]
pub fn counts_by_category(incidents: &[NormalizedIncident]) -> BTreeMap<IncidentCategory, usize> {
    let mut counts = BTreeMap::new();
    for incident in incidents {
        *counts
            .entry(map_incident_type(&incident.incident_type))
            .or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use incident_watch_incident_models::Location;

    use super::*;

    fn incident(id: &str, status: &str, severity: Option<IncidentSeverity>) -> NormalizedIncident {
        NormalizedIncident {
            id: id.to_string(),
            incident_type: "Theft".to_string(),
            description: "No description provided".to_string(),
            status: status.to_string(),
            reported_at: "2024-05-01T10:30:00Z".to_string(),
            severity,
            location: Location::default(),
            comments: Vec::new(),
        }
    }

    #[test]
    fn summary_counts_match_dashboard_semantics() {
        let incidents = vec![
            incident("a", "submitted", None),
            incident("b", "Resolved", Some(IncidentSeverity::High)),
            incident("c", "in review", Some(IncidentSeverity::Low)),
            incident("d", "submitted", None),
        ];

        let summary = summarize(&incidents);

        assert_eq!(summary.total, 4);
        assert_eq!(summary.resolved, 1);
        assert_eq!(summary.unresolved, 3);
        assert_eq!(summary.new_reports, 2);
    }

    #[test]
    fn status_comparison_is_case_sensitive_like_the_dashboard() {
        let incidents = vec![incident("a", "resolved", None)];

        // The service capitalizes "Resolved"; a lowercase variant is some
        // other status as far as the dashboard is concerned.
        assert_eq!(summarize(&incidents).resolved, 0);
        assert_eq!(summarize(&incidents).unresolved, 1);
    }

    #[test]
    fn in_progress_excludes_submitted_and_resolved() {
        let incidents = vec![
            incident("a", "submitted", None),
            incident("b", "dispatched", None),
            incident("c", "Resolved", None),
        ];

        let active = in_progress(&incidents);

        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, "b");
    }

    #[test]
    fn severity_filter_skips_unassigned() {
        let incidents = vec![
            incident("a", "submitted", Some(IncidentSeverity::High)),
            incident("b", "submitted", None),
            incident("c", "submitted", Some(IncidentSeverity::Low)),
        ];

        let high = filter_by_severity(IncidentSeverity::High, &incidents);

        assert_eq!(high.len(), 1);
        assert_eq!(high[0].id, "a");
    }

    #[test]
    fn category_counts_classify_free_text_types() {
        let mut incidents = vec![
            incident("a", "submitted", None),
            incident("b", "submitted", None),
        ];
        incidents[1].incident_type = "warehouse blaze downtown".to_string();

        let counts = counts_by_category(&incidents);

        assert_eq!(counts.get(&IncidentCategory::Theft), Some(&1));
        assert_eq!(counts.get(&IncidentCategory::Fire), Some(&1));
    }
}
