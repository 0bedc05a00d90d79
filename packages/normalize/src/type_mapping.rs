//! Incident type classification.
//!
//! Older clients and the free-text "Other" flow produce arbitrary
//! `incidentType` strings, so dashboards classify them into the canonical
//! [`IncidentCategory`] taxonomy with keyword matching. Exact report-screen
//! labels short-circuit straight to their category.

use incident_watch_incident_models::IncidentCategory;

/// Maps a raw incident type string to the canonical category.
///
/// Case-insensitive keyword matching; returns [`IncidentCategory::Other`]
/// when nothing matches.
#[must_use]
pub fn map_incident_type(raw: &str) -> IncidentCategory {
    if let Ok(category) = raw.trim().parse::<IncidentCategory>() {
        return category;
    }

    let lower = raw.to_lowercase();

    if lower.contains("traffick") {
        return IncidentCategory::HumanTrafficking;
    }
    if contains_any(&lower, &["child abuse", "child neglect", "abuse of a minor"]) {
        return IncidentCategory::ChildAbuse;
    }
    if lower.contains("domestic") {
        return IncidentCategory::DomesticViolence;
    }
    if contains_any(&lower, &["sexual harassment", "harassment", "molestation"]) {
        return IncidentCategory::SexualHarassment;
    }
    if lower.contains("stalk") {
        return IncidentCategory::Stalking;
    }
    if contains_any(&lower, &["fire", "blaze", "explosion"]) {
        return IncidentCategory::Fire;
    }
    if contains_any(
        &lower,
        &["theft", "robbery", "burglary", "stolen", "snatching", "pickpocket"],
    ) {
        return IncidentCategory::Theft;
    }
    if contains_any(&lower, &["accident", "crash", "collision"]) {
        return IncidentCategory::Accident;
    }
    if lower.contains("missing") {
        return IncidentCategory::MissingPersons;
    }
    if contains_any(
        &lower,
        &["medical", "ambulance", "unconscious", "heart attack", "injury"],
    ) {
        return IncidentCategory::MedicalEmergency;
    }

    IncidentCategory::Other
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_report_screen_labels_map_directly() {
        assert_eq!(
            map_incident_type("Domestic Violence"),
            IncidentCategory::DomesticViolence
        );
        assert_eq!(map_incident_type("Fire"), IncidentCategory::Fire);
        assert_eq!(
            map_incident_type("Medical Emergency"),
            IncidentCategory::MedicalEmergency
        );
    }

    #[test]
    fn keywords_classify_free_text() {
        assert_eq!(
            map_incident_type("bike stolen near market"),
            IncidentCategory::Theft
        );
        assert_eq!(
            map_incident_type("two-car CRASH on the highway"),
            IncidentCategory::Accident
        );
        assert_eq!(
            map_incident_type("warehouse blaze"),
            IncidentCategory::Fire
        );
        assert_eq!(
            map_incident_type("human trafficking ring"),
            IncidentCategory::HumanTrafficking
        );
    }

    #[test]
    fn unknown_text_falls_back_to_other() {
        assert_eq!(map_incident_type("Unknown"), IncidentCategory::Other);
        assert_eq!(map_incident_type(""), IncidentCategory::Other);
        assert_eq!(map_incident_type("loud music"), IncidentCategory::Other);
    }
}
