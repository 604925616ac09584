use serde::{Deserialize, Serialize};

/// Energy level of an activity
///
/// Generator output occasionally invents values here; anything unknown
/// deserializes as `Medium` instead of failing the whole plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum EnergyLevel {
    Low,
    #[default]
    Medium,
    High,
}

impl From<String> for EnergyLevel {
    fn from(value: String) -> Self {
        match value.trim().to_lowercase().as_str() {
            "low" => Self::Low,
            "high" => Self::High,
            _ => Self::Medium,
        }
    }
}

/// One scheduled block within a workshop day
///
/// Field names follow the platform's generator JSON (camelCase). Every
/// field has a default so partial or garbled generator output still
/// deserializes; the normalizer repairs whatever is missing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Activity {
    /// Start time label (HH:MM, zero-padded once normalized)
    pub time: String,
    /// Duration label, canonically "<minutes> min" or "<hours> h"
    pub duration: String,
    /// Activity title, opaque to the normalizer
    pub title: String,
    /// Longer description, opaque to the normalizer
    pub description: String,
    /// Materials needed for the activity
    pub materials: Vec<String>,
    /// Optional step-by-step instructions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<String>>,
    /// Notes for the facilitator running the block
    pub facilitator_notes: Vec<String>,
    /// How demanding the block is for participants
    pub energy_level: EnergyLevel,
}

/// One day of a multi-day workshop plan
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DayPlan {
    /// 1-based day number within the workshop
    pub day: u32,
    /// Theme for the day
    pub theme: String,
    /// What the day should accomplish
    pub objective: String,
    /// The day's activities, in order
    pub activities: Vec<Activity>,
}

/// Result of normalizing one day's activities
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedDay {
    /// Corrected activities, contiguous and exactly filling the window
    pub activities: Vec<Activity>,
    /// Length of the day window in minutes
    pub total_minutes: u32,
    /// Human-readable descriptions of every repair that was made
    pub notes: Vec<String>,
    /// Whether any repair was made at all
    pub adjusted: bool,
}

/// Aggregate counters from normalizing a whole plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanMeta {
    /// How many days needed at least one repair
    pub adjusted_days: usize,
    /// Total repair notes across all days
    pub total_notes: usize,
}

/// A whole plan after normalization, with per-plan counters
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedPlan {
    pub days: Vec<DayPlan>,
    pub meta: PlanMeta,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_generator_json_deserializes() {
        let json = r#"{
            "day": 1,
            "theme": "Getting started",
            "activities": [
                { "title": "Kickoff", "duration": "1h" },
                { "title": "Sprint", "energyLevel": "high" }
            ]
        }"#;

        let plan: DayPlan = serde_json::from_str(json).unwrap();
        assert_eq!(plan.day, 1);
        assert_eq!(plan.objective, "");
        assert_eq!(plan.activities.len(), 2);
        assert_eq!(plan.activities[0].duration, "1h");
        assert_eq!(plan.activities[0].energy_level, EnergyLevel::Medium);
        assert_eq!(plan.activities[1].energy_level, EnergyLevel::High);
        assert!(plan.activities[1].steps.is_none());
    }

    #[test]
    fn test_unknown_energy_level_defaults_to_medium() {
        let json = r#"{ "title": "Odd", "energyLevel": "cosmic" }"#;
        let activity: Activity = serde_json::from_str(json).unwrap();
        assert_eq!(activity.energy_level, EnergyLevel::Medium);
    }

    #[test]
    fn test_activity_serializes_camel_case() {
        let activity = Activity {
            facilitator_notes: vec!["note".to_string()],
            energy_level: EnergyLevel::Low,
            ..Activity::default()
        };
        let json = serde_json::to_string(&activity).unwrap();
        assert!(json.contains("\"facilitatorNotes\""));
        assert!(json.contains("\"energyLevel\":\"low\""));
        // steps is None and should be omitted entirely
        assert!(!json.contains("steps"));
    }
}
