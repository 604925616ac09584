//! Multi-day fan-out over the day normalizer.

use crate::config::NormalizeOptions;
use crate::schedule::models::{DayPlan, NormalizedPlan, PlanMeta};
use crate::schedule::normalizer::normalize_day_activities;
use tracing::info;

/// Normalize every day of a plan independently.
///
/// Replaces each day's activities with their normalized form and counts how
/// many days needed repairs and how many notes were produced in total. Days
/// share no state, so the order they are processed in does not matter.
pub fn normalize_plan_days(days: &[DayPlan], options: &NormalizeOptions) -> NormalizedPlan {
    let mut adjusted_days = 0;
    let mut total_notes = 0;
    let mut normalized = Vec::with_capacity(days.len());

    for day in days {
        let result = normalize_day_activities(&day.activities, options);
        if result.adjusted {
            adjusted_days += 1;
            info!(
                day = day.day,
                notes = result.notes.len(),
                "day schedule was adjusted during normalization"
            );
        }
        total_notes += result.notes.len();
        normalized.push(DayPlan {
            day: day.day,
            theme: day.theme.clone(),
            objective: day.objective.clone(),
            activities: result.activities,
        });
    }

    NormalizedPlan {
        days: normalized,
        meta: PlanMeta {
            adjusted_days,
            total_notes,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::models::Activity;

    #[test]
    fn test_fan_out_counts() {
        let days = vec![
            DayPlan {
                day: 1,
                theme: "Build".to_string(),
                objective: "Make things".to_string(),
                activities: vec![Activity {
                    title: "Morning session".to_string(),
                    duration: "8 h".to_string(),
                    ..Activity::default()
                }],
            },
            DayPlan {
                day: 2,
                theme: "Ship".to_string(),
                objective: "Finish things".to_string(),
                activities: vec![Activity {
                    title: "Short session".to_string(),
                    duration: "30 min".to_string(),
                    ..Activity::default()
                }],
            },
        ];

        let result = normalize_plan_days(&days, &NormalizeOptions::default());
        assert_eq!(result.days.len(), 2);
        // Day 1 already fills the window, day 2 needs a filler block
        assert_eq!(result.meta.adjusted_days, 1);
        assert_eq!(result.meta.total_notes, 1);
        assert_eq!(result.days[0].activities.len(), 1);
        assert_eq!(result.days[1].activities.len(), 2);
        // Day metadata is carried through untouched
        assert_eq!(result.days[1].theme, "Ship");
        assert_eq!(result.days[1].objective, "Finish things");
    }
}
