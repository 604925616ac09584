//! Built-in default day plans, used when no generated content exists.
//!
//! Each day's activities already fill the default 09:00–17:00 window
//! exactly, so normalizing a template is a no-op.

use crate::schedule::models::{Activity, DayPlan, EnergyLevel};

fn block(
    time: &str,
    duration: &str,
    title: &str,
    description: &str,
    energy_level: EnergyLevel,
) -> Activity {
    Activity {
        time: time.to_string(),
        duration: duration.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        materials: Vec::new(),
        steps: None,
        facilitator_notes: Vec::new(),
        energy_level,
    }
}

/// The stock two-day workshop plan.
pub fn default_plan() -> Vec<DayPlan> {
    vec![
        DayPlan {
            day: 1,
            theme: "Explore & Prototype".to_string(),
            objective: "Form teams, frame the challenge, and get a first prototype standing"
                .to_string(),
            activities: vec![
                block(
                    "09:00",
                    "45 min",
                    "Welcome & Icebreakers",
                    "Arrivals, introductions, and a short warm-up game.",
                    EnergyLevel::High,
                ),
                block(
                    "09:45",
                    "1 h",
                    "Framing the Challenge",
                    "Present the workshop theme and constraints; open Q&A.",
                    EnergyLevel::Medium,
                ),
                block(
                    "10:45",
                    "45 min",
                    "Team Formation",
                    "Pitch rough ideas and self-organize into teams.",
                    EnergyLevel::High,
                ),
                block(
                    "11:30",
                    "1 h",
                    "Idea Sprint",
                    "Teams sketch approaches and pick one to pursue.",
                    EnergyLevel::High,
                ),
                block(
                    "12:30",
                    "1 h",
                    "Lunch",
                    "Shared lunch; informal cross-team chatter encouraged.",
                    EnergyLevel::Low,
                ),
                block(
                    "13:30",
                    "2 h",
                    "Prototype Session I",
                    "Heads-down building; facilitators float between teams.",
                    EnergyLevel::Medium,
                ),
                block(
                    "15:30",
                    "30 min",
                    "Coffee & Stretch",
                    "Screens down, coffee up.",
                    EnergyLevel::Low,
                ),
                block(
                    "16:00",
                    "1 h",
                    "Daily Wrap-up & Demos",
                    "Each team shows where they got to and names one blocker.",
                    EnergyLevel::Medium,
                ),
            ],
        },
        DayPlan {
            day: 2,
            theme: "Polish & Present".to_string(),
            objective: "Finish the prototypes and present them to the whole group".to_string(),
            activities: vec![
                block(
                    "09:00",
                    "30 min",
                    "Morning Check-in",
                    "Quick round: plan for the day and any overnight thoughts.",
                    EnergyLevel::Medium,
                ),
                block(
                    "09:30",
                    "2 h",
                    "Prototype Session II",
                    "Continue building with yesterday's blockers prioritized.",
                    EnergyLevel::Medium,
                ),
                block(
                    "11:30",
                    "1 h",
                    "Peer Feedback Rounds",
                    "Teams pair up and exchange structured feedback.",
                    EnergyLevel::High,
                ),
                block(
                    "12:30",
                    "1 h",
                    "Lunch",
                    "Shared lunch.",
                    EnergyLevel::Low,
                ),
                block(
                    "13:30",
                    "90 min",
                    "Final Polish",
                    "Act on the feedback; freeze scope for the demo.",
                    EnergyLevel::Medium,
                ),
                block(
                    "15:00",
                    "45 min",
                    "Pitch Preparation",
                    "Each team prepares a five-minute presentation.",
                    EnergyLevel::Medium,
                ),
                block(
                    "15:45",
                    "1 h",
                    "Final Presentations",
                    "Teams present; audience votes on favourites.",
                    EnergyLevel::High,
                ),
                block(
                    "16:45",
                    "15 min",
                    "Closing & Next Steps",
                    "Thanks, photos, and how to stay involved.",
                    EnergyLevel::Low,
                ),
            ],
        },
    ]
}
