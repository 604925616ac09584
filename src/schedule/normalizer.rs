//! The day normalizer: turns a loosely-specified activity list into a
//! contiguous timetable that exactly fills the configured day window.
//!
//! Input comes from generator output or hand-edited forms and may carry
//! missing, zero, or nonsensical duration labels. Nothing here fails:
//! every malformed field has a defined repair, and every repair is
//! surfaced to the caller through the `notes` list.

use crate::config::NormalizeOptions;
use crate::schedule::duration::{format_duration, parse_duration_minutes};
use crate::schedule::models::{Activity, EnergyLevel, NormalizedDay};
use crate::schedule::time::{format_minutes, parse_time_minutes};
use tracing::debug;

/// Duration substituted when an activity's label cannot be parsed
const FALLBACK_DURATION_MINUTES: u32 = 15;

/// Hard floor for force-trimmed blocks. The exact-total invariant may push
/// the last block below the configured minimum, but never below this.
const FORCED_FLOOR_MINUTES: u32 = 1;

/// Cap applied to parsed durations during sanitation. A single block can
/// never usefully exceed one day; anything above always overruns the
/// window, so the trim pass reports the adjustment.
const MAX_BLOCK_MINUTES: u32 = 24 * 60;

/// Window length used when the configured end time does not fall after the
/// start time
const DEFAULT_WINDOW_MINUTES: u32 = 480;

/// Normalize one day's activities against the configured window.
///
/// The result is always contiguous from `start_time`, sums to the window
/// length exactly (save for the degenerate case where even one-minute
/// blocks overrun the window), and never mutates the input. `adjusted` is
/// true whenever any repair note was recorded; re-running the normalizer
/// on its own output yields the same activities with `adjusted == false`.
pub fn normalize_day_activities(
    activities: &[Activity],
    options: &NormalizeOptions,
) -> NormalizedDay {
    let start = parse_time_minutes(&options.start_time);
    let mut end = parse_time_minutes(&options.end_time);
    if end <= start {
        end = start + DEFAULT_WINDOW_MINUTES;
    }
    let window = end - start;

    let mut notes: Vec<String> = Vec::new();

    // Step 1: sanitize durations
    let mut blocks = sanitize_durations(activities, options, &mut notes);

    // Step 2: sequential placement from the window start
    reflow(&mut blocks, start);

    // Step 3: reconcile the schedule against the window
    let total = total_minutes(&blocks);
    if total < window {
        let gap = window - total;
        debug!(gap, "schedule underruns the window, adding filler block");
        let filler = make_filler(blocks.last().map(|(a, _)| a), &options.filler_title, gap);
        blocks.push((filler, gap));
        notes.push(format!(
            "Added a {} min \"{}\" block to fill the day through {}",
            gap,
            options.filler_title,
            format_minutes(end)
        ));
        reflow(&mut blocks, start);
    } else if total > window {
        let trimmed = trim_overrun(&mut blocks, total - window, options.min_block_minutes);
        debug!(overrun = total - window, trimmed, "schedule overruns the window, trimmed from the end");
        notes.push(format!(
            "Trimmed {} min from the end of the schedule to fit the {} min day",
            trimmed, window
        ));
        reflow(&mut blocks, start);
    }

    // Step 4: make sure the last block ends exactly at the window end
    let total = total_minutes(&blocks);
    if start.saturating_add(total) != end {
        if let Some(last) = blocks.last_mut() {
            let floor = options.min_block_minutes.min(last.1);
            let target = (end as i64 - start as i64 - total as i64 + last.1 as i64)
                .max(floor as i64) as u32;
            if target != last.1 {
                notes.push(format!(
                    "Adjusted \"{}\" from {} min to {} min so the day ends at {}",
                    last.0.title,
                    last.1,
                    target,
                    format_minutes(end)
                ));
                last.1 = target;
                reflow(&mut blocks, start);
            }
        }
    }

    // Step 5: final total guard. Only pathological all-at-minimum inputs
    // reach this; the exact total wins over the minimum block size here.
    let total = total_minutes(&blocks);
    if total != window {
        if let Some(last) = blocks.last_mut() {
            let target = (window as i64 - total as i64 + last.1 as i64)
                .max(FORCED_FLOOR_MINUTES as i64) as u32;
            if target != last.1 {
                last.1 = target;
                reflow(&mut blocks, start);
            }
            notes.push("Final alignment applied to the last block to match the day window".to_string());
        }
    }

    let adjusted = !notes.is_empty();
    if adjusted {
        debug!(notes = notes.len(), "day schedule required adjustments");
    }

    NormalizedDay {
        activities: blocks.into_iter().map(|(activity, _)| activity).collect(),
        total_minutes: window,
        notes,
        adjusted,
    }
}

/// Parse and repair every activity's duration, collecting repair notes.
/// Every returned figure is at least `min_block_minutes`.
fn sanitize_durations(
    activities: &[Activity],
    options: &NormalizeOptions,
    notes: &mut Vec<String>,
) -> Vec<(Activity, u32)> {
    let mut blocks = Vec::with_capacity(activities.len() + 1);
    for activity in activities {
        let mut minutes = match parse_duration_minutes(&activity.duration) {
            Some(minutes) if minutes > 0 => minutes,
            _ => {
                debug!(
                    title = %activity.title,
                    duration = %activity.duration,
                    "unparseable duration, substituting default"
                );
                notes.push(format!(
                    "\"{}\": duration \"{}\" was invalid and defaulted to {} min",
                    activity.title, activity.duration, FALLBACK_DURATION_MINUTES
                ));
                FALLBACK_DURATION_MINUTES
            }
        };
        minutes = minutes.min(MAX_BLOCK_MINUTES);
        if minutes < options.min_block_minutes {
            notes.push(format!(
                "\"{}\": duration raised from {} min to the {} min minimum",
                activity.title, minutes, options.min_block_minutes
            ));
            minutes = options.min_block_minutes;
        }
        blocks.push((activity.clone(), minutes));
    }
    blocks
}

/// Saturating sum of the sanitized durations.
fn total_minutes(blocks: &[(Activity, u32)]) -> u32 {
    blocks
        .iter()
        .fold(0u32, |acc, (_, minutes)| acc.saturating_add(*minutes))
}

/// Rewrite every block's time and duration labels so the schedule runs
/// contiguously from `start`.
fn reflow(blocks: &mut [(Activity, u32)], start: u32) {
    let mut cursor = start;
    for (activity, minutes) in blocks.iter_mut() {
        activity.time = format_minutes(cursor);
        activity.duration = format_duration(*minutes);
        cursor = cursor.saturating_add(*minutes);
    }
}

/// Remove `excess` minutes from the schedule, walking backward from the
/// last block and never taking any block below `min_block_minutes` — except
/// the final block, which absorbs whatever remains as a last resort, down
/// to the hard floor. Returns how many minutes were actually removed.
fn trim_overrun(blocks: &mut [(Activity, u32)], excess: u32, min_block_minutes: u32) -> u32 {
    let mut remaining = excess;
    for index in (0..blocks.len()).rev() {
        if remaining == 0 {
            break;
        }
        let slack = blocks[index].1.saturating_sub(min_block_minutes);
        let cut = slack.min(remaining);
        blocks[index].1 -= cut;
        remaining -= cut;
    }
    if remaining > 0 {
        if let Some(last) = blocks.last_mut() {
            let forced = last.1.saturating_sub(remaining).max(FORCED_FLOOR_MINUTES);
            remaining -= last.1 - forced;
            last.1 = forced;
        }
    }
    excess - remaining
}

/// Build the synthetic filler block, cloned stylistically from the last
/// real activity when one exists.
fn make_filler(template: Option<&Activity>, title: &str, minutes: u32) -> Activity {
    let mut filler = template.cloned().unwrap_or_default();
    filler.title = title.to_string();
    filler.description =
        "Open time to stretch, reset, and transition into the next session.".to_string();
    filler.materials = Vec::new();
    filler.steps = None;
    filler.facilitator_notes =
        vec!["Keep this block flexible; let the group set the pace.".to_string()];
    filler.energy_level = EnergyLevel::Low;
    filler.duration = format_duration(minutes);
    filler
}
