//! Parsing and formatting of free-form duration labels.
//!
//! Duration labels come from hand-authored forms and from generator output,
//! so they arrive in whatever shape the author felt like: "90", "90 min",
//! "1h30", "1 hour 30 minutes", "2:15". Unrecognizable labels map to `None`
//! and the caller substitutes its own default.

/// Parse a free-form duration label into whole minutes.
///
/// Accepted shapes:
/// - bare integer ("90") taken as minutes
/// - colon form ("2:15") taken as hours:minutes
/// - hour/minute tokens in any order ("1h30", "2 hrs", "1 hour 30 min")
///
/// Returns `None` for anything unrecognizable. Zero is a valid parse;
/// callers treating zero as invalid must check for it themselves.
pub fn parse_duration_minutes(label: &str) -> Option<u32> {
    let label = label.trim().to_lowercase();
    if label.is_empty() {
        return None;
    }

    // Bare number of minutes
    if label.chars().all(|c| c.is_ascii_digit()) {
        return label.parse::<u32>().ok();
    }

    // Colon form, e.g. "2:15"
    if label.contains(':') {
        let parts: Vec<&str> = label.split(':').collect();
        if parts.len() != 2 {
            return None;
        }
        let hours = parts[0].trim().parse::<u32>().ok()?;
        let minutes = parts[1].trim().parse::<u32>().ok()?;
        return hours.checked_mul(60)?.checked_add(minutes);
    }

    scan_tokens(&label)
}

/// Scan number/word token pairs and sum the hour and minute figures.
fn scan_tokens(label: &str) -> Option<u32> {
    let mut hours: Option<u32> = None;
    let mut minutes: Option<u32> = None;
    // Number waiting for the unit word that follows it
    let mut pending: Option<u32> = None;

    let mut chars = label.chars().peekable();
    while let Some(&c) = chars.peek() {
        if c.is_ascii_digit() {
            let mut value: u32 = 0;
            while let Some(digit) = chars.peek().and_then(|d| d.to_digit(10)) {
                value = value.saturating_mul(10).saturating_add(digit);
                chars.next();
            }
            pending = Some(value);
        } else if c.is_ascii_alphabetic() {
            let mut word = String::new();
            while let Some(&a) = chars.peek() {
                if !a.is_ascii_alphabetic() {
                    break;
                }
                word.push(a);
                chars.next();
            }
            match word.as_str() {
                "h" | "hr" | "hrs" | "hour" | "hours" => {
                    if let Some(value) = pending.take() {
                        hours.get_or_insert(value);
                    }
                }
                "m" | "min" | "mins" | "minute" | "minutes" => {
                    if let Some(value) = pending.take() {
                        minutes.get_or_insert(value);
                    }
                }
                // Unrelated word; whatever number preceded it is not a duration
                _ => {
                    pending = None;
                }
            }
        } else {
            // Separator characters between tokens
            chars.next();
        }
    }

    // A trailing bare number after an hour figure is minutes ("1h30")
    if let Some(value) = pending {
        if hours.is_some() && minutes.is_none() {
            minutes = Some(value);
        }
    }

    if hours.is_none() && minutes.is_none() {
        return None;
    }
    // Absurd figures that overflow a u32 count as unparseable
    hours
        .unwrap_or(0)
        .checked_mul(60)?
        .checked_add(minutes.unwrap_or(0))
}

/// Format minutes into the canonical duration label: "<hours> h" for exact
/// hour multiples, "<minutes> min" otherwise.
pub fn format_duration(minutes: u32) -> String {
    if minutes > 0 && minutes % 60 == 0 {
        format!("{} h", minutes / 60)
    } else {
        format!("{} min", minutes)
    }
}
