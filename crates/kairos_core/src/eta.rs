/// Parses a duration as written by the directions service ("1 hour 20 mins",
/// "45 min") into total minutes.
///
/// The quantity of a unit is the token right before the first occurrence of
/// the unit keyword. Only `hour`/`hours` and `min`/`mins` are recognised, the
/// singular form being looked up first. Anything that does not follow this
/// shape contributes nothing, so unparseable text yields `0`.
pub fn parse_eta_minutes(eta_text: &str) -> u32 {
    let tokens: Vec<&str> = eta_text.split_whitespace().collect();

    let hours = quantity_before(&tokens, &["hour", "hours"]).unwrap_or(0);
    let minutes = quantity_before(&tokens, &["min", "mins"]).unwrap_or(0);

    hours.saturating_mul(60).saturating_add(minutes)
}

/// Whether at least one unit of `eta_text` carries a quantity. A genuine
/// "0 mins" is readable, "garbage" is not.
pub fn is_readable_eta(eta_text: &str) -> bool {
    let tokens: Vec<&str> = eta_text.split_whitespace().collect();

    quantity_before(&tokens, &["hour", "hours"]).is_some()
        || quantity_before(&tokens, &["min", "mins"]).is_some()
}

fn quantity_before(tokens: &[&str], units: &[&str]) -> Option<u32> {
    let index = units
        .iter()
        .find_map(|unit| tokens.iter().position(|token| token == unit))?;

    let quantity = tokens.get(index.checked_sub(1)?)?;

    quantity.parse::<u32>().ok()
}

/// Formats minutes the way the dashboard displays an ETA.
pub fn format_eta_minutes(total_minutes: u32) -> String {
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    if hours > 0 {
        format!("{hours} hrs {minutes} min")
    } else {
        format!("{minutes} min")
    }
}
