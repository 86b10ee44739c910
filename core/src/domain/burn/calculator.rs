/// Minutes of an activity needed to burn `calories`.
///
/// Burn rate per minute is `(met * 3.5 * weight_kg) / 200`. A rate that is not
/// strictly positive has no meaningful answer and yields `0.0`.
pub fn minutes_to_burn(calories: f64, weight_kg: f64, met: f64) -> f64 {
    let per_minute = (met * 3.5 * weight_kg) / 200.0;

    if !(per_minute > 0.0) {
        return 0.0;
    }

    calories / per_minute
}

/// Rounds a raw minute figure for display, never going below one minute.
pub fn display_minutes(minutes: f64) -> u32 {
    let rounded = minutes.round();

    if !(rounded >= 1.0) {
        return 1;
    }

    // saturating float-to-int cast
    rounded as u32
}
