/// Upper bound approached by the weight of an item with an ever more negative score.
pub const MAX_WEIGHT: f64 = 1.0 + std::f64::consts::FRAC_PI_2;

/// Map a running score to a strictly positive sampling weight.
///
/// Non-negative scores decay as `1 / (ln(delta + 1)^2 + 1)`, starting at 1 and
/// tending to 0 without reaching it. Negative scores grow as `atan(-delta) + 1`
/// and saturate at `1 + pi/2`. Both branches equal 1 at zero.
pub fn weight(delta: f64) -> f64 {
    if delta >= 0.0 {
        let log = (delta + 1.0).ln();
        1.0 / (log * log + 1.0)
    } else {
        (-delta).atan() + 1.0
    }
}

/// Weight for an integer ledger score.
pub fn score_weight(score: i64) -> f64 {
    weight(score as f64)
}
