//! Near-fault ductility amplification factor `Fu`.
//!
//! `Fu` depends on the response-modification factor `R` and the normalised
//! period ratio `x = T / T0`:
//!
//! ```text
//! x <= 0.2          Fu = R
//! 0.2 < x <= 0.6    Fu = R - (R - 1)(x - 0.2) / 0.4
//! 0.6 < x <= 1.0    Fu = 1 + (R - 1)(1 - x) / 0.4
//! x > 1.0           Fu = 1.0
//! ```
//!
//! The two tapered branches are rounded to 3 decimals. At `x = 0.6` the
//! second branch reaches 1 while the third restarts from `R`, so the curve
//! only joins up there when `R = 1`.

use super::{SPECTRAL_DIGITS, round_decimal};

pub const FU_LOWER_PLATEAU_LIMIT: f64 = 0.2;
pub const FU_TRANSITION_LIMIT: f64 = 0.6;
pub const FU_UPPER_PLATEAU_LIMIT: f64 = 1.0;
pub const FU_TAPER_WIDTH: f64 = 0.4;

pub fn amplification_factor(ductility: f64, period_ratio: f64) -> f64 {
    if period_ratio <= FU_LOWER_PLATEAU_LIMIT {
        ductility
    } else if period_ratio <= FU_TRANSITION_LIMIT {
        round_decimal(
            ductility
                - (ductility - 1.0) * (period_ratio - FU_LOWER_PLATEAU_LIMIT) / FU_TAPER_WIDTH,
            SPECTRAL_DIGITS,
        )
    } else if period_ratio <= FU_UPPER_PLATEAU_LIMIT {
        round_decimal(
            1.0 + (ductility - 1.0) * (FU_UPPER_PLATEAU_LIMIT - period_ratio) / FU_TAPER_WIDTH,
            SPECTRAL_DIGITS,
        )
    } else {
        1.0
    }
}
