use crate::domain::{SeismicResult, SpectralValues};
use crate::numerics::{SPECTRAL_DIGITS, amplification_factor, checked_quotient, round_decimal};

/// Which pair of spectral values drives a period chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpectralBranch {
    Design,
    MaximumConsidered,
}

impl SpectralBranch {
    const fn characteristic_quantity(self) -> &'static str {
        match self {
            Self::Design => "T0D = SD1 / SDS",
            Self::MaximumConsidered => "T0M = SM1 / SMS",
        }
    }

    const fn ratio_quantity(self) -> &'static str {
        match self {
            Self::Design => "T / T0D",
            Self::MaximumConsidered => "T / T0M",
        }
    }

    /// Short-period and one-second accelerations for this branch.
    pub const fn accelerations(self, values: &SpectralValues) -> (f64, f64) {
        match self {
            Self::Design => (values.sds, values.sd1),
            Self::MaximumConsidered => (values.sms, values.sm1),
        }
    }
}

/// `T0`, `T / T0` and `Fu` for one branch, each rounded the way the
/// downstream formulas expect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeriodChain {
    pub characteristic_period: f64,
    pub period_ratio: f64,
    pub amplification: f64,
}

impl PeriodChain {
    pub fn evaluate(
        branch: SpectralBranch,
        values: &SpectralValues,
        period_s: f64,
        ductility: f64,
    ) -> SeismicResult<Self> {
        let (short_period, one_second) = branch.accelerations(values);
        let characteristic_period = round_decimal(
            checked_quotient(branch.characteristic_quantity(), one_second, short_period)?,
            SPECTRAL_DIGITS,
        );
        let period_ratio = round_decimal(
            checked_quotient(branch.ratio_quantity(), period_s, characteristic_period)?,
            SPECTRAL_DIGITS,
        );
        Ok(Self {
            characteristic_period,
            period_ratio,
            amplification: amplification_factor(ductility, period_ratio),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{PeriodChain, SpectralBranch};
    use crate::domain::{SeismicErrorKind, SpectralValues};

    #[test]
    fn design_and_maximum_branches_use_their_own_pairs() {
        let values = SpectralValues::new(0.9, 0.45, 1.1, 0.55);

        let design = PeriodChain::evaluate(SpectralBranch::Design, &values, 0.5, 4.0)
            .expect("design chain should evaluate");
        assert_eq!(design.characteristic_period, 0.5);
        assert_eq!(design.period_ratio, 1.0);
        assert_eq!(design.amplification, 1.0);

        let maximum = PeriodChain::evaluate(SpectralBranch::MaximumConsidered, &values, 0.2, 4.0)
            .expect("maximum chain should evaluate");
        assert_eq!(maximum.characteristic_period, 0.5);
        assert_eq!(maximum.period_ratio, 0.4);
        // 4 - 3 * 0.2 / 0.4
        assert_eq!(maximum.amplification, 2.5);
    }

    #[test]
    fn vanishing_characteristic_period_is_a_computation_error() {
        // 0.0004 / 1.0 rounds to a zero T0D
        let values = SpectralValues::new(1.0, 0.0004, 1.2, 0.6);
        let error = PeriodChain::evaluate(SpectralBranch::Design, &values, 0.5, 4.0)
            .expect_err("zero T0D cannot divide T");
        assert_eq!(error.kind(), SeismicErrorKind::Computation);
        assert!(error.message().contains("T / T0D"), "{}", error.message());
    }

    #[test]
    fn zero_short_period_acceleration_is_a_computation_error() {
        let values = SpectralValues::new(1.0, 0.5, 0.0, 0.6);
        let error = PeriodChain::evaluate(SpectralBranch::MaximumConsidered, &values, 0.5, 4.0)
            .expect_err("zero SMS cannot divide SM1");
        assert!(error.message().contains("T0M = SM1 / SMS"), "{}", error.message());
    }
}
