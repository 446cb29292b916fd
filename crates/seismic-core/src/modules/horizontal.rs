use super::DerivationPath;
use super::periods::{PeriodChain, SpectralBranch};
use crate::domain::{
    DesignParameters, Direction, HorizontalParameters, Operation, SeismicResult, SpectralQuery,
    SpectralResult, SpectralValues,
};
use crate::numerics::{COEFFICIENT_DIGITS, checked_quotient, format_decimal, round_decimal};
use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

/// Divisor applied together with `alpha_y` to the reduced design acceleration.
pub const DESIGN_FORCE_DIVISOR: f64 = 1.4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoefficientKind {
    Main,
    Moderate,
    Maximum,
    Collapse,
}

impl CoefficientKind {
    pub const ALL: [Self; 4] = [Self::Main, Self::Moderate, Self::Maximum, Self::Collapse];

    fn description(self, label: &str) -> String {
        match self {
            Self::Main => format!("{label}: minimum design horizontal seismic force coefficient"),
            Self::Moderate => {
                format!("{label}: design seismic force coefficient for moderate earthquakes")
            }
            Self::Maximum => format!(
                "{label}: design seismic force coefficient for the maximum considered earthquake"
            ),
            Self::Collapse => {
                format!("{label}: design seismic force coefficient for collapse prevention")
            }
        }
    }

    fn formula(self, label: &str) -> String {
        match self {
            Self::Main => format!("{label} = I × (SDS / Fu) ÷ (1.4 × αy)"),
            Self::Moderate => format!("{label}_moderate = I × SDS ÷ (R × αy)"),
            Self::Maximum => format!("{label}_maximum = I × SMS ÷ (R × αy)"),
            Self::Collapse => format!("{label}_collapse = I × SM1 ÷ (R × αy)"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoefficientRow {
    pub direction: Direction,
    #[serde(rename = "type")]
    pub description: String,
    pub formula: String,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HorizontalSpectralBlock {
    #[serde(flatten)]
    pub values: SpectralValues,
    #[serde(rename = "Fu")]
    pub amplification: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HorizontalCoefficients {
    pub direction: Direction,
    pub location: Option<String>,
    pub fault_name: String,
    pub distance_km: f64,
    pub input: DesignParameters,
    pub coefficients: HorizontalSpectralBlock,
    pub characteristic_period: f64,
    pub period_ratio: f64,
    pub k_main: f64,
    pub k_moderate: f64,
    pub k_maximum: f64,
    pub k_collapse: f64,
    pub rows: Vec<CoefficientRow>,
    pub summary: String,
}

impl HorizontalCoefficients {
    pub fn coefficient(&self, kind: CoefficientKind) -> f64 {
        match kind {
            CoefficientKind::Main => self.k_main,
            CoefficientKind::Moderate => self.k_moderate,
            CoefficientKind::Maximum => self.k_maximum,
            CoefficientKind::Collapse => self.k_collapse,
        }
    }

    /// Key of the coefficient table in the payload, `Kx_table` or `Ky_table`.
    pub fn table_key(&self) -> String {
        format!("{}_table", self.direction.coefficient_label())
    }
}

impl Serialize for HorizontalCoefficients {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(8))?;
        map.serialize_entry("direction", &self.direction)?;
        map.serialize_entry("location", &self.location)?;
        map.serialize_entry("fault_name", &self.fault_name)?;
        map.serialize_entry("distance_km", &self.distance_km)?;
        map.serialize_entry("input", &self.input)?;
        map.serialize_entry("coefficients", &self.coefficients)?;
        map.serialize_entry(&self.table_key(), &self.rows)?;
        map.serialize_entry("summary", &self.summary)?;
        map.end()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HorizontalPath;

impl DerivationPath for HorizontalPath {
    type Parameters = HorizontalParameters;
    type Output = HorizontalCoefficients;

    const OPERATION: Operation = Operation::HorizontalCoefficients;

    fn derive(
        &self,
        query: &SpectralQuery,
        spectral: &SpectralResult,
        parameters: &HorizontalParameters,
    ) -> SeismicResult<HorizontalCoefficients> {
        let values = spectral.values;
        let design = parameters.design;
        let chain = PeriodChain::evaluate(
            SpectralBranch::Design,
            &values,
            design.period_s,
            design.ductility,
        )?;

        let reduced = checked_quotient("SDS / Fu", values.sds, chain.amplification)?;
        let k_main = round_decimal(
            checked_quotient(
                "K_main",
                design.importance * reduced,
                DESIGN_FORCE_DIVISOR * design.yield_ratio,
            )?,
            COEFFICIENT_DIGITS,
        );
        let reduction = design.ductility * design.yield_ratio;
        let k_moderate = round_decimal(
            checked_quotient("K_moderate", design.importance * values.sds, reduction)?,
            COEFFICIENT_DIGITS,
        );
        let k_maximum = round_decimal(
            checked_quotient("K_maximum", design.importance * values.sms, reduction)?,
            COEFFICIENT_DIGITS,
        );
        let k_collapse = round_decimal(
            checked_quotient("K_collapse", design.importance * values.sm1, reduction)?,
            COEFFICIENT_DIGITS,
        );

        let label = parameters.direction.coefficient_label();
        let summary = format!(
            "{label} = ({} × ({} / {})) ÷ (1.4 × {}) = {}",
            format_decimal(design.importance),
            format_decimal(values.sds),
            format_decimal(chain.amplification),
            format_decimal(design.yield_ratio),
            format_decimal(k_main)
        );

        let rows = CoefficientKind::ALL
            .into_iter()
            .zip([k_main, k_moderate, k_maximum, k_collapse])
            .map(|(kind, value)| CoefficientRow {
                direction: parameters.direction,
                description: kind.description(label),
                formula: kind.formula(label),
                value,
            })
            .collect();

        tracing::debug!(
            direction = %parameters.direction,
            fu = chain.amplification,
            k_main,
            "derived horizontal force coefficients"
        );

        Ok(HorizontalCoefficients {
            direction: parameters.direction,
            location: query.location.clone(),
            fault_name: query.fault_name.clone(),
            distance_km: query.distance_km,
            input: design,
            coefficients: HorizontalSpectralBlock {
                values,
                amplification: chain.amplification,
            },
            characteristic_period: chain.characteristic_period,
            period_ratio: chain.period_ratio,
            k_main,
            k_moderate,
            k_maximum,
            k_collapse,
            rows,
            summary,
        })
    }
}
