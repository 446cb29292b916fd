pub mod errors;

pub use errors::{
    ExitClassification, SeismicError, SeismicErrorCategory, SeismicErrorKind, SeismicResult,
};

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    SpectralCoefficients,
    HorizontalCoefficients,
    DesignReport,
}

impl Operation {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SpectralCoefficients => "get_seismic_coefficients",
            Self::HorizontalCoefficients => "seismic_kx",
            Self::DesignReport => "seismic_report",
        }
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}

/// The four spectral acceleration coefficients tabulated per distance sample.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct SpectralValues {
    #[serde(rename = "SDS")]
    pub sds: f64,
    #[serde(rename = "SD1")]
    pub sd1: f64,
    #[serde(rename = "SMS")]
    pub sms: f64,
    #[serde(rename = "SM1")]
    pub sm1: f64,
}

impl SpectralValues {
    pub const FIELD_NAMES: [&'static str; 4] = ["SDS", "SD1", "SMS", "SM1"];

    pub const fn new(sds: f64, sd1: f64, sms: f64, sm1: f64) -> Self {
        Self { sds, sd1, sms, sm1 }
    }

    pub const fn fields(&self) -> [f64; 4] {
        [self.sds, self.sd1, self.sms, self.sm1]
    }

    pub fn map_fields(&self, other: &Self, mut op: impl FnMut(f64, f64) -> f64) -> Self {
        Self {
            sds: op(self.sds, other.sds),
            sd1: op(self.sd1, other.sd1),
            sms: op(self.sms, other.sms),
            sm1: op(self.sm1, other.sm1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DistanceSpan {
    pub min_km: f64,
    pub max_km: f64,
}

impl DistanceSpan {
    pub const fn new(min_km: f64, max_km: f64) -> Self {
        Self { min_km, max_km }
    }

    pub fn contains(&self, distance_km: f64) -> bool {
        self.min_km <= distance_km && distance_km <= self.max_km
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpectralQuery {
    pub fault_name: String,
    pub distance_km: f64,
    pub location: Option<String>,
}

impl SpectralQuery {
    pub fn new(fault_name: impl Into<String>, distance_km: f64) -> SeismicResult<Self> {
        if !distance_km.is_finite() {
            return Err(SeismicError::invalid_parameter(
                "distance_km",
                distance_km,
                "a finite distance in km",
            ));
        }
        Ok(Self {
            fault_name: fault_name.into(),
            distance_km,
            location: None,
        })
    }

    pub fn with_location(mut self, location: Option<String>) -> Self {
        self.location = location;
        self
    }
}

/// Interpolated spectral values together with the bracketing sample distances.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectralResult {
    pub values: SpectralValues,
    pub lower_km: f64,
    pub upper_km: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Direction {
    X,
    Y,
}

impl Direction {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::X => "X",
            Self::Y => "Y",
        }
    }

    pub const fn coefficient_label(self) -> &'static str {
        match self {
            Self::X => "Kx",
            Self::Y => "Ky",
        }
    }
}

impl FromStr for Direction {
    type Err = SeismicError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "X" => Ok(Self::X),
            "Y" => Ok(Self::Y),
            other => Err(SeismicError::invalid_direction(other)),
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}

/// Structural inputs shared by the horizontal-coefficient and report paths.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DesignParameters {
    #[serde(rename = "T")]
    pub period_s: f64,
    #[serde(rename = "R")]
    pub ductility: f64,
    #[serde(rename = "I")]
    pub importance: f64,
    #[serde(rename = "alpha_y")]
    pub yield_ratio: f64,
}

impl DesignParameters {
    pub fn new(
        period_s: f64,
        ductility: f64,
        importance: f64,
        yield_ratio: f64,
    ) -> SeismicResult<Self> {
        require_positive("T", period_s)?;
        if !ductility.is_finite() || ductility < 1.0 {
            return Err(SeismicError::invalid_parameter(
                "R",
                ductility,
                "a finite value >= 1",
            ));
        }
        require_positive("I", importance)?;
        require_positive("alpha_y", yield_ratio)?;
        Ok(Self {
            period_s,
            ductility,
            importance,
            yield_ratio,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizontalParameters {
    pub direction: Direction,
    pub design: DesignParameters,
}

impl HorizontalParameters {
    pub const fn new(direction: Direction, design: DesignParameters) -> Self {
        Self { direction, design }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReportParameters {
    #[serde(flatten)]
    pub design: DesignParameters,
    #[serde(rename = "W")]
    pub weight: f64,
}

impl ReportParameters {
    pub fn new(design: DesignParameters, weight: f64) -> SeismicResult<Self> {
        require_positive("W", weight)?;
        Ok(Self { design, weight })
    }
}

fn require_positive(name: &str, value: f64) -> SeismicResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SeismicError::invalid_parameter(
            name,
            value,
            "a finite value > 0",
        ))
    }
}
