use super::DerivationPath;
use super::horizontal::DESIGN_FORCE_DIVISOR;
use super::periods::{PeriodChain, SpectralBranch};
use crate::domain::{
    Operation, ReportParameters, SeismicResult, SpectralQuery, SpectralResult, SpectralValues,
};
use crate::numerics::{
    FORCE_DIGITS, checked_quotient, ensure_finite, format_decimal, round_decimal,
};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReportIntermediate {
    #[serde(rename = "T0D")]
    pub design_period: f64,
    #[serde(rename = "T0M")]
    pub maximum_period: f64,
    #[serde(rename = "T/T0D")]
    pub design_ratio: f64,
    #[serde(rename = "T/T0M")]
    pub maximum_ratio: f64,
    #[serde(rename = "Fu")]
    pub design_amplification: f64,
    #[serde(rename = "FuM")]
    pub maximum_amplification: f64,
    #[serde(rename = "SaD")]
    pub design_acceleration: f64,
    #[serde(rename = "SaM")]
    pub maximum_acceleration: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DesignForces {
    #[serde(rename = "V")]
    pub design_shear: f64,
    #[serde(rename = "VM")]
    pub maximum_shear: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DesignReport {
    pub location: Option<String>,
    pub fault_name: String,
    pub distance_km: f64,
    pub input: ReportParameters,
    pub coefficients: SpectralValues,
    pub intermediate: ReportIntermediate,
    pub results: DesignForces,
    pub summary: String,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ReportPath;

impl DerivationPath for ReportPath {
    type Parameters = ReportParameters;
    type Output = DesignReport;

    const OPERATION: Operation = Operation::DesignReport;

    fn derive(
        &self,
        query: &SpectralQuery,
        spectral: &SpectralResult,
        parameters: &ReportParameters,
    ) -> SeismicResult<DesignReport> {
        let values = spectral.values;
        let design = parameters.design;

        let design_chain = PeriodChain::evaluate(
            SpectralBranch::Design,
            &values,
            design.period_s,
            design.ductility,
        )?;
        let maximum_chain = PeriodChain::evaluate(
            SpectralBranch::MaximumConsidered,
            &values,
            design.period_s,
            design.ductility,
        )?;

        let design_acceleration = values.sds;
        let maximum_acceleration = values.sms;

        let design_reduced =
            checked_quotient("SaD / Fu", design_acceleration, design_chain.amplification)?;
        let design_coefficient = checked_quotient(
            "V",
            design.importance * design_reduced,
            DESIGN_FORCE_DIVISOR * design.yield_ratio,
        )?;
        let design_shear = round_decimal(
            ensure_finite("V", design_coefficient * parameters.weight)?,
            FORCE_DIGITS,
        );

        // the maximum considered demand is not reduced by alpha_y
        let maximum_reduced = checked_quotient(
            "SaM / FuM",
            maximum_acceleration,
            maximum_chain.amplification,
        )?;
        let maximum_coefficient = checked_quotient(
            "VM",
            design.importance * maximum_reduced,
            DESIGN_FORCE_DIVISOR,
        )?;
        let maximum_shear = round_decimal(
            ensure_finite("VM", maximum_coefficient * parameters.weight)?,
            FORCE_DIGITS,
        );

        let summary = format!(
            "Building at {}, governed by fault {}, distance {} km, period {} sec:\n\
             SDS = {}, SD1 = {}, Fu = {}, design seismic force V = {} kN, maximum seismic force VM = {} kN",
            query.location.as_deref().unwrap_or("an unspecified location"),
            query.fault_name,
            format_decimal(query.distance_km),
            format_decimal(design.period_s),
            format_decimal(values.sds),
            format_decimal(values.sd1),
            format_decimal(design_chain.amplification),
            format_decimal(design_shear),
            format_decimal(maximum_shear)
        );

        tracing::debug!(
            fu = design_chain.amplification,
            fu_m = maximum_chain.amplification,
            v = design_shear,
            vm = maximum_shear,
            "derived design force report"
        );

        Ok(DesignReport {
            location: query.location.clone(),
            fault_name: query.fault_name.clone(),
            distance_km: query.distance_km,
            input: *parameters,
            coefficients: values,
            intermediate: ReportIntermediate {
                design_period: design_chain.characteristic_period,
                maximum_period: maximum_chain.characteristic_period,
                design_ratio: design_chain.period_ratio,
                maximum_ratio: maximum_chain.period_ratio,
                design_amplification: design_chain.amplification,
                maximum_amplification: maximum_chain.amplification,
                design_acceleration,
                maximum_acceleration,
            },
            results: DesignForces {
                design_shear,
                maximum_shear,
            },
            summary,
        })
    }
}
