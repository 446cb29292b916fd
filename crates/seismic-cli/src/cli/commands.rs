use super::CliError;
use super::config::GlobalArgs;
use super::helpers::{emit_outcome, load_fault_table};
use seismic_core::domain::{
    DesignParameters, Direction, HorizontalParameters, ReportParameters, SeismicResult,
    SpectralQuery,
};
use seismic_core::fault_table::FaultSummary;
use seismic_core::modules::CoefficientEngine;
use serde::Serialize;

#[derive(clap::Args, Debug)]
pub(super) struct QueryArgs {
    /// Fault name as listed in the fault table (case-sensitive)
    #[arg(long)]
    fault_name: String,

    /// Site-to-fault distance in km
    #[arg(long, allow_negative_numbers = true)]
    distance_km: f64,

    /// Free-form site label echoed in the payload
    #[arg(long)]
    location: Option<String>,
}

impl QueryArgs {
    fn to_query(&self) -> SeismicResult<SpectralQuery> {
        Ok(SpectralQuery::new(self.fault_name.clone(), self.distance_km)?
            .with_location(self.location.clone()))
    }
}

#[derive(clap::Args, Debug)]
pub(super) struct DesignArgs {
    /// Fundamental period T in seconds
    #[arg(long = "period", visible_alias = "T", allow_negative_numbers = true)]
    period: f64,

    /// Ductility capacity R (>= 1)
    #[arg(long = "ductility", visible_alias = "R", allow_negative_numbers = true)]
    ductility: f64,

    /// Importance factor I
    #[arg(long = "importance", visible_alias = "I", allow_negative_numbers = true)]
    importance: f64,

    /// Yield amplification ratio alpha_y
    #[arg(long = "alpha-y", visible_alias = "alpha_y", allow_negative_numbers = true)]
    alpha_y: f64,
}

impl DesignArgs {
    fn to_parameters(&self) -> SeismicResult<DesignParameters> {
        DesignParameters::new(self.period, self.ductility, self.importance, self.alpha_y)
    }
}

#[derive(clap::Args, Debug)]
pub(super) struct CoefficientsArgs {
    #[command(flatten)]
    query: QueryArgs,
}

#[derive(clap::Args, Debug)]
pub(super) struct KxArgs {
    #[command(flatten)]
    query: QueryArgs,

    /// Horizontal direction, X or Y
    #[arg(long)]
    direction: String,

    #[command(flatten)]
    design: DesignArgs,
}

#[derive(clap::Args, Debug)]
pub(super) struct ReportArgs {
    #[command(flatten)]
    query: QueryArgs,

    #[command(flatten)]
    design: DesignArgs,

    /// Seismic weight W in kN
    #[arg(long = "weight", visible_alias = "W", allow_negative_numbers = true)]
    weight: f64,
}

#[derive(Debug, Serialize)]
struct FaultListing {
    faults: Vec<FaultSummary>,
}

pub(super) fn run_coefficients_command(
    global: &GlobalArgs,
    args: CoefficientsArgs,
) -> Result<i32, CliError> {
    let table = load_fault_table(global)?;
    let engine = CoefficientEngine::new(&table);
    let outcome = args
        .query
        .to_query()
        .and_then(|query| engine.spectral_coefficients(&query));
    emit_outcome(global, &outcome)
}

pub(super) fn run_kx_command(global: &GlobalArgs, args: KxArgs) -> Result<i32, CliError> {
    let table = load_fault_table(global)?;
    let engine = CoefficientEngine::new(&table);
    let outcome = args.query.to_query().and_then(|query| {
        let direction = args.direction.parse::<Direction>()?;
        let parameters = HorizontalParameters::new(direction, args.design.to_parameters()?);
        engine.horizontal_coefficients(&query, &parameters)
    });
    emit_outcome(global, &outcome)
}

pub(super) fn run_report_command(global: &GlobalArgs, args: ReportArgs) -> Result<i32, CliError> {
    let table = load_fault_table(global)?;
    let engine = CoefficientEngine::new(&table);
    let outcome = args.query.to_query().and_then(|query| {
        let parameters = ReportParameters::new(args.design.to_parameters()?, args.weight)?;
        engine.design_report(&query, &parameters)
    });
    emit_outcome(global, &outcome)
}

pub(super) fn run_faults_command(global: &GlobalArgs) -> Result<i32, CliError> {
    let table = load_fault_table(global)?;
    let outcome: SeismicResult<FaultListing> = Ok(FaultListing {
        faults: table.summaries(),
    });
    emit_outcome(global, &outcome)
}
