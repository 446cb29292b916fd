use super::DerivationPath;
use super::horizontal::{HorizontalCoefficients, HorizontalPath};
use super::interpolation::interpolate;
use super::report::{DesignReport, ReportPath};
use super::spectral::{SpectralCoefficients, SpectralPath};
use crate::domain::{
    HorizontalParameters, ReportParameters, SeismicResult, SpectralQuery, SpectralResult,
};
use crate::fault_table::FaultTable;

/// Evaluates every derivation against one loaded, immutable fault table.
#[derive(Debug, Clone, Copy)]
pub struct CoefficientEngine<'t> {
    table: &'t FaultTable,
}

impl<'t> CoefficientEngine<'t> {
    pub fn new(table: &'t FaultTable) -> Self {
        Self { table }
    }

    /// Looks up the fault and interpolates its spectral values at the query
    /// distance. Every derivation starts here.
    pub fn resolve_spectral(&self, query: &SpectralQuery) -> SeismicResult<SpectralResult> {
        let record = self.table.lookup(&query.fault_name)?;
        interpolate(record, query.distance_km)
    }

    pub fn spectral_coefficients(
        &self,
        query: &SpectralQuery,
    ) -> SeismicResult<SpectralCoefficients> {
        self.run(&SpectralPath, query, &())
    }

    pub fn horizontal_coefficients(
        &self,
        query: &SpectralQuery,
        parameters: &HorizontalParameters,
    ) -> SeismicResult<HorizontalCoefficients> {
        self.run(&HorizontalPath, query, parameters)
    }

    pub fn design_report(
        &self,
        query: &SpectralQuery,
        parameters: &ReportParameters,
    ) -> SeismicResult<DesignReport> {
        self.run(&ReportPath, query, parameters)
    }

    pub fn run<P: DerivationPath>(
        &self,
        path: &P,
        query: &SpectralQuery,
        parameters: &P::Parameters,
    ) -> SeismicResult<P::Output> {
        let outcome = self
            .resolve_spectral(query)
            .and_then(|spectral| path.derive(query, &spectral, parameters));
        if let Err(error) = &outcome {
            tracing::warn!(
                operation = %P::OPERATION,
                fault = %query.fault_name,
                distance_km = query.distance_km,
                code = error.code(),
                "request rejected: {}",
                error.message()
            );
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::CoefficientEngine;
    use crate::domain::{
        DesignParameters, Direction, HorizontalParameters, ReportParameters, SeismicErrorKind,
        SpectralQuery, SpectralValues,
    };
    use crate::fault_table::{FaultRecord, FaultTable};

    fn table() -> FaultTable {
        let record = FaultRecord::new(
            "A",
            [
                (10.0, SpectralValues::new(1.0, 0.5, 1.2, 0.6)),
                (20.0, SpectralValues::new(0.8, 0.4, 1.0, 0.5)),
            ],
        )
        .expect("record should build");
        FaultTable::from_records([record]).expect("table should build")
    }

    fn design() -> DesignParameters {
        DesignParameters::new(0.5, 4.0, 1.0, 1.0).expect("valid design")
    }

    #[test]
    fn unknown_fault_is_rejected_on_every_path() {
        let table = table();
        let engine = CoefficientEngine::new(&table);
        let query = SpectralQuery::new("ZZZ", 15.0).expect("query should build");

        let spectral = engine
            .spectral_coefficients(&query)
            .expect_err("ZZZ is not tabulated");
        let horizontal = engine
            .horizontal_coefficients(&query, &HorizontalParameters::new(Direction::X, design()))
            .expect_err("ZZZ is not tabulated");
        let report = engine
            .design_report(
                &query,
                &ReportParameters::new(design(), 1000.0).expect("valid weight"),
            )
            .expect_err("ZZZ is not tabulated");

        for error in [spectral, horizontal, report] {
            assert_eq!(error.kind(), SeismicErrorKind::FaultNotFound);
            assert!(error.message().contains("'ZZZ'"), "{}", error.message());
        }
    }

    #[test]
    fn out_of_range_distance_short_circuits_derivations() {
        let table = table();
        let engine = CoefficientEngine::new(&table);
        let query = SpectralQuery::new("A", 25.0).expect("query should build");

        let error = engine
            .horizontal_coefficients(&query, &HorizontalParameters::new(Direction::Y, design()))
            .expect_err("25 km is beyond the last sample");
        assert_eq!(error.kind(), SeismicErrorKind::DistanceOutOfRange);
    }

    #[test]
    fn spectral_coefficients_echo_the_query() {
        let table = table();
        let engine = CoefficientEngine::new(&table);
        let query = SpectralQuery::new("A", 15.0)
            .expect("query should build")
            .with_location(Some("Hualien".to_string()));

        let output = engine
            .spectral_coefficients(&query)
            .expect("15 km is in range");
        assert_eq!(output.fault_name, "A");
        assert_eq!(output.location.as_deref(), Some("Hualien"));
        assert_eq!(output.values, SpectralValues::new(0.9, 0.45, 1.1, 0.55));
    }

    #[test]
    fn engine_is_shared_across_threads() {
        let table = table();
        let engine = CoefficientEngine::new(&table);
        let distances = [10.0, 12.5, 15.0, 17.5, 20.0];

        let reports = std::thread::scope(|scope| {
            let handles = distances
                .iter()
                .map(|&distance| {
                    scope.spawn(move || {
                        let query =
                            SpectralQuery::new("A", distance).expect("query should build");
                        let parameters =
                            ReportParameters::new(design(), 1000.0).expect("valid weight");
                        engine.design_report(&query, &parameters)
                    })
                })
                .collect::<Vec<_>>();
            handles
                .into_iter()
                .map(|handle| handle.join().expect("worker should not panic"))
                .collect::<Vec<_>>()
        });

        for (distance, report) in distances.iter().zip(reports) {
            let query = SpectralQuery::new("A", *distance).expect("query should build");
            let parameters = ReportParameters::new(design(), 1000.0).expect("valid weight");
            let sequential = engine
                .design_report(&query, &parameters)
                .expect("sequential report should derive");
            assert_eq!(report.expect("parallel report should derive"), sequential);
        }
    }
}
