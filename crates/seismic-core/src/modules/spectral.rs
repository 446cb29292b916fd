use super::DerivationPath;
use crate::domain::{Operation, SeismicResult, SpectralQuery, SpectralResult, SpectralValues};
use serde::Serialize;

/// Interpolated coefficients echoed with the query that produced them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpectralCoefficients {
    pub fault_name: String,
    pub location: Option<String>,
    pub distance_km: f64,
    #[serde(flatten)]
    pub values: SpectralValues,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SpectralPath;

impl DerivationPath for SpectralPath {
    type Parameters = ();
    type Output = SpectralCoefficients;

    const OPERATION: Operation = Operation::SpectralCoefficients;

    fn derive(
        &self,
        query: &SpectralQuery,
        spectral: &SpectralResult,
        _parameters: &(),
    ) -> SeismicResult<SpectralCoefficients> {
        Ok(SpectralCoefficients {
            fault_name: query.fault_name.clone(),
            location: query.location.clone(),
            distance_km: query.distance_km,
            values: spectral.values,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::SpectralPath;
    use crate::domain::{SpectralQuery, SpectralResult, SpectralValues};
    use crate::modules::DerivationPath;

    #[test]
    fn payload_keeps_legacy_key_order() {
        let query = SpectralQuery::new("A", 15.0)
            .expect("query should build")
            .with_location(Some("Taichung".to_string()));
        let spectral = SpectralResult {
            values: SpectralValues::new(0.9, 0.45, 1.1, 0.55),
            lower_km: 10.0,
            upper_km: 20.0,
        };

        let output = SpectralPath
            .derive(&query, &spectral, &())
            .expect("spectral path cannot fail");
        let json = serde_json::to_string(&output).expect("output should serialize");
        assert_eq!(
            json,
            r#"{"fault_name":"A","location":"Taichung","distance_km":15.0,"SDS":0.9,"SD1":0.45,"SMS":1.1,"SM1":0.55}"#
        );
    }

    #[test]
    fn missing_location_serializes_as_null() {
        let query = SpectralQuery::new("A", 10.0).expect("query should build");
        let spectral = SpectralResult {
            values: SpectralValues::new(1.0, 0.5, 1.2, 0.6),
            lower_km: 10.0,
            upper_km: 20.0,
        };
        let output = SpectralPath
            .derive(&query, &spectral, &())
            .expect("spectral path cannot fail");
        let json = serde_json::to_value(&output).expect("output should serialize");
        assert!(json["location"].is_null());
    }
}
