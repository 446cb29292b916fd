use crate::domain::{Operation, SeismicResult, SpectralQuery, SpectralResult};

/// One of the derivations built on top of an interpolated spectral result.
pub trait DerivationPath {
    type Parameters;
    type Output;

    const OPERATION: Operation;

    fn derive(
        &self,
        query: &SpectralQuery,
        spectral: &SpectralResult,
        parameters: &Self::Parameters,
    ) -> SeismicResult<Self::Output>;
}
