pub mod engine;
pub mod horizontal;
pub mod interpolation;
pub mod periods;
pub mod report;
pub mod serialization;
pub mod spectral;

mod traits;

pub use engine::CoefficientEngine;
pub use horizontal::{
    CoefficientKind, CoefficientRow, DESIGN_FORCE_DIVISOR, HorizontalCoefficients,
    HorizontalPath, HorizontalSpectralBlock,
};
pub use interpolation::interpolate;
pub use periods::{PeriodChain, SpectralBranch};
pub use report::{DesignForces, DesignReport, ReportIntermediate, ReportPath};
pub use serialization::{error_payload, render_outcome};
pub use spectral::{SpectralCoefficients, SpectralPath};
pub use traits::DerivationPath;
