use crate::domain::{SeismicError, SeismicResult, SpectralResult};
use crate::fault_table::FaultRecord;
use crate::numerics::{SPECTRAL_DIGITS, format_decimal, linear_interpolate, round_decimal};

/// Interpolates the four spectral values of `record` at `distance_km`.
///
/// The first consecutive pair with `d1 <= distance <= d2` is used, so the
/// largest sampled distance is still bracketed by the final pair. Each field
/// is rounded to 3 decimals before it is handed to any derivation.
pub fn interpolate(record: &FaultRecord, distance_km: f64) -> SeismicResult<SpectralResult> {
    let span = record.span();
    if !span.contains(distance_km) {
        return Err(SeismicError::distance_out_of_range(distance_km, span));
    }

    // samples are sorted and contiguous, so some pair brackets any in-span distance
    let Some(pair) = record
        .samples()
        .windows(2)
        .find(|pair| pair[0].distance_km <= distance_km && distance_km <= pair[1].distance_km)
    else {
        return Err(SeismicError::internal(format!(
            "fault '{}' has no sample pair bracketing {} km",
            record.name(),
            format_decimal(distance_km)
        )));
    };

    let (lower, upper) = (pair[0], pair[1]);
    let values = lower.values.map_fields(&upper.values, |v1, v2| {
        round_decimal(
            linear_interpolate(distance_km, lower.distance_km, upper.distance_km, v1, v2),
            SPECTRAL_DIGITS,
        )
    });

    tracing::debug!(
        fault = record.name(),
        distance_km,
        lower_km = lower.distance_km,
        upper_km = upper.distance_km,
        "interpolated spectral values"
    );

    Ok(SpectralResult {
        values,
        lower_km: lower.distance_km,
        upper_km: upper.distance_km,
    })
}
