use crate::errors::AtmosphereError;
use crate::models::AtmosphereModel;

/// Largest number of altitudes a single sweep will evaluate.
pub const MAX_SWEEP_POINTS: usize = 10_000_000;

/// Evaluates `model` from `start` to `stop` inclusive every `step`.
///
/// Altitudes are computed as `start + i * step` so long sweeps do not
/// accumulate rounding. A descending sweep needs a negative step. Sweeps
/// that would exceed [`MAX_SWEEP_POINTS`] are rejected with `InvalidSweep`.
pub fn sample<M: AtmosphereModel>(
    model: &M,
    start: f64,
    stop: f64,
    step: f64,
) -> Result<Vec<(f64, M::State)>, AtmosphereError> {
    let span = stop - start;
    let points_away = span != 0.0 && span.is_sign_negative() != step.is_sign_negative();
    if !step.is_finite() || step == 0.0 || !span.is_finite() || points_away {
        return Err(AtmosphereError::InvalidSweep { start, stop, step });
    }

    // Small slack so the end point survives rounding in span / step.
    let intervals = (span / step + 1e-9).floor();
    if intervals >= MAX_SWEEP_POINTS as f64 {
        return Err(AtmosphereError::InvalidSweep { start, stop, step });
    }
    let count = intervals as usize + 1;
    (0..count)
        .map(|i| {
            let altitude = start + i as f64 * step;
            model.evaluate(altitude).map(|state| (altitude, state))
        })
        .collect()
}
