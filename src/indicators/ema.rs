//! EMA (Exponential Moving Average) primitive shared by the MACD columns.

/// Recursive, non-adjusted exponential moving average over an
/// optional-valued column.
///
/// α = 2 / (span + 1); EMA₀ = value₀; EMAᵢ = α·valueᵢ + (1 − α)·EMAᵢ₋₁.
/// An absent cell emits an absent result and leaves the recursion state
/// untouched, so the average resumes from the last present value.
pub fn ema(values: &[Option<f64>], span: usize) -> Vec<Option<f64>> {
    let alpha = 2.0 / (span as f64 + 1.0);
    let mut state: Option<f64> = None;
    values
        .iter()
        .map(|cell| {
            let v = (*cell)?;
            let next = match state {
                None => v,
                Some(prev) => alpha * v + (1.0 - alpha) * prev,
            };
            state = Some(next);
            Some(next)
        })
        .collect()
}
