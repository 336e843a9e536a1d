// Copyright 2025 the Strand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick and label formatting.

use strand_charts::{Datum, Tick};

/// Formats a number with just enough decimals to distinguish multiples of `step`.
pub(crate) fn format_number(value: f64, step: f64) -> String {
    let v = if value == 0.0 { 0.0 } else { value };
    if !(step.is_finite() && step > 0.0) {
        return format!("{v}");
    }
    let decimals = if step < 1.0 {
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "step is in (0, 1), so the exponent is small and positive"
        )]
        {
            (-step.log10() - 1e-9).ceil().min(12.0) as usize
        }
    } else {
        0
    };
    format!("{v:.decimals$}")
}

/// Formats a datum for display, using `step` for numbers.
pub(crate) fn format_datum(value: &Datum, step: f64) -> String {
    match value {
        Datum::Number(v) => format_number(*v, step),
        Datum::Category(s) => s.clone(),
    }
}

/// Smallest gap between consecutive numeric ticks, used as the label precision.
pub(crate) fn tick_step(ticks: &[Tick]) -> f64 {
    ticks
        .windows(2)
        .filter_map(|w| Some((w[1].value.as_f64()? - w[0].value.as_f64()?).abs()))
        .filter(|d| *d > 0.0)
        .fold(f64::INFINITY, f64::min)
}
