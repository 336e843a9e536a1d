// Copyright 2025 the Strand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Running per-x sums for stacked series.
//!
//! Series are stacked in dataset order. An x position a series does not visit contributes
//! nothing to that series, so later series stack on whatever has been accumulated so far.

extern crate alloc;

use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::ChartError;
use crate::dataset::Dataset;
use crate::datum::{Datum, DatumKey};

/// Accumulates stacked values keyed by x position.
#[derive(Clone, Debug, Default)]
pub(crate) struct StackAccumulator {
    sums: HashMap<DatumKey, f64>,
}

impl StackAccumulator {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Adds `y` at `x` and returns the `(base, top)` of the new segment.
    pub(crate) fn push(&mut self, x: &Datum, y: f64) -> (f64, f64) {
        let sum = self.sums.entry(x.key()).or_insert(0.0);
        let base = *sum;
        *sum += y;
        (base, *sum)
    }
}

/// Returns the stacked total at every x position, in first-seen order.
pub fn stacked_totals(dataset: &Dataset) -> Result<Vec<(Datum, f64)>, ChartError> {
    dataset.check_finite()?;
    let mut order: Vec<Datum> = Vec::new();
    let mut acc = StackAccumulator::new();
    for series in dataset.series() {
        for (index, p) in series.points.iter().enumerate() {
            let y = p
                .y
                .as_f64()
                .ok_or_else(|| ChartError::NonNumericStackValue {
                    series: series.id.clone(),
                    index,
                })?;
            if !acc.sums.contains_key(&p.x.key()) {
                order.push(p.x.clone());
            }
            acc.push(&p.x, y);
        }
    }
    Ok(order
        .into_iter()
        .map(|x| {
            let total = acc.sums.get(&x.key()).copied().unwrap_or(0.0);
            (x, total)
        })
        .collect())
}
