// Copyright 2025 the Strand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line generation: series data to pixel-space point sequences.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::BezPath;
use peniko::Color;

use crate::ChartError;
use crate::curve::Interpolator;
use crate::dataset::{Dataset, Point, Series};
use crate::scale::Scale;
use crate::stack::StackAccumulator;

/// A point of a generated line, in pixel space.
#[derive(Clone, Debug, PartialEq)]
pub struct LinePoint {
    /// Horizontal pixel position.
    pub x: f64,
    /// Vertical pixel position (of the stacked top in stacked mode).
    pub y: f64,
    /// Pixel y of the stack below this point; `None` unless stacked.
    pub baseline: Option<f64>,
    /// The source data point.
    pub data: Point,
}

impl LinePoint {
    /// Returns the pixel position as a `kurbo::Point`.
    pub fn position(&self) -> kurbo::Point {
        kurbo::Point::new(self.x, self.y)
    }
}

/// One series mapped into pixel space.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratedLine {
    /// Series id.
    pub id: String,
    /// Stroke color.
    pub color: Color,
    /// Points in series order.
    pub points: Vec<LinePoint>,
}

impl GeneratedLine {
    /// Returns the pixel positions in order.
    pub fn positions(&self) -> Vec<kurbo::Point> {
        self.points.iter().map(LinePoint::position).collect()
    }

    /// Interpolates this line into a path.
    pub fn path(&self, interpolator: Interpolator) -> BezPath {
        interpolator(&self.positions())
    }
}

/// Maps every series of `dataset` through the given scales.
///
/// Output order matches dataset order. In stacked mode, each point is drawn at the running
/// per-x sum including this series, and `baseline` records the sum before it. Positions a
/// series skips contribute zero. `NaN` and infinite numbers are rejected with
/// [`ChartError::NonFiniteValue`].
pub fn generate_lines(
    dataset: &Dataset,
    x_scale: &Scale,
    y_scale: &Scale,
    color: impl Fn(&Series) -> Color,
    stacked: bool,
) -> Result<Vec<GeneratedLine>, ChartError> {
    dataset.check_finite()?;
    let mut acc = StackAccumulator::new();
    let mut lines = Vec::with_capacity(dataset.len());

    for series in dataset.series() {
        let unmapped = |index| ChartError::UnmappedValue {
            series: series.id.clone(),
            index,
        };
        let mut points = Vec::with_capacity(series.points.len());
        for (index, p) in series.points.iter().enumerate() {
            let x = x_scale.map(&p.x).ok_or_else(|| unmapped(index))?;
            let (y, baseline) = if stacked {
                let value = p.y.as_f64().ok_or_else(|| ChartError::NonNumericStackValue {
                    series: series.id.clone(),
                    index,
                })?;
                let (base, top) = acc.push(&p.x, value);
                let y = y_scale.map_number(top).ok_or_else(|| unmapped(index))?;
                let baseline = y_scale.map_number(base).ok_or_else(|| unmapped(index))?;
                (y, Some(baseline))
            } else {
                (y_scale.map(&p.y).ok_or_else(|| unmapped(index))?, None)
            };
            points.push(LinePoint {
                x,
                y,
                baseline,
                data: p.clone(),
            });
        }
        log::trace!("generated line `{}` with {} points", series.id, points.len());
        lines.push(GeneratedLine {
            id: series.id.clone(),
            color: color(series),
            points,
        });
    }

    Ok(lines)
}
