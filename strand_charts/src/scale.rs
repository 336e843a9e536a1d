// Copyright 2025 the Strand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scales and the scale builder.
//!
//! A scale maps a domain value into a pixel coordinate. Two kinds exist:
//! - [`ScaleLinear`] for continuous numeric domains, and
//! - [`ScalePoint`] for discrete domains spread evenly over the range.
//!
//! [`build_scales`] derives an x/y pair from a [`Dataset`]. Scales are immutable; a change of
//! dataset, size or stacking mode means building new ones.

extern crate alloc;

use alloc::vec::Vec;

use hashbrown::HashMap;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::ChartError;
use crate::config::{DiscreteOrder, ScaleOptions};
use crate::dataset::Dataset;
use crate::datum::{Datum, DatumKey};
use crate::stack::StackAccumulator;

/// A linear mapping from a continuous domain to a continuous range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLinear {
    domain: (f64, f64),
    range: (f64, f64),
}

impl ScaleLinear {
    /// Creates a new scale mapping `domain` values to `range` values.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Maps a value from domain space into range space.
    ///
    /// A zero-width domain maps everything to the start of the range.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = d1 - d0;
        if denom == 0.0 {
            return r0;
        }
        let t = (x - d0) / denom;
        r0 + t * (r1 - r0)
    }

    /// Maps a range value back into domain space.
    pub fn invert(&self, px: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = r1 - r0;
        if denom == 0.0 {
            return d0;
        }
        d0 + (px - r0) / denom * (d1 - d0)
    }

    /// Returns the domain as `(start, end)`.
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Returns the range as `(start, end)`.
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Returns “nice-ish” tick values that fall inside the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (lo, hi) = if self.domain.0 <= self.domain.1 {
            self.domain
        } else {
            (self.domain.1, self.domain.0)
        };
        let eps = (hi - lo).abs() * 1e-9;
        nice_ticks(lo, hi, count)
            .into_iter()
            .filter(|t| *t >= lo - eps && *t <= hi + eps)
            .collect()
    }
}

pub(crate) fn nice_ticks(mut min: f64, mut max: f64, count: usize) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    if min == max {
        return alloc::vec![min];
    }
    if min > max {
        core::mem::swap(&mut min, &mut max);
    }
    let span = max - min;
    let step0 = span / count.max(1) as f64;
    let step = nice_step(step0);
    if step == 0.0 {
        return alloc::vec![min, max];
    }

    let start = (min / step).floor() * step;
    let stop = (max / step).ceil() * step;

    let n_f = ((stop - start) / step).round();
    let n = if n_f.is_finite() && n_f >= 0.0 {
        let n_f = n_f.min(10_000.0);
        #[allow(
            clippy::cast_possible_truncation,
            reason = "guarded by finite/non-negative checks and capped at 10k"
        )]
        {
            n_f as u64
        }
    } else {
        0
    };
    (0..=n).map(|i| start + step * i as f64).collect()
}

fn nice_step(step: f64) -> f64 {
    if !step.is_finite() || step <= 0.0 {
        return 0.0;
    }
    let power = step.log10().floor();
    let base = 10_f64.powf(power);
    let error = step / base;
    let nice = if error >= 7.5 {
        10.0
    } else if error >= 3.5 {
        5.0
    } else if error >= 1.5 {
        2.0
    } else {
        1.0
    };
    nice * base
}

/// A discrete point scale: each domain value gets an evenly spaced position.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalePoint {
    domain: Vec<Datum>,
    index: HashMap<DatumKey, usize>,
    range: (f64, f64),
    padding: f64,
}

impl ScalePoint {
    /// Creates a new point scale over `domain` (duplicates keep their first position).
    pub fn new(domain: Vec<Datum>, range: (f64, f64)) -> Self {
        let mut index = HashMap::with_capacity(domain.len());
        let mut unique = Vec::with_capacity(domain.len());
        for d in domain {
            let key = d.key();
            if !index.contains_key(&key) {
                index.insert(key, unique.len());
                unique.push(d);
            }
        }
        Self {
            domain: unique,
            index,
            range,
            padding: 0.0,
        }
    }

    /// Sets the outer padding in point steps.
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding.max(0.0);
        self
    }

    /// Returns the ordered domain.
    pub fn domain(&self) -> &[Datum] {
        &self.domain
    }

    /// Returns the range as `(start, end)`.
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Returns the number of points.
    pub fn count(&self) -> usize {
        self.domain.len()
    }

    /// Distance between adjacent points.
    pub fn step(&self) -> f64 {
        let (r0, r1) = self.range;
        let n = self.domain.len() as f64;
        let denom = ((n - 1.0) + 2.0 * self.padding).max(1.0);
        (r1 - r0).abs() / denom
    }

    /// Returns the position of the point at `index`.
    ///
    /// Positions run from the range start towards the range end; a lone point sits in the middle.
    pub fn position(&self, index: usize) -> f64 {
        let (r0, r1) = self.range;
        let step = self.step();
        let n = self.domain.len() as f64;
        let span = (r1 - r0).abs();
        let offset = (span - step * (n - 1.0).max(0.0)) * 0.5;
        let dir = if r1 >= r0 { 1.0 } else { -1.0 };
        r0 + dir * (offset + step * index as f64)
    }

    /// Maps a domain value, or `None` if it is not part of the domain.
    pub fn map(&self, value: &Datum) -> Option<f64> {
        self.index.get(&value.key()).map(|&i| self.position(i))
    }
}

/// A built scale.
#[derive(Clone, Debug, PartialEq)]
pub enum Scale {
    /// Continuous numeric scale.
    Linear(ScaleLinear),
    /// Discrete point scale.
    Point(ScalePoint),
}

/// A tick: a domain value and its pixel position.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    /// Domain value.
    pub value: Datum,
    /// Pixel position along the scale's range.
    pub position: f64,
}

impl Scale {
    /// Maps a value into range space, or `None` if the scale does not accept it.
    pub fn map(&self, value: &Datum) -> Option<f64> {
        match self {
            Self::Linear(s) => value.as_f64().map(|v| s.map(v)),
            Self::Point(s) => s.map(value),
        }
    }

    /// Maps a number into range space.
    pub fn map_number(&self, value: f64) -> Option<f64> {
        match self {
            Self::Linear(s) => Some(s.map(value)),
            Self::Point(s) => s.map(&Datum::Number(value)),
        }
    }

    /// Returns `true` for discrete scales.
    pub fn is_discrete(&self) -> bool {
        matches!(self, Self::Point(_))
    }

    /// Returns the range as `(start, end)`.
    pub fn range(&self) -> (f64, f64) {
        match self {
            Self::Linear(s) => s.range(),
            Self::Point(s) => s.range(),
        }
    }

    /// Returns the continuous domain, if any.
    pub fn continuous_domain(&self) -> Option<(f64, f64)> {
        match self {
            Self::Linear(s) => Some(s.domain()),
            Self::Point(_) => None,
        }
    }

    /// Returns the discrete domain, if any.
    pub fn discrete_domain(&self) -> Option<&[Datum]> {
        match self {
            Self::Linear(_) => None,
            Self::Point(s) => Some(s.domain()),
        }
    }

    /// Returns ticks for guides.
    ///
    /// Continuous scales use nice 1/2/5 steps; discrete scales tick every domain value.
    pub fn ticks(&self, count: usize) -> Vec<Tick> {
        match self {
            Self::Linear(s) => s
                .ticks(count)
                .into_iter()
                .map(|v| Tick {
                    value: Datum::Number(v),
                    position: s.map(v),
                })
                .collect(),
            Self::Point(s) => s
                .domain()
                .iter()
                .enumerate()
                .map(|(i, d)| Tick {
                    value: d.clone(),
                    position: s.position(i),
                })
                .collect(),
        }
    }
}

/// An x/y scale pair.
#[derive(Clone, Debug, PartialEq)]
pub struct Scales {
    /// Horizontal scale, ranging over `[0, width]`.
    pub x: Scale,
    /// Vertical scale, ranging over `[height, 0]`.
    pub y: Scale,
}

/// Builds scales with default [`ScaleOptions`].
pub fn build_scales(
    dataset: &Dataset,
    width: f64,
    height: f64,
    stacked: bool,
) -> Result<Scales, ChartError> {
    build_scales_with(dataset, width, height, stacked, &ScaleOptions::default())
}

/// Builds an x/y scale pair for `dataset` over a `width` x `height` plot.
///
/// The x scale is linear when every x is a number, and a point scale otherwise. The y scale
/// is inverted so larger values sit higher on screen. In stacked mode the y domain covers the
/// running per-x sums of the series, starting at zero.
pub fn build_scales_with(
    dataset: &Dataset,
    width: f64,
    height: f64,
    stacked: bool,
    options: &ScaleOptions,
) -> Result<Scales, ChartError> {
    if dataset.is_empty() || dataset.point_count() == 0 {
        return Err(ChartError::EmptyDataset);
    }
    if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
        return Err(ChartError::InvalidDimensions { width, height });
    }
    dataset.check_finite()?;

    let x = match numeric_extent(dataset.points().map(|(_, _, p)| &p.x)) {
        Some(domain) => Scale::Linear(ScaleLinear::new(domain, (0.0, width))),
        None => {
            let domain = discrete_domain(dataset.points().map(|(_, _, p)| &p.x), options);
            Scale::Point(ScalePoint::new(domain, (0.0, width)).with_padding(options.x_padding))
        }
    };

    let y = if stacked {
        Scale::Linear(ScaleLinear::new(stacked_extent(dataset)?, (height, 0.0)))
    } else {
        match numeric_extent(dataset.points().map(|(_, _, p)| &p.y)) {
            Some((lo, hi)) if options.include_zero => {
                Scale::Linear(ScaleLinear::new((lo.min(0.0), hi.max(0.0)), (height, 0.0)))
            }
            Some(domain) => Scale::Linear(ScaleLinear::new(domain, (height, 0.0))),
            None => {
                let domain = discrete_domain(dataset.points().map(|(_, _, p)| &p.y), options);
                Scale::Point(ScalePoint::new(domain, (height, 0.0)))
            }
        }
    };

    log::debug!(
        "built scales for {} series ({} points): x {}, y {:?}, stacked={stacked}",
        dataset.len(),
        dataset.point_count(),
        if x.is_discrete() { "discrete" } else { "linear" },
        y.continuous_domain(),
    );

    Ok(Scales { x, y })
}

/// Returns `(min, max)` if every value is a number.
fn numeric_extent<'a>(values: impl Iterator<Item = &'a Datum>) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for d in values {
        let v = d.as_f64()?;
        min = min.min(v);
        max = max.max(v);
    }
    (min <= max).then_some((min, max))
}

fn discrete_domain<'a>(
    values: impl Iterator<Item = &'a Datum>,
    options: &ScaleOptions,
) -> Vec<Datum> {
    let mut seen = hashbrown::HashSet::new();
    let mut out = Vec::new();
    for d in values {
        if seen.insert(d.key()) {
            out.push(d.clone());
        }
    }
    if options.discrete_order == DiscreteOrder::Sorted {
        out.sort_by(Datum::sorted_cmp);
    }
    out
}

fn stacked_extent(dataset: &Dataset) -> Result<(f64, f64), ChartError> {
    let mut acc = StackAccumulator::new();
    let mut lo = 0.0_f64;
    let mut hi = f64::NEG_INFINITY;
    for series in dataset.series() {
        for (index, p) in series.points.iter().enumerate() {
            let Some(y) = p.y.as_f64() else {
                return Err(ChartError::NonNumericStackValue {
                    series: series.id.clone(),
                    index,
                });
            };
            let (_, top) = acc.push(&p.x, y);
            lo = lo.min(top);
            hi = hi.max(top);
        }
    }
    Ok((lo, hi.max(lo)))
}
