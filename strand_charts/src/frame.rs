// Copyright 2025 the Strand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The full pipeline: dataset and config in, scales, lines and paths out.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::BezPath;

use crate::ChartError;
use crate::color::OrdinalColors;
use crate::config::LineChartConfig;
use crate::curve::Curve;
use crate::dataset::Dataset;
use crate::lines::{GeneratedLine, generate_lines};
use crate::scale::{Scales, build_scales_with};

/// Everything a scene needs to draw one line chart.
#[derive(Clone, Debug, PartialEq)]
pub struct LineChartFrame {
    /// Plot area width (outer width minus margins).
    pub width: f64,
    /// Plot area height (outer height minus margins).
    pub height: f64,
    /// Scales over the plot area.
    pub scales: Scales,
    /// One line per series, in dataset order.
    pub lines: Vec<GeneratedLine>,
    /// One path per line, interpolated with the configured curve.
    pub paths: Vec<BezPath>,
}

/// Runs the whole pipeline without any caching.
///
/// Unlike the individual stages, this also rejects duplicate series ids.
pub fn compute_frame(
    dataset: &Dataset,
    config: &LineChartConfig,
) -> Result<LineChartFrame, ChartError> {
    dataset.validate()?;
    let width = config.inner_width();
    let height = config.inner_height();
    let scales = build_scales_with(dataset, width, height, config.stacked, &config.scale)?;
    let lines = lines_for(dataset, &scales, config)?;
    let paths = paths_for(&lines, config.curve);
    Ok(LineChartFrame {
        width,
        height,
        scales,
        lines,
        paths,
    })
}

pub(crate) fn lines_for(
    dataset: &Dataset,
    scales: &Scales,
    config: &LineChartConfig,
) -> Result<Vec<GeneratedLine>, ChartError> {
    let colors = OrdinalColors::for_dataset(config.colors, dataset);
    generate_lines(
        dataset,
        &scales.x,
        &scales.y,
        |s| colors.series_color(s),
        config.stacked,
    )
}

pub(crate) fn paths_for(lines: &[GeneratedLine], curve: Curve) -> Vec<BezPath> {
    let interpolator = curve.interpolator();
    lines.iter().map(|l| l.path(interpolator)).collect()
}
