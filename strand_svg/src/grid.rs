// Copyright 2025 the Strand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gridlines behind the series.

use strand_charts::Scale;

use crate::style::Theme;
use crate::svg::{self, SvgBuffer};
use crate::z_order;

/// Emits one vertical line per x tick.
pub(crate) fn grid_x(buf: &mut SvgBuffer, scale: &Scale, count: usize, height: f64, theme: &Theme) {
    for tick in scale.ticks(count) {
        let x = tick.position;
        buf.push(z_order::GRID_LINES, svg::line(x, 0.0, x, height, &theme.grid));
    }
}

/// Emits one horizontal line per y tick.
pub(crate) fn grid_y(buf: &mut SvgBuffer, scale: &Scale, count: usize, width: f64, theme: &Theme) {
    for tick in scale.ticks(count) {
        let y = tick.position;
        buf.push(z_order::GRID_LINES, svg::line(0.0, y, width, y, &theme.grid));
    }
}
