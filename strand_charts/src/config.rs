// Copyright 2025 the Strand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart configuration.
//!
//! All defaults live in the `Default` impls below; callers pass configuration explicitly.

use crate::color::ColorScheme;
use crate::curve::Curve;

/// Space reserved around the plot area, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Margin {
    /// Top margin.
    pub top: f64,
    /// Right margin.
    pub right: f64,
    /// Bottom margin.
    pub bottom: f64,
    /// Left margin.
    pub left: f64,
}

impl Margin {
    /// Creates a margin from explicit sides.
    pub fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// The same margin on every side.
    pub fn uniform(m: f64) -> Self {
        Self::new(m, m, m, m)
    }
}

/// Order of values in a discrete (point) domain.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DiscreteOrder {
    /// Order of first appearance, scanning series then points in dataset order.
    #[default]
    FirstSeen,
    /// Numbers ascending, then categories lexicographically.
    Sorted,
}

/// Options controlling domain derivation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleOptions {
    /// Ordering of discrete domains.
    pub discrete_order: DiscreteOrder,
    /// Widen the non-stacked y domain so it contains `0`.
    pub include_zero: bool,
    /// Outer padding of discrete x scales, in point steps.
    pub x_padding: f64,
}

impl Default for ScaleOptions {
    fn default() -> Self {
        Self {
            discrete_order: DiscreteOrder::FirstSeen,
            include_zero: false,
            x_padding: 0.0,
        }
    }
}

impl ScaleOptions {
    /// Sets the discrete domain ordering.
    pub fn with_discrete_order(mut self, order: DiscreteOrder) -> Self {
        self.discrete_order = order;
        self
    }

    /// Enables or disables widening the y domain to contain zero.
    pub fn with_include_zero(mut self, include_zero: bool) -> Self {
        self.include_zero = include_zero;
        self
    }

    /// Sets the discrete x padding (clamped to be non-negative).
    pub fn with_x_padding(mut self, padding: f64) -> Self {
        self.x_padding = padding.max(0.0);
        self
    }
}

/// Full configuration of a line chart pipeline run.
///
/// Defaults: a 400x300 outer size, no margin, not stacked, `linear` curve and the
/// [`ColorScheme::Nivo`] palette.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineChartConfig {
    /// Outer width in pixels, margins included.
    pub width: f64,
    /// Outer height in pixels, margins included.
    pub height: f64,
    /// Space around the plot area.
    pub margin: Margin,
    /// Draw series cumulatively.
    pub stacked: bool,
    /// Interpolation used for line paths.
    pub curve: Curve,
    /// Palette for series colors.
    pub colors: ColorScheme,
    /// Domain derivation options.
    pub scale: ScaleOptions,
}

impl Default for LineChartConfig {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 300.0,
            margin: Margin::default(),
            stacked: false,
            curve: Curve::Linear,
            colors: ColorScheme::default(),
            scale: ScaleOptions::default(),
        }
    }
}

impl LineChartConfig {
    /// Creates a config with the given outer size and default everything else.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Sets the margin.
    pub fn with_margin(mut self, margin: Margin) -> Self {
        self.margin = margin;
        self
    }

    /// Enables or disables stacking.
    pub fn with_stacked(mut self, stacked: bool) -> Self {
        self.stacked = stacked;
        self
    }

    /// Sets the curve.
    pub fn with_curve(mut self, curve: Curve) -> Self {
        self.curve = curve;
        self
    }

    /// Sets the color scheme.
    pub fn with_colors(mut self, colors: ColorScheme) -> Self {
        self.colors = colors;
        self
    }

    /// Sets the scale options.
    pub fn with_scale_options(mut self, scale: ScaleOptions) -> Self {
        self.scale = scale;
        self
    }

    /// Width of the plot area (outer width minus horizontal margins).
    pub fn inner_width(&self) -> f64 {
        self.width - self.margin.left - self.margin.right
    }

    /// Height of the plot area (outer height minus vertical margins).
    pub fn inner_height(&self) -> f64 {
        self.height - self.margin.top - self.margin.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inner_size_subtracts_margins() {
        let config = LineChartConfig::new(500.0, 400.0).with_margin(Margin::new(
            10.0, 20.0, 30.0, 40.0,
        ));
        assert_eq!(config.inner_width(), 440.0);
        assert_eq!(config.inner_height(), 360.0);
    }
}
