// Copyright 2025 the Strand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stroke and theme styling.

use peniko::Color;
use peniko::color::palette::css;

/// A paint + width pair for stroked paths (ticks, gridlines, marker borders).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke paint.
    pub color: Color,
    /// Stroke width in pixels.
    pub width: f64,
}

impl StrokeStyle {
    /// Convenience for a solid stroke.
    pub fn solid(color: Color, width: f64) -> Self {
        Self { color, width }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::solid(css::BLACK, 1.0)
    }
}

/// Axis styling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisTheme {
    /// Tick mark stroke.
    pub tick: StrokeStyle,
    /// Tick label fill.
    pub text_color: Color,
    /// Tick label font size.
    pub font_size: f64,
    /// Legend (axis title) fill.
    pub legend_color: Color,
    /// Legend font size.
    pub legend_font_size: f64,
}

impl Default for AxisTheme {
    fn default() -> Self {
        Self {
            tick: StrokeStyle::default(),
            text_color: css::BLACK,
            font_size: 11.0,
            legend_color: css::BLACK,
            legend_font_size: 12.0,
        }
    }
}

/// Visual tokens passed through to every scene layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    /// Fill behind the whole chart; `None` leaves it transparent.
    pub background: Option<Color>,
    /// Axis styling.
    pub axis: AxisTheme,
    /// Gridline stroke.
    pub grid: StrokeStyle,
    /// Marker label fill.
    pub marker_label_color: Color,
    /// Marker label font size.
    pub marker_label_font_size: f64,
    /// Font family for all text.
    pub font_family: &'static str,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: None,
            axis: AxisTheme::default(),
            grid: StrokeStyle::solid(Color::from_rgb8(0xdd, 0xdd, 0xdd), 1.0),
            marker_label_color: css::BLACK,
            marker_label_font_size: 11.0,
            font_family: "sans-serif",
        }
    }
}
