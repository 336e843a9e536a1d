// Copyright 2025 the Strand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The line chart scene: grid, axes, areas, lines and markers in one SVG document.

use std::fmt::Write as _;

use kurbo::{BezPath, PathEl};
use strand_charts::{
    ChartError, Dataset, GeneratedLine, Interpolator, LineChartConfig, LineChartFrame,
    LineChartMemo, Scale, compute_frame,
};

use crate::axis::{AxisOrient, AxisSpec, axis_elements};
use crate::grid::{grid_x, grid_y};
use crate::markers::{MarkersSpec, marker_elements};
use crate::style::{StrokeStyle, Theme};
use crate::svg::{self, SvgBuffer};
use crate::z_order;

/// Filled areas below each line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AreaSpec {
    /// Fill opacity applied to the series color.
    pub opacity: f32,
    /// Value the area extends to when not stacked.
    pub baseline_value: f64,
}

impl Default for AreaSpec {
    fn default() -> Self {
        Self {
            opacity: 0.2,
            baseline_value: 0.0,
        }
    }
}

/// A complete line chart description.
#[derive(Clone, Debug, PartialEq)]
pub struct LineSceneSpec {
    /// Size, margins, stacking, curve and colors.
    pub chart: LineChartConfig,
    /// Axis above the plot.
    pub axis_top: Option<AxisSpec>,
    /// Axis right of the plot.
    pub axis_right: Option<AxisSpec>,
    /// Axis below the plot.
    pub axis_bottom: Option<AxisSpec>,
    /// Axis left of the plot.
    pub axis_left: Option<AxisSpec>,
    /// Vertical gridlines at x ticks.
    pub enable_grid_x: bool,
    /// Horizontal gridlines at y ticks.
    pub enable_grid_y: bool,
    /// Area fill below lines; `None` draws lines only.
    pub area: Option<AreaSpec>,
    /// Point markers; `None` draws no markers.
    pub markers: Option<MarkersSpec>,
    /// Line stroke width.
    pub line_width: f64,
    /// Visual tokens.
    pub theme: Theme,
}

impl Default for LineSceneSpec {
    fn default() -> Self {
        Self::new(LineChartConfig::default())
    }
}

impl LineSceneSpec {
    /// Creates a scene with a bottom and a left axis, both grids, and default markers.
    pub fn new(chart: LineChartConfig) -> Self {
        Self {
            chart,
            axis_top: None,
            axis_right: None,
            axis_bottom: Some(AxisSpec::default()),
            axis_left: Some(AxisSpec::default()),
            enable_grid_x: true,
            enable_grid_y: true,
            area: None,
            markers: Some(MarkersSpec::default()),
            line_width: 2.0,
            theme: Theme::default(),
        }
    }

    /// Sets (or removes) the axis on one side.
    pub fn with_axis(mut self, orient: AxisOrient, axis: Option<AxisSpec>) -> Self {
        match orient {
            AxisOrient::Top => self.axis_top = axis,
            AxisOrient::Right => self.axis_right = axis,
            AxisOrient::Bottom => self.axis_bottom = axis,
            AxisOrient::Left => self.axis_left = axis,
        }
        self
    }

    /// Enables or disables the x and y gridlines.
    pub fn with_grid(mut self, x: bool, y: bool) -> Self {
        self.enable_grid_x = x;
        self.enable_grid_y = y;
        self
    }

    /// Sets area fills.
    pub fn with_area(mut self, area: Option<AreaSpec>) -> Self {
        self.area = area;
        self
    }

    /// Sets point markers.
    pub fn with_markers(mut self, markers: Option<MarkersSpec>) -> Self {
        self.markers = markers;
        self
    }

    /// Sets the line stroke width.
    pub fn with_line_width(mut self, width: f64) -> Self {
        self.line_width = width.max(0.0);
        self
    }

    /// Sets the theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Runs the pipeline on `dataset` and renders the result.
    pub fn render(&self, dataset: &Dataset) -> Result<String, ChartError> {
        let frame = compute_frame(dataset, &self.chart)?;
        Ok(self.render_frame(&frame))
    }

    /// Like [`Self::render`], but reuses whatever `memo` can from the previous call.
    pub fn render_memo(
        &self,
        memo: &mut LineChartMemo,
        dataset: &Dataset,
    ) -> Result<String, ChartError> {
        let frame = memo.update(dataset, &self.chart)?;
        Ok(self.render_frame(frame))
    }

    /// Renders an already computed frame.
    pub fn render_frame(&self, frame: &LineChartFrame) -> String {
        let mut buf = SvgBuffer::default();
        let theme = &self.theme;
        let (w, h) = (frame.width, frame.height);

        if self.enable_grid_x {
            grid_x(&mut buf, &frame.scales.x, self.x_tick_count(), h, theme);
        }
        if self.enable_grid_y {
            grid_y(&mut buf, &frame.scales.y, self.y_tick_count(), w, theme);
        }

        let axes = [
            (AxisOrient::Top, &self.axis_top),
            (AxisOrient::Right, &self.axis_right),
            (AxisOrient::Bottom, &self.axis_bottom),
            (AxisOrient::Left, &self.axis_left),
        ];
        for (orient, axis) in axes {
            if let Some(spec) = axis {
                let scale = if orient.is_horizontal() {
                    &frame.scales.x
                } else {
                    &frame.scales.y
                };
                axis_elements(&mut buf, orient, spec, scale, w, h, theme);
            }
        }

        if let Some(area) = &self.area {
            let interpolator = self.chart.curve.interpolator();
            let floor = area_floor(&frame.scales.y, area.baseline_value);
            for line in &frame.lines {
                let shape = area_path(line, interpolator, floor);
                let fill = line.color.multiply_alpha(area.opacity);
                buf.push(
                    z_order::SERIES_AREA,
                    svg::path(&shape, Some(fill), &StrokeStyle::solid(fill, 0.0)),
                );
            }
        }

        for (line, path) in frame.lines.iter().zip(&frame.paths) {
            let stroke = StrokeStyle::solid(line.color, self.line_width);
            buf.push(z_order::SERIES_STROKE, svg::path(path, None, &stroke));
        }

        if let Some(markers) = &self.markers {
            marker_elements(&mut buf, &frame.lines, markers, theme);
        }

        log::debug!(
            "line scene: {} series, {} elements, {}x{} plot",
            frame.lines.len(),
            buf.len(),
            w,
            h
        );
        self.write_document(buf)
    }

    fn x_tick_count(&self) -> usize {
        self.axis_bottom
            .as_ref()
            .or(self.axis_top.as_ref())
            .map_or(5, |a| a.tick_count)
    }

    fn y_tick_count(&self) -> usize {
        self.axis_left
            .as_ref()
            .or(self.axis_right.as_ref())
            .map_or(5, |a| a.tick_count)
    }

    fn write_document(&self, buf: SvgBuffer) -> String {
        let (width, height) = (self.chart.width, self.chart.height);
        let margin = self.chart.margin;
        let mut out = String::new();
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
        );
        if let Some(bg) = self.theme.background {
            let _ = write!(out, r#"<rect width="{width}" height="{height}""#);
            svg::write_paint_attr(&mut out, "fill", bg);
            out.push_str("/>\n");
        }
        let _ = writeln!(
            out,
            r#"<g transform="translate({},{})">"#,
            margin.left, margin.top
        );
        buf.write_into(&mut out);
        out.push_str("</g>\n</svg>\n");
        out
    }
}

/// Pixel y an unstacked area extends to: the baseline value when the scale can place it,
/// otherwise the bottom of the range.
fn area_floor(y: &Scale, baseline_value: f64) -> f64 {
    let (bottom, top) = y.range();
    y.map_number(baseline_value)
        .map_or(bottom, |v| v.clamp(bottom.min(top), bottom.max(top)))
}

/// Closed area between a line and its stack baseline (or `floor` when unstacked).
///
/// Both edges are interpolated left to right so direction-sensitive curves (the step
/// variants) trace the same shape as the line below; the bottom edge is then walked back.
fn area_path(line: &GeneratedLine, interpolator: Interpolator, floor: f64) -> BezPath {
    let bottom: Vec<kurbo::Point> = line
        .points
        .iter()
        .map(|p| kurbo::Point::new(p.x, p.baseline.unwrap_or(floor)))
        .collect();
    let mut path: BezPath = interpolator(&line.positions())
        .elements()
        .iter()
        .filter(|el| !matches!(el, PathEl::ClosePath))
        .copied()
        .collect();
    if path.elements().is_empty() {
        return path;
    }
    let (end, segments) = reversed_segments(&interpolator(&bottom));
    if let Some(end) = end {
        path.line_to(end);
    }
    for el in segments {
        path.push(el);
    }
    path.close_path();
    path
}

/// Returns the end point of `path` and its segments traversed backwards.
///
/// Subpath breaks and closes are dropped; the result is one open run.
fn reversed_segments(path: &BezPath) -> (Option<kurbo::Point>, Vec<PathEl>) {
    let mut out = Vec::with_capacity(path.elements().len());
    let mut current: Option<kurbo::Point> = None;
    for el in path.elements() {
        let Some(from) = current else {
            current = el.end_point();
            continue;
        };
        match *el {
            PathEl::MoveTo(_) | PathEl::ClosePath => {}
            PathEl::LineTo(_) => out.push(PathEl::LineTo(from)),
            PathEl::QuadTo(c, _) => out.push(PathEl::QuadTo(c, from)),
            PathEl::CurveTo(c1, c2, _) => out.push(PathEl::CurveTo(c2, c1, from)),
        }
        if let Some(p) = el.end_point() {
            current = Some(p);
        }
    }
    out.reverse();
    (current, out)
}

#[cfg(test)]
mod tests {
    use peniko::Color;
    use strand_charts::{Curve, Margin, Series};

    use super::*;

    fn dataset() -> Dataset {
        Dataset::new(vec![
            Series::from_pairs("a", [(0, 1), (1, 3), (2, 2)]),
            Series::from_pairs("b", [(0, 2), (1, 1), (2, 4)]),
        ])
    }

    fn chart() -> LineChartConfig {
        LineChartConfig::new(240.0, 140.0).with_margin(Margin::new(10.0, 20.0, 30.0, 20.0))
    }

    #[test]
    fn document_has_margin_group_and_one_path_per_series() {
        let svg = LineSceneSpec::new(chart()).render(&dataset()).unwrap();
        assert!(svg.starts_with("<svg "));
        assert!(svg.contains(r#"width="240" height="140""#));
        assert!(svg.contains(r#"<g transform="translate(20,10)">"#));
        assert_eq!(svg.matches(r#"fill="none""#).count(), 2);
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(!svg.contains("<rect"));
    }

    #[test]
    fn layers_paint_grid_then_axes_then_lines_then_markers() {
        let svg = LineSceneSpec::new(chart()).render(&dataset()).unwrap();
        let grid = svg.find("#dddddd").unwrap();
        let axis_label = svg.find("<text").unwrap();
        let line = svg.find(r#"fill="none""#).unwrap();
        let marker = svg.rfind("<path").unwrap();
        assert!(grid < axis_label);
        assert!(axis_label < line);
        assert!(line < marker);
        // 2 series x 3 points of markers, plus the 2 lines.
        assert_eq!(svg.matches("<path").count(), 8);
    }

    #[test]
    fn disabling_axes_and_grid_leaves_only_series() {
        let spec = LineSceneSpec::new(chart())
            .with_axis(AxisOrient::Bottom, None)
            .with_axis(AxisOrient::Left, None)
            .with_grid(false, false)
            .with_markers(None);
        let svg = spec.render(&dataset()).unwrap();
        assert!(!svg.contains("<line"));
        assert!(!svg.contains("<text"));
        assert_eq!(svg.matches("<path").count(), 2);
    }

    #[test]
    fn background_is_drawn_outside_the_margin_group() {
        let theme = Theme {
            background: Some(Color::WHITE),
            ..Theme::default()
        };
        let svg = LineSceneSpec::new(chart())
            .with_theme(theme)
            .render(&dataset())
            .unwrap();
        let rect = svg.find("<rect").unwrap();
        let group = svg.find("<g ").unwrap();
        assert!(rect < group);
    }

    #[test]
    fn stacked_areas_close_onto_their_baselines() {
        let spec = LineSceneSpec::new(chart().with_stacked(true).with_curve(Curve::MonotoneX))
            .with_area(Some(AreaSpec::default()));
        let frame = compute_frame(&dataset(), &spec.chart).unwrap();
        let path = area_path(&frame.lines[1], Curve::Linear.interpolator(), 0.0);
        let els = path.elements();
        assert_eq!(els.len(), 7);
        assert_eq!(els.last(), Some(&PathEl::ClosePath));
        let a_top = frame.lines[0].points[2].y;
        assert_eq!(els[3], PathEl::LineTo(kurbo::Point::new(frame.width, a_top)));

        let svg = spec.render_frame(&frame);
        assert!(svg.contains("fill-opacity"));
    }

    #[test]
    fn errors_surface_from_the_pipeline() {
        let spec = LineSceneSpec::default();
        assert_eq!(
            spec.render(&Dataset::default()),
            Err(ChartError::EmptyDataset)
        );
    }

    #[test]
    fn memoized_rendering_matches_direct_rendering() {
        let spec = LineSceneSpec::new(chart());
        let mut memo = LineChartMemo::new();
        let a = spec.render_memo(&mut memo, &dataset()).unwrap();
        let b = spec.render_memo(&mut memo, &dataset()).unwrap();
        assert_eq!(a, b);
        assert_eq!(a, spec.render(&dataset()).unwrap());
        assert_eq!(memo.stats().scale_builds, 1);
    }

    fn vertices(path: &BezPath) -> Vec<kurbo::Point> {
        path.elements().iter().filter_map(PathEl::end_point).collect()
    }

    #[test]
    fn stacked_step_areas_follow_the_line_below() {
        let ds = Dataset::new(vec![
            Series::from_pairs("a", [(0, 1), (1, 3), (2, 2)]),
            Series::from_pairs("b", [(0, 1), (1, 1), (2, 1)]),
        ]);
        for curve in [Curve::StepAfter, Curve::StepBefore, Curve::Step] {
            let config = LineChartConfig::new(100.0, 100.0)
                .with_stacked(true)
                .with_curve(curve);
            let frame = compute_frame(&ds, &config).unwrap();
            let area = vertices(&area_path(&frame.lines[1], curve.interpolator(), 0.0));
            for v in vertices(&frame.paths[0]) {
                assert!(area.contains(&v), "{curve}: {v:?} missing from {area:?}");
            }
        }
    }

    #[test]
    fn closed_curves_still_fill_a_single_polygon() {
        let config = chart().with_stacked(true).with_curve(Curve::LinearClosed);
        let frame = compute_frame(&dataset(), &config).unwrap();
        let path = area_path(&frame.lines[1], Curve::LinearClosed.interpolator(), 0.0);
        let els = path.elements();
        let closes = els.iter().filter(|el| **el == PathEl::ClosePath).count();
        let moves = els
            .iter()
            .filter(|el| matches!(el, PathEl::MoveTo(_)))
            .count();
        assert_eq!((moves, closes), (1, 1));
        assert_eq!(els.last(), Some(&PathEl::ClosePath));
    }

    #[test]
    fn curved_bottom_edges_are_reversed_control_for_control() {
        let mut forward = BezPath::new();
        forward.move_to((0.0, 0.0));
        forward.curve_to((1.0, 1.0), (2.0, 1.0), (3.0, 0.0));
        forward.line_to((4.0, 2.0));
        let (end, segments) = reversed_segments(&forward);
        assert_eq!(end, Some(kurbo::Point::new(4.0, 2.0)));
        assert_eq!(
            segments,
            vec![
                PathEl::LineTo(kurbo::Point::new(3.0, 0.0)),
                PathEl::CurveTo(
                    kurbo::Point::new(2.0, 1.0),
                    kurbo::Point::new(1.0, 1.0),
                    kurbo::Point::new(0.0, 0.0)
                ),
            ]
        );
    }
}
