// Copyright 2025 the Strand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Curve interpolation: ordered points to drawable paths.
//!
//! Each [`Curve`] is bound to a pure function from a point slice to a [`BezPath`].
//! All curves share the degenerate cases:
//! - no points produce an empty path,
//! - one point produces a lone `MoveTo`,
//! - two points produce `MoveTo` + `LineTo` (except the step curves, which still step).

extern crate alloc;

use alloc::string::ToString;
use core::fmt;
use core::str::FromStr;

use kurbo::{BezPath, PathEl, Point};
use smallvec::SmallVec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::ChartError;

/// A path interpolation function.
pub type Interpolator = fn(&[Point]) -> BezPath;

/// Supported curve kinds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Curve {
    /// Straight segments.
    #[default]
    Linear,
    /// Straight segments, closed back to the first point.
    LinearClosed,
    /// Steps changing y halfway between points.
    Step,
    /// Steps changing y at the previous point's x, then moving across.
    StepBefore,
    /// Steps moving across first, changing y at the next point's x.
    StepAfter,
    /// Uniform cubic B-spline (does not pass through interior points).
    Basis,
    /// Cardinal spline with zero tension.
    Cardinal,
    /// Centripetal Catmull-Rom spline (alpha 0.5).
    CatmullRom,
    /// Monotone in x; never overshoots the data in y.
    MonotoneX,
    /// Monotone in y; never overshoots the data in x.
    MonotoneY,
    /// Natural cubic spline (zero second derivative at the ends).
    Natural,
}

impl Curve {
    /// Every supported curve.
    pub const ALL: [Self; 11] = [
        Self::Linear,
        Self::LinearClosed,
        Self::Step,
        Self::StepBefore,
        Self::StepAfter,
        Self::Basis,
        Self::Cardinal,
        Self::CatmullRom,
        Self::MonotoneX,
        Self::MonotoneY,
        Self::Natural,
    ];

    /// The name used to select this curve.
    pub fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::LinearClosed => "linearClosed",
            Self::Step => "step",
            Self::StepBefore => "stepBefore",
            Self::StepAfter => "stepAfter",
            Self::Basis => "basis",
            Self::Cardinal => "cardinal",
            Self::CatmullRom => "catmullRom",
            Self::MonotoneX => "monotoneX",
            Self::MonotoneY => "monotoneY",
            Self::Natural => "natural",
        }
    }

    /// Returns the interpolation function for this curve.
    pub fn interpolator(self) -> Interpolator {
        match self {
            Self::Linear => linear,
            Self::LinearClosed => linear_closed,
            Self::Step => step,
            Self::StepBefore => step_before,
            Self::StepAfter => step_after,
            Self::Basis => basis,
            Self::Cardinal => cardinal,
            Self::CatmullRom => catmull_rom,
            Self::MonotoneX => monotone_x,
            Self::MonotoneY => monotone_y,
            Self::Natural => natural,
        }
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Curve {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| ChartError::UnknownCurve(s.to_string()))
    }
}

/// Looks up the interpolator for a curve name.
pub fn interpolator_for(name: &str) -> Result<Interpolator, ChartError> {
    name.parse::<Curve>().map(Curve::interpolator)
}

fn linear(points: &[Point]) -> BezPath {
    let mut p = BezPath::new();
    for (i, &pt) in points.iter().enumerate() {
        if i == 0 {
            p.move_to(pt);
        } else {
            p.line_to(pt);
        }
    }
    p
}

fn linear_closed(points: &[Point]) -> BezPath {
    let mut p = linear(points);
    if points.len() > 1 {
        p.close_path();
    }
    p
}

/// Steps where `t` is the fraction of the way to the next point at which y changes.
fn step_at(points: &[Point], t: f64) -> BezPath {
    let mut p = BezPath::new();
    let Some((&first, rest)) = points.split_first() else {
        return p;
    };
    p.move_to(first);
    let mut prev = first;
    for &pt in rest {
        if t <= 0.0 {
            p.line_to((prev.x, pt.y));
            p.line_to(pt);
        } else {
            let x = prev.x * (1.0 - t) + pt.x * t;
            p.line_to((x, prev.y));
            p.line_to((x, pt.y));
        }
        prev = pt;
    }
    if t > 0.0 && t < 1.0 && !rest.is_empty() {
        p.line_to(prev);
    }
    p
}

fn step(points: &[Point]) -> BezPath {
    step_at(points, 0.5)
}

fn step_before(points: &[Point]) -> BezPath {
    step_at(points, 0.0)
}

fn step_after(points: &[Point]) -> BezPath {
    step_at(points, 1.0)
}

fn basis(points: &[Point]) -> BezPath {
    let n = points.len();
    if n < 3 {
        return linear(points);
    }
    let mut p = BezPath::new();
    let p0 = points[0];
    let p1 = points[1];
    p.move_to(p0);
    p.line_to(((5.0 * p0.x + p1.x) / 6.0, (5.0 * p0.y + p1.y) / 6.0));
    let segment = |p: &mut BezPath, a: Point, b: Point, c: Point| {
        p.curve_to(
            ((2.0 * a.x + b.x) / 3.0, (2.0 * a.y + b.y) / 3.0),
            ((a.x + 2.0 * b.x) / 3.0, (a.y + 2.0 * b.y) / 3.0),
            ((a.x + 4.0 * b.x + c.x) / 6.0, (a.y + 4.0 * b.y + c.y) / 6.0),
        );
    };
    for w in points.windows(3) {
        segment(&mut p, w[0], w[1], w[2]);
    }
    // The end is clamped by repeating the last point.
    segment(&mut p, points[n - 2], points[n - 1], points[n - 1]);
    p.line_to(points[n - 1]);
    p
}

fn cardinal(points: &[Point]) -> BezPath {
    const TENSION: f64 = 0.0;
    let k = (1.0 - TENSION) / 6.0;
    let n = points.len();
    if n < 3 {
        return linear(points);
    }
    let mut p = BezPath::new();
    p.move_to(points[0]);
    for i in 1..n {
        let a = points[i - 1];
        let b = points[i];
        let before = if i >= 2 { points[i - 2] } else { b };
        let after = if i + 1 < n { points[i + 1] } else { a };
        p.curve_to(a + (b - before) * k, b + (a - after) * k, b);
    }
    p
}

fn catmull_rom(points: &[Point]) -> BezPath {
    const ALPHA: f64 = 0.5;
    const EPSILON: f64 = 1e-12;
    let n = points.len();
    if n < 3 {
        return linear(points);
    }
    // `(|d|^alpha, |d|^(2 alpha))` for a segment vector.
    let lengths = |d: kurbo::Vec2| {
        let l2a = d.hypot2().powf(ALPHA);
        (l2a.sqrt(), l2a)
    };
    let mut p = BezPath::new();
    p.move_to(points[0]);
    for i in 1..n {
        let a = points[i - 1];
        let b = points[i];
        let (l12_a, l12_2a) = lengths(b - a);
        let mut c1 = a;
        if i >= 2 {
            let before = points[i - 2];
            let (l01_a, l01_2a) = lengths(a - before);
            if l01_a > EPSILON {
                let m = 2.0 * l01_2a + 3.0 * l01_a * l12_a + l12_2a;
                let d = 3.0 * l01_a * (l01_a + l12_a);
                c1 = Point::new(
                    (a.x * m - before.x * l12_2a + b.x * l01_2a) / d,
                    (a.y * m - before.y * l12_2a + b.y * l01_2a) / d,
                );
            }
        }
        let mut c2 = b;
        if i + 1 < n {
            let after = points[i + 1];
            let (l23_a, l23_2a) = lengths(after - b);
            if l23_a > EPSILON {
                let m = 2.0 * l23_2a + 3.0 * l23_a * l12_a + l12_2a;
                let d = 3.0 * l23_a * (l23_a + l12_a);
                c2 = Point::new(
                    (b.x * m + a.x * l23_2a - after.x * l12_2a) / d,
                    (b.y * m + a.y * l23_2a - after.y * l12_2a) / d,
                );
            }
        }
        p.curve_to(c1, c2, b);
    }
    p
}

fn sign(v: f64) -> f64 {
    if v < 0.0 { -1.0 } else { 1.0 }
}

/// Tangent at `b` from its two neighbors (Steffen's method).
fn monotone_slope3(a: Point, b: Point, c: Point) -> f64 {
    let h0 = b.x - a.x;
    let h1 = c.x - b.x;
    let signed_zero = |h: f64, other: f64| {
        if h != 0.0 {
            h
        } else if other < 0.0 {
            -0.0
        } else {
            0.0
        }
    };
    let s0 = (b.y - a.y) / signed_zero(h0, h1);
    let s1 = (c.y - b.y) / signed_zero(h1, h0);
    let p = (s0 * h1 + s1 * h0) / (h0 + h1);
    let candidates = [s0.abs(), s1.abs(), 0.5 * p.abs()];
    if candidates.iter().any(|v| v.is_nan()) {
        return 0.0;
    }
    let m = candidates.into_iter().fold(f64::INFINITY, f64::min);
    let t = (sign(s0) + sign(s1)) * m;
    if t.is_nan() { 0.0 } else { t }
}

/// One-sided tangent at an end of the segment `a -> b`, given the tangent `t` at the other end.
fn monotone_slope2(a: Point, b: Point, t: f64) -> f64 {
    let h = b.x - a.x;
    if h != 0.0 {
        (3.0 * (b.y - a.y) / h - t) / 2.0
    } else {
        t
    }
}

fn monotone_x(points: &[Point]) -> BezPath {
    // Coincident neighbors carry no direction.
    let mut pts: SmallVec<[Point; 16]> = SmallVec::with_capacity(points.len());
    for &pt in points {
        if pts.last() != Some(&pt) {
            pts.push(pt);
        }
    }
    let n = pts.len();
    if n < 3 {
        return linear(&pts);
    }
    let mut tangents: SmallVec<[f64; 16]> = SmallVec::from_elem(0.0, n);
    for i in 1..n - 1 {
        tangents[i] = monotone_slope3(pts[i - 1], pts[i], pts[i + 1]);
    }
    tangents[0] = monotone_slope2(pts[0], pts[1], tangents[1]);
    tangents[n - 1] = monotone_slope2(pts[n - 2], pts[n - 1], tangents[n - 2]);

    let mut p = BezPath::new();
    p.move_to(pts[0]);
    for i in 0..n - 1 {
        let (a, b) = (pts[i], pts[i + 1]);
        let dx = (b.x - a.x) / 3.0;
        p.curve_to(
            Point::new(a.x + dx, a.y + dx * tangents[i]),
            Point::new(b.x - dx, b.y - dx * tangents[i + 1]),
            b,
        );
    }
    p
}

fn monotone_y(points: &[Point]) -> BezPath {
    let swap = |pt: Point| Point::new(pt.y, pt.x);
    let swapped: SmallVec<[Point; 16]> = points.iter().copied().map(swap).collect();
    monotone_x(&swapped)
        .elements()
        .iter()
        .map(|el| match *el {
            PathEl::MoveTo(a) => PathEl::MoveTo(swap(a)),
            PathEl::LineTo(a) => PathEl::LineTo(swap(a)),
            PathEl::QuadTo(a, b) => PathEl::QuadTo(swap(a), swap(b)),
            PathEl::CurveTo(a, b, c) => PathEl::CurveTo(swap(a), swap(b), swap(c)),
            PathEl::ClosePath => PathEl::ClosePath,
        })
        .collect()
}

/// Solves for the first and second Bezier control coordinates of a natural spline
/// through `v` (one dimension at a time).
fn natural_controls(v: &[f64]) -> (SmallVec<[f64; 16]>, SmallVec<[f64; 16]>) {
    let n = v.len() - 1;
    let mut a: SmallVec<[f64; 16]> = SmallVec::from_elem(0.0, n);
    let mut b: SmallVec<[f64; 16]> = SmallVec::from_elem(0.0, n);
    let mut r: SmallVec<[f64; 16]> = SmallVec::from_elem(0.0, n);
    a[0] = 0.0;
    b[0] = 2.0;
    r[0] = v[0] + 2.0 * v[1];
    for i in 1..n - 1 {
        a[i] = 1.0;
        b[i] = 4.0;
        r[i] = 4.0 * v[i] + 2.0 * v[i + 1];
    }
    a[n - 1] = 2.0;
    b[n - 1] = 7.0;
    r[n - 1] = 8.0 * v[n - 1] + v[n];
    for i in 1..n {
        let m = a[i] / b[i - 1];
        b[i] -= m;
        r[i] -= m * r[i - 1];
    }
    a[n - 1] = r[n - 1] / b[n - 1];
    for i in (0..n - 1).rev() {
        a[i] = (r[i] - a[i + 1]) / b[i];
    }
    b[n - 1] = (v[n] + a[n - 1]) / 2.0;
    for i in 0..n - 1 {
        b[i] = 2.0 * v[i + 1] - a[i + 1];
    }
    (a, b)
}

fn natural(points: &[Point]) -> BezPath {
    let n = points.len();
    if n < 3 {
        return linear(points);
    }
    let xs: SmallVec<[f64; 16]> = points.iter().map(|p| p.x).collect();
    let ys: SmallVec<[f64; 16]> = points.iter().map(|p| p.y).collect();
    let (ax, bx) = natural_controls(&xs);
    let (ay, by) = natural_controls(&ys);
    let mut p = BezPath::new();
    p.move_to(points[0]);
    for i in 0..n - 1 {
        p.curve_to(
            Point::new(ax[i], ay[i]),
            Point::new(bx[i], by[i]),
            points[i + 1],
        );
    }
    p
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec::Vec;

    use super::*;

    fn pts(raw: &[(f64, f64)]) -> Vec<Point> {
        raw.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    fn close(a: Point, b: Point) -> bool {
        (a - b).hypot() < 1e-9
    }

    fn end_point(el: &PathEl) -> Option<Point> {
        match *el {
            PathEl::MoveTo(p) | PathEl::LineTo(p) | PathEl::QuadTo(_, p) | PathEl::CurveTo(_, _, p) => {
                Some(p)
            }
            PathEl::ClosePath => None,
        }
    }

    #[test]
    fn unknown_curve_name_fails() {
        assert_eq!(
            interpolator_for("unknown").err(),
            Some(ChartError::UnknownCurve("unknown".into()))
        );
    }

    #[test]
    fn names_round_trip_through_parse() {
        for curve in Curve::ALL {
            assert_eq!(curve.name().parse::<Curve>(), Ok(curve));
        }
    }

    #[test]
    fn degenerate_inputs() {
        let one = pts(&[(3.0, 4.0)]);
        for curve in Curve::ALL {
            let interp = curve.interpolator();
            assert!(interp(&[]).elements().is_empty(), "{curve} on no points");
            let path = interp(&one);
            assert_eq!(
                path.elements(),
                &[PathEl::MoveTo(Point::new(3.0, 4.0))],
                "{curve} on one point"
            );
        }
    }

    #[test]
    fn two_points_draw_a_segment() {
        let two = pts(&[(0.0, 0.0), (10.0, 5.0)]);
        for curve in [
            Curve::Linear,
            Curve::Basis,
            Curve::Cardinal,
            Curve::CatmullRom,
            Curve::MonotoneX,
            Curve::MonotoneY,
            Curve::Natural,
        ] {
            let path = curve.interpolator()(&two);
            assert_eq!(
                path.elements(),
                &[
                    PathEl::MoveTo(two[0]),
                    PathEl::LineTo(two[1])
                ],
                "{curve}"
            );
        }
    }

    #[test]
    fn interpolation_is_stable() {
        let input = pts(&[(0.0, 3.0), (1.0, 7.0), (2.0, 2.0), (4.0, 9.0), (5.0, 1.0)]);
        for curve in Curve::ALL {
            let f = curve.interpolator();
            assert_eq!(f(&input), f(&input), "{curve}");
        }
    }

    #[test]
    fn interpolating_curves_pass_through_every_point() {
        let input = pts(&[(0.0, 3.0), (1.0, 7.0), (2.0, 2.0), (4.0, 9.0), (5.0, 1.0)]);
        for curve in [
            Curve::Linear,
            Curve::Cardinal,
            Curve::CatmullRom,
            Curve::MonotoneX,
            Curve::Natural,
        ] {
            let ends: Vec<Point> = curve.interpolator()(&input)
                .elements()
                .iter()
                .filter_map(end_point)
                .collect();
            assert_eq!(ends.len(), input.len(), "{curve}");
            assert!(
                ends.iter().zip(&input).all(|(a, b)| close(*a, *b)),
                "{curve}: {ends:?}"
            );
        }
    }

    #[test]
    fn linear_closed_closes_the_path() {
        let path = linear_closed(&pts(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]));
        assert_eq!(path.elements().last(), Some(&PathEl::ClosePath));
    }

    #[test]
    fn step_variants_change_y_at_different_x() {
        let input = pts(&[(0.0, 0.0), (10.0, 10.0)]);
        assert_eq!(
            step(&input).elements(),
            &[
                PathEl::MoveTo(Point::new(0.0, 0.0)),
                PathEl::LineTo(Point::new(5.0, 0.0)),
                PathEl::LineTo(Point::new(5.0, 10.0)),
                PathEl::LineTo(Point::new(10.0, 10.0)),
            ]
        );
        assert_eq!(
            step_before(&input).elements(),
            &[
                PathEl::MoveTo(Point::new(0.0, 0.0)),
                PathEl::LineTo(Point::new(0.0, 10.0)),
                PathEl::LineTo(Point::new(10.0, 10.0)),
            ]
        );
        assert_eq!(
            step_after(&input).elements(),
            &[
                PathEl::MoveTo(Point::new(0.0, 0.0)),
                PathEl::LineTo(Point::new(10.0, 0.0)),
                PathEl::LineTo(Point::new(10.0, 10.0)),
            ]
        );
    }

    #[test]
    fn monotone_x_does_not_overshoot() {
        // A flat run after a jump: an unconstrained spline would dip below 10.
        let input = pts(&[(0.0, 0.0), (1.0, 10.0), (2.0, 10.0), (3.0, 10.0)]);
        let path = monotone_x(&input);
        for el in path.elements() {
            if let PathEl::CurveTo(c1, c2, _) = *el {
                assert!(c1.y <= 10.0 + 1e-9 && c1.y >= -1e-9, "{c1:?}");
                assert!(c2.y <= 10.0 + 1e-9 && c2.y >= -1e-9, "{c2:?}");
            }
        }
    }

    #[test]
    fn monotone_x_places_controls_at_segment_thirds() {
        let input = pts(&[(0.0, 0.0), (3.0, 3.0), (6.0, 6.0)]);
        let path = monotone_x(&input);
        assert_eq!(
            path.elements()[1],
            PathEl::CurveTo(
                Point::new(1.0, 1.0),
                Point::new(2.0, 2.0),
                Point::new(3.0, 3.0)
            )
        );
    }

    #[test]
    fn monotone_x_skips_coincident_points() {
        let input = pts(&[(0.0, 0.0), (0.0, 0.0), (5.0, 5.0)]);
        assert_eq!(
            monotone_x(&input).elements(),
            &[
                PathEl::MoveTo(Point::new(0.0, 0.0)),
                PathEl::LineTo(Point::new(5.0, 5.0))
            ]
        );
    }

    #[test]
    fn monotone_y_mirrors_monotone_x() {
        let input = pts(&[(0.0, 0.0), (4.0, 1.0), (1.0, 3.0), (2.0, 6.0)]);
        let swapped: Vec<Point> = input.iter().map(|p| Point::new(p.y, p.x)).collect();
        let a: Vec<Point> = monotone_y(&input)
            .elements()
            .iter()
            .filter_map(end_point)
            .collect();
        let b: Vec<Point> = monotone_x(&swapped)
            .elements()
            .iter()
            .filter_map(end_point)
            .map(|p| Point::new(p.y, p.x))
            .collect();
        assert_eq!(a, b);
    }

    #[test]
    fn basis_starts_and_ends_on_the_data() {
        let input = pts(&[(0.0, 0.0), (6.0, 6.0), (12.0, 0.0)]);
        let path = basis(&input);
        let els = path.elements();
        assert_eq!(els.first(), Some(&PathEl::MoveTo(input[0])));
        assert_eq!(els.last(), Some(&PathEl::LineTo(input[2])));
        assert_eq!(els[1], PathEl::LineTo(Point::new(1.0, 1.0)));
    }

    #[test]
    fn cardinal_has_flat_tangents_at_the_ends() {
        let input = pts(&[(0.0, 0.0), (3.0, 6.0), (6.0, 0.0)]);
        let path = cardinal(&input);
        let PathEl::CurveTo(c1, _, _) = path.elements()[1] else {
            panic!("expected a curve");
        };
        assert_eq!(c1, input[0]);
        let PathEl::CurveTo(_, c2, end) = path.elements()[2] else {
            panic!("expected a curve");
        };
        assert_eq!(c2, input[2]);
        assert_eq!(end, input[2]);
    }

    #[test]
    fn natural_spline_segments_end_on_the_data() {
        let input = pts(&[(0.0, 0.0), (1.0, 3.0), (2.0, 1.0), (3.0, 4.0)]);
        let ends: Vec<Point> = natural(&input)
            .elements()
            .iter()
            .filter_map(end_point)
            .collect();
        assert_eq!(ends, input);
    }

    #[test]
    fn natural_spline_of_collinear_points_stays_on_the_line() {
        let input = pts(&[(0.0, 0.0), (1.0, 2.0), (2.0, 4.0), (3.0, 6.0)]);
        for el in natural(&input).elements() {
            if let PathEl::CurveTo(c1, c2, _) = *el {
                assert!((c1.y - 2.0 * c1.x).abs() < 1e-9, "{c1:?}");
                assert!((c2.y - 2.0 * c2.x).abs() < 1e-9, "{c2:?}");
            }
        }
    }
}
