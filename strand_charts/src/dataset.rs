// Copyright 2025 the Strand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Series and dataset types.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashSet;

use crate::ChartError;
use crate::datum::Datum;

/// A single data point.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// Horizontal value.
    pub x: Datum,
    /// Vertical value.
    pub y: Datum,
}

impl Point {
    /// Creates a point from anything convertible into [`Datum`]s.
    pub fn new(x: impl Into<Datum>, y: impl Into<Datum>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }
}

/// One named, ordered collection of points forming one line.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Series {
    /// Identifier, unique within a dataset.
    pub id: String,
    /// Points in draw order.
    #[cfg_attr(feature = "serde", serde(rename = "data", alias = "points"))]
    pub points: Vec<Point>,
}

impl Series {
    /// Creates a series.
    pub fn new(id: impl Into<String>, points: Vec<Point>) -> Self {
        Self {
            id: id.into(),
            points,
        }
    }

    /// Creates a series from `(x, y)` pairs.
    pub fn from_pairs<X, Y>(id: impl Into<String>, pairs: impl IntoIterator<Item = (X, Y)>) -> Self
    where
        X: Into<Datum>,
        Y: Into<Datum>,
    {
        Self::new(
            id,
            pairs.into_iter().map(|(x, y)| Point::new(x, y)).collect(),
        )
    }
}

/// An ordered sequence of series.
///
/// Series order is paint order and stacking order.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Dataset {
    series: Vec<Series>,
}

impl Dataset {
    /// Creates a dataset from series in paint order.
    pub fn new(series: Vec<Series>) -> Self {
        Self { series }
    }

    /// Returns the series in paint order.
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// Returns the number of series.
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// Returns `true` if there are no series.
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Returns the total number of points over all series.
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }

    /// Iterates all points with their series.
    pub fn points(&self) -> impl Iterator<Item = (&Series, usize, &Point)> {
        self.series
            .iter()
            .flat_map(|s| s.points.iter().enumerate().map(move |(i, p)| (s, i, p)))
    }

    /// Checks that series ids are unique.
    ///
    /// Scale building does not require this, but consumers that key on ids do.
    pub fn validate(&self) -> Result<(), ChartError> {
        let mut seen = HashSet::with_capacity(self.series.len());
        for s in &self.series {
            if !seen.insert(s.id.as_str()) {
                return Err(ChartError::DuplicateSeriesId(s.id.clone()));
            }
        }
        Ok(())
    }

    /// Fails on the first `NaN` or infinite number.
    pub(crate) fn check_finite(&self) -> Result<(), ChartError> {
        for (s, index, p) in self.points() {
            let bad = [&p.x, &p.y]
                .into_iter()
                .any(|d| d.as_f64().is_some_and(|v| !v.is_finite()));
            if bad {
                return Err(ChartError::NonFiniteValue {
                    series: s.id.clone(),
                    index,
                });
            }
        }
        Ok(())
    }
}

impl From<Vec<Series>> for Dataset {
    fn from(series: Vec<Series>) -> Self {
        Self::new(series)
    }
}

impl FromIterator<Series> for Dataset {
    fn from_iter<I: IntoIterator<Item = Series>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    #[test]
    fn validate_rejects_duplicate_ids() {
        let ds = Dataset::new(vec![
            Series::from_pairs("a", [(0, 1)]),
            Series::from_pairs("b", [(0, 1)]),
            Series::from_pairs("a", [(1, 2)]),
        ]);
        assert_eq!(
            ds.validate(),
            Err(ChartError::DuplicateSeriesId(String::from("a")))
        );
    }

    #[test]
    fn check_finite_reports_position() {
        let ds = Dataset::new(vec![Series::from_pairs(
            "a",
            [(0.0, 1.0), (1.0, f64::NAN)],
        )]);
        assert_eq!(
            ds.check_finite(),
            Err(ChartError::NonFiniteValue {
                series: String::from("a"),
                index: 1
            })
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_series_json() {
        let json = r#"[{"id":"a","data":[{"x":"mon","y":3},{"x":"tue","y":4.5}]}]"#;
        let ds: Dataset = serde_json::from_str(json).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.series()[0].points[0], Point::new("mon", 3));
        assert_eq!(ds.series()[0].points[1].y, Datum::Number(4.5));
    }
}
