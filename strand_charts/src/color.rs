// Copyright 2025 the Strand Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordinal series colors.

extern crate alloc;

use alloc::string::String;

use hashbrown::HashMap;
use peniko::Color;

use crate::dataset::{Dataset, Series};

const NIVO: [Color; 6] = [
    Color::from_rgb8(0xe8, 0xc1, 0xa0),
    Color::from_rgb8(0xf4, 0x75, 0x60),
    Color::from_rgb8(0xf1, 0xe1, 0x5b),
    Color::from_rgb8(0xe8, 0xa8, 0x38),
    Color::from_rgb8(0x61, 0xcd, 0xbb),
    Color::from_rgb8(0x97, 0xe3, 0xd5),
];

const CATEGORY10: [Color; 10] = [
    Color::from_rgb8(0x1f, 0x77, 0xb4),
    Color::from_rgb8(0xff, 0x7f, 0x0e),
    Color::from_rgb8(0x2c, 0xa0, 0x2c),
    Color::from_rgb8(0xd6, 0x27, 0x28),
    Color::from_rgb8(0x94, 0x67, 0xbd),
    Color::from_rgb8(0x8c, 0x56, 0x4b),
    Color::from_rgb8(0xe3, 0x77, 0xc2),
    Color::from_rgb8(0x7f, 0x7f, 0x7f),
    Color::from_rgb8(0xbc, 0xbd, 0x22),
    Color::from_rgb8(0x17, 0xbe, 0xcf),
];

/// A named categorical palette.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorScheme {
    /// Six warm pastel colors.
    #[default]
    Nivo,
    /// The classic ten-color categorical palette.
    Category10,
}

impl ColorScheme {
    /// Returns the palette colors in assignment order.
    pub fn colors(self) -> &'static [Color] {
        match self {
            Self::Nivo => &NIVO,
            Self::Category10 => &CATEGORY10,
        }
    }
}

/// Assigns palette colors to series ids in first-seen order, cycling through the palette.
#[derive(Clone, Debug)]
pub struct OrdinalColors {
    scheme: ColorScheme,
    assigned: HashMap<String, Color>,
}

impl OrdinalColors {
    /// Creates an assignment for every series of `dataset`.
    pub fn for_dataset(scheme: ColorScheme, dataset: &Dataset) -> Self {
        let palette = scheme.colors();
        let mut assigned = HashMap::with_capacity(dataset.len());
        for series in dataset.series() {
            let next = palette[assigned.len() % palette.len()];
            assigned.entry(series.id.clone()).or_insert(next);
        }
        Self { scheme, assigned }
    }

    /// Returns the color for `id`.
    ///
    /// Ids that were not part of the dataset get the first palette color.
    pub fn color(&self, id: &str) -> Color {
        self.assigned
            .get(id)
            .copied()
            .unwrap_or(self.scheme.colors()[0])
    }

    /// Returns the color for `series`; usable directly as a line color function.
    pub fn series_color(&self, series: &Series) -> Color {
        self.color(&series.id)
    }
}
