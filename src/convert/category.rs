use clap::ValueEnum;
use std::fmt;

use super::temperature;
use crate::utils::ConvertError;

// Factor tables: unit name -> ratio of that unit to the category's base
// unit. The first entry of each table is the base unit (factor 1).

const LENGTH_UNITS: &[(&str, f64)] = &[
    ("Meter", 1.0),
    ("Kilometer", 0.001),
    ("Centimeter", 100.0),
    ("Millimeter", 1000.0),
    ("Inch", 39.3701),
    ("Foot", 3.28084),
    ("Yard", 1.09361),
    ("Mile", 0.000621371),
];

const WEIGHT_UNITS: &[(&str, f64)] = &[
    ("Kilogram", 1.0),
    ("Gram", 1000.0),
    ("Milligram", 1e6),
    ("Pound", 2.20462),
    ("Ounce", 35.274),
];

const VOLUME_UNITS: &[(&str, f64)] = &[
    ("Liter", 1.0),
    ("Milliliter", 1000.0),
    ("Gallon (US)", 0.264172),
    ("Gallon (UK)", 0.219969),
    ("Quart", 1.05669),
    ("Pint", 2.11338),
    ("Fluid Ounce", 33.814),
];

const TIME_UNITS: &[(&str, f64)] = &[
    ("Second", 1.0),
    ("Minute", 1.0 / 60.0),
    ("Hour", 1.0 / 3600.0),
    ("Day", 1.0 / 86400.0),
];

const AREA_UNITS: &[(&str, f64)] = &[
    ("Square Meter", 1.0),
    ("Square Kilometer", 1e-6),
    ("Square Mile", 3.861e-7),
    ("Square Yard", 1.19599),
    ("Square Foot", 10.7639),
    ("Acre", 2.47105e-4),
];

/// The measurement categories a conversion can run in
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Category {
    Length,
    Weight,
    Temperature,
    Volume,
    Time,
    Area,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Length,
        Category::Weight,
        Category::Temperature,
        Category::Volume,
        Category::Time,
        Category::Area,
    ];

    /// Ordered unit names for this category
    pub fn units(self) -> Vec<&'static str> {
        match self.factor_table() {
            Some(table) => table.iter().map(|(name, _)| *name).collect(),
            None => temperature::UNITS.to_vec(),
        }
    }

    /// Whether `unit` belongs to this category's unit set
    pub fn is_known_unit(self, unit: &str) -> bool {
        self.units().contains(&unit)
    }

    fn factor_table(self) -> Option<&'static [(&'static str, f64)]> {
        match self {
            Category::Length => Some(LENGTH_UNITS),
            Category::Weight => Some(WEIGHT_UNITS),
            Category::Temperature => None, // affine formulas, no factor table
            Category::Volume => Some(VOLUME_UNITS),
            Category::Time => Some(TIME_UNITS),
            Category::Area => Some(AREA_UNITS),
        }
    }

    /// Look up the factor for `unit`, failing fast on names outside the table
    pub(crate) fn factor(self, unit: &str) -> Result<f64, ConvertError> {
        self.factor_table()
            .and_then(|table| table.iter().find(|(name, _)| *name == unit))
            .map(|(_, factor)| *factor)
            .ok_or_else(|| ConvertError::UnknownUnit {
                unit: unit.to_string(),
                category: self,
            })
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Length => "Length",
            Category::Weight => "Weight",
            Category::Temperature => "Temperature",
            Category::Volume => "Volume",
            Category::Time => "Time",
            Category::Area => "Area",
        };
        f.write_str(name)
    }
}
