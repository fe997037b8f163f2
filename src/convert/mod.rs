// Gateway module for the conversion library

mod category;
mod temperature;

pub use category::Category;

use crate::utils::ConvertError;

/// Convert `value` from `from_unit` to `to_unit` within `category`.
///
/// Both unit names must belong to the category's unit set; anything else
/// fails with [`ConvertError::UnknownUnit`]. Pure and reentrant.
pub fn convert(
    value: f64,
    from_unit: &str,
    to_unit: &str,
    category: Category,
) -> Result<f64, ConvertError> {
    match category {
        Category::Temperature => temperature::convert(value, from_unit, to_unit),
        _ => {
            let from = category.factor(from_unit)?;
            let to = category.factor(to_unit)?;
            // Single multiply: to/from is exactly 1.0 when both names hit
            // the same table entry, so same-unit requests return the value
            // bit-for-bit.
            Ok(value * (to / from))
        }
    }
}

pub fn convert_length(value: f64, from_unit: &str, to_unit: &str) -> Result<f64, ConvertError> {
    convert(value, from_unit, to_unit, Category::Length)
}

pub fn convert_weight(value: f64, from_unit: &str, to_unit: &str) -> Result<f64, ConvertError> {
    convert(value, from_unit, to_unit, Category::Weight)
}

pub fn convert_temperature(
    value: f64,
    from_unit: &str,
    to_unit: &str,
) -> Result<f64, ConvertError> {
    convert(value, from_unit, to_unit, Category::Temperature)
}

pub fn convert_volume(value: f64, from_unit: &str, to_unit: &str) -> Result<f64, ConvertError> {
    convert(value, from_unit, to_unit, Category::Volume)
}

pub fn convert_time(value: f64, from_unit: &str, to_unit: &str) -> Result<f64, ConvertError> {
    convert(value, from_unit, to_unit, Category::Time)
}

pub fn convert_area(value: f64, from_unit: &str, to_unit: &str) -> Result<f64, ConvertError> {
    convert(value, from_unit, to_unit, Category::Area)
}
