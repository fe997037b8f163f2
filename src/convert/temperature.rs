use super::Category;
use crate::utils::ConvertError;

pub(crate) const UNITS: &[&str] = &["Celsius", "Fahrenheit", "Kelvin"];

/// Temperature scales are affine, not proportional, so each pair gets its
/// own formula instead of a factor table. Unit names are validated first so
/// a typo fails instead of falling through the identity arm.
pub(crate) fn convert(value: f64, from_unit: &str, to_unit: &str) -> Result<f64, ConvertError> {
    for unit in [from_unit, to_unit] {
        if !UNITS.contains(&unit) {
            return Err(ConvertError::UnknownUnit {
                unit: unit.to_string(),
                category: Category::Temperature,
            });
        }
    }

    Ok(match (from_unit, to_unit) {
        ("Celsius", "Fahrenheit") => value * 9.0 / 5.0 + 32.0,
        ("Fahrenheit", "Celsius") => (value - 32.0) * 5.0 / 9.0,
        ("Celsius", "Kelvin") => value + 273.15,
        ("Kelvin", "Celsius") => value - 273.15,
        ("Fahrenheit", "Kelvin") => (value - 32.0) * 5.0 / 9.0 + 273.15,
        ("Kelvin", "Fahrenheit") => (value - 273.15) * 9.0 / 5.0 + 32.0,
        // Same unit on both sides
        _ => value,
    })
}
