use crate::domain::model::{Boat, LocationDetail};
use crate::utils::error::{MarinaError, Result};

/// Slip numbers the marina actually has.
pub const SLIP_NUMBERS: std::ops::RangeInclusive<u32> = 1..=85;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(MarinaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(MarinaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(MarinaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_negative_rate(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(MarinaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Rate must be a finite, non-negative number".to_string(),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(MarinaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Valid values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(MarinaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(MarinaError::ValidationError {
            message: format!(
                "{} must be between {} and {}, got {}",
                field_name, min, max, value
            ),
        });
    }
    Ok(())
}

/// House rules for a boat record. The core accepts boats that break these;
/// callers decide whether a violation is a warning or a rejection.
impl Validate for Boat {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("name", &self.name).map_err(|_| MarinaError::ValidationError {
            message: "Boat name cannot be blank".to_string(),
        })?;

        match &self.detail {
            LocationDetail::Slip(number) => validate_range(
                "slip number",
                *number,
                *SLIP_NUMBERS.start(),
                *SLIP_NUMBERS.end(),
            ),
            LocationDetail::Land(bay) if !bay.is_ascii_uppercase() => {
                Err(MarinaError::ValidationError {
                    message: format!("bay letter must be A-Z, got '{}'", bay),
                })
            }
            LocationDetail::Unknown => Err(MarinaError::ValidationError {
                message: format!("boat '{}' has no location", self.name),
            }),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boat(detail: LocationDetail) -> Boat {
        Boat::new("Moby", 30, detail, 0.0)
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("data_file", "boats.csv").is_ok());
        assert!(validate_path("data_file", "").is_err());
        assert!(validate_path("data_file", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("capacity", 120, 1).is_ok());
        assert!(validate_positive_number("capacity", 0, 1).is_err());
    }

    #[test]
    fn test_validate_rate() {
        assert!(validate_non_negative_rate("rates.slip", 12.5).is_ok());
        assert!(validate_non_negative_rate("rates.slip", -1.0).is_err());
        assert!(validate_non_negative_rate("rates.slip", f64::NAN).is_err());
    }

    #[test]
    fn test_boat_slip_range() {
        assert!(boat(LocationDetail::Slip(1)).validate().is_ok());
        assert!(boat(LocationDetail::Slip(85)).validate().is_ok());
        assert!(boat(LocationDetail::Slip(0)).validate().is_err());
        assert!(boat(LocationDetail::Slip(86)).validate().is_err());
    }

    #[test]
    fn test_boat_bay_letter() {
        assert!(boat(LocationDetail::Land('Q')).validate().is_ok());
        assert!(boat(LocationDetail::Land('q')).validate().is_err());
        assert!(boat(LocationDetail::Land('7')).validate().is_err());
    }

    #[test]
    fn test_boat_unknown_location() {
        assert!(boat(LocationDetail::Unknown).validate().is_err());
        assert!(boat(LocationDetail::Storage(900)).validate().is_ok());
    }
}
