//! Field-level validation rules shared by create and update paths.

use crate::error::CoreError;

/// Ensure a vehicle's production range is not inverted.
///
/// `to_year` is optional; when present it must not precede `from_year`.
pub fn validate_year_range(from_year: i32, to_year: Option<i32>) -> Result<(), CoreError> {
    match to_year {
        Some(to) if to < from_year => Err(CoreError::Validation(format!(
            "to_year ({to}) must not be earlier than from_year ({from_year})"
        ))),
        _ => Ok(()),
    }
}

/// Stock quantities are counts and cannot be negative.
pub fn validate_quantity(quantity: i32) -> Result<(), CoreError> {
    if quantity < 0 {
        return Err(CoreError::Validation(format!(
            "quantity must be zero or greater, got {quantity}"
        )));
    }
    Ok(())
}

/// Prices, when recorded, cannot be negative or non-finite.
pub fn validate_price(price: Option<f64>) -> Result<(), CoreError> {
    match price {
        Some(p) if !p.is_finite() || p < 0.0 => Err(CoreError::Validation(format!(
            "last_known_price must be a non-negative number, got {p}"
        ))),
        _ => Ok(()),
    }
}

/// Reject text that Postgres cannot store.
///
/// Takes `(field name, value)` pairs; `None` values are skipped.
pub fn validate_text<'a, I>(fields: I) -> Result<(), CoreError>
where
    I: IntoIterator<Item = (&'static str, Option<&'a str>)>,
{
    for (name, value) in fields {
        if value.is_some_and(|v| v.contains('\0')) {
            return Err(CoreError::Validation(format!(
                "{name} must not contain NUL characters"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn open_ended_range_is_valid() {
        assert!(validate_year_range(2019, None).is_ok());
    }

    #[test]
    fn equal_years_are_valid() {
        assert!(validate_year_range(2020, Some(2020)).is_ok());
    }

    #[test]
    fn inverted_range_is_rejected() {
        assert_matches!(
            validate_year_range(2022, Some(2018)),
            Err(CoreError::Validation(msg)) if msg.contains("to_year (2018)")
        );
    }

    #[test]
    fn zero_quantity_is_valid() {
        assert!(validate_quantity(0).is_ok());
    }

    #[test]
    fn negative_quantity_is_rejected() {
        assert_matches!(validate_quantity(-1), Err(CoreError::Validation(_)));
    }

    #[test]
    fn price_rules() {
        assert!(validate_price(None).is_ok());
        assert!(validate_price(Some(12.5)).is_ok());
        assert_matches!(validate_price(Some(-0.01)), Err(CoreError::Validation(_)));
        assert_matches!(validate_price(Some(f64::NAN)), Err(CoreError::Validation(_)));
    }

    #[test]
    fn nul_in_text_is_rejected_by_field_name() {
        assert!(validate_text([("notes", Some("plain")), ("email", None)]).is_ok());
        assert_matches!(
            validate_text([("make", Some("Volvo")), ("model", Some("XC\u{0}60"))]),
            Err(CoreError::Validation(msg)) if msg.starts_with("model ")
        );
    }
}
