use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use std::str::FromStr;

use crate::api::error::ApiError;
use crate::budget::models::YearMonth;

pub fn validate_date(value: &str, field_name: &str) -> Result<NaiveDate, ApiError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        ApiError::bad_request(format!("{} must be a date in YYYY-MM-DD format", field_name))
    })
}

pub fn validate_year_month(value: &str) -> Result<YearMonth, ApiError> {
    YearMonth::from_str(value).map_err(|e| ApiError::bad_request(e.to_string()))
}

pub fn validate_amount(amount: &BigDecimal) -> Result<(), ApiError> {
    if amount < &BigDecimal::from(0) {
        return Err(ApiError::bad_request("Amount cannot be negative"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_date() {
        assert_eq!(
            validate_date("2022-10-15", "start").unwrap(),
            NaiveDate::from_ymd_opt(2022, 10, 15).unwrap()
        );
        assert!(validate_date("2022-02-30", "start").is_err());
        assert!(validate_date("15/10/2022", "start").is_err());
    }

    #[test]
    fn test_validate_year_month() {
        assert_eq!(
            validate_year_month("202210").unwrap(),
            YearMonth::new(2022, 10).unwrap()
        );
        assert!(validate_year_month("2022-13").is_err());
    }

    #[test]
    fn test_validate_amount() {
        assert!(validate_amount(&BigDecimal::from(31000)).is_ok());
        assert!(validate_amount(&BigDecimal::from(0)).is_ok());
        assert!(validate_amount(&BigDecimal::from(-5)).is_err());
    }
}
