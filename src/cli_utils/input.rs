use crate::budget::models::YearMonth;
use crate::cli_utils::{CliError, CliResult};
use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use dialoguer::Input as DialoguerInput;
use std::str::FromStr;

/// Input utilities
pub struct Input;

impl Input {
    /// Get a string from user input
    pub fn get_string(prompt: &str) -> CliResult<String> {
        Ok(DialoguerInput::new().with_prompt(prompt).interact_text()?)
    }

    /// Get a calendar date (YYYY-MM-DD)
    pub fn get_date(prompt: &str) -> CliResult<NaiveDate> {
        let input = Self::get_string(&format!("{} (YYYY-MM-DD)", prompt))?;
        parse_date(&input)
    }

    /// Get a year-month key (YYYY-MM)
    pub fn get_year_month(prompt: &str) -> CliResult<YearMonth> {
        let input = Self::get_string(&format!("{} (YYYY-MM)", prompt))?;
        YearMonth::from_str(&input).map_err(|e| CliError::ValidationError(e.to_string()))
    }

    /// Get a non-negative decimal amount
    pub fn get_amount(prompt: &str) -> CliResult<BigDecimal> {
        let input = Self::get_string(prompt)?;
        parse_amount(&input)
    }
}

pub fn parse_date(input: &str) -> CliResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| CliError::ValidationError(format!("Invalid date '{}'", input.trim())))
}

pub fn parse_amount(input: &str) -> CliResult<BigDecimal> {
    let amount = BigDecimal::from_str(input.trim())
        .map_err(|_| CliError::ValidationError("Invalid decimal format".to_string()))?;
    if amount < BigDecimal::from(0) {
        return Err(CliError::ValidationError("Amount cannot be negative".to_string()));
    }
    Ok(amount)
}
