use bigdecimal::BigDecimal;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Calendar month key a budget is allocated against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Build a key, `None` when the month is outside 1..=12
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if (1..=12).contains(&month) {
            Some(Self { year, month })
        } else {
            None
        }
    }

    /// The month enclosing `date`
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Gregorian day count of this month
    pub fn days_in_month(&self) -> u32 {
        match self.month {
            4 | 6 | 9 | 11 => 30,
            2 if is_leap_year(self.year) => 29,
            2 => 28,
            _ => 31,
        }
    }

    /// The following calendar month, December rolls into January
    pub fn succ(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Error returned when a year-month key cannot be parsed
#[derive(Debug, Clone, PartialEq)]
pub struct ParseYearMonthError {
    input: String,
}

impl fmt::Display for ParseYearMonthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid year-month '{}', expected YYYY-MM or YYYYMM",
            self.input
        )
    }
}

impl std::error::Error for ParseYearMonthError {}

impl FromStr for YearMonth {
    type Err = ParseYearMonthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseYearMonthError {
            input: s.to_string(),
        };
        let trimmed = s.trim();

        let (year, month) = match trimmed.split_once('-') {
            Some((year, month)) => (year, month),
            // legacy compact form, e.g. 202210
            None if trimmed.len() == 6 && trimmed.is_ascii() => trimmed.split_at(4),
            None => return Err(err()),
        };

        if year.len() != 4 || month.is_empty() || month.len() > 2 {
            return Err(err());
        }
        if !year.chars().chain(month.chars()).all(|c| c.is_ascii_digit()) {
            return Err(err());
        }

        let year = year.parse::<i32>().map_err(|_| err())?;
        let month = month.parse::<u32>().map_err(|_| err())?;
        YearMonth::new(year, month).ok_or_else(err)
    }
}

impl TryFrom<String> for YearMonth {
    type Error = ParseYearMonthError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<YearMonth> for String {
    fn from(value: YearMonth) -> Self {
        value.to_string()
    }
}

/// Total allocation for one whole calendar month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub year_month: YearMonth,
    pub amount: BigDecimal,
}

impl Budget {
    pub fn new(year_month: YearMonth, amount: BigDecimal) -> Self {
        Self { year_month, amount }
    }
}

/// Read-only view of every known budget, keyed by month.
///
/// Built once per query from whatever the storage collaborator returns. When
/// the same month shows up more than once the first entry is kept.
#[derive(Debug, Clone, Default)]
pub struct BudgetSnapshot {
    budgets: BTreeMap<YearMonth, Budget>,
}

impl BudgetSnapshot {
    pub fn new(budgets: Vec<Budget>) -> Self {
        budgets.into_iter().collect()
    }

    pub fn lookup(&self, year_month: YearMonth) -> Option<&Budget> {
        self.budgets.get(&year_month)
    }

    pub fn len(&self) -> usize {
        self.budgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.budgets.is_empty()
    }

    /// Budgets in chronological order
    pub fn iter(&self) -> impl Iterator<Item = &Budget> {
        self.budgets.values()
    }
}

impl FromIterator<Budget> for BudgetSnapshot {
    fn from_iter<I: IntoIterator<Item = Budget>>(iter: I) -> Self {
        let mut budgets = BTreeMap::new();
        for budget in iter {
            budgets.entry(budget.year_month).or_insert(budget);
        }
        Self { budgets }
    }
}
