use bigdecimal::{BigDecimal, RoundingMode};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::accounting::config::DailyRatePolicy;
use crate::budget::models::{Budget, BudgetSnapshot, YearMonth};

/**
 * Mechanic:
 * - split [start, end] into per-month segments
 * - the month holding `start` and the month holding `end` are priced per day
 *   (days covered * daily rate of that month)
 * - every month strictly between them contributes its whole budget
 * - months without a budget contribute zero
 */

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentKind {
    Partial,
    FullMonth,
}

/// Contiguous run of days inside one calendar month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub year_month: YearMonth,
    /// First day of month covered (1-based)
    pub first_day: u32,
    /// Last day of month covered, inclusive
    pub last_day: u32,
    pub days: u32,
    pub kind: SegmentKind,
    /// false when the month had no budget and was priced at zero
    pub budget_defined: bool,
    pub amount: BigDecimal,
}

/// Result of a query with its per-month decomposition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryBreakdown {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub policy: DailyRatePolicy,
    pub total: BigDecimal,
    pub segments: Vec<Segment>,
}

/// Prorates monthly budgets over an inclusive date range
#[derive(Debug, Clone, Copy, Default)]
pub struct ProrationCalculator {
    policy: DailyRatePolicy,
}

impl ProrationCalculator {
    pub fn new(policy: DailyRatePolicy) -> Self {
        Self { policy }
    }

    /// Total amount owed over [start, end]. An inverted range is worth zero.
    pub fn query(&self, start: NaiveDate, end: NaiveDate, budgets: &BudgetSnapshot) -> BigDecimal {
        self.breakdown(start, end, budgets)
            .into_iter()
            .fold(BigDecimal::from(0), |total, segment| total + segment.amount)
    }

    /// Per-month segments making up [start, end], empty when start > end
    pub fn breakdown(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        budgets: &BudgetSnapshot,
    ) -> Vec<Segment> {
        if start > end {
            return Vec::new();
        }

        let start_month = YearMonth::from_date(start);
        let end_month = YearMonth::from_date(end);

        if start_month == end_month {
            return vec![self.partial_segment(start_month, start.day(), end.day(), budgets)];
        }

        let mut segments = vec![self.partial_segment(
            start_month,
            start.day(),
            start_month.days_in_month(),
            budgets,
        )];

        let mut current = start_month.succ();
        while current < end_month {
            segments.push(full_month_segment(current, budgets));
            current = current.succ();
        }

        segments.push(self.partial_segment(end_month, 1, end.day(), budgets));
        segments
    }

    /// Per-day amount for a month under the active policy, zero without a budget
    pub fn daily_rate(&self, year_month: YearMonth, budgets: &BudgetSnapshot) -> BigDecimal {
        let amount = amount_or_zero(budgets.lookup(year_month));
        let days = BigDecimal::from(year_month.days_in_month());
        match self.policy {
            DailyRatePolicy::Truncate => (amount / days).with_scale_round(0, RoundingMode::Down),
            DailyRatePolicy::Exact => amount / days,
        }
    }

    fn partial_segment(
        &self,
        year_month: YearMonth,
        first_day: u32,
        last_day: u32,
        budgets: &BudgetSnapshot,
    ) -> Segment {
        let budget = budgets.lookup(year_month);
        let days = last_day - first_day + 1;

        let amount = match self.policy {
            DailyRatePolicy::Truncate => {
                BigDecimal::from(days) * self.daily_rate(year_month, budgets)
            }
            // multiply before dividing so a whole month recombines exactly
            DailyRatePolicy::Exact => {
                amount_or_zero(budget) * BigDecimal::from(days)
                    / BigDecimal::from(year_month.days_in_month())
            }
        };

        Segment {
            year_month,
            first_day,
            last_day,
            days,
            kind: SegmentKind::Partial,
            budget_defined: budget.is_some(),
            amount,
        }
    }
}

fn full_month_segment(year_month: YearMonth, budgets: &BudgetSnapshot) -> Segment {
    let budget = budgets.lookup(year_month);
    let days = year_month.days_in_month();
    Segment {
        year_month,
        first_day: 1,
        last_day: days,
        days,
        kind: SegmentKind::FullMonth,
        budget_defined: budget.is_some(),
        amount: amount_or_zero(budget),
    }
}

/// Missing months are priced as a zero budget
fn amount_or_zero(budget: Option<&Budget>) -> BigDecimal {
    match budget {
        Some(budget) => budget.amount.clone(),
        None => BigDecimal::from(0),
    }
}
