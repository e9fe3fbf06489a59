use anyhow::Result;
use bigdecimal::BigDecimal;
use std::fmt;

use crate::accounting::config::AccountingConfig;
use crate::accounting::processor_enums::QueryInputArgs;
use crate::accounting::proration::{ProrationCalculator, QueryBreakdown};
use crate::budget::models::{Budget, BudgetSnapshot, YearMonth};
use crate::budget::storage::BudgetRepo;

/// Budget rejected before it reaches storage
#[derive(Debug, Clone, PartialEq)]
pub enum InvalidBudget {
    NegativeAmount {
        year_month: YearMonth,
        amount: BigDecimal,
    },
}

impl fmt::Display for InvalidBudget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount { year_month, amount } => {
                write!(f, "Budget for {} cannot be negative: {}", year_month, amount)
            }
        }
    }
}

impl std::error::Error for InvalidBudget {}

/// Read every budget once and freeze it for the duration of a query
pub fn load_snapshot(repo: &dyn BudgetRepo) -> Result<BudgetSnapshot> {
    let budgets = repo.get_all()?;
    Ok(BudgetSnapshot::new(budgets))
}

pub fn query_amount(
    repo: &dyn BudgetRepo,
    config: &AccountingConfig,
    args: &QueryInputArgs,
) -> Result<BigDecimal> {
    let snapshot = load_snapshot(repo)?;
    let calculator = ProrationCalculator::new(config.daily_rate_policy);
    let total = calculator.query(args.start, args.end, &snapshot);

    tracing::debug!(
        start = %args.start,
        end = %args.end,
        policy = %config.daily_rate_policy,
        budgets = snapshot.len(),
        %total,
        "prorated budget query"
    );

    Ok(total)
}

pub fn query_breakdown(
    repo: &dyn BudgetRepo,
    config: &AccountingConfig,
    args: &QueryInputArgs,
) -> Result<QueryBreakdown> {
    let snapshot = load_snapshot(repo)?;
    let calculator = ProrationCalculator::new(config.daily_rate_policy);
    let segments = calculator.breakdown(args.start, args.end, &snapshot);
    let total = segments
        .iter()
        .fold(BigDecimal::from(0), |acc, s| acc + &s.amount);

    if args.start > args.end {
        tracing::debug!(start = %args.start, end = %args.end, "inverted range, nothing to prorate");
    }

    Ok(QueryBreakdown {
        start: args.start,
        end: args.end,
        policy: config.daily_rate_policy,
        total,
        segments,
    })
}

/// All budgets in chronological order
pub fn list_budgets(repo: &dyn BudgetRepo) -> Result<Vec<Budget>> {
    let snapshot = load_snapshot(repo)?;
    Ok(snapshot.iter().cloned().collect())
}

pub fn get_budget(repo: &dyn BudgetRepo, year_month: YearMonth) -> Result<Option<Budget>> {
    let snapshot = load_snapshot(repo)?;
    Ok(snapshot.lookup(year_month).cloned())
}

pub fn set_budget(repo: &dyn BudgetRepo, budget: Budget) -> Result<()> {
    if budget.amount < BigDecimal::from(0) {
        return Err(InvalidBudget::NegativeAmount {
            year_month: budget.year_month,
            amount: budget.amount,
        }
        .into());
    }

    tracing::info!(year_month = %budget.year_month, amount = %budget.amount, "saving budget");
    repo.save(budget)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accounting::config::DailyRatePolicy;
    use crate::budget::storage::BudgetStore;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ym(year: i32, month: u32) -> YearMonth {
        YearMonth::new(year, month).unwrap()
    }

    fn seeded_store() -> BudgetStore {
        BudgetStore::with_budgets(vec![
            Budget::new(ym(2022, 10), BigDecimal::from(31000)),
            Budget::new(ym(2022, 11), BigDecimal::from(3000)),
            Budget::new(ym(2022, 12), BigDecimal::from(31000)),
        ])
    }

    #[test]
    fn test_query_amount_reads_store() {
        let store = seeded_store();
        let args = QueryInputArgs {
            start: date(2022, 10, 30),
            end: date(2022, 12, 5),
        };

        let total = query_amount(&store, &AccountingConfig::default(), &args).unwrap();
        assert_eq!(total, BigDecimal::from(10000));
    }

    #[test]
    fn test_query_breakdown_total() {
        let store = seeded_store();
        let args = QueryInputArgs {
            start: date(2022, 10, 31),
            end: date(2022, 11, 2),
        };

        let breakdown = query_breakdown(
            &store,
            &AccountingConfig::new(DailyRatePolicy::Exact),
            &args,
        )
        .unwrap();
        assert_eq!(breakdown.total, BigDecimal::from(1200));
        assert_eq!(breakdown.segments.len(), 2);
        assert_eq!(breakdown.policy, DailyRatePolicy::Exact);
    }

    #[test]
    fn test_list_budgets_is_chronological() {
        let store = seeded_store();
        let budgets = list_budgets(&store).unwrap();

        let keys: Vec<YearMonth> = budgets.iter().map(|b| b.year_month).collect();
        assert_eq!(keys, vec![ym(2022, 10), ym(2022, 11), ym(2022, 12)]);
    }

    #[test]
    fn test_set_budget_rejects_negative() {
        let store = BudgetStore::new();
        let err = set_budget(&store, Budget::new(ym(2022, 10), BigDecimal::from(-1))).unwrap_err();
        assert_eq!(
            err.downcast_ref::<InvalidBudget>(),
            Some(&InvalidBudget::NegativeAmount {
                year_month: ym(2022, 10),
                amount: BigDecimal::from(-1),
            })
        );
        assert!(store.get_all().unwrap().is_empty());

        assert!(set_budget(&store, Budget::new(ym(2022, 10), BigDecimal::from(0))).is_ok());
        assert!(get_budget(&store, ym(2022, 10)).unwrap().is_some());
    }
}
