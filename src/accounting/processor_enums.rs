use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::accounting::proration::QueryBreakdown;
use crate::budget::models::{Budget, YearMonth};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct QueryInputArgs {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub enum AccountingProcessorInput {
    Query(QueryInputArgs),
    Breakdown(QueryInputArgs),
    ListBudgets,
    GetBudget(YearMonth),
    SetBudget(Budget),
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub enum AccountingProcessorOutput {
    Query(BigDecimal),
    Breakdown(QueryBreakdown),
    ListBudgets(Vec<Budget>),
    GetBudget(Option<Budget>),
    SetBudget,
}
