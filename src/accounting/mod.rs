pub mod config;
pub mod operations;
pub mod processor;
pub mod processor_enums;
pub mod proration;

pub use config::{AccountingConfig, DailyRatePolicy};
pub use proration::{ProrationCalculator, QueryBreakdown, Segment, SegmentKind};
