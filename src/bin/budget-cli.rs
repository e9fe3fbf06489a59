use anyhow::{Result, anyhow};
use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use colored::Colorize;
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

use budget_proration::accounting::config::AccountingConfig;
use budget_proration::accounting::processor_enums::{
    AccountingProcessorInput, AccountingProcessorOutput, QueryInputArgs,
};
use budget_proration::accounting::proration::{QueryBreakdown, SegmentKind};
use budget_proration::action_router::{ActionRouterInput, ActionRouterOutput};
use budget_proration::budget::models::{Budget, YearMonth};
use budget_proration::cli_helper::{call_action_router, execute_with_retry, initialize_app_config};
use budget_proration::cli_utils::{
    formatting::{format_bool, format_decimal, print_header, print_section},
    format_json, format_record, format_table,
    input::parse_amount,
    menu::Operation,
    print_error, print_info, print_success, print_warning, Input,
};
use budget_proration::utils::app_config::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "Budget CLI")]
#[command(about = "Manage monthly budgets and prorate them over date ranges", long_about = None)]
struct Args {
    /// JSON file holding budgets (default: BUDGET_STORE_PATH, otherwise in-memory)
    #[arg(long, short = 's')]
    store: Option<PathBuf>,

    #[command(flatten)]
    accounting: AccountingConfig,

    /// Print results as JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every budget, oldest month first
    List,
    /// Create or replace the budget of a month
    Set {
        /// Month key, YYYY-MM
        #[arg(long)]
        month: YearMonth,
        /// Total amount for the whole month
        #[arg(long, value_parser = parse_amount)]
        amount: BigDecimal,
    },
    /// Prorated amount over the inclusive range [start, end]
    Query {
        #[arg(long)]
        start: NaiveDate,
        #[arg(long)]
        end: NaiveDate,
        /// Show the per-month segments
        #[arg(long)]
        breakdown: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            env::var("RUST_LOG")
                .unwrap_or_else(|_| "warn".to_string())
                .as_str(),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let app_config = initialize_app_config(args.store.as_deref(), args.accounting.clone())?;

    let json = args.json;
    match args.command {
        Some(Command::List) if json => {
            let budgets = fetch_budgets(&app_config).await?;
            println!("{}", format_json(&budgets));
            Ok(())
        }
        Some(Command::List) => list_budgets(&app_config).await,
        Some(Command::Set { month, amount }) => {
            set_budget(&app_config, Budget::new(month, amount)).await
        }
        Some(Command::Query { start, end, breakdown }) => {
            let args = QueryInputArgs { start, end };
            match (breakdown, json) {
                (true, true) => {
                    let breakdown = query_breakdown(&app_config, args).await?;
                    println!("{}", format_json(&breakdown));
                    Ok(())
                }
                (true, false) => show_breakdown(&app_config, args).await,
                (false, _) => {
                    let amount = query_amount(&app_config, args).await?;
                    println!("{}", amount);
                    Ok(())
                }
            }
        }
        None => interactive(app_config).await,
    }
}

async fn interactive(app_config: AppConfig) -> Result<()> {
    eprintln!("{}", "╔═══════════════════════════════════════════════════════╗".bright_cyan());
    eprintln!("{}", "║         Budget Proration CLI                          ║".bright_cyan());
    eprintln!("{}", "╚═══════════════════════════════════════════════════════╝".bright_cyan());
    eprintln!();
    eprintln!(
        "Daily rate policy: {}",
        app_config.accounting.daily_rate_policy.to_string().green()
    );
    eprintln!();

    loop {
        let outcome = match Operation::select() {
            Ok(Operation::ListBudgets) => list_budgets(&app_config).await,
            Ok(Operation::SetBudget) => prompt_set_budget(&app_config).await,
            Ok(Operation::Query) => prompt_query(&app_config).await,
            Ok(Operation::Breakdown) => prompt_breakdown(&app_config).await,
            Ok(Operation::Exit) => {
                eprintln!("{}", "Goodbye!".bright_cyan());
                break;
            }
            Err(e) => {
                eprintln!("{}", format!("Error: {}", e).red());
                break;
            }
        };

        if let Err(e) = outcome {
            print_error(&e.to_string());
        }

        eprintln!();
    }

    Ok(())
}

async fn run(app_config: &AppConfig, input: AccountingProcessorInput) -> Result<AccountingProcessorOutput> {
    match call_action_router(ActionRouterInput::Accounting(input), app_config.clone()).await? {
        ActionRouterOutput::Accounting(output) => Ok(output),
    }
}

async fn fetch_budgets(app_config: &AppConfig) -> Result<Vec<Budget>> {
    match run(app_config, AccountingProcessorInput::ListBudgets).await? {
        AccountingProcessorOutput::ListBudgets(budgets) => Ok(budgets),
        _ => Err(anyhow!("Unexpected output type")),
    }
}

async fn list_budgets(app_config: &AppConfig) -> Result<()> {
    print_header("Budgets");

    let budgets = fetch_budgets(app_config).await?;

    if budgets.is_empty() {
        print_info("No budgets defined");
        return Ok(());
    }

    let rows = budgets
        .iter()
        .map(|b| {
            vec![
                b.year_month.to_string(),
                b.year_month.days_in_month().to_string(),
                format_decimal(&b.amount),
            ]
        })
        .collect();
    format_table(vec!["Month", "Days", "Amount"], rows);

    Ok(())
}

async fn set_budget(app_config: &AppConfig, budget: Budget) -> Result<()> {
    let year_month = budget.year_month;
    match run(app_config, AccountingProcessorInput::SetBudget(budget)).await? {
        AccountingProcessorOutput::SetBudget => {
            print_success(&format!("Budget for {} saved", year_month));
            Ok(())
        }
        _ => Err(anyhow!("Unexpected output type")),
    }
}

async fn query_amount(app_config: &AppConfig, args: QueryInputArgs) -> Result<BigDecimal> {
    match run(app_config, AccountingProcessorInput::Query(args)).await? {
        AccountingProcessorOutput::Query(amount) => Ok(amount),
        _ => Err(anyhow!("Unexpected output type")),
    }
}

async fn query_breakdown(app_config: &AppConfig, args: QueryInputArgs) -> Result<QueryBreakdown> {
    match run(app_config, AccountingProcessorInput::Breakdown(args)).await? {
        AccountingProcessorOutput::Breakdown(breakdown) => Ok(breakdown),
        _ => Err(anyhow!("Unexpected output type")),
    }
}

async fn show_breakdown(app_config: &AppConfig, args: QueryInputArgs) -> Result<()> {
    let breakdown = query_breakdown(app_config, args).await?;

    print_section(&format!("{} → {}", breakdown.start, breakdown.end));

    let rows = breakdown
        .segments
        .iter()
        .map(|s| {
            vec![
                s.year_month.to_string(),
                format!("{}-{}", s.first_day, s.last_day),
                s.days.to_string(),
                match s.kind {
                    SegmentKind::Partial => "partial".to_string(),
                    SegmentKind::FullMonth => "full month".to_string(),
                },
                format_bool(s.budget_defined),
                format_decimal(&s.amount),
            ]
        })
        .collect();
    format_table(vec!["Month", "Days of month", "Days", "Kind", "Budget", "Amount"], rows);

    println!();
    format_record(vec![
        ("Policy", breakdown.policy.to_string()),
        ("Total", format_decimal(&breakdown.total)),
    ]);

    Ok(())
}

async fn prompt_set_budget(app_config: &AppConfig) -> Result<()> {
    print_header("Set Budget");

    let year_month = Input::get_year_month("Month")?;
    let amount = Input::get_amount("Amount for the whole month")?;

    execute_with_retry(
        || set_budget(app_config, Budget::new(year_month, amount.clone())),
        "set_budget",
    )
    .await
}

fn prompt_range() -> Result<QueryInputArgs> {
    let start = Input::get_date("Start date")?;
    let end = Input::get_date("End date")?;
    if start > end {
        print_warning("Start is after end, the amount will be zero");
    }
    Ok(QueryInputArgs { start, end })
}

async fn prompt_query(app_config: &AppConfig) -> Result<()> {
    print_header("Query Amount");

    let args = prompt_range()?;
    let amount = execute_with_retry(|| query_amount(app_config, args.clone()), "query").await?;

    format_record(vec![
        ("Start", args.start.to_string()),
        ("End", args.end.to_string()),
        ("Amount", format_decimal(&amount)),
    ]);

    Ok(())
}

async fn prompt_breakdown(app_config: &AppConfig) -> Result<()> {
    print_header("Query Breakdown");

    let args = prompt_range()?;
    show_breakdown(app_config, args).await
}
