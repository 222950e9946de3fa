//! Command-line driver for the fintrack library.
//!
//! This is deliberately thin glue: it parses arguments, wires a storage
//! backend into the session state, runs one operation, and prints the
//! result. All domain behaviour lives in the library.

use std::{
    path::PathBuf,
    process::exit,
    sync::{Arc, OnceLock},
};

use clap::{Parser, Subcommand};
use numfmt::{Formatter, Precision};
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

use fintrack::{
    AppState, CategoryAggregate, CategoryCatalog, Error, JsonFileBackend, MemoryBackend,
    NewTransaction, Overview, Period, PreferenceStore, StorageBackend, TransactionId,
    TransactionKind, cumulative_balance, group_by_day, sort_for_display,
};

/// A personal income and expense tracker.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory where transaction data and preferences are saved.
    #[arg(long, default_value = ".")]
    data_dir: PathBuf,

    /// The user whose transactions to operate on.
    #[arg(long, default_value = "guest")]
    user: String,

    /// Canonical timezone used to resolve the current date, e.g. "Europe/Moscow".
    #[arg(long, default_value = "Europe/Moscow")]
    timezone: String,

    /// Keep all data in memory and skip persistence.
    #[arg(long)]
    in_memory: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show summary statistics and category breakdowns.
    Stats {
        /// Filter by this period instead of the saved one (day, week, month,
        /// year, all). The choice is remembered.
        #[arg(long)]
        period: Option<Period>,

        /// Also print the per-day series with a running balance.
        #[arg(long)]
        daily: bool,
    },

    /// List the transactions in the selected period, grouped by day.
    List {
        /// Filter by this period instead of the saved one. The choice is
        /// remembered.
        #[arg(long)]
        period: Option<Period>,
    },

    /// Record a new transaction.
    Add {
        /// Amount in whole currency units. The sign is ignored.
        #[arg(allow_negative_numbers = true)]
        amount: i64,

        /// "income" or "expense".
        kind: TransactionKind,

        /// Category id, e.g. "food" or "salary". See `categories`.
        category: String,

        /// What the transaction was for.
        #[arg(default_value = "")]
        description: String,

        /// The date the transaction happened on. Defaults to today.
        #[arg(long, value_parser = parse_date)]
        date: Option<Date>,
    },

    /// Delete a transaction by id.
    Delete {
        /// The id printed by `list`.
        id: TransactionId,
    },

    /// Fill the store with a month of generated demo data.
    Seed,

    /// Delete every stored transaction.
    Clear,

    /// List the available categories.
    Categories {
        /// Only show categories for this kind of transaction.
        #[arg(long)]
        kind: Option<TransactionKind>,
    },
}

#[tokio::main]
async fn main() {
    setup_logging();

    let args = Args::parse();

    if let Err(error) = run(args).await {
        eprintln!("Error: {error}");
        exit(1);
    }
}

async fn run(args: Args) -> Result<(), Error> {
    let backend: Arc<dyn StorageBackend> = if args.in_memory {
        Arc::new(MemoryBackend)
    } else {
        Arc::new(JsonFileBackend::new(&args.data_dir, &args.user))
    };
    let preferences =
        (!args.in_memory).then(|| PreferenceStore::new(&args.data_dir, &args.user));

    let mut state = AppState::new(backend, preferences, &args.timezone);

    match args.command {
        Command::Stats { period, daily } => {
            if let Some(period) = period {
                state.set_period(period);
            }
            print_stats(&state.overview()?, state.selected_period(), daily);
        }
        Command::List { period } => {
            if let Some(period) = period {
                state.set_period(period);
            }
            print_history(state.overview()?, state.catalog());
        }
        Command::Add {
            amount,
            kind,
            category,
            description,
            date,
        } => {
            let mut new = NewTransaction::new(amount, kind, &category, &description);
            if let Some(date) = date {
                new = new.date(date);
            }
            let transaction = state.add_transaction(new)?;
            println!(
                "Записано: {} {} ({})",
                sign_of(transaction.kind),
                currency(transaction.amount),
                transaction.id
            );
        }
        Command::Delete { id } => {
            if state.delete_transaction(&id) {
                println!("Операция {id} удалена.");
            } else {
                println!("Операция {id} не найдена.");
            }
        }
        Command::Seed => {
            let count = state.seed()?;
            println!("Добавлено демонстрационных операций: {count}");
        }
        Command::Clear => {
            state.clear();
            println!("Все операции удалены.");
        }
        Command::Categories { kind } => {
            print_categories(state.catalog(), kind);
        }
    }

    state.flush().await;

    Ok(())
}

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().pretty().with_filter(filter))
        .init();
}

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

fn parse_date(value: &str) -> Result<Date, String> {
    Date::parse(value, DATE_FORMAT)
        .map_err(|error| format!("expected a date like 2024-08-07: {error}"))
}

fn currency(amount: i64) -> String {
    static FMT: OnceLock<Formatter> = OnceLock::new();

    let fmt = FMT.get_or_init(|| {
        Formatter::currency("₽")
            .unwrap()
            .precision(Precision::Decimals(0))
    });

    fmt.fmt_string(amount as f64)
}

fn sign_of(kind: TransactionKind) -> &'static str {
    match kind {
        TransactionKind::Income => "+",
        TransactionKind::Expense => "−",
    }
}

fn print_stats(overview: &Overview, period: Period, daily: bool) {
    println!("Баланс (всё время): {}", currency(overview.total_balance));
    println!();
    println!("Период: {}", period.label());
    println!("  Доход:    {}", currency(overview.stats.total_income));
    println!("  Расход:   {}", currency(overview.stats.total_expense));
    println!("  Баланс:   {}", currency(overview.stats.balance));
    println!("  Операций: {}", overview.stats.transaction_count);

    print_breakdown("Расходы по категориям", &overview.categories.expenses);
    print_breakdown("Доходы по категориям", &overview.categories.income);

    if daily {
        println!();
        println!(
            "{:<12} {:>12} {:>12} {:>12} {:>12}",
            "Дата", "Доход", "Расход", "Баланс", "Накоплено"
        );
        let running = cumulative_balance(&overview.daily);
        for (aggregate, point) in overview.daily.iter().zip(&running) {
            println!(
                "{:<12} {:>12} {:>12} {:>12} {:>12}",
                aggregate.date.to_string(),
                currency(aggregate.income),
                currency(aggregate.expense),
                currency(aggregate.balance),
                currency(point.balance)
            );
        }
    }
}

fn print_breakdown(title: &str, entries: &[CategoryAggregate]) {
    if entries.is_empty() {
        return;
    }

    println!();
    println!("{title}:");
    for entry in entries {
        println!(
            "  {} {:<16} {:>12} {:>5.1}% ({})",
            entry.icon,
            entry.category_name,
            currency(entry.total),
            entry.percentage,
            entry.count
        );
    }
}

fn print_history(overview: Overview, catalog: &CategoryCatalog) {
    let mut transactions = overview.filtered_transactions;
    sort_for_display(&mut transactions);

    if transactions.is_empty() {
        println!("Нет операций за выбранный период.");
        return;
    }

    for group in group_by_day(&transactions) {
        println!("{}", group.date);
        for transaction in group.transactions {
            let display = catalog.resolve(&transaction.category_id);
            println!(
                "  {}{:>10}  {} {:<16} {}  [{}]",
                sign_of(transaction.kind),
                currency(transaction.amount),
                display.icon,
                display.name,
                transaction.description,
                transaction.id
            );
        }
        println!();
    }
}

fn print_categories(catalog: &CategoryCatalog, kind: Option<TransactionKind>) {
    let categories: Vec<_> = match kind {
        Some(kind) => catalog.of_kind(kind),
        None => catalog.all().iter().collect(),
    };

    for category in categories {
        println!(
            "{} {:<16} {:<8} {}",
            category.icon,
            category.id,
            category.kind.as_str(),
            category.name
        );
    }
}
