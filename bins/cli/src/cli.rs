//! Command-line interface definitions.

use std::path::PathBuf;
use std::str::FromStr;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use farmbook_core::journal::Line;
use farmbook_shared::types::EntryId;
use rust_decimal::Decimal;

/// Farmbook - double-entry bookkeeping for a dairy farm
#[derive(Debug, Parser)]
#[command(name = "farmbook", version, about, long_about = None)]
pub struct Cli {
    /// Journal file, overriding `storage.data_file`
    #[arg(long, global = true)]
    pub data_file: Option<PathBuf>,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Record a new journal entry
    Submit(EntryArgs),

    /// Replace an existing journal entry
    Update {
        /// Entry id
        id: EntryId,
        #[command(flatten)]
        entry: EntryArgs,
    },

    /// Delete a journal entry
    Remove {
        /// Entry id
        id: EntryId,
    },

    /// List journal entries, newest first
    List,

    /// List accounts
    Accounts {
        /// Only accounts referenced by the journal
        #[arg(long)]
        in_use: bool,
    },

    /// Movements and running balance of one account
    Ledger {
        /// Account name
        #[arg(long)]
        account: String,
        #[command(flatten)]
        range: RangeArgs,
    },

    /// Net balance of every account
    TrialBalance(RangeArgs),

    /// Revenue, cost of goods sold, expenses and net result
    IncomeStatement(RangeArgs),

    /// Cash movements by activity
    CashFlow(RangeArgs),
}

/// Fields of a journal entry.
#[derive(Debug, Args)]
pub struct EntryArgs {
    /// Transaction date (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Transaction description
    #[arg(long, default_value = "")]
    pub description: String,

    /// Entry line as ACCOUNT=DEBIT:CREDIT, either amount may be left empty
    #[arg(long = "line", value_name = "ACCOUNT=DEBIT:CREDIT", value_parser = parse_line, required = true)]
    pub lines: Vec<Line>,
}

/// Optional report period. Missing bounds fall back to the journal's default range.
#[derive(Debug, Clone, Copy, Args)]
pub struct RangeArgs {
    /// First day of the period (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// Last day of the period (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<NaiveDate>,
}

/// Parses `ACCOUNT=DEBIT:CREDIT`.
///
/// Empty amounts read as zero, so `Kas=100000:` is a debit line and
/// `Penjualan Susu=:100000` a credit line.
pub fn parse_line(input: &str) -> Result<Line, String> {
    let (account, amounts) = input
        .rsplit_once('=')
        .ok_or_else(|| format!("expected ACCOUNT=DEBIT:CREDIT, got '{input}'"))?;
    let account = account.trim();
    if account.is_empty() {
        return Err(format!("missing account name in '{input}'"));
    }
    let (debit, credit) = amounts
        .split_once(':')
        .ok_or_else(|| format!("expected DEBIT:CREDIT after '=', got '{amounts}'"))?;

    Ok(Line {
        account: account.to_string(),
        debit: parse_amount(debit)?,
        credit: parse_amount(credit)?,
    })
}

fn parse_amount(raw: &str) -> Result<Decimal, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(Decimal::ZERO);
    }
    Decimal::from_str(raw).map_err(|err| format!("invalid amount '{raw}': {err}"))
}
