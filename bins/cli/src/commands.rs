//! Command dispatch.
//!
//! Every command prints its result as pretty JSON on stdout. Empty report
//! states print an `empty` marker and succeed; integrity failures print the
//! report and then fail.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use farmbook_core::catalog::AccountCatalog;
use farmbook_core::journal::{Clock, EntryDraft, JournalService, SystemClock};
use farmbook_core::reports::{
    CashFlowStatement, DateRange, IntegrityError, ReportError, TrialBalanceReport,
};
use farmbook_shared::{AppConfig, AppError};
use farmbook_store::{JsonFileRepository, load_catalog};
use serde::Serialize;
use serde_json::json;

use crate::cli::{Cli, Command, EntryArgs, RangeArgs};

type Journal = JournalService<JsonFileRepository, SystemClock>;

/// Runs one command against the configured journal.
pub fn run(cli: Cli, config: &AppConfig) -> anyhow::Result<()> {
    let catalog = Arc::new(account_catalog(config)?);
    let data_file = cli
        .data_file
        .unwrap_or_else(|| PathBuf::from(&config.storage.data_file));
    tracing::debug!(path = %data_file.display(), "Opening journal");

    let mut journal = JournalService::open(JsonFileRepository::new(data_file), SystemClock, catalog)
        .map_err(AppError::from)?;

    match cli.command {
        Command::Submit(args) => {
            let entry = journal.submit(draft(args)).map_err(AppError::from)?;
            print_json(&entry)
        }
        Command::Update { id, entry } => {
            let entry = journal.update(id, draft(entry)).map_err(AppError::from)?;
            print_json(&entry)
        }
        Command::Remove { id } => {
            let removed = journal.remove(id).map_err(AppError::from)?;
            print_json(&removed)
        }
        Command::List => print_json(&journal.list_descending_by_date()),
        Command::Accounts { in_use: true } => print_json(&journal.accounts_in_use()),
        Command::Accounts { in_use: false } => print_json(journal.catalog().accounts()),
        Command::Ledger { account, range } => report(
            resolve_range(&journal, range).and_then(|r| journal.account_ledger(&account, r)),
            |_| Ok(()),
        ),
        Command::TrialBalance(range) => report(
            resolve_range(&journal, range).and_then(|r| journal.trial_balance(r)),
            TrialBalanceReport::check_integrity,
        ),
        Command::IncomeStatement(range) => report(
            resolve_range(&journal, range).and_then(|r| journal.income_statement(r)),
            |_| Ok(()),
        ),
        Command::CashFlow(range) => report(
            resolve_range(&journal, range).and_then(|r| journal.cash_flow(r)),
            CashFlowStatement::check_integrity,
        ),
    }
}

fn account_catalog(config: &AppConfig) -> Result<AccountCatalog, AppError> {
    match &config.catalog.path {
        Some(path) => load_catalog(Path::new(path)),
        None => Ok(AccountCatalog::farm()?),
    }
}

fn draft(args: EntryArgs) -> EntryDraft {
    let date = args.date.unwrap_or_else(|| SystemClock.today());
    EntryDraft::new(date, args.description, args.lines)
}

/// Fills missing bounds from the journal's default range.
fn resolve_range(journal: &Journal, args: RangeArgs) -> Result<DateRange, ReportError> {
    let default = journal.default_range().ok_or(ReportError::NoData)?;
    DateRange::new(
        args.from.unwrap_or(default.from()),
        args.to.unwrap_or(default.to()),
    )
}

fn report<T, F>(result: Result<T, ReportError>, check: F) -> anyhow::Result<()>
where
    T: Serialize,
    F: FnOnce(&T) -> Result<(), IntegrityError>,
{
    match result {
        Ok(report) => {
            print_json(&report)?;
            check(&report).map_err(AppError::from)?;
            Ok(())
        }
        Err(err) if err.is_empty_state() => print_json(&json!({
            "empty": true,
            "code": err.error_code(),
            "message": err.to_string(),
        })),
        Err(err) => Err(AppError::from(err).into()),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    let mut out = io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out)?;
    Ok(())
}
