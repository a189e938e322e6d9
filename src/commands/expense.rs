//! Handlers for the `tabi expense` subcommands.

use crate::args::{AddArgs, ImportArgs, RemoveArgs};
use crate::commands::{confirm, Out};
use crate::ledger::{LedgerStore, Summary};
use crate::model::Expense;
use crate::storage::FileStore;
use crate::{Config, Result};
use anyhow::Context;
use std::fmt::Write as _;
use std::io::Read;

fn open_ledger(config: &Config) -> Result<LedgerStore<FileStore>> {
    LedgerStore::load(config.store())
}

/// Records a new expense. Invalid input (empty title, non-integer amount) is
/// declined with a message rather than an error.
pub fn add_expense(config: &Config, args: &AddArgs) -> Result<Out<Expense>> {
    let mut ledger = open_ledger(config)?;
    match ledger.add(args.title(), args.amount(), args.category(), args.payment())? {
        Some(expense) => Ok(Out::new(
            format!(
                "Recorded ¥{} for {} ({}, {})",
                expense.amount(),
                expense.title(),
                expense.category(),
                expense.payment_method()
            ),
            expense,
        )),
        None => Ok(Out::new_message(
            "Nothing recorded: the title must be non-empty and the amount a whole number of yen",
        )),
    }
}

/// Deletes one expense by id after confirmation.
pub fn remove_expense(config: &Config, args: &RemoveArgs) -> Result<Out<()>> {
    let mut ledger = open_ledger(config)?;
    let Some(expense) = ledger.expenses().iter().find(|e| e.id() == args.id()) else {
        return Ok(format!("No expense with id {}, nothing removed", args.id()).into());
    };
    let prompt = format!(
        "Delete {} (¥{}) recorded on {}? This cannot be undone",
        expense.title(),
        expense.amount(),
        expense.date()
    );
    if !confirm(&prompt, args.yes())? {
        return Ok("Cancelled, nothing removed".into());
    }
    ledger.remove(args.id())?;
    Ok("Expense removed".into())
}

/// Lists the ledger, most recent first.
pub fn list_expenses(config: &Config) -> Result<Out<Vec<Expense>>> {
    let ledger = open_ledger(config)?;
    if ledger.is_empty() {
        return Ok("No expenses recorded yet".into());
    }
    let mut message = format!("{} expense(s), most recent first:\n", ledger.len());
    for expense in ledger.expenses() {
        let _ = writeln!(
            message,
            "  {}  ¥{:<8} {} [{}/{}]  id {}",
            expense.date(),
            expense.amount(),
            expense.title(),
            expense.category(),
            expense.payment_method(),
            expense.id()
        );
    }
    let expenses = ledger.expenses().to_vec();
    Ok(Out::new(message.trim_end().to_string(), expenses))
}

/// Shows the derived totals and the chart-ready category breakdown.
pub fn summarize_expenses(config: &Config) -> Result<Out<Summary>> {
    let ledger = open_ledger(config)?;
    let summary = ledger.aggregate();
    let mut message = format!("Total spent: ¥{}\n", summary.total());
    for slice in summary.chart_series() {
        let _ = writeln!(
            message,
            "  {}  ¥{:<8} ({})",
            slice.label, slice.value, slice.color
        );
    }
    if summary.chart_series().is_empty() {
        message.push_str("  (no spending yet)");
    }
    Ok(Out::new(message.trim_end().to_string(), summary))
}

/// Prints the full ledger as JSON on stdout for the user to relay to the
/// other device through a messaging app.
pub fn export_expenses(config: &Config) -> Result<Out<()>> {
    let ledger = open_ledger(config)?;
    println!("{}", ledger.export_text()?);
    Ok(format!(
        "Exported {} expense record(s). Relay the text above to the other device, \
        then run `tabi expense import` there.",
        ledger.len()
    )
    .into())
}

/// Replaces this device's ledger with an export read from stdin or a file.
pub fn import_expenses(config: &Config, args: &ImportArgs) -> Result<Out<()>> {
    let text = match args.file() {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Unable to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Unable to read the import text from stdin")?;
            buffer
        }
    };

    // Parse up front so a format error surfaces before the confirmation
    // prompt and before anything is touched.
    let incoming: Vec<Expense> = serde_json::from_str(text.trim())
        .context("The pasted text is not a valid expense list; expected a full [...] export")?;

    let mut ledger = open_ledger(config)?;
    let prompt = format!(
        "Importing will completely replace the {} record(s) on this device with {} incoming \
        record(s). Continue?",
        ledger.len(),
        incoming.len()
    );
    if !confirm(&prompt, args.yes())? {
        return Ok("Import cancelled; the ledger is unchanged".into());
    }
    let count = ledger.import_text(&text)?;
    Ok(format!("Imported {count} expense record(s)").into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::{AddArgs, ImportArgs, RemoveArgs};
    use crate::model::{ExpenseCategory, PaymentMethod};
    use tempfile::TempDir;

    async fn test_config() -> (TempDir, Config) {
        let dir = TempDir::new().unwrap();
        let config = Config::load_or_init(dir.path().join("home")).await.unwrap();
        (dir, config)
    }

    #[tokio::test]
    async fn add_then_list_round_trips_through_the_config_store() {
        let (_dir, config) = test_config().await;
        let add = AddArgs::new("拉麵", "1200", ExpenseCategory::Food, PaymentMethod::Cash);
        let out = add_expense(&config, &add).unwrap();
        assert!(out.message().contains("¥1200"));

        let listed = list_expenses(&config).unwrap();
        let expenses = listed.structure().unwrap();
        assert_eq!(expenses.len(), 1);
        assert_eq!(expenses[0].title(), "拉麵");
    }

    #[tokio::test]
    async fn invalid_amount_is_declined_not_an_error() {
        let (_dir, config) = test_config().await;
        let add = AddArgs::new("壞資料", "12abc", ExpenseCategory::Other, PaymentMethod::Cash);
        let out = add_expense(&config, &add).unwrap();
        assert!(out.structure().is_none());
        assert!(out.message().contains("Nothing recorded"));
    }

    #[tokio::test]
    async fn remove_with_yes_deletes_the_record() {
        let (_dir, config) = test_config().await;
        let add = AddArgs::new("門票", "700", ExpenseCategory::Other, PaymentMethod::Card);
        let added = add_expense(&config, &add).unwrap();
        let id = added.structure().unwrap().id().to_string();

        remove_expense(&config, &RemoveArgs::new(&id, true)).unwrap();
        let listed = list_expenses(&config).unwrap();
        assert!(listed.structure().is_none());
    }

    #[tokio::test]
    async fn remove_of_unknown_id_reports_a_noop() {
        let (_dir, config) = test_config().await;
        let out = remove_expense(&config, &RemoveArgs::new("missing", true)).unwrap();
        assert!(out.message().contains("nothing removed"));
    }

    #[tokio::test]
    async fn import_from_file_replaces_the_ledger() {
        let (dir, config) = test_config().await;
        let add = AddArgs::new("舊資料", "100", ExpenseCategory::Other, PaymentMethod::Cash);
        add_expense(&config, &add).unwrap();

        let payload = r#"[{
            "id": "1732000000000",
            "title": "拉麵",
            "amount": 1200,
            "category": "food",
            "paymentMethod": "cash",
            "date": "11/29"
        }]"#;
        let file = dir.path().join("export.json");
        std::fs::write(&file, payload).unwrap();

        let out = import_expenses(&config, &ImportArgs::new(Some(file), true)).unwrap();
        assert!(out.message().contains("Imported 1"));

        let listed = list_expenses(&config).unwrap();
        let expenses = listed.structure().unwrap();
        assert_eq!(expenses.len(), 1);
        assert_eq!(expenses[0].title(), "拉麵");
    }

    #[tokio::test]
    async fn import_of_malformed_file_fails_and_keeps_the_ledger() {
        let (dir, config) = test_config().await;
        let add = AddArgs::new("保留", "500", ExpenseCategory::Food, PaymentMethod::Cash);
        add_expense(&config, &add).unwrap();

        let file = dir.path().join("broken.json");
        std::fs::write(&file, "not an export").unwrap();

        assert!(import_expenses(&config, &ImportArgs::new(Some(file), true)).is_err());

        let listed = list_expenses(&config).unwrap();
        assert_eq!(listed.structure().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn summary_totals_a_single_food_expense() {
        let (_dir, config) = test_config().await;
        let add = AddArgs::new("拉麵", "1200", ExpenseCategory::Food, PaymentMethod::Cash);
        add_expense(&config, &add).unwrap();

        let out = summarize_expenses(&config).unwrap();
        let summary = out.structure().unwrap();
        assert_eq!(summary.total(), 1200);
        assert_eq!(summary.by_category()[&ExpenseCategory::Food], 1200);
        assert_eq!(summary.chart_series().len(), 1);
    }
}
