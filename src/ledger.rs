//! The expense ledger: persistence, derived aggregation, and the manual
//! export/import sync used to pass the ledger between devices.
//!
//! The ledger is the only mutable state the application owns. Every mutation
//! rewrites the full persisted slot within the same call, so the in-memory and
//! persisted representations are equal after each operation. Synchronization
//! between devices is an out-of-band full replace: one device exports the
//! ledger as JSON text, the other imports it after confirming the overwrite.
//! There is no merge and no versioning; one writer at a time is the intended
//! model.

use crate::model::{Expense, ExpenseCategory, PaymentMethod};
use crate::storage::KvStore;
use crate::Result;
use anyhow::Context;
use chrono::{Local, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// The storage slot holding the serialized ledger.
pub const LEDGER_KEY: &str = "ledger";

/// Owns the ordered list of expense records and writes through to storage on
/// every mutation. Iteration order is most-recent-first by construction.
#[derive(Debug)]
pub struct LedgerStore<S: KvStore> {
    store: S,
    expenses: Vec<Expense>,
    /// The most recently issued id, used to keep ids strictly increasing when
    /// two adds land in the same millisecond.
    last_id: i64,
}

impl<S: KvStore> LedgerStore<S> {
    /// Loads the persisted ledger from `store`.
    ///
    /// An absent slot and a slot whose contents fail to parse are treated
    /// identically: the ledger starts empty. Parse failures are logged and
    /// swallowed so that a corrupted slot never takes the application down.
    /// Storage I/O failures still propagate.
    pub fn load(store: S) -> Result<Self> {
        let expenses = match store.get(LEDGER_KEY)? {
            Some(text) => match serde_json::from_str::<Vec<Expense>>(&text) {
                Ok(list) => list,
                Err(e) => {
                    warn!("Ignoring unreadable ledger data: {e}");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };
        Ok(Self {
            store,
            expenses,
            last_id: 0,
        })
    }

    /// The records, most recent first.
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Validates and records a new expense, prepending it to the ledger and
    /// persisting the full list before returning.
    ///
    /// Returns `Ok(None)` without touching any state when validation declines
    /// the input: an empty (or whitespace-only) title, or amount text that is
    /// not a whole number of yen. Storage failures are errors.
    pub fn add(
        &mut self,
        title: &str,
        amount_text: &str,
        category: ExpenseCategory,
        payment_method: PaymentMethod,
    ) -> Result<Option<Expense>> {
        let title = title.trim();
        if title.is_empty() {
            debug!("Declining to add an expense with an empty title");
            return Ok(None);
        }
        let amount: u64 = match amount_text.trim().parse() {
            Ok(amount) => amount,
            Err(_) => {
                debug!("Declining to add an expense with amount '{amount_text}'");
                return Ok(None);
            }
        };
        let expense = Expense::new(
            self.next_id(),
            title,
            amount,
            category,
            payment_method,
            Local::now().format("%m/%d").to_string(),
        );
        self.expenses.insert(0, expense.clone());
        self.persist()?;
        Ok(Some(expense))
    }

    /// Removes the record with the given id and persists. Returns `false`
    /// (a no-op) when no record matches.
    ///
    /// Removal is destructive; callers are expected to obtain interactive
    /// confirmation before invoking this. The store itself never prompts.
    pub fn remove(&mut self, id: &str) -> Result<bool> {
        let before = self.expenses.len();
        self.expenses.retain(|e| e.id() != id);
        if self.expenses.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// Derives the spending summary from the current ledger.
    ///
    /// This is a pure function of the record list, recomputed on every call:
    /// nothing here is cached or persisted.
    pub fn aggregate(&self) -> Summary {
        let mut by_category: BTreeMap<ExpenseCategory, u64> =
            ExpenseCategory::ALL.iter().map(|c| (*c, 0)).collect();
        let mut total = 0u64;
        for expense in &self.expenses {
            total += expense.amount();
            *by_category.entry(expense.category()).or_insert(0) += expense.amount();
        }
        let chart_series = ExpenseCategory::ALL
            .iter()
            .filter_map(|category| {
                let value = by_category[category];
                (value > 0).then(|| ChartSlice {
                    label: category.label().to_string(),
                    value,
                    color: category.color().to_string(),
                })
            })
            .collect();
        Summary {
            total,
            by_category,
            chart_series,
        }
    }

    /// Serializes the full ledger to transportable JSON text.
    ///
    /// The output round-trips losslessly through [`import_text`]. Relaying it
    /// to another device (messaging app, clipboard tool) is the user's job.
    ///
    /// [`import_text`]: LedgerStore::import_text
    pub fn export_text(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.expenses).context("Unable to serialize the ledger")
    }

    /// Replaces the entire ledger with the records parsed from `text` and
    /// persists the result. Returns the number of imported records.
    ///
    /// A parse failure returns an error and leaves the ledger untouched.
    /// Import is a full overwrite of existing data; callers must obtain
    /// interactive confirmation first.
    pub fn import_text(&mut self, text: &str) -> Result<usize> {
        let incoming: Vec<Expense> = serde_json::from_str(text.trim())
            .context("The pasted text is not a valid expense list; expected a full [...] export")?;
        self.expenses = incoming;
        self.persist()?;
        Ok(self.expenses.len())
    }

    fn persist(&self) -> Result<()> {
        let json =
            serde_json::to_string_pretty(&self.expenses).context("Unable to serialize the ledger")?;
        self.store.set(LEDGER_KEY, &json)
    }

    /// Issues a millisecond-timestamp id, bumped past the previous one when
    /// two adds land in the same millisecond.
    fn next_id(&mut self) -> String {
        let mut candidate = Utc::now().timestamp_millis();
        if candidate <= self.last_id {
            candidate = self.last_id + 1;
        }
        self.last_id = candidate;
        candidate.to_string()
    }
}

/// The derived spending summary: the grand total, per-category totals, and a
/// chart-ready series restricted to categories that saw spending.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct Summary {
    total: u64,
    by_category: BTreeMap<ExpenseCategory, u64>,
    chart_series: Vec<ChartSlice>,
}

impl Summary {
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn by_category(&self) -> &BTreeMap<ExpenseCategory, u64> {
        &self.by_category
    }

    pub fn chart_series(&self) -> &[ChartSlice] {
        &self.chart_series
    }
}

/// One slice of the category chart: label, spent amount, and display color.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct ChartSlice {
    pub label: String,
    pub value: u64,
    pub color: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::testing::MemStore;

    fn ledger() -> (LedgerStore<MemStore>, MemStore) {
        let store = MemStore::new();
        let ledger = LedgerStore::load(store.clone()).unwrap();
        (ledger, store)
    }

    #[test]
    fn load_with_no_persisted_data_is_empty() {
        let (ledger, _) = ledger();
        assert!(ledger.is_empty());
    }

    #[test]
    fn load_swallows_malformed_persisted_data() {
        let store = MemStore::new();
        store.put_raw(LEDGER_KEY, "{ this is not json");
        let ledger = LedgerStore::load(store).unwrap();
        assert!(ledger.is_empty());
    }

    #[test]
    fn add_prepends_and_writes_through() {
        let (mut ledger, store) = ledger();
        ledger
            .add("拉麵", "1200", ExpenseCategory::Food, PaymentMethod::Cash)
            .unwrap()
            .unwrap();
        ledger
            .add("地鐵", "300", ExpenseCategory::Transport, PaymentMethod::Card)
            .unwrap()
            .unwrap();

        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.expenses()[0].title(), "地鐵");
        assert_eq!(ledger.expenses()[1].title(), "拉麵");

        // The persisted slot must equal the in-memory list after every add.
        let persisted: Vec<Expense> =
            serde_json::from_str(&store.raw(LEDGER_KEY).unwrap()).unwrap();
        assert_eq!(persisted, ledger.expenses());
    }

    #[test]
    fn add_declines_invalid_amount_text() {
        let (mut ledger, store) = ledger();
        for bad in ["", "  ", "abc", "12.5", "-100", "¥500"] {
            let outcome = ledger
                .add("something", bad, ExpenseCategory::Other, PaymentMethod::Cash)
                .unwrap();
            assert!(outcome.is_none(), "amount {bad:?} should be declined");
        }
        assert!(ledger.is_empty());
        assert!(store.raw(LEDGER_KEY).is_none(), "nothing should persist");
    }

    #[test]
    fn add_declines_empty_title() {
        let (mut ledger, _) = ledger();
        let outcome = ledger
            .add("   ", "500", ExpenseCategory::Food, PaymentMethod::Cash)
            .unwrap();
        assert!(outcome.is_none());
        assert!(ledger.is_empty());
    }

    #[test]
    fn ids_are_strictly_increasing_within_a_session() {
        let (mut ledger, _) = ledger();
        for i in 0..5 {
            ledger
                .add(
                    "item",
                    &i.to_string(),
                    ExpenseCategory::Other,
                    PaymentMethod::Cash,
                )
                .unwrap()
                .unwrap();
        }
        // Newest first, so ids must decrease down the list.
        let ids: Vec<i64> = ledger
            .expenses()
            .iter()
            .map(|e| e.id().parse().unwrap())
            .collect();
        for pair in ids.windows(2) {
            assert!(pair[0] > pair[1]);
        }
    }

    #[test]
    fn aggregate_totals_match_the_records() {
        let (mut ledger, _) = ledger();
        ledger
            .add("拉麵", "1200", ExpenseCategory::Food, PaymentMethod::Cash)
            .unwrap();
        ledger
            .add("計程車", "1500", ExpenseCategory::Transport, PaymentMethod::Cash)
            .unwrap();
        ledger
            .add("伴手禮", "3000", ExpenseCategory::Buy, PaymentMethod::Card)
            .unwrap();

        let summary = ledger.aggregate();
        assert_eq!(summary.total(), 5700);
        assert_eq!(summary.by_category()[&ExpenseCategory::Food], 1200);
        assert_eq!(summary.by_category()[&ExpenseCategory::Transport], 1500);
        assert_eq!(summary.by_category()[&ExpenseCategory::Buy], 3000);
        assert_eq!(summary.by_category()[&ExpenseCategory::Other], 0);
        assert_eq!(
            summary.by_category().values().sum::<u64>(),
            summary.total()
        );
        // Only categories with spending appear in the chart.
        assert_eq!(summary.chart_series().len(), 3);
    }

    #[test]
    fn single_food_expense_yields_one_chart_slice() {
        let (mut ledger, _) = ledger();
        ledger
            .add("拉麵", "1200", ExpenseCategory::Food, PaymentMethod::Cash)
            .unwrap();
        let summary = ledger.aggregate();
        assert_eq!(summary.total(), 1200);
        assert_eq!(summary.by_category()[&ExpenseCategory::Food], 1200);
        let series = summary.chart_series();
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].label, ExpenseCategory::Food.label());
        assert_eq!(series[0].value, 1200);
        assert_eq!(series[0].color, ExpenseCategory::Food.color());
    }

    #[test]
    fn aggregate_of_empty_ledger_is_all_zero() {
        let (ledger, _) = ledger();
        let summary = ledger.aggregate();
        assert_eq!(summary.total(), 0);
        assert!(summary.chart_series().is_empty());
        assert_eq!(summary.by_category().len(), 4);
    }

    #[test]
    fn export_import_round_trips() {
        let (mut source, _) = ledger();
        source
            .add("拉麵", "1200", ExpenseCategory::Food, PaymentMethod::Cash)
            .unwrap();
        source
            .add("門票", "700", ExpenseCategory::Other, PaymentMethod::Card)
            .unwrap();

        let text = source.export_text().unwrap();

        let (mut target, _) = ledger();
        let count = target.import_text(&text).unwrap();
        assert_eq!(count, 2);
        assert_eq!(target.expenses(), source.expenses());
    }

    #[test]
    fn import_replaces_the_existing_ledger_wholesale() {
        let (mut ledger, store) = ledger();
        ledger
            .add("old", "100", ExpenseCategory::Other, PaymentMethod::Cash)
            .unwrap();
        ledger.import_text("[]").unwrap();
        assert!(ledger.is_empty());
        let persisted: Vec<Expense> =
            serde_json::from_str(&store.raw(LEDGER_KEY).unwrap()).unwrap();
        assert!(persisted.is_empty());
    }

    #[test]
    fn import_of_malformed_text_changes_nothing() {
        let (mut ledger, store) = ledger();
        ledger
            .add("keep me", "100", ExpenseCategory::Other, PaymentMethod::Cash)
            .unwrap();
        let before = store.raw(LEDGER_KEY).unwrap();

        assert!(ledger.import_text("not json at all").is_err());
        assert!(ledger.import_text("{\"id\": \"1\"}").is_err());

        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.expenses()[0].title(), "keep me");
        assert_eq!(store.raw(LEDGER_KEY).unwrap(), before);
    }

    #[test]
    fn remove_missing_id_is_a_noop() {
        let (mut ledger, _) = ledger();
        ledger
            .add("keep me", "100", ExpenseCategory::Other, PaymentMethod::Cash)
            .unwrap();
        assert!(!ledger.remove("no-such-id").unwrap());
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn remove_deletes_exactly_one_record() {
        let (mut ledger, store) = ledger();
        ledger
            .add("first", "100", ExpenseCategory::Food, PaymentMethod::Cash)
            .unwrap();
        let second = ledger
            .add("second", "200", ExpenseCategory::Buy, PaymentMethod::Card)
            .unwrap()
            .unwrap();
        ledger
            .add("third", "300", ExpenseCategory::Other, PaymentMethod::Cash)
            .unwrap();

        assert!(ledger.remove(second.id()).unwrap());
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.expenses()[0].title(), "third");
        assert_eq!(ledger.expenses()[1].title(), "first");

        let persisted: Vec<Expense> =
            serde_json::from_str(&store.raw(LEDGER_KEY).unwrap()).unwrap();
        assert_eq!(persisted, ledger.expenses());
    }

    #[test]
    fn a_fresh_load_sees_what_a_previous_session_persisted() {
        let store = MemStore::new();
        {
            let mut ledger = LedgerStore::load(store.clone()).unwrap();
            ledger
                .add("拉麵", "1200", ExpenseCategory::Food, PaymentMethod::Cash)
                .unwrap();
        }
        let reloaded = LedgerStore::load(store).unwrap();
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded.expenses()[0].title(), "拉麵");
    }
}
