use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// A single spending record in whole yen.
///
/// Records are immutable once created: they are appended by `LedgerStore::add`,
/// removed by id, or replaced wholesale during an import, but never edited in
/// place. The `date` field is a `%m/%d` display string, not a sortable
/// timestamp; ordering comes from list position.
///
/// The serialized form uses camelCase field names so that exports remain
/// compatible with ledgers shared from earlier versions of the companion app.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    id: String,
    title: String,
    amount: u64,
    category: ExpenseCategory,
    payment_method: PaymentMethod,
    date: String,
}

impl Expense {
    pub(crate) fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        amount: u64,
        category: ExpenseCategory,
        payment_method: PaymentMethod,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            amount,
            category,
            payment_method,
            date: date.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// The amount in whole yen.
    pub fn amount(&self) -> u64 {
        self.amount
    }

    pub fn category(&self) -> ExpenseCategory {
        self.category
    }

    pub fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }

    /// The display date (`%m/%d`) captured when the record was created.
    pub fn date(&self) -> &str {
        &self.date
    }
}

/// The fixed set of spending categories.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    Serialize,
    Deserialize,
    ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseCategory {
    #[default]
    Food,
    Transport,
    Buy,
    Other,
}

serde_plain::derive_display_from_serialize!(ExpenseCategory);
serde_plain::derive_fromstr_from_deserialize!(ExpenseCategory);

impl ExpenseCategory {
    /// Every category, in the order used for summaries and chart series.
    pub const ALL: [ExpenseCategory; 4] = [
        ExpenseCategory::Food,
        ExpenseCategory::Transport,
        ExpenseCategory::Buy,
        ExpenseCategory::Other,
    ];

    /// The display label shown in summaries and chart legends.
    pub fn label(&self) -> &'static str {
        match self {
            ExpenseCategory::Food => "餐飲",
            ExpenseCategory::Transport => "交通",
            ExpenseCategory::Buy => "購物",
            ExpenseCategory::Other => "其他",
        }
    }

    /// The color used for this category's chart slice.
    pub fn color(&self) -> &'static str {
        match self {
            ExpenseCategory::Food => "#37352F",
            ExpenseCategory::Transport => "#9A9A9A",
            ExpenseCategory::Buy => "#D3D3D3",
            ExpenseCategory::Other => "#E0E0E0",
        }
    }
}

/// How an expense was paid.
#[derive(
    Debug, Default, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    #[default]
    Cash,
    Card,
}

serde_plain::derive_display_from_serialize!(PaymentMethod);
serde_plain::derive_fromstr_from_deserialize!(PaymentMethod);

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn expense_serializes_with_camel_case_fields() {
        let expense = Expense::new(
            "1732000000000",
            "拉麵",
            1200,
            ExpenseCategory::Food,
            PaymentMethod::Cash,
            "11/29",
        );
        let json = serde_json::to_string(&expense).unwrap();
        assert!(json.contains("\"paymentMethod\":\"cash\""));
        assert!(json.contains("\"category\":\"food\""));
        assert!(json.contains("\"amount\":1200"));
    }

    #[test]
    fn expense_round_trips_through_json() {
        let expense = Expense::new(
            "1",
            "計程車",
            1500,
            ExpenseCategory::Transport,
            PaymentMethod::Card,
            "11/28",
        );
        let json = serde_json::to_string(&expense).unwrap();
        let back: Expense = serde_json::from_str(&json).unwrap();
        assert_eq!(expense, back);
    }

    #[test]
    fn category_parses_from_snake_case() {
        assert_eq!(
            <ExpenseCategory as FromStr>::from_str("transport").unwrap(),
            ExpenseCategory::Transport
        );
        assert_eq!(ExpenseCategory::Buy.to_string(), "buy");
        assert!(<ExpenseCategory as FromStr>::from_str("groceries").is_err());
    }

    #[test]
    fn every_category_has_a_label_and_color() {
        for category in ExpenseCategory::ALL {
            assert!(!category.label().is_empty());
            assert!(category.color().starts_with('#'));
        }
    }

    #[test]
    fn payment_method_parses_from_snake_case() {
        assert_eq!(
            <PaymentMethod as FromStr>::from_str("card").unwrap(),
            PaymentMethod::Card
        );
        assert_eq!(PaymentMethod::Cash.to_string(), "cash");
    }
}
