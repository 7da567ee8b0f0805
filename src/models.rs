use chrono::NaiveDate;
use serde::{Deserialize, Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Groceries,
    Dining,
    Travel,
    Entertainment,
    Utilities,
    Healthcare,
    Rent,
    Shopping,
    Education,
    PersonalCare,
    Miscellaneous,
}

impl Category {
    pub const ALL: [Category; 11] = [
        Self::Groceries,
        Self::Dining,
        Self::Travel,
        Self::Entertainment,
        Self::Utilities,
        Self::Healthcare,
        Self::Rent,
        Self::Shopping,
        Self::Education,
        Self::PersonalCare,
        Self::Miscellaneous,
    ];

    /// Every category that can appear on an ordinary daily purchase.
    pub const DAILY: [Category; 10] = [
        Self::Groceries,
        Self::Dining,
        Self::Travel,
        Self::Entertainment,
        Self::Utilities,
        Self::Healthcare,
        Self::Shopping,
        Self::Education,
        Self::PersonalCare,
        Self::Miscellaneous,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Groceries => "Groceries",
            Self::Dining => "Dining",
            Self::Travel => "Travel",
            Self::Entertainment => "Entertainment",
            Self::Utilities => "Utilities",
            Self::Healthcare => "Healthcare",
            Self::Rent => "Rent",
            Self::Shopping => "Shopping",
            Self::Education => "Education",
            Self::PersonalCare => "Personal Care",
            Self::Miscellaneous => "Miscellaneous",
        }
    }

    /// Position in `ALL`, used to index the spend tables.
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpendingTier {
    Low,
    Medium,
    High,
}

impl SpendingTier {
    pub const ALL: [SpendingTier; 3] = [Self::Low, Self::Medium, Self::High];
}

/// Which spend-range table drives amounts: one per tier, or one for everybody.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SpendProfile {
    #[default]
    Tiered,
    Flat,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    pub user_id: u32,
    #[serde(serialize_with = "serialize_date")]
    pub date: NaiveDate,
    pub category: Category,
    pub vendor: &'static str,
    #[serde(serialize_with = "serialize_amount")]
    pub amount: f64,
}

fn serialize_date<S: Serializer>(date: &NaiveDate, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_str(&date.format("%Y-%m-%d"))
}

fn serialize_amount<S: Serializer>(amount: &f64, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_str(&format_args!("{amount:.2}"))
}

/// The columns of a generated CSV file that summaries read; `vendor` is skipped.
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionRow {
    pub user_id: u32,
    pub date: String,
    pub category: String,
    pub amount: f64,
}
