use std::collections::{BTreeMap, HashSet};
use std::io::Read;
use std::path::Path;

use crate::error::Result;
use crate::models::{Category, Transaction, TransactionRow};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryTotal {
    pub rows: usize,
    pub total: f64,
}

/// Aggregate view of a transaction table.
#[derive(Debug, Default)]
pub struct Summary {
    pub rows: usize,
    pub total: f64,
    pub by_category: BTreeMap<String, CategoryTotal>,
    users: HashSet<u32>,
    dates: HashSet<String>,
}

impl Summary {
    pub fn add(&mut self, user_id: u32, date: &str, category: &str, amount: f64) {
        self.rows += 1;
        self.total += amount;
        let entry = self.by_category.entry(category.to_string()).or_default();
        entry.rows += 1;
        entry.total += amount;
        self.users.insert(user_id);
        self.dates.insert(date.to_string());
    }

    /// Category totals in catalog order, followed by any labels the catalog
    /// doesn't know about.
    pub fn categories(&self) -> Vec<(&str, &CategoryTotal)> {
        let mut out: Vec<(&str, &CategoryTotal)> = Category::ALL
            .iter()
            .filter_map(|c| self.by_category.get_key_value(c.label()))
            .map(|(name, total)| (name.as_str(), total))
            .collect();
        for (name, total) in &self.by_category {
            if !Category::ALL.iter().any(|c| c.label() == name) {
                out.push((name.as_str(), total));
            }
        }
        out
    }

    pub fn distinct_users(&self) -> usize {
        self.users.len()
    }

    pub fn distinct_dates(&self) -> usize {
        self.dates.len()
    }

    pub fn from_transactions(txns: &[Transaction]) -> Self {
        let mut summary = Self::default();
        for t in txns {
            let date = t.date.format("%Y-%m-%d").to_string();
            summary.add(t.user_id, &date, t.category.label(), t.amount);
        }
        summary
    }
}

pub fn read_summary<R: Read>(reader: R) -> Result<Summary> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut summary = Summary::default();
    for row in rdr.deserialize() {
        let row: TransactionRow = row?;
        summary.add(row.user_id, &row.date, &row.category, row.amount);
    }
    Ok(summary)
}

pub fn summarize_file(path: &Path) -> Result<Summary> {
    let file = std::fs::File::open(path)?;
    read_summary(std::io::BufReader::new(file))
}
