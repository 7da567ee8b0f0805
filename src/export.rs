use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::models::Transaction;

/// Serialize transactions as CSV with a `user_id,date,category,vendor,amount` header.
pub fn write_transactions<W: Write>(writer: W, txns: &[Transaction]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for txn in txns {
        wtr.serialize(txn)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_csv(path: &Path, txns: &[Transaction]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let file = std::fs::File::create(path)?;
    write_transactions(std::io::BufWriter::new(file), txns)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::models::Category;

    fn sample() -> Vec<Transaction> {
        vec![
            Transaction {
                user_id: 7,
                date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
                category: Category::Rent,
                vendor: "Landlord",
                amount: 1234.5,
            },
            Transaction {
                user_id: 12,
                date: NaiveDate::from_ymd_opt(2024, 11, 9).unwrap(),
                category: Category::PersonalCare,
                vendor: "Spa",
                amount: 1.0,
            },
            Transaction {
                user_id: 3,
                date: NaiveDate::from_ymd_opt(2024, 7, 4).unwrap(),
                category: Category::Groceries,
                vendor: "Stop & Shop",
                amount: 23.07,
            },
        ]
    }

    #[test]
    fn test_csv_layout() {
        let mut buf = Vec::new();
        write_transactions(&mut buf, &sample()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "user_id,date,category,vendor,amount");
        assert_eq!(lines[1], "7,2024-02-01,Rent,Landlord,1234.50");
        assert_eq!(lines[2], "12,2024-11-09,Personal Care,Spa,1.00");
        assert_eq!(lines[3], "3,2024-07-04,Groceries,Stop & Shop,23.07");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_vendor_with_apostrophe_is_unquoted() {
        let txn = Transaction {
            user_id: 0,
            date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            category: Category::Dining,
            vendor: "Dunkin'",
            amount: 4.25,
        };
        let mut buf = Vec::new();
        write_transactions(&mut buf, &[txn]).unwrap();
        assert!(String::from_utf8(buf).unwrap().contains("0,2024-01-02,Dining,Dunkin',4.25"));
    }

    #[test]
    fn test_write_csv_creates_parent_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("txns.csv");
        write_csv(&path, &sample()).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 4);
    }

    #[test]
    fn test_write_into_missing_root_fails() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "x").unwrap();
        // A regular file cannot act as a directory
        let err = write_csv(&blocker.join("txns.csv"), &sample());
        assert!(err.is_err());
    }
}
