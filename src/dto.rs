use serde::Serialize;

use crate::interest::calculate_interest;
use crate::stores::Account;

/// One line of the interest report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterestRow {
    pub id: String,
    pub balance: f64,
    pub interest: f64,
}

impl InterestRow {
    /// Column names, matching the serialized field order.
    pub const HEADER: [&str; 3] = ["id", "balance", "interest"];

    pub fn new(account: &Account, rate: f64) -> Self {
        Self {
            id: account.id.clone(),
            balance: account.balance,
            interest: calculate_interest(account.balance, rate),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_csv_row(row: &str) -> Result<Account, csv::Error> {
        let data_with_header = format!("id,balance\n{}", row);
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(data_with_header.as_bytes());
        reader.deserialize().next().unwrap()
    }

    #[test]
    fn test_parse_account() {
        assert_eq!(parse_csv_row("acc-1,100.25").unwrap(), Account::new("acc-1", 100.25));
    }

    #[test]
    fn test_parse_negative_balance() {
        assert_eq!(parse_csv_row("acc-2,-12.5").unwrap(), Account::new("acc-2", -12.5));
    }

    #[test]
    fn test_parse_integer_balance() {
        assert_eq!(parse_csv_row("acc-3,42").unwrap(), Account::new("acc-3", 42.0));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(parse_csv_row("  acc-4 ,  7.5 ").unwrap(), Account::new("acc-4", 7.5));
    }

    #[test]
    fn test_parse_empty_id() {
        assert_eq!(parse_csv_row(",1").unwrap(), Account::new("", 1.0));
    }

    #[test]
    fn test_parse_nan_balance() {
        assert!(parse_csv_row("acc-5,NaN").unwrap().balance.is_nan());
    }

    #[test]
    fn test_parse_invalid_balance() {
        assert!(parse_csv_row("acc-6,abc").is_err());
    }

    #[test]
    fn test_parse_missing_balance() {
        assert!(parse_csv_row("acc-7,").is_err());
    }

    #[test]
    fn test_interest_row_from_account() {
        let row = InterestRow::new(&Account::new("a", 1000.0), 0.05);
        assert_eq!(
            row,
            InterestRow {
                id: "a".to_string(),
                balance: 1000.0,
                interest: 50.0,
            }
        );
    }

    #[test]
    fn test_header_matches_serialized_fields() -> Result<(), Box<dyn std::error::Error>> {
        let mut output = Vec::new();
        {
            let mut wtr = csv::Writer::from_writer(&mut output);
            wtr.serialize(InterestRow::new(&Account::new("a", 2.0), 0.5))?;
            wtr.flush()?;
        }
        let written = String::from_utf8(output)?;

        assert_eq!(written.lines().next(), Some(InterestRow::HEADER.join(",").as_str()));
        Ok(())
    }

    #[test]
    fn test_interest_row_keeps_nan() {
        let row = InterestRow::new(&Account::new("a", 1.0), f64::NAN);
        assert_eq!(row.balance, 1.0);
        assert!(row.interest.is_nan());
    }
}
