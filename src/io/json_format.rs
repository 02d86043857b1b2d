//! JSON-lines format handling for input events and output outcomes
//!
//! This module centralizes all record format concerns, providing:
//! - InputRecord structure for deserialization
//! - Conversion from input records to domain events
//! - Outcome output serialization
//!
//! All functions are pure (no file handling) for easy testing.
//!
//! # Input
//!
//! ```text
//! {"account": {"active-card": true, "available-limit": 100}}
//! {"transaction": {"merchant": "Burger King", "amount": 20, "time": "2019-02-13T10:00:00.000Z"}}
//! ```
//!
//! # Output
//!
//! ```text
//! {"account":{"active-card":true,"available-limit":80},"violations":[]}
//! {"account":{},"violations":["account-not-initialized"]}
//! ```

use crate::types::{Account, AuthorizerError, Event, Outcome, Transaction, Violation};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Input record structure for deserialization
///
/// Exactly one of the two payloads must be present. Capitalized keys are
/// accepted as well.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct InputRecord {
    #[serde(alias = "Account")]
    pub account: Option<AccountRecord>,
    #[serde(alias = "Transaction")]
    pub transaction: Option<TransactionRecord>,
}

/// Account payload of an input record
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct AccountRecord {
    pub active_card: bool,
    pub available_limit: i64,
}

/// Transaction payload of an input record
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TransactionRecord {
    pub merchant: String,
    pub amount: i64,
    pub time: DateTime<Utc>,
}

/// Convert an InputRecord to an Event
///
/// This function:
/// - Rejects records with neither or both payloads
/// - Rejects negative transaction amounts
///
/// # Returns
///
/// * `Ok(Event)` - Successfully converted record
/// * `Err(AuthorizerError)` - The record breaks the input contract
pub fn convert_record(record: InputRecord) -> Result<Event, AuthorizerError> {
    match (record.account, record.transaction) {
        (Some(account), None) => Ok(Event::Initialization(Account::new(
            account.active_card,
            account.available_limit,
        ))),
        (None, Some(tx)) => {
            if tx.amount < 0 {
                return Err(AuthorizerError::invalid_amount(tx.amount));
            }
            Ok(Event::Spend(Transaction::new(tx.merchant, tx.amount, tx.time)))
        }
        (Some(_), Some(_)) => Err(AuthorizerError::malformed_record(
            "record carries both an account and a transaction",
        )),
        (None, None) => Err(AuthorizerError::malformed_record(
            "record carries neither an account nor a transaction",
        )),
    }
}

/// Parse one input line into an Event
pub fn parse_line(line: &str) -> Result<Event, AuthorizerError> {
    parse_bytes(line.as_bytes())
}

/// Parse one raw input line into an Event
///
/// Lines are read as bytes, so invalid UTF-8 surfaces here as a parse error
/// for this record instead of failing the read.
pub fn parse_bytes(line: &[u8]) -> Result<Event, AuthorizerError> {
    let record: InputRecord = serde_json::from_slice(line)?;
    convert_record(record)
}

/// Whether a raw input line carries nothing but whitespace
pub fn is_blank(line: &[u8]) -> bool {
    line.iter().all(u8::is_ascii_whitespace)
}

/// Account part of an output record
///
/// Both fields are omitted together when no valid state is known.
#[derive(Debug, Serialize, Default, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct OutputAccount {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_card: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_limit: Option<i64>,
}

/// Output record written for every processed event
#[derive(Debug, Serialize, PartialEq)]
pub struct OutputRecord<'a> {
    pub account: OutputAccount,
    pub violations: &'a [Violation],
}

impl<'a> From<&'a Outcome> for OutputRecord<'a> {
    fn from(outcome: &'a Outcome) -> Self {
        let account = outcome
            .snapshot
            .map(|account| OutputAccount {
                active_card: Some(account.active_card),
                available_limit: Some(account.available_limit),
            })
            .unwrap_or_default();

        OutputRecord {
            account,
            violations: &outcome.violations,
        }
    }
}

/// Render an outcome as a single JSON line (without the trailing newline)
pub fn render_outcome(outcome: &Outcome) -> Result<String, AuthorizerError> {
    serde_json::to_string(&OutputRecord::from(outcome)).map_err(AuthorizerError::serialize)
}

/// Write an outcome as a JSON line
///
/// # Arguments
///
/// * `outcome` - The outcome to render
/// * `output` - Mutable reference to a writer for outputting the line
pub fn write_outcome(outcome: &Outcome, output: &mut dyn Write) -> Result<(), AuthorizerError> {
    let line = render_outcome(outcome)?;
    writeln!(output, "{}", line)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::account(
        r#"{"account": {"active-card": true, "available-limit": 666}}"#,
        Event::Initialization(Account::new(true, 666))
    )]
    #[case::capitalized_account(
        r#"{"Account":{"active-card":false,"available-limit":10}}"#,
        Event::Initialization(Account::new(false, 10))
    )]
    #[case::transaction(
        r#"{"transaction": {"merchant": "Montreal Canadiens", "amount": 666, "time": "2019-02-13T11:00:00.000Z"}}"#,
        Event::Spend(Transaction::new(
            "Montreal Canadiens",
            666,
            "2019-02-13T11:00:00Z".parse().unwrap()
        ))
    )]
    #[case::capitalized_transaction(
        r#"{"Transaction":{"merchant":"Vegas Golden Knights","amount":0,"time":"2019-02-13T11:00:00Z"}}"#,
        Event::Spend(Transaction::new(
            "Vegas Golden Knights",
            0,
            "2019-02-13T11:00:00Z".parse().unwrap()
        ))
    )]
    fn test_parse_line(#[case] line: &str, #[case] expected: Event) {
        assert_eq!(parse_line(line).unwrap(), expected);
    }

    #[rstest]
    #[case::empty_object("{}")]
    #[case::null_payloads(r#"{"account": null, "transaction": null}"#)]
    #[case::both_payloads(
        r#"{"account": {"active-card": true, "available-limit": 1}, "transaction": {"merchant": "A", "amount": 1, "time": "2019-02-13T11:00:00Z"}}"#
    )]
    fn test_parse_line_malformed_record(#[case] line: &str) {
        assert!(matches!(
            parse_line(line),
            Err(AuthorizerError::MalformedRecord { .. })
        ));
    }

    #[rstest]
    #[case::not_json("not json")]
    #[case::bad_time(r#"{"transaction": {"merchant": "A", "amount": 1, "time": "yesterday"}}"#)]
    #[case::missing_field(r#"{"account": {"active-card": true}}"#)]
    #[case::fractional_amount(r#"{"transaction": {"merchant": "A", "amount": 1.5, "time": "2019-02-13T11:00:00Z"}}"#)]
    fn test_parse_line_invalid_json(#[case] line: &str) {
        assert!(matches!(
            parse_line(line),
            Err(AuthorizerError::ParseError { .. })
        ));
    }

    #[test]
    fn test_parse_bytes_invalid_utf8() {
        let line: &[u8] =
            b"{\"transaction\": {\"merchant\": \"Caf\xE9\", \"amount\": 1, \"time\": \"2019-02-13T11:00:00Z\"}}\r\n";
        assert!(matches!(
            parse_bytes(line),
            Err(AuthorizerError::ParseError { line: None, .. })
        ));
    }

    #[rstest]
    #[case::empty(b"", true)]
    #[case::whitespace(b"  \t\r\n", true)]
    #[case::record(b"{}\n", false)]
    fn test_is_blank(#[case] line: &[u8], #[case] expected: bool) {
        assert_eq!(is_blank(line), expected);
    }

    #[test]
    fn test_parse_line_negative_amount() {
        let line = r#"{"transaction": {"merchant": "A", "amount": -5, "time": "2019-02-13T11:00:00Z"}}"#;
        assert_eq!(
            parse_line(line),
            Err(AuthorizerError::InvalidAmount {
                amount: -5,
                line: None
            })
        );
    }

    fn outcome(violations: Vec<Violation>, snapshot: Option<Account>) -> Outcome {
        Outcome {
            event: Event::Initialization(Account::new(true, 0)),
            violations,
            snapshot,
        }
    }

    #[rstest]
    #[case::without_account(
        outcome(vec![Violation::AccountNotInitialized], None),
        r#"{"account":{},"violations":["account-not-initialized"]}"#
    )]
    #[case::with_one_violation(
        outcome(vec![Violation::AccountAlreadyInitialized], Some(Account::new(false, 666))),
        r#"{"account":{"active-card":false,"available-limit":666},"violations":["account-already-initialized"]}"#
    )]
    #[case::with_two_violations(
        outcome(
            vec![Violation::InsufficientLimit, Violation::DoubleTransaction],
            Some(Account::new(true, 175))
        ),
        r#"{"account":{"active-card":true,"available-limit":175},"violations":["insufficient-limit","double-transaction"]}"#
    )]
    #[case::without_violation(
        outcome(vec![], Some(Account::new(true, 666))),
        r#"{"account":{"active-card":true,"available-limit":666},"violations":[]}"#
    )]
    fn test_render_outcome(#[case] outcome: Outcome, #[case] expected: &str) {
        assert_eq!(render_outcome(&outcome).unwrap(), expected);
    }

    #[test]
    fn test_write_outcome_appends_newline() {
        let mut output = Vec::new();
        write_outcome(&outcome(vec![], Some(Account::new(true, 1))), &mut output).unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "{\"account\":{\"active-card\":true,\"available-limit\":1},\"violations\":[]}\n"
        );
    }
}
