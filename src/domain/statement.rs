use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::transaction::Transaction;
use crate::errors::GenerationError;

/// Bank layouts the generator can target. Templates without a dedicated style
/// table (currently CBI) resolve to the generic profile at the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BankTemplate {
    Pnb,
    Sbi,
    Hdfc,
    Icici,
    Axis,
    Kotak,
    Idfc,
    Indusind,
    Cbi,
    Yes,
    Bob,
    Uco,
    Iob,
    Canara,
    Union,
}

impl BankTemplate {
    pub const ALL: [BankTemplate; 15] = [
        BankTemplate::Pnb,
        BankTemplate::Sbi,
        BankTemplate::Hdfc,
        BankTemplate::Icici,
        BankTemplate::Axis,
        BankTemplate::Kotak,
        BankTemplate::Idfc,
        BankTemplate::Indusind,
        BankTemplate::Cbi,
        BankTemplate::Yes,
        BankTemplate::Bob,
        BankTemplate::Uco,
        BankTemplate::Iob,
        BankTemplate::Canara,
        BankTemplate::Union,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserType {
    #[serde(rename = "salaried")]
    Salaried,
    #[serde(rename = "selfEmployed")]
    SelfEmployed,
}

/// Identity and location fields of the fictitious account holder. Immutable
/// once generation begins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatementDetails {
    pub name: String,
    pub account_number: String,
    pub ifsc: String,
    pub bank_name: String,
    pub starting_balance: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pincode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_branch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementMeta {
    pub generated_at: DateTime<Utc>,
    pub template: BankTemplate,
    pub statement_period_start: NaiveDateTime,
    pub statement_period_end: NaiveDateTime,
    pub user_type: UserType,
    pub config_hash: String,
    pub seed: u64,
}

/// Aggregate root: one generated statement owning its transactions.
/// Constructed once per generation call and immutable afterward; regeneration
/// is a new build over the same inputs with a new seed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    pub id: Uuid,
    pub details: StatementDetails,
    pub meta: StatementMeta,
    pub transactions: Vec<Transaction>,
}

impl Statement {
    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    /// Balance after the last transaction, or the starting balance for an
    /// empty ledger.
    pub fn closing_balance(&self) -> f64 {
        self.transactions
            .last()
            .map(|txn| txn.balance)
            .unwrap_or(self.details.starting_balance)
    }

    /// JSON form consumed by the persistence collaborator.
    pub fn to_json(&self) -> Result<String, GenerationError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn templates_serialize_uppercase() {
        assert_eq!(
            serde_json::to_string(&BankTemplate::Hdfc).unwrap(),
            "\"HDFC\""
        );
        assert_eq!(
            serde_json::from_str::<BankTemplate>("\"INDUSIND\"").unwrap(),
            BankTemplate::Indusind
        );
    }

    #[test]
    fn user_type_uses_camel_case_labels() {
        assert_eq!(
            serde_json::to_string(&UserType::SelfEmployed).unwrap(),
            "\"selfEmployed\""
        );
    }

    #[test]
    fn empty_statement_closes_at_starting_balance() {
        let details = StatementDetails {
            starting_balance: 1500.0,
            ..StatementDetails::default()
        };
        let statement = Statement {
            id: Uuid::nil(),
            details,
            meta: StatementMeta {
                generated_at: Utc::now(),
                template: BankTemplate::Sbi,
                statement_period_start: chrono::NaiveDateTime::default(),
                statement_period_end: chrono::NaiveDateTime::default(),
                user_type: UserType::Salaried,
                config_hash: String::new(),
                seed: 0,
            },
            transactions: Vec::new(),
        };
        assert_eq!(statement.closing_balance(), 1500.0);
    }
}
