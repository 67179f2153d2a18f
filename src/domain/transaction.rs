use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One ledger row. Exactly one of `debit`/`credit` is non-zero; `balance` is
/// recomputed by the builder after final ordering and must never be trusted
/// from emission order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub timestamp: NaiveDateTime,
    pub description: String,
    pub reference: String,
    pub debit: f64,
    pub credit: f64,
    pub balance: f64,
}

impl Transaction {
    pub fn debit(
        id: Uuid,
        timestamp: NaiveDateTime,
        description: impl Into<String>,
        reference: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self {
            id,
            timestamp,
            description: description.into(),
            reference: reference.into(),
            debit: amount,
            credit: 0.0,
            balance: 0.0,
        }
    }

    pub fn credit(
        id: Uuid,
        timestamp: NaiveDateTime,
        description: impl Into<String>,
        reference: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self {
            id,
            timestamp,
            description: description.into(),
            reference: reference.into(),
            debit: 0.0,
            credit: amount,
            balance: 0.0,
        }
    }

    pub fn is_credit(&self) -> bool {
        self.credit > 0.0
    }

    pub fn is_debit(&self) -> bool {
        self.debit > 0.0
    }

    /// Net effect on the running balance.
    pub fn signed_amount(&self) -> f64 {
        self.credit - self.debit
    }
}

#[cfg(test)]
mod tests {
    use super::Transaction;
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn noon(y: i32, m: u32, d: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn constructors_set_one_side_only() {
        let debit = Transaction::debit(Uuid::nil(), noon(2025, 3, 4), "POS 1234", "UPI/QR/1", 250.0);
        assert!(debit.is_debit() && !debit.is_credit());
        assert_eq!(debit.signed_amount(), -250.0);

        let credit = Transaction::credit(Uuid::nil(), noon(2025, 3, 5), "NEFT CR", "", 900.0);
        assert!(credit.is_credit() && !credit.is_debit());
        assert_eq!(credit.signed_amount(), 900.0);
    }
}
