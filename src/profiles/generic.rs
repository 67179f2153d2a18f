//! Fallback style table used for templates without a dedicated bank profile.
//! Descriptions rotate through a short rail catalogue and references come
//! from the shared generic builder.

use chrono::NaiveDate;

use super::{BankStyleProfile, SalaryCredit, StyledTransaction, TxnKind};
use crate::context::GenerationContext;
use crate::reference::build_reference;

pub struct GenericProfile;

impl BankStyleProfile for GenericProfile {
    fn name(&self) -> &'static str {
        "GENERIC"
    }

    fn transaction(
        &self,
        kind: TxnKind,
        _date: NaiveDate,
        ctx: &mut GenerationContext,
    ) -> StyledTransaction {
        let rng = &mut ctx.rng;
        let description = match rng.random_int(0, 6) {
            0 => format!("UPI/{}", rng.random_int(100_000_000, 999_999_999)),
            1 => format!("NEFT/{}", rng.random_int(10_000, 99_999)),
            2 => format!("ATM WDL {}", rng.random_int(1000, 9999)),
            3 => format!("POS {}", rng.random_int(100_000, 999_999)),
            4 => format!("IMPS/{}", rng.random_int(100_000_000, 999_999_999)),
            5 => format!("Bill Payment {}", rng.random_int(1000, 9999)),
            _ => format!("Online Purchase {}", rng.random_int(1000, 9999)),
        };
        let label = match kind {
            TxnKind::Debit => "expense",
            TxnKind::Credit => "credit",
        };
        let reference = build_reference(label, rng);
        StyledTransaction::new(description, reference)
    }

    fn salary_credit(&self, employer: &str, ctx: &mut GenerationContext) -> SalaryCredit {
        SalaryCredit {
            description: format!("Salary from {}", employer),
            reference: build_reference("salary", &mut ctx.rng),
        }
    }

    fn reference(&self, _date: NaiveDate, ctx: &mut GenerationContext) -> String {
        build_reference("expense", &mut ctx.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StatementDetails;

    #[test]
    fn descriptions_rotate_through_the_catalogue() {
        let mut ctx = GenerationContext::new(90, &StatementDetails::default());
        let date = NaiveDate::from_ymd_opt(2025, 11, 11).unwrap();
        let mut kinds = std::collections::HashSet::new();
        for _ in 0..200 {
            let txn = GenericProfile.transaction(TxnKind::Debit, date, &mut ctx);
            kinds.insert(txn.description.split(&['/', ' '][..]).next().unwrap().to_string());
            assert!(!txn.reference.is_empty());
            assert!(txn.amount.is_none());
        }
        assert!(kinds.len() >= 5);
    }

    #[test]
    fn salary_credit_is_plain_spoken() {
        let mut ctx = GenerationContext::new(91, &StatementDetails::default());
        let salary = GenericProfile.salary_credit("Global Enterprises", &mut ctx);
        assert_eq!(salary.description, "Salary from Global Enterprises");
    }
}
