//! HDFC Bank style table. HDFC statements run narration and cheque-reference
//! columns: dash-joined UPI narrations with the counterparty's VPA, NEFT rows
//! carrying an AXISP settlement code, and ACH/autopay rows for the mandate
//! rails. Amounts follow the bank's modeled tiered distributions.

use chrono::NaiveDate;

use super::amounts::{Band, TieredAmount};
use super::{weighted_pick, BankStyleProfile, SalaryCredit, StyledTransaction, TxnKind};
use crate::context::GenerationContext;
use crate::rng::SeededRng;

pub struct HdfcProfile;

const INDIAN_NAMES: [&str; 14] = [
    "SATENDRA SINGH PARIHAR", "DEVANSHU MISHRA", "RAVI SADHWANI", "JYOTI SISODIYA",
    "DHARMENDRA VISHWAKA", "AADHAR HOUSING", "DEVANSH MISHRA", "RAVI SADHWANI",
    "SATENDRA SINGH", "MISHRA", "SADHWANI", "SISODIYA", "VISHWAKA", "PARIHAR",
];

const BANK_CODES: [&str; 9] = [
    "ICIC", "SBIN", "HDFC", "AXIS", "YESB", "KKBK", "PUNB", "UBIN", "IDIB",
];

const UPI_HANDLES: [&str; 4] = ["AXL", "YBL", "PAYTM", "OK"];

const NEFT_INSTITUTIONS: [&str; 4] = [
    "AADHAR HOUSING FINANCE LIMITED",
    "UTIB",
    "AXIS BANK",
    "ICICI BANK",
];

const ACH_INSTITUTIONS: [&str; 4] = [
    "AADHAR HOUSING FINAN",
    "BAJAJ FINANCE",
    "HDFC BANK LTD",
    "ICICI BANK",
];

const CARD_MERCHANTS: [&str; 7] = [
    "OCTDEC22 INSTAALERTCHG 2 SMS",
    "GOOGLE PAYMENT",
    "AMAZON PAY",
    "SWIGGY",
    "ZOMATO",
    "BIG BAZAAR",
    "DMart",
];

const SALARY_BANK_CODES: [&str; 4] = ["ICIC", "SBIN", "HDFC", "AXIS"];

const UPI_CREDIT_AMOUNT: TieredAmount = TieredAmount {
    bands: &[
        Band { cutoff: 0.7, min: 100.0, max: 2000.0 },
        Band { cutoff: 0.9, min: 2000.0, max: 5000.0 },
        Band { cutoff: 1.0, min: 5000.0, max: 10_000.0 },
    ],
    round_step: 0.0,
    round_probability: 0.0,
};

const UPI_DEBIT_AMOUNT: TieredAmount = TieredAmount {
    bands: &[
        Band { cutoff: 0.75, min: 50.0, max: 1500.0 },
        Band { cutoff: 0.92, min: 1500.0, max: 4000.0 },
        Band { cutoff: 1.0, min: 4000.0, max: 8000.0 },
    ],
    round_step: 0.0,
    round_probability: 0.0,
};

const NEFT_CREDIT_AMOUNT: TieredAmount = TieredAmount {
    bands: &[
        Band { cutoff: 0.7, min: 2000.0, max: 8000.0 },
        Band { cutoff: 0.9, min: 8000.0, max: 15_000.0 },
        Band { cutoff: 1.0, min: 15_000.0, max: 25_000.0 },
    ],
    round_step: 0.0,
    round_probability: 0.0,
};

const NEFT_DEBIT_AMOUNT: TieredAmount = TieredAmount {
    bands: &[
        Band { cutoff: 0.7, min: 1500.0, max: 5000.0 },
        Band { cutoff: 0.9, min: 5000.0, max: 10_000.0 },
        Band { cutoff: 1.0, min: 10_000.0, max: 18_000.0 },
    ],
    round_step: 0.0,
    round_probability: 0.0,
};

#[derive(Clone, Copy)]
enum CreditKind {
    Upi,
    Neft,
    Installment,
}

#[derive(Clone, Copy)]
enum DebitKind {
    Upi,
    DebitCard,
    Ach,
    Autopay,
    Neft,
}

const CREDIT_KINDS: [(u32, CreditKind); 3] = [
    (60, CreditKind::Upi),
    (30, CreditKind::Neft),
    (10, CreditKind::Installment),
];

const DEBIT_KINDS: [(u32, DebitKind); 5] = [
    (50, DebitKind::Upi),
    (20, DebitKind::DebitCard),
    (15, DebitKind::Ach),
    (10, DebitKind::Autopay),
    (5, DebitKind::Neft),
];

impl BankStyleProfile for HdfcProfile {
    fn name(&self) -> &'static str {
        "HDFC"
    }

    fn transaction(
        &self,
        kind: TxnKind,
        _date: NaiveDate,
        ctx: &mut GenerationContext,
    ) -> StyledTransaction {
        let rng = &mut ctx.rng;
        match kind {
            TxnKind::Credit => match *weighted_pick(&CREDIT_KINDS, rng) {
                CreditKind::Upi => upi_transaction(true, rng),
                CreditKind::Neft => neft_transaction(true, rng),
                CreditKind::Installment => installment_transaction(rng),
            },
            TxnKind::Debit => match *weighted_pick(&DEBIT_KINDS, rng) {
                DebitKind::Upi => upi_transaction(false, rng),
                DebitKind::DebitCard => debit_card_transaction(rng),
                DebitKind::Ach => ach_debit_transaction(rng),
                DebitKind::Autopay => autopay_transaction(rng),
                DebitKind::Neft => neft_transaction(false, rng),
            },
        }
    }

    fn salary_credit(&self, employer: &str, ctx: &mut GenerationContext) -> SalaryCredit {
        let rng = &mut ctx.rng;
        let bank_code = *rng.pick(&SALARY_BANK_CODES);
        let ref_number = rng.random_int(100_000_000_000, 999_999_999_999);
        let account = format!("{:0>10}", rng.random_int(0, 999_999_999));
        let settlement: String = ref_number.to_string().chars().take(12).collect();

        SalaryCredit {
            description: format!(
                "NEFT CR-{}{}-{}-AXISP {}",
                bank_code,
                account,
                employer.to_uppercase(),
                settlement
            ),
            reference: format!("AXISP{}", rng.random_int(100_000_000, 999_999_999)),
        }
    }

    fn reference(&self, _date: NaiveDate, ctx: &mut GenerationContext) -> String {
        ctx.rng.random_int(300_000_000_000, 399_999_999_999).to_string()
    }
}

fn upi_transaction(is_credit: bool, rng: &mut SeededRng) -> StyledTransaction {
    let name = *rng.pick(&INDIAN_NAMES);
    let bank_code = *rng.pick(&BANK_CODES);
    let ref_number = rng.random_int(100_000_000_000, 999_999_999_999);
    let upi_ref = rng.random_int(300_000_000_000, 399_999_999_999);
    let handle = *rng.pick(&UPI_HANDLES);
    let truncated: String = name.chars().take(20).collect();
    let flow = if is_credit { "FROM" } else { "TO" };

    let narration = format!(
        "UPI-{}-{}@{}-{}{:0>7}-{}-PAYMENT {} PH ONE",
        truncated,
        rng.random_int(1_000_000_000, 9_999_999_999),
        handle,
        bank_code,
        rng.random_int(0, 999_999),
        ref_number,
        flow
    );

    let amount = if is_credit {
        UPI_CREDIT_AMOUNT.sample(rng)
    } else {
        UPI_DEBIT_AMOUNT.sample(rng)
    };

    StyledTransaction::new(narration, upi_ref.to_string()).with_amount(amount)
}

fn neft_transaction(is_credit: bool, rng: &mut SeededRng) -> StyledTransaction {
    let name = *rng.pick(&INDIAN_NAMES);
    let bank_code = *rng.pick(&BANK_CODES);
    let ref_number = rng.random_int(100_000_000_000, 999_999_999_999);
    let institution = *rng.pick(&NEFT_INSTITUTIONS);
    let prefix = if is_credit { "NEFT CR" } else { "NEFT" };
    let settlement: String = ref_number.to_string().chars().take(12).collect();

    let narration = format!(
        "{}-{}{:0>10}-{}-{}-AXISP {}",
        prefix,
        bank_code,
        rng.random_int(0, 999_999_999),
        institution,
        name,
        settlement
    );
    let reference = format!("AXISP{}", rng.random_int(100_000_000, 999_999_999));

    let amount = if is_credit {
        NEFT_CREDIT_AMOUNT.sample(rng)
    } else {
        NEFT_DEBIT_AMOUNT.sample(rng)
    };

    StyledTransaction::new(narration, reference).with_amount(amount)
}

fn installment_transaction(rng: &mut SeededRng) -> StyledTransaction {
    let name = *rng.pick(&INDIAN_NAMES);
    let narration = format!(
        "RD BOOKED/INSTALLMENT PAID -{}/{}-{}",
        rng.random_int(1_000_000_000, 9_999_999_999),
        rng.random_int(1000, 9999),
        name
    );
    let reference = rng.random_int(100_000_000_000, 999_999_999_999).to_string();
    let amount = rng.random_float(500.0, 5000.0, 2);
    StyledTransaction::new(narration, reference).with_amount(amount)
}

fn debit_card_transaction(rng: &mut SeededRng) -> StyledTransaction {
    let merchant = *rng.pick(&CARD_MERCHANTS);
    let ref_number = rng.random_int(100_000_000_000, 999_999_999_999);
    let ref_digits: String = ref_number.to_string().chars().take(12).collect();

    // The SMS alert row is a sub-rupee charge with its own MIR reference.
    if merchant.contains("SMS") {
        let narration = format!("{} {}", merchant, ref_digits);
        let reference = format!("MIR2{}", ref_digits);
        let amount = rng.random_float(0.1, 10.0, 2);
        return StyledTransaction::new(narration, reference).with_amount(amount);
    }

    let short_ref: String = ref_number.to_string().chars().take(10).collect();
    let narration = format!("DC-{}-{}", merchant, short_ref);
    let reference = rng.random_int(100_000_000_000, 999_999_999_999).to_string();
    let amount = rng.random_float(100.0, 3000.0, 2);
    StyledTransaction::new(narration, reference).with_amount(amount)
}

fn ach_debit_transaction(rng: &mut SeededRng) -> StyledTransaction {
    let institution = *rng.pick(&ACH_INSTITUTIONS);
    let narration = format!(
        "ACH D- {}-V{}",
        institution,
        rng.random_int(10_000_000_000, 99_999_999_999)
    );
    let reference = rng.random_int(100_000_000_000, 999_999_999_999).to_string();
    let amount = rng.random_float(1000.0, 10_000.0, 2);
    StyledTransaction::new(narration, reference).with_amount(amount)
}

fn autopay_transaction(rng: &mut SeededRng) -> StyledTransaction {
    let ref_number = rng.random_int(100_000_000_000, 999_999_999_999);
    let digits: String = ref_number.to_string().chars().take(13).collect();
    let narration = format!("CC {} AUTOPAY SI-TAD", digits);
    let reference = rng.random_int(100_000_000_000, 999_999_999_999).to_string();
    let amount = rng.random_float(500.0, 10_000.0, 2);
    StyledTransaction::new(narration, reference).with_amount(amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StatementDetails;

    fn context() -> GenerationContext {
        GenerationContext::new(11, &StatementDetails::default())
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
    }

    #[test]
    fn every_row_carries_a_modeled_amount() {
        let mut ctx = context();
        for _ in 0..300 {
            let debit = HdfcProfile.transaction(TxnKind::Debit, date(), &mut ctx);
            let amount = debit.amount.unwrap();
            assert!(amount > 0.0 && amount <= 18_000.0);
            let credit = HdfcProfile.transaction(TxnKind::Credit, date(), &mut ctx);
            assert!(credit.amount.unwrap() > 0.0);
        }
    }

    #[test]
    fn salary_credit_uses_the_neft_settlement_format() {
        let mut ctx = context();
        let salary = HdfcProfile.salary_credit("Wipro Limited", &mut ctx);
        assert!(salary.description.starts_with("NEFT CR-"));
        assert!(salary.description.contains("WIPRO LIMITED"));
        assert!(salary.reference.starts_with("AXISP"));
    }

    #[test]
    fn upi_narrations_mention_the_handle() {
        let mut ctx = context();
        let mut seen_upi = false;
        for _ in 0..200 {
            let txn = HdfcProfile.transaction(TxnKind::Debit, date(), &mut ctx);
            if txn.description.starts_with("UPI-") {
                assert!(txn.description.contains('@'));
                seen_upi = true;
            }
        }
        assert!(seen_upi);
    }
}
