//! Punjab National Bank style table. PNB narrations frequently wrap onto a
//! second line (`UPI/DR/...\nBA/UBIN/...`), and the reference column carries
//! a plain 8-digit number.

use chrono::NaiveDate;

use super::{BankStyleProfile, SalaryCredit, StyledTransaction, TxnKind};
use crate::context::GenerationContext;
use crate::rng::SeededRng;

pub struct PnbProfile;

const UPI_IDS: [&str; 10] = [
    "paytm@paytm",
    "yesbank@ybl",
    "icici@icici",
    "okaxis@okaxis",
    "okhdfcbank@hdfcbank",
    "oksbi@sbi",
    "okicici@icici",
    "axisbank@axl",
    "idfcbank@idfcbank",
    "boi@boi",
];

const UPI_MERCHANTS: [&str; 8] = [
    "GUMMI", "CUMMI", "BAJUBIN", "YESBIN", "BA/UBIN", "COMMUNICATI", "C VEST", "BA/UBIN",
];

const ATM_LOCATIONS: [&str; 10] = [
    "MUMBAI", "DELHI", "BANGALORE", "PUNE", "HYDERABAD",
    "CHENNAI", "KOLKATA", "AHMEDABAD", "BHOPAL", "INDORE",
];

const POS_MERCHANTS: [&str; 10] = [
    "BIG BAZAAR", "RELIANCE RETAIL", "DMart", "MORE SUPERMARKET", "EASY DAY",
    "VISHAL MEGA MART", "SPENCER'S", "NILGIRIS", "FOODWORLD", "HYPERCITY",
];

const MOBILE_OPERATORS: [&str; 4] = ["AIRTEL", "JIO", "VI", "BSNL"];
const DTH_OPERATORS: [&str; 4] = ["TATA SKY", "DISH TV", "AIRTEL DTH", "SUN DIRECT"];

const BILLS: [(&str, &str); 4] = [
    ("ELECTRICITY", "MSEDCL"),
    ("ELECTRICITY", "BESCOM"),
    ("WATER", "MUNICIPAL CORP"),
    ("GAS", "MAHANAGAR GAS"),
];

const INSURERS: [&str; 6] = [
    "LIC", "HDFC LIFE", "ICICI PRUDENTIAL", "SBI LIFE", "MAX LIFE", "BAJAJ ALLIANZ",
];

const LOAN_TYPES: [&str; 4] = ["HOME LOAN", "CAR LOAN", "PERSONAL LOAN", "EDUCATION LOAN"];

const NEFT_BANK_CODES: [&str; 6] = ["YESB", "HDFC", "SBIN", "ICIC", "UTIB", "IDFB"];

impl BankStyleProfile for PnbProfile {
    fn name(&self) -> &'static str {
        "PNB"
    }

    fn transaction(
        &self,
        kind: TxnKind,
        _date: NaiveDate,
        ctx: &mut GenerationContext,
    ) -> StyledTransaction {
        let rng = &mut ctx.rng;
        let description = match kind {
            TxnKind::Credit => match rng.random_int(0, 4) {
                0 => upi(false, rng),
                1 => neft(false, rng),
                2 => "INT.CREDIT\nQUARTERLY INTEREST CREDIT".to_string(),
                3 => format!("CASH DEPOSIT\nCDM/{}", rng.random_int(100_000_000, 999_999_999)),
                _ => imps(rng),
            },
            TxnKind::Debit => match rng.random_int(0, 8) {
                0 => upi(true, rng),
                1 => neft(true, rng),
                2 => atm_withdrawal(rng),
                3 => pos(rng),
                4 => recharge("MOBILE", &MOBILE_OPERATORS, rng),
                5 => recharge("DTH", &DTH_OPERATORS, rng),
                6 => bill_payment(rng),
                7 => loan_emi(rng),
                _ => insurance_premium(rng),
            },
        };
        let reference = rng.random_int(10_000_000, 99_999_999).to_string();
        StyledTransaction::new(description, reference)
    }

    fn salary_credit(&self, employer: &str, ctx: &mut GenerationContext) -> SalaryCredit {
        let rng = &mut ctx.rng;
        let description = format!(
            "SALARY CREDIT FROM {}\nNEFT-{}",
            employer.to_uppercase(),
            rng.random_int(100_000_000, 999_999_999)
        );
        SalaryCredit {
            description,
            reference: rng.random_int(10_000_000, 99_999_999).to_string(),
        }
    }

    fn reference(&self, _date: NaiveDate, ctx: &mut GenerationContext) -> String {
        ctx.rng.random_int(10_000_000, 99_999_999).to_string()
    }
}

fn upi(is_debit: bool, rng: &mut SeededRng) -> String {
    let ref_number = rng.random_int(100_000_000_000, 999_999_999_999);
    let upi_id = *rng.pick(&UPI_IDS);
    let merchant = *rng.pick(&UPI_MERCHANTS);
    let account = rng.random_int(700_000_000, 799_999_999);
    if is_debit {
        format!("UPI/DR/{}/{}\nBA/UBIN/{}/{}/p", ref_number, merchant, account, upi_id)
    } else {
        format!("UPI/DR/{}/{}\nBA/UBIN/{}/{}", ref_number, merchant, account, upi_id)
    }
}

fn neft(is_debit: bool, rng: &mut SeededRng) -> String {
    let account_ref = rng.random_int(100_000_000, 999_999_999);
    if is_debit {
        let bank = *rng.pick(&NEFT_BANK_CODES);
        format!(
            "NEFT_IN-{}{}/{}/FROM PUNE 37\nCOMMUNICATIONS",
            bank,
            rng.random_int(10_000_000, 99_999_999),
            account_ref
        )
    } else {
        format!(
            "NEFT_IN-00YESA{}/{}/YESB0{}/YESH M\nCOMMUNICATI",
            rng.random_int(10_000_000, 99_999_999),
            account_ref,
            rng.random_int(100_000, 999_999)
        )
    }
}

fn imps(rng: &mut SeededRng) -> String {
    format!(
        "IMPS-INV{}/{}/{}/YESH M",
        rng.random_int(100_000_000_000, 999_999_999_999),
        rng.random_int(100_000_000, 999_999_999),
        rng.random_int(100_000, 999_999)
    )
}

fn atm_withdrawal(rng: &mut SeededRng) -> String {
    format!(
        "ATM WDL {} {}/{}",
        rng.pick(&ATM_LOCATIONS),
        rng.random_int(100_000, 999_999),
        rng.random_int(100_000_000_000, 999_999_999_999)
    )
}

fn pos(rng: &mut SeededRng) -> String {
    format!(
        "POS {} {}/{}",
        rng.pick(&POS_MERCHANTS),
        rng.random_int(100, 999),
        rng.random_int(100_000_000_000, 999_999_999_999)
    )
}

fn recharge(kind: &str, operators: &'static [&'static str], rng: &mut SeededRng) -> String {
    format!(
        "{} RECHARGE {}\nUPI/DR/{}",
        kind,
        rng.pick(operators),
        rng.random_int(10_000_000_000, 99_999_999_999)
    )
}

fn bill_payment(rng: &mut SeededRng) -> String {
    let (bill, provider) = *rng.pick(&BILLS);
    format!(
        "{} BILL {}\nUPI/DR/{}",
        bill,
        provider,
        rng.random_int(10_000_000_000, 99_999_999_999)
    )
}

fn loan_emi(rng: &mut SeededRng) -> String {
    format!(
        "EMI {}\nA/C NO-{}",
        rng.pick(&LOAN_TYPES),
        rng.random_int(10_000_000_000, 99_999_999_999)
    )
}

fn insurance_premium(rng: &mut SeededRng) -> String {
    format!(
        "INSURANCE PREMIUM {}\nPOLICY/{}",
        rng.pick(&INSURERS),
        rng.random_int(1_000_000_000, 9_999_999_999)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StatementDetails;

    #[test]
    fn references_are_eight_digits() {
        let mut ctx = GenerationContext::new(14, &StatementDetails::default());
        let date = NaiveDate::from_ymd_opt(2025, 2, 20).unwrap();
        for _ in 0..50 {
            let txn = PnbProfile.transaction(TxnKind::Debit, date, &mut ctx);
            assert_eq!(txn.reference.len(), 8);
            assert!(txn.reference.chars().all(|ch| ch.is_ascii_digit()));
        }
    }

    #[test]
    fn salary_credit_wraps_onto_a_neft_line() {
        let mut ctx = GenerationContext::new(15, &StatementDetails::default());
        let salary = PnbProfile.salary_credit("Tech Mahindra", &mut ctx);
        assert!(salary.description.starts_with("SALARY CREDIT FROM TECH MAHINDRA"));
        assert!(salary.description.contains("\nNEFT-"));
    }
}
