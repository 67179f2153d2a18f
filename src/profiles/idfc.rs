//! IDFC First Bank style table. IDFC statements are UPI-heavy app-payment
//! rows with an empty reference column; amounts come in fixed menus for the
//! subscription, recharge, EMI, and ATM rails and tiered ranges elsewhere.

use chrono::NaiveDate;

use super::amounts::menu_amount;
use super::{weighted_pick, BankStyleProfile, SalaryCredit, StyledTransaction, TxnKind};
use crate::context::GenerationContext;
use crate::rng::SeededRng;

pub struct IdfcProfile;

const UPI_PROVIDERS: [&str; 5] = ["PhonePe", "Google Pay", "Paytm", "Amazon Pay", "BHIM"];

const PERSON_NAMES: [&str; 10] = [
    "SATENDRA SINGH", "DEVENDRA", "RAVI KUMAR", "ANJALI SHARMA", "PRIYA PATEL",
    "RAHUL VERMA", "SUNITA GUPTA", "AMIT SINGH", "KRISHNA YADAV", "NEHA MISHRA",
];

const MERCHANTS: [&str; 10] = [
    "SWIGGY", "ZOMATO", "AMAZON", "FLIPKART", "RELIANCE DIGITAL",
    "DMart", "Big Bazaar", "Myntra", "Uber", "Ola",
];

const MANDATE_SERVICES: [&str; 6] = [
    "NETFLIX SUBSCRIPTION",
    "AMAZON PRIME MEMBERSHIP",
    "SPOTIFY PREMIUM",
    "JIO POSTPAID",
    "AIRTEL POSTPAID",
    "INSURANCE PREMIUM",
];

const MOBILE_OPERATORS: [&str; 4] = ["JIO", "AIRTEL", "VI", "BSNL"];
const DTH_PROVIDERS: [&str; 4] = ["TATA SKY", "DISH TV", "AIRTEL DIGITAL TV", "VIDEOCON D2H"];

const EMI_AMOUNTS: [f64; 9] = [
    2500.0, 3000.0, 3500.0, 4000.0, 5000.0, 6000.0, 7500.0, 8000.0, 10_000.0,
];
const ATM_AMOUNTS: [f64; 8] = [500.0, 1000.0, 2000.0, 2500.0, 3000.0, 4000.0, 5000.0, 10_000.0];
const MANDATE_AMOUNTS: [f64; 9] = [199.0, 299.0, 399.0, 499.0, 599.0, 999.0, 1499.0, 2000.0, 2500.0];
const MOBILE_AMOUNTS: [f64; 6] = [199.0, 299.0, 399.0, 499.0, 699.0, 999.0];
const DTH_AMOUNTS: [f64; 6] = [300.0, 400.0, 500.0, 600.0, 800.0, 1000.0];

#[derive(Clone, Copy)]
enum DebitKind {
    Upi,
    Pos,
    Atm,
    MobileRecharge,
    DthRecharge,
    Mandate,
    Emi,
}

// UPI carries triple weight: IDFC's modern mix is app-payment dominated.
const DEBIT_KINDS: [(u32, DebitKind); 7] = [
    (3, DebitKind::Upi),
    (1, DebitKind::Pos),
    (1, DebitKind::Atm),
    (1, DebitKind::MobileRecharge),
    (1, DebitKind::DthRecharge),
    (1, DebitKind::Mandate),
    (1, DebitKind::Emi),
];

impl BankStyleProfile for IdfcProfile {
    fn name(&self) -> &'static str {
        "IDFC"
    }

    fn transaction(
        &self,
        kind: TxnKind,
        _date: NaiveDate,
        ctx: &mut GenerationContext,
    ) -> StyledTransaction {
        let rng = &mut ctx.rng;
        match kind {
            TxnKind::Credit => match rng.random_int(0, 2) {
                0 => upi_credit(rng),
                1 => neft_credit(rng),
                _ => cash_deposit(rng),
            },
            TxnKind::Debit => match *weighted_pick(&DEBIT_KINDS, rng) {
                DebitKind::Upi => upi_debit(rng),
                DebitKind::Pos => pos(rng),
                DebitKind::Atm => atm_withdrawal(rng),
                DebitKind::MobileRecharge => mobile_recharge(rng),
                DebitKind::DthRecharge => dth_recharge(rng),
                DebitKind::Mandate => mandate_debit(rng),
                DebitKind::Emi => emi_debit(rng),
            },
        }
    }

    fn salary_credit(&self, employer: &str, _ctx: &mut GenerationContext) -> SalaryCredit {
        SalaryCredit {
            description: format!("SALARY CREDIT/{}/NEFT", employer),
            reference: String::new(),
        }
    }

    // IDFC prints no standalone reference column.
    fn reference(&self, _date: NaiveDate, _ctx: &mut GenerationContext) -> String {
        String::new()
    }
}

fn upi_debit(rng: &mut SeededRng) -> StyledTransaction {
    let ref_number = rng.random_int(100_000_000_000, 999_999_999_999);
    match rng.random_int(1, 3) {
        1 => {
            let provider = *rng.pick(&UPI_PROVIDERS);
            let description = format!("UPI/MOB/{}/Payment from {}", ref_number, provider);
            let amount = rng.random_int(100, 5000) as f64;
            StyledTransaction::new(description, "").with_amount(amount)
        }
        2 => {
            let name = *rng.pick(&PERSON_NAMES);
            let phone_digits = rng.random_int(1_000_000, 9_999_999);
            let description = format!(
                "UPI/DR/{}/{}/{}/Pay req",
                rng.random_int(100_000_000_000, 999_999_999_999),
                name,
                phone_digits
            );
            let amount = rng.random_int(500, 8000) as f64;
            StyledTransaction::new(description, "").with_amount(amount)
        }
        _ => {
            let merchant = *rng.pick(&MERCHANTS);
            let description = format!("UPI/MOB/{}/Payment to {}", ref_number, merchant);
            let amount = rng.random_int(200, 3000) as f64;
            StyledTransaction::new(description, "").with_amount(amount)
        }
    }
}

fn upi_credit(rng: &mut SeededRng) -> StyledTransaction {
    let name = *rng.pick(&PERSON_NAMES);
    let upi_ref = rng.random_int(100_000_000_000, 999_999_999_999);
    let phone_digits = rng.random_int(1_000_000, 9_999_999);
    let description = format!("UPI/CR/{}/{}/{}/Received", upi_ref, name, phone_digits);

    let tier = rng.next_f64();
    let amount = if tier < 0.7 {
        rng.random_int(200, 2500) as f64
    } else if tier < 0.9 {
        rng.random_int(2500, 5000) as f64
    } else {
        rng.random_int(5000, 10_000) as f64
    };
    StyledTransaction::new(description, "").with_amount(amount)
}

fn neft_credit(rng: &mut SeededRng) -> StyledTransaction {
    let name = *rng.pick(&PERSON_NAMES);
    let ref_number = rng.random_int(100_000_000_000, 999_999_999_999);
    let description = format!("NEFT/CR/{}/{}/Received", ref_number, name);

    let tier = rng.next_f64();
    let amount = if tier < 0.7 {
        rng.random_int(2000, 8000) as f64
    } else if tier < 0.9 {
        rng.random_int(8000, 15_000) as f64
    } else {
        rng.random_int(15_000, 25_000) as f64
    };
    StyledTransaction::new(description, "").with_amount(amount)
}

fn cash_deposit(rng: &mut SeededRng) -> StyledTransaction {
    let ref_number = rng.random_int(100_000_000_000, 999_999_999_999);
    let description = format!("CASH DEPOSIT/{}/VIDISHA BRANCH", ref_number);

    let tier = rng.next_f64();
    let amount = if tier < 0.6 {
        rng.random_int(3000, 10_000) as f64
    } else if tier < 0.85 {
        rng.random_int(10_000, 20_000) as f64
    } else {
        rng.random_int(20_000, 35_000) as f64
    };
    StyledTransaction::new(description, "").with_amount(amount)
}

fn pos(rng: &mut SeededRng) -> StyledTransaction {
    let merchant = *rng.pick(&MERCHANTS);
    let ref_number = rng.random_int(100_000_000_000, 999_999_999_999);
    let description = format!("POS/{}/{}/VIDISHA", ref_number, merchant);
    let amount = rng.random_int(500, 8000) as f64;
    StyledTransaction::new(description, "").with_amount(amount)
}

fn atm_withdrawal(rng: &mut SeededRng) -> StyledTransaction {
    let atm_id = rng.random_int(100_000, 999_999);
    let ref_number = rng.random_int(100_000_000_000, 999_999_999_999);
    let description = format!("ATM WDL/{}/{}/VIDISHA", atm_id, ref_number);
    let amount = menu_amount(&ATM_AMOUNTS, rng);
    StyledTransaction::new(description, "").with_amount(amount)
}

fn mobile_recharge(rng: &mut SeededRng) -> StyledTransaction {
    let operator = *rng.pick(&MOBILE_OPERATORS);
    let ref_number = rng.random_int(100_000_000_000, 999_999_999_999);
    let description = format!("UPI/MOB/{}/Mobile Recharge {}", ref_number, operator);
    let amount = menu_amount(&MOBILE_AMOUNTS, rng);
    StyledTransaction::new(description, "").with_amount(amount)
}

fn dth_recharge(rng: &mut SeededRng) -> StyledTransaction {
    let provider = *rng.pick(&DTH_PROVIDERS);
    let ref_number = rng.random_int(100_000_000, 999_999_999);
    let description = format!("UPI/MOB/{}/DTH Recharge {}", ref_number, provider);
    let amount = menu_amount(&DTH_AMOUNTS, rng);
    StyledTransaction::new(description, "").with_amount(amount)
}

fn mandate_debit(rng: &mut SeededRng) -> StyledTransaction {
    let service = *rng.pick(&MANDATE_SERVICES);
    let ref_number = rng.random_int(100_000_000, 999_999_999);
    let description = format!("MANDATE DEBIT/{}/{}", ref_number, service);
    let amount = menu_amount(&MANDATE_AMOUNTS, rng);
    StyledTransaction::new(description, "").with_amount(amount)
}

fn emi_debit(rng: &mut SeededRng) -> StyledTransaction {
    let ref_number = rng.random_int(100_000_000, 999_999_999);
    let description = format!("EMI DEBIT {}", ref_number);
    let amount = menu_amount(&EMI_AMOUNTS, rng);
    StyledTransaction::new(description, "").with_amount(amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StatementDetails;

    #[test]
    fn references_stay_empty() {
        let mut ctx = GenerationContext::new(30, &StatementDetails::default());
        let date = NaiveDate::from_ymd_opt(2025, 5, 5).unwrap();
        for _ in 0..100 {
            let txn = IdfcProfile.transaction(TxnKind::Debit, date, &mut ctx);
            assert!(txn.reference.is_empty());
            assert!(txn.amount.unwrap() > 0.0);
        }
        assert!(IdfcProfile.reference(date, &mut ctx).is_empty());
    }

    #[test]
    fn menu_rails_stick_to_their_menus() {
        let mut ctx = GenerationContext::new(31, &StatementDetails::default());
        let date = NaiveDate::from_ymd_opt(2025, 5, 5).unwrap();
        for _ in 0..400 {
            let txn = IdfcProfile.transaction(TxnKind::Debit, date, &mut ctx);
            if txn.description.starts_with("EMI DEBIT") {
                assert!(EMI_AMOUNTS.contains(&txn.amount.unwrap()));
            }
            if txn.description.starts_with("ATM WDL/") {
                assert!(ATM_AMOUNTS.contains(&txn.amount.unwrap()));
            }
        }
    }

    #[test]
    fn salary_credit_keeps_the_employer_verbatim() {
        let mut ctx = GenerationContext::new(32, &StatementDetails::default());
        let salary = IdfcProfile.salary_credit("Acme Traders", &mut ctx);
        assert_eq!(salary.description, "SALARY CREDIT/Acme Traders/NEFT");
    }
}
