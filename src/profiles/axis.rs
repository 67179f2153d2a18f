//! Axis Bank style table: dash-joined narrations, the widest rail catalogue
//! in the set (UPI through RTGS, cheques, BBPS bills, subscriptions), and a
//! salary row carried over NEFT.

use chrono::NaiveDate;

use super::{BankStyleProfile, SalaryCredit, StyledTransaction, TxnKind};
use crate::context::GenerationContext;
use crate::rng::SeededRng;

pub struct AxisProfile;

const UPI_APPS: [&str; 6] = ["paytm", "phonepe", "googlepay", "amazonpay", "bhim", "whatsapp"];

const UPI_MERCHANTS: [&str; 12] = [
    "Swiggy", "Zomato", "Amazon", "Flipkart", "BigBasket", "Grofers",
    "BookMyShow", "Uber", "Ola", "MakeMyTrip", "Airtel", "JioMart",
];

const NEFT_BANKS: [&str; 6] = ["HDFC", "ICIC", "SBIN", "UTIB", "IDFB", "KKBK"];

const ATM_LOCATIONS: [(&str, &str); 15] = [
    ("AAWAS NAGAR AB ROAD", "DEDEWAS"),
    ("MG ROAD VIJAY NAGAR", "INDORE"),
    ("PALASIA SQUARE", "INDORE"),
    ("SARAFA BAZAR MAIN", "INDORE"),
    ("BHANWAR KUWA ROAD", "INDORE"),
    ("REGAL SQUARE INDORE", "INDORE"),
    ("TREASURE ISLAND MALL", "INDORE"),
    ("SAPNA SANGEETA ROAD", "INDORE"),
    ("NEW PALASIA", "INDORE"),
    ("SOUTH TUKOGANJ", "INDORE"),
    ("VIJAY NAGAR SQUARE", "INDORE"),
    ("RACE COURSE ROAD", "INDORE"),
    ("CENTRAL MALL GEETA BHAWAN", "INDORE"),
    ("BOMBAY HOSPITAL ROAD", "INDORE"),
    ("RAJENDRA NAGAR MAIN", "INDORE"),
];

const POS_MERCHANTS: [&str; 10] = [
    "MORE SUPERMARKET", "RELIANCE FRESH", "BIG BAZAAR", "DMart", "LIFESTYLE",
    "WESTSIDE", "PANTALOONS", "SHOPPER STOP", "CENTRAL", "MAX FASHION",
];

const LOAN_TYPES: [&str; 4] = ["HOME", "CAR", "PERSONAL", "EDUCATION"];

const SI_TYPES: [&str; 4] = [
    "SI-MUTUAL FUND SIP",
    "SI-INSURANCE PREMIUM",
    "SI-LOAN EMI",
    "SI-CREDIT CARD PAYMENT",
];

const BILLS: [(&str, &str); 5] = [
    ("ELECTRICITY", "MSEB"),
    ("MOBILE", "AIRTEL"),
    ("DTH", "TATA SKY"),
    ("GAS", "MAHANAGAR GAS"),
    ("WATER", "BMC"),
];

const INTEREST_TYPES: [&str; 3] = [
    "SAVINGS ACCOUNT INTEREST CREDIT",
    "QUARTERLY INTEREST CREDIT",
    "HALF YEARLY INTEREST CREDIT",
];

const AUTOPAY_MERCHANTS: [&str; 9] = [
    "NETFLIX", "AMAZON PRIME", "HOTSTAR", "SPOTIFY", "YOUTUBE PREMIUM",
    "GOOGLE ONE", "APPLE MUSIC", "ZOOM", "OFFICE 365",
];

impl BankStyleProfile for AxisProfile {
    fn name(&self) -> &'static str {
        "AXIS"
    }

    fn transaction(
        &self,
        kind: TxnKind,
        _date: NaiveDate,
        ctx: &mut GenerationContext,
    ) -> StyledTransaction {
        let rng = &mut ctx.rng;
        let description = match kind {
            TxnKind::Credit => {
                let variant = rng.random_int(0, 7);
                match variant {
                    0 => upi(false, rng),
                    1 => neft(false, rng),
                    2 => rtgs(false, rng),
                    3 => imps(false, rng),
                    4 => (*rng.pick(&INTEREST_TYPES)).to_string(),
                    5 => format!("CHQ DEP-{}-CLR", rng.random_int(100_000, 999_999)),
                    6 => format!(
                        "CASH DEP-BR{}-{}",
                        rng.random_int(1000, 9999),
                        rng.random_int(100_000_000, 999_999_999)
                    ),
                    _ => online_transfer(false, rng),
                }
            }
            TxnKind::Debit => {
                let variant = rng.random_int(0, 12);
                match variant {
                    0 => upi(true, rng),
                    1 => neft(true, rng),
                    2 => rtgs(true, rng),
                    3 => imps(true, rng),
                    4 => atm_withdrawal(rng),
                    5 => pos(rng),
                    6 => emi(rng),
                    7 => format!("CHQ PAID-{}", rng.random_int(100_000, 999_999)),
                    8 => standing_instruction(rng),
                    9 => bill_payment(rng),
                    10 => format!(
                        "CASH WDL-BR{}-{}",
                        rng.random_int(1000, 9999),
                        rng.random_int(100_000_000, 999_999_999)
                    ),
                    11 => online_transfer(true, rng),
                    _ => autopay(rng),
                }
            }
        };
        StyledTransaction::new(description, String::new())
    }

    fn salary_credit(&self, employer: &str, ctx: &mut GenerationContext) -> SalaryCredit {
        let rng = &mut ctx.rng;
        let truncated: String = employer.to_uppercase().chars().take(15).collect();
        SalaryCredit {
            description: format!(
                "SAL-CR-{}-NEFT-{}",
                truncated,
                rng.random_int(1_000_000_000, 9_999_999_999)
            ),
            reference: String::new(),
        }
    }

    fn reference(&self, _date: NaiveDate, ctx: &mut GenerationContext) -> String {
        format!("AXIS{}", ctx.rng.random_int(10_000_000, 99_999_999))
    }
}

fn upi(is_debit: bool, rng: &mut SeededRng) -> String {
    let app = *rng.pick(&UPI_APPS);
    let ref_number = rng.random_int(100_000_000_000, 999_999_999_999);
    if is_debit {
        let merchant = *rng.pick(&UPI_MERCHANTS);
        format!("UPI-{}-{}@axisbank-{}", merchant, app, ref_number)
    } else {
        format!("UPI-CREDIT-{}@axisbank-{}", app, ref_number)
    }
}

fn imps(is_debit: bool, rng: &mut SeededRng) -> String {
    let direction = if is_debit { "DR" } else { "CR" };
    format!(
        "IMPS-{}-AXISBK{}-{}",
        direction,
        rng.random_int(100_000_000_000, 999_999_999_999),
        rng.random_int(10_000_000, 99_999_999)
    )
}

fn neft(is_debit: bool, rng: &mut SeededRng) -> String {
    let direction = if is_debit { "DR" } else { "CR" };
    let bank = *rng.pick(&NEFT_BANKS);
    format!(
        "NEFT-{}-{}{}-AXIS{}",
        direction,
        bank,
        rng.random_int(1_000_000_000, 9_999_999_999),
        rng.random_int(10_000_000, 99_999_999)
    )
}

fn rtgs(is_debit: bool, rng: &mut SeededRng) -> String {
    let direction = if is_debit { "DR" } else { "CR" };
    format!(
        "RTGS-{}-AXISR{}-{}",
        direction,
        rng.random_int(1_000_000_000, 9_999_999_999),
        rng.random_int(1_000_000_000, 9_999_999_999)
    )
}

fn atm_withdrawal(rng: &mut SeededRng) -> String {
    let (area, city) = *rng.pick(&ATM_LOCATIONS);
    let cash_id = rng.random_int(1100, 1160);
    format!("ATM WDL-ATM CASH {}\n{}\n{}", cash_id, area, city)
}

fn pos(rng: &mut SeededRng) -> String {
    format!(
        "POS-{}-****{}-{}",
        rng.pick(&POS_MERCHANTS),
        rng.random_int(1000, 9999),
        rng.random_int(100_000_000_000, 999_999_999_999)
    )
}

fn emi(rng: &mut SeededRng) -> String {
    format!(
        "EMI-{} LOAN-{}",
        rng.pick(&LOAN_TYPES),
        rng.random_int(10_000_000_000, 99_999_999_999)
    )
}

fn standing_instruction(rng: &mut SeededRng) -> String {
    format!(
        "{}-{}",
        rng.pick(&SI_TYPES),
        rng.random_int(10_000_000, 99_999_999)
    )
}

fn bill_payment(rng: &mut SeededRng) -> String {
    let (bill, provider) = *rng.pick(&BILLS);
    format!(
        "BBPS-{}-{}-{}",
        bill,
        provider,
        rng.random_int(10_000_000_000, 99_999_999_999)
    )
}

fn online_transfer(is_debit: bool, rng: &mut SeededRng) -> String {
    let direction = if is_debit { "DR" } else { "CR" };
    format!(
        "NETBANKING-{}-AXISBK-{}",
        direction,
        rng.random_int(100_000_000_000, 999_999_999_999)
    )
}

fn autopay(rng: &mut SeededRng) -> String {
    format!(
        "AUTOPAY-{}-{}",
        rng.pick(&AUTOPAY_MERCHANTS),
        rng.random_int(10_000_000, 99_999_999)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StatementDetails;

    #[test]
    fn salary_credit_truncates_long_employers() {
        let mut ctx = GenerationContext::new(9, &StatementDetails::default());
        let salary = AxisProfile.salary_credit("Very Long Employer Name Limited", &mut ctx);
        assert!(salary.description.starts_with("SAL-CR-VERY LONG EMPLO-"));
        assert!(salary.description.contains("-NEFT-"));
    }

    #[test]
    fn debits_rotate_across_the_rail_catalogue() {
        let mut ctx = GenerationContext::new(10, &StatementDetails::default());
        let date = NaiveDate::from_ymd_opt(2025, 4, 18).unwrap();
        let mut prefixes = std::collections::HashSet::new();
        for _ in 0..300 {
            let txn = AxisProfile.transaction(TxnKind::Debit, date, &mut ctx);
            let prefix: String = txn
                .description
                .chars()
                .take_while(|ch| ch.is_ascii_alphabetic())
                .collect();
            prefixes.insert(prefix);
        }
        assert!(prefixes.len() >= 6);
    }
}
