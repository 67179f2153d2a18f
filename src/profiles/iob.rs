//! Indian Overseas Bank style table. IOB rows name counterparties from a
//! pool of abbreviated person names, use three-letter bank mnemonics, and
//! carry `S`-prefixed references like IndusInd.

use chrono::NaiveDate;

use super::{BankStyleProfile, SalaryCredit, StyledTransaction, TxnKind};
use crate::context::GenerationContext;
use crate::rng::SeededRng;

pub struct IobProfile;

const PERSON_NAMES: [&str; 31] = [
    "RUPESH PRAJAPA", "LATA WO DHARME", "MD SADIQUE ZEY", "SATYAM MASANI",
    "Omprakash Vis", "ABHISHEK MEHAR", "AKASH", "RAMASELVAM NAT",
    "SHAILENDRA VE", "NEETESH MEHARA", "Rakesh Kumar", "Sona Bai",
    "BHUPENDRA BHUP", "Kamal Singh", "SHUBHAM SO NAR", "Arun Prajapati",
    "ANIL BALMIK", "Suraj Kumar", "DEVENDRA BHILA", "SHARMILA GURJ",
    "SALONI BHADE", "KAJAL RATHORE", "MOHAMMAD MUJA", "VIVEK",
    "Om Kurmi", "SALMAN ALI", "Ms ANKITA KIRA", "Lakhan Mehatar",
    "Bhuli Bai", "Pawan Ahirwar", "MEMON SUHAN MO",
];

const IOB_BANKS: [&str; 16] = [
    "YES", "UCB", "IBK", "KKB", "UBI", "SBI", "BAR", "IND",
    "AIR", "UNB", "UTI", "IPO", "PUN", "IDI", "HDC", "AXI",
];

const UPI_SUFFIXES: [&str; 6] = [
    "Payment f", "Sent usin", "Paid via", "Pay to Bh", "Pay To Bh", "UPI",
];

const RECHARGE_MERCHANTS: [&str; 5] = [
    "Jio Recharge", "Vodafone Idea", "Airtel Recharge", "Vi Recharge", "BSNL Recharge",
];

const BILL_MERCHANTS: [&str; 5] = [
    "Poorvika resta", "Amazon Pay", "Paytm", "PhonePe", "Google Pay",
];

const ACH_DEBIT_MERCHANTS: [&str; 7] = [
    "ARISTOSECURI", "INSURANCE PREMIUM", "SIP MUTUAL FUND", "LOAN EMI",
    "CREDIT CARD BILL", "UTILITY BILL", "SUBSCRIPTION",
];

const ACH_CREDIT_MERCHANTS: [&str; 4] = [
    "SALARY CREDIT", "PENSION CREDIT", "GOVT SUBSIDY", "DIVIDEND CREDIT",
];

const ATM_LOCATIONS: [&str; 6] = ["MUMBAI", "DELHI", "BANGALORE", "PUNE", "HYDERABAD", "CHENNAI"];
const BRANCH_CODES: [&str; 5] = ["3133", "3134", "3135", "3136", "3137"];
const SI_TYPES: [&str; 4] = ["SIP", "LOAN", "INSURANCE", "RD"];
const LOAN_TYPES: [&str; 4] = ["HOME", "CAR", "PERSONAL", "EDUCATION"];
const QUARTERS: [&str; 4] = ["Q1", "Q2", "Q3", "Q4"];

impl BankStyleProfile for IobProfile {
    fn name(&self) -> &'static str {
        "IOB"
    }

    fn transaction(
        &self,
        kind: TxnKind,
        _date: NaiveDate,
        ctx: &mut GenerationContext,
    ) -> StyledTransaction {
        let rng = &mut ctx.rng;
        let description = match kind {
            TxnKind::Credit => match rng.random_int(0, 6) {
                0 => upi(true, rng),
                1 => person_rail("IMPS", true, rng),
                2 => person_rail("NEFT", true, rng),
                3 => ach_credit(rng),
                4 => format!("CASH DEP/BRANCH/{}/IOB", rng.pick(&BRANCH_CODES)),
                5 => format!("CHQ DEP/{}/IOB", rng.random_int(100_000, 999_999)),
                _ => format!("INT CREDIT/{}/FY2024-25/IOB", rng.pick(&QUARTERS)),
            },
            TxnKind::Debit => match rng.random_int(0, 12) {
                0 => upi(false, rng),
                1 => recharge(rng),
                2 => bill_payment(rng),
                3 => person_rail("IMPS", false, rng),
                4 => person_rail("NEFT", false, rng),
                5 => ach_debit(rng),
                6 => format!(
                    "ATM WDL/{}/{}/IOB",
                    rng.random_int(100_000, 999_999),
                    rng.pick(&ATM_LOCATIONS)
                ),
                7 => format!("CASH WDL/BRANCH/{}/IOB", rng.pick(&BRANCH_CODES)),
                8 => format!(
                    "SI/{}/{}/IOB",
                    rng.pick(&SI_TYPES),
                    rng.random_int(10_000_000, 99_999_999)
                ),
                9 => format!(
                    "EMI/{} LOAN/{}/IOB",
                    rng.pick(&LOAN_TYPES),
                    rng.random_int(100_000_000, 999_999_999)
                ),
                10 => format!("CHQ CLR/{}/IOB", rng.random_int(100_000, 999_999)),
                11 => format!("DC AMC/****{}/IOB", rng.random_int(1000, 9999)),
                _ => "SMS CHARGES/MONTHLY/IOB".to_string(),
            },
        };
        let reference = format!("S{}", rng.random_int(10_000_000, 99_999_999));
        StyledTransaction::new(description, reference)
    }

    fn salary_credit(&self, employer: &str, ctx: &mut GenerationContext) -> SalaryCredit {
        let rng = &mut ctx.rng;
        SalaryCredit {
            description: format!(
                "SAL CR/{}/{}/NEFT",
                rng.random_int(100_000_000_000, 999_999_999_999),
                employer.to_uppercase()
            ),
            reference: format!("S{}", rng.random_int(10_000_000, 99_999_999)),
        }
    }

    fn reference(&self, _date: NaiveDate, ctx: &mut GenerationContext) -> String {
        format!("S{}", ctx.rng.random_int(10_000_000, 99_999_999))
    }
}

fn upi(is_credit: bool, rng: &mut SeededRng) -> String {
    let ref_number = rng.random_int(100_000_000_000, 999_999_999_999);
    let name = *rng.pick(&PERSON_NAMES);
    let bank = *rng.pick(&IOB_BANKS);
    let suffix = *rng.pick(&UPI_SUFFIXES);
    let direction = if is_credit { "CR" } else { "DR" };
    format!("UPI/{}/{}/{}/{}/{}", ref_number, direction, name, bank, suffix)
}

fn person_rail(rail: &str, is_credit: bool, rng: &mut SeededRng) -> String {
    let ref_number = rng.random_int(100_000_000_000, 999_999_999_999);
    let name = *rng.pick(&PERSON_NAMES);
    let direction = if is_credit { "CR" } else { "DR" };
    format!("{}/{}/{}/{}", rail, direction, ref_number, name)
}

fn recharge(rng: &mut SeededRng) -> String {
    let ref_number = rng.random_int(100_000_000_000, 999_999_999_999);
    let merchant = *rng.pick(&RECHARGE_MERCHANTS);
    format!("UPI/{}/DR/ {}/YES/Payment f", ref_number, merchant)
}

fn bill_payment(rng: &mut SeededRng) -> String {
    let ref_number = rng.random_int(100_000_000_000, 999_999_999_999);
    let merchant = *rng.pick(&BILL_MERCHANTS);
    let bank = *rng.pick(&IOB_BANKS);
    format!("UPI/{}/DR/{}/{}/Payment f", ref_number, merchant, bank)
}

fn ach_debit(rng: &mut SeededRng) -> String {
    let merchant = *rng.pick(&ACH_DEBIT_MERCHANTS);
    format!(
        "To: TP ACH {} - IOBA{}",
        merchant,
        rng.random_int(1_000_000_000_000_000, 9_999_999_999_999_999)
    )
}

fn ach_credit(rng: &mut SeededRng) -> String {
    let merchant = *rng.pick(&ACH_CREDIT_MERCHANTS);
    format!(
        "From: TP ACH {} - IOBA{}",
        merchant,
        rng.random_int(1_000_000_000_000_000, 9_999_999_999_999_999)
    )
}
