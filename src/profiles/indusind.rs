//! IndusInd Bank style table: compact slash-grammar narrations
//! (`UPI/{ref}/DR/{merchant}/{bank}/{handle}`) and `S`-prefixed eight-digit
//! references throughout.

use chrono::NaiveDate;

use super::{BankStyleProfile, SalaryCredit, StyledTransaction, TxnKind};
use crate::context::GenerationContext;
use crate::rng::SeededRng;

pub struct IndusindProfile;

const UPI_MERCHANTS: [&str; 18] = [
    "Goog", "YADA", "Bank", "SONU", "VISH", "Daya", "GAJR", "APNA", "Bhar",
    "JAIN", "PAYT", "PHON", "AMAZ", "FLIP", "SWIG", "ZOMA", "UBER", "RAPI",
];

const UPI_BANKS: [&str; 8] = ["UTIB", "YESB", "ICIC", "SBIN", "FDRL", "INDB", "HDFC", "AXIS"];

const UPI_HANDLES: [&str; 15] = [
    "harge@okpayaxis", "tmqr5yvj34@ptys", "yrecharge@icici", "ytm.s1lj9aj@pty",
    "Q550680659@ybl", "0071040013@fbpe", "7806070285@axl", "831927974@axl",
    "672916@hdfcbank", "paytm@paytm", "phonepe@ybl", "gpay@okaxis",
    "amazonpay@apl", "freecharge@icici", "mobikwik@icici",
];

const ATM_LOCATIONS: [&str; 6] = ["MUMBAI", "DELHI", "BANGALORE", "PUNE", "HYDERABAD", "CHENNAI"];
const POS_MERCHANTS: [&str; 6] = ["AMAZON", "FLIPKART", "SWIGGY", "ZOMATO", "DMart", "RELIANCE"];
const BILLERS: [&str; 6] = ["ELECTRICITY", "WATER", "GAS", "MOBILE", "DTH", "BROADBAND"];
const BRANCH_CODES: [&str; 5] = ["0001", "0012", "0023", "0045", "0067"];
const SI_TYPES: [&str; 4] = ["SIP", "LOAN", "INSURANCE", "RD"];
const LOAN_TYPES: [&str; 4] = ["HOME", "CAR", "PERSONAL", "EDUCATION"];
const QUARTERS: [&str; 4] = ["Q1", "Q2", "Q3", "Q4"];
const AUTOPAY_SERVICES: [&str; 4] = ["NETFLIX", "AMAZON", "SPOTIFY", "YOUTUBE"];

impl BankStyleProfile for IndusindProfile {
    fn name(&self) -> &'static str {
        "INDUSIND"
    }

    fn transaction(
        &self,
        kind: TxnKind,
        _date: NaiveDate,
        ctx: &mut GenerationContext,
    ) -> StyledTransaction {
        let rng = &mut ctx.rng;
        let description = match kind {
            TxnKind::Credit => match rng.random_int(0, 5) {
                0 => upi(true, rng),
                1 => rail("IMPS", true, rng),
                2 => rail("NEFT", true, rng),
                3 => format!("CASH/DEP/BR/{}", rng.pick(&BRANCH_CODES)),
                4 => format!("CHQ/DEP/{}", rng.random_int(100_000, 999_999)),
                _ => format!("INT/CREDIT/{}/FY2024-25", rng.pick(&QUARTERS)),
            },
            TxnKind::Debit => match rng.random_int(0, 13) {
                0 => upi(false, rng),
                1 => rail("IMPS", false, rng),
                2 => rail("NEFT", false, rng),
                3 => format!(
                    "ATM/{}/WDL/{}",
                    rng.random_int(100_000, 999_999),
                    rng.pick(&ATM_LOCATIONS)
                ),
                4 => format!(
                    "POS/{}/DR/{}/****{}",
                    rng.random_int(100_000_000_000, 999_999_999_999),
                    rng.pick(&POS_MERCHANTS),
                    rng.random_int(1000, 9999)
                ),
                5 => format!(
                    "BILL/{}/DR/{}",
                    rng.random_int(100_000_000_000, 999_999_999_999),
                    rng.pick(&BILLERS)
                ),
                6 => format!("CASH/WDL/BR/{}", rng.pick(&BRANCH_CODES)),
                7 => format!(
                    "SI/{}/{}",
                    rng.pick(&SI_TYPES),
                    rng.random_int(10_000_000, 99_999_999)
                ),
                8 => format!(
                    "EMI/{}/{}",
                    rng.pick(&LOAN_TYPES),
                    rng.random_int(100_000_000, 999_999_999)
                ),
                9 => format!("CHQ/CLR/{}", rng.random_int(100_000, 999_999)),
                10 => format!(
                    "UPI/{}/DR/Goog/UTIB/yrecharge@icici",
                    rng.random_int(100_000_000_000, 999_999_999_999)
                ),
                11 => format!(
                    "AUTOPAY/{}/DR/{}",
                    rng.random_int(100_000_000_000, 999_999_999_999),
                    rng.pick(&AUTOPAY_SERVICES)
                ),
                12 => format!("DC/AMC/****{}", rng.random_int(1000, 9999)),
                _ => "SMS/CHARGES/MONTHLY".to_string(),
            },
        };
        let reference = format!("S{}", rng.random_int(10_000_000, 99_999_999));
        StyledTransaction::new(description, reference)
    }

    fn salary_credit(&self, employer: &str, ctx: &mut GenerationContext) -> SalaryCredit {
        let rng = &mut ctx.rng;
        let employer = employer.to_uppercase().replace(' ', "");
        SalaryCredit {
            description: format!(
                "SAL/{}/CR/{}/NEFT",
                rng.random_int(100_000_000_000, 999_999_999_999),
                employer
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
    let merchant = *rng.pick(&UPI_MERCHANTS);
    let bank = *rng.pick(&UPI_BANKS);
    let handle = *rng.pick(&UPI_HANDLES);
    if is_credit {
        format!("UPI/{}/CR/{}/{}/{}/", ref_number, merchant, bank, handle)
    } else {
        format!("UPI/{}/DR/{}/{}/{}", ref_number, merchant, bank, handle)
    }
}

fn rail(rail: &str, is_credit: bool, rng: &mut SeededRng) -> String {
    let ref_number = rng.random_int(100_000_000_000, 999_999_999_999);
    let bank = *rng.pick(&UPI_BANKS);
    if is_credit {
        format!("{}/{}/CR/{}/", rail, ref_number, bank)
    } else {
        format!("{}/{}/DR/{}", rail, ref_number, bank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StatementDetails;
    use regex::Regex;

    #[test]
    fn references_match_the_s_prefixed_shape() {
        let mut ctx = GenerationContext::new(33, &StatementDetails::default());
        let date = NaiveDate::from_ymd_opt(2025, 7, 7).unwrap();
        let shape = Regex::new(r"^S\d{8}$").unwrap();
        for _ in 0..50 {
            let txn = IndusindProfile.transaction(TxnKind::Credit, date, &mut ctx);
            assert!(shape.is_match(&txn.reference));
        }
        assert!(shape.is_match(&IndusindProfile.reference(date, &mut ctx)));
    }

    #[test]
    fn salary_credit_strips_employer_spaces() {
        let mut ctx = GenerationContext::new(34, &StatementDetails::default());
        let salary = IndusindProfile.salary_credit("Blue Ocean Supplies", &mut ctx);
        assert!(salary.description.contains("BLUEOCEANSUPPLIES"));
        assert!(salary.description.ends_with("/NEFT"));
    }
}
