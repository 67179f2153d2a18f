//! Union Bank of India style table: `@unionbank` sender VPAs with a `91`
//! phone prefix, dotted person-name VPAs on the receiving side, and a
//! 70/30 split between plain twelve-digit and `UTR` sixteen-digit
//! references.

use chrono::NaiveDate;

use super::{weighted_pick, BankStyleProfile, SalaryCredit, StyledTransaction, TxnKind};
use crate::context::GenerationContext;
use crate::rng::SeededRng;

pub struct UnionProfile;

const QCODE_MERCHANT_DIGITS: i64 = 999_999;

const PAYTM_MERCHANT_DIGITS: i64 = 99_999_999;

const BUSINESS_VPAS: [&str; 15] = [
    "amazon.payments", "flipkart.payments", "myntra.shopping",
    "swiggy.food", "zomato.dining", "bookmyshow.tickets",
    "makemytrip.travel", "redbus.tickets", "bigbasket.grocery",
    "grofers.fresh", "dunzo.delivery", "urbancompany.services",
    "practo.health", "lenskart.eyewear", "nykaa.beauty",
];

const BUSINESS_HANDLES: [&str; 6] = [
    "@axisbank", "@icici", "@hdfcbank", "@paytm", "@ybl", "@unionbank",
];

const P2P_DEBIT_NAMES: [&str; 15] = [
    "rajesh.kumar", "amit.sharma", "priya.singh", "suresh.patel",
    "anjali.verma", "vikram.reddy", "neha.gupta", "rahul.jain",
    "pooja.shah", "manoj.yadav", "deepak.nair", "kavita.iyer",
    "sandeep.menon", "ritu.agarwal", "arun.pillai",
];

const P2P_CREDIT_NAMES: [&str; 15] = [
    "mukesh.aggarwal", "sunita.kapoor", "vikas.malhotra", "nisha.bansal",
    "ashok.saxena", "rekha.chopra", "rajiv.khanna", "anita.arora",
    "sanjay.bhatia", "meena.sethi", "gopal.taneja", "usha.sehgal",
    "pankaj.goel", "vandana.tiwari", "harish.mehta",
];

const P2P_HANDLES: [&str; 7] = [
    "@ybl", "@paytm", "@okaxis", "@okicici", "@ibl", "@unionbank", "@upi",
];

const VYAPAR_DEBIT_BUSINESSES: [&str; 12] = [
    "ramelectronics", "jaiopticals", "shrimedical", "omkarhardware",
    "laxmitextiles", "ganeshjewellers", "sairamstores", "balajifootwear",
    "vishwafurniture", "krishnagarments", "mahalaxmisarees", "shivautomobiles",
];

const VYAPAR_CREDIT_BUSINESSES: [&str; 6] = [
    "tradersassociation", "merchantguild", "shopkeeperunion",
    "retailernetwork", "vendorplatform", "businesshub",
];

const CREDIT_BUSINESS_VPAS: [&str; 9] = [
    "freelance.payment", "consulting.fees", "tuition.income",
    "rental.collection", "commission.earned", "refund.zomato",
    "refund.amazon", "cashback.paytm", "reward.googlepay",
];

const CREDIT_BUSINESS_HANDLES: [&str; 5] = ["@axisbank", "@icici", "@hdfcbank", "@paytm", "@ybl"];

const APPS: [(u32, &str); 5] = [
    (38, "PhonePe"),
    (33, "Google Pay"),
    (16, "Paytm"),
    (8, "Amazon Pay"),
    (5, "BHIM"),
];

const IMPS_DEBIT_BENEFICIARIES: [&str; 4] =
    ["UTILITY BILL", "INSURANCE PREMIUM", "LOAN EMI", "CREDIT CARD"];
const NEFT_DEBIT_BENEFICIARIES: [&str; 4] =
    ["MUTUAL FUND", "INVESTMENT", "INSURANCE", "LOAN REPAYMENT"];
const IMPS_CREDIT_SOURCES: [&str; 4] = ["CLIENT PAYMENT", "REFUND", "DIVIDEND", "INTEREST"];
const NEFT_CREDIT_SOURCES: [&str; 4] = ["BUSINESS INCOME", "RENTAL INCOME", "COMMISSION", "BONUS"];
const ATM_LOCATIONS: [&str; 7] =
    ["DELHI", "MUMBAI", "BANGALORE", "CHENNAI", "HYDERABAD", "PUNE", "KOLKATA"];
const CARD_MERCHANTS: [&str; 5] = ["AMAZON", "FLIPKART", "SWIGGY", "ZOMATO", "UBER"];

const UPI_DEBIT_SHARE: f64 = 0.80;
const UPI_CREDIT_SHARE: f64 = 0.77;

#[derive(Clone, Copy)]
enum DebitRecipient {
    QCode,
    PaytmQr,
    Business,
    PersonToPerson,
    Vyapar,
}

const DEBIT_RECIPIENTS: [(u32, DebitRecipient); 5] = [
    (33, DebitRecipient::QCode),
    (21, DebitRecipient::PaytmQr),
    (23, DebitRecipient::Business),
    (15, DebitRecipient::PersonToPerson),
    (8, DebitRecipient::Vyapar),
];

#[derive(Clone, Copy)]
enum CreditSender {
    PersonToPerson,
    Business,
    Vyapar,
}

const CREDIT_SENDERS: [(u32, CreditSender); 3] = [
    (73, CreditSender::PersonToPerson),
    (16, CreditSender::Business),
    (11, CreditSender::Vyapar),
];

impl BankStyleProfile for UnionProfile {
    fn name(&self) -> &'static str {
        "UNION"
    }

    fn transaction(
        &self,
        kind: TxnKind,
        _date: NaiveDate,
        ctx: &mut GenerationContext,
    ) -> StyledTransaction {
        let rng = &mut ctx.rng;
        let reference = union_reference(rng);
        let upi_share = match kind {
            TxnKind::Debit => UPI_DEBIT_SHARE,
            TxnKind::Credit => UPI_CREDIT_SHARE,
        };

        if rng.next_f64() < upi_share {
            let phone = format!("91{:010}", rng.random_int(0, 9_999_999_999));
            let app = *weighted_pick(&APPS, rng);
            let description = match kind {
                TxnKind::Debit => {
                    let recipient = debit_recipient(rng);
                    format!(
                        "UPI/{}/From:{}@unionbank/To:{}/Payment from {}",
                        reference, phone, recipient, app
                    )
                }
                TxnKind::Credit => {
                    let sender = credit_sender(rng);
                    format!(
                        "UPI/{}/From:{}/To:{}@unionbank/Payment from {}",
                        reference, sender, phone, app
                    )
                }
            };
            return StyledTransaction::new(description, reference);
        }

        let txn_id = format!("{:09}", rng.random_int(0, 999_999_999));
        let description = match kind {
            TxnKind::Debit => {
                let draw = rng.next_f64();
                if draw < 0.35 {
                    format!("IMPS-{}-{}", rng.pick(&IMPS_DEBIT_BENEFICIARIES), reference)
                } else if draw < 0.65 {
                    format!("NEFT-{}-{}", rng.pick(&NEFT_DEBIT_BENEFICIARIES), reference)
                } else if draw < 0.85 {
                    format!("ATM WITHDRAWAL {} {}", rng.pick(&ATM_LOCATIONS), txn_id)
                } else {
                    format!("CARD POS {} {}", rng.pick(&CARD_MERCHANTS), txn_id)
                }
            }
            TxnKind::Credit => {
                let draw = rng.next_f64();
                if draw < 0.40 {
                    format!("IMPS-{}-{}", rng.pick(&IMPS_CREDIT_SOURCES), reference)
                } else if draw < 0.75 {
                    format!("NEFT-{}-{}", rng.pick(&NEFT_CREDIT_SOURCES), reference)
                } else if draw < 0.90 {
                    format!("CASH DEPOSIT BR:{:04}", rng.random_int(0, 9999))
                } else {
                    format!("CHEQUE DEPOSIT CHQ:{:06}", rng.random_int(0, 999_999))
                }
            }
        };
        StyledTransaction::new(description, reference)
    }

    fn salary_credit(&self, employer: &str, ctx: &mut GenerationContext) -> SalaryCredit {
        let rng = &mut ctx.rng;
        let employer = employer.to_uppercase();
        let mode = rng.next_f64();
        let description = if mode < 0.45 {
            format!(
                "NEFT-{}-{:012}-SAL",
                employer,
                rng.random_int(0, 999_999_999_999)
            )
        } else if mode < 0.75 {
            format!("IMPS-{}-{:012}", employer, rng.random_int(0, 999_999_999_999))
        } else {
            format!("SALARY CREDIT-{}", employer)
        };
        let reference = union_reference(rng);
        SalaryCredit {
            description,
            reference,
        }
    }

    fn reference(&self, _date: NaiveDate, ctx: &mut GenerationContext) -> String {
        union_reference(&mut ctx.rng)
    }
}

/// Twelve zero-padded digits (70%) or `UTR` + sixteen digits (30%).
fn union_reference(rng: &mut SeededRng) -> String {
    if rng.next_f64() < 0.7 {
        format!("{:012}", rng.random_int(0, 999_999_999_999))
    } else {
        format!("UTR{:016}", rng.random_int(0, 9_999_999_999_999_999))
    }
}

fn debit_recipient(rng: &mut SeededRng) -> String {
    match *weighted_pick(&DEBIT_RECIPIENTS, rng) {
        DebitRecipient::QCode => {
            format!("Q{:06}@paytm", rng.random_int(0, QCODE_MERCHANT_DIGITS))
        }
        DebitRecipient::PaytmQr => {
            format!("paytmqr{:08}@paytm", rng.random_int(0, PAYTM_MERCHANT_DIGITS))
        }
        DebitRecipient::Business => {
            let business = *rng.pick(&BUSINESS_VPAS);
            let handle = *rng.pick(&BUSINESS_HANDLES);
            format!("{}{}", business, handle)
        }
        DebitRecipient::PersonToPerson => {
            let name = *rng.pick(&P2P_DEBIT_NAMES);
            let handle = *rng.pick(&P2P_HANDLES);
            format!("{}{}", name, handle)
        }
        DebitRecipient::Vyapar => {
            let business = *rng.pick(&VYAPAR_DEBIT_BUSINESSES);
            format!("{}.vyapar@icici", business)
        }
    }
}

fn credit_sender(rng: &mut SeededRng) -> String {
    match *weighted_pick(&CREDIT_SENDERS, rng) {
        CreditSender::PersonToPerson => {
            let name = *rng.pick(&P2P_CREDIT_NAMES);
            let handle = *rng.pick(&P2P_HANDLES);
            format!("{}{}", name, handle)
        }
        CreditSender::Business => {
            let business = *rng.pick(&CREDIT_BUSINESS_VPAS);
            let handle = *rng.pick(&CREDIT_BUSINESS_HANDLES);
            format!("{}{}", business, handle)
        }
        CreditSender::Vyapar => {
            let business = *rng.pick(&VYAPAR_CREDIT_BUSINESSES);
            format!("{}.vyapar@icici", business)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StatementDetails;
    use regex::Regex;

    #[test]
    fn references_are_padded_digits_or_utr() {
        let mut ctx = GenerationContext::new(80, &StatementDetails::default());
        let date = NaiveDate::from_ymd_opt(2025, 10, 10).unwrap();
        let shape = Regex::new(r"^\d{12}$|^UTR\d{16}$").unwrap();
        for _ in 0..100 {
            assert!(shape.is_match(&UnionProfile.reference(date, &mut ctx)));
        }
    }

    #[test]
    fn upi_rows_use_the_unionbank_handle() {
        let mut ctx = GenerationContext::new(81, &StatementDetails::default());
        let date = NaiveDate::from_ymd_opt(2025, 10, 10).unwrap();
        let mut seen_upi = false;
        for _ in 0..100 {
            let txn = UnionProfile.transaction(TxnKind::Debit, date, &mut ctx);
            if txn.description.starts_with("UPI/") {
                assert!(txn.description.contains("@unionbank"));
                seen_upi = true;
            }
        }
        assert!(seen_upi);
    }

    #[test]
    fn credit_senders_rotate_across_pools() {
        let mut ctx = GenerationContext::new(82, &StatementDetails::default());
        let date = NaiveDate::from_ymd_opt(2025, 10, 10).unwrap();
        let mut vyapar = false;
        for _ in 0..400 {
            let txn = UnionProfile.transaction(TxnKind::Credit, date, &mut ctx);
            vyapar |= txn.description.contains(".vyapar@icici");
        }
        assert!(vyapar);
    }
}
