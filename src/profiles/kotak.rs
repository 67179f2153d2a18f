//! Kotak Mahindra Bank style table. Kotak's modern mix is overwhelmingly
//! UPI (`UPI/{ref}/From:{vpa}/To:{vpa}/{app}`) with UTR-or-twelve-digit
//! references; the remainder splits across IMPS/NEFT, cards, and charges.

use chrono::NaiveDate;

use super::{BankStyleProfile, SalaryCredit, StyledTransaction, TxnKind};
use crate::context::GenerationContext;
use crate::rng::SeededRng;

pub struct KotakProfile;

const UPI_HANDLES: [&str; 8] = [
    "@kotak", "@ybl", "@paytm", "@okaxis", "@okicici", "@oksbi", "@ibl", "@axl",
];

const ONLINE_BUSINESSES: [&str; 25] = [
    "amazon", "flipkart", "swiggy", "zomato", "uber", "ola",
    "myntra", "ajio", "meesho", "blinkit", "zepto", "dunzo",
    "bigbasket", "jiomart", "makemytrip", "goibibo", "bookmyshow",
    "paytmmall", "netmeds", "pharmeasy", "lenskart", "nykaa",
    "urbancompany", "olacabs", "rapido",
];

const LOCAL_BUSINESSES: [&str; 15] = [
    "rameshhardware", "laxmikirana", "shreejimobiles", "ganeshstores",
    "sainathtextiles", "radhakrishnaelectronics", "shiventerprises",
    "maheshwaritraders", "jainbrothers", "prakashmedical", "dixitjewellers",
    "agrawalsweets", "guptaopticals", "sharmabooks", "vermafashion",
];

const LOCAL_HANDLES: [&str; 4] = ["@hdfcbank", "@okicici", "@okaxis", "@kotak"];
const ONLINE_HANDLES: [&str; 4] = ["@paytm", "@ybl", "@axisbank", "@kotak"];

// (cumulative weight, app name)
const UPI_APPS: [(f64, &str); 6] = [
    (0.40, "PhonePe"),
    (0.75, "Google Pay"),
    (0.87, "Paytm"),
    (0.93, "BHIM"),
    (0.97, "Amazon Pay"),
    (1.00, "WhatsApp"),
];

const CARD_MERCHANTS: [&str; 6] = ["AMAZON", "FLIPKART", "SWIGGY", "ZOMATO", "BIG BAZAAR", "DMART"];
const CHARGES: [&str; 4] = ["SMS CHARGES", "DEBIT CARD AMC", "ANNUAL CHARGES", "ACCOUNT MAINT FEE"];

const QR_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

const UPI_DEBIT_SHARE: f64 = 0.88;
const UPI_CREDIT_SHARE: f64 = 0.85;

impl BankStyleProfile for KotakProfile {
    fn name(&self) -> &'static str {
        "KOTAK"
    }

    fn transaction(
        &self,
        kind: TxnKind,
        _date: NaiveDate,
        ctx: &mut GenerationContext,
    ) -> StyledTransaction {
        let rng = &mut ctx.rng;
        let upi_share = match kind {
            TxnKind::Debit => UPI_DEBIT_SHARE,
            TxnKind::Credit => UPI_CREDIT_SHARE,
        };

        let description = if rng.next_f64() < upi_share {
            match kind {
                TxnKind::Debit => upi_debit(rng),
                TxnKind::Credit => upi_credit(rng),
            }
        } else {
            match kind {
                TxnKind::Debit => other_debit(rng),
                TxnKind::Credit => other_credit(rng),
            }
        };

        let reference = kotak_reference(rng);
        StyledTransaction::new(description, reference)
    }

    fn salary_credit(&self, employer: &str, ctx: &mut GenerationContext) -> SalaryCredit {
        let rng = &mut ctx.rng;
        let employer = employer.to_uppercase();
        let mode = rng.next_f64();
        let description = if mode < 0.6 {
            format!("NEFT IN-{}-{}", rng.random_int(1_000_000_000, 9_999_999_999), employer)
        } else if mode < 0.9 {
            format!(
                "IMPS/{}/{}-SAL",
                rng.random_int(100_000_000_000, 999_999_999_999),
                employer
            )
        } else {
            format!("SAL CREDIT-{}", employer)
        };
        let reference = kotak_reference(rng);
        SalaryCredit {
            description,
            reference,
        }
    }

    fn reference(&self, _date: NaiveDate, ctx: &mut GenerationContext) -> String {
        kotak_reference(&mut ctx.rng)
    }
}

/// UTR + sixteen digits (60%) or a plain twelve-digit sequence (40%).
fn kotak_reference(rng: &mut SeededRng) -> String {
    if rng.next_f64() < 0.6 {
        format!(
            "UTR{}",
            rng.random_int(1_000_000_000_000_000, 9_999_999_999_999_999)
        )
    } else {
        rng.random_int(100_000_000_000, 999_999_999_999).to_string()
    }
}

fn upi_app(rng: &mut SeededRng) -> &'static str {
    let draw = rng.next_f64();
    for (cutoff, app) in UPI_APPS {
        if draw < cutoff {
            return app;
        }
    }
    "PhonePe"
}

fn person_vpa(rng: &mut SeededRng) -> String {
    let phone = rng.random_int(7_000_000_000, 7_899_999_999);
    let handle = *rng.pick(&UPI_HANDLES);
    if rng.next_f64() < 0.15 {
        format!("{}-{}{}", phone, rng.random_int(1, 9), handle)
    } else {
        format!("{}{}", phone, handle)
    }
}

fn qcode_vpa(rng: &mut SeededRng) -> String {
    format!("Q{}@ybl", rng.random_int(100_000_000, 999_999_999))
}

fn paytm_qr(rng: &mut SeededRng) -> String {
    let hash: String = (0..8)
        .map(|_| QR_CHARS[(rng.next_f64() * QR_CHARS.len() as f64) as usize] as char)
        .collect();
    format!("paytmqr{}@ptys", hash)
}

fn business_vpa(rng: &mut SeededRng) -> String {
    if rng.next_f64() < 0.35 {
        let business = *rng.pick(&LOCAL_BUSINESSES);
        let handle = *rng.pick(&LOCAL_HANDLES);
        format!("{}.{}{}", business, rng.random_int(10_000_000, 99_999_999), handle)
    } else {
        let business = *rng.pick(&ONLINE_BUSINESSES);
        let handle = *rng.pick(&ONLINE_HANDLES);
        format!("{}.{}", business, handle)
    }
}

fn vyapar_vpa(rng: &mut SeededRng) -> String {
    format!("Vyapar.{}@hdfcbank", rng.random_int(100_000_000_000, 999_999_999_999))
}

fn upi_debit(rng: &mut SeededRng) -> String {
    let reference = rng.random_int(100_000_000_000, 999_999_999_999);
    let from = person_vpa(rng);

    let recipient_type = rng.next_f64();
    let to = if recipient_type < 0.30 {
        qcode_vpa(rng)
    } else if recipient_type < 0.50 {
        paytm_qr(rng)
    } else if recipient_type < 0.75 {
        business_vpa(rng)
    } else if recipient_type < 0.92 {
        person_vpa(rng)
    } else {
        vyapar_vpa(rng)
    };

    format!("UPI/{}/From:{}/To:{}/{}", reference, from, to, upi_app(rng))
}

fn upi_credit(rng: &mut SeededRng) -> String {
    let reference = rng.random_int(100_000_000_000, 999_999_999_999);
    let to = person_vpa(rng);

    let sender_type = rng.next_f64();
    let from = if sender_type < 0.70 {
        person_vpa(rng)
    } else if sender_type < 0.88 {
        business_vpa(rng)
    } else {
        vyapar_vpa(rng)
    };

    format!("UPI/{}/From:{}/To:{}/{}", reference, from, to, upi_app(rng))
}

fn other_debit(rng: &mut SeededRng) -> String {
    let draw = rng.next_f64();
    if draw < 0.30 {
        let prefix = if rng.next_f64() < 0.5 { "KOTAK ATM " } else { "ATM WDL " };
        format!("{}{}", prefix, rng.random_int(100_000, 999_999))
    } else if draw < 0.55 {
        format!(
            "IMPS/{}/TO BENEFICIARY",
            rng.random_int(100_000_000_000, 999_999_999_999)
        )
    } else if draw < 0.75 {
        format!("NEFT OUT-{}", rng.random_int(1_000_000_000, 9_999_999_999))
    } else if draw < 0.90 {
        format!("CARD PURCHASE-{}", rng.pick(&CARD_MERCHANTS))
    } else {
        (*rng.pick(&CHARGES)).to_string()
    }
}

fn other_credit(rng: &mut SeededRng) -> String {
    let draw = rng.next_f64();
    if draw < 0.45 {
        format!("NEFT IN-{}", rng.random_int(1_000_000_000, 9_999_999_999))
    } else if draw < 0.80 {
        format!(
            "IMPS/{}/FROM REMITTER",
            rng.random_int(100_000_000_000, 999_999_999_999)
        )
    } else if draw < 0.92 {
        "CASH DEPOSIT".to_string()
    } else {
        "INTEREST CREDITED".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StatementDetails;
    use regex::Regex;

    #[test]
    fn references_are_utr_or_twelve_digits() {
        let mut ctx = GenerationContext::new(50, &StatementDetails::default());
        let date = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
        let utr = Regex::new(r"^UTR\d{16}$").unwrap();
        let plain = Regex::new(r"^\d{12}$").unwrap();
        let mut seen_utr = false;
        let mut seen_plain = false;
        for _ in 0..100 {
            let reference = KotakProfile.reference(date, &mut ctx);
            assert!(utr.is_match(&reference) || plain.is_match(&reference));
            seen_utr |= utr.is_match(&reference);
            seen_plain |= plain.is_match(&reference);
        }
        assert!(seen_utr && seen_plain);
    }

    #[test]
    fn upi_rows_dominate_debits() {
        let mut ctx = GenerationContext::new(51, &StatementDetails::default());
        let date = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
        let upi_rows = (0..500)
            .filter(|_| {
                KotakProfile
                    .transaction(TxnKind::Debit, date, &mut ctx)
                    .description
                    .starts_with("UPI/")
            })
            .count();
        assert!(upi_rows > 400);
    }

    #[test]
    fn upi_rows_name_both_ends() {
        let mut ctx = GenerationContext::new(52, &StatementDetails::default());
        let date = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
        for _ in 0..100 {
            let txn = KotakProfile.transaction(TxnKind::Credit, date, &mut ctx);
            if txn.description.starts_with("UPI/") {
                assert!(txn.description.contains("From:"));
                assert!(txn.description.contains("To:"));
            }
        }
    }
}
