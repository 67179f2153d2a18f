//! Canara Bank style table: plain numeric references in three lengths, the
//! bank's own `@cnrb` handle in the VPA pools, and NEFT/IMPS/direct salary
//! formats.

use chrono::NaiveDate;

use super::{BankStyleProfile, SalaryCredit, StyledTransaction, TxnKind};
use crate::context::GenerationContext;
use crate::rng::SeededRng;

pub struct CanaraProfile;

const UPI_HANDLES: [&str; 8] = [
    "@cnrb", "@ybl", "@paytm", "@okaxis", "@okicici", "@oksbi", "@ibl", "@upi",
];

const ONLINE_BUSINESSES: [&str; 22] = [
    "amazon", "flipkart", "swiggy", "zomato", "uber", "ola",
    "myntra", "ajio", "meesho", "blinkit", "zepto", "bigbasket",
    "jiomart", "makemytrip", "goibibo", "bookmyshow", "paytmmall",
    "netmeds", "pharmeasy", "lenskart", "nykaa", "snapdeal",
];

const LOCAL_BUSINESSES: [&str; 14] = [
    "sairamstores", "lakshmimedical", "ganeshenterprises", "shivahardware",
    "radhakrishnaelectronics", "hanumantraders", "durgatextiles",
    "saraswatibooks", "venkateswaramobiles", "muruganpetroleum",
    "anjaneyadairy", "krishnasweets", "balajifurniture", "nagaopticals",
];

const LOCAL_HANDLES: [&str; 4] = ["@hdfcbank", "@okicici", "@cnrb", "@okaxis"];
const ONLINE_HANDLES: [&str; 4] = ["@paytm", "@ybl", "@axisbank", "@cnrb"];

const UPI_APPS: [(f64, &str); 6] = [
    (0.42, "PhonePe"),
    (0.74, "Google Pay"),
    (0.88, "Paytm"),
    (0.95, "BHIM"),
    (0.98, "Amazon Pay"),
    (1.00, "WhatsApp"),
];

const POS_MERCHANTS: [&str; 6] = ["DMart", "Big Bazaar", "Reliance", "More", "Spencers", "Hypercity"];
const CHARGES: [&str; 4] = ["SMS CHARGES", "DEBIT CARD ANNUAL FEE", "ACCOUNT CHARGES", "CHEQUE BOOK"];

const QR_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

const UPI_DEBIT_SHARE: f64 = 0.82;
const UPI_CREDIT_SHARE: f64 = 0.78;

impl BankStyleProfile for CanaraProfile {
    fn name(&self) -> &'static str {
        "CANARA"
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

        let reference = canara_reference(rng);
        StyledTransaction::new(description, reference)
    }

    fn salary_credit(&self, employer: &str, ctx: &mut GenerationContext) -> SalaryCredit {
        let rng = &mut ctx.rng;
        let employer = employer.to_uppercase();
        let mode = rng.next_f64();
        let description = if mode < 0.55 {
            format!(
                "NEFT{}/{}/SALARY",
                rng.random_int(100_000_000_000, 999_999_999_999),
                employer
            )
        } else if mode < 0.85 {
            format!(
                "IMPS/{}/{}-SAL",
                rng.random_int(100_000_000_000, 999_999_999_999),
                employer
            )
        } else {
            format!("SALARY CREDIT-{}", employer)
        };
        let reference = canara_reference(rng);
        SalaryCredit {
            description,
            reference,
        }
    }

    fn reference(&self, _date: NaiveDate, ctx: &mut GenerationContext) -> String {
        canara_reference(&mut ctx.rng)
    }
}

/// Twelve (50%), fourteen (30%), or sixteen (20%) digit references.
fn canara_reference(rng: &mut SeededRng) -> String {
    let draw = rng.next_f64();
    if draw < 0.5 {
        rng.random_int(100_000_000_000, 999_999_999_999).to_string()
    } else if draw < 0.8 {
        rng.random_int(10_000_000_000_000, 99_999_999_999_999).to_string()
    } else {
        rng.random_int(1_000_000_000_000_000, 9_999_999_999_999_999)
            .to_string()
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
    if rng.next_f64() < 0.12 {
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
    if rng.next_f64() < 0.4 {
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
    let to = if recipient_type < 0.32 {
        qcode_vpa(rng)
    } else if recipient_type < 0.54 {
        paytm_qr(rng)
    } else if recipient_type < 0.76 {
        business_vpa(rng)
    } else if recipient_type < 0.91 {
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
    let from = if sender_type < 0.72 {
        person_vpa(rng)
    } else if sender_type < 0.89 {
        business_vpa(rng)
    } else {
        vyapar_vpa(rng)
    };

    format!("UPI/{}/From:{}/To:{}/{}", reference, from, to, upi_app(rng))
}

fn other_debit(rng: &mut SeededRng) -> String {
    let draw = rng.next_f64();
    if draw < 0.35 {
        let prefix = if rng.next_f64() < 0.5 { "ATM WDL-" } else { "CANARA ATM-" };
        format!("{}{}", prefix, rng.random_int(100_000, 999_999))
    } else if draw < 0.60 {
        format!(
            "IMPS/{}/TRANSFER",
            rng.random_int(100_000_000_000, 999_999_999_999)
        )
    } else if draw < 0.80 {
        format!("NEFT{}", rng.random_int(100_000_000_000, 999_999_999_999))
    } else if draw < 0.92 {
        format!("POS-{}", rng.pick(&POS_MERCHANTS))
    } else {
        (*rng.pick(&CHARGES)).to_string()
    }
}

fn other_credit(rng: &mut SeededRng) -> String {
    let draw = rng.next_f64();
    if draw < 0.48 {
        format!("NEFT{}/CR", rng.random_int(100_000_000_000, 999_999_999_999))
    } else if draw < 0.80 {
        format!(
            "IMPS/{}/CREDIT",
            rng.random_int(100_000_000_000, 999_999_999_999)
        )
    } else if draw < 0.93 {
        "CASH DEPOSIT".to_string()
    } else {
        "INTEREST CREDIT".to_string()
    }
}
