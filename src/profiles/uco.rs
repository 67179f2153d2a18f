//! UCO Bank style table: `UCOR`-prefixed twelve-digit references, a heavily
//! UPI mix of VPA-to-VPA narrations, and small NEFT/IMPS/ATM/charge tails.

use chrono::NaiveDate;

use super::{BankStyleProfile, SalaryCredit, StyledTransaction, TxnKind};
use crate::context::GenerationContext;
use crate::rng::SeededRng;

pub struct UcoProfile;

const UPI_HANDLES: [&str; 8] = [
    "@ybl", "@paytm", "@okaxis", "@okicici", "@ibl", "@upi", "@oksbi", "@axisbank",
];

const ONLINE_BUSINESSES: [&str; 28] = [
    "flipkart", "amazon", "swiggy", "zomato", "uber", "ola",
    "bigbasket", "myntra", "ajio", "meesho", "dunzo", "zepto",
    "blinkit", "dmart", "reliance", "jiomart", "makemytrip", "goibibo",
    "bookmyshow", "paytmmall", "snapdeal", "shopclues", "firstcry",
    "pepperfry", "urbancompany", "housejoy", "justdial", "magicbricks",
];

const LOCAL_BUSINESSES: [&str; 12] = [
    "maheshwripetroleum", "rajenterprises", "shivtraders", "ramstores",
    "laxmigenstore", "sainathkirana", "ganeshmedical", "hanumansweets",
    "krishnaelectronics", "durgatextiles", "saraswatibooks", "kaligarments",
];

const LOCAL_HANDLES: [&str; 3] = ["@hdfcbank", "@okicici", "@okaxis"];
const ONLINE_HANDLES: [&str; 3] = ["@paytm", "@ybl", "@axisbank"];

const UPI_APPS: [(f64, &str); 6] = [
    (0.45, "PhonePe"),
    (0.75, "Google Pay"),
    (0.90, "Paytm"),
    (0.95, "BHIM"),
    (0.98, "Amazon Pay"),
    (1.00, "WhatsApp"),
];

const CHARGES: [&str; 4] = [
    "SMS CHARGES", "DEBIT CARD AMC", "ACCOUNT MAINT CHARGES", "CHEQUE BOOK CHARGES",
];

const POS_MERCHANTS: [&str; 6] = ["BIG BAZAAR", "DMART", "RELIANCE", "MORE", "SPENCERS", "VISHAL MEGA"];

const QR_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

const UPI_DEBIT_SHARE: f64 = 0.85;
const UPI_CREDIT_SHARE: f64 = 0.80;

impl BankStyleProfile for UcoProfile {
    fn name(&self) -> &'static str {
        "UCO"
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

        let reference = uco_reference(rng);
        StyledTransaction::new(description, reference)
    }

    fn salary_credit(&self, employer: &str, ctx: &mut GenerationContext) -> SalaryCredit {
        let rng = &mut ctx.rng;
        let description = format!(
            "NEFT CR-N{}-{}",
            rng.random_int(1_000_000_000, 9_999_999_999),
            employer.to_uppercase()
        );
        SalaryCredit {
            description,
            reference: uco_reference(rng),
        }
    }

    fn reference(&self, _date: NaiveDate, ctx: &mut GenerationContext) -> String {
        uco_reference(&mut ctx.rng)
    }
}

fn uco_reference(rng: &mut SeededRng) -> String {
    format!("UCOR{}", rng.random_int(100_000_000_000, 999_999_999_999))
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
    let to = if recipient_type < 0.35 {
        qcode_vpa(rng)
    } else if recipient_type < 0.55 {
        paytm_qr(rng)
    } else if recipient_type < 0.75 {
        business_vpa(rng)
    } else if recipient_type < 0.90 {
        person_vpa(rng)
    } else {
        vyapar_vpa(rng)
    };

    format!(
        "UPI/{}/From:{}/To:{}/Payment from {}",
        reference,
        from,
        to,
        upi_app(rng)
    )
}

fn upi_credit(rng: &mut SeededRng) -> String {
    let reference = rng.random_int(100_000_000_000, 999_999_999_999);
    let to = person_vpa(rng);

    let sender_type = rng.next_f64();
    let from = if sender_type < 0.75 {
        person_vpa(rng)
    } else if sender_type < 0.90 {
        business_vpa(rng)
    } else {
        vyapar_vpa(rng)
    };

    format!(
        "UPI/{}/From:{}/To:{}/Payment from {}",
        reference,
        from,
        to,
        upi_app(rng)
    )
}

fn other_debit(rng: &mut SeededRng) -> String {
    let draw = rng.next_f64();
    if draw < 0.35 {
        let prefix = if rng.next_f64() < 0.5 { "ATM-" } else { "UCO ATM-" };
        format!("{}{}/WDL", prefix, rng.random_int(100_000, 999_999))
    } else if draw < 0.60 {
        let beneficiary = if rng.next_f64() < 0.5 {
            "TO BENEFICIARY"
        } else {
            "TRANSFER TO A/C"
        };
        format!(
            "IMPS/{}/{}",
            rng.random_int(100_000_000_000, 999_999_999_999),
            beneficiary
        )
    } else if draw < 0.80 {
        format!(
            "NEFT CR-N{}-CUSTOMER TRANSFER",
            rng.random_int(1_000_000_000, 9_999_999_999)
        )
    } else if draw < 0.90 {
        (*rng.pick(&CHARGES)).to_string()
    } else {
        format!("POS {}/CARD", rng.pick(&POS_MERCHANTS))
    }
}

fn other_credit(rng: &mut SeededRng) -> String {
    let draw = rng.next_f64();
    if draw < 0.50 {
        format!(
            "NEFT CR-N{}-FROM CUSTOMER",
            rng.random_int(1_000_000_000, 9_999_999_999)
        )
    } else if draw < 0.80 {
        format!(
            "IMPS/{}/FROM REMITTER",
            rng.random_int(100_000_000_000, 999_999_999_999)
        )
    } else if draw < 0.95 {
        "CASH DEPOSIT".to_string()
    } else {
        "INT CREDITED".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StatementDetails;
    use regex::Regex;

    #[test]
    fn references_carry_the_ucor_prefix() {
        let mut ctx = GenerationContext::new(60, &StatementDetails::default());
        let date = NaiveDate::from_ymd_opt(2025, 4, 4).unwrap();
        let shape = Regex::new(r"^UCOR\d{12}$").unwrap();
        for _ in 0..50 {
            assert!(shape.is_match(&UcoProfile.reference(date, &mut ctx)));
        }
    }

    #[test]
    fn salary_rides_the_neft_rail() {
        let mut ctx = GenerationContext::new(61, &StatementDetails::default());
        let salary = UcoProfile.salary_credit("Frontier Motors", &mut ctx);
        assert!(salary.description.starts_with("NEFT CR-N"));
        assert!(salary.description.ends_with("FRONTIER MOTORS"));
        assert!(salary.reference.starts_with("UCOR"));
    }
}
