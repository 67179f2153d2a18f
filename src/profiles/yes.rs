//! YES Bank style table. Almost everything rides UPI here: VPA-to-VPA
//! narrations with synthesized person, Q-code, Paytm-QR, and business VPAs,
//! a `YBS` day-of-year reference, and the bank's own modeled amount tiers.

use chrono::{Datelike, NaiveDate};

use super::{BankStyleProfile, SalaryCredit, StyledTransaction, TxnKind};
use crate::context::GenerationContext;
use crate::rng::SeededRng;

pub struct YesProfile;

const PERSON_NAMES: [&str; 20] = [
    "DIVYANSH PATEL", "MAYANK SAHU", "ANIKET PATEL", "SATENDRA PATEL",
    "PRADEEP KUMAR", "RAJESH SHARMA", "AMIT VERMA", "NEHA SINGH",
    "VIKRAM GUPTA", "PRIYA MEHTA", "RAHUL MISHRA", "SNEHA REDDY",
    "KARAN SINGH", "POOJA SHARMA", "ARUN KUMAR", "DEEPAK YADAV",
    "SANJAY PATEL", "ANJALI GUPTA", "MANOJ TIWARI", "KAVITA SINGH",
];

const BUSINESS_NAMES: [&str; 12] = [
    "maheshwripetroleum", "relianc efresh", "kiranamartshop", "medicalstore",
    "petrolpump", "restaurantcafe", "grocerymart", "mobileshop",
    "clothingstore", "electronicshop", "bookstall", "stationary",
];

const UPI_HANDLES: [&str; 7] = ["@ybl", "@ibl", "@paytm", "@ptys", "@okbizaxis", "@hdfcbank", "@axisbank"];

const PAYMENT_APPS: [&str; 5] = [
    "Payment from PhonePe",
    "Payment from GPay",
    "Payment from Paytm",
    "Payment from BHIM UPI",
    "Payment from Amazon Pay",
];

const QR_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

impl BankStyleProfile for YesProfile {
    fn name(&self) -> &'static str {
        "YES"
    }

    fn transaction(
        &self,
        kind: TxnKind,
        date: NaiveDate,
        ctx: &mut GenerationContext,
    ) -> StyledTransaction {
        let reference = self.reference(date, ctx);
        let rng = &mut ctx.rng;
        let mode = rng.next_f64();

        if mode < 0.9 {
            let (description, amount) = match kind {
                TxnKind::Debit => upi_debit(rng),
                TxnKind::Credit => upi_credit(rng),
            };
            return StyledTransaction::new(description, reference).with_amount(amount);
        }

        if mode < 0.95 {
            let amount = rng.random_int(500, 10_000) as f64;
            let description = match kind {
                TxnKind::Debit => "CASH WITHDRAWAL AT BRANCH",
                TxnKind::Credit => "CASH DEPOSIT AT BRANCH",
            };
            return StyledTransaction::new(description, reference).with_amount(amount);
        }

        let name = *rng.pick(&PERSON_NAMES);
        let txn_id = rng.random_int(100_000_000_000, 999_999_999_999);
        let tier = rng.next_f64();
        let amount = if tier < 0.65 {
            rng.random_int(1500, 6000) as f64
        } else if tier < 0.88 {
            rng.random_int(6000, 12_000) as f64
        } else {
            rng.random_int(12_000, 20_000) as f64
        };
        let rail = if rng.next_f64() < 0.5 { "NEFT" } else { "IMPS" };
        let direction = match kind {
            TxnKind::Debit => "DR",
            TxnKind::Credit => "CR",
        };
        let description = format!("{}/{}/{}/{}", rail, direction, txn_id, name);
        StyledTransaction::new(description, reference).with_amount(amount)
    }

    fn salary_credit(&self, employer: &str, ctx: &mut GenerationContext) -> SalaryCredit {
        let rng = &mut ctx.rng;
        let description = format!(
            "NEFT/CR/{}/{}",
            rng.random_int(100_000_000_000, 999_999_999_999),
            employer.to_uppercase()
        );
        // No booking date flows into salary synthesis, so the reference
        // carries a drawn day-of-year instead of a fixed one.
        let digits = format!(
            "{:03}{:02}{}",
            rng.random_int(1, 365),
            rng.random_int(24, 25),
            rng.random_int(10_000_000, 99_999_999)
        );
        let clipped: String = digits.chars().take(13).collect();
        SalaryCredit {
            description,
            reference: format!("YBS{}", clipped),
        }
    }

    /// `YBS` + day-of-year + two-digit year + an eight-digit sequence,
    /// clipped to thirteen digits after the prefix.
    fn reference(&self, date: NaiveDate, ctx: &mut GenerationContext) -> String {
        yes_reference(date, &mut ctx.rng)
    }
}

fn yes_reference(date: NaiveDate, rng: &mut SeededRng) -> String {
    let year = date.year() % 100;
    let day_of_year = date.ordinal();
    let digits = format!(
        "{:03}{:02}{}",
        day_of_year,
        year,
        rng.random_int(10_000_000, 99_999_999)
    );
    let clipped: String = digits.chars().take(13).collect();
    format!("YBS{}", clipped)
}

fn person_vpa(rng: &mut SeededRng) -> String {
    let phone = format!(
        "{}{}",
        rng.random_int(7, 9),
        rng.random_int(100_000_000, 999_999_999)
    );
    let handle = UPI_HANDLES[rng.random_int(0, 2) as usize];
    if rng.next_f64() < 0.7 {
        format!("{}{}", phone, handle)
    } else {
        format!("{}-{}{}", phone, rng.random_int(1, 5), handle)
    }
}

fn qcode_vpa(rng: &mut SeededRng) -> String {
    format!("Q{}@ybl", rng.random_int(100_000_000, 999_999_999))
}

fn paytm_qr(rng: &mut SeededRng) -> String {
    let length = rng.random_int(5, 8);
    let hash: String = (0..length)
        .map(|_| QR_CHARS[(rng.next_f64() * QR_CHARS.len() as f64) as usize] as char)
        .collect();
    if rng.next_f64() < 0.6 {
        format!("paytmqr{}@ptys", hash)
    } else {
        format!("paytm.{}@pty", hash)
    }
}

fn business_vpa(rng: &mut SeededRng) -> String {
    if rng.next_f64() < 0.3 {
        format!("Vyapar.{}@hdfcbank", rng.random_int(100_000_000_000, 999_999_999_999))
    } else {
        let business = *rng.pick(&BUSINESS_NAMES);
        format!("{}.{}@hdfcbank", business, rng.random_int(10_000_000, 99_999_999))
    }
}

fn upi_debit(rng: &mut SeededRng) -> (String, f64) {
    let upi_ref = rng.random_int(100_000_000_000, 999_999_999_999);
    let sender_phone = format!(
        "{}{}",
        rng.random_int(7, 9),
        rng.random_int(100_000_000, 999_999_999)
    );
    let app = *rng.pick(&PAYMENT_APPS);

    let recipient_type = rng.next_f64();
    let recipient = if recipient_type < 0.35 {
        person_vpa(rng)
    } else if recipient_type < 0.7 {
        qcode_vpa(rng)
    } else if recipient_type < 0.85 {
        paytm_qr(rng)
    } else {
        business_vpa(rng)
    };

    let description = format!("UPI/{}/From:{}@ybl/To:{}/{}", upi_ref, sender_phone, recipient, app);

    let tier = rng.next_f64();
    let amount = if tier < 0.6 {
        rng.random_int(50, 800) as f64
    } else if tier < 0.85 {
        rng.random_int(800, 2500) as f64
    } else if tier < 0.96 {
        rng.random_int(2500, 5000) as f64
    } else {
        rng.random_int(5000, 10_000) as f64
    };

    (description, amount)
}

fn upi_credit(rng: &mut SeededRng) -> (String, f64) {
    let upi_ref = rng.random_int(100_000_000_000, 999_999_999_999);
    let receiver_phone = format!(
        "{}{}",
        rng.random_int(7, 9),
        rng.random_int(100_000_000, 999_999_999)
    );
    let app = *rng.pick(&PAYMENT_APPS);

    let sender = if rng.next_f64() < 0.8 {
        person_vpa(rng)
    } else {
        business_vpa(rng)
    };

    let description = format!("UPI/{}/From:{}/To:{}@ybl/{}", upi_ref, sender, receiver_phone, app);

    let tier = rng.next_f64();
    let amount = if tier < 0.65 {
        rng.random_int(200, 2000) as f64
    } else if tier < 0.88 {
        rng.random_int(2000, 5000) as f64
    } else if tier < 0.97 {
        rng.random_int(5000, 8000) as f64
    } else {
        rng.random_int(8000, 12_000) as f64
    };

    (description, amount)
}
