//! State Bank of India style table. SBI narrations are the most textured in
//! the catalogue: multi-line transfer blocks, 13-digit transfer references
//! with fixed prefixes, ATM rows carrying street-level locations, and person
//! names drawn through the per-build unique-name ledger so one statement
//! never shows money circling between the same two parties.

use chrono::NaiveDate;

use super::{weighted_pick, BankStyleProfile, SalaryCredit, StyledTransaction, TxnKind};
use crate::context::GenerationContext;
use crate::rng::SeededRng;
use crate::utils::round2;

pub struct SbiProfile;

const INDIAN_NAMES: [&str; 96] = [
    "Ghanshya", "Vipin P", "Soniya P", "Nitin C", "Akhlesh", "Ramesh K",
    "Manoj S", "Ravi Ku", "Kiran J", "Sunder D", "Mohd Sho", "Amir Uddin",
    "Vinod T", "Rajesh K", "Priya S", "Dinesh M", "Anjali R", "Vikram S",
    "Deepak G", "Anita R", "Rahul M", "Meera K", "Vishal T", "Kavita M",
    "Arun Pa", "Seema D", "Harish B", "Rekha G", "Mukesh Y", "Sunita V",
    "Prakash", "Nisha T", "Ashok Ku", "Preeti S", "Sandeep", "Geeta Ra",
    "Rajeev M", "Divya N", "Manish G", "Poornima", "Anil Ku", "Swati Pa",
    "Yogesh K", "Neelam S", "Sanjay R", "Uma Devi", "Rohit Si", "Lata Ma",
    "Sunil Ku", "Archana", "Naveen P", "Rani Kum", "Praveen", "Shanti D",
    "Mahesh T", "Lakshmi", "Ramesh P", "Jyoti Si", "Girish K", "Vanita R",
    "Santosh", "Bharti M", "Naresh K", "Pushpa D", "Raju Kum", "Sarita P",
    "Ajay Sin", "Mamta Ra", "Vijay Ku", "Usha Ran", "Sudhir P", "Anuja Pa",
    "Mohan La", "Veena Ku", "Kishore", "Savita D", "Hemant K", "Shobha M",
    "Jagdish", "Pramila", "Subhash", "Nirmala", "Brijesh", "Kamala D",
    "Avinash", "Sudha Pa", "Ramanuj", "Manjula", "Dilip Ku", "Padmini",
    "Umesh Pa", "Sharada", "Prakrti", "Madhuri", "Nitesh M", "Sharmila",
];

const BANK_CODES: [&str; 16] = [
    "SBIN", "HDFC", "ICIC", "YESB", "KKBK", "AIRP", "UTIB", "IDFB",
    "BKID", "IDIB", "PUNB", "CNRB", "CBIN", "INDB", "UBIN", "BARB",
];

const UPI_HANDLES: [&str; 5] = ["paytm", "gpay", "phonepe", "amazonpay", "bhim"];

const MERCHANTS: [&str; 11] = [
    "CANTERBURY TRADERS LLP", "YOUR SERVICE STATION", "RELIANCE DIGITAL",
    "DMart SUPER MARKET", "BIG BAZAAR", "CAFE COFFEE DAY", "McDONALDS",
    "PETROL PUMP HP", "DOMINOS PIZZA", "SHOPPERS STOP", "PANTALOONS",
];

const ATM_LOCATIONS: [(&str, &str); 15] = [
    ("AAWAS NAGAR AB ROAD", "DEDEWAS"),
    ("MG ROAD VIJAY NAGAR", "INDORE"),
    ("PALASIA SQUARE", "INDORE"),
    ("SARAFA BAZAR MAIN", "INDORE"),
    ("BHANWAR KUWA ROAD", "INDORE"),
    ("REGAL SQUARE", "INDORE"),
    ("TREASURE ISLAND MALL", "INDORE"),
    ("SAPNA SANGEETA ROAD", "INDORE"),
    ("NEW PALASIA", "INDORE"),
    ("SOUTH TUKOGANJ", "INDORE"),
    ("RAJENDRA NAGAR", "INDORE"),
    ("VIJAY NAGAR SQUARE", "INDORE"),
    ("RACE COURSE ROAD", "INDORE"),
    ("CENTRAL MALL GEETA BHAWAN", "INDORE"),
    ("BOMBAY HOSPITAL ROAD", "INDORE"),
];

const NEFT_ENTITIES: [&str; 6] = [
    "COMMISSIONER MUN", "TAX DEPARTMENT", "UTILITY SERVICES",
    "INSURANCE CORP", "LOAN SERVICES", "FINANCE LTD",
];

const MANDATE_COMPANIES: [&str; 6] = [
    "Bajaj Finance Ltd", "HDFC Life Insurance", "ICICI Prudential",
    "SBI Cards", "Kotak Mahindra", "Axis Finance",
];

const CHARGE_LABELS: [&str; 4] = [
    "FI SERVICE CHARGE DR-",
    "SMS ALERT CHARGES-",
    "AMC CHARGES-",
    "DEBIT CARD AMC-",
];

// (display name, upi id, bank code)
const CASHBACK_PROVIDERS: [(&str, &str, &str); 3] = [
    ("GOOGLE I", "goog-Payme-", "UTIB"),
    ("PAYTM", "Payme-.s1cd", "YESB"),
    ("PHONEPE", "phonepe.1", "ICIC"),
];

const SALARY_BANK_CODES: [&str; 5] = ["KKBK", "HDFC", "ICIC", "SBIN", "PUNB"];

const ROUND_FIGURE_PROBABILITY: f64 = 0.98;

#[derive(Clone, Copy)]
enum CreditKind {
    Upi,
    Neft,
    CashDeposit,
    Cashback,
}

#[derive(Clone, Copy)]
enum DebitKind {
    Upi,
    Atm,
    Pos,
    Mandate,
    Charges,
}

const CREDIT_KINDS: [(u32, CreditKind); 4] = [
    (60, CreditKind::Upi),
    (30, CreditKind::Neft),
    (3, CreditKind::CashDeposit),
    (7, CreditKind::Cashback),
];

const DEBIT_KINDS: [(u32, DebitKind); 5] = [
    (65, DebitKind::Upi),
    (2, DebitKind::Atm),
    (20, DebitKind::Pos),
    (10, DebitKind::Mandate),
    (3, DebitKind::Charges),
];

impl BankStyleProfile for SbiProfile {
    fn name(&self) -> &'static str {
        "SBI"
    }

    fn transaction(
        &self,
        kind: TxnKind,
        _date: NaiveDate,
        ctx: &mut GenerationContext,
    ) -> StyledTransaction {
        match kind {
            TxnKind::Credit => match *weighted_pick(&CREDIT_KINDS, &mut ctx.rng) {
                CreditKind::Upi => {
                    let (description, reference) = upi_transfer(true, ctx);
                    let amount = upi_credit_amount(&mut ctx.rng);
                    StyledTransaction::new(description, reference).with_amount(amount)
                }
                CreditKind::Neft => {
                    let (description, reference) = neft_transfer(true, ctx);
                    let amount = neft_credit_amount(&mut ctx.rng);
                    StyledTransaction::new(description, reference).with_amount(amount)
                }
                CreditKind::CashDeposit => {
                    let (description, reference) = cash_deposit(&mut ctx.rng);
                    let amount = cash_deposit_amount(&mut ctx.rng);
                    StyledTransaction::new(description, reference).with_amount(amount)
                }
                CreditKind::Cashback => {
                    let (description, reference) = cashback(&mut ctx.rng);
                    let amount = ctx.rng.random_float(5.0, 500.0, 2);
                    StyledTransaction::new(description, reference).with_amount(amount)
                }
            },
            TxnKind::Debit => match *weighted_pick(&DEBIT_KINDS, &mut ctx.rng) {
                DebitKind::Upi => {
                    let (description, reference) = upi_transfer(false, ctx);
                    let amount = upi_debit_amount(&mut ctx.rng);
                    StyledTransaction::new(description, reference).with_amount(amount)
                }
                DebitKind::Atm => {
                    let (description, reference) = atm_withdrawal(&mut ctx.rng);
                    let amount = atm_amount(&mut ctx.rng);
                    StyledTransaction::new(description, reference).with_amount(amount)
                }
                DebitKind::Pos => {
                    let (description, reference) = pos_purchase(ctx);
                    let amount = pos_amount(&mut ctx.rng);
                    StyledTransaction::new(description, reference).with_amount(amount)
                }
                DebitKind::Mandate => {
                    let (description, reference) = mandate_debit(&mut ctx.rng);
                    let amount = mandate_amount(&mut ctx.rng);
                    StyledTransaction::new(description, reference).with_amount(amount)
                }
                DebitKind::Charges => {
                    let (description, reference) = service_charge(&mut ctx.rng);
                    let amount = ctx.rng.random_float(10.0, 200.0, 2);
                    StyledTransaction::new(description, reference).with_amount(amount)
                }
            },
        }
    }

    fn salary_credit(&self, employer: &str, ctx: &mut GenerationContext) -> SalaryCredit {
        let rng = &mut ctx.rng;
        let ref_number = rng.random_int(1_000_000_000, 9_999_999_999);
        let bank_code = rng.pick(&SALARY_BANK_CODES);
        let branch_code = rng.random_int(1000, 9999);
        let account_digits = rng.random_int(10_000_000, 99_999_999);

        let description = format!(
            "BY TRANSFER-\nNEFT*{}{}*P{}\n{}*{}\nLIMITED*Salary",
            bank_code,
            branch_code,
            account_digits,
            ref_number,
            employer.to_uppercase()
        );
        let reference = format!("TRANSFER\n FROM\n 995{}", rng.random_int(10_000_000, 99_999_999));
        SalaryCredit {
            description,
            reference,
        }
    }

    fn reference(&self, _date: NaiveDate, ctx: &mut GenerationContext) -> String {
        transfer_reference("FROM", &mut ctx.rng)
    }
}

/// SBI transfer references are 13 digits behind a fixed 469/489 prefix.
fn transfer_reference(flow: &str, rng: &mut SeededRng) -> String {
    let prefix = if rng.next_f64() < 0.5 { "469" } else { "489" };
    let suffix = rng.random_int(1_000_000_000, 9_999_999_999);
    format!("TRANSFER\n{}\n {}{}", flow, prefix, suffix)
}

fn pad_name(name: &str) -> String {
    let truncated: String = name.chars().take(10).collect();
    format!("{:<8}", truncated)
}

fn upi_transfer(is_credit: bool, ctx: &mut GenerationContext) -> (String, String) {
    let ref_number = ctx.rng.random_int(100_000_000_000, 999_999_999_999);
    let name = ctx.unique_name(&INDIAN_NAMES);
    let rng = &mut ctx.rng;
    let bank_code = *rng.pick(&BANK_CODES);
    let mobile = format!(
        "{}{}",
        rng.random_int(7, 9),
        rng.random_int(100_000_000, 999_999_999)
    );
    let upi_handle = *rng.pick(&UPI_HANDLES);

    let direction = if is_credit { "CR" } else { "DR" };
    let action = if is_credit { "BY TRANSFER" } else { "TO TRANSFER" };
    let flow = if is_credit { "FROM" } else { "TO" };

    let upi_id_formats = [
        mobile.clone(),
        format!(
            "{}rechar",
            if upi_handle == "paytm" { "Payme-" } else { upi_handle }
        ),
        format!("{}.{}", upi_handle, rng.random_int(1000, 9999)),
        format!("{}@", name.to_lowercase().replace(' ', "")),
        format!("q{}", rng.random_int(100_000_000, 999_999_999)),
    ];
    let upi_id = rng.pick(&upi_id_formats).clone();

    let padded = pad_name(name);
    let format_type = rng.next_f64();
    let description = if format_type < 0.3 {
        format!(
            "{}-UPI/{}/{}/{}/{}/{}/UPI",
            action, direction, ref_number, padded, bank_code, upi_id
        )
    } else if format_type < 0.7 {
        format!(
            "{}-\nUPI/{}/{}/{}/{}/{}/UPI",
            action, direction, ref_number, padded, bank_code, upi_id
        )
    } else {
        format!(
            "{}-\nUPI/{}/{}/{}/{}/\n{}/UPI",
            action, direction, ref_number, padded, bank_code, upi_id
        )
    };

    (description, transfer_reference(flow, rng))
}

fn neft_transfer(is_credit: bool, ctx: &mut GenerationContext) -> (String, String) {
    let rng = &mut ctx.rng;
    let bank_code = *rng.pick(&BANK_CODES);
    let ref_number = rng.random_int(1_000_000_000, 9_999_999_999);
    let entity = *rng.pick(&NEFT_ENTITIES);

    let action = if is_credit { "BY TRANSFER" } else { "TO TRANSFER" };
    let flow = if is_credit { "FROM" } else { "TO" };

    let description = format!(
        "{}-\nNEFT*{}0000{}*{}{}\n{}*{}",
        action,
        bank_code,
        rng.random_int(100, 999),
        bank_code,
        rng.random_int(20, 25),
        ref_number,
        entity
    );
    let reference = format!("TRANSFER\n{}\n 995{}", flow, rng.random_int(10_000_000, 99_999_999));
    (description, reference)
}

fn atm_withdrawal(rng: &mut SeededRng) -> (String, String) {
    let (area, city) = *rng.pick(&ATM_LOCATIONS);
    let cash_id = rng.random_int(1120, 1150);
    let description = format!("ATM WDL-ATM CASH {}\n{}\n{}", cash_id, area, city);
    (description, String::new())
}

fn pos_purchase(ctx: &mut GenerationContext) -> (String, String) {
    let city = ctx.user_city().to_string();
    let rng = &mut ctx.rng;
    let merchant = *rng.pick(&MERCHANTS);
    let ref_number = rng.random_int(1_000_000_000_000, 9_999_999_999_999);

    let description = if rng.next_f64() < 0.5 {
        let digits: String = ref_number.to_string().chars().take(12).collect();
        format!("by debit card\nSBIPOS{}{}\n {}", digits, merchant, city)
    } else {
        format!("by debit card\nOTHPOS{}{}  {}", ref_number, merchant, city)
    };
    (description, String::new())
}

fn cash_deposit(rng: &mut SeededRng) -> (String, String) {
    let ref_number = rng.random_int(1_000_000_000, 9_999_999_999);
    let cdm_id = rng.random_int(1000, 9999);
    (format!("CSH DEP (CDM)-{}\n {}", ref_number, cdm_id), String::new())
}

fn mandate_debit(rng: &mut SeededRng) -> (String, String) {
    let company = *rng.pick(&MANDATE_COMPANIES);
    (format!("DEBIT-CMP MANDATE DEBIT\n {} - SI", company), String::new())
}

fn service_charge(rng: &mut SeededRng) -> (String, String) {
    let ref_number = rng.random_int(10_000_000, 99_999_999);
    let charge = *rng.pick(&CHARGE_LABELS);
    (format!("{}\n{}", charge, ref_number), ref_number.to_string())
}

fn cashback(rng: &mut SeededRng) -> (String, String) {
    let ref_number = rng.random_int(100_000_000_000, 999_999_999_999);
    let (name, upi, bank) = *rng.pick(&CASHBACK_PROVIDERS);
    let description = format!(
        "BY TRANSFER-\nUPI/CR/{}/{:<8}/{}/{}/UPI",
        ref_number, name, bank, upi
    );
    (description, transfer_reference("FROM", rng))
}

// Amount models. Everyday rails lean hard on round figures; only service
// charges and cashback stay continuous.

fn upi_credit_amount(rng: &mut SeededRng) -> f64 {
    let tier = rng.next_f64();
    let round = rng.next_f64() < ROUND_FIGURE_PROBABILITY;
    if tier < 0.5 {
        if round {
            rng.random_int(1, 3) as f64 * 1000.0
        } else {
            rng.random_float(1000.0, 3000.0, 2)
        }
    } else if tier < 0.8 {
        if round {
            rng.random_int(3, 6) as f64 * 1000.0
        } else {
            rng.random_float(3000.0, 6000.0, 2)
        }
    } else if round {
        rng.random_int(6, 12) as f64 * 1000.0
    } else {
        rng.random_float(6000.0, 12_000.0, 2)
    }
}

fn neft_credit_amount(rng: &mut SeededRng) -> f64 {
    let tier = rng.next_f64();
    let round = rng.next_f64() < ROUND_FIGURE_PROBABILITY;
    if tier < 0.7 {
        if round {
            rng.random_int(2, 8) as f64 * 1000.0
        } else {
            rng.random_float(2000.0, 8000.0, 2)
        }
    } else if tier < 0.9 {
        if round {
            rng.random_int(8, 15) as f64 * 1000.0
        } else {
            rng.random_float(8000.0, 15_000.0, 2)
        }
    } else if round {
        rng.random_int(15, 25) as f64 * 1000.0
    } else {
        rng.random_float(15_000.0, 25_000.0, 2)
    }
}

fn cash_deposit_amount(rng: &mut SeededRng) -> f64 {
    let tier = rng.next_f64();
    if tier < 0.6 {
        rng.random_int(5, 15) as f64 * 1000.0
    } else if tier < 0.85 {
        rng.random_int(15, 30) as f64 * 1000.0
    } else {
        rng.random_int(30, 50) as f64 * 1000.0
    }
}

fn upi_debit_amount(rng: &mut SeededRng) -> f64 {
    let tier = rng.next_f64();
    let round = rng.next_f64() < ROUND_FIGURE_PROBABILITY;
    if tier < 0.5 {
        if round {
            *rng.pick(&[300.0, 500.0, 1000.0, 1500.0])
        } else {
            rng.random_float(300.0, 1500.0, 2)
        }
    } else if tier < 0.8 {
        if round {
            rng.random_int(2, 4) as f64 * 1000.0
        } else {
            rng.random_float(1500.0, 4000.0, 2)
        }
    } else if round {
        rng.random_int(4, 8) as f64 * 1000.0
    } else {
        rng.random_float(4000.0, 8000.0, 2)
    }
}

fn atm_amount(rng: &mut SeededRng) -> f64 {
    let tier = rng.next_f64();
    if tier < 0.5 {
        *rng.pick(&[500.0, 1000.0, 1500.0, 2000.0])
    } else if tier < 0.85 {
        *rng.pick(&[2500.0, 3000.0, 4000.0, 5000.0])
    } else {
        *rng.pick(&[7000.0, 8000.0, 10_000.0])
    }
}

fn pos_amount(rng: &mut SeededRng) -> f64 {
    let tier = rng.next_f64();
    let round = rng.next_f64() < ROUND_FIGURE_PROBABILITY;
    if tier < 0.6 {
        if round {
            *rng.pick(&[500.0, 1000.0, 1500.0, 2000.0, 2500.0])
        } else {
            rng.random_float(500.0, 2500.0, 2)
        }
    } else if tier < 0.85 {
        if round {
            rng.random_int(3, 5) as f64 * 1000.0
        } else {
            rng.random_float(2500.0, 5000.0, 2)
        }
    } else if round {
        rng.random_int(5, 9) as f64 * 1000.0
    } else {
        rng.random_float(5000.0, 9000.0, 2)
    }
}

fn mandate_amount(rng: &mut SeededRng) -> f64 {
    if rng.next_f64() < ROUND_FIGURE_PROBABILITY {
        rng.random_int(2, 5) as f64 * 1000.0
    } else {
        round2(rng.random_float(1500.0, 4500.0, 2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StatementDetails;

    fn context() -> GenerationContext {
        let details = StatementDetails {
            city: Some("Indore".into()),
            ..StatementDetails::default()
        };
        GenerationContext::new(42, &details)
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    #[test]
    fn debits_and_credits_always_carry_amounts() {
        let mut ctx = context();
        for _ in 0..200 {
            let debit = SbiProfile.transaction(TxnKind::Debit, date(), &mut ctx);
            assert!(debit.amount.unwrap() > 0.0);
            let credit = SbiProfile.transaction(TxnKind::Credit, date(), &mut ctx);
            assert!(credit.amount.unwrap() > 0.0);
        }
    }

    #[test]
    fn transfer_references_carry_the_fixed_prefix() {
        let mut ctx = context();
        for _ in 0..50 {
            let reference = SbiProfile.reference(date(), &mut ctx);
            let digits = reference.rsplit(' ').next().unwrap();
            assert!(digits.starts_with("469") || digits.starts_with("489"));
            assert_eq!(digits.len(), 13);
        }
    }

    #[test]
    fn salary_credit_names_the_employer() {
        let mut ctx = context();
        let salary = SbiProfile.salary_credit("Tata Consultancy", &mut ctx);
        assert!(salary.description.contains("TATA CONSULTANCY"));
        assert!(salary.description.starts_with("BY TRANSFER-"));
        assert!(salary.reference.contains("995"));
    }

    #[test]
    fn pos_rows_land_in_the_holders_city() {
        let mut ctx = context();
        let mut seen_city = false;
        for _ in 0..300 {
            let debit = SbiProfile.transaction(TxnKind::Debit, date(), &mut ctx);
            if debit.description.contains("POS") {
                assert!(debit.description.contains("INDORE"));
                seen_city = true;
            }
        }
        assert!(seen_city);
    }
}
