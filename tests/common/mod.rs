use chrono::NaiveDate;
use statement_core::domain::{
    BankTemplate, GenerationOptions, PeriodMonths, SalariedInput, SelfEmployedInput,
    StatementDetails,
};

pub fn details(starting_balance: f64) -> StatementDetails {
    StatementDetails {
        name: "Anita Deshmukh".into(),
        account_number: "00001234567890".into(),
        ifsc: "HDFC0000412".into(),
        bank_name: "HDFC Bank".into(),
        starting_balance,
        address: Some("14 Residency Road".into()),
        city: Some("Indore".into()),
        state: Some("Madhya Pradesh".into()),
        pincode: Some("452001".into()),
        bank_branch: Some("Vijay Nagar".into()),
        branch_address: Some("Vijay Nagar Square, Indore".into()),
        phone_number: Some("9826012345".into()),
        email: Some("anita.d@example.com".into()),
    }
}

pub fn salaried(template: BankTemplate) -> SalariedInput {
    SalariedInput {
        details: details(10_000.0),
        employer: "Infosys".into(),
        custom_employer: None,
        salary_amount: 50_000.0,
        duration_months: 3,
        template,
        number_of_transactions: 60,
        closing_balance: None,
        statement_start_date: None,
        statement_end_date: None,
    }
}

pub fn self_employed(template: BankTemplate) -> SelfEmployedInput {
    SelfEmployedInput {
        details: details(50_000.0),
        turnover: 1_200_000.0,
        period_months: PeriodMonths::Six,
        template,
        number_of_transactions: 150,
        closing_balance: None,
        statement_start_date: None,
        statement_end_date: None,
    }
}

pub fn seed(value: u64) -> GenerationOptions {
    GenerationOptions { seed: value }
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}
