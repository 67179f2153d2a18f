use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::statement::{BankTemplate, StatementDetails};
use crate::errors::GenerationError;

/// The only generation-time knob distinguishing two runs over identical
/// business inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationOptions {
    pub seed: u64,
}

/// Validated form values for a salaried account holder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalariedInput {
    pub details: StatementDetails,
    pub employer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_employer: Option<String>,
    pub salary_amount: f64,
    pub duration_months: u32,
    pub template: BankTemplate,
    pub number_of_transactions: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closing_balance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statement_start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statement_end_date: Option<NaiveDate>,
}

impl SalariedInput {
    /// Employer name the salary credits are attributed to: the free-form
    /// override when present and non-blank, the catalogue pick otherwise.
    pub fn salary_source(&self) -> &str {
        match self.custom_employer.as_deref().map(str::trim) {
            Some(custom) if !custom.is_empty() => custom,
            _ => self.employer.as_str(),
        }
    }

    /// Defensive re-check of the upstream form contract.
    pub fn validate(&self) -> Result<(), GenerationError> {
        validate_common(
            &self.details,
            self.number_of_transactions,
            self.statement_start_date,
            self.statement_end_date,
            self.closing_balance,
        )?;
        if self.salary_amount <= 0.0 {
            return Err(GenerationError::InvalidInput(
                "salary amount must be positive".into(),
            ));
        }
        if self.duration_months == 0 {
            return Err(GenerationError::InvalidInput(
                "duration must cover at least one month".into(),
            ));
        }
        Ok(())
    }
}

/// Statement period for self-employed generation, restricted to the two
/// lengths the product offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum PeriodMonths {
    Three,
    Six,
}

impl PeriodMonths {
    pub fn months(self) -> u32 {
        match self {
            PeriodMonths::Three => 3,
            PeriodMonths::Six => 6,
        }
    }
}

impl TryFrom<u32> for PeriodMonths {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            3 => Ok(PeriodMonths::Three),
            6 => Ok(PeriodMonths::Six),
            other => Err(format!("unsupported period length: {} months", other)),
        }
    }
}

impl From<PeriodMonths> for u32 {
    fn from(value: PeriodMonths) -> Self {
        value.months()
    }
}

/// Validated form values for a self-employed account holder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelfEmployedInput {
    pub details: StatementDetails,
    pub turnover: f64,
    pub period_months: PeriodMonths,
    pub template: BankTemplate,
    pub number_of_transactions: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closing_balance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statement_start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statement_end_date: Option<NaiveDate>,
}

impl SelfEmployedInput {
    pub fn validate(&self) -> Result<(), GenerationError> {
        validate_common(
            &self.details,
            self.number_of_transactions,
            self.statement_start_date,
            self.statement_end_date,
            self.closing_balance,
        )?;
        if self.turnover <= 0.0 {
            return Err(GenerationError::InvalidInput(
                "turnover must be positive".into(),
            ));
        }
        Ok(())
    }
}

/// Either flavor of generation request, for callers that dispatch on the
/// user's employment type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StatementInput {
    Salaried(SalariedInput),
    SelfEmployed(SelfEmployedInput),
}

/// Fields an upstream OCR pass may have extracted from an existing statement.
/// Only ever used to pre-populate [`StatementDetails`] before generation; the
/// engine itself never parses documents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OcrSeedData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ifsc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starting_balance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ending_balance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pincode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl OcrSeedData {
    /// Copies every extracted field onto the target details. Fields the OCR
    /// pass did not produce are left untouched.
    pub fn apply_to(&self, details: &mut StatementDetails) {
        if let Some(name) = &self.name {
            details.name = name.clone();
        }
        if let Some(account_number) = &self.account_number {
            details.account_number = account_number.clone();
        }
        if let Some(ifsc) = &self.ifsc {
            details.ifsc = ifsc.clone();
        }
        if let Some(bank_name) = &self.bank_name {
            details.bank_name = bank_name.clone();
        }
        if let Some(starting_balance) = self.starting_balance {
            details.starting_balance = starting_balance;
        }
        if let Some(branch_name) = &self.branch_name {
            details.bank_branch = Some(branch_name.clone());
        }
        if let Some(branch_address) = &self.branch_address {
            details.branch_address = Some(branch_address.clone());
        }
        if let Some(city) = &self.city {
            details.city = Some(city.clone());
        }
        if let Some(state) = &self.state {
            details.state = Some(state.clone());
        }
        if let Some(pincode) = &self.pincode {
            details.pincode = Some(pincode.clone());
        }
        if let Some(email) = &self.email {
            details.email = Some(email.clone());
        }
        if let Some(phone) = &self.phone {
            details.phone_number = Some(phone.clone());
        }
    }
}

fn validate_common(
    details: &StatementDetails,
    number_of_transactions: u32,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    closing_balance: Option<f64>,
) -> Result<(), GenerationError> {
    if details.starting_balance < 0.0 {
        return Err(GenerationError::InvalidInput(
            "starting balance cannot be negative".into(),
        ));
    }
    if number_of_transactions == 0 {
        return Err(GenerationError::InvalidInput(
            "at least one transaction must be requested".into(),
        ));
    }
    if let (Some(start), Some(end)) = (start, end) {
        if start > end {
            return Err(GenerationError::InvalidInput(
                "statement start date is after the end date".into(),
            ));
        }
    }
    if let Some(target) = closing_balance {
        if target < 0.0 {
            return Err(GenerationError::InvalidInput(
                "closing balance target cannot be negative".into(),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details() -> StatementDetails {
        StatementDetails {
            name: "Test Holder".into(),
            account_number: "000111222333".into(),
            ifsc: "HDFC0001234".into(),
            bank_name: "HDFC Bank".into(),
            starting_balance: 10_000.0,
            ..StatementDetails::default()
        }
    }

    fn salaried() -> SalariedInput {
        SalariedInput {
            details: details(),
            employer: "Infosys".into(),
            custom_employer: None,
            salary_amount: 50_000.0,
            duration_months: 3,
            template: BankTemplate::Hdfc,
            number_of_transactions: 60,
            closing_balance: None,
            statement_start_date: None,
            statement_end_date: None,
        }
    }

    #[test]
    fn custom_employer_overrides_catalogue_pick() {
        let mut input = salaried();
        assert_eq!(input.salary_source(), "Infosys");
        input.custom_employer = Some("  Acme Widgets  ".into());
        assert_eq!(input.salary_source(), "Acme Widgets");
        input.custom_employer = Some("   ".into());
        assert_eq!(input.salary_source(), "Infosys");
    }

    #[test]
    fn degenerate_counts_are_rejected() {
        let mut input = salaried();
        input.number_of_transactions = 0;
        assert!(input.validate().is_err());
    }

    #[test]
    fn inverted_windows_are_rejected() {
        let mut input = salaried();
        input.statement_start_date = NaiveDate::from_ymd_opt(2025, 5, 1);
        input.statement_end_date = NaiveDate::from_ymd_opt(2025, 2, 1);
        assert!(input.validate().is_err());
    }

    #[test]
    fn period_months_round_trips_through_numbers() {
        let parsed: PeriodMonths = serde_json::from_str("6").unwrap();
        assert_eq!(parsed, PeriodMonths::Six);
        assert!(serde_json::from_str::<PeriodMonths>("4").is_err());
        assert_eq!(serde_json::to_string(&PeriodMonths::Three).unwrap(), "3");
    }

    #[test]
    fn ocr_seed_only_overwrites_extracted_fields() {
        let mut target = details();
        let seed = OcrSeedData {
            name: Some("Scanned Name".into()),
            city: Some("Indore".into()),
            ..OcrSeedData::default()
        };
        seed.apply_to(&mut target);
        assert_eq!(target.name, "Scanned Name");
        assert_eq!(target.city.as_deref(), Some("Indore"));
        assert_eq!(target.ifsc, "HDFC0001234");
    }
}
