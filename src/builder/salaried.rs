//! Salaried statement assembly: window resolution, monthly salary credits,
//! blackout-aware debit placement, incidental credits, and monthly interest.

use chrono::{Datelike, Duration, NaiveDate, Utc};

use super::schedule;
use super::{
    cash_deposit_like, finalize, FinalizeParams, BLACKOUT_DAYS_AFTER, BLACKOUT_DAYS_BEFORE,
    CASH_DEPOSIT_BLACKOUT_DAYS_BEFORE, INCIDENTAL_CREDIT_THRESHOLD, MAX_PLACEMENT_ATTEMPTS,
};
use crate::context::GenerationContext;
use crate::domain::{
    GenerationOptions, SalariedInput, Statement, StatementMeta, Transaction, UserType,
};
use crate::errors::GenerationError;
use crate::income::SalariedIncome;
use crate::profiles::{profile_for, TxnKind};
use crate::reference::build_reference;
use crate::rng::SeededRng;
use crate::utils::round2;

// Debit amounts when a profile leaves them to the builder.
const DEFAULT_DEBIT_MIN: f64 = 200.0;
const DEFAULT_DEBIT_MAX: f64 = 8500.0;
const DEFAULT_INCIDENTAL_CREDIT_MIN: f64 = 500.0;
const DEFAULT_INCIDENTAL_CREDIT_MAX: f64 = 3000.0;

const INTEREST_MIN: f64 = 35.0;
const INTEREST_MAX: f64 = 420.0;

// Explicit start and end dates derive the duration used to spread the
// transaction budget, clamped to the product's 3-6 month statement range.
const DERIVED_DURATION_MIN: u32 = 3;
const DERIVED_DURATION_MAX: u32 = 6;

pub(crate) fn build(
    input: &SalariedInput,
    options: GenerationOptions,
) -> Result<Statement, GenerationError> {
    input.validate()?;

    let mut ctx = GenerationContext::new(options.seed, &input.details);
    let profile = profile_for(input.template);
    let income = SalariedIncome {
        salary_amount: input.salary_amount,
    };
    let salary_source = input.salary_source().to_string();

    let today = Utc::now().date_naive();
    let end_date = input
        .statement_end_date
        .map(|date| date.min(today))
        .unwrap_or(today);
    let start_date = input.statement_start_date;

    let mut duration = input.duration_months;
    if let (Some(start), Some(_)) = (start_date, input.statement_end_date) {
        duration =
            schedule::month_span(start, end_date).clamp(DERIVED_DURATION_MIN, DERIVED_DURATION_MAX);
    }

    let salary_dates = schedule::salary_dates(duration, end_date, start_date, &mut ctx.rng);
    tracing::debug!(
        profile = profile.name(),
        months = salary_dates.len(),
        "scheduled salary credits"
    );

    // One slot reserved per salary credit and one per interest credit; the
    // rest of the budget becomes ordinary debits.
    let reserved = (salary_dates.len() * 2) as u32;
    let remaining = input.number_of_transactions.saturating_sub(reserved);
    let allocation = schedule::allocate_across_months(remaining, salary_dates.len());

    let mut transactions: Vec<Transaction> = Vec::with_capacity(input.number_of_transactions as usize);
    let mut running = input.details.starting_balance;

    for (month_index, &salary_date) in salary_dates.iter().enumerate() {
        let (effective_start, effective_end) = month_window(salary_date, start_date, end_date);

        let credit_amount = income.draw_credit(&mut ctx.rng);
        running = round2(running + credit_amount);
        let salary = profile.salary_credit(&salary_source, &mut ctx);
        let mut salary_txn = Transaction::credit(
            ctx.rng.derive_uuid(),
            salary_date.and_hms_opt(12, 0, 0).unwrap_or_default(),
            salary.description,
            salary.reference,
            credit_amount,
        );
        salary_txn.balance = running;
        transactions.push(salary_txn);

        // Incidental credits consume expense slots so the month never emits
        // more rows than its share of the transaction budget.
        let mut slots = allocation[month_index];
        while slots > 0 {
            slots -= 1;
            let txn_date =
                place_debit_date(effective_start, effective_end, &salary_dates, &mut ctx.rng);
            let styled = profile.transaction(TxnKind::Debit, txn_date, &mut ctx);
            let debit_amount = match styled.amount {
                Some(amount) => amount,
                None => ctx.rng.random_float(DEFAULT_DEBIT_MIN, DEFAULT_DEBIT_MAX, 2),
            };
            running = round2(running - debit_amount);
            let mut debit_txn = Transaction::debit(
                ctx.rng.derive_uuid(),
                txn_date.and_hms_opt(12, 0, 0).unwrap_or_default(),
                styled.description,
                styled.reference,
                debit_amount,
            );
            debit_txn.balance = running;
            transactions.push(debit_txn);

            if slots > 0 && ctx.rng.next_f64() > INCIDENTAL_CREDIT_THRESHOLD {
                slots -= 1;
                let offset = ctx.rng.random_int(-2, 2);
                let mut credit_date = txn_date + Duration::days(offset);
                let styled_credit = profile.transaction(TxnKind::Credit, credit_date, &mut ctx);
                if cash_deposit_like(&styled_credit.description) {
                    credit_date = dodge_cash_deposit(credit_date, salary_date, &mut ctx.rng);
                }
                let incidental_amount = match styled_credit.amount {
                    Some(amount) => amount,
                    None => ctx.rng.random_float(
                        DEFAULT_INCIDENTAL_CREDIT_MIN,
                        DEFAULT_INCIDENTAL_CREDIT_MAX,
                        2,
                    ),
                };
                running = round2(running + incidental_amount);
                let mut credit_txn = Transaction::credit(
                    ctx.rng.derive_uuid(),
                    credit_date.and_hms_opt(12, 0, 0).unwrap_or_default(),
                    styled_credit.description,
                    styled_credit.reference,
                    incidental_amount,
                );
                credit_txn.balance = running;
                transactions.push(credit_txn);
            }
        }

        let interest = ctx.rng.random_float(INTEREST_MIN, INTEREST_MAX, 2);
        running = round2(running + interest);
        let span = (effective_end - effective_start).num_days().max(0);
        let interest_date = schedule::previous_weekday(
            effective_start + Duration::days(ctx.rng.random_int(0, span)),
        );
        let reference = build_reference("interest", &mut ctx.rng);
        let mut interest_txn = Transaction::credit(
            ctx.rng.derive_uuid(),
            interest_date.and_hms_opt(12, 0, 0).unwrap_or_default(),
            "INT. CREDIT",
            reference,
            interest,
        );
        interest_txn.balance = running;
        transactions.push(interest_txn);
    }

    let finalized = finalize(
        transactions,
        &FinalizeParams {
            starting_balance: input.details.starting_balance,
            closing_balance: input.closing_balance,
            window_start: input.statement_start_date,
            window_end: input.statement_end_date,
        },
        &mut ctx,
    );

    let fallback = end_date.and_hms_opt(12, 0, 0).unwrap_or_default();
    let period_start = input
        .statement_start_date
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .or_else(|| finalized.first().map(|txn| txn.timestamp))
        .unwrap_or(fallback);
    let period_end = input
        .statement_end_date
        .and_then(|date| date.and_hms_opt(23, 59, 59))
        .or_else(|| finalized.last().map(|txn| txn.timestamp))
        .unwrap_or(fallback);

    Ok(Statement {
        id: ctx.rng.derive_uuid(),
        details: input.details.clone(),
        meta: StatementMeta {
            generated_at: Utc::now(),
            template: input.template,
            statement_period_start: period_start,
            statement_period_end: period_end,
            user_type: UserType::Salaried,
            config_hash: ctx.rng.derive_uuid().simple().to_string(),
            seed: options.seed,
        },
        transactions: finalized,
    })
}

/// The stretch of the salary month that debits may land in, narrowed at the
/// boundary months by the explicit statement dates.
fn month_window(
    salary_date: NaiveDate,
    start_date: Option<NaiveDate>,
    end_date: NaiveDate,
) -> (NaiveDate, NaiveDate) {
    let year = salary_date.year();
    let month = salary_date.month();
    let month_start = salary_date.with_day(1).unwrap_or(salary_date);
    let month_end = NaiveDate::from_ymd_opt(year, month, schedule::days_in_month(year, month))
        .unwrap_or(salary_date);

    let effective_start = match start_date {
        Some(start) if start.year() == year && start.month() == month => start,
        _ => month_start,
    };
    let effective_end = if end_date.year() == year && end_date.month() == month {
        end_date
    } else {
        month_end
    };
    (effective_start, effective_end.max(effective_start))
}

/// Uniform date inside the month window, resampled a bounded number of times
/// to escape every scheduled salary date's blackout; the last attempt passes
/// through. Checking the whole schedule keeps month-end debits clear of the
/// following month's salary too.
fn place_debit_date(
    window_start: NaiveDate,
    window_end: NaiveDate,
    salary_dates: &[NaiveDate],
    rng: &mut SeededRng,
) -> NaiveDate {
    let span = (window_end - window_start).num_days().max(0);
    let mut candidate = window_start;
    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        candidate = window_start + Duration::days(rng.random_int(0, span));
        if !in_salary_blackout(candidate, salary_dates) {
            break;
        }
    }
    candidate
}

fn in_salary_blackout(date: NaiveDate, salary_dates: &[NaiveDate]) -> bool {
    salary_dates.iter().any(|salary_date| {
        date >= *salary_date - Duration::days(BLACKOUT_DAYS_BEFORE)
            && date <= *salary_date + Duration::days(BLACKOUT_DAYS_AFTER)
    })
}

/// Shifts a cash-deposit credit well before the salary date; bounded retry
/// with pass-through, mirroring the debit placement.
fn dodge_cash_deposit(date: NaiveDate, salary_date: NaiveDate, rng: &mut SeededRng) -> NaiveDate {
    let mut candidate = date;
    let mut attempts = 0;
    while attempts < MAX_PLACEMENT_ATTEMPTS
        && candidate >= salary_date - Duration::days(CASH_DEPOSIT_BLACKOUT_DAYS_BEFORE)
        && candidate <= salary_date + Duration::days(BLACKOUT_DAYS_AFTER)
    {
        candidate = salary_date - Duration::days(rng.random_int(10, 20));
        attempts += 1;
    }
    candidate
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SeededRng;

    #[test]
    fn blackout_window_is_inclusive_on_both_edges() {
        let salary = [NaiveDate::from_ymd_opt(2025, 3, 3).unwrap()];
        assert!(in_salary_blackout(salary[0], &salary));
        assert!(in_salary_blackout(salary[0] - Duration::days(3), &salary));
        assert!(in_salary_blackout(salary[0] + Duration::days(1), &salary));
        assert!(!in_salary_blackout(salary[0] - Duration::days(4), &salary));
        assert!(!in_salary_blackout(salary[0] + Duration::days(2), &salary));
    }

    #[test]
    fn debit_placement_escapes_the_blackout_when_it_can() {
        let mut rng = SeededRng::new(5);
        let start = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 3, 31).unwrap();
        let salary = [
            NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
            NaiveDate::from_ymd_opt(2025, 4, 2).unwrap(),
        ];
        let mut hits = 0;
        for _ in 0..500 {
            if in_salary_blackout(place_debit_date(start, end, &salary, &mut rng), &salary) {
                hits += 1;
            }
        }
        // Ten resamples over a month-wide window leave pass-throughs rare.
        assert!(hits < 10);
    }

    #[test]
    fn cash_deposits_end_up_well_before_the_salary_date() {
        let mut rng = SeededRng::new(6);
        let salary = NaiveDate::from_ymd_opt(2025, 3, 20).unwrap();
        for day in 15..=21 {
            let risky = NaiveDate::from_ymd_opt(2025, 3, day).unwrap();
            let dodged = dodge_cash_deposit(risky, salary, &mut rng);
            assert!(dodged < salary - Duration::days(CASH_DEPOSIT_BLACKOUT_DAYS_BEFORE));
        }
    }

    #[test]
    fn degenerate_single_day_window_stays_inside() {
        let mut rng = SeededRng::new(8);
        let day = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        let salary = [NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()];
        let placed = place_debit_date(day, day, &salary, &mut rng);
        assert_eq!(placed, day);
    }
}
