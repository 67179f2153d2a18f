//! Self-employed statement assembly: the declared turnover split across
//! shuffled credit events, trailing business expenses against each inflow,
//! and a monthly interest credit proportional to the balance.

use chrono::{Datelike, Duration, NaiveDate, Utc};

use super::schedule;
use super::{finalize, FinalizeParams};
use crate::context::GenerationContext;
use crate::domain::{
    GenerationOptions, SelfEmployedInput, Statement, StatementMeta, Transaction, UserType,
};
use crate::errors::GenerationError;
use crate::income::SelfEmployedIncome;
use crate::profiles::{profile_for, TxnKind};
use crate::reference::build_reference;
use crate::rng::SeededRng;
use crate::utils::round2;

// Share of the transaction budget that becomes turnover credits.
const CREDIT_SHARE: f64 = 0.6;

// Business expenses run at 40-90% of the inflow they trail.
const EXPENSE_FRACTION_MIN: f64 = 0.4;
const EXPENSE_FRACTION_MAX: f64 = 0.9;

// Monthly interest as a fraction of the running balance, floored.
const INTEREST_RATE_MIN: f64 = 0.003;
const INTEREST_RATE_MAX: f64 = 0.006;
const INTEREST_FLOOR: f64 = 25.0;

// Credits keep a few days clear of the period edges.
const EDGE_MARGIN_DAYS: i64 = 3;

pub(crate) fn build(
    input: &SelfEmployedInput,
    options: GenerationOptions,
) -> Result<Statement, GenerationError> {
    input.validate()?;

    let mut ctx = GenerationContext::new(options.seed, &input.details);
    let profile = profile_for(input.template);

    let today = Utc::now().date_naive();
    let end_date = input
        .statement_end_date
        .map(|date| date.min(today))
        .unwrap_or(today);
    let start_date = input
        .statement_start_date
        .unwrap_or_else(|| schedule::shift_month(end_date, -(input.period_months.months() as i32)));

    let total = input.number_of_transactions;
    let credit_count = ((total as f64) * CREDIT_SHARE).ceil() as usize;
    let debit_count = (total as usize).saturating_sub(credit_count);

    let income = SelfEmployedIncome {
        turnover: input.turnover,
    };
    let mut slices = income.split(credit_count, &mut ctx.rng);
    ctx.rng.shuffle(&mut slices);
    tracing::debug!(
        profile = profile.name(),
        credits = credit_count,
        debits = debit_count,
        "split turnover across credit events"
    );

    let period_days = (end_date - start_date).num_days().max(0);
    let mut transactions: Vec<Transaction> = Vec::with_capacity(total as usize);
    let mut running = input.details.starting_balance;

    for (index, amount) in slices.iter().copied().enumerate() {
        let credit_date = place_credit_date(start_date, end_date, period_days, &mut ctx.rng);
        let styled = profile.transaction(TxnKind::Credit, credit_date, &mut ctx);
        running = round2(running + amount);
        // The slice itself is the credit amount: the split must conserve the
        // declared turnover, so profile amount models do not apply here.
        let mut credit_txn = Transaction::credit(
            ctx.rng.derive_uuid(),
            credit_date.and_hms_opt(12, 0, 0).unwrap_or_default(),
            styled.description,
            styled.reference,
            amount,
        );
        credit_txn.balance = running;
        transactions.push(credit_txn);

        if index < debit_count {
            let debit_date = trailing_date(credit_date, end_date, 1, 4, &mut ctx.rng);
            let styled_debit = profile.transaction(TxnKind::Debit, debit_date, &mut ctx);
            let debit_amount = ctx.rng.random_float(
                amount * EXPENSE_FRACTION_MIN,
                amount * EXPENSE_FRACTION_MAX,
                2,
            );
            running = round2(running - debit_amount);
            let mut debit_txn = Transaction::debit(
                ctx.rng.derive_uuid(),
                debit_date.and_hms_opt(12, 0, 0).unwrap_or_default(),
                styled_debit.description,
                styled_debit.reference,
                debit_amount,
            );
            debit_txn.balance = running;
            transactions.push(debit_txn);
        }
    }

    // One interest credit per covered month, proportional to the balance.
    for month_index in 0..schedule::month_span(start_date, end_date) {
        let anchor = schedule::shift_month(start_date, month_index as i32);
        let month_start = anchor.with_day(1).unwrap_or(anchor).max(start_date);
        let month_end = NaiveDate::from_ymd_opt(
            anchor.year(),
            anchor.month(),
            schedule::days_in_month(anchor.year(), anchor.month()),
        )
        .unwrap_or(anchor)
        .min(end_date);
        if month_start > month_end {
            continue;
        }

        let span = (month_end - month_start).num_days();
        let interest_date = schedule::previous_weekday(
            month_start + Duration::days(ctx.rng.random_int(0, span)),
        );
        let interest = interest_credit(running, &mut ctx.rng);
        running = round2(running + interest);
        let reference = build_reference("interest", &mut ctx.rng);
        let mut interest_txn = Transaction::credit(
            ctx.rng.derive_uuid(),
            interest_date.and_hms_opt(12, 0, 0).unwrap_or_default(),
            "INT.CREDIT",
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
    let period_start = finalized
        .first()
        .map(|txn| txn.timestamp)
        .or_else(|| start_date.and_hms_opt(0, 0, 0))
        .unwrap_or(fallback);
    let period_end = finalized
        .last()
        .map(|txn| txn.timestamp)
        .or_else(|| end_date.and_hms_opt(23, 59, 59))
        .unwrap_or(fallback);

    Ok(Statement {
        id: ctx.rng.derive_uuid(),
        details: input.details.clone(),
        meta: StatementMeta {
            generated_at: Utc::now(),
            template: input.template,
            statement_period_start: period_start,
            statement_period_end: period_end,
            user_type: UserType::SelfEmployed,
            config_hash: ctx.rng.derive_uuid().simple().to_string(),
            seed: options.seed,
        },
        transactions: finalized,
    })
}

fn place_credit_date(
    start_date: NaiveDate,
    end_date: NaiveDate,
    period_days: i64,
    rng: &mut SeededRng,
) -> NaiveDate {
    let upper = (period_days - EDGE_MARGIN_DAYS).max(EDGE_MARGIN_DAYS);
    let offset = rng.random_int(EDGE_MARGIN_DAYS, upper);
    let date = start_date + Duration::days(offset);
    if date > end_date {
        (end_date - Duration::days(rng.random_int(1, 5))).max(start_date)
    } else {
        date
    }
}

/// A follow-up date a few days after the anchor, pulled back inside the
/// period when it would overrun the end. Never lands before the anchor:
/// an expense must trail the inflow that funds it.
fn trailing_date(
    anchor: NaiveDate,
    end_date: NaiveDate,
    min_days: i64,
    max_days: i64,
    rng: &mut SeededRng,
) -> NaiveDate {
    let date = anchor + Duration::days(rng.random_int(min_days, max_days));
    if date > end_date {
        (end_date - Duration::days(rng.random_int(0, 2))).max(anchor)
    } else {
        date
    }
}

fn interest_credit(balance: f64, rng: &mut SeededRng) -> f64 {
    let base = balance.max(0.0);
    let interest = rng.random_float(base * INTEREST_RATE_MIN, base * INTEREST_RATE_MAX, 2);
    interest.max(INTEREST_FLOOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SeededRng;

    #[test]
    fn credit_dates_respect_the_edge_margin() {
        let mut rng = SeededRng::new(3);
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
        let period = (end - start).num_days();
        for _ in 0..300 {
            let date = place_credit_date(start, end, period, &mut rng);
            assert!(date >= start + Duration::days(EDGE_MARGIN_DAYS));
            assert!(date <= end);
        }
    }

    #[test]
    fn trailing_dates_stay_between_anchor_and_period_end() {
        let mut rng = SeededRng::new(4);
        let end = NaiveDate::from_ymd_opt(2025, 3, 31).unwrap();
        let anchor = NaiveDate::from_ymd_opt(2025, 3, 30).unwrap();
        for _ in 0..100 {
            let date = trailing_date(anchor, end, 1, 4, &mut rng);
            assert!(date <= end);
            assert!(date >= anchor);
        }
    }

    #[test]
    fn interest_never_drops_below_the_floor() {
        let mut rng = SeededRng::new(5);
        assert!(interest_credit(0.0, &mut rng) >= INTEREST_FLOOR);
        assert!(interest_credit(-500.0, &mut rng) >= INTEREST_FLOOR);
        let healthy = interest_credit(1_000_000.0, &mut rng);
        assert!((3000.0..=6000.0).contains(&healthy));
    }
}
