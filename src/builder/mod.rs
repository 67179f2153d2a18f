//! The ledger builder: resolves the statement window, schedules income,
//! spreads the transaction budget, emits rows through the selected bank
//! profile, and runs the finalize passes that enforce the ledger invariants
//! (chronological order, non-negative running balance, optional exact
//! closing-balance target, intra-day time spread, window containment).

pub(crate) mod schedule;

mod salaried;
mod self_employed;

use chrono::{Duration, NaiveDate, Utc};

use crate::context::GenerationContext;
use crate::domain::{
    GenerationOptions, SalariedInput, SelfEmployedInput, Statement, StatementInput, Transaction,
};
use crate::errors::GenerationError;
use crate::reference::build_reference;
use crate::utils::round2;

// Ordinary debits avoid the salary date so statements do not show the
// clustered activity pattern transaction monitors flag.
pub(crate) const BLACKOUT_DAYS_BEFORE: i64 = 3;
pub(crate) const BLACKOUT_DAYS_AFTER: i64 = 1;
// Cash-deposit credits keep a wider berth before the salary date.
pub(crate) const CASH_DEPOSIT_BLACKOUT_DAYS_BEFORE: i64 = 5;
pub(crate) const MAX_PLACEMENT_ATTEMPTS: u32 = 10;
// Chance of an incidental credit riding along with a debit (refunds,
// small transfers back). Tuned default, not a derived constant.
pub(crate) const INCIDENTAL_CREDIT_THRESHOLD: f64 = 0.7;

const OPENING_REPAIR_BUFFER: f64 = 5000.0;
const CLOSING_TARGET_EPSILON: f64 = 0.01;
const OPENING_REPAIR_DESCRIPTION: &str = "Opening Balance Credit\nFunds Transfer";

const DAY_FIRST_HOUR: f64 = 9.0;
const DAY_HOUR_SPAN: f64 = 12.0;

const CASH_DEPOSIT_MARKERS: [&str; 3] = ["CSH DEP", "CASH DEP", "CASH DEPOSIT"];

/// Generates a statement for either employment kind.
pub fn generate(
    input: &StatementInput,
    options: GenerationOptions,
) -> Result<Statement, GenerationError> {
    match input {
        StatementInput::Salaried(values) => generate_salaried(values, options),
        StatementInput::SelfEmployed(values) => generate_self_employed(values, options),
    }
}

/// Builds a salaried statement: one salary credit per covered month, spread
/// debits, incidental credits, and a monthly interest credit.
pub fn generate_salaried(
    input: &SalariedInput,
    options: GenerationOptions,
) -> Result<Statement, GenerationError> {
    salaried::build(input, options)
}

/// Builds a self-employed statement: the declared turnover split across
/// credit events with trailing business expenses.
pub fn generate_self_employed(
    input: &SelfEmployedInput,
    options: GenerationOptions,
) -> Result<Statement, GenerationError> {
    self_employed::build(input, options)
}

pub(crate) struct FinalizeParams {
    pub starting_balance: f64,
    pub closing_balance: Option<f64>,
    pub window_start: Option<NaiveDate>,
    pub window_end: Option<NaiveDate>,
}

/// The invariant-enforcing tail of the pipeline. Order matters: sort, repair
/// any negative dip, target the requested closing balance, assign intra-day
/// times, filter to the explicit window, and recompute balances over exactly
/// the rows that survive.
pub(crate) fn finalize(
    mut transactions: Vec<Transaction>,
    params: &FinalizeParams,
    ctx: &mut GenerationContext,
) -> Vec<Transaction> {
    transactions.sort_by_key(|txn| txn.timestamp);

    repair_negative_balance(&mut transactions, params, ctx);
    recompute_balances(&mut transactions, params.starting_balance);
    target_closing_balance(&mut transactions, params, ctx);
    assign_intraday_times(&mut transactions, ctx);

    if params.window_start.is_some() || params.window_end.is_some() {
        let before = transactions.len();
        transactions.retain(|txn| {
            let date = txn.timestamp.date();
            params.window_start.map_or(true, |start| date >= start)
                && params.window_end.map_or(true, |end| date <= end)
        });
        if transactions.len() != before {
            tracing::debug!(
                dropped = before - transactions.len(),
                "filtered transactions outside the statement window"
            );
        }
    }

    recompute_balances(&mut transactions, params.starting_balance);
    transactions
}

/// Recomputes every running balance from the starting balance in the list's
/// current order. Emission-order balances are never trusted.
pub(crate) fn recompute_balances(transactions: &mut [Transaction], starting_balance: f64) {
    let mut running = starting_balance;
    for txn in transactions {
        running = round2(running + txn.signed_amount());
        txn.balance = running;
    }
}

/// Single corrective pass: when the sorted ledger would dip below zero, one
/// synthetic opening credit sized to the worst deficit plus a buffer is
/// prepended, dated a day before the earliest row (clamped into an explicit
/// window so the filter pass cannot drop it).
fn repair_negative_balance(
    transactions: &mut Vec<Transaction>,
    params: &FinalizeParams,
    ctx: &mut GenerationContext,
) {
    let mut running = params.starting_balance;
    let mut worst = 0.0f64;
    for txn in transactions.iter() {
        running = round2(running + txn.signed_amount());
        if running < worst {
            worst = running;
        }
    }
    if worst >= 0.0 {
        return;
    }

    let amount = round2(worst.abs() + OPENING_REPAIR_BUFFER);
    let earliest = transactions
        .first()
        .map(|txn| txn.timestamp.date())
        .unwrap_or_else(|| Utc::now().date_naive());
    let mut repair_date = earliest - Duration::days(1);
    if let Some(start) = params.window_start {
        if repair_date < start {
            repair_date = start;
        }
    }

    let reference = build_reference("salary", &mut ctx.rng);
    let repair = Transaction::credit(
        ctx.rng.derive_uuid(),
        repair_date.and_hms_opt(12, 0, 0).unwrap_or_default(),
        OPENING_REPAIR_DESCRIPTION,
        reference,
        amount,
    );
    tracing::debug!(amount, deficit = worst, "inserted opening balance credit");
    transactions.insert(0, repair);
}

/// Appends the trailing balancing entry when a target closing balance was
/// requested and the natural ledger misses it by more than a cent.
fn target_closing_balance(
    transactions: &mut Vec<Transaction>,
    params: &FinalizeParams,
    ctx: &mut GenerationContext,
) {
    let Some(target) = params.closing_balance else {
        return;
    };

    let natural = transactions
        .last()
        .map(|txn| txn.balance)
        .unwrap_or(params.starting_balance);
    let difference = round2(target - natural);
    if difference.abs() <= CLOSING_TARGET_EPSILON {
        return;
    }

    let timestamp = transactions
        .last()
        .map(|txn| txn.timestamp)
        .unwrap_or_else(|| {
            Utc::now()
                .date_naive()
                .and_hms_opt(12, 0, 0)
                .unwrap_or_default()
        });

    let adjustment = if difference > 0.0 {
        let reference = build_reference("salary", &mut ctx.rng);
        Transaction::credit(
            ctx.rng.derive_uuid(),
            timestamp,
            "Funds Transfer Credit",
            reference,
            difference,
        )
    } else {
        let reference = build_reference("expense", &mut ctx.rng);
        Transaction::debit(
            ctx.rng.derive_uuid(),
            timestamp,
            "Funds Transfer Debit",
            reference,
            difference.abs(),
        )
    };
    tracing::debug!(difference, "appended closing balance adjustment");
    transactions.push(adjustment);
}

/// Spreads every row's time-of-day across business hours so no two rows share
/// a second. Dates (and therefore the row order) are untouched.
fn assign_intraday_times(transactions: &mut [Transaction], ctx: &mut GenerationContext) {
    for txn in transactions {
        let rng = &mut ctx.rng;
        let hour = DAY_FIRST_HOUR as u32 + (rng.next_f64() * DAY_HOUR_SPAN) as u32;
        let minute = (rng.next_f64() * 60.0) as u32;
        let second = (rng.next_f64() * 60.0) as u32;
        let date = txn.timestamp.date();
        txn.timestamp = date
            .and_hms_opt(hour.min(23), minute.min(59), second.min(59))
            .unwrap_or(txn.timestamp);
    }
}

/// Incidental credits that read as cash deposits get the stricter blackout.
pub(crate) fn cash_deposit_like(description: &str) -> bool {
    CASH_DEPOSIT_MARKERS
        .iter()
        .any(|marker| description.contains(marker))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StatementDetails;
    use chrono::{Datelike, NaiveDate};
    use uuid::Uuid;

    fn ctx() -> GenerationContext {
        GenerationContext::new(1, &StatementDetails::default())
    }

    fn at(day: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, day)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn debit(day: u32, amount: f64) -> Transaction {
        Transaction::debit(Uuid::nil(), at(day), "POS 1", "", amount)
    }

    fn credit(day: u32, amount: f64) -> Transaction {
        Transaction::credit(Uuid::nil(), at(day), "NEFT CR", "", amount)
    }

    #[test]
    fn finalize_sorts_and_recomputes() {
        let params = FinalizeParams {
            starting_balance: 1000.0,
            closing_balance: None,
            window_start: None,
            window_end: None,
        };
        let rows = vec![debit(20, 100.0), credit(5, 400.0)];
        let out = finalize(rows, &params, &mut ctx());
        assert_eq!(out.len(), 2);
        assert!(out[0].timestamp.date() < out[1].timestamp.date());
        assert_eq!(out[0].balance, 1400.0);
        assert_eq!(out[1].balance, 1300.0);
    }

    #[test]
    fn deficits_trigger_one_opening_credit() {
        let params = FinalizeParams {
            starting_balance: 100.0,
            closing_balance: None,
            window_start: None,
            window_end: None,
        };
        let rows = vec![debit(10, 5000.0), credit(15, 6000.0)];
        let out = finalize(rows, &params, &mut ctx());
        assert_eq!(out.len(), 3);
        assert!(out[0].description.starts_with("Opening Balance Credit"));
        assert!(out[0].timestamp.date() < out[1].timestamp.date());
        assert!(out.iter().all(|txn| txn.balance >= 0.0));
    }

    #[test]
    fn healthy_ledgers_get_no_repair_row() {
        let params = FinalizeParams {
            starting_balance: 10_000.0,
            closing_balance: None,
            window_start: None,
            window_end: None,
        };
        let out = finalize(vec![debit(10, 500.0)], &params, &mut ctx());
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn closing_target_appends_the_literal_last_row() {
        let params = FinalizeParams {
            starting_balance: 1000.0,
            closing_balance: Some(5000.0),
            window_start: None,
            window_end: None,
        };
        let out = finalize(vec![debit(10, 200.0)], &params, &mut ctx());
        let last = out.last().unwrap();
        assert_eq!(last.description, "Funds Transfer Credit");
        assert!((last.balance - 5000.0).abs() < 0.005);
    }

    #[test]
    fn closing_target_can_debit_down() {
        let params = FinalizeParams {
            starting_balance: 9000.0,
            closing_balance: Some(5000.0),
            window_start: None,
            window_end: None,
        };
        let out = finalize(vec![credit(10, 200.0)], &params, &mut ctx());
        let last = out.last().unwrap();
        assert_eq!(last.description, "Funds Transfer Debit");
        assert!((last.balance - 5000.0).abs() < 0.005);
    }

    #[test]
    fn window_filter_drops_out_of_range_rows() {
        let params = FinalizeParams {
            starting_balance: 10_000.0,
            closing_balance: None,
            window_start: NaiveDate::from_ymd_opt(2025, 3, 8),
            window_end: NaiveDate::from_ymd_opt(2025, 3, 18),
        };
        let rows = vec![debit(5, 100.0), debit(10, 100.0), debit(25, 100.0)];
        let out = finalize(rows, &params, &mut ctx());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].timestamp.date().day(), 10);
        assert_eq!(out[0].balance, 9900.0);
    }

    #[test]
    fn times_land_in_business_hours() {
        let params = FinalizeParams {
            starting_balance: 10_000.0,
            closing_balance: None,
            window_start: None,
            window_end: None,
        };
        let rows = (1..=20).map(|day| debit(day, 10.0)).collect();
        let out = finalize(rows, &params, &mut ctx());
        for txn in &out {
            let hour = chrono::Timelike::hour(&txn.timestamp);
            assert!((9..21).contains(&hour));
        }
    }

    #[test]
    fn cash_deposit_detection_covers_the_catalogue_markers() {
        assert!(cash_deposit_like("CSH DEP (CDM)-123\n 456"));
        assert!(cash_deposit_like("CASH DEPOSIT AT BRANCH"));
        assert!(cash_deposit_like("CASH DEP-BR123-456"));
        assert!(!cash_deposit_like("UPI/CR/123/RAVI"));
    }
}
