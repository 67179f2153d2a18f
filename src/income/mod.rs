//! Inflow shaping for the two account-holder kinds. Profiles are stateless:
//! they draw from the caller's stream and return plain amounts, leaving
//! dating and description to the ledger builder.

use crate::rng::SeededRng;
use crate::utils::round2;

const SALARY_JITTER_LOW: f64 = 0.98;
const SALARY_JITTER_HIGH: f64 = 1.02;
const TURNOVER_FRACTION_LOW: f64 = 0.05;
const TURNOVER_FRACTION_HIGH: f64 = 0.25;

/// One scheduled salary credit per covered month.
#[derive(Debug, Clone, Copy)]
pub struct SalariedIncome {
    pub salary_amount: f64,
}

impl SalariedIncome {
    /// Monthly credit with the small payroll jitter real statements show.
    pub fn draw_credit(&self, rng: &mut SeededRng) -> f64 {
        rng.random_float(
            self.salary_amount * SALARY_JITTER_LOW,
            self.salary_amount * SALARY_JITTER_HIGH,
            2,
        )
    }
}

/// Declared turnover split across a number of credit events.
#[derive(Debug, Clone, Copy)]
pub struct SelfEmployedIncome {
    pub turnover: f64,
}

impl SelfEmployedIncome {
    /// Splits the turnover into `credit_count` slices. Each slice takes a
    /// random 5-25% fraction of what remains, so slices shrink over the run;
    /// the residue after the last draw is rolled into the first slice, which
    /// keeps the slices summing to the turnover exactly.
    pub fn split(&self, credit_count: usize, rng: &mut SeededRng) -> Vec<f64> {
        let mut amounts = Vec::with_capacity(credit_count);
        let mut remaining = self.turnover;

        for _ in 0..credit_count {
            if remaining < 0.01 {
                break;
            }
            let fraction = rng.random_float(TURNOVER_FRACTION_LOW, TURNOVER_FRACTION_HIGH, 2);
            // Every slice stays a positive cent amount and never overdraws
            // what is left, so the ledger gets no zero-value credits.
            let amount = round2((remaining * fraction).max(0.01)).min(remaining);
            amounts.push(amount);
            remaining = round2(remaining - amount);
        }

        if remaining > 0.0 {
            if let Some(first) = amounts.first_mut() {
                *first = round2(*first + remaining);
            }
        }

        amounts
    }
}

#[cfg(test)]
mod tests {
    use super::{SalariedIncome, SelfEmployedIncome};
    use crate::rng::SeededRng;
    use crate::utils::round2;

    #[test]
    fn salary_credits_stay_inside_the_jitter_band() {
        let income = SalariedIncome {
            salary_amount: 50_000.0,
        };
        let mut rng = SeededRng::new(42);
        for _ in 0..200 {
            let credit = income.draw_credit(&mut rng);
            assert!((49_000.0..=51_000.0).contains(&credit));
        }
    }

    #[test]
    fn turnover_split_conserves_the_total() {
        let income = SelfEmployedIncome {
            turnover: 1_200_000.0,
        };
        let mut rng = SeededRng::new(7);
        let slices = income.split(90, &mut rng);
        assert_eq!(slices.len(), 90);
        let total = round2(slices.iter().fold(0.0, |acc, slice| acc + slice));
        assert!((total - 1_200_000.0).abs() < 0.005);
        assert!(slices.iter().all(|slice| *slice >= 0.01));
    }

    #[test]
    fn turnover_slices_trend_downward() {
        let income = SelfEmployedIncome { turnover: 600_000.0 };
        let mut rng = SeededRng::new(12);
        let slices = income.split(20, &mut rng);
        // Decreasing remainder: the first half of the run carries most mass.
        let front: f64 = slices[..10].iter().sum();
        let back: f64 = slices[10..].iter().sum();
        assert!(front > back);
    }

    #[test]
    fn zero_credit_events_produce_no_slices() {
        let income = SelfEmployedIncome { turnover: 100.0 };
        let mut rng = SeededRng::new(1);
        assert!(income.split(0, &mut rng).is_empty());
    }
}
