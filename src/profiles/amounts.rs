//! Tiered amount synthesis. Uniform amounts read as synthetic at a glance;
//! real ledgers concentrate mass in a small band, thin out toward larger
//! figures, and favor round numbers for person-to-person rails. Each profile
//! category declares its bands and round bias once and samples through here.

use crate::rng::SeededRng;
use crate::utils::round2;

/// One magnitude band. `cutoff` is the cumulative probability threshold the
/// tier draw is compared against, so bands must be declared in ascending
/// cutoff order with the last at 1.0.
#[derive(Debug, Clone, Copy)]
pub struct Band {
    pub cutoff: f64,
    pub min: f64,
    pub max: f64,
}

/// Band table plus rounding policy. `round_step` of zero means the category
/// always draws continuous 2-decimal amounts (service charges, cashback);
/// otherwise amounts snap to multiples of the step with `round_probability`.
#[derive(Debug, Clone, Copy)]
pub struct TieredAmount {
    pub bands: &'static [Band],
    pub round_step: f64,
    pub round_probability: f64,
}

impl TieredAmount {
    pub fn sample(&self, rng: &mut SeededRng) -> f64 {
        let tier = rng.next_f64();
        let band = self
            .bands
            .iter()
            .find(|band| tier < band.cutoff)
            .unwrap_or(&self.bands[self.bands.len() - 1]);

        if self.round_step > 0.0 && rng.next_f64() < self.round_probability {
            let low = (band.min / self.round_step).ceil() as i64;
            let high = (band.max / self.round_step).floor() as i64;
            if low <= high {
                return rng.random_int(low, high) as f64 * self.round_step;
            }
        }
        round2(rng.random_float(band.min, band.max, 2))
    }
}

/// Uniform pick from a fixed amount menu (ATM notes, EMI plans, recharge
/// packs come in fixed denominations, not ranges).
pub fn menu_amount(menu: &'static [f64], rng: &mut SeededRng) -> f64 {
    *rng.pick(menu)
}
