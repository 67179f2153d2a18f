#![doc(test(attr(deny(warnings))))]

//! Statement Core generates synthetic, balance-consistent bank statements from
//! a single integer seed: a salaried or self-employed income profile, a bank's
//! textual conventions, and a date window go in, an immutable
//! [`domain::Statement`] comes out. Rendering, OCR, and storage are
//! collaborators outside this crate.

pub mod builder;
pub mod context;
pub mod domain;
pub mod errors;
pub mod income;
pub mod profiles;
pub mod reference;
pub mod rng;
pub mod utils;

pub use builder::{generate, generate_salaried, generate_self_employed};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Statement Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
