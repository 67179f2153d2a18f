//! Per-build mutable state. The source application kept a used-names set and
//! the account holder's location in module-level variables, which leaked
//! between statements; here every build gets its own context and threads it
//! through explicitly, so concurrent generations cannot observe each other.

use std::collections::HashSet;

use crate::domain::StatementDetails;
use crate::rng::SeededRng;

const DEFAULT_CITY: &str = "BHOPAL";
const DEFAULT_BRANCH_LOCATION: &str = "Main Branch";

/// Everything a statement build mutates: the seeded stream, the person-name
/// ledger that keeps one statement from showing circular transfers between
/// the same two parties, and the holder's location strings some profiles
/// weave into narrations.
pub struct GenerationContext {
    pub rng: SeededRng,
    used_names: HashSet<&'static str>,
    user_city: String,
    branch_location: String,
}

impl GenerationContext {
    pub fn new(seed: u64, details: &StatementDetails) -> Self {
        let user_city = details
            .city
            .as_deref()
            .map(str::trim)
            .filter(|city| !city.is_empty())
            .map(str::to_uppercase)
            .unwrap_or_else(|| DEFAULT_CITY.to_string());

        let branch_location = details
            .branch_address
            .as_deref()
            .and_then(extract_branch_location)
            .unwrap_or_else(|| DEFAULT_BRANCH_LOCATION.to_string());

        Self {
            rng: SeededRng::new(seed),
            used_names: HashSet::new(),
            user_city,
            branch_location,
        }
    }

    pub fn user_city(&self) -> &str {
        &self.user_city
    }

    pub fn branch_location(&self) -> &str {
        &self.branch_location
    }

    /// Draws a name from the pool that has not appeared in this statement
    /// yet. Once the pool is exhausted the ledger resets and reuse begins
    /// again rather than failing.
    pub fn unique_name(&mut self, pool: &'static [&'static str]) -> &'static str {
        let available: Vec<&'static str> = pool
            .iter()
            .copied()
            .filter(|name| !self.used_names.contains(name))
            .collect();

        if available.is_empty() {
            self.used_names.clear();
            return *self.rng.pick(pool);
        }

        let selected = *self.rng.pick(&available);
        self.used_names.insert(selected);
        selected
    }
}

fn extract_branch_location(branch_address: &str) -> Option<String> {
    let words: Vec<&str> = branch_address
        .split(|ch: char| ch == ',' || ch.is_whitespace())
        .filter(|word| word.len() > 2)
        .take(3)
        .collect();
    if words.is_empty() {
        return None;
    }
    Some(words.join(" ").to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::GenerationContext;
    use crate::domain::StatementDetails;

    static POOL: [&str; 4] = ["Ravi Ku", "Kiran J", "Anita R", "Mohan La"];

    fn context_with(city: Option<&str>, branch_address: Option<&str>) -> GenerationContext {
        let details = StatementDetails {
            city: city.map(str::to_string),
            branch_address: branch_address.map(str::to_string),
            ..StatementDetails::default()
        };
        GenerationContext::new(17, &details)
    }

    #[test]
    fn location_defaults_apply_without_form_data() {
        let ctx = context_with(None, None);
        assert_eq!(ctx.user_city(), "BHOPAL");
        assert_eq!(ctx.branch_location(), "Main Branch");
    }

    #[test]
    fn location_derives_from_form_data() {
        let ctx = context_with(Some("indore "), Some("12, MG Road, Vijay Nagar, Indore"));
        assert_eq!(ctx.user_city(), "INDORE");
        assert_eq!(ctx.branch_location(), "ROAD VIJAY NAGAR");
    }

    #[test]
    fn names_stay_unique_until_the_pool_runs_dry() {
        let mut ctx = context_with(None, None);
        let mut drawn: Vec<&str> = (0..POOL.len()).map(|_| ctx.unique_name(&POOL)).collect();
        drawn.sort_unstable();
        let mut expected: Vec<&str> = POOL.to_vec();
        expected.sort_unstable();
        assert_eq!(drawn, expected);

        // Pool exhausted: the ledger resets instead of panicking.
        let reused = ctx.unique_name(&POOL);
        assert!(POOL.contains(&reused));
    }
}
