//! Hypergeometric point and cumulative probabilities.
//!
//! Argument order follows the usual `(k, population_successes, draws,
//! population_size)` convention: drawing `draws` cards without replacement
//! from `population_size` cards of which `population_successes` are agendas.

use crate::errors::{BreachError, ErrorInfo};

/// Provider of hypergeometric probabilities used by every probe.
pub trait Hypergeometric: Send + Sync {
    /// Probability of drawing exactly `k` successes.
    fn point_probability(
        &self,
        k: u32,
        population_successes: u32,
        draws: u32,
        population_size: u32,
    ) -> Result<f64, BreachError>;

    /// Probability of drawing at most `k` successes.
    fn cumulative_probability(
        &self,
        k: u32,
        population_successes: u32,
        draws: u32,
        population_size: u32,
    ) -> Result<f64, BreachError>;

    /// Probability of drawing at least `k` successes, `1 - CDF(k - 1)`.
    fn tail_probability(
        &self,
        k: u32,
        population_successes: u32,
        draws: u32,
        population_size: u32,
    ) -> Result<f64, BreachError> {
        check_domain(population_successes, draws, population_size)?;
        if k == 0 {
            return Ok(1.0);
        }
        let below =
            self.cumulative_probability(k - 1, population_successes, draws, population_size)?;
        Ok(1.0 - below)
    }
}

/// Exact evaluation through binomial coefficients taken in log space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExactHypergeometric;

impl Hypergeometric for ExactHypergeometric {
    fn point_probability(
        &self,
        k: u32,
        population_successes: u32,
        draws: u32,
        population_size: u32,
    ) -> Result<f64, BreachError> {
        check_domain(population_successes, draws, population_size)?;
        Ok(pmf(k, population_successes, draws, population_size))
    }

    fn cumulative_probability(
        &self,
        k: u32,
        population_successes: u32,
        draws: u32,
        population_size: u32,
    ) -> Result<f64, BreachError> {
        check_domain(population_successes, draws, population_size)?;
        let upper = k.min(population_successes).min(draws);
        let total: f64 = (0..=upper)
            .map(|i| pmf(i, population_successes, draws, population_size))
            .sum();
        if !total.is_finite() {
            return Err(BreachError::DegenerateDistribution(
                ErrorInfo::new("non-finite-probability", "cumulative sum is not finite")
                    .with_context("k", k)
                    .with_context("population_successes", population_successes)
                    .with_context("draws", draws)
                    .with_context("population_size", population_size),
            ));
        }
        Ok(total.min(1.0))
    }
}

fn check_domain(
    population_successes: u32,
    draws: u32,
    population_size: u32,
) -> Result<(), BreachError> {
    if population_successes > population_size || draws > population_size {
        return Err(BreachError::DegenerateDistribution(
            ErrorInfo::new(
                "hypergeometric-domain",
                "successes and draws must not exceed the population size",
            )
            .with_context("population_successes", population_successes)
            .with_context("draws", draws)
            .with_context("population_size", population_size),
        ));
    }
    Ok(())
}

fn pmf(k: u32, successes: u32, draws: u32, population: u32) -> f64 {
    if k > successes || k > draws || draws - k > population - successes {
        return 0.0;
    }
    let ln_p = ln_choose(successes, k) + ln_choose(population - successes, draws - k)
        - ln_choose(population, draws);
    ln_p.exp()
}

/// Natural log of the binomial coefficient, summed term by term so large
/// decks never overflow.
fn ln_choose(n: u32, k: u32) -> f64 {
    let k = k.min(n - k);
    (0..k)
        .map(|i| (f64::from(n - i) / f64::from(i + 1)).ln())
        .sum()
}

/// Probability that `draws` cards show at least one agenda.
pub fn hit_probability(
    provider: &dyn Hypergeometric,
    population_successes: u32,
    draws: u32,
    population_size: u32,
) -> Result<f64, BreachError> {
    provider.tail_probability(1, population_successes, draws, population_size)
}

/// Blends two conditional probabilities by the chance of the first event.
pub fn split_probability(success_prob: f64, on_success: f64, on_failure: f64) -> f64 {
    success_prob * on_success + (1.0 - success_prob) * on_failure
}
