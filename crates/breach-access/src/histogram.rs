//! Result histogram over the total number of stolen agendas.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Probability of ending a sequence with each total of stolen agendas.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Histogram {
    buckets: BTreeMap<u32, f64>,
}

impl Histogram {
    /// Creates an empty histogram.
    pub fn new() -> Self {
        Self::default()
    }

    /// Histogram holding all mass on zero steals.
    pub fn certain_miss() -> Self {
        Self::new().with_added(0, 1.0)
    }

    /// Builds empirical frequencies from sampled counts.
    pub fn from_counts(counts: &BTreeMap<u32, u64>, trials: u64) -> Self {
        counts
            .iter()
            .fold(Self::new(), |histogram, (&stolen, &hits)| {
                histogram.with_added(stolen, hits as f64 / trials as f64)
            })
    }

    /// Returns the histogram with `probability` added to the `stolen` bucket.
    pub fn with_added(mut self, stolen: u32, probability: f64) -> Self {
        *self.buckets.entry(stolen).or_insert(0.0) += probability;
        self
    }

    /// Probability of stealing exactly `stolen` agendas.
    pub fn probability(&self, stolen: u32) -> f64 {
        self.buckets.get(&stolen).copied().unwrap_or(0.0)
    }

    /// Probability of stealing at least `stolen` agendas.
    pub fn at_least(&self, stolen: u32) -> f64 {
        self.buckets.range(stolen..).map(|(_, p)| p).sum()
    }

    /// Sum of all buckets; one for a complete composition.
    pub fn total(&self) -> f64 {
        self.buckets.values().sum()
    }

    /// Expected number of stolen agendas.
    pub fn expected_successes(&self) -> f64 {
        self.buckets
            .iter()
            .map(|(&stolen, &p)| stolen as f64 * p)
            .sum()
    }

    /// Largest total with a bucket.
    pub fn max_successes(&self) -> Option<u32> {
        self.buckets.keys().next_back().copied()
    }

    /// Largest absolute difference between matching buckets of two histograms.
    pub fn max_abs_deviation(&self, other: &Histogram) -> f64 {
        self.buckets
            .keys()
            .chain(other.buckets.keys())
            .map(|&stolen| (self.probability(stolen) - other.probability(stolen)).abs())
            .fold(0.0, f64::max)
    }

    /// Iterates buckets in ascending order of stolen agendas.
    pub fn iter(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.buckets.iter().map(|(&stolen, &p)| (stolen, p))
    }

    /// Number of buckets.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Returns true when no bucket exists.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}
