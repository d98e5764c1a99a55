//! Weighted choice over a small finite outcome set.

use crate::error::ConfigurationError;

use super::random::UniformSource;

/// Draws one outcome from a single uniform value by cumulative weight.
///
/// Weights need not sum to exactly 1; a draw that lands past the total
/// (floating drift) returns the last outcome.
///
/// # Examples
///
/// ```
/// use chargepoint_sim::sim::sampler::WeightedSampler;
///
/// let sampler = WeightedSampler::new(vec!['a', 'b'], vec![0.25, 0.75]).unwrap();
/// assert_eq!(*sampler.pick(0.1), 'a');
/// assert_eq!(*sampler.pick(0.9), 'b');
/// ```
#[derive(Debug, Clone)]
pub struct WeightedSampler<T> {
    outcomes: Vec<T>,
    weights: Vec<f64>,
}

impl<T> WeightedSampler<T> {
    /// Creates a sampler over `outcomes` with matching `weights`.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigurationError` if there are no outcomes, the lengths
    /// differ, or a weight is negative or non-finite.
    pub fn new(outcomes: Vec<T>, weights: Vec<f64>) -> Result<Self, ConfigurationError> {
        if outcomes.is_empty() {
            return Err(ConfigurationError::EmptyDistribution);
        }
        if outcomes.len() != weights.len() {
            return Err(ConfigurationError::WeightCountMismatch {
                outcomes: outcomes.len(),
                weights: weights.len(),
            });
        }
        if let Some((index, &weight)) = weights
            .iter()
            .enumerate()
            .find(|&(_, w)| !w.is_finite() || *w < 0.0)
        {
            return Err(ConfigurationError::InvalidWeight { index, weight });
        }
        Ok(Self { outcomes, weights })
    }

    /// Wraps a built-in table known to be well-formed.
    pub(crate) fn from_table(outcomes: Vec<T>, weights: Vec<f64>) -> Self {
        debug_assert!(!outcomes.is_empty() && outcomes.len() == weights.len());
        Self { outcomes, weights }
    }

    /// Returns the first outcome whose cumulative weight reaches `draw`.
    pub fn pick(&self, draw: f64) -> &T {
        let mut cumulative = 0.0;
        for (outcome, weight) in self.outcomes.iter().zip(&self.weights) {
            cumulative += weight;
            if draw <= cumulative {
                return outcome;
            }
        }
        // non-empty by construction
        &self.outcomes[self.outcomes.len() - 1]
    }

    /// Consumes one draw from `source` and picks an outcome.
    pub fn sample<R: UniformSource + ?Sized>(&self, source: &mut R) -> &T {
        self.pick(source.next_unit())
    }

    /// Outcomes in sampling order.
    pub fn outcomes(&self) -> &[T] {
        &self.outcomes
    }

    /// Weights in sampling order.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Sum of all weights.
    pub fn total_weight(&self) -> f64 {
        self.weights.iter().sum()
    }
}
