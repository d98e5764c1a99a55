//! Trip-distance distribution for arriving vehicles.

use crate::error::ConfigurationError;

use super::random::UniformSource;
use super::sampler::WeightedSampler;

/// Empirical trip distances in km. `0` means the car needs no charge.
pub const DEMAND_DISTANCES_KM: [f64; 9] = [0.0, 5.0, 10.0, 20.0, 30.0, 50.0, 100.0, 200.0, 300.0];

/// Probability of each entry in [`DEMAND_DISTANCES_KM`], in percent.
pub const DEMAND_PROBABILITY_PERCENT: [f64; 9] =
    [24.31, 14.9, 9.8, 11.76, 8.82, 11.76, 10.78, 4.9, 2.94];

/// Distance (km) an arriving vehicle needs to recharge for.
#[derive(Debug, Clone)]
pub struct DemandDistribution {
    sampler: WeightedSampler<f64>,
}

impl DemandDistribution {
    /// The fixed empirical table, normalised to fractions.
    pub fn empirical() -> Self {
        let weights = DEMAND_PROBABILITY_PERCENT.iter().map(|p| p / 100.0).collect();
        Self {
            sampler: WeightedSampler::from_table(DEMAND_DISTANCES_KM.to_vec(), weights),
        }
    }

    /// Builds a distribution from `(distance_km, probability)` pairs.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigurationError` if `pairs` is empty or holds a negative
    /// or non-finite probability or distance.
    pub fn from_pairs(pairs: &[(f64, f64)]) -> Result<Self, ConfigurationError> {
        if pairs.iter().any(|(d, _)| !d.is_finite()) {
            return Err(ConfigurationError::NonFinite { field: "distanceKm" });
        }
        if let Some(&(distance, _)) = pairs.iter().find(|(d, _)| *d < 0.0) {
            return Err(ConfigurationError::Negative {
                field: "distanceKm",
                value: distance,
            });
        }
        let (distances, weights): (Vec<f64>, Vec<f64>) = pairs.iter().copied().unzip();
        Ok(Self {
            sampler: WeightedSampler::new(distances, weights)?,
        })
    }

    /// Consumes one draw and returns a distance in km.
    pub fn sample_km<R: UniformSource + ?Sized>(&self, source: &mut R) -> f64 {
        *self.sampler.sample(source)
    }

    /// Probability that an arrival needs no charge.
    pub fn no_charge_probability(&self) -> f64 {
        self.pairs()
            .filter(|(distance, _)| *distance <= 0.0)
            .map(|(_, weight)| weight)
            .sum::<f64>()
            / self.sampler.total_weight()
    }

    /// Mean distance per arrival in km.
    pub fn expected_distance_km(&self) -> f64 {
        self.pairs().map(|(d, w)| d * w).sum::<f64>() / self.sampler.total_weight()
    }

    fn pairs(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.sampler
            .outcomes()
            .iter()
            .copied()
            .zip(self.sampler.weights().iter().copied())
    }
}

impl Default for DemandDistribution {
    fn default() -> Self {
        Self::empirical()
    }
}
