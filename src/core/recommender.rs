// Ranks distros against the user's preferences and, optionally, hardware
//
// Score per distro = preference dot product, times a penalty for every
// binary-axis mismatch, plus a penalized hardware dot product when a
// hardware vector is given. Highest first; ties keep registry order.

use crate::core::scorer::{Scorer, DEFAULT_PENALTY_FACTOR};
use crate::core::{DistroRegistry, UserPreferences};
use crate::error::{FinderError, Result};
use crate::hardware::{CapabilityVector, HARDWARE_AXES};
use serde::{Deserialize, Serialize};

/// One row of the ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ranking {
    pub distro: String,
    pub score: f64,
}

pub struct Recommender {
    penalty_factor: f64,
}

impl Recommender {
    pub fn new(penalty_factor: f64) -> Self {
        Self { penalty_factor }
    }

    pub fn penalty_factor(&self) -> f64 {
        self.penalty_factor
    }

    /// Rank every distro in the registry
    ///
    /// # Arguments
    /// * `preferences` - Output of the vectorizer
    /// * `registry` - Candidate distros
    /// * `hardware` - Vector-mode classification, if hardware should count
    ///
    /// # Returns
    /// * `Ok(Vec<Ranking>)` - Sorted best first; empty when there are no
    ///   preferences or no distros
    /// * `Err(FinderError::AxisMismatch)` - If a distro's scores don't line
    ///   up with the preference or hardware vector
    pub fn rank(
        &self,
        preferences: &UserPreferences,
        registry: &DistroRegistry,
        hardware: Option<&CapabilityVector>,
    ) -> Result<Vec<Ranking>> {
        if preferences.vector.is_empty() || registry.is_empty() {
            return Ok(Vec::new());
        }

        let hardware_penalty = hardware.map(|hw| Scorer::hardware_penalty(hw, self.penalty_factor));

        let mut rankings = Vec::with_capacity(registry.len());

        for profile in registry.profiles() {
            if profile.preference_scores.len() != preferences.vector.len() {
                return Err(FinderError::AxisMismatch {
                    distro: profile.name.clone(),
                    kind: "preference",
                    expected: preferences.vector.len(),
                    found: profile.preference_scores.len(),
                });
            }

            let mut score = Scorer::dot(&preferences.vector, &profile.preference_scores);
            score *= Scorer::binary_penalty(
                &preferences.binary,
                &profile.binary_scores,
                self.penalty_factor,
            );

            if let (Some(hw), Some(penalty)) = (hardware, hardware_penalty.as_ref()) {
                // Distros without hardware scores just don't get a hardware bonus
                if !profile.hardware_scores.is_empty() {
                    if profile.hardware_scores.len() != HARDWARE_AXES {
                        return Err(FinderError::AxisMismatch {
                            distro: profile.name.clone(),
                            kind: "hardware",
                            expected: HARDWARE_AXES,
                            found: profile.hardware_scores.len(),
                        });
                    }
                    score += Scorer::hardware_contribution(hw, penalty, &profile.hardware_scores);
                }
            }

            tracing::debug!("Scored {}: {:.3}", profile.name, score);

            rankings.push(Ranking {
                distro: profile.name.clone(),
                score,
            });
        }

        // Stable sort keeps registry order on ties
        rankings.sort_by(|a, b| b.score.total_cmp(&a.score));

        Ok(rankings)
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::new(DEFAULT_PENALTY_FACTOR)
    }
}
