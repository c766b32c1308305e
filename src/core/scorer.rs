/// Scoring primitives for the recommender
///
/// Dot products and the multiplicative penalties applied on top of them.

use crate::core::BinaryAxis;
use crate::hardware::vector_classifier::{
    CapabilityVector, CPU_AXIS, GPU_AXIS, HARDWARE_AXES, RAM_AXIS, STORAGE_SIZE_AXIS,
    STORAGE_TYPE_AXIS,
};
use std::collections::BTreeMap;

/// Default multiplier for a mismatch or a weak hardware axis
pub const DEFAULT_PENALTY_FACTOR: f64 = 0.5;

// Axes graded on "at least 2 is fine"
const GRADED_AXES: [usize; 3] = [CPU_AXIS, RAM_AXIS, STORAGE_SIZE_AXIS];
// Axes where only a score of exactly 1 is neutral
const EXACT_AXES: [usize; 2] = [STORAGE_TYPE_AXIS, GPU_AXIS];

/// Scorer for distro fit
pub struct Scorer;

impl Scorer {
    /// Dot product of two equally long vectors
    pub fn dot(a: &[i64], b: &[i64]) -> f64 {
        a.iter().zip(b).map(|(x, y)| (*x as f64) * (*y as f64)).sum()
    }

    /// Multiplier for binary-axis disagreements
    ///
    /// Every axis both sides have a value for and disagree on multiplies the
    /// result by `penalty_factor`, so two mismatches give `penalty_factor²`.
    pub fn binary_penalty(
        user: &BTreeMap<BinaryAxis, i64>,
        distro: &BTreeMap<BinaryAxis, i64>,
        penalty_factor: f64,
    ) -> f64 {
        BinaryAxis::ALL
            .iter()
            .filter_map(|axis| Some((user.get(axis)?, distro.get(axis)?)))
            .filter(|(user_value, distro_value)| user_value != distro_value)
            .fold(1.0, |multiplier, _| multiplier * penalty_factor)
    }

    /// Per-axis multipliers for a hardware vector
    ///
    /// CPU, RAM and storage size are penalized below 2. Storage type and GPU
    /// are penalized whenever they aren't exactly 1.
    pub fn hardware_penalty(hardware: &CapabilityVector, penalty_factor: f64) -> [f64; HARDWARE_AXES] {
        let mut penalty = [1.0; HARDWARE_AXES];

        for axis in GRADED_AXES {
            if hardware.0[axis] < 2 {
                penalty[axis] = penalty_factor;
            }
        }
        for axis in EXACT_AXES {
            if hardware.0[axis] != 1 {
                penalty[axis] = penalty_factor;
            }
        }

        penalty
    }

    /// `dot(hardware ⊙ penalty, distro_scores)`
    pub fn hardware_contribution(
        hardware: &CapabilityVector,
        penalty: &[f64; HARDWARE_AXES],
        distro_scores: &[i64],
    ) -> f64 {
        hardware
            .as_slice()
            .iter()
            .zip(penalty)
            .zip(distro_scores)
            .map(|((value, weight), score)| (*value as f64) * weight * (*score as f64))
            .sum()
    }
}
