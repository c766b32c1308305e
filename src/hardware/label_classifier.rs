// Label-mode hardware classification
//
// A quick, user-facing verdict: "Old", "Medium" or "New". Scores CPU, RAM
// and GPU on 0..=3, weights them 40/30/30 and cuts at 2.5 and 1.5.
// Works in tenths so the cut points are exact.

use crate::hardware::{CapabilityClassifier, HardwareFacts};
use serde::{Deserialize, Serialize};

// Weights in tenths: 0.4, 0.3, 0.3
const CPU_WEIGHT: u32 = 4;
const RAM_WEIGHT: u32 = 3;
const GPU_WEIGHT: u32 = 3;

// Thresholds in tenths: 2.5 and 1.5
const NEW_THRESHOLD: u32 = 25;
const MEDIUM_THRESHOLD: u32 = 15;

/// Inclusive ranges, highest first: (lower bound, score)
const CPU_TIERS: &[(u32, u32)] = &[(8, 3), (4, 2), (2, 1), (0, 0)];
const RAM_TIERS_MB: &[(f64, u32)] = &[(8000.0, 3), (4000.0, 2), (2000.0, 1), (0.0, 0)];
const GPU_MEMORY_TIERS_MB: &[(f64, u32)] = &[(6000.0, 3), (4000.0, 2), (2000.0, 1), (0.0, 0)];

/// Lowercase name fragments per GPU tier, checked high to low
const HIGH_TIER_GPUS: &[&str] = &[
    "rtx", "rx 6", "rx 7", "rx 9", "radeon pro", "arc a7", "titan",
];
const MID_TIER_GPUS: &[&str] = &[
    "gtx", "rx 5", "rx 4", "quadro", "arc a3", "arc a5", "iris xe", "radeon 780m", "radeon 680m",
];
const LOW_TIER_GPUS: &[&str] = &[
    "geforce mx", "intel uhd", "intel hd", "uhd graphics", "hd graphics", "iris", "vega",
    "radeon r", "geforce gt", "mali", "adreno",
];

/// Coarse hardware verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TierLabel {
    Old,
    Medium,
    New,
    /// The facts couldn't be read
    Unknown,
}

impl TierLabel {
    pub fn name(&self) -> &str {
        match self {
            TierLabel::Old => "Old",
            TierLabel::Medium => "Medium",
            TierLabel::New => "New",
            TierLabel::Unknown => "Unknown",
        }
    }

    /// Get a human-readable description of this tier
    pub fn description(&self) -> &'static str {
        match self {
            TierLabel::Old => "Older hardware: lightweight distros will feel best",
            TierLabel::Medium => "Mid-range hardware: most desktop distros run fine",
            TierLabel::New => "Modern hardware: anything goes",
            TierLabel::Unknown => "Hardware information unavailable",
        }
    }
}

impl std::fmt::Display for TierLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Sub-scores and weighted total behind a label
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TierAssessment {
    pub cpu: u32,
    pub ram: u32,
    pub gpu: u32,
    pub label: TierLabel,
    /// Weighted score in tenths (30 == 3.0)
    weighted_tenths: u32,
}

impl TierAssessment {
    /// Weighted score on the 0.0..=3.0 scale
    pub fn score(&self) -> f64 {
        self.weighted_tenths as f64 / 10.0
    }
}

/// Label-mode classifier
#[derive(Debug, Default, Clone, Copy)]
pub struct LabelClassifier;

impl LabelClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn score_cpu(cores: u32) -> u32 {
        CPU_TIERS
            .iter()
            .find(|(min, _)| cores >= *min)
            .map(|(_, score)| *score)
            .unwrap_or(0)
    }

    pub fn score_ram(ram_mb: f64) -> u32 {
        score_amount(ram_mb, RAM_TIERS_MB)
    }

    /// Best name match over all GPUs, else their combined memory
    pub fn score_gpu(facts: &HardwareFacts) -> u32 {
        let by_name = facts
            .gpus
            .iter()
            .filter_map(|gpu| gpu.name.as_deref())
            .filter_map(Self::score_gpu_name)
            .max();

        by_name.unwrap_or_else(|| score_amount(facts.total_gpu_memory_mb(), GPU_MEMORY_TIERS_MB))
    }

    /// Tier for a GPU name, None when no fragment matches
    pub fn score_gpu_name(name: &str) -> Option<u32> {
        let name = name.to_lowercase();
        let matches = |fragments: &[&str]| fragments.iter().any(|f| name.contains(f));

        if matches(HIGH_TIER_GPUS) {
            Some(3)
        } else if matches(MID_TIER_GPUS) {
            Some(2)
        } else if matches(LOW_TIER_GPUS) {
            Some(1)
        } else {
            None
        }
    }

    pub fn label_for(weighted_tenths: u32) -> TierLabel {
        if weighted_tenths >= NEW_THRESHOLD {
            TierLabel::New
        } else if weighted_tenths >= MEDIUM_THRESHOLD {
            TierLabel::Medium
        } else {
            TierLabel::Old
        }
    }

    /// Full breakdown for a snapshot
    pub fn assess(&self, facts: &HardwareFacts) -> TierAssessment {
        let cpu = Self::score_cpu(facts.cores);
        let ram = Self::score_ram(facts.ram_mb);
        let gpu = Self::score_gpu(facts);

        let weighted_tenths = CPU_WEIGHT * cpu + RAM_WEIGHT * ram + GPU_WEIGHT * gpu;
        let label = Self::label_for(weighted_tenths);

        tracing::debug!(
            "Tier scores cpu={} ram={} gpu={} -> {:.1} ({})",
            cpu,
            ram,
            gpu,
            weighted_tenths as f64 / 10.0,
            label
        );

        TierAssessment {
            cpu,
            ram,
            gpu,
            label,
            weighted_tenths,
        }
    }
}

impl CapabilityClassifier for LabelClassifier {
    type Output = TierLabel;

    fn classify(&self, facts: &HardwareFacts) -> TierLabel {
        self.assess(facts).label
    }

    fn fallback(&self) -> TierLabel {
        TierLabel::Unknown
    }
}

fn score_amount(amount: f64, tiers: &[(f64, u32)]) -> u32 {
    tiers
        .iter()
        .find(|(min, _)| amount >= *min)
        .map(|(_, score)| *score)
        .unwrap_or(0)
}
