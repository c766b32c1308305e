// Vector-mode hardware classification
//
// Turns a hardware snapshot into five ordinal scores that the recommender
// weighs axis by axis: [CPU, RAM, storage type, storage size, GPU].
// The breakpoints are not contiguous on purpose (CPU never scores 3).

use crate::hardware::{CapabilityClassifier, GpuInfo, HardwareFacts, StorageDevice};
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

pub const HARDWARE_AXES: usize = 5;

pub const CPU_AXIS: usize = 0;
pub const RAM_AXIS: usize = 1;
pub const STORAGE_TYPE_AXIS: usize = 2;
pub const STORAGE_SIZE_AXIS: usize = 3;
pub const GPU_AXIS: usize = 4;

// Name used when the collector found no graphics adapter
const UNKNOWN_GPU: &str = "Unknown";

// Recent discrete cards
const HIGH_PERF_GPU_PATTERNS: &[&str] = &[
    r"RTX\s?\d{3,}",
    r"RX\s?(6|7|8)\d{2,}",
    r"GTX\s?(9|1[0-6])\d{2,}",
];

// Older discrete cards and the better integrated chips
const MID_PERF_GPU_PATTERNS: &[&str] = &[
    r"GTX\s?[1-8]\d{2,}",
    r"R5\s?\d{3,}",
    r"HD\s?\d{3,4}",
    r"Intel\s?(UHD|HD)",
];

/// Ordinal scores per hardware axis
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CapabilityVector(pub [i32; HARDWARE_AXES]);

impl CapabilityVector {
    pub fn zero() -> Self {
        Self([0; HARDWARE_AXES])
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.0
    }

    pub fn cpu(&self) -> i32 {
        self.0[CPU_AXIS]
    }

    pub fn ram(&self) -> i32 {
        self.0[RAM_AXIS]
    }

    pub fn storage_type(&self) -> i32 {
        self.0[STORAGE_TYPE_AXIS]
    }

    pub fn storage_size(&self) -> i32 {
        self.0[STORAGE_SIZE_AXIS]
    }

    pub fn gpu(&self) -> i32 {
        self.0[GPU_AXIS]
    }
}

impl From<[i32; HARDWARE_AXES]> for CapabilityVector {
    fn from(scores: [i32; HARDWARE_AXES]) -> Self {
        Self(scores)
    }
}

/// Vector-mode classifier
pub struct VectorClassifier {
    high_perf_gpu: Vec<Regex>,
    mid_perf_gpu: Vec<Regex>,
}

impl VectorClassifier {
    pub fn new() -> Self {
        // Compile the GPU tables once per classifier
        Self {
            high_perf_gpu: compile_patterns(HIGH_PERF_GPU_PATTERNS),
            mid_perf_gpu: compile_patterns(MID_PERF_GPU_PATTERNS),
        }
    }

    pub fn classify_cpu(cores: u32) -> i32 {
        match cores {
            6.. => 5,
            4..=5 => 4,
            2..=3 => 2,
            1 => 1,
            0 => 0,
        }
    }

    pub fn classify_ram(ram_mb: f64) -> i32 {
        if ram_mb >= 8000.0 {
            4
        } else if ram_mb >= 4000.0 {
            2
        } else if ram_mb > 0.0 {
            1
        } else {
            0
        }
    }

    /// Score storage as (type, size), each the best over all devices
    ///
    /// Type is 1 when any disk is solid state. Size uses the largest disk.
    pub fn classify_storage(devices: &[StorageDevice]) -> (i32, i32) {
        devices.iter().fold((0, 0), |(type_score, size_score), device| {
            let device_type = if device.is_solid_state() { 1 } else { 0 };
            let device_size = if device.size_gb >= 1000.0 {
                3
            } else if device.size_gb >= 500.0 {
                2
            } else if device.size_gb > 0.0 {
                1
            } else {
                0
            };

            (type_score.max(device_type), size_score.max(device_size))
        })
    }

    /// Name of the first GPU, or "Unknown" when there is none
    pub fn extract_gpu_name(gpus: &[GpuInfo]) -> &str {
        gpus.first()
            .and_then(|gpu| gpu.name.as_deref())
            .unwrap_or(UNKNOWN_GPU)
    }

    pub fn classify_gpu(&self, gpu_name: &str) -> i32 {
        if self.high_perf_gpu.iter().any(|re| re.is_match(gpu_name)) {
            return 3;
        }
        if self.mid_perf_gpu.iter().any(|re| re.is_match(gpu_name)) {
            return 2;
        }

        let name = gpu_name.trim();
        if name.is_empty() || name == UNKNOWN_GPU {
            0
        } else {
            1
        }
    }
}

impl Default for VectorClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl CapabilityClassifier for VectorClassifier {
    type Output = CapabilityVector;

    fn classify(&self, facts: &HardwareFacts) -> CapabilityVector {
        let (storage_type, storage_size) = Self::classify_storage(&facts.storage);
        let gpu_name = Self::extract_gpu_name(&facts.gpus);

        let vector = CapabilityVector([
            Self::classify_cpu(facts.cores),
            Self::classify_ram(facts.ram_mb),
            storage_type,
            storage_size,
            self.classify_gpu(gpu_name),
        ]);

        tracing::debug!("Hardware vector for GPU '{}': {:?}", gpu_name, vector.0);
        vector
    }

    fn fallback(&self) -> CapabilityVector {
        CapabilityVector::zero()
    }
}

fn compile_patterns(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .filter_map(|pattern| {
            RegexBuilder::new(pattern)
                .case_insensitive(true)
                .build()
                .ok()
        })
        .collect()
}
