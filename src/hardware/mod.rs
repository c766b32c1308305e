/// Hardware module
///
/// Parses hardware facts and classifies them, either as a per-axis
/// capability vector for ranking or as a single tier label.

pub mod classifier;
pub mod facts;
pub mod label_classifier;
pub mod vector_classifier;

pub use classifier::CapabilityClassifier;
pub use facts::{GpuInfo, HardwareFacts, StorageDevice};
pub use label_classifier::{LabelClassifier, TierAssessment, TierLabel};
pub use vector_classifier::{CapabilityVector, VectorClassifier, HARDWARE_AXES};
