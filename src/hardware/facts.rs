/// Hardware facts snapshot
///
/// Parsed from the document the platform collector writes
/// (`hardware_info.json`). Parsing is lenient about missing keys (they mean
/// "nothing there") and strict about wrong types, which surface as
/// `InvalidHardware` so the classifiers can fall back.

use crate::error::{FinderError, Result};
use serde_json::{json, Map, Value};

const CORES_KEY: &str = "Number of Cores";
const RAM_KEY: &str = "Total RAM";
const STORAGE_KEY: &str = "Storage";
const STORAGE_SIZE_KEY: &str = "Size (GB)";
const STORAGE_TYPE_KEYS: &[&str] = &["Type", "Interface"];
const DEFAULT_STORAGE_KIND: &str = "SSD";
const GPU_KEY: &str = "GPU";
const GPUS_KEY: &str = "GPUs";
const GPU_NAME_KEY: &str = "GPU Name";
const GPU_MEMORY_KEY: &str = "GPU Memory";

/// Immutable hardware snapshot
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HardwareFacts {
    pub cores: u32,
    pub ram_mb: f64,
    pub storage: Vec<StorageDevice>,
    pub gpus: Vec<GpuInfo>,
}

/// One disk as reported by the collector
#[derive(Debug, Clone, PartialEq)]
pub struct StorageDevice {
    pub size_gb: f64,
    /// Type or interface tag, e.g. "SSD", "HDD", "NVMe"
    pub kind: String,
}

impl StorageDevice {
    pub fn new(size_gb: f64, kind: impl Into<String>) -> Self {
        Self {
            size_gb,
            kind: kind.into(),
        }
    }

    /// Solid state? Matches SSD and NVMe tags in any case.
    pub fn is_solid_state(&self) -> bool {
        let kind = self.kind.to_uppercase();
        kind.contains("SSD") || kind.contains("NVME")
    }
}

/// One graphics adapter
#[derive(Debug, Clone, PartialEq)]
pub struct GpuInfo {
    pub name: Option<String>,
    pub memory_mb: f64,
}

impl GpuInfo {
    pub fn new(name: impl Into<String>, memory_mb: f64) -> Self {
        Self {
            name: Some(name.into()),
            memory_mb,
        }
    }
}

impl HardwareFacts {
    /// Parse the collector's JSON document
    ///
    /// # Returns
    /// * `Ok(HardwareFacts)` - Snapshot with missing parts left empty
    /// * `Err(FinderError::InvalidHardware)` - If a field has the wrong type
    ///   or a negative amount
    pub fn from_json(raw: &Value) -> Result<Self> {
        let doc = raw
            .as_object()
            .ok_or_else(|| invalid("document is not a JSON object"))?;

        let cores = match doc.get(CORES_KEY) {
            None | Some(Value::Null) => 0,
            Some(value) => parse_count(value, CORES_KEY)?,
        };

        let ram_mb = parse_amount(doc.get(RAM_KEY), RAM_KEY)?;

        // Anything but a list means the collector found no disks
        let storage = match doc.get(STORAGE_KEY) {
            Some(Value::Array(devices)) => devices
                .iter()
                .map(parse_storage)
                .collect::<Result<Vec<_>>>()?,
            _ => Vec::new(),
        };

        let gpus = parse_gpus(doc)?;

        Ok(Self {
            cores,
            ram_mb,
            storage,
            gpus,
        })
    }

    /// Serialize back into the collector's document shape
    pub fn to_json(&self) -> Value {
        let storage: Vec<Value> = self
            .storage
            .iter()
            .map(|d| json!({ STORAGE_SIZE_KEY: d.size_gb, "Type": d.kind }))
            .collect();

        let gpus: Vec<Value> = self
            .gpus
            .iter()
            .map(|g| {
                json!({
                    GPU_NAME_KEY: g.name.clone().unwrap_or_else(|| "Unknown".to_string()),
                    GPU_MEMORY_KEY: g.memory_mb,
                })
            })
            .collect();

        json!({
            CORES_KEY: self.cores,
            RAM_KEY: self.ram_mb,
            STORAGE_KEY: storage,
            GPUS_KEY: gpus,
        })
    }

    /// Sum of memory over every GPU, in MB
    pub fn total_gpu_memory_mb(&self) -> f64 {
        self.gpus.iter().map(|g| g.memory_mb).sum()
    }
}

fn invalid(msg: impl Into<String>) -> FinderError {
    FinderError::InvalidHardware(msg.into())
}

fn parse_count(value: &Value, key: &str) -> Result<u32> {
    if let Some(n) = value.as_u64() {
        return u32::try_from(n).map_err(|_| invalid(format!("'{}' is out of range", key)));
    }

    // Some collectors write whole numbers as floats
    match value.as_f64() {
        Some(f) if f >= 0.0 && f.fract() == 0.0 && f <= u32::MAX as f64 => Ok(f as u32),
        _ => Err(invalid(format!(
            "'{}' must be a non-negative whole number, found {}",
            key, value
        ))),
    }
}

fn parse_amount(value: Option<&Value>, key: &str) -> Result<f64> {
    match value {
        None | Some(Value::Null) => Ok(0.0),
        Some(value) => match value.as_f64() {
            Some(f) if f >= 0.0 => Ok(f),
            _ => Err(invalid(format!(
                "'{}' must be a non-negative number, found {}",
                key, value
            ))),
        },
    }
}

fn parse_storage(value: &Value) -> Result<StorageDevice> {
    let device = value
        .as_object()
        .ok_or_else(|| invalid(format!("storage entry is not an object: {}", value)))?;

    let size_gb = parse_amount(device.get(STORAGE_SIZE_KEY), STORAGE_SIZE_KEY)?;
    // Untagged disks are taken to be solid state
    let kind = match STORAGE_TYPE_KEYS.iter().find_map(|key| device.get(*key)) {
        None => DEFAULT_STORAGE_KIND.to_string(),
        Some(tag) => tag.as_str().unwrap_or_default().to_string(),
    };

    Ok(StorageDevice { size_gb, kind })
}

/// A single adapter is written under "GPU" as an object, several under
/// "GPUs" as a list. "GPU" may also hold a placeholder string like
/// "Not Available".
fn parse_gpus(doc: &Map<String, Value>) -> Result<Vec<GpuInfo>> {
    let gpu_data = match doc.get(GPU_KEY) {
        Some(value) if is_truthy(value) => Some(value),
        _ => doc.get(GPUS_KEY),
    };

    match gpu_data {
        Some(single @ Value::Object(_)) => Ok(vec![parse_gpu(single)?]),
        Some(Value::Array(list)) => list.iter().map(parse_gpu).collect(),
        _ => Ok(Vec::new()),
    }
}

fn parse_gpu(value: &Value) -> Result<GpuInfo> {
    let gpu = value
        .as_object()
        .ok_or_else(|| invalid(format!("GPU entry is not an object: {}", value)))?;

    let name = match gpu.get(GPU_NAME_KEY) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => {
            return Err(invalid(format!("'{}' must be a string, found {}", GPU_NAME_KEY, other)))
        }
    };
    let memory_mb = parse_amount(gpu.get(GPU_MEMORY_KEY), GPU_MEMORY_KEY)?;

    Ok(GpuInfo { name, memory_mb })
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
        Value::Number(_) => true,
    }
}
