/// Distro registry
///
/// Candidate distros as the recommender sees them, built from the
/// `distro.json` document. Read-only once built.

use crate::core::BinaryAxis;
use crate::store::RegistryDocument;
use std::collections::BTreeMap;

/// One candidate distro
#[derive(Debug, Clone, PartialEq)]
pub struct DistroProfile {
    pub name: String,
    /// One score per marking-scheme question, same order
    pub preference_scores: Vec<i64>,
    /// One score per hardware axis, may be empty
    pub hardware_scores: Vec<i64>,
    /// Named scores used for binary-axis comparison
    pub binary_scores: BTreeMap<BinaryAxis, i64>,
}

impl DistroProfile {
    pub fn new(name: impl Into<String>, preference_scores: Vec<i64>) -> Self {
        Self {
            name: name.into(),
            preference_scores,
            hardware_scores: Vec::new(),
            binary_scores: BTreeMap::new(),
        }
    }

    pub fn with_hardware_scores(mut self, hardware_scores: Vec<i64>) -> Self {
        self.hardware_scores = hardware_scores;
        self
    }

    pub fn with_binary_score(mut self, axis: BinaryAxis, score: i64) -> Self {
        self.binary_scores.insert(axis, score);
        self
    }
}

/// Ordered set of candidates; order breaks ranking ties
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DistroRegistry {
    profiles: Vec<DistroProfile>,
}

impl DistroRegistry {
    pub fn new(profiles: Vec<DistroProfile>) -> Self {
        Self { profiles }
    }

    /// Build profiles from the stored document, keeping its order
    ///
    /// Preference scores are the `scores` values in key order. The same
    /// `scores` entries named after a binary axis double as its raw score.
    pub fn from_document(doc: &RegistryDocument) -> Self {
        let profiles = doc
            .distributions
            .iter()
            .map(|(name, entry)| DistroProfile {
                name: name.clone(),
                preference_scores: entry.scores.iter().map(|(_, score)| *score).collect(),
                hardware_scores: entry.hardware_scores.iter().map(|(_, score)| *score).collect(),
                binary_scores: entry
                    .scores
                    .iter()
                    .filter_map(|(key, score)| BinaryAxis::from_name(key).map(|axis| (axis, *score)))
                    .collect(),
            })
            .collect();

        Self { profiles }
    }

    pub fn profiles(&self) -> &[DistroProfile] {
        &self.profiles
    }

    pub fn get(&self, name: &str) -> Option<&DistroProfile> {
        self.profiles.iter().find(|p| p.name == name)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_document() {
        let json = r#"{"distributions": {
            "Ubuntu": {
                "scores": {"ease": 5, "updates": 0, "UI_Look": 1},
                "hardware_scores": {"cpu": 2, "ram": 2, "ssd": 1, "disk": 2, "gpu": 1}
            },
            "Arch": {"scores": {"ease": 1, "updates": 1, "UI_Look": 0}}
        }}"#;
        let doc: RegistryDocument = serde_json::from_str(json).unwrap();

        let registry = DistroRegistry::from_document(&doc);

        assert_eq!(registry.len(), 2);
        let ubuntu = &registry.profiles()[0];
        assert_eq!(ubuntu.name, "Ubuntu");
        assert_eq!(ubuntu.preference_scores, vec![5, 0, 1]);
        assert_eq!(ubuntu.hardware_scores, vec![2, 2, 1, 2, 1]);
        assert_eq!(ubuntu.binary_scores.get(&BinaryAxis::Updates), Some(&0));
        assert_eq!(ubuntu.binary_scores.get(&BinaryAxis::UiLook), Some(&1));

        let arch = registry.get("Arch").unwrap();
        assert!(arch.hardware_scores.is_empty());
        assert_eq!(arch.binary_scores.get(&BinaryAxis::Updates), Some(&1));
    }

    #[test]
    fn test_empty_document() {
        let registry = DistroRegistry::from_document(&RegistryDocument::default());
        assert!(registry.is_empty());
        assert!(registry.get("Debian").is_none());
    }
}
