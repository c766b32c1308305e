/// Data models for the JSON documents
///
/// Every model maps to one file in the data directory. Key casing follows
/// the files already written by the survey UI, so don't rename fields.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Survey questions document (`questionnaire.json`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuestionsDocument {
    #[serde(default)]
    pub questions: Vec<Question>,
}

/// One survey question
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    #[serde(deserialize_with = "flexible_id")]
    pub id: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub options: Vec<AnswerOption>,
}

impl Question {
    /// Look up an option by id
    pub fn option(&self, option_id: &str) -> Option<&AnswerOption> {
        self.options.iter().find(|o| o.id == option_id)
    }
}

/// A selectable answer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerOption {
    #[serde(deserialize_with = "flexible_id")]
    pub id: String,
    #[serde(default, alias = "label")]
    pub text: String,
}

/// Marking document (`marking.json`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarkingDocument {
    #[serde(default)]
    pub user_vector: MarkingScheme,
}

/// Ordered list of scored questions. Entry order is the axis order of the
/// preference vector.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarkingScheme {
    #[serde(default)]
    pub questions: Vec<MarkingEntry>,
}

impl MarkingScheme {
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// Scores for every option of one question
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkingEntry {
    #[serde(deserialize_with = "flexible_id")]
    pub question_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter_name: Option<String>,
    #[serde(default)]
    pub option_id_to_score: HashMap<String, i64>,
}

impl MarkingEntry {
    /// Score for an option; unknown options are worth nothing
    pub fn score_for(&self, option_id: &str) -> i64 {
        self.option_id_to_score.get(option_id).copied().unwrap_or(0)
    }
}

/// User answers (`responses.json`): question id -> option id
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Responses(BTreeMap<String, String>);

impl Responses {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, question_id: &str) -> Option<&str> {
        self.0.get(question_id).map(String::as_str)
    }

    pub fn insert(&mut self, question_id: impl Into<String>, option_id: impl Into<String>) {
        self.0.insert(question_id.into(), option_id.into());
    }

    pub fn contains(&self, question_id: &str) -> bool {
        self.0.contains_key(question_id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Responses {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Distro registry document (`distro.json`)
///
/// Both the distro order and the order of keys inside `scores` matter:
/// the first breaks ranking ties, the second is the axis order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistryDocument {
    #[serde(default, with = "ordered_map")]
    pub distributions: Vec<(String, DistroEntry)>,
}

/// Raw per-distro scores as stored on disk
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DistroEntry {
    #[serde(default, with = "ordered_map")]
    pub scores: Vec<(String, i64)>,
    #[serde(default, with = "ordered_map")]
    pub hardware_scores: Vec<(String, i64)>,
}

/// Ids show up as numbers or strings depending on who wrote the file.
fn flexible_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!(
            "expected a string or number id, found {}",
            other
        ))),
    }
}

/// (De)serialize a JSON object as a Vec of entries, keeping document order
mod ordered_map {
    use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
    use serde::ser::{Serialize, SerializeMap, Serializer};
    use std::fmt;
    use std::marker::PhantomData;

    pub fn deserialize<'de, D, V>(deserializer: D) -> Result<Vec<(String, V)>, D::Error>
    where
        D: Deserializer<'de>,
        V: Deserialize<'de>,
    {
        struct OrderedVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for OrderedVisitor<V> {
            type Value = Vec<(String, V)>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a JSON object")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<String, V>()? {
                    entries.push((key, value));
                }
                Ok(entries)
            }
        }

        deserializer.deserialize_map(OrderedVisitor(PhantomData))
    }

    #[allow(clippy::ptr_arg)]
    pub fn serialize<S, V>(entries: &Vec<(String, V)>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        V: Serialize,
    {
        let mut map = serializer.serialize_map(Some(entries.len()))?;
        for (key, value) in entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
