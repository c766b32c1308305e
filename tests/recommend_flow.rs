use distro_finder_lib::core::{DistroRegistry, Recommender, Survey, Vectorizer};
use distro_finder_lib::hardware::{
    CapabilityClassifier, CapabilityVector, LabelClassifier, TierLabel, VectorClassifier,
};
use distro_finder_lib::store::data_store::{
    HARDWARE_FILE, MARKING_FILE, QUESTIONS_FILE, REGISTRY_FILE,
};
use distro_finder_lib::{DataStore, FinderError};
use serde_json::json;
use std::fs;
use tempfile::TempDir;

const QUESTIONS: &str = r#"{"questions": [
    {"id": 1, "text": "How much do you like tinkering?",
     "options": [{"id": 1, "text": "Love it"}, {"id": 2, "text": "Rather not"}]},
    {"id": 2, "text": "Rolling or fixed releases?",
     "options": [{"id": 1, "text": "Rolling"}, {"id": 2, "text": "Fixed"}]},
    {"id": 3, "text": "Familiar or fresh desktop?",
     "options": [{"id": 1, "text": "Familiar"}, {"id": 2, "text": "Fresh"}]}
]}"#;

const MARKING: &str = r#"{"user_vector": {"questions": [
    {"question_id": 1, "parameter_name": "tinkering", "option_id_to_score": {"1": 5, "2": 1}},
    {"question_id": 2, "parameter_name": "updates", "option_id_to_score": {"1": 1, "2": 0}},
    {"question_id": 3, "parameter_name": "UI_Look", "option_id_to_score": {"1": 1, "2": 2}}
]}}"#;

const REGISTRY: &str = r#"{"distributions": {
    "Arch": {
        "scores": {"tinkering": 5, "updates": 1, "UI_Look": 2},
        "hardware_scores": {"cpu": 1, "ram": 1, "ssd": 1, "disk": 1, "gpu": 1}
    },
    "Mint": {
        "scores": {"tinkering": 1, "updates": 0, "UI_Look": 1},
        "hardware_scores": {"cpu": 1, "ram": 1, "ssd": 1, "disk": 1, "gpu": 1}
    },
    "Fedora": {
        "scores": {"tinkering": 3, "updates": 0, "UI_Look": 2},
        "hardware_scores": {"cpu": 2, "ram": 2, "ssd": 1, "disk": 1, "gpu": 2}
    }
}}"#;

fn setup() -> (TempDir, DataStore) {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(QUESTIONS_FILE), QUESTIONS).unwrap();
    fs::write(dir.path().join(MARKING_FILE), MARKING).unwrap();
    fs::write(dir.path().join(REGISTRY_FILE), REGISTRY).unwrap();

    let store = DataStore::new(dir.path());
    (dir, store)
}

fn answer_all(store: &DataStore, answers: &[(&str, &str)]) {
    let survey = Survey::new(store.load_questions());
    let mut responses = store.load_responses();
    for (question, option) in answers {
        survey.record_answer(&mut responses, question, option).unwrap();
    }
    store.save_responses(&responses).unwrap();
}

#[test]
fn test_tinkerer_gets_arch() {
    let (_dir, store) = setup();
    answer_all(&store, &[("1", "1"), ("2", "1"), ("3", "2")]);

    let preferences = Vectorizer::vectorize(&store.load_responses(), &store.load_marking());
    assert_eq!(preferences.vector, vec![5, 1, 2]);

    let registry = DistroRegistry::from_document(&store.load_registry());
    let rankings = Recommender::default()
        .rank(&preferences, &registry, None)
        .unwrap();

    // Arch: 25+1+4 = 30, no mismatch
    // Fedora: 15+0+4 = 19, updates mismatch -> 9.5
    // Mint: 5+0+2 = 7, both mismatch -> 1.75
    let names: Vec<&str> = rankings.iter().map(|r| r.distro.as_str()).collect();
    assert_eq!(names, vec!["Arch", "Fedora", "Mint"]);
    assert_eq!(rankings[0].score, 30.0);
    assert_eq!(rankings[1].score, 9.5);
    assert_eq!(rankings[2].score, 1.75);
}

#[test]
fn test_incomplete_survey_needs_zero_fill() {
    let (_dir, store) = setup();
    answer_all(&store, &[("1", "2"), ("3", "1")]);

    let responses = store.load_responses();
    let marking = store.load_marking();
    let registry = DistroRegistry::from_document(&store.load_registry());
    let recommender = Recommender::default();

    // Skipping the unanswered question misaligns the vectors
    let compact = Vectorizer::vectorize(&responses, &marking);
    assert_eq!(compact.vector.len(), marking.len() - 1);
    assert!(matches!(
        recommender.rank(&compact, &registry, None),
        Err(FinderError::AxisMismatch { .. })
    ));

    let aligned = Vectorizer::vectorize_zero_filled(&responses, &marking);
    assert_eq!(aligned.vector, vec![1, 0, 1]);
    let rankings = recommender.rank(&aligned, &registry, None).unwrap();
    assert_eq!(rankings.len(), 3);
}

#[test]
fn test_hardware_changes_ranking() {
    let (_dir, store) = setup();
    answer_all(&store, &[("1", "2"), ("2", "2"), ("3", "1")]);

    store
        .save_hardware_facts(&json!({
            "Number of Cores": 8,
            "Total RAM": 16384.0,
            "Storage": [{"Size (GB)": 1024.0, "Type": "NVMe SSD"}],
            "GPU": {"GPU Name": "AMD Radeon RX 6800", "GPU Memory": 16384.0}
        }))
        .unwrap();
    assert!(store.file_path(HARDWARE_FILE).exists());

    let raw = store.load_hardware_facts();
    let hardware = VectorClassifier::new().classify_json(&raw);
    assert_eq!(hardware, CapabilityVector([5, 4, 1, 3, 3]));
    assert_eq!(LabelClassifier::new().classify_json(&raw), TierLabel::New);

    let preferences = Vectorizer::vectorize(&store.load_responses(), &store.load_marking());
    let registry = DistroRegistry::from_document(&store.load_registry());
    let recommender = Recommender::default();

    let without = recommender.rank(&preferences, &registry, None).unwrap();
    let with = recommender
        .rank(&preferences, &registry, Some(&hardware))
        .unwrap();

    // Mint: 1+0+1 = 2 ; Fedora: 3+0+2 = 5, UI mismatch -> 2.5 ; Arch: 5+0+2 = 7, two mismatches -> 1.75
    assert_eq!(without[0].distro, "Fedora");
    assert_eq!(without[1].distro, "Mint");

    // Hardware adds 5+4+1+3+1.5 = 14.5 to Mint/Arch and 10+8+1+3+3 = 25 to Fedora
    assert_eq!(with[0].distro, "Fedora");
    assert_eq!(with[0].score, 27.5);
    assert_eq!(with[1].score, 16.5);
    assert_eq!(with[2].score, 16.25);
}

#[test]
fn test_ranking_ignores_registry_order() {
    let (_dir, store) = setup();
    answer_all(&store, &[("1", "1"), ("2", "2"), ("3", "2")]);

    let preferences = Vectorizer::vectorize(&store.load_responses(), &store.load_marking());
    let mut doc = store.load_registry();
    let forward = Recommender::default()
        .rank(&preferences, &DistroRegistry::from_document(&doc), None)
        .unwrap();

    doc.distributions.reverse();
    let backward = Recommender::default()
        .rank(&preferences, &DistroRegistry::from_document(&doc), None)
        .unwrap();

    assert_eq!(forward, backward);
}

#[test]
fn test_empty_data_dir_gives_empty_ranking() {
    let dir = TempDir::new().unwrap();
    let store = DataStore::new(dir.path());

    let preferences = Vectorizer::vectorize(&store.load_responses(), &store.load_marking());
    let registry = DistroRegistry::from_document(&store.load_registry());

    let rankings = Recommender::default()
        .rank(&preferences, &registry, None)
        .unwrap();
    assert!(rankings.is_empty());

    let raw = store.load_hardware_facts();
    assert_eq!(VectorClassifier::new().classify_json(&raw), CapabilityVector::zero());
    assert_eq!(LabelClassifier::new().classify_json(&raw), TierLabel::Old);
}
