// distro-finder - answers a few questions, looks at your machine, ranks distros
//
// This is the main entry point. Parses CLI args and dispatches to handlers.

use anyhow::Context;
use distro_finder_lib::{
    core::{DistroRegistry, Recommender, Survey, Vectorizer},
    hardware::{
        CapabilityClassifier, CapabilityVector, HardwareFacts, LabelClassifier, VectorClassifier,
    },
    store::data_store::HARDWARE_FILE,
    DataStore, FinderError, Settings,
};
use std::env;
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Grab whatever the user typed
    let mut args: Vec<String> = env::args().collect();

    let verbose = args.iter().any(|a| a == "-v" || a == "--verbose");
    args.retain(|a| a != "-v" && a != "--verbose");
    init_logging(verbose);

    if args.len() < 2 {
        print_usage();
        return Ok(());
    }

    let command = args[1].clone();
    let rest = &args[2..];

    match command.as_str() {
        "questions" => handle_questions(),
        "answer" => handle_answer(rest),
        "status" => handle_status(),
        "classify" => handle_classify(rest),
        "tier" => handle_tier(),
        "recommend" => handle_recommend(rest),
        "version" | "--version" => {
            println!("distro-finder v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        "help" | "-h" | "--help" => {
            print_usage();
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            Ok(())
        }
    }
}

fn init_logging(verbose: bool) {
    let rust_log = env::var("RUST_LOG").ok();

    tracing_subscriber::fmt()
        .with_env_filter(build_env_filter(rust_log.as_deref(), verbose))
        .with_writer(std::io::stderr)
        .init();
}

/// warn unless RUST_LOG says otherwise; -v adds debug for the library
fn build_env_filter(rust_log: Option<&str>, verbose: bool) -> EnvFilter {
    let mut env_filter = rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));

    if verbose {
        if let Ok(directive) = "distro_finder_lib=debug".parse() {
            env_filter = env_filter.add_directive(directive);
        }
    }

    env_filter
}

fn load_store() -> anyhow::Result<(Settings, DataStore)> {
    let settings = Settings::load().context("Failed to load settings")?;
    let store = DataStore::new(&settings.data_dir);
    Ok((settings, store))
}

fn handle_questions() -> anyhow::Result<()> {
    let (_, store) = load_store()?;
    let survey = Survey::new(store.load_questions());
    let responses = store.load_responses();

    if survey.questions().is_empty() {
        println!("No questions found in {}", store.path().display());
        return Ok(());
    }

    println!("\nSurvey questions:");
    println!("{}", "=".repeat(60));
    for question in survey.questions() {
        let chosen = responses.get(&question.id);
        println!("\n[{}] {}", question.id, question.text);
        for option in &question.options {
            let marker = if chosen == Some(option.id.as_str()) { "*" } else { " " };
            println!("   {} {}) {}", marker, option.id, option.text);
        }
    }
    println!("{}", "=".repeat(60));

    Ok(())
}

fn handle_answer(args: &[String]) -> anyhow::Result<()> {
    let (Some(question_id), Some(option_id)) = (args.first(), args.get(1)) else {
        eprintln!("Usage: distro-finder answer <question-id> <option-id>");
        return Ok(());
    };

    let (_, store) = load_store()?;
    let survey = Survey::new(store.load_questions());
    let mut responses = store.load_responses();

    if let Err(e) = survey.record_answer(&mut responses, question_id, option_id) {
        eprintln!("✗ {}", e.user_message());
        return Ok(());
    }

    store
        .save_responses(&responses)
        .context("Failed to save responses")?;

    let remaining = survey.unanswered(&responses).count();
    println!("✓ Recorded answer {} for question {}", option_id, question_id);
    if remaining > 0 {
        println!("  {} question(s) left", remaining);
    } else {
        println!("  Survey complete! Run 'distro-finder recommend'");
    }

    Ok(())
}

fn handle_status() -> anyhow::Result<()> {
    let (settings, store) = load_store()?;
    let survey = Survey::new(store.load_questions());
    let responses = store.load_responses();
    let registry = DistroRegistry::from_document(&store.load_registry());

    println!("\ndistro-finder Status");
    println!("{}", "=".repeat(60));
    println!("  Data directory: {}", store.path().display());
    println!(
        "  Answered:       {}/{}",
        survey.questions().len() - survey.unanswered(&responses).count(),
        survey.questions().len()
    );
    println!("  Distros:        {}", registry.len());
    println!("  Penalty factor: {}", settings.penalty_factor);

    if store.file_path(HARDWARE_FILE).exists() {
        let tier = LabelClassifier::new().classify_json(&store.load_hardware_facts());
        println!("  Hardware tier:  {}", tier);
    } else {
        println!("  Hardware tier:  not collected yet");
    }
    println!("{}", "=".repeat(60));

    Ok(())
}

fn handle_classify(args: &[String]) -> anyhow::Result<()> {
    let (_, store) = load_store()?;

    // A facts file on the command line replaces the stored one
    let raw = match args.first() {
        Some(path) => {
            let raw = read_facts_file(Path::new(path))?;
            store
                .save_hardware_facts(&raw)
                .context("Failed to save hardware facts")?;
            raw
        }
        None => store.load_hardware_facts(),
    };

    let vector = VectorClassifier::new().classify_json(&raw);
    let tier = LabelClassifier::new().classify_json(&raw);

    println!("\nHardware classification");
    println!("{}", "=".repeat(60));
    println!("  CPU:          {}", vector.cpu());
    println!("  RAM:          {}", vector.ram());
    println!("  Storage type: {}", vector.storage_type());
    println!("  Storage size: {}", vector.storage_size());
    println!("  GPU:          {}", vector.gpu());
    println!("\n  Tier: {} - {}", tier, tier.description());
    println!("{}", "=".repeat(60));

    Ok(())
}

fn handle_tier() -> anyhow::Result<()> {
    let (_, store) = load_store()?;
    let raw = store.load_hardware_facts();

    let classifier = LabelClassifier::new();
    match HardwareFacts::from_json(&raw) {
        Ok(facts) => {
            let assessment = classifier.assess(&facts);
            println!(
                "{} (score {:.1}: cpu {}, ram {}, gpu {})",
                assessment.label,
                assessment.score(),
                assessment.cpu,
                assessment.ram,
                assessment.gpu
            );
        }
        Err(_) => println!("{}", classifier.classify_json(&raw)),
    }

    Ok(())
}

fn handle_recommend(args: &[String]) -> anyhow::Result<()> {
    let (settings, store) = load_store()?;
    let skip_hardware = args.iter().any(|a| a == "--no-hardware");

    let responses = store.load_responses();
    if responses.is_empty() {
        println!("No answers yet.");
        println!("Answer a few questions with 'distro-finder answer' first!");
        return Ok(());
    }

    let preferences = Vectorizer::vectorize_zero_filled(&responses, &store.load_marking());
    let registry = DistroRegistry::from_document(&store.load_registry());

    let hardware: Option<CapabilityVector> =
        if settings.use_hardware && !skip_hardware && store.file_path(HARDWARE_FILE).exists() {
            Some(VectorClassifier::new().classify_json(&store.load_hardware_facts()))
        } else {
            None
        };

    let recommender = Recommender::new(settings.penalty_factor);
    let rankings = match recommender.rank(&preferences, &registry, hardware.as_ref()) {
        Ok(rankings) => rankings,
        Err(e @ FinderError::AxisMismatch { .. }) => {
            eprintln!("✗ {}", e.user_message());
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    if rankings.is_empty() {
        println!("No recommendations yet.");
        println!("Check that marking.json and distro.json are in {}", store.path().display());
        return Ok(());
    }

    println!("\nRecommended distros:");
    println!("{}", "=".repeat(60));
    for (i, ranking) in rankings.iter().enumerate() {
        println!("{:3}. {:<24} {:>8.2}", i + 1, ranking.distro, ranking.score);
    }
    println!("{}", "=".repeat(60));
    if hardware.is_none() {
        println!("(hardware not considered)");
    }

    Ok(())
}

fn read_facts_file(path: &Path) -> anyhow::Result<serde_json::Value> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    // Broken JSON still gets classified, as "nothing known"
    Ok(serde_json::from_str(&content).unwrap_or_else(|e| {
        tracing::warn!("Malformed JSON in {}: {}", path.display(), e);
        serde_json::Value::Object(serde_json::Map::new())
    }))
}

fn print_usage() {
    println!(
        r#"distro-finder v{} - Find the Linux distro that fits you

USAGE:
    distro-finder [-v] <COMMAND> [OPTIONS]

COMMANDS:
    questions                   Show the survey and your answers
    answer <question> <option>  Record an answer
    status                      Show progress and data location
    classify [facts.json]       Classify hardware (optionally import facts)
    tier                        Show the hardware tier breakdown
    recommend [--no-hardware]   Rank distros
    version                     Show version
    help                        Show this help

EXAMPLES:
    distro-finder questions
    distro-finder answer 3 2
    distro-finder classify hardware_info.json
    distro-finder recommend

Data lives in ~/.distro-finder (override with DISTRO_FINDER_HOME).
"#,
        env!("CARGO_PKG_VERSION")
    );
}
