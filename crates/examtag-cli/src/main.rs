//! examtag: tag competitive exam questions with academic concepts.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use examtag_core::{ExamtagConfig, Subject};
use examtag_llm::{CompletionProvider, LLMConfig, LlmClient};
use examtag_runtime::{ConceptPipeline, ExtractionMethod};
use examtag_store::CsvStore;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod repl;
mod report;

/// Concept extraction tool for competitive exams (UPSC, etc.)
#[derive(Parser, Debug)]
#[command(name = "examtag", version)]
#[command(after_help = "Examples:
  examtag --subject ancient_history
  examtag --subject math --use-api
  examtag --subject physics --analyze
  examtag --subject economics --use-api --analyze
  examtag --interactive")]
struct Args {
    /// Subject to process: ancient_history, math, physics, economics
    #[arg(long, required_unless_present = "interactive")]
    subject: Option<Subject>,

    /// Use an LLM API for concept extraction (key from llm-config.json, env, or .env)
    #[arg(long)]
    use_api: bool,

    /// Show concept distribution analysis after processing
    #[arg(long)]
    analyze: bool,

    /// Enter questions one at a time; the subject is detected per question
    #[arg(long)]
    interactive: bool,

    /// Directory holding <subject>.csv question files [env: EXAMTAG_DATA_DIR]
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Directory for output_concepts_<subject>.csv files [env: EXAMTAG_OUTPUT_DIR]
    #[arg(long)]
    output_dir: Option<PathBuf>,
}

fn resolve_data_dir() -> PathBuf {
    std::env::var("EXAMTAG_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let data = PathBuf::from("data");
            if data.is_dir() {
                data
            } else {
                PathBuf::from(".")
            }
        })
}

/// Provider for `--use-api`, or `None` to run keyword-based.
fn build_llm(config: &ExamtagConfig) -> Option<Arc<dyn CompletionProvider>> {
    let llm_config = LLMConfig::load(&config.data_paths.llm_config_file);
    let timeout = Duration::from_secs(config.llm_timeout_secs);

    match LlmClient::from_config(&llm_config, timeout) {
        Ok(Some(client)) => {
            info!("Using LLM provider {}", client.name());
            Some(Arc::new(client))
        }
        Ok(None) => {
            warn!("No LLM API key configured, using keyword-based extraction");
            None
        }
        Err(e) => {
            warn!("Failed to create LLM client: {}. Using keyword-based extraction", e);
            None
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let data_dir = args.data_dir.clone().unwrap_or_else(resolve_data_dir);
    let config = match &args.output_dir {
        Some(output_dir) => ExamtagConfig::with_output_dir(&data_dir, output_dir)?,
        None => ExamtagConfig::from_env(&data_dir)?,
    };
    info!("Data directory: {}", data_dir.display());

    let store = CsvStore::new(config.data_paths.clone());

    if args.interactive {
        report::print_banner(args.subject, ExtractionMethod::Keyword);
        repl::run(&store)?;
        return Ok(());
    }

    let subject = args
        .subject
        .ok_or_else(|| anyhow::anyhow!("--subject is required"))?;

    let llm = if args.use_api { build_llm(&config) } else { None };
    let pipeline = ConceptPipeline::new(store, llm);
    report::print_banner(Some(subject), pipeline.method());

    match pipeline.run_batch(subject, args.analyze).await {
        Ok(batch) => {
            report::print_batch_report(&batch);
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
