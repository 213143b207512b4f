mod config;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use extract::{
    annotate_node, Extractor, ExtractorBase, HeadlinesExtractor, KeyphrasesExtractor,
    NerExtractor, SummaryExtractor, ThemesExtractor, TitleExtractor, TopicDescriptionExtractor,
};
use ingest::Node;
use serde::Serialize;
use std::path::{Path, PathBuf};
use synth::{MultiHopSynthesizer, Persona};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{AppConfig, ExtractionConfig};

#[derive(Parser)]
#[command(name = "testset", about = "Annotate documents with LLM-derived properties and synthesize test sets")]
struct Cli {
    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Read .txt/.md documents and attach summary, keyphrases, title, headlines, entities, topic and themes
    Annotate {
        /// File or directory to read
        path: PathBuf,
        /// Where to write the annotated nodes (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Generate multi-hop question/answer samples from annotated nodes
    Synthesize {
        /// Annotated nodes written by `annotate`
        #[arg(long)]
        nodes: PathBuf,
        /// JSON array of {"name", "role_description"}
        #[arg(long)]
        personas: PathBuf,
        /// Number of samples to request
        #[arg(short = 'n', long, default_value_t = 5)]
        num_samples: usize,
        /// Where to write JSON lines (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Serialize)]
struct AnnotateSummary {
    nodes_processed: usize,
    properties_added: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    let config = AppConfig::load(cli.config.as_deref())?;
    info!(
        provider = ?config.llm.provider,
        model = %config.llm.model,
        "Configuration loaded"
    );

    match cli.command {
        Command::Annotate { path, output } => annotate(&config, &path, output.as_deref()).await,
        Command::Synthesize {
            nodes,
            personas,
            num_samples,
            output,
        } => synthesize(&config, &nodes, &personas, num_samples, output.as_deref()).await,
    }
}

fn init_tracing(json_logs: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json_logs {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn build_extractors(config: &AppConfig) -> Vec<Box<dyn Extractor>> {
    let ExtractionConfig {
        max_token_limit,
        max_keyphrases,
        max_headlines,
        max_entities,
        max_themes,
    } = config.extraction;
    let base = ExtractorBase::new(config.build_llm()).with_max_token_limit(max_token_limit);

    vec![
        Box::new(SummaryExtractor::new(base.clone())),
        Box::new(KeyphrasesExtractor::new(base.clone()).with_max_num(max_keyphrases)),
        Box::new(TitleExtractor::new(base.clone())),
        Box::new(HeadlinesExtractor::new(base.clone()).with_max_num(max_headlines)),
        Box::new(NerExtractor::new(base.clone()).with_max_num_entities(max_entities)),
        Box::new(TopicDescriptionExtractor::new(base.clone())),
        Box::new(ThemesExtractor::new(base).with_max_num_themes(max_themes)),
    ]
}

async fn annotate(config: &AppConfig, path: &Path, output: Option<&Path>) -> Result<()> {
    let mut nodes = ingest::ingest_path(path)
        .await
        .with_context(|| format!("Failed to ingest {:?}", path))?;
    info!(nodes = nodes.len(), "Documents loaded");

    let extractors = build_extractors(config);
    let mut properties_added = 0;

    for node in &mut nodes {
        let before = node.properties.len();
        annotate_node(node, &extractors)
            .await
            .with_context(|| format!("Failed to annotate node {}", node.id))?;
        properties_added += node.properties.len() - before;
        info!(node = %node.id, properties = node.properties.len(), "Node annotated");
    }

    let summary = AnnotateSummary {
        nodes_processed: nodes.len(),
        properties_added,
    };
    info!(summary = %serde_json::to_string(&summary)?, "Annotation finished");

    let json = serde_json::to_string_pretty(&nodes)?;
    write_output(output, &json).await
}

async fn synthesize(
    config: &AppConfig,
    nodes_path: &Path,
    personas_path: &Path,
    num_samples: usize,
    output: Option<&Path>,
) -> Result<()> {
    let nodes: Vec<Node> = read_json(nodes_path).await?;
    let personas: Vec<Persona> = read_json(personas_path).await?;
    info!(nodes = nodes.len(), personas = personas.len(), "Synthesis inputs loaded");

    let synthesizer = MultiHopSynthesizer::new(config.build_llm(), config.synthesis.clone());
    let testset = synthesizer
        .generate_samples(&nodes, &personas, num_samples)
        .await
        .context("Failed to synthesize samples")?;

    write_output(output, &testset.to_jsonl()?).await
}

async fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read file: {:?}", path))?;
    serde_json::from_str(&raw).with_context(|| format!("Failed to parse JSON: {:?}", path))
}

async fn write_output(output: Option<&Path>, content: &str) -> Result<()> {
    match output {
        Some(path) => {
            tokio::fs::write(path, content)
                .await
                .with_context(|| format!("Failed to write {:?}", path))?;
            info!(path = %path.display(), "Output written");
        }
        None => println!("{}", content),
    }
    Ok(())
}
