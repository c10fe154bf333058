use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use ns_analysis::topics::{frequent_keywords, leading_tokens, DEFAULT_KEYWORD_COUNT};
use ns_analysis::{PipelineConfig, SentimentPipeline, TopicStrategy};
use ns_core::{AggregateResult, Fetcher, Result};
use ns_feeds::{JsonFileFetcher, StaticFetcher};
use ns_inference::{create_classifier, create_synthesizer, create_translator, AudioCache, InferenceConfig};
use tracing::{info, warn};

mod logging;

const API_KEY_ENV: &str = "HF_API_TOKEN";

#[derive(Parser, Debug)]
#[command(author, version, about = "Comparative news sentiment for a company", long_about = None)]
pub struct Cli {
    #[arg(long, default_value = "lexicon", help = "Sentiment classifier. Available: lexicon (default), huggingface")]
    classifier: String,
    /// Hosted model name for the huggingface classifier
    #[arg(long)]
    model: Option<String>,
    /// Base URL of the hosted inference API
    #[arg(long)]
    model_url: Option<String>,
    /// API token for the hosted classifier; falls back to HF_API_TOKEN
    #[arg(long)]
    api_key: Option<String>,
    #[arg(short, long)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score a batch of articles about a company and print the comparative report
    Analyze(AnalyzeArgs),
    /// Show the topics each extraction strategy finds in a piece of text
    Topics {
        text: String,
    },
}

#[derive(Args, Debug)]
struct AnalyzeArgs {
    /// Company or entity the articles are about
    company: String,
    /// JSON array of fetched feed entries
    #[arg(long)]
    input: Option<PathBuf>,
    /// Target language for the translated verdict
    #[arg(long, default_value = ns_analysis::DEFAULT_TARGET_LANGUAGE)]
    language: String,
    #[arg(long, default_value_t = ns_analysis::DEFAULT_MAX_ARTICLES)]
    max_articles: usize,
    /// Topic extraction strategy: leading or keywords
    #[arg(long, default_value = "leading")]
    topics: TopicStrategy,
    /// Keep the verdict in English
    #[arg(long)]
    no_translate: bool,
    /// Directory for the spoken verdict; audio is skipped when unset
    #[arg(long)]
    audio_dir: Option<PathBuf>,
    #[arg(long)]
    pretty: bool,
}

async fn analyze(cli: &Cli, args: &AnalyzeArgs) -> Result<()> {
    let inference_config = InferenceConfig {
        classifier: Some(cli.classifier.clone()),
        model_name: cli.model.clone(),
        api_key: cli.api_key.clone().or_else(|| std::env::var(API_KEY_ENV).ok()),
        model_url: cli.model_url.clone(),
        translator: Some(if args.no_translate { "none" } else { "google" }.to_string()),
    };
    let classifier = create_classifier(&inference_config)?;
    let translator = create_translator(&inference_config)?;

    let config = PipelineConfig {
        max_articles: args.max_articles,
        target_language: if args.no_translate { "en".to_string() } else { args.language.clone() },
        topic_strategy: args.topics,
        ..PipelineConfig::default()
    };
    let pipeline = SentimentPipeline::new(classifier, translator, config)?;

    let fetcher: Box<dyn Fetcher> = match &args.input {
        Some(path) => Box::new(JsonFileFetcher::new(path).with_num_articles(args.max_articles)),
        None => Box::new(StaticFetcher::default()),
    };
    let articles = match fetcher.fetch(&args.company).await {
        Ok(articles) => articles,
        Err(e) => {
            warn!("⚠️ Error fetching news from {}: {}", fetcher.source(), e);
            Vec::new()
        }
    };

    let mut result = pipeline.run(&args.company, articles).await;

    if let Some(dir) = &args.audio_dir {
        attach_audio(&mut result, dir).await;
    }

    let output = if args.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{}", output);
    Ok(())
}

async fn attach_audio(result: &mut AggregateResult, dir: &Path) {
    let synthesizer = match create_synthesizer("google") {
        Ok(synthesizer) => synthesizer,
        Err(e) => {
            warn!("⚠️ Speech synthesis unavailable: {}", e);
            return;
        }
    };
    let cache = AudioCache::new(synthesizer, dir);
    let verdict = &mut result.verdict;

    match cache.synthesize(&verdict.target_text, &verdict.language).await {
        Ok(path) => {
            info!("🔊 Verdict audio at {}", path.display());
            verdict.audio_file = path.file_name().map(|name| name.to_string_lossy().into_owned());
        }
        Err(e) => warn!("⚠️ Error generating speech: {}", e),
    }
}

fn show_topics(text: &str) -> Result<()> {
    let report = serde_json::json!({
        "leading": leading_tokens(text),
        "keywords": frequent_keywords(text, DEFAULT_KEYWORD_COUNT),
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    match &cli.command {
        Commands::Analyze(args) => analyze(&cli, args).await,
        Commands::Topics { text } => show_topics(text),
    }
}
