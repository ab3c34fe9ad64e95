//! Topic-Digest main entry point
//!
//! This is the command-line interface for Topic-Digest. Without `--topic` it
//! serves the web UI; with it, it runs a single digest and writes the results
//! to disk.

use anyhow::Context;
use clap::Parser;
use std::path::{Path, PathBuf};
use topic_digest::config::{load_config_with_hash, Config};
use topic_digest::crawler::{known_topics, seed_urls};
use topic_digest::digest::DigestService;
use topic_digest::output::{generate_markdown_report, write_audio};
use topic_digest::server::serve_from_config;
use tracing_subscriber::EnvFilter;

/// Topic-Digest: crawl a topic, summarize it, read it aloud
#[derive(Parser, Debug)]
#[command(name = "topic-digest")]
#[command(version)]
#[command(
    about = "Crawls a topic, summarizes it with an LLM and reads it aloud",
    long_about = None
)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be crawled without crawling
    #[arg(long, conflicts_with = "topic")]
    dry_run: bool,

    /// Run a single digest for this topic instead of serving the UI
    #[arg(long)]
    topic: Option<String>,

    /// Override the configured crawl depth
    #[arg(long)]
    depth: Option<i32>,

    /// Markdown report path (with --topic)
    #[arg(long, requires = "topic")]
    output: Option<PathBuf>,

    /// Write the synthesized audio here (with --topic)
    #[arg(long, requires = "topic")]
    audio_out: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // API keys usually live in a .env file next to the config
    dotenvy::dotenv().ok();

    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (mut config, config_hash) = load_config_with_hash(&cli.config)
        .with_context(|| format!("failed to load {}", cli.config.display()))?;
    tracing::info!("Configuration loaded successfully (hash: {})", config_hash);

    if let Some(depth) = cli.depth {
        config.crawler.depth = depth;
    }

    if cli.dry_run {
        handle_dry_run(&config);
    } else if let Some(topic) = &cli.topic {
        handle_topic(
            &config,
            topic,
            cli.output.as_deref(),
            cli.audio_out.as_deref(),
        )
        .await?;
    } else {
        handle_serve(&config).await?;
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("topic_digest=info,warn"),
            1 => EnvFilter::new("topic_digest=debug,info"),
            2 => EnvFilter::new("topic_digest=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: shows settings and the seed table
fn handle_dry_run(config: &Config) {
    println!("=== Topic-Digest Dry Run ===\n");

    println!("Crawler Configuration:");
    println!("  Depth: {}", config.crawler.depth);
    println!("  Max retries: {}", config.crawler.max_retries);
    println!("  Timeout: {}s", config.crawler.timeout_secs);
    println!("  Retry delay: {}ms", config.crawler.retry_delay_ms);
    println!("  Request delay: {}ms", config.crawler.request_delay_ms);
    println!("  Links per page: {}", config.crawler.max_links_per_page);
    println!("  Same origin: {:?}", config.crawler.same_origin);

    println!("\nUser Agent:");
    println!("  {}", config.user_agent.header_value());

    println!("\nSummary:");
    println!("  Endpoint: {}", config.summary.base_url);
    println!("  Model: {}", config.summary.model);
    println!("  Temperature: {}", config.summary.temperature);
    println!(
        "  API key ({}): {}",
        config.summary.api_key_env,
        key_status(&config.summary.api_key_env)
    );

    println!("\nSpeech:");
    println!("  Provider: {:?}", config.speech.provider);
    println!(
        "  API key ({}): {}",
        config.speech.api_key_env,
        key_status(&config.speech.api_key_env)
    );

    println!("\nServer:");
    println!("  Bind: {}", config.server.bind);
    println!("  Themes: {}", config.server.themes_path);

    println!("\nTopics:");
    for topic in known_topics() {
        println!("  - {}", topic);
        for seed in seed_urls(topic) {
            println!("    * {}", seed);
        }
    }

    println!("\n✓ Configuration is valid");
}

fn key_status(name: &str) -> &'static str {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => "set",
        _ => "missing",
    }
}

/// Handles --topic: one digest, printed and exported
async fn handle_topic(
    config: &Config,
    topic: &str,
    output: Option<&Path>,
    audio_out: Option<&Path>,
) -> anyhow::Result<()> {
    let service = DigestService::from_config(config)?;

    tracing::info!("Running digest for '{}' (depth {})", topic, service.depth());
    let report = service
        .run(topic)
        .await
        .with_context(|| format!("digest for '{}' failed", topic))?;

    for notice in &report.notices {
        tracing::info!("{:?}: {}", notice.level, notice.message);
    }
    println!("{}", report.summary);

    if let Some(path) = output {
        generate_markdown_report(&report, path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("✓ Report written to: {}", path.display());
    }

    if let Some(path) = audio_out {
        if write_audio(&report, path)
            .with_context(|| format!("failed to write {}", path.display()))?
        {
            println!("✓ Audio written to: {}", path.display());
        } else {
            tracing::warn!("No audio was generated; {} not written", path.display());
        }
    }

    Ok(())
}

/// Default mode: serve the web UI
async fn handle_serve(config: &Config) -> anyhow::Result<()> {
    serve_from_config(config)
        .await
        .with_context(|| format!("failed to serve on {}", config.server.bind))
}
