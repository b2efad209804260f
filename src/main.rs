//! ChatPulse - sentiment and content analytics CLI
//!
//! Analyzes a single text or an exported chat channel and writes a
//! Markdown or JSON report.
//!
//! Exit codes:
//!   0 - Success (sentiment at or above --fail-below, or no --fail-below set)
//!   1 - Runtime error (bad arguments, unreadable input, config errors, etc.)
//!   2 - Sentiment below the --fail-below threshold

use anyhow::{Context, Result};
use chatpulse::analysis::{self, apply_filters, filter_options, lexicon, summarize};
use chatpulse::cli::{Args, InputSource, OutputFormat};
use chatpulse::config::{Config, CONFIG_FILE_NAME};
use chatpulse::ingest::{analyze_batch, IngestOptions, MessageLoader};
use chatpulse::models::{ChannelReport, Mood, ReportMetadata, TextReport};
use chatpulse::report;
use chrono::Utc;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, error, info, warn};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Handle --init-config early (no logging needed)
    if args.init_config {
        return handle_init_config();
    }

    // Load configuration first so `verbose` in the file can raise the log level
    let mut config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("\n❌ Error: {:#}", e);
            std::process::exit(1);
        }
    };
    config.merge_with_args(&args);

    // Initialize logging
    init_logging(args.log_level(config.general.verbose));

    info!("ChatPulse v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);
    debug!("Configuration: {:?}", config);
    debug!("Sentiment lexicon: {} words", lexicon::len());

    match run(args, config).await {
        Ok(exit_code) => {
            std::process::exit(exit_code);
        }
        Err(e) => {
            error!("Analysis failed: {:#}", e);
            eprintln!("\n❌ Error: {:#}", e);
            std::process::exit(1);
        }
    }
}

/// Handle --init-config: generate a default .chatpulse.toml.
fn handle_init_config() -> Result<()> {
    let path = Path::new(CONFIG_FILE_NAME);

    if path.exists() {
        eprintln!(
            "⚠️  {} already exists. Remove it first or edit it manually.",
            CONFIG_FILE_NAME
        );
        std::process::exit(1);
    }

    let content = Config::default_toml();
    std::fs::write(path, &content)
        .with_context(|| format!("Failed to write {}", CONFIG_FILE_NAME))?;

    println!("✅ Created {} with default settings.", CONFIG_FILE_NAME);
    println!("   Edit it to customize limits, concurrency and report layout.");
    Ok(())
}

/// Initialize logging at the given level.
///
/// Logs go to stderr so reports can be piped from stdout.
fn init_logging(level: tracing::Level) {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

/// Run the selected analysis. Returns the exit code (0 or 2).
async fn run(args: Args, config: Config) -> Result<i32> {
    let input = args
        .input()
        .context("One of --text, --file or --messages is required")?;

    let score = match input {
        InputSource::Text(text) => run_text_analysis("inline text", &text, &args, &config)?,
        InputSource::File(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            run_text_analysis(&path.display().to_string(), &text, &args, &config)?
        }
        InputSource::Messages(path) => run_channel_analysis(&path, &args, &config).await?,
    };

    // Check --fail-below threshold
    if let Some(threshold) = args.fail_below {
        if score < threshold {
            eprintln!(
                "\n⛔ Sentiment {:.2} is below {:.2}. Failing (exit code 2).",
                score, threshold
            );
            return Ok(2);
        }
    }

    Ok(0)
}

/// Analyze one text and emit its report. Returns the sentiment score.
fn run_text_analysis(source: &str, text: &str, args: &Args, config: &Config) -> Result<f64> {
    let start_time = Instant::now();

    let analysis = analysis::analyze(text);
    let score = f64::from(analysis.sentiment.score);

    let report = TextReport {
        metadata: ReportMetadata {
            source: source.to_string(),
            analysis_date: Utc::now(),
            messages_loaded: 0,
            messages_analyzed: 0,
            duration_seconds: start_time.elapsed().as_secs_f64(),
        },
        analysis,
    };

    let output = match args.format {
        OutputFormat::Json => report::generate_json_report(&report)?,
        OutputFormat::Markdown => report::generate_text_markdown(&report, &config.report),
    };
    emit_report(&output, config)?;

    let mood = Mood::from_score(score);
    status(
        args,
        &format!(
            "📊 {} {} | score {} | {} words | {} keywords",
            mood.emoji(),
            mood,
            report.analysis.sentiment.score,
            report.analysis.readability.word_count,
            report.analysis.keywords.len()
        ),
    );

    Ok(score)
}

/// Load, analyze and summarize a channel export. Returns the average sentiment.
async fn run_channel_analysis(path: &Path, args: &Args, config: &Config) -> Result<f64> {
    let start_time = Instant::now();

    status(args, &format!("📥 Loading messages: {}", path.display()));
    let loader = MessageLoader::new(path.to_path_buf(), IngestOptions::from(&config.ingest));
    let (raw, loaded) = loader.load()?;

    if raw.is_empty() {
        warn!("No messages left to analyze after filtering the export");
    }

    status(
        args,
        &format!(
            "🔬 Analyzing {} messages (concurrency {})...",
            raw.len(),
            config.general.concurrency
        ),
    );
    let messages = analyze_batch(raw, config.general.concurrency, !args.quiet).await;

    let options = filter_options(&messages);
    debug!(
        "Filter options: {} authors, roles {:?}",
        options.authors.len(),
        options.roles
    );

    let filters = args.filters();
    if let Some(ref author) = filters.author_name {
        if !options.authors.contains(author) {
            warn!("No messages from author '{}' in this export", author);
        }
    }
    if let Some(ref role) = filters.role {
        if !options.roles.contains(role) {
            warn!("No author with role '{}' in this export", role);
        }
    }

    info!("Summarizing with filters: {}", filters);
    let summary = summarize(&messages, &filters);
    let filtered: Vec<_> = apply_filters(&messages, &filters)
        .into_iter()
        .cloned()
        .collect();

    let report = ChannelReport {
        metadata: ReportMetadata {
            source: path.display().to_string(),
            analysis_date: Utc::now(),
            messages_loaded: loaded,
            messages_analyzed: messages.len(),
            duration_seconds: start_time.elapsed().as_secs_f64(),
        },
        filters,
        summary,
        messages: filtered,
    };

    let output = match args.format {
        OutputFormat::Json => report::generate_json_report(&report)?,
        OutputFormat::Markdown => report::generate_channel_markdown(&report, &config.report),
    };
    emit_report(&output, config)?;

    let summary = &report.summary;
    let mood = Mood::from_score(summary.average_sentiment);
    status(args, "\n📊 Channel Summary:");
    status(args, &format!("   Messages: {}", summary.filtered_count));
    status(
        args,
        &format!(
            "   Average sentiment: {:.2} ({} {})",
            summary.average_sentiment,
            mood.emoji(),
            mood
        ),
    );
    if let Some(top) = summary.top_contributors.first() {
        status(
            args,
            &format!("   Top contributor: {} ({} messages)", top.name, top.count),
        );
    }

    Ok(summary.average_sentiment)
}

/// Write the report to the configured output file, or stdout.
fn emit_report(output: &str, config: &Config) -> Result<()> {
    match config.general.output {
        Some(ref path) => {
            let path = PathBuf::from(path);
            std::fs::write(&path, output)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            info!("Report saved to: {}", path.display());
        }
        None => println!("{}", output),
    }
    Ok(())
}

/// Print a progress line on stderr unless running quiet.
fn status(args: &Args, line: &str) {
    if !args.quiet {
        eprintln!("{}", line);
    }
}

/// Load configuration from file or use defaults.
///
/// Runs before logging is set up, so problems are reported on stderr directly.
fn load_config(args: &Args) -> Result<Config> {
    // Try explicit config path
    if let Some(ref config_path) = args.config {
        return Config::load(config_path);
    }

    // Try default location
    match Config::load_default() {
        Ok(Some(config)) => Ok(config),
        Ok(None) => Ok(Config::default()),
        Err(e) => {
            eprintln!("⚠️  Failed to load {}: {:#}", CONFIG_FILE_NAME, e);
            Ok(Config::default())
        }
    }
}
