use crate::{
    config::Config,
    pages::{PageSource, TextDumpSource, normalize_page, read_manual_entry},
    pipeline::{ComparisonSession, Pipeline},
    util::ensure_dir,
    variant,
};
use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "mls-comps")]
#[command(about = "MLS report field extraction, comparable alignment and appraisal ratios")]
pub struct Args {
    #[command(subcommand)]
    pub cmd: Command,

    /// Path to config TOML. If omitted, uses ./mls-comps.toml if present.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override log level (trace/debug/info/warn/error).
    #[arg(long)]
    pub log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Report variant of every page in a text dump.
    Classify {
        #[arg(long)]
        input: PathBuf,
    },
    /// Property, price and features records of one report.
    Extract {
        #[arg(long)]
        input: PathBuf,
    },
    /// Subject against comparables: combined tables plus appraisal.
    Compare {
        /// Text dump of the subject report.
        #[arg(long, conflicts_with = "manual", required_unless_present = "manual")]
        subject: Option<PathBuf>,
        /// JSON manual entry standing in for the subject report.
        #[arg(long)]
        manual: Option<PathBuf>,
        /// Text dumps of comparable reports, in table order.
        #[arg(long = "comparison")]
        comparisons: Vec<PathBuf>,
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
}

pub fn dispatch(args: Args) -> Result<()> {
    let cfg = match resolve_config_path(args.config.as_deref()) {
        Some(path) => Config::load(&path)?,
        None => Config::default(),
    };
    let log_path = resolve_log_path(&cfg);
    let _guard = init_logging(&args, &cfg, log_path.as_deref())?;

    match &args.cmd {
        Command::Classify { input } => classify(&cfg, input),
        Command::Extract { input } => extract(&cfg, input),
        Command::Compare {
            subject,
            manual,
            comparisons,
            out_dir,
        } => compare(
            &cfg,
            subject.as_deref(),
            manual.as_deref(),
            comparisons,
            out_dir.as_deref(),
        ),
    }
}

fn resolve_config_path(user: Option<&Path>) -> Option<PathBuf> {
    if let Some(p) = user {
        return Some(p.to_path_buf());
    }
    ["mls-comps.toml", "mls-comps.example.toml"]
        .into_iter()
        .map(PathBuf::from)
        .find(|p| p.exists())
}

fn init_logging(args: &Args, cfg: &Config, file_path: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let level = args
        .log_level
        .as_deref()
        .unwrap_or(cfg.logging.level.as_str());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // Stdout carries command output; logs go to stderr.
    let stderr_layer = if cfg.logging.json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .boxed()
    };

    let (file_layer, guard) = if let Some(path) = file_path {
        let parent = path.parent().unwrap_or_else(|| Path::new("."));
        ensure_dir(parent)?;
        let file = std::fs::File::create(path)
            .with_context(|| format!("create log file: {}", path.display()))?;
        let (non_blocking, guard) = tracing_appender::non_blocking(file);
        let layer = tracing_subscriber::fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_target(true)
            .boxed();
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| anyhow!("failed to init logging: {e}"))?;

    Ok(guard)
}

fn classify(cfg: &Config, input: &Path) -> Result<()> {
    let pages = TextDumpSource.read_pages(input)?;
    let variants: Vec<_> = pages
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let text = normalize_page(p, cfg.extraction.normalize_unicode);
            serde_json::json!({
                "page": i,
                "variant": variant::classify(&text),
                "has_report_title": variant::has_report_title(&text),
            })
        })
        .collect();
    println!(
        "{}",
        serde_json::to_string_pretty(&serde_json::json!({
            "input": input,
            "pages": variants,
        }))?
    );
    Ok(())
}

fn extract(cfg: &Config, input: &Path) -> Result<()> {
    let pipeline = Pipeline::new(cfg, TextDumpSource)?;
    let file = pipeline.load(input)?;
    let extraction = pipeline
        .extractor()
        .extract(&file.pages)
        .with_context(|| format!("extracting {}", input.display()))?;
    info!("extracted {} rows from {}", extraction.len(), file.name);
    println!(
        "{}",
        serde_json::to_string_pretty(&serde_json::json!({
            "input": input,
            "content_id": file.content_id,
            "extraction": extraction,
        }))?
    );
    Ok(())
}

fn compare(
    cfg: &Config,
    subject: Option<&Path>,
    manual: Option<&Path>,
    comparisons: &[PathBuf],
    out_override: Option<&Path>,
) -> Result<()> {
    let pipeline = Pipeline::new(cfg, TextDumpSource)?;
    let mut session = ComparisonSession::new();

    match (subject, manual) {
        (Some(path), _) => session.set_subject_file(pipeline.load(path)?),
        (None, Some(path)) => session.set_subject_manual(read_manual_entry(path)?),
        (None, None) => return Err(anyhow!("either --subject or --manual is required")),
    }

    for path in comparisons {
        match pipeline.load(path) {
            Ok(file) => {
                session.add_comparison(file);
            }
            Err(err) => warn!("skipping comparison {}: {err:#}", path.display()),
        }
    }
    if session.comparisons().is_empty() {
        warn!("no comparison reports loaded; appraisal will fail");
    }

    let report = pipeline.run(&session);

    let out_root = out_override
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(&cfg.output.out_dir));
    let job_dir = out_root.join(&report.job_id);

    if cfg.output.write_report_json || cfg.output.write_tables_markdown {
        ensure_dir(&job_dir)?;
        info!("job_id={} out={}", report.job_id, job_dir.display());
    }

    if cfg.output.write_report_json {
        std::fs::write(
            job_dir.join(&cfg.output.report_filename),
            serde_json::to_string_pretty(&report)?,
        )?;
    }

    if cfg.output.write_tables_markdown {
        std::fs::write(
            job_dir.join(&cfg.output.tables_filename),
            report.tables_markdown(),
        )?;
    }

    if cfg.output.print_summary {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "job_id": report.job_id,
                "job_dir": job_dir,
                "is_rental": report.is_rental,
                "appraisal": report.appraisal_sentences,
                "appraisal_error": report.appraisal_error,
                "warnings": report.warnings,
            }))?
        );
    }

    Ok(())
}

fn resolve_log_path(cfg: &Config) -> Option<PathBuf> {
    if !cfg.logging.write_to_file {
        return None;
    }

    if !cfg.logging.file_path.is_empty() {
        return Some(PathBuf::from(&cfg.logging.file_path));
    }

    Some(PathBuf::from(&cfg.output.out_dir).join("mls-comps.log"))
}
