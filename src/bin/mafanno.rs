use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use log::{error, info};

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use mafanno::annotator::TableAnnotator;
use mafanno::config::RunConfig;
use mafanno::output::{MafWriter, RunSummary};
use mafanno::pipeline::AnnotationRunner;

#[derive(Parser)]
#[command(name = "mafanno")]
#[command(
    about = "Annotate MAF mutation records",
    long_about = "Annotates every record of a MAF file, reports records that could not be annotated, and writes the annotated MAF with the union of all columns."
)]
struct Cli {
    /// Log verbosity level
    #[arg(long, default_value = "info")]
    log_level: LogLevel,
    /// Write log output to a file instead of stderr
    #[arg(long)]
    log_file: Option<String>,
    /// Append to log file instead of truncating
    #[arg(long)]
    append_log: bool,
    /// Input MAF file (tab-delimited, optional leading '#' comment lines).
    #[arg(long, required = true)]
    maf: String,
    /// JSON annotation table keyed by genomic location (chrom,start,end,ref,alt).
    #[arg(long, required = true)]
    annotations: String,
    /// Prefix for output files. Writes <prefix>.maf and <prefix>.summary.json.
    #[arg(long, required = true)]
    out_prefix: String,
    /// Optional run configuration JSON (replace, isoform_override).
    #[arg(long)]
    config: Option<String>,
    /// Replace annotation values already present in the input.
    #[arg(long)]
    replace: bool,
    /// Isoform to annotate against (e.g. "uniprot", "mskcc").
    #[arg(long)]
    isoform_override: Option<String>,
    /// Force overwrite of existing output files.
    #[arg(short, long)]
    force: bool,
}

#[derive(Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

struct StepTimer {
    total_start: std::time::Instant,
    step_start: std::time::Instant,
}

impl StepTimer {
    fn new() -> Self {
        let now = std::time::Instant::now();
        Self {
            total_start: now,
            step_start: now,
        }
    }
    fn start(&mut self, name: &str) {
        info!("===== [STAGE] {} =====", name);
        self.step_start = std::time::Instant::now();
    }
    fn end(&self) {
        let now = std::time::Instant::now();
        info!("----- Stage Time: {:.2?} -----", now.duration_since(self.step_start));
        info!("----- Total Time: {:.2?} -----", now.duration_since(self.total_start));
    }
}

fn check_output_paths(prefix: &str, suffixes: &[&str], force: bool) -> Result<()> {
    let path = Path::new(prefix);
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        info!("Creating output directory: {:?}", parent);
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Could not create output directory {:?}", parent))?;
    }

    if !force {
        for suffix in suffixes {
            let p = format!("{}{}", prefix, suffix);
            if Path::new(&p).exists() {
                bail!("Output file {} already exists. Use --force to overwrite.", p);
            }
        }
    }
    Ok(())
}

fn run(cli: &Cli) -> Result<()> {
    check_output_paths(&cli.out_prefix, &[".maf", ".summary.json"], cli.force)?;

    let config = match &cli.config {
        Some(path) => RunConfig::load(path)
            .with_context(|| format!("Error loading run config {}", path))?,
        None => RunConfig::default(),
    }
    .with_overrides(cli.replace, cli.isoform_override.as_deref());

    let mut timer = StepTimer::new();

    timer.start("Load annotation table");
    let annotator = TableAnnotator::load(&cli.annotations)
        .with_context(|| format!("Error loading annotation table {}", cli.annotations))?;
    info!("Annotation table: {} variants", annotator.len());
    timer.end();

    timer.start("Annotate");
    let runner = AnnotationRunner::new(&cli.maf).with_config(&config);
    let params = runner.params();
    info!(
        "replace={} isoform_override={} full_enrichment={}",
        params.replace, params.isoform_override, params.full_enrichment
    );
    let run = runner
        .run(&annotator)
        .with_context(|| format!("Error annotating {}", cli.maf))?;
    timer.end();

    timer.start("Write");
    let (context, records) = run.into_parts();
    let maf_path = format!("{}.maf", cli.out_prefix);
    let file = File::create(&maf_path).with_context(|| format!("Could not create {}", maf_path))?;
    let mut writer = MafWriter::new(BufWriter::new(file));
    let written = writer
        .write(&context, records)
        .with_context(|| format!("Error writing {}", maf_path))?;
    info!("Wrote {} records to {}", written, maf_path);

    let summary_path = format!("{}.summary.json", cli.out_prefix);
    RunSummary::from_context(&context, written)
        .write_json(&summary_path)
        .with_context(|| format!("Error writing {}", summary_path))?;
    timer.end();

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let mut log_builder = env_logger::Builder::from_default_env();
    log_builder
        .filter_level(cli.log_level.to_level_filter())
        .format_module_path(false);
    if let Some(ref path) = cli.log_file {
        let file = if cli.append_log {
            std::fs::File::options().create(true).append(true).open(path)
        } else {
            std::fs::File::create(path)
        };
        match file {
            Ok(f) => {
                log_builder.target(env_logger::Target::Pipe(Box::new(f)));
            }
            Err(e) => {
                eprintln!("Could not open log file '{}': {}", path, e);
                std::process::exit(2);
            }
        }
    }
    log_builder.init();

    if let Err(e) = run(&cli) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}
