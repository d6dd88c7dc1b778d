use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

/// With no subcommand, processes every shard of the input directory.
#[derive(Parser, Debug)]
#[command(name = "strokegrid", version, args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    cmd: Option<Command>,

    #[command(flatten)]
    run: RunArgs,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rasterize one record and save its final grid as a PNG.
    Preview(PreviewArgs),
}

#[derive(Args, Debug, Default)]
struct ConfigArgs {
    /// JSON config file; flags override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Run seed (random when omitted).
    #[arg(long)]
    seed: Option<u64>,

    /// Minimum total padding.
    #[arg(long)]
    padding_min: Option<u32>,

    /// Maximum total padding.
    #[arg(long)]
    padding_max: Option<u32>,
}

#[derive(Args, Debug, Default)]
struct RunArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Directory holding `*.ndjson` shards.
    #[arg(long)]
    input_dir: Option<PathBuf>,

    /// Directory receiving `<shard>.json` results.
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Maximum records per shard.
    #[arg(long)]
    limit: Option<usize>,

    /// Only process the first N shards.
    #[arg(long)]
    max_shards: Option<usize>,

    /// Write one `dataset-<k>.json` per group of N shards instead of one file per shard.
    #[arg(long)]
    combine: Option<usize>,

    /// Process records on the calling thread.
    #[arg(long, default_value_t = false)]
    sequential: bool,

    /// Override rayon worker threads.
    #[arg(long)]
    threads: Option<usize>,

    /// Records scheduled per batch.
    #[arg(long)]
    chunk_size: Option<usize>,
}

#[derive(Args, Debug)]
struct PreviewArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Input shard (NDJSON).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Record index within the shard (0-based).
    #[arg(long, default_value_t = 0)]
    index: usize,

    /// Shard id used for seeding and the record's `id`.
    #[arg(long, default_value_t = 0)]
    id: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::INFO)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Some(Command::Preview(args)) => cmd_preview(args),
        None => cmd_run(cli.run),
    }
}

fn load_opts(args: &ConfigArgs) -> anyhow::Result<strokegrid::DatasetOpts> {
    let mut opts = match &args.config {
        Some(path) => strokegrid::DatasetOpts::from_path(path)?,
        None => strokegrid::DatasetOpts::default(),
    };
    if args.seed.is_some() {
        opts.seed = args.seed;
    }
    if args.padding_min.is_some() || args.padding_max.is_some() {
        opts.padding = strokegrid::PaddingRange::new(
            args.padding_min.unwrap_or(opts.padding.min()),
            args.padding_max.unwrap_or(opts.padding.max()),
        )?;
    }
    Ok(opts)
}

fn cmd_run(args: RunArgs) -> anyhow::Result<()> {
    let mut opts = load_opts(&args.config)?;
    if let Some(dir) = args.input_dir {
        opts.input_dir = dir;
    }
    if let Some(dir) = args.output_dir {
        opts.output_dir = dir;
    }
    if let Some(n) = args.limit {
        opts.record_limit = n;
    }
    if args.max_shards.is_some() {
        opts.max_shards = args.max_shards;
    }
    if args.combine.is_some() {
        opts.combine = args.combine;
    }
    if args.sequential {
        opts.threading.parallel = false;
    }
    if args.threads.is_some() {
        opts.threading.threads = args.threads;
    }
    if let Some(n) = args.chunk_size {
        opts.threading.chunk_size = n;
    }

    let summary = strokegrid::run(&opts)?;
    eprintln!(
        "wrote {} record(s) to {} (seed {}, {} skipped)",
        summary.records_written,
        opts.output_dir.display(),
        summary.seed,
        summary.records_skipped
    );

    if !summary.is_clean() {
        for failure in &summary.failed_shards {
            eprintln!("  failed: {}: {}", failure.path.display(), failure.error);
        }
        anyhow::bail!("{} shard(s) failed", summary.failed_shards.len());
    }
    Ok(())
}

fn cmd_preview(args: PreviewArgs) -> anyhow::Result<()> {
    let opts = load_opts(&args.config)?;
    let seed = opts.seed.unwrap_or_else(rand::random);
    let record = strokegrid::preview_record(&opts, seed, args.id, &args.in_path, args.index)
        .with_context(|| format!("preview record {} of '{}'", args.index, args.in_path.display()))?;

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    strokegrid::write_grid_png(&args.out, &record.pixels)?;

    eprintln!("wrote {} ({}, seed {seed})", args.out.display(), record.word);
    Ok(())
}
