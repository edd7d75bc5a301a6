use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use graphgen::export::{numbered_output_paths, write_to_path, ExportOptions, JsonExporter};
use graphgen::generator::{generate, wall_clock_seed, GeneratorConfig, RngSource};
use graphgen::graph::{BindPolicy, GraphSummary};
use graphgen::input::prompt_positive;
use graphgen::logging;

#[derive(Parser)]
#[command(name = "graphgen")]
#[command(author = "Zachary Woods <143150513+zach-fau@users.noreply.github.com>")]
#[command(version = "0.1.0")]
#[command(about = "Layered random graph generator with JSON export", long_about = None)]
struct Cli {
    /// Number of levels below the root (prompted for if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    depth: Option<u32>,

    /// Maximum children spawned per vertex (prompted for if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    branching_factor: Option<u32>,

    /// Output file; numbered when generating several graphs
    #[arg(short, long, default_value = "graph.json")]
    output: PathBuf,

    /// Number of graphs to generate
    #[arg(
        short = 'n',
        long,
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    count: u32,

    /// Fixed seed; graph i uses seed + i. Defaults to the wall clock
    #[arg(long)]
    seed: Option<u64>,

    /// Refuse parallel edges between the same pair of vertices
    #[arg(long)]
    strict: bool,

    /// Write the generation depth as a top-level field
    #[arg(long)]
    with_depth: bool,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging().context("failed to initialise logging")?;

    let (depth, branching_factor) = resolve_parameters(&cli)?;
    let policy = if cli.strict {
        BindPolicy::Strict
    } else {
        BindPolicy::Permissive
    };
    let config = GeneratorConfig::new(depth, branching_factor)?.with_policy(policy);
    let exporter = JsonExporter::new(ExportOptions {
        include_depth: cli.with_depth,
    });
    let base_seed = cli.seed.unwrap_or_else(wall_clock_seed);

    info!(depth, branching_factor, %policy, base_seed, "generating graphs");

    let paths = numbered_output_paths(&cli.output, cli.count as usize);
    for (index, path) in paths.iter().enumerate() {
        let seed = base_seed.wrapping_add(index as u64);
        let generated = generate(&config, &mut RngSource::seeded(seed))
            .with_context(|| format!("failed to generate graph {}", index + 1))?;

        let summary = GraphSummary::of(&generated.graph);
        debug!(
            colors = ?summary.colors,
            levels = generated.depth_map.level_count(),
            "color histogram"
        );

        write_to_path(&exporter, &generated.graph, path)
            .with_context(|| format!("failed to write {}", path.display()))?;

        info!(
            path = %path.display(),
            seed,
            vertices = summary.vertices,
            edges = summary.edges,
            cross_links = summary.cross_links(),
            self_loops = summary.self_loops,
            deepest_level = ?summary.deepest_level,
            components = summary.components,
            "wrote graph"
        );
    }

    Ok(())
}

/// Takes depth and branching factor from the command line, prompting on
/// stdin for whichever is missing.
fn resolve_parameters(cli: &Cli) -> Result<(usize, usize)> {
    let mut reader = io::stdin().lock();
    let mut writer = io::stdout().lock();

    let depth = match cli.depth {
        Some(depth) => depth as usize,
        None => prompt_positive(&mut reader, &mut writer, "depth", "Enter the depth:")?,
    };
    let branching_factor = match cli.branching_factor {
        Some(branching_factor) => branching_factor as usize,
        None => prompt_positive(
            &mut reader,
            &mut writer,
            "branching factor",
            "Enter max amount of vertices generated from one vertex:",
        )?,
    };

    Ok((depth, branching_factor))
}
