use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use env_logger::Env;
use log::info;
use serde::Serialize;

use cvm_lattice::embedding::{generate_embeddings, Supercell};
use cvm_lattice::geometry::Cluster;
use cvm_lattice::identify::generate_cluster_types;
use cvm_lattice::parse::{parse_cluster_file, parse_frame_file, parse_symmetry_file};
use cvm_lattice::pipeline::{
    run_identification, Phase, PhaseResources, PipelineConfig, ResourceMap,
};
use cvm_lattice::symmetry::{
    bcc_space_group, fcc_space_group, simple_cubic_space_group, SpaceGroup,
};

#[derive(Parser)]
#[command(name = "cvm-lattice")]
#[command(about = "Cluster variation identification for crystalline alloys")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum LatticePreset {
    Bcc,
    Sc,
    Fcc,
}

#[derive(Subcommand)]
enum Commands {
    /// Identify cluster types, correlation functions and configuration matrices
    Identify {
        /// Disordered cluster resource file
        #[arg(long)]
        clusters: PathBuf,

        /// Symmetry operations file; omit to use the preset group
        #[arg(long)]
        symmetry: Option<PathBuf>,

        /// Preset symmetry group used when no operations file is given
        #[arg(long, value_enum, default_value = "bcc")]
        preset: LatticePreset,

        /// Periodicity cells per torus edge for the preset group
        #[arg(long, default_value = "2")]
        cells: usize,

        /// Ordered-phase cluster resource file
        #[arg(long, requires = "ordered_symmetry", requires = "frame")]
        ordered_clusters: Option<PathBuf>,

        /// Ordered-phase symmetry operations file
        #[arg(long)]
        ordered_symmetry: Option<PathBuf>,

        /// Ordered-phase frame transform file
        #[arg(long)]
        frame: Option<PathBuf>,

        /// Number of chemical components
        #[arg(long, default_value = "2")]
        components: usize,

        /// Output path for the JSON report, stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Embed identified cluster types into a periodic supercell
    Embed {
        /// Disordered cluster resource file
        #[arg(long)]
        clusters: PathBuf,

        /// Symmetry operations file; omit to use the preset group
        #[arg(long)]
        symmetry: Option<PathBuf>,

        /// Preset symmetry group and supercell basis
        #[arg(long, value_enum, default_value = "bcc")]
        preset: LatticePreset,

        /// Periodicity cells per torus edge for the preset group
        #[arg(long, default_value = "2")]
        cells: usize,

        /// Supercell edge length in conventional cells
        #[arg(long, default_value = "4")]
        supercell: usize,

        /// Conventional cells per torus edge
        #[arg(long, default_value = "2")]
        scale: f64,

        /// Output path for the JSON report, stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    info!("Starting cvm-lattice v{}", cvm_lattice::VERSION);

    match cli.command {
        Commands::Identify {
            clusters,
            symmetry,
            preset,
            cells,
            ordered_clusters,
            ordered_symmetry,
            frame,
            components,
            output,
        } => {
            let mut resources = ResourceMap::new();
            resources.insert(
                Phase::Disordered,
                PhaseResources::new(
                    load_clusters(&clusters)?,
                    load_group(symmetry.as_deref(), preset, cells)?,
                ),
            );
            if let (Some(cluster_path), Some(symmetry_path), Some(frame_path)) =
                (ordered_clusters, ordered_symmetry, frame)
            {
                let frame_text = fs::read_to_string(&frame_path)
                    .with_context(|| format!("reading frame file {}", frame_path.display()))?;
                let group = load_group(Some(symmetry_path.as_path()), preset, cells)?
                    .with_frame(parse_frame_file(&frame_text)?);
                resources.insert(
                    Phase::Ordered,
                    PhaseResources::new(load_clusters(&cluster_path)?, group),
                );
            }

            let config = PipelineConfig::with_components(components);
            let result = run_identification(&resources, &config)?;
            write_report(&result, output.as_deref())
        }
        Commands::Embed {
            clusters,
            symmetry,
            preset,
            cells,
            supercell,
            scale,
            output,
        } => {
            let group = load_group(symmetry.as_deref(), preset, cells)?;
            let set = generate_cluster_types(&load_clusters(&clusters)?, &group)?;
            let block = match preset {
                LatticePreset::Bcc => Supercell::bcc(supercell),
                LatticePreset::Sc => Supercell::simple_cubic(supercell),
                LatticePreset::Fcc => Supercell::fcc(supercell),
            };
            let embeddings = generate_embeddings(&set, &block, scale)?;
            info!(
                "embedded {} instances into {} sites",
                embeddings.instance_count(),
                embeddings.site_count
            );
            write_report(&embeddings, output.as_deref())
        }
    }
}

fn load_clusters(path: &Path) -> anyhow::Result<Vec<Cluster>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading cluster resource {}", path.display()))?;
    Ok(parse_cluster_file(&text)?)
}

fn load_group(
    symmetry: Option<&Path>,
    preset: LatticePreset,
    cells: usize,
) -> anyhow::Result<SpaceGroup> {
    match symmetry {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading symmetry file {}", path.display()))?;
            Ok(SpaceGroup::new("custom", parse_symmetry_file(&text)?))
        }
        None => Ok(match preset {
            LatticePreset::Bcc => bcc_space_group(cells),
            LatticePreset::Sc => simple_cubic_space_group(cells),
            LatticePreset::Fcc => fcc_space_group(cells),
        }),
    }
}

fn write_report<T: Serialize>(value: &T, output: Option<&Path>) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value).context("serializing report")?;
    match output {
        Some(path) => {
            fs::write(path, json)
                .with_context(|| format!("writing report to {}", path.display()))?;
            info!("Wrote report to {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
