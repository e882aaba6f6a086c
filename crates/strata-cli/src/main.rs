//! strata CLI - slice STL meshes into layer outlines.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use strata_gcode::PrintSettings;
use strata_math::Point3;
use strata_mesh::{stl, Mesh};
use strata_slicer::{cross_section, slice_mesh, Plane};

#[derive(Parser)]
#[command(name = "strata")]
#[command(about = "Slice STL meshes into layer outlines", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Slice a mesh and write one SVG per layer
    Slice {
        /// Input .stl file
        input: PathBuf,
        /// Directory for the numbered layer SVGs
        #[arg(short, long, default_value = "layers")]
        output: PathBuf,
        /// Print settings JSON (plane frame, layer height, scale)
        #[arg(short, long)]
        settings: Option<PathBuf>,
        /// Layer height in mm, overriding the settings file
        #[arg(short, long)]
        layer_height: Option<f64>,
    },
    /// Write a single cross-section as SVG
    Section {
        /// Input .stl file
        input: PathBuf,
        /// Output SVG file
        #[arg(short, long, default_value = "section.svg")]
        output: PathBuf,
        /// Height of the horizontal cutting plane
        #[arg(short = 'z', long, default_value_t = 0.0)]
        height: f64,
    },
    /// Display information about a mesh
    Info {
        /// Input .stl file
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    match Cli::parse().command {
        Commands::Slice {
            input,
            output,
            settings,
            layer_height,
        } => slice(&input, &output, settings.as_deref(), layer_height),
        Commands::Section {
            input,
            output,
            height,
        } => section(&input, &output, height),
        Commands::Info { input } => show_info(&input),
    }
}

fn load_mesh(input: &Path) -> Result<Mesh> {
    stl::load(input).with_context(|| format!("failed to load {}", input.display()))
}

fn slice(
    input: &Path,
    output: &Path,
    settings: Option<&Path>,
    layer_height: Option<f64>,
) -> Result<()> {
    let settings = match settings {
        Some(path) => PrintSettings::from_file(path)
            .with_context(|| format!("failed to load settings {}", path.display()))?,
        None => PrintSettings::default(),
    };
    let layer_height = layer_height.unwrap_or(settings.layer_height);

    let mesh = load_mesh(input)?;
    info!(triangles = mesh.num_triangles(), "mesh loaded");

    let plane = Plane::new(Point3::origin(), settings.direction, settings.tangent);
    let layers = slice_mesh(&mesh, &plane, layer_height)?;

    fs::create_dir_all(output)
        .with_context(|| format!("failed to create {}", output.display()))?;
    for (index, layer) in layers.iter().enumerate() {
        let path = output.join(format!("{index:04}.svg"));
        strata_svg::save(&path, layer, settings.scale)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }

    println!(
        "Sliced {} into {} layers ({} mm each), written to {}",
        input.display(),
        layers.len(),
        layer_height,
        output.display()
    );
    Ok(())
}

fn section(input: &Path, output: &Path, height: f64) -> Result<()> {
    let mesh = load_mesh(input)?;
    let polygon = cross_section(&mesh, &Plane::horizontal(height))?;

    strata_svg::save(output, &polygon, 1.0)
        .with_context(|| format!("failed to write {}", output.display()))?;

    println!(
        "Cross-section at z={height}: {} loop(s), written to {}",
        1 + polygon.interiors.len(),
        output.display()
    );
    Ok(())
}

fn show_info(input: &Path) -> Result<()> {
    let mesh = load_mesh(input)?;
    println!("{}", input.display());
    println!("  triangles: {}", mesh.num_triangles());

    if let Some((min, max)) = mesh.bounds() {
        let size = max - min;
        println!(
            "  bounds:    {:.2} x {:.2} x {:.2} mm",
            size.x, size.y, size.z
        );
        println!(
            "  min:       ({:.2}, {:.2}, {:.2})",
            min.x, min.y, min.z
        );
        println!(
            "  max:       ({:.2}, {:.2}, {:.2})",
            max.x, max.y, max.z
        );
    }
    Ok(())
}
