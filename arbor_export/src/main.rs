//! arbor_export - procedural tree to Wavefront OBJ
//!
//! Loads a parameter set (JSON file or named preset), generates the tree for
//! a seed and writes stems and leaves as separate OBJ objects.

mod obj;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use arbor_procgen::{generate, TreeParameters};
use clap::Parser;

#[derive(Parser)]
#[command(name = "arbor_export")]
#[command(about = "Generate a procedural tree and export it as OBJ")]
#[command(version)]
struct Cli {
    /// JSON parameter file; missing fields take the default preset's values
    #[arg(short, long, conflicts_with = "preset")]
    params: Option<PathBuf>,

    /// Named preset (quaking_aspen, black_tupelo, weeping_willow, sassafras, balsam_fir)
    #[arg(long)]
    preset: Option<String>,

    /// Random seed
    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    /// Output OBJ file
    #[arg(short, long, default_value = "tree.obj")]
    output: PathBuf,

    /// Duplicate vertices per triangle for faceted stems
    #[arg(long)]
    flat: bool,

    /// Print the resolved parameters as JSON and exit
    #[arg(long)]
    print_params: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut params = load_params(&cli)?;
    if cli.flat {
        params.flat_shaded = true;
    }

    if cli.print_params {
        let json = serde_json::to_string_pretty(&params).context("Failed to serialize parameters")?;
        println!("{}", json);
        return Ok(());
    }

    // Report contract violations as errors instead of letting generate panic
    params.validate().context("Invalid tree parameters")?;

    log::info!("Generating tree with seed {}", cli.seed);
    let tree = generate(&params, cli.seed)?;

    if let Some((min, max)) = tree.stems.bounds() {
        log::info!(
            "Tree extent: {:.2} x {:.2} x {:.2}",
            max.x - min.x,
            max.y - min.y,
            max.z - min.z
        );
    }

    write_obj(&cli.output, &tree)?;
    log::info!("Wrote {:?}", cli.output);

    Ok(())
}

fn load_params(cli: &Cli) -> Result<TreeParameters> {
    if let Some(path) = &cli.params {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read parameters: {:?}", path))?;
        let params = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse parameters: {:?}", path))?;
        log::info!("Loaded parameters from {:?}", path);
        return Ok(params);
    }

    match cli.preset.as_deref() {
        Some(name) => match TreeParameters::preset(name) {
            Some(params) => Ok(params),
            None => bail!(
                "Unknown preset {:?} (available: {})",
                name,
                TreeParameters::PRESET_NAMES.join(", ")
            ),
        },
        None => Ok(TreeParameters::default()),
    }
}

fn write_obj(path: &Path, tree: &arbor_procgen::TreeMeshes) -> Result<()> {
    let file = File::create(path).with_context(|| format!("Failed to create output: {:?}", path))?;
    let mut out = BufWriter::new(file);
    obj::write_tree(&mut out, tree).with_context(|| format!("Failed to write OBJ: {:?}", path))?;
    out.flush()
        .with_context(|| format!("Failed to write OBJ: {:?}", path))?;
    Ok(())
}
