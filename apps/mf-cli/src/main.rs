use clap::{Parser, Subcommand, ValueEnum};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use mf_core::units::{k, pa};
use mf_props::{Composition, IdealMixModel, PropertyModel, Species};
use mf_stream::{MixOptions, Stream, StreamError, mix_all};

#[derive(Parser)]
#[command(name = "mf-cli")]
#[command(about = "mixflow CLI - material stream property and mixing tool", long_about = None)]
struct Cli {
    /// Property model to evaluate streams against
    #[arg(long, global = true, value_enum, default_value = "ideal")]
    model: ModelKind,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModelKind {
    /// Closed-form ideal liquid mixture model
    Ideal,
    /// CoolProp backend (requires the `coolprop` build feature)
    Coolprop,
}

#[derive(Subcommand)]
enum Commands {
    /// Print thermophysical properties for each stream in a file
    Props {
        /// Path to the streams YAML file
        file: PathBuf,
    },
    /// Mix all streams in a file and print the combined stream
    Mix {
        /// Path to the streams YAML file
        file: PathBuf,
    },
}

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error("failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse streams file: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("stream '{stream}' references unknown component '{component}'")]
    UnknownComponent { stream: String, component: String },

    #[error("stream '{name}' is invalid: {source}")]
    Stream { name: String, source: StreamError },

    #[error(transparent)]
    Mix(#[from] StreamError),

    #[error("streams file contains no streams")]
    Empty,

    #[error("this binary was built without the `coolprop` feature")]
    CoolPropUnavailable,
}

type AppResult<T> = Result<T, AppError>;

/// One stream definition in the YAML input.
#[derive(Debug, Deserialize)]
struct StreamDef {
    name: String,
    /// Component name -> mole fraction.
    composition: BTreeMap<String, f64>,
    temperature_k: f64,
    pressure_pa: f64,
    flow_mol_per_s: f64,
}

#[derive(Debug, Deserialize)]
struct StreamFile {
    streams: Vec<StreamDef>,
}

fn main() -> AppResult<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let model = make_model(cli.model)?;

    match cli.command {
        Commands::Props { file } => cmd_props(&file, model.as_ref()),
        Commands::Mix { file } => cmd_mix(&file, model.as_ref()),
    }
}

fn make_model(kind: ModelKind) -> AppResult<Box<dyn PropertyModel>> {
    match kind {
        ModelKind::Ideal => Ok(Box::new(IdealMixModel::new())),
        #[cfg(feature = "coolprop")]
        ModelKind::Coolprop => Ok(Box::new(mf_props::CoolPropModel::new())),
        #[cfg(not(feature = "coolprop"))]
        ModelKind::Coolprop => Err(AppError::CoolPropUnavailable),
    }
}

fn load_streams(path: &Path) -> AppResult<Vec<(String, Stream)>> {
    let text = std::fs::read_to_string(path).map_err(|source| AppError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let file: StreamFile = serde_yaml::from_str(&text)?;

    if file.streams.is_empty() {
        return Err(AppError::Empty);
    }

    let mut streams = Vec::with_capacity(file.streams.len());
    for def in file.streams {
        let mut fractions = Vec::with_capacity(def.composition.len());
        for (component, frac) in &def.composition {
            let species: Species =
                component
                    .parse()
                    .map_err(|_| AppError::UnknownComponent {
                        stream: def.name.clone(),
                        component: component.clone(),
                    })?;
            fractions.push((species, *frac));
        }

        let comp = Composition::from_mole_fractions(fractions).map_err(|e| AppError::Stream {
            name: def.name.clone(),
            source: StreamError::from(e),
        })?;
        let stream = Stream::new(
            comp,
            k(def.temperature_k),
            pa(def.pressure_pa),
            def.flow_mol_per_s,
        )
        .map_err(|e| AppError::Stream {
            name: def.name.clone(),
            source: e,
        })?;

        streams.push((def.name, stream));
    }

    Ok(streams)
}

fn print_stream(name: &str, stream: &Stream, model: &dyn PropertyModel) {
    println!("{name}: {stream}");
    println!(
        "  T = {:.2} K, P = {:.0} Pa, flow = {:.4} mol/s",
        stream.temperature().value,
        stream.pressure().value,
        stream.flow()
    );
    for (species, frac) in stream.composition().iter() {
        println!("  x[{species}] = {frac:.6}");
    }
    match stream.properties(model) {
        Ok(pack) => {
            println!("  density            = {:.3} kg/m³", pack.density_mass.value);
            println!("  molar enthalpy     = {:.2} J/mol", pack.enthalpy_molar);
            println!("  molar heat cap.    = {:.3} J/(mol·K)", pack.heat_capacity_molar);
            println!("  viscosity          = {:.3e} Pa·s", pack.viscosity.value);
            println!(
                "  conductivity       = {:.4} W/(m·K)",
                pack.thermal_conductivity.value
            );
        }
        Err(e) => {
            println!("  properties unavailable under {}: {e}", model.name());
        }
    }
}

fn cmd_props(file: &Path, model: &dyn PropertyModel) -> AppResult<()> {
    let streams = load_streams(file)?;
    for (name, stream) in &streams {
        print_stream(name, stream, model);
        println!();
    }
    Ok(())
}

fn cmd_mix(file: &Path, model: &dyn PropertyModel) -> AppResult<()> {
    let streams = load_streams(file)?;

    for (name, stream) in &streams {
        println!(
            "feed {name}: {stream}, T = {:.2} K, P = {:.0} Pa, flow = {:.4} mol/s",
            stream.temperature().value,
            stream.pressure().value,
            stream.flow()
        );
    }
    println!();

    let feeds: Vec<Stream> = streams.iter().map(|(_, s)| s.clone()).collect();
    let mixed = mix_all(&feeds, model, MixOptions::default())?;

    print_stream("mixed", &mixed, model);
    Ok(())
}
