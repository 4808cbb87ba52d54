use twobody::{CsvFrameWriter, InitialConfig, ScenarioConfig, Session};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Preset {
    Manual,
    Symmetric,
    EarthMoon,
}

#[derive(Parser, Debug)]
#[command(about = "Planar two-body gravity simulation")]
struct Args {
    /// Scenario file, either a path or a name under `scenarios/`
    #[arg(short, long, default_value = "default.yaml")]
    file_name: String,

    /// Replace the scenario's initial conditions
    #[arg(long, value_enum)]
    preset: Option<Preset>,

    /// Override max_steps
    #[arg(long)]
    steps: Option<usize>,

    /// Override render_every
    #[arg(long)]
    render_every: Option<usize>,

    /// Write frames here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

// load here to keep main clean
fn load_scenario(args: &Args) -> Result<ScenarioConfig> {
    let direct = PathBuf::from(&args.file_name);
    let config_path = if direct.exists() {
        direct
    } else {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(&args.file_name)
    };

    let mut cfg = ScenarioConfig::from_yaml_file(&config_path)?;
    info!("loaded scenario {}", config_path.display());

    match args.preset {
        Some(Preset::Manual) => cfg.initial = InitialConfig::default(),
        Some(Preset::Symmetric) => cfg.initial = InitialConfig::symmetric(),
        Some(Preset::EarthMoon) => cfg.initial = InitialConfig::earth_moon(),
        None => {}
    }
    if let Some(steps) = args.steps {
        cfg.parameters.max_steps = steps;
    }
    if let Some(render_every) = args.render_every {
        cfg.parameters.render_every = render_every;
    }
    cfg.validate()?;

    Ok(cfg)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let scenario_cfg = load_scenario(&args)?;

    let out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("failed to create {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    let mut session = Session::new(scenario_cfg)?;
    let mut sink = CsvFrameWriter::new(out);
    session.run(&mut sink)?;

    Ok(())
}
