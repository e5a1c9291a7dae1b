use arc_launcher::cli_api::{parse_point, LaunchReport, OutputFormat, SampleReport};
use arc_launcher::{sample_arc, LauncherConfig, PhysicsConstants};
use clap::{Parser, Subcommand};
use nalgebra::Point3;
use std::error::Error;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "launcher-cli")]
#[command(author = "Arc Launcher Team")]
#[command(version = "0.1.0")]
#[command(about = "Launch motion calculator for arcing primed explosives", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve the launch motion between two points
    Solve {
        #[command(flatten)]
        target: TargetArgs,

        /// Output format
        #[arg(short = 'o', long, value_enum, default_value = "table")]
        output: OutputFormat,
    },

    /// Solve, then preview the ideal arc at evenly spaced times
    Sample {
        #[command(flatten)]
        target: TargetArgs,

        /// Number of intervals across the flight time
        #[arg(short = 'n', long, default_value = "10")]
        samples: usize,

        /// Output format
        #[arg(short = 'o', long, value_enum, default_value = "table")]
        output: OutputFormat,
    },

    /// Display the calibration constants
    Info,
}

#[derive(clap::Args)]
struct TargetArgs {
    /// Source position as X,Y,Z
    #[arg(short = 'f', long, value_parser = parse_point, allow_hyphen_values = true)]
    from: Point3<f64>,

    /// Destination position as X,Y,Z
    #[arg(short = 't', long, value_parser = parse_point, allow_hyphen_values = true)]
    to: Point3<f64>,

    /// Arc factor (overrides config file and environment)
    #[arg(short = 'a', long)]
    arc_factor: Option<f64>,

    /// TOML config file
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,
}

impl TargetArgs {
    fn resolve_config(&self) -> Result<LauncherConfig, Box<dyn Error>> {
        let mut config = match &self.config {
            Some(path) => LauncherConfig::load(path)?,
            None => LauncherConfig::default(),
        }
        .with_env_overrides();
        if let Some(arc_factor) = self.arc_factor {
            config.arc_factor = arc_factor;
        }
        config.validate()?;
        Ok(config)
    }

    fn report(&self) -> Result<(LauncherConfig, LaunchReport, arc_launcher::LaunchSolution), Box<dyn Error>> {
        let config = self.resolve_config()?;
        let solution = config.solver()?.solve_detailed(&self.from, &self.to)?;
        let report = LaunchReport::new(&self.from, &self.to, config.arc_factor, &solution);
        Ok((config, report, solution))
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .compact()
            .init();
    }
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    match cli.command {
        Commands::Solve { target, output } => {
            let (_, report, _) = target.report()?;
            tracing::debug!(
                motion_x = report.motion.x,
                motion_y = report.motion.y,
                motion_z = report.motion.z,
                "solved launch motion"
            );
            print!("{}", report.render(output)?);
        }

        Commands::Sample { target, samples, output } => {
            let (config, report, solution) = target.report()?;
            let arc = sample_arc(&target.from, &solution, &config.constants, samples)?;
            print!("{}", SampleReport::new(report, &arc).render(output)?);
        }

        Commands::Info => {
            let c = PhysicsConstants::TNT;
            println!("ARC LAUNCHER v0.1.0");
            println!();
            println!("Calibration (primed TNT):");
            println!("  Gravitational deceleration: {} blocks/s²", c.gravity);
            println!("  Lateral constant:           {} blocks/s per motion", c.lateral_constant);
            println!("  Vertical constant:          {} blocks/s per motion", c.vertical_constant);
            println!("  Default arc factor:         {}", arc_launcher::DEFAULT_ARC_FACTOR);
        }
    }

    Ok(())
}
