//! Shake - probabilistic seismic hazard engine
//!
//! The command-line entry point, handling:
//! - Ground-motion model listing and parameter introspection
//! - Single-scenario GMPE evaluation
//! - Logic-tree hazard-curve construction
//! - JSON Schema generation for agent integration

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use shake_common::{load_config, Error, OutputFormat};
use shake_core::logging::{init_logging, LogFormat};
use shake_core::{schema, HazardCurveRequest, HazardEngine, LogicTreeEntry, ScenarioInput};

/// Shake - GMPE evaluation and logic-tree hazard curves
#[derive(Parser)]
#[command(name = "shake")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    global: GlobalOpts,
}

/// Global options available to all commands
#[derive(Args, Debug)]
struct GlobalOpts {
    /// Engine config file (JSON)
    #[arg(long, global = true, env = "SHAKE_CONFIG")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "json")]
    format: OutputFormat,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Decrease verbosity (quiet mode)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    log_json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered ground-motion models
    Models(ModelsArgs),

    /// List the tectonic mechanism catalog
    Mechanisms,

    /// Show declared parameter requirements of one model
    Params(ParamsArgs),

    /// Evaluate one model for one scenario
    Evaluate(EvaluateArgs),

    /// Build a hazard curve for a weighted logic tree
    Curve(CurveArgs),

    /// Generate JSON Schemas for output types
    Schema(SchemaArgs),
}

#[derive(Args)]
struct ModelsArgs {
    /// Filter by tectonic-region substring (case-insensitive)
    #[arg(long)]
    mechanism: Option<String>,
}

#[derive(Args)]
struct ParamsArgs {
    /// Exact model code
    code: String,
}

#[derive(Args)]
struct EvaluateArgs {
    /// Exact model code
    #[arg(long)]
    code: String,

    /// Intensity measure type, e.g. PGA or SA(0.2)
    #[arg(long, default_value = "PGA")]
    imt: String,

    /// Moment magnitude
    #[arg(long)]
    mag: f64,

    /// Rupture distance (km)
    #[arg(long)]
    rrup: f64,

    /// Site vs30 (m/s)
    #[arg(long, default_value_t = 760.0)]
    vs30: f64,

    /// Depth to the 1.0 km/s horizon (km)
    #[arg(long)]
    z1pt0: Option<f64>,

    /// Depth to the 2.5 km/s horizon (km)
    #[arg(long)]
    z2pt5: Option<f64>,
}

#[derive(Args)]
struct CurveArgs {
    /// Logic-tree member as CODE or CODE:WEIGHT (repeatable)
    #[arg(long = "gmpe", required = true, value_parser = parse_logic_entry)]
    logic: Vec<LogicTreeEntry>,

    /// Intensity measure type, e.g. PGA or SA(0.2)
    #[arg(long, default_value = "PGA")]
    imt: String,

    /// Moment magnitude
    #[arg(long)]
    mag: f64,

    /// Rupture distances (km), comma-separated
    #[arg(long, value_delimiter = ',', required = true)]
    rrup: Vec<f64>,

    /// Site vs30 (m/s)
    #[arg(long, default_value_t = 760.0)]
    vs30: f64,

    /// Intensity levels (g), comma-separated; engine default grid if omitted
    #[arg(long, value_delimiter = ',')]
    imls: Option<Vec<f64>>,

    /// Depth to the 1.0 km/s horizon (km)
    #[arg(long)]
    z1pt0: Option<f64>,

    /// Depth to the 2.5 km/s horizon (km)
    #[arg(long)]
    z2pt5: Option<f64>,

    /// Annual Poisson occurrence rate
    #[arg(long)]
    annual_rate: Option<f64>,
}

#[derive(Args)]
struct SchemaArgs {
    /// Type to generate a schema for
    name: Option<String>,

    /// List available schema types
    #[arg(long)]
    list: bool,

    /// Generate all schemas keyed by type name
    #[arg(long)]
    all: bool,
}

fn parse_logic_entry(spec: &str) -> Result<LogicTreeEntry, String> {
    match spec.split_once(':') {
        Some((code, weight)) => {
            let weight: f64 = weight
                .parse()
                .map_err(|_| format!("invalid weight in {spec:?}"))?;
            Ok(LogicTreeEntry {
                code: code.to_string(),
                weight,
            })
        }
        None => Ok(LogicTreeEntry {
            code: spec.to_string(),
            weight: 1.0,
        }),
    }
}

fn emit<T: serde::Serialize>(value: &T, format: OutputFormat) -> Result<(), Error> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Text => println!("{}", serde_json::to_string(value)?),
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), Error> {
    let config = load_config(cli.global.config.as_deref())?;
    let engine = HazardEngine::new(config);
    let format = cli.global.format;

    match cli.command {
        Commands::Models(args) => {
            let listed = engine.list_models(args.mechanism.as_deref());
            if format == OutputFormat::Text {
                for d in &listed {
                    println!(
                        "{:<24} {:<26} year={} distances={}",
                        d.id,
                        d.tectonic_region,
                        d.year.map_or_else(|| "-".to_string(), |y| y.to_string()),
                        d.req_distances.join(",")
                    );
                }
                Ok(())
            } else {
                emit(&listed, format)
            }
        }
        Commands::Mechanisms => {
            let mechanisms = engine.mechanisms();
            if format == OutputFormat::Text {
                for m in mechanisms {
                    println!("{:<28} {}", m.id, m.label);
                }
                Ok(())
            } else {
                emit(&mechanisms, format)
            }
        }
        Commands::Params(args) => {
            let params = engine.required_parameters(&args.code)?;
            emit(&params, format)
        }
        Commands::Evaluate(args) => {
            let result = engine.evaluate(&ScenarioInput {
                code: args.code,
                imt: args.imt,
                mag: args.mag,
                rrup: args.rrup,
                vs30: args.vs30,
                z1pt0: args.z1pt0,
                z2pt5: args.z2pt5,
                hypo_depth_km: engine.config().hypo_depth_km,
            })?;
            emit(&result, format)
        }
        Commands::Curve(args) => {
            let curve = engine.hazard_curve(&HazardCurveRequest {
                logic: args.logic,
                imt: args.imt,
                mag: args.mag,
                rrup: args.rrup,
                vs30: args.vs30,
                imls: args.imls,
                z1pt0: args.z1pt0,
                z2pt5: args.z2pt5,
                annual_rate: args.annual_rate,
            })?;
            if format == OutputFormat::Text {
                println!(
                    "# mu_ln={:.4} sigma_ln={:.4} annual_rate={}",
                    curve.meta.mu_ln, curve.meta.sigma_ln, curve.meta.annual_rate
                );
                for (iml, poe) in curve.imls.iter().zip(&curve.poe) {
                    println!("{iml:<10.4} {poe:.6e}");
                }
                Ok(())
            } else {
                emit(&curve, format)
            }
        }
        Commands::Schema(args) => {
            if args.list {
                let listed: Vec<_> = schema::available_schemas()
                    .into_iter()
                    .map(|(name, description)| {
                        serde_json::json!({ "name": name, "description": description })
                    })
                    .collect();
                return emit(&listed, format);
            }
            if args.all {
                return emit(&schema::all_schemas(), format);
            }
            match args.name {
                Some(name) => match schema::schema_by_name(&name) {
                    Some(value) => emit(&value, format),
                    None => Err(Error::Config(format!(
                        "unknown schema type {name:?}; try 'shake schema --list'"
                    ))),
                },
                None => Err(Error::Config(
                    "expected a type name, --list, or --all".to_string(),
                )),
            }
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let log_format = if cli.global.log_json {
        LogFormat::Json
    } else {
        LogFormat::Human
    };
    init_logging(cli.global.verbose, cli.global.quiet, log_format);

    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        let code = if err.is_bad_request() { 2 } else { 1 };
        std::process::exit(code);
    }
}
