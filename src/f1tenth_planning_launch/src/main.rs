//! f1tenth_planning_launch CLI

use clap::{Parser, Subcommand, ValueEnum};
use f1tenth_planning_launch::{
    actions::parse_launch_arg, compose_from_cli_args, declared_arguments, generate_record,
    substitution::PackageIndex, PlanningConfig,
};
use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    process,
};

#[derive(Parser)]
#[command(name = "f1tenth_planning_launch")]
#[command(about = "Launch plan composer for the F1TENTH planning stack", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, global = true)]
    verbose: bool,

    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compose the planning launch plan
    Plan {
        /// Launch arguments (key:=value)
        #[arg(value_parser = parse_cli_arg)]
        args: Vec<(String, String)>,

        /// Planning configuration overrides (YAML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Resolve packages from AMENT_PREFIX_PATH and emit a launch record
        #[arg(short, long)]
        record: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the declared launch arguments
    ShowArgs,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Yaml,
}

fn parse_cli_arg(s: &str) -> Result<(String, String), String> {
    parse_launch_arg(s).map_err(|e| e.to_string())
}

fn main() {
    let cli = Cli::parse();

    // Set up logging
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let result = match cli.command {
        Commands::Plan {
            args,
            config,
            record,
            format,
            output,
        } => {
            let cli_args: HashMap<String, String> = args.into_iter().collect();
            plan_and_write(cli_args, config.as_deref(), record, format, output.as_deref())
        }
        Commands::ShowArgs => {
            show_args();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn show_args() {
    println!("Arguments (pass arguments as '<name>:=<value>'):");
    for arg in declared_arguments() {
        println!();
        println!("    '{}':", arg.name);
        println!(
            "        {}",
            arg.description.as_deref().unwrap_or("no description given")
        );
        match &arg.default {
            Some(default) => println!("        (default: '{}')", default),
            None => println!("        (required)"),
        }
    }
}

fn plan_and_write(
    cli_args: HashMap<String, String>,
    config_path: Option<&Path>,
    record: bool,
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = match config_path {
        Some(path) => {
            log::info!("Loading planning config: {}", path.display());
            PlanningConfig::from_yaml_file(path)?
        }
        None => PlanningConfig::default(),
    };

    let plan = compose_from_cli_args(&config, &cli_args)?;
    log::info!(
        "Composed {} steps, {} active",
        plan.steps.len(),
        plan.active_steps().count()
    );

    let rendered = if record {
        let record = generate_record(&plan, PackageIndex::from_env())?;
        log::info!(
            "  {} nodes, {} included launch files",
            record.node.len(),
            record.include.len()
        );
        match format {
            OutputFormat::Json => record.to_json()?,
            OutputFormat::Yaml => record.to_yaml()?,
        }
    } else {
        match format {
            OutputFormat::Json => plan.to_json()?,
            OutputFormat::Yaml => plan.to_yaml()?,
        }
    };

    match output {
        Some(path) => {
            std::fs::write(path, rendered)?;
            log::info!("Wrote {}", path.display());
        }
        None => println!("{}", rendered),
    }

    Ok(())
}
