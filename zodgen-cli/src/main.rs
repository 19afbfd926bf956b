//! # zodgen
//!
//! CLI tool for generating TypeScript Zod schemas from IR documents.
//!
//! ## Usage
//!
//! ```bash
//! # Generate schemas from an IR document
//! zodgen generate --input ./api.ir.json
//!
//! # Generate schemas to a specific output directory
//! zodgen generate --input ./api.ir.json --output ./generated
//!
//! # Watch mode for development
//! zodgen generate --input ./api.ir.json --watch
//!
//! # Dry run to preview changes
//! zodgen generate --input ./api.ir.json --dry-run
//!
//! # Initialize configuration
//! zodgen init
//!
//! # Validate schemas are up-to-date
//! zodgen validate --input ./api.ir.json --path ./generated/schemas.ts
//! ```

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;

use zodgen_cli::{
    config::{CliArgs, Config, ConfigManager},
    error::CliError,
    generator::SchemaGenerator,
    loader::IrLoader,
    watcher::FileWatcher,
    writer::{FileWriter, WriteResult},
};

#[derive(Parser)]
#[command(name = "zodgen")]
#[command(author, version, about = "Generate TypeScript Zod schemas from IR documents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate TypeScript Zod schemas from an IR document
    Generate {
        /// Path to the IR document (JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Output directory for generated TypeScript files
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Watch the IR document and regenerate on change
        #[arg(short, long)]
        watch: bool,

        /// Preview changes without writing files
        #[arg(long)]
        dry_run: bool,

        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Initialize a new zodgen configuration file
    Init {
        /// Output path for configuration file
        #[arg(short, long, default_value = "zodgen.toml")]
        output: PathBuf,

        /// Overwrite existing configuration file
        #[arg(long)]
        force: bool,
    },

    /// Validate that generated schemas are up-to-date
    Validate {
        /// Path to generated schemas file
        #[arg(short, long)]
        path: PathBuf,

        /// Path to the IR document (JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&e);
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Generate {
            input,
            output,
            watch,
            dry_run,
            config,
        } => cmd_generate(input, output, watch, dry_run, config),

        Commands::Init { output, force } => cmd_init(output, force),

        Commands::Validate {
            path,
            input,
            config,
        } => cmd_validate(path, input, config),
    }
}

/// Generate command implementation.
fn cmd_generate(
    input: PathBuf,
    output: Option<PathBuf>,
    watch: bool,
    dry_run: bool,
    config_path: Option<PathBuf>,
) -> Result<(), CliError> {
    let config = ConfigManager::load(config_path.as_deref())?;
    let config = ConfigManager::merge_cli_args(
        config,
        &CliArgs {
            output,
            ..Default::default()
        },
    );

    if watch {
        run_watch_mode(&input, &config, dry_run)
    } else {
        run_generate(&input, &config, dry_run)
    }
}

/// Run schema generation once.
fn run_generate(input: &PathBuf, config: &Config, dry_run: bool) -> Result<(), CliError> {
    println!("{}", "Loading IR document...".cyan());

    let doc = IrLoader::new(input).load()?;
    let target_count: usize = doc
        .services
        .iter()
        .map(|s| {
            let methods: usize = s
                .interfaces
                .iter()
                .flat_map(|i| &i.methods)
                .filter(|m| !m.parameters.is_empty())
                .count();
            s.types.len() + s.enums.len() + s.unions.len() + methods
        })
        .sum();
    println!(
        "  Found {} service(s), {} schema target(s)",
        doc.services.len().to_string().green(),
        target_count.to_string().green()
    );

    println!("{}", "Generating Zod schemas...".cyan());

    let generator = SchemaGenerator::new(config.clone());
    let output = generator.generate(&doc);

    if let Some(cycle) = &output.cycle {
        eprintln!("{} {}", "Warning:".yellow(), cycle);
        eprintln!("  The affected schemas are emitted last, unordered.");
    }

    println!(
        "  Generated {} schema(s)",
        output.schemas.len().to_string().green()
    );

    let output_path = config.output_path();
    let writer = FileWriter::new(dry_run);

    match writer.write(&output_path, &output.content)? {
        WriteResult::Written { path, bytes } => {
            println!(
                "{} Written {} bytes to {}",
                "✓".green(),
                bytes,
                path.display()
            );
        }
        WriteResult::Unchanged { path } => {
            println!("{} {} is already up-to-date", "✓".green(), path.display());
        }
        WriteResult::DryRun { content, path } => {
            println!(
                "{} Would write to {}:",
                "[dry-run]".yellow(),
                path.display()
            );
            println!("{}", "─".repeat(60).dimmed());
            println!("{}", content);
            println!("{}", "─".repeat(60).dimmed());
        }
    }

    Ok(())
}

/// Run in watch mode.
fn run_watch_mode(input: &PathBuf, config: &Config, dry_run: bool) -> Result<(), CliError> {
    println!("{}", "Starting watch mode...".cyan());
    println!("  Watching: {}", input.display());
    println!("  Press Ctrl+C to stop\n");

    // Initial generation
    run_generate(input, config, dry_run)?;

    let watcher = FileWatcher::new(input);
    let (_debouncer, rx) = watcher.watch()?;

    println!("\n{}", "Watching for changes...".cyan());

    while let Ok(event) = rx.recv() {
        if event.is_error() {
            println!(
                "{} {}",
                "Watch error:".red(),
                event.error_message().unwrap_or("Unknown error")
            );
            continue;
        }

        if let Some(path) = event.path() {
            println!("\n{} {}", "Document changed:".cyan(), path.display());
        }

        if let Err(e) = run_generate(input, config, dry_run) {
            println!("{} {}", "Generation error:".red(), e);
        }

        println!("\n{}", "Watching for changes...".cyan());
    }

    Ok(())
}

/// Init command implementation.
fn cmd_init(output: PathBuf, force: bool) -> Result<(), CliError> {
    if output.exists() && !force {
        println!(
            "{} Configuration file already exists: {}",
            "Error:".red(),
            output.display()
        );
        println!("  Use --force to overwrite");
        return Err(CliError::Validation(
            "Configuration file already exists".to_string(),
        ));
    }

    let content = ConfigManager::default_config_content();
    std::fs::write(&output, content)?;

    println!(
        "{} Created configuration file: {}",
        "✓".green(),
        output.display()
    );

    Ok(())
}

/// Validate command implementation.
fn cmd_validate(
    schema_path: PathBuf,
    input: PathBuf,
    config_path: Option<PathBuf>,
) -> Result<(), CliError> {
    println!("{}", "Validating schemas...".cyan());

    if !schema_path.exists() {
        return Err(CliError::Validation(format!(
            "Schema file not found: {}",
            schema_path.display()
        )));
    }

    let existing_content = std::fs::read_to_string(&schema_path)?;

    let config = ConfigManager::load(config_path.as_deref())?;

    let doc = IrLoader::new(&input).load()?;
    let generator = SchemaGenerator::new(config);
    let output = generator.generate(&doc);

    if existing_content.trim() == output.content.trim() {
        println!("{} Schemas are up-to-date", "✓".green());
        Ok(())
    } else {
        println!("{} Schemas are out of date", "✗".red());
        println!("  Run 'zodgen generate' to update");
        Err(CliError::Validation("Schemas are out of date".to_string()))
    }
}

/// Print an error with formatting.
fn print_error(error: &CliError) {
    eprintln!("{} {}", "Error:".red().bold(), error);
}
