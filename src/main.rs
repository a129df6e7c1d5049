//! specref CLI
//!
//! Runs a specifier reference generation pass, or lists the specifier
//! catalog the built-in and configured rules resolve to.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use specref::corpus::Corpus;
use specref::registry::StaticRegistry;
use specref::{GenerationOutcome, Generator, GeneratorConfig};

/// Specifier reference catalog generator
#[derive(Parser)]
#[command(name = "specref")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the catalogs and write the reference artifacts
    Generate {
        #[command(flatten)]
        settings: Settings,

        /// Output directory
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Corpus file or directory of declaration dumps
        #[arg(long)]
        corpus: Option<PathBuf>,

        /// Set a define, e.g. -D SPECIFIER_EXPORT_JSON=1
        #[arg(short = 'D', value_name = "NAME[=VALUE]")]
        defines: Vec<String>,

        /// Turn the pass off
        #[arg(long)]
        disable: bool,

        /// Fold the catalogs in parallel
        #[arg(long)]
        parallel: bool,
    },

    /// Print the specifier catalog, one entry per line
    ListSpecifiers {
        #[command(flatten)]
        settings: Settings,
    },
}

#[derive(Args)]
struct Settings {
    /// JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Extra rule file, may be repeated
    #[arg(long = "rules", value_name = "FILE")]
    rules: Vec<PathBuf>,
}

impl Settings {
    fn load(&self) -> Result<GeneratorConfig> {
        let mut config = match &self.config {
            Some(path) => GeneratorConfig::read_from_file(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => GeneratorConfig::default(),
        };
        config.rules.extend(self.rules.iter().cloned());
        Ok(config)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Setup logging; RUST_LOG wins over --verbose
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Generate {
            settings,
            output,
            corpus,
            defines,
            disable,
            parallel,
        } => generate(settings, output, corpus, defines, disable, parallel),
        Commands::ListSpecifiers { settings } => list_specifiers(settings),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn generate(
    settings: Settings,
    output: Option<PathBuf>,
    corpus: Option<PathBuf>,
    defines: Vec<String>,
    disable: bool,
    parallel: bool,
) -> Result<()> {
    let mut config = settings.load()?;
    if let Some(output) = output {
        config.output_dir = output;
    }
    if corpus.is_some() {
        config.corpus = corpus;
    }
    for define in &defines {
        config.apply_define(define)?;
    }
    config.enabled &= !disable;
    config.parallel |= parallel;

    match Generator::new(config).run_configured()? {
        GenerationOutcome::Disabled => {
            println!("Generation disabled; nothing written");
        }
        GenerationOutcome::Completed(summary) => {
            println!(
                "{} specifiers, {} metadata keys from {} usages",
                summary.specifiers, summary.metadata, summary.usages
            );
            for (path, status) in &summary.export.committed {
                println!("  {:?}: {}", status, path.display());
            }
        }
    }
    Ok(())
}

fn list_specifiers(settings: Settings) -> Result<()> {
    let config = settings.load()?;

    let mut registry = StaticRegistry::builtin();
    for path in &config.rules {
        registry
            .load_file(path)
            .with_context(|| format!("loading rules {}", path.display()))?;
    }

    let (catalogs, _) = Generator::new(config).build_catalogs(&registry, &Corpus::new())?;
    for entry in &catalogs.specifiers {
        println!("{}\t{}\t{}", entry.name, entry.tags, entry.value_shape);
    }
    Ok(())
}
