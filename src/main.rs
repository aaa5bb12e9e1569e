use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

mod analyzer;
mod core;
mod parsing;
mod reporter;
mod transformer;

use crate::analyzer::analyze_code;
use crate::core::types::RefactorOptions;
use crate::transformer::filesystem::{self, DEFAULT_KEEP_PATTERNS};

#[derive(Debug, Clone, Parser)]
#[command(
    name = "modsplit",
    version = "0.1.0",
    author = "modsplit developers",
    about = "Split a monolithic Python file into a modular package"
)]
struct Cli {
    /// Path to the Python source file to analyze or refactor
    #[arg(value_name = "SOURCE")]
    source: PathBuf,

    /// Output directory for the generated package (default: derived from source)
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Name for the generated package (default: derived from source filename)
    #[arg(short = 'n', long, value_name = "NAME")]
    package_name: Option<String>,

    /// Only analyze the source, don't generate a package
    #[arg(long)]
    analyze_only: bool,

    /// Show what would be done without writing anything
    #[arg(long)]
    dry_run: bool,

    /// Clean the output directory before generating files
    #[arg(long)]
    clean: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Report rendering for analysis output
    #[arg(long, value_name = "FORMAT", value_enum, default_value_t = ReportFormat::Text)]
    report_format: ReportFormat,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
#[value(rename_all = "kebab-case")]
enum ReportFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    let options = RefactorOptions {
        source_path: cli.source,
        output_dir: cli.output_dir,
        package_name: cli.package_name,
        analyze_only: cli.analyze_only,
        dry_run: cli.dry_run,
        verbose: cli.verbose,
    };

    println!("Analyzing {}...", options.source_path.display());
    let analysis = analyze_code(&options.source_path)?;

    if options.analyze_only || options.dry_run || options.verbose {
        match cli.report_format {
            ReportFormat::Text => reporter::print_analysis_report(&analysis),
            ReportFormat::Json => println!("{}", reporter::render_json_report(&analysis)?),
        }
    }

    if options.analyze_only {
        return Ok(());
    }

    println!("Transforming {}...", options.source_path.display());
    let transformation = transformer::transform_code(
        &analysis,
        options.output_dir.as_deref(),
        options.package_name.as_deref(),
    );

    if cli.clean {
        println!("Cleaning output directory...");
        let removed = filesystem::clean_output_directory(
            &transformation.output_path,
            DEFAULT_KEEP_PATTERNS,
            options.dry_run,
        )?;
        if options.verbose {
            for path in &removed {
                println!("  - {path}");
            }
        }
    }

    println!("Generating files...");
    let generated = filesystem::generate_files(&transformation, options.dry_run)?;

    if options.dry_run {
        for path in &generated {
            println!("  {path}");
        }
        println!("Dry run completed - no files were written");
    } else {
        println!("Generated {} files", generated.len());
        if options.verbose {
            for path in &generated {
                println!("  - {path}");
            }
        }
        println!(
            "Transformation complete. Results in {}",
            transformation.output_path.display()
        );
    }

    Ok(())
}
