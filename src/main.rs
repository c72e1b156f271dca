mod cli;

use tankobon::config::{self, Config, LibraryConfig};
use tankobon::scanner::{LibraryReport, Scanner};
use tankobon_parser::{Numbering, ParseContext, ParseResult};

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use serde::Serialize;
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG if set, otherwise pick defaults from the verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "tankobon=debug,tankobon_parser=debug,tankobon_metadata=debug".to_string()
        } else {
            "tankobon=info,tankobon_parser=warn,tankobon_metadata=warn".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Parse {
            files,
            library_type,
            root,
            no_metadata,
            json,
        } => {
            let config = config::load_config_or_default(cli.config.as_deref())?;
            let options = ParseOptions {
                library_type,
                root,
                no_metadata,
            };
            parse_files(&files, &config, &options, json)
        }
        Commands::Scan { library, json } => {
            let config = config::load_config_or_default(cli.config.as_deref())?;
            scan_libraries(&config, library.as_deref(), json)
        }
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("tankobon {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

/// Command-line overrides for `parse`.
struct ParseOptions {
    library_type: Option<tankobon_parser::LibraryType>,
    root: Option<PathBuf>,
    no_metadata: bool,
}

impl ParseOptions {
    /// Context for `file`: the configured library it lives in, if any, with
    /// command-line flags on top.
    fn context_for(&self, file: &Path, config: &Config) -> ParseContext {
        let library = config.library_for(file);
        let mut builder = ParseContext::builder();
        if let Some(root) = self
            .root
            .as_deref()
            .or_else(|| library.map(|l| l.root.as_path()))
        {
            builder = builder.library_root(root.to_string_lossy());
        }
        if let Some(library_type) = self
            .library_type
            .or_else(|| library.map(|l| l.library_type))
        {
            builder = builder.library_type(library_type);
        }
        let metadata = library.map_or(true, |l| l.enable_metadata);
        builder.enable_metadata(metadata && !self.no_metadata).build()
    }
}

#[derive(Serialize)]
struct ParseOutput<'a> {
    path: &'a str,
    result: Option<ParseResult>,
}

fn parse_files(files: &[PathBuf], config: &Config, options: &ParseOptions, json: bool) -> Result<()> {
    let scanner = Scanner::new(config.scan.follow_symlinks);
    let paths: Vec<String> = files
        .iter()
        .map(|file| file.to_string_lossy().into_owned())
        .collect();

    let outputs: Vec<ParseOutput<'_>> = files
        .iter()
        .zip(&paths)
        .map(|(file, path)| {
            let ctx = options.context_for(file, config);
            tracing::debug!("Parsing {} as {}", path, ctx.library_type);
            ParseOutput {
                path,
                result: scanner.parse_file(path, &ctx),
            }
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&outputs)?);
        return Ok(());
    }

    for (i, output) in outputs.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", output.path);
        match &output.result {
            Some(result) => print_result(result, "  "),
            None => println!("  Not recognised"),
        }
    }
    Ok(())
}

fn print_result(result: &ParseResult, indent: &str) {
    println!("{indent}Series:   {}", result.series);
    println!("{indent}Title:    {}", result.title);
    println!("{indent}Volumes:  {}", show_numbering(&result.volumes));
    println!("{indent}Chapters: {}", show_numbering(&result.chapters));
    println!("{indent}Format:   {}", result.format);
    if !result.edition.is_empty() {
        println!("{indent}Edition:  {}", result.edition);
    }
    if result.is_special {
        println!("{indent}Special:  yes (index {})", result.special_index);
    }
}

fn show_numbering(numbering: &Numbering) -> String {
    if numbering.is_loose_leaf() {
        "-".to_string()
    } else {
        numbering.to_string()
    }
}

fn scan_libraries(config: &Config, only: Option<&str>, json: bool) -> Result<()> {
    let libraries: Vec<&LibraryConfig> = match only {
        Some(name) => vec![config
            .library(name)
            .ok_or_else(|| anyhow::anyhow!("Library not found: {}", name))?],
        None => config.libraries.iter().collect(),
    };
    if libraries.is_empty() {
        anyhow::bail!("No libraries configured");
    }

    if config.scan.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(config.scan.threads)
            .build_global()
            .ok(); // Ignore error if pool already built
    }

    let scanner = Scanner::new(config.scan.follow_symlinks);
    let mut reports = Vec::new();
    for library in libraries {
        if !library.root.exists() {
            tracing::warn!("Library root does not exist: {:?}", library.root);
        }
        reports.push(scanner.scan_library(library));
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            print_report(report);
        }
    }
    Ok(())
}

fn print_report(report: &LibraryReport) {
    println!("Library: {} ({})", report.library, report.root.display());
    for (series, results) in &report.series {
        println!("  {} ({} files)", series, results.len());
        for result in results {
            let mut line = format!("    {}", result.filename);
            if !result.volumes.is_loose_leaf() {
                line.push_str(&format!("  vol {}", result.volumes));
            }
            if !result.chapters.is_loose_leaf() {
                line.push_str(&format!("  ch {}", result.chapters));
            }
            if result.is_special {
                line.push_str("  [special]");
            }
            println!("{}", line);
        }
    }
    if !report.failed.is_empty() {
        println!("  Not recognised ({}):", report.failed.len());
        for path in &report.failed {
            println!("    {}", path);
        }
    }
    println!(
        "  {} files, {} series, {} not recognised",
        report.file_count(),
        report.series.len(),
        report.failed.len()
    );
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let config = config::load_config(p)?;
            println!("✓ Configuration is valid");
            println!("  Scan threads: {}", config.scan.threads);
            println!("  Follow symlinks: {}", config.scan.follow_symlinks);
            println!("  Libraries: {}", config.libraries.len());
            for library in &config.libraries {
                println!(
                    "    {} ({}) at {}",
                    library.name,
                    library.library_type,
                    library.root.display()
                );
            }
        }
        None => {
            println!("No config file specified, using defaults");
            let config = config::load_config_or_default(None)?;
            println!("  Libraries: {}", config.libraries.len());
        }
    }

    Ok(())
}
