use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tankobon_parser::LibraryType;

#[derive(Parser)]
#[command(name = "tankobon")]
#[command(author, version, about = "Manga, comic and book file name parser")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse files and show their series, volumes and chapters
    Parse {
        /// Files to parse
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Library type (manga, comic, comic-legacy, book, light-novel, image)
        #[arg(short = 't', long)]
        library_type: Option<LibraryType>,

        /// Library root the files live under
        #[arg(short, long)]
        root: Option<PathBuf>,

        /// Ignore EPUB metadata and ComicInfo.xml sidecars
        #[arg(long)]
        no_metadata: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Scan configured libraries and group files by series
    Scan {
        /// Only scan the library with this name
        #[arg(short, long)]
        library: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses default if not specified)
        config: Option<PathBuf>,
    },

    /// Display version information
    Version,
}
