//! CLI entry point for mdtree

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use mdtree::{BuilderConfig, Destination, OutputConfig, RenderOptions, TreePrinter};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // https://no-color.org/
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "mdtree")]
#[command(about = "Print a directory tree, or write it to a file as a fenced code block")]
#[command(version)]
struct Args {
    /// Directory to display
    #[arg(default_value = ".")]
    path: PathBuf,

    /// List directories only
    #[arg(short = 'd', long = "dirs-only")]
    dirs_only: bool,

    /// Skip entries whose name starts with PREFIX (an empty PREFIX hides everything)
    #[arg(short = 'I', long = "ignore", value_name = "PREFIX", default_value = ".")]
    ignore: String,

    /// Show all entries, ignoring --ignore
    #[arg(short, long)]
    all: bool,

    /// Descend only N levels deep
    #[arg(short = 'L', long = "level")]
    level: Option<usize>,

    /// Write the tree to FILE wrapped in a ``` fence instead of printing it
    #[arg(short = 'o', long = "output", value_name = "FILE", conflicts_with = "json")]
    output: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long = "json")]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let builder_config = BuilderConfig {
        ignore_prefix: if args.all {
            None
        } else {
            Some(args.ignore.clone())
        },
        dirs_only: args.dirs_only,
        max_depth: args.level,
    };

    let destination = if args.json {
        Destination::Json
    } else {
        Destination::from(args.output.clone())
    };
    let options = RenderOptions {
        builder: builder_config,
        output: OutputConfig {
            use_color: should_use_color(args.color),
        },
        destination,
    };

    let result = TreePrinter::new(&args.path, options).and_then(|printer| printer.render());
    if let Err(e) = result {
        eprintln!("mdtree: {}", e);
        process::exit(1);
    }
}
