//! Command-line argument definitions for the Vellum CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Vellum document inspector
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input SVG file
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to the output outline file; the outline goes to stdout if omitted
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["vellum", "drawing.svg"]);
        assert_eq!(args.input, "drawing.svg");
        assert_eq!(args.output, None);
        assert_eq!(args.config, None);
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn test_all_flags() {
        let args = Args::parse_from([
            "vellum",
            "drawing.svg",
            "-o",
            "outline.txt",
            "-c",
            "vellum.toml",
            "--log-level",
            "debug",
        ]);
        assert_eq!(args.output.as_deref(), Some("outline.txt"));
        assert_eq!(args.config.as_deref(), Some("vellum.toml"));
        assert_eq!(args.log_level, "debug");
    }
}
