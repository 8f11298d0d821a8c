// ABOUTME: Command line argument definitions and parsing using Clap
// ABOUTME: Defines the main CLI structure and subcommands for weft

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "weft")]
#[command(about = "Render templates with recursive includes over tabular parameter data")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Disable colored output")]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a template against a parameter table
    Render {
        #[arg(help = "Template name (a path, relative to --root when set)")]
        template: String,

        #[arg(short, long, help = "Parameter table file (.json, .yaml or .yml)")]
        params: Option<PathBuf>,

        #[arg(long, help = "Directory template names are resolved under")]
        root: Option<PathBuf>,

        #[arg(short, long, help = "Write the rendered output to a file instead of stdout")]
        output: Option<PathBuf>,
    },

    /// Check template syntax without rendering
    Check {
        #[arg(help = "Template name (a path, relative to --root when set)")]
        template: String,

        #[arg(long, help = "Directory template names are resolved under")]
        root: Option<PathBuf>,
    },
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_render_command() {
        let args = Args::try_parse_from([
            "weft", "render", "report.tpl", "--params", "params.json", "--root", "templates",
        ])
        .unwrap();

        match args.command {
            Commands::Render {
                template,
                params,
                root,
                output,
            } => {
                assert_eq!(template, "report.tpl");
                assert_eq!(params, Some(PathBuf::from("params.json")));
                assert_eq!(root, Some(PathBuf::from("templates")));
                assert_eq!(output, None);
            }
            _ => panic!("expected render command"),
        }
    }

    #[test]
    fn test_parse_check_command() {
        let args = Args::try_parse_from(["weft", "check", "report.tpl", "--verbose"]).unwrap();

        assert!(args.verbose);
        match args.command {
            Commands::Check { template, root } => {
                assert_eq!(template, "report.tpl");
                assert_eq!(root, None);
            }
            _ => panic!("expected check command"),
        }
    }
}
