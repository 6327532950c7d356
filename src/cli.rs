//! Command-line interface definition and argument parsing.
//!
//! This module defines the command-line flags using the
//! [clap](https://docs.rs/clap/) library and merges them with values from the
//! configuration file.
//!
//! Helper methods on [`Cli`] accept a [`FileConfig`] reference so that
//! config-file values act as defaults for the boolean flags (layered config).

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use path_size::config::{FileConfig, SizeOptions};

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Inspect or initialise the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Subcommands for `config`.
#[derive(Subcommand, Debug)]
pub(crate) enum ConfigCommand {
    /// Print the effective configuration (file values + defaults for unset keys)
    Show,
    /// Write a default config.toml if none exists yet
    Init,
    /// Print the path to the config file
    Path,
}

/// Main command-line interface structure.
#[derive(Parser, Debug)]
#[command(name = "path-size")]
#[command(about = "Print the size of a file or directory")]
#[command(version)]
#[command(author)]
#[allow(clippy::struct_excessive_bools)]
pub(crate) struct Cli {
    /// Subcommand (e.g. `config`)
    #[command(subcommand)]
    pub(crate) subcommand: Option<Commands>,

    /// File or directory to measure
    ///
    /// When omitted, this help text is printed.
    pub(crate) path: Option<PathBuf>,

    /// Print sizes in human-readable units (1024-based: B, KB, MB, GB, TB, PB, EB)
    #[arg(short = 'H', long)]
    human: bool,

    /// Include hidden files and directories (names starting with '.')
    #[arg(short = 'a', long)]
    all: bool,

    /// Descend into subdirectories
    ///
    /// Without this flag only the files directly inside a directory are
    /// counted.
    #[arg(short = 'r', long)]
    recursive: bool,

    /// Report entries that were skipped because they could not be read
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Output the result as a single JSON object
    #[arg(long)]
    json: bool,
}

impl Cli {
    /// Whether `--json` was passed on the command line.
    ///
    /// Used before the config file is loaded, so that load warnings can be
    /// suppressed in JSON mode.
    #[must_use]
    pub(crate) const fn json_flag(&self) -> bool {
        self.json
    }

    /// Whether `--json` output is enabled, either by flag or by config file.
    #[must_use]
    pub(crate) fn json(&self, config: &FileConfig) -> bool {
        self.json || config.output.json.unwrap_or(false)
    }

    /// Build size options from CLI flags and the config file.
    ///
    /// Each flag is on when set on the command line or set to `true` in the
    /// config file.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use clap::Parser;
    /// # use path_size::config::FileConfig;
    /// # mod cli { include!("cli.rs"); }
    /// # use cli::Cli;
    /// let args = Cli::parse_from(&["path-size", "-r", "-H", "."]);
    /// let options = args.size_options(&FileConfig::default());
    /// assert!(options.recursive);
    /// assert!(options.human_readable);
    /// ```
    #[must_use]
    pub(crate) fn size_options(&self, config: &FileConfig) -> SizeOptions {
        SizeOptions {
            recursive: self.recursive || config.traversal.recursive.unwrap_or(false),
            include_hidden: self.all || config.traversal.all.unwrap_or(false),
            human_readable: self.human || config.output.human.unwrap_or(false),
            verbose: self.verbose || config.traversal.verbose.unwrap_or(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use path_size::config::file::{FileOutputConfig, FileTraversalConfig};

    #[test]
    fn test_default_values() {
        let args = Cli::parse_from(["path-size", "some/path"]);
        let config = FileConfig::default();

        assert_eq!(args.path, Some(PathBuf::from("some/path")));
        assert!(args.subcommand.is_none());
        assert!(!args.json(&config));
        assert_eq!(args.size_options(&config), SizeOptions::default());
    }

    #[test]
    fn test_no_path() {
        let args = Cli::parse_from(["path-size"]);
        assert!(args.path.is_none());
        assert!(args.subcommand.is_none());
    }

    #[test]
    fn test_long_flags() {
        let args = Cli::parse_from(["path-size", "--human", "--all", "--recursive", "dir"]);
        let opts = args.size_options(&FileConfig::default());

        assert!(opts.human_readable);
        assert!(opts.include_hidden);
        assert!(opts.recursive);
        assert!(!opts.verbose);
    }

    #[test]
    fn test_short_flags() {
        let args = Cli::parse_from(["path-size", "-H", "-a", "-r", "-v", "dir"]);
        let opts = args.size_options(&FileConfig::default());

        assert!(opts.human_readable);
        assert!(opts.include_hidden);
        assert!(opts.recursive);
        assert!(opts.verbose);
    }

    #[test]
    fn test_combined_short_flags() {
        let args = Cli::parse_from(["path-size", "-rHa", "dir"]);
        let opts = args.size_options(&FileConfig::default());

        assert!(opts.human_readable);
        assert!(opts.include_hidden);
        assert!(opts.recursive);
    }

    #[test]
    fn test_flags_after_path() {
        let args = Cli::parse_from(["path-size", "dir", "-r"]);
        assert_eq!(args.path, Some(PathBuf::from("dir")));
        assert!(args.size_options(&FileConfig::default()).recursive);
    }

    #[test]
    fn test_json_flag() {
        let args = Cli::parse_from(["path-size", "--json", "dir"]);
        assert!(args.json_flag());
        assert!(args.json(&FileConfig::default()));

        let args = Cli::parse_from(["path-size", "dir"]);
        assert!(!args.json_flag());
    }

    #[test]
    fn test_config_values_used_when_cli_absent() {
        let config = FileConfig {
            traversal: FileTraversalConfig {
                recursive: Some(true),
                all: Some(true),
                verbose: None,
            },
            output: FileOutputConfig {
                human: Some(true),
                json: Some(true),
            },
        };
        let args = Cli::parse_from(["path-size", "dir"]);
        let opts = args.size_options(&config);

        assert!(opts.recursive);
        assert!(opts.include_hidden);
        assert!(opts.human_readable);
        assert!(!opts.verbose);
        assert!(args.json(&config));
    }

    #[test]
    fn test_cli_flag_overrides_config_false() {
        let config = FileConfig {
            traversal: FileTraversalConfig {
                recursive: Some(false),
                ..FileTraversalConfig::default()
            },
            ..FileConfig::default()
        };
        let args = Cli::parse_from(["path-size", "-r", "dir"]);

        assert!(args.size_options(&config).recursive);
    }

    #[test]
    fn test_config_subcommands() {
        let args = Cli::parse_from(["path-size", "config", "path"]);
        assert!(matches!(
            args.subcommand,
            Some(Commands::Config {
                command: ConfigCommand::Path
            })
        ));

        let args = Cli::parse_from(["path-size", "config", "show"]);
        assert!(matches!(
            args.subcommand,
            Some(Commands::Config {
                command: ConfigCommand::Show
            })
        ));
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        assert!(Cli::try_parse_from(["path-size", "--follow", "dir"]).is_err());
    }

    #[test]
    fn test_lowercase_h_is_help() {
        let err = Cli::try_parse_from(["path-size", "-h"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }
}
