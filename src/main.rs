//! # path-size
//!
//! A small CLI tool that prints the size of a file or directory.
//!
//! For a file the size is its length in bytes. For a directory it is the sum
//! of the files directly inside it, or of every file below it with
//! `--recursive`. Hidden entries are skipped unless `--all` is given.
//!
//! ## Usage
//!
//! ```bash
//! # Size of the files directly inside a directory
//! path-size ./logs
//!
//! # Whole tree, hidden files included, human-readable
//! path-size -r -a -H ./project
//! ```

mod cli;

use std::process::exit;

use anyhow::{Result, bail};
use clap::{CommandFactory, Parser};
use cli::{Cli, Commands, ConfigCommand};
use colored::Colorize;
use path_size::{
    SizeResolver,
    config::FileConfig,
    format_size,
    output::{JsonOutput, format_line},
};

/// Entry point for the path-size application.
///
/// This function handles all errors by calling [`inner_main`] and printing
/// any errors to stderr before exiting with a non-zero status code.
fn main() {
    if let Err(err) = inner_main() {
        eprintln!("Error: {err:#}");

        exit(1);
    }
}

/// Main application logic that can return errors.
///
/// Parses the arguments, layers them over the config file, resolves the
/// size of the target path and prints it.
///
/// # Errors
///
/// Returns errors from resolving the target path, printing help, config
/// subcommands, or JSON serialization.
fn inner_main() -> Result<()> {
    let args = Cli::parse();

    if let Some(Commands::Config { command }) = &args.subcommand {
        return handle_config_command(command);
    }

    let Some(path) = &args.path else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let file_config = load_config(args.json_flag());
    let json_mode = args.json(&file_config);
    let mut options = args.size_options(&file_config);
    if json_mode {
        options.verbose = false;
    }

    let size = SizeResolver::new(options).resolve(path)?;

    if json_mode {
        let output = JsonOutput::new(path, size, &options);
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!(
            "{}",
            format_line(&format_size(size, options.human_readable), path)
        );
    }

    Ok(())
}

// ── Config subcommand ────────────────────────────────────────────────

/// Default config file template written by `config init`.
const CONFIG_TEMPLATE: &str = r"# path-size configuration
# All values shown are their defaults. Uncomment and change as needed.
# A flag given on the command line always turns the option on.

[traversal]
# Descend into subdirectories (--recursive)
# recursive = false

# Include hidden files and directories (--all)
# all = false

# Report entries skipped because they could not be read (--verbose)
# verbose = false

[output]
# Print sizes in human-readable units (--human)
# human = false

# Print a JSON object instead of the tab-separated line (--json)
# json = false
";

/// Dispatch a `config` subcommand.
fn handle_config_command(cmd: &ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Path => match FileConfig::config_path() {
            Some(path) => println!("{}", path.display()),
            None => bail!("Could not determine the config directory on this platform"),
        },
        ConfigCommand::Show => show_config()?,
        ConfigCommand::Init => init_config()?,
    }
    Ok(())
}

/// Print the effective configuration (file values merged with defaults).
fn show_config() -> Result<()> {
    let path = FileConfig::config_path();

    let (file_exists, config) = match &path {
        Some(p) if p.exists() => (true, FileConfig::load()?),
        _ => (false, FileConfig::default()),
    };

    match &path {
        Some(p) if file_exists => println!("Config file: {} (found)", p.display()),
        Some(p) => println!(
            "Config file: {} (not found - showing defaults)",
            p.display()
        ),
        None => println!("Config file: (cannot determine path on this platform)"),
    }

    println!();
    println!("{}", format_config(&config));
    Ok(())
}

/// Format a [`FileConfig`] as a table, showing defaults for `None` fields.
fn format_config(config: &FileConfig) -> String {
    fn show_bool(val: Option<bool>) -> String {
        val.map_or_else(|| "false  (default)".to_string(), |v| v.to_string())
    }

    format!(
        "\
[traversal]
recursive = {recursive}
all       = {all}
verbose   = {verbose}

[output]
human     = {human}
json      = {json}",
        recursive = show_bool(config.traversal.recursive),
        all = show_bool(config.traversal.all),
        verbose = show_bool(config.traversal.verbose),
        human = show_bool(config.output.human),
        json = show_bool(config.output.json),
    )
}

/// Write the config template to the config file path if it does not exist yet.
fn init_config() -> Result<()> {
    let Some(path) = FileConfig::config_path() else {
        bail!("Could not determine the config directory on this platform");
    };

    if path.exists() {
        println!("Config file already exists at: {}", path.display());
        println!("Remove it first if you want to regenerate it.");
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {e}",
                parent.display()
            )
        })?;
    }

    std::fs::write(&path, CONFIG_TEMPLATE)
        .map_err(|e| anyhow::anyhow!("Failed to write config file {}: {e}", path.display()))?;

    println!("Config file written to: {}", path.display());
    Ok(())
}

/// Load the configuration file, falling back to defaults on failure.
fn load_config(json_mode: bool) -> FileConfig {
    match FileConfig::load() {
        Ok(config) => config,
        Err(e) => {
            if !json_mode {
                eprintln!("{} {e}", "Warning: Failed to load config file:".yellow());
            }
            FileConfig::default()
        }
    }
}
