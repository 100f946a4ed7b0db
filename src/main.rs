//! Linebox - a caret-driven plain-text editor for the terminal.
//!
//! # Usage
//!
//! ```bash
//! linebox notes.txt
//! linebox --overwrite notes.txt
//! linebox --indent-width 2 --whitespace-home notes.txt
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use linebox::app::App;
use linebox::config::{
    ConfigFlags, clear_config_flags, global_config_path, load_config_flags, local_override_path,
    parse_flag_tokens, save_config_flags,
};

/// A caret-driven plain-text editor for the terminal
#[derive(Parser, Debug)]
#[command(name = "linebox", version, about, long_about = None)]
struct Cli {
    /// File to edit (created on first save if missing)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Spaces per indent step
    #[arg(long, value_name = "COLUMNS")]
    indent_width: Option<usize>,

    /// Enable the auto-indent policy (default)
    #[arg(long)]
    auto_indent: bool,

    /// Disable the auto-indent policy
    #[arg(long, conflicts_with = "auto_indent")]
    no_auto_indent: bool,

    /// Enable the dedent-on-backspace policy (default)
    #[arg(long)]
    dedent_on_backspace: bool,

    /// Enable the whitespace-aware Home policy
    #[arg(long)]
    whitespace_home: bool,

    /// Enable the trim-trailing-spaces policy
    #[arg(long)]
    trim_trailing_spaces: bool,

    /// Start in overwrite mode instead of insert mode
    #[arg(long)]
    overwrite: bool,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let raw_args = std::env::args().collect::<Vec<_>>();
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = parse_flag_tokens(&raw_args);

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);

    let mut app = App::new(cli.file)
        .with_indent_width(effective.indent_width)
        .with_options(effective.caret_options())
        .with_overwrite(effective.overwrite);

    app.run().context("Application error")
}
