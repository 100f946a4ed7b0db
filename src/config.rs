//! Saved flag defaults.
//!
//! Defaults live in a flag-token file: one command-line flag per line,
//! merged global then local then CLI, later sources winning.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::editor::CaretOptions;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub indent_width: Option<usize>,
    pub auto_indent: bool,
    pub no_auto_indent: bool,
    pub dedent_on_backspace: bool,
    pub whitespace_home: bool,
    pub trim_trailing_spaces: bool,
    pub overwrite: bool,
}

impl ConfigFlags {
    pub fn union(&self, other: &Self) -> Self {
        Self {
            indent_width: other.indent_width.or(self.indent_width),
            auto_indent: self.auto_indent || other.auto_indent,
            no_auto_indent: self.no_auto_indent || other.no_auto_indent,
            dedent_on_backspace: self.dedent_on_backspace || other.dedent_on_backspace,
            whitespace_home: self.whitespace_home || other.whitespace_home,
            trim_trailing_spaces: self.trim_trailing_spaces || other.trim_trailing_spaces,
            overwrite: self.overwrite || other.overwrite,
        }
    }

    /// The caret behavior these flags describe, on top of the defaults.
    pub fn caret_options(&self) -> CaretOptions {
        let mut options = CaretOptions::default();
        if self.auto_indent {
            options.insert(CaretOptions::AUTO_INDENT);
        }
        if self.no_auto_indent {
            options.remove(CaretOptions::AUTO_INDENT);
        }
        if self.dedent_on_backspace {
            options.insert(CaretOptions::DEDENT_ON_BACKSPACE);
        }
        if self.whitespace_home {
            options.insert(CaretOptions::WHITESPACE_HOME);
        }
        if self.trim_trailing_spaces {
            options.insert(CaretOptions::TRIM_TRAILING_SPACES);
        }
        options
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("linebox").join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("linebox")
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("linebox").join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join(".config")
                .join("linebox")
                .join("config");
        }
    }

    PathBuf::from(".lineboxrc")
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".lineboxrc")
}

pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(|line| line.split_whitespace().map(ToOwned::to_owned))
        .collect::<Vec<_>>();
    Ok(parse_flag_tokens(&tokens))
}

pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = Vec::new();
    lines.push("# linebox defaults (saved with --save)".to_string());
    if let Some(width) = flags.indent_width {
        lines.push(format!("--indent-width {width}"));
    }
    if flags.auto_indent {
        lines.push("--auto-indent".to_string());
    }
    if flags.no_auto_indent {
        lines.push("--no-auto-indent".to_string());
    }
    if flags.dedent_on_backspace {
        lines.push("--dedent-on-backspace".to_string());
    }
    if flags.whitespace_home {
        lines.push("--whitespace-home".to_string());
    }
    if flags.trim_trailing_spaces {
        lines.push("--trim-trailing-spaces".to_string());
    }
    if flags.overwrite {
        lines.push("--overwrite".to_string());
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write config {}", path.display()))
}

pub fn clear_config_flags(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];
        if token == "--auto-indent" {
            flags.auto_indent = true;
        } else if token == "--no-auto-indent" {
            flags.no_auto_indent = true;
        } else if token == "--dedent-on-backspace" {
            flags.dedent_on_backspace = true;
        } else if token == "--whitespace-home" {
            flags.whitespace_home = true;
        } else if token == "--trim-trailing-spaces" {
            flags.trim_trailing_spaces = true;
        } else if token == "--overwrite" {
            flags.overwrite = true;
        } else if token == "--indent-width" {
            if let Some(next) = tokens.get(i + 1) {
                flags.indent_width = next.parse().ok();
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--indent-width=") {
            flags.indent_width = value.parse().ok();
        }
        i += 1;
    }
    flags
}
