//! Configuration management for the editor.
//!
//! Handles:
//! - Command-line argument parsing
//! - The optional TOML settings file
//! - Terminal preview options

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default number of spaces added by auto-indent
pub const DEFAULT_INDENT_WIDTH: usize = 4;

/// Default extension given to saved files
pub const DEFAULT_EXTENSION: &str = "py";

/// Command-line arguments for the editor
#[derive(Debug, Parser)]
#[command(name = "pyscribe")]
#[command(about = "Python source editor with syntax highlighting and a line number gutter")]
#[command(version)]
pub struct Args {
    /// File to open
    pub file: Option<PathBuf>,

    /// Interpreter used by Run
    #[arg(long, help = "Interpreter binary used to run the file (e.g., 'python3')")]
    pub interpreter: Option<String>,

    /// Spaces added after a line ending in ':'
    #[arg(long, help = "Indent width used by auto-indent")]
    pub indent_width: Option<usize>,

    /// Theme file overriding the built-in colours
    #[arg(long, help = "Path to a theme TOML file")]
    pub theme: Option<PathBuf>,

    /// Settings file to use instead of the default location
    #[arg(long, help = "Path to a settings TOML file")]
    pub config: Option<PathBuf>,

    /// Log level
    #[arg(
        long,
        default_value = "warn",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,

    /// First line shown in the preview (1-based)
    #[arg(long, default_value_t = 1)]
    pub top: usize,

    /// Number of lines shown in the preview
    #[arg(long, default_value_t = 40)]
    pub height: usize,

    /// Print highlight spans as JSON instead of rendering
    #[arg(long)]
    pub json: bool,

    /// List case-insensitive matches of a query
    #[arg(long)]
    pub find: Option<String>,

    /// Launch the interpreter on the file after loading it
    #[arg(long)]
    pub run: bool,
}

/// Settings file contents (`config.toml`)
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct SettingsFile {
    pub indent_width: Option<usize>,
    pub interpreter: Option<String>,
    pub theme: Option<PathBuf>,
}

impl SettingsFile {
    /// Load a settings file; a relative theme path is taken relative to the
    /// file's own directory
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading settings file {}", path.display()))?;
        let mut settings: Self = toml::from_str(&content)
            .with_context(|| format!("parsing settings file {}", path.display()))?;

        if let Some(dir) = path.parent() {
            settings.theme = settings.theme.map(|theme| {
                if theme.is_relative() {
                    dir.join(theme)
                } else {
                    theme
                }
            });
        }

        Ok(settings)
    }

    /// Default settings file location, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("pyscribe").join("config.toml"))
    }
}

/// Settings the editor session needs
#[derive(Debug, Clone, PartialEq)]
pub struct EditorConfig {
    pub indent_width: usize,
    pub interpreter: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            indent_width: DEFAULT_INDENT_WIDTH,
            interpreter: default_interpreter().to_string(),
        }
    }
}

/// Terminal preview options
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewOptions {
    /// First line shown (0-based)
    pub top_line: usize,
    pub height: usize,
    pub json: bool,
    pub find: Option<String>,
    pub run: bool,
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    pub file: Option<PathBuf>,
    pub editor: EditorConfig,
    pub theme_path: Option<PathBuf>,
    pub log_level: String,
    pub preview: PreviewOptions,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        let settings = match &args.config {
            // An explicitly named file must load
            Some(path) => SettingsFile::load(path)?,
            None => SettingsFile::default_path()
                .filter(|path| path.exists())
                .and_then(|path| match SettingsFile::load(&path) {
                    Ok(settings) => Some(settings),
                    Err(e) => {
                        log::warn!("Ignoring settings file: {:#}", e);
                        None
                    }
                })
                .unwrap_or_default(),
        };

        Ok(Self::merge(args, settings))
    }

    /// Command-line flags win over the settings file
    pub fn merge(args: Args, settings: SettingsFile) -> Self {
        let defaults = EditorConfig::default();

        Config {
            file: args.file,
            editor: EditorConfig {
                indent_width: args
                    .indent_width
                    .or(settings.indent_width)
                    .unwrap_or(defaults.indent_width),
                interpreter: args
                    .interpreter
                    .or(settings.interpreter)
                    .unwrap_or(defaults.interpreter),
            },
            theme_path: args.theme.or(settings.theme),
            log_level: args.log_level,
            preview: PreviewOptions {
                top_line: args.top.saturating_sub(1),
                height: args.height,
                json: args.json,
                find: args.find,
                run: args.run,
            },
        }
    }
}

fn default_interpreter() -> &'static str {
    if cfg!(windows) { "python" } else { "python3" }
}
