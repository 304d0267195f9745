//! Session configuration: command line first, environment second.
//!
//! | Source        | Variable / flag        | Default        |
//! |---------------|------------------------|----------------|
//! | map directory | `MAZE_MAP_DIR`, `--map-dir` | `maps`    |
//! | map file      | `MAZE_MAP`, `[MAP]`    | `SmallMap.txt` |
//! | presenter     | `MAZE_PRESENTER`, `--presenter`, `--gui` | `console` |
//! | log file      | `MAZE_LOG_PATH`        | stderr         |

use std::env;
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};

pub const DEFAULT_MAP_DIR: &str = "maps";
pub const DEFAULT_MAP: &str = "SmallMap.txt";

/// Terminal maze runner
#[derive(Parser, Debug, Default, Clone, PartialEq, Eq)]
#[command(name = "tui-maze")]
#[command(about = "Walk a maze in the terminal, tracking every cell you cover", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Map file, looked up in the map directory unless the path exists as given
    pub map: Option<PathBuf>,

    /// How to show the maze
    #[arg(long, value_enum)]
    pub presenter: Option<PresenterKind>,

    /// Shorthand for `--presenter screen`
    #[arg(long)]
    pub gui: bool,

    /// Directory holding map files
    #[arg(long)]
    pub map_dir: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PresenterKind {
    /// Line-oriented text with colored glyphs.
    #[default]
    Console,
    /// Full-screen colored tiles.
    Screen,
}

impl PresenterKind {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "console" | "text" => Some(Self::Console),
            "screen" | "gui" => Some(Self::Screen),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Console => "console",
            Self::Screen => "screen",
        }
    }
}

/// Values read from the process environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvConfig {
    pub map_dir: PathBuf,
    pub map: PathBuf,
    pub presenter: Option<PresenterKind>,
    pub log_path: Option<PathBuf>,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            map_dir: PathBuf::from(DEFAULT_MAP_DIR),
            map: PathBuf::from(DEFAULT_MAP),
            presenter: None,
            log_path: None,
        }
    }
}

impl EnvConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
        };

        let defaults = Self::default();
        Self {
            map_dir: var("MAZE_MAP_DIR").map(PathBuf::from).unwrap_or(defaults.map_dir),
            map: var("MAZE_MAP").map(PathBuf::from).unwrap_or(defaults.map),
            presenter: var("MAZE_PRESENTER").and_then(|s| PresenterKind::from_str(&s)),
            log_path: var("MAZE_LOG_PATH").map(PathBuf::from),
        }
    }
}

/// Everything a session needs to start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub source: PathBuf,
    pub presenter: PresenterKind,
    pub log_path: Option<PathBuf>,
}

impl SessionConfig {
    /// Merge the command line over the environment.
    pub fn resolve(cli: Cli, env: EnvConfig) -> Self {
        let map_dir = cli.map_dir.unwrap_or(env.map_dir);
        let map = cli.map.unwrap_or(env.map);

        let presenter = if cli.gui {
            PresenterKind::Screen
        } else {
            cli.presenter.or(env.presenter).unwrap_or_default()
        };

        Self {
            source: resolve_map_path(&map_dir, &map),
            presenter,
            log_path: env.log_path,
        }
    }

    pub fn from_cli(cli: Cli) -> Self {
        Self::resolve(cli, EnvConfig::from_env())
    }
}

/// `map` itself when it names an existing file, otherwise `map_dir/map`.
pub fn resolve_map_path(map_dir: &Path, map: &Path) -> PathBuf {
    if map.is_file() {
        map.to_path_buf()
    } else {
        map_dir.join(map)
    }
}
