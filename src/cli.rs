//! Runner configuration: command-line flags, tuning file and log setup.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};

use crate::core::Tuning;
use crate::theme::DEFAULT_THEME_ID;

/// Environment variable naming the log file. Unset means no logging.
pub const LOG_ENV: &str = "TUI_FLAPPY_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub theme: String,
    pub themes_dir: Option<PathBuf>,
    pub character: u32,
    /// `None` picks a seed from the wall clock.
    pub seed: Option<u32>,
    pub tuning: Option<PathBuf>,
    pub list_themes: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME_ID.to_string(),
            themes_dir: None,
            character: 1,
            seed: None,
            tuning: None,
            list_themes: false,
        }
    }
}

pub const USAGE: &str = "usage: tui-flappy [--theme <id>] [--themes-dir <dir>] [--character <id>] \
[--seed <u32>] [--tuning <file.json>] [--list-themes]";

/// Parse arguments (without the program name).
pub fn parse_run_args(args: &[String]) -> Result<RunConfig> {
    let mut config = RunConfig::default();
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--theme" => config.theme = flag_value(args, &mut i)?.clone(),
            "--themes-dir" => config.themes_dir = Some(PathBuf::from(flag_value(args, &mut i)?)),
            "--character" => {
                let v = flag_value(args, &mut i)?;
                config.character = v
                    .parse()
                    .map_err(|_| anyhow!("invalid --character value: {}", v))?;
            }
            "--seed" => {
                let v = flag_value(args, &mut i)?;
                config.seed = Some(
                    v.parse()
                        .map_err(|_| anyhow!("invalid --seed value: {}", v))?,
                );
            }
            "--tuning" => config.tuning = Some(PathBuf::from(flag_value(args, &mut i)?)),
            "--list-themes" => config.list_themes = true,
            other => return Err(anyhow!("unknown argument: {}\n{}", other, USAGE)),
        }
        i += 1;
    }
    Ok(config)
}

/// The value following the flag at `args[*i]`; moves `i` onto it.
fn flag_value<'a>(args: &'a [String], i: &mut usize) -> Result<&'a String> {
    let flag = &args[*i];
    *i += 1;
    args.get(*i)
        .ok_or_else(|| anyhow!("missing value for {}\n{}", flag, USAGE))
}

/// Read a (possibly partial) tuning override and check it.
pub fn load_tuning(path: &Path) -> Result<Tuning> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let tuning: Tuning =
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
    tuning
        .validate()
        .with_context(|| format!("invalid tuning in {}", path.display()))?;
    Ok(tuning)
}

/// Send `log` output to the file named by `TUI_FLAPPY_LOG`, if set.
///
/// stderr is never used: it would draw over the alternate screen.
pub fn init_logging() -> Result<Option<PathBuf>> {
    let Some(path) = std::env::var_os(LOG_ENV).map(PathBuf::from) else {
        return Ok(None);
    };
    let file = File::create(&path).with_context(|| format!("creating {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("installing logger")?;
    Ok(Some(path))
}
