use anyhow::Context;
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum ActionKind {
    Select,
    Remove,
}

impl ToString for ActionKind {
    fn to_string(&self) -> String {
        match self {
            ActionKind::Select => "select".to_string(),
            ActionKind::Remove => "remove".to_string(),
        }
    }
}

/// Settings read from the environment (and `.env`).
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub log_level: LevelFilter,
    pub rig_file: PathBuf,
    pub action: ActionKind,
    pub armature: Option<String>,
    pub report_file: Option<PathBuf>,
}

impl Config {
    /// Loads `.env` if present, then reads the process environment.
    /// `rig_file` takes precedence over `RIG_FILE`.
    pub fn from_env(rig_file: Option<String>) -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| {
            if key == "RIG_FILE" && rig_file.is_some() {
                return rig_file.clone();
            }
            dotenv::var(key).ok()
        })
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_level = parse_log_level(&lookup("LOG").unwrap_or_else(|| "info".to_string()));
        let rig_file = lookup("RIG_FILE")
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .with_context(|| "No rig file given. Pass a path or set RIG_FILE.")?;
        let action = match lookup("RIG_ACTION").as_deref() {
            None | Some("") | Some("select") => ActionKind::Select,
            Some("remove") => ActionKind::Remove,
            Some(other) => anyhow::bail!(
                "Unknown RIG_ACTION '{}'. Expected 'select' or 'remove'.",
                other
            ),
        };
        let armature = lookup("RIG_ARMATURE").filter(|s| !s.is_empty());
        let report_file = lookup("RIG_REPORT")
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);
        Ok(Config {
            log_level,
            rig_file,
            action,
            armature,
            report_file,
        })
    }
}

pub fn parse_log_level(level: &str) -> LevelFilter {
    match level {
        "trace" => LevelFilter::Trace,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "debug" => LevelFilter::Debug,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Off,
    }
}
