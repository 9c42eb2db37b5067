use saphyr::{LoadableYamlNode, Scalar, Yaml};
use hashlink::LinkedHashMap;
use snafu::prelude::*;
use std::{
    borrow::Cow,
    path::{Path, PathBuf},
    string::FromUtf8Error,
};
use tracing::debug;

use crate::ext::BestEffortPathExt;

pub const CONFIG_FILE_NAME: &str = "novice.yaml";

fn get_config_file_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE_NAME)
}

fn key(name: &str) -> Yaml<'_> {
    Yaml::Value(Scalar::String(Cow::Borrowed(name)))
}

/// Settings read from `novice.yaml`.
///
/// ```yaml
/// walk:
///   ignore: [target, node_modules]
///   hidden: false
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub walk: WalkSettings,
}

/// How the local host walks workspace roots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkSettings {
    /// File and directory names skipped during the walk, at any depth.
    pub ignore: Vec<String>,
    /// Whether dot-files and dot-directories are listed.
    pub hidden: bool,
}

impl Default for WalkSettings {
    fn default() -> Self {
        Self {
            ignore: vec![".git".to_string()],
            hidden: false,
        }
    }
}

impl Config {
    /// Reads `novice.yaml` from `root`, falling back to defaults when it is absent.
    pub async fn read(root: &Path) -> Result<Self, ConfigCreationError> {
        let path = get_config_file_path(root);
        if !path.exists() {
            debug!(
                "No config file at {}, using defaults",
                path.best_effort_path_display()
            );
            return Ok(Self::default());
        }
        Self::from_path(path).await
    }

    pub async fn from_path(path: PathBuf) -> Result<Self, ConfigCreationError> {
        debug!("Opening config file: {}", path.best_effort_path_display());
        let bytes = compio::fs::read(&path).await.context(ReadSnafu {
            file_path: path.best_effort_path_display(),
        })?;
        debug!("Successfully read config file: {} bytes", bytes.len());

        let contents = String::from_utf8(bytes).context(EncodingSnafu {
            file_path: path.best_effort_path_display(),
        })?;
        contents.as_str().try_into()
    }

    fn parse_walk_from_yaml(
        walk: &LinkedHashMap<Yaml, Yaml>,
    ) -> Result<WalkSettings, ConfigCreationError> {
        let defaults = WalkSettings::default();

        let ignore = match walk.get(&key("ignore")) {
            None => defaults.ignore,
            Some(value) => value
                .as_sequence()
                .ok_or(ConfigCreationError::IgnoreNotList)?
                .iter()
                .enumerate()
                .map(|(index, entry)| {
                    entry
                        .as_str()
                        .map(str::to_string)
                        .ok_or(ConfigCreationError::IgnoreEntryNotString { index })
                })
                .collect::<Result<Vec<_>, _>>()?,
        };

        let hidden = match walk.get(&key("hidden")) {
            None => defaults.hidden,
            Some(Yaml::Value(Scalar::Boolean(hidden))) => *hidden,
            Some(_) => return Err(ConfigCreationError::HiddenNotBool),
        };

        Ok(WalkSettings { ignore, hidden })
    }
}

impl TryFrom<&str> for Config {
    type Error = ConfigCreationError;

    fn try_from(contents: &str) -> Result<Self, Self::Error> {
        let documents = Yaml::load_from_str(contents).context(ParseSnafu)?;
        let Some(document) = documents.first() else {
            debug!("Config file is empty, using defaults");
            return Ok(Self::default());
        };

        let top_level = document
            .as_mapping()
            .ok_or(ConfigCreationError::TopLevelNotMap)?;

        let walk = match top_level.get(&key("walk")) {
            None | Some(Yaml::Value(Scalar::Null)) => WalkSettings::default(),
            Some(walk) => Self::parse_walk_from_yaml(
                walk.as_mapping().ok_or(ConfigCreationError::WalkNotMap)?,
            )?,
        };

        Ok(Config { walk })
    }
}

#[derive(Debug, Snafu)]
pub enum ConfigCreationError {
    #[snafu(display("Failed to read the config file: {}", file_path))]
    ReadError {
        file_path: String,
        source: std::io::Error,
    },
    #[snafu(display("Config file is not valid UTF-8: {}", file_path))]
    EncodingError {
        file_path: String,
        source: FromUtf8Error,
    },
    #[snafu(display("Failed to parse the config file"))]
    ParseError { source: saphyr::ScanError },
    #[snafu(display("Top level of config should be a map"))]
    TopLevelNotMap,
    #[snafu(display("Walk section should be a map"))]
    WalkNotMap,
    #[snafu(display("walk.ignore should be a list of names"))]
    IgnoreNotList,
    #[snafu(display("walk.ignore entry {} should be a string", index))]
    IgnoreEntryNotString { index: usize },
    #[snafu(display("walk.hidden should be true or false"))]
    HiddenNotBool,
}
