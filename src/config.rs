use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::renderer::{
    parse_list, ExclusionConfig, RenderOptions, SizeFormat, DEFAULT_HEADER_LABEL,
};

const CONFIG_DIR_NAME: &str = "project-tree";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub render: RenderConfig,
    pub exclude: ExcludeConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Annotate files with their size
    pub show_sizes: bool,
    /// Size annotation format: bytes, human
    pub size_format: SizeFormat,
    /// Treat symlinks as their targets: linked directories are descended into
    pub follow_symlinks: bool,
    /// Text before the root name in the header
    pub header_label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExcludeConfig {
    /// Exact entry names to skip (array or comma-separated string)
    #[serde(deserialize_with = "lenient_list")]
    pub names: Vec<String>,
    /// Entry name prefixes to skip (array or comma-separated string)
    #[serde(deserialize_with = "lenient_list")]
    pub prefixes: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// File written by `render --output` when no name is given
    pub file_name: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            show_sizes: false,
            size_format: SizeFormat::Bytes,
            follow_symlinks: true,
            header_label: DEFAULT_HEADER_LABEL.to_string(),
        }
    }
}

impl Default for ExcludeConfig {
    fn default() -> Self {
        Self {
            names: vec![
                "venv".to_string(),
                "env".to_string(),
                "__pycache__".to_string(),
                ".git".to_string(),
            ],
            prefixes: vec![".".to_string()],
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            file_name: "project_structure.txt".to_string(),
        }
    }
}

impl Config {
    /// Default location: `<config dir>/project-tree/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one, the default location is
    /// tried and built-in defaults are used when it is absent.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) if path.exists() => path,
                _ => return Ok(Self::default()),
            },
        };

        let contents = fs::read_to_string(&path).map_err(|source| ConfigError::ReadError {
            path: path.clone(),
            source,
        })?;

        let config = Self::parse(&contents).map_err(|err| match err {
            ParseFailure::Toml(source) => ConfigError::ParseError { path, source },
            ParseFailure::Invalid(err) => err,
        })?;

        Ok(config)
    }

    fn parse(contents: &str) -> std::result::Result<Self, ParseFailure> {
        let config: Config = toml::from_str(contents).map_err(ParseFailure::Toml)?;
        config.validate().map_err(ParseFailure::Invalid)?;
        Ok(config)
    }

    /// Reject values that would produce a broken diagram or output file.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.render.header_label.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "render.header_label must not be empty".into(),
            ));
        }
        if self.output.file_name.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "output.file_name must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Exclusion set built from the configured lists.
    pub fn exclusions(&self) -> ExclusionConfig {
        ExclusionConfig::new(self.exclude.names.clone(), self.exclude.prefixes.clone())
    }

    /// Render options built from the configuration.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions::new(self.exclusions())
            .with_sizes(self.render.show_sizes)
            .with_size_format(self.render.size_format)
            .with_follow_symlinks(self.render.follow_symlinks)
            .with_header_label(self.render.header_label.clone())
    }
}

#[derive(Debug)]
enum ParseFailure {
    Toml(toml::de::Error),
    Invalid(ConfigError),
}

/// Accept either an array of strings or one comma-separated string. Any
/// other value is treated as an empty list.
fn lenient_list<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum ListValue {
        List(Vec<String>),
        Csv(String),
        Other(serde::de::IgnoredAny),
    }

    Ok(match ListValue::deserialize(deserializer)? {
        ListValue::List(values) => values,
        ListValue::Csv(text) => parse_list(&text),
        ListValue::Other(_) => {
            tracing::warn!("Malformed exclusion list in config, treating it as empty");
            Vec::new()
        }
    })
}
