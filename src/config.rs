use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::catalog::{YamlCommandCatalog, YamlPropertyCatalog};
use crate::generator::{CommandSurface, DocLayout};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub properties: PropertiesConfig,
    /// One entry per CLI surface whose commands are documented.
    #[serde(default = "default_surfaces")]
    pub commands: Vec<CommandSurfaceConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Home directory all other paths are relative to (default: current directory)
    #[serde(default)]
    pub root: Option<PathBuf>,

    /// Directory for the property CSV tables
    #[serde(default = "default_csv_dir")]
    pub csv_dir: PathBuf,

    /// Directory for the property description YAML files
    #[serde(default = "default_yml_dir")]
    pub yml_dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            root: None,
            csv_dir: default_csv_dir(),
            yml_dir: default_yml_dir(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertiesConfig {
    /// Leading segment shared by all property names, e.g. "alluxio"
    #[serde(default = "default_namespace")]
    pub namespace: String,

    /// YAML list of property definitions
    #[serde(default = "default_property_catalog")]
    pub catalog: PathBuf,
}

impl Default for PropertiesConfig {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
            catalog: default_property_catalog(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandSurfaceConfig {
    pub name: String,
    /// YAML file or directory of command descriptors
    pub catalog: PathBuf,
    pub output_dir: PathBuf,
}

fn default_csv_dir() -> PathBuf {
    PathBuf::from("docs/_data/table/")
}

fn default_yml_dir() -> PathBuf {
    PathBuf::from("docs/_data/table/en/")
}

fn default_namespace() -> String {
    "alluxio".to_string()
}

fn default_property_catalog() -> PathBuf {
    PathBuf::from("docs/_data/catalog/properties.yml")
}

fn default_surfaces() -> Vec<CommandSurfaceConfig> {
    ["fs", "fsadmin"]
        .into_iter()
        .map(|name| CommandSurfaceConfig {
            name: name.to_string(),
            catalog: PathBuf::from(format!("docs/_data/catalog/{}", name)),
            output_dir: PathBuf::from(format!("docs/_data/table/en/cli/{}", name)),
        })
        .collect()
}

impl Config {
    /// Load configuration from a specific path, or use default search paths
    pub fn load_with_path(path: Option<String>) -> Result<Self> {
        // An explicit path must exist and parse
        if let Some(config_path) = path {
            debug!("Loading config from explicit path: {}", config_path);
            return Self::load_from_path(&config_path)
                .with_context(|| format!("Failed to load config {}", config_path));
        }

        if let Ok(config) = Self::load_from_path("confdoc.toml") {
            debug!("Loaded config from ./confdoc.toml");
            return Ok(config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join("confdoc").join("config.toml");
            if let Ok(config) = Self::load_from_path(&config_path) {
                debug!("Loaded config from {:?}", config_path);
                return Ok(config);
            }
        }

        debug!("Using default config");
        Ok(Self::default())
    }

    fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// The home directory: `home_override`, else `output.root`, else the
    /// working directory.
    pub fn home(&self, home_override: Option<PathBuf>) -> PathBuf {
        home_override
            .or_else(|| self.output.root.clone())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn layout(&self, home: PathBuf) -> DocLayout {
        DocLayout {
            home,
            namespace: self.properties.namespace.clone(),
            csv_dir: self.output.csv_dir.clone(),
            yml_dir: self.output.yml_dir.clone(),
        }
    }

    pub fn property_catalog(&self, home: &Path) -> YamlPropertyCatalog {
        YamlPropertyCatalog::new(home.join(&self.properties.catalog))
    }

    pub fn command_surfaces(&self, home: &Path) -> Vec<CommandSurface> {
        self.commands
            .iter()
            .map(|surface| CommandSurface {
                name: surface.name.clone(),
                output_dir: surface.output_dir.clone(),
                source: Box::new(YamlCommandCatalog::new(home.join(&surface.catalog))),
            })
            .collect()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: OutputConfig::default(),
            properties: PropertiesConfig::default(),
            commands: default_surfaces(),
        }
    }
}
