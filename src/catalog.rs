//! File-backed metadata sources.
//!
//! Property catalogs are a YAML list of property definitions. Command catalogs
//! are either a YAML list of commands in one file, or a directory holding one
//! `*.yml` / `*.yaml` file per command.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use tracing::{debug, info};

use crate::command::{CommandDefinition, CommandSource};
use crate::property::{PropertyDefinition, PropertySource};

#[derive(Debug, Clone)]
pub struct YamlPropertyCatalog {
    path: PathBuf,
}

impl YamlPropertyCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PropertySource for YamlPropertyCatalog {
    fn default_keys(&self) -> Result<Vec<PropertyDefinition>> {
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read property catalog {}", self.path.display()))?;
        let properties: Vec<PropertyDefinition> = serde_yaml::from_str(&content)
            .with_context(|| format!("Invalid property catalog {}", self.path.display()))?;
        info!(
            "Loaded {} properties from {}",
            properties.len(),
            self.path.display()
        );
        Ok(properties)
    }
}

#[derive(Debug, Clone)]
pub struct YamlCommandCatalog {
    path: PathBuf,
}

impl YamlCommandCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_file(path: &Path) -> Result<Vec<CommandDefinition>> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read command catalog {}", path.display()))?;
        serde_yaml::from_str(&content)
            .with_context(|| format!("Invalid command catalog {}", path.display()))
    }

    fn read_dir(dir: &Path) -> Result<Vec<CommandDefinition>> {
        let mut files: Vec<PathBuf> = fs::read_dir(dir)
            .with_context(|| format!("Failed to list command directory {}", dir.display()))?
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file()
                    && matches!(
                        path.extension().and_then(|e| e.to_str()),
                        Some("yml") | Some("yaml")
                    )
            })
            .collect();
        files.sort();

        let mut commands = Vec::with_capacity(files.len());
        for file in files {
            debug!("Reading command descriptor {}", file.display());
            let content = fs::read_to_string(&file)
                .with_context(|| format!("Failed to read command {}", file.display()))?;
            let command: CommandDefinition = serde_yaml::from_str(&content)
                .with_context(|| format!("Invalid command descriptor {}", file.display()))?;
            commands.push(command);
        }
        Ok(commands)
    }
}

impl CommandSource for YamlCommandCatalog {
    fn load_commands(&self) -> Result<BTreeMap<String, CommandDefinition>> {
        let commands = if self.path.is_dir() {
            Self::read_dir(&self.path)?
        } else {
            Self::read_file(&self.path)?
        };

        let mut map = BTreeMap::new();
        for command in commands {
            if map.contains_key(&command.name) {
                bail!(
                    "Duplicate command '{}' in {}",
                    command.name,
                    self.path.display()
                );
            }
            map.insert(command.name.clone(), command);
        }
        info!("Loaded {} commands from {}", map.len(), self.path.display());
        Ok(map)
    }
}
