use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use crate::command::CommandSource;
use crate::property::PropertySource;
use crate::writer::{write_command_docs, write_csv_files, write_yml_files};

/// Where generated artifacts go. Output directories are relative to `home`
/// unless absolute.
#[derive(Debug, Clone)]
pub struct DocLayout {
    pub home: PathBuf,
    pub namespace: String,
    pub csv_dir: PathBuf,
    pub yml_dir: PathBuf,
}

/// One CLI command group and where its command docs are written.
pub struct CommandSurface {
    pub name: String,
    pub output_dir: PathBuf,
    pub source: Box<dyn CommandSource>,
}

/// Files written by one run, per stage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    pub properties: usize,
    pub csv_files: usize,
    pub yml_files: usize,
    /// `(surface name, command files written)`
    pub command_files: Vec<(String, usize)>,
}

impl GenerationReport {
    pub fn total_files(&self) -> usize {
        self.csv_files + self.yml_files + self.command_files.iter().map(|(_, n)| n).sum::<usize>()
    }
}

/// Absolute form of `home`, resolved against the working directory.
pub fn resolve_home(home: &Path) -> Result<PathBuf> {
    std::path::absolute(home)
        .with_context(|| format!("Failed to resolve home directory {}", home.display()))
}

/// Run the full pipeline: property CSV tables, property YAML descriptions,
/// then the command docs of every surface in order.
///
/// Nothing is rolled back on failure; files written before the failing step
/// stay on disk.
pub fn generate_all(
    layout: &DocLayout,
    properties: &dyn PropertySource,
    surfaces: &[CommandSurface],
) -> Result<GenerationReport> {
    let mut keys = properties.default_keys()?;
    keys.retain(|key| !key.hidden);

    let home = resolve_home(&layout.home)?;
    info!("Generating documentation under {}", home.display());

    let mut report = GenerationReport {
        properties: keys.len(),
        ..Default::default()
    };

    let csv_dir = home.join(&layout.csv_dir);
    report.csv_files = write_csv_files(&keys, &layout.namespace, &csv_dir)
        .with_context(|| format!("Failed to write CSV tables to {}", csv_dir.display()))?;

    let yml_dir = home.join(&layout.yml_dir);
    report.yml_files = write_yml_files(&keys, &layout.namespace, &yml_dir)
        .with_context(|| format!("Failed to write YML files to {}", yml_dir.display()))?;

    for surface in surfaces {
        let commands = surface.source.load_commands()?;
        let dir = home.join(&surface.output_dir);
        let written = write_command_docs(&commands, &dir).with_context(|| {
            format!(
                "Failed to write {} command docs to {}",
                surface.name,
                dir.display()
            )
        })?;
        info!("Wrote {} {} command docs", written, surface.name);
        report.command_files.push((surface.name.clone(), written));
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{CommandDefinition, StaticCommandSource};
    use crate::property::{PropertyDefinition, StaticPropertySource};
    use std::fs;
    use tempfile::TempDir;

    fn layout(home: &Path) -> DocLayout {
        DocLayout {
            home: home.to_path_buf(),
            namespace: "alluxio".to_string(),
            csv_dir: PathBuf::from("table"),
            yml_dir: PathBuf::from("table/en"),
        }
    }

    fn make_dirs(home: &Path, dirs: &[&str]) {
        for dir in dirs {
            fs::create_dir_all(home.join(dir)).unwrap();
        }
    }

    #[test]
    fn test_hidden_properties_are_skipped() {
        let home = TempDir::new().unwrap();
        make_dirs(home.path(), &["table/en"]);
        let source = StaticPropertySource::new(vec![
            PropertyDefinition::new("alluxio.user.visible", "shown"),
            PropertyDefinition::new("alluxio.user.secret", "hidden").with_hidden(true),
        ]);

        let report = generate_all(&layout(home.path()), &source, &[]).unwrap();
        assert_eq!(report.properties, 1);
        let csv = fs::read_to_string(home.path().join("table/user-configuration.csv")).unwrap();
        assert!(csv.contains("alluxio.user.visible"));
        assert!(!csv.contains("alluxio.user.secret"));
    }

    #[test]
    fn test_runs_every_stage() {
        let home = TempDir::new().unwrap();
        make_dirs(home.path(), &["table/en/cli/fs", "table/en/cli/fsadmin"]);
        let properties =
            StaticPropertySource::new(vec![PropertyDefinition::new("alluxio.home", "Home")]);
        let surfaces = vec![
            CommandSurface {
                name: "fs".to_string(),
                output_dir: PathBuf::from("table/en/cli/fs"),
                source: Box::new(StaticCommandSource::new(vec![
                    CommandDefinition::new("ls", "ls", "d", "e"),
                    CommandDefinition::new("cat", "cat", "d", "e"),
                ])),
            },
            CommandSurface {
                name: "fsadmin".to_string(),
                output_dir: PathBuf::from("table/en/cli/fsadmin"),
                source: Box::new(StaticCommandSource::new(vec![CommandDefinition::new(
                    "report", "report", "d", "e",
                )])),
            },
        ];

        let report = generate_all(&layout(home.path()), &properties, &surfaces).unwrap();
        assert_eq!(report.csv_files, 6);
        assert_eq!(report.yml_files, 6);
        assert_eq!(
            report.command_files,
            vec![("fs".to_string(), 2), ("fsadmin".to_string(), 1)]
        );
        assert_eq!(report.total_files(), 15);
        assert!(home.path().join("table/en/cli/fsadmin/report.yml").exists());
    }

    #[test]
    fn test_failure_keeps_earlier_output() {
        let home = TempDir::new().unwrap();
        // yml dir is missing, so the second stage fails
        make_dirs(home.path(), &["table"]);
        let source =
            StaticPropertySource::new(vec![PropertyDefinition::new("alluxio.home", "Home")]);
        let mut layout = layout(home.path());
        layout.yml_dir = PathBuf::from("missing");

        let err = generate_all(&layout, &source, &[]).unwrap_err();
        assert!(format!("{:#}", err).contains("does not exist"));
        assert!(home.path().join("table/common-configuration.csv").exists());
    }

    #[test]
    fn test_resolve_home_is_absolute() {
        assert!(resolve_home(Path::new(".")).unwrap().is_absolute());
    }
}
