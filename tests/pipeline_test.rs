//! Full pipeline runs against catalog files on disk

use std::env;
use std::fs;
use std::path::Path;

use confdoc::cli;
use confdoc::config::Config;
use confdoc::generator::generate_all;
use serial_test::serial;
use tempfile::TempDir;

const PROPERTIES: &str = r#"
- name: alluxio.user.file.buffer.bytes
  default: 8MB
  description: The size of the file buffer to use for file system reads/writes.
- name: alluxio.master.hostname
  description: The hostname of Alluxio master.
- name: alluxio.worker.data.folder
  default: /alluxioworker/
  description: A relative path within each storage directory used as the data folder.
- name: alluxio.home
  default: /opt/alluxio
  description: Alluxio installation directory.
  ignored_as_site_property: true
- name: alluxio.test.mode
  description: Flag used only during tests.
  hidden: true
"#;

const FS_COMMANDS: &str = r#"
- name: getSyncPathList
  usage: getSyncPathList
  description: Gets all the paths that are under active syncing right now.
  example: "$ ./bin/alluxio fs getSyncPathList"
- name: ls
  usage: "ls [-d|-f|-p|-R|-h|--sort=option|-r] <path>"
  description: Displays information for all files and directories.
  example: "$ ./bin/alluxio fs ls /"
  options:
    - short: d
      description: list directories as plain files
    - long: sort
      description: sort statuses by the given field
"#;

const FSADMIN_COMMAND: &str = r#"
name: report
usage: "report [category] [category args]"
description: Report Alluxio running cluster information.
example: "$ ./bin/alluxio fsadmin report"
"#;

/// Lay out a docs tree with catalogs under `home`.
fn seed_home(home: &Path) {
    for dir in [
        "docs/_data/catalog/fsadmin",
        "docs/_data/table/en/cli/fs",
        "docs/_data/table/en/cli/fsadmin",
    ] {
        fs::create_dir_all(home.join(dir)).unwrap();
    }
    fs::write(home.join("docs/_data/catalog/properties.yml"), PROPERTIES).unwrap();
    fs::write(home.join("docs/_data/catalog/fs"), FS_COMMANDS).unwrap();
    fs::write(
        home.join("docs/_data/catalog/fsadmin/report.yml"),
        FSADMIN_COMMAND,
    )
    .unwrap();
}

fn snapshot(root: &Path) -> Vec<(String, Vec<u8>)> {
    let mut files = Vec::new();
    let mut stack = vec![root.to_path_buf()];
    while let Some(dir) = stack.pop() {
        for entry in fs::read_dir(&dir).unwrap().flatten() {
            let path = entry.path();
            if path.is_dir() {
                stack.push(path);
            } else {
                let rel = path.strip_prefix(root).unwrap().to_string_lossy().to_string();
                files.push((rel, fs::read(&path).unwrap()));
            }
        }
    }
    files.sort();
    files
}

#[test]
fn test_default_layout_generates_all_artifacts() {
    let home = TempDir::new().unwrap();
    seed_home(home.path());

    let config = Config::default();
    let layout = config.layout(home.path().to_path_buf());
    let report = generate_all(
        &layout,
        &config.property_catalog(home.path()),
        &config.command_surfaces(home.path()),
    )
    .unwrap();

    assert_eq!(report.properties, 4);
    assert_eq!(report.csv_files, 6);
    assert_eq!(report.yml_files, 6);
    assert_eq!(
        report.command_files,
        vec![("fs".to_string(), 2), ("fsadmin".to_string(), 1)]
    );

    let table = home.path().join("docs/_data/table");
    let user = fs::read_to_string(table.join("user-configuration.csv")).unwrap();
    assert_eq!(
        user,
        "propertyName,defaultValue\nalluxio.user.file.buffer.bytes,\"8MB\"\n"
    );
    let master = fs::read_to_string(table.join("master-configuration.csv")).unwrap();
    assert_eq!(
        master,
        "propertyName,defaultValue\nalluxio.master.hostname,\"\"\n"
    );
    let common_yml = fs::read_to_string(table.join("en/common-configuration.yml")).unwrap();
    assert!(common_yml.contains("Note: overwriting this property"));
    assert!(!common_yml.contains("alluxio.test.mode"));

    let ls = fs::read_to_string(table.join("en/cli/fs/ls.yml")).unwrap();
    assert!(ls.contains("options: |\n  - `-d` list directories as plain files\n  - `--sort` sort statuses by the given field\n"));
    assert!(table.join("en/cli/fs/getSyncPathList.yml").exists());
    assert!(table.join("en/cli/fsadmin/report.yml").exists());
}

#[test]
fn test_pipeline_is_idempotent() {
    let home = TempDir::new().unwrap();
    seed_home(home.path());
    let config = Config::default();
    let layout = config.layout(home.path().to_path_buf());

    generate_all(
        &layout,
        &config.property_catalog(home.path()),
        &config.command_surfaces(home.path()),
    )
    .unwrap();
    let first = snapshot(&home.path().join("docs/_data/table"));

    generate_all(
        &layout,
        &config.property_catalog(home.path()),
        &config.command_surfaces(home.path()),
    )
    .unwrap();
    let second = snapshot(&home.path().join("docs/_data/table"));

    assert_eq!(first.len(), 15);
    assert_eq!(first, second);
}

#[test]
fn test_missing_command_directory_fails_after_property_output() {
    let home = TempDir::new().unwrap();
    seed_home(home.path());
    fs::remove_dir_all(home.path().join("docs/_data/table/en/cli/fsadmin")).unwrap();

    let config = Config::default();
    let result = generate_all(
        &config.layout(home.path().to_path_buf()),
        &config.property_catalog(home.path()),
        &config.command_surfaces(home.path()),
    );

    assert!(result.is_err());
    assert!(format!("{:#}", result.unwrap_err()).contains("fsadmin"));
    // Earlier stages are not rolled back
    assert!(home
        .path()
        .join("docs/_data/table/en/cli/fs/ls.yml")
        .exists());
}

#[test]
#[serial]
fn test_no_flags_runs_from_working_directory() {
    let home = TempDir::new().unwrap();
    seed_home(home.path());
    // Keep the user config dir out of the picture
    fs::write(home.path().join("confdoc.toml"), "").unwrap();

    let previous = env::current_dir().unwrap();
    env::set_current_dir(home.path()).unwrap();
    let result = cli::generate::run(None, None);
    env::set_current_dir(previous).unwrap();

    let report = result.unwrap();
    assert_eq!(report.total_files(), 15);
    assert!(home
        .path()
        .join("docs/_data/table/security-configuration.csv")
        .exists());
}
