use std::path::PathBuf;

use anyhow::Result;
use tracing::info;

use crate::config::Config;
use crate::generator::{self, GenerationReport};

pub fn run(config_path: Option<String>, home_override: Option<PathBuf>) -> Result<GenerationReport> {
    if let Some(ref cfg) = config_path {
        info!("Config: {}", cfg);
    }
    let config = Config::load_with_path(config_path)?;

    let home = generator::resolve_home(&config.home(home_override))?;
    info!("Home: {}", home.display());

    let layout = config.layout(home.clone());
    let properties = config.property_catalog(&home);
    let surfaces = config.command_surfaces(&home);

    let report = generator::generate_all(&layout, &properties, &surfaces)?;
    info!(
        "Documented {} properties in {} files",
        report.properties,
        report.total_files()
    );
    Ok(report)
}
