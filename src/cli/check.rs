use std::path::PathBuf;

use anyhow::{bail, Result};

use crate::check::{self, Severity};
use crate::config::Config;
use crate::generator;
use crate::property::PropertySource;

pub fn run(config_path: Option<String>, home_override: Option<PathBuf>) -> Result<()> {
    let config = Config::load_with_path(config_path)?;
    let home = generator::resolve_home(&config.home(home_override))?;

    let properties = config.property_catalog(&home).default_keys()?;
    let mut issues = check::check_properties(&properties, &config.properties.namespace);
    for surface in config.command_surfaces(&home) {
        let commands = surface.source.load_commands()?;
        issues.extend(check::check_commands(&commands));
    }

    check::print_issues(&issues);

    let errors = issues
        .iter()
        .filter(|i| i.severity == Severity::Error)
        .count();
    if errors > 0 {
        bail!("{} catalog error(s) found", errors);
    }

    Ok(())
}
