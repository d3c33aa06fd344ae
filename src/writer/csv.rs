use std::collections::BTreeMap;
use std::path::Path;

use tracing::info;

use super::{ensure_dir, DocError, FileGroup};
use crate::category::{categorize, Category, CSV_RULES};
use crate::property::{sorted_by_name, PropertyDefinition};

pub const CSV_FILE_HEADER: &str = "propertyName,defaultValue";

/// One CSV row. The default is always quoted so embedded commas survive;
/// embedded double quotes are written as-is.
pub fn csv_row(property: &PropertyDefinition) -> String {
    format!(
        "{},\"{}\"\n",
        property.name,
        property.default_description.as_deref().unwrap_or("")
    )
}

/// Write `{category}-configuration.csv` for every category into `dir`.
///
/// Returns the number of files written; an empty property set writes nothing.
pub fn write_csv_files(
    properties: &[PropertyDefinition],
    namespace: &str,
    dir: &Path,
) -> Result<usize, DocError> {
    if properties.is_empty() {
        return Ok(0);
    }
    ensure_dir(dir)?;

    let mut group = FileGroup::new("Property Key CSV");
    let mut files = BTreeMap::new();
    for category in Category::ALL {
        let id = group.open(dir.join(category.file_name("csv")))?;
        group.append(id, &format!("{}\n", CSV_FILE_HEADER))?;
        files.insert(category, id);
    }

    for property in sorted_by_name(properties) {
        let category = categorize(CSV_RULES, namespace, &property.name);
        group.append(files[&category], &csv_row(property))?;
    }

    let written = group.finish()?;
    info!("Property Key CSV files were created successfully.");
    Ok(written)
}
