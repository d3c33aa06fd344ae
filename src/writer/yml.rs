use std::collections::BTreeMap;
use std::path::Path;

use tracing::info;

use super::{ensure_dir, DocError, FileGroup};
use crate::category::{categorize, Category, YML_RULES};
use crate::escape::escape_html;
use crate::property::{sorted_by_name, PropertyDefinition};

/// Caution appended to properties that are ignored in the site properties file.
pub fn site_property_note(name: &str) -> String {
    format!(
        " Note: overwriting this property will only work when it is passed as a \
         JVM system property (e.g., appending \"-D{}\"=<NEW_VALUE>\" to \
         $ALLUXIO_JAVA_OPTS). Setting it in alluxio-site.properties will not work.",
        name
    )
}

/// One YAML entry, keyed by property name, with the description as a
/// single-quoted scalar. The whole entry is HTML-escaped.
pub fn yml_entry(property: &PropertyDefinition) -> String {
    let mut description = property.description.replace('\'', "''");
    if property.ignored_as_site_property {
        description.push_str(&site_property_note(&property.name));
    }
    escape_html(&format!("{}:\n  '{}'\n", property.name, description))
}

/// Write `{category}-configuration.yml` for every category into `dir`.
pub fn write_yml_files(
    properties: &[PropertyDefinition],
    namespace: &str,
    dir: &Path,
) -> Result<usize, DocError> {
    if properties.is_empty() {
        return Ok(0);
    }
    ensure_dir(dir)?;

    let mut group = FileGroup::new("Property Key YML");
    let mut files = BTreeMap::new();
    for category in Category::ALL {
        files.insert(category, group.open(dir.join(category.file_name("yml")))?);
    }

    for property in sorted_by_name(properties) {
        let category = categorize(YML_RULES, namespace, &property.name);
        group.append(files[&category], &yml_entry(property))?;
    }

    let written = group.finish()?;
    info!("YML files for description of Property Keys were created successfully.");
    Ok(written)
}
