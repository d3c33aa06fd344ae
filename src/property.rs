use anyhow::Result;
use serde::{Deserialize, Serialize};

/// A configuration property as described by the property catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDefinition {
    pub name: String,
    /// Human description of the default value. `None` when the property has
    /// no default at all.
    #[serde(default, rename = "default")]
    pub default_description: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub hidden: bool,
    /// Only takes effect when passed as a JVM system property, not from
    /// `alluxio-site.properties`.
    #[serde(default)]
    pub ignored_as_site_property: bool,
}

impl PropertyDefinition {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default_description: None,
            description: description.into(),
            hidden: false,
            ignored_as_site_property: false,
        }
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default_description = Some(default.into());
        self
    }

    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn with_ignored_as_site_property(mut self, ignored: bool) -> Self {
        self.ignored_as_site_property = ignored;
        self
    }
}

/// Supplies the full set of property definitions for one generation run.
pub trait PropertySource {
    fn default_keys(&self) -> Result<Vec<PropertyDefinition>>;
}

/// In-memory property source.
#[derive(Debug, Clone, Default)]
pub struct StaticPropertySource {
    properties: Vec<PropertyDefinition>,
}

impl StaticPropertySource {
    pub fn new(properties: Vec<PropertyDefinition>) -> Self {
        Self { properties }
    }
}

impl PropertySource for StaticPropertySource {
    fn default_keys(&self) -> Result<Vec<PropertyDefinition>> {
        Ok(self.properties.clone())
    }
}

/// Borrow `properties` in ascending name order. Output order never depends on
/// the order a source returns them in.
pub(crate) fn sorted_by_name(properties: &[PropertyDefinition]) -> Vec<&PropertyDefinition> {
    let mut sorted: Vec<&PropertyDefinition> = properties.iter().collect();
    sorted.sort_by(|a, b| a.name.cmp(&b.name));
    sorted
}
