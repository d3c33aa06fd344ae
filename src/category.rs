use std::fmt;

/// Documentation bucket a configuration property is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    User,
    Master,
    Worker,
    Security,
    ClusterManagement,
    Common,
}

impl Category {
    /// Every category, in the order their files are opened.
    pub const ALL: [Category; 6] = [
        Category::User,
        Category::Master,
        Category::Worker,
        Category::Security,
        Category::Common,
        Category::ClusterManagement,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::User => "user",
            Category::Master => "master",
            Category::Worker => "worker",
            Category::Security => "security",
            Category::ClusterManagement => "cluster-management",
            Category::Common => "common",
        }
    }

    /// File name for this category, e.g. `user-configuration.csv`.
    pub fn file_name(&self, extension: &str) -> String {
        format!("{}-configuration.{}", self.as_str(), extension)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `(prefix, category)` row. The prefix is appended to `<namespace>.`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryRule {
    pub prefix: &'static str,
    pub category: Category,
}

const fn rule(prefix: &'static str, category: Category) -> CategoryRule {
    CategoryRule { prefix, category }
}

/// Rules used for the CSV tables. `integration` has no trailing dot here.
pub const CSV_RULES: &[CategoryRule] = &[
    rule("user.", Category::User),
    rule("master.", Category::Master),
    rule("worker.", Category::Worker),
    rule("security.", Category::Security),
    rule("integration", Category::ClusterManagement),
];

/// Rules used for the YAML descriptions. `integration.` keeps its dot, so a
/// property named exactly `<namespace>.integration` lands in `common`.
pub const YML_RULES: &[CategoryRule] = &[
    rule("user.", Category::User),
    rule("master.", Category::Master),
    rule("worker.", Category::Worker),
    rule("security.", Category::Security),
    rule("integration.", Category::ClusterManagement),
];

/// Map a property name to its category. First matching rule wins; anything
/// unmatched is `Common`.
pub fn categorize(rules: &[CategoryRule], namespace: &str, name: &str) -> Category {
    let Some(rest) = name
        .strip_prefix(namespace)
        .and_then(|rest| rest.strip_prefix('.'))
    else {
        return Category::Common;
    };

    rules
        .iter()
        .find(|rule| rest.starts_with(rule.prefix))
        .map(|rule| rule.category)
        .unwrap_or(Category::Common)
}
