use std::collections::{BTreeMap, HashSet};
use std::fmt;

use crate::command::{is_plain_file_name, CommandDefinition};
use crate::property::PropertyDefinition;

#[derive(Debug, Clone)]
pub struct CheckIssue {
    pub severity: Severity,
    /// Property or command the issue is about
    pub subject: String,
    pub message: String,
    pub suggestion: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Error, // Breaks generated docs
    Warning, // Probably filed in the wrong place
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

fn error(subject: &str, message: String, suggestion: Option<&str>) -> CheckIssue {
    CheckIssue {
        severity: Severity::Error,
        subject: subject.to_string(),
        message,
        suggestion: suggestion.map(str::to_string),
    }
}

/// Every command needs a name, usage, description and example, and every
/// option needs at least one flag.
pub fn check_commands(commands: &BTreeMap<String, CommandDefinition>) -> Vec<CheckIssue> {
    let mut issues = Vec::new();

    for (key, command) in commands {
        let required = [
            ("name", &command.name),
            ("usage", &command.usage),
            ("description", &command.description),
            ("example", &command.example),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                issues.push(error(
                    key,
                    format!("Missing required field: {}", field),
                    Some("Every documented command needs name, usage, description and example"),
                ));
            }
        }

        if !command.name.is_empty() && !is_plain_file_name(&command.name) {
            issues.push(error(
                key,
                format!("Command name '{}' is not a plain file name", command.name),
                Some("Command names become `<name>.yml`; drop path separators and `..`"),
            ));
        }

        if !command.name.is_empty() && command.name != *key {
            issues.push(error(
                key,
                format!("Registered as '{}' but named '{}'", key, command.name),
                None,
            ));
        }

        for (i, option) in command.options.iter().enumerate() {
            if option.short.is_none() && option.long.is_none() {
                issues.push(error(
                    key,
                    format!("Option #{} has neither a short nor a long flag", i + 1),
                    Some("Set `short` or `long` on the option"),
                ));
            }
        }
    }

    issues
}

/// Duplicate names are errors; names outside `namespace` end up in `common`
/// and are reported as warnings.
pub fn check_properties(properties: &[PropertyDefinition], namespace: &str) -> Vec<CheckIssue> {
    let mut issues = Vec::new();
    let mut seen = HashSet::new();
    let prefix = format!("{}.", namespace);

    for property in properties {
        if !seen.insert(property.name.as_str()) {
            issues.push(error(
                &property.name,
                "Duplicate property name".to_string(),
                None,
            ));
        }
        if !property.name.starts_with(&prefix) {
            issues.push(CheckIssue {
                severity: Severity::Warning,
                subject: property.name.clone(),
                message: format!("Property is outside the '{}' namespace", namespace),
                suggestion: Some("It will be listed under common-configuration".to_string()),
            });
        }
    }

    issues
}

pub fn print_issues(issues: &[CheckIssue]) {
    if issues.is_empty() {
        println!("✅ No catalog issues found!");
        return;
    }

    for (severity, heading) in [(Severity::Error, "❌ Errors"), (Severity::Warning, "⚠️  Warnings")] {
        let matching: Vec<_> = issues.iter().filter(|i| i.severity == severity).collect();
        if matching.is_empty() {
            continue;
        }
        println!("{} ({}):", heading, matching.len());
        for issue in matching {
            println!("   • [{}] {}", issue.subject, issue.message);
            if let Some(suggestion) = &issue.suggestion {
                println!("     💡 {}", suggestion);
            }
        }
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::CommandOption;

    fn commands(list: Vec<CommandDefinition>) -> BTreeMap<String, CommandDefinition> {
        list.into_iter().map(|c| (c.name.clone(), c)).collect()
    }

    #[test]
    fn test_complete_command_passes() {
        let cmds = commands(vec![CommandDefinition::new(
            "report",
            "report [category]",
            "Reports cluster information.",
            "$ ./bin/alluxio fsadmin report",
        )
        .with_option(CommandOption::long("raw", "Print raw values."))]);
        assert!(check_commands(&cmds).is_empty());
    }

    #[test]
    fn test_missing_fields_reported() {
        let cmds = commands(vec![CommandDefinition::new("report", "", "desc", " ")]);
        let issues = check_commands(&cmds);
        let messages: Vec<&str> = issues.iter().map(|i| i.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "Missing required field: usage",
                "Missing required field: example"
            ]
        );
        assert!(issues.iter().all(|i| i.severity == Severity::Error));
    }

    #[test]
    fn test_flagless_option_reported() {
        let cmds = commands(vec![CommandDefinition::new("ls", "u", "d", "e").with_option(
            CommandOption {
                short: None,
                long: None,
                description: "nothing".to_string(),
            },
        )]);
        let issues = check_commands(&cmds);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("Option #1"));
    }

    #[test]
    fn test_path_like_command_name_reported() {
        let cmds = commands(vec![
            CommandDefinition::new("../escaped", "u", "d", "e"),
            CommandDefinition::new("/tmp/escaped", "u", "d", "e"),
        ]);
        let issues = check_commands(&cmds);
        assert_eq!(issues.len(), 2);
        assert!(issues
            .iter()
            .all(|i| i.message.contains("is not a plain file name")));
    }

    #[test]
    fn test_key_name_mismatch_reported() {
        let mut cmds = BTreeMap::new();
        cmds.insert("list".to_string(), CommandDefinition::new("ls", "u", "d", "e"));
        let issues = check_commands(&cmds);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].subject, "list");
    }

    #[test]
    fn test_property_checks() {
        let props = vec![
            PropertyDefinition::new("alluxio.user.a", ""),
            PropertyDefinition::new("alluxio.user.a", ""),
            PropertyDefinition::new("fs.s3a.access.key", ""),
        ];
        let issues = check_properties(&props, "alluxio");
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].severity, Severity::Error);
        assert_eq!(issues[1].severity, Severity::Warning);
        assert_eq!(issues[1].subject, "fs.s3a.access.key");
    }

    #[test]
    fn test_print_issues_does_not_panic() {
        print_issues(&[]);
        print_issues(&check_properties(
            &[PropertyDefinition::new("x", "")],
            "alluxio",
        ));
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(Severity::Error.to_string(), "error");
        assert_eq!(Severity::Warning.to_string(), "warning");
    }
}
