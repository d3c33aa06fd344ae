use std::collections::BTreeMap;
use std::path::{Component, Path};

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// A single command-line option of a shell command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandOption {
    #[serde(default)]
    pub short: Option<String>,
    #[serde(default)]
    pub long: Option<String>,
    #[serde(default)]
    pub description: String,
}

impl CommandOption {
    pub fn short(flag: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            short: Some(flag.into()),
            long: None,
            description: description.into(),
        }
    }

    pub fn long(flag: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            short: None,
            long: Some(flag.into()),
            description: description.into(),
        }
    }

    /// Flag as shown in docs. The short form wins when both are present.
    pub fn display_flag(&self) -> Option<String> {
        match (&self.short, &self.long) {
            (Some(short), _) => Some(format!("-{}", short)),
            (None, Some(long)) => Some(format!("--{}", long)),
            (None, None) => None,
        }
    }
}

/// A documented shell command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandDefinition {
    pub name: String,
    #[serde(default)]
    pub usage: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub example: String,
    #[serde(default)]
    pub options: Vec<CommandOption>,
    #[serde(default)]
    pub sub_commands: Option<String>,
    /// Pre-rendered header block. Rendered from the other fields when absent.
    #[serde(default)]
    pub documentation: Option<String>,
}

impl CommandDefinition {
    pub fn new(
        name: impl Into<String>,
        usage: impl Into<String>,
        description: impl Into<String>,
        example: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            usage: usage.into(),
            description: description.into(),
            example: example.into(),
            options: Vec::new(),
            sub_commands: None,
            documentation: None,
        }
    }

    pub fn with_option(mut self, option: CommandOption) -> Self {
        self.options.push(option);
        self
    }

    pub fn with_sub_commands(mut self, sub_commands: impl Into<String>) -> Self {
        self.sub_commands = Some(sub_commands.into());
        self
    }

    pub fn with_documentation(mut self, documentation: impl Into<String>) -> Self {
        self.documentation = Some(documentation.into());
        self
    }

    /// The header block written at the top of the command's doc file.
    pub fn documentation_block(&self) -> String {
        if let Some(ref doc) = self.documentation {
            return doc.clone();
        }

        let mut block = format!(
            "name: {}\nusage: {}\ndescription: |\n  {}\n",
            self.name, self.usage, self.description
        );
        if let Some(ref sub) = self.sub_commands {
            block.push_str(&format!("subCommands: |\n  {}\n", sub));
        }
        block
    }
}

/// True when `name` is a single normal path component, so `{name}.yml` stays
/// inside the directory it is joined onto.
pub fn is_plain_file_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    ) && !name.contains(['/', '\\'])
}

/// Supplies the commands of one CLI surface, keyed by command name.
pub trait CommandSource {
    fn load_commands(&self) -> Result<BTreeMap<String, CommandDefinition>>;
}

/// In-memory command source.
#[derive(Debug, Clone, Default)]
pub struct StaticCommandSource {
    commands: BTreeMap<String, CommandDefinition>,
}

impl StaticCommandSource {
    pub fn new(commands: impl IntoIterator<Item = CommandDefinition>) -> Self {
        Self {
            commands: commands
                .into_iter()
                .map(|cmd| (cmd.name.clone(), cmd))
                .collect(),
        }
    }
}

impl CommandSource for StaticCommandSource {
    fn load_commands(&self) -> Result<BTreeMap<String, CommandDefinition>> {
        Ok(self.commands.clone())
    }
}
