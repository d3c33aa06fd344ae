use std::collections::BTreeMap;
use std::path::Path;

use tracing::info;

use super::{ensure_dir, DocError, FileGroup};
use crate::command::{is_plain_file_name, CommandDefinition};

/// Full contents of one command's doc file.
pub fn render_command_doc(command: &CommandDefinition) -> String {
    let mut doc = command.documentation_block();
    if !command.options.is_empty() {
        doc.push_str("options: |\n");
    }
    for option in &command.options {
        // an option with neither flag renders as a bare `--`
        let flag = option.display_flag().unwrap_or_else(|| "--".to_string());
        doc.push_str(&format!("  - `{}` {}\n", flag, option.description));
    }
    doc.push_str("example: |\n  ");
    doc.push_str(&command.example);
    doc
}

/// Write `{name}.yml` for every command into `dir`.
pub fn write_command_docs(
    commands: &BTreeMap<String, CommandDefinition>,
    dir: &Path,
) -> Result<usize, DocError> {
    if commands.is_empty() {
        return Ok(0);
    }
    ensure_dir(dir)?;

    let mut group = FileGroup::new("command YML");
    for command in commands.values() {
        if !is_plain_file_name(&command.name) {
            return Err(DocError::InvalidCommandName {
                name: command.name.clone(),
            });
        }
        let id = group.open(dir.join(format!("{}.yml", command.name)))?;
        group.append(id, &render_command_doc(command))?;
    }

    let written = group.finish()?;
    info!("Command YML files were created successfully.");
    Ok(written)
}
