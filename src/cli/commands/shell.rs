//! Shell integration commands.

use clap_complete::Shell;

use crate::error::PlannerError;
use crate::features::shell::{completion_install_instructions, generate_completions};

/// Execute the completions command
///
/// # Errors
///
/// Returns an error if the completion script cannot be generated.
pub fn completions(shell: Shell, install: bool) -> Result<String, PlannerError> {
    if install {
        Ok(completion_install_instructions(shell))
    } else {
        generate_completions(shell)
    }
}
