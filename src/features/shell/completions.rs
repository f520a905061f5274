//! Shell completions generation.
//!
//! Generates completion scripts for bash, zsh, fish, elvish, and PowerShell.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::Cli;
use crate::error::PlannerError;

/// Binary name completions are generated for.
const BIN_NAME: &str = "weekplan";

/// Generate the completion script for `shell`.
///
/// # Errors
///
/// Returns an error if the generated script is not valid UTF-8.
pub fn generate_completions(shell: Shell) -> Result<String, PlannerError> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, BIN_NAME, &mut buf);
    String::from_utf8(buf)
        .map_err(|e| PlannerError::InvalidArgument(format!("completion script is not UTF-8: {e}")))
}

/// Installation hint printed alongside the script.
#[must_use]
pub fn completion_install_instructions(shell: Shell) -> String {
    match shell {
        Shell::Bash => r"# Add to ~/.bashrc:
source <(weekplan completions bash)
"
        .to_string(),

        Shell::Zsh => r"# Save to your fpath:
weekplan completions zsh > ~/.zsh/completions/_weekplan
# Then add to ~/.zshrc:
fpath=(~/.zsh/completions $fpath)
autoload -Uz compinit && compinit
"
        .to_string(),

        Shell::Fish => r"# Save to fish completions directory:
weekplan completions fish > ~/.config/fish/completions/weekplan.fish
"
        .to_string(),

        Shell::PowerShell => r"# Add to your PowerShell profile ($PROFILE):
weekplan completions powershell | Out-String | Invoke-Expression
"
        .to_string(),

        Shell::Elvish => r"# Save to elvish lib directory:
weekplan completions elvish > ~/.elvish/lib/weekplan.elv
"
        .to_string(),

        _ => "Unknown shell".to_string(),
    }
}
