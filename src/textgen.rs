//! Text generation capability used by the AI-backed artifacts.
//!
//! Generators only see [`TextGenerator`]; the production implementation
//! shells out to a configured CLI (by default `claude -p <prompt>
//! --output-format text`) and returns its stdout.

use crate::{
    config::{AiConfig, check_command_installed},
    log,
    utils::command::{exec, filter_args, to_cmd_vec, to_os},
};
use anyhow::{Context, Result};
use std::ffi::OsString;

/// Turn a prompt into text. May fail or return ill-formed output.
pub trait TextGenerator {
    fn generate(&self, prompt: &str) -> Result<String>;

    /// Fail early when the generator cannot run at all.
    fn check(&self) -> Result<()> {
        Ok(())
    }
}

/// Runs `command... <prompt> args...` and returns stdout.
pub struct CommandGenerator<'a> {
    config: &'a AiConfig,
}

impl<'a> CommandGenerator<'a> {
    pub const fn new(config: &'a AiConfig) -> Self {
        Self { config }
    }

    /// Argument list after the command itself: the prompt, then the extras.
    fn arguments(&self, prompt: &str) -> Vec<OsString> {
        let args: Vec<OsString> = std::iter::once(to_os(prompt))
            .chain(self.config.args.iter().map(to_os))
            .collect();
        filter_args(&args)
    }
}

impl TextGenerator for CommandGenerator<'_> {
    fn generate(&self, prompt: &str) -> Result<String> {
        let name = self.config.command.first().map_or("ai", String::as_str);
        log!("ai"; "asking `{name}` ({} byte prompt)", prompt.len());

        let output = exec(None, &to_cmd_vec(&self.config.command), &self.arguments(prompt))?;
        String::from_utf8(output.stdout).context("Text generator returned invalid UTF-8")
    }

    fn check(&self) -> Result<()> {
        check_command_installed("[ai.command]", &self.config.command)
    }
}
