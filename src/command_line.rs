//! Shell command lines written back into the timestamps file.
//!
//! Commands are kept as argument lists and only serialized at the end, with
//! every argument double-quoted for a POSIX shell.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::Config;

/// Comment line written above the generated command
pub const GENERATED_COMMENT: &str = "# Generated command for transcription:";

/// Quote `arg` for a POSIX shell double-quoted context
pub fn quote(arg: &str) -> String {
    let mut quoted = String::with_capacity(arg.len() + 2);
    quoted.push('"');
    for c in arg.chars() {
        if matches!(c, '"' | '\\' | '$' | '`') {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

/// One program invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandLine {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", quote(arg))?;
        }
        Ok(())
    }
}

/// Commands run one after another, stopping at the first failure (`&&`)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandChain {
    pub commands: Vec<CommandLine>,
}

impl CommandChain {
    pub fn then(mut self, command: CommandLine) -> Self {
        self.commands.push(command);
        self
    }
}

impl fmt::Display for CommandChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, command) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" && ")?;
            }
            write!(f, "{}", command)?;
        }
        Ok(())
    }
}

/// Activate the virtualenv under `base_dir`, then hand every segment to the
/// transcription script, one argument per file in the given order.
pub fn transcription_command(config: &Config, base_dir: &Path, outputs: &[PathBuf]) -> CommandChain {
    let activate = config.venv_activate(base_dir);
    let script = base_dir.join(&config.transcribe_script);

    CommandChain::default()
        .then(CommandLine::new("source").arg(activate.to_string_lossy()))
        .then(
            CommandLine::new(config.python.as_str())
                .arg(script.to_string_lossy())
                .args(outputs.iter().map(|p| p.to_string_lossy().into_owned())),
        )
}

/// Text appended to the timestamps file: a blank line, the comment marker
/// and the command.
pub fn generated_block(command: &CommandChain) -> String {
    format!("\n{}\n{}\n", GENERATED_COMMENT, command)
}
