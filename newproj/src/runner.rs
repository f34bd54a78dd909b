use std::io;
use std::process::{Command, ExitStatus};

use crate::command::LaunchCommand;

/// Spawning seam. The real implementation runs the command as a child
/// process; test fakes observe the invocation instead.
pub trait ProcessRunner {
    fn run(&self, cmd: &LaunchCommand) -> io::Result<ExitStatus>;
}

/// Runs the child with inherited stdio, so the script's live output goes
/// straight to the user's terminal, and blocks until it exits.
pub struct InheritStdioRunner;

impl ProcessRunner for InheritStdioRunner {
    fn run(&self, cmd: &LaunchCommand) -> io::Result<ExitStatus> {
        Command::new(cmd.program()).args(cmd.args()).status()
    }
}
