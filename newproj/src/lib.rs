/*
 *        Copyright (c) 2023-2024 Dinu Blanovschi
 *
 *    Licensed under the Apache License, Version 2.0 (the "License");
 *    you may not use this file except in compliance with the License.
 *    You may obtain a copy of the License at
 *
 *        https://www.apache.org/licenses/LICENSE-2.0
 *
 *    Unless required by applicable law or agreed to in writing, software
 *    distributed under the License is distributed on an "AS IS" BASIS,
 *    WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *    See the License for the specific language governing permissions and
 *    limitations under the License.
 */

//! Launcher around the PowerShell script that scaffolds new C++
//! SDL2 + SDL2_image + ImGui projects.
//!
//! The flow is a straight line: resolve a PowerShell binary from the
//! system path, check the target script is there, assemble the script's
//! command line, run it with inherited stdio, and hand the script's exit
//! code back to the calling shell. Resolution and spawning sit behind the
//! [`interpreter::ExecutableResolver`] and [`runner::ProcessRunner`] seams
//! so everything up to the actual spawn is testable without touching the
//! real process table.

use std::fs::File;
use std::path::PathBuf;
use std::process::ExitStatus;

use log::debug;

use crate::command::LaunchCommand;
use crate::interpreter::{find_interpreter, ExecutableResolver};
use crate::runner::ProcessRunner;

pub mod command;
pub mod interpreter;
pub mod runner;

/// Default location of the scaffolding script, overridable with `--ps1`.
pub const DEFAULT_PS1_SCRIPT: &str =
    r"D:\Code\Again\__Script_for_making_projects\imguisdl_maker\new_sdl_imgui_project.ps1";

/// Exit code for failures local to the launcher itself.
///
/// Everything else the launcher exits with is the forwarded exit code of
/// the script.
pub const LAUNCHER_FAILURE: i32 = 2;

/// One invocation of the scaffolding script.
#[derive(Debug, Clone)]
pub struct LaunchRequest {
    /// Project folder name.
    pub name: String,
    /// Initialize a git repo in the generated project.
    pub git: bool,
    /// Enable the ImGui demo in the generated presets.
    pub demo: bool,
    /// Path to the `.ps1` script.
    pub script: PathBuf,
}

#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    #[error("PowerShell not found (pwsh/powershell.exe). Install PowerShell or fix PATH.")]
    InterpreterNotFound,
    #[error(".ps1 script not found: {}", .0.display())]
    ScriptNotFound(PathBuf),
    #[error("Failed to run PowerShell: {0}")]
    Spawn(#[source] std::io::Error),
}

/// Runs the scaffolding script for `request` and returns its exit status.
///
/// The full command line is echoed to stdout before the spawn, and the
/// child inherits stdio, so the script's own output goes straight to the
/// terminal.
pub fn launch(
    request: &LaunchRequest,
    resolver: &impl ExecutableResolver,
    runner: &impl ProcessRunner,
) -> Result<ExitStatus, LaunchError> {
    let interpreter = find_interpreter(resolver).ok_or(LaunchError::InterpreterNotFound)?;
    debug!("resolved interpreter: {}", interpreter.display());

    // Opening rather than stat-ing also catches the unreadable-file case.
    if File::open(&request.script).is_err() {
        return Err(LaunchError::ScriptNotFound(request.script.clone()));
    }

    let cmd = LaunchCommand::new(interpreter, request);
    println!("Running: {cmd}");

    runner.run(&cmd).map_err(LaunchError::Spawn)
}
