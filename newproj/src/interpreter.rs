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

//! Locating a PowerShell binary on the system path.

use std::path::PathBuf;

/// Candidate executable names, in preference order: PowerShell 7 first,
/// then legacy Windows PowerShell.
pub const INTERPRETER_CANDIDATES: &[&str] = &["pwsh", "pwsh.exe", "powershell.exe"];

/// Lookup of a single executable name on the search path.
///
/// The launcher only goes through this trait, so tests can substitute a
/// fake that never touches the real filesystem.
pub trait ExecutableResolver {
    fn resolve(&self, name: &str) -> Option<PathBuf>;
}

/// Resolver backed by the `PATH` environment variable.
pub struct PathResolver;

impl ExecutableResolver for PathResolver {
    fn resolve(&self, name: &str) -> Option<PathBuf> {
        which::which(name).ok()
    }
}

/// Returns the first candidate of [`INTERPRETER_CANDIDATES`] that
/// resolves, or `None` if none of them do.
pub fn find_interpreter(resolver: &impl ExecutableResolver) -> Option<PathBuf> {
    INTERPRETER_CANDIDATES
        .iter()
        .find_map(|candidate| resolver.resolve(candidate))
}
