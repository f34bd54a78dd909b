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

//! Assembly of the script's command line.

use std::ffi::{OsStr, OsString};
use std::fmt::{self, Display, Formatter};
use std::path::{Path, PathBuf};

use crate::LaunchRequest;

/// The fully assembled command line for one scaffolding run.
///
/// Argument order is part of the script's contract: interpreter flags
/// first (`-NoProfile -ExecutionPolicy Bypass`), then `-File <script>`,
/// then the script's own parameters (`-Name <name>`, optionally `-git`
/// and `-demo`, in that order).
#[derive(Debug)]
pub struct LaunchCommand {
    program: PathBuf,
    args: Vec<OsString>,
}

impl LaunchCommand {
    pub fn new(interpreter: PathBuf, request: &LaunchRequest) -> Self {
        let mut args: Vec<OsString> = vec![
            "-NoProfile".into(),
            "-ExecutionPolicy".into(),
            "Bypass".into(),
            "-File".into(),
            request.script.clone().into_os_string(),
            "-Name".into(),
            request.name.clone().into(),
        ];

        if request.git {
            args.push("-git".into());
        }
        if request.demo {
            args.push("-demo".into());
        }

        Self {
            program: interpreter,
            args,
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn args(&self) -> &[OsString] {
        &self.args
    }
}

fn write_token(f: &mut Formatter<'_>, token: &OsStr) -> fmt::Result {
    let token = token.to_string_lossy();
    if token.contains(' ') {
        write!(f, "\"{token}\"")
    } else {
        write!(f, "{token}")
    }
}

impl Display for LaunchCommand {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_token(f, self.program.as_os_str())?;
        for arg in &self.args {
            f.write_str(" ")?;
            write_token(f, arg)?;
        }
        Ok(())
    }
}
