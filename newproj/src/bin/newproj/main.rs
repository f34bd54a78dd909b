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

use clap::Parser;
use newproj::interpreter::PathResolver;
use newproj::runner::InheritStdioRunner;
use newproj::{launch, LaunchError, LAUNCHER_FAILURE};

mod cli_core;

use cli_core::NewprojApp;

fn main_impl(app: NewprojApp) -> Result<i32, LaunchError> {
    let request = app.into_request();
    let status = launch(&request, &PathResolver, &InheritStdioRunner)?;

    match status.code() {
        Some(code) => Ok(code),
        None => {
            // no exit code to forward; the child was killed by a signal
            eprintln!("ERROR: PowerShell terminated abnormally: {status}");
            Ok(LAUNCHER_FAILURE)
        }
    }
}

fn main() {
    pretty_env_logger::formatted_builder()
        .parse_env("NEWPROJ_LOG")
        .init();

    let app = NewprojApp::parse();

    match main_impl(app) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("ERROR: {e}");
            std::process::exit(LAUNCHER_FAILURE);
        }
    }
}
