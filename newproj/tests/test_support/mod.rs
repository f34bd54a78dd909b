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

use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use std::process::Output;

use indoc::indoc;
use tempfile::TempDir;

pub type R<T = ()> = anyhow::Result<T>;

/// One launcher invocation environment: a scratch directory with a `bin/`
/// subdirectory that becomes the launcher's entire `PATH`, the target
/// script, and the file the fake interpreter records its argv into.
pub struct LauncherBed {
    dir: TempDir,
}

impl LauncherBed {
    pub fn new() -> R<Self> {
        let dir = tempfile::tempdir()?;
        std::fs::create_dir(dir.path().join("bin"))?;
        Ok(Self { dir })
    }

    pub fn bin_dir(&self) -> PathBuf {
        self.dir.path().join("bin")
    }

    pub fn args_file(&self) -> PathBuf {
        self.dir.path().join("recorded-args")
    }

    /// Drops a fake interpreter executable under `bin/`. It records its
    /// argv, one token per line, and exits with `NEWPROJ_TEST_EXIT_CODE`.
    pub fn install_fake_interpreter(&self, name: &str) -> R {
        let body = indoc! {r#"
            #!/bin/sh
            : > "$NEWPROJ_TEST_ARGS_FILE"
            for arg in "$@"; do
                printf '%s\n' "$arg" >> "$NEWPROJ_TEST_ARGS_FILE"
            done
            exit "${NEWPROJ_TEST_EXIT_CODE:-0}"
        "#};

        let path = self.bin_dir().join(name);
        std::fs::write(&path, body)?;

        let mut perms = std::fs::metadata(&path)?.permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&path, perms)?;

        Ok(())
    }

    pub fn write_script(&self, name: &str) -> R<PathBuf> {
        let p = self.dir.path().join(name);
        std::fs::write(&p, "param([string]$Name)\n")?;
        Ok(p)
    }

    pub fn newproj(&self, args: &[&str]) -> R<Output> {
        self.newproj_with_child_exit(args, 0)
    }

    pub fn newproj_with_child_exit(&self, args: &[&str], child_exit: i32) -> R<Output> {
        let output = std::process::Command::new(env!("CARGO_BIN_EXE_newproj"))
            .args(args)
            .env("PATH", self.bin_dir())
            .env("NEWPROJ_TEST_ARGS_FILE", self.args_file())
            .env("NEWPROJ_TEST_EXIT_CODE", child_exit.to_string())
            .output()?;
        Ok(output)
    }

    pub fn recorded_args(&self) -> R<Vec<String>> {
        let contents = std::fs::read_to_string(self.args_file())?;
        Ok(contents.lines().map(str::to_owned).collect())
    }

    pub fn interpreter_was_invoked(&self) -> bool {
        self.args_file().exists()
    }
}

pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}
