use std::path::PathBuf;

use clap::Parser;
use newproj::{LaunchRequest, DEFAULT_PS1_SCRIPT};

/// Create C++ SDL2 + SDL2_image + ImGui project via PowerShell script.
#[derive(Parser, Debug)]
#[clap(name = "newproj", version)]
pub struct NewprojApp {
    /// Project folder name (you can use hyphens)
    #[clap(value_parser = clap::builder::NonEmptyStringValueParser::new())]
    pub name: String,
    /// Initialize git repo
    #[clap(long)]
    pub git: bool,
    /// Enable ImGui demo in generated presets
    #[clap(long)]
    pub demo: bool,
    /// Path to .ps1 script (optional override)
    #[clap(long = "ps1", default_value = DEFAULT_PS1_SCRIPT)]
    pub ps1: PathBuf,
}

impl NewprojApp {
    pub fn into_request(self) -> LaunchRequest {
        LaunchRequest {
            name: self.name,
            git: self.git,
            demo: self.demo,
            script: self.ps1,
        }
    }
}
