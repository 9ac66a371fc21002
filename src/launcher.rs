//! Starting a viewer for one snapshot group
//!
//! The selection menu does not play groups in-process. It runs this same
//! executable again with the chosen selector and the menu's directory and
//! interval, waits for it to exit, and reports any failure.

use crate::config::ViewerConfig;
use crate::error::LaunchError;
use std::env;
use std::path::PathBuf;
use std::process::{Child, Command};

#[derive(Debug, Clone)]
pub struct Launcher {
    program: PathBuf,
    config: ViewerConfig,
}

impl Launcher {
    pub fn new(program: impl Into<PathBuf>, config: ViewerConfig) -> Self {
        Launcher {
            program: program.into(),
            config,
        }
    }

    /// Launch viewers with the executable that is currently running
    pub fn from_current_exe(config: ViewerConfig) -> Result<Self, LaunchError> {
        let program = env::current_exe().map_err(LaunchError::Executable)?;
        Ok(Self::new(program, config))
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    /// The command that opens `selector` in a viewer
    pub fn command(&self, selector: &str) -> Command {
        let mut command = Command::new(&self.program);
        command
            .arg("--dir")
            .arg(&self.config.snapshot_dir)
            .arg("--interval-ms")
            .arg(self.config.interval_ms().to_string())
            .arg(selector);
        command
    }

    /// Start a viewer for `selector` without waiting for it
    pub fn spawn(&self, selector: &str) -> Result<Child, LaunchError> {
        tracing::info!(selector, program = %self.program.display(), "launching viewer");

        self.command(selector)
            .spawn()
            .map_err(|source| LaunchError::Spawn {
                selector: selector.to_string(),
                source,
            })
    }

    /// Run a viewer for `selector` and wait for it to finish
    pub fn run(&self, selector: &str) -> Result<(), LaunchError> {
        let status = self
            .spawn(selector)?
            .wait()
            .map_err(|source| LaunchError::Spawn {
                selector: selector.to_string(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(LaunchError::Exited {
                selector: selector.to_string(),
                status,
            })
        }
    }
}
