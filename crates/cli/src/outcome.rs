use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::Path;

/// Result of one library call, as printed or written by the CLI.
#[derive(Debug, Serialize)]
pub struct Outcome {
    pub op: &'static str,
    pub inputs: Vec<f64>,
    pub value: Value,
}

/// A computed side length or a right-angle verdict.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Length(f64),
    Verdict(bool),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Length(x) => write!(f, "{x}"),
            Value::Verdict(b) => write!(f, "{b}"),
        }
    }
}

impl Outcome {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the outcome as pretty JSON, creating parent directories.
    pub fn write_json(&self, out: &Path) -> Result<()> {
        if let Some(parent) = out.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating output dir {}", parent.display()))?;
            }
        }
        fs::write(out, serde_json::to_vec_pretty(self)?)
            .with_context(|| format!("writing {}", out.display()))?;
        Ok(())
    }
}
