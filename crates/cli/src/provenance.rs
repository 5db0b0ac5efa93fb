use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

const SIDECAR_SUFFIX: &str = ".provenance.json";
const DEFAULT_STEM: &str = "artifact";

/// What produced an artifact: code revision, subcommand, parameters, run tag.
pub struct Provenance {
    pub code_rev: String,
    pub command: &'static str,
    pub params: Value,
    pub tag: Option<String>,
}

impl Provenance {
    pub fn new(command: &'static str, params: Value) -> Self {
        Self {
            code_rev: code_rev(),
            command,
            params,
            tag: None,
        }
    }

    pub fn with_tag(mut self, tag: Option<String>) -> Self {
        self.tag = tag;
        self
    }

    /// JSON document shared by sidecars and `report`.
    pub fn to_json(&self, outputs: &[String]) -> Value {
        json!({
            "code_rev": self.code_rev,
            "geohull_version": geohull::VERSION,
            "command": self.command,
            "tag": self.tag,
            "params": self.params,
            "outputs": outputs,
        })
    }

    /// `dir/hull.json` → `dir/hull.provenance.json`; extensionless names keep
    /// their full name as stem.
    pub fn sidecar_path(artifact: &Path) -> PathBuf {
        let stem = artifact
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_STEM.to_string());
        artifact.with_file_name(format!("{stem}{SIDECAR_SUFFIX}"))
    }

    /// Write the sidecar for `artifact`, recording the caller's location.
    #[track_caller]
    pub fn write_sidecar(&self, artifact: &Path) -> Result<PathBuf> {
        let sidecar = Self::sidecar_path(artifact);
        let callsite = Location::caller();
        let mut doc = self.to_json(&[artifact.to_string_lossy().into_owned()]);
        doc["callsite"] = json!({ "file": callsite.file(), "line": callsite.line() });
        fs::write(&sidecar, serde_json::to_vec_pretty(&doc)?)
            .with_context(|| format!("writing {}", sidecar.display()))?;
        Ok(sidecar)
    }
}

/// Build-time `GIT_COMMIT`, then runtime `GIT_COMMIT`, then `git rev-parse HEAD`.
fn code_rev() -> String {
    let from_env = option_env!("GIT_COMMIT")
        .filter(|rev| !rev.is_empty())
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok().filter(|rev| !rev.is_empty()));
    if let Some(rev) = from_env {
        return rev;
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn sidecar_sits_next_to_the_artifact() {
        assert_eq!(
            Provenance::sidecar_path(Path::new("runs/a/hull.json")),
            Path::new("runs/a/hull.provenance.json")
        );
        assert_eq!(
            Provenance::sidecar_path(Path::new("cloud")),
            Path::new("cloud.provenance.json")
        );
    }

    #[test]
    fn sidecar_records_command_tag_and_output() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("hull.json");
        fs::write(&artifact, "{}").unwrap();
        let prov = Provenance::new("prune", json!({"tolerance": "auto"}))
            .with_tag(Some("flight-42".into()));
        let path = prov.write_sidecar(&artifact).unwrap();
        let parsed: Value = serde_json::from_slice(&fs::read(path).unwrap()).unwrap();
        assert_eq!(parsed["command"], "prune");
        assert_eq!(parsed["tag"], "flight-42");
        assert_eq!(parsed["params"]["tolerance"], "auto");
        assert_eq!(parsed["code_rev"], prov.code_rev.as_str());
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
        assert!(parsed["callsite"]["line"].as_u64().is_some());
    }
}
