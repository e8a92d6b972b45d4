//! `<output>.provenance.json`: what produced a hull file and how it went.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use hull2d::{Algorithm, Hull};

/// One `run` of a hull builder.
#[derive(Debug, Serialize)]
pub struct RunRecord {
    pub algo: &'static str,
    pub input: PathBuf,
    pub points: usize,
    pub hull_vertices: usize,
    pub area: f64,
    pub elapsed_s: f64,
}

impl RunRecord {
    pub fn new(algo: Algorithm, input: &Path, points: usize, hull: &Hull, elapsed_s: f64) -> Self {
        Self {
            algo: algo.name(),
            input: input.to_path_buf(),
            points,
            hull_vertices: hull.len(),
            area: hull.signed_area(),
            elapsed_s,
        }
    }
}

#[derive(Serialize)]
struct Sidecar<'a> {
    code_rev: String,
    version: &'static str,
    run: &'a RunRecord,
    output: &'a Path,
}

/// Write the sidecar next to `output` and return its path.
pub fn write_sidecar(output: &Path, run: &RunRecord) -> Result<PathBuf> {
    let path = sidecar_path(output);
    let doc = Sidecar {
        code_rev: current_git_rev(),
        version: hull2d::VERSION,
        run,
        output,
    };
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

/// `out/output_brute.txt` → `out/output_brute.provenance.json`.
fn sidecar_path(output: &Path) -> PathBuf {
    let stem = output
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "hull".to_string());
    output.with_file_name(format!("{stem}.provenance.json"))
}

/// `GIT_COMMIT` (build time, then run time), else `git rev-parse HEAD`, else "unknown".
pub fn current_git_rev() -> String {
    option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|rev| !rev.is_empty())
        .or_else(|| {
            let out = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
            out.status
                .success()
                .then(|| String::from_utf8_lossy(&out.stdout).trim().to_string())
        })
        .unwrap_or_else(|| "unknown".to_string())
}
