//! File generation on disk, with dry-run support and output cleaning.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::core::types::TransformationResult;

/// Files preserved by default when cleaning an output directory.
pub const DEFAULT_KEEP_PATTERNS: &[&str] = &["__init__.py", "README.md"];

/// Write every generated file, creating parent directories as needed. In
/// dry-run mode nothing is written; the returned list describes intended
/// paths instead.
pub fn generate_files(result: &TransformationResult, dry_run: bool) -> Result<Vec<String>> {
    let mut generated = Vec::with_capacity(result.files.len());

    if !dry_run {
        fs::create_dir_all(&result.output_path).with_context(|| {
            format!(
                "failed to create output directory {}",
                result.output_path.display()
            )
        })?;
    }

    for file in &result.files {
        if dry_run {
            generated.push(format!("[DRY RUN] Would create: {}", file.path.display()));
            continue;
        }
        if let Some(parent) = file.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
        fs::write(&file.path, &file.content)
            .with_context(|| format!("failed to write {}", file.path.display()))?;
        generated.push(file.path.display().to_string());
    }

    Ok(generated)
}

/// Remove everything from the output directory except the keep list.
/// Returns the removed (or would-be removed) paths.
pub fn clean_output_directory(
    output_dir: &Path,
    keep_patterns: &[&str],
    dry_run: bool,
) -> Result<Vec<String>> {
    let mut removed = Vec::new();
    if !output_dir.exists() {
        return Ok(removed);
    }

    let entries = fs::read_dir(output_dir)
        .with_context(|| format!("failed to read output directory {}", output_dir.display()))?;

    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().to_string();
        if keep_patterns.contains(&name.as_str()) {
            continue;
        }

        let is_dir = path.is_dir();
        if dry_run {
            if is_dir {
                removed.push(format!("[DRY RUN] Would remove directory: {}/", path.display()));
            } else {
                removed.push(format!("[DRY RUN] Would remove: {}", path.display()));
            }
            continue;
        }

        if is_dir {
            fs::remove_dir_all(&path)
                .with_context(|| format!("failed to remove directory {}", path.display()))?;
            removed.push(format!("{}/ (directory)", path.display()));
        } else {
            fs::remove_file(&path)
                .with_context(|| format!("failed to remove {}", path.display()))?;
            removed.push(path.display().to_string());
        }
    }

    Ok(removed)
}
