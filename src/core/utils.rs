use std::path::{Path, PathBuf};

/// Convert text to snake_case, normalizing camelCase, spaces, and hyphens.
pub fn to_snake_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 4);
    for ch in text.chars() {
        if ch.is_uppercase() {
            out.push('_');
            for lower in ch.to_lowercase() {
                out.push(lower);
            }
        } else if ch == ' ' || ch == '-' {
            out.push('_');
        } else {
            out.push(ch);
        }
    }

    // Collapse runs of underscores and trim the edges
    let mut collapsed = String::with_capacity(out.len());
    let mut prev_underscore = false;
    for ch in out.chars() {
        if ch == '_' {
            if !prev_underscore && !collapsed.is_empty() {
                collapsed.push('_');
            }
            prev_underscore = true;
        } else {
            collapsed.push(ch);
            prev_underscore = false;
        }
    }
    collapsed.trim_end_matches('_').to_string()
}

/// Convert text to PascalCase via snake_case normalization.
pub fn to_pascal_case(text: &str) -> String {
    to_snake_case(text)
        .split('_')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join("")
}

/// Replace underscores with spaces and capitalize each word, e.g.
/// `data_store` becomes `Data Store`.
pub fn to_title_words(name: &str) -> String {
    name.split('_')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Capitalize the first character, lowercasing the rest.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Derive a package name from a source file path: the snake-cased file stem.
pub fn derive_package_name(source_path: &Path) -> String {
    let stem = source_path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    to_snake_case(&stem)
}

/// Derive an output directory: a package-named directory next to the source.
pub fn derive_output_dir(source_path: &Path, package_name: Option<&str>) -> PathBuf {
    let parent = source_path.parent().unwrap_or_else(|| Path::new("."));
    let name = package_name
        .map(|n| n.to_string())
        .unwrap_or_else(|| derive_package_name(source_path));
    parent.join(name)
}
