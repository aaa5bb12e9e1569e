//! Boundary detection: locating candidate module ranges in one source file.
//!
//! Boundaries come from two scans: stylized comment dividers over the line
//! array, and public top-level definitions over the tree. The merged list is
//! grouped by proximity and expanded into non-overlapping line ranges.

use regex::Regex;

use crate::core::config::BoundaryPatterns;
use crate::core::types::ModuleInfo;
use crate::parsing::{extract_text, unwrap_decorated, SourceUnit};

/// Gap (in lines) at which two boundaries stop belonging to the same module.
/// Smaller values over-split, larger values under-split.
pub const PROXIMITY_THRESHOLD: usize = 10;

pub struct BoundaryDetector<'a> {
    patterns: &'a BoundaryPatterns,
    naming: NamingPatterns,
}

impl<'a> BoundaryDetector<'a> {
    pub fn new(patterns: &'a BoundaryPatterns) -> Result<Self, regex::Error> {
        Ok(Self {
            patterns,
            naming: NamingPatterns::new()?,
        })
    }

    /// Detect candidate modules. A file with no boundaries at all still
    /// yields exactly one module spanning the whole file.
    pub fn detect(&self, unit: &SourceUnit) -> Vec<ModuleInfo> {
        let mut boundaries = self.section_boundaries(&unit.lines);
        boundaries.extend(self.definition_boundaries(unit));
        boundaries.sort_unstable();
        boundaries.dedup();

        let groups = group_boundaries(&boundaries, PROXIMITY_THRESHOLD);

        let mut modules = if groups.is_empty() {
            vec![self.whole_file_module(unit)]
        } else {
            self.modules_from_groups(&groups, &unit.lines)
        };
        dedupe_names(&mut modules);
        modules
    }

    /// Scan lines for divider-style comment patterns and class/decorator
    /// openers. Indices are 0-based.
    fn section_boundaries(&self, lines: &[String]) -> Vec<usize> {
        let mut boundaries = Vec::new();
        for (i, line) in lines.iter().enumerate() {
            if self.patterns.matches(line)
                || self
                    .patterns
                    .matches_decorated_opener(line, lines.get(i + 1).map(String::as_str))
            {
                boundaries.push(i);
            }
        }
        boundaries
    }

    /// Scan the tree for top-level class/function definitions whose names do
    /// not start with an underscore.
    fn definition_boundaries(&self, unit: &SourceUnit) -> Vec<usize> {
        let source = unit.text.as_bytes();
        let root = unit.tree.root_node();
        let mut boundaries = Vec::new();

        let mut cursor = root.walk();
        for child in root.children(&mut cursor) {
            let definition = unwrap_decorated(child);
            if !matches!(
                definition.kind(),
                "function_definition" | "class_definition"
            ) {
                continue;
            }
            if let Some(name) = definition.child_by_field_name("name") {
                if !extract_text(&name, source).starts_with('_') {
                    boundaries.push(definition.start_position().row);
                }
            }
        }
        boundaries
    }

    fn modules_from_groups(&self, groups: &[Vec<usize>], lines: &[String]) -> Vec<ModuleInfo> {
        let mut modules: Vec<ModuleInfo> = Vec::with_capacity(groups.len());

        for (i, group) in groups.iter().enumerate() {
            let mut start = group[0];
            let mut end = *group.last().unwrap_or(&start);

            start = self.expand_start(start, lines);
            end = self.expand_end(end, lines);

            // Ranges must never overlap; backward expansion stops at the
            // previous module's end. A group fully swallowed by its
            // predecessor's forward expansion is dropped.
            if let Some(prev) = modules.last() {
                start = start.max(prev.end_line + 1);
            }
            if start >= lines.len() {
                continue;
            }
            end = end.clamp(start, lines.len() - 1);

            let content = lines[start..=end].join("\n");
            let name = self
                .extract_module_name(&content)
                .unwrap_or_else(|| format!("module_{i}"));
            modules.push(ModuleInfo::new(name, start, end, content));
        }
        modules
    }

    /// Absorb leading code belonging to this boundary: walk backward while
    /// the preceding line is non-blank and not itself a divider.
    fn expand_start(&self, mut start: usize, lines: &[String]) -> usize {
        while start > 0 {
            let prev = lines[start - 1].trim();
            if prev.is_empty() || self.patterns.matches(prev) {
                break;
            }
            start -= 1;
        }
        start
    }

    /// Walk forward until a new boundary or a double blank line; a single
    /// blank line followed by code is absorbed.
    fn expand_end(&self, mut end: usize, lines: &[String]) -> usize {
        while end + 1 < lines.len() {
            let next = lines[end + 1].trim();
            if !next.is_empty() && self.patterns.matches(next) {
                break;
            }
            if next.is_empty()
                && lines
                    .get(end + 2)
                    .map(|line| line.trim().is_empty())
                    .unwrap_or(true)
            {
                break;
            }
            end += 1;
        }
        end
    }

    fn whole_file_module(&self, unit: &SourceUnit) -> ModuleInfo {
        let end = unit.total_lines().saturating_sub(1);
        let content = unit.text.clone();
        let name = self
            .extract_module_name(&content)
            .unwrap_or_else(|| "module_0".to_string());
        ModuleInfo::new(name, 0, end, content)
    }

    /// Derive a module name from slice content, in priority order: first
    /// capitalized class name, first boxed section-header label, first
    /// lowercase function name.
    pub fn extract_module_name(&self, content: &str) -> Option<String> {
        if let Some(captures) = self.naming.class.captures(content) {
            return Some(captures[1].to_lowercase());
        }
        if let Some(captures) = self.naming.header.captures(content) {
            return Some(captures[1].trim().to_lowercase().replace(' ', "_"));
        }
        if let Some(captures) = self.naming.function.captures(content) {
            return Some(captures[1].to_string());
        }
        None
    }
}

struct NamingPatterns {
    class: Regex,
    header: Regex,
    function: Regex,
}

impl NamingPatterns {
    fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            class: Regex::new(r"class ([A-Z][a-zA-Z0-9_]*)")?,
            header: Regex::new(r"# [│╭╰][ ]*([A-Za-z ]+?)[ ]*[│╮╯]")?,
            function: Regex::new(r"def ([a-z][a-zA-Z0-9_]*)\(")?,
        })
    }
}

/// Walk the sorted boundary list, starting a new group whenever the gap to
/// the previous boundary reaches the threshold.
pub fn group_boundaries(boundaries: &[usize], threshold: usize) -> Vec<Vec<usize>> {
    let mut groups: Vec<Vec<usize>> = Vec::new();
    let mut current: Vec<usize> = Vec::new();

    for &boundary in boundaries {
        match current.last() {
            Some(&last) if boundary - last >= threshold => {
                groups.push(std::mem::take(&mut current));
                current.push(boundary);
            }
            _ => current.push(boundary),
        }
    }
    if !current.is_empty() {
        groups.push(current);
    }
    groups
}

/// Two distinct ranges can independently resolve to the same derived name.
/// Disambiguate deterministically by first-occurrence order with a numeric
/// suffix on repeats.
fn dedupe_names(modules: &mut [ModuleInfo]) {
    let mut seen: std::collections::HashMap<String, usize> = std::collections::HashMap::new();
    for module in modules.iter_mut() {
        let count = seen.entry(module.name.clone()).or_insert(0);
        *count += 1;
        if *count > 1 {
            module.name = format!("{}_{}", module.name, count);
        }
    }
}
