use regex::Regex;

/// Line patterns that suggest a logical module boundary.
///
/// Matched against the raw line during the boundary scan and against the
/// trimmed neighbor lines during range expansion.
pub const BOUNDARY_PATTERNS: &[&str] = &[
    // Comment-based boundaries
    r"^# [-─═]{2,}.*[-─═]{2,}",            // Ruled dividers: # ----------
    r"^# ╭.*╮",                            // Boxed header, top rule
    r"^# │.*│",                            // Boxed header, labeled middle
    r"^# ╰.*╯",                            // Boxed header, bottom rule
    r"^#{3,}\s*[A-Za-z0-9_ ]+\s*#{3,}",    // Title dividers: ### Section ###
    // Code-based boundaries
    r"^class [A-Z][a-zA-Z0-9]*(\(.*\))?:", // Class definitions
];

/// A decorator line opens a boundary only when the next line defines a
/// function; the scan checks the following line itself.
pub const DECORATOR_PATTERN: &str = r"^@\w+";

/// Compiled boundary patterns, built once per run and injected into the
/// components that need them so tests can substitute alternate tables.
#[derive(Debug, Clone)]
pub struct BoundaryPatterns {
    patterns: Vec<Regex>,
    decorator: Regex,
}

impl BoundaryPatterns {
    pub fn standard() -> Result<Self, regex::Error> {
        Self::from_patterns(BOUNDARY_PATTERNS)
    }

    pub fn from_patterns(patterns: &[&str]) -> Result<Self, regex::Error> {
        let compiled = patterns
            .iter()
            .map(|p| Regex::new(p))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            patterns: compiled,
            decorator: Regex::new(DECORATOR_PATTERN)?,
        })
    }

    /// True when the line matches any divider or definition pattern.
    pub fn matches(&self, line: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(line))
    }

    /// True when `line` opens a decorated function group, given the line
    /// that follows it.
    pub fn matches_decorated_opener(&self, line: &str, next_line: Option<&str>) -> bool {
        self.decorator.is_match(line)
            && next_line
                .map(|next| next.trim_start().starts_with("def "))
                .unwrap_or(false)
    }
}

/// Keyword table mapping purpose categories to name substrings, used when a
/// module carries neither a docstring nor a leading comment.
///
/// Category order is significant: the first matching category wins.
pub const PURPOSE_INDICATORS: &[(&str, &[&str])] = &[
    ("util", &["utility", "helper", "tool", "common"]),
    ("model", &["model", "entity", "data class", "schema", "structure"]),
    ("service", &["service", "manager", "handler", "processor"]),
    ("controller", &["controller", "view", "endpoint", "route"]),
    ("config", &["config", "setting", "parameter", "environment"]),
];

#[derive(Debug, Clone)]
pub struct PurposeIndicators {
    categories: Vec<(String, Vec<String>)>,
}

impl PurposeIndicators {
    pub fn standard() -> Self {
        Self::from_table(PURPOSE_INDICATORS)
    }

    pub fn from_table(table: &[(&str, &[&str])]) -> Self {
        Self {
            categories: table
                .iter()
                .map(|(category, keywords)| {
                    (
                        category.to_string(),
                        keywords.iter().map(|k| k.to_string()).collect(),
                    )
                })
                .collect(),
        }
    }

    /// First category with a keyword occurring in the lowercased module name.
    pub fn category_for(&self, name: &str) -> Option<&str> {
        let lowered = name.to_lowercase();
        self.categories
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| lowered.contains(k.as_str())))
            .map(|(category, _)| category.as_str())
    }
}

/// Emoji decorations for generated module docstrings, chosen by substring
/// match against the module name or its purpose.
pub const MODULE_EMOJIS: &[(&str, &str)] = &[
    ("util", "🛠️"),
    ("helper", "🛠️"),
    ("model", "📊"),
    ("data", "📊"),
    ("service", "⚙️"),
    ("manager", "⚙️"),
    ("controller", "🎮"),
    ("config", "🔧"),
    ("test", "🧪"),
];

pub const DEFAULT_MODULE_EMOJI: &str = "📦";

/// Pick an emoji for a generated module header.
pub fn module_emoji(name: &str, purpose: &str) -> &'static str {
    let name = name.to_lowercase();
    let purpose = purpose.to_lowercase();
    MODULE_EMOJIS
        .iter()
        .find(|(key, _)| name.contains(key) || purpose.contains(key))
        .map(|(_, emoji)| *emoji)
        .unwrap_or(DEFAULT_MODULE_EMOJI)
}
