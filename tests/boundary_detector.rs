use modsplit::analyzer::boundaries::{group_boundaries, BoundaryDetector, PROXIMITY_THRESHOLD};
use modsplit::core::config::BoundaryPatterns;
use modsplit::parsing::{parse_fragment, SourceUnit};

fn unit(source: &str) -> SourceUnit {
    let tree = parse_fragment(source).unwrap();
    SourceUnit::new(source.to_string(), tree)
}

fn detector(patterns: &BoundaryPatterns) -> BoundaryDetector<'_> {
    BoundaryDetector::new(patterns).unwrap()
}

#[test]
fn grouping_splits_at_threshold_and_merges_below() {
    let groups = group_boundaries(&[2, 5, 20, 22], PROXIMITY_THRESHOLD);
    assert_eq!(groups, vec![vec![2, 5], vec![20, 22]]);
}

#[test]
fn grouping_handles_empty_input() {
    assert!(group_boundaries(&[], PROXIMITY_THRESHOLD).is_empty());
}

#[test]
fn class_name_wins_over_section_header() {
    let patterns = BoundaryPatterns::standard().unwrap();
    let detector = detector(&patterns);
    let content = "# │  Widgets  │\nclass Foo:\n    pass\n";
    assert_eq!(detector.extract_module_name(content), Some("foo".to_string()));
}

#[test]
fn section_header_wins_over_function_name() {
    let patterns = BoundaryPatterns::standard().unwrap();
    let detector = detector(&patterns);
    let content = "# │  String Processing  │\ndef parse(text):\n    pass\n";
    assert_eq!(
        detector.extract_module_name(content),
        Some("string_processing".to_string())
    );
}

#[test]
fn function_name_used_when_nothing_else_matches() {
    let patterns = BoundaryPatterns::standard().unwrap();
    let detector = detector(&patterns);
    let content = "def parse(text):\n    pass\n";
    assert_eq!(
        detector.extract_module_name(content),
        Some("parse".to_string())
    );
}

#[test]
fn file_without_boundaries_yields_one_module_covering_everything() {
    let patterns = BoundaryPatterns::standard().unwrap();
    let detector = detector(&patterns);
    let source = "x = 1\ny = 2\nz = x + y\n";
    let unit = unit(source);

    let modules = detector.detect(&unit);
    assert_eq!(modules.len(), 1);
    assert_eq!(modules[0].start_line, 0);
    assert_eq!(modules[0].end_line, unit.total_lines() - 1);
    assert_eq!(modules[0].name, "module_0");
}

#[test]
fn divider_comments_and_definitions_become_boundaries() {
    let source = concat!(
        "# ------------------------------------\n", // 0
        "# Parsing\n",                              // 1
        "# ------------------------------------\n", // 2
        "\n",                                       // 3
        "def parse(text):\n",                       // 4
        "    return text\n",                        // 5
        "\n",                                       // 6
        "\n",                                       // 7
        "# ------------------------------------\n", // 8
        "# Rendering\n",                            // 9
        "# ------------------------------------\n", // 10
        "\n",                                       // 11
        "def render(tree):\n",                      // 12
        "    return str(tree)\n",                   // 13
    );
    let patterns = BoundaryPatterns::standard().unwrap();
    let detector = detector(&patterns);
    let unit = unit(source);

    let modules = detector.detect(&unit);
    // Boundary gap between the two sections is below the threshold, so the
    // whole file collapses into one module here.
    assert_eq!(modules.len(), 1);
    assert_eq!(modules[0].name, "parse");
}

#[test]
fn distant_sections_split_into_separate_modules() {
    let mut source = String::new();
    source.push_str("def alpha(x):\n    return x\n");
    for _ in 0..12 {
        source.push_str("# filler that binds to the first section\n");
    }
    source.push_str("\n\n");
    source.push_str("def beta(y):\n    return y\n");

    let patterns = BoundaryPatterns::standard().unwrap();
    let detector = detector(&patterns);
    let unit = unit(&source);

    let modules = detector.detect(&unit);
    assert_eq!(modules.len(), 2);
    assert_eq!(modules[0].name, "alpha");
    assert_eq!(modules[1].name, "beta");

    // Ranges never overlap
    assert!(modules[0].end_line < modules[1].start_line);
}

#[test]
fn duplicate_derived_names_get_numeric_suffixes() {
    let mut source = String::new();
    source.push_str("class Thing:\n    pass\n");
    source.push_str("\n\n");
    for _ in 0..10 {
        source.push('\n');
    }
    source.push_str("class Thing:\n    pass\n");

    let patterns = BoundaryPatterns::standard().unwrap();
    let detector = detector(&patterns);
    let unit = unit(&source);

    let modules = detector.detect(&unit);
    assert_eq!(modules.len(), 2);
    assert_eq!(modules[0].name, "thing");
    assert_eq!(modules[1].name, "thing_2");
}

#[test]
fn decorator_followed_by_def_opens_a_boundary() {
    let patterns = BoundaryPatterns::standard().unwrap();
    assert!(patterns.matches_decorated_opener("@cached", Some("def compute():")));
    assert!(!patterns.matches_decorated_opener("@cached", Some("class Compute:")));
    assert!(!patterns.matches_decorated_opener("@cached", None));
}
