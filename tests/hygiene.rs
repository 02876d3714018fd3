//! Hygiene: source budgets checked at test time.
//!
//! Every rule scans the production files under `src/` (test files excluded)
//! for one antipattern and fails when the count exceeds its budget. Budgets
//! only ratchet down. Adding a hit means removing another one first.

use std::fs;
use std::path::{Path, PathBuf};

struct Rule {
    pattern: &'static str,
    /// Lines that also contain this are not counted (`eprintln!` vs `println!`).
    unless: Option<&'static str>,
    max: usize,
    hint: &'static str,
}

impl Rule {
    const fn new(pattern: &'static str, max: usize, hint: &'static str) -> Self {
        Self { pattern, unless: None, max, hint }
    }

    const fn unless(mut self, other: &'static str) -> Self {
        self.unless = Some(other);
        self
    }

    fn matches(&self, line: &str) -> bool {
        line.contains(self.pattern) && self.unless.is_none_or(|other| !line.contains(other))
    }
}

/// Process aborts in a library embedded in someone else's UI loop.
const PANICS: &[Rule] = &[
    Rule::new(".unwrap()", 0, "propagate or fall back instead"),
    Rule::new(".expect(", 0, "propagate or fall back instead"),
    Rule::new("panic!(", 0, ""),
    Rule::new("unreachable!(", 0, ""),
    Rule::new("todo!(", 0, "finish the stub"),
    Rule::new("unimplemented!(", 0, "finish the stub"),
];

/// Errors thrown away without a look.
const DISCARDS: &[Rule] = &[
    Rule::new("let _ =", 0, "log or handle the value"),
    // Config lookups: a missing or unparseable variable means "use the default".
    Rule::new(".ok()", 2, "only config parsing may drop an error"),
];

/// Output goes through `tracing`.
const OUTPUT: &[Rule] = &[
    Rule::new("println!(", 0, "use tracing").unless("eprintln!("),
    Rule::new("eprintln!(", 0, "use tracing"),
    Rule::new("dbg!(", 0, "remove before committing"),
];

const STRUCTURE: &[Rule] = &[Rule::new("#[allow(dead_code)]", 0, "delete the dead code")];

struct SourceFile {
    path: PathBuf,
    content: String,
}

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect(Path::new(env!("CARGO_MANIFEST_DIR")).join("src").as_path(), &mut files);
    assert!(!files.is_empty(), "no sources found under src/");
    files
}

fn collect(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for path in entries.flatten().map(|entry| entry.path()) {
        if path.is_dir() {
            collect(&path, out);
            continue;
        }
        let is_source = path.extension().is_some_and(|ext| ext == "rs");
        let is_test = path.file_stem().is_some_and(|stem| stem.to_string_lossy().ends_with("_test"));
        if is_source && !is_test {
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path, content });
            }
        }
    }
}

/// Check every rule and report all overruns at once.
fn enforce(rules: &[Rule]) {
    let files = source_files();
    let mut overruns = Vec::new();

    for rule in rules {
        let hits: Vec<(String, usize)> = files
            .iter()
            .map(|file| (file.path.display().to_string(), file.content.lines().filter(|l| rule.matches(l)).count()))
            .filter(|(_, count)| *count > 0)
            .collect();
        let found: usize = hits.iter().map(|(_, count)| count).sum();
        if found > rule.max {
            let listing: String = hits.iter().map(|(path, count)| format!("\n    {path}: {count}")).collect();
            overruns.push(format!("`{}`: found {found}, max {}. {}{listing}", rule.pattern, rule.max, rule.hint));
        }
    }

    assert!(overruns.is_empty(), "hygiene budget exceeded:\n  {}", overruns.join("\n  "));
}

#[test]
fn panic_budgets() {
    enforce(PANICS);
}

#[test]
fn discard_budgets() {
    enforce(DISCARDS);
}

#[test]
fn output_budgets() {
    enforce(OUTPUT);
}

#[test]
fn structure_budgets() {
    enforce(STRUCTURE);
}

#[test]
fn println_rule_skips_eprintln() {
    let rule = &OUTPUT[0];
    assert!(rule.matches(r#"println!("x");"#));
    assert!(!rule.matches(r#"eprintln!("x");"#));
}
