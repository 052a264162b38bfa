//! Hygiene — enforces coding standards at test time
//!
//! Scans the crate's production sources for antipatterns. Each pattern
//! has a budget (zero); to add an occurrence you must first remove one.

use std::fs;
use std::path::Path;

const BUDGETS: &[(&str, usize)] = &[
    // Panics crash the whole client.
    (".unwrap()", 0),
    (".expect(", 0),
    ("panic!(", 0),
    ("unreachable!(", 0),
    ("todo!(", 0),
    ("unimplemented!(", 0),
    // Silent loss: errors discarded without inspection.
    ("let _ =", 0),
    (".ok()", 0),
    // Structure.
    ("#[allow(dead_code)]", 0),
];

struct SourceFile {
    path: String,
    content: String,
}

/// Collect production `.rs` files from `src/`, excluding sibling test files.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    assert!(!files.is_empty(), "no sources found; run from the crate root");
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

#[test]
fn antipattern_budgets() {
    let files = source_files();
    let mut violations = Vec::new();
    for &(pattern, budget) in BUDGETS {
        let hits: Vec<String> = files
            .iter()
            .flat_map(|file| {
                file.content
                    .lines()
                    .enumerate()
                    .filter(|(_, line)| line.contains(pattern))
                    .map(|(n, _)| format!("  {}:{}", file.path, n + 1))
                    .collect::<Vec<_>>()
            })
            .collect();
        if hits.len() > budget {
            violations.push(format!(
                "{pattern} budget exceeded: found {}, max {budget}\n{}",
                hits.len(),
                hits.join("\n")
            ));
        }
    }
    assert!(violations.is_empty(), "\n{}", violations.join("\n"));
}
