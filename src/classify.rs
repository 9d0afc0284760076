//! Mapping of changed file paths to known module names

use std::collections::HashSet;

/// Modules eligible for the build matrix. One entry per top-level
/// directory that is an independently deployable unit.
pub const KNOWN_MODULES: &[&str] = &[
    "event-statistics",
    "grpc-locations",
    "rest-fights",
    "rest-heroes",
    "rest-narration",
    "rest-villains",
    "ui-super-heroes",
];

/// Lines in `deploy/` directories are generated by the build itself and
/// would make unrelated modules look changed, so they never count.
fn should_include(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty() && !trimmed.contains("deploy/")
}

/// Map raw changed-file lines to the set of known modules they belong to.
///
/// Blank lines (the per-commit separators in `git log --name-only`
/// output) and deploy paths are dropped; the first path segment of each
/// surviving line is matched exactly against `known`. The result is
/// deduplicated, keeping the order in which each module was first seen.
pub fn changed_modules(lines: &[String], known: &[&str]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut modules = Vec::new();

    for line in lines {
        if !should_include(line) {
            continue;
        }

        let trimmed = line.trim();
        let candidate = match trimmed.split_once('/') {
            Some((dir, _)) => dir,
            None => trimmed,
        };

        if let Some(&name) = known.iter().find(|&&m| m == candidate) {
            if seen.insert(name) {
                modules.push(name.to_string());
            }
        }
    }

    modules
}
