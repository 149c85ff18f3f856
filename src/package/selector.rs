//! Glob selection of installed packages across both store roots.
//!
//! The matcher is deliberately its own small utility over directory-entry
//! names rather than a filesystem globbing primitive: the only wildcard is
//! `*`, and matching happens against entries the runtime enumerates, so it
//! works identically against a mock.

use log::debug;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::package::StoreLayout;
use crate::runtime::Runtime;

/// Match `name` against `pattern`. `*` matches any run of characters,
/// including the empty run; every other character is literal. Dot-prefixed
/// names only match dot-prefixed patterns, the way shell globbing hides
/// them.
pub fn wildcard_match(pattern: &str, name: &str) -> bool {
    if name.starts_with('.') && !pattern.starts_with('.') {
        return false;
    }

    let pattern: Vec<char> = pattern.chars().collect();
    let name: Vec<char> = name.chars().collect();

    // Iterative backtracking over the most recent `*`.
    let (mut p, mut n) = (0, 0);
    let mut retry: Option<(usize, usize)> = None;
    while n < name.len() {
        if p < pattern.len() && pattern[p] == '*' {
            retry = Some((p, n));
            p += 1;
        } else if p < pattern.len() && pattern[p] == name[n] {
            p += 1;
            n += 1;
        } else if let Some((star_p, star_n)) = retry {
            p = star_p + 1;
            n = star_n + 1;
            retry = Some((star_p, star_n + 1));
        } else {
            return false;
        }
    }
    while p < pattern.len() && pattern[p] == '*' {
        p += 1;
    }
    p == pattern.len()
}

/// Installed-package directories under one store root whose basename
/// matches `pattern`. A missing or unreadable root yields no matches;
/// stray files in a root are invisible.
pub fn matches_in_root<R: Runtime>(runtime: &R, root: &Path, pattern: &str) -> Vec<PathBuf> {
    if !runtime.is_dir(root) {
        return Vec::new();
    }
    let entries = match runtime.read_dir(root) {
        Ok(entries) => entries,
        Err(e) => {
            debug!("skipping unreadable store root {:?}: {}", root, e);
            return Vec::new();
        }
    };
    entries
        .into_iter()
        .filter(|path| {
            path.file_name()
                .and_then(OsStr::to_str)
                .is_some_and(|name| wildcard_match(pattern, name))
        })
        .filter(|path| runtime.is_dir(path))
        .collect()
}

/// Selection across both roots, debuginfo matches first. An empty pattern
/// selects nothing — destructive callers must never match everything by
/// accident.
pub fn select<R: Runtime>(runtime: &R, layout: &StoreLayout, pattern: &str) -> Vec<PathBuf> {
    if pattern.is_empty() {
        return Vec::new();
    }
    let mut selected = Vec::new();
    for root in layout.roots() {
        selected.extend(matches_in_root(runtime, root, pattern));
    }
    selected
}

/// List-mode pattern normalization: no input means everything, a literal
/// name means substring search, a pattern with `*` is taken verbatim.
pub fn normalize_list_pattern(name: Option<&str>) -> String {
    match name {
        None | Some("") => "*".to_string(),
        Some(name) if name.contains('*') => name.to_string(),
        Some(name) => format!("*{name}*"),
    }
}
