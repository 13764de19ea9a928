// src/checker/local.rs
// =============================================================================
// Turns a raw local link (as written in an HTML file) into an absolute,
// canonical filesystem path.
//
// Steps:
// 1. Drop the `#fragment` (everything from the first '#')
// 2. Join what is left onto the directory of the file that contains the link
// 3. Canonicalize: follow symlinks and collapse `.` / `..`
//
// Step 3 has to work for files that do NOT exist, because a missing target is
// exactly what we want to report. `std::fs::canonicalize` fails on those, so
// `canonicalize_lenient` resolves the existing prefix on disk and then
// collapses the rest of the path by hand.
// =============================================================================

use std::path::{Component, Path, PathBuf};

/// Removes everything from the first `#` on.
///
/// "page.html#section" -> "page.html", "#top" -> ""
pub fn strip_fragment(link: &str) -> &str {
    match link.find('#') {
        Some(index) => &link[..index],
        None => link,
    }
}

/// Resolves `link` relative to the directory containing `current_file`.
///
/// A link that is empty once its fragment is gone (`#top`, `""`) resolves to
/// that directory itself. A leading `/` does not escape to the filesystem
/// root: the link is still placed below the current file's directory.
pub fn resolve_local_link(current_file: &Path, link: &str) -> PathBuf {
    let base = current_file.parent().unwrap_or_else(|| Path::new("/"));
    let relative = strip_fragment(link).trim_start_matches(['/', '\\']);

    if relative.is_empty() {
        return canonicalize_lenient(base);
    }

    canonicalize_lenient(&base.join(relative))
}

/// Canonicalizes `path` even when (part of) it does not exist.
///
/// The longest prefix that exists on disk is resolved with
/// `std::fs::canonicalize` (symlinks followed); the remainder is appended with
/// `.` dropped and `..` popping one level.
pub fn canonicalize_lenient(path: &Path) -> PathBuf {
    let mut resolved = PathBuf::new();
    let mut on_disk = true;

    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => resolved.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            Component::Normal(name) => {
                let candidate = resolved.join(name);
                if on_disk {
                    match std::fs::canonicalize(&candidate) {
                        Ok(real) => resolved = real,
                        Err(_) => {
                            on_disk = false;
                            resolved = candidate;
                        }
                    }
                } else {
                    resolved = candidate;
                }
            }
        }
    }

    resolved
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is Path::components()?
//    - Splits a path into pieces: root, normal names, `.` and `..`
//    - Lets us handle each piece on its own instead of doing string surgery
//
// 2. Why does trim_start_matches take ['/', '\\']?
//    - An array of chars works as a pattern: strip any of them
// -----------------------------------------------------------------------------
