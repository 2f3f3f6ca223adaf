//! Path parsing and validation.

use crate::core::{FsError, Result};

pub const SEPARATOR: char = '/';
pub const ROOT: &str = "/";

/// Returns true if `name` is a legal component: non-empty, only `a`-`z` and `.`.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_lowercase() || c == '.')
}

/// Splits an absolute path into its components.
///
/// `/` yields an empty vector. Errors with `InvalidPath` if `path` is empty, is not
/// absolute, has an empty component (`//` or a trailing `/`) or a component with
/// characters other than lowercase ASCII letters and `.`.
pub fn split_path(path: &str) -> Result<Vec<&str>> {
    if path.is_empty() {
        return Err(FsError::invalid_path(path, "empty"));
    }
    let Some(rest) = path.strip_prefix(SEPARATOR) else {
        return Err(FsError::invalid_path(path, "must start with '/'"));
    };
    if rest.is_empty() {
        return Ok(Vec::new());
    }

    let mut components = Vec::new();
    for component in rest.split(SEPARATOR) {
        if component.is_empty() {
            return Err(FsError::invalid_path(path, "empty component"));
        }
        if !is_valid_name(component) {
            return Err(FsError::invalid_path(
                path,
                format!("'{component}' may contain only lowercase letters and '.'"),
            ));
        }
        components.push(component);
    }
    Ok(components)
}

/// Builds an absolute path from components.
pub fn join_path<S: AsRef<str>>(components: &[S]) -> String {
    if components.is_empty() {
        return ROOT.to_string();
    }
    let mut path = String::new();
    for component in components {
        path.push(SEPARATOR);
        path.push_str(component.as_ref());
    }
    path
}
