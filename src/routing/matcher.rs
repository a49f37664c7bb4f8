//! Path matching logic.
//!
//! # Responsibilities
//! - Compare a concrete request path against a route pattern
//! - Extract named parameter bindings on a match
//!
//! # Design Decisions
//! - Literal segments are case-sensitive
//! - An empty pattern segment is a wildcard for that position
//! - Parameter segments use either `{name}` or `:name`
//! - Segment counts must match exactly (no trailing wildcards)
//! - Single pass, no backtracking, no regex

use std::collections::HashMap;

/// Split a path into its segments, ignoring leading and trailing slashes.
///
/// The bare paths `/` and `` have zero segments.
fn segments(path: &str) -> Vec<&str> {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        return Vec::new();
    }
    trimmed.split('/').collect()
}

/// Returns the parameter name if the pattern segment is a parameter marker.
///
/// A segment is a parameter when it starts with `:` or is wrapped in braces;
/// anything else (including a lone `:`, an empty `{}`, or an unclosed `{x`)
/// is treated as a literal.
fn param_name(segment: &str) -> Option<&str> {
    if let Some(name) = segment.strip_prefix(':') {
        if !name.is_empty() {
            return Some(name);
        }
    }
    if let Some(name) = segment
        .strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'))
    {
        if !name.is_empty() {
            return Some(name);
        }
    }
    None
}

/// Returns true if the request path matches the route pattern.
///
/// Both sides are split on `/` after trimming outer slashes. Segment counts
/// must be equal; per position, the pattern segment must be empty, a
/// parameter marker, or literally equal to the request segment.
pub fn path_matches(request_path: &str, pattern: &str) -> bool {
    let request = segments(request_path);
    let route = segments(pattern);

    if request.len() != route.len() {
        return false;
    }

    route
        .iter()
        .zip(&request)
        .all(|(pat, req)| pat.is_empty() || param_name(pat).is_some() || pat == req)
}

/// Extract parameter bindings from a request path for a matching pattern.
///
/// Returns one entry per parameter-marker segment in the pattern, using the
/// corresponding request segment as the value. Literal and wildcard segments
/// contribute nothing. Callers are expected to have checked
/// [`path_matches`] first.
pub fn extract_params(request_path: &str, pattern: &str) -> HashMap<String, String> {
    segments(pattern)
        .into_iter()
        .zip(segments(request_path))
        .filter_map(|(pat, req)| param_name(pat).map(|name| (name.to_string(), req.to_string())))
        .collect()
}

// =============================================================================
// Tests
// =============================================================================
