//! Label selectors
//!
//! Listers filter entities post-retrieval with a [`Selector`], a
//! conjunction of [`Requirement`]s evaluated against an entity's label
//! map. Selectors use the Kubernetes label-selector grammar:
//!
//! | Form | Matches when |
//! |------|--------------|
//! | `key=value`, `key==value` | label present with that value |
//! | `key!=value` | label absent or different |
//! | `key in (a,b)` | label present with one of the values |
//! | `key notin (a,b)` | label absent or none of the values |
//! | `key` | label present |
//! | `!key` | label absent |
//! | `key>N`, `key<N` | label present and integer compare holds |
//!
//! The empty selector matches everything.

mod parser;
pub mod requirement;
pub mod selector;

pub use requirement::{Operator, Requirement};
pub use selector::Selector;

pub use crate::resource::Labels;

const MAX_NAME_LEN: usize = 63;
const MAX_PREFIX_LEN: usize = 253;

/// Validate a label key (`[prefix/]name`)
pub fn validate_key(key: &str) -> Result<(), String> {
    let (prefix, name) = match key.split_once('/') {
        Some((prefix, name)) => (Some(prefix), name),
        None => (None, key),
    };

    if let Some(prefix) = prefix {
        validate_prefix(prefix).map_err(|reason| format!("key {:?}: {}", key, reason))?;
    }

    if name.is_empty() {
        return Err(format!("key {:?}: name part must be non-empty", key));
    }
    validate_name(name).map_err(|reason| format!("key {:?}: {}", key, reason))
}

/// Validate a label value (empty is allowed)
pub fn validate_value(value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Ok(());
    }
    validate_name(value).map_err(|reason| format!("value {:?}: {}", value, reason))
}

fn validate_name(name: &str) -> Result<(), String> {
    if name.len() > MAX_NAME_LEN {
        return Err(format!("must be no more than {} characters", MAX_NAME_LEN));
    }

    let allowed = |c: char| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.');
    if !name.chars().all(allowed) {
        return Err("must consist of alphanumerics, '-', '_' or '.'".to_string());
    }

    let first_last_ok = name.chars().next().is_some_and(|c| c.is_ascii_alphanumeric())
        && name.chars().last().is_some_and(|c| c.is_ascii_alphanumeric());
    if !first_last_ok {
        return Err("must start and end with an alphanumeric character".to_string());
    }

    Ok(())
}

/// DNS-1123 subdomain
fn validate_prefix(prefix: &str) -> Result<(), String> {
    if prefix.is_empty() {
        return Err("prefix part must be non-empty".to_string());
    }
    if prefix.len() > MAX_PREFIX_LEN {
        return Err(format!("prefix must be no more than {} characters", MAX_PREFIX_LEN));
    }

    for segment in prefix.split('.') {
        let ok = !segment.is_empty()
            && segment
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
            && !segment.starts_with('-')
            && !segment.ends_with('-');
        if !ok {
            return Err("prefix must be a lowercase DNS subdomain".to_string());
        }
    }

    Ok(())
}
