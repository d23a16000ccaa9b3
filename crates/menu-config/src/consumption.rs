//! Unused-key guard.
//!
//! "Consumed pointers" are JSON Pointer prefixes actually read by
//! [`crate::MenuConfig::from_json`]. A leaf under any consumed prefix is
//! consumed; every other leaf is reported as unused (usually a typo such as
//! `catalog/defualt_limit`).

use anyhow::{bail, Result};
use serde_json::Value;
use std::collections::BTreeSet;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnusedKeyPolicy {
    Warn,
    Fail,
}

#[derive(Debug, Clone)]
pub struct UnusedKeyReport {
    /// Consumed prefixes used for this analysis (sorted, unique)
    pub consumed_prefixes: Vec<String>,
    /// Unused leaf pointers (sorted, unique)
    pub unused_leaf_pointers: Vec<String>,
}

impl UnusedKeyReport {
    pub fn is_clean(&self) -> bool {
        self.unused_leaf_pointers.is_empty()
    }
}

/// Must match what `MenuConfig::from_json` reads; keep the two in step.
pub fn consumed_pointers() -> &'static [&'static str] {
    &[
        "/catalog/path",
        "/catalog/default_limit",
        "/assets/root",
        "/assets/placeholder_image",
        "/order/timestamp_format",
        "/export/default_file_name",
        "/log/level",
    ]
}

/// `Warn` logs each unused leaf and returns the report; `Fail` errors when any exist.
pub fn report_unused_keys(config_json: &Value, policy: UnusedKeyPolicy) -> Result<UnusedKeyReport> {
    let consumed: BTreeSet<String> = consumed_pointers()
        .iter()
        .map(|p| normalize_pointer(p))
        .collect();
    let consumed_prefixes: Vec<String> = consumed.into_iter().collect();

    let mut leaves: Vec<String> = Vec::new();
    collect_leaf_pointers(config_json, "", &mut leaves);

    let mut unused: Vec<String> = leaves
        .into_iter()
        .filter(|lp| !consumed_prefixes.iter().any(|cp| is_prefix_pointer(cp, lp)))
        .collect();
    unused.sort();
    unused.dedup();

    let report = UnusedKeyReport {
        consumed_prefixes,
        unused_leaf_pointers: unused,
    };

    if report.is_clean() {
        return Ok(report);
    }

    match policy {
        UnusedKeyPolicy::Fail => bail!(
            "CONFIG_UNUSED_KEYS: {} unused config leaf key(s) detected. First few: {:?}",
            report.unused_leaf_pointers.len(),
            report.unused_leaf_pointers.iter().take(12).collect::<Vec<_>>()
        ),
        UnusedKeyPolicy::Warn => {
            for leaf in &report.unused_leaf_pointers {
                warn!(leaf = %leaf, "unused config key");
            }
            Ok(report)
        }
    }
}

fn normalize_pointer(p: &str) -> String {
    let mut s = p.trim().to_string();
    if s.is_empty() {
        return "/".to_string();
    }
    if !s.starts_with('/') {
        s.insert(0, '/');
    }
    while s.ends_with('/') && s.len() > 1 {
        s.pop();
    }
    s
}

/// "/a/b" covers "/a/b" and "/a/b/c" but not "/a/bc".
fn is_prefix_pointer(prefix: &str, leaf: &str) -> bool {
    if prefix == "/" || leaf == prefix {
        return true;
    }
    leaf.strip_prefix(prefix)
        .map(|rest| rest.starts_with('/'))
        .unwrap_or(false)
}

fn collect_leaf_pointers(v: &Value, prefix: &str, out: &mut Vec<String>) {
    match v {
        Value::Object(map) => {
            for (k, vv) in map.iter() {
                let next = format!("{}/{}", prefix, k.replace('~', "~0").replace('/', "~1"));
                collect_leaf_pointers(vv, &next, out);
            }
        }
        Value::Array(arr) => {
            for (i, vv) in arr.iter().enumerate() {
                collect_leaf_pointers(vv, &format!("{}/{}", prefix, i), out);
            }
        }
        _ if prefix.is_empty() => {}
        _ => out.push(prefix.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn clean_config_has_no_unused_keys() {
        let v = json!({"catalog": {"default_limit": 5}, "log": {"level": "info"}});
        let r = report_unused_keys(&v, UnusedKeyPolicy::Fail).unwrap();
        assert!(r.is_clean());
    }

    #[test]
    fn typo_is_reported_in_warn_mode() {
        let v = json!({"catalog": {"defualt_limit": 5}});
        let r = report_unused_keys(&v, UnusedKeyPolicy::Warn).unwrap();
        assert_eq!(r.unused_leaf_pointers, vec!["/catalog/defualt_limit".to_string()]);
    }

    #[test]
    fn typo_fails_in_fail_mode() {
        let v = json!({"export": {"path": "x"}});
        let err = report_unused_keys(&v, UnusedKeyPolicy::Fail).unwrap_err();
        assert!(format!("{err}").contains("CONFIG_UNUSED_KEYS"));
    }

    #[test]
    fn prefix_boundary_is_respected() {
        assert!(is_prefix_pointer("/log/level", "/log/level"));
        assert!(is_prefix_pointer("/log", "/log/level"));
        assert!(!is_prefix_pointer("/log/level", "/log/levels"));
    }

    #[test]
    fn empty_tree_has_no_leaves() {
        let mut out = Vec::new();
        collect_leaf_pointers(&json!({}), "", &mut out);
        assert!(out.is_empty());
    }
}
