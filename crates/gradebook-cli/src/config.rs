//! Grading policy resolution.
//!
//! The policy comes from a preset (`--scale`), optionally replaced by a JSON
//! policy file and adjusted by a threshold override. Whatever the source,
//! the result is validated before the session starts.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use gradebook_model::GradingPolicy;

/// Load a grading policy from a JSON file.
///
/// The file holds a plain object with `min_grade`, `max_grade`, and
/// `pass_threshold` fields.
pub fn load_policy_file(path: &Path) -> Result<GradingPolicy> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("read policy file {}", path.display()))?;
    let policy: GradingPolicy = serde_json::from_str(&text)
        .with_context(|| format!("parse policy file {}", path.display()))?;
    policy
        .validate()
        .with_context(|| format!("invalid policy in {}", path.display()))?;
    Ok(policy)
}

/// Resolve the effective policy from preset, optional file, and optional
/// threshold override.
pub fn resolve_policy(
    preset: GradingPolicy,
    policy_file: Option<&Path>,
    pass_threshold: Option<f64>,
) -> Result<GradingPolicy> {
    let mut policy = match policy_file {
        Some(path) => load_policy_file(path)?,
        None => preset,
    };
    if let Some(threshold) = pass_threshold {
        policy = policy.with_pass_threshold(threshold);
    }
    policy.validate().context("invalid grading policy")?;
    Ok(policy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_passes_through_untouched() {
        let policy = resolve_policy(GradingPolicy::five_point(), None, None).unwrap();
        assert_eq!(policy, GradingPolicy::five_point());
    }

    #[test]
    fn threshold_override_applies_to_preset() {
        let policy = resolve_policy(GradingPolicy::percent(), None, Some(70.0)).unwrap();
        assert_eq!(policy.pass_threshold, 70.0);
    }

    #[test]
    fn out_of_range_override_is_rejected() {
        let result = resolve_policy(GradingPolicy::percent(), None, Some(150.0));
        assert!(result.is_err());
    }
}
