use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_default_is_single_pass_all_rules() {
    let config = SimplifyConfig::default();
    assert_eq!(config.rules, RuleSet::all());
    assert_eq!(config.max_passes, 1);
    assert!(!config.require_fixed_point);
}

#[test]
fn test_parse_rule_groups() {
    assert_eq!(RuleSet::parse("fold"), RuleSet::FOLD_CONSTANTS);
    assert_eq!(
        RuleSet::parse("zero, METHODS"),
        RuleSet::ZERO_COMPARISONS | RuleSet::METHOD_COMPARISONS
    );
    assert_eq!(RuleSet::parse("all"), RuleSet::all());
    assert_eq!(RuleSet::parse("none"), RuleSet::empty());
    assert_eq!(RuleSet::parse(""), RuleSet::empty());
}

#[test]
fn test_parse_skips_unknown_groups() {
    assert_eq!(RuleSet::parse("fold,bogus"), RuleSet::FOLD_CONSTANTS);
}

#[test]
fn test_from_vars_defaults() {
    assert_eq!(SimplifyConfig::from_vars(None, None), SimplifyConfig::new());
}

#[test]
fn test_from_vars_empty_rules_keep_default() {
    assert_eq!(SimplifyConfig::from_vars(Some(""), None).rules, RuleSet::all());
    assert_eq!(SimplifyConfig::from_vars(Some("  "), None).rules, RuleSet::all());
    assert_eq!(
        SimplifyConfig::from_vars(Some("none"), None).rules,
        RuleSet::empty()
    );
}

#[test]
fn test_from_vars_passes() {
    let config = SimplifyConfig::from_vars(Some("zero"), Some("3"));
    assert_eq!(config.rules, RuleSet::ZERO_COMPARISONS);
    assert_eq!(config.max_passes, 3);
    assert!(!config.require_fixed_point);
}

#[test]
fn test_from_vars_fixpoint() {
    let config = SimplifyConfig::from_vars(None, Some("FixPoint"));
    assert_eq!(config.max_passes, FIXPOINT_PASS_LIMIT);
    assert!(config.require_fixed_point);
}

#[test]
fn test_from_vars_invalid_passes_kept_default() {
    assert_eq!(SimplifyConfig::from_vars(None, Some("0")).max_passes, 1);
    assert_eq!(SimplifyConfig::from_vars(None, Some("many")).max_passes, 1);
}

#[test]
fn test_builders() {
    let config = SimplifyConfig::new()
        .with_rules(RuleSet::FOLD_CONSTANTS)
        .fixed_point(5);
    assert_eq!(config.rules, RuleSet::FOLD_CONSTANTS);
    assert_eq!(config.max_passes, 5);
    assert!(config.require_fixed_point);
}

#[test]
fn test_global_is_cached() {
    let first = SimplifyConfig::global();
    let second = SimplifyConfig::global();
    assert!(std::ptr::eq(first, second));
}
