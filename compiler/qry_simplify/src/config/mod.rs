//! Simplifier configuration.
//!
//! # Environment Variables
//!
//! - `QRY_SIMPLIFY_RULES`: comma-separated rule groups to enable
//!   (`fold`, `zero`, `methods`, `all`, `none`). Default: `all`. An empty
//!   value keeps the default.
//! - `QRY_SIMPLIFY_PASSES`: maximum number of whole-graph passes
//!   (a positive integer), or `fixpoint` to iterate until the graph stops
//!   changing and fail if it does not within [`FIXPOINT_PASS_LIMIT`] passes.
//!   Default: `1`, a single pass.
//!
//! Example: `QRY_SIMPLIFY_RULES=zero,methods QRY_SIMPLIFY_PASSES=4`

use std::sync::OnceLock;

use bitflags::bitflags;

bitflags! {
    /// Rule groups the simplifier applies.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct RuleSet: u8 {
        /// Fold `eq`/`ne` between two integer literals.
        const FOLD_CONSTANTS = 1 << 0;
        /// Rewrite comparisons against the integer literal zero.
        const ZERO_COMPARISONS = 1 << 1;
        /// Collapse recognized comparison methods into comparison nodes.
        const METHOD_COMPARISONS = 1 << 2;
    }
}

impl RuleSet {
    /// Parse a comma-separated list of rule group names.
    ///
    /// Unknown names are skipped with a warning.
    pub fn parse(s: &str) -> Self {
        let mut rules = RuleSet::empty();
        for part in s.split(',') {
            match part.trim().to_ascii_lowercase().as_str() {
                "fold" => rules |= RuleSet::FOLD_CONSTANTS,
                "zero" => rules |= RuleSet::ZERO_COMPARISONS,
                "methods" => rules |= RuleSet::METHOD_COMPARISONS,
                "all" => rules |= RuleSet::all(),
                "none" | "" => {}
                other => tracing::warn!(rule = other, "ignoring unknown simplifier rule group"),
            }
        }
        rules
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        RuleSet::all()
    }
}

/// Pass cap used by `QRY_SIMPLIFY_PASSES=fixpoint`.
pub const FIXPOINT_PASS_LIMIT: u32 = 16;

/// Settings for one simplification run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SimplifyConfig {
    /// Rule groups to apply.
    pub rules: RuleSet,
    /// Maximum number of whole-graph passes. `1` is the single-pass contract:
    /// a node a rule produces is not simplified again in the same run.
    pub max_passes: u32,
    /// Fail with `NoFixedPoint` if the last allowed pass still changed the graph.
    pub require_fixed_point: bool,
}

impl SimplifyConfig {
    /// A single pass with every rule enabled.
    pub const fn new() -> Self {
        Self {
            rules: RuleSet::all(),
            max_passes: 1,
            require_fixed_point: false,
        }
    }

    /// Iterate until the graph stops changing, up to `max_passes`.
    #[must_use]
    pub const fn fixed_point(mut self, max_passes: u32) -> Self {
        self.max_passes = max_passes;
        self.require_fixed_point = true;
        self
    }

    /// Replace the enabled rule groups.
    #[must_use]
    pub const fn with_rules(mut self, rules: RuleSet) -> Self {
        self.rules = rules;
        self
    }

    /// Build a configuration from explicit variable values.
    ///
    /// Split out from [`from_env`](Self::from_env) so parsing is testable
    /// without touching the process environment.
    pub fn from_vars(rules: Option<&str>, passes: Option<&str>) -> Self {
        let mut config = Self::new();
        if let Some(rules) = rules {
            if rules.trim().is_empty() {
                tracing::warn!("empty QRY_SIMPLIFY_RULES; keeping all rule groups");
            } else {
                config.rules = RuleSet::parse(rules);
            }
        }
        if let Some(passes) = passes {
            let passes = passes.trim();
            if passes.eq_ignore_ascii_case("fixpoint") {
                config = config.fixed_point(FIXPOINT_PASS_LIMIT);
            } else {
                match passes.parse::<u32>() {
                    Ok(n) if n > 0 => config.max_passes = n,
                    _ => tracing::warn!(passes, "ignoring invalid QRY_SIMPLIFY_PASSES"),
                }
            }
        }
        config
    }

    /// Read the configuration from `QRY_SIMPLIFY_RULES` and `QRY_SIMPLIFY_PASSES`.
    pub fn from_env() -> Self {
        let rules = std::env::var("QRY_SIMPLIFY_RULES").ok();
        let passes = std::env::var("QRY_SIMPLIFY_PASSES").ok();
        Self::from_vars(rules.as_deref(), passes.as_deref())
    }

    /// Process-wide configuration, read from the environment on first use.
    pub fn global() -> &'static SimplifyConfig {
        static GLOBAL_CONFIG: OnceLock<SimplifyConfig> = OnceLock::new();
        GLOBAL_CONFIG.get_or_init(Self::from_env)
    }
}

impl Default for SimplifyConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
