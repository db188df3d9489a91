//! Optional consistency checks over a resolved theme.
//!
//! None of these findings are errors: a dangling animation simply does not
//! apply once the generator emits it. Callers decide whether to surface them.

use rustc_hash::FxHashSet;
use std::fmt::{Display, Formatter};
use tracing::warn;

use crate::animation::AnimationShorthand;
use crate::category::TokenCategory;
use crate::resolve::ResolvedTheme;
use crate::value::TokenValue;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LintFinding {
    /// An animation names keyframes that the theme does not define
    DanglingAnimation { animation: String, keyframes: String },
    /// Two stops of one keyframes definition land on the same position
    DuplicateKeyframeOffset { keyframes: String, offset: String },
    /// A keyframes definition with no stops
    EmptyKeyframes { keyframes: String },
}

impl Display for LintFinding {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DanglingAnimation {
                animation,
                keyframes,
            } => write!(
                f,
                "animation `{animation}` references undefined keyframes `{keyframes}`"
            ),
            Self::DuplicateKeyframeOffset { keyframes, offset } => {
                write!(f, "keyframes `{keyframes}` repeat offset `{offset}`")
            }
            Self::EmptyKeyframes { keyframes } => {
                write!(f, "keyframes `{keyframes}` have no stops")
            }
        }
    }
}

impl ResolvedTheme {
    /// Run every check and return the findings, animations first.
    pub fn lint(&self) -> Vec<LintFinding> {
        let mut findings = Vec::new();
        let keyframes = self.category(TokenCategory::Keyframes);

        for (name, value) in self.category(TokenCategory::Animation) {
            for referenced in referenced_keyframes(value) {
                if !keyframes.contains_key(&referenced) {
                    findings.push(LintFinding::DanglingAnimation {
                        animation: name.clone(),
                        keyframes: referenced,
                    });
                }
            }
        }

        for (name, value) in keyframes {
            let Some(kf) = value.as_keyframes() else {
                continue;
            };
            if kf.is_empty() {
                findings.push(LintFinding::EmptyKeyframes {
                    keyframes: name.clone(),
                });
                continue;
            }

            let mut seen = FxHashSet::default();
            for stop in kf.stops() {
                // Unparseable selectors are left for the generator to report
                let Some(positions) = stop.offset.positions() else {
                    continue;
                };
                if positions.iter().any(|p| !seen.insert(p.to_bits())) {
                    findings.push(LintFinding::DuplicateKeyframeOffset {
                        keyframes: name.clone(),
                        offset: stop.offset.as_str().to_string(),
                    });
                }
            }
        }

        findings
    }

    /// [`lint`](Self::lint), logging each finding at warn level.
    pub fn lint_and_log(&self) -> Vec<LintFinding> {
        let findings = self.lint();
        for finding in &findings {
            warn!("{finding}");
        }
        findings
    }
}

/// Keyframes names referenced by an animation token value
pub fn referenced_keyframes(value: &TokenValue) -> Vec<String> {
    value
        .as_css()
        .map(|css| {
            AnimationShorthand::parse_list(css)
                .into_iter()
                .map(|a| a.name)
                .collect()
        })
        .unwrap_or_default()
}
