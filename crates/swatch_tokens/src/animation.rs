//! Animation shorthand parsing
//!
//! Animation tokens are stored as opaque CSS strings. Callers that need the
//! referenced keyframes name or the timing metadata can parse the shorthand:
//! `name duration timing-function delay iteration-count direction fill-mode`,
//! in any order, as CSS allows.
//!
//! Parsing never fails hard: unrecognized parts are ignored, and a shorthand
//! without a name (e.g. `none`, `inherit`) yields `None`. Time values are
//! never taken as the name.

use std::time::Duration;

/// Number of times an animation runs
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum IterationCount {
    Count(f32),
    Infinite,
}

impl Default for IterationCount {
    fn default() -> Self {
        Self::Count(1.0)
    }
}

/// Animation direction
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AnimationDirection {
    #[default]
    Normal,
    Reverse,
    Alternate,
    AlternateReverse,
}

impl AnimationDirection {
    fn parse(input: &str) -> Option<Self> {
        match input.to_ascii_lowercase().as_str() {
            "normal" => Some(Self::Normal),
            "reverse" => Some(Self::Reverse),
            "alternate" => Some(Self::Alternate),
            "alternate-reverse" => Some(Self::AlternateReverse),
            _ => None,
        }
    }
}

/// Animation fill mode
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FillMode {
    #[default]
    None,
    Forwards,
    Backwards,
    Both,
}

impl FillMode {
    fn parse(input: &str) -> Option<Self> {
        match input.to_ascii_lowercase().as_str() {
            "none" => Some(Self::None),
            "forwards" => Some(Self::Forwards),
            "backwards" => Some(Self::Backwards),
            "both" => Some(Self::Both),
            _ => None,
        }
    }
}

/// Animation delay. A negative delay starts the animation part way through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delay {
    /// Wait this long before the first iteration
    Wait(Duration),
    /// Start as if this much time had already elapsed
    Skip(Duration),
}

/// A single parsed `animation` shorthand
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnimationShorthand {
    /// Name of the referenced keyframes
    pub name: String,
    pub duration: Option<Duration>,
    pub delay: Option<Delay>,
    /// Timing function as written (`ease-out`, `cubic-bezier(0, 0, 0.2, 1)`, ...)
    pub timing_function: Option<String>,
    pub iteration_count: IterationCount,
    pub direction: AnimationDirection,
    pub fill_mode: FillMode,
}

impl AnimationShorthand {
    /// Parse a single shorthand. Returns `None` when no keyframes name is present.
    ///
    /// ```
    /// use swatch_tokens::AnimationShorthand;
    ///
    /// let anim = AnimationShorthand::parse("fadeIn 0.5s ease-in-out forwards").unwrap();
    /// assert_eq!(anim.name, "fadeIn");
    /// assert_eq!(anim.timing_function.as_deref(), Some("ease-in-out"));
    /// ```
    pub fn parse(value: &str) -> Option<Self> {
        let mut anim = Self::default();
        let mut duration_set = false;

        for part in split_top_level(value, char::is_whitespace) {
            if is_timing_function(part) {
                anim.timing_function = Some(part.to_string());
                continue;
            }

            if let Some(direction) = AnimationDirection::parse(part) {
                anim.direction = direction;
                continue;
            }

            if let Some(fill_mode) = FillMode::parse(part) {
                anim.fill_mode = fill_mode;
                continue;
            }

            if part.eq_ignore_ascii_case("infinite") {
                anim.iteration_count = IterationCount::Infinite;
                continue;
            }
            if let Ok(count) = part.parse::<f32>() {
                anim.iteration_count = IterationCount::Count(count);
                continue;
            }

            // First time value is the duration, the second is the delay.
            // Only the delay may be negative.
            if let Some(time) = parse_time(part) {
                match time {
                    Delay::Wait(time) if !duration_set => {
                        anim.duration = Some(time);
                        duration_set = true;
                    }
                    delay if anim.delay.is_none() => {
                        anim.delay = Some(delay);
                    }
                    _ => {}
                }
                continue;
            }

            if is_css_wide_keyword(part) {
                continue;
            }

            if anim.name.is_empty() {
                anim.name = part.to_string();
            }
        }

        if anim.name.is_empty() {
            return None;
        }
        Some(anim)
    }

    /// Parse a comma-separated list of shorthands, skipping entries without a name.
    pub fn parse_list(value: &str) -> Vec<Self> {
        split_top_level(value, |c| c == ',')
            .into_iter()
            .filter_map(Self::parse)
            .collect()
    }
}

fn is_timing_function(part: &str) -> bool {
    let lower = part.to_ascii_lowercase();
    matches!(
        lower.as_str(),
        "linear" | "ease" | "ease-in" | "ease-out" | "ease-in-out" | "step-start" | "step-end"
    ) || lower.starts_with("cubic-bezier(")
        || lower.starts_with("steps(")
        || lower.starts_with("linear(")
}

fn is_css_wide_keyword(part: &str) -> bool {
    matches!(
        part.to_ascii_lowercase().as_str(),
        "inherit" | "initial" | "unset" | "revert" | "revert-layer"
    )
}

/// Parse a signed time; negative values come back as [`Delay::Skip`].
fn parse_time(input: &str) -> Option<Delay> {
    let nanos = if let Some(ms) = input.strip_suffix("ms") {
        ms.parse::<f64>().ok()? * 1_000_000.0
    } else {
        input.strip_suffix('s')?.parse::<f64>().ok()? * 1_000_000_000.0
    };
    if !nanos.is_finite() {
        return None;
    }
    let magnitude = Duration::from_nanos(nanos.abs().round() as u64);
    if nanos.is_sign_negative() && magnitude > Duration::ZERO {
        Some(Delay::Skip(magnitude))
    } else {
        Some(Delay::Wait(magnitude))
    }
}

/// Split on `sep` outside of parentheses, dropping empty pieces.
fn split_top_level(input: &str, sep: impl Fn(char) -> bool) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (idx, c) in input.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            _ if depth == 0 && sep(c) => {
                parts.push(&input[start..idx]);
                start = idx + c.len_utf8();
            }
            _ => {}
        }
    }
    parts.push(&input[start..]);

    parts
        .into_iter()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let anim = AnimationShorthand::parse("slideInLeft 0.8s ease-out forwards").unwrap();
        assert_eq!(anim.name, "slideInLeft");
        assert_eq!(anim.duration, Some(Duration::from_millis(800)));
        assert_eq!(anim.timing_function.as_deref(), Some("ease-out"));
        assert_eq!(anim.fill_mode, FillMode::Forwards);
        assert_eq!(anim.iteration_count, IterationCount::Count(1.0));
    }

    #[test]
    fn test_parse_infinite() {
        let anim = AnimationShorthand::parse("bounce 3s infinite").unwrap();
        assert_eq!(anim.name, "bounce");
        assert_eq!(anim.duration, Some(Duration::from_secs(3)));
        assert_eq!(anim.iteration_count, IterationCount::Infinite);
    }

    #[test]
    fn test_parse_cubic_bezier_is_one_part() {
        let anim =
            AnimationShorthand::parse("ping 1s cubic-bezier(0, 0, 0.2, 1) infinite").unwrap();
        assert_eq!(anim.name, "ping");
        assert_eq!(
            anim.timing_function.as_deref(),
            Some("cubic-bezier(0, 0, 0.2, 1)")
        );
    }

    #[test]
    fn test_parse_duration_then_delay() {
        let anim = AnimationShorthand::parse("spin 300ms linear 100ms 2 alternate").unwrap();
        assert_eq!(anim.duration, Some(Duration::from_millis(300)));
        assert_eq!(anim.delay, Some(Delay::Wait(Duration::from_millis(100))));
        assert_eq!(anim.iteration_count, IterationCount::Count(2.0));
        assert_eq!(anim.direction, AnimationDirection::Alternate);
    }

    #[test]
    fn test_parse_negative_delay_before_name() {
        let anim = AnimationShorthand::parse("1s -0.5s spin linear").unwrap();
        assert_eq!(anim.name, "spin");
        assert_eq!(anim.duration, Some(Duration::from_secs(1)));
        assert_eq!(anim.delay, Some(Delay::Skip(Duration::from_millis(500))));
        assert_eq!(anim.timing_function.as_deref(), Some("linear"));
    }

    #[test]
    fn test_parse_negative_delay_after_name() {
        let anim = AnimationShorthand::parse("spin 1s -250ms linear").unwrap();
        assert_eq!(anim.name, "spin");
        assert_eq!(anim.delay, Some(Delay::Skip(Duration::from_millis(250))));
    }

    #[test]
    fn test_parse_time_never_becomes_name() {
        // A leading negative time can only be a delay; the name still follows.
        let anim = AnimationShorthand::parse("-2s fade 1s 3s").unwrap();
        assert_eq!(anim.name, "fade");
        assert_eq!(anim.delay, Some(Delay::Skip(Duration::from_secs(2))));
        assert_eq!(anim.duration, Some(Duration::from_secs(1)));
        assert!(AnimationShorthand::parse("1s 2s").is_none());
    }

    #[test]
    fn test_parse_css_wide_keywords_have_no_reference() {
        for keyword in ["inherit", "initial", "unset", "revert", "revert-layer", "INHERIT"] {
            assert!(AnimationShorthand::parse(keyword).is_none(), "{keyword}");
        }
    }

    #[test]
    fn test_parse_none_has_no_reference() {
        assert!(AnimationShorthand::parse("none").is_none());
        assert!(AnimationShorthand::parse("").is_none());
    }

    #[test]
    fn test_parse_list() {
        let list = AnimationShorthand::parse_list(
            "spin 1s linear infinite, ping 1s cubic-bezier(0, 0, 0.2, 1) infinite",
        );
        let names: Vec<&str> = list.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["spin", "ping"]);
    }
}
