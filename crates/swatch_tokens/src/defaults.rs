//! Built-in framework defaults
//!
//! The default token set a theme extends: color keywords and two palettes,
//! system font stacks, the shadow and spacing scales, border widths, scale
//! factors, and the stock `spin` / `ping` / `pulse` / `bounce` animations.

use crate::category::TokenCategory;
use crate::set::{TokenMap, TokenSet};
use crate::value::{Keyframes, TokenValue};

/// The complete default token set
pub fn framework_defaults() -> TokenSet {
    let mut set = TokenSet::new();
    set.set_category(TokenCategory::Color, colors());
    set.set_category(TokenCategory::FontFamily, font_families());
    set.set_category(TokenCategory::Shadow, shadows());
    set.set_category(TokenCategory::BackgroundImage, background_images());
    set.set_category(TokenCategory::Spacing, spacing());
    set.set_category(TokenCategory::BorderWidth, border_widths());
    set.set_category(TokenCategory::Scale, scales());
    set.set_category(TokenCategory::Animation, animations());
    set.set_category(TokenCategory::Keyframes, keyframes());
    set
}

const GRAY: [(&str, &str); 11] = [
    ("50", "#f9fafb"),
    ("100", "#f3f4f6"),
    ("200", "#e5e7eb"),
    ("300", "#d1d5db"),
    ("400", "#9ca3af"),
    ("500", "#6b7280"),
    ("600", "#4b5563"),
    ("700", "#374151"),
    ("800", "#1f2937"),
    ("900", "#111827"),
    ("950", "#030712"),
];

const INDIGO: [(&str, &str); 11] = [
    ("50", "#eef2ff"),
    ("100", "#e0e7ff"),
    ("200", "#c7d2fe"),
    ("300", "#a5b4fc"),
    ("400", "#818cf8"),
    ("500", "#6366f1"),
    ("600", "#4f46e5"),
    ("700", "#4338ca"),
    ("800", "#3730a3"),
    ("900", "#312e81"),
    ("950", "#1e1b4b"),
];

fn colors() -> TokenMap {
    let mut map: TokenMap = [
        ("inherit", "inherit"),
        ("current", "currentColor"),
        ("transparent", "transparent"),
        ("black", "#000"),
        ("white", "#fff"),
    ]
    .into_iter()
    .collect();

    for (palette, shades) in [("gray", GRAY), ("indigo", INDIGO)] {
        for (shade, hex) in shades {
            map.insert(format!("{palette}-{shade}"), hex);
        }
    }
    map
}

fn font_families() -> TokenMap {
    [
        (
            "sans",
            TokenValue::font_stack([
                "ui-sans-serif",
                "system-ui",
                "sans-serif",
                "\"Apple Color Emoji\"",
                "\"Segoe UI Emoji\"",
                "\"Segoe UI Symbol\"",
                "\"Noto Color Emoji\"",
            ]),
        ),
        (
            "serif",
            TokenValue::font_stack([
                "ui-serif",
                "Georgia",
                "Cambria",
                "\"Times New Roman\"",
                "Times",
                "serif",
            ]),
        ),
        (
            "mono",
            TokenValue::font_stack([
                "ui-monospace",
                "SFMono-Regular",
                "Menlo",
                "Monaco",
                "Consolas",
                "\"Liberation Mono\"",
                "\"Courier New\"",
                "monospace",
            ]),
        ),
    ]
    .into_iter()
    .collect()
}

fn shadows() -> TokenMap {
    [
        ("sm", "0 1px 2px 0 rgb(0 0 0 / 0.05)"),
        ("DEFAULT", "0 1px 3px 0 rgb(0 0 0 / 0.1), 0 1px 2px -1px rgb(0 0 0 / 0.1)"),
        ("md", "0 4px 6px -1px rgb(0 0 0 / 0.1), 0 2px 4px -2px rgb(0 0 0 / 0.1)"),
        ("lg", "0 10px 15px -3px rgb(0 0 0 / 0.1), 0 4px 6px -4px rgb(0 0 0 / 0.1)"),
        ("xl", "0 20px 25px -5px rgb(0 0 0 / 0.1), 0 8px 10px -6px rgb(0 0 0 / 0.1)"),
        ("2xl", "0 25px 50px -12px rgb(0 0 0 / 0.25)"),
        ("inner", "inset 0 2px 4px 0 rgb(0 0 0 / 0.05)"),
        ("none", "none"),
    ]
    .into_iter()
    .collect()
}

fn background_images() -> TokenMap {
    let mut map = TokenMap::new();
    map.insert("none", "none");
    for (suffix, direction) in [
        ("t", "top"),
        ("tr", "top right"),
        ("r", "right"),
        ("br", "bottom right"),
        ("b", "bottom"),
        ("bl", "bottom left"),
        ("l", "left"),
        ("tl", "top left"),
    ] {
        map.insert(
            format!("gradient-to-{suffix}"),
            format!("linear-gradient(to {direction}, var(--tw-gradient-stops))"),
        );
    }
    map
}

/// Steps of the 0.25rem spacing scale, as written in class names
const SPACING_STEPS: [&str; 34] = [
    "0", "0.5", "1", "1.5", "2", "2.5", "3", "3.5", "4", "5", "6", "7", "8", "9", "10", "11", "12",
    "14", "16", "20", "24", "28", "32", "36", "40", "44", "48", "52", "56", "60", "64", "72", "80",
    "96",
];

fn spacing() -> TokenMap {
    let mut map = TokenMap::new();
    map.insert("px", "1px");
    for step in SPACING_STEPS {
        let value = match step.parse::<f64>() {
            Ok(n) if n == 0.0 => "0px".to_string(),
            Ok(n) => format!("{}rem", n / 4.0),
            Err(_) => continue,
        };
        map.insert(step, value);
    }
    map
}

fn border_widths() -> TokenMap {
    [("DEFAULT", "1px"), ("0", "0px"), ("2", "2px"), ("4", "4px"), ("8", "8px")]
        .into_iter()
        .collect()
}

fn scales() -> TokenMap {
    [
        ("0", "0"),
        ("50", ".5"),
        ("75", ".75"),
        ("90", ".9"),
        ("95", ".95"),
        ("100", "1"),
        ("105", "1.05"),
        ("110", "1.1"),
        ("125", "1.25"),
        ("150", "1.5"),
    ]
    .into_iter()
    .collect()
}

fn animations() -> TokenMap {
    [
        ("none", "none"),
        ("spin", "spin 1s linear infinite"),
        ("ping", "ping 1s cubic-bezier(0, 0, 0.2, 1) infinite"),
        ("pulse", "pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite"),
        ("bounce", "bounce 1s infinite"),
    ]
    .into_iter()
    .collect()
}

fn keyframes() -> TokenMap {
    [
        ("spin", Keyframes::new().stop("to", [("transform", "rotate(360deg)")])),
        (
            "ping",
            Keyframes::new().stop("75%, 100%", [("transform", "scale(2)"), ("opacity", "0")]),
        ),
        ("pulse", Keyframes::new().stop("50%", [("opacity", ".5")])),
        (
            "bounce",
            Keyframes::new()
                .stop(
                    "0%, 100%",
                    [
                        ("transform", "translateY(-25%)"),
                        ("animationTimingFunction", "cubic-bezier(0.8, 0, 1, 1)"),
                    ],
                )
                .stop(
                    "50%",
                    [
                        ("transform", "none"),
                        ("animationTimingFunction", "cubic-bezier(0, 0, 0.2, 1)"),
                    ],
                ),
        ),
    ]
    .into_iter()
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_populated() {
        let defaults = framework_defaults();
        for category in TokenCategory::ALL {
            assert!(
                !defaults.category(category).is_empty(),
                "default {category} tokens should not be empty"
            );
        }
    }

    #[test]
    fn test_spacing_scale() {
        let defaults = framework_defaults();
        let spacing = defaults.category(TokenCategory::Spacing);
        assert_eq!(spacing.get("0"), Some(&TokenValue::css("0px")));
        assert_eq!(spacing.get("0.5"), Some(&TokenValue::css("0.125rem")));
        assert_eq!(spacing.get("4"), Some(&TokenValue::css("1rem")));
        assert_eq!(spacing.get("72"), Some(&TokenValue::css("18rem")));
        assert_eq!(spacing.get("96"), Some(&TokenValue::css("24rem")));
        assert!(spacing.get("84").is_none());
    }

    #[test]
    fn test_default_animations_have_keyframes() {
        assert!(crate::resolve::resolve(&framework_defaults(), &Default::default())
            .lint()
            .is_empty());
    }
}
