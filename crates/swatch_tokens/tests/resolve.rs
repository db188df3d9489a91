//! Merge behavior of the token resolver against hand-built and framework defaults.

use pretty_assertions::assert_eq;
use swatch_tokens::{
    framework_defaults, resolve, Keyframes, ThemeExtension, TokenCategory, TokenEntry, TokenSet,
    TokenValue,
};

fn color_defaults() -> TokenSet {
    TokenSet::new()
        .with(TokenCategory::Color, "primary", "#000")
        .with(TokenCategory::Color, "muted", "#999")
        .with(TokenCategory::Shadow, "card", "0 1px 2px black")
}

#[test]
fn disjoint_keys_are_unioned() {
    let ext = ThemeExtension::builder()
        .token(TokenCategory::Color, "gold", "#d4af37")
        .token(TokenCategory::Color, "silver", "#c0c0c0")
        .build();

    let theme = resolve(&color_defaults(), &ext);
    let colors = theme.category(TokenCategory::Color);

    let keys: Vec<&str> = colors.keys().collect();
    assert_eq!(keys, vec!["gold", "muted", "primary", "silver"]);
    assert_eq!(colors.get("muted"), Some(&TokenValue::css("#999")));
    assert_eq!(colors.get("gold"), Some(&TokenValue::css("#d4af37")));
}

#[test]
fn extension_wins_on_collision() {
    let ext = ThemeExtension::builder()
        .token(TokenCategory::Color, "primary", "#fff")
        .token(TokenCategory::Color, "secondary", "#eee")
        .build();
    let defaults = TokenSet::new().with(TokenCategory::Color, "primary", "#000");

    let theme = resolve(&defaults, &ext);
    let expected: Vec<(TokenCategory, &str, TokenValue)> = vec![
        (TokenCategory::Color, "primary", TokenValue::css("#fff")),
        (TokenCategory::Color, "secondary", TokenValue::css("#eee")),
    ];
    let actual: Vec<(TokenCategory, &str, TokenValue)> =
        theme.entries().map(|(c, k, v)| (c, k, v.clone())).collect();
    assert_eq!(actual, expected);
}

#[test]
fn categories_are_independent() {
    let base = ThemeExtension::builder()
        .token(TokenCategory::Shadow, "premium", "0 10px 40px rgba(0, 0, 0, 0.08)")
        .build();
    let changed = ThemeExtension::builder()
        .token(TokenCategory::Shadow, "premium", "0 10px 40px rgba(0, 0, 0, 0.08)")
        .token(TokenCategory::Color, "primary", "#fff")
        .token(TokenCategory::Color, "charcoal", "#36454f")
        .build();

    let before = resolve(&color_defaults(), &base);
    let after = resolve(&color_defaults(), &changed);

    for category in TokenCategory::ALL {
        if category == TokenCategory::Color {
            continue;
        }
        assert_eq!(before.category(category), after.category(category), "{category}");
    }
    assert_ne!(
        before.category(TokenCategory::Color),
        after.category(TokenCategory::Color)
    );
}

#[test]
fn resolution_is_repeatable() {
    let ext: ThemeExtension = vec![
        TokenEntry::new(TokenCategory::Scale, "102", "1.02"),
        TokenEntry::new(TokenCategory::BorderWidth, "3", "3px"),
    ]
    .into_iter()
    .collect();

    let defaults = framework_defaults();
    assert_eq!(resolve(&defaults, &ext), resolve(&defaults, &ext));
}

#[test]
fn omitted_categories_keep_defaults() {
    let defaults = framework_defaults();
    let ext = ThemeExtension::builder()
        .token(TokenCategory::Spacing, "84", "21rem")
        .category(TokenCategory::Shadow)
        .build();

    let theme = resolve(&defaults, &ext);
    for category in TokenCategory::ALL {
        if category == TokenCategory::Spacing {
            continue;
        }
        assert_eq!(theme.category(category), defaults.category(category), "{category}");
    }
    assert_eq!(
        theme.category(TokenCategory::Spacing).len(),
        defaults.category(TokenCategory::Spacing).len() + 1
    );
}

#[test]
fn animation_and_keyframes_resolve_together() {
    let fade_in = Keyframes::new()
        .stop("0%", [("opacity", "0")])
        .stop("100%", [("opacity", "1")]);
    let ext = ThemeExtension::builder()
        .token(TokenCategory::Animation, "fadeIn", "fadeIn 0.5s ease-in-out forwards")
        .token(TokenCategory::Keyframes, "fadeIn", fade_in.clone())
        .build();

    let theme = resolve(&framework_defaults(), &ext);
    assert_eq!(
        theme.get(TokenCategory::Animation, "fadeIn"),
        Some(&TokenValue::css("fadeIn 0.5s ease-in-out forwards"))
    );
    assert_eq!(
        theme.get(TokenCategory::Keyframes, "fadeIn"),
        Some(&TokenValue::Keyframes(fade_in))
    );
    assert!(theme.lint().is_empty());
}

#[test]
fn dangling_animation_still_resolves() {
    let ext = ThemeExtension::builder()
        .token(TokenCategory::Animation, "shimmer", "shimmer 2s linear infinite")
        .build();

    let theme = resolve(&framework_defaults(), &ext);
    assert!(theme.get(TokenCategory::Animation, "shimmer").is_some());
    assert_eq!(theme.lint().len(), 1);
}

#[test]
fn overriding_default_keyframes_replaces_stops() {
    let ext = ThemeExtension::builder()
        .token(
            TokenCategory::Keyframes,
            "bounce",
            Keyframes::new().stop("50%", [("transform", "translateY(-10%)")]),
        )
        .build();

    let theme = resolve(&framework_defaults(), &ext);
    let bounce = theme
        .get(TokenCategory::Keyframes, "bounce")
        .and_then(TokenValue::as_keyframes)
        .unwrap();

    assert_eq!(bounce.len(), 1);
    assert!(bounce.get("0%, 100%").is_none());
    assert_eq!(bounce.stops()[0].properties["transform"], "translateY(-10%)");
}

#[test]
fn resolved_theme_serializes_by_config_key() {
    let ext = ThemeExtension::builder()
        .token(
            TokenCategory::FontFamily,
            "heading",
            TokenValue::font_stack(["Montserrat", "sans-serif"]),
        )
        .build();
    let theme = resolve(&TokenSet::new(), &ext);

    let json = serde_json::to_value(&theme).unwrap();
    assert_eq!(
        json["fontFamily"]["heading"],
        serde_json::json!(["Montserrat", "sans-serif"])
    );
    assert_eq!(json.as_object().unwrap().len(), TokenCategory::ALL.len());
}

#[test]
fn resolved_types_can_be_shared_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<swatch_tokens::ResolvedTheme>();
    assert_send_sync::<ThemeExtension>();
    assert_send_sync::<TokenSet>();
    assert_send_sync::<swatch_tokens::AnimationShorthand>();

    let theme = std::sync::Arc::new(resolve(&framework_defaults(), &ThemeExtension::empty()));
    let worker = {
        let theme = std::sync::Arc::clone(&theme);
        std::thread::spawn(move || theme.category(TokenCategory::Keyframes).len())
    };
    assert_eq!(
        worker.join().unwrap(),
        theme.category(TokenCategory::Keyframes).len()
    );
}
