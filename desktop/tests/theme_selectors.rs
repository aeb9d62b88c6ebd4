#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Checks that the selectors the shared components render (charts, tables, tab
bars, overview cards and the export panel) are still defined in
`ui/assets/theme/main.css`. A substring check is enough to catch a renamed or
dropped class before a packaged build ships unstyled.

If you rename or remove a selector on purpose, update the component markup
and `REQUIRED_SELECTORS` together.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

/// Selectors / tokens the shared components depend on.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    ".page__lead",
    // Buttons & tabs
    ".button {",
    ".button--primary",
    ".button--ghost",
    ".tab-bar {",
    ".tab-bar__button--active",
    ".tab-bar--compact",
    // Results container & cards
    ".results__panels",
    ".results-card {",
    ".results-card__header",
    ".results-card__meta",
    ".results-card--error",
    ".results-card__callout",
    // Charts
    ".chart {",
    ".chart__svg",
    ".chart__tooltip",
    ".chart__tooltip-row",
    ".chart__legend",
    ".chart__swatch--box",
    ".chart__swatch--median",
    ".chart__swatch--mean",
    ".chart__swatch--whisker",
    ".chart__placeholder",
    // Tables
    ".data-table {",
    ".data-table__num",
    ".data-table__row--highlight",
    // Overview & design
    ".stat-grid",
    ".stat-card--primary",
    ".stat-card--success",
    ".stat-card--warning",
    ".stat-card--info",
    ".note-grid",
    ".definition-list__row",
    ".gpu-status",
    ".timeline",
    ".share-bars__fill",
    // Summary
    ".badge--info",
    ".badge--success",
    ".badge--warning",
    ".code-block",
    ".conclusion-list",
    // Export panel
    ".results-export__actions",
    // Viewport classes
    ".viewport--mobile",
    ".viewport--tablet",
    ".viewport--desktop",
    // Responsive blocks
    "@media (max-width: 768px)",
    "@media (max-width: 480px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let missing: Vec<&str> = REQUIRED_SELECTORS
        .iter()
        .copied()
        .filter(|sel| !THEME_CSS.contains(sel))
        .collect();

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 3_000,
        "Embedded theme appears unexpectedly small ({} non-whitespace chars) – \
         did the file get truncated or path change?",
        non_ws_len
    );
}

#[test]
fn tooltip_block_consistency() {
    // The hover card needs both its heading and its value rows styled.
    let has_title = THEME_CSS.contains(".chart__tooltip-title");
    let has_row = THEME_CSS.contains(".chart__tooltip-row");
    assert!(
        has_title && has_row,
        "Chart tooltip sub-selectors missing (title: {has_title}, row: {has_row})"
    );
}
