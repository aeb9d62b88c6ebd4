use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

/// Translation completeness checks.
///
/// 1. Every non-fallback locale defines every key of the fallback (en-US)
///    `crackbench-ui.ftl`, and no file defines a key twice.
/// 2. Every literal key passed to `t!` under `src/` exists in the fallback.
///
/// To add a locale, create `ui/i18n/<locale>/crackbench-ui.ftl`, copy all keys
/// from `en-US`, and register the file in `LOCALES` below.
const EN_US: &str = include_str!("../i18n/en-US/crackbench-ui.ftl");
const ZH_TW: &str = include_str!("../i18n/zh-TW/crackbench-ui.ftl");

const LOCALES: &[(&str, &str)] = &[
    ("zh-TW", ZH_TW),
    // Add new locales here.
];

#[test]
fn all_locales_have_all_fallback_keys() {
    let fallback_keys = extract_keys(EN_US);
    assert!(!fallback_keys.is_empty(), "Fallback (en-US) contains no keys.");
    assert_no_dup_keys(EN_US, "en-US");

    let mut failures = Vec::new();
    for (locale, src) in LOCALES {
        assert_no_dup_keys(src, locale);

        let keys = extract_keys(src);
        let missing: BTreeSet<&String> = fallback_keys.iter().filter(|k| !keys.contains(*k)).collect();
        let extra: BTreeSet<&String> = keys.iter().filter(|k| !fallback_keys.contains(*k)).collect();

        if !missing.is_empty() {
            failures.push(format!(
                "Locale {locale} is missing {} key(s):\n  {}",
                missing.len(),
                missing.into_iter().cloned().collect::<Vec<_>>().join("\n  ")
            ));
        }
        if !extra.is_empty() {
            failures.push(format!(
                "Locale {locale} defines {} key(s) unknown to en-US:\n  {}",
                extra.len(),
                extra.into_iter().cloned().collect::<Vec<_>>().join("\n  ")
            ));
        }
    }

    if !failures.is_empty() {
        panic!(
            "Translation completeness check failed:\n\n{}\n\nHint: copy the missing keys from en-US, then translate.",
            failures.join("\n\n")
        );
    }
}

#[test]
fn fluent_domain_matches_file_names() {
    let manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let config = fs::read_to_string(manifest.join("i18n.toml")).expect("ui/i18n.toml");
    let domain = config
        .lines()
        .filter_map(|line| line.trim().strip_prefix("domain"))
        .filter_map(|rest| rest.trim_start().strip_prefix('='))
        .map(|value| value.trim().trim_matches('"').to_string())
        .next()
        .expect("i18n.toml declares a fluent domain");

    // `fl!` resolves `<assets_dir>/<fallback>/<domain>.ftl` at compile time.
    for locale in ["en-US", "zh-TW"] {
        let path = manifest.join("i18n").join(locale).join(format!("{domain}.ftl"));
        assert!(path.is_file(), "missing {}", path.display());
    }
}

#[test]
fn referenced_keys_exist_in_fallback() {
    let fallback_keys = extract_keys(EN_US);
    let src_root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src");
    let referenced = keys_referenced_in(&src_root);
    assert!(!referenced.is_empty(), "no t!(\"...\") calls found under src/");

    let missing: BTreeSet<&String> = referenced.iter().filter(|k| !fallback_keys.contains(*k)).collect();
    assert!(
        missing.is_empty(),
        "Referenced translation keys missing in en-US ({}):\n{}",
        missing.len(),
        missing.into_iter().cloned().collect::<Vec<_>>().join("\n")
    );
}

#[test]
fn placeholders_match_fallback() {
    let fallback = placeholders(EN_US);
    for (locale, src) in LOCALES {
        let local = placeholders(src);
        for (key, args) in &fallback {
            if let Some((_, other)) = local.iter().find(|(k, _)| k == key) {
                assert_eq!(args, other, "{locale}: placeholders differ for `{key}`");
            }
        }
    }
}

/// Message keys of a Fluent file: any `key =` line outside comments and
/// attribute/continuation lines.
fn extract_keys(src: &str) -> HashSet<String> {
    src.lines().filter_map(message_key).collect()
}

fn message_key(line: &str) -> Option<String> {
    let line = line.trim_end();
    if line.is_empty() || line.starts_with('#') || line.starts_with(' ') || line.starts_with('.') {
        return None;
    }
    let (left, _) = line.split_once('=')?;
    let key = left.trim();
    (!key.is_empty() && key.chars().all(valid_key_char)).then(|| key.to_string())
}

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

fn placeholders(src: &str) -> Vec<(String, BTreeSet<String>)> {
    src.lines()
        .filter_map(|line| {
            let key = message_key(line)?;
            let args = line
                .split("{ $")
                .skip(1)
                .filter_map(|rest| rest.split_whitespace().next())
                .map(|name| name.trim_end_matches('}').to_string())
                .collect();
            Some((key, args))
        })
        .collect()
}

fn assert_no_dup_keys(src: &str, locale: &str) {
    let mut seen = HashSet::new();
    let dups: BTreeSet<String> = src
        .lines()
        .filter_map(message_key)
        .filter(|key| !seen.insert(key.clone()))
        .collect();
    assert!(
        dups.is_empty(),
        "Duplicate key definitions in {locale}:\n  {}",
        dups.into_iter().collect::<Vec<_>>().join("\n  ")
    );
}

/// Literal first arguments of `t!(...)` in Rust sources, allowing whitespace
/// or a line break after the opening parenthesis.
fn keys_referenced_in(root: &Path) -> HashSet<String> {
    let mut found = HashSet::new();
    let mut stack = vec![root.to_path_buf()];

    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(entries) = fs::read_dir(&path) {
                stack.extend(entries.flatten().map(|entry| entry.path()));
            }
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };

        for (index, _) in content.match_indices("t!(") {
            // Skip `format!(`, `assert!(` and friends.
            let preceding = content[..index].chars().next_back();
            if preceding.is_some_and(|c| c.is_alphanumeric() || c == '_') {
                continue;
            }
            let rest = content[index + 3..].trim_start();
            let Some(literal) = rest.strip_prefix('"') else {
                continue;
            };
            if let Some(end) = literal.find('"') {
                let key = &literal[..end];
                if !key.is_empty() && key.chars().all(valid_key_char) {
                    found.insert(key.to_string());
                }
            }
        }
    }

    found
}
