//! Naming classifiers: case conventions, prefix/suffix vocabularies and
//! user-configurable glob allow-lists.

use std::sync::LazyLock;

use regex::Regex;

// ── Case conventions ───────────────────────────────────────────────

/// First character is `A`-`Z`.
#[must_use]
pub fn starts_uppercase(name: &str) -> bool {
    name.chars().next().is_some_and(|first| first.is_ascii_uppercase())
}

/// `^[A-Z][A-Za-z0-9]*$`.
#[must_use]
pub fn is_strict_pascal_case(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|first| first.is_ascii_uppercase())
        && chars.all(|c| c.is_ascii_alphanumeric())
}

/// `name` starts with `prefix` and has something after it.
#[must_use]
pub fn has_word_prefix(name: &str, prefix: &str) -> bool {
    name.starts_with(prefix) && name.len() > prefix.len()
}

/// `use` followed by at least one more character.
#[must_use]
pub fn is_hook_name(name: &str) -> bool {
    has_word_prefix(name, "use")
}

/// `on` followed by an uppercase letter (`onClick`, `onValueChange`).
#[must_use]
pub fn is_handler_name(name: &str) -> bool {
    name.strip_prefix("on").is_some_and(starts_uppercase)
}

#[must_use]
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

#[must_use]
pub fn lower_first(value: &str) -> String {
    let mut chars = value.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_lowercase().chain(chars).collect()
    })
}

/// Whether the first character of `value` is unchanged by uppercasing.
/// Digits and `_` count, matching how handler subjects are split.
#[must_use]
pub fn first_is_upper_or_caseless(value: &str) -> bool {
    value
        .chars()
        .next()
        .is_some_and(|first| first.to_uppercase().eq(std::iter::once(first)))
}

/// Component-family name from a file path: `button-group.tsx` → `ButtonGroup`.
#[must_use]
pub fn pascal_from_file_stem(stem: &str) -> String {
    stem.split(['-', '_', '.', ' '])
        .filter(|segment| !segment.is_empty())
        .map(capitalize)
        .collect()
}

// ── Compound parts ─────────────────────────────────────────────────

/// Part names a compound component family conventionally exposes.
pub const COMMON_PART_NAMES: &[&str] = &[
    "Root",
    "Trigger",
    "Content",
    "Title",
    "Description",
    "Header",
    "Footer",
    "Body",
    "Item",
    "Group",
    "Label",
    "Input",
    "Control",
    "Indicator",
    "Icon",
    "Arrow",
    "Portal",
    "Overlay",
];

static COMPOUND_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Z][a-z0-9]+)([A-Z][a-zA-Z0-9]+)$").expect("valid regex")
});

/// Split `DialogTrigger` into (`Dialog`, `Trigger`) when the tail is a
/// common part name.
#[must_use]
pub fn compound_parts(name: &str) -> Option<(&str, &str)> {
    let captures = COMPOUND_NAME.captures(name)?;
    let block = captures.get(1)?.as_str();
    let part = captures.get(2)?.as_str();
    COMMON_PART_NAMES.contains(&part).then_some((block, part))
}

// ── Globs ──────────────────────────────────────────────────────────

/// Anchored name globs where `*` matches any run of characters.
#[derive(Debug, Clone, Default)]
pub struct GlobList {
    patterns: Vec<Regex>,
}

impl GlobList {
    pub fn new<S: AsRef<str>>(globs: &[S]) -> Self {
        let patterns = globs
            .iter()
            .filter_map(|glob| {
                let escaped = glob
                    .as_ref()
                    .split('*')
                    .map(regex::escape)
                    .collect::<Vec<_>>()
                    .join(".*");
                Regex::new(&format!("^{escaped}$")).ok()
            })
            .collect();
        Self { patterns }
    }

    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        self.patterns.iter().any(|pattern| pattern.is_match(name))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

// ── Vocabularies ───────────────────────────────────────────────────

/// Verbs an `on*` handler name may end with.
pub const HANDLER_VERBS: &[&str] = &[
    "abort", "access", "activate", "add", "blur", "cancel", "change", "clear", "click", "close",
    "collapse", "complete", "connect", "copy", "create", "deactivate", "delete", "disable",
    "dismiss", "drag", "drop", "edit", "enable", "end", "error", "expand", "finish", "focus",
    "generate", "get", "hide", "hover", "input", "install", "keydown", "keyup", "load", "mount",
    "move", "open", "paste", "pause", "persist", "play", "press", "progress", "query", "ready",
    "remove", "rename", "request", "reset", "resize", "retry", "revalidate", "revert", "save",
    "scroll", "seek", "select", "show", "skip", "start", "submit", "success", "track", "undo",
    "update", "upgrade", "upload", "validate", "wheel",
];

/// Past-tense forms accepted after a noun (`onFeatureDisabled`).
pub const PAST_TENSE_VERBS: &[&str] = &[
    "activated",
    "checked",
    "collapsed",
    "created",
    "deactivated",
    "deleted",
    "disabled",
    "enabled",
    "expanded",
    "hidden",
    "loaded",
    "moved",
    "resized",
    "saved",
    "shown",
    "updated",
    "validated",
];

/// UI nouns that may lead a noun-verb handler name.
pub const HANDLER_NOUNS: &[&str] = &[
    "accordion", "action", "animation", "attempt", "audio", "autoscroll", "backspace",
    "buffering", "button", "callback", "cell", "color", "column", "commit", "content", "date",
    "dialog", "document", "down", "drawer", "dropdown", "editor", "enter", "escape", "event",
    "feature", "field", "file", "filter", "folder", "form", "icon", "input", "item", "label",
    "limit", "limits", "link", "menu", "modal", "mode", "name", "note", "notification",
    "option", "options", "order", "overlay", "page", "panel", "player", "popover", "portal",
    "prompt", "range", "resource", "route", "row", "section", "selection", "sidebar", "sort",
    "status", "step", "stream", "suggestion", "tab", "text", "theme", "time", "title", "toast",
    "toggle", "tooltip", "trigger", "up", "user", "users", "value", "view", "viewport", "word",
];

/// React's built-in hooks.
pub const HOOK_NAMES: &[&str] = &[
    "useState",
    "useEffect",
    "useReducer",
    "useRef",
    "useContext",
    "useLayoutEffect",
    "useImperativeHandle",
    "useDebugValue",
    "useId",
    "useSyncExternalStore",
    "useTransition",
    "useDeferredValue",
    "useOptimistic",
    "useActionState",
    "useFormStatus",
];

/// Native HTML boolean attributes, optionally exempt from the
/// controlled-handler requirement.
pub const NATIVE_BOOLEAN_PROPS: &[&str] = &[
    "allowFullScreen",
    "allowTransparency",
    "async",
    "autoFocus",
    "autoPlay",
    "checked",
    "controls",
    "default",
    "defer",
    "disabled",
    "formNoValidate",
    "hidden",
    "inert",
    "loop",
    "multiple",
    "muted",
    "noModule",
    "noValidate",
    "open",
    "playsInline",
    "readOnly",
    "required",
    "reversed",
    "selected",
];

/// Merge a default vocabulary with user extensions.
///
/// Entries are trimmed, lowercased and stripped of inner whitespace; empty
/// entries are dropped and duplicates keep their first position. The result
/// is ordered longest first (stable), so prefix and suffix scans try the
/// most specific word before its shorter stems.
#[must_use]
pub fn merge_vocabulary(defaults: &[&str], extend: &[String]) -> Vec<String> {
    let mut merged: Vec<String> = Vec::with_capacity(defaults.len() + extend.len());
    let candidates = defaults
        .iter()
        .map(|word| (*word).to_string())
        .chain(extend.iter().cloned());
    for candidate in candidates {
        let normalized: String = candidate
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        if !normalized.is_empty() && !merged.contains(&normalized) {
            merged.push(normalized);
        }
    }
    merged.sort_by(|left, right| right.len().cmp(&left.len()));
    merged
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("onClick", true)]
    #[case("onValueChange", true)]
    #[case("on", false)]
    #[case("once", false)]
    #[case("on1", false)]
    fn handler_names(#[case] name: &str, #[case] expected: bool) {
        assert_eq!(is_handler_name(name), expected);
    }

    #[rstest]
    #[case("Button", true)]
    #[case("ButtonGroup2", true)]
    #[case("renderRow", false)]
    #[case("Button_Group", false)]
    #[case("", false)]
    fn strict_pascal(#[case] name: &str, #[case] expected: bool) {
        assert_eq!(is_strict_pascal_case(name), expected);
    }

    #[test]
    fn case_helpers() {
        assert_eq!(capitalize("open"), "Open");
        assert_eq!(lower_first("Title"), "title");
        assert_eq!(capitalize(""), "");
        assert!(is_hook_name("useWidget"));
        assert!(!is_hook_name("use"));
        assert_eq!(pascal_from_file_stem("button-group"), "ButtonGroup");
        assert_eq!(pascal_from_file_stem("dialog"), "Dialog");
    }

    #[test]
    fn compound_parts_need_a_known_part() {
        assert_eq!(compound_parts("DialogTrigger"), Some(("Dialog", "Trigger")));
        assert_eq!(compound_parts("MenuItem"), Some(("Menu", "Item")));
        assert_eq!(compound_parts("UserAvatar"), None);
        assert_eq!(compound_parts("Dialog"), None);
    }

    #[test]
    fn globs_are_anchored() {
        let globs = GlobList::new(&["on*", "ref", "data.*"]);
        assert!(globs.matches("onOpenChange"));
        assert!(globs.matches("ref"));
        assert!(globs.matches("data.id"));
        assert!(!globs.matches("dataXid"));
        assert!(!globs.matches("forwardRef"));
    }

    #[test]
    fn vocabulary_merge_dedupes_and_sorts_by_length() {
        let merged = merge_vocabulary(
            &["open", "change"],
            &[" Toggle ".to_string(), "OPEN".to_string(), String::new(), "key press".to_string()],
        );
        assert_eq!(merged, vec!["keypress", "change", "toggle", "open"]);
    }
}
