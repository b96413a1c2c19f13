//! Diagnostics emitted by rules.
//!
//! A rule reports an anchor span, a message identifier and structured data.
//! The message text is rendered by interpolating `{{key}}` placeholders of the
//! rule's message template with that data; formatting for humans is left to
//! the host.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::span::Span;

/// Interpolation data attached to a diagnostic. Ordered for determinism.
pub type DiagnosticData = BTreeMap<String, String>;

/// One finding of one rule against one node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub span: Span,
    pub message_id: &'static str,
    pub data: DiagnosticData,
}

impl Diagnostic {
    #[must_use]
    pub fn new(span: Span, message_id: &'static str) -> Self {
        Self {
            span,
            message_id,
            data: DiagnosticData::new(),
        }
    }

    /// Attach one interpolation value.
    #[must_use]
    pub fn with(mut self, key: &str, value: impl ToString) -> Self {
        self.data.insert(key.to_string(), value.to_string());
        self
    }

    /// Fetch an interpolation value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }
}

/// Render a message template by replacing `{{ key }}` placeholders.
///
/// Placeholders without a matching key are left untouched.
#[must_use]
pub fn render_message(template: &str, data: &DiagnosticData) -> String {
    let mut rendered = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find("{{") {
        rendered.push_str(&rest[..open]);
        let after_open = &rest[open + 2..];
        let Some(close) = after_open.find("}}") else {
            rendered.push_str(&rest[open..]);
            return rendered;
        };

        let key = after_open[..close].trim();
        match data.get(key) {
            Some(value) => rendered.push_str(value),
            None => rendered.push_str(&rest[open..open + 2 + close + 2]),
        }
        rest = &after_open[close + 2..];
    }

    rendered.push_str(rest);
    rendered
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn renders_placeholders() {
        let diagnostic = Diagnostic::new(Span::new(0, 4), "noTitleCase")
            .with("prop", "Title")
            .with("suggestion", "title");

        let message = render_message(
            "Prop '{{prop}}' uses TitleCase. Use camelCase instead (e.g. {{ suggestion }}).",
            &diagnostic.data,
        );

        assert_eq!(
            message,
            "Prop 'Title' uses TitleCase. Use camelCase instead (e.g. title)."
        );
        assert_eq!(diagnostic.get("prop"), Some("Title"));
    }

    #[test]
    fn keeps_unknown_and_unterminated_placeholders() {
        let data = DiagnosticData::new();
        assert_eq!(render_message("a {{missing}} b", &data), "a {{missing}} b");
        assert_eq!(render_message("open {{never", &data), "open {{never");
    }

    #[test]
    fn handles_nested_braces_in_examples() {
        let mut data = DiagnosticData::new();
        data.insert("local".into(), "DialogTrigger".into());
        data.insert("part".into(), "Trigger".into());

        assert_eq!(
            render_message("export { {{local}} as {{part}} }", &data),
            "export { DialogTrigger as Trigger }"
        );
    }
}
