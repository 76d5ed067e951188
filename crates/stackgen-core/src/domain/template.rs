//! File templates: a parameterized destination path plus a body.
//!
//! Template bodies are opaque payloads — Stackgen substitutes placeholders
//! into them but never interprets the generated JavaScript, JSON, YAML or
//! SQL. There are no conditionals, loops, or nesting inside a body; each
//! template is rendered exactly once per unit with a flat binding set.

use std::collections::BTreeSet;

/// Source of template content: either compile-time or runtime.
///
/// `Static` references strings embedded in the binary (the built-in
/// blueprint's payloads) without allocation. `Owned` holds content composed
/// at runtime.
#[derive(Debug, Clone)]
pub enum TemplateSource {
    /// Compile-time string literal (e.g. a `const` payload).
    Static(&'static str),

    /// Runtime-owned string (heap-allocated).
    Owned(String),
}

impl TemplateSource {
    /// Get string slice regardless of storage type.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Static(s) => s,
            Self::Owned(s) => s,
        }
    }
}

impl From<&'static str> for TemplateSource {
    fn from(s: &'static str) -> Self {
        Self::Static(s)
    }
}

impl From<String> for TemplateSource {
    fn from(s: String) -> Self {
        Self::Owned(s)
    }
}

/// A single templated file to materialize.
///
/// The destination path is itself parameterized — `{{service_name}}/package.json`
/// resolves against the owning unit's binding before the file is written.
#[derive(Debug, Clone)]
pub struct FileTemplate {
    /// Short identifier used in error messages (e.g. "package.json").
    pub name: String,

    /// Parameterized destination path, relative to the project root.
    pub dest: String,

    /// Template body with zero or more `{{name}}` markers.
    pub body: TemplateSource,
}

impl FileTemplate {
    pub fn new(
        name: impl Into<String>,
        dest: impl Into<String>,
        body: impl Into<TemplateSource>,
    ) -> Self {
        Self {
            name: name.into(),
            dest: dest.into(),
            body: body.into(),
        }
    }

    /// The set of placeholder names this template requires, across both the
    /// destination path and the body.
    ///
    /// Only complete `{{name}}` markers count; an unterminated `{{` is
    /// literal text (same rule as rendering).
    pub fn placeholders(&self) -> BTreeSet<String> {
        let mut names = BTreeSet::new();
        collect_placeholders(&self.dest, &mut names);
        collect_placeholders(self.body.as_str(), &mut names);
        names
    }
}

fn collect_placeholders(text: &str, out: &mut BTreeSet<String>) {
    let mut rest = text;
    while let Some(start) = rest.find("{{") {
        let after = &rest[start + 2..];
        match after.find("}}") {
            Some(end) => {
                out.insert(after[..end].trim().to_string());
                rest = &after[end + 2..];
            }
            None => break,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholders_cover_dest_and_body() {
        let t = FileTemplate::new(
            "package.json",
            "{{service_name}}/package.json",
            "{\"name\":\"{{service_name}}\",\"port\":{{port}}}",
        );
        let names: Vec<_> = t.placeholders().into_iter().collect();
        assert_eq!(names, vec!["port", "service_name"]);
    }

    #[test]
    fn literal_template_has_no_placeholders() {
        let t = FileTemplate::new(".gitignore", ".gitignore", "node_modules/\n");
        assert!(t.placeholders().is_empty());
    }

    #[test]
    fn unterminated_marker_is_not_a_placeholder() {
        let t = FileTemplate::new("x", "x", "literal {{oops");
        assert!(t.placeholders().is_empty());
    }

    #[test]
    fn source_as_str_covers_both_variants() {
        assert_eq!(TemplateSource::Static("a").as_str(), "a");
        assert_eq!(TemplateSource::Owned("b".into()).as_str(), "b");
    }
}
