//! Placeholder bindings and strict variable substitution.
//!
//! A [`Binding`] is the set of placeholder-name → value pairs supplied for
//! one render call. Rendering replaces every `{{name}}` marker with its
//! bound value in a single left-to-right pass.
//!
//! Substitution is deliberately strict: a complete marker whose name has no
//! binding is [`DomainError::UnboundPlaceholder`], never silently preserved
//! and never defaulted to an empty string. Ad hoc shell-style interpolation
//! would substitute `""` for a typo'd variable and produce a broken manifest
//! without a trace — the whole point of modeling bindings explicitly is to
//! turn that into a hard error.

use std::collections::HashMap;

use super::error::DomainError;

/// Placeholder-name → value mapping for one render invocation.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    values: HashMap<String, String>,
}

impl Binding {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value, consuming self and returning a new binding.
    ///
    /// Enables fluent construction:
    /// ```rust
    /// use stackgen_core::domain::Binding;
    ///
    /// let binding = Binding::new()
    ///     .with("service_name", "model-service")
    ///     .with("port", "4001");
    /// ```
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(|s| s.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Render a template body by replacing `{{name}}` markers.
    ///
    /// # Algorithm
    ///
    /// A single linear scan. Substituted values are appended verbatim and
    /// never re-scanned, so a value that itself contains `{{` cannot trigger
    /// a second round of substitution.
    ///
    /// # Edge cases
    ///
    /// - `{{name}}` with no binding for `name` → `UnboundPlaceholder`
    /// - `{{` with no closing `}}` → literal text, not a marker
    /// - `{{name}}{{name}}` → both occurrences replaced
    ///
    /// `template_name` only feeds error messages so a failure is attributable
    /// without inspecting template internals.
    pub fn render(&self, template_name: &str, body: &str) -> Result<String, DomainError> {
        let mut out = String::with_capacity(body.len());
        let mut rest = body;

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];

            match after.find("}}") {
                Some(end) => {
                    let name = after[..end].trim();
                    match self.values.get(name) {
                        Some(value) => out.push_str(value),
                        None => {
                            return Err(DomainError::UnboundPlaceholder {
                                name: name.to_string(),
                                template: template_name.to_string(),
                            });
                        }
                    }
                    rest = &after[end + 2..];
                }
                None => {
                    // Unterminated marker: the remainder is literal text.
                    out.push_str(&rest[start..]);
                    rest = "";
                }
            }
        }

        out.push_str(rest);
        Ok(out)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Binding {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_single_placeholder_exactly() {
        let binding = Binding::new().with("unit_name", "model-service");
        assert_eq!(
            binding.render("t", "Hello {{unit_name}}").unwrap(),
            "Hello model-service"
        );
    }

    #[test]
    fn substitutes_repeated_placeholder() {
        let binding = Binding::new().with("n", "x");
        assert_eq!(binding.render("t", "{{n}}-{{n}}").unwrap(), "x-x");
    }

    #[test]
    fn substitutes_multiple_placeholders() {
        let binding = Binding::new()
            .with("service_name", "user-management")
            .with("port", "4002");
        let body = "{\"name\":\"{{service_name}}\",\"port\":{{port}}}";
        assert_eq!(
            binding.render("package.json", body).unwrap(),
            "{\"name\":\"user-management\",\"port\":4002}"
        );
    }

    #[test]
    fn unbound_placeholder_is_an_error() {
        let err = Binding::new()
            .render("index", "{{unit_name}}/index")
            .unwrap_err();
        assert_eq!(
            err,
            DomainError::UnboundPlaceholder {
                name: "unit_name".into(),
                template: "index".into(),
            }
        );
    }

    #[test]
    fn error_names_the_template() {
        let err = Binding::new().render("docker-compose.yml", "{{services}}");
        match err {
            Err(DomainError::UnboundPlaceholder { template, .. }) => {
                assert_eq!(template, "docker-compose.yml");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn unterminated_marker_is_literal() {
        let binding = Binding::new().with("a", "1");
        assert_eq!(binding.render("t", "x {{a}} y {{b").unwrap(), "x 1 y {{b");
    }

    #[test]
    fn substituted_values_are_not_rescanned() {
        // A value containing marker syntax must come through verbatim.
        let binding = Binding::new().with("a", "{{b}}");
        assert_eq!(binding.render("t", "{{a}}").unwrap(), "{{b}}");
    }

    #[test]
    fn body_without_placeholders_passes_through() {
        let binding = Binding::new();
        assert_eq!(binding.render("t", "plain text").unwrap(), "plain text");
    }

    #[test]
    fn marker_name_is_trimmed() {
        let binding = Binding::new().with("port", "4001");
        assert_eq!(binding.render("t", "{{ port }}").unwrap(), "4001");
    }
}
