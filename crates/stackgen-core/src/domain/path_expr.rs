//! Path expressions with brace-list expansion.
//!
//! A [`PathExpr`] is a relative path string that may contain brace-list
//! notation: `parent/{a,b,c}` denotes the three sibling directories
//! `parent/a`, `parent/b`, `parent/c`. Expansion happens before any
//! directory is created, so the Layout Builder only ever sees concrete
//! paths.
//!
//! # Grammar
//!
//! - A brace group is `{` followed by one or more comma-separated, non-empty
//!   elements, followed by `}`.
//! - Groups do not nest. `a/{b,{c,d}}` is malformed.
//! - Several groups in one expression expand as a cartesian product:
//!   `{a,b}/{x,y}` yields four paths.
//! - An expression with no braces expands to itself.
//!
//! Anything that violates the grammar (unbalanced braces, empty list, empty
//! element) is [`DomainError::MalformedPathExpr`] — the run fails rather than
//! creating a directory with a literal `{` in its name.

use std::fmt;

use super::{common::RelativePath, error::DomainError};

/// A path expression in compact brace-list notation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathExpr(String);

impl PathExpr {
    pub fn new(expr: impl Into<String>) -> Self {
        Self(expr.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Expand the brace-list notation into concrete relative paths.
    ///
    /// Expansion preserves the left-to-right order of the brace elements.
    pub fn expand(&self) -> Result<Vec<RelativePath>, DomainError> {
        expand_str(&self.0, &self.0)?
            .into_iter()
            .map(RelativePath::try_new)
            .collect()
    }
}

impl From<&str> for PathExpr {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl fmt::Display for PathExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Recursive worker: expands the first brace group, then recurses on the
/// suffix so that later groups multiply out (cartesian semantics).
///
/// `full` is the original expression, carried along for error reporting.
fn expand_str(expr: &str, full: &str) -> Result<Vec<String>, DomainError> {
    let Some(open) = expr.find('{') else {
        // No group left; a stray closing brace is still an error.
        if expr.contains('}') {
            return Err(malformed(full, "unbalanced '}'"));
        }
        return Ok(vec![expr.to_string()]);
    };

    let prefix = &expr[..open];
    if prefix.contains('}') {
        return Err(malformed(full, "unbalanced '}'"));
    }
    let after = &expr[open + 1..];

    let mut close = None;
    for (i, c) in after.char_indices() {
        match c {
            '{' => return Err(malformed(full, "nested brace groups are not supported")),
            '}' => {
                close = Some(i);
                break;
            }
            _ => {}
        }
    }
    let Some(close) = close else {
        return Err(malformed(full, "unbalanced '{'"));
    };

    let list = &after[..close];
    let suffix = &after[close + 1..];

    if list.is_empty() {
        return Err(malformed(full, "empty brace list"));
    }

    let tails = expand_str(suffix, full)?;

    let mut out = Vec::new();
    for element in list.split(',') {
        if element.is_empty() {
            return Err(malformed(full, "empty element in brace list"));
        }
        for tail in &tails {
            out.push(format!("{prefix}{element}{tail}"));
        }
    }
    Ok(out)
}

fn malformed(expr: &str, reason: &str) -> DomainError {
    DomainError::MalformedPathExpr {
        expr: expr.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand(expr: &str) -> Vec<String> {
        PathExpr::new(expr)
            .expand()
            .unwrap()
            .into_iter()
            .map(|p| p.as_str().to_string())
            .collect()
    }

    #[test]
    fn plain_path_expands_to_itself() {
        assert_eq!(expand("src/components"), vec!["src/components"]);
    }

    #[test]
    fn single_group_expands_to_siblings() {
        assert_eq!(expand("root/{a,b}"), vec!["root/a", "root/b"]);
    }

    #[test]
    fn three_way_group() {
        assert_eq!(
            expand("svc/{src,tests,config}"),
            vec!["svc/src", "svc/tests", "svc/config"]
        );
    }

    #[test]
    fn group_with_suffix() {
        assert_eq!(
            expand("libraries/{logger,client}/src"),
            vec!["libraries/logger/src", "libraries/client/src"]
        );
    }

    #[test]
    fn two_groups_are_cartesian() {
        assert_eq!(
            expand("{a,b}/{x,y}"),
            vec!["a/x", "a/y", "b/x", "b/y"]
        );
    }

    #[test]
    fn order_is_preserved() {
        assert_eq!(expand("p/{z,a,m}"), vec!["p/z", "p/a", "p/m"]);
    }

    #[test]
    fn unbalanced_open_is_malformed() {
        let err = PathExpr::new("root/{a,b").expand().unwrap_err();
        assert!(matches!(err, DomainError::MalformedPathExpr { .. }));
    }

    #[test]
    fn unbalanced_close_is_malformed() {
        assert!(PathExpr::new("root/a}").expand().is_err());
    }

    #[test]
    fn stray_close_before_a_group_is_malformed() {
        // The stray '}' must not survive as a literal path segment just
        // because a well-formed group follows it.
        assert!(PathExpr::new("x}y/{a,b}").expand().is_err());
        assert!(PathExpr::new("a}b").expand().is_err());
    }

    #[test]
    fn nested_group_is_malformed() {
        assert!(PathExpr::new("root/{a,{b,c}}").expand().is_err());
    }

    #[test]
    fn empty_list_is_malformed() {
        assert!(PathExpr::new("root/{}").expand().is_err());
    }

    #[test]
    fn empty_element_is_malformed() {
        assert!(PathExpr::new("root/{a,,b}").expand().is_err());
    }

    #[test]
    fn absolute_result_is_rejected() {
        assert!(matches!(
            PathExpr::new("/etc/{a,b}").expand(),
            Err(DomainError::AbsolutePath { .. })
        ));
    }
}
