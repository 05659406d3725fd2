//! Schema linting utilities.

use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{SpecError, SpecResult};
use crate::models::{ComponentSpec, FieldSpecs};

/// Field names are single path segments; dots separate nesting levels.
static FIELD_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_\-]+$").expect("field name pattern is valid"));

/// One lint finding, tied to the dotted path it concerns.
///
/// Component-level findings have an empty path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintIssue {
    pub path: String,
    pub message: String,
}

impl fmt::Display for LintIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

/// Findings of one lint pass, errors and warnings kept apart.
#[derive(Debug, Default)]
pub struct LintReport {
    pub errors: Vec<LintIssue>,
    pub warnings: Vec<LintIssue>,
}

impl LintReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error(&mut self, path: &str, message: impl Into<String>) {
        self.errors.push(LintIssue {
            path: path.to_string(),
            message: message.into(),
        });
    }

    pub fn warn(&mut self, path: &str, message: impl Into<String>) {
        self.warnings.push(LintIssue {
            path: path.to_string(),
            message: message.into(),
        });
    }

    /// Paths with at least one error, in report order.
    pub fn error_paths(&self) -> Vec<&str> {
        let mut paths: Vec<&str> = Vec::new();
        for issue in &self.errors {
            if !paths.contains(&issue.path.as_str()) {
                paths.push(&issue.path);
            }
        }
        paths
    }

    pub fn merge(&mut self, other: LintReport) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

/// Linter for component schemas.
pub struct SchemaLinter;

impl SchemaLinter {
    /// Lint a whole component.
    pub fn lint(spec: &ComponentSpec) -> LintReport {
        let mut report = LintReport::default();

        if spec.name.is_empty() {
            report.error("", "component name cannot be empty");
        }

        if spec.category.is_empty() {
            report.error("", format!("component '{}' has no type", spec.name));
        }

        if spec.summary.is_empty() {
            report.warn("", format!("component '{}' has no summary", spec.name));
        }

        report.merge(Self::lint_fields("", &spec.fields));
        report
    }

    /// Lint the declarations at one level and everything beneath it.
    pub fn lint_fields(prefix: &str, fields: &FieldSpecs) -> LintReport {
        let mut report = LintReport::default();
        let mut seen = HashSet::new();

        for field in fields {
            let path = format!("{}{}", prefix, field.name);

            if field.name.is_empty() {
                report.error(prefix.trim_end_matches('.'), "child field has an empty name");
                continue;
            }

            if !FIELD_NAME.is_match(&field.name) {
                report.error(&path, "invalid name");
            }

            if !seen.insert(field.name.as_str()) {
                report.error(&path, "declared more than once");
            }

            if field.has_children() && !field.options.is_empty() {
                report.error(&path, "declares options but has children");
            }

            if field.deprecated && field.has_children() {
                report.warn(&path, "deprecated but still declares children");
            }

            if !field.deprecated && field.description.trim().is_empty() {
                report.warn(&path, "missing documentation");
            }

            if field.has_children() {
                report.merge(Self::lint_fields(&format!("{}.", path), &field.children));
            }
        }

        report
    }

    /// Lint and turn errors into a failure.
    pub fn enforce(spec: &ComponentSpec) -> SpecResult<LintReport> {
        let report = Self::lint(spec);
        if report.is_valid() {
            Ok(report)
        } else {
            Err(SpecError::InvalidSchema {
                component: spec.name.clone(),
                errors: report.errors.iter().map(ToString::to_string).collect(),
            })
        }
    }
}
