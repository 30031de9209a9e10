//! Diagnostic records and the reporter capability passes emit through.
//!
//! Errors halt the rewrite of the offending construct; warnings allow
//! best-effort salvage. Neither aborts the compilation — the outer driver
//! decides what is fatal.

use global_common::Span;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum CheckLevel {
    Error,
    Warning,
}

/// A fixed diagnostic kind: stable key, severity and a `{0}`-style message
/// template.
#[derive(Debug)]
pub struct DiagnosticType {
    pub key: &'static str,
    pub level: CheckLevel,
    pub format: &'static str,
}

impl DiagnosticType {
    pub const fn error(key: &'static str, format: &'static str) -> Self {
        DiagnosticType {
            key,
            level: CheckLevel::Error,
            format,
        }
    }

    pub const fn warning(key: &'static str, format: &'static str) -> Self {
        DiagnosticType {
            key,
            level: CheckLevel::Warning,
            format,
        }
    }
}

#[derive(Debug, Clone)]
pub struct JsError {
    pub source_name: String,
    pub span: Span,
    pub diagnostic: &'static DiagnosticType,
    pub description: String,
}

impl JsError {
    pub fn make(
        source_name: &str,
        span: Span,
        diagnostic: &'static DiagnosticType,
        args: &[&str],
    ) -> Self {
        let mut description = diagnostic.format.to_string();
        for (i, arg) in args.iter().enumerate() {
            description = description.replace(&format!("{{{}}}", i), arg);
        }
        JsError {
            source_name: source_name.to_string(),
            span,
            diagnostic,
            description,
        }
    }

    pub fn level(&self) -> CheckLevel {
        self.diagnostic.level
    }
}

pub trait ErrorReporter {
    fn report(&mut self, error: JsError);
}

/// Accumulates diagnostics for later inspection; used by tests and the CLI.
#[derive(Default, Debug)]
pub struct CollectingReporter {
    pub diagnostics: Vec<JsError>,
}

impl CollectingReporter {
    pub fn errors(&self) -> impl Iterator<Item = &JsError> {
        self.diagnostics
            .iter()
            .filter(|e| e.level() == CheckLevel::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &JsError> {
        self.diagnostics
            .iter()
            .filter(|e| e.level() == CheckLevel::Warning)
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }
}

impl ErrorReporter for CollectingReporter {
    fn report(&mut self, error: JsError) {
        self.diagnostics.push(error);
    }
}
