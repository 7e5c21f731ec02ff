//! Diagnostics sink receiving the warnings and errors found while reading a
//! description.

use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
}

impl Diagnostic {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.severity {
            Severity::Warning => write!(f, "WARNING: {}", self.message),
            Severity::Error => write!(f, "ERROR: {}", self.message),
        }
    }
}

pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);

    /// Returns `true` the first time `font` is passed, `false` afterwards.
    fn first_font_warning(&mut self, font: &str) -> bool;

    fn warning(&mut self, message: String) {
        self.report(Diagnostic::warning(message));
    }

    fn error(&mut self, message: String) {
        self.report(Diagnostic::error(message));
    }
}

/// Default sink: records every diagnostic and mirrors it to the `log` facade.
#[derive(Debug, Default)]
pub struct Monitor {
    diagnostics: Vec<Diagnostic>,
    warned_fonts: HashSet<String>,
    quiet: bool,
}

impl Monitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// A monitor that records without logging.
    pub fn quiet() -> Self {
        Self {
            quiet: true,
            ..Self::default()
        }
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.of(Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.of(Severity::Warning)
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    fn of(&self, severity: Severity) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(move |d| d.severity == severity)
    }
}

impl DiagnosticSink for Monitor {
    fn report(&mut self, diagnostic: Diagnostic) {
        if !self.quiet {
            match diagnostic.severity {
                Severity::Warning => log::warn!("{}", diagnostic.message),
                Severity::Error => log::error!("{}", diagnostic.message),
            }
        }
        self.diagnostics.push(diagnostic);
    }

    fn first_font_warning(&mut self, font: &str) -> bool {
        self.warned_fonts.insert(font.to_string())
    }
}
