//! Error adapter for converting FretboardError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error type
//! and miette's rich diagnostic formatting used in the CLI. Malformed chord
//! notation is rendered with the notation as source code and the offending
//! token underlined.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use fretboard::FretboardError;

/// Adapter implementing [`MietteDiagnostic`] for a [`FretboardError`].
pub struct ErrorAdapter<'a>(pub &'a FretboardError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            FretboardError::Io(_) => "fretboard::io",
            FretboardError::InvalidLayout(_) => "fretboard::layout",
            FretboardError::MalformedChord { .. } => "fretboard::chord",
            FretboardError::InvalidStyleOverride(_) => "fretboard::style",
            FretboardError::StringOutOfRange { .. } => "fretboard::string",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            FretboardError::MalformedChord { .. } => {
                "write one fret per string (`xx0232`), or separate frets with `-` (`x-15-14-11-12-11`)"
            }
            FretboardError::StringOutOfRange { .. } => {
                "strings are numbered from 0, starting at the lowest-pitched string"
            }
            FretboardError::InvalidLayout(_) => {
                "show at least two frets and leave room for the diagram inside the drawing size"
            }
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match &self.0 {
            FretboardError::MalformedChord {
                notation,
                span: Some(_),
                ..
            } => Some(notation as &dyn miette::SourceCode),
            _ => None,
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match &self.0 {
            FretboardError::MalformedChord {
                message,
                span: Some(span),
                ..
            } => {
                let span = SourceSpan::new(span.start.into(), span.len());
                Some(Box::new(std::iter::once(
                    LabeledSpan::new_primary_with_span(Some(message.clone()), span),
                )))
            }
            _ => None,
        }
    }
}

/// Wrap a [`FretboardError`] for rendering by miette.
pub fn to_reportable(err: &FretboardError) -> ErrorAdapter<'_> {
    ErrorAdapter(err)
}
