use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Errors loading `unityped.toml`.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read {}", path.display())]
    #[diagnostic(code(unityped::config::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse configuration")]
    #[diagnostic(code(unityped::config::parse))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(unityped::config::validation))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid value")]
        span: Option<SourceSpan>,
        message: String,
    },
}

impl Error {
    /// Create a parse error from a toml error with source context
    pub fn parse(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    /// Validation error pointing at the first quoted occurrence of `value`.
    pub fn validation(
        message: impl Into<String>,
        value: &str,
        src: &str,
        filename: &str,
    ) -> Box<Self> {
        let span = find_value_span(src, value);
        Box::new(Error::Validation {
            src: NamedSource::new(filename, src.to_string()),
            span,
            message: message.into(),
        })
    }
}

fn find_value_span(src: &str, value: &str) -> Option<SourceSpan> {
    ['"', '\'']
        .iter()
        .find_map(|quote| src.find(&format!("{quote}{value}{quote}")))
        .map(|pos| SourceSpan::from((pos + 1, value.len())))
}
