use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Failures of the project reflection pipeline.
///
/// Any of these abandons the reflection unit; the view pipeline is not
/// affected.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read {}", path.display())]
    #[diagnostic(code(unityped::reflection::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse project settings")]
    #[diagnostic(code(unityped::reflection::parse))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("project root cannot be determined from anchor {}: {reason}", anchor.display())]
    #[diagnostic(
        code(unityped::reflection::project_root),
        help("the anchor is expected under Packages/<package>/ or Library/PackageCache/<package>/")
    )]
    ProjectRoot { anchor: PathBuf, reason: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }

    /// Create a parse error from a yaml error with source context
    pub fn parse(source: serde_yaml::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.location().map(|loc| SourceSpan::from(loc.index()));
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    pub fn project_root(anchor: impl Into<PathBuf>, reason: impl Into<String>) -> Box<Self> {
        Box::new(Error::ProjectRoot {
            anchor: anchor.into(),
            reason: reason.into(),
        })
    }
}
