//! Project spec loading.

use std::path::{Path, PathBuf};

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;
use tracing::{debug, info};

use crate::core::Project;

/// Failure to turn a spec file into a [`Project`].
#[derive(Debug, Error, Diagnostic)]
pub enum LoadError {
    #[error("failed to read project spec `{}`", .path.display())]
    #[diagnostic(code(projgen::load::read))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid project spec `{}` at line {line}, column {column}", .path.display())]
    #[diagnostic(
        code(projgen::load::decode),
        help("The spec is produced by the build-graph extractor; re-run it rather than editing by hand")
    )]
    Decode {
        path: PathBuf,
        line: usize,
        column: usize,
        #[source]
        source: serde_json::Error,
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: SourceSpan,
    },
}

/// Read and decode a project spec.
///
/// Decoding is all-or-nothing: any schema violation aborts with the line and
/// column of the offending value.
pub fn load_project(path: &Path) -> Result<Project, LoadError> {
    info!("Loading project spec from {}", path.display());

    let contents = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let project = decode_project(path, contents)?;
    debug!(
        project = %project.name,
        targets = project.targets.len(),
        "decoded project spec"
    );

    Ok(project)
}

/// Decode a project spec from an in-memory string.
///
/// `path` is only used for error reporting.
pub fn decode_project(path: &Path, contents: String) -> Result<Project, LoadError> {
    serde_json::from_str(&contents).map_err(|source| {
        let offset = byte_offset(&contents, source.line(), source.column());
        LoadError::Decode {
            path: path.to_path_buf(),
            line: source.line(),
            column: source.column(),
            span: (offset, 0).into(),
            src: NamedSource::new(path.display().to_string(), contents),
            source,
        }
    })
}

/// Convert a 1-based line and column into a byte offset, clamped to `text`.
fn byte_offset(text: &str, line: usize, column: usize) -> usize {
    let line_start: usize = text
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    (line_start + column.saturating_sub(1)).min(text.len())
}
