//! Error types and result definitions for table operations.
//!
//! Every fallible operation of the table engine returns [`TableResult`]. A [`TableError`]
//! carries an [`ErrorKind`] classification, a static description, optional dynamic detail
//! and the call site that raised it, so callers can both branch on the failure category and
//! print a useful diagnostic.

use std::backtrace::Backtrace;
use std::borrow::Cow;
use std::collections::TryReserveError;
use std::error;
use std::fmt;
use std::panic::Location;
use std::sync::Arc;

use crate::config::ValidationError;

/// Convenient result type for table operations using [`TableError`] as the error type.
pub type TableResult<T> = Result<T, TableError>;

/// Detailed payload stored for every [`TableError`].
#[derive(Debug, Clone)]
struct ErrorPayload {
    kind: ErrorKind,
    description: Cow<'static, str>,
    detail: Option<Cow<'static, str>>,
    source: Option<Arc<dyn error::Error + Send + Sync>>,
    location: &'static Location<'static>,
    backtrace: Arc<Backtrace>,
}

/// Main error type for table operations.
///
/// Errors are raised synchronously at the call that violated a precondition and are never
/// retried. An operation that returns a [`TableError`] leaves the table unchanged.
#[derive(Debug, Clone)]
pub struct TableError {
    payload: ErrorPayload,
}

/// Categories of failures raised by the table engine.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    // Schema & Arity Errors
    SchemaMismatch,
    ArityMismatch,
    ColumnKindMismatch,

    // Index Errors
    RowOutOfRange,
    ColumnOutOfRange,

    // Data Errors
    ConversionError,

    // Resource Errors
    CapacityExhausted,

    // State & Configuration Errors
    InvalidState,
    ConfigError,
}

impl TableError {
    /// Returns the [`ErrorKind`] of this error.
    pub fn kind(&self) -> ErrorKind {
        self.payload.kind
    }

    /// Returns the static description of this error.
    pub fn description(&self) -> &str {
        &self.payload.description
    }

    /// Returns the detailed error information if available.
    pub fn detail(&self) -> Option<&str> {
        self.payload.detail.as_deref()
    }

    /// Returns the captured backtrace for this error.
    pub fn backtrace(&self) -> &Backtrace {
        self.payload.backtrace.as_ref()
    }

    /// Returns the captured callsite location for this error.
    pub fn location(&self) -> &'static Location<'static> {
        self.payload.location
    }

    /// Attaches an originating [`error::Error`] to this error and returns the modified instance.
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: error::Error + Send + Sync + 'static,
    {
        self.payload.source = Some(Arc::new(source));
        self
    }

    /// Creates a [`TableError`] from its components.
    #[track_caller]
    fn from_components(
        kind: ErrorKind,
        description: Cow<'static, str>,
        detail: Option<Cow<'static, str>>,
        source: Option<Arc<dyn error::Error + Send + Sync>>,
    ) -> Self {
        TableError {
            payload: ErrorPayload {
                kind,
                description,
                detail,
                source,
                location: Location::caller(),
                backtrace: Arc::new(Backtrace::capture()),
            },
        }
    }
}

impl PartialEq for TableError {
    fn eq(&self, other: &TableError) -> bool {
        self.payload.kind == other.payload.kind
            && self.payload.description == other.payload.description
    }
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        let payload = &self.payload;
        let location = payload.location;
        write!(
            f,
            "[{:?}] {} @ {}:{}:{}",
            payload.kind,
            payload.description,
            location.file(),
            location.line(),
            location.column()
        )?;

        write_detail(payload.detail.as_deref(), f, 1)?;
        write_backtrace(payload.backtrace.as_ref(), f, 1)?;

        Ok(())
    }
}

impl error::Error for TableError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        self.payload
            .source
            .as_ref()
            .map(|source| source as &(dyn error::Error + 'static))
    }
}

/// Writes the captured backtrace with indentation.
fn write_backtrace(
    backtrace: &Backtrace,
    f: &mut fmt::Formatter<'_>,
    indent: usize,
) -> fmt::Result {
    let indent_str = "  ".repeat(indent);

    let rendered_backtrace = format!("{backtrace}");
    if !rendered_backtrace.trim().is_empty() {
        write!(f, "\n{indent_str}Backtrace:")?;
        for line in rendered_backtrace.lines() {
            if line.trim().is_empty() {
                write!(f, "\n{indent_str}  ")?;
            } else {
                write!(f, "\n{indent_str}  {line}")?;
            }
        }
    }

    Ok(())
}

/// Writes the detail block with indentation.
fn write_detail(detail: Option<&str>, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
    if let Some(detail) = detail {
        let indent_str = "  ".repeat(indent);
        if detail.trim().is_empty() {
            write!(f, "\n{indent_str}Detail: <empty>")?;
        } else {
            write!(f, "\n{indent_str}Detail:")?;
            for line in detail.lines() {
                if line.trim().is_empty() {
                    write!(f, "\n{indent_str}  ")?;
                } else {
                    write!(f, "\n{indent_str}  {line}")?;
                }
            }
        }
    }

    Ok(())
}

/// Creates a [`TableError`] from an error kind and static description.
impl From<(ErrorKind, &'static str)> for TableError {
    #[track_caller]
    fn from((kind, desc): (ErrorKind, &'static str)) -> TableError {
        TableError::from_components(kind, Cow::Borrowed(desc), None, None)
    }
}

/// Creates a [`TableError`] from an error kind, static description, and dynamic detail.
impl<D> From<(ErrorKind, &'static str, D)> for TableError
where
    D: Into<Cow<'static, str>>,
{
    #[track_caller]
    fn from((kind, desc, detail): (ErrorKind, &'static str, D)) -> TableError {
        TableError::from_components(kind, Cow::Borrowed(desc), Some(detail.into()), None)
    }
}

/// Converts [`TryReserveError`] to [`TableError`] with [`ErrorKind::CapacityExhausted`].
impl From<TryReserveError> for TableError {
    #[track_caller]
    fn from(err: TryReserveError) -> TableError {
        let detail = err.to_string();
        let source = Arc::new(err);
        TableError::from_components(
            ErrorKind::CapacityExhausted,
            Cow::Borrowed("Column allocation failed"),
            Some(Cow::Owned(detail)),
            Some(source),
        )
    }
}

/// Converts [`ValidationError`] to [`TableError`] with [`ErrorKind::ConfigError`].
impl From<ValidationError> for TableError {
    #[track_caller]
    fn from(err: ValidationError) -> TableError {
        let detail = err.to_string();
        let source = Arc::new(err);
        TableError::from_components(
            ErrorKind::ConfigError,
            Cow::Borrowed("Invalid table configuration"),
            Some(Cow::Owned(detail)),
            Some(source),
        )
    }
}
