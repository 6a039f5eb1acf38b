// SPDX-License-Identifier: MPL-2.0
use std::backtrace::Backtrace;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Exit status reported for every failure path.
pub const FAILURE_EXIT_CODE: u8 = 1;

#[derive(Debug, Clone)]
pub enum Error {
    /// The icon to rescale does not exist at the expected location.
    InputNotFound(PathBuf),

    /// The input exists but could not be read or decoded as an image.
    Decode(String),

    /// The run was cancelled by the user.
    Interrupted,

    /// Anything else (encoding, writing outputs, ...).
    ///
    /// `trace` is captured where the error was raised.
    Unexpected {
        message: String,
        trace: Arc<Backtrace>,
    },
}

impl Error {
    /// Builds an [`Error::Unexpected`], capturing the current call stack.
    pub fn unexpected(message: impl Into<String>) -> Self {
        Error::Unexpected {
            message: message.into(),
            trace: Arc::new(Backtrace::force_capture()),
        }
    }

    /// Process exit status for this error. All failures are terminal.
    pub fn exit_code(&self) -> u8 {
        FAILURE_EXIT_CODE
    }

    /// Call stack captured where the error was raised, if any.
    pub fn trace(&self) -> Option<&Backtrace> {
        match self {
            Error::Unexpected { trace, .. } => Some(trace),
            _ => None,
        }
    }

    /// Text written to stderr for this error.
    pub fn report_text(&self) -> String {
        match self {
            Error::Interrupted => format!("\n\n{self}"),
            Error::Unexpected { trace, .. } => format!("\n{self}\n{trace}"),
            _ => self.to_string(),
        }
    }

    /// Prints the user-facing message to stderr.
    pub fn report(&self) {
        eprintln!("{}", self.report_text());
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InputNotFound(path) => {
                write!(f, "Error: Input file not found: {}", path.display())
            }
            Error::Decode(e) => write!(f, "Error opening image: {}", e),
            Error::Interrupted => write!(f, "Cancelled by user"),
            Error::Unexpected { message, .. } => write!(f, "Error: {}", message),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::unexpected(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::unexpected(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
