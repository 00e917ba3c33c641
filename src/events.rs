use std::path::PathBuf;

use crate::error::{DecodeError, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// A blocking message for the user, dismissed by acknowledgment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub body: String,
}

impl Notice {
    pub fn submitted() -> Self {
        Self {
            level: NoticeLevel::Info,
            title: "Success".to_string(),
            body: "Photos and News have been submitted!".to_string(),
        }
    }

    pub fn rejected(err: &ValidationError) -> Self {
        Self {
            level: NoticeLevel::Error,
            title: "Error".to_string(),
            body: format!("Error: {err}"),
        }
    }

    pub fn load_failed(err: &DecodeError) -> Self {
        Self {
            level: NoticeLevel::Error,
            title: "Error".to_string(),
            body: err.to_string(),
        }
    }
}

/// What one click on the upload card did to the session.
#[derive(Debug, Default)]
pub struct PickReport {
    pub cancelled: bool,
    /// Paths whose thumbnails were appended, in selection order.
    pub added: Vec<PathBuf>,
    pub failed: Vec<DecodeError>,
}

/// Snapshot of what a successful submit carried before the session was reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub images: Vec<PathBuf>,
    pub news: String,
}
