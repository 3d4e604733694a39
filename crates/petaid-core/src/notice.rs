//! Notices
//!
//! Transient user-facing messages. Core operations return them; the UI
//! queues and dismisses them.

use crate::domain::{Record, Upserted};
use crate::editor::Submitted;
use crate::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl NoticeLevel {
    pub fn css_class(&self) -> &'static str {
        match self {
            NoticeLevel::Info => "notice-info",
            NoticeLevel::Success => "notice-success",
            NoticeLevel::Warning => "notice-warning",
            NoticeLevel::Error => "notice-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, title, description)
    }

    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, title, description)
    }

    pub fn warning(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Warning, title, description)
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, title, description)
    }

    /// "Pet Added!" / "Pet Updated!"
    pub fn saved<R: Record>(submitted: &Submitted<R>) -> Self {
        let verb = match submitted.outcome {
            Upserted::Created => "Added",
            Upserted::Updated => "Updated",
        };
        Self::success(
            format!("{} {}!", title_case(R::KIND), verb),
            format!("{} has been saved.", submitted.record.title()),
        )
    }

    pub fn deleted<R: Record>(record: &R) -> Self {
        Self::info(
            format!("{} Deleted", title_case(R::KIND)),
            format!("{} has been removed.", record.title()),
        )
    }

    /// Validation problems warn; anything else is an error
    pub fn from_error(err: &DomainError) -> Self {
        match err {
            DomainError::Validation(e) => Self::warning("Missing Information", e.to_string()),
            other => Self::error("Something went wrong", other.to_string()),
        }
    }
}

fn title_case(kind: &str) -> String {
    kind.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
