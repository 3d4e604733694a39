//! PetAid Hub Core
//!
//! Target-independent logic behind the web front end: record types and
//! their forms, the local collection store, derived views, the demo session
//! and the symptom prediction client.

pub mod chatbot;
pub mod config;
pub mod derived;
pub mod domain;
pub mod editor;
pub mod error;
pub mod form;
pub mod markdown;
pub mod notice;
pub mod prediction;
pub mod repository;
pub mod routes;
pub mod session;

pub use config::AppConfig;
pub use editor::{EditorMode, RecordEditor, Submitted};
pub use error::{DomainError, DomainResult, ValidationError};
pub use notice::{Notice, NoticeLevel};
pub use routes::Route;
pub use session::{Credentials, Session, SessionError};
