//! UI Components
//!
//! Reusable Leptos components.

mod chatbot;
mod delete_confirm_button;
mod due_badge;
mod header;
mod notice_bar;
mod record_editor;
mod risk_card;

pub use chatbot::Chatbot;
pub use delete_confirm_button::DeleteConfirmButton;
pub use due_badge::DueBadge;
pub use header::{Header, NavLink};
pub use notice_bar::NoticeBar;
pub use record_editor::RecordEditorModal;
pub use risk_card::RiskCard;
