//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep UI layers decoupled from storage details.

pub mod clipboard_history;
pub mod formatter;
pub mod launcher_service;
pub mod task_service;
pub mod template_service;
