//! Service layer for linkbio
//!
//! Centralizes the logic between HTTP handlers and the counter stores and
//! upstream HTTP services.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short error vars are idiomatic")]

mod error;
mod image_proxy;
mod presence_service;
mod view_counter;

pub use error::ServiceError;
pub use image_proxy::{ImageProxy, ProxiedImage};
pub use presence_service::PresenceClient;
pub use view_counter::ViewCounterService;
