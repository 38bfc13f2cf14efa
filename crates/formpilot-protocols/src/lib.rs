//! # Formpilot Protocols
//!
//! Protocol definitions for the formpilot form-discovery engine.
//! Contains only wire types, traits, and errors - no engine logic.
//!
//! ## Contents
//!
//! - [`FormModel`] - the discovered section/field structure for one scan
//! - [`Request`] / [`Response`] / [`Notification`] - transport message shapes
//! - [`Transport`] - the push-notification capability the host must provide
//! - Error taxonomy: [`DocumentError`], [`ServiceError`], [`TransportError`]

pub mod error;
pub mod message;
pub mod model;
pub mod transport;

pub use error::{DocumentError, ServiceError, TransportError};
pub use message::{FieldWrite, Notification, Request, Response};
pub use model::{Field, FieldType, FieldValue, FormModel, Section};
pub use transport::Transport;
