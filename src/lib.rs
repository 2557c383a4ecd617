//! Core engine of the event hosting wizard.
//!
//! A competitive event (say, a hackathon) is configured as a sequence of
//! independently toggleable time phases: registration, an optional
//! shortlisting round, the event proper, and an optional results
//! announcement. This crate owns the draft configuration model and its pure
//! patch merges, the scoped validation rules (soft per-step checks during
//! navigation, a hard full check before publication), the seven-step
//! wizard state machine, and the normalization of a finished draft into
//! the payload the persistence service accepts.
//!
//! Everything is synchronous and pure except the single outbound
//! submission call behind [`submit::SubmitEndpoint`].

pub mod config;
pub mod error;
pub mod model;
pub mod submit;
pub mod validation;
pub mod wizard;
