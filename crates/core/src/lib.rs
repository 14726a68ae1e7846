//! Domain model and client-side controllers of the parent-teacher conference
//! RSVP system.
//!
//! The interesting part lives in [`sheet`]: the positional mapping between a
//! nested [`domain::Submission`] and the fixed-width row the store keeps.

pub mod auth;
pub mod dashboard;
pub mod domain;
pub mod form;
pub mod i18n;
pub mod notice;
pub mod sheet;
pub mod store;
pub mod wire;
