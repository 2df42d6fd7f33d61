//! # Application Layer
//!
//! Ports to the outside world, use cases, and the form controller that
//! coordinates them.

pub mod form_controller;
pub mod interfaces;
pub mod use_cases;

pub use form_controller::*;
pub use interfaces::*;
pub use use_cases::*;
