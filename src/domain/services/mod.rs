//! Domain services: pure functions that shape what is sent to the model.

mod prompt_template;

pub use prompt_template::*;
