mod copy_result;
mod enhance_prompt;

pub use copy_result::*;
pub use enhance_prompt::*;
