pub mod assistants;
pub mod checkbox_selector;
