//! Prompt templates for debate roles

pub mod template;

pub use template::RolePromptTemplate;
