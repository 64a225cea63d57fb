pub mod escalation;
pub mod session;

pub use escalation::{ButtonMood, PromptStage};
pub use session::Session;
