pub mod backend;
mod core;
pub mod errors;
pub mod guardrail;
pub mod history;
pub mod models;

pub use self::core::{Outcome, SpeciesChat, SpeciesChatBuilder};
pub use backend::{BoxedCompletionBackend, BoxedSleeper, CompletionBackend, OpenAiBackend, Sleeper};
pub use models::{ChatTurn, TurnRole};
