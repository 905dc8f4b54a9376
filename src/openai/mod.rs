mod core;
pub use self::core::{BackendError, CompletionRequest, Message, Role, completion};
