pub mod storage;
pub mod types;

pub use storage::{MessageStore, SavedCard};
pub use types::{AnimationStyle, CardColor, MessageConfig};
