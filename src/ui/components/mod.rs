//! UI components module
//!
//! Each screen of the card app is a short-lived component borrowing the state
//! and theme for one frame.

pub mod card_view;
pub mod compose;
pub mod debug_panel;
pub mod load_error;
pub mod menu;

pub use card_view::{CardAction, CardView};
pub use compose::{ComposeForm, ComposeOutcome};
pub use debug_panel::DebugPanel;
pub use load_error::LoadErrorNotice;
pub use menu::MenuPanel;
