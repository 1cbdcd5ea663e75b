//! Animation engine for the card text
//!
//! The engine is split into a pure part (`layout`, `engine`, `easing`, `clock`)
//! that computes where every glyph sits at a given time, and `render`, which
//! paints a computed frame with egui.

pub mod clock;
pub mod easing;
pub mod engine;
pub mod layout;
pub mod render;

pub use clock::AnimationClock;
pub use engine::{AnimationEngine, Frame, GlyphInstance};
pub use layout::TextLayout;
pub use render::paint_frame;
