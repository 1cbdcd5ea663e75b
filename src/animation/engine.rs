//! Per-frame glyph placement for each animation style
//!
//! Everything here is a pure function of the card, its layout and the elapsed
//! time, so a frame can be recomputed from scratch at any moment (replay is
//! just a clock reset).

use super::easing::{ease_in_out_sine, ease_out_back, ease_out_bounce, ease_out_cubic, linear};
use super::layout::TextLayout;
use crate::card::{AnimationStyle, MessageConfig};
use egui::{Color32, Vec2};
use std::f32::consts::TAU;

// Timings below are in seconds at speed 1.0
const FADE_LINE_DELAY: f32 = 0.4;
const FADE_DURATION: f32 = 0.8;

const TYPEWRITER_CHARS_PER_SEC: f32 = 14.0;
const CARET_BLINK_HZ: f32 = 2.0;

const SLIDE_LINE_DELAY: f32 = 0.3;
const SLIDE_DURATION: f32 = 0.7;
/// Slide distance in multiples of the font size
const SLIDE_DISTANCE: f32 = 12.0;

const BOUNCE_GLYPH_DELAY: f32 = 0.05;
const BOUNCE_DURATION: f32 = 0.6;
/// Drop height in multiples of the font size
const BOUNCE_HEIGHT: f32 = 3.0;

const WAVE_FADE: f32 = 0.5;
const WAVE_HZ: f32 = 0.8;
const WAVE_AMPLITUDE: f32 = 0.25;
const WAVE_PHASE_PER_COL: f32 = 0.6;

const ZOOM_GLYPH_DELAY: f32 = 0.04;
const ZOOM_DURATION: f32 = 0.5;

/// One glyph as it should be drawn in the current frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphInstance {
    pub ch: char,
    pub line: usize,
    pub col: usize,
    /// Displacement from the glyph's resting position, in points
    pub offset: Vec2,
    pub alpha: f32,
    pub scale: f32,
    pub color: Color32,
}

impl GlyphInstance {
    fn at_rest(ch: char, line: usize, col: usize, color: Color32) -> Self {
        Self {
            ch,
            line,
            col,
            offset: Vec2::ZERO,
            alpha: 1.0,
            scale: 1.0,
            color,
        }
    }

    pub fn is_at_rest(&self) -> bool {
        self.offset == Vec2::ZERO && self.alpha == 1.0 && self.scale == 1.0
    }
}

/// All glyphs visible at one instant
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub glyphs: Vec<GlyphInstance>,
    /// Typing cursor, only used by the typewriter style
    pub caret: Option<GlyphInstance>,
    pub elapsed: f32,
    /// Every glyph has reached its final pose
    pub is_settled: bool,
}

/// Progress through a segment that starts at `start` and lasts `duration`.
#[inline]
fn progress(t: f32, start: f32, duration: f32) -> f32 {
    ((t - start) / duration).clamp(0.0, 1.0)
}

pub struct AnimationEngine;

impl AnimationEngine {
    /// Wall-clock seconds until every glyph is at rest
    pub fn intro_duration(config: &MessageConfig, layout: &TextLayout) -> f32 {
        if layout.is_empty() {
            return 0.0;
        }

        let last_glyph = (layout.glyph_count() - 1) as f32;
        let last_line = layout.line_count().saturating_sub(1) as f32;

        let base = match config.style {
            AnimationStyle::FadeIn => FADE_LINE_DELAY * last_line + FADE_DURATION,
            AnimationStyle::Typewriter => layout.char_count() as f32 / TYPEWRITER_CHARS_PER_SEC,
            AnimationStyle::SlideIn => SLIDE_LINE_DELAY * last_line + SLIDE_DURATION,
            AnimationStyle::Bounce => BOUNCE_GLYPH_DELAY * last_glyph + BOUNCE_DURATION,
            AnimationStyle::Wave => WAVE_FADE,
            AnimationStyle::Zoom => ZOOM_GLYPH_DELAY * last_glyph + ZOOM_DURATION,
        };

        base / speed(config)
    }

    /// Compute the frame shown `elapsed` seconds after the animation started
    pub fn frame(config: &MessageConfig, layout: &TextLayout, elapsed: f32) -> Frame {
        let elapsed = elapsed.max(0.0);
        let t = elapsed * speed(config);
        let color = config.color.to_color32();
        let font_size = config.font_size;
        let is_settled = elapsed >= Self::intro_duration(config, layout);

        let mut glyphs = Vec::with_capacity(layout.glyph_count());
        let mut caret = None;

        // Index over all characters (typewriter) and over visible glyphs
        let mut char_index = 0usize;
        let mut glyph_index = 0usize;
        // Rounding can leave the product just under a whole count at the
        // intro boundary, so a settled frame has typed everything.
        let typed = if is_settled {
            layout.char_count()
        } else {
            (t * TYPEWRITER_CHARS_PER_SEC).floor() as usize
        };

        for (line_idx, line) in layout.lines().iter().enumerate() {
            let line_len = line.chars().count();

            for (col, ch) in line.chars().enumerate() {
                if config.style == AnimationStyle::Typewriter
                    && caret.is_none()
                    && char_index == typed
                {
                    caret = Some(Self::caret(line_idx, col, elapsed, color));
                }
                char_index += 1;

                if ch.is_whitespace() {
                    continue;
                }
                let k = glyph_index;
                glyph_index += 1;

                let glyph = match config.style {
                    AnimationStyle::FadeIn => {
                        let p = progress(t, FADE_LINE_DELAY * line_idx as f32, FADE_DURATION);
                        GlyphInstance {
                            alpha: ease_in_out_sine(p),
                            ..GlyphInstance::at_rest(ch, line_idx, col, color)
                        }
                    }
                    AnimationStyle::Typewriter => {
                        if char_index > typed {
                            continue;
                        }
                        GlyphInstance::at_rest(ch, line_idx, col, color)
                    }
                    AnimationStyle::SlideIn => {
                        let p = progress(t, SLIDE_LINE_DELAY * line_idx as f32, SLIDE_DURATION);
                        let eased = ease_out_cubic(p);
                        let direction = if line_idx % 2 == 0 { -1.0 } else { 1.0 };
                        GlyphInstance {
                            offset: Vec2::new(
                                direction * (1.0 - eased) * SLIDE_DISTANCE * font_size,
                                0.0,
                            ),
                            alpha: eased,
                            ..GlyphInstance::at_rest(ch, line_idx, col, color)
                        }
                    }
                    AnimationStyle::Bounce => {
                        let p = progress(t, BOUNCE_GLYPH_DELAY * k as f32, BOUNCE_DURATION);
                        GlyphInstance {
                            offset: Vec2::new(
                                0.0,
                                -(1.0 - ease_out_bounce(p)) * BOUNCE_HEIGHT * font_size,
                            ),
                            alpha: linear(p * 4.0),
                            ..GlyphInstance::at_rest(ch, line_idx, col, color)
                        }
                    }
                    AnimationStyle::Wave => {
                        let phase = TAU * WAVE_HZ * t - WAVE_PHASE_PER_COL * col as f32;
                        GlyphInstance {
                            offset: Vec2::new(0.0, WAVE_AMPLITUDE * font_size * phase.sin()),
                            alpha: ease_in_out_sine(progress(t, 0.0, WAVE_FADE)),
                            ..GlyphInstance::at_rest(ch, line_idx, col, color)
                        }
                    }
                    AnimationStyle::Zoom => {
                        let p = progress(t, ZOOM_GLYPH_DELAY * k as f32, ZOOM_DURATION);
                        GlyphInstance {
                            scale: ease_out_back(p),
                            alpha: linear(p * 2.0),
                            ..GlyphInstance::at_rest(ch, line_idx, col, color)
                        }
                    }
                };

                if glyph.alpha > 0.0 && glyph.scale > 0.0 {
                    glyphs.push(glyph);
                }
            }

            // Cursor sitting at the end of a line
            if config.style == AnimationStyle::Typewriter
                && caret.is_none()
                && char_index == typed
                && (line_idx + 1 == layout.line_count() || line_len == 0)
            {
                caret = Some(Self::caret(line_idx, line_len, elapsed, color));
            }
        }

        if is_settled {
            caret = None;
        }

        Frame {
            glyphs,
            caret,
            elapsed,
            is_settled,
        }
    }

    fn caret(line: usize, col: usize, elapsed: f32, color: Color32) -> GlyphInstance {
        let visible = (elapsed * CARET_BLINK_HZ).fract() < 0.5;
        GlyphInstance {
            alpha: if visible { 1.0 } else { 0.0 },
            ..GlyphInstance::at_rest('|', line, col, color)
        }
    }
}

fn speed(config: &MessageConfig) -> f32 {
    if config.speed.is_finite() && config.speed > 0.0 {
        config.speed
    } else {
        1.0
    }
}
