//! Word wrapping for card text

/// Card text broken into display lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextLayout {
    lines: Vec<String>,
}

impl TextLayout {
    /// Greedy word wrap at `max_cols` characters.
    ///
    /// Explicit newlines always start a new line (blank lines are kept), runs
    /// of whitespace collapse to one space, and words longer than `max_cols`
    /// are split.
    pub fn new(text: &str, max_cols: usize) -> Self {
        let max_cols = max_cols.max(1);
        let mut lines = Vec::new();

        for paragraph in text.split('\n') {
            let paragraph = paragraph.trim_end_matches('\r');
            let mut current = String::new();
            let mut current_len = 0usize;

            for word in paragraph.split_whitespace() {
                let mut word: Vec<char> = word.chars().collect();

                if word.len() > max_cols {
                    if current_len > 0 {
                        lines.push(std::mem::take(&mut current));
                        current_len = 0;
                    }
                    while word.len() > max_cols {
                        let rest = word.split_off(max_cols);
                        lines.push(word.into_iter().collect());
                        word = rest;
                    }
                    current = word.iter().collect();
                    current_len = word.len();
                    continue;
                }

                if current_len == 0 {
                    current.extend(word.iter());
                    current_len = word.len();
                } else if current_len + 1 + word.len() <= max_cols {
                    current.push(' ');
                    current.extend(word.iter());
                    current_len += 1 + word.len();
                } else {
                    lines.push(std::mem::take(&mut current));
                    current.extend(word.iter());
                    current_len = word.len();
                }
            }

            lines.push(current);
        }

        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Width of the widest line, in characters
    pub fn longest_line(&self) -> usize {
        self.lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0)
    }

    /// Number of characters including spaces
    pub fn char_count(&self) -> usize {
        self.lines.iter().map(|line| line.chars().count()).sum()
    }

    /// Number of visible (non-space) glyphs
    pub fn glyph_count(&self) -> usize {
        self.lines
            .iter()
            .flat_map(|line| line.chars())
            .filter(|c| !c.is_whitespace())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.glyph_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_on_word_boundaries() {
        let layout = TextLayout::new("Happy birthday to my favourite person", 14);
        assert_eq!(
            layout.lines(),
            &["Happy birthday", "to my", "favourite", "person"]
        );
        assert_eq!(layout.longest_line(), 14);
    }

    #[test]
    fn test_keeps_explicit_newlines() {
        let layout = TextLayout::new("Dear Sam,\n\nThank you!\r\n", 24);
        assert_eq!(layout.lines(), &["Dear Sam,", "", "Thank you!", ""]);
        assert_eq!(layout.line_count(), 4);
    }

    #[test]
    fn test_splits_long_words() {
        let layout = TextLayout::new("a supercalifragilistic day", 8);
        assert_eq!(
            layout.lines(),
            &["a", "supercal", "ifragili", "stic day"]
        );
    }

    #[test]
    fn test_counts() {
        let layout = TextLayout::new("Hi  there", 24);
        assert_eq!(layout.lines(), &["Hi there"]);
        assert_eq!(layout.char_count(), 8);
        assert_eq!(layout.glyph_count(), 7);
        assert!(!layout.is_empty());
        assert!(TextLayout::new("   ", 10).is_empty());
    }
}
