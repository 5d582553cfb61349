use constants::page::TYPEWRITER_CURSOR_COLOR;

/// What the element should show after one typing tick.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeStep {
    /// Visible prefix plus its width in `ch`.
    Typed { text: String, width_ch: usize },
    Finished,
}

/// Character-by-character reveal followed by a blinking cursor.
#[derive(Debug, Clone)]
pub struct Typewriter {
    chars: Vec<char>,
    revealed: usize,
    cursor_visible: bool,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            revealed: 0,
            cursor_visible: true,
        }
    }

    pub fn tick(&mut self) -> TypeStep {
        if self.revealed >= self.chars.len() {
            return TypeStep::Finished;
        }
        self.revealed += 1;
        TypeStep::Typed {
            text: self.visible_text(),
            width_ch: self.revealed,
        }
    }

    pub fn visible_text(&self) -> String {
        self.chars[..self.revealed].iter().collect()
    }

    pub fn is_finished(&self) -> bool {
        self.revealed >= self.chars.len()
    }

    /// Flip the cursor and return the border colour to apply.
    pub fn blink(&mut self) -> &'static str {
        self.cursor_visible = !self.cursor_visible;
        if self.cursor_visible {
            TYPEWRITER_CURSOR_COLOR
        } else {
            "transparent"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_one_character_per_tick() {
        let mut writer = Typewriter::new("Hi!");
        assert_eq!(
            writer.tick(),
            TypeStep::Typed {
                text: "H".into(),
                width_ch: 1
            }
        );
        writer.tick();
        assert_eq!(
            writer.tick(),
            TypeStep::Typed {
                text: "Hi!".into(),
                width_ch: 3
            }
        );
        assert!(writer.is_finished());
        assert_eq!(writer.tick(), TypeStep::Finished);
    }

    #[test]
    fn counts_characters_not_bytes() {
        let mut writer = Typewriter::new("héllo");
        let mut steps = 0;
        while let TypeStep::Typed { .. } = writer.tick() {
            steps += 1;
        }
        assert_eq!(steps, 5);
        assert_eq!(writer.visible_text(), "héllo");
    }

    #[test]
    fn empty_text_finishes_immediately() {
        let mut writer = Typewriter::new("");
        assert_eq!(writer.tick(), TypeStep::Finished);
    }

    #[test]
    fn cursor_alternates() {
        let mut writer = Typewriter::new("x");
        assert_eq!(writer.blink(), "transparent");
        assert_eq!(writer.blink(), "var(--primary)");
        assert_eq!(writer.blink(), "transparent");
    }
}
