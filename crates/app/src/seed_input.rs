//! Text buffer behind the menu's seed box.

use cave_core::seed::MAX_SEED_CHARS;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SeedInput {
    text: String,
}

impl SeedInput {
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Appends `ch` unless the box is full or `ch` is a control character.
    pub fn push(&mut self, ch: char) -> bool {
        if ch.is_control() || self.text.chars().count() >= MAX_SEED_CHARS {
            return false;
        }
        self.text.push(ch);
        true
    }

    pub fn backspace(&mut self) {
        self.text.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stops_accepting_after_fifteen_characters() {
        let mut input = SeedInput::default();
        for ch in "abcdefghijklmnopq".chars() {
            input.push(ch);
        }
        assert_eq!(input.text(), "abcdefghijklmno");
        assert!(!input.push('z'));
    }

    #[test]
    fn limit_counts_characters_not_bytes() {
        let mut input = SeedInput::default();
        for _ in 0..15 {
            assert!(input.push('é'));
        }
        assert!(!input.push('é'));
    }

    #[test]
    fn ignores_control_characters() {
        let mut input = SeedInput::default();
        assert!(!input.push('\r'));
        assert!(!input.push('\u{8}'));
        assert_eq!(input.text(), "");
    }

    #[test]
    fn backspace_removes_last_character_and_tolerates_empty() {
        let mut input = SeedInput::default();
        input.backspace();
        input.push('4');
        input.push('2');
        input.backspace();
        assert_eq!(input.text(), "4");
    }
}
