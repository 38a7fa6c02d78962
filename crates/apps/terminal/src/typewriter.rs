//! Character-by-character reveal of a fixed transcript.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    chars: Vec<char>,
    revealed: usize,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            revealed: 0,
        }
    }

    /// Reveals the next character. Returns `false` once everything is already shown.
    pub fn advance(&mut self) -> bool {
        if self.is_complete() {
            return false;
        }
        self.revealed += 1;
        true
    }

    /// Skips straight to the full transcript.
    pub fn finish(&mut self) {
        self.revealed = self.chars.len();
    }

    pub fn is_complete(&self) -> bool {
        self.revealed >= self.chars.len()
    }

    pub fn revealed(&self) -> usize {
        self.revealed
    }

    pub fn visible(&self) -> String {
        self.chars[..self.revealed].iter().collect()
    }

    pub fn full_text(&self) -> String {
        self.chars.iter().collect()
    }
}
