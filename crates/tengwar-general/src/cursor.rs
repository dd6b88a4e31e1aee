// Character cursor with bounded backtracking.
//
// The matcher reads ahead speculatively. A failed match rewinds to a saved
// mark; a committed match that needs to hand characters back (or inject a
// substitute) replays them in front of the unread input.

use tengwar_core::character::PRIME;

/// A saved read position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mark(usize);

#[derive(Debug, Clone)]
pub struct Cursor {
    chars: Vec<char>,
    pos: usize,
}

impl Cursor {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            pos: 0,
        }
    }

    pub fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    /// Look `n` characters past the next one (`peek_nth(0) == peek()`).
    pub fn peek_nth(&self, n: usize) -> Option<char> {
        self.chars.get(self.pos + n).copied()
    }

    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        Some(c)
    }

    /// Consume the next character if it is `c`.
    pub fn eat(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    pub fn mark(&self) -> Mark {
        Mark(self.pos)
    }

    /// Return to a saved position; everything read since is unread again.
    pub fn rewind(&mut self, mark: Mark) {
        debug_assert!(mark.0 <= self.chars.len());
        self.pos = mark.0;
    }

    /// The text read since `mark`.
    pub fn since(&self, mark: Mark) -> String {
        self.chars[mark.0.min(self.pos)..self.pos].iter().collect()
    }

    /// Put `chars` in front of the unread input.
    pub fn replay(&mut self, chars: &[char]) {
        self.chars.splice(self.pos..self.pos, chars.iter().copied());
    }

    /// Consume any run of primes and return how many there were.
    pub fn count_primes(&mut self) -> usize {
        let mut count = 0;
        while self.eat(PRIME) {
            count += 1;
        }
        count
    }
}
