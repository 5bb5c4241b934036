//! The fake terminal: a bounded buffer of colored log lines.

use std::collections::VecDeque;

/// Oldest lines are dropped once the buffer is full.
pub const FEED_CAPACITY: usize = 30;

/// Color class of a feed line, resolved to a real color by the theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Routine "attacker tooling" chatter
    Trace,
    /// Upload progress lines
    Bright,
    /// Sensitive-data discoveries
    Warn,
    /// Encryption / erasure / countdown drama
    Alert,
    /// Fake network gibberish
    Net,
    /// The closing it-was-a-prank notice
    Notice,
}

#[derive(Debug, Clone)]
pub struct FeedLine {
    pub text: String,
    pub tone: Tone,
}

/// Append-only log with a fixed capacity, plus `pop` for the typing effect.
#[derive(Debug, Default)]
pub struct Feed {
    lines: VecDeque<FeedLine>,
}

impl Feed {
    pub fn new() -> Self {
        Feed {
            lines: VecDeque::with_capacity(FEED_CAPACITY),
        }
    }

    /// Append a line, evicting the oldest if at capacity.
    pub fn push(&mut self, text: impl Into<String>, tone: Tone) {
        if self.lines.len() == FEED_CAPACITY {
            self.lines.pop_front();
        }
        self.lines.push_back(FeedLine {
            text: text.into(),
            tone,
        });
    }

    /// Remove the most recent line. Used to replace the provisional
    /// cursor line while a message is being "typed".
    pub fn pop(&mut self) -> Option<FeedLine> {
        self.lines.pop_back()
    }

    pub fn lines(&self) -> impl ExactSizeIterator<Item = &FeedLine> {
        self.lines.iter()
    }

    pub fn last(&self) -> Option<&FeedLine> {
        self.lines.back()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_is_never_exceeded() {
        let mut feed = Feed::new();
        for i in 0..500 {
            feed.push(format!("line {}", i), Tone::Trace);
            assert!(feed.len() <= FEED_CAPACITY);
        }
        assert_eq!(feed.len(), FEED_CAPACITY);
    }

    #[test]
    fn test_oldest_lines_are_dropped_first() {
        let mut feed = Feed::new();
        for i in 0..FEED_CAPACITY + 5 {
            feed.push(format!("line {}", i), Tone::Trace);
        }
        let first = feed.lines().next().unwrap();
        assert_eq!(first.text, "line 5");
    }

    #[test]
    fn test_typing_churn_stays_bounded() {
        let mut feed = Feed::new();
        // Simulate typing one character at a time for many long messages
        for msg in 0..40 {
            let text = format!("[CORE] message number {} being typed out", msg);
            let mut started = false;
            for end in 1..=text.len() {
                if started {
                    feed.pop();
                }
                feed.push(format!("{}_", &text[..end]), Tone::Trace);
                started = true;
                assert!(feed.len() <= FEED_CAPACITY);
            }
            feed.pop();
            feed.push(text, Tone::Trace);
        }
        assert_eq!(feed.len(), FEED_CAPACITY);
        assert!(!feed.last().unwrap().text.ends_with('_'));
    }
}
