//! Hero banner typing loop.
//!
//! `TextCycler` is the bare state machine: each `tick` yields the text to show
//! and how long to wait before the next tick. `Typewriter` binds a cycler to a
//! node and renders through a `Surface`; the browser side owns the timer.

use crate::config::TypingTimings;
use crate::surface::Surface;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Typing,
    Deleting,
}

/// Output of one tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
    pub text: String,
    pub delay_ms: u32,
}

#[derive(Debug)]
pub struct TextCycler {
    phrases: Vec<Vec<char>>,
    timings: TypingTimings,
    index: usize,
    cursor: usize,
    direction: Direction,
}

impl TextCycler {
    /// Returns `None` for an empty phrase list.
    pub fn new<S: AsRef<str>>(phrases: &[S], timings: TypingTimings) -> Option<Self> {
        if phrases.is_empty() {
            return None;
        }
        Some(Self {
            phrases: phrases.iter().map(|p| p.as_ref().chars().collect()).collect(),
            timings,
            index: 0,
            cursor: 0,
            direction: Direction::Typing,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Delay before the very first tick.
    pub fn start_delay(&self) -> u32 {
        self.timings.start_ms
    }

    pub fn current_text(&self) -> String {
        self.phrases[self.index][..self.cursor].iter().collect()
    }

    pub fn tick(&mut self) -> Step {
        let len = self.phrases[self.index].len();
        match self.direction {
            Direction::Typing => {
                let text = self.current_text();
                if self.cursor >= len {
                    self.direction = Direction::Deleting;
                    Step { text, delay_ms: self.timings.hold_ms }
                } else {
                    self.cursor += 1;
                    Step { text, delay_ms: self.timings.type_ms }
                }
            }
            Direction::Deleting => {
                self.cursor = self.cursor.saturating_sub(1);
                let text = self.current_text();
                if self.cursor == 0 {
                    self.index = (self.index + 1) % self.phrases.len();
                    self.direction = Direction::Typing;
                    Step { text, delay_ms: self.timings.next_phrase_ms }
                } else {
                    Step { text, delay_ms: self.timings.delete_ms }
                }
            }
        }
    }
}

/// A cycler bound to the banner element.
pub struct Typewriter<S: Surface> {
    node: S::Node,
    cycler: TextCycler,
}

impl<S: Surface> Typewriter<S> {
    pub fn new(node: S::Node, cycler: TextCycler) -> Self {
        Self { node, cycler }
    }

    pub fn start_delay(&self) -> u32 {
        self.cycler.start_delay()
    }

    /// Render one step and return the delay until the next.
    pub fn tick(&mut self, surface: &S) -> u32 {
        let step = self.cycler.tick();
        surface.set_text(&self.node, &step.text);
        step.delay_ms
    }
}
