use crate::Game;

/// Maximum number of slides taken from the result set by default.
pub const DEFAULT_MAX_SLIDES: usize = 5;

/// Slider over the first few games of the result set.
///
/// The cursor wraps in both directions. Auto-advance ticks move it forward
/// unless the slider is paused (the pointer is over it).
#[derive(Debug, Clone, PartialEq)]
pub struct Slider {
    slides: Vec<Game>,
    index: usize,
    paused: bool,
    max_slides: usize,
}

impl Default for Slider {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SLIDES)
    }
}

impl Slider {
    pub fn new(max_slides: usize) -> Self {
        Self {
            slides: Vec::new(),
            index: 0,
            paused: false,
            max_slides,
        }
    }

    /// Takes the first `max_slides` games and rewinds to the first slide.
    pub fn load(&mut self, games: &[Game]) {
        self.slides = games.iter().take(self.max_slides).cloned().collect();
        self.index = 0;
    }

    pub fn next(&mut self) -> bool {
        let count = self.slides.len();
        if count == 0 {
            return false;
        }
        self.index = (self.index + 1) % count;
        true
    }

    pub fn prev(&mut self) -> bool {
        let count = self.slides.len();
        if count == 0 {
            return false;
        }
        self.index = (self.index + count - 1) % count;
        true
    }

    /// Timer-driven advance. Ignored while paused, so a tick that was already
    /// in flight when the timer stopped does nothing.
    pub fn auto_advance(&mut self) -> bool {
        if self.paused {
            return false;
        }
        self.next()
    }

    /// Returns `true` if the state changed.
    pub fn pause(&mut self) -> bool {
        !std::mem::replace(&mut self.paused, true)
    }

    /// Returns `true` if the state changed.
    pub fn resume(&mut self) -> bool {
        std::mem::replace(&mut self.paused, false)
    }

    pub fn slides(&self) -> &[Game] {
        &self.slides
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}
