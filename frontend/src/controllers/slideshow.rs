use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info, warn};
use thiserror::Error;

use crate::config::{SLIDESHOW_FIRST_DELAY_MS, SLIDESHOW_TICK_MS};
use crate::controllers::scheduler::{Scheduler, TaskHandle};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SlideshowError {
    #[error("a slideshow needs at least one slide")]
    NoSlides,
    #[error("slide index {index} is out of range for {len} slides")]
    InvalidIndex { index: usize, len: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageSlide {
    pub source: &'static str,
    pub alt_text: &'static str,
}

/// A fixed, non-empty, ordered list of slides.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slides(&'static [ImageSlide]);

impl Slides {
    pub fn new(slides: &'static [ImageSlide]) -> Result<Self, SlideshowError> {
        if slides.is_empty() {
            return Err(SlideshowError::NoSlides);
        }
        Ok(Self(slides))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static ImageSlide> {
        self.0.iter()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlideshowPhase {
    Idle,
    /// Armed and waiting for the first (longer) delay to elapse.
    Armed,
    Cycling,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlideshowState {
    len: usize,
    current_index: usize,
    has_armed_once: bool,
    phase: SlideshowPhase,
}

impl SlideshowState {
    pub fn new(slides: &Slides) -> Self {
        Self {
            len: slides.len(),
            current_index: 0,
            has_armed_once: false,
            phase: SlideshowPhase::Idle,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn phase(&self) -> SlideshowPhase {
        self.phase
    }

    /// Returns false when the slideshow was already armed during this mount.
    pub fn arm(&mut self) -> bool {
        if self.has_armed_once {
            return false;
        }
        self.has_armed_once = true;
        self.phase = SlideshowPhase::Armed;
        true
    }

    pub fn disarm(&mut self) {
        self.phase = SlideshowPhase::Idle;
    }

    /// Applies one timer firing. Returns the new index, or `None` for a stale
    /// tick that arrived while idle.
    pub fn tick(&mut self) -> Option<usize> {
        match self.phase {
            SlideshowPhase::Idle => return None,
            SlideshowPhase::Armed => {
                self.current_index = 1 % self.len;
                self.phase = SlideshowPhase::Cycling;
            }
            SlideshowPhase::Cycling => {
                self.current_index = (self.current_index + 1) % self.len;
            }
        }
        Some(self.current_index)
    }

    pub fn jump_to(&mut self, index: usize) -> Result<(), SlideshowError> {
        if index >= self.len {
            return Err(SlideshowError::InvalidIndex { index, len: self.len });
        }
        self.current_index = index;
        Ok(())
    }

    pub fn advance(&mut self, direction: Direction) -> usize {
        self.current_index = match direction {
            Direction::Forward => (self.current_index + 1) % self.len,
            Direction::Backward => (self.current_index + self.len - 1) % self.len,
        };
        self.current_index
    }
}

/// Drives a [`SlideshowState`] from a scheduler and notifies the view of
/// every index change.
pub struct SlideshowController<S: Scheduler> {
    state: Rc<RefCell<SlideshowState>>,
    scheduler: S,
    timer: Option<S::Handle>,
    on_change: Rc<dyn Fn(usize)>,
}

impl<S: Scheduler> SlideshowController<S> {
    pub fn new(slides: &Slides, scheduler: S, on_change: impl Fn(usize) + 'static) -> Self {
        Self {
            state: Rc::new(RefCell::new(SlideshowState::new(slides))),
            scheduler,
            timer: None,
            on_change: Rc::new(on_change),
        }
    }

    #[cfg(test)]
    pub fn current_index(&self) -> usize {
        self.state.borrow().current_index()
    }

    #[cfg(test)]
    pub fn phase(&self) -> SlideshowPhase {
        self.state.borrow().phase()
    }

    /// Arms when the slideshow enters the viewport and disarms when it leaves.
    pub fn on_visibility(&mut self, visible: bool) {
        if visible {
            self.arm();
        } else {
            self.disarm();
        }
    }

    pub fn arm(&mut self) {
        if !self.state.borrow_mut().arm() {
            debug!("Slideshow already armed once, ignoring");
            return;
        }
        info!("Slideshow armed, first advance in {}ms", SLIDESHOW_FIRST_DELAY_MS);

        let state = self.state.clone();
        let on_change = self.on_change.clone();
        let handle = self.scheduler.schedule_repeating_after(
            SLIDESHOW_FIRST_DELAY_MS,
            SLIDESHOW_TICK_MS,
            Rc::new(move || {
                let next = state.borrow_mut().tick();
                if let Some(index) = next {
                    on_change(index);
                }
            }),
        );
        self.cancel_timer();
        self.timer = Some(handle);
    }

    /// Stops the timer and keeps the current index.
    pub fn disarm(&mut self) {
        self.cancel_timer();
        let mut state = self.state.borrow_mut();
        if state.phase() != SlideshowPhase::Idle {
            info!("Slideshow disarmed at slide {}", state.current_index());
        }
        state.disarm();
    }

    pub fn jump_to(&self, index: usize) {
        let result = self.state.borrow_mut().jump_to(index);
        match result {
            Ok(()) => (self.on_change)(index),
            Err(e) => warn!("Ignoring slide selection: {}", e),
        }
    }

    pub fn advance(&self, direction: Direction) {
        let index = self.state.borrow_mut().advance(direction);
        (self.on_change)(index);
    }

    pub fn teardown(&mut self) {
        self.disarm();
    }

    fn cancel_timer(&mut self) {
        if let Some(mut timer) = self.timer.take() {
            timer.cancel();
        }
    }
}

impl<S: Scheduler> Drop for SlideshowController<S> {
    fn drop(&mut self) {
        self.cancel_timer();
    }
}
