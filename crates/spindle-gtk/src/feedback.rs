use gdk::prelude::*;
use gdk4 as gdk;
use spindle::SelectionFeedback;
use std::cell::Cell;

/// Audible tick for every item the wheel passes. Desktops have no selection
/// haptics, so the display bell stands in for both.
pub struct SelectionFeedbackGenerator {
    display: Option<gdk::Display>,
    muted: Cell<bool>,
}

impl SelectionFeedbackGenerator {
    pub fn new() -> Self {
        Self {
            display: gdk::Display::default(),
            muted: Cell::new(false),
        }
    }

    pub fn muted(self, muted: bool) -> Self {
        self.muted.set(muted);
        self
    }

    pub fn set_muted(&self, muted: bool) {
        self.muted.set(muted);
    }
}

impl Default for SelectionFeedbackGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionFeedback for SelectionFeedbackGenerator {
    fn selection_changed(&self) {
        log::trace!("Selection feedback");
        if self.muted.get() {
            return;
        }
        if let Some(display) = &self.display {
            display.beep();
        }
    }
}
