use crate::config::{REVEAL_ALL_FRACTION, SCROLL_TAB_FRACTION};

pub fn tab_visible(scroll_y: f64, viewport_height: f64) -> bool {
    scroll_y > viewport_height * SCROLL_TAB_FRACTION
}

/// Show/hide rule for the floating Instagram tab.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollTabController {
    is_visible: bool,
}

impl ScrollTabController {
    pub fn on_scroll(&mut self, scroll_y: f64, viewport_height: f64) {
        self.is_visible = tab_visible(scroll_y, viewport_height);
    }

    pub fn is_visible(&self) -> bool {
        self.is_visible
    }
}

/// Forces every pending entrance animation to its final state once the page
/// has been scrolled a fifth of a screen. Latches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealFallback {
    revealed: bool,
}

impl RevealFallback {
    pub fn on_scroll(&mut self, scroll_y: f64, viewport_height: f64) {
        if !self.revealed && viewport_height > 0.0 && scroll_y / viewport_height >= REVEAL_ALL_FRACTION {
            self.revealed = true;
        }
    }

    pub fn revealed(&self) -> bool {
        self.revealed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tab_after(scroll_y: f64, viewport_height: f64) -> bool {
        let mut tab = ScrollTabController::default();
        tab.on_scroll(scroll_y, viewport_height);
        tab.is_visible()
    }

    #[test]
    fn tab_boundary_is_eighty_percent_of_the_viewport() {
        assert!(!tab_after(639.0, 800.0));
        assert!(!tab_after(640.0, 800.0));
        assert!(tab_after(641.0, 800.0));
        assert!(tab_visible(641.0, 800.0));
    }

    #[test]
    fn tab_hides_again_when_scrolling_back_up() {
        let mut tab = ScrollTabController::default();
        tab.on_scroll(2_000.0, 800.0);
        assert!(tab.is_visible());
        tab.on_scroll(0.0, 800.0);
        assert!(!tab.is_visible());
        tab.on_scroll(0.0, 800.0);
        assert!(!tab.is_visible());
    }

    #[test]
    fn reveal_fallback_latches_at_twenty_percent() {
        let mut reveal = RevealFallback::default();
        reveal.on_scroll(159.0, 800.0);
        assert!(!reveal.revealed());
        reveal.on_scroll(160.0, 800.0);
        assert!(reveal.revealed());
        reveal.on_scroll(0.0, 800.0);
        assert!(reveal.revealed());
    }

    #[test]
    fn reveal_fallback_ignores_an_unknown_viewport() {
        let mut reveal = RevealFallback::default();
        reveal.on_scroll(500.0, 0.0);
        assert!(!reveal.revealed());
    }
}
