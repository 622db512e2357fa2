/// Autoplay cadence for the project carousel.
pub const AUTOPLAY_INTERVAL_MS: u64 = 5000;

/// View-model for the project carousel and its detail modal.
///
/// Advancing wraps cyclically. While a project is selected (modal open)
/// the autoplay tick is suppressed so the carousel holds still behind
/// the modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
    selected: Option<usize>,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            index: 0,
            selected: None,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_active(&self, i: usize) -> bool {
        self.index == i
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    pub fn goto(&mut self, i: usize) {
        if i < self.len {
            self.index = i;
        }
    }

    /// Autoplay advance; a no-op while the detail modal is open.
    pub fn tick(&mut self) {
        if self.selected.is_none() {
            self.next();
        }
    }

    /// Open the detail modal for slide `i` (ignored when out of range).
    pub fn select(&mut self, i: usize) {
        if i < self.len {
            self.selected = Some(i);
            self.index = i;
        }
    }

    /// Close the modal and return to the carousel.
    pub fn close(&mut self) {
        self.selected = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_and_prev_wrap() {
        let mut c = Carousel::new(3);
        assert_eq!(c.len(), 3);
        assert_eq!(c.index(), 0);

        c.next();
        c.next();
        assert_eq!(c.index(), 2);
        c.next();
        assert_eq!(c.index(), 0);

        c.prev();
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn test_empty_carousel_is_inert() {
        let mut c = Carousel::new(0);
        assert!(c.is_empty());
        c.next();
        c.prev();
        c.tick();
        c.select(0);
        assert_eq!(c.index(), 0);
        assert_eq!(c.selected(), None);
    }

    #[test]
    fn test_tick_suppressed_while_modal_open() {
        let mut c = Carousel::new(3);
        c.tick();
        assert_eq!(c.index(), 1);

        c.select(1);
        assert_eq!(c.selected(), Some(1));
        c.tick();
        assert_eq!(c.index(), 1);

        c.close();
        c.tick();
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn test_select_snaps_carousel_to_slide() {
        let mut c = Carousel::new(3);
        c.select(2);
        assert_eq!(c.index(), 2);
        assert!(c.is_active(2));

        // Out of range selection is ignored
        c.close();
        c.select(7);
        assert_eq!(c.selected(), None);
    }

    #[test]
    fn test_goto_is_clamped() {
        let mut c = Carousel::new(3);
        c.goto(2);
        assert_eq!(c.index(), 2);
        c.goto(5);
        assert_eq!(c.index(), 2);
    }
}
