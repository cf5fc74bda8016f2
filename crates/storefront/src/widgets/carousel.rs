//! Customer review carousel.

/// Which review slide is showing. Navigation wraps at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewSlider {
    len: usize,
    current: usize,
}

impl ReviewSlider {
    /// Slider over `len` slides, starting at the first.
    ///
    /// Returns `None` when there are no slides to show.
    #[must_use]
    pub const fn new(len: usize) -> Option<Self> {
        if len == 0 {
            None
        } else {
            Some(Self { len, current: 0 })
        }
    }

    /// Index of the active slide.
    #[must_use]
    pub const fn current(&self) -> usize {
        self.current
    }

    /// Advance to the next slide, wrapping to the first.
    pub const fn next(&mut self) -> usize {
        self.current = (self.current + 1) % self.len;
        self.current
    }

    /// Go back to the previous slide, wrapping to the last.
    pub const fn prev(&mut self) -> usize {
        self.current = (self.current + self.len - 1) % self.len;
        self.current
    }
}
