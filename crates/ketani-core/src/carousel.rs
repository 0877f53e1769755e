//! Hero carousel on the home page.
//!
//! The carousel advances one step per interval. The visible slide is
//! `step % slides.len()` and the entry transition alternates with the step:
//! even steps slide in vertically, odd steps horizontally.

use std::time::{Duration, Instant};

pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(6);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub image: String,
    pub caption: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Vertical,
    Horizontal,
}

#[derive(Debug, Clone)]
pub struct Carousel {
    slides: Vec<Slide>,
    interval: Duration,
    step: u64,
    last_advance: Instant,
}

impl Carousel {
    pub fn new(slides: Vec<Slide>, interval: Duration, now: Instant) -> Self {
        Self {
            slides,
            interval,
            step: 0,
            last_advance: now,
        }
    }

    /// The home page slides: container port, rail transport, ocean freight.
    pub fn builtin(interval: Duration, now: Instant) -> Self {
        let slide = |image: &str, caption: &str| Slide {
            image: image.to_string(),
            caption: caption.to_string(),
        };
        Self::new(
            vec![
                slide("/23.jpg", "Container port operations"),
                slide("/4.jpg", "Rail transport of bulk commodities"),
                slide("/12.jpg", "Ocean freight to global markets"),
            ],
            interval,
            now,
        )
    }

    /// Advance once for every full interval elapsed since the last advance.
    /// Returns `true` if the visible slide changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.slides.is_empty() || self.interval.is_zero() {
            return false;
        }
        let mut advanced = false;
        while now.saturating_duration_since(self.last_advance) >= self.interval {
            self.last_advance += self.interval;
            self.step += 1;
            advanced = true;
        }
        if advanced {
            tracing::debug!(step = self.step, index = self.index(), "carousel: advanced");
        }
        advanced
    }

    pub fn step(&self) -> u64 {
        self.step
    }

    pub fn index(&self) -> usize {
        if self.slides.is_empty() {
            0
        } else {
            (self.step % self.slides.len() as u64) as usize
        }
    }

    pub fn current(&self) -> Option<&Slide> {
        self.slides.get(self.index())
    }

    pub fn transition(&self) -> Transition {
        if self.step % 2 == 0 {
            Transition::Vertical
        } else {
            Transition::Horizontal
        }
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_first_slide_vertical() {
        let c = Carousel::builtin(DEFAULT_INTERVAL, Instant::now());
        assert_eq!(c.index(), 0);
        assert_eq!(c.transition(), Transition::Vertical);
        assert_eq!(c.current().map(|s| s.image.as_str()), Some("/23.jpg"));
    }

    #[test]
    fn tick_before_interval_does_nothing() {
        let t0 = Instant::now();
        let mut c = Carousel::builtin(DEFAULT_INTERVAL, t0);
        assert!(!c.tick(t0 + Duration::from_millis(5_999)));
        assert_eq!(c.step(), 0);
    }

    #[test]
    fn wraps_and_alternates() {
        let t0 = Instant::now();
        let mut c = Carousel::builtin(DEFAULT_INTERVAL, t0);
        assert!(c.tick(t0 + DEFAULT_INTERVAL));
        assert_eq!((c.index(), c.transition()), (1, Transition::Horizontal));

        c.tick(t0 + DEFAULT_INTERVAL * 3);
        assert_eq!(c.step(), 3);
        assert_eq!((c.index(), c.transition()), (0, Transition::Horizontal));
    }

    #[test]
    fn catches_up_after_a_stall() {
        let t0 = Instant::now();
        let mut c = Carousel::builtin(DEFAULT_INTERVAL, t0);
        c.tick(t0 + Duration::from_secs(20));
        assert_eq!(c.step(), 3);
        // Remainder carries over: next advance at 24s, not 26s.
        assert!(!c.tick(t0 + Duration::from_secs(23)));
        assert!(c.tick(t0 + Duration::from_secs(24)));
    }

    #[test]
    fn empty_carousel_never_advances() {
        let t0 = Instant::now();
        let mut c = Carousel::new(Vec::new(), DEFAULT_INTERVAL, t0);
        assert!(!c.tick(t0 + Duration::from_secs(60)));
        assert!(c.current().is_none());
    }
}
