//! Hero image carousel.

use artisan_core::SliderConfig;

/// Which of N slides is active. The index always stays in `[0, count)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroSlider {
    count: usize,
    current: usize,
}

impl HeroSlider {
    /// A slider over `count` slides, showing the first one.
    pub fn new(count: usize) -> Self {
        Self { count, current: 0 }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Whether slide (and dot) `index` carries the active marker.
    pub fn is_active(&self, index: usize) -> bool {
        self.count > 0 && index == self.current
    }

    /// Activate slide `index`. Out-of-range indices are ignored.
    pub fn show(&mut self, index: usize) -> bool {
        if index >= self.count {
            return false;
        }
        self.current = index;
        true
    }

    /// Advance one slide, wrapping to the first.
    pub fn next(&mut self) -> usize {
        if self.count > 0 {
            self.current = (self.current + 1) % self.count;
        }
        self.current
    }

    /// Go back one slide, wrapping to the last.
    pub fn prev(&mut self) -> usize {
        if self.count > 0 {
            self.current = (self.current + self.count - 1) % self.count;
        }
        self.current
    }
}

/// Horizontal swipe direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved right to left: show the next slide.
    Left,
    /// Finger moved left to right: show the previous slide.
    Right,
}

/// Turns touch start/end screen coordinates into swipes.
#[derive(Debug, Clone, Copy)]
pub struct SwipeTracker {
    threshold: i32,
    start_x: Option<i32>,
}

impl SwipeTracker {
    pub fn new(threshold: i32) -> Self {
        Self {
            threshold,
            start_x: None,
        }
    }

    pub fn start(&mut self, x: i32) {
        self.start_x = Some(x);
    }

    /// Finish a touch. Travel of `threshold` pixels or less is not a swipe.
    pub fn end(&mut self, x: i32) -> Option<SwipeDirection> {
        let start = self.start_x.take()?;
        let diff = i64::from(start) - i64::from(x);
        if diff.abs() <= i64::from(self.threshold) {
            return None;
        }
        if diff > 0 {
            Some(SwipeDirection::Left)
        } else {
            Some(SwipeDirection::Right)
        }
    }
}

/// Autoplay interval timer.
///
/// `None` as the next due time means paused, the equivalent of a cleared
/// interval.
#[derive(Debug, Clone, Copy)]
pub struct Autoplay {
    interval_ms: u64,
    next_due: Option<u64>,
}

impl Autoplay {
    /// A paused timer.
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            next_due: None,
        }
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    pub fn next_due(&self) -> Option<u64> {
        self.next_due
    }

    pub fn pause(&mut self) {
        self.next_due = None;
    }

    /// (Re)start a full interval from `now`.
    pub fn resume(&mut self, now: u64) {
        self.next_due = Some(now.saturating_add(self.interval_ms));
    }

    /// Whether a step is due at `now`; if so, schedules the next one.
    pub fn tick(&mut self, now: u64) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                self.next_due = Some(now.saturating_add(self.interval_ms));
                true
            }
            _ => false,
        }
    }
}

/// Slider, autoplay and swipe wired together the way the hero behaves.
///
/// Any manual navigation pauses and restarts autoplay so the next automatic
/// step comes a full interval after the shopper's action.
#[derive(Debug, Clone, Copy)]
pub struct SlideControl {
    slider: HeroSlider,
    autoplay: Autoplay,
    swipe: SwipeTracker,
}

impl SlideControl {
    /// Show the first slide and start autoplay at `now`.
    pub fn new(count: usize, config: &SliderConfig, now: u64) -> Self {
        let mut autoplay = Autoplay::new(config.interval_ms);
        autoplay.resume(now);
        Self {
            slider: HeroSlider::new(count),
            autoplay,
            swipe: SwipeTracker::new(config.swipe_threshold_px),
        }
    }

    pub fn slider(&self) -> &HeroSlider {
        &self.slider
    }

    pub fn autoplay(&self) -> &Autoplay {
        &self.autoplay
    }

    pub fn current(&self) -> usize {
        self.slider.current()
    }

    pub fn next(&mut self, now: u64) -> usize {
        self.manual(now, HeroSlider::next)
    }

    pub fn prev(&mut self, now: u64) -> usize {
        self.manual(now, HeroSlider::prev)
    }

    /// Dot click.
    pub fn go_to(&mut self, index: usize, now: u64) -> usize {
        self.manual(now, |slider| {
            slider.show(index);
            slider.current()
        })
    }

    pub fn hover_enter(&mut self) {
        self.autoplay.pause();
    }

    pub fn hover_leave(&mut self, now: u64) {
        self.autoplay.resume(now);
    }

    pub fn touch_start(&mut self, x: i32) {
        self.swipe.start(x);
        self.autoplay.pause();
    }

    /// End a touch; a swipe steps once in its direction. Autoplay resumes
    /// either way.
    pub fn touch_end(&mut self, x: i32, now: u64) -> usize {
        match self.swipe.end(x) {
            Some(SwipeDirection::Left) => {
                self.slider.next();
            }
            Some(SwipeDirection::Right) => {
                self.slider.prev();
            }
            None => {}
        }
        self.autoplay.resume(now);
        self.slider.current()
    }

    /// Advance if the autoplay interval elapsed. Returns whether it did.
    pub fn tick(&mut self, now: u64) -> bool {
        if self.autoplay.tick(now) {
            self.slider.next();
            true
        } else {
            false
        }
    }

    fn manual(&mut self, now: u64, step: impl FnOnce(&mut HeroSlider) -> usize) -> usize {
        self.autoplay.pause();
        let index = step(&mut self.slider);
        self.autoplay.resume(now);
        index
    }
}
