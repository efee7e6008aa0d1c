//! Achievement counters - count-up animation for metrics like `95%` or `500+`.

use std::fmt;
use std::time::Duration;

/// Frames in one counter animation.
pub const COUNTER_FRAMES: u32 = 50;
/// Total length of one counter animation.
pub const COUNTER_DURATION: Duration = Duration::from_millis(1500);

/// Text appended after the number. `%` is written before `+`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CounterSuffix {
    pub percent: bool,
    pub plus: bool,
}

impl CounterSuffix {
    pub const NONE: Self = Self {
        percent: false,
        plus: false,
    };
    pub const PERCENT: Self = Self {
        percent: true,
        plus: false,
    };
    pub const PLUS: Self = Self {
        percent: false,
        plus: true,
    };
}

impl fmt::Display for CounterSuffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.percent {
            write!(f, "%")?;
        }
        if self.plus {
            write!(f, "+")?;
        }
        Ok(())
    }
}

/// Final value a counter animates towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterTarget {
    pub value: u64,
    pub suffix: CounterSuffix,
}

impl CounterTarget {
    /// Parses the metric text. Returns `None` for text without a leading
    /// number or for zero, which are left as they are.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        let suffix = CounterSuffix {
            percent: text.contains('%'),
            plus: text.contains('+'),
        };
        let body = text.replace(['%', '+'], "");

        let digits: String = body
            .trim()
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        let value: u64 = digits.parse().ok()?;
        if value == 0 {
            return None;
        }
        Some(Self { value, suffix })
    }
}

/// Frame-by-frame count-up from zero to a target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterAnimation {
    target: CounterTarget,
}

impl CounterAnimation {
    pub fn new(target: CounterTarget) -> Self {
        Self { target }
    }

    pub fn frame_interval() -> Duration {
        COUNTER_DURATION / COUNTER_FRAMES
    }

    /// Text shown after `frame` increments (1-based). Clamped to the target
    /// from the last frame on.
    pub fn frame_text(&self, frame: u32) -> String {
        let increment = self.target.value as f64 / f64::from(COUNTER_FRAMES);
        let current = (increment * f64::from(frame)).min(self.target.value as f64);
        let shown = if frame >= COUNTER_FRAMES {
            self.target.value
        } else {
            current.floor() as u64
        };
        format!("{}{}", shown, self.target.suffix)
    }

    /// Every frame with its offset from the start of the animation.
    pub fn frames(&self) -> Vec<(Duration, String)> {
        (1..=COUNTER_FRAMES)
            .map(|frame| (Self::frame_interval() * frame, self.frame_text(frame)))
            .collect()
    }
}

/// Latch ensuring counters animate once per page view.
#[derive(Debug, Clone, Copy, Default)]
pub struct CounterTrigger {
    fired: bool,
}

impl CounterTrigger {
    /// Returns true only the first time it is called.
    pub fn fire(&mut self) -> bool {
        !std::mem::replace(&mut self.fired, true)
    }
}
