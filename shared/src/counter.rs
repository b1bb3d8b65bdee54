//! Count-up animation for the visitor counter.

use thiserror::Error;

/// Default number of increments the animation takes.
pub const DEFAULT_COUNTER_STEPS: u32 = 50;

/// Why a counter element cannot be animated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CounterError {
    /// The text has no digits.
    #[error("no number in counter text `{0}`")]
    MissingNumber(String),
    /// The digits do not fit a `u64`.
    #[error("counter value `{0}` is out of range")]
    OutOfRange(String),
}

/// Counter text split around its first run of ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterText {
    prefix: String,
    suffix: String,
    target: u64,
}

impl CounterText {
    /// Split `text` such as `"Visitors: 120"` into template and target.
    pub fn parse(text: &str) -> Result<Self, CounterError> {
        let start = text
            .find(|c: char| c.is_ascii_digit())
            .ok_or_else(|| CounterError::MissingNumber(text.to_string()))?;
        let len = text[start..]
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(text.len() - start);
        let digits = &text[start..start + len];
        let target = digits
            .parse::<u64>()
            .map_err(|_| CounterError::OutOfRange(digits.to_string()))?;

        Ok(Self {
            prefix: text[..start].to_string(),
            suffix: text[start + len..].to_string(),
            target,
        })
    }

    /// The number the animation ends on.
    pub fn target(&self) -> u64 {
        self.target
    }

    /// Text shown while the counter reads `value`.
    pub fn render(&self, value: u64) -> String {
        format!("{}{}{}", self.prefix, value, self.suffix)
    }
}

/// Running count yielding each displayed value until the target is reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountUp {
    current: u64,
    target: u64,
    step: u64,
}

impl CountUp {
    /// Climb from zero to `target` in at most `steps` increments.
    pub fn new(target: u64, steps: u32) -> Self {
        let step = target.div_ceil(u64::from(steps.max(1))).max(1);
        Self {
            current: 0,
            target,
            step,
        }
    }
}

impl Iterator for CountUp {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.current >= self.target {
            return None;
        }
        self.current = self.current.saturating_add(self.step).min(self.target);
        Some(self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_keeps_surrounding_text() {
        let text = CounterText::parse("Visitors: 120").expect("parse");
        assert_eq!(text.target(), 120);
        assert_eq!(text.render(7), "Visitors: 7");

        let text = CounterText::parse("Seen by 42 people").expect("parse");
        assert_eq!(text.render(42), "Seen by 42 people");
    }

    #[test]
    fn parse_uses_first_digit_run() {
        let text = CounterText::parse("2024 visitors: 9").expect("parse");
        assert_eq!(text.target(), 2024);
        assert_eq!(text.render(1), "1 visitors: 9");
    }

    #[test]
    fn parse_rejects_missing_or_huge_numbers() {
        assert_eq!(
            CounterText::parse("Visitors: none"),
            Err(CounterError::MissingNumber("Visitors: none".to_string()))
        );
        assert!(matches!(
            CounterText::parse("99999999999999999999999"),
            Err(CounterError::OutOfRange(_))
        ));
    }

    #[test]
    fn count_up_lands_exactly_on_target() {
        let values: Vec<u64> = CountUp::new(120, DEFAULT_COUNTER_STEPS).collect();
        // ceil(120 / 50) == 3
        assert_eq!(values.first(), Some(&3));
        assert_eq!(values.last(), Some(&120));
        assert_eq!(values.len(), 40);
        assert!(values.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn small_targets_step_by_one() {
        let values: Vec<u64> = CountUp::new(3, DEFAULT_COUNTER_STEPS).collect();
        assert_eq!(values, [1, 2, 3]);
    }

    #[test]
    fn uneven_step_clamps_final_tick() {
        let values: Vec<u64> = CountUp::new(101, DEFAULT_COUNTER_STEPS).collect();
        assert_eq!(values[values.len() - 2], 99);
        assert_eq!(values.last(), Some(&101));
    }

    #[test]
    fn zero_target_never_ticks() {
        assert_eq!(CountUp::new(0, DEFAULT_COUNTER_STEPS).next(), None);
    }

    #[test]
    fn zero_steps_is_treated_as_one() {
        let mut ticks = CountUp::new(500, 0);
        assert_eq!(ticks.next(), Some(500));
        assert_eq!(ticks.next(), None);
    }
}
