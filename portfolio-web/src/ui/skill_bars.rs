use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum PercentError {
    #[error("expected a percentage like \"85%\", got {0:?}")]
    Malformed(String),
}

/// Fill target of a skill bar, clamped to `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Percent(f32);

impl Percent {
    pub fn new(value: f32) -> Self {
        Self(value.clamp(0.0, 100.0))
    }

    pub fn value(self) -> f32 {
        self.0
    }
}

impl FromStr for Percent {
    type Err = PercentError;

    /// Accepts `85%`, `85` and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let number = trimmed.strip_suffix('%').unwrap_or(trimmed).trim();
        number
            .parse::<f32>()
            .ok()
            .filter(|v| v.is_finite())
            .map(Self::new)
            .ok_or_else(|| PercentError::Malformed(s.to_string()))
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Width transitions for one bar: collapse immediately, then fill after the delay.
#[derive(Debug, Clone, PartialEq)]
pub struct FillAnimation {
    pub initial_width: &'static str,
    pub final_width: String,
}

/// One-shot fill per bar: the first sufficiently visible intersection starts
/// the animation and the bar stops being observed.
#[derive(Debug, Default)]
pub struct SkillBarAnimator {
    targets: Vec<Option<Percent>>,
    filled: HashSet<usize>,
}

impl SkillBarAnimator {
    /// `None` marks a bar whose target could not be read; it is never animated.
    pub fn new(targets: Vec<Option<Percent>>) -> Self {
        Self {
            targets,
            filled: HashSet::new(),
        }
    }

    pub fn on_intersection(&mut self, bar: usize, is_intersecting: bool) -> Option<FillAnimation> {
        if !is_intersecting || self.filled.contains(&bar) {
            return None;
        }
        let target = (*self.targets.get(bar)?)?;
        self.filled.insert(bar);
        Some(FillAnimation {
            initial_width: "0",
            final_width: target.to_string(),
        })
    }

    /// Whether the bar still needs intersection updates.
    pub fn is_observing(&self, bar: usize) -> bool {
        !self.filled.contains(&bar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_percent_forms() {
        assert_eq!("85%".parse::<Percent>(), Ok(Percent::new(85.0)));
        assert_eq!(" 42.5 % ".parse::<Percent>(), Ok(Percent::new(42.5)));
        assert_eq!("70".parse::<Percent>(), Ok(Percent::new(70.0)));
        assert_eq!("140%".parse::<Percent>().unwrap().value(), 100.0);
        assert!("lots".parse::<Percent>().is_err());
        assert!("".parse::<Percent>().is_err());
    }

    #[test]
    fn displays_as_css_width() {
        assert_eq!(Percent::new(90.0).to_string(), "90%");
        assert_eq!(Percent::new(12.5).to_string(), "12.5%");
    }

    #[test]
    fn fills_once_then_stops_observing() {
        let mut bars = SkillBarAnimator::new(vec![Some(Percent::new(90.0)), None]);

        assert_eq!(bars.on_intersection(0, false), None);
        let fill = bars.on_intersection(0, true).unwrap();
        assert_eq!(fill.initial_width, "0");
        assert_eq!(fill.final_width, "90%");
        assert!(!bars.is_observing(0));
        assert_eq!(bars.on_intersection(0, true), None);
    }

    #[test]
    fn bars_without_target_are_ignored() {
        let mut bars = SkillBarAnimator::new(vec![None]);
        assert_eq!(bars.on_intersection(0, true), None);
        assert_eq!(bars.on_intersection(7, true), None);
        assert!(bars.is_observing(0));
    }
}
