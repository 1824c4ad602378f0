//! Pausing and simulation speed.

use crate::kinematics::DeltaTime;
use std::time::Duration;

/// Whether the bodies are moving.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimulationState {
    #[default]
    Running,
    Paused,
}
impl SimulationState {
    #[inline(always)]
    pub const fn from_paused(paused: bool) -> Self {
        if paused { Self::Paused } else { Self::Running }
    }
    #[inline(always)]
    pub const fn is_paused(self) -> bool {
        matches!(self, Self::Paused)
    }
    #[inline(always)]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Running => Self::Paused,
            Self::Paused => Self::Running,
        }
    }
}

/// Error returned when a speed slider value is outside of [`SpeedDivisor::SLIDER_RANGE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("speed {0} is outside of {min}..={max}", min = SpeedDivisor::SLIDER_MIN, max = SpeedDivisor::SLIDER_MAX)]
pub struct SpeedOutOfRange(pub u32);

/// Converts frame times into simulated time.
///
/// A frame that took `ms` milliseconds advances the simulation by `ms / divisor` time units. The speed control works
/// on a slider value instead, where a higher value is faster, and the divisor is `SLIDER_OFFSET - slider`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpeedDivisor(u32);
impl SpeedDivisor {
    pub const SLIDER_MIN: u32 = 10_000;
    pub const SLIDER_MAX: u32 = 1_000_000;
    pub const SLIDER_RANGE: std::ops::RangeInclusive<u32> = Self::SLIDER_MIN..=Self::SLIDER_MAX;
    /// How far a single nudge moves the slider.
    pub const SLIDER_STEP: u32 = 50_000;
    const SLIDER_OFFSET: u32 = 1_010_000;

    /// The slowest speed.
    pub const SLOWEST: Self = Self(Self::SLIDER_OFFSET - Self::SLIDER_MIN);

    /// Get the divisor for a slider value.
    pub const fn from_slider(value: u32) -> Result<Self, SpeedOutOfRange> {
        if value < Self::SLIDER_MIN || value > Self::SLIDER_MAX {
            Err(SpeedOutOfRange(value))
        } else {
            Ok(Self(Self::SLIDER_OFFSET - value))
        }
    }
    /// Get the divisor for a slider value, clamping it to the valid range.
    pub const fn from_slider_clamped(value: u32) -> Self {
        let value = if value < Self::SLIDER_MIN {
            Self::SLIDER_MIN
        } else if value > Self::SLIDER_MAX {
            Self::SLIDER_MAX
        } else {
            value
        };
        Self(Self::SLIDER_OFFSET - value)
    }
    /// The slider value that produces this divisor.
    #[inline(always)]
    pub const fn slider(self) -> u32 {
        Self::SLIDER_OFFSET - self.0
    }
    #[inline(always)]
    pub const fn get(self) -> u32 {
        self.0
    }
    /// Simulated time for a frame.
    pub fn delta(self, frame: Duration) -> DeltaTime {
        DeltaTime::clamped(frame.as_secs_f64() * 1000.0 / self.0 as f64)
    }
}
impl Default for SpeedDivisor {
    fn default() -> Self {
        Self::SLOWEST
    }
}

/// Playback controls for the simulation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, bevy_ecs_macros::Resource)]
pub struct Playback {
    pub state: SimulationState,
    pub divisor: SpeedDivisor,
}
impl Playback {
    pub const fn new(state: SimulationState, divisor: SpeedDivisor) -> Self {
        Self { state, divisor }
    }
    #[inline(always)]
    pub const fn is_paused(&self) -> bool {
        self.state.is_paused()
    }
    pub fn set_paused(&mut self, paused: bool) {
        self.state = SimulationState::from_paused(paused);
    }
    pub fn toggle_paused(&mut self) {
        self.state = self.state.toggled();
    }
    /// Set the speed from a slider value. The current speed is kept if it's out of range.
    pub fn set_speed(&mut self, slider: u32) -> Result<(), SpeedOutOfRange> {
        self.divisor = SpeedDivisor::from_slider(slider)?;
        Ok(())
    }
    /// Move the slider by `steps` multiples of [`SpeedDivisor::SLIDER_STEP`], staying in range.
    pub fn nudge_speed(&mut self, steps: i32) {
        let slider = i64::from(self.divisor.slider())
            + i64::from(steps) * i64::from(SpeedDivisor::SLIDER_STEP);
        let clamped = slider.clamp(
            i64::from(SpeedDivisor::SLIDER_MIN),
            i64::from(SpeedDivisor::SLIDER_MAX),
        );
        self.divisor = SpeedDivisor::from_slider_clamped(clamped as u32);
    }
    /// Simulated time for a frame at the current speed.
    ///
    /// This doesn't care whether the simulation is paused; that's handled when advancing.
    #[inline(always)]
    pub fn delta(&self, frame: Duration) -> DeltaTime {
        self.divisor.delta(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn slider_maps_to_divisor() {
        assert_eq!(SpeedDivisor::from_slider(10_000).map(SpeedDivisor::get), Ok(1_000_000));
        assert_eq!(SpeedDivisor::from_slider(1_000_000).map(SpeedDivisor::get), Ok(10_000));
        assert_eq!(SpeedDivisor::from_slider(9_999), Err(SpeedOutOfRange(9_999)));
        assert_eq!(
            SpeedDivisor::from_slider(1_000_001),
            Err(SpeedOutOfRange(1_000_001))
        );
        assert_eq!(SpeedDivisor::default(), SpeedDivisor::SLOWEST);
        for v in [10_000, 123_456, 1_000_000] {
            assert_eq!(SpeedDivisor::from_slider_clamped(v).slider(), v);
        }
        assert_eq!(SpeedDivisor::from_slider_clamped(0).slider(), 10_000);
        assert_eq!(SpeedDivisor::from_slider_clamped(u32::MAX).slider(), 1_000_000);
    }

    #[test]
    fn frame_delta() {
        let divisor = SpeedDivisor::SLOWEST;
        assert_relative_eq!(
            divisor.delta(Duration::from_millis(16)).get(),
            1.6e-5,
            max_relative = 1e-12
        );
        let fast = SpeedDivisor::from_slider_clamped(SpeedDivisor::SLIDER_MAX);
        assert_relative_eq!(fast.delta(Duration::from_secs(1)).get(), 0.1, max_relative = 1e-12);
        assert_eq!(divisor.delta(Duration::ZERO), DeltaTime::ZERO);
    }

    #[test]
    fn pause_toggles() {
        let mut playback = Playback::default();
        assert!(!playback.is_paused());
        playback.toggle_paused();
        assert!(playback.is_paused());
        playback.set_paused(true);
        assert!(playback.is_paused());
        playback.set_paused(false);
        assert_eq!(playback.state, SimulationState::Running);
    }

    #[test]
    fn speed_changes() {
        let mut playback = Playback::default();
        assert_eq!(playback.set_speed(5), Err(SpeedOutOfRange(5)));
        assert_eq!(playback.divisor, SpeedDivisor::SLOWEST);
        assert_eq!(playback.set_speed(510_000), Ok(()));
        assert_eq!(playback.divisor.get(), 500_000);
        playback.nudge_speed(2);
        assert_eq!(playback.divisor.slider(), 610_000);
        playback.nudge_speed(-100);
        assert_eq!(playback.divisor.slider(), SpeedDivisor::SLIDER_MIN);
        playback.nudge_speed(100);
        assert_eq!(playback.divisor.slider(), SpeedDivisor::SLIDER_MAX);
    }
}
