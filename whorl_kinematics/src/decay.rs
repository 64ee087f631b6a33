// Copyright 2025 the Whorl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fling decay model: release velocity → travel distance and duration.

use core::fmt::Debug;

/// Maps a release velocity onto a fling's total travel and duration.
///
/// Hosts with a platform-native fling curve implement this trait; everyone
/// else uses [`ExponentialDecay`]. Velocities are in pixels per second,
/// y-down positive; distances are in pixels; durations in milliseconds.
pub trait DecayCurve: Debug {
    /// Signed travel distance for a fling released at `velocity`.
    fn distance(&self, velocity: f64) -> f64;

    /// Time until the fling comes to rest, in milliseconds.
    fn duration_ms(&self, velocity: f64) -> u64;
}

/// Exponential velocity decay: `v(t) = v₀ · e^(−friction·t)`.
///
/// The fling is considered at rest once the speed drops below
/// `rest_velocity`, which caps both the travel distance and the duration in
/// closed form. Defaults give a flick of 2000 px/s roughly a third of a
/// second of travel over ~330 px, in the ballpark of platform scrollers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentialDecay {
    /// Decay rate in 1/seconds. Higher values stop the wheel sooner.
    pub friction: f64,
    /// Speed in px/s below which the fling is treated as stopped.
    pub rest_velocity: f64,
}

impl Default for ExponentialDecay {
    fn default() -> Self {
        Self {
            friction: 6.0,
            rest_velocity: 50.0,
        }
    }
}

impl DecayCurve for ExponentialDecay {
    fn distance(&self, velocity: f64) -> f64 {
        let speed = velocity.abs();
        if speed <= self.rest_velocity {
            return 0.0;
        }
        // Integral of v(t) from 0 until the speed reaches rest_velocity.
        (velocity - velocity.signum() * self.rest_velocity) / self.friction
    }

    fn duration_ms(&self, velocity: f64) -> u64 {
        let speed = velocity.abs();
        if speed <= self.rest_velocity {
            return 0;
        }
        let seconds = (speed / self.rest_velocity).ln() / self.friction;
        #[expect(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "Durations are bounded to a few seconds and non-negative"
        )]
        let millis = (seconds * 1000.0).round() as u64;
        millis
    }
}

#[cfg(test)]
mod tests {
    use super::{DecayCurve, ExponentialDecay};

    #[test]
    fn below_rest_velocity_goes_nowhere() {
        let decay = ExponentialDecay::default();
        assert_eq!(decay.distance(30.0), 0.0);
        assert_eq!(decay.distance(-30.0), 0.0);
        assert_eq!(decay.duration_ms(30.0), 0);
    }

    #[test]
    fn distance_is_odd_in_velocity() {
        let decay = ExponentialDecay::default();
        let down = decay.distance(2000.0);
        let up = decay.distance(-2000.0);
        assert!(down > 0.0);
        assert!((down + up).abs() < 1e-9);
    }

    #[test]
    fn faster_release_travels_farther_and_longer() {
        let decay = ExponentialDecay::default();
        assert!(decay.distance(4000.0) > decay.distance(1000.0));
        assert!(decay.duration_ms(4000.0) > decay.duration_ms(1000.0));
    }

    #[test]
    fn default_calibration_is_plausible() {
        let decay = ExponentialDecay::default();
        let d = decay.distance(2000.0);
        assert!((300.0..400.0).contains(&d), "distance was {d}");
        let t = decay.duration_ms(2000.0);
        assert!((400..800).contains(&t), "duration was {t}");
    }
}
