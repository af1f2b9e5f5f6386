/// Frame-delta clamp for the driver side of the simulation.
///
/// The physics core integrates whatever delta it is handed; bounding that
/// delta is the frame loop's job. `TimeStep` encodes the policy: negative
/// deltas (clock weirdness) become zero, and a frame hitch can never feed
/// the solver more than `max_dt` seconds at once, which keeps fast bodies
/// from tunneling through thin walls.
pub struct TimeStep {
    max_dt: f32,
}

impl TimeStep {
    /// Default upper bound: one 60 Hz frame.
    pub const DEFAULT_MAX_DT: f32 = 1.0 / 60.0;

    pub fn new(max_dt: f32) -> Self {
        Self { max_dt }
    }

    /// Clamp a raw frame delta into `[0, max_dt]`.
    pub fn clamp(&self, frame_dt: f32) -> f32 {
        frame_dt.clamp(0.0, self.max_dt)
    }

    /// The configured upper bound.
    pub fn max_dt(&self) -> f32 {
        self.max_dt
    }
}

impl Default for TimeStep {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_DT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_deltas_pass_through() {
        let ts = TimeStep::default();
        let dt = ts.clamp(0.008);
        assert!((dt - 0.008).abs() < 1e-6);
    }

    #[test]
    fn hitches_are_capped() {
        let ts = TimeStep::default();
        let dt = ts.clamp(0.5); // a 500 ms stall
        assert!((dt - TimeStep::DEFAULT_MAX_DT).abs() < 1e-6);
    }

    #[test]
    fn negative_deltas_become_zero() {
        let ts = TimeStep::default();
        assert_eq!(ts.clamp(-0.016), 0.0);
    }

    #[test]
    fn custom_bound() {
        let ts = TimeStep::new(1.0 / 30.0);
        assert!((ts.clamp(1.0) - 1.0 / 30.0).abs() < 1e-6);
        assert!((ts.max_dt() - 1.0 / 30.0).abs() < 1e-6);
    }
}
