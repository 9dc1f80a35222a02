/// Converts variable frame deltas into whole fixed simulation steps.
///
/// The platformer tuning (speeds, gravity, friction) is expressed per tick
/// and assumes a uniform cadence, so the host loop must never scale a step
/// by wall-clock delta. The pacer carries fractional remainders between
/// frames and caps catch-up after a stall.
pub struct TickPacer {
    step: f32,
    carry: f32,
}

/// Longest stall, in steps, the pacer will try to simulate away. Anything
/// beyond this drops time instead of spiraling.
const MAX_CATCHUP_STEPS: u32 = 5;

impl TickPacer {
    pub fn at_hz(hz: f32) -> Self {
        Self {
            step: 1.0 / hz,
            carry: 0.0,
        }
    }

    /// The fixed step length in seconds.
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Feed one frame's wall-clock delta; returns how many fixed steps to
    /// simulate now.
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        self.carry = (self.carry + frame_dt).min(self.step * MAX_CATCHUP_STEPS as f32);
        let steps = (self.carry / self.step) as u32;
        self.carry -= steps as f32 * self.step;
        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_frame_is_one_step() {
        let mut pacer = TickPacer::at_hz(60.0);
        assert_eq!(pacer.advance(1.0 / 60.0), 1);
    }

    #[test]
    fn fractional_frames_carry_over() {
        let mut pacer = TickPacer::at_hz(60.0);
        assert_eq!(pacer.advance(0.008), 0);
        assert_eq!(pacer.advance(0.010), 1);
    }

    #[test]
    fn stall_catch_up_is_capped() {
        let mut pacer = TickPacer::at_hz(60.0);
        // Two seconds of stall is far beyond the cap
        assert_eq!(pacer.advance(2.0), MAX_CATCHUP_STEPS);
    }

    #[test]
    fn steady_cadence_averages_one_step_per_frame() {
        let mut pacer = TickPacer::at_hz(60.0);
        let mut total = 0;
        for _ in 0..600 {
            total += pacer.advance(1.0 / 60.0);
        }
        assert_eq!(total, 600);
    }
}
