use super::RunController;

const SHAKE_MS: f64 = 140.0;
const SHAKE_AMPLITUDE: f64 = 7.0;
const FRAME_MS: f64 = 16.67;
const EASE: f64 = 0.22;

impl RunController {
    /// Advances the run by `dt_ms` of simulated time.
    ///
    /// Tension creeps up only while the run is in progress; easing, shake,
    /// bloom and field drift keep going after it ends.
    pub fn tick(&mut self, dt_ms: f64) {
        let dt_ms = dt_ms.max(0.0);
        let rate = self.config.passive_tension_rate;
        let s = &mut self.state;
        s.clock_ms += dt_ms;

        if s.phase.is_running() {
            s.tension = (s.tension + dt_ms * rate).clamp(0.0, 1.0);
            if s.hint_penalty_remaining > 0 {
                s.tension = 1.0;
            }
            s.max_tension = s.max_tension.max(s.tension);
        } else {
            s.last_tension_delta = 0.0;
        }

        let t = (dt_ms / FRAME_MS).clamp(0.2, 2.0);
        s.player.x += (s.target.x - s.player.x) * EASE * t;
        s.player.y += (s.target.y - s.player.y) * EASE * t;

        s.shake_ms = (s.shake_ms - dt_ms).max(0.0);
        s.shake_offset = if s.shake_ms > 0.0 {
            let amp = (s.shake_ms / SHAKE_MS).powi(2) * SHAKE_AMPLITUDE;
            let dx = (s.rng.next_float() - 0.5) * amp;
            let dy = (s.rng.next_float() - 0.5) * amp;
            (dx, dy)
        } else {
            (0.0, 0.0)
        };

        let progress = 0.35 * (f64::from(s.valid_moves) / 50.0);
        s.bloom = (progress + 0.65 * s.tension).clamp(0.0, 1.0);
        s.field.update(dt_ms, s.bloom, s.tension);
    }
}
