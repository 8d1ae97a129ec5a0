//! Run session state - the timed course attempt.

use bevy::prelude::*;

/// State of the current course attempt.
///
/// An explicit resource rather than scene-global state, so a session can
/// be constructed and driven headless.
#[derive(Resource, Debug)]
pub struct RunSession {
    started: bool,
    finished: bool,
    elapsed_secs: f32,
    start_translation: Vec3,
    start_rotation: Quat,
}

impl Default for RunSession {
    fn default() -> Self {
        Self::at_start_pose(Vec3::ZERO, Quat::IDENTITY)
    }
}

impl RunSession {
    /// Create a session whose respawns return to the given pose.
    pub fn at_start_pose(translation: Vec3, rotation: Quat) -> Self {
        Self {
            started: false,
            finished: false,
            elapsed_secs: 0.0,
            start_translation: translation,
            start_rotation: rotation,
        }
    }

    /// Begin the run. Returns false if it had already begun.
    pub fn start(&mut self) -> bool {
        if self.started {
            return false;
        }
        self.started = true;
        self.elapsed_secs = 0.0;
        true
    }

    /// Complete the run, returning the final time.
    ///
    /// A no-op unless the run is underway: not started or already
    /// finished both return None.
    pub fn finish(&mut self) -> Option<f32> {
        if !self.started || self.finished {
            return None;
        }
        self.finished = true;
        Some(self.elapsed_secs)
    }

    /// Advance the clock while the run is underway.
    pub fn tick(&mut self, dt: f32) {
        if self.started && !self.finished {
            self.elapsed_secs += dt;
        }
    }

    /// Put the session back to not-started for a fresh attempt.
    pub fn reset(&mut self) {
        self.started = false;
        self.finished = false;
        self.elapsed_secs = 0.0;
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn elapsed_secs(&self) -> f32 {
        self.elapsed_secs
    }

    pub fn start_translation(&self) -> Vec3 {
        self.start_translation
    }

    pub fn start_rotation(&self) -> Quat {
        self.start_rotation
    }
}

/// Format a run time as `mm:ss.cc`.
pub fn format_time(seconds: f32) -> String {
    let minutes = (seconds / 60.0).floor() as u32;
    let secs = (seconds % 60.0).floor() as u32;
    let centis = ((seconds * 100.0) % 100.0).floor() as u32;
    format!("{:02}:{:02}.{:02}", minutes, secs, centis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_is_idempotent() {
        let mut session = RunSession::default();
        assert!(!session.is_started());

        assert!(session.start());
        assert!(session.is_started());

        session.tick(3.0);
        // A second start neither restarts nor rewinds the clock
        assert!(!session.start());
        assert_eq!(session.elapsed_secs(), 3.0);
    }

    #[test]
    fn test_finish_requires_a_running_session() {
        let mut session = RunSession::default();

        // Finishing before starting is a no-op
        assert_eq!(session.finish(), None);
        assert!(!session.is_finished());

        session.start();
        session.tick(12.5);
        assert_eq!(session.finish(), Some(12.5));

        // Finishing twice is a no-op
        assert_eq!(session.finish(), None);
    }

    #[test]
    fn test_clock_only_runs_mid_attempt() {
        let mut session = RunSession::default();

        session.tick(1.0);
        assert_eq!(session.elapsed_secs(), 0.0);

        session.start();
        session.tick(1.0);
        session.finish();
        session.tick(1.0);
        assert_eq!(session.elapsed_secs(), 1.0);
    }

    #[test]
    fn test_reset_returns_to_fresh_state() {
        let mut session = RunSession::at_start_pose(Vec3::new(1.0, 2.0, 3.0), Quat::IDENTITY);
        session.start();
        session.tick(5.0);
        session.finish();

        session.reset();
        assert!(!session.is_started());
        assert!(!session.is_finished());
        assert_eq!(session.elapsed_secs(), 0.0);
        // The recorded start pose survives resets
        assert_eq!(session.start_translation(), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_time_formatting() {
        assert_eq!(format_time(0.0), "00:00.00");
        assert_eq!(format_time(61.25), "01:01.25");
        assert_eq!(format_time(125.5), "02:05.50");
    }
}
