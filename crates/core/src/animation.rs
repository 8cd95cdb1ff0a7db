use std::time::Duration;

/// Number of staged phases in the key-concepts illustration, including the
/// initial blank phase 0.
pub const PHASE_COUNT: u8 = 6;

/// One scheduled phase change in the illustration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhaseCue {
    pub delay: Duration,
    pub phase: u8,
}

/// Fixed schedule for the trigonometry illustration, measured from mount.
///
/// 1: plane and target appear, 2: altitude line draws, 3: distance line
/// draws, 4: hypotenuse and angle appear, 5: formula overlay.
pub const PHASE_SCHEDULE: [PhaseCue; 5] = [
    PhaseCue {
        delay: Duration::from_millis(500),
        phase: 1,
    },
    PhaseCue {
        delay: Duration::from_millis(1500),
        phase: 2,
    },
    PhaseCue {
        delay: Duration::from_millis(2500),
        phase: 3,
    },
    PhaseCue {
        delay: Duration::from_millis(3500),
        phase: 4,
    },
    PhaseCue {
        delay: Duration::from_millis(4500),
        phase: 5,
    },
];

/// The phase the illustration should show after `elapsed` time on screen.
#[must_use]
pub fn phase_at(elapsed: Duration) -> u8 {
    PHASE_SCHEDULE
        .iter()
        .rev()
        .find(|cue| elapsed >= cue.delay)
        .map_or(0, |cue| cue.phase)
}
