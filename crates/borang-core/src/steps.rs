//! The fixed five-step sequence and the position tracker.

use serde::{Deserialize, Serialize};

/// One step of the application form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Step {
    pub id: u8,
    pub title: &'static str,
    /// Abbreviated title for narrow layouts.
    pub short_title: &'static str,
}

/// The five steps of the rental application, in order.
pub const STEPS: [Step; 5] = [
    Step {
        id: 1,
        title: "Pilihan Unit",
        short_title: "Unit",
    },
    Step {
        id: 2,
        title: "Butiran Pemohon",
        short_title: "Pemohon",
    },
    Step {
        id: 3,
        title: "Butiran Pasangan",
        short_title: "Pasangan",
    },
    Step {
        id: 4,
        title: "Maklumat Tambahan",
        short_title: "Tambahan",
    },
    Step {
        id: 5,
        title: "Dokumen",
        short_title: "Dokumen",
    },
];

pub const FIRST_STEP: u8 = 1;
pub const LAST_STEP: u8 = 5;

/// Look up a step by id.
pub fn step(id: u8) -> Option<&'static Step> {
    STEPS.iter().find(|s| s.id == id)
}

/// Tracks the current position within the fixed step sequence.
///
/// Every transition is total: out-of-range or disallowed moves are silent
/// no-ops, never errors. The forward gate is supplied by the caller so the
/// sequencer stays independent of the form data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepSequencer {
    current: u8,
}

impl Default for StepSequencer {
    fn default() -> Self {
        Self::new()
    }
}

impl StepSequencer {
    pub fn new() -> Self {
        Self {
            current: FIRST_STEP,
        }
    }

    pub fn current(&self) -> u8 {
        self.current
    }

    pub fn current_step(&self) -> &'static Step {
        // current is maintained within [FIRST_STEP, LAST_STEP]
        const FALLBACK: Step = STEPS[0];
        step(self.current).unwrap_or(&FALLBACK)
    }

    pub fn is_first(&self) -> bool {
        self.current == FIRST_STEP
    }

    pub fn is_last(&self) -> bool {
        self.current == LAST_STEP
    }

    /// Move one step forward if `gate` holds and we are not on the last step.
    pub fn advance(&mut self, gate: bool) {
        if gate && self.current < LAST_STEP {
            self.current += 1;
        }
    }

    /// Move one step back; no-op on the first step.
    pub fn retreat(&mut self) {
        if self.current > FIRST_STEP {
            self.current -= 1;
        }
    }

    /// Jump directly to an already-visited step. Forward jumps (and jumps to
    /// the current step) are rejected so the forward path stays strictly
    /// linear and gated.
    pub fn jump_to(&mut self, target: u8) {
        if target >= FIRST_STEP && target < self.current {
            self.current = target;
        }
    }

    pub fn reset(&mut self) {
        self.current = FIRST_STEP;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_table_is_ordered() {
        for (i, s) in STEPS.iter().enumerate() {
            assert_eq!(s.id as usize, i + 1);
        }
        assert_eq!(step(3).unwrap().title, "Butiran Pasangan");
        assert!(step(0).is_none());
        assert!(step(6).is_none());
    }

    #[test]
    fn test_advance_respects_gate() {
        let mut seq = StepSequencer::new();
        seq.advance(false);
        assert_eq!(seq.current(), 1);
        seq.advance(true);
        assert_eq!(seq.current(), 2);
    }

    #[test]
    fn test_advance_stops_at_last_step() {
        let mut seq = StepSequencer::new();
        for _ in 0..10 {
            seq.advance(true);
        }
        assert_eq!(seq.current(), LAST_STEP);
        assert!(seq.is_last());
    }

    #[test]
    fn test_retreat_from_every_step() {
        for start in 2..=LAST_STEP {
            let mut seq = StepSequencer::new();
            for _ in 1..start {
                seq.advance(true);
            }
            assert_eq!(seq.current(), start);
            seq.retreat();
            assert_eq!(seq.current(), start - 1);
        }

        let mut seq = StepSequencer::new();
        seq.retreat();
        assert_eq!(seq.current(), FIRST_STEP);
    }

    #[test]
    fn test_jump_only_backward() {
        let mut seq = StepSequencer::new();
        for _ in 0..3 {
            seq.advance(true);
        }
        assert_eq!(seq.current(), 4);

        seq.jump_to(4); // current step
        assert_eq!(seq.current(), 4);
        seq.jump_to(5); // forward
        assert_eq!(seq.current(), 4);
        seq.jump_to(0); // out of range
        assert_eq!(seq.current(), 4);

        seq.jump_to(2);
        assert_eq!(seq.current(), 2);
        seq.jump_to(1);
        assert_eq!(seq.current(), 1);
    }
}
