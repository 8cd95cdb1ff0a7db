use std::sync::Arc;

use crate::model::{DialogueLine, LessonScript, Step};

/// The step at which the video panel appears.
pub const VIDEO_REVEAL_STEP: Step = Step::new(1);

/// The one step where a dedicated "next" button carries the lesson forward
/// instead of a clickable bubble.
pub const NEXT_BUTTON_STEP: Step = Step::new(1);

/// The single clickable thing (if any) that moves the lesson forward.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Affordance {
    /// The dialogue line at this index advances the lesson when activated.
    Line(usize),
    /// The dedicated "next" button advances the lesson.
    NextButton,
    /// Terminal state, nothing advances further.
    None,
}

/// The lesson progression state machine.
///
/// One step counter, one owner, one mutating entry point. Everything the
/// presentation layer shows is a pure function of `step` and the immutable
/// script: which lines are revealed, whether the video and key-concepts
/// panels are up, and which element (if any) is currently clickable.
#[derive(Clone, Debug)]
pub struct LessonSequencer {
    script: Arc<LessonScript>,
    step: Step,
}

impl LessonSequencer {
    /// A fresh sequencer at step 0.
    #[must_use]
    pub fn new(script: Arc<LessonScript>) -> Self {
        Self {
            script,
            step: Step::new(0),
        }
    }

    /// A sequencer resumed at an arbitrary step, clamped to the script's
    /// final step. A normal launch always starts at step 0.
    #[must_use]
    pub fn with_step(script: Arc<LessonScript>, step: Step) -> Self {
        let step = step.min(script.final_step());
        Self { script, step }
    }

    #[must_use]
    pub fn step(&self) -> Step {
        self.step
    }

    #[must_use]
    pub fn script(&self) -> &LessonScript {
        &self.script
    }

    #[must_use]
    pub fn final_step(&self) -> Step {
        self.script.final_step()
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.step >= self.final_step()
    }

    /// The sole state transition. Total: at the final step it is a no-op.
    pub fn advance(&mut self) {
        self.step = self.step.next_clamped(self.final_step());
    }

    /// Lines revealed at the current step, in script order.
    pub fn visible_lines(&self) -> impl Iterator<Item = (usize, &DialogueLine)> {
        let step = self.step;
        self.script
            .lines()
            .iter()
            .enumerate()
            .filter(move |(_, line)| line.visible_at(step))
    }

    /// Index of the last revealed line, if any.
    #[must_use]
    pub fn last_visible_index(&self) -> Option<usize> {
        self.visible_lines().map(|(index, _)| index).last()
    }

    #[must_use]
    pub fn video_visible(&self) -> bool {
        self.step >= VIDEO_REVEAL_STEP
    }

    #[must_use]
    pub fn next_button_visible(&self) -> bool {
        self.step == NEXT_BUTTON_STEP && !self.is_terminal()
    }

    #[must_use]
    pub fn concepts_visible(&self) -> bool {
        self.is_terminal()
    }

    /// Whether activating the line at `index` should advance the lesson.
    ///
    /// The general rule is "last revealed line, while the lesson is running
    /// and not parked on the next button". The opening line at step 0 is
    /// additionally special-cased even though the general rule already covers
    /// it; the original behavior is kept as-is rather than simplified.
    #[must_use]
    pub fn is_line_clickable(&self, index: usize) -> bool {
        let Some(last) = self.last_visible_index() else {
            return false;
        };
        let running = !self.is_terminal() && self.step != NEXT_BUTTON_STEP;
        if index == last && running {
            return true;
        }
        self.step == Step::new(0) && index == 0
    }

    /// The single affordance that currently routes to [`advance`].
    ///
    /// [`advance`]: Self::advance
    #[must_use]
    pub fn affordance(&self) -> Affordance {
        if self.is_terminal() {
            return Affordance::None;
        }
        if self.next_button_visible() {
            return Affordance::NextButton;
        }
        match self.last_visible_index() {
            Some(index) => Affordance::Line(index),
            None => Affordance::None,
        }
    }
}
