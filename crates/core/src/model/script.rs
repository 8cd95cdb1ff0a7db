use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{DialogueLine, Speaker, Step};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScriptError {
    #[error("a lesson script needs at least one line")]
    Empty,

    #[error("the opening line must be revealed at step 0, found step {found}")]
    GatedOpening { found: Step },

    #[error("reveal threshold at line {index} goes backwards ({previous} -> {found})")]
    ThresholdRegression {
        index: usize,
        previous: Step,
        found: Step,
    },
}

/// The immutable ordered lesson script.
///
/// Created once at startup and shared read-only for the process lifetime.
/// Validation guarantees the sequencer's gating assumptions: there is an
/// opening line at step 0 and thresholds never decrease, so the visible
/// prefix only ever grows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<DialogueLine>", into = "Vec<DialogueLine>")]
pub struct LessonScript {
    lines: Vec<DialogueLine>,
}

impl LessonScript {
    /// Validates and wraps a sequence of dialogue lines.
    ///
    /// # Errors
    ///
    /// Returns `ScriptError::Empty` for an empty sequence,
    /// `ScriptError::GatedOpening` if the first line is not revealed at
    /// step 0, and `ScriptError::ThresholdRegression` if a later line has a
    /// lower threshold than the one before it.
    pub fn new(lines: Vec<DialogueLine>) -> Result<Self, ScriptError> {
        let Some(first) = lines.first() else {
            return Err(ScriptError::Empty);
        };
        if first.reveal_at() != Step::new(0) {
            return Err(ScriptError::GatedOpening {
                found: first.reveal_at(),
            });
        }
        for (index, pair) in lines.windows(2).enumerate() {
            if pair[1].reveal_at() < pair[0].reveal_at() {
                return Err(ScriptError::ThresholdRegression {
                    index: index + 1,
                    previous: pair[0].reveal_at(),
                    found: pair[1].reveal_at(),
                });
            }
        }
        Ok(Self { lines })
    }

    /// The built-in Top Gun: Maverick trigonometry lesson.
    ///
    /// Note the gap: the second line waits for step 2. Step 1 reveals the
    /// movie clip instead of new dialogue.
    #[must_use]
    pub fn builtin() -> Self {
        let lines = vec![
            DialogueLine::new(
                Speaker::Teacher,
                "안녕하세요? 오늘은 혈흔분석에 이은 또 다른 삼각비의 실제 응용에 대해 배워볼꺼에요! 바로 탑건 메버릭, 영화 속에 숨겨진 삼각비에요!",
                Step::new(0),
            ),
            DialogueLine::new(
                Speaker::Teacher,
                "영화에서 비행기가 산과 표적 사이의 거리와 각도를 계산하는 장면을 보셨나요? 이런 상황에서 삼각비가 어떻게 활용될 수 있을지 생각해 보셨나요?",
                Step::new(2),
            ),
            DialogueLine::new(Speaker::Student, "네 생각해봤어요", Step::new(3)),
            DialogueLine::new(
                Speaker::Teacher,
                "좋아요! 영화에서 비행기가 산악 지형을 통과하면서 표적을 공격하는 장면이 있었죠.\n\n이런 상황에서 삼각비는 매우 중요합니다. 예를 들어, 비행기의 고도와 표적까지의 수평 거리를 알면 탄젠트(tan) 값을 이용해 각도를 계산할 수 있어요.\n\n실제 상황에서 삼각비가 어떻게 활용된다고 생각하시나요? 비행기 조종사가 알아야 할 정보는 무엇일까요?",
                Step::new(4),
            ),
            DialogueLine::new(Speaker::Student, "고도랑 표적거리", Step::new(5)),
            DialogueLine::new(
                Speaker::Teacher,
                "정확해요! 조종사는 고도(비행기가 지상에서 얼마나 높이 있는지)와 표적까지의 거리를 알아야 합니다.\n\n이 두 가지 정보를 알면 삼각비를 사용해서 공격 각도를 계산할 수 있어요. 예를 들어:\n\ntan θ = 고도 ÷ 표적까지의 수평 거리\n\n이렇게 계산된 각도는 비행기가 표적을 정확히 조준하는 데 필수적입니다. 영화에서 매버릭이 정확한 타이밍과 각도로 비행하는 것이 바로 이런 계산 덕분이죠! 🎯",
                Step::new(6),
            ),
        ];
        Self::new(lines).expect("built-in script is valid")
    }

    #[must_use]
    pub fn lines(&self) -> &[DialogueLine] {
        &self.lines
    }

    #[must_use]
    pub fn line(&self, index: usize) -> Option<&DialogueLine> {
        self.lines.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The terminal step: the largest reveal threshold in the script.
    #[must_use]
    pub fn final_step(&self) -> Step {
        self.lines
            .iter()
            .map(DialogueLine::reveal_at)
            .max()
            .unwrap_or_default()
    }
}

impl TryFrom<Vec<DialogueLine>> for LessonScript {
    type Error = ScriptError;

    fn try_from(lines: Vec<DialogueLine>) -> Result<Self, Self::Error> {
        Self::new(lines)
    }
}

impl From<LessonScript> for Vec<DialogueLine> {
    fn from(script: LessonScript) -> Self {
        script.lines
    }
}
