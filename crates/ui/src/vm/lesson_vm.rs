use lesson_core::LessonSequencer;

/// One rendered chat bubble.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatBubbleVm {
    pub index: usize,
    pub speaker_label: &'static str,
    pub is_teacher: bool,
    pub text: String,
    pub clickable: bool,
}

/// Everything the lesson page draws, derived from the sequencer in one pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonPageVm {
    pub bubbles: Vec<ChatBubbleVm>,
    pub show_video: bool,
    pub show_next_button: bool,
    pub show_concepts: bool,
}

#[must_use]
pub fn map_lesson_page(sequencer: &LessonSequencer) -> LessonPageVm {
    let bubbles = sequencer
        .visible_lines()
        .map(|(index, line)| ChatBubbleVm {
            index,
            speaker_label: line.speaker().label(),
            is_teacher: line.speaker().is_teacher(),
            text: line.text().to_string(),
            clickable: sequencer.is_line_clickable(index),
        })
        .collect();

    LessonPageVm {
        bubbles,
        show_video: sequencer.video_visible(),
        show_next_button: sequencer.next_button_visible(),
        show_concepts: sequencer.concepts_visible(),
    }
}
