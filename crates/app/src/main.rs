use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use lesson_core::model::{DialogueLine, LessonScript, VideoId};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidVideoId { raw: String },
    InvalidScriptPath { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidVideoId { raw } => write!(f, "invalid --video-id value: {raw}"),
            ArgsError::InvalidScriptPath { raw } => write!(f, "invalid --script value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct LessonApp {
    script: Arc<LessonScript>,
    video_id: VideoId,
}

impl UiApp for LessonApp {
    fn script(&self) -> Arc<LessonScript> {
        Arc::clone(&self.script)
    }

    fn video_id(&self) -> VideoId {
        self.video_id.clone()
    }
}

#[derive(Debug)]
struct Args {
    video_id: VideoId,
    script_path: Option<String>,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--video-id <id>] [--script <lesson.json>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --video-id {}", lesson_core::model::video::DEFAULT_VIDEO_ID);
    eprintln!("  built-in lesson script when --script is not given");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  LESSON_VIDEO_ID, LESSON_SCRIPT");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut video_id = std::env::var("LESSON_VIDEO_ID")
            .ok()
            .and_then(|value| VideoId::new(value).ok())
            .unwrap_or_else(VideoId::default_clip);
        let mut script_path = std::env::var("LESSON_SCRIPT")
            .ok()
            .filter(|value| !value.trim().is_empty());

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--video-id" => {
                    let value = require_value(args, "--video-id")?;
                    video_id = VideoId::new(value.clone())
                        .map_err(|_| ArgsError::InvalidVideoId { raw: value })?;
                }
                "--script" => {
                    let value = require_value(args, "--script")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidScriptPath { raw: value });
                    }
                    script_path = Some(value);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            video_id,
            script_path,
        })
    }
}

/// Load a lesson script from a JSON file (an array of dialogue lines), or
/// fall back to the built-in Top Gun lesson. Validation runs either way;
/// keep this in the binary glue so core stays I/O free.
fn load_script(path: Option<&str>) -> Result<Arc<LessonScript>, Box<dyn std::error::Error>> {
    let Some(path) = path else {
        return Ok(Arc::new(LessonScript::builtin()));
    };

    let raw = std::fs::read_to_string(path)?;
    let lines: Vec<DialogueLine> = serde_json::from_str(&raw)?;
    let script = LessonScript::new(lines).map_err(lesson_core::Error::from)?;
    Ok(Arc::new(script))
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let script = load_script(parsed.script_path.as_deref())?;
    let app: Arc<dyn UiApp> = Arc::new(LessonApp {
        script,
        video_id: parsed.video_id,
    });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Trig Lesson")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, ArgsError> {
        let mut iter = args.iter().map(|arg| (*arg).to_string());
        Args::parse(&mut iter)
    }

    #[test]
    fn parses_video_id_flag() {
        let args = parse(&["--video-id", "abc-DEF_123"]).unwrap();
        assert_eq!(args.video_id.as_str(), "abc-DEF_123");
        assert!(args.script_path.is_none());
    }

    #[test]
    fn rejects_invalid_video_id() {
        let err = parse(&["--video-id", "not/valid"]).unwrap_err();
        assert!(matches!(err, ArgsError::InvalidVideoId { .. }));
    }

    #[test]
    fn rejects_missing_flag_value() {
        let err = parse(&["--script"]).unwrap_err();
        assert!(matches!(err, ArgsError::MissingValue { flag: "--script" }));
    }

    #[test]
    fn rejects_unknown_argument() {
        let err = parse(&["--frobnicate"]).unwrap_err();
        assert!(matches!(err, ArgsError::UnknownArg(_)));
    }

    #[test]
    fn builtin_script_loads_without_a_path() {
        let script = load_script(None).unwrap();
        assert_eq!(script.len(), 6);
    }

    #[test]
    fn script_json_round_trips_through_load() {
        let script = LessonScript::builtin();
        let json = serde_json::to_string(script.lines()).unwrap();
        let dir = std::env::temp_dir().join("trig-lesson-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("lesson.json");
        std::fs::write(&path, json).unwrap();

        let loaded = load_script(path.to_str()).unwrap();
        assert_eq!(*loaded, script);
    }

    #[test]
    fn invalid_script_file_is_rejected() {
        let dir = std::env::temp_dir().join("trig-lesson-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("empty.json");
        std::fs::write(&path, "[]").unwrap();

        assert!(load_script(path.to_str()).is_err());
    }
}
