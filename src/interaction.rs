use crate::error::ClipboardError;
use crate::model::{Snapshot, Step, StepPath};

/// How a detail view was dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    /// Click outside the overlay
    Backdrop,
    /// Explicit close control
    Button,
}

/// Destination for the copy action of a detail view.
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// In-memory clipboard, mostly useful for tests and headless front ends.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
}

impl Clipboard for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}

/// Overlay showing the full input of a selected step.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    step: Step,
    text: String,
}

impl DetailView {
    pub fn new(step: Step) -> Self {
        // Serializing a `Value` into a string cannot fail.
        let text = serde_json::to_string_pretty(&step.input).unwrap_or_default();
        Self { step, text }
    }

    pub fn step(&self) -> &Step {
        &self.step
    }

    /// The input as 2-space indented JSON.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Copies exactly the displayed text.
    pub fn copy(&self, clipboard: &mut dyn Clipboard) -> Result<(), ClipboardError> {
        clipboard.set_text(&self.text)
    }
}

/// Local interaction state: receives block clicks and owns the detail view.
///
/// It keeps its own copy of the selected step, so a new snapshot arriving
/// while the overlay is open never tears it down.
#[derive(Debug, Default, Clone)]
pub struct InteractionBridge {
    detail: Option<DetailView>,
}

impl InteractionBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the detail view for `step`, replacing whatever was shown.
    pub fn select(&mut self, step: &Step) {
        log::debug!("selected step '{}'", step.name);
        self.detail = Some(DetailView::new(step.clone()));
    }

    /// Resolves `path` in `snapshot` and selects it. Returns `false` if the
    /// path does not exist.
    pub fn select_path(&mut self, snapshot: &Snapshot, path: &StepPath) -> bool {
        match snapshot.step(path) {
            Some(step) => {
                self.select(step);
                true
            }
            None => {
                log::debug!("no step at {}", path);
                false
            }
        }
    }

    pub fn close(&mut self, reason: CloseReason) {
        if self.detail.take().is_some() {
            log::debug!("detail view closed ({:?})", reason);
        }
    }

    pub fn is_open(&self) -> bool {
        self.detail.is_some()
    }

    pub fn detail(&self) -> Option<&DetailView> {
        self.detail.as_ref()
    }
}
