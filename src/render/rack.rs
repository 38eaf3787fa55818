use super::block::BlockView;
use super::line::{LineRenderer, RenderedLine};
use crate::model::{Snapshot, StepPath};

/// Everything drawn for one snapshot.
#[derive(Debug, Clone, PartialEq)]
pub enum RackFrame<'a> {
    /// No snapshot is available (nothing fetched yet, or the last poll failed)
    NoData,
    Lines(Vec<RenderedLine<'a>>),
}

impl<'a> RackFrame<'a> {
    pub fn lines(&self) -> &[RenderedLine<'a>] {
        match self {
            RackFrame::NoData => &[],
            RackFrame::Lines(lines) => lines,
        }
    }

    pub fn line(&self, key: &str) -> Option<&RenderedLine<'a>> {
        self.lines().iter().find(|line| line.key == key)
    }

    pub fn block(&self, path: &StepPath) -> Option<&BlockView<'a>> {
        self.line(&path.line)?.block(path)
    }
}

/// Renders whole snapshots. Lines are rendered independently.
pub struct RackView;

impl RackView {
    pub fn render(snapshot: Option<&Snapshot>) -> RackFrame<'_> {
        match snapshot {
            None => RackFrame::NoData,
            Some(snapshot) => RackFrame::Lines(
                snapshot
                    .lines()
                    .map(|(key, line)| LineRenderer::render(key, line))
                    .collect(),
            ),
        }
    }
}
