use super::preview::{PreviewFormatter, PreviewItem};
use crate::model::Step;

/// Vertical padding of a block body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Padding {
    /// Every preview item is blank; the body keeps its height on its own
    Tall,
    Flush,
}

impl Padding {
    /// Vertical padding in layout units.
    pub fn vertical(self) -> u16 {
        match self {
            Padding::Tall => 9,
            Padding::Flush => 0,
        }
    }
}

/// Upstream marker drawn to the left of blocks with external input: a
/// disconnected entry marker, a segment and an arrowhead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExternalDecoration {
    pub dimmed: bool,
}

/// A rendered step box.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockView<'a> {
    step: &'a Step,
    /// Title drawn in the disabled style
    pub dimmed: bool,
    pub previews: Vec<PreviewItem>,
    pub padding: Padding,
    pub external: Option<ExternalDecoration>,
}

impl<'a> BlockView<'a> {
    pub fn title(&self) -> &'a str {
        &self.step.name
    }

    /// The step this block was rendered from, untouched.
    pub fn step(&self) -> &'a Step {
        self.step
    }

    /// Hands the complete step to `on_click`. The decoration is not part of
    /// the clickable area, so callers route only box clicks here.
    pub fn click<R>(&self, on_click: impl FnOnce(&'a Step) -> R) -> R {
        on_click(self.step)
    }

    /// All visible preview strings, item by item.
    pub fn visible_previews(&self) -> Vec<&str> {
        self.previews.iter().flat_map(PreviewItem::visible).collect()
    }
}

/// Renders single steps into [`BlockView`]s.
pub struct BlockRenderer;

impl BlockRenderer {
    pub fn render(step: &Step, view_passed: bool) -> BlockView<'_> {
        let previews = PreviewFormatter::format_payload(step.payload());
        let padding = if previews.iter().all(PreviewItem::is_blank) {
            Padding::Tall
        } else {
            Padding::Flush
        };
        BlockView {
            step,
            dimmed: !view_passed,
            previews,
            padding,
            external: step.is_external().then_some(ExternalDecoration {
                dimmed: !view_passed,
            }),
        }
    }
}
