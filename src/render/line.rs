use super::block::{BlockRenderer, BlockView};
use crate::engine::{self, ElementState};
use crate::model::{BranchSlot, Element, Line, Step, StepPath};

/// Height class of a line; branched lines need room for two arms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineLayout {
    Flat,
    Branched,
}

impl LineLayout {
    /// Line height in layout units.
    pub fn height(self) -> u16 {
        match self {
            LineLayout::Flat => 130,
            LineLayout::Branched => 250,
        }
    }
}

/// Shape of a connector. Shape never affects whether it is live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectorShape {
    /// Single step into a single step
    Arrow,
    /// Single step into a branch fork
    Straight,
    /// Fork into a branch member
    BranchEntry(BranchSlot),
    /// Branch member towards the merge point
    BranchExit(BranchSlot),
    /// Merge point into the next element
    Merge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connector {
    pub shape: ConnectorShape,
    /// `false` draws the disabled style
    pub live: bool,
}

impl Connector {
    fn new(shape: ConnectorShape, live: bool) -> Self {
        Self { shape, live }
    }
}

/// One member of a rendered branch.
#[derive(Debug, Clone, PartialEq)]
pub struct BranchArm<'a> {
    pub entry: Connector,
    pub block: BlockView<'a>,
    /// Absent when the branch ends the line
    pub exit: Option<Connector>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RenderedElement<'a> {
    Single {
        block: BlockView<'a>,
        outbound: Option<Connector>,
    },
    Branch {
        top: BranchArm<'a>,
        bottom: BranchArm<'a>,
        merge: Option<Connector>,
    },
}

impl<'a> RenderedElement<'a> {
    /// Connectors in drawing order.
    pub fn connectors(&self) -> Vec<Connector> {
        match self {
            RenderedElement::Single { outbound, .. } => outbound.iter().copied().collect(),
            RenderedElement::Branch { top, bottom, merge } => [
                Some(top.entry),
                top.exit,
                Some(bottom.entry),
                bottom.exit,
                *merge,
            ]
            .into_iter()
            .flatten()
            .collect(),
        }
    }
}

/// A fully rendered line: boxes and connectors in drawing order.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedLine<'a> {
    pub key: &'a str,
    pub title: &'a str,
    pub layout: LineLayout,
    pub elements: Vec<RenderedElement<'a>>,
    /// Fold result after the last element
    pub active: bool,
}

impl<'a> RenderedLine<'a> {
    /// Every block with the path that resolves back to its step.
    pub fn blocks(&self) -> Vec<(StepPath, &BlockView<'a>)> {
        self.elements
            .iter()
            .enumerate()
            .flat_map(|(idx, element)| match element {
                RenderedElement::Single { block, .. } => {
                    vec![(StepPath::single(self.key, idx), block)]
                }
                RenderedElement::Branch { top, bottom, .. } => vec![
                    (StepPath::member(self.key, idx, BranchSlot::Top), &top.block),
                    (
                        StepPath::member(self.key, idx, BranchSlot::Bottom),
                        &bottom.block,
                    ),
                ],
            })
            .collect()
    }

    pub fn block(&self, path: &StepPath) -> Option<&BlockView<'a>> {
        if path.line != self.key {
            return None;
        }
        match (self.elements.get(path.element)?, path.slot) {
            (RenderedElement::Single { block, .. }, None) => Some(block),
            (RenderedElement::Branch { top, .. }, Some(BranchSlot::Top)) => Some(&top.block),
            (RenderedElement::Branch { bottom, .. }, Some(BranchSlot::Bottom)) => {
                Some(&bottom.block)
            }
            _ => None,
        }
    }
}

/// Composes the active-path fold and block rendering for one line.
pub struct LineRenderer;

impl LineRenderer {
    pub fn render<'a>(key: &'a str, line: &'a Line) -> RenderedLine<'a> {
        let layout = if line.has_branch() {
            LineLayout::Branched
        } else {
            LineLayout::Flat
        };
        let states = engine::fold_line(line);

        let elements = line
            .steps
            .iter()
            .zip(&states.elements)
            .enumerate()
            .map(|(idx, (element, state))| {
                let next = line.steps.get(idx + 1);
                Self::render_element(element, state, next)
            })
            .collect();

        RenderedLine {
            key,
            title: &line.name,
            layout,
            elements,
            active: states.active,
        }
    }

    fn render_element<'a>(
        element: &'a Element,
        state: &ElementState,
        next: Option<&Element>,
    ) -> RenderedElement<'a> {
        let view_passed = state.view_passed();
        match element {
            Element::Single(step) => {
                let outbound = next.map(|next| {
                    let shape = if next.is_branch() {
                        ConnectorShape::Straight
                    } else {
                        ConnectorShape::Arrow
                    };
                    Connector::new(shape, state.outgoing())
                });
                RenderedElement::Single {
                    block: BlockRenderer::render(step, view_passed),
                    outbound,
                }
            }
            Element::Branch(branch) => {
                let is_last = next.is_none();
                RenderedElement::Branch {
                    top: Self::render_arm(&branch.top, BranchSlot::Top, view_passed, is_last),
                    bottom: Self::render_arm(
                        &branch.bottom,
                        BranchSlot::Bottom,
                        view_passed,
                        is_last,
                    ),
                    merge: (!is_last)
                        .then(|| Connector::new(ConnectorShape::Merge, state.outgoing())),
                }
            }
        }
    }

    fn render_arm(step: &Step, slot: BranchSlot, view_passed: bool, is_last: bool) -> BranchArm<'_> {
        BranchArm {
            entry: Connector::new(ConnectorShape::BranchEntry(slot), view_passed),
            block: BlockRenderer::render(step, view_passed),
            exit: (!is_last).then(|| Connector::new(ConnectorShape::BranchExit(slot), step.passed)),
        }
    }
}
