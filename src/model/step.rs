use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Payload;

/// Where a step's input came from.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    /// Taken from the previous step of the line
    Flow,
    /// Supplied from an upstream source outside the line
    External,
}

/// One monitored unit of a line.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Step {
    pub name: String,
    #[serde(default)]
    pub input: Value,
    pub passed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_kind: Option<InputKind>,
}

impl Step {
    pub fn new(name: impl Into<String>, input: Value, passed: bool) -> Self {
        Self {
            name: name.into(),
            input,
            passed,
            input_kind: None,
        }
    }

    pub fn with_input_kind(mut self, input_kind: InputKind) -> Self {
        self.input_kind = Some(input_kind);
        self
    }

    /// `true` when the input was supplied from outside the line.
    pub fn is_external(&self) -> bool {
        self.input_kind == Some(InputKind::External)
    }

    /// Typed view over the raw input.
    pub fn payload(&self) -> Payload<'_> {
        Payload::of(&self.input)
    }
}

/// Which member of a branch a step occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BranchSlot {
    Top,
    Bottom,
}

/// Two parallel alternatives at one position of a line.
#[derive(Debug, Clone, PartialEq)]
pub struct Branch {
    pub top: Step,
    pub bottom: Step,
}

impl Branch {
    pub fn new(top: Step, bottom: Step) -> Self {
        Self { top, bottom }
    }

    pub fn member(&self, slot: BranchSlot) -> &Step {
        match slot {
            BranchSlot::Top => &self.top,
            BranchSlot::Bottom => &self.bottom,
        }
    }

    /// The path stays live past a branch if either alternative succeeded.
    pub fn merged_passed(&self) -> bool {
        self.top.passed || self.bottom.passed
    }
}

/// A position in a line: either a single step or a two-way branch.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Single(Step),
    Branch(Branch),
}

impl Element {
    pub fn is_branch(&self) -> bool {
        matches!(self, Element::Branch(_))
    }

    /// Steps of this element, top member first for branches.
    pub fn steps(&self) -> Vec<&Step> {
        match self {
            Element::Single(step) => vec![step],
            Element::Branch(branch) => vec![&branch.top, &branch.bottom],
        }
    }

    /// Strict pass state used by the textual summary: a branch counts as
    /// passed only when both members passed.
    pub fn fully_passed(&self) -> bool {
        match self {
            Element::Single(step) => step.passed,
            Element::Branch(branch) => branch.top.passed && branch.bottom.passed,
        }
    }
}

impl From<Step> for Element {
    fn from(step: Step) -> Self {
        Element::Single(step)
    }
}

impl From<Branch> for Element {
    fn from(branch: Branch) -> Self {
        Element::Branch(branch)
    }
}
