//! Active-path propagation.
//!
//! A line is entered live. Every element is shown with the liveness carried
//! over from its predecessor (`view_passed`), and then decides the liveness
//! handed to its successor: a single step passes on its own outcome, a branch
//! passes on the logical OR of its two members.
//!
//! The fold runs to completion and yields an immutable list of
//! [`ElementState`] records before anything is rendered.

use crate::model::{BranchSlot, Element, Line};

/// Visual state of one element, computed by [`fold_line`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementState {
    Single {
        /// Liveness of the path reaching this step
        view_passed: bool,
        /// The step's own outcome; drives its outbound connector
        passed: bool,
    },
    Branch {
        /// Liveness of the path reaching both members
        view_passed: bool,
        top_passed: bool,
        bottom_passed: bool,
    },
}

impl ElementState {
    pub fn view_passed(&self) -> bool {
        match self {
            ElementState::Single { view_passed, .. } | ElementState::Branch { view_passed, .. } => {
                *view_passed
            }
        }
    }

    /// Liveness this element hands to the next one.
    pub fn outgoing(&self) -> bool {
        match self {
            ElementState::Single { passed, .. } => *passed,
            ElementState::Branch {
                top_passed,
                bottom_passed,
                ..
            } => *top_passed || *bottom_passed,
        }
    }

    /// Outcome of one branch member. `None` for single steps.
    pub fn member_passed(&self, slot: BranchSlot) -> Option<bool> {
        match (self, slot) {
            (ElementState::Branch { top_passed, .. }, BranchSlot::Top) => Some(*top_passed),
            (ElementState::Branch { bottom_passed, .. }, BranchSlot::Bottom) => {
                Some(*bottom_passed)
            }
            (ElementState::Single { .. }, _) => None,
        }
    }
}

/// Result of folding one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineStates {
    pub elements: Vec<ElementState>,
    /// `active` after the last element; `true` for an empty line
    pub active: bool,
}

impl LineStates {
    pub fn get(&self, index: usize) -> Option<&ElementState> {
        self.elements.get(index)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

/// Folds a sequence of elements into per-element visual states.
pub fn fold_elements(elements: &[Element]) -> LineStates {
    let mut states = Vec::with_capacity(elements.len());
    let active = elements.iter().fold(true, |active, element| {
        let state = match element {
            Element::Single(step) => ElementState::Single {
                view_passed: active,
                passed: step.passed,
            },
            Element::Branch(branch) => ElementState::Branch {
                view_passed: active,
                top_passed: branch.top.passed,
                bottom_passed: branch.bottom.passed,
            },
        };
        states.push(state);
        state.outgoing()
    });
    LineStates {
        elements: states,
        active,
    }
}

/// Folds the elements of a line. Every line starts live.
pub fn fold_line(line: &Line) -> LineStates {
    let states = fold_elements(&line.steps);
    log::debug!(
        "line '{}': {} elements folded, path {}",
        line.name,
        states.len(),
        if states.active { "live" } else { "disabled" }
    );
    states
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Branch, Step};
    use serde_json::Value;

    fn step(passed: bool) -> Step {
        Step::new("s", Value::Null, passed)
    }

    #[test]
    fn empty_line_stays_live() {
        let states = fold_elements(&[]);
        assert!(states.is_empty());
        assert!(states.active);
    }

    #[test]
    fn first_element_is_always_live() {
        let states = fold_elements(&[step(false).into()]);
        assert!(states.elements[0].view_passed());
        assert!(!states.active);

        let branch = Branch::new(step(false), step(false));
        let states = fold_elements(&[branch.into()]);
        assert!(states.elements[0].view_passed());
    }

    #[test]
    fn member_outcomes_are_reported() {
        let states = fold_elements(&[Branch::new(step(true), step(false)).into()]);
        let branch = states.elements[0];
        assert_eq!(branch.member_passed(BranchSlot::Top), Some(true));
        assert_eq!(branch.member_passed(BranchSlot::Bottom), Some(false));

        let single = fold_elements(&[step(true).into()]).elements[0];
        assert_eq!(single.member_passed(BranchSlot::Top), None);
    }
}
