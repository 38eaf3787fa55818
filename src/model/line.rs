use serde::ser::{Serialize, SerializeSeq, Serializer};
use serde_json::Value;
use std::fmt;

use super::{Element, Step};

/// One independent sequence of monitored steps and branches.
#[derive(serde::Serialize, Debug, Clone, PartialEq)]
pub struct Line {
    pub name: String,
    pub steps: Vec<Element>,
}

impl Line {
    pub fn new(name: impl Into<String>, steps: Vec<Element>) -> Self {
        Self {
            name: name.into(),
            steps,
        }
    }

    /// `true` if any element of the line is a branch.
    pub fn has_branch(&self) -> bool {
        self.steps.iter().any(Element::is_branch)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

// Branches go back on the wire as two-element arrays.
impl Serialize for Element {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Element::Single(step) => step.serialize(serializer),
            Element::Branch(branch) => {
                let mut seq = serializer.serialize_seq(Some(2))?;
                seq.serialize_element(&branch.top)?;
                seq.serialize_element(&branch.bottom)?;
                seq.end()
            }
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.name)?;
        let mut passed = true;
        for (idx, element) in self.steps.iter().enumerate() {
            if idx > 0 {
                write!(f, " -> ")?;
            }
            match element {
                Element::Single(step) => {
                    write!(f, "{}", step.name)?;
                    if step.input != Value::Null {
                        write!(f, "({})", step.input)?;
                    }
                }
                Element::Branch(branch) => {
                    write!(f, "( ")?;
                    fmt_member(f, &branch.top)?;
                    write!(f, " | ")?;
                    fmt_member(f, &branch.bottom)?;
                    write!(f, " )")?;
                }
            }
            if passed && !element.fully_passed() {
                passed = false;
                write!(f, " !")?;
            }
        }
        Ok(())
    }
}

fn fmt_member(f: &mut fmt::Formatter<'_>, step: &Step) -> fmt::Result {
    write!(f, "{}", step.name)?;
    if step.input != Value::Null {
        write!(f, "(")?;
        if step.is_external() {
            write!(f, "\\->")?;
        }
        write!(f, "{})", step.input)?;
    }
    Ok(())
}
