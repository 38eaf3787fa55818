use ahash::AHashMap;
use serde::ser::{Serialize, SerializeMap, SerializeStruct, Serializer};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fmt;

use super::{Branch, BranchSlot, Element, Line, Step};
use crate::error::SnapshotError;

/// One complete, immutable poll result covering all lines.
///
/// Lines keep the insertion order of the source document; lookups by key go
/// through a side index.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    lines: Vec<(String, Line)>,
    index: AHashMap<String, usize>,
}

/// Address of a single step inside a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StepPath {
    pub line: String,
    pub element: usize,
    /// `None` for single steps, the member slot for branches
    pub slot: Option<BranchSlot>,
}

impl StepPath {
    pub fn single(line: impl Into<String>, element: usize) -> Self {
        Self {
            line: line.into(),
            element,
            slot: None,
        }
    }

    pub fn member(line: impl Into<String>, element: usize, slot: BranchSlot) -> Self {
        Self {
            line: line.into(),
            element,
            slot: Some(slot),
        }
    }
}

impl fmt::Display for StepPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.element)?;
        match self.slot {
            Some(BranchSlot::Top) => write!(f, ":top"),
            Some(BranchSlot::Bottom) => write!(f, ":bottom"),
            None => Ok(()),
        }
    }
}

impl Snapshot {
    /// Builds a snapshot from `(key, line)` pairs. A repeated key replaces the
    /// earlier line but keeps its position, like a JSON object would.
    pub fn from_lines<I, K>(lines: I) -> Self
    where
        I: IntoIterator<Item = (K, Line)>,
        K: Into<String>,
    {
        let mut snapshot = Self::default();
        for (key, line) in lines {
            let key = key.into();
            match snapshot.index.get(&key) {
                Some(&pos) => snapshot.lines[pos].1 = line,
                None => {
                    snapshot.index.insert(key.clone(), snapshot.lines.len());
                    snapshot.lines.push((key, line));
                }
            }
        }
        snapshot
    }

    /// Parses and validates a snapshot document.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let raw: RawSnapshot =
            serde_json::from_str(json).map_err(|e| SnapshotError::Json(e.to_string()))?;
        Self::from_raw(raw)
    }

    /// Validates an already parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self, SnapshotError> {
        let raw: RawSnapshot =
            serde_json::from_value(value).map_err(|e| SnapshotError::Json(e.to_string()))?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawSnapshot) -> Result<Self, SnapshotError> {
        let lines = raw
            .lines
            .into_iter()
            .map(|(key, value)| parse_line(&key, value).map(|line| (key, line)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_lines(lines))
    }

    pub fn to_json_pretty(&self) -> Result<String, SnapshotError> {
        serde_json::to_string_pretty(self).map_err(|e| SnapshotError::Json(e.to_string()))
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> impl Iterator<Item = (&str, &Line)> {
        self.lines.iter().map(|(key, line)| (key.as_str(), line))
    }

    pub fn line(&self, key: &str) -> Option<&Line> {
        self.index.get(key).map(|&pos| &self.lines[pos].1)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Resolves a path produced by the renderer back to its step.
    pub fn step(&self, path: &StepPath) -> Option<&Step> {
        let element = self.line(&path.line)?.steps.get(path.element)?;
        match (element, path.slot) {
            (Element::Single(step), None) => Some(step),
            (Element::Branch(branch), Some(slot)) => Some(branch.member(slot)),
            _ => None,
        }
    }
}

impl PartialEq for Snapshot {
    fn eq(&self, other: &Self) -> bool {
        self.lines == other.lines
    }
}

impl Serialize for Snapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        struct Lines<'a>(&'a [(String, Line)]);

        impl Serialize for Lines<'_> {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let mut map = serializer.serialize_map(Some(self.0.len()))?;
                for (key, line) in self.0 {
                    map.serialize_entry(key, line)?;
                }
                map.end()
            }
        }

        let mut state = serializer.serialize_struct("Snapshot", 1)?;
        state.serialize_field("lines", &Lines(&self.lines))?;
        state.end()
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (_, line)) in self.lines.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}

// --- Wire format ---
// `preserve_order` keeps the object order of `lines` and of every step input.

#[derive(Deserialize)]
struct RawSnapshot {
    lines: Map<String, Value>,
}

#[derive(Deserialize)]
struct RawLine {
    name: String,
    steps: Vec<Value>,
}

fn parse_line(key: &str, value: Value) -> Result<Line, SnapshotError> {
    let raw: RawLine = serde_json::from_value(value)
        .map_err(|e| SnapshotError::Json(format!("line '{}': {}", key, e)))?;
    let steps = raw
        .steps
        .into_iter()
        .enumerate()
        .map(|(index, value)| parse_element(&raw.name, index, value))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Line::new(raw.name, steps))
}

fn parse_element(line: &str, index: usize, value: Value) -> Result<Element, SnapshotError> {
    match value {
        Value::Object(_) => parse_step(line, index, value).map(Element::Single),
        Value::Array(members) => {
            let found = members.len();
            let [top, bottom] =
                <[Value; 2]>::try_from(members).map_err(|_| SnapshotError::BranchArity {
                    line: line.to_string(),
                    index,
                    found,
                })?;
            Ok(Element::Branch(Branch::new(
                parse_step(line, index, top)?,
                parse_step(line, index, bottom)?,
            )))
        }
        _ => Err(SnapshotError::NotAnElement {
            line: line.to_string(),
            index,
        }),
    }
}

fn parse_step(line: &str, index: usize, value: Value) -> Result<Step, SnapshotError> {
    serde_json::from_value(value).map_err(|e| {
        SnapshotError::Json(format!("line '{}', step {}: {}", line, index, e))
    })
}
