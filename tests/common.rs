//! Common test utilities for building steps, lines and snapshots.
use rackview::prelude::*;
use serde_json::Value;

/// A rack modelled on a real monitor export: nested inputs, external
/// inputs, branches mid-line and at the end, and a branch-only line.
#[allow(dead_code)]
pub const SAMPLE_SNAPSHOT_JSON: &str = r#"{
  "lines": {
    "line1": {
      "name": "line1",
      "steps": [
        {
          "name": "№1",
          "input": {
            "a": { "a": 85, "d": 67 },
            "b": [{ "a": 85 }, { "d": 67 }, { "e": 85 }],
            "c": 45,
            "d": 67,
            "e": 85
          },
          "passed": true,
          "input_kind": "external"
        },
        [
          { "name": "№2", "input": { "c": 45 }, "passed": false, "input_kind": "external" },
          { "name": "№3", "input": { "a": 850000000000000000000 }, "passed": true, "input_kind": "external" }
        ],
        { "name": "OFF", "input": null, "passed": false },
        { "name": "№5", "input": { "a": 85, "b": 123 }, "passed": false, "input_kind": "external" },
        [
          { "name": "№6", "input": null, "passed": false, "input_kind": "external" },
          { "name": "№7", "input": null, "passed": false, "input_kind": "external" }
        ],
        { "name": "OFF", "input": null, "passed": false }
      ]
    },
    "line4": {
      "name": "line4",
      "steps": [
        { "name": "temperature_critical", "input": 95, "passed": true, "input_kind": "external" },
        { "name": "voltage", "input": { "v1": 395, "v2": 295 }, "passed": true, "input_kind": "flow" },
        { "name": "voltage_critical", "input": 205, "passed": false },
        { "name": "OFF", "input": null, "passed": false }
      ]
    },
    "line5": {
      "name": "line5xxx1",
      "steps": [
        [
          { "name": "voltage", "input": null, "passed": false },
          { "name": "voltage_critical", "input": null, "passed": true }
        ],
        [
          { "name": "voltage", "input": null, "passed": false },
          { "name": "voltage_critical", "input": null, "passed": false }
        ],
        [
          { "name": "voltage", "input": null, "passed": false },
          { "name": "voltage_critical", "input": null, "passed": false, "input_kind": "external" }
        ],
        [
          { "name": "voltage", "input": null, "passed": false, "input_kind": "external" },
          { "name": "voltage_critical", "input": null, "passed": false, "input_kind": "external" }
        ]
      ]
    }
  }
}"#;

#[allow(dead_code)]
pub fn sample_snapshot() -> Snapshot {
    Snapshot::from_json(SAMPLE_SNAPSHOT_JSON).expect("sample snapshot must parse")
}

/// A step without input.
#[allow(dead_code)]
pub fn step(name: &str, passed: bool) -> Step {
    Step::new(name, Value::Null, passed)
}

/// A step with the given input.
#[allow(dead_code)]
pub fn step_with(name: &str, input: Value, passed: bool) -> Step {
    Step::new(name, input, passed)
}

#[allow(dead_code)]
pub fn single(name: &str, passed: bool) -> Element {
    Element::Single(step(name, passed))
}

#[allow(dead_code)]
pub fn branch(top: Step, bottom: Step) -> Element {
    Element::Branch(Branch::new(top, bottom))
}

/// `[S1(failed), Branch(B1(passed), B2(failed)), S2(passed)]`
#[allow(dead_code)]
pub fn failed_then_branch_line() -> Line {
    Line::new(
        "mixed",
        vec![
            single("S1", false),
            branch(step("B1", true), step("B2", false)),
            single("S2", true),
        ],
    )
}
