//! Tests for line composition, connectors and the text canvas.
mod common;
use common::*;
use pretty_assertions::assert_eq;
use rackview::prelude::*;
use serde_json::json;

fn shapes_and_states(element: &RenderedElement<'_>) -> Vec<(ConnectorShape, bool)> {
    element
        .connectors()
        .into_iter()
        .map(|c| (c.shape, c.live))
        .collect()
}

#[test]
fn test_failed_step_before_branch_connectors() {
    let line = failed_then_branch_line();
    let rendered = LineRenderer::render("mixed", &line);

    assert_eq!(rendered.layout, LineLayout::Branched);
    assert_eq!(rendered.elements.len(), 3);

    // S1: live title, dimmed outbound into the fork
    match &rendered.elements[0] {
        RenderedElement::Single { block, outbound } => {
            assert!(!block.dimmed);
            assert_eq!(
                *outbound,
                Some(Connector {
                    shape: ConnectorShape::Straight,
                    live: false
                })
            );
        }
        other => panic!("expected single, got {:?}", other),
    }

    // Branch: dimmed members and entries, exits follow each member
    match &rendered.elements[1] {
        RenderedElement::Branch { top, bottom, merge } => {
            assert!(top.block.dimmed && bottom.block.dimmed);
            assert!(!top.entry.live && !bottom.entry.live);
            assert_eq!(top.exit.map(|c| c.live), Some(true));
            assert_eq!(bottom.exit.map(|c| c.live), Some(false));
            assert_eq!(
                *merge,
                Some(Connector {
                    shape: ConnectorShape::Merge,
                    live: true
                })
            );
        }
        other => panic!("expected branch, got {:?}", other),
    }

    // S2: live again, nothing after it
    match &rendered.elements[2] {
        RenderedElement::Single { block, outbound } => {
            assert!(!block.dimmed);
            assert_eq!(*outbound, None);
        }
        other => panic!("expected single, got {:?}", other),
    }
    assert!(rendered.active);
}

#[test]
fn test_single_to_single_uses_arrow() {
    let line = Line::new(
        "flat",
        vec![single("a", true), single("b", false), single("c", false)],
    );
    let rendered = LineRenderer::render("flat", &line);

    assert_eq!(rendered.layout, LineLayout::Flat);
    assert_eq!(
        shapes_and_states(&rendered.elements[0]),
        vec![(ConnectorShape::Arrow, true)]
    );
    assert_eq!(
        shapes_and_states(&rendered.elements[1]),
        vec![(ConnectorShape::Arrow, false)]
    );
    assert!(shapes_and_states(&rendered.elements[2]).is_empty());
}

#[test]
fn test_trailing_branch_has_no_exits_or_merge() {
    let line = Line::new(
        "tail",
        vec![single("a", true), branch(step("t", true), step("b", false))],
    );
    let rendered = LineRenderer::render("tail", &line);

    assert_eq!(
        shapes_and_states(&rendered.elements[1]),
        vec![
            (ConnectorShape::BranchEntry(BranchSlot::Top), true),
            (ConnectorShape::BranchEntry(BranchSlot::Bottom), true),
        ]
    );
}

#[test]
fn test_layout_height_depends_on_branches() {
    assert_eq!(LineLayout::Flat.height(), 130);
    assert_eq!(LineLayout::Branched.height(), 250);
    assert_eq!(Padding::Tall.vertical(), 9);
    assert_eq!(Padding::Flush.vertical(), 0);

    let snapshot = sample_snapshot();
    let frame = RackView::render(Some(&snapshot));
    let layouts: Vec<LineLayout> = frame.lines().iter().map(|l| l.layout).collect();
    assert_eq!(
        layouts,
        vec![LineLayout::Branched, LineLayout::Flat, LineLayout::Branched]
    );
}

#[test]
fn test_branch_only_line_merges() {
    let snapshot = sample_snapshot();
    let frame = RackView::render(Some(&snapshot));
    let line5 = frame.line("line5").unwrap();
    assert_eq!(line5.title, "line5xxx1");

    let merges: Vec<Option<bool>> = line5
        .elements
        .iter()
        .map(|element| match element {
            RenderedElement::Branch { merge, .. } => merge.map(|c| c.live),
            other => panic!("expected branch, got {:?}", other),
        })
        .collect();
    assert_eq!(merges, vec![Some(true), Some(false), Some(false), None]);
}

#[test]
fn test_frame_keeps_line_order() {
    let snapshot = sample_snapshot();
    let frame = RackView::render(Some(&snapshot));
    let keys: Vec<&str> = frame.lines().iter().map(|l| l.key).collect();
    assert_eq!(keys, vec!["line1", "line4", "line5"]);
}

#[test]
fn test_render_is_idempotent() {
    let snapshot = sample_snapshot();
    assert_eq!(
        RackView::render(Some(&snapshot)),
        RackView::render(Some(&snapshot))
    );
}

#[test]
fn test_missing_snapshot_renders_no_data() {
    let frame = RackView::render(None);
    assert_eq!(frame, RackFrame::NoData);
    assert!(frame.lines().is_empty());
    assert_eq!(TextCanvas::default().draw(&frame), "No data\n");
}

#[test]
fn test_blocks_resolve_back_to_steps() {
    let snapshot = sample_snapshot();
    let frame = RackView::render(Some(&snapshot));
    let mut count = 0;
    for line in frame.lines() {
        for (path, block) in line.blocks() {
            let step = snapshot.step(&path).unwrap();
            assert!(std::ptr::eq(block.step(), step));
            assert!(frame.block(&path).is_some());
            count += 1;
        }
    }
    assert_eq!(count, 8 + 4 + 8);
    assert!(frame.block(&StepPath::single("line5", 0)).is_none());
    assert!(frame.block(&StepPath::single("missing", 0)).is_none());
}

#[test]
fn test_text_canvas_flat_line() {
    let line = Line::new("line", vec![single("S1", true), single("S2", true)]);
    let rendered = LineRenderer::render("line", &line);
    assert_eq!(TextCanvas::default().draw_line(&rendered), "line\n[S1] --> [S2]\n");
}

#[test]
fn test_text_canvas_dims_after_failure() {
    let line = Line::new(
        "line",
        vec![
            single("S1", false),
            Element::Single(step_with("S2", json!({"v": 1}), false)),
        ],
    );
    let rendered = LineRenderer::render("line", &line);
    assert_eq!(
        TextCanvas::default().draw_line(&rendered),
        "line\n[S1] ..> (S2 | v:1)\n"
    );
    let bare = TextCanvas {
        show_previews: false,
    };
    assert_eq!(bare.draw_line(&rendered), "line\n[S1] ..> (S2)\n");
}

#[test]
fn test_text_canvas_branch() {
    let line = failed_then_branch_line();
    let rendered = LineRenderer::render("mixed", &line);
    let expected = concat!(
        "mixed\n",
        "         ,..> (B1) ---,\n",
        "[S1] ... +            +--> [S2]\n",
        "         `..> (B2) ...'\n",
    );
    assert_eq!(TextCanvas::default().draw_line(&rendered), expected);
}

#[test]
fn test_text_canvas_external_decoration() {
    let line = Line::new(
        "ext",
        vec![
            Element::Single(step("A", false).with_input_kind(InputKind::External)),
            Element::Single(step("B", true).with_input_kind(InputKind::External)),
        ],
    );
    let rendered = LineRenderer::render("ext", &line);
    assert_eq!(
        TextCanvas::default().draw_line(&rendered),
        "ext\no-> [A] ..> o.> (B)\n"
    );
}
