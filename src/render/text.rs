use super::block::BlockView;
use super::line::{BranchArm, Connector, ConnectorShape, RenderedElement, RenderedLine};
use super::rack::RackFrame;
use itertools::Itertools;

/// Placeholder drawn when there is no snapshot.
pub const NO_DATA: &str = "No data";

/// Draws rendered frames as monospace text.
///
/// Each line gets a title row followed by three element rows: branch top
/// arms, the main row and branch bottom arms. Lines without branches only
/// draw the main row.
#[derive(Debug, Clone, Copy)]
pub struct TextCanvas {
    pub show_previews: bool,
}

impl Default for TextCanvas {
    fn default() -> Self {
        Self {
            show_previews: true,
        }
    }
}

/// Three rows of one element column.
struct Column {
    top: String,
    mid: String,
    bottom: String,
}

impl Column {
    fn width(&self) -> usize {
        [&self.top, &self.mid, &self.bottom]
            .iter()
            .map(|row| row.chars().count())
            .max()
            .unwrap_or(0)
    }
}

impl TextCanvas {
    pub fn draw(&self, frame: &RackFrame<'_>) -> String {
        match frame {
            RackFrame::NoData => format!("{}\n", NO_DATA),
            RackFrame::Lines(lines) => lines.iter().map(|line| self.draw_line(line)).join("\n"),
        }
    }

    pub fn draw_line(&self, line: &RenderedLine<'_>) -> String {
        let columns: Vec<Column> = line
            .elements
            .iter()
            .map(|element| self.column(element))
            .collect();

        let mut rows = [String::new(), String::new(), String::new()];
        for column in &columns {
            let width = column.width();
            for (row, cell) in rows.iter_mut().zip([&column.top, &column.mid, &column.bottom]) {
                row.push_str(&pad(cell, width));
            }
        }

        let mut out = format!("{}\n", line.title);
        let [top, mid, bottom] = rows;
        if line.elements.iter().any(|e| matches!(e, RenderedElement::Branch { .. })) {
            for row in [top, mid, bottom] {
                out.push_str(row.trim_end());
                out.push('\n');
            }
        } else {
            out.push_str(mid.trim_end());
            out.push('\n');
        }
        out
    }

    fn column(&self, element: &RenderedElement<'_>) -> Column {
        match element {
            RenderedElement::Single { block, outbound } => {
                let mut mid = self.block(block);
                if let Some(connector) = outbound {
                    mid.push(' ');
                    mid.push_str(glyph(connector));
                    mid.push(' ');
                }
                Column {
                    top: String::new(),
                    mid,
                    bottom: String::new(),
                }
            }
            RenderedElement::Branch { top, bottom, merge } => {
                let top_arm = self.arm(top);
                let bottom_arm = self.arm(bottom);
                let inner = top_arm.chars().count().max(bottom_arm.chars().count());
                let (top_close, bottom_close) = match (top.exit, bottom.exit) {
                    (Some(_), Some(_)) => (",", "'"),
                    _ => ("", ""),
                };
                let mut mid = format!("+{}", " ".repeat(inner));
                if let Some(connector) = merge {
                    mid.push('+');
                    mid.push_str(glyph(connector));
                    mid.push(' ');
                }
                Column {
                    top: format!(",{}{}", pad(&top_arm, inner), top_close),
                    mid,
                    bottom: format!("`{}{}", pad(&bottom_arm, inner), bottom_close),
                }
            }
        }
    }

    fn arm(&self, arm: &BranchArm<'_>) -> String {
        let mut out = format!("{} {}", glyph(&arm.entry), self.block(&arm.block));
        if let Some(exit) = &arm.exit {
            out.push(' ');
            out.push_str(glyph(exit));
        }
        out
    }

    fn block(&self, block: &BlockView<'_>) -> String {
        let (open, close) = if block.dimmed { ("(", ")") } else { ("[", "]") };
        let mut body = block.title().to_string();
        if self.show_previews {
            let previews = block.visible_previews();
            if !previews.is_empty() {
                body.push_str(" | ");
                body.push_str(&previews.iter().join(" "));
            }
        }
        let decoration = match block.external {
            Some(external) if external.dimmed => "o.> ",
            Some(_) => "o-> ",
            None => "",
        };
        format!("{}{}{}{}", decoration, open, body, close)
    }
}

fn glyph(connector: &Connector) -> &'static str {
    match (connector.shape, connector.live) {
        (ConnectorShape::Arrow | ConnectorShape::Merge | ConnectorShape::BranchEntry(_), true) => {
            "-->"
        }
        (ConnectorShape::Arrow | ConnectorShape::Merge | ConnectorShape::BranchEntry(_), false) => {
            "..>"
        }
        (ConnectorShape::Straight | ConnectorShape::BranchExit(_), true) => "---",
        (ConnectorShape::Straight | ConnectorShape::BranchExit(_), false) => "...",
    }
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{}{}", text, " ".repeat(width.saturating_sub(len)))
}
