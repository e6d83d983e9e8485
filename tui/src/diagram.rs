//! Diagram composition.
//!
//! Turns a [`Diagram`] into styled terminal lines. Each node becomes a
//! [`Figure`] (a block of equal-width lines); rows and columns are composed
//! by padding and concatenating child figures. While a highlight transition
//! runs, nodes whose state changed are drawn with a blended color.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use embedscope_types::{ArrowDirection, Diagram, NodeKind, RenderedNode};

use crate::theme::{Glyphs, Palette, blend};

const STAGE_GAP: usize = 3;
const ROW_GAP: usize = 2;

/// Highlight state of the diagram being faded out.
#[derive(Debug, Clone, Copy)]
pub struct Fade<'a> {
    pub previous: &'a Diagram,
    pub progress: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Start,
    Center,
}

/// A rectangular block of styled lines, every line exactly `width` cells wide.
#[derive(Debug, Clone, Default)]
pub(crate) struct Figure {
    width: usize,
    lines: Vec<Line<'static>>,
}

impl Figure {
    fn text(content: &str, style: Style) -> Self {
        Self {
            width: content.width(),
            lines: vec![Line::from(Span::styled(content.to_string(), style))],
        }
    }

    fn blank(width: usize, height: usize) -> Self {
        Self {
            width,
            lines: (0..height).map(|_| blank_line(width)).collect(),
        }
    }

    fn height(&self) -> usize {
        self.lines.len()
    }

    /// Side by side, with `gap` blank cells between figures.
    fn hstack(figures: Vec<Figure>, gap: usize, align: Align) -> Self {
        let height = figures.iter().map(Figure::height).max().unwrap_or(0);
        let width = figures.iter().map(|f| f.width).sum::<usize>()
            + gap * figures.len().saturating_sub(1);

        let mut lines = Vec::with_capacity(height);
        for row in 0..height {
            let mut spans = Vec::new();
            for (i, figure) in figures.iter().enumerate() {
                if i > 0 && gap > 0 {
                    spans.push(Span::raw(" ".repeat(gap)));
                }
                let offset = match align {
                    Align::Start => 0,
                    Align::Center => (height - figure.height()) / 2,
                };
                match row.checked_sub(offset).and_then(|r| figure.lines.get(r)) {
                    Some(line) => spans.extend(line.spans.iter().cloned()),
                    None => spans.push(Span::raw(" ".repeat(figure.width))),
                }
            }
            lines.push(Line::from(spans));
        }
        Self { width, lines }
    }

    /// Top to bottom, each figure centered horizontally.
    fn vstack(figures: Vec<Figure>) -> Self {
        let width = figures.iter().map(|f| f.width).max().unwrap_or(0);
        let mut lines = Vec::new();
        for figure in figures {
            let left = (width - figure.width) / 2;
            let right = width - figure.width - left;
            for line in figure.lines {
                let mut spans = Vec::with_capacity(line.spans.len() + 2);
                if left > 0 {
                    spans.push(Span::raw(" ".repeat(left)));
                }
                spans.extend(line.spans);
                if right > 0 {
                    spans.push(Span::raw(" ".repeat(right)));
                }
                lines.push(Line::from(spans));
            }
        }
        Self { width, lines }
    }

    pub(crate) fn width(&self) -> usize {
        self.width
    }

    pub(crate) fn into_lines(self) -> Vec<Line<'static>> {
        self.lines
    }
}

fn blank_line(width: usize) -> Line<'static> {
    Line::from(" ".repeat(width))
}

struct Painter<'a> {
    palette: &'a Palette,
    glyphs: &'a Glyphs,
    progress: f32,
}

impl Painter<'_> {
    fn highlight(&self, active: bool, was_active: bool) -> Color {
        let target = if active {
            self.palette.active
        } else {
            self.palette.idle
        };
        if active == was_active {
            return target;
        }
        let source = if was_active {
            self.palette.active
        } else {
            self.palette.idle
        };
        blend(source, target, self.progress)
    }

    fn figure(&self, node: &RenderedNode, previous: Option<&RenderedNode>) -> Figure {
        let was_active = previous.map_or(node.active, |prev| prev.active);
        let children = || {
            node.children.iter().enumerate().map(move |(i, child)| {
                let prev_child = previous.and_then(|prev| prev.children.get(i));
                self.figure(child, prev_child)
            })
        };

        match node.node.kind {
            NodeKind::Stage { label, .. } => {
                let heading = Figure::text(
                    label,
                    Style::default()
                        .fg(self.palette.text_primary)
                        .add_modifier(Modifier::BOLD),
                );
                let body = Figure::vstack(children().collect());
                Figure::vstack(vec![heading, Figure::blank(0, 1), body])
            }
            NodeKind::Row { .. } => Figure::hstack(children().collect(), ROW_GAP, Align::Start),
            NodeKind::Column { .. } => Figure::vstack(children().collect()),
            NodeKind::Layer { neurons } => {
                let glyph = if node.active {
                    self.glyphs.neuron_active
                } else {
                    self.glyphs.neuron_idle
                };
                let style = Style::default().fg(self.highlight(node.active, was_active));
                let cell = Figure::text(glyph, style);
                Figure::vstack((0..neurons).map(|_| cell.clone()).collect())
            }
            NodeKind::Arrow { direction } => {
                let glyph = match direction {
                    ArrowDirection::Right => self.glyphs.arrow_right,
                    ArrowDirection::Left => self.glyphs.arrow_left,
                };
                Figure::text(
                    glyph,
                    Style::default().fg(self.highlight(node.active, was_active)),
                )
            }
            NodeKind::Caption { text } => {
                Figure::text(text, Style::default().fg(self.palette.text_secondary))
            }
        }
    }
}

/// Compose the whole diagram: stages and arrows left to right, vertically centered.
pub(crate) fn compose(
    diagram: &Diagram,
    fade: Option<Fade<'_>>,
    palette: &Palette,
    glyphs: &Glyphs,
) -> Figure {
    let painter = Painter {
        palette,
        glyphs,
        progress: fade.map_or(1.0, |fade| fade.progress),
    };
    let previous = fade
        .map(|fade| fade.previous)
        .filter(|prev| prev.architecture == diagram.architecture);

    let figures = diagram
        .nodes
        .iter()
        .enumerate()
        .map(|(i, node)| {
            let prev = previous.and_then(|prev| prev.nodes.get(i));
            painter.figure(node, prev)
        })
        .collect();
    Figure::hstack(figures, STAGE_GAP, Align::Center)
}
