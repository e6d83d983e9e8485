//! Static diagram layouts and the step-driven renderer.
//!
//! Each architecture's diagram is a `'static` tree of [`Node`]s. Every node
//! carries an activation threshold; [`render`] pairs each node with an
//! `active` flag for a given step. Structural nodes (stages, rows, columns,
//! captions) use threshold 0 and are therefore always active.

use crate::architecture::Architecture;
use crate::step::Step;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowDirection {
    Right,
    Left,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Labelled column: a heading above its children.
    Stage {
        label: &'static str,
        children: &'static [Node],
    },
    /// Children laid out side by side.
    Row { children: &'static [Node] },
    /// Children stacked top to bottom.
    Column { children: &'static [Node] },
    /// A vertical stack of neurons.
    Layer { neurons: u8 },
    Arrow { direction: ArrowDirection },
    Caption { text: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node {
    pub threshold: u8,
    pub kind: NodeKind,
}

impl Node {
    #[must_use]
    pub const fn children(&self) -> &'static [Node] {
        match self.kind {
            NodeKind::Stage { children, .. }
            | NodeKind::Row { children }
            | NodeKind::Column { children } => children,
            NodeKind::Layer { .. } | NodeKind::Arrow { .. } | NodeKind::Caption { .. } => &[],
        }
    }

    #[must_use]
    pub const fn is_active_at(&self, step: Step) -> bool {
        step.reaches(self.threshold)
    }
}

// Layout literals are braced so nested slices are promoted to 'static.
macro_rules! stage {
    ($label:expr, [$($child:expr),* $(,)?]) => {
        Node {
            threshold: 0,
            kind: NodeKind::Stage {
                label: $label,
                children: &[$($child),*],
            },
        }
    };
}

macro_rules! row {
    ($($child:expr),* $(,)?) => {
        Node {
            threshold: 0,
            kind: NodeKind::Row {
                children: &[$($child),*],
            },
        }
    };
}

macro_rules! column {
    ($($child:expr),* $(,)?) => {
        Node {
            threshold: 0,
            kind: NodeKind::Column {
                children: &[$($child),*],
            },
        }
    };
}

macro_rules! layer {
    ($neurons:expr, $threshold:expr) => {
        Node {
            threshold: $threshold,
            kind: NodeKind::Layer { neurons: $neurons },
        }
    };
}

macro_rules! arrow {
    ($threshold:expr) => {
        Node {
            threshold: $threshold,
            kind: NodeKind::Arrow {
                direction: ArrowDirection::Right,
            },
        }
    };
}

macro_rules! caption {
    ($text:expr) => {
        Node {
            threshold: 0,
            kind: NodeKind::Caption { text: $text },
        }
    };
}

pub(crate) const SKIP_GRAM: &[Node] = &[
    stage!("Input Word", [layer!(5, 0)]),
    arrow!(1),
    stage!("Embedding", [layer!(3, 1)]),
    arrow!(2),
    stage!(
        "Context Predictions",
        [row!(layer!(5, 2), layer!(5, 3), layer!(5, 3))]
    ),
];

pub(crate) const CBOW: &[Node] = &[
    stage!(
        "Context Words",
        [row!(layer!(5, 0), layer!(5, 0), layer!(5, 0))]
    ),
    arrow!(1),
    stage!("Average", [layer!(3, 1)]),
    arrow!(2),
    stage!("Target Word", [layer!(5, 3)]),
];

pub(crate) const FAST_TEXT: &[Node] = &[
    stage!(
        "N-grams",
        [row!(
            column!(caption!("ba-"), layer!(3, 0)),
            column!(caption!("-an-"), layer!(3, 0)),
            column!(caption!("-nk"), layer!(3, 0)),
        )]
    ),
    arrow!(1),
    stage!(
        "N-gram Embeddings",
        [row!(layer!(3, 2), layer!(3, 2), layer!(3, 2))]
    ),
    arrow!(2),
    stage!("Word Embedding", [layer!(3, 3)]),
];

pub(crate) const ELMO: &[Node] = &[
    stage!(
        "Input Sequence",
        [column!(caption!("The"), caption!("bank"), caption!("approved"))]
    ),
    arrow!(1),
    stage!(
        "BiLSTM Layers",
        [row!(layer!(4, 1), layer!(4, 2), layer!(4, 2))]
    ),
    arrow!(2),
    stage!("Contextual Embedding", [layer!(4, 3)]),
];

/// A layout node paired with its highlight state for one step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedNode {
    pub node: &'static Node,
    pub active: bool,
    pub children: Vec<RenderedNode>,
}

impl RenderedNode {
    fn build(node: &'static Node, step: Step) -> Self {
        Self {
            node,
            active: node.is_active_at(step),
            children: node
                .children()
                .iter()
                .map(|child| Self::build(child, step))
                .collect(),
        }
    }

    fn collect_flags(&self, out: &mut Vec<bool>) {
        out.push(self.active);
        for child in &self.children {
            child.collect_flags(out);
        }
    }
}

/// The rendered diagram for one (architecture, step) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagram {
    pub architecture: Architecture,
    pub step: Step,
    pub nodes: Vec<RenderedNode>,
}

impl Diagram {
    /// Active flags in pre-order, one per layout node.
    #[must_use]
    pub fn active_flags(&self) -> Vec<bool> {
        let mut flags = Vec::new();
        for node in &self.nodes {
            node.collect_flags(&mut flags);
        }
        flags
    }
}

/// Compute the highlight tree for `architecture` at `step`.
///
/// Pure: equal inputs always produce equal trees.
#[must_use]
pub fn render(architecture: Architecture, step: Step) -> Diagram {
    Diagram {
        architecture,
        step,
        nodes: architecture
            .layout()
            .iter()
            .map(|node| RenderedNode::build(node, step))
            .collect(),
    }
}
