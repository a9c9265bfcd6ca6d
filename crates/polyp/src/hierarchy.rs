//! Weighted hierarchy and the padded two-pass pack layout.

use serde::Serialize;

use crate::pack::{Circle, pack_siblings};

/// Index of a node in a [`Hierarchy`] arena.
pub type NodeId = usize;

#[derive(Debug, Clone, Default, Serialize)]
struct Node {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    value: f64,
    x: f64,
    y: f64,
    r: f64,
}

/// An arena-backed weighted tree. The root is created by [`Hierarchy::new`]
/// and always has id [`Hierarchy::ROOT`]; leaves carry the values that drive
/// circle sizes.
#[derive(Debug, Clone, Serialize)]
pub struct Hierarchy {
    nodes: Vec<Node>,
}

impl Default for Hierarchy {
    fn default() -> Self {
        Self::new()
    }
}

impl Hierarchy {
    pub const ROOT: NodeId = 0;

    pub fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
        }
    }

    /// Adds a child under `parent` and returns its id. Children keep
    /// insertion order, which makes the packing deterministic.
    pub fn add_child(&mut self, parent: NodeId, value: f64) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Node {
            parent: Some(parent),
            value,
            ..Node::default()
        });
        self.nodes[parent].children.push(id);
        id
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        // The root always exists; "empty" means no leaves were added.
        self.nodes.len() == 1
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id].children
    }

    pub fn is_leaf(&self, id: NodeId) -> bool {
        self.nodes[id].children.is_empty()
    }

    pub fn value(&self, id: NodeId) -> f64 {
        self.nodes[id].value
    }

    /// The packed circle of a node. Meaningful after [`Pack::layout`].
    pub fn circle(&self, id: NodeId) -> Circle {
        let n = &self.nodes[id];
        Circle {
            x: n.x,
            y: n.y,
            r: n.r,
        }
    }

    /// Recomputes every internal node's value as its own value plus the sum
    /// of its children's values, bottom-up.
    pub fn sum(&mut self) {
        for id in self.post_order() {
            let child_sum: f64 = self.nodes[id]
                .children
                .iter()
                .map(|&c| self.nodes[c].value)
                .sum();
            self.nodes[id].value += child_sum;
        }
    }

    fn post_order(&self) -> Vec<NodeId> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![(Self::ROOT, false)];
        while let Some((id, visited)) = stack.pop() {
            if visited {
                out.push(id);
            } else {
                stack.push((id, true));
                for &c in self.nodes[id].children.iter().rev() {
                    stack.push((c, false));
                }
            }
        }
        out
    }

    fn pre_order(&self) -> Vec<NodeId> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![Self::ROOT];
        while let Some(id) = stack.pop() {
            out.push(id);
            for &c in self.nodes[id].children.iter().rev() {
                stack.push(c);
            }
        }
        out
    }
}

/// Circle-pack layout over a [`Hierarchy`]: leaves get `r = sqrt(value)`,
/// siblings are front-chain packed, parents enclose their children, and the
/// whole packing is scaled to fit a `width x height` rectangle with `padding`
/// pixels between sibling circles.
#[derive(Debug, Clone, Copy)]
pub struct Pack {
    width: f64,
    height: f64,
    padding: f64,
}

impl Default for Pack {
    fn default() -> Self {
        Self::new()
    }
}

impl Pack {
    pub fn new() -> Self {
        Self {
            width: 1.0,
            height: 1.0,
            padding: 0.0,
        }
    }

    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Computes x/y/r for every node. Total over degenerate input: zero,
    /// negative, NaN and missing values all yield zero-radius leaves at a
    /// valid position.
    pub fn layout(&self, h: &mut Hierarchy) {
        let order = h.post_order();

        // First pass: unpadded packing establishes relative radii.
        for &id in &order {
            if h.is_leaf(id) {
                let v = h.nodes[id].value;
                h.nodes[id].r = if v.is_finite() && v > 0.0 { v.sqrt() } else { 0.0 };
            } else {
                self.pack_children(h, id, 0.0);
            }
        }

        // Second pass: re-pack with padding scaled into the unit packing.
        let root_r = h.nodes[Hierarchy::ROOT].r;
        if self.padding != 0.0 && root_r > 0.0 {
            let k = root_r / self.width.min(self.height);
            for &id in &order {
                if !h.is_leaf(id) {
                    self.pack_children(h, id, self.padding * k);
                }
            }
        }

        // Third pass: child coordinates are parent-relative; translate into
        // absolute canvas space scaled to fit the rectangle.
        let root_r = h.nodes[Hierarchy::ROOT].r;
        let k = if root_r > 0.0 {
            self.width.min(self.height) / (2.0 * root_r)
        } else {
            1.0
        };
        for id in h.pre_order() {
            if let Some(parent) = h.nodes[id].parent {
                let (px, py) = (h.nodes[parent].x, h.nodes[parent].y);
                let n = &mut h.nodes[id];
                n.r *= k;
                n.x = px + k * n.x;
                n.y = py + k * n.y;
            } else {
                let n = &mut h.nodes[id];
                n.x = self.width / 2.0;
                n.y = self.height / 2.0;
                n.r *= k;
            }
        }
    }

    fn pack_children(&self, h: &mut Hierarchy, id: NodeId, pad: f64) {
        let kids = h.nodes[id].children.clone();
        let mut circles: Vec<Circle> = kids
            .iter()
            .map(|&c| {
                let n = &h.nodes[c];
                Circle {
                    x: n.x,
                    y: n.y,
                    r: n.r + pad,
                }
            })
            .collect();
        let e = pack_siblings(&mut circles);
        for (circle, &kid) in circles.iter().zip(&kids) {
            let n = &mut h.nodes[kid];
            n.x = circle.x;
            n.y = circle.y;
            n.r = circle.r - pad;
        }
        h.nodes[id].r = e + pad;
    }
}
