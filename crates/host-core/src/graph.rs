//! Node-graph data structures: scalar value nodes, animation actions,
//! f-curves, and keyframes.

use serde::{Deserialize, Serialize};
use speedtrace_series_model::FrameNumber;

/// Index of a node within its graph.
pub type NodeId = usize;

/// Keyframe interpolation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Interpolation {
    /// Hold the value flat until the next keyframe (step).
    Constant,
    /// Interpolate linearly toward the next keyframe.
    #[default]
    Linear,
}

/// A (frame, value) pair on an f-curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    pub frame: FrameNumber,
    pub value: f64,
    pub interpolation: Interpolation,
}

/// An animation curve addressing one animatable property by data path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FCurve {
    /// Property the curve drives, e.g.
    /// `nodes["Speed Value"].outputs[0].default_value`.
    pub data_path: String,

    /// Keyframes, kept sorted by frame.
    pub keyframes: Vec<Keyframe>,
}

impl FCurve {
    pub fn new(data_path: impl Into<String>) -> Self {
        Self {
            data_path: data_path.into(),
            keyframes: Vec::new(),
        }
    }

    /// Insert a keyframe, keeping the curve sorted by frame. A keyframe
    /// already sitting at the same frame is replaced.
    pub fn insert_keyframe(
        &mut self,
        frame: FrameNumber,
        value: f64,
        interpolation: Interpolation,
    ) {
        let keyframe = Keyframe {
            frame,
            value,
            interpolation,
        };
        match self.keyframes.binary_search_by_key(&frame, |k| k.frame) {
            Ok(i) => self.keyframes[i] = keyframe,
            Err(i) => self.keyframes.insert(i, keyframe),
        }
    }

    /// Evaluate the curve at a frame.
    ///
    /// Before the first keyframe the first value holds; after the last,
    /// the last. Between keyframes the left key's interpolation mode
    /// decides: `Constant` holds its value, `Linear` blends toward the
    /// right key. `None` for an empty curve.
    pub fn evaluate(&self, frame: FrameNumber) -> Option<f64> {
        let first = self.keyframes.first()?;
        if frame <= first.frame {
            return Some(first.value);
        }
        let last = self.keyframes.last()?;
        if frame >= last.frame {
            return Some(last.value);
        }

        let idx = match self.keyframes.binary_search_by_key(&frame, |k| k.frame) {
            Ok(i) => return Some(self.keyframes[i].value),
            Err(i) => i - 1,
        };
        let left = &self.keyframes[idx];
        let right = &self.keyframes[idx + 1];

        match left.interpolation {
            Interpolation::Constant => Some(left.value),
            Interpolation::Linear => {
                let span = (right.frame - left.frame) as f64;
                let t = (frame - left.frame) as f64 / span;
                Some(left.value + (right.value - left.value) * t)
            }
        }
    }
}

/// An animation action owning the f-curves attached to one node graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    pub name: String,
    pub fcurves: Vec<FCurve>,
}

impl Action {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fcurves: Vec::new(),
        }
    }

    /// Append a new curve for the given data path and return it.
    pub fn new_curve(&mut self, data_path: impl Into<String>) -> &mut FCurve {
        self.fcurves.push(FCurve::new(data_path));
        self.fcurves.last_mut().unwrap()
    }
}

/// A scalar-valued node living in a graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueNode {
    pub name: String,
    pub label: String,
    /// Static output value; animated values come from the action's curves.
    pub value: f64,
}

/// A shader or geometry node graph: its scalar nodes and, once animated,
/// the action holding their curves.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeGraph {
    nodes: Vec<ValueNode>,
    pub action: Option<Action>,
}

impl NodeGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scalar value node and return its id.
    pub fn add_value_node(&mut self, name: impl Into<String>, label: impl Into<String>) -> NodeId {
        self.nodes.push(ValueNode {
            name: name.into(),
            label: label.into(),
            value: 0.0,
        });
        self.nodes.len() - 1
    }

    pub fn node(&self, id: NodeId) -> Option<&ValueNode> {
        self.nodes.get(id)
    }

    pub fn nodes(&self) -> &[ValueNode] {
        &self.nodes
    }

    /// The graph's action, creating one named `default_name` if absent.
    /// An existing action is reused as-is regardless of its name.
    pub fn ensure_action(&mut self, default_name: &str) -> &mut Action {
        if self.action.is_none() {
            self.action = Some(Action::new(default_name));
        }
        self.action.as_mut().unwrap()
    }

    /// Data path addressing a value node's scalar output.
    pub fn value_output_path(node_name: &str) -> String {
        format!("nodes[\"{node_name}\"].outputs[0].default_value")
    }
}
