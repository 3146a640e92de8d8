//! In-memory host backend.
//!
//! Implements every capability trait over plain data structures so the
//! operators can run against a document that lives entirely in memory:
//! tests and offline tooling drive it instead of a live host
//! application.

use std::collections::HashMap;

use speedtrace_common::{SpeedtraceError, SpeedtraceResult};
use speedtrace_series_model::{FrameNumber, MotionTrace};

use crate::graph::NodeGraph;
use crate::hub::FrameChangeHub;
use crate::{GraphHost, OverlayHost, SceneHost, TextStore};

/// Conventional name of the singleton overlay text object.
pub const OVERLAY_OBJECT_NAME: &str = "SpeedText";

/// The singleton overlay text object.
#[derive(Debug, Clone, Default)]
pub struct OverlayObject {
    /// Displayed text.
    pub body: String,

    /// Keyframed history of the body, sorted by frame.
    pub body_keys: Vec<(FrameNumber, String)>,
}

impl OverlayObject {
    fn key_body(&mut self, frame: FrameNumber) {
        match self.body_keys.binary_search_by_key(&frame, |(f, _)| *f) {
            Ok(i) => self.body_keys[i].1 = self.body.clone(),
            Err(i) => self.body_keys.insert(i, (frame, self.body.clone())),
        }
    }
}

/// An in-memory host document: timeline, active object motion, text
/// blocks, node graphs, and the overlay object.
#[derive(Debug, Default)]
pub struct Document {
    frame_start: FrameNumber,
    frame_end: FrameNumber,
    fps: f64,
    current_frame: FrameNumber,

    /// Keyed planar motion of the active object; `None` = no selection.
    active_object: Option<MotionTrace>,

    /// Shader graph of the active material, when one is assigned.
    material_graph: Option<NodeGraph>,

    /// Graph of the geometry-nodes modifier, when one is present.
    modifier_graph: Option<NodeGraph>,

    texts: HashMap<String, String>,

    /// The singleton overlay, created on demand.
    pub overlay: Option<OverlayObject>,
}

impl Document {
    pub fn new(frame_start: FrameNumber, frame_end: FrameNumber, fps: f64) -> Self {
        Self {
            frame_start,
            frame_end,
            fps,
            current_frame: frame_start,
            ..Self::default()
        }
    }

    /// Select an object whose motion follows `trace`.
    pub fn with_active_object(mut self, trace: MotionTrace) -> Self {
        self.active_object = Some(trace);
        self
    }

    /// Assign a material (with an empty shader graph) to the active object.
    pub fn with_material(mut self) -> Self {
        self.material_graph = Some(NodeGraph::new());
        self
    }

    /// Add a geometry-nodes modifier (with an empty graph).
    pub fn with_geometry_modifier(mut self) -> Self {
        self.modifier_graph = Some(NodeGraph::new());
        self
    }

    pub fn material_graph(&self) -> Option<&NodeGraph> {
        self.material_graph.as_ref()
    }

    pub fn modifier_graph(&self) -> Option<&NodeGraph> {
        self.modifier_graph.as_ref()
    }

    pub fn has_selection(&self) -> bool {
        self.active_object.is_some()
    }
}

impl SceneHost for Document {
    fn frame_range(&self) -> (FrameNumber, FrameNumber) {
        (self.frame_start, self.frame_end)
    }

    fn fps(&self) -> f64 {
        self.fps
    }

    fn current_frame(&self) -> FrameNumber {
        self.current_frame
    }

    fn position_at(&mut self, frame: FrameNumber) -> SpeedtraceResult<(f64, f64)> {
        let trace = self
            .active_object
            .as_ref()
            .ok_or_else(|| SpeedtraceError::missing_selection("no object selected"))?;

        // Sampling seeks the timeline, matching live-host behavior.
        self.current_frame = frame;

        // An object with no motion keys sits still at the origin.
        Ok(trace.position_at(frame).unwrap_or((0.0, 0.0)))
    }
}

impl TextStore for Document {
    fn write_text(&mut self, name: &str, contents: &str) {
        self.texts.insert(name.to_string(), contents.to_string());
    }

    fn read_text(&self, name: &str) -> Option<&str> {
        self.texts.get(name).map(String::as_str)
    }
}

impl GraphHost for Document {
    fn shader_graph(&mut self) -> SpeedtraceResult<&mut NodeGraph> {
        self.material_graph
            .as_mut()
            .ok_or_else(|| SpeedtraceError::missing_selection("active object has no material"))
    }

    fn geometry_graph(&mut self) -> SpeedtraceResult<&mut NodeGraph> {
        self.modifier_graph.as_mut().ok_or_else(|| {
            SpeedtraceError::missing_selection("active object has no geometry-nodes modifier")
        })
    }
}

impl OverlayHost for Document {
    fn ensure_overlay(&mut self) {
        if self.overlay.is_none() {
            self.overlay = Some(OverlayObject {
                body: "0".to_string(),
                body_keys: Vec::new(),
            });
            tracing::debug!(name = OVERLAY_OBJECT_NAME, "created overlay text object");
        }
    }

    fn set_overlay_body(&mut self, body: &str) {
        if let Some(overlay) = self.overlay.as_mut() {
            overlay.body = body.to_string();
        }
    }

    fn keyframe_overlay_body(&mut self, frame: FrameNumber) {
        if let Some(overlay) = self.overlay.as_mut() {
            overlay.key_body(frame);
        }
    }

    fn overlay_body(&self) -> Option<&str> {
        self.overlay.as_ref().map(|o| o.body.as_str())
    }
}

/// A document plus its frame-change hub.
///
/// The hub lives beside the document rather than inside it so observers
/// can mutate the document during dispatch.
#[derive(Debug, Default)]
pub struct MemoryHost {
    doc: Document,
    hub: FrameChangeHub<Document>,
}

impl MemoryHost {
    pub fn new(doc: Document) -> Self {
        Self {
            doc,
            hub: FrameChangeHub::new(),
        }
    }

    /// Seek the timeline, then notify the active observer.
    pub fn set_frame(&mut self, frame: FrameNumber) {
        self.doc.current_frame = frame;
        self.hub.dispatch(&mut self.doc, frame);
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.doc
    }

    pub fn hub(&self) -> &FrameChangeHub<Document> {
        &self.hub
    }

    /// Split borrow for operators that install observers while touching
    /// the document.
    pub fn parts_mut(&mut self) -> (&mut Document, &mut FrameChangeHub<Document>) {
        (&mut self.doc, &mut self.hub)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use speedtrace_series_model::MotionSample;

    fn moving_trace() -> MotionTrace {
        MotionTrace::new(vec![
            MotionSample {
                frame: 0,
                x: 0.0,
                y: 0.0,
            },
            MotionSample {
                frame: 1,
                x: 100.0,
                y: 0.0,
            },
        ])
    }

    #[test]
    fn test_position_at_seeks_current_frame() {
        let mut doc = Document::new(0, 10, 24.0).with_active_object(moving_trace());
        let pos = doc.position_at(1).unwrap();
        assert_eq!(pos, (100.0, 0.0));
        assert_eq!(doc.current_frame(), 1);
    }

    #[test]
    fn test_position_without_selection_fails() {
        let mut doc = Document::new(0, 10, 24.0);
        assert!(matches!(
            doc.position_at(0).unwrap_err(),
            SpeedtraceError::MissingSelection { .. }
        ));
    }

    #[test]
    fn test_unkeyed_object_sits_at_origin() {
        let mut doc = Document::new(0, 10, 24.0).with_active_object(MotionTrace::default());
        assert_eq!(doc.position_at(5).unwrap(), (0.0, 0.0));
    }

    #[test]
    fn test_write_text_overwrites() {
        let mut doc = Document::new(0, 10, 24.0);
        doc.write_text("speed_data", "0,1,10\n");
        doc.write_text("speed_data", "0,1,20\n");
        assert_eq!(doc.read_text("speed_data"), Some("0,1,20\n"));
        assert_eq!(doc.read_text("missing"), None);
    }

    #[test]
    fn test_graph_access_requires_targets() {
        let mut doc = Document::new(0, 10, 24.0);
        assert!(doc.shader_graph().is_err());
        assert!(doc.geometry_graph().is_err());

        let mut doc = Document::new(0, 10, 24.0)
            .with_material()
            .with_geometry_modifier();
        assert!(doc.shader_graph().is_ok());
        assert!(doc.geometry_graph().is_ok());
    }

    #[test]
    fn test_overlay_lifecycle() {
        let mut doc = Document::new(0, 10, 24.0);
        assert_eq!(doc.overlay_body(), None);

        doc.ensure_overlay();
        assert_eq!(doc.overlay_body(), Some("0"));

        doc.set_overlay_body("12 km/h");
        doc.keyframe_overlay_body(4);
        doc.ensure_overlay(); // second ensure must not reset the body
        assert_eq!(doc.overlay_body(), Some("12 km/h"));

        let overlay = doc.overlay.as_ref().unwrap();
        assert_eq!(overlay.body_keys, vec![(4, "12 km/h".to_string())]);
    }

    #[test]
    fn test_set_frame_dispatches_to_hub() {
        let mut host = MemoryHost::new(Document::new(0, 10, 24.0));
        let (_, hub) = host.parts_mut();
        hub.replace(Box::new(|doc: &mut Document, frame: FrameNumber| {
            doc.write_text("seen", &frame.to_string());
        }));

        host.set_frame(6);
        assert_eq!(host.document().read_text("seen"), Some("6"));
        assert_eq!(host.document().current_frame(), 6);
    }
}
