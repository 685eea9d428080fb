//! Static optical topology: nodes, fiber links, and the trace path.
//!
//! The topology is immutable configuration supplied at construction. The
//! trace components never mutate it; they only derive the step timeline
//! and interpolate marker positions from it.

use crate::NodeId;
use std::fmt;

/// Role of a node in the optical backbone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Terminal equipment: transponders and mux/demux units.
    Te,
    /// Reconfigurable optical add-drop multiplexer.
    Roadm,
    /// In-line amplifier site.
    Ila,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Te => "TE",
            NodeKind::Roadm => "ROADM",
            NodeKind::Ila => "ILA",
        }
    }
}

/// A 2D map coordinate in the topology's drawing space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Linear interpolation toward `other`; `t` is clamped to [0, 1].
    pub fn lerp(&self, other: Position, t: f64) -> Position {
        let t = t.clamp(0.0, 1.0);
        Position {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }
}

/// A node in the optical backbone.
#[derive(Debug, Clone)]
pub struct TopologyNode {
    pub id: NodeId,
    pub name: String,
    pub kind: NodeKind,
    pub position: Position,
}

impl TopologyNode {
    pub fn new(id: NodeId, name: &str, kind: NodeKind, x: f64, y: f64) -> Self {
        Self {
            id,
            name: name.to_owned(),
            kind,
            position: Position::new(x, y),
        }
    }
}

/// A fiber span between two nodes.
#[derive(Debug, Clone)]
pub struct FiberLink {
    pub source: NodeId,
    pub target: NodeId,
    pub distance_km: u32,
    pub span_loss_db: u32,
}

impl FiberLink {
    pub fn new(source: NodeId, target: NodeId, distance_km: u32, span_loss_db: u32) -> Self {
        Self {
            source,
            target,
            distance_km,
            span_loss_db,
        }
    }

    /// Whether this link joins the two given nodes, in either direction.
    pub fn joins(&self, a: NodeId, b: NodeId) -> bool {
        (self.source == a && self.target == b) || (self.source == b && self.target == a)
    }
}

/// Identifier for one step of the trace timeline.
///
/// A trace over a path of N nodes has 2N-1 steps: a dwell at each node,
/// alternating with a span over each connecting link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraceStepId {
    Node(NodeId),
    Link(NodeId, NodeId),
}

impl fmt::Display for TraceStepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceStepId::Node(id) => write!(f, "NODE_{id}"),
            TraceStepId::Link(a, b) => write!(f, "LINK_{a}{b}"),
        }
    }
}

/// One entry of the derived trace timeline.
#[derive(Debug, Clone)]
pub struct TimelineStep {
    pub step: TraceStepId,
    pub label: String,
}

/// Errors detected while validating a topology.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TopologyError {
    /// The trace path names a node that does not exist.
    #[error("trace path references unknown node {0}")]
    UnknownNode(NodeId),

    /// Two consecutive trace-path nodes have no connecting link.
    #[error("no fiber link between {0} and {1}")]
    MissingLink(NodeId, NodeId),

    /// A trace needs at least a source and a destination.
    #[error("trace path must contain at least two nodes")]
    PathTooShort,
}

/// An immutable optical network graph with a designated trace path.
#[derive(Debug, Clone)]
pub struct TopologyGraph {
    nodes: Vec<TopologyNode>,
    links: Vec<FiberLink>,
    trace_path: Vec<NodeId>,
}

impl TopologyGraph {
    /// Build a topology, validating the trace path against nodes and links.
    pub fn new(
        nodes: Vec<TopologyNode>,
        links: Vec<FiberLink>,
        trace_path: Vec<NodeId>,
    ) -> Result<Self, TopologyError> {
        if trace_path.len() < 2 {
            return Err(TopologyError::PathTooShort);
        }
        let graph = Self {
            nodes,
            links,
            trace_path,
        };
        for &id in &graph.trace_path {
            if graph.node(id).is_none() {
                return Err(TopologyError::UnknownNode(id));
            }
        }
        for pair in graph.trace_path.windows(2) {
            if graph.link_between(pair[0], pair[1]).is_none() {
                return Err(TopologyError::MissingLink(pair[0], pair[1]));
            }
        }
        Ok(graph)
    }

    /// The bundled five-node national backbone used by the demo trace.
    pub fn reference() -> Self {
        let nodes = vec![
            TopologyNode::new(NodeId('A'), "Mumbai", NodeKind::Te, 100.0, 200.0),
            TopologyNode::new(NodeId('B'), "Delhi", NodeKind::Roadm, 300.0, 100.0),
            TopologyNode::new(NodeId('C'), "Bangalore", NodeKind::Roadm, 300.0, 300.0),
            TopologyNode::new(NodeId('D'), "Chennai", NodeKind::Roadm, 500.0, 200.0),
            TopologyNode::new(NodeId('E'), "Kolkata", NodeKind::Te, 700.0, 200.0),
        ];
        let links = vec![
            FiberLink::new(NodeId('A'), NodeId('B'), 1400, 22),
            FiberLink::new(NodeId('A'), NodeId('C'), 980, 18),
            FiberLink::new(NodeId('B'), NodeId('D'), 2100, 28),
            FiberLink::new(NodeId('C'), NodeId('D'), 350, 9),
            FiberLink::new(NodeId('D'), NodeId('E'), 1600, 24),
        ];
        let trace_path = vec![NodeId('A'), NodeId('B'), NodeId('D'), NodeId('E')];
        Self::new(nodes, links, trace_path).expect("reference topology is well-formed")
    }

    pub fn nodes(&self) -> &[TopologyNode] {
        &self.nodes
    }

    pub fn links(&self) -> &[FiberLink] {
        &self.links
    }

    pub fn trace_path(&self) -> &[NodeId] {
        &self.trace_path
    }

    /// Look up a node by id.
    pub fn node(&self, id: NodeId) -> Option<&TopologyNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Look up the link joining two nodes, in either direction.
    pub fn link_between(&self, a: NodeId, b: NodeId) -> Option<&FiberLink> {
        self.links.iter().find(|l| l.joins(a, b))
    }

    /// Derive the alternating node/link step sequence covering the trace path.
    ///
    /// Labels follow the path-trace panel convention: the first node is the
    /// source, the last the destination, everything between is transit.
    pub fn timeline(&self) -> Vec<TimelineStep> {
        let last = self.trace_path.len() - 1;
        let mut steps = Vec::with_capacity(2 * self.trace_path.len() - 1);
        for (idx, &id) in self.trace_path.iter().enumerate() {
            let node = self.node(id).expect("trace path validated at construction");
            let role = match idx {
                0 => "Source",
                i if i == last => "Destination",
                _ => "Transit",
            };
            steps.push(TimelineStep {
                step: TraceStepId::Node(id),
                label: format!("{} ({role})", node.name),
            });
            if idx < last {
                let next_id = self.trace_path[idx + 1];
                let next = self
                    .node(next_id)
                    .expect("trace path validated at construction");
                steps.push(TimelineStep {
                    step: TraceStepId::Link(id, next_id),
                    label: format!("Link: {} \u{2192} {}", node.name, next.name),
                });
            }
        }
        steps
    }
}
