//! The transfer pass: drive a value-node animation curve in a node
//! graph from a parsed speed series.

use speedtrace_common::{SpeedtraceError, SpeedtraceResult};
use speedtrace_host_core::{GraphHost, Interpolation, NodeGraph, TextStore};
use speedtrace_series_model::{parse_series, SeriesStats, SpeedRecord};

/// Name and label given to the created scalar node.
pub const SPEED_NODE_NAME: &str = "Speed Value";

/// Action name used when the shader graph has none yet.
pub const SHADER_ACTION_NAME: &str = "SpeedAction";

/// Action name used when the geometry-node graph has none yet.
pub const GEOMETRY_ACTION_NAME: &str = "GeoNodesSpeedAction";

/// What a transfer run produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransferReport {
    /// Number of keyframes inserted.
    pub keyed: usize,

    /// Min/max speed observed; `None` when the series was empty.
    pub stats: Option<SeriesStats>,
}

/// Key the parsed series onto the active material's shader graph.
pub fn transfer_to_shader_graph<H>(host: &mut H, series_name: &str) -> SpeedtraceResult<TransferReport>
where
    H: GraphHost + TextStore,
{
    let records = read_series(host, series_name)?;
    let graph = host.shader_graph()?;
    Ok(write_series_curve(graph, SHADER_ACTION_NAME, &records))
}

/// Key the parsed series onto the geometry-nodes modifier's graph.
pub fn transfer_to_geometry_graph<H>(
    host: &mut H,
    series_name: &str,
) -> SpeedtraceResult<TransferReport>
where
    H: GraphHost + TextStore,
{
    let records = read_series(host, series_name)?;
    let graph = host.geometry_graph()?;
    Ok(write_series_curve(graph, GEOMETRY_ACTION_NAME, &records))
}

fn read_series<H: TextStore>(host: &H, name: &str) -> SpeedtraceResult<Vec<SpeedRecord>> {
    let text = host
        .read_text(name)
        .ok_or_else(|| SpeedtraceError::missing_series(name))?;
    parse_series(text)
}

/// Create one value node, ensure the graph has an action (reusing an
/// existing one), append one curve bound to the node's output, and key
/// every record at `frame_end` with step interpolation so each value
/// holds flat until the next step.
fn write_series_curve(
    graph: &mut NodeGraph,
    action_name: &str,
    records: &[SpeedRecord],
) -> TransferReport {
    let stats = SeriesStats::from_records(records);

    // An empty series keys nothing; creating an orphan node for it
    // would leave dead graph state behind.
    let Some(stats) = stats else {
        tracing::info!("speed series is empty, nothing to transfer");
        return TransferReport {
            keyed: 0,
            stats: None,
        };
    };

    graph.add_value_node(SPEED_NODE_NAME, SPEED_NODE_NAME);
    let data_path = NodeGraph::value_output_path(SPEED_NODE_NAME);

    let action = graph.ensure_action(action_name);
    let curve = action.new_curve(data_path);
    for record in records {
        curve.insert_keyframe(record.frame_end, record.speed as f64, Interpolation::Constant);
    }

    tracing::info!(
        keyed = records.len(),
        min_speed = stats.min_speed,
        max_speed = stats.max_speed,
        "speed series transferred"
    );

    TransferReport {
        keyed: records.len(),
        stats: Some(stats),
    }
}
