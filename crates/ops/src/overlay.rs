//! The overlay pass: display the per-frame speed on the singleton text
//! object, keyframing it on every frame change.

use speedtrace_common::{SampleConfig, SpeedtraceError, SpeedtraceResult};
use speedtrace_host_core::{FrameChangeHub, OverlayHost, SubscriptionId, TextStore};
use speedtrace_series_model::{parse_series, FrameSpeedLookup};

/// Build the frame→speed lookup from the named series, ensure the
/// overlay object exists, and install the frame-change observer.
///
/// The observer composes `text_before + speed + text_after` for the
/// current frame (speed 0 outside any record range), writes it as the
/// overlay body, and keys the body at that frame. Installing it
/// REPLACES any previously active observer — only one runs at a time.
pub fn display_speed_overlay<D>(
    doc: &mut D,
    hub: &mut FrameChangeHub<D>,
    config: &SampleConfig,
) -> SpeedtraceResult<SubscriptionId>
where
    D: OverlayHost + TextStore + 'static,
{
    let text = doc
        .read_text(&config.series_name)
        .ok_or_else(|| SpeedtraceError::missing_series(&config.series_name))?;
    let records = parse_series(text)?;
    let lookup = FrameSpeedLookup::from_records(&records);

    doc.ensure_overlay();

    let before = config.text_before.clone();
    let after = config.text_after.clone();
    let covered_frames = lookup.covered_frames();
    let id = hub.replace(Box::new(move |doc: &mut D, frame| {
        let speed = lookup.speed_at(frame);
        let body = format!("{before}{speed}{after}");
        doc.set_overlay_body(&body);
        doc.keyframe_overlay_body(frame);
    }));

    tracing::info!(
        series = %config.series_name,
        covered_frames,
        subscription = id,
        "speed overlay installed"
    );

    Ok(id)
}
