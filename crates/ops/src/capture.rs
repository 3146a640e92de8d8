//! The capture pass: sample the active object's speed over the scene's
//! frame range and record the series into a named text block.

use speedtrace_common::{SampleConfig, SpeedtraceResult};
use speedtrace_host_core::{SceneHost, TextStore};
use speedtrace_sampler_core::{moving_average, sample_speeds, SamplePlan};
use speedtrace_series_model::{serialize_series, FrameNumber};

/// Run the capture pass, returning the number of records written.
///
/// The series is serialized in full before the text block is touched,
/// so any failure leaves the host unmodified. The block is created if
/// absent and cleared otherwise.
pub fn capture_speed<H>(host: &mut H, config: &SampleConfig) -> SpeedtraceResult<usize>
where
    H: SceneHost + TextStore,
{
    let (start, end) = host.frame_range();
    let plan = SamplePlan::new(start, end, config.effective_interval(), host.fps())?;

    let mut source = |frame: FrameNumber| host.position_at(frame);
    let mut records = sample_speeds(&plan, &mut source)?;

    if config.apply_averaging {
        records = moving_average(&records, config.effective_window());
    }

    let text = serialize_series(&records);
    host.write_text(&config.series_name, &text);

    tracing::info!(
        series = %config.series_name,
        records = records.len(),
        interval = plan.interval,
        averaged = config.apply_averaging,
        "speed data recorded"
    );

    Ok(records.len())
}
