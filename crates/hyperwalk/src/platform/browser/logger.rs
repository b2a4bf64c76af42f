use tracing_wasm::{WASMLayerConfigBuilder, set_as_global_default_with_config};

/// Route `tracing` events at `max_level` and above to the browser console.
///
/// Call once, before starting the app.
pub fn init_logger(max_level: tracing::Level) {
    set_as_global_default_with_config(
        WASMLayerConfigBuilder::new()
            .set_max_level(max_level)
            .set_report_logs_in_timings(false)
            .build(),
    );
}
