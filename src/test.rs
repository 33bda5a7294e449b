use log::LevelFilter;

/// Routes log output of this crate to the test harness.
///
/// `RUST_LOG` overrides the default *trace* level. Repeated calls do nothing.
pub fn init_logger() {
    env_logger::Builder::new()
        .is_test(true)
        .filter(Some(env!("CARGO_CRATE_NAME")), LevelFilter::Trace)
        .parse_default_env()
        .try_init()
        .ok();
}
