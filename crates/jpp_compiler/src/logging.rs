use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Log to stdout with timestamps, at `level` unless `RUST_LOG` says otherwise.
pub fn init(level: LevelFilter) {
    Builder::new()
        .filter_level(level)
        .parse_env(Env::default())
        .target(Target::Stdout)
        .format_timestamp_secs()
        .init();
}
