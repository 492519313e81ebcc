//! Logging setup for the command-line tool

/// Initialize the logger for terminal use.
/// Uses INFO level by default; `RUST_LOG` overrides it (e.g. `RUST_LOG=debug`
/// to see every appended tone).
pub fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .format(|buf, record| {
            use std::io::Write;
            writeln!(
                buf,
                "[{} {:5} {}] {}",
                buf.timestamp(),
                record.level(),
                record.module_path().unwrap_or("unknown"),
                record.args()
            )
        })
        .init();
}
