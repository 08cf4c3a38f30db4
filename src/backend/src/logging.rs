use env_logger::{Builder, Env, Target};
use std::io::Write;

/// Install panic logging and the stdout logger shared by all binaries.
///
/// Errors go straight to stderr; everything else is written unadorned to stdout.
pub fn init() {
    log_panics::init();

    let mut builder = if cfg!(debug_assertions) {
        Builder::from_env(Env::default().default_filter_or("debug"))
    } else {
        Builder::from_env(Env::default().default_filter_or("info"))
    };

    builder.format(|f, record| match record.level() {
        log::Level::Error => {
            eprintln!("{}", record.args());
            Ok(())
        }
        _ => {
            writeln!(f, "{}", record.args())
        }
    });

    builder.target(Target::Stdout).init();
}
