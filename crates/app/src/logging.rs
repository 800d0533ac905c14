use std::env;
use std::io;

use tracing::subscriber::set_global_default;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

const DEFAULT_DIRECTIVES: &str = "warn";

fn env_filter() -> EnvFilter {
    env::var(EnvFilter::DEFAULT_ENV)
        .ok()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVES))
}

fn install<W>(filter: EnvFilter, writer: W) -> bool
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let subscriber =
        tracing_subscriber::fmt().with_env_filter(filter).with_writer(writer).with_ansi(false);
    set_global_default(subscriber.finish()).is_ok()
}

/// Sends run and generation events to stderr, filtered by `RUST_LOG`.
pub fn init() {
    if !install(env_filter(), io::stderr) {
        eprintln!("tracing subscriber was already installed");
    }
}
