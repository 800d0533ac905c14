//! Tracing subscriber setup shared by the command-line tools. Events go to
//! stderr so level output on stdout stays machine-readable.

use std::env;
use std::io;

use tracing::Subscriber;
use tracing::subscriber::set_global_default;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

/// Directives used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_DIRECTIVES: &str = "warn";

pub fn env_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVES))
}

pub fn subscriber<W>(filter: EnvFilter, writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(writer).with_ansi(false).finish()
}

/// Installs the stderr subscriber, filtered by `RUST_LOG`.
pub fn init() {
    let directives = env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = env_filter(directives.as_deref());
    if set_global_default(subscriber(filter, io::stderr)).is_err() {
        eprintln!("tracing subscriber was already installed");
    }
}
