use tracing::Subscriber;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, registry::LookupSpan, util::SubscriberInitExt, EnvFilter,
};

fn env_filter(default_directives: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives))
}

fn fmt_layer<S>() -> fmt::Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
}

/// Installs a compact console subscriber. Returns `false` when a global
/// subscriber was already set.
pub fn init_logger(verbose: bool) -> bool {
    let filter = if verbose {
        env_filter("employee_report=debug,info")
    } else {
        env_filter("employee_report=info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer().compact())
        .try_init()
        .is_ok()
}

pub fn init_json_logger() -> bool {
    tracing_subscriber::registry()
        .with(env_filter("employee_report=info"))
        .with(fmt_layer().json())
        .try_init()
        .is_ok()
}
