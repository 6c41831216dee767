//! ---
//! wms_section: "01-core-functionality"
//! wms_subsection: "module"
//! wms_type: "source"
//! wms_scope: "code"
//! wms_description: "Tracing subscriber setup for WELDSIM binaries."
//! wms_version: "v0.1.0"
//! wms_owner: "tbd"
//! ---
use serde::{Deserialize, Serialize};
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::{Layer, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;

const LOG_ENV: &str = "WELDSIM_LOG";

/// Available log formats for the generator CLI.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum LogFormat {
    StructuredJson,
    #[default]
    Pretty,
}

/// Initialize the tracing subscriber based on configuration and environment.
///
/// * `WELDSIM_LOG` overrides the log filter (e.g. `info`, `debug,weldsim_sim=trace`).
///   When unset the standard `RUST_LOG` variable is honoured, finally defaulting
///   to `info` so the CLI stays quiet unless asked otherwise.
/// * Output goes to stderr so piped record output on stdout stays clean.
pub fn init_tracing(format: LogFormat) {
    // Honour the custom `WELDSIM_LOG` directive first, then `RUST_LOG`.
    let filter = match std::env::var(LOG_ENV) {
        Ok(directive) => EnvFilter::try_new(directive).unwrap_or_else(|err| {
            eprintln!(
                "invalid {} directive ({}); defaulting to info logging",
                LOG_ENV, err
            );
            EnvFilter::new("info")
        }),
        Err(_) => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    let fmt_layer = match format {
        LogFormat::StructuredJson => fmt::layer()
            .with_target(false)
            .with_timer(fmt::time::UtcTime::rfc_3339())
            .json()
            .with_writer(std::io::stderr)
            .boxed(),
        LogFormat::Pretty => fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_names_are_kebab_case() {
        let format: LogFormat = serde_yaml::from_str("structured-json").unwrap();
        assert_eq!(format, LogFormat::StructuredJson);
        let format: LogFormat = serde_yaml::from_str("pretty").unwrap();
        assert_eq!(format, LogFormat::Pretty);
    }

    #[test]
    fn init_is_idempotent() {
        init_tracing(LogFormat::Pretty);
        init_tracing(LogFormat::StructuredJson);
    }
}
