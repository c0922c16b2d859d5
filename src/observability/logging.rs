//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber for all entry points
//! - Respect `RUST_LOG` when set, fall back to the configured level
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - Deployment progress goes to the log; the final address line is the
//!   only thing the scripts write to stdout

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Filter directives applied when `RUST_LOG` is not set.
///
/// The bare level covers the binaries' own targets (`deploy_bridge`,
/// `deploy_token`, `deployer`) so their top-level error reports are never
/// filtered out; the scoped directive covers the library.
fn default_directives(default_level: &str) -> String {
    format!("{default_level},evm_deployer={default_level}")
}

/// Initialize the global tracing subscriber.
///
/// `default_level` applies when `RUST_LOG` is not set. Safe to call only
/// once per process; the entry points do so before anything else.
pub fn init(default_level: &str) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            tracing_subscriber::EnvFilter::new(default_directives(default_level))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl Capture {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    struct CaptureWriter(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CaptureWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Capture {
        type Writer = CaptureWriter;

        fn make_writer(&'a self) -> Self::Writer {
            CaptureWriter(self.0.clone())
        }
    }

    #[test]
    fn default_filter_keeps_binary_error_events() {
        let capture = Capture::default();
        let subscriber = tracing_subscriber::registry()
            .with(tracing_subscriber::EnvFilter::new(default_directives("info")))
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(capture.clone()),
            );

        tracing::subscriber::with_default(subscriber, || {
            // The failure paths of the script binaries emit from their own
            // crate targets, not the library's.
            tracing::error!(target: "deploy_bridge", "bridge run failed");
            tracing::info!(target: "evm_deployer", "library event");
            tracing::debug!(target: "evm_deployer", "debug noise");
        });

        let out = capture.contents();
        assert!(out.contains("bridge run failed"));
        assert!(out.contains("library event"));
        assert!(!out.contains("debug noise"));
    }
}
