//! Process-wide configuration instance.

use crate::config::{Parameters, Settings, project_root};
use crate::error::{Error, Result};
use std::sync::OnceLock;
use tracing::error;

static GLOBAL: OnceLock<std::result::Result<Settings, String>> = OnceLock::new();

/// The process-wide settings, loaded at the project root on first use.
///
/// Initialization runs at most once per process, even under concurrent
/// first access. If it failed, every call reports that failure.
pub fn global() -> Result<&'static Settings> {
    init_with(Parameters::default)
}

/// Like [`global`], but the first caller decides the parameters.
///
/// Later calls return the already initialized settings and never evaluate
/// `params`.
pub fn init_with(params: impl FnOnce() -> Parameters) -> Result<&'static Settings> {
    GLOBAL
        .get_or_init(|| {
            project_root()
                .and_then(|root| Settings::load_with_parameters(&root, params()))
                .map_err(|e| {
                    let message = error_chain(&e);
                    error!("Configuration initialization failed: {message}");
                    message
                })
        })
        .as_ref()
        .map_err(|message| Error::Initialization {
            message: message.clone(),
        })
}

fn error_chain(err: &Error) -> String {
    let mut message = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_global_is_shared_across_threads() {
        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(|| global().map(|s| s as *const Settings as usize)))
            .collect();

        let addrs: Vec<usize> = handles
            .into_iter()
            .map(|h| h.join().unwrap().unwrap())
            .collect();

        assert!(addrs.windows(2).all(|w| w[0] == w[1]));

        let settings = global().unwrap();
        assert!(settings.paths().input_dir.is_dir());
        assert!(settings.paths().output_dir.is_dir());
        assert_eq!(settings.paths().project_root, project_root().unwrap());
    }

    #[test]
    fn test_error_chain_includes_source() {
        let err = Error::DirectoryCreate {
            path: "/nope/output".into(),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        let message = error_chain(&err);
        assert!(message.starts_with("failed to create directory '/nope/output'"));
        assert!(message.contains(": "));
    }
}
