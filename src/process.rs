// SPDX-License-Identifier: MPL-2.0
//! Process-level concerns: interrupt handling and the final exit status.

use crate::error::{Error, Result, FAILURE_EXIT_CODE};
use crate::rescaler::RescaleReport;
use std::thread;

/// Installs a Ctrl-C handler that reports the cancellation and exits with
/// the failure status.
///
/// # Errors
///
/// Returns an error if a handler is already installed for this process.
pub fn install_interrupt_handler() -> Result<()> {
    ctrlc::set_handler(|| {
        let err = Error::Interrupted;
        err.report();
        std::process::exit(i32::from(err.exit_code()));
    })
    .map_err(|e| Error::unexpected(format!("Failed to install interrupt handler: {e}")))
}

/// Maps the outcome of a guarded run to the process exit status, reporting
/// any error on the way.
///
/// A panic has already been reported by the panic hook.
pub fn exit_status(outcome: thread::Result<Result<RescaleReport>>) -> u8 {
    match outcome {
        Ok(Ok(_)) => 0,
        Ok(Err(err)) => {
            err.report();
            err.exit_code()
        }
        Err(_) => FAILURE_EXIT_CODE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::IconGeometry;
    use crate::paths::AssetPaths;
    use std::panic;
    use std::path::PathBuf;

    #[test]
    fn success_exits_with_zero() {
        let report = RescaleReport {
            paths: AssetPaths::from_base_dir("/app"),
            geometry: IconGeometry::new(108, 108),
            backup_created: true,
        };
        assert_eq!(exit_status(Ok(Ok(report))), 0);
    }

    #[test]
    fn errors_exit_with_one() {
        let missing = Error::InputNotFound(PathBuf::from("/app/assets/icon.png"));
        assert_eq!(exit_status(Ok(Err(missing))), 1);
        assert_eq!(exit_status(Ok(Err(Error::Interrupted))), 1);
    }

    #[test]
    fn panics_exit_with_one() {
        let outcome = panic::catch_unwind(|| -> Result<RescaleReport> {
            panic!("resampler exploded");
        });
        assert!(outcome.is_err());
        assert_eq!(exit_status(outcome), 1);
    }

    #[test]
    fn interrupt_handler_installs_once() {
        install_interrupt_handler().expect("first install succeeds");
        let err = install_interrupt_handler().expect_err("second install is rejected");
        assert!(matches!(err, Error::Unexpected { .. }));
    }
}
