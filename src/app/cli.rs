use std::future::Future;

use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use super::error::AppError;
use super::logging::init_logging;

/// Reusable CLI application runner that handles:
/// - Argument parsing (usage errors exit with code 2)
/// - Logging setup and the tokio runtime
/// - Signal handling (SIGINT, SIGTERM, SIGHUP) with graceful shutdown
/// - Exit codes (0 = success, 1 = error, 128 + signal number on a signal)
pub struct CliApp {
    name: String,
}

impl CliApp {
    /// Create a new CLI application runner
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parse arguments, then run `main_fn` until it finishes or a signal arrives
    ///
    /// On a signal the token handed to `main_fn` is cancelled and the runner
    /// waits for `main_fn` to wind down before exiting.
    ///
    /// This function never returns - it calls std::process::exit with the appropriate code
    pub fn run<A, P, F, Fut>(self, parse: P, main_fn: F) -> !
    where
        P: FnOnce(Vec<String>) -> Result<A, AppError>,
        F: FnOnce(A, CancellationToken) -> Fut,
        Fut: Future<Output = Result<(), AppError>>,
    {
        init_logging();

        let args = match parse(std::env::args().collect()) {
            Ok(args) => args,
            Err(e) => {
                eprintln!("{}: {}", self.name, e);
                std::process::exit(2);
            }
        };

        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(rt) => rt,
            Err(e) => {
                error!(error = %AppError::from(e), "Failed to start runtime");
                std::process::exit(1);
            }
        };

        let token = CancellationToken::new();
        let code = runtime.block_on(Self::drive(main_fn(args, token.clone()), token));
        std::process::exit(code);
    }

    /// Race the main future against signals and map the outcome to an exit code
    async fn drive<Fut>(main_fut: Fut, token: CancellationToken) -> i32
    where
        Fut: Future<Output = Result<(), AppError>>,
    {
        tokio::pin!(main_fut);

        tokio::select! {
            result = &mut main_fut => exit_code(result),
            signal_code = wait_for_signal() => {
                token.cancel();
                if let Err(e) = main_fut.await {
                    error!(error = %e, "Application failed during shutdown");
                }
                signal_code
            }
        }
    }
}

fn exit_code(result: Result<(), AppError>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            error!(error = %e, "Application failed");
            1
        }
    }
}

/// Wait for any Unix signal (SIGINT, SIGTERM, SIGHUP) or Ctrl+C
/// Returns the exit code to use (130 for SIGINT, 143 for SIGTERM, etc.)
async fn wait_for_signal() -> i32 {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let handlers = (
            signal(SignalKind::terminate()),
            signal(SignalKind::interrupt()),
            signal(SignalKind::hangup()),
        );
        let (mut sigterm, mut sigint, mut sighup) = match handlers {
            (Ok(term), Ok(int), Ok(hup)) => (term, int, hup),
            _ => {
                warn!("Failed to install signal handlers, running until completion");
                return std::future::pending().await;
            }
        };

        tokio::select! {
            _ = sigterm.recv() => {
                info!("Received SIGTERM");
                143 // 128 + 15
            }
            _ = sigint.recv() => {
                info!("Received SIGINT");
                130 // 128 + 2
            }
            _ = sighup.recv() => {
                info!("Received SIGHUP");
                129 // 128 + 1
            }
        }
    }

    #[cfg(not(unix))]
    {
        if tokio::signal::ctrl_c().await.is_err() {
            warn!("Failed to install Ctrl+C handler, running until completion");
            return std::future::pending().await;
        }
        info!("Received Ctrl+C");
        130
    }
}
