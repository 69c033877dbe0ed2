/* 3rd party libraries */
use log::debug;
use log::error;

/* Custom libraries */
use session::SessionFSM;
use session::SessionOutcome;

/* Modules */
mod config;
mod session;
mod shared;
mod trip;

/* Main */
fn main() -> std::io::Result<()> {
    env_logger::init();

    // Load the configuration
    let config = unwrap_or_exit!(config::load_config());

    // Run the interactive session against the terminal
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let session = SessionFSM::new(&config.elevator, stdin.lock(), stdout.lock());

    match session.run()? {
        SessionOutcome::Exited => debug!("Session ended before any floor was entered"),
        SessionOutcome::Completed(floors) => {
            debug!("Session completed with {} floor(s) visited", floors.len())
        }
    }

    Ok(())
}
