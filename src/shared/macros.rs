/***************************************/
/*               Macros                */
/***************************************/

// Unwraps a startup result, or logs the error and exits the process.
#[macro_export]
macro_rules! unwrap_or_exit {
    ($expr:expr) => {
        match $expr {
            Ok(value) => value,
            Err(e) => {
                error!("Failed to start: {}", e);
                std::process::exit(1);
            }
        }
    };
}
