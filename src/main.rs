//! frogklan_release - build platform installers from pre-built binaries.

use frogklan_release::cli;
use frogklan_release::cli::OutputManager;
use std::process;

#[tokio::main]
async fn main() {
    env_logger::init();

    match cli::run().await {
        Ok(exit_code) => {
            process::exit(exit_code);
        }
        Err(e) => {
            // Never quiet for fatal errors
            let output = OutputManager::new(false, false);
            output.error(&format!("[release] {e}"));

            let suggestions = e.recovery_suggestions();
            if !suggestions.is_empty() {
                output.error_indent("");
                for suggestion in suggestions {
                    output.error_indent(&format!("• {suggestion}"));
                }
            }

            process::exit(1);
        }
    }
}
