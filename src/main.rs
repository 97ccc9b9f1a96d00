//! Docsite GUI - Main Entry Point
//!
//! Native viewer for a bilingual documentation site.

use docsite_gui::app::application::run_app;

fn main() {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting Docsite GUI...");

    // Run the GPUI application
    run_app();
}
