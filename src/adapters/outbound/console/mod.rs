/// Console adapters for terminal output
mod progress_reporter;

pub use progress_reporter::StderrProgressReporter;
