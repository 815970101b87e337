use suntimes_core::{DisplayModel, Error, Renderer};

/// Console implementation of the rendering boundary.
///
/// The two day regions go to stdout; the loading indicator and any alert
/// go to stderr, so piped output stays clean.
#[derive(Debug, Default)]
pub struct ConsoleRenderer {
    failed: bool,
}

impl ConsoleRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an alert was surfaced during the last run.
    pub fn failed(&self) -> bool {
        self.failed
    }
}

impl Renderer for ConsoleRenderer {
    fn loading_started(&mut self) {
        eprintln!("Fetching sun and moon data...");
    }

    fn loading_finished(&mut self) {}

    fn render(&mut self, model: &DisplayModel) {
        for entry in model.entries() {
            println!("{}", entry.label);
            println!("{}", "-".repeat(entry.label.as_str().len()));
            for line in entry.lines() {
                println!("{line}");
            }
            println!();
        }
    }

    fn alert(&mut self, error: &Error) {
        self.failed = true;
        eprintln!("Error: {error}");
    }
}
