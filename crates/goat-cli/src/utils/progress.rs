use goat::engine::progress::{Progress, ProgressCallback};

/// Prints workflow stages to stderr so that a report on stdout stays machine-readable.
#[derive(Debug, Clone, Copy, Default)]
pub struct CliProgressHandler {
    quiet: bool,
}

impl CliProgressHandler {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let quiet = self.quiet;
        Box::new(move |progress: Progress| {
            if quiet {
                return;
            }
            if let Some(line) = Self::describe(&progress) {
                eprintln!("{}", line);
            }
        })
    }

    fn describe(progress: &Progress) -> Option<String> {
        match progress {
            Progress::StageStart { .. } => None,
            Progress::StageFinish { name } => Some(format!("✓ {} complete.", name)),
            Progress::Message(msg) => Some(format!("  {}", msg)),
        }
    }
}
