//! Progress bar display for installations

use indicatif::{ProgressBar, ProgressStyle};

/// Per-file progress display for an installation
pub struct ProgressDisplay {
    file_pb: ProgressBar,
}

impl ProgressDisplay {
    /// Create a new progress display with total file count
    pub fn new(total_files: u64) -> Self {
        let file_style = ProgressStyle::default_bar()
            .template("  [{bar:40.green/yellow}] {pos}/{len} files {msg}")
            .unwrap()
            .progress_chars("#>-");

        let file_pb = ProgressBar::new(total_files);
        file_pb.set_style(file_style);

        Self { file_pb }
    }

    /// Update file progress
    pub fn update_file(&self, file_path: &str) {
        // Truncate long paths for display
        let display_path = if file_path.len() > 50 {
            format!("...{}", &file_path[file_path.len() - 47..])
        } else {
            file_path.to_string()
        };
        self.file_pb.set_message(display_path);
        self.file_pb.inc(1);
    }

    /// Finish and clear the bar
    pub fn finish(&self) {
        self.file_pb.finish_and_clear();
    }

    /// Abandon on error
    pub fn abandon(&self) {
        self.file_pb.abandon();
    }
}
