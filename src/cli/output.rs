//! Output formatting and progress bars for CLI

use indicatif::{ProgressBar, ProgressStyle};

/// Create a progress bar for a multi-game run
pub fn create_play_progress(total_games: u64) -> ProgressBar {
    let pb = ProgressBar::new(total_games);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games ({msg})")
            .expect("Invalid progress bar template")
            .progress_chars("=>-"),
    );
    pb
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:28} {}", format!("{}:", key), value);
}
