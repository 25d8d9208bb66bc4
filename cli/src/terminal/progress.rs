use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar over the address batch, one tick per attempted address.
pub fn batch_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    let style = ProgressStyle::with_template(
        "{spinner:.blue} [{bar:40.green/white}] {pos}/{len} addresses",
    )
    .unwrap()
    .progress_chars("█▓░");

    pb.set_style(style);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
