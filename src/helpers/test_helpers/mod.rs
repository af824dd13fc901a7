use super::*;

mod mock_filesystem;
mod mock_subscriber;

pub use mock_filesystem::*;
pub use mock_subscriber::*;

/// Route log output through the test harness. Safe to call from every test.
pub fn init_test_logging() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Trace)
        .try_init();
}
