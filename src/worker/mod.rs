mod refresher;

pub use refresher::{apply_jitter, refresh_once, refresher_process, SensorCache};
