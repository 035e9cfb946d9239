use std::time::Duration;

pub const DEFAULT_CLIENT_IP: &str = "127.0.0.1";
pub const DEFAULT_LOG_DIRECTIVE: &str = "gioguesser_server=info";

pub const QUICKWIT_MARKER_FIELD: &str = "task";
pub const QUICKWIT_BATCH_SIZE: usize = 100;
pub const QUICKWIT_CHANNEL_CAPACITY: usize = 1024;
pub const QUICKWIT_FLUSH_INTERVAL: Duration = Duration::from_secs(5);
