/// Per-connection settings
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Direct replies (errors) queued for the delivery task
    pub send_buffer_size: usize,
    /// Longest accepted username, in characters
    pub max_username_length: usize,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            send_buffer_size: 32,
            max_username_length: 32,
        }
    }
}
