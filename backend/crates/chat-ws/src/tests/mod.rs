mod messages;

use crate::{ConnectionLimits, ConnectionRegistry, Dispatcher, Metrics};

use chat_log::{LogCapacity, SharedLog};

pub(crate) fn registry(max_total: usize) -> ConnectionRegistry {
    ConnectionRegistry::new(ConnectionLimits { max_total })
}

pub(crate) fn dispatcher(byte_capacity: usize, entry_capacity: usize) -> Dispatcher {
    let capacity = LogCapacity::new(byte_capacity, entry_capacity).unwrap();
    Dispatcher::new(SharedLog::new(capacity), registry(10), Metrics::default())
}
