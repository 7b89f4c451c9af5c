use bytes::Bytes;

/// One stored payload and its position in the total order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    seq: u64,
    payload: Bytes,
}

impl Entry {
    pub(crate) fn new(seq: u64, payload: Bytes) -> Self {
        Self { seq, payload }
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn payload(&self) -> &Bytes {
        &self.payload
    }

    pub fn len(&self) -> usize {
        self.payload.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }
}
