//! Id Generation Module
//!
//! Generates opaque, unique document ids for the store.

use chrono::Utc;

// == Object Id Generator ==
/// Produces 16-character hex ids from the current Unix timestamp and a
/// monotonically increasing sequence number.
///
/// The sequence half guarantees uniqueness within a store instance even
/// when many documents are inserted in the same second; the timestamp half
/// keeps ids roughly sortable by creation time.
#[derive(Debug, Default)]
pub struct ObjectIdGen {
    /// Sequence number of the last issued id
    seq: u64,
}

impl ObjectIdGen {
    // == Constructor ==
    /// Creates a new generator starting at sequence zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Next Id ==
    /// Issues the next id. Ids are stable: once assigned to a document
    /// they are never reissued by this generator.
    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        let secs = Utc::now().timestamp() as u64;
        format!("{:08x}{:08x}", secs, self.seq)
    }
}
