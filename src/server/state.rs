use parking_lot::{Mutex, MutexGuard};

use crate::table::Table;

/// Application state shared by every request handler.
///
/// Handlers hold the lock only for engine calls and snapshotting; JSON
/// encoding and network writes happen after the guard is dropped.
pub struct AppState {
    table: Mutex<Table>,
}

impl AppState {
    pub fn new(table: Table) -> Self {
        AppState {
            table: Mutex::new(table),
        }
    }

    /// Exclusive access to the table.
    pub fn lock(&self) -> MutexGuard<'_, Table> {
        self.table.lock()
    }
}
