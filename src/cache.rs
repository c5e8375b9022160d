use crate::gateway::{GatewayError, SheetGateway};
use crate::table::InventoryTable;

/// Memoizes the fetched inventory table until explicitly invalidated.
///
/// The cache carries a generation counter as its invalidation token:
/// `invalidate` bumps it and drops the memoized table, so the next read
/// refetches through the gateway. There is no time-based expiry.
#[derive(Debug, Default)]
pub struct DataCache {
    table: Option<InventoryTable>,
    generation: u64,
}

impl DataCache {
    pub fn new() -> Self {
        DataCache::default()
    }

    /// The memoized table, fetching it through the gateway if the cache is
    /// cold. A fetch error propagates unhandled; nothing is memoized in
    /// that case.
    pub fn get_or_fetch(
        &mut self,
        gateway: &dyn SheetGateway,
    ) -> Result<&InventoryTable, GatewayError> {
        if self.table.is_none() {
            let records = gateway.fetch_records()?;
            self.table = Some(InventoryTable::from_records(&records));
        }
        // Just filled above when it was empty
        Ok(self.table.as_ref().unwrap())
    }

    /// Drop the memoized table and bump the invalidation token.
    pub fn invalidate(&mut self) {
        self.table = None;
        self.generation += 1;
    }

    /// Current invalidation token. Changes exactly when `invalidate` runs.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
