use arc_swap::ArcSwapOption;
use ntopng_exporter_domain::InterfaceTable;
use std::sync::Arc;

/// The interface table shared between the resolver and the scrape cycle.
pub struct InterfaceCache {
    table: ArcSwapOption<InterfaceTable>,
}

impl InterfaceCache {
    pub fn new() -> Self {
        Self {
            table: ArcSwapOption::empty(),
        }
    }

    pub fn replace(&self, table: InterfaceTable) -> Arc<InterfaceTable> {
        let table = Arc::new(table);
        self.table.store(Some(Arc::clone(&table)));
        table
    }

    pub fn current(&self) -> Option<Arc<InterfaceTable>> {
        self.table.load_full()
    }
}

impl Default for InterfaceCache {
    fn default() -> Self {
        Self::new()
    }
}
