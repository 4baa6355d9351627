use std::collections::HashMap;
use std::sync::Arc;

/// A network interface as known to ntopng.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkInterface {
    pub name: Arc<str>,
    pub id: i64,
}

impl NetworkInterface {
    pub fn new(name: impl Into<Arc<str>>, id: i64) -> Self {
        Self {
            name: name.into(),
            id,
        }
    }
}

/// Name to id mapping produced by one resolution pass.
///
/// Immutable once built; a new pass builds a new table instead of
/// mutating the published one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterfaceTable {
    by_name: HashMap<Arc<str>, i64>,
    by_id: HashMap<i64, Arc<str>>,
}

impl InterfaceTable {
    pub fn from_interfaces(interfaces: Vec<NetworkInterface>) -> Self {
        let mut by_name = HashMap::with_capacity(interfaces.len());
        let mut by_id = HashMap::with_capacity(interfaces.len());

        for iface in interfaces {
            by_id.insert(iface.id, Arc::clone(&iface.name));
            by_name.insert(iface.name, iface.id);
        }

        Self { by_name, by_id }
    }

    pub fn id_of(&self, name: &str) -> Option<i64> {
        self.by_name.get(name).copied()
    }

    pub fn name_of(&self, id: i64) -> Option<&str> {
        self.by_id.get(&id).map(|name| name.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Interface names, sorted for stable error messages and logs.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.by_name.keys().map(|n| n.to_string()).collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
