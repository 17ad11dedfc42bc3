use anyhow::anyhow;
use anyhow::bail;
use anyhow::Result;
use rustc_hash::FxHashMap;

/// Items kept in insertion order, addressable both by position and by unique name.
#[derive(Debug)]
pub struct Storage<T> {
    data: Vec<T>,
    names: Vec<String>,
    name_to_id: FxHashMap<String, usize>,
}

impl<T> Storage<T> {
    pub fn store_with_name(&mut self, name: &str, item: T) -> Result<usize> {
        if self.name_to_id.contains_key(name) {
            bail!("Storage item {} already exists", name);
        }

        let id = self.data.len();
        self.data.push(item);
        self.names.push(name.to_string());
        self.name_to_id.insert(name.to_string(), id);

        Ok(id)
    }

    pub fn get(&self, id: usize) -> Result<&T> {
        self.data.get(id).ok_or_else(|| anyhow!("Storage item {} not found", id))
    }

    pub fn get_mut(&mut self, id: usize) -> Result<&mut T> {
        self.data.get_mut(id).ok_or_else(|| anyhow!("Storage item {} not found", id))
    }

    pub fn get_id(&self, name: &str) -> Result<usize> {
        match self.name_to_id.get(name) {
            Some(id) => Ok(*id),
            None => bail!("Storage item {} not found", name),
        }
    }

    pub fn get_name(&self, id: usize) -> Result<&str> {
        self.names.get(id).map(|name| name.as_str()).ok_or_else(|| anyhow!("Storage item {} not found", id))
    }

    pub fn get_by_name(&self, name: &str) -> Result<&T> {
        let id = self.get_id(name)?;
        self.get(id)
    }

    pub fn get_by_name_mut(&mut self, name: &str) -> Result<&mut T> {
        let id = self.get_id(name)?;
        self.get_mut(id)
    }

    /// Swaps the item under `id` for a new one, keeping its name and position.
    pub fn replace(&mut self, id: usize, item: T) -> Result<T> {
        match self.data.get_mut(id) {
            Some(slot) => Ok(std::mem::replace(slot, item)),
            None => bail!("Storage item {} not found", id),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    pub fn iter_enumerate(&self) -> impl Iterator<Item = (usize, &T)> {
        self.data.iter().enumerate()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(|name| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<T> Default for Storage<T> {
    fn default() -> Self {
        Self { data: Vec::default(), names: Vec::default(), name_to_id: FxHashMap::default() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_unique() {
        let mut storage = Storage::default();

        assert_eq!(storage.store_with_name("concept", 1).ok(), Some(0));
        assert!(storage.store_with_name("concept", 2).is_err());
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn lookup_by_name_and_position() {
        let mut storage = Storage::default();
        storage.store_with_name("concept", 'a').unwrap();
        storage.store_with_name("experiment", 'b').unwrap();

        assert_eq!(storage.get_id("experiment").ok(), Some(1));
        assert_eq!(storage.get_name(0).ok(), Some("concept"));
        assert_eq!(storage.get_by_name("experiment").ok(), Some(&'b'));
        assert!(storage.get(2).is_err());
        assert!(storage.get_by_name("summary").is_err());
        assert_eq!(storage.names().collect::<Vec<_>>(), vec!["concept", "experiment"]);
    }

    #[test]
    fn replace_keeps_name() {
        let mut storage = Storage::default();
        storage.store_with_name("rule", 10).unwrap();

        assert_eq!(storage.replace(0, 20).ok(), Some(10));
        assert_eq!(storage.get_by_name("rule").ok(), Some(&20));
        assert!(storage.replace(3, 30).is_err());
    }
}
