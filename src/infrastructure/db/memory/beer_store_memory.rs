use crate::infrastructure::db::dto::{BeerRow, NewBeerRow};
use crate::infrastructure::db::stores::beer_store::{BeerRepositoryError, BeerStore};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::RwLock;

#[derive(Default)]
struct Table {
    next_id: i64,
    rows: BTreeMap<i64, BeerRow>,
}

impl Table {
    fn name_taken(&self, name: &str, except: Option<i64>) -> bool {
        self.rows
            .values()
            .any(|row| row.name == name && Some(row.id) != except)
    }
}

/// Process-local beer store, used for local runs without PostgreSQL and in tests.
#[derive(Default)]
pub struct BeerStoreMemory {
    table: RwLock<Table>,
}

impl BeerStoreMemory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BeerStore for BeerStoreMemory {
    async fn list(&self) -> Result<Vec<BeerRow>, BeerRepositoryError> {
        let table = self
            .table
            .read()
            .map_err(|_| BeerRepositoryError::StorageUnavailable)?;
        Ok(table.rows.values().cloned().collect())
    }

    async fn get(&self, id: i64) -> Result<Option<BeerRow>, BeerRepositoryError> {
        let table = self
            .table
            .read()
            .map_err(|_| BeerRepositoryError::StorageUnavailable)?;
        Ok(table.rows.get(&id).cloned())
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<BeerRow>, BeerRepositoryError> {
        let table = self
            .table
            .read()
            .map_err(|_| BeerRepositoryError::StorageUnavailable)?;
        Ok(table.rows.values().find(|row| row.name == name).cloned())
    }

    async fn exists(&self, id: i64) -> Result<bool, BeerRepositoryError> {
        let table = self
            .table
            .read()
            .map_err(|_| BeerRepositoryError::StorageUnavailable)?;
        Ok(table.rows.contains_key(&id))
    }

    async fn insert(&self, row: &NewBeerRow) -> Result<BeerRow, BeerRepositoryError> {
        let mut table = self
            .table
            .write()
            .map_err(|_| BeerRepositoryError::StorageUnavailable)?;
        if table.name_taken(&row.name, None) {
            return Err(BeerRepositoryError::Conflict);
        }

        table.next_id += 1;
        let stored = row.clone().with_id(table.next_id);
        table.rows.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, row: &BeerRow) -> Result<BeerRow, BeerRepositoryError> {
        let mut table = self
            .table
            .write()
            .map_err(|_| BeerRepositoryError::StorageUnavailable)?;
        if !table.rows.contains_key(&row.id) {
            return Err(BeerRepositoryError::NotFound);
        }
        if table.name_taken(&row.name, Some(row.id)) {
            return Err(BeerRepositoryError::Conflict);
        }

        table.rows.insert(row.id, row.clone());
        Ok(row.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), BeerRepositoryError> {
        let mut table = self
            .table
            .write()
            .map_err(|_| BeerRepositoryError::StorageUnavailable)?;
        table.rows.remove(&id);
        Ok(())
    }

    async fn compare_and_set_quantity(
        &self,
        id: i64,
        expected: i32,
        new: i32,
    ) -> Result<Option<BeerRow>, BeerRepositoryError> {
        let mut table = self
            .table
            .write()
            .map_err(|_| BeerRepositoryError::StorageUnavailable)?;
        match table.rows.get_mut(&id) {
            Some(row) if row.quantity == expected => {
                row.quantity = new;
                Ok(Some(row.clone()))
            }
            _ => Ok(None),
        }
    }
}
