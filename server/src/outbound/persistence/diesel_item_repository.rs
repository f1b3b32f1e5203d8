//! PostgreSQL-backed `ItemRepository` implementation using Diesel ORM.
//!
//! Search runs as a case-insensitive `ILIKE` over name and description with
//! LIKE wildcards in the search text escaped.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{ItemRepository, ItemRepositoryError};
use crate::domain::{Item, ItemId, ItemSearch, NewItem, RequestId, UserId};

use super::diesel_basic_error_mapping::{
    escape_like, map_basic_diesel_error, map_basic_pool_error,
};
use super::models::{ItemRow, ItemUpdate, NewItemRow};
use super::pool::{DbPool, PoolError};
use super::schema::items;

/// Diesel-backed implementation of the `ItemRepository` port.
#[derive(Clone)]
pub struct DieselItemRepository {
    pool: DbPool,
}

impl DieselItemRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> ItemRepositoryError {
    map_basic_pool_error(error, ItemRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> ItemRepositoryError {
    map_basic_diesel_error(
        error,
        ItemRepositoryError::query,
        ItemRepositoryError::connection,
    )
}

fn into_items(rows: Vec<ItemRow>) -> Vec<Item> {
    rows.into_iter().map(Item::from).collect()
}

#[async_trait]
impl ItemRepository for DieselItemRepository {
    async fn insert(&self, item: &NewItem) -> Result<Item, ItemRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = diesel::insert_into(items::table)
            .values(&NewItemRow {
                name: &item.name,
                description: &item.description,
                available: item.available,
                owner_id: item.owner_id.get(),
                request_id: item.request_id.map(RequestId::get),
            })
            .returning(ItemRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: ItemId) -> Result<Option<Item>, ItemRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<ItemRow> = items::table
            .find(id.get())
            .select(ItemRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Item::from))
    }

    async fn list_by_owner(&self, owner_id: UserId) -> Result<Vec<Item>, ItemRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<ItemRow> = items::table
            .filter(items::owner_id.eq(owner_id.get()))
            .select(ItemRow::as_select())
            .order_by(items::id.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(into_items(rows))
    }

    async fn search_available(
        &self,
        search: &ItemSearch,
    ) -> Result<Vec<Item>, ItemRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let pattern = format!("%{}%", escape_like(search.text()));

        let rows: Vec<ItemRow> = items::table
            .filter(items::available.eq(true))
            .filter(
                items::name
                    .ilike(&pattern)
                    .or(items::description.ilike(&pattern)),
            )
            .select(ItemRow::as_select())
            .order_by(items::id.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(into_items(rows))
    }

    async fn list_by_requests(
        &self,
        request_ids: &[RequestId],
    ) -> Result<Vec<Item>, ItemRepositoryError> {
        if request_ids.is_empty() {
            return Ok(Vec::new());
        }
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let ids: Vec<i64> = request_ids.iter().map(|id| id.get()).collect();

        let rows: Vec<ItemRow> = items::table
            .filter(items::request_id.eq_any(ids))
            .select(ItemRow::as_select())
            .order_by(items::id.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(into_items(rows))
    }

    async fn update(&self, item: &Item) -> Result<Item, ItemRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = diesel::update(items::table.find(item.id.get()))
            .set(&ItemUpdate {
                name: &item.name,
                description: &item.description,
                available: item.available,
            })
            .returning(ItemRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row.into())
    }

    async fn delete(&self, id: ItemId) -> Result<bool, ItemRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(items::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(deleted > 0)
    }
}
