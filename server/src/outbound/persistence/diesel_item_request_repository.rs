//! PostgreSQL-backed `ItemRequestRepository` implementation using Diesel ORM.
//!
//! Lists are returned newest first.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{ItemRequestRepository, ItemRequestRepositoryError};
use crate::domain::{ItemRequest, NewItemRequest, RequestId, UserId};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{ItemRequestRow, NewItemRequestRow};
use super::pool::{DbPool, PoolError};
use super::schema::requests;

/// Diesel-backed implementation of the `ItemRequestRepository` port.
#[derive(Clone)]
pub struct DieselItemRequestRepository {
    pool: DbPool,
}

impl DieselItemRequestRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> ItemRequestRepositoryError {
    map_basic_pool_error(error, ItemRequestRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> ItemRequestRepositoryError {
    map_basic_diesel_error(
        error,
        ItemRequestRepositoryError::query,
        ItemRequestRepositoryError::connection,
    )
}

#[async_trait]
impl ItemRequestRepository for DieselItemRequestRepository {
    async fn insert(
        &self,
        request: &NewItemRequest,
    ) -> Result<ItemRequest, ItemRequestRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = diesel::insert_into(requests::table)
            .values(&NewItemRequestRow {
                description: &request.description,
                requestor_id: request.requestor_id.get(),
                created: request.created,
            })
            .returning(ItemRequestRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row.into())
    }

    async fn find_by_id(
        &self,
        id: RequestId,
    ) -> Result<Option<ItemRequest>, ItemRequestRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<ItemRequestRow> = requests::table
            .find(id.get())
            .select(ItemRequestRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(ItemRequest::from))
    }

    async fn list_by_requestor(
        &self,
        requestor_id: UserId,
    ) -> Result<Vec<ItemRequest>, ItemRequestRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<ItemRequestRow> = requests::table
            .filter(requests::requestor_id.eq(requestor_id.get()))
            .select(ItemRequestRow::as_select())
            .order_by((requests::created.desc(), requests::id.desc()))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(ItemRequest::from).collect())
    }

    async fn list_all(&self) -> Result<Vec<ItemRequest>, ItemRequestRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<ItemRequestRow> = requests::table
            .select(ItemRequestRow::as_select())
            .order_by((requests::created.desc(), requests::id.desc()))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(ItemRequest::from).collect())
    }
}
