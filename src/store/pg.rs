use anyhow::Result;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager};

use crate::models::menu::{MenuItem, NewMenu};
use crate::schema::tbl_menu::dsl::*;
use crate::store::{MenuStore, StoreError};

pub type DbPool = r2d2::Pool<ConnectionManager<PgConnection>>;

pub fn init_pool(database_url: &str) -> Result<DbPool> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    let pool = r2d2::Pool::builder()
        .build(manager)
        .map_err(|e| anyhow::anyhow!("Failed to create pool: {}", e))?;
    Ok(pool)
}

/// Postgres-backed store; checks a connection out of the r2d2 pool per call.
pub struct DieselMenuStore {
    pool: DbPool,
}

impl DieselMenuStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> Result<r2d2::PooledConnection<ConnectionManager<PgConnection>>, StoreError> {
        self.pool
            .get()
            .map_err(|e| StoreError::Backend(anyhow::anyhow!("Connection failed: {}", e)))
    }
}

impl MenuStore for DieselMenuStore {
    fn create(&self, entry: NewMenu) -> Result<MenuItem, StoreError> {
        let item = super::build_item(entry)?;
        let conn = &mut self.conn()?;

        diesel::insert_into(tbl_menu)
            .values(&item)
            .get_result::<MenuItem>(conn)
            .map_err(|e| StoreError::Backend(e.into()))
    }

    fn get(&self, menu_id: i64) -> Result<MenuItem, StoreError> {
        let conn = &mut self.conn()?;

        tbl_menu
            .filter(id.eq(menu_id))
            .first::<MenuItem>(conn)
            .map_err(|e| match e {
                diesel::result::Error::NotFound => StoreError::NotFound(menu_id),
                other => StoreError::Backend(other.into()),
            })
    }

    fn list_all(&self) -> Result<Vec<MenuItem>, StoreError> {
        let conn = &mut self.conn()?;

        tbl_menu
            .order((dt_created.asc(), id.asc()))
            .load::<MenuItem>(conn)
            .map_err(|e| StoreError::Backend(e.into()))
    }
}
