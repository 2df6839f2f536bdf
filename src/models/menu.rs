use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use diesel::prelude::{Insertable, Queryable};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Insertable, Queryable, Serialize)]
#[diesel(table_name = crate::schema::tbl_menu)]
pub struct MenuItem {
    pub id: i64,
    #[serde(rename = "name")]
    pub nm: String,
    pub price: BigDecimal,
    #[serde(rename = "created")]
    pub dt_created: NaiveDateTime,
    #[serde(rename = "updated")]
    pub dt_updated: NaiveDateTime,
}

/// Entry payload for the store-level create operation. The price arrives
/// as a decimal string and is parsed before anything is persisted.
#[derive(Debug, Deserialize, Validate)]
pub struct NewMenu {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Price is required"))]
    pub price: String,
}
