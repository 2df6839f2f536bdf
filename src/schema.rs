use diesel::prelude::*;

table! {
    tbl_menu (id) {
        id -> BigInt,
        nm -> Varchar,
        price -> Numeric,
        dt_created -> Timestamp,
        dt_updated -> Timestamp,
    }
}
