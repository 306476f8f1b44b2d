use crate::db::connection::Database;
use crate::domain::{Listing, ListingFields, ObjectId, MODEL_NAME};
use crate::errors::ServerError;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, ValueRef};
use rusqlite::{params, OptionalExtension, Row, ToSql};

const SELECT_LISTING: &str =
    "select _id, id, title, description, isactive, __v from listings";

impl ToSql for ObjectId {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.to_string()))
    }
}

impl FromSql for ObjectId {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let raw = value.as_str()?;
        ObjectId::parse_str(raw).map_err(|e| FromSqlError::Other(Box::new(e)))
    }
}

fn listing_from_row(row: &Row<'_>) -> rusqlite::Result<Listing> {
    Ok(Listing {
        internal_id: row.get(0)?,
        id: row.get(1)?,
        title: row.get(2)?,
        description: row.get(3)?,
        isactive: row.get(4)?,
        version: row.get(5)?,
    })
}

/// The listing collection. Built once at startup and handed to the router.
#[derive(Clone, Debug)]
pub struct ListingRepo {
    db: Database,
}

impl ListingRepo {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Every stored listing, oldest first.
    pub fn find_all(&self) -> Result<Vec<Listing>, ServerError> {
        self.db.with_conn(|conn| {
            let mut stmt = conn
                .prepare(&format!("{SELECT_LISTING} order by rowid"))
                .map_err(|e| ServerError::DbError(format!("{MODEL_NAME} find prepare failed: {e}")))?;

            let rows = stmt
                .query_map([], listing_from_row)
                .map_err(|e| ServerError::DbError(format!("{MODEL_NAME} find failed: {e}")))?;

            let mut out = Vec::new();
            for r in rows {
                out.push(r.map_err(|e| ServerError::DbError(e.to_string()))?);
            }
            Ok(out)
        })
    }

    /// Look a listing up by its storage id. No document is [`ServerError::NotFound`].
    pub fn find_by_id(&self, id: &ObjectId) -> Result<Listing, ServerError> {
        self.db
            .with_conn(|conn| {
                conn.query_row(
                    &format!("{SELECT_LISTING} where _id = ?1"),
                    params![id],
                    listing_from_row,
                )
                .optional()
                .map_err(|e| ServerError::DbError(format!("{MODEL_NAME} findById failed: {e}")))
            })?
            .ok_or(ServerError::NotFound)
    }

    pub fn create(&self, fields: &ListingFields) -> Result<Listing, ServerError> {
        let listing = Listing {
            internal_id: ObjectId::new(),
            id: None,
            title: fields.title.clone(),
            description: fields.description.clone(),
            isactive: fields.isactive,
            version: 0,
        };

        self.db.with_conn(|conn| {
            conn.execute(
                "insert into listings (_id, id, title, description, isactive, __v) values (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    listing.internal_id,
                    listing.id,
                    listing.title,
                    listing.description,
                    listing.isactive,
                    listing.version
                ],
            )
            .map_err(|e| ServerError::DbError(format!("{MODEL_NAME} create failed: {e}")))
        })?;

        Ok(listing)
    }

    /// Overwrite title, description and isactive in place. Unset fields are cleared.
    ///
    /// Matching no document is not an error; zero rows are simply touched.
    pub fn update(&self, id: &ObjectId, fields: &ListingFields) -> Result<(), ServerError> {
        self.db.with_conn(|conn| {
            conn.execute(
                "update listings set title = ?1, description = ?2, isactive = ?3 where _id = ?4",
                params![fields.title, fields.description, fields.isactive, id],
            )
            .map_err(|e| ServerError::DbError(format!("{MODEL_NAME} update failed: {e}")))?;
            Ok(())
        })
    }

    /// Delete the document and hand it back.
    pub fn remove(&self, listing: Listing) -> Result<Listing, ServerError> {
        self.db.with_conn(|conn| {
            conn.execute(
                "delete from listings where _id = ?1",
                params![listing.internal_id],
            )
            .map_err(|e| ServerError::DbError(format!("{MODEL_NAME} remove failed: {e}")))?;
            Ok(())
        })?;

        Ok(listing)
    }
}
