//! Counsel Storage Layer
//!
//! Implements the AttorneyStore trait on top of SQLite.
//!
//! # Architecture
//!
//! - One `attorneys` table holding every field of a record verbatim
//! - Indexes on `city`, `zip_code` and `name` for the common search paths
//! - Searches are case-insensitive substring matches, newest first
//!
//! The store is an explicit handle: callers construct it once with a
//! configurable path and pass it to whatever needs it.
//!
//! # Examples
//!
//! ```no_run
//! use counsel_store::SqliteStore;
//!
//! let store = SqliteStore::new(":memory:").unwrap();
//! // Store is now ready for record operations
//! ```

#![warn(missing_docs)]

use chrono::{DateTime, TimeZone, Utc};
use counsel_domain::traits::{AttorneyStore, StoreStats};
use counsel_domain::{Attorney, AttorneyDraft, AttorneyId, Filter};
use rusqlite::functions::FunctionFlags;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Invalid data format
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

const SELECT_COLUMNS: &str = "SELECT id, name, phone, email, website, address, city, state, zip_code, \
     practice_areas, source_url, created_at, updated_at FROM attorneys";

/// SQLite-based implementation of AttorneyStore
///
/// # Thread Safety
///
/// SQLite connections are not thread-safe. Each thread should have its own
/// SqliteStore instance; concurrent inserts from separate handles all succeed.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Create a new SqliteStore with the given database path
    ///
    /// Use `:memory:` for an in-memory database (useful for testing).
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use counsel_store::SqliteStore;
    ///
    /// let store = SqliteStore::new("attorneys.db").unwrap();
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref();
        debug!("Opening attorney store at {}", path.display());

        let conn = Connection::open(path)?;
        register_unicode_lower(&conn)?;
        let mut store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema
    fn initialize_schema(&mut self) -> Result<(), StoreError> {
        let schema = include_str!("schema.sql");
        self.conn.execute_batch(schema)?;
        Ok(())
    }

    /// Convert a stored millisecond timestamp back into a UTC datetime
    fn millis_to_datetime(millis: i64) -> Result<DateTime<Utc>, StoreError> {
        Utc.timestamp_millis_opt(millis)
            .single()
            .ok_or_else(|| StoreError::InvalidData(format!("Timestamp out of range: {}", millis)))
    }

    /// Map a row selected with `SELECT_COLUMNS` to an Attorney
    fn row_to_attorney(row: &Row<'_>) -> rusqlite::Result<Attorney> {
        let created_at = Self::millis_to_datetime(row.get(11)?).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(11, rusqlite::types::Type::Integer, Box::new(e))
        })?;
        let updated_at = Self::millis_to_datetime(row.get(12)?).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(12, rusqlite::types::Type::Integer, Box::new(e))
        })?;

        Ok(Attorney {
            id: AttorneyId::from_value(row.get(0)?),
            name: row.get(1)?,
            phone: row.get(2)?,
            email: row.get(3)?,
            website: row.get(4)?,
            address: row.get(5)?,
            city: row.get(6)?,
            state: row.get(7)?,
            zip_code: row.get(8)?,
            practice_areas: row.get(9)?,
            source_url: row.get(10)?,
            created_at,
            updated_at,
        })
    }
}

/// SQL name of the Unicode-aware lower-case function
///
/// SQLite's built-in `LOWER()` only folds ASCII, so "ÉVRY" would never match "évry".
const UNICODE_LOWER: &str = "unicode_lower";

/// Register [`UNICODE_LOWER`] on a connection; NULL stays NULL
fn register_unicode_lower(conn: &Connection) -> rusqlite::Result<()> {
    conn.create_scalar_function(
        UNICODE_LOWER,
        1,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| {
            let value: Option<String> = ctx.get(0)?;
            Ok(value.map(|v| v.to_lowercase()))
        },
    )
}

/// Build a `%term%` LIKE pattern, escaping LIKE wildcards with `\`
fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// A filter value worth applying: present and not blank
fn filter_term(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl AttorneyStore for SqliteStore {
    type Error = StoreError;

    fn insert(&mut self, draft: AttorneyDraft) -> Result<AttorneyId, Self::Error> {
        // Millisecond precision so a read-back compares equal to what we return
        let stored_at = Utc::now().timestamp_millis();

        self.conn.execute(
            "INSERT INTO attorneys (name, phone, email, website, address, city, state,
                                    zip_code, practice_areas, source_url, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
            params![
                &draft.name,
                &draft.phone,
                &draft.email,
                &draft.website,
                &draft.address,
                &draft.city,
                &draft.state,
                &draft.zip_code,
                &draft.practice_areas,
                &draft.source_url,
                stored_at,
                stored_at,
            ],
        )?;

        let id = AttorneyId::from_value(self.conn.last_insert_rowid());
        debug!("Inserted attorney {} from {}", id, draft.source_url);
        Ok(id)
    }

    fn search(&self, filter: &Filter, limit: usize) -> Result<Vec<Attorney>, Self::Error> {
        let mut sql = format!("{} WHERE 1=1", SELECT_COLUMNS);
        let mut params: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(city) = filter_term(&filter.city) {
            sql.push_str(" AND unicode_lower(city) LIKE ? ESCAPE '\\'");
            params.push(Box::new(contains_pattern(&city.to_lowercase())));
        }

        if let Some(zip_code) = filter_term(&filter.zip_code) {
            sql.push_str(" AND zip_code LIKE ? ESCAPE '\\'");
            params.push(Box::new(contains_pattern(zip_code)));
        }

        if let Some(practice_area) = filter_term(&filter.practice_area) {
            sql.push_str(" AND unicode_lower(practice_areas) LIKE ? ESCAPE '\\'");
            params.push(Box::new(contains_pattern(&practice_area.to_lowercase())));
        }

        sql.push_str(" ORDER BY created_at DESC, id DESC LIMIT ?");
        params.push(Box::new(i64::try_from(limit).unwrap_or(i64::MAX)));

        let mut stmt = self.conn.prepare(&sql)?;
        let param_refs: Vec<&dyn rusqlite::ToSql> = params.iter().map(|p| p.as_ref()).collect();

        let attorneys = stmt
            .query_map(&param_refs[..], Self::row_to_attorney)?
            .collect::<Result<Vec<_>, _>>()?;

        debug!("Search {:?} (limit {}) matched {} record(s)", filter, limit, attorneys.len());
        Ok(attorneys)
    }

    fn get_by_id(&self, id: AttorneyId) -> Result<Option<Attorney>, Self::Error> {
        let sql = format!("{} WHERE id = ?1", SELECT_COLUMNS);
        let attorney = self
            .conn
            .query_row(&sql, params![id.value()], Self::row_to_attorney)
            .optional()?;

        Ok(attorney)
    }

    fn stats(&self) -> Result<StoreStats, Self::Error> {
        let (total, cities, states): (i64, i64, i64) = self.conn.query_row(
            "SELECT COUNT(*),
                    COUNT(DISTINCT NULLIF(TRIM(city), '')),
                    COUNT(DISTINCT NULLIF(TRIM(state), ''))
             FROM attorneys",
            [],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
        )?;

        let to_count = |value: i64| {
            u64::try_from(value)
                .map_err(|_| StoreError::InvalidData(format!("Negative count: {}", value)))
        };

        Ok(StoreStats {
            total_attorneys: to_count(total)?,
            unique_cities: to_count(cities)?,
            unique_states: to_count(states)?,
        })
    }
}
