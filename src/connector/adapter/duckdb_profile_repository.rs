use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use duckdb::{params, Connection};
use tokio::sync::Mutex;
use tracing::debug;

use crate::application::ProfileRepository;
use crate::domain::{DomainError, ProfileDraft, ScrapedProfile};

const SELECT_COLUMNS: &str =
    "SELECT id, name, email, profile_url, org, platform, keywords, created_at FROM scraped_profiles";

/// Raw column values, converted to a [`ScrapedProfile`] outside the row callback.
struct StoredRow {
    id: String,
    name: String,
    email: Option<String>,
    profile_url: String,
    org: String,
    platform: String,
    keywords: String,
    created_at: i64,
}

impl StoredRow {
    fn read(row: &duckdb::Row<'_>) -> duckdb::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            email: row.get(2)?,
            profile_url: row.get(3)?,
            org: row.get(4)?,
            platform: row.get(5)?,
            keywords: row.get(6)?,
            created_at: row.get(7)?,
        })
    }

    fn into_profile(self) -> Result<ScrapedProfile, DomainError> {
        let platform = self.platform.parse().map_err(|e: DomainError| {
            DomainError::storage(format!("Row {} has an invalid platform: {}", self.id, e))
        })?;
        let created_at = DateTime::from_timestamp_micros(self.created_at).ok_or_else(|| {
            DomainError::storage(format!("Row {} has an invalid created_at", self.id))
        })?;
        Ok(ScrapedProfile::reconstitute(
            self.id,
            self.name,
            self.email,
            self.profile_url,
            self.org,
            platform,
            self.keywords,
            created_at,
        ))
    }
}

/// Current time truncated to the microsecond precision stored on disk, so a
/// returned profile equals the one read back later.
fn now_micros() -> DateTime<Utc> {
    let now = Utc::now();
    DateTime::from_timestamp_micros(now.timestamp_micros()).unwrap_or(now)
}

pub struct DuckdbProfileRepository {
    conn: Arc<Mutex<Connection>>,
}

impl DuckdbProfileRepository {
    pub fn new(db_path: &Path) -> Result<Self, DomainError> {
        let conn = Connection::open(db_path)
            .map_err(|e| DomainError::storage(format!("Failed to open DuckDB database: {}", e)))?;
        Self::initialize_schema(&conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn in_memory() -> Result<Self, DomainError> {
        let conn = Connection::open_in_memory().map_err(|e| {
            DomainError::storage(format!("Failed to open DuckDB in-memory DB: {}", e))
        })?;
        Self::initialize_schema(&conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn initialize_schema(conn: &Connection) -> Result<(), DomainError> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS scraped_profiles (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                email TEXT,
                profile_url TEXT NOT NULL UNIQUE,
                org TEXT NOT NULL,
                platform TEXT NOT NULL,
                keywords TEXT NOT NULL,
                created_at BIGINT NOT NULL
            );
            "#,
        )
        .map_err(|e| DomainError::storage(format!("Failed to initialize schema: {}", e)))?;

        debug!("DuckDB profile schema initialized");
        Ok(())
    }
}

#[async_trait]
impl ProfileRepository for DuckdbProfileRepository {
    async fn find_by_url(&self, profile_url: &str) -> Result<Option<ScrapedProfile>, DomainError> {
        let conn = self.conn.lock().await;
        let mut stmt = conn
            .prepare(&format!("{SELECT_COLUMNS} WHERE profile_url = ?1"))
            .map_err(|e| DomainError::storage(format!("Failed to prepare statement: {}", e)))?;

        match stmt.query_row(params![profile_url], StoredRow::read) {
            Ok(row) => row.into_profile().map(Some),
            Err(duckdb::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(DomainError::storage(format!(
                "Failed to query profile by url: {}",
                e
            ))),
        }
    }

    async fn insert(&self, draft: &ProfileDraft) -> Result<Option<ScrapedProfile>, DomainError> {
        let conn = self.conn.lock().await;

        let existing: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM scraped_profiles WHERE profile_url = ?1",
                params![draft.profile_url()],
                |row| row.get(0),
            )
            .map_err(|e| DomainError::storage(format!("Failed to check profile url: {}", e)))?;
        if existing > 0 {
            debug!("Profile url already stored: {}", draft.profile_url());
            return Ok(None);
        }

        let created_at = now_micros();
        let inserted = conn
            .execute(
                r#"
                INSERT OR IGNORE INTO scraped_profiles (id, name, email, profile_url, org, platform, keywords, created_at)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
                "#,
                params![
                    draft.id(),
                    draft.name(),
                    draft.email(),
                    draft.profile_url(),
                    draft.org(),
                    draft.platform().as_str(),
                    draft.keywords(),
                    created_at.timestamp_micros(),
                ],
            )
            .map_err(|e| DomainError::storage(format!("Failed to insert profile: {}", e)))?;

        if inserted == 0 {
            return Ok(None);
        }
        Ok(Some(draft.clone().into_scraped(created_at)))
    }

    async fn list(&self) -> Result<Vec<ScrapedProfile>, DomainError> {
        let conn = self.conn.lock().await;
        let mut stmt = conn
            .prepare(&format!("{SELECT_COLUMNS} ORDER BY created_at DESC, rowid DESC"))
            .map_err(|e| DomainError::storage(format!("Failed to prepare statement: {}", e)))?;

        let rows = stmt
            .query_map([], StoredRow::read)
            .map_err(|e| DomainError::storage(format!("Failed to query profiles: {}", e)))?;

        let mut profiles = Vec::new();
        for row in rows {
            let row = row.map_err(|e| DomainError::storage(format!("Failed to read row: {}", e)))?;
            profiles.push(row.into_profile()?);
        }
        Ok(profiles)
    }
}
