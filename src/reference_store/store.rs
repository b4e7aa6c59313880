//! SQLite-backed reference library store.

use super::models::{
    BrandReferenceEntry, ColorBucket, DeliverableStyleReferenceEntry, DeliverableType, StyleAxis,
};
use super::schema::REFERENCE_VERSIONED_SCHEMAS;
use super::trait_def::{
    BrandReferenceFilter, ReferenceAnomaly, ReferenceStore, StyleReferenceScan,
};
use crate::sqlite_persistence::BASE_DB_VERSION;
use crate::taste::{EnergyBucket, ToneBucket};
use anyhow::{Context, Result};
use chrono::Utc;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension};
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::{info, warn};

const BRAND_COLUMNS: &str = "id, name, description, image_uri, tone_bucket, energy_bucket, \
     color_bucket, color_samples, style_tags, industry_tags, display_order, is_active, \
     usage_count, created_at, updated_at";

const STYLE_COLUMNS: &str = "id, deliverable_type, style_axis, sub_style, tags, color_samples, \
     display_order, is_active, usage_count, created_at, updated_at";

pub struct SqliteReferenceStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteReferenceStore {
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let path = db_path.as_ref();
        let is_new_db = !path.exists();

        let mut conn = Connection::open(path).context("Failed to open reference database")?;
        conn.pragma_update(None, "journal_mode", "WAL")?;

        if is_new_db {
            info!("Creating new reference database at {:?}", path);
            REFERENCE_VERSIONED_SCHEMAS.last().unwrap().create(&conn)?;
        } else {
            let raw_version: i64 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
            let db_version = raw_version - BASE_DB_VERSION as i64;

            if db_version < 1 {
                anyhow::bail!(
                    "Reference database version {} is invalid (expected >= 1)",
                    db_version
                );
            }

            let current_schema_version = REFERENCE_VERSIONED_SCHEMAS.last().unwrap().version as i64;

            let version_index = REFERENCE_VERSIONED_SCHEMAS
                .iter()
                .position(|s| s.version == db_version as usize)
                .with_context(|| format!("Unknown reference database version {}", db_version))?;
            REFERENCE_VERSIONED_SCHEMAS[version_index]
                .validate(&conn)
                .with_context(|| {
                    format!(
                        "Reference database schema validation failed for version {}",
                        db_version
                    )
                })?;

            if db_version < current_schema_version {
                info!(
                    "Migrating reference database from version {} to {}",
                    db_version, current_schema_version
                );
                Self::migrate_if_needed(&mut conn, db_version as usize)?;
            }
        }

        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
        };

        info!(
            "Opened reference library: {} brand references, {} style references",
            store.brand_reference_count(),
            store.style_reference_count()
        );

        Ok(store)
    }

    fn migrate_if_needed(conn: &mut Connection, from_version: usize) -> Result<()> {
        let tx = conn.transaction()?;
        let mut latest = from_version;
        for schema in REFERENCE_VERSIONED_SCHEMAS.iter() {
            if schema.version > latest {
                info!(
                    "Running reference database migration from version {} to {}",
                    latest, schema.version
                );
                if let Some(migration_fn) = schema.migration {
                    migration_fn(&tx).with_context(|| {
                        format!("Failed to run migration to version {}", schema.version)
                    })?;
                }
                latest = schema.version;
            }
        }
        tx.execute(
            &format!("PRAGMA user_version = {}", BASE_DB_VERSION + latest),
            [],
        )?;
        tx.commit()?;
        Ok(())
    }

    fn encode_list(values: &[String]) -> String {
        serde_json::to_string(values).unwrap_or_else(|_| "[]".to_string())
    }

    fn decode_list(raw: &str) -> Vec<String> {
        serde_json::from_str(raw).unwrap_or_default()
    }

    fn query_brand_references(
        conn: &Connection,
        sql: &str,
        sql_params: &[String],
    ) -> Result<Vec<BrandReferenceEntry>> {
        let mut stmt = conn.prepare(sql)?;
        let rows = stmt.query_map(params_from_iter(sql_params.iter()), Self::row_to_raw_brand)?;

        let mut entries = Vec::new();
        for row in rows {
            let raw = row?;
            match raw.into_entry() {
                Ok(entry) => entries.push(entry),
                Err(anomaly) => {
                    warn!("Skipping malformed brand reference: {}", anomaly);
                }
            }
        }
        Ok(entries)
    }

    fn row_to_raw_brand(row: &rusqlite::Row) -> rusqlite::Result<RawBrandRow> {
        Ok(RawBrandRow {
            id: row.get("id")?,
            name: row.get("name")?,
            description: row.get("description")?,
            image_uri: row.get("image_uri")?,
            tone_bucket: row.get("tone_bucket")?,
            energy_bucket: row.get("energy_bucket")?,
            color_bucket: row.get("color_bucket")?,
            color_samples: row.get("color_samples")?,
            style_tags: row.get("style_tags")?,
            industry_tags: row.get("industry_tags")?,
            display_order: row.get("display_order")?,
            is_active: row.get::<_, i64>("is_active")? != 0,
            usage_count: row.get("usage_count")?,
            created_at: row.get("created_at")?,
            updated_at: row.get("updated_at")?,
        })
    }

    fn row_to_raw_style(row: &rusqlite::Row) -> rusqlite::Result<RawStyleRow> {
        Ok(RawStyleRow {
            id: row.get("id")?,
            deliverable_type: row.get("deliverable_type")?,
            style_axis: row.get("style_axis")?,
            sub_style: row.get("sub_style")?,
            tags: row.get("tags")?,
            color_samples: row.get("color_samples")?,
            display_order: row.get("display_order")?,
            is_active: row.get::<_, i64>("is_active")? != 0,
            usage_count: row.get("usage_count")?,
            created_at: row.get("created_at")?,
            updated_at: row.get("updated_at")?,
        })
    }
}

struct RawBrandRow {
    id: String,
    name: String,
    description: Option<String>,
    image_uri: String,
    tone_bucket: String,
    energy_bucket: String,
    color_bucket: Option<String>,
    color_samples: String,
    style_tags: String,
    industry_tags: String,
    display_order: i64,
    is_active: bool,
    usage_count: i64,
    created_at: i64,
    updated_at: i64,
}

impl RawBrandRow {
    fn into_entry(self) -> std::result::Result<BrandReferenceEntry, ReferenceAnomaly> {
        let tone_bucket = ToneBucket::from_db_str(&self.tone_bucket).ok_or_else(|| {
            ReferenceAnomaly {
                entry_id: self.id.clone(),
                column: "tone_bucket".to_string(),
                value: self.tone_bucket.clone(),
            }
        })?;
        let energy_bucket = EnergyBucket::from_db_str(&self.energy_bucket).ok_or_else(|| {
            ReferenceAnomaly {
                entry_id: self.id.clone(),
                column: "energy_bucket".to_string(),
                value: self.energy_bucket.clone(),
            }
        })?;
        // color_bucket is descriptive only: an unknown value degrades to None
        // rather than invalidating the whole row.
        let color_bucket = self
            .color_bucket
            .as_deref()
            .and_then(ColorBucket::from_db_str);

        Ok(BrandReferenceEntry {
            id: self.id,
            name: self.name,
            description: self.description,
            image_uri: self.image_uri,
            tone_bucket,
            energy_bucket,
            color_bucket,
            color_samples: SqliteReferenceStore::decode_list(&self.color_samples),
            style_tags: SqliteReferenceStore::decode_list(&self.style_tags),
            industry_tags: SqliteReferenceStore::decode_list(&self.industry_tags),
            display_order: self.display_order,
            is_active: self.is_active,
            usage_count: self.usage_count,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

struct RawStyleRow {
    id: String,
    deliverable_type: String,
    style_axis: String,
    sub_style: Option<String>,
    tags: String,
    color_samples: String,
    display_order: i64,
    is_active: bool,
    usage_count: i64,
    created_at: i64,
    updated_at: i64,
}

impl RawStyleRow {
    fn into_entry(
        self,
    ) -> std::result::Result<DeliverableStyleReferenceEntry, ReferenceAnomaly> {
        let deliverable_type =
            DeliverableType::from_db_str(&self.deliverable_type).ok_or_else(|| {
                ReferenceAnomaly {
                    entry_id: self.id.clone(),
                    column: "deliverable_type".to_string(),
                    value: self.deliverable_type.clone(),
                }
            })?;
        let style_axis = StyleAxis::from_db_str(&self.style_axis).ok_or_else(|| {
            ReferenceAnomaly {
                entry_id: self.id.clone(),
                column: "style_axis".to_string(),
                value: self.style_axis.clone(),
            }
        })?;

        Ok(DeliverableStyleReferenceEntry {
            id: self.id,
            deliverable_type,
            style_axis,
            sub_style: self.sub_style,
            tags: SqliteReferenceStore::decode_list(&self.tags),
            color_samples: SqliteReferenceStore::decode_list(&self.color_samples),
            display_order: self.display_order,
            is_active: self.is_active,
            usage_count: self.usage_count,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

impl ReferenceStore for SqliteReferenceStore {
    fn find_active_brand_references(
        &self,
        filter: &BrandReferenceFilter,
    ) -> Result<Vec<BrandReferenceEntry>> {
        let mut sql = format!(
            "SELECT {} FROM brand_references WHERE is_active = 1",
            BRAND_COLUMNS
        );
        let mut sql_params: Vec<String> = Vec::new();
        if let Some(tone) = filter.tone {
            sql.push_str(" AND tone_bucket = ?");
            sql_params.push(tone.to_db_str().to_string());
        }
        if let Some(energy) = filter.energy {
            sql.push_str(" AND energy_bucket = ?");
            sql_params.push(energy.to_db_str().to_string());
        }
        sql.push_str(" ORDER BY display_order ASC, usage_count DESC");

        let conn = self.conn.lock().unwrap();
        Self::query_brand_references(&conn, &sql, &sql_params)
    }

    fn record_brand_reference_usage(&self, ids: &[String]) -> Result<()> {
        if ids.is_empty() {
            return Ok(());
        }
        let placeholders = vec!["?"; ids.len()].join(", ");
        let sql = format!(
            "UPDATE brand_references SET usage_count = usage_count + 1 WHERE id IN ({})",
            placeholders
        );
        let conn = self.conn.lock().unwrap();
        conn.execute(&sql, params_from_iter(ids.iter()))
            .context("Failed to record brand reference usage")?;
        Ok(())
    }

    fn list_brand_references(&self) -> Result<Vec<BrandReferenceEntry>> {
        let sql = format!(
            "SELECT {} FROM brand_references ORDER BY display_order ASC, name ASC",
            BRAND_COLUMNS
        );
        let conn = self.conn.lock().unwrap();
        Self::query_brand_references(&conn, &sql, &[])
    }

    fn get_brand_reference(&self, id: &str) -> Result<Option<BrandReferenceEntry>> {
        let sql = format!("SELECT {} FROM brand_references WHERE id = ?1", BRAND_COLUMNS);
        let conn = self.conn.lock().unwrap();
        let raw = conn
            .query_row(&sql, params![id], Self::row_to_raw_brand)
            .optional()?;
        match raw.map(RawBrandRow::into_entry) {
            None => Ok(None),
            Some(Ok(entry)) => Ok(Some(entry)),
            Some(Err(anomaly)) => {
                warn!("Dropping malformed row: {}", anomaly);
                Ok(None)
            }
        }
    }

    fn insert_brand_reference(&self, entry: &BrandReferenceEntry) -> Result<()> {
        let now = Utc::now().timestamp();
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO brand_references (id, name, description, image_uri, tone_bucket, \
             energy_bucket, color_bucket, color_samples, style_tags, industry_tags, \
             display_order, is_active, usage_count, created_at, updated_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)",
            params![
                entry.id,
                entry.name,
                entry.description,
                entry.image_uri,
                entry.tone_bucket.to_db_str(),
                entry.energy_bucket.to_db_str(),
                entry.color_bucket.as_ref().map(ColorBucket::to_db_str),
                Self::encode_list(&entry.color_samples),
                Self::encode_list(&entry.style_tags),
                Self::encode_list(&entry.industry_tags),
                entry.display_order,
                entry.is_active as i64,
                entry.usage_count,
                now,
                now,
            ],
        )
        .context("Failed to insert brand reference")?;
        Ok(())
    }

    fn update_brand_reference(&self, entry: &BrandReferenceEntry) -> Result<bool> {
        let now = Utc::now().timestamp();
        let conn = self.conn.lock().unwrap();
        let changed = conn
            .execute(
                "UPDATE brand_references SET name = ?1, description = ?2, image_uri = ?3, \
                 tone_bucket = ?4, energy_bucket = ?5, color_bucket = ?6, color_samples = ?7, \
                 style_tags = ?8, industry_tags = ?9, display_order = ?10, is_active = ?11, \
                 updated_at = ?12 WHERE id = ?13",
                params![
                    entry.name,
                    entry.description,
                    entry.image_uri,
                    entry.tone_bucket.to_db_str(),
                    entry.energy_bucket.to_db_str(),
                    entry.color_bucket.as_ref().map(ColorBucket::to_db_str),
                    Self::encode_list(&entry.color_samples),
                    Self::encode_list(&entry.style_tags),
                    Self::encode_list(&entry.industry_tags),
                    entry.display_order,
                    entry.is_active as i64,
                    now,
                    entry.id,
                ],
            )
            .context("Failed to update brand reference")?;
        Ok(changed > 0)
    }

    fn delete_brand_reference(&self, id: &str) -> Result<bool> {
        let conn = self.conn.lock().unwrap();
        let changed = conn
            .execute("DELETE FROM brand_references WHERE id = ?1", params![id])
            .context("Failed to delete brand reference")?;
        Ok(changed > 0)
    }

    fn scan_style_references(&self) -> Result<StyleReferenceScan> {
        let sql = format!(
            "SELECT {} FROM style_references ORDER BY display_order ASC, id ASC",
            STYLE_COLUMNS
        );
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map([], Self::row_to_raw_style)?;

        let mut scan = StyleReferenceScan::default();
        for row in rows {
            match row?.into_entry() {
                Ok(entry) => scan.entries.push(entry),
                Err(anomaly) => {
                    warn!("Excluding from scan: {}", anomaly);
                    scan.anomalies.push(anomaly);
                }
            }
        }
        Ok(scan)
    }

    fn get_style_reference(&self, id: &str) -> Result<Option<DeliverableStyleReferenceEntry>> {
        let sql = format!("SELECT {} FROM style_references WHERE id = ?1", STYLE_COLUMNS);
        let conn = self.conn.lock().unwrap();
        let raw = conn
            .query_row(&sql, params![id], Self::row_to_raw_style)
            .optional()?;
        match raw.map(RawStyleRow::into_entry) {
            None => Ok(None),
            Some(Ok(entry)) => Ok(Some(entry)),
            Some(Err(anomaly)) => {
                warn!("Dropping malformed row: {}", anomaly);
                Ok(None)
            }
        }
    }

    fn insert_style_reference(&self, entry: &DeliverableStyleReferenceEntry) -> Result<()> {
        let now = Utc::now().timestamp();
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO style_references (id, deliverable_type, style_axis, sub_style, tags, \
             color_samples, display_order, is_active, usage_count, created_at, updated_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
            params![
                entry.id,
                entry.deliverable_type.to_db_str(),
                entry.style_axis.to_db_str(),
                entry.sub_style,
                Self::encode_list(&entry.tags),
                Self::encode_list(&entry.color_samples),
                entry.display_order,
                entry.is_active as i64,
                entry.usage_count,
                now,
                now,
            ],
        )
        .context("Failed to insert style reference")?;
        Ok(())
    }

    fn update_style_reference(&self, entry: &DeliverableStyleReferenceEntry) -> Result<bool> {
        let now = Utc::now().timestamp();
        let conn = self.conn.lock().unwrap();
        let changed = conn
            .execute(
                "UPDATE style_references SET deliverable_type = ?1, style_axis = ?2, \
                 sub_style = ?3, tags = ?4, color_samples = ?5, display_order = ?6, \
                 is_active = ?7, updated_at = ?8 WHERE id = ?9",
                params![
                    entry.deliverable_type.to_db_str(),
                    entry.style_axis.to_db_str(),
                    entry.sub_style,
                    Self::encode_list(&entry.tags),
                    Self::encode_list(&entry.color_samples),
                    entry.display_order,
                    entry.is_active as i64,
                    now,
                    entry.id,
                ],
            )
            .context("Failed to update style reference")?;
        Ok(changed > 0)
    }

    fn delete_style_reference(&self, id: &str) -> Result<bool> {
        let conn = self.conn.lock().unwrap();
        let changed = conn
            .execute("DELETE FROM style_references WHERE id = ?1", params![id])
            .context("Failed to delete style reference")?;
        Ok(changed > 0)
    }

    fn brand_reference_count(&self) -> usize {
        let conn = self.conn.lock().unwrap();
        conn.query_row("SELECT COUNT(*) FROM brand_references", [], |r| {
            r.get::<_, i64>(0)
        })
        .unwrap_or(0) as usize
    }

    fn style_reference_count(&self) -> usize {
        let conn = self.conn.lock().unwrap();
        conn.query_row("SELECT COUNT(*) FROM style_references", [], |r| {
            r.get::<_, i64>(0)
        })
        .unwrap_or(0) as usize
    }
}
