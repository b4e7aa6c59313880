//! SQLite schema definitions for the reference library database.

use crate::sqlite_column;
use crate::sqlite_persistence::{Column, SqlType, Table, VersionedSchema, DEFAULT_TIMESTAMP};

// =============================================================================
// Version 1 - Brand references and deliverable style references
// =============================================================================

const BRAND_REFERENCES_TABLE_V1: Table = Table {
    name: "brand_references",
    columns: &[
        sqlite_column!("id", &SqlType::Text, is_primary_key = true),
        sqlite_column!("name", &SqlType::Text, non_null = true),
        sqlite_column!("description", &SqlType::Text),
        sqlite_column!("image_uri", &SqlType::Text, non_null = true),
        sqlite_column!("tone_bucket", &SqlType::Text, non_null = true),
        sqlite_column!("energy_bucket", &SqlType::Text, non_null = true),
        sqlite_column!("color_bucket", &SqlType::Text),
        sqlite_column!(
            "color_samples",
            &SqlType::Text,
            non_null = true,
            default_value = Some("'[]'")
        ),
        sqlite_column!(
            "style_tags",
            &SqlType::Text,
            non_null = true,
            default_value = Some("'[]'")
        ),
        sqlite_column!(
            "industry_tags",
            &SqlType::Text,
            non_null = true,
            default_value = Some("'[]'")
        ),
        sqlite_column!(
            "display_order",
            &SqlType::Integer,
            non_null = true,
            default_value = Some("0")
        ),
        sqlite_column!(
            "is_active",
            &SqlType::Integer,
            non_null = true,
            default_value = Some("1")
        ),
        sqlite_column!(
            "usage_count",
            &SqlType::Integer,
            non_null = true,
            default_value = Some("0")
        ),
        sqlite_column!(
            "created_at",
            &SqlType::Integer,
            non_null = true,
            default_value = Some(DEFAULT_TIMESTAMP)
        ),
        sqlite_column!(
            "updated_at",
            &SqlType::Integer,
            non_null = true,
            default_value = Some(DEFAULT_TIMESTAMP)
        ),
    ],
    indices: &[
        ("idx_brand_references_buckets", "tone_bucket, energy_bucket"),
        ("idx_brand_references_active", "is_active"),
    ],
};

const STYLE_REFERENCES_TABLE_V1: Table = Table {
    name: "style_references",
    columns: &[
        sqlite_column!("id", &SqlType::Text, is_primary_key = true),
        sqlite_column!("deliverable_type", &SqlType::Text, non_null = true),
        sqlite_column!("style_axis", &SqlType::Text, non_null = true),
        sqlite_column!("sub_style", &SqlType::Text),
        sqlite_column!(
            "tags",
            &SqlType::Text,
            non_null = true,
            default_value = Some("'[]'")
        ),
        sqlite_column!(
            "display_order",
            &SqlType::Integer,
            non_null = true,
            default_value = Some("0")
        ),
        sqlite_column!(
            "is_active",
            &SqlType::Integer,
            non_null = true,
            default_value = Some("1")
        ),
        sqlite_column!(
            "usage_count",
            &SqlType::Integer,
            non_null = true,
            default_value = Some("0")
        ),
        sqlite_column!(
            "created_at",
            &SqlType::Integer,
            non_null = true,
            default_value = Some(DEFAULT_TIMESTAMP)
        ),
        sqlite_column!(
            "updated_at",
            &SqlType::Integer,
            non_null = true,
            default_value = Some(DEFAULT_TIMESTAMP)
        ),
    ],
    indices: &[(
        "idx_style_references_cell",
        "deliverable_type, style_axis",
    )],
};

// =============================================================================
// Version 2 - color samples on style references
// =============================================================================

// Same as V1 with color_samples appended (ALTER TABLE adds at the end).
const STYLE_REFERENCES_TABLE_V2: Table = Table {
    name: "style_references",
    columns: &[
        sqlite_column!("id", &SqlType::Text, is_primary_key = true),
        sqlite_column!("deliverable_type", &SqlType::Text, non_null = true),
        sqlite_column!("style_axis", &SqlType::Text, non_null = true),
        sqlite_column!("sub_style", &SqlType::Text),
        sqlite_column!(
            "tags",
            &SqlType::Text,
            non_null = true,
            default_value = Some("'[]'")
        ),
        sqlite_column!(
            "display_order",
            &SqlType::Integer,
            non_null = true,
            default_value = Some("0")
        ),
        sqlite_column!(
            "is_active",
            &SqlType::Integer,
            non_null = true,
            default_value = Some("1")
        ),
        sqlite_column!(
            "usage_count",
            &SqlType::Integer,
            non_null = true,
            default_value = Some("0")
        ),
        sqlite_column!(
            "created_at",
            &SqlType::Integer,
            non_null = true,
            default_value = Some(DEFAULT_TIMESTAMP)
        ),
        sqlite_column!(
            "updated_at",
            &SqlType::Integer,
            non_null = true,
            default_value = Some(DEFAULT_TIMESTAMP)
        ),
        sqlite_column!(
            "color_samples",
            &SqlType::Text,
            non_null = true,
            default_value = Some("'[]'")
        ),
    ],
    indices: &[(
        "idx_style_references_cell",
        "deliverable_type, style_axis",
    )],
};

/// Migration from version 1 to version 2: add color_samples to
/// style_references.
fn migrate_v1_to_v2(conn: &rusqlite::Connection) -> anyhow::Result<()> {
    conn.execute(
        "ALTER TABLE style_references ADD COLUMN color_samples TEXT NOT NULL DEFAULT '[]'",
        [],
    )?;
    Ok(())
}

pub const REFERENCE_VERSIONED_SCHEMAS: &[VersionedSchema] = &[
    VersionedSchema {
        version: 1,
        tables: &[BRAND_REFERENCES_TABLE_V1, STYLE_REFERENCES_TABLE_V1],
        migration: None,
    },
    VersionedSchema {
        version: 2,
        tables: &[BRAND_REFERENCES_TABLE_V1, STYLE_REFERENCES_TABLE_V2],
        migration: Some(migrate_v1_to_v2),
    },
];
