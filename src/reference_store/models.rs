//! Models for the two curated reference libraries.
//!
//! Wire serialization uses camelCase field names to match the consuming UI;
//! database columns use the snake_case `to_db_str` forms.

use crate::taste::{EnergyBucket, ToneBucket};
use serde::{Deserialize, Serialize};

// =============================================================================
// Enumerations
// =============================================================================

/// Descriptive color family of a brand reference. Not used for matching.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorBucket {
    Warm,
    Cool,
    Neutral,
    Vibrant,
    Muted,
}

impl ColorBucket {
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "warm" => Some(ColorBucket::Warm),
            "cool" => Some(ColorBucket::Cool),
            "neutral" => Some(ColorBucket::Neutral),
            "vibrant" => Some(ColorBucket::Vibrant),
            "muted" => Some(ColorBucket::Muted),
            _ => None,
        }
    }

    pub fn to_db_str(&self) -> &'static str {
        match self {
            ColorBucket::Warm => "warm",
            ColorBucket::Cool => "cool",
            ColorBucket::Neutral => "neutral",
            ColorBucket::Vibrant => "vibrant",
            ColorBucket::Muted => "muted",
        }
    }
}

/// The closed set of deliverable types the marketplace offers.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliverableType {
    Logo,
    BrandIdentity,
    SocialMedia,
    Presentation,
    Illustration,
    Packaging,
    WebDesign,
    AppDesign,
    Print,
    MotionGraphics,
    VideoEdit,
    Thumbnail,
    Banner,
}

impl DeliverableType {
    pub const ALL: [DeliverableType; 13] = [
        DeliverableType::Logo,
        DeliverableType::BrandIdentity,
        DeliverableType::SocialMedia,
        DeliverableType::Presentation,
        DeliverableType::Illustration,
        DeliverableType::Packaging,
        DeliverableType::WebDesign,
        DeliverableType::AppDesign,
        DeliverableType::Print,
        DeliverableType::MotionGraphics,
        DeliverableType::VideoEdit,
        DeliverableType::Thumbnail,
        DeliverableType::Banner,
    ];

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "logo" => Some(DeliverableType::Logo),
            "brand_identity" => Some(DeliverableType::BrandIdentity),
            "social_media" => Some(DeliverableType::SocialMedia),
            "presentation" => Some(DeliverableType::Presentation),
            "illustration" => Some(DeliverableType::Illustration),
            "packaging" => Some(DeliverableType::Packaging),
            "web_design" => Some(DeliverableType::WebDesign),
            "app_design" => Some(DeliverableType::AppDesign),
            "print" => Some(DeliverableType::Print),
            "motion_graphics" => Some(DeliverableType::MotionGraphics),
            "video_edit" => Some(DeliverableType::VideoEdit),
            "thumbnail" => Some(DeliverableType::Thumbnail),
            "banner" => Some(DeliverableType::Banner),
            _ => None,
        }
    }

    pub fn to_db_str(&self) -> &'static str {
        match self {
            DeliverableType::Logo => "logo",
            DeliverableType::BrandIdentity => "brand_identity",
            DeliverableType::SocialMedia => "social_media",
            DeliverableType::Presentation => "presentation",
            DeliverableType::Illustration => "illustration",
            DeliverableType::Packaging => "packaging",
            DeliverableType::WebDesign => "web_design",
            DeliverableType::AppDesign => "app_design",
            DeliverableType::Print => "print",
            DeliverableType::MotionGraphics => "motion_graphics",
            DeliverableType::VideoEdit => "video_edit",
            DeliverableType::Thumbnail => "thumbnail",
            DeliverableType::Banner => "banner",
        }
    }
}

/// The closed set of style axes the curation surface indexes on.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleAxis {
    Minimal,
    Bold,
    Playful,
    Elegant,
    Modern,
    Vintage,
    Organic,
    Geometric,
}

impl StyleAxis {
    pub const ALL: [StyleAxis; 8] = [
        StyleAxis::Minimal,
        StyleAxis::Bold,
        StyleAxis::Playful,
        StyleAxis::Elegant,
        StyleAxis::Modern,
        StyleAxis::Vintage,
        StyleAxis::Organic,
        StyleAxis::Geometric,
    ];

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "minimal" => Some(StyleAxis::Minimal),
            "bold" => Some(StyleAxis::Bold),
            "playful" => Some(StyleAxis::Playful),
            "elegant" => Some(StyleAxis::Elegant),
            "modern" => Some(StyleAxis::Modern),
            "vintage" => Some(StyleAxis::Vintage),
            "organic" => Some(StyleAxis::Organic),
            "geometric" => Some(StyleAxis::Geometric),
            _ => None,
        }
    }

    pub fn to_db_str(&self) -> &'static str {
        match self {
            StyleAxis::Minimal => "minimal",
            StyleAxis::Bold => "bold",
            StyleAxis::Playful => "playful",
            StyleAxis::Elegant => "elegant",
            StyleAxis::Modern => "modern",
            StyleAxis::Vintage => "vintage",
            StyleAxis::Organic => "organic",
            StyleAxis::Geometric => "geometric",
        }
    }
}

// =============================================================================
// Entries
// =============================================================================

fn default_active() -> bool {
    true
}

/// A curated exemplar in the brand reference library.
///
/// `tone_bucket` and `energy_bucket` drive matching; the remaining tag and
/// color attributes are descriptive only. `usage_count` is advisory
/// telemetry, incremented whenever the entry is returned to a client.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandReferenceEntry {
    /// Empty on creation requests; the server assigns one.
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub image_uri: String,
    pub tone_bucket: ToneBucket,
    pub energy_bucket: EnergyBucket,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_bucket: Option<ColorBucket>,
    #[serde(default)]
    pub color_samples: Vec<String>,
    #[serde(default)]
    pub style_tags: Vec<String>,
    #[serde(default)]
    pub industry_tags: Vec<String>,
    #[serde(default)]
    pub display_order: i64,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub usage_count: i64,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

/// A curated exemplar in the deliverable style library, keyed by the
/// (deliverable type, style axis) cell it illustrates. Many entries may
/// share a cell.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliverableStyleReferenceEntry {
    /// Empty on creation requests; the server assigns one.
    #[serde(default)]
    pub id: String,
    pub deliverable_type: DeliverableType,
    pub style_axis: StyleAxis,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_style: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub color_samples: Vec<String>,
    #[serde(default)]
    pub display_order: i64,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub usage_count: i64,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}
