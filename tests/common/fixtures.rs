//! Test fixture creation for the reference libraries.
//!
//! Entries are seeded through the store API, the same path the curation
//! endpoints use.

use super::constants::*;
use lookbook_server::reference_store::{
    BrandReferenceEntry, DeliverableStyleReferenceEntry, DeliverableType, StyleAxis,
};
use lookbook_server::taste::{EnergyBucket, ToneBucket};
use lookbook_server::ReferenceStore;

pub fn brand_reference(
    id: &str,
    name: &str,
    tone: ToneBucket,
    energy: EnergyBucket,
) -> BrandReferenceEntry {
    BrandReferenceEntry {
        id: id.to_string(),
        name: name.to_string(),
        description: None,
        image_uri: format!("images/{}", id),
        tone_bucket: tone,
        energy_bucket: energy,
        color_bucket: None,
        color_samples: vec![],
        style_tags: vec![],
        industry_tags: vec![],
        display_order: 0,
        is_active: true,
        usage_count: 0,
        created_at: 0,
        updated_at: 0,
    }
}

pub fn style_reference(
    id: &str,
    deliverable_type: DeliverableType,
    style_axis: StyleAxis,
) -> DeliverableStyleReferenceEntry {
    DeliverableStyleReferenceEntry {
        id: id.to_string(),
        deliverable_type,
        style_axis,
        sub_style: None,
        tags: vec![],
        color_samples: vec!["#202020".to_string(), "#fafafa".to_string()],
        display_order: 0,
        is_active: true,
        usage_count: 0,
        created_at: 0,
        updated_at: 0,
    }
}

/// Seeds the brand library with one entry per interesting bucket combination:
/// two serious/minimal entries (ordered), one playful/bold, one
/// balanced/balanced.
pub fn seed_brand_library(store: &dyn ReferenceStore) {
    let mut calm = brand_reference(
        CALM_STUDIO_ID,
        CALM_STUDIO_NAME,
        ToneBucket::Serious,
        EnergyBucket::Minimal,
    );
    calm.display_order = 1;

    let mut mono = brand_reference(
        MONO_ATELIER_ID,
        MONO_ATELIER_NAME,
        ToneBucket::Serious,
        EnergyBucket::Minimal,
    );
    mono.display_order = 2;

    let candy = brand_reference(
        CANDY_POP_ID,
        CANDY_POP_NAME,
        ToneBucket::Playful,
        EnergyBucket::Bold,
    );

    let middle = brand_reference(
        MIDDLE_GROUND_ID,
        MIDDLE_GROUND_NAME,
        ToneBucket::Balanced,
        EnergyBucket::Balanced,
    );

    for entry in [&calm, &mono, &candy, &middle] {
        store
            .insert_brand_reference(entry)
            .expect("Failed to seed brand reference");
    }
}

/// Seeds the style library with one adequately covered cell (logo:minimal,
/// two entries) and one under-covered cell (banner:bold, one entry without
/// color samples).
pub fn seed_style_library(store: &dyn ReferenceStore) {
    let first = style_reference("sr-logo-min-1", DeliverableType::Logo, StyleAxis::Minimal);
    let second = style_reference("sr-logo-min-2", DeliverableType::Logo, StyleAxis::Minimal);
    let mut colorless = style_reference("sr-banner-bold", DeliverableType::Banner, StyleAxis::Bold);
    colorless.color_samples = vec![];

    for entry in [&first, &second, &colorless] {
        store
            .insert_style_reference(entry)
            .expect("Failed to seed style reference");
    }
}
