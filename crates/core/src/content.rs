//! Site content schema.
//!
//! Defines [`ContentDocument`], the single root record describing all
//! editable site content, together with its nested section types. The
//! document is persisted as one JSON value and replaced wholesale on
//! save; there is no per-field persistence and no versioning.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

/// Hero banner content. The title may embed inline HTML markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroContent {
    pub title: String,
    pub subtitle: String,
}

/// A single dish or drink on the menu.
///
/// `price` is a display string (e.g. `KSh 1,950`), never parsed as a
/// number. `image` accepts a remote URL or an embedded data URL and is
/// omitted from the serialized form when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub price: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// A titled group of menu items. Item order is operator-entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuCategory {
    pub title: String,
    pub items: Vec<MenuItem>,
}

/// The two menu listings shown on the site: a short overview and the
/// full menu. `fullMenu` keeps its original camelCase key on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuContent {
    pub overview: Vec<MenuCategory>,
    #[serde(rename = "fullMenu")]
    pub full_menu: Vec<MenuCategory>,
}

/// An upcoming event card. `date` is a display string (e.g.
/// `Every Friday & Saturday`), never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventEntry {
    pub image: String,
    pub title: String,
    pub date: String,
    pub description: String,
}

/// A gallery photo. `src` accepts a remote URL or an embedded data URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub src: String,
    pub caption: String,
}

/// A guest testimonial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub location: String,
}

/// A staff profile card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub image: String,
    pub name: String,
    pub role: String,
    pub bio: String,
}

/// Contact details shown in the footer section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub address: String,
    pub phone: String,
}

// ---------------------------------------------------------------------------
// Root document
// ---------------------------------------------------------------------------

/// The single root record describing all editable site content.
///
/// Every field is required during deserialization: a persisted record
/// missing any section fails to parse as a whole, so callers never see
/// a partial document. `about` and `specials` are free text; `specials`
/// may embed HTML markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentDocument {
    pub hero: HeroContent,
    pub about: String,
    pub specials: String,
    pub menu: MenuContent,
    pub events: Vec<EventEntry>,
    pub gallery: Vec<GalleryImage>,
    pub testimonials: Vec<Testimonial>,
    pub team: Vec<TeamMember>,
    pub rules: Vec<String>,
    pub contact: ContactInfo,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::default_content;

    #[test]
    fn full_menu_serializes_with_camel_case_key() {
        let document = default_content();
        let raw = serde_json::to_value(&document).expect("serialize should succeed");

        assert!(raw["menu"]["fullMenu"].is_array());
        assert!(raw["menu"].get("full_menu").is_none());
    }

    #[test]
    fn document_missing_a_section_fails_to_parse() {
        let mut raw = serde_json::to_value(default_content()).expect("serialize should succeed");
        raw.as_object_mut()
            .expect("document serializes as an object")
            .remove("gallery");

        let result: Result<ContentDocument, _> = serde_json::from_value(raw);
        assert!(
            result.is_err(),
            "a record missing a section must not parse"
        );
    }

    #[test]
    fn menu_item_image_is_optional_and_omitted_when_absent() {
        let item: MenuItem =
            serde_json::from_str(r#"{"name": "Charred Corn", "price": "KSh 250"}"#)
                .expect("item without image should parse");
        assert_eq!(item.image, None);

        let raw = serde_json::to_value(&item).expect("serialize should succeed");
        assert!(raw.get("image").is_none(), "absent image must stay absent");
    }

    #[test]
    fn serde_round_trip_is_identity() {
        let document = default_content();
        let raw = serde_json::to_value(&document).expect("serialize should succeed");
        let back: ContentDocument =
            serde_json::from_value(raw).expect("deserialize should succeed");
        assert_eq!(back, document);
    }
}
