//! In-memory editing session for the content document.
//!
//! [`EditableSession`] holds a working copy of the loaded document that
//! the editing panel mutates through the closed set of typed operations
//! in [`ContentEdit`]. The working copy is discarded on cancel and
//! committed as one whole-document replacement through the
//! [`ContentGateway`]; a failed commit leaves it untouched so the
//! operator can retry without losing edits.

use serde::Deserialize;

use crate::content::{
    ContentDocument, EventEntry, GalleryImage, MenuCategory, MenuItem, TeamMember, Testimonial,
};
use crate::error::CoreError;
use crate::store::{ContentGateway, StoreError};

/// Identifies one of the two menu listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuSection {
    Overview,
    FullMenu,
}

impl MenuSection {
    fn label(self) -> &'static str {
        match self {
            MenuSection::Overview => "menu overview category",
            MenuSection::FullMenu => "full menu category",
        }
    }
}

/// One typed edit applied to the working copy.
///
/// List elements are addressed by position; removing an element shifts
/// later indices down. Updates replace whole fields or whole elements,
/// never arbitrary keys, so every edit preserves the document shape.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ContentEdit {
    SetHeroTitle { title: String },
    SetHeroSubtitle { subtitle: String },
    SetAbout { about: String },
    SetSpecials { specials: String },
    SetContactAddress { address: String },
    SetContactPhone { phone: String },
    SetRules { rules: Vec<String> },

    SetMenuCategoryTitle { section: MenuSection, category: usize, title: String },
    AddMenuItem { section: MenuSection, category: usize, item: MenuItem },
    UpdateMenuItem { section: MenuSection, category: usize, index: usize, item: MenuItem },
    RemoveMenuItem { section: MenuSection, category: usize, index: usize },

    AddEvent { event: EventEntry },
    UpdateEvent { index: usize, event: EventEntry },
    RemoveEvent { index: usize },

    AddGalleryImage { image: GalleryImage },
    UpdateGalleryImage { index: usize, image: GalleryImage },
    RemoveGalleryImage { index: usize },

    AddTestimonial { testimonial: Testimonial },
    UpdateTestimonial { index: usize, testimonial: Testimonial },
    RemoveTestimonial { index: usize },

    AddTeamMember { member: TeamMember },
    UpdateTeamMember { index: usize, member: TeamMember },
    RemoveTeamMember { index: usize },
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// A mutable working copy of one [`ContentDocument`].
///
/// Single-editor: there is at most one session at a time and no
/// coordination between concurrent writers.
#[derive(Debug, Clone)]
pub struct EditableSession {
    baseline: ContentDocument,
    working: ContentDocument,
}

impl EditableSession {
    /// Start a session over the currently loaded document.
    pub fn new(document: ContentDocument) -> Self {
        Self {
            working: document.clone(),
            baseline: document,
        }
    }

    /// The working copy under edit.
    pub fn working(&self) -> &ContentDocument {
        &self.working
    }

    /// The last loaded or committed document.
    pub fn baseline(&self) -> &ContentDocument {
        &self.baseline
    }

    /// Apply one typed edit to the working copy.
    ///
    /// Index checks happen before any mutation, so a rejected edit
    /// leaves the working copy exactly as it was.
    pub fn apply(&mut self, edit: ContentEdit) -> Result<(), CoreError> {
        match edit {
            ContentEdit::SetHeroTitle { title } => self.working.hero.title = title,
            ContentEdit::SetHeroSubtitle { subtitle } => self.working.hero.subtitle = subtitle,
            ContentEdit::SetAbout { about } => self.working.about = about,
            ContentEdit::SetSpecials { specials } => self.working.specials = specials,
            ContentEdit::SetContactAddress { address } => self.working.contact.address = address,
            ContentEdit::SetContactPhone { phone } => self.working.contact.phone = phone,
            ContentEdit::SetRules { rules } => self.working.rules = rules,

            ContentEdit::SetMenuCategoryTitle { section, category, title } => {
                self.category_mut(section, category)?.title = title;
            }
            ContentEdit::AddMenuItem { section, category, item } => {
                self.category_mut(section, category)?.items.push(item);
            }
            ContentEdit::UpdateMenuItem { section, category, index, item } => {
                let items = &mut self.category_mut(section, category)?.items;
                replace_at(items, index, item, "menu item")?;
            }
            ContentEdit::RemoveMenuItem { section, category, index } => {
                let items = &mut self.category_mut(section, category)?.items;
                remove_at(items, index, "menu item")?;
            }

            ContentEdit::AddEvent { event } => self.working.events.push(event),
            ContentEdit::UpdateEvent { index, event } => {
                replace_at(&mut self.working.events, index, event, "event")?;
            }
            ContentEdit::RemoveEvent { index } => {
                remove_at(&mut self.working.events, index, "event")?;
            }

            ContentEdit::AddGalleryImage { image } => self.working.gallery.push(image),
            ContentEdit::UpdateGalleryImage { index, image } => {
                replace_at(&mut self.working.gallery, index, image, "gallery image")?;
            }
            ContentEdit::RemoveGalleryImage { index } => {
                remove_at(&mut self.working.gallery, index, "gallery image")?;
            }

            ContentEdit::AddTestimonial { testimonial } => {
                self.working.testimonials.push(testimonial);
            }
            ContentEdit::UpdateTestimonial { index, testimonial } => {
                replace_at(&mut self.working.testimonials, index, testimonial, "testimonial")?;
            }
            ContentEdit::RemoveTestimonial { index } => {
                remove_at(&mut self.working.testimonials, index, "testimonial")?;
            }

            ContentEdit::AddTeamMember { member } => self.working.team.push(member),
            ContentEdit::UpdateTeamMember { index, member } => {
                replace_at(&mut self.working.team, index, member, "team member")?;
            }
            ContentEdit::RemoveTeamMember { index } => {
                remove_at(&mut self.working.team, index, "team member")?;
            }
        }
        Ok(())
    }

    /// Replace the working gallery wholesale (used to apply the result
    /// of caption enrichment).
    pub fn set_gallery(&mut self, gallery: Vec<GalleryImage>) {
        self.working.gallery = gallery;
    }

    /// Drop all uncommitted edits, reverting to the baseline.
    pub fn discard(&mut self) {
        self.working = self.baseline.clone();
    }

    /// Persist the working copy through the gateway.
    ///
    /// On success the working copy becomes the new baseline. On failure
    /// the error propagates and the working copy is left unchanged.
    pub async fn commit(&mut self, gateway: &ContentGateway) -> Result<(), StoreError> {
        gateway.save(&self.working).await?;
        self.baseline = self.working.clone();
        Ok(())
    }

    fn category_mut(
        &mut self,
        section: MenuSection,
        index: usize,
    ) -> Result<&mut MenuCategory, CoreError> {
        let categories = match section {
            MenuSection::Overview => &mut self.working.menu.overview,
            MenuSection::FullMenu => &mut self.working.menu.full_menu,
        };
        let len = categories.len();
        categories
            .get_mut(index)
            .ok_or_else(|| CoreError::index_out_of_range(section.label(), index, len))
    }
}

fn replace_at<T>(list: &mut [T], index: usize, value: T, what: &str) -> Result<(), CoreError> {
    match list.get_mut(index) {
        Some(slot) => {
            *slot = value;
            Ok(())
        }
        None => Err(CoreError::index_out_of_range(what, index, list.len())),
    }
}

fn remove_at<T>(list: &mut Vec<T>, index: usize, what: &str) -> Result<(), CoreError> {
    if index >= list.len() {
        return Err(CoreError::index_out_of_range(what, index, list.len()));
    }
    list.remove(index);
    Ok(())
}
