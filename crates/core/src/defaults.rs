//! Default content provider.
//!
//! The hardcoded [`ContentDocument`] served whenever no persisted
//! document exists or loading fails. This is the complete seed dataset
//! for the site; the loader substitutes it wholesale, never
//! field-by-field.

use crate::content::{
    ContactInfo, ContentDocument, EventEntry, GalleryImage, HeroContent, MenuCategory,
    MenuContent, MenuItem, TeamMember, Testimonial,
};

fn item(name: &str, price: &str) -> MenuItem {
    MenuItem {
        name: name.to_string(),
        price: price.to_string(),
        image: None,
    }
}

fn item_with_image(name: &str, price: &str, image: &str) -> MenuItem {
    MenuItem {
        name: name.to_string(),
        price: price.to_string(),
        image: Some(image.to_string()),
    }
}

/// Build the full default content document.
pub fn default_content() -> ContentDocument {
    ContentDocument {
        hero: HeroContent {
            title: r#"Where Kilifi Comes Alive — <span class="text-primary">Eat. Sip. Vibe.</span>"#
                .to_string(),
            subtitle: "Fresh seafood, wood-fired BBQ and crafted cocktails.".to_string(),
        },
        about: "Discover coastal flavours, vibrant nights & local energy at Generali's Bar \
                & Kitchen, Kilifi. We believe in good food made for good company, served in \
                a space that feels like home. From our kitchen to your table, it's all about \
                the vibe."
            .to_string(),
        specials: r#"
<p>🍴 <strong>Say Goodbye to Monday Blues!</strong></p>
<p><strong>Fresh, Flavorful & Fast Deliveries within Kilifi and its Environs 🌴🚗</strong></p>
<br>
<p><strong>🥘 Our Specials:</strong></p>
<ul>
    <li>Chips with Pan-Fried Chicken — <strong>KSh 450</strong></li>
    <li>Chips Masala with Crispy Chicken — <strong>KSh 600</strong></li>
    <li>¼ Beef Pan-Fry with Ugali & Kachumbari — <strong>KSh 400</strong></li>
    <li>¼ Mbuzi Wet Fry with Ugali & Greens — <strong>KSh 500</strong></li>
    <li>¼ Beef Wet Fry with Chips — <strong>KSh 450</strong></li>
    <li>Sautéed Potatoes with 2 Sausages — <strong>KSh 300</strong></li>
    <li>¼ Beef Wet Fry with Ugali — <strong>KSh 350</strong></li>
    <li>Ask for our Special <strong>Kuku Kienyeji</strong> — Price on Request</li>
</ul>
<br>
<p>📞 <strong>To place your order:</strong> Call or WhatsApp <strong>0723 836 288</strong></p>
<p><em>Fast delivery, hot meals, happy vibes 🎉</em></p>"#
            .to_string(),
        menu: MenuContent {
            overview: vec![
                MenuCategory {
                    title: "BBQ".to_string(),
                    items: vec![
                        item_with_image(
                            "BBQ Platter",
                            "KSh 1,950",
                            "https://picsum.photos/400/300?random=1",
                        ),
                        item("Grilled Lamb Chops", "KSh 1,250"),
                        item("Charred Corn", "KSh 250"),
                    ],
                },
                MenuCategory {
                    title: "Pizza".to_string(),
                    items: vec![
                        item("Margherita", "KSh 850"),
                        item("Pepperoni", "KSh 1,050"),
                        item_with_image(
                            "Seafood Delight",
                            "KSh 1,250",
                            "https://picsum.photos/400/300?random=2",
                        ),
                    ],
                },
                MenuCategory {
                    title: "Seafood".to_string(),
                    items: vec![
                        item_with_image(
                            "Seafood Tapas",
                            "KSh 1,450",
                            "https://picsum.photos/400/300?random=3",
                        ),
                        item("Grilled Prawns", "KSh 1,350"),
                    ],
                },
                MenuCategory {
                    title: "Cocktails".to_string(),
                    items: vec![
                        item("Generali Mule", "KSh 650"),
                        item("Mango Rum Punch", "KSh 700"),
                    ],
                },
            ],
            full_menu: vec![
                MenuCategory {
                    title: "Starters".to_string(),
                    items: vec![item("Ceviche", "KSh 650"), item("Calamari Rings", "KSh 550")],
                },
                MenuCategory {
                    title: "Mains".to_string(),
                    items: vec![
                        item_with_image(
                            "Charcoal-Grilled Fish",
                            "KSh 1,350",
                            "https://picsum.photos/400/300?random=4",
                        ),
                        item_with_image(
                            "BBQ Platter",
                            "KSh 1,950",
                            "https://picsum.photos/400/300?random=5",
                        ),
                    ],
                },
                MenuCategory {
                    title: "Desserts".to_string(),
                    items: vec![
                        item("Coconut Tart", "KSh 450"),
                        item("Mango Sorbet", "KSh 400"),
                    ],
                },
            ],
        },
        events: vec![
            EventEntry {
                image: "https://picsum.photos/800/600?random=6".to_string(),
                title: "Live DJ Nights".to_string(),
                date: "Every Friday & Saturday".to_string(),
                description: "Experience the best of Kilifi's nightlife with our resident DJs \
                              spinning the latest tracks from 8pm till late. No cover charge \
                              before 9pm."
                    .to_string(),
            },
            EventEntry {
                image: "https://picsum.photos/800/600?random=7".to_string(),
                title: "Weekend BBQ Bash".to_string(),
                date: "Saturdays from 6pm".to_string(),
                description: "Join us for a family-friendly BBQ every Saturday. Enjoy our \
                              famous grilled platters, great music, and a relaxed atmosphere."
                    .to_string(),
            },
            EventEntry {
                image: "https://picsum.photos/800/600?random=8".to_string(),
                title: "Happy Hour Specials".to_string(),
                date: "Weekdays 3pm — 6pm".to_string(),
                description: "Unwind after a long day with our happy hour. Enjoy special \
                              prices on select cocktails, beers, and tapas."
                    .to_string(),
            },
        ],
        gallery: vec![
            GalleryImage {
                src: "https://picsum.photos/800/600?random=9".to_string(),
                caption: "Vibrant cocktails lined up on the bar.".to_string(),
            },
            GalleryImage {
                src: "https://picsum.photos/800/600?random=10".to_string(),
                caption: "A delicious and healthy meal served fresh.".to_string(),
            },
            GalleryImage {
                src: "https://picsum.photos/800/600?random=11".to_string(),
                caption: "Our chefs preparing a masterpiece in the kitchen.".to_string(),
            },
            GalleryImage {
                src: "https://picsum.photos/800/600?random=12".to_string(),
                caption: "Cozy and inviting atmosphere for a perfect night out.".to_string(),
            },
        ],
        testimonials: vec![
            Testimonial {
                quote: "The seafood platter was absolutely divine! Freshest I've had in \
                        Kilifi. The vibe is amazing, perfect for a chill evening with friends."
                    .to_string(),
                author: "Asha N.".to_string(),
                location: "Frequent Visitor".to_string(),
            },
            Testimonial {
                quote: "Generali's never disappoints. Their BBQ is legendary and the \
                        cocktails are a work of art. A must-visit spot on the coast."
                    .to_string(),
                author: "David M.".to_string(),
                location: "Nairobi Tourist".to_string(),
            },
            Testimonial {
                quote: "We hosted a birthday party here and the staff were incredibly \
                        accommodating. The food was a hit with everyone. Highly recommend!"
                    .to_string(),
                author: "Fatima K.".to_string(),
                location: "Kilifi Resident".to_string(),
            },
        ],
        team: vec![
            TeamMember {
                image: "https://picsum.photos/500/500?random=13".to_string(),
                name: "Chef Juma".to_string(),
                role: "Head Chef".to_string(),
                bio: "With over 15 years of experience in coastal cuisine, Chef Juma brings \
                      a passion for fresh, local ingredients to every dish he creates."
                    .to_string(),
            },
            TeamMember {
                image: "https://picsum.photos/500/500?random=14".to_string(),
                name: "Maria".to_string(),
                role: "Bar Manager".to_string(),
                bio: "Our master mixologist, Maria, crafts unique cocktails that capture the \
                      spirit of Kilifi. Ask her for her signature Generali Mule!"
                    .to_string(),
            },
        ],
        rules: vec![
            "Smart casual recommended. No swimwear or flip-flops after 6pm.".to_string(),
            "We reserve the right of admission.".to_string(),
            "Please respect staff and other guests — loud or abusive behaviour will not be \
             tolerated."
                .to_string(),
        ],
        contact: ContactInfo {
            address: "Kwa Mwango, Kilifi Town — opposite the new Fire Station.".to_string(),
            phone: "+254 723 836 288".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_title_matches_site_banner() {
        let document = default_content();
        assert_eq!(
            document.hero.title,
            r#"Where Kilifi Comes Alive — <span class="text-primary">Eat. Sip. Vibe.</span>"#
        );
    }

    #[test]
    fn default_document_is_fully_populated() {
        let document = default_content();

        assert_eq!(document.menu.overview.len(), 4);
        assert_eq!(document.menu.full_menu.len(), 3);
        assert_eq!(document.events.len(), 3);
        assert_eq!(document.gallery.len(), 4);
        assert_eq!(document.testimonials.len(), 3);
        assert_eq!(document.team.len(), 2);
        assert_eq!(document.rules.len(), 3);

        // Every gallery image ships with a caption; the caption filler
        // must treat the default set as already complete.
        assert!(document.gallery.iter().all(|g| !g.caption.is_empty()));
    }
}
