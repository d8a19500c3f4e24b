//! Past-event highlights
//!
//! Each event page shows a handful of gallery photos from earlier editions.
//! Events are mapped onto gallery categories by id; events without a mapping
//! fall into `general`.

use crate::content::GalleryItem;

/// Number of photos shown per event
pub const HIGHLIGHT_LIMIT: usize = 4;

pub const FALLBACK_CATEGORY: &str = "general";

const EVENT_CATEGORIES: &[(&str, &str)] = &[
    ("exhipro", "technical"),
    ("epapyrus", "technical"),
    ("circuitrix", "technical"),
    ("posteriza", "technical"),
    ("tech-quiz", "technical"),
    ("design-hackathon", "technical"),
    ("the-mob", "cultural"),
    ("euphoria", "cultural"),
    ("groupDance", "cultural"),
    ("nithyarangi", "cultural"),
    ("mime", "cultural"),
    ("humour", "cultural"),
    ("vanjiPattu", "cultural"),
    ("tharangBand", "cultural"),
    ("qr-hunt", "games"),
    ("escape-room", "games"),
    ("Treasure-Hunt", "games"),
    ("Neon-Football", "games"),
    ("Robo-Race", "games"),
    ("tugofwar", "games"),
    ("machine-learning-Workshop", "workshop"),
    ("robotic-workshop", "workshop"),
    ("Arduino Workshop", "workshop"),
    ("Cyber Security Workshop", "workshop"),
    ("Ai Workshop", "workshop"),
    ("Stock Trading Workshop", "workshop"),
    ("PLC Workshop", "workshop"),
];

/// Gallery category for an event id (exact, case-sensitive match)
///
/// # Examples
/// ```
/// use festui::logic::highlights::event_category;
///
/// assert_eq!(event_category("Robo-Race"), "games");
/// assert_eq!(event_category("robo-race"), "general");
/// ```
pub fn event_category(event_id: &str) -> &'static str {
    EVENT_CATEGORIES
        .iter()
        .find(|(id, _)| *id == event_id)
        .map(|(_, category)| *category)
        .unwrap_or(FALLBACK_CATEGORY)
}

/// First few gallery items for an event, in source order
pub fn highlights_for_event<'a>(items: &'a [GalleryItem], event_id: &str) -> Vec<&'a GalleryItem> {
    let category = event_category(event_id);
    items
        .iter()
        .filter(|item| item.category == category)
        .take(HIGHLIGHT_LIMIT)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::MediaType;

    fn item(id: usize, category: &str) -> GalleryItem {
        GalleryItem {
            id: id.to_string(),
            src: format!("/g/{}.jpg", id),
            caption: format!("Photo {}", id),
            category: category.to_string(),
            media_type: MediaType::Image,
            featured: false,
            aspect_ratio: None,
        }
    }

    #[test]
    fn test_known_events() {
        assert_eq!(event_category("circuitrix"), "technical");
        assert_eq!(event_category("euphoria"), "cultural");
        assert_eq!(event_category("tugofwar"), "games");
        assert_eq!(event_category("PLC Workshop"), "workshop");
    }

    #[test]
    fn test_unknown_event_is_general() {
        assert_eq!(event_category("open-mic"), FALLBACK_CATEGORY);
        assert_eq!(event_category(""), FALLBACK_CATEGORY);
    }

    #[test]
    fn test_highlights_limited_to_four() {
        let items: Vec<GalleryItem> = (0..10)
            .map(|i| item(i, if i % 2 == 0 { "games" } else { "cultural" }))
            .collect();
        let shown = highlights_for_event(&items, "qr-hunt");
        let ids: Vec<&str> = shown.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["0", "2", "4", "6"]);
    }

    #[test]
    fn test_highlights_empty_without_matches() {
        let items = vec![item(1, "technical")];
        assert!(highlights_for_event(&items, "mime").is_empty());
    }
}
