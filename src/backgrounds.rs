//! Static background-image collection.
//!
//! The collection is a process-lifetime constant: three records with unique
//! ids, served in insertion order. Nothing mutates it.
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Background {
    pub id: u32,
    pub url: &'static str,
}

pub const COLLECTION: [Background; 3] = [
    Background { id: 1, url: "/static/bg1.jpg" },
    Background { id: 2, url: "/static/bg2.jpg" },
    Background { id: 3, url: "/static/bg3.jpg" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_sequential_and_unique() {
        let ids: Vec<u32> = COLLECTION.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn serializes_to_id_url_records() {
        let json = serde_json::to_value(COLLECTION).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                {"id": 1, "url": "/static/bg1.jpg"},
                {"id": 2, "url": "/static/bg2.jpg"},
                {"id": 3, "url": "/static/bg3.jpg"},
            ])
        );
    }
}
