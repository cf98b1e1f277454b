use serde::{Deserialize, Serialize};

use crate::content::Chapter;

/// A chapter as listed in the player's sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarEntry {
    pub number: u32,
    pub name: String,
    pub english_name: String,
    pub active: bool,
}

impl From<Chapter> for SidebarEntry {
    fn from(chapter: Chapter) -> Self {
        Self {
            number: chapter.number,
            name: chapter.name,
            english_name: chapter.english_name,
            active: false,
        }
    }
}

/// Marks the entry numbered `id` as the only active one.
pub fn mark_active(entries: &mut [SidebarEntry], id: u32) {
    for entry in entries {
        entry.active = entry.number == id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_entry(entries: &[SidebarEntry]) -> Option<&SidebarEntry> {
        entries.iter().find(|e| e.active)
    }

    fn entries(count: u32) -> Vec<SidebarEntry> {
        (1..=count)
            .map(|n| SidebarEntry {
                number: n,
                name: format!("name {n}"),
                english_name: format!("english {n}"),
                active: false,
            })
            .collect()
    }

    #[test]
    fn test_exactly_one_active() {
        let mut list = entries(5);
        mark_active(&mut list, 2);
        mark_active(&mut list, 4);
        let active: Vec<u32> = list.iter().filter(|e| e.active).map(|e| e.number).collect();
        assert_eq!(active, vec![4]);
    }

    #[test]
    fn test_idempotent() {
        let mut once = entries(3);
        mark_active(&mut once, 3);
        let mut twice = once.clone();
        mark_active(&mut twice, 3);
        assert_eq!(once, twice);
        assert_eq!(active_entry(&twice).map(|e| e.number), Some(3));
    }

    #[test]
    fn test_unknown_id_clears_all() {
        let mut list = entries(3);
        mark_active(&mut list, 1);
        mark_active(&mut list, 99);
        assert!(active_entry(&list).is_none());
    }
}
