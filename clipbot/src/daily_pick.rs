//! "Clip of the day" cache.
//!
//! The day boundary is the UTC calendar date. The first request of a new
//! date picks uniformly at random from the registry; every later request
//! that date gets the same name, even if clips were added since.

use crate::error::ClipError;
use crate::registry::ClipRegistry;
use chrono::{NaiveDate, Utc};
use parking_lot::Mutex;
use rand::seq::SliceRandom;

#[derive(Debug, Clone)]
struct DailyPick {
    date: NaiveDate,
    name: String,
}

pub struct DailyPickCache {
    current: Mutex<Option<DailyPick>>,
}

impl DailyPickCache {
    pub fn new() -> Self {
        Self {
            current: Mutex::new(None),
        }
    }

    pub fn pick_for_today(&self, registry: &ClipRegistry) -> Result<String, ClipError> {
        self.pick_for_date(Utc::now().date_naive(), registry)
    }

    pub fn pick_for_date(
        &self,
        date: NaiveDate,
        registry: &ClipRegistry,
    ) -> Result<String, ClipError> {
        let mut current = self.current.lock();

        if let Some(pick) = current.as_ref() {
            if pick.date == date {
                return Ok(pick.name.clone());
            }
        }

        let names = registry.list();
        let name = names
            .choose(&mut rand::thread_rng())
            .cloned()
            .ok_or(ClipError::EmptyRegistry)?;

        log::info!("DailyPick: Picked '{}' for {}", name, date);
        *current = Some(DailyPick {
            date,
            name: name.clone(),
        });
        Ok(name)
    }
}

impl Default for DailyPickCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
    }

    #[test]
    fn test_empty_registry() {
        let dir = TempDir::new().unwrap();
        let registry = ClipRegistry::load(dir.path().join("db.json")).unwrap();
        let cache = DailyPickCache::new();

        assert!(matches!(
            cache.pick_for_today(&registry),
            Err(ClipError::EmptyRegistry)
        ));
    }

    #[test]
    fn test_stable_within_a_date() {
        let dir = TempDir::new().unwrap();
        let registry = ClipRegistry::load(dir.path().join("db.json")).unwrap();
        registry.put("alarm", "H1").unwrap();
        let cache = DailyPickCache::new();

        let first = cache.pick_for_date(date(1), &registry).unwrap();
        assert_eq!(first, "alarm");

        for i in 0..20 {
            registry.put(&format!("clip{}", i), "H").unwrap();
        }
        for _ in 0..10 {
            assert_eq!(cache.pick_for_date(date(1), &registry).unwrap(), first);
        }
    }

    #[test]
    fn test_new_date_repicks_from_current_registry() {
        let dir = TempDir::new().unwrap();
        let registry = ClipRegistry::load(dir.path().join("db.json")).unwrap();
        registry.put("alarm", "H1").unwrap();
        let cache = DailyPickCache::new();

        assert_eq!(cache.pick_for_date(date(1), &registry).unwrap(), "alarm");

        registry.put("bell", "H2").unwrap();
        let names = registry.list();
        let mut seen_bell = false;
        for day in 2..28 {
            let pick = cache.pick_for_date(date(day), &registry).unwrap();
            assert!(names.contains(&pick));
            seen_bell |= pick == "bell";
        }
        // 26 fresh picks over two names; all landing on "alarm" is 2^-26
        assert!(seen_bell);
    }
}
