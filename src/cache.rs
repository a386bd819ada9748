use std::{fs, path::Path};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    core::{sample::PriceSample, zone::Zone},
    prelude::*,
};

/// Previously fetched prices, stored in a TOML file.
#[derive(Default, Serialize, Deserialize)]
#[must_use]
pub struct Cache {
    #[serde(default, rename = "day")]
    days: Vec<CachedDay>,
}

#[derive(Serialize, Deserialize)]
struct CachedDay {
    date: NaiveDate,
    zone: Zone,
    samples: Vec<PriceSample>,
}

impl Cache {
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn read_from(path: &Path) -> Self {
        Self::read_fallibly_from(path).unwrap_or_else(|error| {
            error!("failed to load the cache: {error:#}");
            Self::default()
        })
    }

    fn read_fallibly_from(path: &Path) -> Result<Self> {
        if path.is_file() {
            Ok(toml::from_str(&fs::read_to_string(path)?)?)
        } else {
            Ok(Self::default())
        }
    }

    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn write_to(&self, path: &Path) {
        if let Err(error) = self.write_fallibly_to(path) {
            error!("failed to save the cache: {error:#}");
        }
    }

    fn write_fallibly_to(&self, path: &Path) -> Result {
        fs::write(path, toml::to_string(self)?)?;
        Ok(())
    }

    #[must_use]
    pub fn get(&self, date: NaiveDate, zone: Zone) -> Option<&[PriceSample]> {
        self.days
            .iter()
            .find(|day| day.date == date && day.zone == zone)
            .map(|day| day.samples.as_slice())
    }

    /// Store the day, replacing an earlier entry. Empty series are ignored.
    pub fn insert(&mut self, date: NaiveDate, zone: Zone, samples: Vec<PriceSample>) {
        if samples.is_empty() {
            return;
        }
        self.days.retain(|day| day.date != date || day.zone != zone);
        self.days.push(CachedDay { date, zone, samples });
    }

    /// Drop the days before the specified date.
    pub fn retain_since(&mut self, since: NaiveDate) {
        self.days.retain(|day| day.date >= since);
    }
}

#[cfg(test)]
mod tests {
    use std::process;

    use super::*;
    use crate::core::window::tests::hourly;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, day).unwrap()
    }

    #[test]
    fn test_round_trip() -> Result {
        let path = std::env::temp_dir().join(format!("hemma-cache-{}.toml", process::id()));
        let samples = hourly(&[0.5, 0.25, 1.5]);

        let mut cache = Cache::default();
        cache.insert(date(15), Zone::Se3, samples.clone());
        cache.write_fallibly_to(&path)?;

        let cache = Cache::read_fallibly_from(&path)?;
        fs::remove_file(&path)?;
        assert_eq!(cache.get(date(15), Zone::Se3), Some(samples.as_slice()));
        assert_eq!(cache.get(date(15), Zone::Se4), None);
        assert_eq!(cache.get(date(16), Zone::Se3), None);
        Ok(())
    }

    #[test]
    fn test_missing_file() -> Result {
        let cache = Cache::read_fallibly_from(Path::new("/nonexistent/hemma.toml"))?;
        assert!(cache.days.is_empty());
        Ok(())
    }

    #[test]
    fn test_insert_replaces() {
        let mut cache = Cache::default();
        cache.insert(date(15), Zone::Se1, hourly(&[1.0]));
        cache.insert(date(15), Zone::Se1, hourly(&[2.0, 3.0]));
        assert_eq!(cache.days.len(), 1);
        assert_eq!(cache.get(date(15), Zone::Se1).map(<[_]>::len), Some(2));
    }

    #[test]
    fn test_insert_ignores_empty() {
        let mut cache = Cache::default();
        cache.insert(date(15), Zone::Se1, Vec::new());
        assert!(cache.get(date(15), Zone::Se1).is_none());
    }

    #[test]
    fn test_retain_since() {
        let mut cache = Cache::default();
        cache.insert(date(14), Zone::Se2, hourly(&[1.0]));
        cache.insert(date(15), Zone::Se2, hourly(&[1.0]));
        cache.retain_since(date(15));
        assert!(cache.get(date(14), Zone::Se2).is_none());
        assert!(cache.get(date(15), Zone::Se2).is_some());
    }
}
