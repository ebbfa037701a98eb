use chrono::{DateTime, Duration, Utc};
use log::warn;
use serde::Serialize;

use crate::fetcher::RecipeFetcher;
use crate::model::Recipe;

/// How long the host should wait before requesting a fresh timeline.
pub const REFRESH_INTERVAL_MINUTES: i64 = 5;

/// One scheduled snapshot of display data.
#[derive(Debug, Clone, Serialize)]
pub struct TimelineEntry {
    pub date: DateTime<Utc>,
    pub recipe: Recipe,
}

/// A batch of entries plus the time after which the host should refresh.
#[derive(Debug, Clone, Serialize)]
pub struct Timeline {
    pub entries: Vec<TimelineEntry>,
    pub refresh_after: DateTime<Utc>,
}

/// Supplies timeline entries to the widget host.
///
/// Mirrors the host scheduling contract: `timeline` runs exactly one fetch
/// per cycle and always completes with one entry, substituting the
/// "Failed to load" record when the fetch errors.
#[derive(Debug, Default)]
pub struct Provider;

impl Provider {
    /// Entry shown in the widget gallery before any data exists.
    pub fn placeholder(&self) -> TimelineEntry {
        TimelineEntry {
            date: Utc::now(),
            recipe: Recipe::placeholder(),
        }
    }

    /// Transient preview entry. Same content as the placeholder; the host
    /// may call this while the widget is being configured.
    pub fn snapshot(&self) -> TimelineEntry {
        self.placeholder()
    }

    /// Run one refresh cycle: fetch, fall back on error, schedule the next
    /// refresh five minutes out.
    pub async fn timeline(&self, fetcher: &RecipeFetcher) -> Timeline {
        self.timeline_with_interval(fetcher, REFRESH_INTERVAL_MINUTES)
            .await
    }

    /// Same as [`timeline`](Self::timeline) with a configured refresh
    /// interval, for hosts that override `refresh_minutes`.
    pub async fn timeline_with_interval(&self, fetcher: &RecipeFetcher, minutes: i64) -> Timeline {
        let now = Utc::now();
        let refresh_after = now + Duration::minutes(minutes);

        let recipe = match fetcher.fetch().await {
            Ok(recipe) => recipe,
            Err(err) => {
                warn!("recipe fetch failed, substituting placeholder: {err}");
                Recipe::failed()
            }
        };

        Timeline {
            entries: vec![TimelineEntry { date: now, recipe }],
            refresh_after,
        }
    }
}
