//! Pre-registration reward milestones and the live registration counter.

use crate::i18n::TranslationKey;
use crate::scheduler::{ScheduledTask, Scheduler};
use rand::Rng;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// The counter never goes past the last milestone.
pub const MAX_REGISTRATIONS: u64 = 500_000;

/// A community goal with a reward for every player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Milestone {
    pub target: u64,
    pub title: TranslationKey,
    pub reward: TranslationKey,
}

pub const MILESTONES: [Milestone; 3] = [
    Milestone {
        target: 100_000,
        title: TranslationKey::Milestone1,
        reward: TranslationKey::Reward1,
    },
    Milestone {
        target: 250_000,
        title: TranslationKey::Milestone2,
        reward: TranslationKey::Reward2,
    },
    Milestone {
        target: MAX_REGISTRATIONS,
        title: TranslationKey::Milestone3,
        reward: TranslationKey::Reward3,
    },
];

/// Registration count shared between the renderer and the simulation ticker.
#[derive(Debug)]
pub struct RewardTracker {
    count: AtomicU64,
}

impl RewardTracker {
    pub fn new(initial: u64) -> Self {
        Self {
            count: AtomicU64::new(initial.min(MAX_REGISTRATIONS)),
        }
    }

    pub fn count(&self) -> u64 {
        self.count.load(Ordering::Relaxed)
    }

    /// Add registrations, saturating at [`MAX_REGISTRATIONS`]. Returns the new count.
    pub fn advance(&self, increment: u64) -> u64 {
        let previous = self
            .count
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |count| {
                Some(count.saturating_add(increment).min(MAX_REGISTRATIONS))
            })
            .unwrap_or_else(|count| count);
        let current = previous.saturating_add(increment).min(MAX_REGISTRATIONS);

        for milestone in MILESTONES {
            if previous < milestone.target && current >= milestone.target {
                info!("Milestone reached: {} registrations", milestone.target);
            }
        }
        current
    }

    pub fn milestones(&self) -> &'static [Milestone] {
        &MILESTONES
    }

    pub fn is_completed(&self, milestone: &Milestone) -> bool {
        self.count() >= milestone.target
    }

    /// Progress towards `target` as a percentage, capped at 100.
    pub fn progress_percentage(&self, target: u64) -> f64 {
        if target == 0 {
            return 100.0;
        }
        (self.count() as f64 / target as f64 * 100.0).min(100.0)
    }

    /// Index of the milestone currently being worked towards.
    ///
    /// This is the first milestone not yet reached whose predecessor (if any)
    /// is reached. `None` once every milestone is complete.
    pub fn active_milestone(&self) -> Option<usize> {
        let count = self.count();
        MILESTONES.iter().enumerate().position(|(index, milestone)| {
            count < milestone.target && (index == 0 || count >= MILESTONES[index - 1].target)
        })
    }

    /// Add a random 1..=5 registrations every `tick`, until the scheduler is dropped.
    pub fn start_simulation(
        self: &Arc<Self>,
        scheduler: &Scheduler,
        tick: Duration,
    ) -> ScheduledTask {
        let tracker = Arc::clone(self);
        scheduler.schedule_repeating("registration-ticker", tick, move || {
            let increment = rand::thread_rng().gen_range(1..=5);
            let count = tracker.advance(increment);
            debug!("Registrations +{} -> {}", increment, count);
            async {}
        })
    }
}

/// Format a count with `,` thousands separators (same in ko, en and ja).
pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(digit);
    }
    formatted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_count_clamped() {
        assert_eq!(RewardTracker::new(127_500).count(), 127_500);
        assert_eq!(RewardTracker::new(900_000).count(), MAX_REGISTRATIONS);
    }

    #[test]
    fn test_advance_saturates() {
        let tracker = RewardTracker::new(499_998);
        assert_eq!(tracker.advance(1), 499_999);
        assert_eq!(tracker.advance(5), MAX_REGISTRATIONS);
        assert_eq!(tracker.advance(5), MAX_REGISTRATIONS);
    }

    #[test]
    fn test_progress_percentage() {
        let tracker = RewardTracker::new(125_000);
        assert_eq!(tracker.progress_percentage(100_000), 100.0);
        assert_eq!(tracker.progress_percentage(250_000), 50.0);
        assert_eq!(tracker.progress_percentage(500_000), 25.0);
    }

    #[test]
    fn test_completed_milestones() {
        let tracker = RewardTracker::new(127_500);
        let completed: Vec<bool> = tracker
            .milestones()
            .iter()
            .map(|m| tracker.is_completed(m))
            .collect();
        assert_eq!(completed, vec![true, false, false]);
    }

    #[test]
    fn test_active_milestone() {
        assert_eq!(RewardTracker::new(0).active_milestone(), Some(0));
        assert_eq!(RewardTracker::new(99_999).active_milestone(), Some(0));
        assert_eq!(RewardTracker::new(100_000).active_milestone(), Some(1));
        assert_eq!(RewardTracker::new(127_500).active_milestone(), Some(1));
        assert_eq!(RewardTracker::new(250_000).active_milestone(), Some(2));
        assert_eq!(RewardTracker::new(MAX_REGISTRATIONS).active_milestone(), None);
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(127_500), "127,500");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulation_advances_per_tick() {
        let scheduler = Scheduler::new();
        let tracker = Arc::new(RewardTracker::new(127_500));
        let _task = tracker.start_simulation(&scheduler, Duration::from_secs(5));

        tokio::time::sleep(Duration::from_millis(10_001)).await;
        let count = tracker.count();
        assert!((127_502..=127_510).contains(&count), "count was {}", count);

        drop(scheduler);
        tokio::time::sleep(Duration::from_secs(60)).await;
        assert_eq!(tracker.count(), count);
    }
}
