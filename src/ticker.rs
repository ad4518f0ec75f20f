use std::time::Duration;

use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};

/// Cancellable repeating tick timer.
///
/// Armed, it fires once per period; disarmed, [`Ticker::tick`] parks on a
/// future that never completes, which lets a `select!` loop keep a single
/// branch for the game cadence. Re-arming builds a fresh interval, so ticks
/// missed while disarmed are never replayed.
pub struct Ticker {
    period: Duration,
    interval: Option<Interval>,
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            interval: None,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.interval.is_some()
    }

    /// Arm or disarm to match the desired state. Arming while already armed
    /// keeps the running cadence instead of restarting it, so repeated
    /// syncs cannot stack timers.
    pub fn sync(&mut self, armed: bool) {
        if armed && self.interval.is_none() {
            let mut interval = interval_at(Instant::now() + self.period, self.period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            self.interval = Some(interval);
        } else if !armed {
            self.interval = None;
        }
    }

    /// Complete on the next tick while armed; pend forever while disarmed
    pub async fn tick(&mut self) {
        match self.interval.as_mut() {
            Some(interval) => {
                interval.tick().await;
            }
            None => futures::future::pending::<()>().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::timeout;

    #[test]
    fn test_starts_disarmed() {
        let ticker = Ticker::new(Duration::from_millis(150));
        assert!(!ticker.is_armed());
    }

    #[tokio::test]
    async fn test_sync_arms_and_disarms() {
        let mut ticker = Ticker::new(Duration::from_millis(150));

        ticker.sync(true);
        assert!(ticker.is_armed());

        ticker.sync(true); // repeated arming stays armed, single cadence
        assert!(ticker.is_armed());

        ticker.sync(false);
        assert!(!ticker.is_armed());

        ticker.sync(false);
        assert!(!ticker.is_armed());
    }

    #[tokio::test]
    async fn test_armed_ticker_fires() {
        let mut ticker = Ticker::new(Duration::from_millis(1));
        ticker.sync(true);

        let fired = timeout(Duration::from_secs(1), ticker.tick()).await;
        assert!(fired.is_ok());
    }

    #[tokio::test]
    async fn test_disarmed_ticker_never_fires() {
        let mut ticker = Ticker::new(Duration::from_millis(1));

        let fired = timeout(Duration::from_millis(20), ticker.tick()).await;
        assert!(fired.is_err());
    }
}
