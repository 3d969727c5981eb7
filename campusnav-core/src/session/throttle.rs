use crate::geometry::distance_meters;
use crate::loading::ThrottleConfig;
use crate::model::LocationFix;

/// Drops location fixes that arrive too soon and too close to the last one
#[derive(Debug, Clone)]
pub struct LocationThrottle {
    config: ThrottleConfig,
    last_accepted: Option<LocationFix>,
}

impl LocationThrottle {
    pub fn new(config: ThrottleConfig) -> Self {
        Self {
            config,
            last_accepted: None,
        }
    }

    /// Whether `fix` should be processed. Accepted fixes become the new reference.
    pub fn accept(&mut self, fix: &LocationFix) -> bool {
        let Some(last) = self.last_accepted else {
            self.last_accepted = Some(*fix);
            return true;
        };

        if fix.timestamp < last.timestamp {
            log::trace!("Dropping out-of-order fix at {}", fix.timestamp);
            return false;
        }

        #[allow(clippy::cast_precision_loss)]
        let elapsed = (fix.timestamp - last.timestamp).num_milliseconds() as f64 / 1000.0;
        let moved = distance_meters(last.position(), fix.position());

        let accepted = self.config.is_disabled()
            || (self.config.min_interval_secs > 0.0 && elapsed >= self.config.min_interval_secs)
            || (self.config.min_displacement_meters > 0.0
                && moved >= self.config.min_displacement_meters);

        if accepted {
            self.last_accepted = Some(*fix);
        }
        accepted
    }

    pub fn reset(&mut self) {
        self.last_accepted = None;
    }
}
