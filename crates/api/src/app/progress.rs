//! Progress indicator shown while a listing is "being generated".
//!
//! Purely presentational: the generator is synchronous and the wait is a
//! configured delay. Clients render these steps against that delay.

use std::time::Duration;

use serde::Serialize;

/// Progress advances in equal increments of this size.
pub const STEP_PERCENT: u8 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressStep {
    pub percent: u8,
    pub at_ms: u64,
    pub label: &'static str,
}

pub fn label_for(percent: u8) -> &'static str {
    match percent {
        0..=39 => "Analyzing product details...",
        40..=69 => "Creating description...",
        70..=99 => "Optimizing content...",
        _ => "Almost done!",
    }
}

/// Steps from 0% to 100% spread evenly over `total`.
///
/// With no delay the form jumps straight to the final step.
pub fn progress_schedule(total: Duration) -> Vec<ProgressStep> {
    let total_ms = total.as_millis() as u64;
    if total_ms == 0 {
        return vec![ProgressStep {
            percent: 100,
            at_ms: 0,
            label: label_for(100),
        }];
    }

    let steps = u64::from(100 / STEP_PERCENT);
    (0..=steps)
        .map(|i| {
            let percent = (i as u8) * STEP_PERCENT;
            ProgressStep {
                percent,
                at_ms: total_ms * i / steps,
                label: label_for(percent),
            }
        })
        .collect()
}

/// Interval between steps for a given total delay.
pub fn step_interval(total: Duration) -> Duration {
    total / u32::from(100 / STEP_PERCENT)
}
