// src/prediction.rs
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::clock::Clock;

/// Offset between invocation time and the promised delivery time.
const PROMISE_LEAD_MINUTES: i64 = 30;

/// One delivery referenced by the prediction payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryRef {
    pub id: i64,
}

/// Synthetic delivery-time prediction shaped like the upstream ETA
/// service's response. Field order matters: consumers compare the
/// serialized body byte-for-byte.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryPrediction {
    #[serde(with = "crate::serde_time")]
    pub promised_delivery_at: DateTime<Utc>,
    pub model_prediction_lower_bound_minutes: i64,
    pub model_prediction_median_bound_minutes: i64,
    pub model_prediction_upper_bound_minutes: i64,
    pub model_prediction_dispatch_remaining_time: i64,
    pub model_prediction_lower_bound_timestamp: String,
    pub model_prediction_median_bound_timestamp: String,
    pub model_prediction_upper_bound_timestamp: String,
    pub deliveries: Vec<DeliveryRef>,
}

impl DeliveryPrediction {
    /// Build the prediction for an invocation at `now`.
    ///
    /// Only `promised_delivery_at` depends on `now`. The bound timestamps
    /// are recorded historical values and deliberately do not move with
    /// invocation time.
    #[must_use]
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            promised_delivery_at: now + Duration::minutes(PROMISE_LEAD_MINUTES),
            model_prediction_lower_bound_minutes: 5,
            model_prediction_median_bound_minutes: 10,
            model_prediction_upper_bound_minutes: 15,
            model_prediction_dispatch_remaining_time: 0,
            model_prediction_lower_bound_timestamp: "2023-07-28T17:50:00+08:00".into(),
            model_prediction_median_bound_timestamp: "2023-07-28T17:54:03.898+08:00".into(),
            model_prediction_upper_bound_timestamp: "2023-07-28T17:55:00+08:00".into(),
            deliveries: vec![DeliveryRef { id: 124_962_444 }],
        }
    }
}

/// Render the response body the stub hands back to its harness.
///
/// # Errors
///
/// Propagates the `serde_json` error unmodified; serializing a well-formed
/// record does not fail in practice.
pub fn render_response_body(clock: &dyn Clock) -> serde_json::Result<String> {
    let prediction = DeliveryPrediction::at(clock.now());
    serde_json::to_string(&prediction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 7, 28, 17, 20, 0).unwrap()
    }

    #[test]
    fn promised_time_is_thirty_minutes_out() {
        let prediction = DeliveryPrediction::at(sample_now());
        assert_eq!(
            prediction.promised_delivery_at,
            Utc.with_ymd_and_hms(2023, 7, 28, 17, 50, 0).unwrap()
        );
    }

    #[test]
    fn bound_fields_are_fixed() {
        let prediction = DeliveryPrediction::at(sample_now());
        assert_eq!(prediction.model_prediction_lower_bound_minutes, 5);
        assert_eq!(prediction.model_prediction_median_bound_minutes, 10);
        assert_eq!(prediction.model_prediction_upper_bound_minutes, 15);
        assert_eq!(prediction.model_prediction_dispatch_remaining_time, 0);
        assert_eq!(
            prediction.model_prediction_lower_bound_timestamp,
            "2023-07-28T17:50:00+08:00"
        );
        assert_eq!(
            prediction.model_prediction_median_bound_timestamp,
            "2023-07-28T17:54:03.898+08:00"
        );
        assert_eq!(
            prediction.model_prediction_upper_bound_timestamp,
            "2023-07-28T17:55:00+08:00"
        );
        assert_eq!(prediction.deliveries, vec![DeliveryRef { id: 124_962_444 }]);
    }

    #[test]
    fn lead_time_rolls_over_year_boundary() {
        let now = Utc.with_ymd_and_hms(2023, 12, 31, 23, 45, 0).unwrap();
        let prediction = DeliveryPrediction::at(now);
        assert_eq!(
            prediction.promised_delivery_at,
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 15, 0).unwrap()
        );
    }
}
