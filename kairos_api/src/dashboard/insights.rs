use kairos_core::trend_sample::TrendSample;
use schemars::JsonSchema;
use serde::Serialize;

#[derive(Serialize, JsonSchema, Debug, Clone, PartialEq)]
pub struct TrendInsights {
    pub peak_eta_minutes: f64,
    pub average_eta_minutes: f64,
    /// Departure time with the longest ETA
    pub congestion_peak: String,
    /// Departure time with the shortest ETA
    pub smoothest_window: String,
}

impl TrendInsights {
    /// `None` when there is no sample. On ties the earliest departure wins,
    /// for both the peak and the smoothest window.
    pub fn from_samples(samples: &[TrendSample]) -> Option<Self> {
        let first = samples.first()?;

        let mut peak = first;
        let mut smoothest = first;
        let mut total = 0.0;

        for sample in samples {
            if sample.eta_minutes > peak.eta_minutes {
                peak = sample;
            }
            if sample.eta_minutes < smoothest.eta_minutes {
                smoothest = sample;
            }
            total += sample.eta_minutes;
        }

        Some(TrendInsights {
            peak_eta_minutes: peak.eta_minutes,
            average_eta_minutes: total / samples.len() as f64,
            congestion_peak: peak.timestamp.clone(),
            smoothest_window: smoothest.timestamp.clone(),
        })
    }
}

pub fn round_eta(eta_minutes: f64) -> f64 {
    (eta_minutes * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples(values: &[(&str, f64)]) -> Vec<TrendSample> {
        values
            .iter()
            .map(|(time, eta)| TrendSample::new(*time, *eta))
            .collect()
    }

    #[test]
    fn test_insights() {
        let samples = samples(&[
            ("08:00", 42.0),
            ("09:00", 55.5),
            ("10:00", 38.25),
            ("11:00", 40.25),
        ]);

        let insights = TrendInsights::from_samples(&samples).unwrap();

        assert_eq!(insights.peak_eta_minutes, 55.5);
        assert_eq!(insights.average_eta_minutes, 44.0);
        assert_eq!(insights.congestion_peak, "09:00");
        assert_eq!(insights.smoothest_window, "10:00");
    }

    #[test]
    fn test_ties_keep_earliest() {
        let samples = samples(&[("08:00", 30.0), ("09:00", 30.0), ("10:00", 30.0)]);

        let insights = TrendInsights::from_samples(&samples).unwrap();

        assert_eq!(insights.congestion_peak, "08:00");
        assert_eq!(insights.smoothest_window, "08:00");
    }

    #[test]
    fn test_no_samples() {
        assert_eq!(TrendInsights::from_samples(&[]), None);
    }

    #[test]
    fn test_round_eta() {
        assert_eq!(round_eta(20.456), 20.46);
        assert_eq!(round_eta(20.0), 20.0);
        assert_eq!(round_eta(33.333333), 33.33);
    }
}
