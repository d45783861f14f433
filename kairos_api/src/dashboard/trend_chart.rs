use kairos_core::trend_sample::TrendSample;

use super::html::escape;

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 320.0;
const MARGIN_LEFT: f64 = 64.0;
const MARGIN_RIGHT: f64 = 24.0;
const MARGIN_TOP: f64 = 48.0;
const MARGIN_BOTTOM: f64 = 40.0;

const TITLE: &str = "ETA Variation Over Time";

struct Scale {
    min: f64,
    max: f64,
    count: usize,
}

impl Scale {
    fn new(samples: &[TrendSample]) -> Self {
        let (mut min, mut max) = samples.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY),
            |(min, max), sample| (min.min(sample.eta_minutes), max.max(sample.eta_minutes)),
        );

        // A flat series still needs some vertical range.
        if max - min < f64::EPSILON {
            min -= 1.0;
            max += 1.0;
        }

        let padding = (max - min) * 0.1;

        Scale {
            min: min - padding,
            max: max + padding,
            count: samples.len(),
        }
    }

    fn x(&self, index: usize) -> f64 {
        let plot_width = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;

        if self.count <= 1 {
            return MARGIN_LEFT + plot_width / 2.0;
        }

        MARGIN_LEFT + index as f64 * plot_width / (self.count - 1) as f64
    }

    fn y(&self, eta_minutes: f64) -> f64 {
        let plot_height = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;

        MARGIN_TOP + (self.max - eta_minutes) / (self.max - self.min) * plot_height
    }
}

/// Line chart of the trend as an inline SVG. Empty when there is no sample.
pub fn render_trend_chart(samples: &[TrendSample]) -> String {
    if samples.is_empty() {
        return String::new();
    }

    let scale = Scale::new(samples);
    let bottom = HEIGHT - MARGIN_BOTTOM;
    let right = WIDTH - MARGIN_RIGHT;

    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" class="trend-chart" viewBox="0 0 {WIDTH} {HEIGHT}" role="img" aria-label="{TITLE}">"#
    );
    svg.push_str(&format!(
        r#"<text class="chart-title" x="{MARGIN_LEFT}" y="24">{TITLE}</text>"#
    ));
    svg.push_str(&format!(
        r#"<line class="axis" x1="{MARGIN_LEFT}" y1="{MARGIN_TOP}" x2="{MARGIN_LEFT}" y2="{bottom}"/><line class="axis" x1="{MARGIN_LEFT}" y1="{bottom}" x2="{right}" y2="{bottom}"/>"#
    ));

    for value in [scale.min, (scale.min + scale.max) / 2.0, scale.max] {
        svg.push_str(&format!(
            r#"<text class="y-label" x="{:.1}" y="{:.1}" text-anchor="end">{:.2}</text>"#,
            MARGIN_LEFT - 8.0,
            scale.y(value) + 4.0,
            value
        ));
    }

    let points: Vec<String> = samples
        .iter()
        .enumerate()
        .map(|(index, sample)| format!("{:.1},{:.1}", scale.x(index), scale.y(sample.eta_minutes)))
        .collect();
    svg.push_str(&format!(
        r#"<polyline class="trend-line" fill="none" points="{}"/>"#,
        points.join(" ")
    ));

    for (index, sample) in samples.iter().enumerate() {
        let x = scale.x(index);
        let timestamp = escape(&sample.timestamp);

        svg.push_str(&format!(
            r#"<circle class="trend-point" cx="{:.1}" cy="{:.1}" r="4"><title>{}: {:.2} min</title></circle>"#,
            x,
            scale.y(sample.eta_minutes),
            timestamp,
            sample.eta_minutes
        ));
        svg.push_str(&format!(
            r#"<text class="x-label" x="{:.1}" y="{:.1}" text-anchor="middle">{}</text>"#,
            x,
            bottom + 20.0,
            timestamp
        ));
    }

    svg.push_str("</svg>");
    svg
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples() -> Vec<TrendSample> {
        vec![
            TrendSample::new("08:00", 42.0),
            TrendSample::new("09:00", 55.5),
            TrendSample::new("10:00", 38.25),
        ]
    }

    #[test]
    fn test_render_points_and_labels() {
        let svg = render_trend_chart(&samples());

        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains(TITLE));
        assert_eq!(svg.matches("<circle").count(), 3);
        assert!(svg.contains(">08:00</text>"));
        assert!(svg.contains("<title>09:00: 55.50 min</title>"));
    }

    #[test]
    fn test_peak_is_highest_point() {
        let scale = Scale::new(&samples());

        assert!(scale.y(55.5) < scale.y(42.0));
        assert!(scale.y(38.25) > scale.y(42.0));
        assert!(scale.y(55.5) > MARGIN_TOP);
        assert!(scale.y(38.25) < HEIGHT - MARGIN_BOTTOM);
    }

    #[test]
    fn test_flat_and_single_series() {
        let svg = render_trend_chart(&[TrendSample::new("08:00", 30.0)]);
        assert_eq!(svg.matches("<circle").count(), 1);
        assert!(!svg.contains("NaN"));

        let scale = Scale::new(&[TrendSample::new("08:00", 30.0), TrendSample::new("09:00", 30.0)]);
        assert!(scale.y(30.0).is_finite());
        assert_eq!(scale.x(0), MARGIN_LEFT);
        assert_eq!(scale.x(1), WIDTH - MARGIN_RIGHT);
    }

    #[test]
    fn test_empty() {
        assert!(render_trend_chart(&[]).is_empty());
    }
}
