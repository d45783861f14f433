use kairos_core::{
    fuel::{
        DEFAULT_FUEL_EFFICIENCY_KM_PER_LITER, DEFAULT_FUEL_PRICE_PER_LITER,
        MAX_FUEL_EFFICIENCY_KM_PER_LITER, MAX_FUEL_PRICE_PER_LITER,
        MIN_FUEL_EFFICIENCY_KM_PER_LITER, MIN_FUEL_PRICE_PER_LITER,
    },
    travel_mode::TravelMode,
    user_query::UserQuery,
};

use super::{
    dashboard_view::{DashboardError, DashboardView, FastestRoute},
    html::{escape, script_json},
    insights::TrendInsights,
    trend_chart::render_trend_chart,
};

pub const FETCHING_MESSAGE: &str = "Fetching best routes...";
pub const TREND_UNAVAILABLE: &str = "Traffic trend data unavailable.";
pub const INSIGHTS_UNAVAILABLE: &str = "Traffic insights unavailable.";

const PAGE_TITLE: &str = "Real-Time Traffic Analysis &amp; Route Optimization";

const HEAD: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Real-Time Traffic Analysis &amp; Route Optimization</title>
<link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css">
<script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
<style>
body { background-color: #1E1E1E; color: white; font-family: Arial, sans-serif; margin: 0; }
h1, h2, h3, p, label, legend { color: white; }
.page-title { text-align: center; }
.layout { display: flex; gap: 24px; padding: 0 24px 24px; }
.sidebar { background-color: #222; padding: 16px; width: 300px; flex-shrink: 0; }
.sidebar input[type=text], .sidebar input[type=number] { background-color: #333; color: white; border: 1px solid #555; padding: 6px; width: 100%; box-sizing: border-box; }
.sidebar fieldset { border: none; padding: 0; }
.sidebar button { background-color: #FF8C00; color: white; font-weight: bold; border: none; padding: 10px 16px; margin-top: 16px; cursor: pointer; }
.sidebar button:hover { background-color: #FF7000; }
.toast { padding: 10px; border-radius: 6px; margin-top: 16px; }
.toast.success { background-color: #1B5E20; }
.toast.error { background-color: #B71C1C; }
.toast.warning { background-color: #8D6E00; }
main { flex-grow: 1; }
.row { display: flex; gap: 24px; }
.row > section { flex: 1; }
.bold-text { font-size: 20px; font-weight: bold; }
.highlight { color: #FF8C00; font-size: 22px; font-weight: bold; }
.route-box, .journey-box { border: 2px solid white; padding: 10px; border-radius: 10px; margin-bottom: 10px; }
.insight-text { font-size: 18px; font-weight: bold; }
#route-map { height: 420px; border-radius: 10px; }
.trend-chart { width: 100%; background-color: #111; border-radius: 10px; }
.trend-chart text { fill: white; font-size: 12px; }
.trend-chart .chart-title { font-size: 16px; }
.trend-chart .axis { stroke: #888; }
.trend-chart .trend-line { stroke: #FF8C00; stroke-width: 3; }
.trend-chart .trend-point { fill: #FF8C00; }
</style>
</head>
"##;

const MAP_SCRIPT: &str = r#"<script>
const overlay = JSON.parse(document.getElementById("route-overlay").textContent);
const map = L.map("route-map").setView(overlay.center, overlay.zoom);
L.tileLayer("https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png", {
  attribution: "&copy; OpenStreetMap contributors",
}).addTo(map);
if (overlay.points.length > 0) {
  L.polyline(overlay.points, { color: "blue", weight: 5, opacity: 0.7 }).addTo(map);
}
</script>"#;

/// What the page shows: the empty form, or the outcome of a submission.
pub enum DashboardState {
    Idle,
    Results {
        query: UserQuery,
        outcome: Result<DashboardView, DashboardError>,
    },
}

fn mode_icon(mode: TravelMode) -> &'static str {
    match mode {
        TravelMode::Driving => "🚗",
        TravelMode::Walking => "🚶",
        TravelMode::Bicycling => "🚴",
    }
}

pub fn render_page(state: &DashboardState) -> Result<String, serde_json::Error> {
    let mut html = String::from(HEAD);
    html.push_str(&format!(
        r#"<body><h1 class="page-title">{PAGE_TITLE}</h1><div class="layout">"#
    ));

    match state {
        DashboardState::Idle => {
            html.push_str(&render_sidebar(None, None));
            html.push_str("<main></main>");
        }
        DashboardState::Results { query, outcome } => {
            let error = outcome.as_ref().err();
            html.push_str(&render_sidebar(Some(query), Some(error)));

            html.push_str("<main>");
            if let Ok(view) = outcome {
                html.push_str(&render_results(view)?);
            }
            html.push_str("</main>");
        }
    }

    html.push_str("</div></body></html>");
    Ok(html)
}

/// `status` is `None` before any submission, otherwise the submission error
/// if there was one.
fn render_sidebar(query: Option<&UserQuery>, status: Option<Option<&DashboardError>>) -> String {
    let origin = query.map(|q| escape(&q.origin)).unwrap_or_default();
    let destination = query.map(|q| escape(&q.destination)).unwrap_or_default();
    let selected_mode = query.map(|q| q.mode).unwrap_or_default();
    let fuel_price = query
        .map(|q| q.fuel_price_per_liter)
        .unwrap_or(DEFAULT_FUEL_PRICE_PER_LITER);
    let fuel_efficiency = query
        .map(|q| q.fuel_efficiency_km_per_liter)
        .unwrap_or(DEFAULT_FUEL_EFFICIENCY_KM_PER_LITER);

    let mut html = String::from(
        r#"<aside class="sidebar"><h2>🚦 Smart Travel Assistant</h2><hr><form method="get" action="/dashboard">"#,
    );

    html.push_str(&format!(
        r#"<h3>📍 Enter Locations</h3><label for="origin">Start Location</label><input type="text" id="origin" name="origin" value="{origin}"><label for="destination">Destination</label><input type="text" id="destination" name="destination" value="{destination}">"#
    ));

    html.push_str("<h3>🚗 Select Mode of Transport</h3><fieldset>");
    for mode in TravelMode::ALL {
        let checked = if mode == selected_mode { " checked" } else { "" };
        html.push_str(&format!(
            r#"<label><input type="radio" name="mode" value="{}"{}> {} {}</label><br>"#,
            mode.as_str(),
            checked,
            mode_icon(mode),
            mode.label()
        ));
    }
    html.push_str("</fieldset>");

    html.push_str(&format!(
        r#"<h3>⛽ Estimated Cost Calculator</h3><label for="fuel_price">Fuel Price per Liter (₹)</label><input type="number" id="fuel_price" name="fuel_price" value="{fuel_price}" min="{MIN_FUEL_PRICE_PER_LITER}" max="{MAX_FUEL_PRICE_PER_LITER}" step="1"><label for="fuel_efficiency">Vehicle Fuel Efficiency (km/l)</label><input type="number" id="fuel_efficiency" name="fuel_efficiency" value="{fuel_efficiency}" min="{MIN_FUEL_EFFICIENCY_KM_PER_LITER}" max="{MAX_FUEL_EFFICIENCY_KM_PER_LITER}" step="1">"#
    ));

    html.push_str(r#"<button type="submit">🔍 Get Traffic Data</button></form>"#);

    if let Some(error) = status {
        html.push_str(&format!(
            r#"<div class="toast success">{FETCHING_MESSAGE}</div>"#
        ));
        if let Some(error) = error {
            html.push_str(&format!(
                r#"<div class="toast error">{}</div>"#,
                escape(&error.to_string())
            ));
        }
    }

    html.push_str("</aside>");
    html
}

fn render_results(view: &DashboardView) -> Result<String, serde_json::Error> {
    let mut html = String::from(r#"<div class="row"><section>"#);

    html.push_str(&render_journey(&view.query));
    html.push_str("<hr>");
    html.push_str(&render_fastest_route(&view.fastest_route));

    html.push_str(r#"</section><section><h2 class="highlight">🗺 Route Map</h2><div id="route-map"></div>"#);
    html.push_str(&format!(
        r#"<script id="route-overlay" type="application/json">{}</script>"#,
        script_json(&serde_json::to_string(&view.map)?)
    ));
    html.push_str(MAP_SCRIPT);
    html.push_str("</section></div><hr>");

    html.push_str(r#"<div class="row"><section><h2 class="highlight">📊 Traffic Trend Analysis</h2>"#);
    if view.trend.is_empty() {
        html.push_str(&warning(TREND_UNAVAILABLE));
    } else {
        html.push_str(&render_trend_chart(&view.trend));
    }

    html.push_str(r#"</section><section><h2 class="highlight">🚦 Traffic Insights</h2><hr>"#);
    match &view.insights {
        Some(insights) => html.push_str(&render_insights(insights)),
        None => html.push_str(&warning(INSIGHTS_UNAVAILABLE)),
    }
    html.push_str("</section></div>");

    Ok(html)
}

fn render_journey(query: &UserQuery) -> String {
    format!(
        r#"<h2 class="highlight">📌 Journey Details</h2><div class="journey-box"><p class="bold-text">📍 <b>Start:</b> {}</p><p class="bold-text">📍 <b>Destination:</b> {}</p><p class="bold-text">📍 <b>Mode:</b> {} {}</p></div>"#,
        escape(&query.origin),
        escape(&query.destination),
        mode_icon(query.mode),
        query.mode.label()
    )
}

fn render_fastest_route(route: &FastestRoute) -> String {
    let fuel_cost = match route.estimated_fuel_cost {
        Some(cost) => format!("₹{cost:.2}"),
        None => String::from("unavailable"),
    };

    format!(
        r#"<h2 class="highlight">🛣 Available Routes</h2><div class="route-box"><h3 class="highlight">🛣 Fastest Route: {}</h3><p class="bold-text">🕒 ETA: {}</p><p class="bold-text">📏 Distance: {}</p><p class="bold-text">💰 Estimated Fuel Cost: {}</p></div>"#,
        escape(&route.label),
        escape(&route.eta_display),
        escape(&route.distance_text),
        fuel_cost
    )
}

fn render_insights(insights: &TrendInsights) -> String {
    [
        (
            format!("Peak ETA: {:.2} min", insights.peak_eta_minutes),
            "Traffic is heaviest during this time, causing delays. Consider traveling later to avoid congestion.",
        ),
        (
            format!("Average ETA: {:.2} min", insights.average_eta_minutes),
            "Expected travel time under normal traffic conditions.",
        ),
        (
            format!("Congestion Peak: {}", escape(&insights.congestion_peak)),
            "Peak congestion period, expect longer travel times. Avoid if possible.",
        ),
        (
            format!("Smoothest Travel Window: {}", escape(&insights.smoothest_window)),
            "Least crowded time, fastest travel. Plan accordingly.",
        ),
    ]
    .iter()
    .map(|(headline, explanation)| {
        format!(r#"<p class="insight-text">📌 {headline}</p><p>{explanation}</p>"#)
    })
    .collect()
}

fn warning(message: &str) -> String {
    format!(r#"<div class="toast warning">{message}</div>"#)
}

#[cfg(test)]
mod tests {
    use kairos_core::{route_candidate::RouteCandidate, trend_sample::TrendSample};

    use super::*;
    use crate::dashboard::map_overlay::MapOverlay;

    fn view(trend: Vec<TrendSample>) -> DashboardView {
        let query = UserQuery::new("Ahmedabad", "Mumbai", TravelMode::Driving);
        let insights = TrendInsights::from_samples(&trend);

        DashboardView {
            query,
            fastest_route: FastestRoute {
                label: String::from("NH 48"),
                eta_minutes: 10,
                eta_display: String::from("10 min"),
                distance_text: String::from("12 km"),
                estimated_fuel_cost: Some(80.0),
            },
            routes: vec![RouteCandidate::new("10 min", "12 km", "_p~iF~ps|U", "NH 48")],
            map: MapOverlay::new(vec![[38.5, -120.2]]),
            trend,
            insights,
        }
    }

    fn results(outcome: Result<DashboardView, DashboardError>) -> String {
        let query = UserQuery::new("Ahmedabad", "Mumbai", TravelMode::Driving);
        render_page(&DashboardState::Results { query, outcome }).unwrap()
    }

    #[test]
    fn test_idle_page() {
        let html = render_page(&DashboardState::Idle).unwrap();

        assert!(html.contains("Smart Travel Assistant"));
        assert!(html.contains(r#"name="fuel_price" value="100" min="50" max="200""#));
        assert!(html.contains(r#"value="driving" checked"#));
        assert!(!html.contains(FETCHING_MESSAGE));
        assert!(!html.contains("Journey Details"));
    }

    #[test]
    fn test_results_page() {
        let html = results(Ok(view(vec![
            TrendSample::new("08:00", 10.0),
            TrendSample::new("09:00", 12.5),
        ])));

        assert!(html.contains(FETCHING_MESSAGE));
        assert!(html.contains("Fastest Route: NH 48"));
        assert!(html.contains("ETA: 10 min"));
        assert!(html.contains("Estimated Fuel Cost: ₹80.00"));
        assert!(html.contains(r#"id="route-overlay""#));
        assert!(html.contains("<svg"));
        assert!(html.contains("Peak ETA: 12.50 min"));
        assert!(html.contains("Average ETA: 11.25 min"));
        assert!(html.contains("Congestion Peak: 09:00"));
        assert!(html.contains("Smoothest Travel Window: 08:00"));
        assert!(!html.contains(TREND_UNAVAILABLE));
    }

    #[test]
    fn test_results_without_trend() {
        let html = results(Ok(view(vec![])));

        assert!(html.contains(TREND_UNAVAILABLE));
        assert!(html.contains(INSIGHTS_UNAVAILABLE));
        assert!(!html.contains("<svg"));
    }

    #[test]
    fn test_results_with_error() {
        let html = results(Err(DashboardError::InvalidLocations));

        assert!(html.contains(FETCHING_MESSAGE));
        assert!(html.contains("Invalid locations. Please enter valid city names!"));
        assert!(!html.contains("Journey Details"));
        assert!(html.contains(r#"value="Ahmedabad""#));
    }

    #[test]
    fn test_user_input_is_escaped() {
        let query = UserQuery::new("<script>alert(1)</script>", "B", TravelMode::Walking);
        let html = render_page(&DashboardState::Results {
            query,
            outcome: Err(DashboardError::InvalidLocations),
        })
        .unwrap();

        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains(r#"value="walking" checked"#));
    }
}
