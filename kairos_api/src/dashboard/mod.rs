pub mod dashboard_view;
pub mod form;
pub mod handlers;
mod html;
pub mod insights;
pub mod map_overlay;
pub mod page;
pub mod trend_chart;
