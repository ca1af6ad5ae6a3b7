pub mod chart_view;
pub mod health_view;

pub use chart_view::show_chart;
pub use health_view::show_view;
