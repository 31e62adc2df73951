//! Askama templates for the web frontend.

use askama::Template;

use crate::domain::{Stop, StopKind};
use crate::planner::PlanResult;

/// Home page with the route form.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate;

/// Stop table fragment (plan results).
#[derive(Template)]
#[template(path = "stop_table.html")]
pub struct StopTableTemplate {
    pub stops: Vec<StopView>,
    pub route_miles: String,
}

impl StopTableTemplate {
    /// Create from a plan result.
    pub fn from_result(result: &PlanResult) -> Self {
        Self {
            stops: result.stops.iter().map(StopView::from_stop).collect(),
            route_miles: format!("{:.1}", result.route_miles),
        }
    }
}

/// Stop view model for templates.
#[derive(Debug, Clone)]
pub struct StopView {
    pub duration: String,
    pub lat: String,
    pub lon: String,
    pub location: String,
    pub fuel: String,
    pub is_user: bool,
}

impl StopView {
    /// Create from a domain stop.
    pub fn from_stop(stop: &Stop) -> Self {
        Self {
            duration: stop.duration().to_string(),
            lat: stop.lat().to_string(),
            lon: stop.lon().to_string(),
            location: stop.location().to_string(),
            fuel: stop.fuel().to_string(),
            is_user: stop.kind() == StopKind::User,
        }
    }

    /// CSS class for the row.
    pub fn row_class(&self) -> &'static str {
        if self.is_user { "stop-user" } else { "stop-highway" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Point;

    #[test]
    fn render_stop_table() {
        let result = PlanResult {
            stops: vec![
                Stop::highway(Point::new(31.0, -97.0).unwrap()),
                Stop::user(Point::new(32.78, -96.8).unwrap()),
            ],
            path_points: 40,
            route_miles: 195.44,
        };

        let html = StopTableTemplate::from_result(&result).render().unwrap();
        assert!(html.contains("195.4"));
        assert!(html.contains("Highway Stop"));
        assert!(html.contains("User Provided Stop"));
        assert!(html.contains("-96.80"));
        assert!(html.contains("stop-user"));
    }

    #[test]
    fn render_empty_table() {
        let result = PlanResult {
            stops: Vec::new(),
            path_points: 2,
            route_miles: 1.0,
        };

        let html = StopTableTemplate::from_result(&result).render().unwrap();
        assert!(html.contains("No stops needed"));
    }

    #[test]
    fn render_index() {
        let html = IndexTemplate.render().unwrap();
        assert!(html.contains("/plan-route"));
    }
}
