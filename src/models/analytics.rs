//! Analytics dashboard types.

use serde::Deserialize;

/// A headline metric shown in the KPI carousel,
/// as returned by `GET /api/analytics/kpis`.
#[derive(Clone, Debug, Deserialize)]
pub struct KpiCard {
    pub id: u64,
    pub title: String,
    /// Pre-formatted display value ("$48.2k", "97.4%", ...). The backend
    /// owns the formatting so the console stays unit-agnostic.
    pub value: String,
    /// Change versus the previous period, in percent.
    pub delta_pct: f64,
    /// Period label, e.g. "last 30 days".
    pub period: String,
}

impl KpiCard {
    /// Whether the period-over-period change is favorable.
    pub fn trending_up(&self) -> bool {
        self.delta_pct >= 0.0
    }
}

/// A single labeled value in a chart series.
#[derive(Clone, Debug, Deserialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

/// One chart panel in the analytics carousel,
/// as returned by `GET /api/analytics/charts`.
#[derive(Clone, Debug, Deserialize)]
pub struct ChartSeries {
    pub id: u64,
    pub title: String,
    /// Value unit for the axis ("orders", "USD", ...).
    pub unit: String,
    pub points: Vec<ChartPoint>,
}

impl ChartSeries {
    /// Largest point value, used to scale bar heights. 1.0 for an empty or
    /// all-zero series so scaling never divides by zero.
    pub fn max_value(&self) -> f64 {
        self.points
            .iter()
            .map(|p| p.value)
            .fold(0.0_f64, f64::max)
            .max(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_value_scales_safely() {
        let series = ChartSeries {
            id: 1,
            title: "Orders per week".into(),
            unit: "orders".into(),
            points: vec![],
        };
        assert_eq!(series.max_value(), 1.0);

        let series = ChartSeries {
            points: vec![
                ChartPoint {
                    label: "W1".into(),
                    value: 4.0,
                },
                ChartPoint {
                    label: "W2".into(),
                    value: 9.0,
                },
            ],
            ..series
        };
        assert_eq!(series.max_value(), 9.0);
    }

    #[test]
    fn test_kpi_trend_direction() {
        let kpi = KpiCard {
            id: 1,
            title: "On-time delivery".into(),
            value: "97.4%".into(),
            delta_pct: -1.2,
            period: "last 30 days".into(),
        };
        assert!(!kpi.trending_up());
    }
}
