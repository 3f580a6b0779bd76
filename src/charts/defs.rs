/// Visual encoding of one chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// Categorical comparison, vertical bars.
    Bar,
    /// Time series, connected markers with a filled area underneath.
    Area,
    /// Proportional breakdown, donut segments.
    Donut,
}

/// Static definition of one chart: where it mounts and what it shows.
///
/// Built once per coordinator and never mutated. Labels and values are
/// one-to-one; `values[i]` belongs to `labels[i]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartDef {
    pub mount_id: &'static str,
    pub kind: ChartKind,
    pub labels: &'static [&'static str],
    pub values: &'static [f64],
}

/// The three charts of the portfolio metrics section.
pub fn portfolio_charts() -> Vec<ChartDef> {
    vec![
        ChartDef {
            mount_id: "chart-improvement",
            kind: ChartKind::Bar,
            labels: &[
                "Proposal drafting",
                "Customer support",
                "Back-office",
                "Document analysis",
                "Reporting",
            ],
            values: &[78.0, 72.0, 68.0, 74.0, 70.0],
        },
        ChartDef {
            mount_id: "chart-maturity",
            kind: ChartKind::Area,
            labels: &["Week 1", "Week 2", "Week 3", "Week 4", "Week 6"],
            values: &[35.0, 52.0, 68.0, 78.0, 86.0],
        },
        ChartDef {
            mount_id: "chart-time",
            kind: ChartKind::Donut,
            labels: &[
                "Discovery & architecture",
                "MVP implementation",
                "Integrations & data",
                "Hardening & tests",
                "Rollout & monitoring",
            ],
            values: &[20.0, 35.0, 20.0, 15.0, 10.0],
        },
    ]
}
