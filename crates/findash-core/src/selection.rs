use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Render mode for the market-trends chart.
///
/// Purely presentational: switching the kind never changes the aggregated
/// counts underneath it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    #[default]
    Line,
    Bar,
}

impl ChartKind {
    pub const ALL: [Self; 2] = [Self::Line, Self::Bar];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Bar => "bar",
        }
    }
}

impl Display for ChartKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartKind {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "line" => Ok(Self::Line),
            "bar" => Ok(Self::Bar),
            other => Err(ValidationError::InvalidChartKind {
                value: other.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_chart_kind() {
        let kind = ChartKind::from_str("bar").expect("must parse");
        assert_eq!(kind, ChartKind::Bar);
    }

    #[test]
    fn defaults_to_line() {
        assert_eq!(ChartKind::default(), ChartKind::Line);
    }

    #[test]
    fn rejects_unknown_kind() {
        let err = ChartKind::from_str("scatter").expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidChartKind { .. }));
    }
}
