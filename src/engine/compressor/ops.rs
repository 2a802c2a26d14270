/// Reduction applied to the values collected by a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AggregationMethod {
    #[default]
    Sum,
    Avg,
    Min,
    Max,
    Count,
    First,
    Last,
}

impl AggregationMethod {
    /// Maps a configured method name; unknown names fall back to `Sum`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "sum" => Self::Sum,
            "avg" | "mean" => Self::Avg,
            "min" => Self::Min,
            "max" => Self::Max,
            "count" => Self::Count,
            "first" => Self::First,
            "last" => Self::Last,
            _ => Self::Sum,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Sum => "sum",
            Self::Avg => "avg",
            Self::Min => "min",
            Self::Max => "max",
            Self::Count => "count",
            Self::First => "first",
            Self::Last => "last",
        }
    }

    /// Reduces `values` to a single number. An empty slice yields 0 for every method.
    pub fn aggregate(&self, values: &[f64]) -> f64 {
        let Some((&first, rest)) = values.split_first() else {
            return 0.0;
        };

        match self {
            Self::Sum => values.iter().sum(),
            Self::Avg => values.iter().sum::<f64>() / values.len() as f64,
            Self::Min => rest.iter().fold(first, |acc, &v| if v < acc { v } else { acc }),
            Self::Max => rest.iter().fold(first, |acc, &v| if v > acc { v } else { acc }),
            Self::Count => values.len() as f64,
            Self::First => first,
            Self::Last => rest.last().copied().unwrap_or(first),
        }
    }

    /// Timestamp emitted for a group that saw records between `first_seen`
    /// and `last_seen`.
    pub fn emitted_timestamp(&self, first_seen: i64, last_seen: i64) -> i64 {
        match self {
            Self::First => first_seen,
            Self::Last => last_seen,
            // Widen so the sum cannot overflow; `/` truncates toward zero.
            _ => ((first_seen as i128 + last_seen as i128) / 2) as i64,
        }
    }
}
