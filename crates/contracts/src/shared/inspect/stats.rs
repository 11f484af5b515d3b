use serde::{Deserialize, Serialize};
use std::fmt;

/// Aggregate counts and timing of the queries behind a panel's current data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryStats {
    /// Milliseconds, or [`QueryStats::NOT_AVAILABLE`]
    pub request_time: i64,
    pub queries: u32,
    pub data_sources: u32,
}

impl QueryStats {
    /// Sentinel request time meaning "not measured".
    pub const NOT_AVAILABLE: i64 = -1;

    pub fn new(request_time: i64, queries: u32, data_sources: u32) -> Self {
        Self {
            request_time,
            queries,
            data_sources,
        }
    }

    /// Build stats from request start/end timestamps (ms). Either end missing,
    /// or a span too large for `i64`, means the request time is not available.
    /// An end before the start (clock skew) counts as 0 ms.
    pub fn from_timing(
        start_ms: Option<i64>,
        end_ms: Option<i64>,
        queries: u32,
        data_sources: u32,
    ) -> Self {
        let request_time = match (start_ms, end_ms) {
            (Some(start), Some(end)) => end
                .checked_sub(start)
                .map(|elapsed| elapsed.max(0))
                .unwrap_or(Self::NOT_AVAILABLE),
            _ => Self::NOT_AVAILABLE,
        };
        Self::new(request_time, queries, data_sources)
    }

    /// Human-readable one-line summary, e.g. `5 queries - 1 data source - 42ms`.
    pub fn summary(&self) -> String {
        self.to_string()
    }
}

fn plural<'a>(count: u32, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 {
        one
    } else {
        many
    }
}

impl fmt::Display for QueryStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - {} {} - ",
            self.queries,
            plural(self.queries, "query", "queries"),
            self.data_sources,
            plural(self.data_sources, "data source", "data sources"),
        )?;
        if self.request_time == Self::NOT_AVAILABLE {
            f.write_str("N/A")?;
        } else {
            write!(f, "{}", self.request_time)?;
        }
        f.write_str("ms")
    }
}
