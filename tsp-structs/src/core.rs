use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Method {
    #[serde(rename = "Brute Force")]
    BruteForce,
    #[serde(rename = "Bellman-Held-Karp")]
    HeldKarp,
}

impl Method {
    /// Reporting order of the comparator.
    pub const ALL: [Method; 2] = [Method::BruteForce, Method::HeldKarp];

    pub fn name(&self) -> &'static str {
        match self {
            Method::BruteForce => "Brute Force",
            Method::HeldKarp => "Bellman-Held-Karp",
        }
    }

    /// Json key of the method's work counter.
    pub fn counter_name(&self) -> &'static str {
        match self {
            Method::BruteForce => "paths_explored",
            Method::HeldKarp => "states_computed",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Solved {
        cost: f64,
        path: Vec<usize>,
        /// paths explored (brute force) or states computed (Held-Karp)
        explored: u64,
    },
    Failed {
        error: String,
    },
}

/// Result of one method inside a comparison. Serialises flat, either as
/// `{method, cost, path, time, <counter>}` or `{method, error, time}`.
#[derive(Debug, Clone, PartialEq)]
pub struct TourResult {
    pub method: Method,
    /// Wall clock seconds, 0 for skipped or failed methods.
    pub time: f64,
    pub outcome: Outcome,
}

impl TourResult {
    pub fn solved(method: Method, time: f64, cost: f64, path: Vec<usize>, explored: u64) -> Self {
        Self {
            method,
            time,
            outcome: Outcome::Solved {
                cost,
                path,
                explored,
            },
        }
    }

    pub fn failed(method: Method, error: impl Into<String>) -> Self {
        Self {
            method,
            time: 0.0,
            outcome: Outcome::Failed {
                error: error.into(),
            },
        }
    }

    pub fn is_solved(&self) -> bool {
        matches!(self.outcome, Outcome::Solved { .. })
    }

    pub fn cost(&self) -> Option<f64> {
        match &self.outcome {
            Outcome::Solved { cost, .. } => Some(*cost),
            Outcome::Failed { .. } => None,
        }
    }

    pub fn path(&self) -> Option<&[usize]> {
        match &self.outcome {
            Outcome::Solved { path, .. } => Some(path),
            Outcome::Failed { .. } => None,
        }
    }

    pub fn explored(&self) -> Option<u64> {
        match &self.outcome {
            Outcome::Solved { explored, .. } => Some(*explored),
            Outcome::Failed { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Solved { .. } => None,
            Outcome::Failed { error } => Some(error),
        }
    }
}

#[derive(Serialize, Deserialize)]
struct TourResultData {
    method: Method,
    time: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    path: Option<Vec<usize>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    paths_explored: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    states_computed: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl From<&TourResult> for TourResultData {
    fn from(result: &TourResult) -> Self {
        let mut data = TourResultData {
            method: result.method,
            time: result.time,
            cost: None,
            path: None,
            paths_explored: None,
            states_computed: None,
            error: None,
        };
        match &result.outcome {
            Outcome::Solved {
                cost,
                path,
                explored,
            } => {
                data.cost = Some(*cost);
                data.path = Some(path.clone());
                match result.method {
                    Method::BruteForce => data.paths_explored = Some(*explored),
                    Method::HeldKarp => data.states_computed = Some(*explored),
                }
            }
            Outcome::Failed { error } => data.error = Some(error.clone()),
        }
        data
    }
}

impl TourResultData {
    fn into_result(self) -> Result<TourResult, String> {
        let (explored, foreign) = match self.method {
            Method::BruteForce => (self.paths_explored, self.states_computed),
            Method::HeldKarp => (self.states_computed, self.paths_explored),
        };
        if foreign.is_some() {
            return Err(format!(
                "{} result carries a counter of another method",
                self.method
            ));
        }
        let outcome = match (self.cost, self.path, explored, self.error) {
            (Some(cost), Some(path), Some(explored), None) => Outcome::Solved {
                cost,
                path,
                explored,
            },
            (None, None, None, Some(error)) => Outcome::Failed { error },
            _ => {
                return Err(format!(
                    "{} result must carry either cost, path and {} or an error",
                    self.method,
                    self.method.counter_name()
                ))
            }
        };
        Ok(TourResult {
            method: self.method,
            time: self.time,
            outcome,
        })
    }
}

impl Serialize for TourResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        TourResultData::from(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for TourResult {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        TourResultData::deserialize(deserializer)?
            .into_result()
            .map_err(de::Error::custom)
    }
}

/// A matrix as supplied by callers: bare, or wrapped in `{"distance_matrix": ..}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum MatrixInput {
    Bare(Vec<Vec<f64>>),
    Wrapped { distance_matrix: Vec<Vec<f64>> },
}

impl MatrixInput {
    pub fn into_rows(self) -> Vec<Vec<f64>> {
        match self {
            MatrixInput::Bare(rows) => rows,
            MatrixInput::Wrapped { distance_matrix } => distance_matrix,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GraphReport {
    pub n: usize,
    pub distance_matrix: Vec<Vec<f64>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SolveReport {
    pub n: usize,
    pub results: Vec<TourResult>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BenchmarkRow {
    pub n: usize,
    pub methods: Vec<TourResult>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BenchmarkReport {
    pub results: Vec<BenchmarkRow>,
}
