use crate::aggregate::float_values;
use crate::error::BikeShareError;
use crate::types::frames::columns::{
    CASUAL, FEELING_TEMPERATURE, HUMIDITY, REGISTERED, TEMPERATURE, TOTAL_RENTALS, WINDSPEED,
};
use crate::types::frames::daily_frame::DailyFrame;
use crate::types::frames::RentalFrame;
use serde::Serialize;

/// The weather measurements and rental counts correlated with each other.
pub const CORRELATED_COLUMNS: [&str; 7] = [
    TEMPERATURE,
    FEELING_TEMPERATURE,
    HUMIDITY,
    WINDSPEED,
    CASUAL,
    REGISTERED,
    TOTAL_RENTALS,
];

/// Symmetric matrix of Pearson coefficients between [`CORRELATED_COLUMNS`].
///
/// A cell is `None` when the coefficient is undefined: fewer than two rows, or a column
/// without variance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationMatrix {
    pub variables: Vec<&'static str>,
    pub cells: Vec<Vec<Option<f64>>>,
}

impl CorrelationMatrix {
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// The coefficient between two named variables.
    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.variables.iter().position(|v| *v == a)?;
        let j = self.variables.iter().position(|v| *v == b)?;
        self.cells[i][j]
    }
}

fn pearson(x: &[f64], y: &[f64]) -> Option<f64> {
    let n = x.len();
    if n < 2 || n != y.len() {
        return None;
    }
    let mean_x = x.iter().sum::<f64>() / n as f64;
    let mean_y = y.iter().sum::<f64>() / n as f64;

    let (mut cov, mut var_x, mut var_y) = (0.0, 0.0, 0.0);
    for (a, b) in x.iter().zip(y) {
        let (dx, dy) = (a - mean_x, b - mean_y);
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }
    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }
    Some((cov / (var_x * var_y).sqrt()).clamp(-1.0, 1.0))
}

/// Pairwise correlations over the daily subset. An empty subset gives an empty matrix.
pub fn correlation_matrix(daily: &DailyFrame) -> Result<CorrelationMatrix, BikeShareError> {
    if daily.is_empty() {
        return Ok(CorrelationMatrix {
            variables: Vec::new(),
            cells: Vec::new(),
        });
    }
    let columns = CORRELATED_COLUMNS
        .iter()
        .map(|name| float_values(daily.data(), name))
        .collect::<Result<Vec<_>, _>>()?;

    let cells = columns
        .iter()
        .map(|x| columns.iter().map(|y| pearson(x, y)).collect())
        .collect();
    Ok(CorrelationMatrix {
        variables: CORRELATED_COLUMNS.to_vec(),
        cells,
    })
}
