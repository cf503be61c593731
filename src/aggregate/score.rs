//! Score conventions and rounding.
//!
//! The tournament data carries two families of score columns: four individual
//! criteria (`k1..k4`) with an optional bonus (`l`), and seven team criteria
//! (`t1..t7`) with an optional team bonus (`tl`). Different views combine
//! them differently, and the conventions are deliberately kept as separate
//! functions: the leaderboard sums raw columns, while averages divide by the
//! number of columns the judge actually filled in.

use serde::Deserialize;

use super::ScoreRow;

/// Which columns make up a row's total for leaderboard aggregation.
///
/// Deployments of this system have disagreed on the answer, so it is a
/// configuration choice rather than a constant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TotalFormula {
    /// All thirteen score columns plus both bonuses.
    #[default]
    Combined,
    /// Individual criteria and bonus only (`k1..k4 + l`).
    Individual,
    /// Team criteria and bonus only (`t1..t7 + tl`).
    Team,
}

/// Round half-up to one decimal place.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}

/// Round half-up to two decimal places.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0 + 0.5).floor() / 100.0
}

fn sum(parts: &[Option<f64>]) -> f64 {
    parts.iter().map(|part| part.unwrap_or(0.0)).sum()
}

fn individual_sum(row: &ScoreRow) -> f64 {
    sum(&[row.k1, row.k2, row.k3, row.k4, row.l])
}

fn team_sum(row: &ScoreRow) -> f64 {
    sum(&[
        row.t1, row.t2, row.t3, row.t4, row.t5, row.t6, row.t7, row.tl,
    ])
}

/// A row's total under the given leaderboard formula. Null columns count as 0.
pub fn row_total(row: &ScoreRow, formula: TotalFormula) -> f64 {
    match formula {
        TotalFormula::Combined => individual_sum(row) + team_sum(row),
        TotalFormula::Individual => individual_sum(row),
        TotalFormula::Team => team_sum(row),
    }
}

/// The judged-row score used by judge averages and both history views.
///
/// Divides by 4 when the bonus column is null and by 5 when it is present:
/// the bonus only widens the divisor when the judge actually awarded it.
pub fn judged_row_score(row: &ScoreRow) -> f64 {
    let total = sum(&[row.k1, row.k2, row.k3, row.k4]) + row.l.unwrap_or(0.0);
    let divisor = if row.l.is_some() { 5.0 } else { 4.0 };
    total / divisor
}

/// The team-row score used by participant statistics (7-or-8 divisor).
pub fn team_row_score(row: &ScoreRow) -> f64 {
    let total = sum(&[row.t1, row.t2, row.t3, row.t4, row.t5, row.t6, row.t7])
        + row.tl.unwrap_or(0.0);
    let divisor = if row.tl.is_some() { 8.0 } else { 7.0 };
    total / divisor
}

/// Game-type-conditional score used for event winner computation.
///
/// Game types 1 and 3 (`main`, `free`) count the individual bonus alone;
/// types 2 and 4 (`team main`, `free team`) count the team columns. Unknown
/// types contribute nothing.
pub fn game_type_score(row: &ScoreRow, game_type: Option<i64>) -> f64 {
    match game_type {
        Some(1) | Some(3) => row.l.unwrap_or(0.0),
        Some(2) | Some(4) => team_sum(row),
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_with_scores(k: [Option<f64>; 4], l: Option<f64>) -> ScoreRow {
        ScoreRow {
            k1: k[0],
            k2: k[1],
            k3: k[2],
            k4: k[3],
            l,
            ..ScoreRow::default()
        }
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round1(48.25), 48.3);
        assert_eq!(round1(48.24), 48.2);
        assert_eq!(round1(48.0), 48.0);
        assert_eq!(round2(7.125), 7.13);
        assert_eq!(round2(7.124), 7.12);
    }

    #[test]
    fn test_judged_row_divisor_is_four_without_bonus() {
        let row = row_with_scores([Some(5.0), Some(5.0), Some(5.0), Some(5.0)], None);
        assert_eq!(judged_row_score(&row), 5.0);
    }

    #[test]
    fn test_judged_row_divisor_is_five_with_bonus() {
        let row = row_with_scores([Some(5.0), Some(5.0), Some(5.0), Some(5.0)], Some(10.0));
        assert_eq!(judged_row_score(&row), 6.0);
    }

    #[test]
    fn test_null_columns_count_as_zero_in_totals() {
        let row = row_with_scores([Some(3.0), None, None, None], None);
        assert_eq!(row_total(&row, TotalFormula::Individual), 3.0);
        assert_eq!(row_total(&row, TotalFormula::Team), 0.0);
        assert_eq!(row_total(&row, TotalFormula::Combined), 3.0);
    }

    #[test]
    fn test_game_type_score_branches() {
        let row = ScoreRow {
            l: Some(4.0),
            t1: Some(1.0),
            t2: Some(2.0),
            tl: Some(0.5),
            ..ScoreRow::default()
        };
        assert_eq!(game_type_score(&row, Some(1)), 4.0);
        assert_eq!(game_type_score(&row, Some(3)), 4.0);
        assert_eq!(game_type_score(&row, Some(2)), 3.5);
        assert_eq!(game_type_score(&row, Some(4)), 3.5);
        assert_eq!(game_type_score(&row, None), 0.0);
        assert_eq!(game_type_score(&row, Some(9)), 0.0);
    }
}
