//! Judge statistics and per-judge scoring history.

use std::collections::BTreeMap;

use serde::Serialize;

use super::ScoreRow;
use super::history::event_date_key;
use super::score::{judged_row_score, round2};

/// Aggregate view of one judge: how generous they score, and how much.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JudgeStat {
    /// 1-based list position after sorting.
    pub id: i64,
    pub judge_name: String,
    pub avg_given_score: f64,
    pub judged_rows: i64,
}

/// One scored work in a judge's history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JudgeHistoryEntry {
    pub event_id: i64,
    pub round: i64,
    pub date: Option<String>,
    pub time: Option<String>,
    pub judge_name: String,
    pub score: f64,
    pub k1: Option<f64>,
    pub k2: Option<f64>,
    pub k3: Option<f64>,
    pub k4: Option<f64>,
    pub l: Option<f64>,
}

/// Average judged-row score per judge, most generous first.
///
/// A judge only appears once they have a row, so the divisor is never zero;
/// judges with no rows are absent from the output entirely.
pub fn build_judge_averages(rows: &[ScoreRow]) -> Vec<JudgeStat> {
    let mut groups: BTreeMap<&str, (f64, i64)> = BTreeMap::new();
    for row in rows {
        let entry = groups.entry(row.judge_name.as_str()).or_insert((0.0, 0));
        entry.0 += judged_row_score(row);
        entry.1 += 1;
    }

    let mut stats: Vec<JudgeStat> = groups
        .into_iter()
        .map(|(name, (sum, count))| JudgeStat {
            id: 0,
            judge_name: name.to_string(),
            avg_given_score: round2(sum / count as f64),
            judged_rows: count,
        })
        .collect();

    stats.sort_by(|a, b| b.avg_given_score.total_cmp(&a.avg_given_score));
    for (position, stat) in stats.iter_mut().enumerate() {
        stat.id = position as i64 + 1;
    }
    stats
}

/// Every row a judge has written, newest first (event date, then time).
pub fn build_judge_history(rows: &[ScoreRow], judge_name: &str) -> Vec<JudgeHistoryEntry> {
    let mut entries: Vec<(Option<String>, JudgeHistoryEntry)> = rows
        .iter()
        .filter(|row| row.judge_name == judge_name)
        .map(|row| {
            let entry = JudgeHistoryEntry {
                event_id: row.event_id,
                round: row.round,
                date: row.date.clone(),
                time: row.time.clone(),
                judge_name: row.judge_name.clone(),
                score: round2(judged_row_score(row)),
                k1: row.k1,
                k2: row.k2,
                k3: row.k3,
                k4: row.k4,
                l: row.l,
            };
            (event_date_key(row.date.as_deref()), entry)
        })
        .collect();

    entries.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| b.1.time.cmp(&a.1.time)));
    entries.into_iter().map(|(_, entry)| entry).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(judge: &str, k: f64, l: Option<f64>, date: &str, time: &str) -> ScoreRow {
        ScoreRow {
            event_id: 1,
            round: 1,
            participant_id: Some(1),
            participant_name: "A".to_string(),
            judge_name: judge.to_string(),
            k1: Some(k),
            k2: Some(k),
            k3: Some(k),
            k4: Some(k),
            l,
            date: Some(date.to_string()),
            time: Some(time.to_string()),
            ..ScoreRow::default()
        }
    }

    #[test]
    fn test_judge_averages_use_row_divisor() {
        let rows = vec![
            // 4-term row: 20 / 4 = 5.0
            row("strict", 5.0, None, "01.01.2024", "10:00"),
            // 5-term row: (28 + 2) / 5 = 6.0
            row("generous", 7.0, Some(2.0), "01.01.2024", "10:00"),
        ];
        let stats = build_judge_averages(&rows);
        assert_eq!(stats.len(), 2);
        assert_eq!(stats.first().unwrap().judge_name, "generous");
        assert_eq!(stats.first().unwrap().avg_given_score, 6.0);
        assert_eq!(stats.get(1).unwrap().avg_given_score, 5.0);
        assert_eq!(stats.first().unwrap().judged_rows, 1);
    }

    #[test]
    fn test_no_rows_no_judges() {
        assert!(build_judge_averages(&[]).is_empty());
    }

    #[test]
    fn test_judge_history_sorted_by_date_then_time() {
        let rows = vec![
            row("j", 4.0, None, "01.01.2024", "09:00"),
            row("j", 5.0, None, "02.01.2024", "09:00"),
            row("j", 6.0, None, "02.01.2024", "11:00"),
            row("other", 9.0, None, "03.01.2024", "09:00"),
        ];
        let history = build_judge_history(&rows, "j");
        let scores: Vec<f64> = history.iter().map(|entry| entry.score).collect();
        assert_eq!(scores, vec![6.0, 5.0, 4.0]);
    }
}
