//! Plain-text renderings of runs and the leaderboard.

use crate::scoreboard::LeaderboardRow;
use crate::settings::ANONYMOUS;
use bloomia_data::RunSummary;

/// `1234.5` ms renders as `1.235s`.
pub fn format_ms(ms: f64) -> String {
    let total = if ms.is_finite() {
        (ms + 0.5).floor().max(0.0) as u64
    } else {
        0
    };
    format!("{}.{:03}s", total / 1000, total % 1000)
}

fn percent(ratio: f64) -> String {
    format!("{}%", (ratio * 100.0 + 0.5).floor() as i64)
}

pub fn format_leaderboard(rows: &[LeaderboardRow]) -> String {
    if rows.is_empty() {
        return "No scores yet.".to_string();
    }
    let mut lines = vec![
        "rank  score   name              time     acc".to_string(),
        "----  -----   ----------------  -------  ----".to_string(),
    ];
    for (idx, row) in rows.iter().enumerate() {
        let name: String = row
            .name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(ANONYMOUS)
            .chars()
            .take(16)
            .collect();
        lines.push(format!(
            "{:>4}  {:>5}   {:<16}  {:>7}  {:>4}",
            idx + 1,
            row.score,
            name,
            format_ms(row.duration_ms.unwrap_or(0.0)),
            percent(row.accuracy.unwrap_or(0.0)),
        ));
    }
    lines.join("\n")
}

pub fn format_run(run: Option<&RunSummary>) -> String {
    let Some(run) = run else {
        return "Play until stability hits zero to end a run.".to_string();
    };
    [
        format!("score: {}", run.score),
        format!("time: {}", format_ms(run.duration_ms as f64)),
        format!(
            "moves: {} ({} valid / {} invalid)",
            run.moves, run.valid_moves, run.invalid_moves
        ),
        format!("accuracy: {}", percent(run.accuracy)),
        format!("seed: {}", run.seed),
        format!("end: {}", run.end_reason),
        format!("max tension: {:.3}", run.max_tension),
    ]
    .join("\n")
}
