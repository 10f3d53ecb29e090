use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Serialize)]
pub struct WeeklyScore {
    pub name: &'static str,
    pub score: u32,
}

#[derive(Debug, Serialize)]
pub struct ProgressReport {
    pub stats: Vec<Stat>,
    pub weekly_scores: Vec<WeeklyScore>,
}

// Demo figures; nothing records real activity yet.
pub fn progress_report() -> ProgressReport {
    ProgressReport {
        stats: vec![
            Stat { label: "Quizzes Taken", value: "12" },
            Stat { label: "Avg. Score", value: "82%" },
            Stat { label: "Interviews Done", value: "5" },
            Stat { label: "Skills Mastered", value: "8" },
        ],
        weekly_scores: [65, 72, 70, 85, 91]
            .into_iter()
            .zip(["Week 1", "Week 2", "Week 3", "Week 4", "Week 5"])
            .map(|(score, name)| WeeklyScore { name, score })
            .collect(),
    }
}

/// GET /api/v1/progress
pub async fn handle_progress() -> Json<ProgressReport> {
    Json(progress_report())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_shape() {
        let report = progress_report();
        assert_eq!(report.stats.len(), 4);
        assert_eq!(report.weekly_scores.len(), 5);
        assert_eq!(report.weekly_scores[4].name, "Week 5");
        assert_eq!(report.weekly_scores[4].score, 91);
    }
}
