use axum::{extract::Path, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

pub struct QuizQuestion {
    pub id: u32,
    pub question: &'static str,
    pub options: [&'static str; 4],
    pub answer: &'static str,
}

pub static QUIZ: [QuizQuestion; 3] = [
    QuizQuestion {
        id: 1,
        question: "What will be the output of `console.log(typeof null);` in JavaScript?",
        options: ["null", "undefined", "object", "string"],
        answer: "object",
    },
    QuizQuestion {
        id: 2,
        question: "Which of the following is NOT a valid CSS position value?",
        options: ["static", "relative", "center", "absolute"],
        answer: "center",
    },
    QuizQuestion {
        id: 3,
        question: "What does `useState` return in a React functional component?",
        options: [
            "A state value",
            "A function to update state",
            "An array with a state value and an update function",
            "An object with state properties",
        ],
        answer: "An array with a state value and an update function",
    },
];

/// A question as shown to the user (no answer).
#[derive(Debug, Serialize)]
pub struct QuestionView {
    pub id: u32,
    /// 1-based position, for "Question N of M".
    pub number: usize,
    pub total: usize,
    pub question: &'static str,
    pub options: Vec<&'static str>,
}

#[derive(Debug, Deserialize)]
pub struct AnswerRequest {
    pub question_id: u32,
    pub option: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct AnswerResult {
    pub correct: bool,
    pub answer: &'static str,
    /// Index of the question to show after this one.
    pub next_index: usize,
}

#[derive(Debug, Serialize)]
pub struct CodingChallenge {
    pub prompt: &'static str,
    pub starter_code: &'static str,
}

/// Questions cycle: index past the end wraps around.
pub fn question_at(index: usize) -> QuestionView {
    let position = index % QUIZ.len();
    let q = &QUIZ[position];
    QuestionView {
        id: q.id,
        number: position + 1,
        total: QUIZ.len(),
        question: q.question,
        options: q.options.to_vec(),
    }
}

pub fn check_answer(question_id: u32, option: &str) -> Result<AnswerResult, AppError> {
    let position = QUIZ
        .iter()
        .position(|q| q.id == question_id)
        .ok_or_else(|| AppError::NotFound(format!("Question {question_id} not found")))?;
    let q = &QUIZ[position];
    if !q.options.iter().any(|o| *o == option) {
        return Err(AppError::Validation(format!(
            "'{option}' is not an option for question {question_id}"
        )));
    }
    Ok(AnswerResult {
        correct: q.answer == option,
        answer: q.answer,
        next_index: (position + 1) % QUIZ.len(),
    })
}

/// GET /api/v1/aptitude/questions/:index
pub async fn handle_question(Path(index): Path<usize>) -> Json<QuestionView> {
    Json(question_at(index))
}

/// POST /api/v1/aptitude/answer
pub async fn handle_answer(Json(req): Json<AnswerRequest>) -> Result<Json<AnswerResult>, AppError> {
    Ok(Json(check_answer(req.question_id, &req.option)?))
}

/// GET /api/v1/aptitude/challenge
pub async fn handle_challenge() -> Json<CodingChallenge> {
    Json(CodingChallenge {
        prompt: "Write a JavaScript function to reverse a string.",
        starter_code: "function reverseString(str) {\n  // your code here\n}",
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_questions_cycle() {
        assert_eq!(question_at(0).id, 1);
        assert_eq!(question_at(2).number, 3);
        assert_eq!(question_at(3).id, 1);
        assert_eq!(question_at(4).total, 3);
    }

    #[test]
    fn test_every_answer_is_an_option() {
        for q in &QUIZ {
            assert!(q.options.contains(&q.answer), "question {}", q.id);
        }
    }

    #[test]
    fn test_check_answer() {
        let right = check_answer(2, "center").unwrap();
        assert!(right.correct);
        assert_eq!(right.next_index, 2);

        let wrong = check_answer(3, "A state value").unwrap();
        assert!(!wrong.correct);
        assert_eq!(wrong.answer, "An array with a state value and an update function");
        assert_eq!(wrong.next_index, 0);
    }

    #[test]
    fn test_check_answer_rejects_unknowns() {
        assert!(matches!(check_answer(99, "object"), Err(AppError::NotFound(_))));
        assert!(matches!(check_answer(1, "banana"), Err(AppError::Validation(_))));
    }
}
