// src/scoring.rs
use crate::models::{AnswerSet, Quiz, ScoreResult};

/// Scores a set of answers against a quiz's answer key.
///
/// Every question is marked: a selection equal to the question's correct
/// option index is correct, anything else (including no selection at all)
/// is incorrect. Unanswered questions count toward the total, never get
/// excluded. Pure and deterministic; selections pointing at nonexistent
/// questions or options are a caller contract violation and are simply
/// never marked correct here.
pub fn score(quiz: &Quiz, answers: &AnswerSet) -> ScoreResult {
    let per_question_correctness: Vec<bool> = quiz
        .questions
        .iter()
        .enumerate()
        .map(|(i, question)| {
            answers.selections.get(&i) == Some(&question.correct_option_index)
        })
        .collect();

    let correct_count = per_question_correctness.iter().filter(|c| **c).count();

    ScoreResult {
        correct_count,
        total_count: quiz.questions.len(),
        per_question_correctness,
    }
}
