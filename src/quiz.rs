use rand::seq::IndexedRandom;

use crate::db::Question;

/// Picks the next quiz question uniformly at random from the candidates that
/// have not been shown yet. `None` means the pool is exhausted and the game is
/// over. The unseen subset is computed up front, so a draw never has to retry.
pub fn pick_question(candidates: Vec<Question>, previous: &[i64]) -> Option<Question> {
    let unseen: Vec<Question> = candidates
        .into_iter()
        .filter(|q| !previous.contains(&q.id))
        .collect();
    unseen.choose(&mut rand::rng()).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: i64) -> Question {
        Question {
            id,
            question: format!("question {id}"),
            answer: "answer".to_owned(),
            category: 1,
            difficulty: 1,
        }
    }

    #[test]
    fn never_repeats_a_previous_question() {
        let candidates: Vec<Question> = (1..=5).map(question).collect();
        let previous = vec![1, 2, 4];
        for _ in 0..50 {
            let picked = pick_question(candidates.clone(), &previous)
                .expect("two questions are still unseen");
            assert!(!previous.contains(&picked.id));
        }
    }

    #[test]
    fn exhausted_when_everything_was_shown() {
        let candidates: Vec<Question> = (1..=3).map(question).collect();
        assert!(pick_question(candidates, &[1, 2, 3]).is_none());
    }

    #[test]
    fn exhausted_on_empty_candidate_set() {
        assert!(pick_question(Vec::new(), &[]).is_none());
    }

    #[test]
    fn sole_unseen_question_is_always_picked() {
        let candidates: Vec<Question> = (1..=3).map(question).collect();
        let picked = pick_question(candidates, &[1, 3]).unwrap();
        assert_eq!(picked.id, 2);
    }
}
