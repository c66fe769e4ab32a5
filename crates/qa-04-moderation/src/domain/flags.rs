//! Flag application.

use shared_types::{Answer, Flag, Question, Timestamp, UserId};

fn make_flag(user: &UserId, reason: &str, now: Timestamp) -> Flag {
    Flag {
        user_id: user.clone(),
        reason: reason.to_string(),
        created_at: now,
    }
}

pub fn flag_question(question: &mut Question, user: &UserId, reason: &str, now: Timestamp) {
    question.flags.push(make_flag(user, reason, now));
    question.is_flagged = true;
}

pub fn flag_answer(answer: &mut Answer, user: &UserId, reason: &str, now: Timestamp) {
    answer.flags.push(make_flag(user, reason, now));
    answer.is_flagged = true;
}
