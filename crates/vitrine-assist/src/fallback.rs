//! Canned replies served when the upstream completion call fails.

use rand::seq::SliceRandom;

/// Fallback replies, one picked uniformly at random per failed request.
const FALLBACK_RESPONSES: &[&str] = &[
    "Thanks for reaching out! How can I help you today?",
    "I can answer questions about cybersecurity consulting, Python development, \
     Discord bots, and full-stack web work. What project do you have in mind?",
    "That's a great question! For a detailed discussion, please leave your contact \
     details through the contact form.",
    "I'd be happy to help with that. Would you like to schedule a consultation \
     through the contact form?",
];

/// Appended so visitors know the reply is canned, not the live assistant.
const UNAVAILABLE_SUFFIX: &str = " (AI temporarily unavailable)";

/// Picks a random fallback reply.
pub fn fallback_response() -> String {
    let base = FALLBACK_RESPONSES
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(FALLBACK_RESPONSES[0]);
    format!("{base}{UNAVAILABLE_SUFFIX}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_is_from_the_canned_list() {
        for _ in 0..50 {
            let reply = fallback_response();
            let base = reply
                .strip_suffix(UNAVAILABLE_SUFFIX)
                .expect("reply should end with the unavailable suffix");
            assert!(
                FALLBACK_RESPONSES.contains(&base),
                "unexpected fallback: {base:?}"
            );
        }
    }

    #[test]
    fn all_responses_are_reachable() {
        // 200 draws over 4 options: the chance any option never appears is
        // negligible, so a miss indicates broken selection.
        let mut seen = [false; 4];
        for _ in 0..200 {
            let reply = fallback_response();
            for (i, base) in FALLBACK_RESPONSES.iter().enumerate() {
                if reply.starts_with(base) {
                    seen[i] = true;
                }
            }
        }
        assert!(seen.iter().all(|s| *s), "every fallback should be drawable");
    }
}
