//! Empathetic tone prefixes
//!
//! Cosmetic post-processing: the reply the step logic produced gets an
//! empathetic prefix when the user's own words match a trigger. Applied
//! after state transitions and never influences them. First match in
//! priority order wins.

const STRESS_WORDS: [&str; 4] = ["stressed", "tension", "nervous", "worried"];

/// Prefix `reply` based on keywords in the original utterance
pub fn apply_tone(reply: &str, input: &str) -> String {
    let text = input.to_lowercase();

    if text.contains("birthday") {
        return format!("That sounds like a lovely birthday celebration. {}", reply);
    }
    if text.contains("anniversary") {
        return format!("Happy anniversary in advance. {}", reply);
    }
    if STRESS_WORDS.iter().any(|w| text.contains(w)) {
        return format!(
            "I understand this is important for you. I will make it easy. {}",
            reply
        );
    }
    if text.contains("first time") {
        return format!("I am glad you are trying this. {}", reply);
    }
    reply.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neutral_input_passes_through() {
        assert_eq!(apply_tone("What time?", "7 pm works"), "What time?");
    }

    #[test]
    fn triggers_prefix_the_reply() {
        let reply = apply_tone("Noted.", "it is my mom's Birthday dinner");
        assert!(reply.starts_with("That sounds like a lovely birthday celebration."));

        let reply = apply_tone("Noted.", "I am a bit nervous about this");
        assert!(reply.starts_with("I understand this is important for you."));

        let reply = apply_tone("Noted.", "our first time eating out here");
        assert!(reply.starts_with("I am glad you are trying this."));
    }

    #[test]
    fn birthday_outranks_stress_words() {
        let reply = apply_tone("Noted.", "stressed about the birthday party");
        assert!(reply.starts_with("That sounds like a lovely birthday celebration."));
    }
}
