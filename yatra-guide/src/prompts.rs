//! Prompt construction for the tour-guide persona

/// Prompt for a full place introduction in the requested reply language.
pub fn place_info(place: &str, language: &str) -> String {
    format!(
        "Imagine you are a lively tourist guide explaining {place}.\n\
         Reply in {language}. Keep it simple, fun, and engaging.\n\
         Structure your answer as:\n\n\
         Introduction: 4-5 lines, friendly and detailed\n\
         Attractions: 5-6 bullet points with short descriptions\n\
         Travel Tips: 3-4 practical tips for tourists\n\n\
         Avoid emojis so the answer reads well aloud. Make it informative and enjoyable."
    )
}

/// Prompt for a follow-up question about the place under discussion.
pub fn doubt(place: &str, question: &str, language: &str) -> String {
    format!(
        "You are guiding a tourist about {place}.\n\
         They asked: \"{question}\".\n\
         Reply in {language}, keep it clear, detailed, and friendly.\n\
         Add 1 fun fact or travel tip if relevant. Avoid emojis so the answer reads well aloud."
    )
}
