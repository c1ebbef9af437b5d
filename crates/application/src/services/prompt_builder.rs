//! Prompt construction
//!
//! Renders the final text sent to the backing model. The general builder
//! applies the persona preamble; the three specialized builders replace it
//! with fixed instructional templates and pin their own temperatures.
//!
//! Interpolation is literal string substitution. User content is not
//! escaped or filtered before it lands in the prompt; prompt-injection
//! hardening is out of scope for this service and must happen upstream.

use domain::AssistRequest;

/// Fixed temperature for summarization: near-deterministic condensation
pub const SUMMARIZE_TEMPERATURE: f32 = 0.3;
/// Fixed temperature for concept explanation
pub const EXPLAIN_TEMPERATURE: f32 = 0.5;
/// Fixed temperature for homework guidance
pub const HOMEWORK_TEMPERATURE: f32 = 0.4;

const PERSONA_PREAMBLE: &str = "You are a student assistant. Answer in English, \
be friendly and helpful.\n\
If you do not know the answer, say so honestly and suggest alternatives.\n\n";

/// Render the general chat prompt
///
/// Persona preamble, then optional context block, then optional book-ID
/// line, then the student question and the answer cue.
#[must_use]
pub fn build_general_prompt(request: &AssistRequest) -> String {
    let mut prompt = String::from(PERSONA_PREAMBLE);

    if !request.context.is_empty() {
        prompt.push_str(&format!("Context:\n{}\n\n", request.context));
    }

    if let Some(book_id) = &request.book_id {
        prompt.push_str(&format!("This question relates to book ID: {book_id}\n\n"));
    }

    prompt.push_str(&format!(
        "Student question: {}\n\nAnswer:",
        request.message
    ));

    prompt
}

/// Render the summarization prompt
///
/// `context` is the source text, `message` the focus question.
#[must_use]
pub fn build_summarize_prompt(message: &str, context: &str) -> String {
    format!(
        "Create a structured summary of the following text.\n\
         Cover:\n\
         1. Main themes\n\
         2. Key ideas\n\
         3. Important conclusions\n\
         4. Practical applications (if any)\n\n\
         Text to analyze:\n{context}\n\n\
         Question/Focus: {message}\n\n\
         The summary should be structured and easy for students to follow."
    )
}

/// Render the concept-explanation prompt
///
/// `message` names the concept, `context` is supplementary material.
#[must_use]
pub fn build_explain_prompt(message: &str, context: &str) -> String {
    format!(
        "Explain the following concept in simple words suitable for students:\n\n\
         Concept: {message}\n\n\
         Context: {context}\n\n\
         Please:\n\
         1. Give a simple definition\n\
         2. Provide 2-3 examples\n\
         3. Explain why it matters\n\
         4. Suggest ways to remember or understand it better\n\n\
         Avoid complex terms without explanation."
    )
}

/// Render the homework-guidance prompt
///
/// `message` is the assignment text, `context` the available materials.
/// The template forbids handing over a finished answer.
#[must_use]
pub fn build_homework_prompt(message: &str, context: &str) -> String {
    format!(
        "Help the student with this assignment, but do NOT give a ready answer.\n\
         Instead:\n\
         1. Point toward the right approach\n\
         2. Ask guiding questions\n\
         3. Explain solution methods\n\
         4. Hint where to look for information\n\n\
         Assignment: {message}\n\n\
         Available materials: {context}\n\n\
         Remember: the goal is to teach the student to think independently!"
    )
}
