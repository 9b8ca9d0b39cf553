//! Natural-language prompts sent to the generation provider.
//!
//! All functions here are pure: the same request always yields the same prompt.

use crate::models::{EmailAction, EmailEditRequest, SummaryRequest, DEFAULT_STYLE};

pub const DOCUMENT_START_MARKER: &str = "---DOCUMENT CONTEXT---";
pub const DOCUMENT_END_MARKER: &str = "---END DOCUMENT---";

/// `tone` alone for the default style, otherwise `"<tone> and <style>"`.
pub fn tone_descriptor(tone: &str, style: &str) -> String {
    if style == DEFAULT_STYLE {
        tone.to_string()
    } else {
        format!("{tone} and {style}")
    }
}

fn keywords_clause(keywords: &str) -> Option<String> {
    if keywords.is_empty() {
        return None;
    }
    Some(format!(
        "Naturally incorporate the following keywords: {keywords}."
    ))
}

fn document_block(document_text: &str) -> Option<String> {
    if document_text.is_empty() {
        return None;
    }
    Some(format!(
        "Use the following document to inform the email's content. Refer to the skills, \
         experiences, or other details from this document to make the email more \
         personalized and relevant.\n{DOCUMENT_START_MARKER}\n{document_text}\n{DOCUMENT_END_MARKER}"
    ))
}

/// Appends the optional keyword sentence and document block after `intro`.
fn with_guidance(intro: String, request: &EmailEditRequest) -> String {
    let mut prompt = intro;
    if let Some(clause) = keywords_clause(&request.keywords) {
        prompt.push(' ');
        prompt.push_str(&clause);
    }
    if let Some(block) = document_block(&request.document_text) {
        prompt.push('\n');
        prompt.push_str(&block);
    }
    prompt
}

/// Builds the complete/refine prompt for a job-application or recruiter email.
pub fn build_prompt(request: &EmailEditRequest, action: EmailAction) -> String {
    let descriptor = tone_descriptor(&request.tone, &request.style);

    match action {
        EmailAction::Complete => {
            let intro = format!(
                "As an AI assistant, complete the email below. Maintain a {descriptor} tone. \
                 This email is for a job application or recruiter message."
            );
            format!(
                "{}\nEmail start: '{}'\nComplete the email naturally. \
                 The output should only be the completed email text.",
                with_guidance(intro, request),
                request.email_text
            )
        }
        EmailAction::Refine => {
            let intro = format!(
                "As an AI assistant, refine the email below. Make it {descriptor}. \
                 Correct grammar and improve clarity, professionalism, and confidence \
                 for a job application or recruiter message."
            );
            format!(
                "{}\nOriginal Email: '{}'\nRefined Email:",
                with_guidance(intro, request),
                request.email_text
            )
        }
    }
}

/// Fixed bullet-point summary prompt.
pub fn build_summary_prompt(request: &SummaryRequest) -> String {
    format!(
        "Summarize the following text concisely. Highlight the key information, main points, \
         and any questions being asked. Present the summary in clear bullet points.\n\
         Text to summarize: '{}'\nSummary:",
        request.email_text
    )
}
