//! # Quiz Prompt Templates
//!
//! This module contains the fixed prompt templates for the two pipeline
//! stages and the placeholder substitution used to fill them. Substitution
//! performs no escaping of user-supplied text; the remote model, not this
//! module, is responsible for interpreting malformed input.

use crate::errors::GenerateError;
use crate::types::GenerationRequest;
use regex::Regex;

/// The prompt sent to the question-generation stage.
///
/// Placeholders: `{text}`, `{number}`, `{subject}`, `{tone}`, `{response_json}`
pub const QUIZ_GENERATION_TEMPLATE: &str = "\
Text:{text}
You are an expert MCQ maker. Given the above text, it is your job to \
create a quiz of {number} multiple choice questions for {subject} students in {tone} tone.
Make sure the questions are not repeated and check all the questions to be conforming the text as well.
Make sure to format your response like RESPONSE_JSON below and use it as a guide. \
Ensure to make {number} MCQs
### RESPONSE_JSON
{response_json}
";

/// The prompt sent to the review stage, carrying the generated quiz.
///
/// Placeholders: `{subject}`, `{quiz}`
pub const QUIZ_REVIEW_TEMPLATE: &str = "\
You are an expert English grammarian and writer. Given a Multiple Choice Quiz for {subject} students, \
you need to evaluate the complexity of the questions and give a complete analysis of whether the students \
will be able to understand the questions and answer them. Only use at max 50 words for complexity analysis.
If the quiz is not at par with the cognitive and analytical abilities of the students, \
update the quiz questions which need to be changed and change the tone such that it perfectly fits the student abilities.
Quiz_MCQs:
{quiz}

Check from an expert English Writer of the above quiz:
";

/// The serialized example collection embedded in the generation prompt.
///
/// This is a formatting guide for the model, not a schema enforced on its
/// output.
pub const RESPONSE_JSON_EXAMPLE: &str = r#"{
  "1": {
    "mcq": "multiple choice question",
    "options": {
      "a": "choice here",
      "b": "choice here",
      "c": "choice here",
      "d": "choice here"
    },
    "correct": "correct answer"
  },
  "2": {
    "mcq": "multiple choice question",
    "options": {
      "a": "choice here",
      "b": "choice here",
      "c": "choice here",
      "d": "choice here"
    },
    "correct": "correct answer"
  },
  "3": {
    "mcq": "multiple choice question",
    "options": {
      "a": "choice here",
      "b": "choice here",
      "c": "choice here",
      "d": "choice here"
    },
    "correct": "correct answer"
  }
}"#;

/// Substitutes named `{placeholder}` variables into a template.
///
/// Every placeholder named by the template must have a non-blank variable;
/// otherwise this fails with [`GenerateError::MissingPlaceholder`], so a bad
/// request is rejected before any remote call. Substitution is a single pass
/// over the template, so braces inside substituted values are never
/// re-interpreted as placeholders.
pub fn fill(template: &str, vars: &[(&str, &str)]) -> Result<String, GenerateError> {
    let re = Regex::new(r"\{([a-z_]+)\}")?;

    for caps in re.captures_iter(template) {
        let name = &caps[1];
        match vars.iter().find(|(var, _)| *var == name) {
            Some((_, value)) if !value.trim().is_empty() => {}
            _ => {
                return Err(GenerateError::MissingPlaceholder {
                    name: name.to_string(),
                })
            }
        }
    }

    let filled = re.replace_all(template, |caps: &regex::Captures| {
        let name = &caps[1];
        vars.iter()
            .find(|(var, _)| *var == name)
            .map(|(_, value)| (*value).to_string())
            .unwrap_or_default()
    });

    Ok(filled.into_owned())
}

/// Builds the generation-stage prompt from a request.
pub fn generation_prompt(request: &GenerationRequest) -> Result<String, GenerateError> {
    let number = request.question_count.to_string();
    fill(
        QUIZ_GENERATION_TEMPLATE,
        &[
            ("text", request.source_text.as_str()),
            ("number", number.as_str()),
            ("subject", request.subject.as_str()),
            ("tone", request.tone.as_str()),
            ("response_json", request.format_example.as_str()),
        ],
    )
}

/// Builds the review-stage prompt from the subject and the generated quiz.
pub fn review_prompt(subject: &str, quiz: &str) -> Result<String, GenerateError> {
    fill(
        QUIZ_REVIEW_TEMPLATE,
        &[("subject", subject), ("quiz", quiz)],
    )
}
