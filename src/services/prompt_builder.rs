use crate::{
    config::PromptLanguage,
    constants::prompts::{PromptWording, DELIMITER, ENGLISH, PORTUGUESE},
    errors::{AppError, AppResult},
    models::{ActivityRequest, GenerationRequest, TextRequest},
};

/// Example lines shown per section in the quiz format template.
const FORMAT_EXAMPLE_LINES: i32 = 2;

/// Renders a request into the instruction prompt sent to the model.
#[derive(Clone, Copy)]
pub struct PromptBuilder {
    wording: &'static PromptWording,
}

impl PromptBuilder {
    pub fn new(language: PromptLanguage) -> Self {
        let wording = match language {
            PromptLanguage::Portuguese => &PORTUGUESE,
            PromptLanguage::English => &ENGLISH,
        };
        Self { wording }
    }

    pub fn wording(&self) -> &'static PromptWording {
        self.wording
    }

    pub fn build(&self, request: &GenerationRequest) -> AppResult<String> {
        match request {
            GenerationRequest::Explain(r) => Ok(self.explain(r)),
            GenerationRequest::Summarize(r) => Ok(self.summarize(r)),
            GenerationRequest::Activity(r) => self.activity(r),
        }
    }

    pub fn explain(&self, request: &TextRequest) -> String {
        let w = self.wording;
        self.render(
            w.explain_role,
            &[
                w.ignore_layout.to_string(),
                w.explain_audience.get(request.audience).to_string(),
                w.explain_length.get(request.length).to_string(),
                w.delimiter_rule.to_string(),
                w.no_greetings.to_string(),
                w.explain_format.to_string(),
            ],
            None,
            w.explain_source_heading,
            &request.source_text,
        )
    }

    pub fn summarize(&self, request: &TextRequest) -> String {
        let w = self.wording;
        self.render(
            w.summary_role,
            &[
                w.ignore_layout.to_string(),
                w.summary_audience.get(request.audience).to_string(),
                w.summary_length.get(request.length).to_string(),
                w.delimiter_rule.to_string(),
                w.no_greetings.to_string(),
                w.summary_format.to_string(),
            ],
            None,
            w.summary_source_heading,
            &request.source_text,
        )
    }

    pub fn activity(&self, request: &ActivityRequest) -> AppResult<String> {
        let count = request.question_count;
        if count <= 0 {
            return Err(AppError::ValidationError(format!(
                "question count must be at least 1, got {}",
                count
            )));
        }

        let w = self.wording;
        let n = count.to_string();
        let template = self.quiz_template(count);

        Ok(self.render(
            w.quiz_role,
            &[
                w.ignore_layout.to_string(),
                w.quiz_quantity.replace("{n}", &n),
                w.quiz_difficulty.get(request.audience).to_string(),
                w.quiz_follow_format.to_string(),
                w.quiz_line_count.replace("{n}", &n),
            ],
            Some(&template),
            w.quiz_source_heading,
            &request.source_text,
        ))
    }

    fn render(
        &self,
        role: &str,
        instructions: &[String],
        template: Option<&str>,
        source_heading: &str,
        source_text: &str,
    ) -> String {
        let mut prompt = String::with_capacity(source_text.len() + 1024);
        prompt.push_str(role);
        prompt.push_str("\n\n");

        prompt.push_str(self.wording.instructions_heading);
        prompt.push('\n');
        for instruction in instructions {
            prompt.push_str("- ");
            prompt.push_str(instruction);
            prompt.push('\n');
        }

        if let Some(template) = template {
            prompt.push('\n');
            prompt.push_str(template);
            prompt.push('\n');
        }

        prompt.push('\n');
        prompt.push_str(source_heading);
        prompt.push('\n');
        prompt.push_str(DELIMITER);
        prompt.push_str(source_text);
        prompt.push_str(DELIMITER);
        prompt
    }

    fn quiz_template(&self, count: i32) -> String {
        let w = self.wording;
        let shown = count.min(FORMAT_EXAMPLE_LINES);
        let mut lines = vec![w.quiz_format_heading.to_string(), w.questions_marker.to_string()];

        for i in 1..=shown {
            lines.push(format!("{}. {} {}", i, w.quiz_question_example, i));
        }
        if count > shown {
            lines.push("...".to_string());
        }

        lines.push(String::new());
        lines.push(w.answers_marker.to_string());
        for i in 1..=shown {
            lines.push(format!("{}. {} {}", i, w.quiz_answer_example, i));
        }
        if count > shown {
            lines.push("...".to_string());
        }

        lines.join("\n")
    }
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new(PromptLanguage::default())
    }
}
