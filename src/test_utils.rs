#[cfg(test)]
pub mod fixtures {
    use crate::models::{ActivityRequest, Audience, Length, TextRequest};

    pub const SOURCE_TEXT: &str = "A Primeira Guerra Mundial foi um conflito global que durou de 1914 a 1918.\n\
        Página 3\n\
        Envolveu as grandes potências da Europa, organizadas em duas alianças opostas.";

    /// Creates a summarize/explain request over the shared source text
    pub fn text_request(length: Length, audience: Audience) -> TextRequest {
        TextRequest::new(SOURCE_TEXT)
            .with_length(length)
            .with_audience(audience)
    }

    /// Creates an activity request over the shared source text
    pub fn activity_request(question_count: i32) -> ActivityRequest {
        ActivityRequest::new(SOURCE_TEXT, question_count)
    }

    /// A reply in the exact two-section quiz layout with `count` items per section
    pub fn quiz_reply(count: u32) -> String {
        let questions: Vec<String> = (1..=count).map(|i| format!("{}. Pergunta {}?", i, i)).collect();
        let answers: Vec<String> = (1..=count).map(|i| format!("{}. Resposta {}", i, i)).collect();
        format!(
            "Perguntas:\n{}\n\nRespostas:\n{}",
            questions.join("\n"),
            answers.join("\n")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::services::response_extractor::extract_quiz;

    #[test]
    fn test_fixtures_quiz_reply_parses_completely() {
        let quiz = extract_quiz(&quiz_reply(4), 4).unwrap();
        assert!(quiz.is_complete(4));
        assert_eq!(quiz.questions.get(&4).map(String::as_str), Some("Pergunta 4?"));
        assert_eq!(quiz.answers.get(&1).map(String::as_str), Some("Resposta 1"));
    }

    #[test]
    fn test_fixtures_activity_request() {
        let request = activity_request(3);
        assert_eq!(request.question_count, 3);
        assert_eq!(request.source_text, SOURCE_TEXT);
    }
}
