use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    constants::prompts::{ANSWERS_MARKERS, DELIMITER, QUESTIONS_MARKERS, QUIZ_SOURCE_HEADINGS},
    errors::{AppError, AppResult},
    models::QuizSet,
};

static NUMBERED_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]+\.\s*").expect("NUMBERED_PREFIX is a valid regex pattern")
});

/// Pulls the delimited content out of an explain/summarize reply.
///
/// The trimmed reply is split on `---` and the second segment is returned.
/// A reply without any delimiter comes back trimmed but otherwise unchanged.
pub fn extract_text(raw: &str) -> String {
    let trimmed = raw.trim();
    match trimmed.split(DELIMITER).nth(1) {
        Some(content) => content.trim().to_string(),
        None => trimmed.to_string(),
    }
}

/// Parses a quiz reply into 1-based question and answer maps.
///
/// A missing section yields an empty map for that side. Numbered lines past
/// `question_count` are ignored and positions the model skipped stay absent.
pub fn extract_quiz(raw: &str, question_count: i32) -> AppResult<QuizSet> {
    if question_count <= 0 {
        return Err(AppError::ValidationError(format!(
            "question count must be at least 1, got {}",
            question_count
        )));
    }
    let expected = question_count as usize;

    let questions = numbered_items(questions_block(raw));
    let answers = numbered_items(answers_block(raw));

    Ok(QuizSet {
        questions: index_items(questions, expected),
        answers: index_items(answers, expected),
    })
}

fn questions_block(raw: &str) -> &str {
    match after_first(raw, &QUESTIONS_MARKERS) {
        Some(rest) => before_first(rest, &ANSWERS_MARKERS),
        None => "",
    }
}

fn answers_block(raw: &str) -> &str {
    match after_first(raw, &ANSWERS_MARKERS) {
        Some(rest) => before_first(rest, &QUIZ_SOURCE_HEADINGS),
        None => "",
    }
}

/// Text following the earliest occurrence of any marker.
fn after_first<'a>(text: &'a str, markers: &[&str]) -> Option<&'a str> {
    markers
        .iter()
        .filter_map(|marker| text.find(marker).map(|at| (at, at + marker.len())))
        .min()
        .map(|(_, start)| &text[start..])
}

/// Text preceding the earliest occurrence of any marker, or all of it.
fn before_first<'a>(text: &'a str, markers: &[&str]) -> &'a str {
    markers
        .iter()
        .filter_map(|marker| text.find(marker))
        .min()
        .map_or(text, |end| &text[..end])
}

fn numbered_items(block: &str) -> Vec<&str> {
    block
        .lines()
        .map(str::trim)
        .filter_map(|line| NUMBERED_PREFIX.find(line).map(|m| &line[m.end()..]))
        .collect()
}

fn index_items(items: Vec<&str>, expected: usize) -> BTreeMap<u32, String> {
    items
        .into_iter()
        .take(expected)
        .enumerate()
        .map(|(i, item)| (i as u32 + 1, item.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(u32, &str)]) -> BTreeMap<u32, String> {
        entries
            .iter()
            .map(|(k, v)| (*k, v.to_string()))
            .collect()
    }

    #[test]
    fn test_text_between_delimiters() {
        assert_eq!(extract_text("---Resumo curto aqui---"), "Resumo curto aqui");
        assert_eq!(
            extract_text("\n  ---\n  Conteúdo com espaço  \n---  \n"),
            "Conteúdo com espaço"
        );
    }

    #[test]
    fn test_text_without_delimiter_is_trimmed_identity() {
        assert_eq!(extract_text("  Só o conteúdo.\n"), "Só o conteúdo.");
        assert_eq!(extract_text(""), "");
    }

    #[test]
    fn test_text_with_only_leading_delimiter() {
        assert_eq!(extract_text("---Conteúdo sem fechamento"), "Conteúdo sem fechamento");
    }

    #[test]
    fn test_text_with_preamble_takes_second_segment() {
        let reply = "Claro! Aqui está:\n---O conteúdo real---\nEspero ter ajudado.";
        assert_eq!(extract_text(reply), "O conteúdo real");
    }

    #[test]
    fn test_text_with_extra_dashes_in_body() {
        let reply = "---Parte um---Parte dois---";
        assert_eq!(extract_text(reply), "Parte um");
    }

    #[test]
    fn test_quiz_well_formed_reply() {
        let reply = "Perguntas:\n1. A?\n2. B?\n\nRespostas:\n1. X\n2. Y";
        let quiz = extract_quiz(reply, 2).unwrap();

        assert_eq!(quiz.questions, map(&[(1, "A?"), (2, "B?")]));
        assert_eq!(quiz.answers, map(&[(1, "X"), (2, "Y")]));
    }

    #[test]
    fn test_quiz_missing_answers_section() {
        let reply = "Perguntas:\n1. A?\n2. B?";
        let quiz = extract_quiz(reply, 2).unwrap();

        assert_eq!(quiz.questions, map(&[(1, "A?"), (2, "B?")]));
        assert!(quiz.answers.is_empty());
    }

    #[test]
    fn test_quiz_missing_questions_section() {
        let reply = "1. A?\n\nRespostas:\n1. X";
        let quiz = extract_quiz(reply, 1).unwrap();

        assert!(quiz.questions.is_empty());
        assert_eq!(quiz.answers, map(&[(1, "X")]));
    }

    #[test]
    fn test_quiz_fewer_items_than_requested() {
        let reply = "Perguntas:\n1. A?\nRespostas:\n1. X";
        let quiz = extract_quiz(reply, 3).unwrap();

        assert_eq!(quiz.questions.len(), 1);
        assert!(!quiz.questions.contains_key(&2));
        assert!(!quiz.answers.contains_key(&3));
        assert_eq!(quiz.missing_indices(3).collect::<Vec<_>>(), vec![2, 3]);
    }

    #[test]
    fn test_quiz_extra_items_are_ignored() {
        let reply = "Perguntas:\n1. A?\n2. B?\n3. C?\nRespostas:\n1. X\n2. Y\n3. Z";
        let quiz = extract_quiz(reply, 2).unwrap();

        assert_eq!(quiz.questions.keys().copied().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(quiz.answers.get(&2).map(String::as_str), Some("Y"));
    }

    #[test]
    fn test_quiz_skips_unnumbered_lines_and_indentation() {
        let reply = "Aqui está o questionário.\n\nPerguntas:\n   1.   Quando começou a guerra?\n   Observação solta\n   2. Quem venceu?\n\nRespostas:\n  1. Em 1914.\n  - item sem número\n  2.Os Aliados.\n";
        let quiz = extract_quiz(reply, 2).unwrap();

        assert_eq!(
            quiz.questions,
            map(&[(1, "Quando começou a guerra?"), (2, "Quem venceu?")])
        );
        assert_eq!(quiz.answers, map(&[(1, "Em 1914."), (2, "Os Aliados.")]));
    }

    #[test]
    fn test_quiz_numbering_is_positional() {
        let reply = "Perguntas:\n3. A?\n7. B?\nRespostas:\n1. X\n1. Y";
        let quiz = extract_quiz(reply, 2).unwrap();

        assert_eq!(quiz.questions, map(&[(1, "A?"), (2, "B?")]));
        assert_eq!(quiz.answers, map(&[(1, "X"), (2, "Y")]));
    }

    #[test]
    fn test_quiz_answers_stop_at_echoed_source_heading() {
        let reply = "Perguntas:\n1. A?\nRespostas:\n1. X\n\nTexto para o questionário:\n2. linha do texto";
        let quiz = extract_quiz(reply, 2).unwrap();

        assert_eq!(quiz.answers, map(&[(1, "X")]));
    }

    #[test]
    fn test_quiz_answers_run_to_end_without_trailing_marker() {
        let reply = "Perguntas:\n1. A?\n2. B?\nRespostas:\n1. X\n\nObservações finais\n2. Y";
        let quiz = extract_quiz(reply, 2).unwrap();

        assert_eq!(quiz.answers, map(&[(1, "X"), (2, "Y")]));
    }

    #[test]
    fn test_quiz_numbering_accepts_ascii_digits_only() {
        let reply = "Perguntas:\n١. Pergunta?\n٢٣. Outra\n1. Válida?";
        let quiz = extract_quiz(reply, 2).unwrap();

        assert_eq!(quiz.questions, map(&[(1, "Válida?")]));
    }

    #[test]
    fn test_quiz_english_markers() {
        let reply = "Questions:\n1. What?\nAnswers:\n1. That.";
        let quiz = extract_quiz(reply, 1).unwrap();

        assert_eq!(quiz.questions, map(&[(1, "What?")]));
        assert_eq!(quiz.answers, map(&[(1, "That.")]));
    }

    #[test]
    fn test_quiz_garbage_reply_degrades_to_empty() {
        let quiz = extract_quiz("Desculpe, não consigo ajudar com isso.", 3).unwrap();
        assert!(quiz.is_empty());
    }

    #[test]
    fn test_quiz_rejects_non_positive_count() {
        assert!(matches!(
            extract_quiz("Perguntas:\n1. A?", 0),
            Err(AppError::ValidationError(_))
        ));
        assert!(extract_quiz("Perguntas:\n1. A?", -1).is_err());
    }
}
