use crate::models::{Audience, Length};

/// Bounds the source text in prompts and the content in explain/summarize replies.
pub const DELIMITER: &str = "---";

pub struct LengthTable {
    pub short: &'static str,
    pub medium: &'static str,
    pub long: &'static str,
}

impl LengthTable {
    pub fn get(&self, length: Length) -> &'static str {
        match length {
            Length::Short => self.short,
            Length::Medium => self.medium,
            Length::Long => self.long,
        }
    }
}

pub struct AudienceTable {
    pub beginner: &'static str,
    pub intermediate: &'static str,
    pub advanced: &'static str,
}

impl AudienceTable {
    pub fn get(&self, audience: Audience) -> &'static str {
        match audience {
            Audience::Beginner => self.beginner,
            Audience::Intermediate => self.intermediate,
            Audience::Advanced => self.advanced,
        }
    }
}

/// Every fixed sentence a prompt is assembled from, in one language.
///
/// `{n}` in `quiz_quantity` and `quiz_line_count` is replaced with the
/// requested question count.
pub struct PromptWording {
    pub instructions_heading: &'static str,
    pub ignore_layout: &'static str,
    pub delimiter_rule: &'static str,
    pub no_greetings: &'static str,

    pub explain_role: &'static str,
    pub explain_audience: AudienceTable,
    pub explain_length: LengthTable,
    pub explain_format: &'static str,
    pub explain_source_heading: &'static str,

    pub summary_role: &'static str,
    pub summary_audience: AudienceTable,
    pub summary_length: LengthTable,
    pub summary_format: &'static str,
    pub summary_source_heading: &'static str,

    pub quiz_role: &'static str,
    pub quiz_quantity: &'static str,
    pub quiz_difficulty: AudienceTable,
    pub quiz_follow_format: &'static str,
    pub quiz_line_count: &'static str,
    pub quiz_format_heading: &'static str,
    pub quiz_question_example: &'static str,
    pub quiz_answer_example: &'static str,
    pub quiz_source_heading: &'static str,

    pub questions_marker: &'static str,
    pub answers_marker: &'static str,
}

pub const PORTUGUESE: PromptWording = PromptWording {
    instructions_heading: "Instruções:",
    ignore_layout: "Ignore qualquer texto que pareça ser formatação, como números de página, cabeçalhos, rodapés ou palavras como 'Rows' ou 'Columns', a menos que sejam parte do conteúdo principal.",
    delimiter_rule: "Não adicione o delimitador (---) em nenhum outro lugar do texto, exceto no início e no fim.",
    no_greetings: "Não adicione saudações, frases cortesia ou conclusões.",

    explain_role: "Você é um especialista em conteúdo e sua tarefa é explicar o texto a seguir.",
    explain_audience: AudienceTable {
        beginner: "Adapte a explicação para um público iniciante.",
        intermediate: "Adapte a explicação para um público intermediário.",
        advanced: "Adapte a explicação para um público avançado.",
    },
    explain_length: LengthTable {
        short: "A explicação deve ser concisa, focando apenas nos tópicos principais.",
        medium: "A explicação deve ser detalhada, com alguns exemplos.",
        long: "A explicação deve ser profunda, abordando conceitos técnicos e avançados.",
    },
    explain_format: "A resposta deverá ter o formato: ---[Conteúdo da explicação]---",
    explain_source_heading: "Texto para explicar:",

    summary_role: "Você é um assistente de escrita e sua tarefa é resumir o texto a seguir.",
    summary_audience: AudienceTable {
        beginner: "O resumo deve ser para um público geral, com linguagem simples.",
        intermediate: "O resumo deve ser para um público com certo conhecimento do assunto.",
        advanced: "O resumo deve ser para um público especialista, utilizando terminologia técnica.",
    },
    summary_length: LengthTable {
        short: "O resumo deve ser muito curto, com no máximo um parágrafo.",
        medium: "O resumo deve ser de tamanho médio, com os principais pontos.",
        long: "O resumo deve ser longo, com detalhes importantes.",
    },
    summary_format: "A resposta deverá ter o formato: ---[Conteúdo do resumo]---",
    summary_source_heading: "Texto para resumir:",

    quiz_role: "Você é um criador de questionários educativos. Sua tarefa é criar um questionário sobre o texto a seguir.",
    quiz_quantity: "Crie exatamente {n} perguntas e {n} respostas.",
    quiz_difficulty: AudienceTable {
        beginner: "O nível de dificuldade deve ser fácil, com perguntas e respostas curtas e diretas.",
        intermediate: "O nível de dificuldade deve ser médio, com perguntas que exigem um pouco mais de reflexão.",
        advanced: "O nível de dificuldade deve ser avançado, com perguntas detalhadas e respostas complexas.",
    },
    quiz_follow_format: "Siga a formatação exata abaixo para as perguntas e respostas.",
    quiz_line_count: "Cada seção deve ter exatamente {n} linhas, numeradas de 1 a {n}, no formato \"<número>. <texto>\".",
    quiz_format_heading: "Modelo de formato:",
    quiz_question_example: "Pergunta",
    quiz_answer_example: "Resposta para a pergunta",
    quiz_source_heading: "Texto para o questionário:",

    questions_marker: "Perguntas:",
    answers_marker: "Respostas:",
};

pub const ENGLISH: PromptWording = PromptWording {
    instructions_heading: "Instructions:",
    ignore_layout: "Ignore any text that looks like formatting, such as page numbers, headers, footers or words like 'Rows' or 'Columns', unless it is part of the main content.",
    delimiter_rule: "Do not add the delimiter (---) anywhere in the text except at the beginning and the end.",
    no_greetings: "Do not add greetings, courtesy phrases or closing remarks.",

    explain_role: "You are a subject-matter expert and your task is to explain the following text.",
    explain_audience: AudienceTable {
        beginner: "Tailor the explanation to a beginner audience.",
        intermediate: "Tailor the explanation to an intermediate audience.",
        advanced: "Tailor the explanation to an advanced audience.",
    },
    explain_length: LengthTable {
        short: "The explanation must be concise, focusing only on the main topics.",
        medium: "The explanation must be detailed, with a few examples.",
        long: "The explanation must be in-depth, covering technical and advanced concepts.",
    },
    explain_format: "The reply must have the format: ---[Explanation content]---",
    explain_source_heading: "Text to explain:",

    summary_role: "You are a writing assistant and your task is to summarize the following text.",
    summary_audience: AudienceTable {
        beginner: "The summary must target a general audience, using plain language.",
        intermediate: "The summary must target an audience with some knowledge of the subject.",
        advanced: "The summary must target specialists, using technical terminology.",
    },
    summary_length: LengthTable {
        short: "The summary must be very short, at most one paragraph.",
        medium: "The summary must be of medium length, covering the main points.",
        long: "The summary must be long, keeping the important details.",
    },
    summary_format: "The reply must have the format: ---[Summary content]---",
    summary_source_heading: "Text to summarize:",

    quiz_role: "You create educational quizzes. Your task is to write a quiz about the following text.",
    quiz_quantity: "Write exactly {n} questions and {n} answers.",
    quiz_difficulty: AudienceTable {
        beginner: "The difficulty must be easy, with short and direct questions and answers.",
        intermediate: "The difficulty must be medium, with questions that require some reflection.",
        advanced: "The difficulty must be advanced, with detailed questions and complex answers.",
    },
    quiz_follow_format: "Follow the exact layout below for the questions and answers.",
    quiz_line_count: "Each section must have exactly {n} lines, numbered 1 to {n}, in the form \"<number>. <text>\".",
    quiz_format_heading: "Format template:",
    quiz_question_example: "Question",
    quiz_answer_example: "Answer to question",
    quiz_source_heading: "Text for the quiz:",

    questions_marker: "Questions:",
    answers_marker: "Answers:",
};

/// Markers the extractor accepts regardless of the prompt language.
pub const QUESTIONS_MARKERS: [&str; 2] = [PORTUGUESE.questions_marker, ENGLISH.questions_marker];
pub const ANSWERS_MARKERS: [&str; 2] = [PORTUGUESE.answers_marker, ENGLISH.answers_marker];
pub const QUIZ_SOURCE_HEADINGS: [&str; 2] = [
    PORTUGUESE.quiz_source_heading,
    ENGLISH.quiz_source_heading,
];
