//! Smoke run against a live model: `cargo run --example generate -- path/to/source.pdf`

use studygen::{ActivityRequest, AppResult, AppState, Audience, Config, Length, TextRequest};

#[tokio::main]
async fn main() -> AppResult<()> {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "teste.txt".to_string());

    let state = AppState::new(Config::from_env()?)?;
    let source = state.source_reader.read(&path).await?;

    let explanation = state
        .generation_service
        .explain(
            TextRequest::new(source.clone())
                .with_length(Length::Short)
                .with_audience(Audience::Intermediate),
        )
        .await?;
    println!("Explain:\n{}\n", explanation);

    let summary = state
        .generation_service
        .summarize(TextRequest::new(source.clone()))
        .await?;
    println!("Summary:\n{}\n", summary);

    let quiz = state
        .generation_service
        .activity(ActivityRequest::new(source, 2))
        .await?;
    for (index, question) in &quiz.questions {
        println!("{}. {}", index, question);
        if let Some(answer) = quiz.answers.get(index) {
            println!("   -> {}", answer);
        }
    }

    Ok(())
}
