pub mod request;
pub mod result;

pub use request::{Action, ActivityRequest, Audience, GenerationRequest, Length, TextRequest};
pub use result::{GenerationResult, QuizSet};
