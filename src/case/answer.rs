use crate::geometry::Triangle;

/// Produces the expected-answer text stored next to each test file
pub trait AnswerSource {
    fn answer(&self, triangles: &[Triangle]) -> String;
}

/// Writes an empty answer file; no intersection results are computed
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyAnswer;

impl AnswerSource for EmptyAnswer {
    fn answer(&self, _triangles: &[Triangle]) -> String {
        String::new()
    }
}
