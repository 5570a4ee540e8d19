use serde::{Deserialize, Serialize};

use crate::catalog::record::{FieldValue, Record};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Subject {
    Aptitude,
    Reasoning,
    Coding,
    English,
    Interview,
}

impl Subject {
    pub fn as_str(&self) -> &'static str {
        match self {
            Subject::Aptitude => "Aptitude",
            Subject::Reasoning => "Reasoning",
            Subject::Coding => "Coding",
            Subject::English => "English",
            Subject::Interview => "Interview",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MockTest {
    pub id: String,
    pub title: String,
    pub subject: Subject,
    pub duration_minutes: u32,
    pub questions: u32,
    pub difficulty: Difficulty,
    pub attempted: bool,
    /// Present only once the test has been attempted and graded.
    pub score: Option<f64>,
    pub max_score: f64,
    pub description: String,
    pub topics: Vec<String>,
    /// Set for company-specific mock rounds.
    pub company: Option<String>,
}

impl Record for MockTest {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "id" => Some((&self.id).into()),
            "title" => Some((&self.title).into()),
            "subject" => Some(FieldValue::Text(self.subject.as_str())),
            "difficulty" => Some(FieldValue::Text(self.difficulty.as_str())),
            "duration_minutes" => Some(self.duration_minutes.into()),
            "questions" => Some(self.questions.into()),
            "attempted" => Some(self.attempted.into()),
            "score" => self.score.map(FieldValue::Number),
            "max_score" => Some(self.max_score.into()),
            "company" => self.company.as_ref().map(Into::into),
            _ => None,
        }
    }

    fn search_text(&self) -> Vec<&str> {
        std::iter::once(self.title.as_str())
            .chain(self.topics.iter().map(String::as_str))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topics_are_searchable() {
        let test = MockTest {
            id: "3".to_string(),
            title: "Data Structures & Algorithms".to_string(),
            subject: Subject::Coding,
            duration_minutes: 120,
            questions: 25,
            difficulty: Difficulty::Medium,
            attempted: true,
            score: Some(78.0),
            max_score: 100.0,
            description: String::new(),
            topics: vec!["Trees".to_string(), "Graphs".to_string()],
            company: None,
        };
        assert_eq!(
            test.search_text(),
            vec!["Data Structures & Algorithms", "Trees", "Graphs"]
        );
        assert!(test.field("company").is_none());
        assert_eq!(test.field("score"), Some(FieldValue::Number(78.0)));
    }
}
