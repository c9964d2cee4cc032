//! Decision request input types and validation.
//!
//! A [`DecisionRequest`] is supplied once per analysis call and never
//! mutated. Field bounds are enforced here, at the input boundary, so the
//! analysis pipeline downstream can assume a well-formed request.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Title length ceiling, in characters.
pub const TITLE_MAX_CHARS: usize = 200;
/// Context length bounds, in characters.
pub const CONTEXT_MIN_CHARS: usize = 10;
pub const CONTEXT_MAX_CHARS: usize = 2000;
/// How many candidate options a request may carry.
pub const OPTIONS_MIN: usize = 2;
pub const OPTIONS_MAX: usize = 5;
/// Valid priority weight range (inclusive).
pub const WEIGHT_MIN: u8 = 1;
pub const WEIGHT_MAX: u8 = 10;

/// A named, weighted evaluation criterion supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityWeight {
    /// Name of the priority.
    pub name: String,
    /// Weight from 1-10.
    pub weight: u8,
    /// Description of the priority.
    pub description: String,
}

impl PriorityWeight {
    /// Creates a new priority weight.
    pub fn new(name: impl Into<String>, weight: u8, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            weight,
            description: description.into(),
        }
    }
}

/// A structured description of a choice to analyze.
///
/// Option order is significant: it drives default and tie-break selection
/// during normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionRequest {
    pub title: String,
    pub context: String,
    pub options: Vec<String>,
    pub priorities: Vec<PriorityWeight>,
}

impl DecisionRequest {
    /// Validates the field bounds of this request.
    pub fn validate(&self) -> Result<(), DecisionRequestError> {
        if self.title.is_empty() {
            return Err(DecisionRequestError::EmptyTitle);
        }
        if self.title.chars().count() > TITLE_MAX_CHARS {
            return Err(DecisionRequestError::TitleTooLong {
                max: TITLE_MAX_CHARS,
            });
        }
        if self.context.chars().count() < CONTEXT_MIN_CHARS {
            return Err(DecisionRequestError::ContextTooShort {
                min: CONTEXT_MIN_CHARS,
            });
        }
        if self.context.chars().count() > CONTEXT_MAX_CHARS {
            return Err(DecisionRequestError::ContextTooLong {
                max: CONTEXT_MAX_CHARS,
            });
        }
        if self.options.len() < OPTIONS_MIN {
            return Err(DecisionRequestError::TooFewOptions { min: OPTIONS_MIN });
        }
        if self.options.len() > OPTIONS_MAX {
            return Err(DecisionRequestError::TooManyOptions { max: OPTIONS_MAX });
        }
        if self.priorities.is_empty() {
            return Err(DecisionRequestError::NoPriorities);
        }
        for priority in &self.priorities {
            if priority.name.is_empty() {
                return Err(DecisionRequestError::UnnamedPriority);
            }
            if !(WEIGHT_MIN..=WEIGHT_MAX).contains(&priority.weight) {
                return Err(DecisionRequestError::InvalidWeight {
                    name: priority.name.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Validation failures for a decision request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecisionRequestError {
    #[error("Title must not be empty")]
    EmptyTitle,

    #[error("Title exceeds {max} characters")]
    TitleTooLong { max: usize },

    #[error("Context must be at least {min} characters")]
    ContextTooShort { min: usize },

    #[error("Context exceeds {max} characters")]
    ContextTooLong { max: usize },

    #[error("At least {min} options required")]
    TooFewOptions { min: usize },

    #[error("Maximum {max} options allowed")]
    TooManyOptions { max: usize },

    #[error("At least one priority required")]
    NoPriorities,

    #[error("Priority name must not be empty")]
    UnnamedPriority,

    #[error("Priority '{name}' has a weight outside 1-10")]
    InvalidWeight { name: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> DecisionRequest {
        DecisionRequest {
            title: "Job Offer".to_string(),
            context: "Deciding whether to accept a new role.".to_string(),
            options: vec!["Stay".to_string(), "Leave".to_string()],
            priorities: vec![PriorityWeight::new("Growth", 8, "Career growth")],
        }
    }

    #[test]
    fn valid_request_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn empty_title_rejected() {
        let mut request = valid_request();
        request.title = String::new();
        assert_eq!(request.validate(), Err(DecisionRequestError::EmptyTitle));
    }

    #[test]
    fn overlong_title_rejected() {
        let mut request = valid_request();
        request.title = "x".repeat(TITLE_MAX_CHARS + 1);
        assert!(matches!(
            request.validate(),
            Err(DecisionRequestError::TitleTooLong { .. })
        ));
    }

    #[test]
    fn short_context_rejected() {
        let mut request = valid_request();
        request.context = "too short".to_string();
        assert!(matches!(
            request.validate(),
            Err(DecisionRequestError::ContextTooShort { .. })
        ));
    }

    #[test]
    fn single_option_rejected() {
        let mut request = valid_request();
        request.options = vec!["Only".to_string()];
        assert_eq!(
            request.validate(),
            Err(DecisionRequestError::TooFewOptions { min: 2 })
        );
    }

    #[test]
    fn six_options_rejected() {
        let mut request = valid_request();
        request.options = (0..6).map(|i| format!("Option {i}")).collect();
        assert_eq!(
            request.validate(),
            Err(DecisionRequestError::TooManyOptions { max: 5 })
        );
    }

    #[test]
    fn missing_priorities_rejected() {
        let mut request = valid_request();
        request.priorities = vec![];
        assert_eq!(request.validate(), Err(DecisionRequestError::NoPriorities));
    }

    #[test]
    fn zero_weight_rejected() {
        let mut request = valid_request();
        request.priorities = vec![PriorityWeight::new("Growth", 0, "desc")];
        assert!(matches!(
            request.validate(),
            Err(DecisionRequestError::InvalidWeight { .. })
        ));
    }

    #[test]
    fn weight_eleven_rejected() {
        let mut request = valid_request();
        request.priorities = vec![PriorityWeight::new("Growth", 11, "desc")];
        assert!(matches!(
            request.validate(),
            Err(DecisionRequestError::InvalidWeight { .. })
        ));
    }

    #[test]
    fn request_deserializes_from_json() {
        let json = serde_json::json!({
            "title": "Job Offer",
            "context": "Deciding whether to accept a new role.",
            "options": ["Stay", "Leave"],
            "priorities": [
                {"name": "Growth", "weight": 8, "description": "Career growth"}
            ]
        });
        let request: DecisionRequest = serde_json::from_value(json).unwrap();
        assert_eq!(request.options.len(), 2);
        assert_eq!(request.priorities[0].weight, 8);
    }
}
