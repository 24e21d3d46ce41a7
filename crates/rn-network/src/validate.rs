//! Network token and query plan validation.

use crate::schema::{Query, QueryPlan};

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Edge #{index} ({token:?}) should be in the format <source><destination><distance>")]
    Format { index: usize, token: String },

    #[error("Edge #{index} ({token:?}) distance should be an integer")]
    NonNumericDistance { index: usize, token: String },

    #[error("Query plan has no queries")]
    EmptyPlan,

    #[error("Query #{index}: {reason}")]
    InvalidQuery { index: usize, reason: String },
}

/// Each token must be exactly 3 characters, the last one a digit.
pub fn validate_tokens(tokens: &[String]) -> Result<(), ValidationError> {
    for (index, token) in tokens.iter().enumerate() {
        if token.chars().count() != 3 {
            return Err(ValidationError::Format {
                index: index + 1,
                token: token.clone(),
            });
        }
        if !token.chars().nth(2).is_some_and(|c| c.is_ascii_digit()) {
            return Err(ValidationError::NonNumericDistance {
                index: index + 1,
                token: token.clone(),
            });
        }
    }
    Ok(())
}

pub fn validate_plan(plan: &QueryPlan) -> Result<(), ValidationError> {
    if plan.queries.is_empty() {
        return Err(ValidationError::EmptyPlan);
    }

    for (i, planned) in plan.queries.iter().enumerate() {
        let invalid = |reason: &str| ValidationError::InvalidQuery {
            index: i + 1,
            reason: reason.to_string(),
        };
        match &planned.query {
            Query::RouteDistance { route } => {
                if route.trim().is_empty() {
                    return Err(invalid("route is empty"));
                }
            }
            Query::CountRoutes { start, end, .. } | Query::ShortestPath { start, end } => {
                if start.trim().is_empty() || end.trim().is_empty() {
                    return Err(invalid("start and end stations are required"));
                }
            }
        }
    }

    Ok(())
}
