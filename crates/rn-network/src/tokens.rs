//! Edge tokens: `<source><destination><distance>`, e.g. `AB5`.

use rn_core::{Distance, Edge};

/// Split comma-separated network text into trimmed tokens.
pub fn parse_tokens(text: &str) -> Vec<String> {
    text.split(',').map(|t| t.trim().to_string()).collect()
}

/// Convert tokens to edges.
///
/// Tokens must already have passed [`validate_tokens`](crate::validate_tokens);
/// anything shorter is skipped.
pub fn tokens_to_edges(tokens: &[String]) -> Vec<Edge> {
    tokens.iter().filter_map(|t| token_to_edge(t)).collect()
}

fn token_to_edge(token: &str) -> Option<Edge> {
    let mut chars = token.chars();
    let source = chars.next()?;
    let destination = chars.next()?;
    let distance: Distance = chars.next()?.to_digit(10)?;
    Some(Edge::new(source, destination, distance))
}
