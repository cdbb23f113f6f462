//! Urlencoded parameter helpers shared by the query string and POST bodies.

use crate::error::ApiError;
use actix_web::web;

/// Decodes an urlencoded body with the same parser actix uses for query strings.
/// Blank values are dropped, see [`non_blank`].
pub fn parse_pairs(input: &str) -> Result<Vec<(String, String)>, ApiError> {
    let pairs = web::Query::<Vec<(String, String)>>::from_query(input)
        .map_err(|e| ApiError::MalformedForm(e.to_string()))?;
    Ok(non_blank(pairs.into_inner()))
}

/// Drops pairs with an empty value, so `location=` behaves as if the key was never sent.
pub fn non_blank(pairs: Vec<(String, String)>) -> Vec<(String, String)> {
    pairs.into_iter().filter(|(_, value)| !value.is_empty()).collect()
}

/// First non-empty value sent for `key`.
pub fn first_value<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}
