//! Request handlers for the `/qs` routes.

use axum::Json;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use tracing::debug;

use crate::models::Question;

use super::error::ApiError;
use super::state::SharedState;

/// `GET /qs`
pub async fn list_suites(State(state): State<SharedState>) -> Result<Json<Vec<String>>, ApiError> {
    let names = state.store.list_suites().await?;
    Ok(Json(names))
}

/// `GET /qs/{name}/random`
pub async fn random_question(
    State(state): State<SharedState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Question>, ApiError> {
    let Path(name) = path?;
    let mut questions = state.store.load_suite(&name).await?;
    if questions.is_empty() {
        return Err(ApiError::EmptySuite(name));
    }

    let index = state.picker.pick(questions.len());
    debug!(suite = %name, index, "picked random question");
    take_question(&mut questions, index).map(Json)
}

/// `GET /qs/{name}/{index}`
pub async fn indexed_question(
    State(state): State<SharedState>,
    path: Result<Path<(String, String)>, PathRejection>,
) -> Result<Json<Question>, ApiError> {
    let Path((name, raw_index)) = path?;
    let index = parse_index(&raw_index)?;
    let mut questions = state.store.load_suite(&name).await?;
    take_question(&mut questions, index).map(Json)
}

fn parse_index(raw: &str) -> Result<usize, ApiError> {
    raw.parse().map_err(|_| ApiError::BadParam {
        name: "index",
        value: raw.to_string(),
    })
}

/// Move the question at `index` out of a freshly loaded suite.
fn take_question(questions: &mut Vec<Question>, index: usize) -> Result<Question, ApiError> {
    let len = questions.len();
    if index >= len {
        return Err(ApiError::IndexOutOfBounds { len, index });
    }
    Ok(questions.swap_remove(index))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suite() -> Vec<Question> {
        vec![
            Question::new("a", "1"),
            Question::new("b", "2"),
            Question::new("c", "3"),
        ]
    }

    #[test]
    fn parses_non_negative_integers() {
        assert_eq!(parse_index("0").unwrap(), 0);
        assert_eq!(parse_index("42").unwrap(), 42);
    }

    #[test]
    fn rejects_anything_else() {
        for raw in ["-1", "abc", "1.5", "", " 1"] {
            match parse_index(raw) {
                Err(ApiError::BadParam { name, value }) => {
                    assert_eq!(name, "index");
                    assert_eq!(value, raw);
                }
                other => panic!("expected BadParam for {raw:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn takes_each_position() {
        for (i, expected) in suite().into_iter().enumerate() {
            assert_eq!(take_question(&mut suite(), i).unwrap(), expected);
        }
    }

    #[test]
    fn out_of_bounds_reports_len_and_index() {
        let err = take_question(&mut suite(), 3).unwrap_err();
        assert!(matches!(err, ApiError::IndexOutOfBounds { len: 3, index: 3 }));

        let err = take_question(&mut Vec::new(), 0).unwrap_err();
        assert!(matches!(err, ApiError::IndexOutOfBounds { len: 0, index: 0 }));
    }
}
