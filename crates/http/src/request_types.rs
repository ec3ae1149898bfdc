//! Request types (Deserialize)

use serde::Deserialize;

/// `body` parameter for create and update, read from the form or the query
/// string. A missing `body` is treated as blank.
#[derive(Debug, Default, Deserialize)]
pub struct BodyParams {
    #[serde(default)]
    pub body: Option<String>,
}
