use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Status {
    pub database: ComponentState,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ComponentState {
    Ok,
    Error,
}

impl<T, E> From<Result<T, E>> for ComponentState {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(_) => Self::Ok,
            Err(_) => Self::Error,
        }
    }
}

impl ComponentState {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        *self == Self::Ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize() {
        assert_eq!(r#""ok""#, serde_json::to_string(&ComponentState::Ok).unwrap());
        assert_eq!(
            r#"{"database":"error"}"#,
            serde_json::to_string(&Status {
                database: ComponentState::Error
            })
            .unwrap()
        );
    }
}
