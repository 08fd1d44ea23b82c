use serde::Serialize;
use serde_json::Value;

/// A stored user record.
///
/// `name` and `password` hold whatever JSON value the client sent, because
/// creation performs no validation. Fields missing from the request stay
/// absent and are left out of the serialized record. The password is kept in
/// plaintext.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<Value>,
}

impl User {
    pub fn new(id: i64, name: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id,
            name: Some(Value::String(name.into())),
            password: Some(Value::String(password.into())),
        }
    }

    /// Apply a partial update in place.
    ///
    /// A field is overwritten only when the patch carries a truthy value, so
    /// `null`, `false`, `0` and `""` all keep the existing one.
    pub fn apply(&mut self, patch: UserPatch) {
        if let Some(name) = patch.name.filter(is_truthy) {
            self.name = Some(name);
        }
        if let Some(password) = patch.password.filter(is_truthy) {
            self.password = Some(password);
        }
    }
}

/// Truthiness of a JSON value: everything except `null`, `false`, zero and
/// the empty string.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Input for creating a user. The id is assigned by the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewUser {
    pub name: Option<Value>,
    pub password: Option<Value>,
}

/// Input for a partial update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub name: Option<Value>,
    pub password: Option<Value>,
}

/// The records every fresh store starts with.
pub fn seed_users() -> Vec<User> {
    vec![
        User::new(1, "João", "JJ1804C"),
        User::new(2, "Clair", "CC0710L"),
    ]
}
