//! Request shape validation
//!
//! Declarative schemas for the admin API's user-profile request bodies.
//! Every field in these shapes is a JSON string; a schema is just the
//! field list plus which entries are required. Validation is a boundary
//! check only — type/shape conformance, no business rules — and reports
//! every offending field rather than stopping at the first.

use serde::Deserialize;
use serde_json::Value;

/// What went wrong with a single field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Problem {
    /// Required field absent (or JSON null)
    Missing,
    /// Field present but not a JSON string
    NotAString,
}

/// One field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub problem: Problem,
}

/// Declarative description of one string field
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub required: bool,
}

const fn required(name: &'static str) -> FieldSpec {
    FieldSpec { name, required: true }
}

const fn optional(name: &'static str) -> FieldSpec {
    FieldSpec { name, required: false }
}

/// A request-body schema: an ordered set of string fields
#[derive(Debug, Clone, Copy)]
pub struct Schema {
    pub fields: &'static [FieldSpec],
}

/// Profile edit: mandatory id, everything else optional
pub const EDIT_PROFILE: Schema = Schema {
    fields: &[
        required("id"),
        optional("name"),
        optional("bio"),
        optional("phone"),
        optional("year"),
        optional("position"),
        optional("image"),
    ],
};

/// Profile lookup by id
pub const PROFILE_ID: Schema = Schema {
    fields: &[required("id")],
};

/// Events lookup by user id
pub const USER_EVENTS: Schema = Schema {
    fields: &[required("id")],
};

impl Schema {
    /// Check an input record against this schema
    ///
    /// Returns every field-level problem found: a required field that is
    /// absent, or any declared field that is present with a non-string
    /// value. Unknown fields pass through untouched. Non-object input
    /// fails every required field.
    pub fn validate(&self, value: &Value) -> Result<(), Vec<FieldError>> {
        let Some(object) = value.as_object() else {
            let errors = self
                .fields
                .iter()
                .filter(|spec| spec.required)
                .map(|spec| FieldError {
                    field: spec.name,
                    problem: Problem::Missing,
                })
                .collect();
            return Err(errors);
        };

        let mut errors = Vec::new();
        for spec in self.fields {
            match object.get(spec.name) {
                None | Some(Value::Null) => {
                    if spec.required {
                        errors.push(FieldError {
                            field: spec.name,
                            problem: Problem::Missing,
                        });
                    }
                }
                Some(Value::String(_)) => {}
                Some(_) => errors.push(FieldError {
                    field: spec.name,
                    problem: Problem::NotAString,
                }),
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Typed view of a validated profile-edit request
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct EditProfile {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl EditProfile {
    /// Validate against [`EDIT_PROFILE`], then deserialize the typed view
    pub fn parse(value: &Value) -> Result<Self, Vec<FieldError>> {
        EDIT_PROFILE.validate(value)?;
        serde_json::from_value(value.clone()).map_err(|_| {
            vec![FieldError {
                field: "id",
                problem: Problem::Missing,
            }]
        })
    }
}

/// Typed view of a validated id-lookup request
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ProfileId {
    pub id: String,
}

impl ProfileId {
    pub fn parse(value: &Value) -> Result<Self, Vec<FieldError>> {
        PROFILE_ID.validate(value)?;
        serde_json::from_value(value.clone()).map_err(|_| {
            vec![FieldError {
                field: "id",
                problem: Problem::Missing,
            }]
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_edit_profile_id_only_passes() {
        assert!(EDIT_PROFILE.validate(&json!({"id": "123"})).is_ok());
    }

    #[test]
    fn test_edit_profile_missing_id_fails() {
        let errors = EDIT_PROFILE
            .validate(&json!({"name": "x"}))
            .expect_err("id is required");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "id");
        assert_eq!(errors[0].problem, Problem::Missing);
    }

    #[test]
    fn test_edit_profile_non_string_field_fails() {
        let errors = EDIT_PROFILE
            .validate(&json!({"id": "123", "year": 2020}))
            .expect_err("year must be a string");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "year");
        assert_eq!(errors[0].problem, Problem::NotAString);
    }

    #[test]
    fn test_edit_profile_reports_every_problem() {
        let errors = EDIT_PROFILE
            .validate(&json!({"year": 2020, "bio": 4}))
            .expect_err("three problems expected");
        assert_eq!(errors.len(), 3);
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert!(fields.contains(&"id"));
        assert!(fields.contains(&"bio"));
        assert!(fields.contains(&"year"));
    }

    #[test]
    fn test_unknown_fields_pass_through() {
        let value = json!({"id": "123", "unrelated": 42});
        assert!(EDIT_PROFILE.validate(&value).is_ok());
    }

    #[test]
    fn test_null_counts_as_missing() {
        let errors = PROFILE_ID
            .validate(&json!({"id": null}))
            .expect_err("null id is missing");
        assert_eq!(errors[0].problem, Problem::Missing);
    }

    #[test]
    fn test_non_object_input_fails_required_fields() {
        let errors = USER_EVENTS
            .validate(&json!("not an object"))
            .expect_err("non-object input");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "id");
    }

    #[test]
    fn test_typed_parse_round_trip() {
        let parsed = EditProfile::parse(&json!({"id": "123", "bio": "hi"})).expect("valid");
        assert_eq!(parsed.id, "123");
        assert_eq!(parsed.bio.as_deref(), Some("hi"));
        assert!(parsed.phone.is_none());

        let lookup = ProfileId::parse(&json!({"id": "abc"})).expect("valid");
        assert_eq!(lookup.id, "abc");
    }
}
