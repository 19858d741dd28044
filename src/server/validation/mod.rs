//! Declarative request validation.
//!
//! Routes declare an ordered [`RuleSet`] of field rules. The validation middleware
//! collects the request body, query string and path params into a [`RequestInput`] and
//! runs [`check`] before the auth gate or handler are reached. `check` is pure: it only
//! reads the input and reports every failing field at once.

pub mod rules;

use std::{collections::HashMap, fmt, sync::OnceLock};

use regex::Regex;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::model::api::FieldErrorDto;

/// Where a field is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    Body,
    Query,
    Params,
}

impl Location {
    pub fn as_str(&self) -> &'static str {
        match self {
            Location::Body => "body",
            Location::Query => "query",
            Location::Params => "params",
        }
    }
}

/// A single constraint applied to a field value.
///
/// Fields whose rules do not include `Required` are skipped entirely when absent or null.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Present, not null, and not a blank string.
    Required,
    IsString,
    /// Integer number. Query and path values may be integer strings.
    IsInteger,
    /// Positive integer that fits a primary key column.
    Id,
    /// Array of `Id`s.
    IdList,
    Email,
    /// Letters, digits, `_`, `.` and `-` only.
    Username,
    /// String length in characters, inclusive.
    Length { min: usize, max: usize },
    /// Integer value, inclusive.
    Range { min: i64, max: i64 },
}

/// The rules declared for one field of one route.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub location: Location,
    pub field: &'static str,
    pub rules: &'static [Rule],
}

impl FieldRule {
    pub const fn body(field: &'static str, rules: &'static [Rule]) -> Self {
        Self {
            location: Location::Body,
            field,
            rules,
        }
    }

    pub const fn query(field: &'static str, rules: &'static [Rule]) -> Self {
        Self {
            location: Location::Query,
            field,
            rules,
        }
    }

    pub const fn param(field: &'static str, rules: &'static [Rule]) -> Self {
        Self {
            location: Location::Params,
            field,
            rules,
        }
    }
}

/// Ordered rules for a single route.
pub type RuleSet = &'static [FieldRule];

/// Everything a rule set may inspect about a request.
///
/// Query and path values are kept as JSON strings so every location is looked up the
/// same way.
#[derive(Debug, Default)]
pub struct RequestInput {
    pub body: Map<String, Value>,
    pub query: Map<String, Value>,
    pub params: Map<String, Value>,
}

impl RequestInput {
    pub fn new(
        body: Map<String, Value>,
        query: HashMap<String, String>,
        params: HashMap<String, String>,
    ) -> Self {
        let to_map = |pairs: HashMap<String, String>| {
            pairs
                .into_iter()
                .map(|(key, value)| (key, Value::String(value)))
                .collect::<Map<String, Value>>()
        };

        Self {
            body,
            query: to_map(query),
            params: to_map(params),
        }
    }

    fn lookup(&self, location: Location, field: &str) -> Option<&Value> {
        match location {
            Location::Body => self.body.get(field),
            Location::Query => self.query.get(field),
            Location::Params => self.params.get(field),
        }
    }
}

/// One failing field and the message of its first failing rule.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub location: Location,
    pub field: String,
    pub message: String,
}

/// All fields that failed validation for one request.
#[derive(Error, Debug, Default)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    /// A single failure not tied to a declared rule, e.g. an unparseable body.
    pub fn single(location: Location, field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            errors: vec![FieldError {
                location,
                field: field.into(),
                message: message.into(),
            }],
        }
    }

    pub fn push(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Whether `field` is among the failures.
    pub fn contains(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    pub fn into_dto(self) -> Vec<FieldErrorDto> {
        self.errors
            .into_iter()
            .map(|e| FieldErrorDto {
                location: e.location.as_str().to_string(),
                field: e.field,
                message: e.message,
            })
            .collect()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<String> = self
            .errors
            .iter()
            .map(|e| format!("{}.{}: {}", e.location.as_str(), e.field, e.message))
            .collect();
        write!(f, "{}", fields.join(", "))
    }
}

/// Runs every field rule against the input.
///
/// # Returns
/// - `Ok(())` - All fields passed
/// - `Err(ValidationErrors)` - One entry per failing field, in rule-set order
pub fn check(rules: &[FieldRule], input: &RequestInput) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    for field_rule in rules {
        let value = input.lookup(field_rule.location, field_rule.field);

        if let Err(message) = check_field(field_rule, value) {
            errors.push(FieldError {
                location: field_rule.location,
                field: field_rule.field.to_string(),
                message,
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_field(field_rule: &FieldRule, value: Option<&Value>) -> Result<(), String> {
    let field = field_rule.field;
    let required = field_rule.rules.contains(&Rule::Required);

    let value = match value {
        None | Some(Value::Null) if required => return Err(format!("{} is required", field)),
        None | Some(Value::Null) => return Ok(()),
        Some(value) => value,
    };

    // Body values come from typed JSON, so numeric strings are not accepted there.
    let strict = field_rule.location == Location::Body;

    for rule in field_rule.rules {
        apply(*rule, field, value, strict)?;
    }

    Ok(())
}

fn apply(rule: Rule, field: &str, value: &Value, strict: bool) -> Result<(), String> {
    match rule {
        Rule::Required => match value {
            Value::String(s) if s.trim().is_empty() => Err(format!("{} is required", field)),
            _ => Ok(()),
        },
        Rule::IsString => match value {
            Value::String(_) => Ok(()),
            _ => Err(format!("{} must be a string", field)),
        },
        Rule::IsInteger => as_integer(value, strict)
            .map(|_| ())
            .ok_or_else(|| format!("{} must be an integer", field)),
        Rule::Id => as_id(value, strict)
            .map(|_| ())
            .ok_or_else(|| format!("{} must be a valid id", field)),
        Rule::IdList => match value {
            Value::Array(items) if items.iter().all(|item| as_id(item, true).is_some()) => Ok(()),
            _ => Err(format!("{} must be a list of valid ids", field)),
        },
        Rule::Email => match value.as_str() {
            Some(s) if email_regex().is_match(s) => Ok(()),
            _ => Err(format!("{} must be a valid email address", field)),
        },
        Rule::Username => match value.as_str() {
            Some(s) if username_regex().is_match(s) => Ok(()),
            _ => Err(format!(
                "{} can only contain letters, numbers, '_', '.' and '-'",
                field
            )),
        },
        Rule::Length { min, max } => match value.as_str() {
            Some(s) if (min..=max).contains(&s.chars().count()) => Ok(()),
            Some(_) => Err(format!(
                "{} must be between {} and {} characters",
                field, min, max
            )),
            None => Err(format!("{} must be a string", field)),
        },
        Rule::Range { min, max } => match as_integer(value, strict) {
            Some(n) if (min..=max).contains(&n) => Ok(()),
            _ => Err(format!("{} must be an integer between {} and {}", field, min, max)),
        },
    }
}

fn as_integer(value: &Value, strict: bool) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) if !strict => s.parse().ok(),
        _ => None,
    }
}

fn as_id(value: &Value, strict: bool) -> Option<i32> {
    as_integer(value, strict)
        .filter(|n| *n >= 1)
        .and_then(|n| i32::try_from(n).ok())
}

fn email_regex() -> &'static Regex {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .expect("Failed to compile email regex")
    })
}

fn username_regex() -> &'static Regex {
    static USERNAME_REGEX: OnceLock<Regex> = OnceLock::new();
    USERNAME_REGEX
        .get_or_init(|| Regex::new(r"^[a-zA-Z0-9_.-]+$").expect("Failed to compile username regex"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(value: Value) -> RequestInput {
        let Value::Object(map) = value else {
            panic!("test body must be an object");
        };
        RequestInput::new(map, HashMap::new(), HashMap::new())
    }

    #[test]
    fn reports_every_missing_required_field() {
        let input = body(json!({ "email": "a@x.com" }));

        let errors = check(rules::CREATE_USER, &input).unwrap_err();

        assert!(errors.contains("username"));
        assert!(errors.contains("password"));
        assert!(!errors.contains("email"));
        assert_eq!(errors.errors().len(), 2);
    }

    #[test]
    fn accepts_well_formed_user() {
        let input = body(json!({
            "username": "ann",
            "email": "a@x.com",
            "password": "secret123"
        }));

        assert!(check(rules::CREATE_USER, &input).is_ok());
    }

    #[test]
    fn blank_string_counts_as_missing() {
        let input = body(json!({
            "username": "   ",
            "email": "a@x.com",
            "password": "secret123"
        }));

        let errors = check(rules::CREATE_USER, &input).unwrap_err();

        assert_eq!(errors.errors()[0].message, "username is required");
    }

    #[test]
    fn reports_only_first_failing_rule_per_field() {
        let input = body(json!({
            "username": 42,
            "email": "a@x.com",
            "password": "secret123"
        }));

        let errors = check(rules::CREATE_USER, &input).unwrap_err();

        assert_eq!(errors.errors().len(), 1);
        assert_eq!(errors.errors()[0].message, "username must be a string");
    }

    #[test]
    fn rejects_malformed_email_and_short_password() {
        let input = body(json!({
            "username": "ann",
            "email": "not-an-email",
            "password": "short"
        }));

        let errors = check(rules::CREATE_USER, &input).unwrap_err();

        assert!(errors.contains("email"));
        assert!(errors.contains("password"));
    }

    #[test]
    fn optional_fields_are_skipped_when_absent() {
        let mut params = HashMap::new();
        params.insert("id".to_string(), "7".to_string());
        let input = RequestInput::new(Map::new(), HashMap::new(), params);

        assert!(check(rules::UPDATE_USER, &input).is_ok());
    }

    #[test]
    fn optional_fields_are_checked_when_present() {
        let mut params = HashMap::new();
        params.insert("id".to_string(), "7".to_string());
        let Value::Object(map) = json!({ "email": "nope" }) else {
            unreachable!()
        };
        let input = RequestInput::new(map, HashMap::new(), params);

        let errors = check(rules::UPDATE_USER, &input).unwrap_err();

        assert!(errors.contains("email"));
    }

    #[test]
    fn path_id_must_be_positive_integer() {
        for bad in ["abc", "0", "-3", "99999999999"] {
            let mut params = HashMap::new();
            params.insert("id".to_string(), bad.to_string());
            let input = RequestInput::new(Map::new(), HashMap::new(), params);

            let errors = check(rules::GET_USER, &input).unwrap_err();
            assert!(errors.contains("id"), "expected '{}' to be rejected", bad);
        }
    }

    #[test]
    fn query_amount_must_be_in_range() {
        let mut query = HashMap::new();
        query.insert("amount".to_string(), "500".to_string());
        let input = RequestInput::new(Map::new(), query, HashMap::new());

        assert!(check(rules::SEED_USERS, &input).is_err());
    }

    #[test]
    fn query_integers_are_not_trimmed() {
        let mut query = HashMap::new();
        query.insert("amount".to_string(), " 5".to_string());
        let input = RequestInput::new(Map::new(), query, HashMap::new());

        let errors = check(rules::SEED_USERS, &input).unwrap_err();

        assert!(errors.contains("amount"));
    }

    #[test]
    fn body_ids_must_be_json_numbers() {
        let input = body(json!({ "title": "Song", "albumId": "3" }));

        let errors = check(rules::CREATE_TRACK, &input).unwrap_err();

        assert!(errors.contains("albumId"));
    }

    #[test]
    fn genre_ids_must_all_be_valid() {
        let input = body(json!({ "title": "Song", "genreIds": [1, 2, 0] }));

        let errors = check(rules::CREATE_TRACK, &input).unwrap_err();

        assert!(errors.contains("genreIds"));
    }
}
