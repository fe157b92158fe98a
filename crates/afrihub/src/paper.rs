//! The research paper data model and its write-side validation.
//!
//! Papers are write-once: they are created from a validated [`NewPaper`] and read back
//! as [`Paper`]s. There is no update or delete path.
//!
//! Stored documents are plain JSON objects. Other tools may have written documents
//! with fields missing, so reading is lenient (see [`Paper::from_document`]) while
//! writing is strict (see [`NewPaper::validate`]).
//!
//! # Examples
//!
//! ```
//! use afrihub::{error::HubError, paper::NewPaper};
//!
//! let input = serde_json::json!({
//!   "title": "Crop disease detection with mobile vision",
//!   "abstract": "A lightweight CNN for cassava leaf diseases.",
//!   "authors": ["Wanjiru Kamau"],
//!   "institution": "University of Nairobi",
//!   "country": "Kenya",
//!   "keywords": ["computer vision", "agriculture"],
//!   "paperUrl": "https://example.org/cassava.pdf",
//! });
//! let paper = NewPaper::validate(&input).unwrap();
//! assert_eq!(paper.country, "Kenya");
//!
//! let err = NewPaper::validate(&serde_json::json!({ "abstract": "short" })).unwrap_err();
//! assert!(matches!(err, HubError::Validation(_)));
//! ```

use super::*;

/// Minimum length, in characters, of a paper abstract.
pub const MIN_ABSTRACT_LENGTH: usize = 10;

/// A research paper as read from the store.
///
/// Serializes to the camelCase wire shape used by the HTTP API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paper {
  /// Store-assigned identifier, stringified
  pub id:            String,
  /// The paper's full title
  pub title:         String,
  /// Full abstract text
  #[serde(rename = "abstract")]
  pub abstract_text: String,
  /// Author names, in byline order
  pub authors:       Vec<String>,
  /// Institution the work came out of
  pub institution:   String,
  /// Country of the institution
  pub country:       String,
  /// Topic tags
  pub keywords:      Vec<String>,
  /// Link to the paper, empty when unknown. Left out of the wire shape when empty.
  #[serde(default, skip_serializing_if = "String::is_empty")]
  pub paper_url:     String,
  /// Publication timestamp
  pub published_at:  DateTime<Utc>,
  /// When the paper was written to the store, if recorded
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub created_at:    Option<DateTime<Utc>>,
}

impl Paper {
  /// Maps a stored document onto a [`Paper`].
  ///
  /// Missing or mistyped strings become `""`, missing sequences become empty, and
  /// non-string sequence entries are dropped. A missing or unparseable `publishedAt`
  /// is replaced by `now`.
  pub fn from_document(id: i64, document: &Value, now: DateTime<Utc>) -> Self {
    let published_at = match document.get("publishedAt") {
      None | Some(Value::Null) => now,
      Some(raw) => parse_timestamp(raw).unwrap_or_else(|| {
        warn!("Paper {id} has an unreadable publishedAt ({raw}), defaulting to now");
        now
      }),
    };

    Self {
      id: id.to_string(),
      title: string_field(document, "title"),
      abstract_text: string_field(document, "abstract"),
      authors: string_list_field(document, "authors"),
      institution: string_field(document, "institution"),
      country: string_field(document, "country"),
      keywords: string_list_field(document, "keywords"),
      paper_url: string_field(document, "paperUrl"),
      published_at,
      created_at: document.get("createdAt").and_then(parse_timestamp),
    }
  }
}

/// A validated paper ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPaper {
  /// The paper's full title, never empty
  pub title:         String,
  /// Abstract text, at least [`MIN_ABSTRACT_LENGTH`] characters
  #[serde(rename = "abstract")]
  pub abstract_text: String,
  /// Topic tags
  pub keywords:      Vec<String>,
  /// Optional link to the paper, always an absolute URL
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub paper_url:     Option<String>,
  /// Institution the work came out of
  pub institution:   String,
  /// Country of the institution
  pub country:       String,
  /// Author names, in byline order
  pub authors:       Vec<String>,
}

/// One field-level problem found while validating a [`NewPaper`].
///
/// Serializes like a zod issue: `code`, `path` and `message`, plus whichever of
/// `expected`, `received`, `minimum` and `validation` apply to the code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
  /// Path to the offending value, e.g. `["authors", "1"]`
  pub path:       Vec<String>,
  /// Machine-readable issue kind
  pub code:       IssueCode,
  /// Human-readable explanation
  pub message:    String,
  /// JSON type the schema wanted, for [`IssueCode::InvalidType`]
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub expected:   Option<String>,
  /// JSON type that was found (`"undefined"` when absent), for [`IssueCode::InvalidType`]
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub received:   Option<String>,
  /// Minimum string length, for [`IssueCode::TooSmall`]
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub minimum:    Option<usize>,
  /// Failed string format (`"url"`), for [`IssueCode::InvalidString`]
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub validation: Option<String>,
}

/// The kinds of problems validation reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCode {
  /// A value is absent or has the wrong JSON type
  InvalidType,
  /// A string is shorter than allowed
  TooSmall,
  /// A string does not have the required format
  InvalidString,
}

impl ValidationIssue {
  /// A missing or mistyped value at `path`. `received` is `None` when the value is absent.
  fn invalid_type(path: &[&str], expected: &str, received: Option<&Value>) -> Self {
    let (received, message) = match received {
      None => ("undefined", "Required".to_string()),
      Some(value) => {
        let name = type_name(value);
        (name, format!("Expected {expected}, received {name}"))
      },
    };
    Self {
      expected: Some(expected.to_string()),
      received: Some(received.to_string()),
      ..Self::at(path, IssueCode::InvalidType, message)
    }
  }

  /// A string at `path` shorter than `minimum` characters.
  fn too_small(path: &[&str], minimum: usize) -> Self {
    Self {
      minimum: Some(minimum),
      ..Self::at(
        path,
        IssueCode::TooSmall,
        format!("String must contain at least {minimum} character(s)"),
      )
    }
  }

  /// A string at `path` that is not a URL.
  fn invalid_url(path: &[&str]) -> Self {
    Self {
      validation: Some("url".to_string()),
      ..Self::at(path, IssueCode::InvalidString, "Invalid url")
    }
  }

  /// Builds an issue at `path` with no code-specific details.
  fn at(path: &[&str], code: IssueCode, message: impl Into<String>) -> Self {
    Self {
      path: path.iter().map(|s| s.to_string()).collect(),
      code,
      message: message.into(),
      expected: None,
      received: None,
      minimum: None,
      validation: None,
    }
  }
}

impl Display for ValidationIssue {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}: {}", self.path.join("."), self.message)
  }
}

impl NewPaper {
  /// Validates a raw JSON body against the paper write schema.
  ///
  /// Every problem is collected before returning, so a body with several bad
  /// fields yields one [`ValidationIssue`] per field. Unknown fields are ignored.
  ///
  /// # Errors
  ///
  /// Returns [`HubError::Validation`] listing all issues when the body does not
  /// match the schema.
  pub fn validate(body: &Value) -> Result<Self> {
    let Some(object) = body.as_object() else {
      return Err(HubError::Validation(vec![ValidationIssue::invalid_type(
        &[],
        "object",
        Some(body),
      )]));
    };

    let mut issues = Vec::new();
    let string = |key: &str, min: usize, issues: &mut Vec<ValidationIssue>| {
      match object.get(key) {
        Some(Value::String(s)) if s.chars().count() < min => {
          issues.push(ValidationIssue::too_small(&[key], min))
        },
        Some(Value::String(s)) => return s.clone(),
        other => issues.push(ValidationIssue::invalid_type(&[key], "string", other)),
      }
      String::new()
    };

    let title = string("title", 1, &mut issues);
    let abstract_text = string("abstract", MIN_ABSTRACT_LENGTH, &mut issues);
    let institution = string("institution", 0, &mut issues);
    let country = string("country", 0, &mut issues);
    let keywords = string_list(object.get("keywords"), "keywords", &mut issues);
    let authors = string_list(object.get("authors"), "authors", &mut issues);

    let paper_url = match object.get("paperUrl") {
      None => None,
      Some(Value::String(s)) if is_url(s) => Some(s.clone()),
      Some(Value::String(_)) => {
        issues.push(ValidationIssue::invalid_url(&["paperUrl"]));
        None
      },
      Some(other) => {
        issues.push(ValidationIssue::invalid_type(&["paperUrl"], "string", Some(other)));
        None
      },
    };

    if !issues.is_empty() {
      debug!("Rejected paper with {} validation issue(s)", issues.len());
      return Err(HubError::Validation(issues));
    }

    Ok(Self { title, abstract_text, keywords, paper_url, institution, country, authors })
  }

  /// Builds the document stored for this paper, stamping both timestamps with `now`.
  pub fn to_document(&self, now: DateTime<Utc>) -> Result<Value> {
    let mut document = serde_json::to_value(self)?;
    if let Value::Object(map) = &mut document {
      map.insert("publishedAt".into(), Value::String(now.to_rfc3339()));
      map.insert("createdAt".into(), Value::String(now.to_rfc3339()));
    }
    Ok(document)
  }
}

/// Validates an array-of-strings field, recording issues per bad element.
fn string_list(value: Option<&Value>, key: &str, issues: &mut Vec<ValidationIssue>) -> Vec<String> {
  match value {
    Some(Value::Array(items)) => {
      let mut out = Vec::with_capacity(items.len());
      for (index, item) in items.iter().enumerate() {
        match item {
          Value::String(s) => out.push(s.clone()),
          other => issues.push(ValidationIssue::invalid_type(
            &[key, index.to_string().as_str()],
            "string",
            Some(other),
          )),
        }
      }
      out
    },
    other => {
      issues.push(ValidationIssue::invalid_type(&[key], "array", other));
      Vec::new()
    },
  }
}

/// Whether `s` parses as an absolute URL with a scheme.
fn is_url(s: &str) -> bool { url::Url::parse(s).is_ok() }

/// JSON type name as used in issue messages.
fn type_name(value: &Value) -> &'static str {
  match value {
    Value::Null => "null",
    Value::Bool(_) => "boolean",
    Value::Number(_) => "number",
    Value::String(_) => "string",
    Value::Array(_) => "array",
    Value::Object(_) => "object",
  }
}

/// Reads a string field, or `""` when absent or not a string.
fn string_field(document: &Value, key: &str) -> String {
  document.get(key).and_then(Value::as_str).unwrap_or_default().to_string()
}

/// Reads the string entries of an array field.
fn string_list_field(document: &Value, key: &str) -> Vec<String> {
  document
    .get(key)
    .and_then(Value::as_array)
    .map(|items| items.iter().filter_map(Value::as_str).map(str::to_string).collect())
    .unwrap_or_default()
}

/// Stored timestamps are RFC 3339 strings, but millisecond epochs are accepted too.
fn parse_timestamp(raw: &Value) -> Option<DateTime<Utc>> {
  match raw {
    Value::String(s) => DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.with_timezone(&Utc)),
    Value::Number(n) => n.as_i64().and_then(DateTime::from_timestamp_millis),
    _ => None,
  }
}
