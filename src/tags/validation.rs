//! Tag validation.
//!
//! # Rules
//! - `sigla` is required
//! - exactly one of `cloud_provider` / `datacenter`
//! - `condominio`, `account_id`, `environment`, `version`, `service`, `produto`,
//!   `jornada`, `correlationId` are required
//! - `repo_url` is required for `cloud_provider = aws` and for the devops/tradops groups
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Rules are independent; the placement conflict is reported even when other fields are missing

use std::ops::Deref;

use thiserror::Error;

use crate::tags::schema::{CloudProvider, Tags};

/// A single violated tag rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required tag is absent or empty.
    #[error("tag '{0}' is required")]
    MissingField(&'static str),

    /// Neither `cloud_provider` nor `datacenter` was given.
    #[error("one of 'cloud_provider' or 'datacenter' must be specified")]
    MissingPlacement,

    /// Both `cloud_provider` and `datacenter` were given.
    #[error("'cloud_provider' and 'datacenter' cannot be specified together")]
    ConflictingPlacement,

    /// `repo_url` is mandatory for this provider / group.
    #[error(
        "tag 'repo_url' is required when cloud_provider is 'aws' \
         or condominio is 'devops' or 'tradops'"
    )]
    MissingRepoUrl,
}

impl ValidationError {
    /// Name of the tag the rule is about.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::MissingField(name) => *name,
            ValidationError::MissingPlacement | ValidationError::ConflictingPlacement => {
                "cloud_provider"
            }
            ValidationError::MissingRepoUrl => "repo_url",
        }
    }
}

/// Check every tag rule and collect the violations.
///
/// An empty vector means the tags are valid.
pub fn validate_tags(tags: &Tags) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if tags.sigla.is_empty() {
        errors.push(ValidationError::MissingField("sigla"));
    }

    match (tags.cloud_provider.is_some(), tags.datacenter.is_some()) {
        (false, false) => errors.push(ValidationError::MissingPlacement),
        (true, true) => errors.push(ValidationError::ConflictingPlacement),
        _ => {}
    }

    if tags.condominio.is_none() {
        errors.push(ValidationError::MissingField("condominio"));
    }

    let required = [
        ("account_id", tags.account_id.is_empty()),
        ("environment", tags.environment.is_none()),
        ("version", tags.version.is_empty()),
        ("service", tags.service.is_empty()),
        ("produto", tags.produto.is_empty()),
        ("jornada", tags.jornada.is_empty()),
        ("correlationId", tags.correlation_id.is_empty()),
    ];
    for (name, missing) in required {
        if missing {
            errors.push(ValidationError::MissingField(name));
        }
    }

    let needs_repo = tags.cloud_provider == Some(CloudProvider::Aws)
        || tags.condominio.is_some_and(|c| c.requires_repo_url());
    if needs_repo && tags.repo_url.as_deref().map_or(true, str::is_empty) {
        errors.push(ValidationError::MissingRepoUrl);
    }

    errors
}

/// Tags that failed validation, with every violated rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid tags: {}", join_errors(.errors))]
pub struct TagsError {
    pub errors: Vec<ValidationError>,
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Tags that passed every rule. Only obtainable through validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedTags(Tags);

impl ValidatedTags {
    pub fn into_inner(self) -> Tags {
        self.0
    }
}

impl TryFrom<Tags> for ValidatedTags {
    type Error = TagsError;

    fn try_from(tags: Tags) -> Result<Self, Self::Error> {
        let errors = validate_tags(&tags);
        if errors.is_empty() {
            Ok(Self(tags))
        } else {
            Err(TagsError { errors })
        }
    }
}

impl Deref for ValidatedTags {
    type Target = Tags;

    fn deref(&self) -> &Tags {
        &self.0
    }
}

impl Tags {
    /// Validate and wrap these tags.
    pub fn validated(self) -> Result<ValidatedTags, TagsError> {
        ValidatedTags::try_from(self)
    }
}
