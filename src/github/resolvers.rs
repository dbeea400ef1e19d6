//! The three independent lookups behind a project summary.
//!
//! Each resolver fetches one endpoint through an [`UpstreamClient`] and turns
//! the body into its field, or a [`LookupError`] describing why it could not.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::client::UpstreamClient;
use super::error::LookupError;
use super::locator::{ApiBase, ProjectLocator, RepositoryOwner};
use super::models::{ApiUser, CommitTally, ContributorRecord, LanguagesPayload, UserPayload};

/// Resolves the owner's display name from `GET /users/<owner>`.
///
/// # Errors
///
/// Returns the client failure, `LookupError::Decode` for a malformed body,
/// or `LookupError::NotFound` when GitHub reports the account as missing.
pub async fn resolve_owner<C>(
    client: &C,
    api: &ApiBase,
    owner: &RepositoryOwner,
) -> Result<String, LookupError>
where
    C: UpstreamClient + ?Sized,
{
    let url = api.user_url(owner)?;
    let body = client.fetch(&url).await?;
    owner_from_body(&body)
}

/// Resolves the language names from `GET /repos/<owner>/<repo>/languages`.
///
/// # Errors
///
/// Returns the client failure, `LookupError::Decode` for a body that is not
/// a JSON object, `LookupError::ErrorEnvelope` when the body carries a
/// `message` key, or `LookupError::NoLanguages` for an empty object.
pub async fn resolve_languages<C>(
    client: &C,
    api: &ApiBase,
    locator: &ProjectLocator,
) -> Result<Vec<String>, LookupError>
where
    C: UpstreamClient + ?Sized,
{
    let url = api.languages_url(locator)?;
    let body = client.fetch(&url).await?;
    languages_from_body(&body)
}

/// Resolves the top committers and commit total from
/// `GET /repos/<owner>/<repo>/contributors`.
///
/// An empty contributor list is a success with no winners.
///
/// # Errors
///
/// Returns the client failure or `LookupError::Decode` when the body is not
/// a contributor array.
pub async fn resolve_contributors<C>(
    client: &C,
    api: &ApiBase,
    locator: &ProjectLocator,
) -> Result<CommitTally, LookupError>
where
    C: UpstreamClient + ?Sized,
{
    let url = api.contributors_url(locator)?;
    let body = client.fetch(&url).await?;
    contributors_from_body(&body)
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, LookupError> {
    serde_json::from_slice(body).map_err(decode_error)
}

/// Converts a JSON object into `T`.
///
/// Derived struct impls also accept JSON arrays positionally, so bodies are
/// first decoded as objects and only then mapped onto the struct.
fn from_object<T: DeserializeOwned>(object: Map<String, Value>) -> Result<T, LookupError> {
    serde_json::from_value(Value::Object(object)).map_err(decode_error)
}

fn decode_error(error: serde_json::Error) -> LookupError {
    LookupError::Decode {
        message: error.to_string(),
    }
}

pub(crate) fn owner_from_body(body: &[u8]) -> Result<String, LookupError> {
    let user: ApiUser = from_object(decode(body)?)?;
    match UserPayload::from(user) {
        UserPayload::Found(identity) => Ok(identity.display_name().to_owned()),
        UserPayload::NotFound(envelope) => Err(LookupError::NotFound {
            message: envelope.message,
        }),
    }
}

pub(crate) fn languages_from_body(body: &[u8]) -> Result<Vec<String>, LookupError> {
    let mapping: BTreeMap<String, Value> = decode(body)?;
    match LanguagesPayload::from(mapping) {
        LanguagesPayload::Error(envelope) => Err(LookupError::ErrorEnvelope {
            message: envelope.message,
        }),
        LanguagesPayload::Languages(languages) if languages.is_empty() => {
            Err(LookupError::NoLanguages)
        }
        LanguagesPayload::Languages(languages) => Ok(languages),
    }
}

pub(crate) fn contributors_from_body(body: &[u8]) -> Result<CommitTally, LookupError> {
    // `null` decodes to an empty list.
    let entries: Option<Vec<Map<String, Value>>> = decode(body)?;
    let records = entries
        .unwrap_or_default()
        .into_iter()
        .map(from_object::<ContributorRecord>)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(CommitTally::from_records(&records))
}
