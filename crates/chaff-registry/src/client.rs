//! Async HTTP client wrapping the schema-registry REST API.

use std::{path::PathBuf, time::Duration};

use chaff_core::{
  registry::{SchemaRegistry, VersionScope},
  subject::Subject,
};
use reqwest::{Certificate, Client, StatusCode};
use tracing::debug;

use crate::error::{Error, Result};

/// Connection settings for the schema registry.
#[derive(Debug, Clone, Default)]
pub struct RegistryConfig {
  pub base_url: String,
  pub username: String,
  pub password: String,
  /// PEM CA certificate added to the trust roots, for registries behind an
  /// internal CA.
  pub ca_cert:  Option<PathBuf>,
}

/// HTTP implementation of [`SchemaRegistry`].
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct RegistryClient {
  client: Client,
  config: RegistryConfig,
}

impl RegistryClient {
  pub fn new(config: RegistryConfig) -> Result<Self> {
    let mut builder = Client::builder().timeout(Duration::from_secs(30));

    if let Some(path) = &config.ca_cert {
      let pem = std::fs::read(path)
        .map_err(|source| Error::ReadCaCert { path: path.clone(), source })?;
      let cert = Certificate::from_pem(&pem)
        .map_err(|source| Error::InvalidCaCert { path: path.clone(), source })?;
      builder = builder.add_root_certificate(cert);
    }

    let client = builder.build().map_err(Error::BuildClient)?;
    Ok(Self { client, config })
  }

  fn url(&self, path: &str) -> String {
    format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
  }

  fn auth(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
    if self.config.username.is_empty() {
      req
    } else {
      req.basic_auth(&self.config.username, Some(&self.config.password))
    }
  }
}

/// Path under the registry root for one delete call.
fn delete_path(subject: &Subject, scope: VersionScope, permanent: bool) -> String {
  let mut path = match scope {
    VersionScope::All => format!("/subjects/{subject}"),
    VersionScope::Latest => format!("/subjects/{subject}/versions/latest"),
    VersionScope::Specific(version) => format!("/subjects/{subject}/versions/{version}"),
  };
  if permanent {
    path.push_str("?permanent=true");
  }
  path
}

impl SchemaRegistry for RegistryClient {
  type Error = Error;

  /// `GET /subjects`
  async fn list_subjects(&self) -> Result<Vec<Subject>> {
    let resp = self
      .auth(self.client.get(self.url("/subjects")))
      .send()
      .await
      .map_err(Error::ListSubjects)?;

    if !resp.status().is_success() {
      return Err(Error::ListStatus(resp.status()));
    }

    let names: Vec<String> = resp.json().await.map_err(Error::Deserialize)?;
    Ok(names.into_iter().map(|name| Subject::new(name.trim())).collect())
  }

  /// `DELETE /subjects/{name}[/versions/{version|latest}][?permanent=true]`
  ///
  /// Success iff the registry answers 200.
  async fn delete_subject(
    &self,
    subject: &Subject,
    scope: VersionScope,
    permanent: bool,
  ) -> Result<()> {
    let path = delete_path(subject, scope, permanent);
    debug!(%path, "issuing delete");

    let resp = self
      .auth(self.client.delete(self.url(&path)))
      .send()
      .await
      .map_err(|source| Error::Delete { path: path.clone(), source })?;

    match resp.status() {
      StatusCode::OK => Ok(()),
      status => Err(Error::UnexpectedStatus { path, status }),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn subject() -> Subject {
    Subject::new("stale-key")
  }

  #[test]
  fn delete_path_all_versions() {
    assert_eq!(
      delete_path(&subject(), VersionScope::All, false),
      "/subjects/stale-key"
    );
  }

  #[test]
  fn delete_path_all_versions_permanent() {
    assert_eq!(
      delete_path(&subject(), VersionScope::All, true),
      "/subjects/stale-key?permanent=true"
    );
  }

  #[test]
  fn delete_path_latest() {
    assert_eq!(
      delete_path(&subject(), VersionScope::Latest, false),
      "/subjects/stale-key/versions/latest"
    );
  }

  #[test]
  fn delete_path_latest_permanent() {
    assert_eq!(
      delete_path(&subject(), VersionScope::Latest, true),
      "/subjects/stale-key/versions/latest?permanent=true"
    );
  }

  #[test]
  fn delete_path_specific_version() {
    assert_eq!(
      delete_path(&subject(), VersionScope::Specific(7), false),
      "/subjects/stale-key/versions/7"
    );
  }

  #[test]
  fn delete_path_specific_version_permanent() {
    assert_eq!(
      delete_path(&subject(), VersionScope::Specific(7), true),
      "/subjects/stale-key/versions/7?permanent=true"
    );
  }

  #[test]
  fn url_joins_without_double_slash() {
    let client = RegistryClient::new(RegistryConfig {
      base_url: "http://registry:8081/".to_string(),
      ..RegistryConfig::default()
    })
    .unwrap();
    assert_eq!(client.url("/subjects"), "http://registry:8081/subjects");
  }
}
