//! Blocking HTTP implementation of [`RepositoryApi`]

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::Url;
use reqwest::blocking::{Client, Response};
use tracing::{debug, info};
use winrepo_meta::ServerConfig;

use crate::api::{CreateRepository, QueryParams, RepositoryApi, UpdateRepository};
use crate::error::{Error, Result};
use crate::model::{PostponedBody, RepositoryRecord, UpdateResponse};

/// Talks to the server's v2 repository endpoints
#[derive(Debug, Clone)]
pub struct HttpRepositoryApi {
    client: Client,
    base: Url,
}

impl HttpRepositoryApi {
    pub fn new(config: &ServerConfig) -> Result<Self> {
        let base = Url::parse(&config.url).map_err(|e| Error::InvalidUrl {
            url: config.url.clone(),
            message: e.to_string(),
        })?;
        if base.cannot_be_a_base() {
            return Err(Error::InvalidUrl {
                url: config.url.clone(),
                message: "not a base URL".to_string(),
            });
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .danger_accept_invalid_certs(!config.verify_ssl)
            .build()?;

        Ok(Self { client, base })
    }

    /// `{base}/v2/repositories/[{id}/]`
    fn repositories_url(&self, id: Option<&str>) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(["v2", "repositories"]);
            if let Some(id) = id {
                segments.push(id);
            }
            segments.push("");
        }
        url
    }

    /// Turn a non-success status into [`Error::Status`]
    fn check(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().unwrap_or_default();
        Err(Error::Status {
            status: status.as_u16(),
            message: server_message(&body).unwrap_or(body),
        })
    }
}

/// Pull the human readable message out of a server error body
fn server_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("error_message")
        .or_else(|| value.get("description"))
        .and_then(|m| m.as_str())
        .map(str::to_string)
}

impl RepositoryApi for HttpRepositoryApi {
    fn create_and_configure(&self, request: &CreateRepository) -> Result<RepositoryRecord> {
        let url = self.repositories_url(None);
        debug!(%url, repo_id = %request.id, "Creating repository");

        let response = self.client.post(url).json(request).send()?;
        let record = Self::check(response)?.json::<RepositoryRecord>()?;

        info!(repo_id = %record.id, "Repository created");
        Ok(record)
    }

    fn update_repo_and_plugins(&self, request: &UpdateRepository) -> Result<UpdateResponse> {
        let url = self.repositories_url(Some(&request.id));
        debug!(%url, repo_id = %request.id, "Updating repository");

        let response = Self::check(self.client.put(url).json(&request.body()).send()?)?;
        if response.status() == StatusCode::ACCEPTED {
            let body = response.json::<PostponedBody>()?;
            info!(repo_id = %request.id, tasks = body.spawned_tasks.len(), "Repository update postponed");
            return Ok(UpdateResponse::Postponed {
                reasons: body.reasons,
                spawned_tasks: body.spawned_tasks,
            });
        }

        info!(repo_id = %request.id, "Repository updated");
        Ok(UpdateResponse::Completed)
    }

    fn repositories(&self, query: &QueryParams) -> Result<Vec<RepositoryRecord>> {
        let url = self.repositories_url(None);
        debug!(%url, details = query.details, "Listing repositories");

        let response = self.client.get(url).query(&query.pairs()).send()?;
        let records = Self::check(response)?.json::<Vec<RepositoryRecord>>()?;

        debug!(count = records.len(), "Repositories fetched");
        Ok(records)
    }
}
