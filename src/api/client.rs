use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;

use super::error::{ApiError, ApiResult};
use super::types::{next_link, Privilege, QueryParams, Results, Role, RoleForm};
use super::{PrivilegeApi, RoleApi};
use crate::config::ApiConfig;

const ROLE: &str = "role";
const PRIVILEGE: &str = "privilege";

/// JSON/HTTP client for the remote role and privilege collections.
#[derive(Debug, Clone)]
pub struct RestClient {
    base_url: Url,
    username: Option<String>,
    password: Option<String>,
    fetch_all_pages: bool,
    max_pages: usize,
    http: reqwest::Client,
}

impl RestClient {
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ApiError::Other(format!("Invalid base URL '{}': {e}", config.base_url)))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::Other(format!("Base URL '{base_url}' cannot hold resource paths")));
        }

        Ok(Self {
            base_url,
            username: config.username.clone(),
            password: config.password.clone(),
            fetch_all_pages: config.fetch_all_pages,
            max_pages: config.max_pages.max(1),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Base URL plus path segments. Each segment is percent-encoded, so a
    /// uuid can never step into another resource.
    fn url(&self, segments: &[&str]) -> ApiResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ApiError::Other(format!("Base URL '{}' cannot hold resource paths", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn role_url(&self, uuid: &str) -> ApiResult<Url> {
        // dot segments are dropped by URL normalisation
        if uuid.is_empty() || uuid == "." || uuid == ".." {
            return Err(ApiError::Other(format!("Invalid role uuid '{uuid}'")));
        }
        self.url(&[ROLE, uuid])
    }

    /// Resolve a `next` link. Links leaving the service's origin are not
    /// followed, so credentials only go to the configured host.
    fn next_url(&self, uri: &str) -> Option<Url> {
        match self.base_url.join(uri) {
            Ok(url) if url.origin() == self.base_url.origin() => Some(url),
            Ok(url) => {
                log::warn!("Ignoring next link to foreign origin {}", url.origin().ascii_serialization());
                None
            }
            Err(e) => {
                log::warn!("Ignoring malformed next link '{uri}': {e}");
                None
            }
        }
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let builder = self.http.request(method, url);
        match &self.username {
            Some(user) => builder.basic_auth(user, self.password.as_deref()),
            None => builder,
        }
    }

    async fn check(response: reqwest::Response) -> ApiResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::from_status(status, body))
    }

    async fn send<T>(&self, builder: RequestBuilder) -> ApiResult<T>
    where
        T: DeserializeOwned,
    {
        let response = Self::check(builder.send().await?).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Read a collection, following `next` links when configured to.
    async fn collect<T>(&self, resource: &str, params: &QueryParams) -> ApiResult<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let mut results = Vec::new();
        let mut next = Some(self.request(Method::GET, self.url(&[resource])?).query(params));
        let mut pages = 0usize;

        while let Some(builder) = next.take() {
            let page: Results<T> = self.send(builder).await?;
            pages += 1;
            results.extend(page.results);

            if !self.fetch_all_pages {
                break;
            }
            if let Some(url) = next_link(&page.links).and_then(|uri| self.next_url(uri)) {
                if pages >= self.max_pages {
                    log::warn!("Stopped reading {resource} after {pages} pages");
                    break;
                }
                next = Some(self.request(Method::GET, url));
            }
        }

        log::debug!("Fetched {} {resource} record(s) in {pages} page(s)", results.len());
        Ok(results)
    }
}

#[async_trait]
impl RoleApi for RestClient {
    async fn query(&self, params: &QueryParams) -> ApiResult<Vec<Role>> {
        self.collect(ROLE, params).await
    }

    async fn get(&self, uuid: &str, params: &QueryParams) -> ApiResult<Role> {
        let url = self.role_url(uuid)?;
        self.send(self.request(Method::GET, url).query(params)).await
    }

    async fn save(&self, form: &RoleForm) -> ApiResult<Role> {
        let url = match &form.uuid {
            Some(uuid) => self.role_url(uuid)?,
            None => self.url(&[ROLE])?,
        };
        self.send(self.request(Method::POST, url).json(form)).await
    }

    async fn delete(&self, uuid: &str, purge: bool) -> ApiResult<()> {
        let url = self.role_url(uuid)?;
        let mut builder = self.request(Method::DELETE, url);
        if purge {
            builder = builder.query(&[("purge", "")]);
        }
        Self::check(builder.send().await?).await?;
        Ok(())
    }
}

#[async_trait]
impl PrivilegeApi for RestClient {
    async fn query(&self, params: &QueryParams) -> ApiResult<Vec<Privilege>> {
        self.collect(PRIVILEGE, params).await
    }
}
