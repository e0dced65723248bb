use crate::api::{describe_states, DeletedSnapshot, Snapshot, SnapshotApi, SnapshotState};
use crate::config::Config;
use crate::error::{Result, SnapError};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::{Method, RequestBuilder, Response, StatusCode, Url};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, trace};

/// 사전 컴파일된 UUID 정규표현식 (인스턴스 ID 판별)
static UUID_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$")
        .unwrap()
});

/// 짧은 인스턴스 ID (UUID 앞 8자리)
static SHORT_ID_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9a-fA-F]{8}$").unwrap());

#[derive(Debug, Deserialize)]
struct Machine {
    id: String,
    #[serde(default)]
    name: String,
}

/// CloudAPI 에러 응답 본문 (`{"code": "...", "message": "..."}`)
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    code: Option<String>,
    message: String,
}

/// CloudAPI HTTP 클라이언트
///
/// 삭제 요청과 스냅샷 상태 폴링을 담당합니다.
pub struct CloudApiClient {
    http: reqwest::Client,
    base_url: Url,
    account: String,
    token: Option<String>,
    poll_interval: Duration,
    wait_timeout: Option<Duration>,
}

impl CloudApiClient {
    pub fn new(config: &Config) -> Result<Self> {
        let base_url = Url::parse(&config.url)
            .map_err(|e| SnapError::Config(format!("invalid url \"{}\": {}", config.url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(SnapError::Config(format!("invalid url \"{}\"", config.url)));
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(concat!("snapdel/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url,
            account: config.account.clone(),
            token: config.token.clone(),
            poll_interval: config.poll_interval(),
            wait_timeout: config.wait_timeout(),
        })
    }

    /// 컨테이너 인자가 이미 인스턴스 UUID인지 확인
    pub fn is_uuid(value: &str) -> bool {
        UUID_REGEX.is_match(value)
    }

    /// `{url}/{account}/{segments...}` 형태의 엔드포인트 생성 (세그먼트는 인코딩됨)
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().push(&self.account).extend(segments);
        }
        url
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let builder = self
            .http
            .request(method, url)
            .header("Accept", "application/json");
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// 실패 응답을 SnapError로 변환
    async fn error_from_response(resp: Response) -> SnapError {
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();

        let message = match serde_json::from_str::<ApiErrorBody>(&body) {
            Ok(ApiErrorBody { code: Some(code), message }) => format!("{}: {}", code, message),
            Ok(ApiErrorBody { code: None, message }) => message,
            Err(_) if body.trim().is_empty() => "(empty response body)".to_string(),
            Err(_) => body.trim().to_string(),
        };

        SnapError::Api { status, message }
    }

    /// 인스턴스 목록 조회 (`name`이 있으면 이름으로 필터링)
    async fn list_machines(&self, name: Option<&str>) -> Result<Vec<Machine>> {
        let mut builder = self.request(Method::GET, self.endpoint(&["machines"]));
        if let Some(name) = name {
            builder = builder.query(&[("name", name)]);
        }
        let resp = builder.send().await?;

        if !resp.status().is_success() {
            return Err(Self::error_from_response(resp).await);
        }

        Ok(resp.json().await?)
    }

    /// 컨테이너 이름, 짧은 ID 또는 UUID를 인스턴스 UUID로 해석
    ///
    /// 이름이 먼저이고, 이름이 없으면 짧은 ID로 전체 목록에서 찾습니다.
    async fn resolve_instance(&self, container: &str) -> Result<String> {
        if Self::is_uuid(container) {
            return Ok(container.to_string());
        }

        let named = self.list_machines(Some(container)).await?;
        if let Some(machine) = named.into_iter().find(|m| m.name == container) {
            return Ok(machine.id);
        }

        if !SHORT_ID_REGEX.is_match(container) {
            return Err(SnapError::InstanceNotFound(container.to_string()));
        }

        let prefix = container.to_ascii_lowercase();
        let mut matches = self
            .list_machines(None)
            .await?
            .into_iter()
            .filter(|m| m.id.to_ascii_lowercase().starts_with(&prefix));

        match (matches.next(), matches.next()) {
            (Some(machine), None) => {
                debug!(container, instance_id = %machine.id, "resolved short instance id");
                Ok(machine.id)
            }
            (Some(_), Some(_)) => Err(SnapError::AmbiguousInstance(container.to_string())),
            _ => Err(SnapError::InstanceNotFound(container.to_string())),
        }
    }

    /// 스냅샷 조회 (404면 None)
    async fn get_snapshot(&self, instance_id: &str, name: &str) -> Result<Option<Snapshot>> {
        let url = self.endpoint(&["machines", instance_id, "snapshots", name]);
        let resp = self.request(Method::GET, url).send().await?;

        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !resp.status().is_success() {
            return Err(Self::error_from_response(resp).await);
        }

        Ok(Some(resp.json().await?))
    }

    async fn poll_until(
        &self,
        instance_id: &str,
        name: &str,
        states: &[SnapshotState],
    ) -> Result<Snapshot> {
        loop {
            let snap = match self.get_snapshot(instance_id, name).await? {
                Some(snap) => snap,
                // 삭제가 끝난 스냅샷은 목록에서 사라짐
                None if states.contains(&SnapshotState::Deleted) => {
                    return Ok(Snapshot::new(name, SnapshotState::Deleted));
                }
                None => {
                    return Err(SnapError::Api {
                        status: StatusCode::NOT_FOUND.as_u16(),
                        message: format!("snapshot \"{}\" not found", name),
                    });
                }
            };

            if states.contains(&snap.state) || snap.state == SnapshotState::Failed {
                return Ok(snap);
            }

            trace!(snapshot = name, state = %snap.state, "snapshot not settled yet");
            tokio::time::sleep(self.poll_interval).await;
        }
    }
}

#[async_trait]
impl SnapshotApi for CloudApiClient {
    async fn delete_snapshot(&self, container: &str, name: &str) -> Result<DeletedSnapshot> {
        let instance_id = self.resolve_instance(container).await?;
        debug!(container, instance_id = %instance_id, snapshot = name, "deleting snapshot");

        let url = self.endpoint(&["machines", &instance_id, "snapshots", name]);
        let resp = self.request(Method::DELETE, url).send().await?;

        if !resp.status().is_success() {
            return Err(Self::error_from_response(resp).await);
        }

        Ok(DeletedSnapshot { instance_id })
    }

    async fn wait_for_snapshot_states(
        &self,
        instance_id: &str,
        name: &str,
        states: &[SnapshotState],
    ) -> Result<Snapshot> {
        debug!(
            instance_id,
            snapshot = name,
            states = %describe_states(states),
            "waiting for snapshot state"
        );

        match self.wait_timeout {
            Some(limit) => tokio::time::timeout(limit, self.poll_until(instance_id, name, states))
                .await
                .map_err(|_| SnapError::WaitTimeout {
                    name: name.to_string(),
                    expected: describe_states(states),
                })?,
            None => self.poll_until(instance_id, name, states).await,
        }
    }
}
