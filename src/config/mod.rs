use crate::error::{Result, SnapError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// snapdel 사용자 설정
///
/// 설정 파일은 ~/.snapdel/config.toml에 저장됩니다.
/// 환경 변수(SNAPDEL_URL, SNAPDEL_ACCOUNT, SNAPDEL_TOKEN)가 파일 값을 덮어씁니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// CloudAPI 주소 (예: https://us-east-1.api.example.com)
    #[serde(default)]
    pub url: String,

    /// 계정 (로그인 이름)
    #[serde(default)]
    pub account: String,

    /// Bearer 토큰 (선택)
    #[serde(default)]
    pub token: Option<String>,

    /// 상태 폴링 간격 (밀리초)
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    /// 수렴 대기 최대 시간 (초). 없으면 무제한
    #[serde(default)]
    pub wait_timeout_secs: Option<u64>,

    /// 개별 HTTP 요청 타임아웃 (초)
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_poll_interval_ms() -> u64 {
    1000
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: String::new(),
            account: String::new(),
            token: None,
            poll_interval_ms: default_poll_interval_ms(),
            wait_timeout_secs: None,
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl Config {
    /// 설정 파일 경로 가져오기
    fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".snapdel")
            .join("config.toml")
    }

    /// 설정 파일 + 환경 변수에서 로드 (파일이 없으면 기본값 사용)
    pub fn load() -> Result<Self> {
        let mut config = Self::load_file()?;
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    fn load_file() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| SnapError::Config(e.to_string()))
    }

    /// 환경 변수 덮어쓰기 (테스트를 위해 조회 함수를 주입받음)
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("SNAPDEL_URL") {
            self.url = url;
        }
        if let Some(account) = lookup("SNAPDEL_ACCOUNT") {
            self.account = account;
        }
        if let Some(token) = lookup("SNAPDEL_TOKEN") {
            self.token = Some(token).filter(|t| !t.is_empty());
        }
    }

    /// CLI 인자로 덮어쓰기
    pub fn with_overrides(mut self, url: Option<String>, account: Option<String>) -> Self {
        if let Some(url) = url {
            self.url = url;
        }
        if let Some(account) = account {
            self.account = account;
        }
        self
    }

    /// 필수 값 확인
    pub fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(SnapError::Config(
                "CloudAPI url is not set (use --url, SNAPDEL_URL or ~/.snapdel/config.toml)"
                    .to_string(),
            ));
        }
        if self.account.trim().is_empty() {
            return Err(SnapError::Config(
                "account is not set (use --account, SNAPDEL_ACCOUNT or ~/.snapdel/config.toml)"
                    .to_string(),
            ));
        }
        if self.poll_interval_ms == 0 {
            return Err(SnapError::Config(
                "poll_interval_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn wait_timeout(&self) -> Option<Duration> {
        self.wait_timeout_secs.map(Duration::from_secs)
    }
}
