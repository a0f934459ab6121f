use std::time::Duration;

/// Placeholder replaced by the role name in the purge confirmation text.
pub const NAME_PLACEHOLDER: &str = "{0}";

/// Connection settings for the remote role service.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the REST API, e.g. `http://host/openmrs/ws/rest/v1`
    pub base_url: String,
    pub username: Option<String>,
    pub password: Option<String>,
    pub timeout: Duration,
    /// Follow `next` links on collection reads instead of using the first page only
    pub fetch_all_pages: bool,
    pub max_pages: usize,
    pub user_agent: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            username: None,
            password: None,
            timeout: Duration::from_secs(30),
            fetch_all_pages: true,
            max_pages: 50,
            user_agent: format!("role-admin/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    pub fn with_credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_pagination(mut self, fetch_all_pages: bool, max_pages: usize) -> Self {
        self.fetch_all_pages = fetch_all_pages;
        self.max_pages = max_pages.max(1);
        self
    }
}

/// User-facing notification texts, already resolved.
#[derive(Debug, Clone)]
pub struct Messages {
    pub purge_prompt_template: String,
    pub purge_success: String,
    pub purge_error: String,
    pub load_roles_error: String,
    pub load_role_error: String,
    pub load_privileges_error: String,
    pub save_success: String,
    pub save_error: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            purge_prompt_template: "Are you sure you want to purge role {0}? This cannot be undone."
                .to_string(),
            purge_success: "Role purged".to_string(),
            purge_error: "Failed to purge role".to_string(),
            load_roles_error: "Failed to load roles".to_string(),
            load_role_error: "Failed to load role".to_string(),
            load_privileges_error: "Failed to load privileges".to_string(),
            save_success: "Role saved".to_string(),
            save_error: "Failed to save role".to_string(),
        }
    }
}

impl Messages {
    /// Substitute `name` for the first `{0}` in the purge template.
    pub fn purge_prompt(&self, name: &str) -> String {
        self.purge_prompt_template.replacen(NAME_PLACEHOLDER, name, 1)
    }
}

/// Everything the screens and the server need, passed in explicitly.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    pub api: ApiConfig,
    pub bind_addr: String,
    pub app_name: String,
    pub session_key: Option<String>,
    pub messages: Messages,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::new("http://localhost:8080/openmrs/ws/rest/v1"),
            bind_addr: "127.0.0.1:8081".to_string(),
            app_name: "Role Administration".to_string(),
            session_key: None,
            messages: Messages::default(),
        }
    }
}

impl AdminConfig {
    /// Read configuration from the process environment (after `.env` is loaded).
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset or unparsable keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("ROLE_ADMIN_API_URL") {
            config.api.base_url = url;
        }
        if let Some(user) = lookup("ROLE_ADMIN_API_USER") {
            let password = lookup("ROLE_ADMIN_API_PASSWORD").unwrap_or_default();
            config.api = config.api.with_credentials(user, password);
        }
        if let Some(secs) = lookup("ROLE_ADMIN_API_TIMEOUT_SECS").and_then(|v| v.parse().ok()) {
            config.api.timeout = Duration::from_secs(secs);
        }
        if let Some(all) = lookup("ROLE_ADMIN_FETCH_ALL_PAGES").and_then(|v| parse_bool(&v)) {
            config.api.fetch_all_pages = all;
        }
        if let Some(max) = lookup("ROLE_ADMIN_MAX_PAGES").and_then(|v| v.parse::<usize>().ok()) {
            config.api.max_pages = max.max(1);
        }
        if let Some(bind) = lookup("ROLE_ADMIN_BIND") {
            config.bind_addr = bind;
        }
        if let Some(name) = lookup("ROLE_ADMIN_APP_NAME") {
            config.app_name = name;
        }
        if let Some(template) = lookup("ROLE_ADMIN_PURGE_MESSAGE") {
            if !template.contains(NAME_PLACEHOLDER) {
                log::warn!("ROLE_ADMIN_PURGE_MESSAGE has no {NAME_PLACEHOLDER} placeholder");
            }
            config.messages.purge_prompt_template = template;
        }
        config.session_key = lookup("SESSION_KEY");

        config
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
