use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_IDENTITY_BASE_URL: &str = "https://identitytoolkit.googleapis.com";

const ENV_GLOBAL: &str = "__RESET_PORTAL_ENV";

/// Firebase web app registration. Field names serialize to the keys the
/// Firebase console hands out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirebaseConfig {
    pub api_key: String,
    pub auth_domain: String,
    pub project_id: String,
    pub storage_bucket: String,
    pub messaging_sender_id: String,
    pub app_id: String,
    pub measurement_id: String,
}

impl Default for FirebaseConfig {
    fn default() -> Self {
        Self {
            api_key: "AIzaSyD-reset-portal-demo-key".into(),
            auth_domain: "demo-reset-portal.firebaseapp.com".into(),
            project_id: "demo-reset-portal".into(),
            storage_bucket: "demo-reset-portal.appspot.com".into(),
            messaging_sender_id: "000000000000".into(),
            app_id: "1:000000000000:web:0000000000000000".into(),
            measurement_id: "G-0000000000".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub firebase: FirebaseConfig,
    pub identity_base_url: String,
    pub continue_url: Option<String>,
    pub language_code: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            firebase: FirebaseConfig::default(),
            identity_base_url: DEFAULT_IDENTITY_BASE_URL.to_string(),
            continue_url: None,
            language_code: None,
        }
    }
}

/// Deployment-time overrides read from `window.__RESET_PORTAL_ENV`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub api_key: Option<String>,
    pub auth_domain: Option<String>,
    pub project_id: Option<String>,
    pub storage_bucket: Option<String>,
    pub messaging_sender_id: Option<String>,
    pub app_id: Option<String>,
    pub measurement_id: Option<String>,
    pub identity_base_url: Option<String>,
    pub continue_url: Option<String>,
    pub language_code: Option<String>,
}

impl ConfigOverrides {
    /// Each key is looked up as `apiKey` first, then `API_KEY`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |camel: &str, upper: &str| {
            lookup(camel)
                .filter(|v| !v.trim().is_empty())
                .or_else(|| lookup(upper).filter(|v| !v.trim().is_empty()))
        };
        Self {
            api_key: read("apiKey", "API_KEY"),
            auth_domain: read("authDomain", "AUTH_DOMAIN"),
            project_id: read("projectId", "PROJECT_ID"),
            storage_bucket: read("storageBucket", "STORAGE_BUCKET"),
            messaging_sender_id: read("messagingSenderId", "MESSAGING_SENDER_ID"),
            app_id: read("appId", "APP_ID"),
            measurement_id: read("measurementId", "MEASUREMENT_ID"),
            identity_base_url: read("identityBaseUrl", "IDENTITY_BASE_URL"),
            continue_url: read("continueUrl", "CONTINUE_URL"),
            language_code: read("languageCode", "LANGUAGE_CODE"),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply(self, base: AppConfig) -> AppConfig {
        let AppConfig {
            firebase,
            identity_base_url,
            continue_url,
            language_code,
        } = base;
        AppConfig {
            firebase: FirebaseConfig {
                api_key: self.api_key.unwrap_or(firebase.api_key),
                auth_domain: self.auth_domain.unwrap_or(firebase.auth_domain),
                project_id: self.project_id.unwrap_or(firebase.project_id),
                storage_bucket: self.storage_bucket.unwrap_or(firebase.storage_bucket),
                messaging_sender_id: self
                    .messaging_sender_id
                    .unwrap_or(firebase.messaging_sender_id),
                app_id: self.app_id.unwrap_or(firebase.app_id),
                measurement_id: self.measurement_id.unwrap_or(firebase.measurement_id),
            },
            identity_base_url: self.identity_base_url.unwrap_or(identity_base_url),
            continue_url: self.continue_url.or(continue_url),
            language_code: self.language_code.or(language_code),
        }
    }
}

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

#[cfg(target_arch = "wasm32")]
fn overrides_from_window() -> ConfigOverrides {
    // Expect optional global object: window.__RESET_PORTAL_ENV = { apiKey: "..." }
    let Some(w) = web_sys::window() else {
        return ConfigOverrides::default();
    };
    let any = match js_sys::Reflect::get(&w, &ENV_GLOBAL.into()) {
        Ok(v) if !v.is_undefined() && !v.is_null() => v,
        _ => return ConfigOverrides::default(),
    };
    let obj = js_sys::Object::from(any);
    ConfigOverrides::from_lookup(|key| {
        js_sys::Reflect::get(&obj, &key.into())
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
            .and_then(|v| v.as_string())
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn overrides_from_window() -> ConfigOverrides {
    ConfigOverrides::default()
}

fn resolve() -> AppConfig {
    let overrides = overrides_from_window();
    if !overrides.is_empty() {
        log::info!("Applying runtime overrides from window.{}", ENV_GLOBAL);
    }
    overrides.apply(AppConfig::default())
}

pub fn app_config() -> &'static AppConfig {
    APP_CONFIG.get_or_init(resolve)
}

pub fn init() {
    let config = app_config();
    log::info!(
        "Runtime config initialized (project: {}, identity endpoint: {})",
        config.firebase.project_id,
        config.identity_base_url
    );
}
