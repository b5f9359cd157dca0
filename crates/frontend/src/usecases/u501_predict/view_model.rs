use crate::shared::api_utils::prediction_client;
use crate::shared::clipboard::copy_to_clipboard_with_callback;
use contracts::domain::a001_feature_set::{default_preset, FeatureField, Preset};
use contracts::shared::config::ClientConfig;
use contracts::shared::form_state::FormStateStore;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BackendStatus {
    Online,
    Offline,
    Checking,
}

impl BackendStatus {
    pub fn display_text(&self) -> &'static str {
        match self {
            BackendStatus::Online => "Backend: Online",
            BackendStatus::Offline => "Backend: Offline",
            BackendStatus::Checking => "Backend: Checking...",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            BackendStatus::Online => "status-online",
            BackendStatus::Offline => "status-offline",
            BackendStatus::Checking => "status-checking",
        }
    }
}

/// ViewModel for the prediction page
#[derive(Clone, Copy)]
pub struct PredictViewModel {
    pub state: RwSignal<FormStateStore>,
    /// "Copied" badge after Copy JSON
    pub copied: RwSignal<bool>,
    pub backend: RwSignal<BackendStatus>,
    config: StoredValue<ClientConfig>,
}

impl PredictViewModel {
    pub fn new(config: ClientConfig) -> Self {
        log::info!("prediction service: {}", config.base_url);
        Self {
            state: RwSignal::new(FormStateStore::from_preset(default_preset())),
            copied: RwSignal::new(false),
            backend: RwSignal::new(BackendStatus::Checking),
            config: StoredValue::new(config),
        }
    }

    pub fn api_base(&self) -> String {
        self.config.with_value(|c| c.base_url.clone())
    }

    pub fn is_busy(&self) -> impl Fn() -> bool + Copy + Send + Sync + 'static {
        let state = self.state;
        move || state.with(|s| s.is_busy())
    }

    pub fn set_field(&self, field: FeatureField, raw: String) {
        self.state.update(|s| s.set_field(field, &raw));
    }

    pub fn apply_preset(&self, preset: &Preset) {
        log::debug!("applying preset {}", preset.id);
        self.state.update(|s| s.apply_preset(preset));
    }

    pub fn clear(&self) {
        self.state.update(|s| s.clear());
    }

    /// Send the current feature set. The payload is captured here, later
    /// edits only affect the next request.
    pub fn predict_command(&self) {
        if self.state.with_untracked(|s| s.is_busy()) {
            return;
        }
        let Some(features) = self.state.try_update(|s| s.begin_request()) else {
            return;
        };

        let state = self.state;
        let client = prediction_client(self.config.get_value());
        spawn_local(async move {
            let outcome = client.predict(&features).await;
            state.update(|s| s.finish_request(outcome));
        });
    }

    pub fn copy_result(&self) {
        let Some(json) = self
            .state
            .with_untracked(|s| s.result().map(|r| r.to_pretty_json()))
        else {
            return;
        };

        let copied = self.copied;
        copy_to_clipboard_with_callback(&json, move || {
            copied.set(true);
            // Сбросить через 2 секунды
            spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(2000).await;
                copied.set(false);
            });
        });
    }

    pub fn check_backend(&self) {
        let backend = self.backend;
        backend.set(BackendStatus::Checking);
        let client = prediction_client(self.config.get_value());
        spawn_local(async move {
            let status = match client.check_health().await {
                Ok(_) => BackendStatus::Online,
                Err(e) => {
                    log::warn!("{}", e);
                    BackendStatus::Offline
                }
            };
            backend.set(status);
        });
    }
}
