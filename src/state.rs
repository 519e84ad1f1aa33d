use crate::config::AppConfig;
use crate::llm::{GeminiClient, LlmClient};
use crate::session::repo::SessionStore;
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub llm: Arc<dyn LlmClient>,
    pub sessions: SessionStore,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);

        let llm = Arc::new(GeminiClient::new(&config.llm)?) as Arc<dyn LlmClient>;
        tracing::info!(model = %config.llm.model, "llm client ready");

        Ok(Self::from_parts(config, llm))
    }

    pub fn from_parts(config: Arc<AppConfig>, llm: Arc<dyn LlmClient>) -> Self {
        Self {
            llm,
            sessions: SessionStore::new(
                Duration::from_secs(config.session.idle_secs),
                config.session.max_sessions,
            ),
            config,
        }
    }

    /// State backed by a canned model that answers every prompt with a valid payload.
    #[cfg(test)]
    pub fn fake() -> Self {
        Self::fake_with(None, Duration::ZERO)
    }

    /// Like `fake()`, but every model call takes `delay`.
    #[cfg(test)]
    pub fn fake_slow(delay: Duration) -> Self {
        Self::fake_with(None, delay)
    }

    /// State whose model always returns `reply`, or fails in transport when `reply` is `None`.
    #[cfg(test)]
    pub fn fake_replying(reply: Option<&str>) -> Self {
        Self::fake_with(Some(reply.map(str::to_string)), Duration::ZERO)
    }

    #[cfg(test)]
    fn fake_with(fixed: Option<Option<String>>, delay: Duration) -> Self {
        use crate::llm::LlmError;
        use async_trait::async_trait;

        struct FakeLlm {
            fixed: Option<Option<String>>,
            delay: Duration,
        }

        #[async_trait]
        impl LlmClient for FakeLlm {
            async fn generate_json(
                &self,
                prompt: String,
                schema: serde_json::Value,
            ) -> Result<String, LlmError> {
                if !self.delay.is_zero() {
                    tokio::time::sleep(self.delay).await;
                }
                match &self.fixed {
                    Some(Some(reply)) => return Ok(reply.clone()),
                    Some(None) => return Err(LlmError::EmptyResponse),
                    None => {}
                }
                if schema["properties"].get("healthInsight").is_some() {
                    return Ok(r#"{"healthInsight":"Balanced choice."}"#.into());
                }
                let quantity = prompt
                    .lines()
                    .find_map(|l| l.strip_prefix("Quantity: "))
                    .unwrap_or("1 serving");
                Ok(serde_json::json!({
                    "calorieCount": 105,
                    "macronutrientBreakdown": { "carbohydrates": 27, "proteins": 1.3, "fats": 0.4 },
                    "servingSize": quantity,
                    "healthInsights": "Good source of potassium."
                })
                .to_string())
            }
        }

        let config = Arc::new(AppConfig {
            host: "127.0.0.1".into(),
            port: 0,
            llm: crate::config::LlmConfig {
                api_key: "fake".into(),
                model: "fake".into(),
                base_url: "https://fake.local".into(),
                timeout_secs: 1,
            },
            session: crate::config::SessionConfig {
                idle_secs: 60 * 60,
                max_sessions: 100,
            },
        });

        let llm = Arc::new(FakeLlm { fixed, delay }) as Arc<dyn LlmClient>;
        Self::from_parts(config, llm)
    }
}
