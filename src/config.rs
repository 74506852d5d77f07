use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::assistant::worker::DEFAULT_REPLY_DELAY_MS;
use crate::contact::{PRIMARY_RECIPIENT, SECONDARY_RECIPIENT};

pub const DEFAULT_CONFIG_PATH: &str = "config/assistant.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Số WhatsApp nhận form liên hệ (quốc tế, không có `+`)
    pub primary_phone: String,
    pub secondary_phone: String,
    /// Độ trễ giả lập "đang gõ" trước khi bot trả lời
    pub reply_delay_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            primary_phone: PRIMARY_RECIPIENT.to_string(),
            secondary_phone: SECONDARY_RECIPIENT.to_string(),
            reply_delay_ms: DEFAULT_REPLY_DELAY_MS,
        }
    }
}

impl AppConfig {
    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }

    pub fn recipient(&self, secondary: bool) -> &str {
        if secondary {
            &self.secondary_phone
        } else {
            &self.primary_phone
        }
    }

    /// Số không hợp lệ (rỗng, có `+`, khoảng trắng...) thì quay về số mặc định.
    fn with_valid_phones(mut self) -> Self {
        if !is_wa_number(&self.primary_phone) {
            log::warn!(
                "Invalid primary_phone {:?}; using {PRIMARY_RECIPIENT}",
                self.primary_phone
            );
            self.primary_phone = PRIMARY_RECIPIENT.to_string();
        }
        if !is_wa_number(&self.secondary_phone) {
            log::warn!(
                "Invalid secondary_phone {:?}; using {SECONDARY_RECIPIENT}",
                self.secondary_phone
            );
            self.secondary_phone = SECONDARY_RECIPIENT.to_string();
        }
        self
    }
}

/// wa.me chỉ nhận chữ số, mã quốc gia đứng đầu, không có `+`.
fn is_wa_number(phone: &str) -> bool {
    !phone.is_empty() && phone.bytes().all(|b| b.is_ascii_digit())
}

pub fn load_config(path: &str) -> AppConfig {
    let path = Path::new(path);
    match fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<AppConfig>(&content) {
            Ok(config) => config.with_valid_phones(),
            Err(err) => {
                log::warn!("Failed to parse config file {}: {err}", path.display());
                AppConfig::default()
            }
        },
        Err(err) => {
            log::info!(
                "Config file {} not found ({err}); using defaults",
                path.display()
            );
            AppConfig::default()
        }
    }
}

pub fn save_config(path: &str, config: &AppConfig) -> std::io::Result<()> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)
}
