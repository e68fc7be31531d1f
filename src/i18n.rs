//! Localized strings for route titles and user-visible notices.
//!
//! `zh-CN` is both the default and the fallback locale; unknown keys
//! resolve to the key itself.

use serde::{Deserialize, Serialize};

pub const SESSION_EXPIRED_KEY: &str = "message.sessionExpired";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "zh-CN")]
    ZhCn,
    #[serde(rename = "en-US")]
    EnUs,
}

impl Locale {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ZhCn => "zh-CN",
            Self::EnUs => "en-US",
        }
    }

    /// Parse a locale tag. Returns `None` for unsupported tags.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "zh-CN" => Some(Self::ZhCn),
            "en-US" => Some(Self::EnUs),
            _ => None,
        }
    }
}

// (key, zh-CN, en-US)
const MESSAGES: &[(&str, &str, &str)] = &[
    ("route.login", "登录", "Sign in"),
    ("route.dashboard", "仪表盘", "Dashboard"),
    ("route.logs", "日志", "Logs"),
    ("route.logs.subtitle", "查询与分析日志", "Query and analyze logs"),
    ("route.models", "模型", "Models"),
    ("route.models.subtitle", "配置 AI 分析模型", "Configure AI analysis models"),
    ("route.datasources", "数据源", "Data sources"),
    ("route.datasources.new", "新建数据源", "New data source"),
    ("route.datasources.loki", "Loki 配置", "Loki configuration"),
    ("route.datasources.elasticsearch", "Elasticsearch 配置", "Elasticsearch configuration"),
    ("route.datasources.victorialogs", "VictoriaLogs 配置", "VictoriaLogs configuration"),
    ("route.monitors", "监控任务", "Monitors"),
    ("route.channels", "告警渠道", "Alert channels"),
    (SESSION_EXPIRED_KEY, "登录已过期，请重新登录", "Session expired, please sign in again"),
];

/// Resolve `key` for `locale`, falling back to `zh-CN`, then to `key`.
#[must_use]
pub fn translate<'a>(key: &'a str, locale: Locale) -> &'a str {
    let Some(&(_, zh, en)) = MESSAGES.iter().find(|(k, _, _)| *k == key) else {
        return key;
    };
    match locale {
        Locale::EnUs if !en.is_empty() => en,
        _ => zh,
    }
}

#[cfg(test)]
#[path = "i18n_test.rs"]
mod tests;
