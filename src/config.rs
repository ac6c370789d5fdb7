use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub env: String,
    pub db_main_api: DatabaseConfig,
    pub db_other_api: DatabaseConfig,
    pub main_api: ApiConfig,
    pub other_api: ApiConfig,
    #[serde(default)]
    pub dashboards: DashboardConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub uri: String,
    pub database: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub port: u16,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DashboardConfig {
    #[serde(default)]
    pub kibana_url: Option<String>,
    #[serde(default)]
    pub jaeger_url: Option<String>,
    #[serde(default)]
    pub redis_commander_url: Option<String>,
}

impl ApiConfig {
    /// 对外可见的基础 URL,未配置时退回本机地址
    pub fn external_url(&self) -> String {
        self.url
            .clone()
            .unwrap_or_else(|| format!("http://localhost:{}", self.port))
    }
}

impl Config {
    /// 从 CONFIG_PATH 指定的配置文件(可选)和进程环境变量加载配置
    pub fn from_env() -> AppResult<Self> {
        use std::io::ErrorKind;

        let vars: HashMap<String, String> = env::vars().collect();
        let config_path = vars
            .get("CONFIG_PATH")
            .cloned()
            .unwrap_or_else(|| "config.toml".to_string());

        // 尝试读取配置文件,如果不存在则完全依赖环境变量
        match std::fs::read_to_string(&config_path) {
            Ok(text) => Self::from_sources(Some(&text), &vars),
            Err(e) if e.kind() == ErrorKind::NotFound => Self::from_sources(None, &vars),
            Err(e) => Err(AppError::ConfigError(format!(
                "无法读取配置文件 {config_path}: {e}"
            ))),
        }
    }

    /// 从显式给定的配置文件内容和键值对构建配置,便于隔离测试
    pub fn from_sources(file: Option<&str>, vars: &HashMap<String, String>) -> AppResult<Self> {
        let mut config: Config = match file {
            // 有配置文件:先解析再用环境变量覆盖
            Some(text) => toml::from_str(text)
                .map_err(|e| AppError::ConfigError(format!("解析配置文件失败: {e}")))?,
            // 无配置文件:所有必填项都必须由环境变量提供
            None => {
                let mut missing: Vec<&str> = Vec::new();
                let mut require = |key: &'static str| -> String {
                    match vars.get(key) {
                        Some(value) => value.clone(),
                        None => {
                            missing.push(key);
                            String::new()
                        }
                    }
                };

                let env_name = require("ENV");
                let main_uri = require("MAIN_API_DATABASE_URI");
                let main_database = require("MAIN_API_DATABASE_NAME");
                let other_uri = require("OTHER_API_DATABASE_URI");
                let other_database = require("OTHER_API_DATABASE_NAME");
                let main_port = require("MAIN_API_PORT");
                let other_port = require("OTHER_API_PORT");

                // 缺失的必填项一次性全部报告
                if !missing.is_empty() {
                    return Err(AppError::ConfigError(format!(
                        "缺少必需的环境变量: {}",
                        missing.join(", ")
                    )));
                }

                Config {
                    env: env_name,
                    db_main_api: DatabaseConfig {
                        uri: main_uri,
                        database: main_database,
                    },
                    db_other_api: DatabaseConfig {
                        uri: other_uri,
                        database: other_database,
                    },
                    main_api: ApiConfig {
                        port: parse_port("MAIN_API_PORT", &main_port)?,
                        url: None,
                    },
                    other_api: ApiConfig {
                        port: parse_port("OTHER_API_PORT", &other_port)?,
                        url: None,
                    },
                    dashboards: DashboardConfig::default(),
                }
            }
        };

        // 环境变量覆盖(即便文件存在时也覆盖)
        if let Some(v) = vars.get("ENV") {
            config.env = v.clone();
        }
        if let Some(v) = vars.get("MAIN_API_DATABASE_URI") {
            config.db_main_api.uri = v.clone();
        }
        if let Some(v) = vars.get("MAIN_API_DATABASE_NAME") {
            config.db_main_api.database = v.clone();
        }
        if let Some(v) = vars.get("OTHER_API_DATABASE_URI") {
            config.db_other_api.uri = v.clone();
        }
        if let Some(v) = vars.get("OTHER_API_DATABASE_NAME") {
            config.db_other_api.database = v.clone();
        }
        if let Some(v) = vars.get("MAIN_API_PORT") {
            config.main_api.port = parse_port("MAIN_API_PORT", v)?;
        }
        if let Some(v) = vars.get("OTHER_API_PORT") {
            config.other_api.port = parse_port("OTHER_API_PORT", v)?;
        }
        if let Some(v) = vars.get("MAIN_API_URL") {
            config.main_api.url = Some(v.clone());
        }
        if let Some(v) = vars.get("OTHER_API_URL") {
            config.other_api.url = Some(v.clone());
        }
        if let Some(v) = vars.get("KIBANA_URL") {
            config.dashboards.kibana_url = Some(v.clone());
        }
        if let Some(v) = vars.get("JAEGER_URL") {
            config.dashboards.jaeger_url = Some(v.clone());
        }
        if let Some(v) = vars.get("REDIS_COMMANDER_URL") {
            config.dashboards.redis_commander_url = Some(v.clone());
        }

        Ok(config)
    }
}

fn parse_port(key: &str, value: &str) -> AppResult<u16> {
    value
        .parse::<u16>()
        .map_err(|_| AppError::ConfigError(format!("环境变量 {key} 不是有效端口: {value}")))
}
