//! 生成式 AI 上游客户端
//!
//! HR 侧的 AI 功能 (简历筛选、情感分析、聊天助手等) 全部是对
//! 外部生成式模型 HTTP API 的薄代理：拼 prompt → 调用 → 取回文本。
//! 这里收敛为一个 [`GenerativeClient`] trait，HTTP 实现是
//! [`GeminiClient`]；测试用固定应答的实现替换。
//!
//! 上传的文件字节只在内存中以 base64 内联转发，从不落盘。

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde_json::{Value, json};
use thiserror::Error;

/// 生成式 AI 上游配置
#[derive(Debug, Clone)]
pub struct GenerativeConfig {
    /// API 基地址
    pub api_url: String,
    /// API Key (query 参数透传)
    pub api_key: String,
    /// 模型名称
    pub model: String,
}

impl GenerativeConfig {
    /// 从环境变量加载 (GENAI_API_URL / GENAI_API_KEY / GENAI_MODEL)
    pub fn from_env() -> Self {
        Self {
            api_url: std::env::var("GENAI_API_URL")
                .unwrap_or_else(|_| "https://generativelanguage.googleapis.com/v1beta".into()),
            api_key: std::env::var("GENAI_API_KEY").unwrap_or_default(),
            model: std::env::var("GENAI_MODEL")
                .unwrap_or_else(|_| "gemini-2.5-flash-preview-09-2025".into()),
        }
    }
}

/// 内联文件附件 (简历 PDF、面试音频等)
#[derive(Debug, Clone)]
pub struct Attachment {
    pub mime_type: String,
    pub data: Vec<u8>,
}

/// 一次生成请求：系统指令 + 用户内容 + 可选附件
#[derive(Debug, Clone)]
pub struct GenerativePrompt {
    pub system: String,
    pub user: String,
    pub attachment: Option<Attachment>,
}

impl GenerativePrompt {
    pub fn new(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            user: user.into(),
            attachment: None,
        }
    }

    pub fn with_attachment(mut self, mime_type: impl Into<String>, data: Vec<u8>) -> Self {
        self.attachment = Some(Attachment {
            mime_type: mime_type.into(),
            data,
        });
        self
    }
}

/// 生成式 AI 错误
#[derive(Error, Debug)]
pub enum GenerativeError {
    #[error("AI API call failed: {0}")]
    Request(String),

    #[error("AI API call failed with status: {status} - {message}")]
    Upstream { status: u16, message: String },

    #[error("No content returned from AI")]
    Empty,
}

/// 生成式 AI 客户端接口
///
/// handler 只依赖这个 trait，不关心上游是哪个模型服务。
#[async_trait]
pub trait GenerativeClient: Send + Sync + std::fmt::Debug {
    /// 发送 prompt (可带附件)，返回模型的文本应答
    async fn generate(&self, prompt: GenerativePrompt) -> Result<String, GenerativeError>;
}

/// Google Generative Language API 客户端
#[derive(Debug, Clone)]
pub struct GeminiClient {
    config: GenerativeConfig,
    http: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: GenerativeConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.config.api_url, self.config.model, self.config.api_key
        )
    }

    fn request_body(prompt: &GenerativePrompt) -> Value {
        let mut parts = vec![json!({ "text": prompt.user })];

        if let Some(attachment) = &prompt.attachment {
            parts.push(json!({
                "inlineData": {
                    "mimeType": attachment.mime_type,
                    "data": BASE64.encode(&attachment.data),
                }
            }));
        }

        json!({
            "contents": [{ "parts": parts }],
            "systemInstruction": {
                "parts": [{ "text": prompt.system }]
            }
        })
    }
}

#[async_trait]
impl GenerativeClient for GeminiClient {
    async fn generate(&self, prompt: GenerativePrompt) -> Result<String, GenerativeError> {
        let response = self
            .http
            .post(self.endpoint())
            .json(&Self::request_body(&prompt))
            .send()
            .await
            .map_err(|e| GenerativeError::Request(e.to_string()))?;

        let status = response.status();
        let body: Value = response
            .json()
            .await
            .map_err(|e| GenerativeError::Request(e.to_string()))?;

        if !status.is_success() {
            let message = body
                .pointer("/error/message")
                .and_then(Value::as_str)
                .unwrap_or("unknown upstream error")
                .to_string();
            tracing::error!(status = %status, message = %message, "AI upstream error");
            return Err(GenerativeError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        let text = body
            .pointer("/candidates/0/content/parts/0/text")
            .and_then(Value::as_str)
            .map(str::to_string);

        text.filter(|t| !t.is_empty())
            .ok_or(GenerativeError::Empty)
    }
}
