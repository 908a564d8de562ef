use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod date;
pub mod protocol;
pub mod validation;

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// 持久化令牌使用的 LocalStorage 键
pub const STORAGE_TOKEN_KEY: &str = "token";
pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const HEADER_CONTENT_TYPE: &str = "Content-Type";
pub const CONTENT_TYPE_JSON: &str = "application/json";

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 已登录用户的身份信息
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub id: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserIdentity,
}

/// 后端持有的短链接记录，客户端只读
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    #[serde(alias = "_id")]
    pub id: String,
    pub original_url: String,
    pub short_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_alias: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub total_clicks: u64,
    #[serde(default)]
    pub is_expired: bool,
}

impl Link {
    pub fn status_label(&self) -> &'static str {
        if self.is_expired { "Expired" } else { "Active" }
    }
}

/// 创建短链接请求
///
/// 每次提交时临时构造，响应后丢弃。可选字段缺省时不序列化。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLinkRequest {
    pub original_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_alias: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<DateTime<Utc>>,
}

/// `201 Created` 的响应体，其余字段忽略
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedLink {
    pub short_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn link_decodes_backend_payload() {
        let raw = r#"{
            "_id": "65f1c0ffee",
            "originalUrl": "https://example.com/a/very/long/path",
            "shortUrl": "http://localhost:5000/abc123",
            "createdAt": "2025-01-02T03:04:05.000Z",
            "totalClicks": 7,
            "isExpired": false
        }"#;

        let link: Link = serde_json::from_str(raw).unwrap();
        assert_eq!(link.id, "65f1c0ffee");
        assert_eq!(link.total_clicks, 7);
        assert_eq!(link.custom_alias, None);
        assert_eq!(link.expiration_date, None);
        assert_eq!(
            link.created_at,
            Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap()
        );
        assert_eq!(link.status_label(), "Active");
    }

    #[test]
    fn create_request_omits_absent_options() {
        let req = CreateLinkRequest {
            original_url: "https://example.com".into(),
            custom_alias: None,
            expiration_date: None,
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value, serde_json::json!({ "originalUrl": "https://example.com" }));
    }

    #[test]
    fn create_request_uses_camel_case_keys() {
        let req = CreateLinkRequest {
            original_url: "https://example.com".into(),
            custom_alias: Some("docs".into()),
            expiration_date: Some(Utc.with_ymd_and_hms(2030, 6, 1, 12, 0, 0).unwrap()),
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["customAlias"], "docs");
        assert_eq!(value["expirationDate"], "2030-06-01T12:00:00Z");
    }
}
