//! 表单校验模块
//!
//! 所有校验都在发出网络请求之前完成，错误附带出错字段，
//! 以便界面在对应输入框旁边展示。

use chrono::{DateTime, Utc};
use thiserror::Error;
use url::Url;

use crate::CreateLinkRequest;
use crate::date::parse_expiration;

pub const MSG_URL_REQUIRED: &str = "Please enter a URL";
pub const MSG_URL_INVALID: &str = "Please enter a valid URL";
pub const MSG_ALIAS_REQUIRED: &str = "Please enter a custom alias or disable the option";
pub const MSG_EXPIRATION_REQUIRED: &str =
    "Please select an expiration date or disable the option";
pub const MSG_EXPIRATION_INVALID: &str = "Please enter a valid expiration date";
pub const MSG_EXPIRATION_PAST: &str = "Expiration date cannot be in the past";
pub const MSG_CREDENTIALS_REQUIRED: &str = "Please fill in all fields";

/// 出错的表单字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Email,
    Password,
    Url,
    CustomAlias,
    ExpirationDate,
}

/// 字段级校验错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FieldError {
    pub field: FormField,
    pub message: &'static str,
}

impl FieldError {
    pub const fn new(field: FormField, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// 创建短链接表单的原始输入
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateLinkForm {
    pub url: String,
    pub use_custom_alias: bool,
    pub custom_alias: String,
    pub use_expiration: bool,
    pub expiration_date: String,
}

impl CreateLinkForm {
    /// 校验并转换为请求对象
    ///
    /// 校验顺序：URL 必填 → URL 合法 → 自定义别名 → 过期时间。
    /// 只返回第一个错误。关闭的选项不参与校验，也不会进入请求。
    pub fn validate(&self, now: DateTime<Utc>) -> Result<CreateLinkRequest, FieldError> {
        let url = self.url.trim();
        if url.is_empty() {
            return Err(FieldError::new(FormField::Url, MSG_URL_REQUIRED));
        }
        if Url::parse(url).is_err() {
            return Err(FieldError::new(FormField::Url, MSG_URL_INVALID));
        }

        let custom_alias = if self.use_custom_alias {
            let alias = self.custom_alias.trim();
            if alias.is_empty() {
                return Err(FieldError::new(FormField::CustomAlias, MSG_ALIAS_REQUIRED));
            }
            Some(alias.to_string())
        } else {
            None
        };

        let expiration_date = if self.use_expiration {
            if self.expiration_date.trim().is_empty() {
                return Err(FieldError::new(
                    FormField::ExpirationDate,
                    MSG_EXPIRATION_REQUIRED,
                ));
            }
            let expires = parse_expiration(&self.expiration_date).ok_or(FieldError::new(
                FormField::ExpirationDate,
                MSG_EXPIRATION_INVALID,
            ))?;
            if expires < now {
                return Err(FieldError::new(
                    FormField::ExpirationDate,
                    MSG_EXPIRATION_PAST,
                ));
            }
            Some(expires)
        } else {
            None
        };

        Ok(CreateLinkRequest {
            original_url: url.to_string(),
            custom_alias,
            expiration_date,
        })
    }
}

/// 登录表单：两个字段都必须非空
pub fn validate_credentials(email: &str, password: &str) -> Result<(), FieldError> {
    if email.trim().is_empty() {
        return Err(FieldError::new(FormField::Email, MSG_CREDENTIALS_REQUIRED));
    }
    if password.is_empty() {
        return Err(FieldError::new(FormField::Password, MSG_CREDENTIALS_REQUIRED));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 15, 12, 0, 0).unwrap()
    }

    fn form(url: &str) -> CreateLinkForm {
        CreateLinkForm {
            url: url.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn empty_url_is_required() {
        let err = form("").validate(now()).unwrap_err();
        assert_eq!(err.field, FormField::Url);
        assert_eq!(err.to_string(), "Please enter a URL");
    }

    #[test]
    fn unparseable_url_is_rejected() {
        let err = form("not a url").validate(now()).unwrap_err();
        assert_eq!(err, FieldError::new(FormField::Url, MSG_URL_INVALID));
        assert_eq!(err.message, "Please enter a valid URL");
    }

    #[test]
    fn relative_url_is_rejected() {
        let err = form("/just/a/path").validate(now()).unwrap_err();
        assert_eq!(err.field, FormField::Url);
    }

    #[test]
    fn enabled_alias_must_not_be_empty() {
        let mut f = form("https://example.com");
        f.use_custom_alias = true;
        f.custom_alias = "  ".into();
        let err = f.validate(now()).unwrap_err();
        assert_eq!(err.field, FormField::CustomAlias);
        assert_eq!(err.message, MSG_ALIAS_REQUIRED);
    }

    #[test]
    fn disabled_alias_is_ignored() {
        let mut f = form("https://example.com");
        f.custom_alias = "leftover".into();
        let req = f.validate(now()).unwrap();
        assert_eq!(req.custom_alias, None);
    }

    #[test]
    fn enabled_expiration_must_be_selected() {
        let mut f = form("https://example.com");
        f.use_expiration = true;
        let err = f.validate(now()).unwrap_err();
        assert_eq!(err.field, FormField::ExpirationDate);
        assert_eq!(err.message, MSG_EXPIRATION_REQUIRED);
    }

    #[test]
    fn past_expiration_is_rejected() {
        let mut f = form("https://example.com");
        f.use_expiration = true;
        f.expiration_date = "2020-01-01T00:00:00Z".into();
        let err = f.validate(now()).unwrap_err();
        assert_eq!(err.message, "Expiration date cannot be in the past");
    }

    #[test]
    fn malformed_expiration_is_rejected() {
        let mut f = form("https://example.com");
        f.use_expiration = true;
        f.expiration_date = "someday".into();
        let err = f.validate(now()).unwrap_err();
        assert_eq!(err.message, MSG_EXPIRATION_INVALID);
    }

    #[test]
    fn valid_form_builds_request() {
        let f = CreateLinkForm {
            url: " https://example.com/docs ".into(),
            use_custom_alias: true,
            custom_alias: "docs".into(),
            use_expiration: true,
            expiration_date: "2030-01-01T00:00:00Z".into(),
        };
        let req = f.validate(now()).unwrap();
        assert_eq!(req.original_url, "https://example.com/docs");
        assert_eq!(req.custom_alias.as_deref(), Some("docs"));
        assert_eq!(
            req.expiration_date,
            Some(Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn url_error_wins_over_other_fields() {
        let f = CreateLinkForm {
            url: String::new(),
            use_custom_alias: true,
            use_expiration: true,
            ..Default::default()
        };
        assert_eq!(f.validate(now()).unwrap_err().field, FormField::Url);
    }

    #[test]
    fn credentials_must_be_filled() {
        assert!(validate_credentials("intern@dacoid.com", "Test123").is_ok());
        assert_eq!(
            validate_credentials("", "Test123").unwrap_err().field,
            FormField::Email
        );
        assert_eq!(
            validate_credentials("intern@dacoid.com", "").unwrap_err().message,
            MSG_CREDENTIALS_REQUIRED
        );
    }
}
