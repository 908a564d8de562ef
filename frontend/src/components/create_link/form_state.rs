//! 表单状态管理模块
//!
//! 将零散的 signal 整合为 `FormState` 结构体，负责：
//! - 数据的持有
//! - 数据的重置
//! - 转换为待校验的 `CreateLinkForm`

use leptos::prelude::*;
use shortdash_shared::validation::CreateLinkForm;

/// 表单状态结构体
///
/// 使用 `RwSignal` 因为它实现了 `Copy` trait，适合作为 Props 在组件间传递。
#[derive(Clone, Copy)]
pub struct FormState {
    pub url: RwSignal<String>,
    pub use_custom_alias: RwSignal<bool>,
    pub custom_alias: RwSignal<String>,
    pub use_expiration: RwSignal<bool>,
    /// `datetime-local` 输入框的原始值
    pub expiration_date: RwSignal<String>,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            url: RwSignal::new(String::new()),
            use_custom_alias: RwSignal::new(false),
            custom_alias: RwSignal::new(String::new()),
            use_expiration: RwSignal::new(false),
            expiration_date: RwSignal::new(String::new()),
        }
    }

    /// 重置表单到初始状态（“再创建一个”）
    pub fn reset(&self) {
        self.url.set(String::new());
        self.use_custom_alias.set(false);
        self.custom_alias.set(String::new());
        self.use_expiration.set(false);
        self.expiration_date.set(String::new());
    }

    /// 读取当前输入（不追踪依赖）
    pub fn snapshot(&self) -> CreateLinkForm {
        CreateLinkForm {
            url: self.url.get_untracked(),
            use_custom_alias: self.use_custom_alias.get_untracked(),
            custom_alias: self.custom_alias.get_untracked(),
            use_expiration: self.use_expiration.get_untracked(),
            expiration_date: self.expiration_date.get_untracked(),
        }
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}
