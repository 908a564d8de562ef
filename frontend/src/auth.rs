//! 认证模块
//!
//! 会话存储由应用根部持有，以 Context 注入各页面。
//! 路由服务只拿到派生出的认证状态信号，不直接依赖此模块。

use crate::services::Services;
use crate::web::LocalStorage;
use leptos::prelude::*;
use shortdash::ServiceError;
use shortdash::session::{AuthStatus, LoginOutcome, Session, SessionStore};
use shortdash_shared::UserIdentity;

pub type BrowserSessionStore = SessionStore<LocalStorage>;

/// 认证上下文
///
/// 包含读写信号，通过 Context 在组件间共享。写入只发生在本模块。
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub store: ReadSignal<BrowserSessionStore>,
    set_store: WriteSignal<BrowserSessionStore>,
}

impl AuthContext {
    pub fn new() -> Self {
        let (store, set_store) = signal(SessionStore::new(LocalStorage));
        Self { store, set_store }
    }

    /// 认证状态信号（用于路由服务注入），仅在状态真正变化时通知
    pub fn auth_status_signal(&self) -> Signal<AuthStatus> {
        let store = self.store;
        Memo::new(move |_| store.with(|s| s.auth_status())).into()
    }

    pub fn user(&self) -> Signal<Option<UserIdentity>> {
        let store = self.store;
        Signal::derive(move || store.with(|s| s.user().cloned()))
    }

    /// 当前会话快照，交给领域服务使用
    pub fn session(&self) -> Session {
        self.store.with_untracked(|s| s.session().clone())
    }

    /// 服务调用失败时调用：401 表示令牌已失效，清除会话
    pub fn handle_error(&self, error: &ServiceError) {
        if error.is_unauthorized() {
            self.set_store.update(|s| s.invalidate());
        }
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 启动时的一次性检查：读取持久化的令牌
pub fn init_auth(ctx: &AuthContext) {
    ctx.set_store.update(|s| s.restore());
}

/// 登录
///
/// 导航由路由守卫在认证状态变化后自动完成。
pub async fn login(
    ctx: &AuthContext,
    services: &Services,
    email: String,
    password: String,
) -> LoginOutcome {
    let result = services.auth.login(&email, &password).await;
    ctx.set_store
        .try_update(|s| s.complete_login(result))
        .unwrap_or_else(|| LoginOutcome::Failed {
            message: "Session is no longer available".to_string(),
        })
}

/// 注销并清除状态，不发起网络请求
pub fn logout(ctx: &AuthContext) {
    ctx.set_store.update(|s| s.logout());
}
