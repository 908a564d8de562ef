//! shortdash 前端应用
//!
//! 采用 Context-Driven 的架构：
//! - `services`: 领域服务装配（fetch 传输 + 配置）
//! - `auth`: 会话状态
//! - `web::router`: 路由服务与守卫
//! - `components`: 页面与 UI 组件

mod auth;
mod components {
    pub mod create_link;
    pub mod dashboard;
    mod icons;
    pub mod layout;
    pub mod login;
    mod qr_code;
    pub mod redirect;
}
mod services;
mod theme;

// 原生 Web API 封装模块
// 为核心库的各个 trait 提供浏览器实现，并集中所有对 window 的直接访问。
pub(crate) mod web {
    pub mod browser;
    mod http;
    pub mod router;
    mod storage;
    mod timer;

    pub use http::FetchHttpClient;
    pub use storage::LocalStorage;
    pub use timer::BrowserSleeper;
}

use crate::auth::{AuthContext, init_auth};
use crate::components::create_link::CreateLinkPage;
use crate::components::dashboard::DashboardPage;
use crate::components::login::LoginPage;
use crate::components::redirect::RedirectPage;
use crate::services::provide_services;
use crate::theme::provide_theme;

use leptos::prelude::*;
use shortdash::route::AppRoute;
use web::router::{Link, Router, RouterOutlet};

/// 路由匹配函数
///
/// 只在守卫放行后调用，根据 AppRoute 返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Dashboard => view! { <DashboardPage /> }.into_any(),
        AppRoute::CreateLink => view! { <CreateLinkPage /> }.into_any(),
        AppRoute::Redirect(code) => view! { <RedirectPage short_code=code /> }.into_any(),
        // 根路径总会被守卫重定向，不会走到这里
        AppRoute::Home | AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                    <Link to=AppRoute::Home class="btn btn-primary mt-6">"Back to home"</Link>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 配置与领域服务
    provide_services();
    provide_theme();

    // 2. 会话：先放入 Context，再执行一次性的启动检查
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);
    init_auth(&auth_ctx);

    // 3. 把认证状态信号注入路由服务
    let auth_status = auth_ctx.auth_status_signal();

    view! {
        <Router auth_status=auth_status>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
