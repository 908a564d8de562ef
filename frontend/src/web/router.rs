//! 路由服务模块 - 核心引擎
//!
//! 封装了 web_sys 的 History API，所有对 window.history 的操作都集中在此模块。
//! 每次导航和每次认证状态变化都会重新执行守卫（`shortdash::guard::evaluate`）。

use leptos::prelude::*;
use log::info;
use shortdash::guard::{GuardDecision, evaluate};
use shortdash::route::AppRoute;
use shortdash::session::AuthStatus;
use wasm_bindgen::prelude::*;

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// 推送 History 状态
fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 替换 History 状态（用于守卫重定向，不留下历史记录）
fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 路由器服务
///
/// 封装所有路由操作，通过 Signal 驱动界面更新。
/// 认证状态以信号形式注入，与认证模块解耦。
#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
    auth_status: Signal<AuthStatus>,
}

impl RouterService {
    fn new(auth_status: Signal<AuthStatus>) -> Self {
        let initial_route = AppRoute::from_path(&current_path());
        let (current_route, set_route) = signal(initial_route);

        Self {
            current_route,
            set_route,
            auth_status,
        }
    }

    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// 导航（pushState），守卫由 `setup_guard` 统一执行
    pub fn navigate_to(&self, route: AppRoute) {
        push_history_state(&route.to_path());
        self.set_route.set(route);
    }

    /// 浏览器后退/前进
    fn init_popstate_listener(&self) {
        let set_route = self.set_route;

        let closure = Closure::<dyn Fn()>::new(move || {
            set_route.set(AppRoute::from_path(&current_path()));
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }

    /// 路由或认证状态任一变化时重新执行守卫
    fn setup_guard(&self) {
        let current_route = self.current_route;
        let set_route = self.set_route;
        let auth_status = self.auth_status;

        Effect::new(move |_| {
            let route = current_route.get();
            let status = auth_status.get();

            if let GuardDecision::RedirectTo(target) = evaluate(&route, status) {
                info!("[router] {} -> {} ({:?})", route, target, status);
                replace_history_state(&target.to_path());
                set_route.set(target);
            }
        });
    }
}

/// 提供路由服务到 Context 并初始化
fn provide_router(auth_status: Signal<AuthStatus>) -> RouterService {
    let router = RouterService::new(auth_status);

    router.init_popstate_listener();
    router.setup_guard();

    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
#[component]
pub fn Router(
    /// 认证状态信号
    auth_status: Signal<AuthStatus>,
    children: Children,
) -> impl IntoView {
    provide_router(auth_status);

    children()
}

/// 路由出口组件
///
/// 守卫放行时渲染路由对应的视图；等待或即将重定向时只显示中性的加载指示。
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();
    let auth_status = router.auth_status;

    move || {
        let route = router.current_route().get();
        match evaluate(&route, auth_status.get()) {
            GuardDecision::Allow => matcher(route),
            GuardDecision::Pending | GuardDecision::RedirectTo(_) => view! {
                <div class="flex items-center justify-center min-h-screen">
                    <span class="loading loading-spinner loading-lg text-primary"></span>
                </div>
            }
            .into_any(),
        }
    }
}

/// 站内链接：拦截点击，改用 History API 导航
#[component]
pub fn Link(
    /// 目标路由
    to: AppRoute,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let router = use_router();
    let href = to.to_path();

    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        router.navigate_to(to.clone());
    };

    view! {
        <a href=href class=class on:click=on_click>
            {children()}
        </a>
    }
}
