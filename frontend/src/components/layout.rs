use crate::auth::{logout, use_auth};
use crate::components::icons::*;
use crate::theme::use_theme;
use crate::web::router::{Link, use_router};
use leptos::prelude::*;
use shortdash::analytics::ThemeMode;
use shortdash::route::AppRoute;

/// 已登录页面的公共外框：导航栏、标题、页脚
#[component]
pub fn AppLayout(title: &'static str, children: Children) -> impl IntoView {
    let auth = use_auth();
    let theme = use_theme();
    let router = use_router();
    let user = auth.user();

    let email = move || user.get().map(|u| u.email).unwrap_or_default();
    let initial = move || {
        email()
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase().to_string())
            .unwrap_or_else(|| "?".to_string())
    };

    // 守卫会在认证状态变化后把用户送回登录页
    let on_logout = move |_| logout(&auth);

    view! {
        <div class="min-h-screen flex flex-col bg-base-200 font-sans">
            <div class="navbar bg-base-100 shadow-md px-4">
                <div class="flex-1 gap-2">
                    <Link2 attr:class="h-6 w-6 text-primary" />
                    <Link to=AppRoute::Dashboard class="btn btn-ghost text-xl">
                        "URL Shortener"
                    </Link>
                    <Link to=AppRoute::Dashboard class="btn btn-ghost btn-sm hidden md:inline-flex">
                        "Dashboard"
                    </Link>
                </div>
                <div class="flex-none gap-2">
                    <button
                        class="btn btn-ghost btn-circle"
                        title="Toggle theme"
                        on:click=move |_| theme.toggle()
                    >
                        {move || match theme.mode.get() {
                            ThemeMode::Light => view! { <Moon attr:class="h-5 w-5" /> }.into_any(),
                            ThemeMode::Dark => view! { <Sun attr:class="h-5 w-5" /> }.into_any(),
                        }}
                    </button>
                    <button
                        class="btn btn-primary btn-sm gap-1"
                        on:click=move |_| router.navigate_to(AppRoute::CreateLink)
                    >
                        <Plus attr:class="h-4 w-4" /> "New Link"
                    </button>
                    <div class="dropdown dropdown-end">
                        <div tabindex="0" role="button" class="btn btn-ghost btn-circle avatar placeholder" title="Account settings">
                            <div class="bg-neutral text-neutral-content rounded-full w-9">
                                <span>{initial}</span>
                            </div>
                        </div>
                        <ul tabindex="0" class="dropdown-content z-[1] menu p-2 shadow bg-base-100 rounded-box w-56">
                            <li class="menu-title">{email}</li>
                            <li>
                                <a on:click=on_logout class="text-error">
                                    <LogOut attr:class="h-4 w-4" /> "Logout"
                                </a>
                            </li>
                        </ul>
                    </div>
                </div>
            </div>

            <main class="flex-1 w-full max-w-6xl mx-auto p-4 md:p-8 space-y-6">
                <h1 class="text-2xl font-bold">{title}</h1>
                {children()}
            </main>

            <footer class="footer footer-center p-4 bg-base-100 text-base-content/60 text-sm">
                <p>"URL Shortener & Analytics Dashboard"</p>
            </footer>
        </div>
    }
}
