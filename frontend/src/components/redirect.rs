use crate::components::icons::{AlertCircle, Link2};
use crate::services::use_services;
use crate::web::BrowserSleeper;
use crate::web::browser::assign_location;
use leptos::prelude::*;
use leptos::task::spawn_local;
use log::error;
use shortdash::redirect::{RedirectState, run_redirect};
use shortdash::route::AppRoute;

use crate::web::router::Link;

/// 公开的短码跳转页，无需登录
#[component]
pub fn RedirectPage(short_code: String) -> impl IntoView {
    let services = use_services();
    let (state, set_state) = signal(RedirectState::default());

    spawn_local(async move {
        let settings = services.config.redirect;
        run_redirect(&services.links, &short_code, &BrowserSleeper, settings, |s| {
            set_state.set(s.clone());
            if let RedirectState::NavigatedAway { destination } = s {
                if let Err(e) = assign_location(destination) {
                    error!("[redirect] navigation failed: {}", e);
                }
            }
        })
        .await;
    });

    let progress = move || state.with(|s| s.progress().value());
    let failure = Memo::new(move |_| {
        state.with(|s| match s {
            RedirectState::Failed { message } => Some(message.clone()),
            _ => None,
        })
    });

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content w-full max-w-md">
                <div class="card w-full bg-base-100 shadow-xl">
                    <div class="card-body items-center text-center">
                        {move || match failure.get() {
                            Some(message) => view! {
                                <div class="p-3 bg-error/10 rounded-2xl text-error">
                                    <AlertCircle attr:class="h-8 w-8" />
                                </div>
                                <h2 class="card-title">"Link unavailable"</h2>
                                <p class="text-base-content/70">{message}</p>
                                <Link to=AppRoute::Home class="btn btn-primary mt-4">"Back to home"</Link>
                            }
                            .into_any(),
                            None => view! {
                                <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                                    <Link2 attr:class="h-8 w-8" />
                                </div>
                                <h2 class="card-title">"Redirecting you to your destination..."</h2>
                                <p class="text-base-content/70">
                                    "Please wait while we log your visit and redirect you."
                                </p>
                                <progress
                                    class="progress progress-primary w-full mt-4"
                                    value=progress
                                    max="100"
                                ></progress>
                            }
                            .into_any(),
                        }}
                    </div>
                </div>
            </div>
        </div>
    }
}
