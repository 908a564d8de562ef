use crate::auth::{login, use_auth};
use crate::components::icons::{AlertCircle, Eye, EyeOff, Link2};
use crate::services::use_services;
use leptos::prelude::*;
use leptos::task::spawn_local;
use shortdash::session::LoginOutcome;
use shortdash_shared::validation::validate_credentials;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let services = use_services();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (show_password, set_show_password) = signal(false);
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get_untracked() {
            return;
        }

        let (email, password) = (email.get_untracked(), password.get_untracked());
        if let Err(e) = validate_credentials(&email, &password) {
            set_error_msg.set(Some(e.message.to_string()));
            return;
        }

        set_is_submitting.set(true);
        set_error_msg.set(None);

        let services = services.clone();
        spawn_local(async move {
            // 成功后守卫会把用户送到面板
            if let LoginOutcome::Failed { message } =
                login(&auth, &services, email, password).await
            {
                set_error_msg.set(Some(message));
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <div class="flex flex-col items-center gap-2">
                        <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                            <Link2 attr:class="h-8 w-8" />
                        </div>
                        <h1 class="text-3xl font-bold">"Sign in"</h1>
                        <p class="text-base-content/70">"URL Shortener & Analytics Dashboard"</p>
                    </div>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <AlertCircle attr:class="h-5 w-5 shrink-0" />
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="email">
                                <span class="label-text">"Email Address"</span>
                            </label>
                            <input
                                id="email"
                                type="email"
                                autocomplete="email"
                                placeholder="you@example.com"
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                prop:value=email
                                class="input input-bordered"
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"Password"</span>
                            </label>
                            <div class="join w-full">
                                <input
                                    id="password"
                                    type=move || if show_password.get() { "text" } else { "password" }
                                    autocomplete="current-password"
                                    placeholder="••••••••"
                                    on:input=move |ev| set_password.set(event_target_value(&ev))
                                    prop:value=password
                                    class="input input-bordered join-item w-full"
                                />
                                <button
                                    type="button"
                                    class="btn join-item"
                                    title="Toggle password visibility"
                                    on:click=move |_| set_show_password.update(|v| *v = !*v)
                                >
                                    {move || if show_password.get() {
                                        view! { <EyeOff attr:class="h-4 w-4" /> }.into_any()
                                    } else {
                                        view! { <Eye attr:class="h-4 w-4" /> }.into_any()
                                    }}
                                </button>
                            </div>
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Signing in..." }.into_any()
                                } else {
                                    "Sign In".into_any()
                                }}
                            </button>
                        </div>
                        <p class="text-center text-sm text-base-content/60 mt-2">
                            "Use: intern@dacoid.com / Test123"
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}
