mod form_state;

use crate::auth::use_auth;
use crate::components::icons::{AlertCircle, Clipboard, ExternalLink, Link2, QrCode};
use crate::components::qr_code::QrCodeImage;
use crate::components::layout::AppLayout;
use crate::services::use_services;
use crate::web::browser::{copy_to_clipboard, open_in_new_tab};
use crate::web::router::use_router;
use form_state::FormState;
use leptos::prelude::*;
use leptos::task::spawn_local;
use log::warn;
use shortdash::create::{CreateLinkError, CreateLinkState, prepare, submit};
use shortdash::qr::RESULT_QR_SIZE;
use shortdash::route::AppRoute;
use shortdash_shared::date;
use shortdash_shared::validation::FormField;
use std::time::Duration;

#[component]
pub fn CreateLinkPage() -> impl IntoView {
    let form = FormState::new();
    let state = RwSignal::new(CreateLinkState::default());
    // 只在“是否已创建”变化时切换视图，避免提交过程中重建表单
    let created = Memo::new(move |_| state.with(|s| s.short_url().map(str::to_string)));

    view! {
        <AppLayout title="Create Link">
            <div class="flex justify-center">
                <div class="card bg-base-100 shadow-xl w-full max-w-2xl">
                    <div class="card-body">
                        {move || match created.get() {
                            Some(short_url) => view! {
                                <CreatedView short_url=short_url form=form state=state />
                            }
                            .into_any(),
                            None => view! { <LinkForm form=form state=state /> }.into_any(),
                        }}
                    </div>
                </div>
            </div>
        </AppLayout>
    }
}

#[component]
fn LinkForm(form: FormState, state: RwSignal<CreateLinkState>) -> impl IntoView {
    let auth = use_auth();
    let services = use_services();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if state.with_untracked(CreateLinkState::is_submitting) {
            return;
        }

        // 校验失败时不发出任何请求
        let request = match prepare(&form.snapshot(), date::now()) {
            Ok(request) => request,
            Err(invalid) => {
                state.set(invalid);
                return;
            }
        };

        state.set(CreateLinkState::Submitting);
        let links = services.links.clone();
        let session = auth.session();
        spawn_local(async move {
            let next = submit(&links, &session, &request).await;
            if let Some(CreateLinkError::Service(e)) = next.error() {
                auth.handle_error(e);
            }
            state.set(next);
        });
    };

    let field_error = move |field: FormField| state.with(|s| s.field_error(field));
    let banner = move || state.with(CreateLinkState::banner);
    let submitting = move || state.with(CreateLinkState::is_submitting);
    let min_date = date::local_input_min();

    view! {
        <form class="space-y-4" on:submit=on_submit>
            <h2 class="card-title">"Shorten a URL"</h2>

            <Show when=move || banner().is_some()>
                <div role="alert" class="alert alert-error text-sm py-2">
                    <AlertCircle attr:class="h-5 w-5 shrink-0" />
                    <span>{move || banner().unwrap_or_default()}</span>
                </div>
            </Show>

            <div class="form-control">
                <label class="label" for="url">
                    <span class="label-text">"URL to shorten"</span>
                </label>
                <input
                    id="url"
                    type="text"
                    placeholder="https://example.com/a/very/long/path"
                    class=move || if field_error(FormField::Url).is_some() {
                        "input input-bordered input-error"
                    } else {
                        "input input-bordered"
                    }
                    prop:value=form.url
                    on:input=move |ev| form.url.set(event_target_value(&ev))
                />
                <FieldHint message=Signal::derive(move || field_error(FormField::Url)) />
            </div>

            <div class="form-control">
                <label class="label cursor-pointer justify-start gap-3">
                    <input
                        type="checkbox"
                        class="toggle toggle-primary"
                        prop:checked=form.use_custom_alias
                        on:change=move |ev| form.use_custom_alias.set(event_target_checked(&ev))
                    />
                    <span class="label-text">"Use custom alias"</span>
                </label>
            </div>
            <Show when=move || form.use_custom_alias.get()>
                <div class="form-control">
                    <label class="label" for="alias">
                        <span class="label-text">"Custom alias"</span>
                    </label>
                    <input
                        id="alias"
                        type="text"
                        placeholder="my-link"
                        class="input input-bordered"
                        prop:value=form.custom_alias
                        on:input=move |ev| form.custom_alias.set(event_target_value(&ev))
                    />
                    <FieldHint message=Signal::derive(move || field_error(FormField::CustomAlias)) />
                </div>
            </Show>

            <div class="form-control">
                <label class="label cursor-pointer justify-start gap-3">
                    <input
                        type="checkbox"
                        class="toggle toggle-primary"
                        prop:checked=form.use_expiration
                        on:change=move |ev| form.use_expiration.set(event_target_checked(&ev))
                    />
                    <span class="label-text">"Set expiration date"</span>
                </label>
            </div>
            <Show when=move || form.use_expiration.get()>
                <div class="form-control">
                    <label class="label" for="expires">
                        <span class="label-text">"Expiration date"</span>
                    </label>
                    <input
                        id="expires"
                        type="datetime-local"
                        class="input input-bordered"
                        min=min_date.clone()
                        prop:value=form.expiration_date
                        on:input=move |ev| form.expiration_date.set(event_target_value(&ev))
                    />
                    <FieldHint message=Signal::derive(move || field_error(FormField::ExpirationDate)) />
                </div>
            </Show>

            <div class="card-actions justify-end pt-2">
                <button type="submit" class="btn btn-primary" disabled=submitting>
                    {move || if submitting() {
                        view! { <span class="loading loading-spinner"></span> "Creating..." }.into_any()
                    } else {
                        "Create Link".into_any()
                    }}
                </button>
            </div>
        </form>
    }
}

/// 字段下方的校验提示
#[component]
fn FieldHint(message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.with(Option::is_some)>
            <label class="label">
                <span class="label-text-alt text-error">{move || message.get().unwrap_or_default()}</span>
            </label>
        </Show>
    }
}

#[component]
fn CreatedView(
    short_url: String,
    form: FormState,
    state: RwSignal<CreateLinkState>,
) -> impl IntoView {
    let router = use_router();
    let (copied, set_copied) = signal(false);
    let (show_qr, set_show_qr) = signal(false);
    let qr_value = short_url.clone();

    let copy = {
        let url = short_url.clone();
        move |_| {
            let url = url.clone();
            spawn_local(async move {
                match copy_to_clipboard(&url).await {
                    Ok(()) => {
                        set_copied.set(true);
                        set_timeout(move || set_copied.set(false), Duration::from_secs(2));
                    }
                    Err(e) => warn!("[create] copy failed: {}", e),
                }
            });
        }
    };
    let open = {
        let url = short_url.clone();
        move |_| {
            if let Err(e) = open_in_new_tab(&url) {
                warn!("[create] open failed: {}", e);
            }
        }
    };
    let create_another = move |_| {
        set_show_qr.set(false);
        form.reset();
        state.set(CreateLinkState::default());
    };

    view! {
        <div class="space-y-6 text-center">
            <div class="flex flex-col items-center gap-2">
                <div class="p-3 bg-success/10 rounded-2xl text-success">
                    <Link2 attr:class="h-8 w-8" />
                </div>
                <h2 class="text-xl font-bold">"Your short link is ready"</h2>
            </div>

            <div class="bg-base-200 rounded-box p-4 font-mono break-all">{short_url}</div>

            <div class="grid grid-cols-1 sm:grid-cols-3 gap-3">
                <button class="btn btn-outline gap-2" on:click=copy>
                    <Clipboard attr:class="h-4 w-4" />
                    {move || if copied.get() { "Copied!" } else { "Copy Link" }}
                </button>
                <button class="btn btn-outline gap-2" on:click=open>
                    <ExternalLink attr:class="h-4 w-4" /> "Open"
                </button>
                <button class="btn btn-outline gap-2" on:click=move |_| set_show_qr.update(|v| *v = !*v)>
                    <QrCode attr:class="h-4 w-4" />
                    {move || if show_qr.get() { "Hide QR Code" } else { "Show QR Code" }}
                </button>
            </div>

            <Show when=move || show_qr.get()>
                <div class="flex justify-center">
                    <QrCodeImage value=qr_value.clone() size=RESULT_QR_SIZE />
                </div>
            </Show>

            <div class="flex justify-center gap-3">
                <button class="btn btn-ghost" on:click=create_another>"Create another"</button>
                <button class="btn btn-primary" on:click=move |_| router.navigate_to(AppRoute::Dashboard)>
                    "Go to dashboard"
                </button>
            </div>
        </div>
    }
}
