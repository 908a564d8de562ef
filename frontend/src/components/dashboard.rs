use crate::auth::use_auth;
use crate::components::icons::*;
use crate::components::layout::AppLayout;
use crate::components::qr_code::QrCodeImage;
use crate::services::use_services;
use crate::theme::use_theme;
use crate::web::browser::{copy_to_clipboard, open_in_new_tab};
use leptos::prelude::*;
use leptos::task::spawn_local;
use log::warn;
use shortdash::analytics::{ChartKind, embed_url};
use shortdash::listing::{EMPTY_TITLE, LinkListState, RowPanels, empty_hint, paginate};
use shortdash::qr::ROW_QR_SIZE;
use shortdash_shared::Link;
use shortdash_shared::date::format_local_date;
use std::time::Duration;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
    let services = use_services();
    let page_size = services.config.page_size;

    let (list_state, set_list_state) = signal(LinkListState::Loading);
    let (search, set_search) = signal(String::new());
    let (page, set_page) = signal(1usize);
    let (panels, set_panels) = signal(RowPanels::default());
    let (copied_id, set_copied_id) = signal(Option::<String>::None);

    let load_links = {
        let services = services.clone();
        move || {
            let links = services.links.clone();
            let session = auth.session();
            set_list_state.set(LinkListState::Loading);
            spawn_local(async move {
                let result = links.get_links(&session).await;
                if let Err(e) = &result {
                    auth.handle_error(e);
                }
                set_list_state.set(LinkListState::from_result(result));
            });
        }
    };

    // 初始加载
    load_links();

    let current_page = Memo::new(move |_| {
        list_state.with(|state| search.with(|s| paginate(state.links(), s, page.get(), page_size)))
    });

    let on_copy = move |id: String, short_url: String| {
        spawn_local(async move {
            match copy_to_clipboard(&short_url).await {
                Ok(()) => {
                    set_copied_id.set(Some(id.clone()));
                    set_timeout(
                        move || {
                            set_copied_id.update(|c| {
                                if c.as_deref() == Some(id.as_str()) {
                                    *c = None;
                                }
                            })
                        },
                        Duration::from_secs(2),
                    );
                }
                Err(e) => warn!("[dashboard] copy failed: {}", e),
            }
        });
    };

    let is_loading = move || matches!(list_state.get(), LinkListState::Loading);

    view! {
        <AppLayout title="Dashboard">
            <div class="card bg-base-100 shadow-xl">
                <div class="card-body p-0">
                    <div class="flex flex-col md:flex-row md:items-center justify-between gap-4 p-6 pb-2">
                        <label class="input input-bordered flex items-center gap-2 w-full md:max-w-md">
                            <Search attr:class="h-4 w-4 opacity-50" />
                            <input
                                type="text"
                                class="grow"
                                placeholder="Search links..."
                                prop:value=search
                                on:input=move |ev| {
                                    set_search.set(event_target_value(&ev));
                                    set_page.set(1);
                                }
                            />
                        </label>
                        <button
                            on:click={
                                let load_links = load_links.clone();
                                move |_| load_links()
                            }
                            disabled=is_loading
                            class="btn btn-ghost btn-circle"
                            title="Refresh"
                        >
                            <RefreshCw attr:class=move || if is_loading() { "h-5 w-5 animate-spin" } else { "h-5 w-5" } />
                        </button>
                    </div>

                    {move || match list_state.get() {
                        LinkListState::Loading => view! {
                            <div class="text-center py-12 text-base-content/50">
                                <span class="loading loading-spinner loading-md"></span>
                            </div>
                        }
                        .into_any(),
                        LinkListState::Failed(message) => view! {
                            <div role="alert" class="alert alert-error m-6">
                                <AlertCircle attr:class="h-5 w-5" />
                                <span>{message}</span>
                            </div>
                        }
                        .into_any(),
                        LinkListState::Loaded(_) if current_page.with(|p| p.is_empty()) => view! {
                            <div class="text-center py-12">
                                <p class="text-lg font-semibold">{EMPTY_TITLE}</p>
                                <p class="text-base-content/60">{move || empty_hint(&search.get())}</p>
                            </div>
                        }
                        .into_any(),
                        LinkListState::Loaded(_) => view! {
                            <LinkTable
                                items=Signal::derive(move || current_page.get().items)
                                panels=panels
                                copied_id=copied_id
                                on_toggle=Callback::new(move |id: String| {
                                    set_panels.update(|p| p.toggle_analytics(&id))
                                })
                                on_toggle_qr=Callback::new(move |id: String| {
                                    set_panels.update(|p| p.toggle_qr(&id))
                                })
                                on_copy=Callback::new(move |(id, url): (String, String)| on_copy(id, url))
                            />
                        }
                        .into_any(),
                    }}

                    <Show when=move || current_page.with(|p| p.shows_pagination())>
                        <div class="flex justify-center p-6">
                            <div class="join">
                                <For
                                    each=move || 1..=current_page.with(|p| p.total_pages)
                                    key=|n| *n
                                    children=move |n| {
                                        view! {
                                            <button
                                                class=move || if current_page.with(|p| p.page) == n {
                                                    "join-item btn btn-sm btn-active"
                                                } else {
                                                    "join-item btn btn-sm"
                                                }
                                                on:click=move |_| set_page.set(n)
                                            >
                                                {n}
                                            </button>
                                        }
                                    }
                                />
                            </div>
                        </div>
                    </Show>
                </div>
            </div>
        </AppLayout>
    }
}

#[component]
fn LinkTable(
    items: Signal<Vec<Link>>,
    panels: ReadSignal<RowPanels>,
    copied_id: ReadSignal<Option<String>>,
    on_toggle: Callback<String>,
    on_toggle_qr: Callback<String>,
    on_copy: Callback<(String, String)>,
) -> impl IntoView {
    view! {
        <div class="overflow-x-auto w-full">
            <table class="table w-full">
                <thead>
                    <tr>
                        <th>"Original URL"</th>
                        <th>"Short URL"</th>
                        <th class="hidden md:table-cell">"Clicks"</th>
                        <th class="hidden md:table-cell">"Created"</th>
                        <th class="hidden md:table-cell">"Expires"</th>
                        <th>"Status"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || items.get()
                        key=|link| link.id.clone()
                        children=move |link| {
                            view! { <LinkRow
                                    link=link
                                    panels=panels
                                    copied_id=copied_id
                                    on_toggle=on_toggle
                                    on_toggle_qr=on_toggle_qr
                                    on_copy=on_copy
                                /> }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn LinkRow(
    link: Link,
    panels: ReadSignal<RowPanels>,
    copied_id: ReadSignal<Option<String>>,
    on_toggle: Callback<String>,
    on_toggle_qr: Callback<String>,
    on_copy: Callback<(String, String)>,
) -> impl IntoView {
    let id = link.id.clone();
    let is_open = {
        let id = id.clone();
        move || panels.with(|p| p.is_analytics_open(&id))
    };
    let qr_open = {
        let id = id.clone();
        move || panels.with(|p| p.is_qr_open(&id))
    };
    let row_open = is_open.clone();
    let label_open = is_open.clone();
    let is_copied = {
        let id = id.clone();
        move || copied_id.get().as_deref() == Some(id.as_str())
    };

    let short_url = link.short_url.clone();
    let qr_value = link.short_url.clone();
    let copy = {
        let (id, url) = (id.clone(), short_url.clone());
        move |_| on_copy.run((id.clone(), url.clone()))
    };
    let open = {
        let url = short_url.clone();
        move |_| {
            if let Err(e) = open_in_new_tab(&url) {
                warn!("[dashboard] open failed: {}", e);
            }
        }
    };
    let toggle = {
        let id = id.clone();
        move |_| on_toggle.run(id.clone())
    };
    let toggle_qr = {
        let id = id.clone();
        move |_| on_toggle_qr.run(id.clone())
    };

    let status_class = if link.is_expired {
        "badge badge-error badge-outline"
    } else {
        "badge badge-success badge-outline"
    };
    let expires = link
        .expiration_date
        .as_ref()
        .map(format_local_date)
        .unwrap_or_else(|| "Never".to_string());

    view! {
        <tr class:bg-base-200=row_open>
            <td class="max-w-xs truncate" title=link.original_url.clone()>{link.original_url.clone()}</td>
            <td class="font-mono text-sm">{short_url}</td>
            <td class="hidden md:table-cell">{link.total_clicks}</td>
            <td class="hidden md:table-cell">{format_local_date(&link.created_at)}</td>
            <td class="hidden md:table-cell">{expires}</td>
            <td><span class=status_class>{link.status_label()}</span></td>
            <td>
                <div class="flex gap-1 justify-end">
                    <button class="btn btn-ghost btn-sm" title="Copy" on:click=copy>
                        <Clipboard attr:class="h-4 w-4" />
                        {move || if is_copied() { "Copied!" } else { "" }}
                    </button>
                    <button class="btn btn-ghost btn-sm" title="Open" on:click=open>
                        <ExternalLink attr:class="h-4 w-4" />
                    </button>
                    <button class="btn btn-ghost btn-sm" title="Show QR code" on:click=toggle_qr>
                        <QrCode attr:class="h-4 w-4" />
                    </button>
                    <button class="btn btn-ghost btn-sm gap-1" on:click=toggle>
                        <BarChart3 attr:class="h-4 w-4" />
                        {move || if label_open() { "Hide analytics" } else { "Show analytics" }}
                    </button>
                </div>
            </td>
        </tr>
        <Show when=qr_open>
            <tr>
                <td colspan="7">
                    <div class="flex justify-center p-4">
                        <div class="card bg-base-100 shadow p-4 items-center gap-2">
                            <h4 class="text-sm font-medium">"QR Code"</h4>
                            <QrCodeImage value=qr_value.clone() size=ROW_QR_SIZE />
                        </div>
                    </div>
                </td>
            </tr>
        </Show>
        <Show when=is_open>
            <tr>
                <td colspan="7">
                    <AnalyticsPanel link_id=id.clone() short_url=link.short_url.clone() />
                </td>
            </tr>
        </Show>
    }
}

/// 三张嵌入图表，跟随当前主题
#[component]
fn AnalyticsPanel(link_id: String, short_url: String) -> impl IntoView {
    let services = use_services();
    let theme = use_theme();
    let charts = services.config.charts;

    view! {
        <div class="p-4 space-y-4">
            <h3 class="font-semibold">"Analytics for " {short_url}</h3>
            <div class="grid grid-cols-1 lg:grid-cols-3 gap-4">
                {ChartKind::ALL
                    .into_iter()
                    .map(|kind| {
                        let charts = charts.clone();
                        let link_id = link_id.clone();
                        let src = move || {
                            embed_url(&charts, kind, &link_id, theme.mode.get())
                                .map(|u| u.to_string())
                                .unwrap_or_default()
                        };
                        view! {
                            <div class="card bg-base-100 shadow">
                                <div class="card-body p-3">
                                    <h4 class="text-sm font-medium">{kind.title()}</h4>
                                    <iframe
                                        class="w-full h-72 border-0 rounded"
                                        src=src
                                        title=kind.title()
                                    ></iframe>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
