//! 俱乐部列表
//!
//! 名称/简介搜索 + 分类筛选，卡片列表与详情弹窗。加入俱乐部只记录日志。

use clubspot_shared::search::{category_counts, filter_clubs};
use clubspot_shared::{CategoryFilter, Club, fixtures};
use leptos::prelude::*;

use crate::components::icons::*;

fn join_club(id: u32) {
    tracing::info!(club_id = id, "Joining club {id}");
}

#[component]
fn ClubCard(club: &'static Club, #[prop(into)] on_details: Callback<u32>) -> impl IntoView {
    let id = club.id;
    let (badge, badge_text) = if club.is_joined() {
        ("badge badge-primary", "Joined")
    } else {
        ("badge badge-secondary", "Available")
    };

    view! {
        <div class="card bg-base-100 shadow hover:shadow-lg transition-shadow overflow-hidden">
            <figure class="relative">
                <img src=club.image alt=club.name class="w-full h-48 object-cover" />
                <div class="absolute top-4 right-4">
                    <span class=badge>{badge_text}</span>
                </div>
            </figure>
            <div class="card-body">
                <div class="flex items-start justify-between">
                    <div>
                        <h3 class="card-title text-lg">{club.name}</h3>
                        <div class="flex items-center gap-2 mt-1 text-sm text-base-content/70">
                            <Star attr:class="w-4 h-4 text-yellow-500 fill-current" />
                            <span>{club.rating.to_string()}</span>
                            <span class="opacity-40">"•"</span>
                            <Users attr:class="w-4 h-4" />
                            <span>{format!("{} members", club.members)}</span>
                        </div>
                    </div>
                    <span class=club.category.badge_class()>{club.category.label()}</span>
                </div>
                {club.position.map(|p| view! { <span class="badge badge-outline w-fit">{p}</span> })}
                <p class="text-sm leading-relaxed mb-4">{club.description}</p>
                <div class="card-actions justify-between">
                    <button class="btn btn-sm btn-outline" on:click=move |_| on_details.run(id)>
                        "View Details"
                    </button>
                    <Show when=move || !club.is_joined()>
                        <button class="btn btn-sm btn-primary gap-1" on:click=move |_| join_club(id)>
                            <Plus attr:class="w-4 h-4" /> "Join Club"
                        </button>
                    </Show>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ClubDetail(club: &'static Club, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let id = club.id;
    let events = club
        .upcoming_events
        .iter()
        .map(|e| {
            view! {
                <div class="flex items-center justify-between p-2 bg-base-200 rounded">
                    <span class="text-sm">{e.name}</span>
                    <span class="text-xs text-base-content/60">{e.date}</span>
                </div>
            }
        })
        .collect_view();
    let achievements = club
        .achievements
        .iter()
        .map(|a| {
            view! {
                <div class="flex items-center gap-2">
                    <Award attr:class="w-4 h-4 text-yellow-500" />
                    <span class="text-sm">{*a}</span>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="fixed inset-0 bg-black/50 flex items-center justify-center p-4 z-50">
            <div class="bg-base-100 rounded-lg max-w-2xl w-full max-h-[90vh] overflow-y-auto">
                <div class="relative">
                    <img src=club.image alt=club.name class="w-full h-64 object-cover" />
                    <button
                        class="btn btn-sm btn-outline bg-base-100 absolute top-4 right-4"
                        on:click=move |_| on_close.run(())
                    >
                        "✕"
                    </button>
                </div>
                <div class="p-6">
                    <div class="flex items-start justify-between mb-4">
                        <div>
                            <h2 class="text-2xl mb-2">{club.name}</h2>
                            <div class="flex items-center gap-4 text-base-content/70">
                                <div class="flex items-center gap-1">
                                    <Star attr:class="w-4 h-4 text-yellow-500 fill-current" />
                                    <span>{club.rating.to_string()}</span>
                                </div>
                                <div class="flex items-center gap-1">
                                    <Users attr:class="w-4 h-4" />
                                    <span>{format!("{} members", club.members)}</span>
                                </div>
                                <span>"Est. " {club.established}</span>
                            </div>
                        </div>
                        {club.position.map(|p| view! { <span class="badge badge-primary">{p}</span> })}
                    </div>

                    <p class="mb-6 leading-relaxed">{club.description}</p>

                    <div class="grid md:grid-cols-2 gap-6 mb-6">
                        <div>
                            <h3 class="text-lg mb-3">"Upcoming Events"</h3>
                            <div class="space-y-2">{events}</div>
                        </div>
                        <div>
                            <h3 class="text-lg mb-3">"Achievements"</h3>
                            <div class="space-y-2">{achievements}</div>
                        </div>
                    </div>

                    <div class="flex items-center justify-between pt-4 border-t border-base-300">
                        <div>
                            <span class="text-sm text-base-content/70">"President: "</span>
                            <span class="text-sm">{club.president}</span>
                        </div>
                        <Show when=move || !club.is_joined()>
                            <button
                                class="btn btn-primary gap-2"
                                on:click=move |_| {
                                    join_club(id);
                                    on_close.run(());
                                }
                            >
                                <Plus attr:class="w-4 h-4" /> "Join This Club"
                            </button>
                        </Show>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn ClubsPage() -> impl IntoView {
    let (query, set_query) = signal(String::new());
    let (category, set_category) = signal(CategoryFilter::All);
    let (selected, set_selected) = signal(Option::<u32>::None);

    let all = fixtures::clubs();
    let filtered = Memo::new(move |_| {
        query.with(|q| filter_clubs(all, q, category.get()))
    });

    let filter_buttons = category_counts(all)
        .into_iter()
        .map(|(filter, count)| {
            view! {
                <button
                    class=move || if category.get() == filter {
                        "btn btn-primary whitespace-nowrap"
                    } else {
                        "btn btn-outline whitespace-nowrap"
                    }
                    on:click=move |_| set_category.set(filter)
                >
                    {format!("{} ({count})", filter.label())}
                </button>
            }
        })
        .collect_view();

    let on_details = Callback::new(move |id: u32| set_selected.set(Some(id)));
    let on_close = Callback::new(move |()| set_selected.set(None));

    view! {
        <div class="max-w-7xl mx-auto p-6">
            <div class="mb-8">
                <h1 class="text-3xl mb-2">"Discover Clubs"</h1>
                <p class="text-base-content/70 text-lg">"Find your passion and connect with like-minded students"</p>
            </div>

            <div class="flex flex-col lg:flex-row gap-4 mb-6">
                <label class="input input-bordered flex items-center gap-2 flex-1">
                    <Search attr:class="h-4 w-4 opacity-50" />
                    <input
                        type="text"
                        class="grow"
                        placeholder="Search clubs..."
                        on:input=move |ev| set_query.set(event_target_value(&ev))
                        prop:value=query
                    />
                </label>
                <div class="flex gap-2 overflow-x-auto">{filter_buttons}</div>
            </div>

            <p class="text-base-content/70 mb-6">
                {move || format!("Showing {} of {} clubs", filtered.with(Vec::len), all.len())}
            </p>

            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                {move || {
                    filtered
                        .get()
                        .into_iter()
                        .map(|club| view! { <ClubCard club=club on_details=on_details /> })
                        .collect_view()
                }}
            </div>

            {move || {
                selected
                    .get()
                    .and_then(fixtures::find_club)
                    .map(|club| view! { <ClubDetail club=club on_close=on_close /> })
            }}
        </div>
    }
}
