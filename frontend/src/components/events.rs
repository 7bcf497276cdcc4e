//! 活动列表
//!
//! 标题/简介/主办俱乐部搜索，即将开始与已结束两个标签页，卡片与详情弹窗。
//! 报名只记录日志，并且只对未报名的即将开始活动开放。

use clubspot_shared::date::{format_event_date, format_event_time};
use clubspot_shared::search::filter_events;
use clubspot_shared::{Event, EventStatus, fixtures};
use leptos::prelude::*;

use crate::components::icons::*;

fn register_for(id: u32) {
    tracing::info!(event_id = id, "Registering for event {id}");
}

/// 分类、已报名与学时徽章
fn event_badges(event: &'static Event) -> impl IntoView {
    view! {
        <div class="flex flex-wrap items-center gap-2">
            <span class=event.category.badge_class()>{event.category.as_str()}</span>
            {event.registered.then(|| view! { <span class="badge badge-primary">"Registered"</span> })}
            <span class="badge badge-outline">{format!("{} AICTE Hours", event.aicte_hours)}</span>
        </div>
    }
}

/// 日期、时间、地点与人数
fn event_facts(event: &'static Event) -> impl IntoView {
    view! {
        <div class="space-y-2 text-sm text-base-content/70">
            <div class="flex items-center gap-2">
                <CalendarIcon attr:class="w-4 h-4" />
                <span>{format_event_date(event.date)}</span>
            </div>
            <div class="flex items-center gap-2">
                <Clock attr:class="w-4 h-4" />
                <span>{format!("{} • {}", format_event_time(event.time), event.duration)}</span>
            </div>
            <div class="flex items-center gap-2">
                <MapPin attr:class="w-4 h-4" />
                <span>{event.venue}</span>
            </div>
            <div class="flex items-center gap-2">
                <Users attr:class="w-4 h-4" />
                <span>{format!("{}/{} participants", event.participants, event.max_participants)}</span>
            </div>
        </div>
    }
}

fn event_tags(event: &'static Event) -> impl IntoView {
    event
        .tags
        .iter()
        .map(|tag| view! { <span class="badge badge-outline text-xs">{*tag}</span> })
        .collect_view()
}

#[component]
fn EventCard(event: &'static Event, #[prop(into)] on_details: Callback<u32>) -> impl IntoView {
    let id = event.id;

    view! {
        <div class="card bg-base-100 shadow hover:shadow-lg transition-shadow">
            <div class="card-body">
                <h3 class="card-title text-lg">{event.title}</h3>
                {event_badges(event)}
                {event_facts(event)}
                <p class="leading-relaxed my-4">{event.description}</p>
                <div class="flex flex-wrap gap-1 mb-4">{event_tags(event)}</div>
                <div class="flex items-center justify-between">
                    <span class="text-sm text-base-content/60">"by " {event.club}</span>
                    <div class="flex gap-2">
                        <button class="btn btn-sm btn-outline" on:click=move |_| on_details.run(id)>
                            "View Details"
                        </button>
                        <Show when=move || event.can_register()>
                            <button class="btn btn-sm btn-primary" on:click=move |_| register_for(id)>
                                "Register"
                            </button>
                        </Show>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn EventDetail(event: &'static Event, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let id = event.id;

    view! {
        <div class="fixed inset-0 bg-black/50 flex items-center justify-center p-4 z-50">
            <div class="bg-base-100 rounded-lg max-w-2xl w-full max-h-[90vh] overflow-y-auto p-6 space-y-6">
                <div class="flex items-start justify-between">
                    <div class="space-y-2">
                        <h2 class="text-2xl">{event.title}</h2>
                        {event_badges(event)}
                    </div>
                    <button class="btn btn-sm btn-outline" on:click=move |_| on_close.run(())>"✕"</button>
                </div>

                <div class="grid md:grid-cols-2 gap-6">
                    <div class="space-y-3">
                        <h3 class="text-lg">"Event Details"</h3>
                        {event_facts(event)}
                    </div>
                    <div class="space-y-3">
                        <h3 class="text-lg">"Organizer Info"</h3>
                        <div class="text-sm">
                            <div><span class="text-base-content/60">"Club: "</span>{event.club}</div>
                            <div><span class="text-base-content/60">"Organizer: "</span>{event.organizer}</div>
                        </div>
                    </div>
                </div>

                <div>
                    <h3 class="text-lg mb-2">"Description"</h3>
                    <p class="leading-relaxed">{event.description}</p>
                </div>

                <div>
                    <h3 class="text-lg mb-2">"Tags"</h3>
                    <div class="flex flex-wrap gap-2">{event_tags(event)}</div>
                </div>

                <Show when=move || event.can_register()>
                    <div class="pt-4 border-t border-base-300">
                        <button
                            class="btn btn-primary w-full"
                            on:click=move |_| {
                                register_for(id);
                                on_close.run(());
                            }
                        >
                            "Register for this Event"
                        </button>
                    </div>
                </Show>
            </div>
        </div>
    }
}

#[component]
pub fn EventsPage() -> impl IntoView {
    let (query, set_query) = signal(String::new());
    let (status, set_status) = signal(EventStatus::Upcoming);
    let (selected, set_selected) = signal(Option::<u32>::None);

    let filtered = Memo::new(move |_| {
        query.with(|q| filter_events(fixtures::events(), q, status.get()))
    });

    let tab = move |target: EventStatus, label: &'static str| {
        view! {
            <button
                role="tab"
                class=move || if status.get() == target { "tab tab-active" } else { "tab" }
                on:click=move |_| set_status.set(target)
            >
                {label}
            </button>
        }
    };

    let on_details = Callback::new(move |id: u32| set_selected.set(Some(id)));
    let on_close = Callback::new(move |()| set_selected.set(None));

    view! {
        <div class="max-w-7xl mx-auto p-6">
            <div class="mb-8">
                <h1 class="text-3xl mb-2">"Events"</h1>
                <p class="text-base-content/70 text-lg">"Discover and participate in campus events"</p>
            </div>

            <label class="input input-bordered flex items-center gap-2 mb-6">
                <Search attr:class="h-4 w-4 opacity-50" />
                <input
                    type="text"
                    class="grow"
                    placeholder="Search events..."
                    on:input=move |ev| set_query.set(event_target_value(&ev))
                    prop:value=query
                />
            </label>

            <div role="tablist" class="tabs tabs-boxed grid grid-cols-2 max-w-md mb-6">
                {tab(EventStatus::Upcoming, "Upcoming Events")}
                {tab(EventStatus::Past, "Past Events")}
            </div>

            <p class="text-base-content/70 mb-6">
                {move || {
                    let noun = match status.get() {
                        EventStatus::Upcoming => "upcoming",
                        EventStatus::Past => "past",
                    };
                    format!("{} {noun} events", filtered.with(Vec::len))
                }}
            </p>

            <div class="grid md:grid-cols-2 gap-6">
                {move || {
                    filtered
                        .get()
                        .into_iter()
                        .map(|event| view! { <EventCard event=event on_details=on_details /> })
                        .collect_view()
                }}
            </div>

            {move || {
                selected
                    .get()
                    .and_then(fixtures::find_event)
                    .map(|event| view! { <EventDetail event=event on_close=on_close /> })
            }}
        </div>
    }
}
