//! 管理员面板
//!
//! 五项统计卡片，以及概览/活动/成员/分析四个标签页。
//! 活动页可以打开创建活动对话框。

mod event_form;

use clubspot::User;
use clubspot_shared::fixtures;
use leptos::prelude::*;

use crate::components::icons::*;
use crate::session::use_session;
use event_form::CreateEventDialog;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum AdminTab {
    #[default]
    Overview,
    Events,
    Members,
    Analytics,
}

impl AdminTab {
    const ALL: [AdminTab; 4] = [
        AdminTab::Overview,
        AdminTab::Events,
        AdminTab::Members,
        AdminTab::Analytics,
    ];

    fn label(&self) -> &'static str {
        match self {
            AdminTab::Overview => "Overview",
            AdminTab::Events => "Events",
            AdminTab::Members => "Members",
            AdminTab::Analytics => "Analytics",
        }
    }
}

fn status_badge(completed: bool) -> &'static str {
    if completed {
        "badge badge-neutral"
    } else {
        "badge badge-secondary"
    }
}

fn overview_tab() -> impl IntoView {
    let clubs = fixtures::managed_clubs()
        .iter()
        .map(|club| {
            view! {
                <div class="flex items-center justify-between p-4 bg-base-200 rounded-lg">
                    <div>
                        <h4>{club.name}</h4>
                        <p class="text-sm text-base-content/70">
                            {format!("{} members • {} upcoming events", club.members, club.upcoming_events)}
                        </p>
                    </div>
                    <span class="badge badge-secondary">{club.status}</span>
                </div>
            }
        })
        .collect_view();

    let recent = fixtures::managed_events()
        .iter()
        .take(3)
        .map(|event| {
            view! {
                <div class="flex items-center justify-between p-4 bg-base-200 rounded-lg">
                    <div>
                        <h4>{event.title}</h4>
                        <p class="text-sm text-base-content/70">
                            {format!(
                                "{} • {}/{} participants",
                                event.date,
                                event.participants,
                                event.max_participants,
                            )}
                        </p>
                    </div>
                    <span class=status_badge(event.completed)>{event.status_label()}</span>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="grid lg:grid-cols-2 gap-6">
            <div class="card bg-base-100 shadow">
                <div class="card-body space-y-4">
                    <div class="flex items-center justify-between">
                        <h3 class="card-title">"Managed Clubs"</h3>
                        <button class="btn btn-sm btn-outline gap-1">
                            <Plus attr:class="w-4 h-4" /> "Add Club"
                        </button>
                    </div>
                    <p class="text-sm text-base-content/70">"Clubs under your administration"</p>
                    {clubs}
                </div>
            </div>
            <div class="card bg-base-100 shadow">
                <div class="card-body space-y-4">
                    <h3 class="card-title">"Recent Events"</h3>
                    <p class="text-sm text-base-content/70">"Latest event activities"</p>
                    {recent}
                </div>
            </div>
        </div>
    }
}

fn events_tab(create_open: RwSignal<bool>) -> impl IntoView {
    let rows = fixtures::managed_events()
        .iter()
        .map(|event| {
            view! {
                <tr>
                    <td>
                        <div>{event.title}</div>
                        <div class="text-sm text-base-content/60">{event.club}</div>
                    </td>
                    <td>{event.date}</td>
                    <td>{format!("{}/{}", event.participants, event.max_participants)}</td>
                    <td><span class=status_badge(event.completed)>{event.status_label()}</span></td>
                    <td>
                        <button class="btn btn-xs btn-outline">
                            <Eye attr:class="w-3 h-3" />
                        </button>
                    </td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <h2 class="text-2xl">"Event Management"</h2>
                <button class="btn btn-primary gap-2" on:click=move |_| create_open.set(true)>
                    <Plus attr:class="w-4 h-4" /> "Create Event"
                </button>
            </div>
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h3 class="card-title">"All Events"</h3>
                    <p class="text-sm text-base-content/70">"Manage your club events"</p>
                    <div class="overflow-x-auto">
                        <table class="table table-zebra w-full">
                            <thead>
                                <tr>
                                    <th>"Event"</th>
                                    <th>"Date"</th>
                                    <th>"Participants"</th>
                                    <th>"Status"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>{rows}</tbody>
                        </table>
                    </div>
                </div>
            </div>
        </div>
    }
}

fn members_tab() -> impl IntoView {
    let rows = fixtures::members()
        .iter()
        .map(|member| {
            let badge = if member.role == "Member" {
                "badge badge-secondary"
            } else {
                "badge badge-primary"
            };
            view! {
                <tr>
                    <td>
                        <div>{member.name}</div>
                        <div class="text-sm text-base-content/60">{member.email}</div>
                    </td>
                    <td>{member.student_id}</td>
                    <td>{member.club}</td>
                    <td><span class=badge>{member.role}</span></td>
                    <td>{member.events_attended}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <h2 class="text-2xl">"Member Management"</h2>
                <button class="btn btn-outline gap-2">
                    <Users attr:class="w-4 h-4" /> "Add Member"
                </button>
            </div>
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h3 class="card-title">"Club Members"</h3>
                    <p class="text-sm text-base-content/70">"Manage club memberships"</p>
                    <div class="overflow-x-auto">
                        <table class="table table-zebra w-full">
                            <thead>
                                <tr>
                                    <th>"Name"</th>
                                    <th>"Student ID"</th>
                                    <th>"Club"</th>
                                    <th>"Role"</th>
                                    <th>"Events"</th>
                                </tr>
                            </thead>
                            <tbody>{rows}</tbody>
                        </table>
                    </div>
                </div>
            </div>
        </div>
    }
}

fn analytics_tab() -> impl IntoView {
    let chart = |title: &'static str, caption: &'static str| {
        view! {
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h3 class="card-title">{title}</h3>
                    <p class="text-sm text-base-content/70">{caption}</p>
                    <div class="h-64 flex items-center justify-center bg-base-200 rounded-lg">
                        <p class="text-base-content/50">"Chart coming soon..."</p>
                    </div>
                </div>
            </div>
        }
    };

    view! {
        <div class="space-y-6">
            <h2 class="text-2xl">"Analytics & Reports"</h2>
            <div class="grid md:grid-cols-2 gap-6">
                {chart("Membership Growth", "Member registration trends")}
                {chart("Event Participation", "Attendance patterns")}
            </div>
        </div>
    }
}

#[component]
pub fn AdminDashboard() -> impl IntoView {
    let session = use_session();
    let user = session.user();
    let name = move || {
        user.with(|u| {
            u.as_ref()
                .and_then(User::as_admin)
                .map(|a| a.name.clone())
                .unwrap_or_default()
        })
    };

    let (tab, set_tab) = signal(AdminTab::default());
    let create_open = RwSignal::new(false);

    let stat_colors = [
        "border-l-blue-500",
        "border-l-green-500",
        "border-l-yellow-500",
        "border-l-purple-500",
        "border-l-red-500",
    ];
    let stats = fixtures::admin_stats()
        .iter()
        .zip(stat_colors)
        .map(|(stat, border)| {
            view! {
                <div class=format!("card bg-base-100 shadow border-l-4 {border}")>
                    <div class="card-body p-5">
                        <div class="flex items-center justify-between">
                            <span class="text-sm text-base-content/70">{stat.label}</span>
                            <BarChart attr:class="h-4 w-4 opacity-60" />
                        </div>
                        <div class="text-2xl">{stat.value}</div>
                        <p class="text-xs text-base-content/60">{stat.caption}</p>
                    </div>
                </div>
            }
        })
        .collect_view();

    let tabs = AdminTab::ALL
        .iter()
        .map(|&t| {
            view! {
                <button
                    role="tab"
                    class=move || if tab.get() == t { "tab tab-active" } else { "tab" }
                    on:click=move |_| {
                        tracing::debug!(tab = t.label(), "admin tab selected");
                        set_tab.set(t);
                    }
                >
                    {t.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="max-w-7xl mx-auto p-6 space-y-8">
            <div class="bg-gradient-to-r from-purple-600 to-blue-600 rounded-2xl text-white p-8">
                <h1 class="text-3xl mb-2">"Admin Dashboard"</h1>
                <p class="text-purple-100 text-lg">
                    "Welcome, " {name} "! Manage your clubs and events"
                </p>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-5 gap-6">{stats}</div>

            <div role="tablist" class="tabs tabs-boxed grid grid-cols-4">{tabs}</div>

            {move || match tab.get() {
                AdminTab::Overview => overview_tab().into_any(),
                AdminTab::Events => events_tab(create_open).into_any(),
                AdminTab::Members => members_tab().into_any(),
                AdminTab::Analytics => analytics_tab().into_any(),
            }}

            <CreateEventDialog open=create_open />
        </div>
    }
}
