//! 学生面板
//!
//! 问候、四项统计（AICTE 学时进度）、已报名活动、快捷入口、成就与已加入的俱乐部。

use clubspot::{StudentProfile, User, ViewId};
use clubspot_shared::{AICTE_REQUIRED_HOURS, fixtures};
use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::components::icons::*;
use crate::session::use_session;

/// 学时进度百分比，超过要求时封顶
fn aicte_progress(hours: u32) -> u32 {
    (hours.saturating_mul(100) / AICTE_REQUIRED_HOURS).min(100)
}

#[component]
fn StatCard(
    title: &'static str,
    border: &'static str,
    #[prop(into)] value: Signal<u32>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=format!("card bg-base-100 shadow border-l-4 {border}")>
            <div class="card-body p-5">
                <div class="text-sm text-base-content/70">{title}</div>
                <div class="text-2xl mb-1">{move || value.get()}</div>
                {children()}
            </div>
        </div>
    }
}

#[component]
pub fn UserDashboard() -> impl IntoView {
    let session = use_session();
    let user = session.user();
    let profile = Signal::derive(move || {
        user.with(|u| u.as_ref().and_then(User::as_student).cloned())
    });
    let field = move |f: fn(&StudentProfile) -> u32| {
        Signal::derive(move || profile.with(|p| p.as_ref().map(f).unwrap_or_default()))
    };

    let aicte_hours = field(|p| p.aicte_hours);
    let name = move || profile.with(|p| p.as_ref().map(|p| p.name.clone()).unwrap_or_default());
    let student_id =
        move || profile.with(|p| p.as_ref().map(|p| p.student_id.clone()).unwrap_or_default());

    let go = move |view: ViewId| {
        move |_: MouseEvent| {
            session.request_view(view);
        }
    };

    let upcoming = fixtures::student_upcoming_events()
        .iter()
        .map(|event| {
            let id = event.id;
            view! {
                <div class="flex items-center justify-between p-4 bg-base-200 rounded-lg">
                    <div class="flex-1">
                        <h4 class="mb-1">{event.title}</h4>
                        <p class="text-sm text-base-content/70 mb-2">{event.club}</p>
                        <div class="flex items-center gap-4 text-xs text-base-content/60">
                            <span>{event.date}</span>
                            <span>{event.time}</span>
                        </div>
                    </div>
                    {if event.registered {
                        view! { <span class="badge bg-green-100 text-green-700">"Registered"</span> }.into_any()
                    } else {
                        view! {
                            <button
                                class="btn btn-sm btn-outline"
                                on:click=move |_| tracing::info!(event_id = id, "Registering for event")
                            >
                                "Register"
                            </button>
                        }
                        .into_any()
                    }}
                </div>
            }
        })
        .collect_view();

    let achievements = fixtures::achievements()
        .iter()
        .map(|a| {
            let (row, icon, title) = if a.earned {
                (
                    "flex items-center gap-3 p-3 rounded-lg bg-yellow-50 border border-yellow-200",
                    "text-2xl",
                    "text-sm",
                )
            } else {
                (
                    "flex items-center gap-3 p-3 rounded-lg bg-base-200",
                    "text-2xl grayscale",
                    "text-sm text-base-content/50",
                )
            };
            view! {
                <div class=row>
                    <div class=icon>{a.icon}</div>
                    <div>
                        <div class=title>{a.title}</div>
                        <div class="text-xs text-base-content/60">{a.description}</div>
                    </div>
                </div>
            }
        })
        .collect_view();

    let my_clubs = fixtures::student_memberships()
        .iter()
        .map(|club| {
            view! {
                <div class="p-4 bg-base-100 border border-base-300 rounded-lg shadow-sm">
                    <div class="flex items-start justify-between mb-2">
                        <h4>{club.name}</h4>
                        <span class="badge badge-secondary text-xs">{club.status}</span>
                    </div>
                    <p class="text-sm text-blue-600 mb-1">{club.position}</p>
                    <p class="text-xs text-base-content/60">"Joined " {club.join_date}</p>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="max-w-7xl mx-auto p-6 space-y-8">
            <div class="bg-gradient-to-r from-blue-600 to-green-600 rounded-2xl text-white p-8">
                <div class="flex items-center justify-between">
                    <div>
                        <h1 class="text-3xl mb-2">"Hi, " {name} "! 👋"</h1>
                        <p class="text-blue-100 text-lg">"Welcome back to your Club Spot dashboard"</p>
                    </div>
                    <div class="text-right">
                        <div class="text-sm text-blue-100">"Student ID"</div>
                        <div class="text-xl">{student_id}</div>
                    </div>
                </div>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                <StatCard title="AICTE Hours" border="border-l-blue-500" value=aicte_hours>
                    <div class="text-xs text-base-content/60 mb-2">
                        {format!("of {AICTE_REQUIRED_HOURS} required")}
                    </div>
                    <progress
                        class="progress progress-primary h-2"
                        value=move || aicte_progress(aicte_hours.get()).to_string()
                        max="100"
                    ></progress>
                </StatCard>
                <StatCard title="Events Attended" border="border-l-green-500" value=field(|p| p.events_attended)>
                    <div class="text-xs text-green-600 flex items-center gap-1">
                        <TrendingUp attr:class="h-3 w-3" /> "+3 this month"
                    </div>
                </StatCard>
                <StatCard title="Events Registered" border="border-l-yellow-500" value=field(|p| p.events_registered)>
                    <div class="text-xs text-base-content/60">"Upcoming events"</div>
                </StatCard>
                <StatCard title="Clubs Joined" border="border-l-purple-500" value=field(|p| p.clubs_joined)>
                    <div class="text-xs text-base-content/60">"Active memberships"</div>
                </StatCard>
            </div>

            <div class="grid lg:grid-cols-3 gap-8">
                <div class="lg:col-span-2 card bg-base-100 shadow">
                    <div class="card-body">
                        <div class="flex items-center justify-between">
                            <div>
                                <h3 class="card-title gap-2">
                                    <CalendarIcon attr:class="h-5 w-5 text-blue-600" /> "Upcoming Events"
                                </h3>
                                <p class="text-sm text-base-content/70">"Events you're registered for and recommendations"</p>
                            </div>
                            <button class="btn btn-sm btn-outline gap-2" on:click=go(ViewId::Events)>
                                "View All" <ArrowRight attr:class="h-3 w-3" />
                            </button>
                        </div>
                        <div class="space-y-4 mt-4">{upcoming}</div>
                    </div>
                </div>

                <div class="space-y-6">
                    <div class="card bg-base-100 shadow">
                        <div class="card-body space-y-3">
                            <h3 class="card-title">"Quick Links"</h3>
                            <p class="text-sm text-base-content/70">"Navigate to frequently used sections"</p>
                            <button class="btn btn-outline w-full justify-start gap-2" on:click=go(ViewId::Events)>
                                <CalendarIcon attr:class="h-4 w-4" /> "Event Calendar"
                            </button>
                            <button class="btn btn-outline w-full justify-start gap-2" on:click=go(ViewId::Clubs)>
                                <Users attr:class="h-4 w-4" /> "Browse Clubs"
                            </button>
                            <button class="btn btn-outline w-full justify-start gap-2">
                                <Trophy attr:class="h-4 w-4" /> "My Certificates"
                            </button>
                        </div>
                    </div>

                    <div class="card bg-base-100 shadow">
                        <div class="card-body space-y-3">
                            <h3 class="card-title gap-2">
                                <Star attr:class="h-5 w-5 text-yellow-500" /> "Achievements"
                            </h3>
                            <p class="text-sm text-base-content/70">"Your badges and milestones"</p>
                            {achievements}
                        </div>
                    </div>
                </div>
            </div>

            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <div class="flex items-center justify-between">
                        <div>
                            <h3 class="card-title gap-2">
                                <Users attr:class="h-5 w-5 text-purple-600" /> "My Clubs"
                            </h3>
                            <p class="text-sm text-base-content/70">"Clubs you're currently a member of"</p>
                        </div>
                        <button class="btn btn-sm btn-outline gap-2" on:click=go(ViewId::Clubs)>
                            "Discover More" <ArrowRight attr:class="h-3 w-3" />
                        </button>
                    </div>
                    <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-4 mt-4">{my_clubs}</div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aicte_progress() {
        assert_eq!(aicte_progress(0), 0);
        assert_eq!(aicte_progress(45), 60);
        assert_eq!(aicte_progress(75), 100);
        assert_eq!(aicte_progress(120), 100);
    }
}
