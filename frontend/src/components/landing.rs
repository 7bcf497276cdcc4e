//! 落地页
//!
//! 未登录用户的入口：介绍平台并提供注册/登录按钮。

use clubspot::{AuthMode, Role};
use clubspot_shared::fixtures;
use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::components::icons::*;
use crate::session::use_session;

/// 功能卡片的图标按顺序对应：俱乐部、活动、学时
fn feature_icon(index: usize) -> AnyView {
    match index {
        0 => view! { <Users attr:class="w-8 h-8 text-blue-600" /> }.into_any(),
        1 => view! { <CalendarIcon attr:class="w-8 h-8 text-green-600" /> }.into_any(),
        _ => view! { <Award attr:class="w-8 h-8 text-yellow-600" /> }.into_any(),
    }
}

#[component]
pub fn LandingPage() -> impl IntoView {
    let session = use_session();
    let signup = move |_: MouseEvent| session.begin_auth(AuthMode::Signup, Role::Student);
    let login = move |role: Role| move |_: MouseEvent| session.begin_auth(AuthMode::Login, role);

    let features = fixtures::features()
        .iter()
        .enumerate()
        .map(|(i, feature)| {
            view! {
                <div class="card bg-base-100 shadow-lg hover:shadow-xl transition-shadow text-center">
                    <div class="card-body items-center">
                        <div class="w-16 h-16 bg-base-200 rounded-full flex items-center justify-center mb-4">
                            {feature_icon(i)}
                        </div>
                        <h3 class="card-title text-xl">{feature.title}</h3>
                        <p class="text-base-content/70">{feature.description}</p>
                    </div>
                </div>
            }
        })
        .collect_view();

    let benefits = fixtures::benefits()
        .iter()
        .map(|benefit| {
            view! {
                <div class="flex items-center gap-3">
                    <CheckCircle attr:class="w-5 h-5 text-green-600 shrink-0" />
                    <span>{*benefit}</span>
                </div>
            }
        })
        .collect_view();

    let stat_colors = ["text-blue-600", "text-green-600", "text-yellow-600"];
    let stats = fixtures::platform_stats()
        .iter()
        .zip(stat_colors)
        .map(|(stat, color)| {
            view! {
                <div class="text-center">
                    <div class=format!("text-2xl mb-1 {color}")>{stat.value}</div>
                    <div class="text-sm text-base-content/70">{stat.label}</div>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="min-h-screen">
            // 首屏
            <section class="bg-gradient-to-br from-blue-600 via-blue-700 to-blue-800 text-white py-20">
                <div class="max-w-7xl mx-auto px-4 text-center">
                    <h1 class="text-5xl md:text-6xl mb-6">"Welcome to Club Spot"</h1>
                    <p class="text-xl md:text-2xl text-blue-100 mb-8 max-w-3xl mx-auto">
                        "Your one-stop platform for college club management, event discovery, and academic activity tracking"
                    </p>
                    <div class="flex flex-col sm:flex-row gap-4 justify-center items-center">
                        <button class="btn btn-lg btn-success text-white gap-2" on:click=signup>
                            "Get Started" <ArrowRight attr:class="h-5 w-5" />
                        </button>
                        <button class="btn btn-lg btn-outline text-white" on:click=login(Role::Student)>
                            "Login as Student"
                        </button>
                        <button class="btn btn-lg btn-outline text-white" on:click=login(Role::Admin)>
                            "Admin Login"
                        </button>
                    </div>
                </div>
            </section>

            // 功能介绍
            <section class="py-20 bg-base-100">
                <div class="max-w-7xl mx-auto px-4">
                    <div class="text-center mb-16">
                        <h2 class="text-4xl mb-4">"Everything You Need for Club Management"</h2>
                        <p class="text-xl text-base-content/70 max-w-2xl mx-auto">
                            "Streamline your college experience with our comprehensive platform designed for students and administrators"
                        </p>
                    </div>
                    <div class="grid md:grid-cols-3 gap-8">{features}</div>
                </div>
            </section>

            // 使命与愿景
            <section class="py-20 bg-base-200">
                <div class="max-w-7xl mx-auto px-4 grid lg:grid-cols-2 gap-12 items-center">
                    <div class="space-y-6">
                        <h2 class="text-4xl mb-6">"Our Mission & Vision"</h2>
                        <div class="flex items-start gap-4">
                            <Target attr:class="w-6 h-6 text-blue-600 shrink-0" />
                            <div>
                                <h3 class="text-xl mb-2">"Mission"</h3>
                                <p class="text-base-content/70 leading-relaxed">
                                    "To revolutionize college club management by providing a unified platform that enhances student engagement, simplifies administrative tasks, and fosters a vibrant campus community."
                                </p>
                            </div>
                        </div>
                        <div class="flex items-start gap-4">
                            <Globe attr:class="w-6 h-6 text-green-600 shrink-0" />
                            <div>
                                <h3 class="text-xl mb-2">"Vision"</h3>
                                <p class="text-base-content/70 leading-relaxed">
                                    "To become the leading platform for student activity management, empowering students to maximize their college experience while helping institutions track and improve student engagement."
                                </p>
                            </div>
                        </div>
                        <div class="flex items-start gap-4">
                            <Heart attr:class="w-6 h-6 text-red-600 shrink-0" />
                            <div>
                                <h3 class="text-xl mb-2">"Values"</h3>
                                <p class="text-base-content/70 leading-relaxed">
                                    "We believe in transparency, accessibility, and community-driven development. Our platform is built with students' needs at the forefront, ensuring every feature adds real value to campus life."
                                </p>
                            </div>
                        </div>
                    </div>

                    <div class="card bg-base-100 shadow-xl">
                        <div class="card-body">
                            <h3 class="text-2xl mb-6">"Why Choose Club Spot?"</h3>
                            <div class="space-y-4">{benefits}</div>
                            <div class="mt-8 grid grid-cols-3 gap-4 pt-6 border-t border-base-300">{stats}</div>
                        </div>
                    </div>
                </div>
            </section>

            // 行动号召
            <section class="py-20 bg-gradient-to-r from-green-600 to-blue-600 text-white">
                <div class="max-w-4xl mx-auto text-center px-4">
                    <h2 class="text-4xl mb-6">"Ready to Transform Your College Experience?"</h2>
                    <p class="text-xl text-green-100 mb-8">
                        "Join thousands of students who are already using Club Spot to enhance their campus life"
                    </p>
                    <div class="flex flex-col sm:flex-row gap-4 justify-center">
                        <button class="btn btn-lg bg-white text-green-600 border-none" on:click=signup>
                            "Create Your Account"
                        </button>
                        <button class="btn btn-lg btn-outline text-white" on:click=login(Role::Student)>
                            "Already Have an Account?"
                        </button>
                    </div>
                </div>
            </section>
        </div>
    }
}
