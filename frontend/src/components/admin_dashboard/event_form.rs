//! 创建活动对话框
//!
//! 表单状态整合为 [`EventFormState`]；提交只记录草稿并重置表单，不会产生新的活动。

use clubspot_shared::Category;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use serde::Serialize;

/// 提交时记录的活动草稿
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    pub title: String,
    pub category: Category,
    pub description: String,
    pub date: String,
    pub time: String,
    pub venue: String,
    pub max_participants: Option<u32>,
    pub aicte_hours: Option<u32>,
}

#[derive(Clone, Copy)]
pub struct EventFormState {
    pub title: RwSignal<String>,
    pub category: RwSignal<Category>,
    pub description: RwSignal<String>,
    pub date: RwSignal<String>,
    pub time: RwSignal<String>,
    pub venue: RwSignal<String>,
    pub max_participants: RwSignal<String>,
    pub aicte_hours: RwSignal<String>,
}

impl EventFormState {
    pub fn new() -> Self {
        Self {
            title: RwSignal::new(String::new()),
            category: RwSignal::new(Category::Technical),
            description: RwSignal::new(String::new()),
            date: RwSignal::new(String::new()),
            time: RwSignal::new(String::new()),
            venue: RwSignal::new(String::new()),
            max_participants: RwSignal::new(String::new()),
            aicte_hours: RwSignal::new(String::new()),
        }
    }

    /// 重置表单到初始状态
    pub fn reset(&self) {
        self.title.set(String::new());
        self.category.set(Category::Technical);
        self.description.set(String::new());
        self.date.set(String::new());
        self.time.set(String::new());
        self.venue.set(String::new());
        self.max_participants.set(String::new());
        self.aicte_hours.set(String::new());
    }

    /// 将表单状态转换为草稿，数字字段无法解析时为 `None`
    pub fn to_draft(&self) -> EventDraft {
        let number = |s: RwSignal<String>| s.get_untracked().trim().parse().ok();
        EventDraft {
            title: self.title.get_untracked(),
            category: self.category.get_untracked(),
            description: self.description.get_untracked(),
            date: self.date.get_untracked(),
            time: self.time.get_untracked(),
            venue: self.venue.get_untracked(),
            max_participants: number(self.max_participants),
            aicte_hours: number(self.aicte_hours),
        }
    }
}

impl Default for EventFormState {
    fn default() -> Self {
        Self::new()
    }
}

/// 单行输入框
#[component]
fn TextField(
    id: &'static str,
    label: &'static str,
    #[prop(default = "text")] kind: &'static str,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <div class="form-control">
            <label class="label" for=id>
                <span class="label-text">{label}</span>
            </label>
            <input
                id=id
                type=kind
                on:input=move |ev| value.set(event_target_value(&ev))
                prop:value=move || value.get()
                class="input input-bordered w-full"
                required
            />
        </div>
    }
}

#[component]
pub fn CreateEventDialog(open: RwSignal<bool>) -> impl IntoView {
    let state = EventFormState::new();
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();

    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            if open.get() {
                if !dialog.open() {
                    let _ = dialog.show_modal();
                }
            } else if dialog.open() {
                dialog.close();
            }
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let draft = state.to_draft();
        match serde_json_wasm::to_string(&draft) {
            Ok(json) => tracing::info!(draft = %json, "Creating event"),
            Err(e) => tracing::error!(error = %e, "failed to serialise event draft"),
        }
        open.set(false);
        state.reset();
    };

    let category_options = Category::ALL
        .iter()
        .map(|c| view! { <option value=c.as_str()>{c.label()}</option> })
        .collect_view();

    view! {
        <dialog class="modal" node_ref=dialog_ref on:close=move |_| open.set(false)>
            <div class="modal-box max-w-2xl">
                <div class="flex items-center justify-between mb-4">
                    <h3 class="text-2xl">"Create New Event"</h3>
                    <button class="btn btn-sm btn-outline" on:click=move |_| open.set(false)>"✕"</button>
                </div>

                <form on:submit=on_submit class="space-y-4">
                    <div class="grid md:grid-cols-2 gap-4">
                        <TextField id="title" label="Event Title" value=state.title />
                        <div class="form-control">
                            <label class="label" for="category">
                                <span class="label-text">"Category"</span>
                            </label>
                            <select
                                id="category"
                                class="select select-bordered w-full"
                                prop:value=move || state.category.get().as_str()
                                on:change=move |ev| {
                                    if let Some(c) = Category::parse(&event_target_value(&ev)) {
                                        state.category.set(c);
                                    }
                                }
                            >
                                {category_options}
                            </select>
                        </div>
                    </div>

                    <div class="form-control">
                        <label class="label" for="description">
                            <span class="label-text">"Description"</span>
                        </label>
                        <textarea
                            id="description"
                            rows="3"
                            class="textarea textarea-bordered w-full"
                            on:input=move |ev| state.description.set(event_target_value(&ev))
                            prop:value=move || state.description.get()
                            required
                        ></textarea>
                    </div>

                    <div class="grid md:grid-cols-3 gap-4">
                        <TextField id="date" label="Date" kind="date" value=state.date />
                        <TextField id="time" label="Time" kind="time" value=state.time />
                        <TextField id="venue" label="Venue" value=state.venue />
                    </div>

                    <div class="grid md:grid-cols-2 gap-4">
                        <TextField
                            id="maxParticipants"
                            label="Max Participants"
                            kind="number"
                            value=state.max_participants
                        />
                        <TextField id="aicteHours" label="AICTE Hours" kind="number" value=state.aicte_hours />
                    </div>

                    <div class="modal-action">
                        <button type="submit" class="btn btn-primary">"Create Event"</button>
                        <button type="button" class="btn btn-outline" on:click=move |_| open.set(false)>
                            "Cancel"
                        </button>
                    </div>
                </form>
            </div>
        </dialog>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    #[test]
    fn test_draft_parses_numbers_and_resets() {
        let owner = Owner::new();
        owner.with(|| {
            let state = EventFormState::new();
            state.title.set("Hack Night".into());
            state.category.set(Category::Cultural);
            state.max_participants.set(" 40 ".into());
            state.aicte_hours.set("many".into());

            let draft = state.to_draft();
            assert_eq!(draft.title, "Hack Night");
            assert_eq!(draft.category, Category::Cultural);
            assert_eq!(draft.max_participants, Some(40));
            assert_eq!(draft.aicte_hours, None);

            state.reset();
            assert_eq!(state.to_draft().title, "");
            assert_eq!(state.to_draft().category, Category::Technical);
        });
    }

    #[test]
    fn test_draft_uses_camel_case_keys() {
        let draft = EventDraft {
            title: "T".into(),
            category: Category::Social,
            description: String::new(),
            date: "2024-12-20".into(),
            time: "14:00".into(),
            venue: "Hall".into(),
            max_participants: Some(10),
            aicte_hours: Some(2),
        };
        let json = serde_json_wasm::to_string(&draft).unwrap();
        assert!(json.contains("\"maxParticipants\":10"));
        assert!(json.contains("\"aicteHours\":2"));
    }
}
