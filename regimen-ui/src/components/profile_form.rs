//! Profile Form Component
//!
//! Health profile form driving the plan pipeline. Submission runs the
//! three plan calls as one explicit async pipeline: each stage is
//! awaited before the next begins and the first failure short-circuits
//! the rest. Results already applied before a failing stage are left
//! in place.

use leptos::*;

use crate::api;
use crate::state::session::{ProfileForm, SessionState, UserContext, PIPELINE_ERROR};

/// The three-stage plan pipeline
///
/// Stage outputs land in the session as they arrive; the results and
/// chat sections only unhide once every stage has succeeded.
async fn run_plan_pipeline(state: &SessionState, form: ProfileForm) -> Result<(), String> {
    let nutrition = api::calculate(&form).await?;
    state
        .user_context
        .set(UserContext::from_results(&form, &nutrition));
    state.nutrition.set(Some(nutrition));

    let meal_plan = api::generate_meal_plan(&form).await?;
    state.meal_plan.set(Some(meal_plan));

    let workout_plan = api::generate_workout_plan(&form).await?;
    state.workout_plan.set(Some(workout_plan));

    state.plans_ready.set(true);
    state.reset_chat();
    Ok(())
}

/// Profile form card component
#[component]
pub fn ProfileFormCard() -> impl IntoView {
    let state = use_context::<SessionState>().expect("SessionState not found");

    let (name, set_name) = create_signal(String::new());
    let (age, set_age) = create_signal(String::new());
    let (gender, set_gender) = create_signal("male".to_string());
    let (weight, set_weight) = create_signal(String::new());
    let (height, set_height) = create_signal(String::new());
    let (activity_level, set_activity_level) = create_signal("sedentary".to_string());
    let (goal, set_goal) = create_signal("lose weight".to_string());
    let (diet_preference, set_diet_preference) = create_signal("vegetarian".to_string());

    let submitting = state.submitting;

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        // Captured verbatim, no client-side validation
        let form = ProfileForm {
            name: name.get(),
            age: age.get(),
            gender: gender.get(),
            weight: weight.get(),
            height: height.get(),
            activity_level: activity_level.get(),
            goal: goal.get(),
            diet_preference: diet_preference.get(),
        };

        submitting.set(true);

        let state_clone = state.clone();
        spawn_local(async move {
            if let Err(e) = run_plan_pipeline(&state_clone, form).await {
                web_sys::console::error_1(&format!("Plan pipeline failed: {}", e).into());
                state_clone.show_error(PIPELINE_ERROR);
            }
            state_clone.submitting.set(false);
        });
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Your Health Profile"</h2>

            <form on:submit=on_submit class="space-y-4">
                <div class="grid md:grid-cols-2 gap-4">
                    <TextField label="Name" value=name set_value=set_name input_type="text" />
                    <TextField label="Age" value=age set_value=set_age input_type="number" />

                    <SelectField
                        label="Gender"
                        value=gender
                        set_value=set_gender
                        options=&[("male", "Male"), ("female", "Female"), ("other", "Other")]
                    />

                    <TextField
                        label="Weight (kg)"
                        value=weight
                        set_value=set_weight
                        input_type="number"
                    />
                    <TextField
                        label="Height (cm)"
                        value=height
                        set_value=set_height
                        input_type="number"
                    />

                    <SelectField
                        label="Activity Level"
                        value=activity_level
                        set_value=set_activity_level
                        options=&[
                            ("sedentary", "Sedentary"),
                            ("moderate", "Moderately Active"),
                            ("active", "Very Active"),
                        ]
                    />

                    <SelectField
                        label="Goal"
                        value=goal
                        set_value=set_goal
                        options=&[
                            ("lose weight", "Lose Weight"),
                            ("maintain", "Maintain Weight"),
                            ("gain muscle", "Gain Muscle"),
                        ]
                    />

                    <SelectField
                        label="Diet Preference"
                        value=diet_preference
                        set_value=set_diet_preference
                        options=&[
                            ("vegetarian", "Vegetarian"),
                            ("non-vegetarian", "Non-Vegetarian"),
                            ("vegan", "Vegan"),
                        ]
                    />
                </div>

                <button
                    type="submit"
                    disabled=move || submitting.get()
                    class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                           disabled:cursor-not-allowed rounded-lg py-3 font-semibold
                           transition-colors flex items-center justify-center space-x-2"
                >
                    {move || if submitting.get() {
                        view! {
                            <div class="loading-spinner w-5 h-5" />
                            <span>"Generating your plan..."</span>
                        }.into_view()
                    } else {
                        view! {
                            <span>"Generate Plan"</span>
                        }.into_view()
                    }}
                </button>
            </form>
        </section>
    }
}

#[component]
fn TextField(
    label: &'static str,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
    input_type: &'static str,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-2">{label}</label>
            <input
                type=input_type
                prop:value=move || value.get()
                on:input=move |ev| set_value.set(event_target_value(&ev))
                class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            />
        </div>
    }
}

#[component]
fn SelectField(
    label: &'static str,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
    options: &'static [(&'static str, &'static str)],
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-2">{label}</label>
            <select
                on:change=move |ev| set_value.set(event_target_value(&ev))
                prop:value=move || value.get()
                class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            >
                {options.iter().map(|(val, text)| view! {
                    <option value=*val>{*text}</option>
                }).collect_view()}
            </select>
        </div>
    }
}
