//! Results Components
//!
//! Cards rendering the nutrition targets, meal plan and workout plan,
//! plus the Speak and Download export buttons. Numeric values render
//! exactly as the API returned them. Both export actions share the
//! same plan-text generator, so their output is identical.

use leptos::*;
use wasm_bindgen::JsCast;

use crate::api;
use crate::plan_text::generate_plan_text;
use crate::state::session::{MealPlan, NutritionResult, SessionState, WorkoutPlan};

/// Results section: all three plan cards plus export actions
#[component]
pub fn Results() -> impl IntoView {
    let state = use_context::<SessionState>().expect("SessionState not found");

    view! {
        <section class="bg-gray-800 rounded-xl p-6 space-y-6">
            <div class="flex items-center justify-between">
                <h2 class="text-xl font-semibold">"Your Personalized Plan"</h2>
                <ExportButtons />
            </div>

            {move || state.nutrition.get().map(|n| view! { <NutritionCard nutrition=n /> })}

            <div class="grid lg:grid-cols-2 gap-6">
                {move || state.meal_plan.get().map(|m| view! { <MealPlanCard plan=m /> })}
                {move || state.workout_plan.get().map(|w| view! { <WorkoutPlanCard plan=w /> })}
            </div>
        </section>
    }
}

#[component]
fn NutritionCard(nutrition: NutritionResult) -> impl IntoView {
    view! {
        <div class="grid md:grid-cols-2 gap-6">
            <div class="bg-gray-700 rounded-lg p-4">
                <h3 class="font-medium mb-3">"Daily Caloric Needs"</h3>
                <ul class="space-y-2 text-gray-300">
                    <li>"BMR: " <span class="font-bold text-white">{nutrition.bmr}</span> " calories"</li>
                    <li>"TDEE: " <span class="font-bold text-white">{nutrition.tdee}</span> " calories"</li>
                    <li>"Target Calories: " <span class="font-bold text-white">{nutrition.target_calories}</span> " calories"</li>
                </ul>
            </div>

            <div class="bg-gray-700 rounded-lg p-4">
                <h3 class="font-medium mb-3">"Macronutrient Breakdown"</h3>
                <ul class="space-y-2 text-gray-300">
                    <li>"Protein: " <span class="font-bold text-white">{nutrition.macros.protein}</span> "g"</li>
                    <li>"Carbohydrates: " <span class="font-bold text-white">{nutrition.macros.carbs}</span> "g"</li>
                    <li>"Fats: " <span class="font-bold text-white">{nutrition.macros.fat}</span> "g"</li>
                </ul>
            </div>
        </div>
    }
}

#[component]
fn MealPlanCard(plan: MealPlan) -> impl IntoView {
    view! {
        <div class="bg-gray-700 rounded-lg p-4">
            <h3 class="font-medium mb-3">
                {format!("Daily Meal Plan ({} calories)", plan.calories)}
            </h3>
            <ul class="space-y-2 text-gray-300">
                <li><span class="font-medium text-white">"Breakfast: "</span>{plan.daily_plan.breakfast}</li>
                <li><span class="font-medium text-white">"Lunch: "</span>{plan.daily_plan.lunch}</li>
                <li><span class="font-medium text-white">"Dinner: "</span>{plan.daily_plan.dinner}</li>
                <li><span class="font-medium text-white">"Snack: "</span>{plan.daily_plan.snacks}</li>
            </ul>
            <p class="text-sm text-gray-400 mt-3">{format!("Diet Preference: {}", plan.diet_preference)}</p>
        </div>
    }
}

#[component]
fn WorkoutPlanCard(plan: WorkoutPlan) -> impl IntoView {
    let days = [
        ("Monday", plan.weekly_plan.monday),
        ("Tuesday", plan.weekly_plan.tuesday),
        ("Wednesday", plan.weekly_plan.wednesday),
        ("Thursday", plan.weekly_plan.thursday),
        ("Friday", plan.weekly_plan.friday),
        ("Saturday", plan.weekly_plan.saturday),
        ("Sunday", plan.weekly_plan.sunday),
    ];

    view! {
        <div class="bg-gray-700 rounded-lg p-4">
            <h3 class="font-medium mb-3">
                {format!("Weekly Workout Plan ({} activity level)", plan.activity_level)}
            </h3>
            <ul class="space-y-2 text-gray-300">
                {days.into_iter().map(|(day, entry)| view! {
                    <li><span class="font-medium text-white">{day}": "</span>{entry}</li>
                }).collect_view()}
            </ul>
            <p class="text-sm text-gray-400 mt-3">{format!("Fitness Goal: {}", plan.goal)}</p>
        </div>
    }
}

/// Speak and Download buttons
#[component]
fn ExportButtons() -> impl IntoView {
    let state = use_context::<SessionState>().expect("SessionState not found");

    // Both actions read the structured results, never the rendered DOM
    let plan_text = {
        let state = state.clone();
        move || -> Option<String> {
            let nutrition = state.nutrition.get_untracked()?;
            let meal_plan = state.meal_plan.get_untracked()?;
            let workout_plan = state.workout_plan.get_untracked()?;
            Some(generate_plan_text(&nutrition, &meal_plan, &workout_plan))
        }
    };

    let speak_text = plan_text.clone();
    let on_speak = move |_| {
        let Some(text) = speak_text() else { return };

        // Failures are logged only; a second click during playback
        // simply starts an overlapping playback
        spawn_local(async move {
            match api::text_to_speech(&text).await {
                Ok(bytes) => play_audio(&bytes),
                Err(e) => {
                    web_sys::console::error_1(&format!("Speech synthesis failed: {}", e).into());
                }
            }
        });
    };

    let on_download = move |_| {
        let Some(text) = plan_text() else { return };
        download_text(&text, "personalized_plan.txt");
    };

    view! {
        <div class="flex space-x-2">
            <button
                on:click=on_speak
                class="px-4 py-2 bg-gray-600 hover:bg-gray-500 rounded-lg font-medium transition-colors"
            >
                "🔊 Speak"
            </button>
            <button
                on:click=on_download
                class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "⬇ Download"
            </button>
        </div>
    }
}

/// Play MP3 bytes immediately via an object URL
fn play_audio(bytes: &[u8]) {
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::of1(&array.into());

    let mut options = web_sys::BlobPropertyBag::new();
    options.type_("audio/mpeg");

    let Ok(blob) = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options) else {
        web_sys::console::error_1(&"Failed to build audio blob".into());
        return;
    };
    let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) else {
        web_sys::console::error_1(&"Failed to create audio URL".into());
        return;
    };

    if let Ok(audio) = web_sys::HtmlAudioElement::new_with_src(&url) {
        let _ = audio.play();
    }
}

/// Save text client-side via a Blob and a synthetic anchor click
fn download_text(text: &str, filename: &str) {
    if let Some(window) = web_sys::window() {
        let blob = web_sys::Blob::new_with_str_sequence(
            &js_sys::Array::of1(&text.into()),
        ).ok();

        if let Some(blob) = blob {
            let url = web_sys::Url::create_object_url_with_blob(&blob).ok();
            if let Some(url) = url {
                let document = window.document().unwrap();
                let a = document.create_element("a").unwrap();
                let _ = a.set_attribute("href", &url);
                let _ = a.set_attribute("download", filename);
                let _ = a.dyn_ref::<web_sys::HtmlElement>().unwrap().click();
                let _ = web_sys::Url::revoke_object_url(&url);
            }
        }
    }
}
