//! Settings Page
//!
//! API connection configuration.

use leptos::*;

use crate::api;
use crate::state::session::SessionState;

/// Settings page component
#[component]
pub fn Settings() -> impl IntoView {
    view! {
        <div class="space-y-8">
            // Header
            <div>
                <h1 class="text-3xl font-bold">"Settings"</h1>
                <p class="text-gray-400 mt-1">"Configure your Regimen planner"</p>
            </div>

            // API Connection
            <ApiSettings />

            // About
            <AboutSection />
        </div>
    }
}

/// API connection settings
#[component]
fn ApiSettings() -> impl IntoView {
    let state = use_context::<SessionState>().expect("SessionState not found");

    let (api_url, set_api_url) = create_signal(api::get_api_base());
    let (testing, set_testing) = create_signal(false);
    let (test_result, set_test_result) = create_signal(None::<bool>);
    let (coach_mode, set_coach_mode) = create_signal(None::<String>);

    let state_for_test = state.clone();
    let test_connection = move |_| {
        set_testing.set(true);
        set_test_result.set(None);

        let url = api_url.get();
        api::set_api_base(&url);

        let state_clone = state_for_test.clone();
        spawn_local(async move {
            match api::check_health().await {
                Ok(health) => {
                    set_test_result.set(Some(true));
                    set_coach_mode.set(Some(health.coach));
                    state_clone.show_success("Connection successful!");
                }
                Err(e) => {
                    set_test_result.set(Some(false));
                    set_coach_mode.set(None);
                    state_clone.show_error(&format!("Connection failed: {}", e));
                }
            }
            set_testing.set(false);
        });
    };

    let state_for_save = state;
    let save_url = move |_| {
        let url = api_url.get();
        api::set_api_base(&url);
        state_for_save.show_success("API URL saved");
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"API Connection"</h2>

            <div class="space-y-4">
                // API URL
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Regimen API URL"</label>
                    <div class="flex space-x-2">
                        <input
                            type="text"
                            prop:value=move || api_url.get()
                            on:input=move |ev| set_api_url.set(event_target_value(&ev))
                            class="flex-1 bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                        <button
                            on:click=test_connection
                            disabled=move || testing.get()
                            class="px-4 py-3 bg-gray-600 hover:bg-gray-500 disabled:bg-gray-700
                                   rounded-lg font-medium transition-colors"
                        >
                            {move || if testing.get() { "Testing..." } else { "Test" }}
                        </button>
                        <button
                            on:click=save_url
                            class="px-4 py-3 bg-primary-600 hover:bg-primary-700
                                   rounded-lg font-medium transition-colors"
                        >
                            "Save"
                        </button>
                    </div>
                </div>

                // Connection status
                <div class="flex items-center space-x-2">
                    <span class="text-sm text-gray-400">"Status:"</span>
                    {move || {
                        match test_result.get() {
                            Some(true) => view! {
                                <span class="text-green-400">"✓ Connected"</span>
                            }.into_view(),
                            Some(false) => view! {
                                <span class="text-red-400">"✕ Failed"</span>
                            }.into_view(),
                            None => view! {
                                <span class="text-gray-400">"Not tested"</span>
                            }.into_view(),
                        }
                    }}
                </div>

                // Coach backend
                <div class="flex items-center space-x-2">
                    <span class="text-sm text-gray-400">"Coach:"</span>
                    {move || {
                        match coach_mode.get().as_deref() {
                            Some("model") => view! {
                                <span class="text-green-400">"Chat model"</span>
                            }.into_view(),
                            Some("fallback") => view! {
                                <span class="text-yellow-400">"Rule-based fallback"</span>
                            }.into_view(),
                            _ => view! {
                                <span class="text-gray-400">"Unknown"</span>
                            }.into_view(),
                        }
                    }}
                </div>
            </div>
        </section>
    }
}

/// About section
#[component]
fn AboutSection() -> impl IntoView {
    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"About Regimen"</h2>

            <div class="space-y-4 text-gray-300">
                <p>
                    "Regimen is an AI diet & fitness coach. "
                    "Enter your health profile to get nutrition targets, a daily meal plan, "
                    "a weekly workout schedule and a coach to ask questions."
                </p>

                <div class="grid md:grid-cols-2 gap-4 text-sm">
                    <div class="p-4 bg-gray-700 rounded-lg">
                        <h3 class="font-medium text-white mb-2">"Built With"</h3>
                        <ul class="space-y-1 text-gray-400">
                            <li>"• Rust (Backend & Frontend)"</li>
                            <li>"• Leptos (WASM UI Framework)"</li>
                            <li>"• Axum (Web Server)"</li>
                        </ul>
                    </div>

                    <div class="p-4 bg-gray-700 rounded-lg">
                        <h3 class="font-medium text-white mb-2">"Features"</h3>
                        <ul class="space-y-1 text-gray-400">
                            <li>"• Nutrition targets (BMR/TDEE)"</li>
                            <li>"• Meal & workout plans"</li>
                            <li>"• Context-aware coaching chat"</li>
                            <li>"• Plan narration & download"</li>
                        </ul>
                    </div>
                </div>

                <p class="text-sm text-gray-400">
                    "Version 0.1.0 • Made with 🧡 using Rust"
                </p>
            </div>
        </section>
    }
}
