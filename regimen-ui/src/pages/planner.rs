//! Planner Page
//!
//! The orchestrator page: profile form, plan results and coaching
//! chat. Results and chat stay hidden until the whole plan pipeline
//! has succeeded, which is the only guard against chatting with an
//! empty context.

use leptos::*;

use crate::components::{ChatWidget, ProfileFormCard, Results};
use crate::state::session::SessionState;

/// Planner page component
#[component]
pub fn Planner() -> impl IntoView {
    let state = use_context::<SessionState>().expect("SessionState not found");

    view! {
        <div class="space-y-8">
            // Header
            <div>
                <h1 class="text-3xl font-bold">"AI Diet & Fitness Coach"</h1>
                <p class="text-gray-400 mt-1">"Personalized nutrition and workout planning"</p>
            </div>

            <ProfileFormCard />

            // Revealed only after the full pipeline succeeds
            {move || {
                if state.plans_ready.get() {
                    view! {
                        <Results />
                        <ChatWidget />
                    }.into_view()
                } else {
                    view! {}.into_view()
                }
            }}
        </div>
    }
}
