//! Symptom Checker Page
//!
//! Sends the description to the prediction service and shows its findings
//! verbatim. The button stays disabled while a request is pending.

use leptos::prelude::*;
use leptos::task::spawn_local;
use petaid_core::prediction::{
    analyze, AnalysisState, Begin, PredictionClient, SymptomQuery, CHECKER_SPECIES, DISCLAIMER,
};

use crate::components::RiskCard;
use crate::context::use_app;

#[component]
pub fn SymptomCheckerPage() -> impl IntoView {
    let app = use_app();
    let query = RwSignal::new(SymptomQuery::default());
    let state = RwSignal::new(AnalysisState::default());

    let check_symptoms = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let query = query.get_untracked();
        match state.try_update(|s| s.begin(&query)) {
            Some(Begin::Started) => {}
            Some(Begin::Rejected(notice)) => return app.notify(notice),
            Some(Begin::Busy) | None => return,
        }
        let client = PredictionClient::new(app.config().predict_url);
        spawn_local(async move {
            let outcome = analyze(&client, &query).await;
            if let Some(notice) = state.try_update(|s| s.finish(outcome)) {
                app.notify(notice);
            }
        });
    };

    view! {
        <section class="page-section symptom-checker">
            <h1>"AI Symptom Checker"</h1>
            <p class="lead">"Describe what you're seeing and get a preliminary assessment."</p>
            <form class="checker-form" on:submit=check_symptoms>
                <label class="field">
                    <span class="field-label">"Pet type"</span>
                    <select on:change=move |ev| {
                        let species = event_target_value(&ev);
                        query.update(|q| q.species = species);
                    }>
                        <option value="" selected=move || query.with(|q| q.species.is_empty())>
                            "Select pet type"
                        </option>
                        {CHECKER_SPECIES
                            .iter()
                            .map(|(value, label)| {
                                view! {
                                    <option
                                        value=*value
                                        selected=move || query.with(|q| q.species == *value)
                                    >
                                        {*label}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </label>
                <label class="field">
                    <span class="field-label">"Symptoms"</span>
                    <textarea
                        rows="5"
                        placeholder="e.g. vomiting since this morning, and lethargy"
                        prop:value=move || query.with(|q| q.description.clone())
                        on:input=move |ev| {
                            let description = event_target_value(&ev);
                            query.update(|q| q.description = description);
                        }
                    />
                </label>
                <button type="submit" class="btn-primary" disabled=move || state.with(AnalysisState::is_pending)>
                    {move || if state.with(AnalysisState::is_pending) { "Analyzing..." } else { "Check Symptoms" }}
                </button>
            </form>

            {move || {
                state
                    .with(AnalysisState::view)
                    .map(|analysis| {
                        view! {
                            <div class="analysis-result">
                                <h2>"Analysis"</h2>
                                <div class="analysis-summary" inner_html=analysis.summary_html></div>
                                <ul class="risk-list">
                                    {analysis
                                        .cards
                                        .into_iter()
                                        .map(|card| view! { <RiskCard card=card /> })
                                        .collect_view()}
                                </ul>
                                <div class="disclaimer">
                                    <h4>"Important Disclaimer"</h4>
                                    <p>{DISCLAIMER}</p>
                                </div>
                            </div>
                        }
                    })
            }}
        </section>
    }
}
