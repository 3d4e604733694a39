//! Risk Card Component
//!
//! One finding from the prediction service, coloured by severity.

use leptos::prelude::*;
use petaid_core::prediction::FindingCard;

#[component]
pub fn RiskCard(card: FindingCard) -> impl IntoView {
    view! {
        <li class="risk-card">
            <div class="risk-card-header">
                <span class="risk-symptom">{card.symptom}</span>
                <span class=format!("risk-label {}", card.css_class)>{card.label}</span>
            </div>
            {card.original_text.map(|text| view! { <p class="risk-original">"You wrote: " {text}</p> })}
            <p class="risk-advice">{card.advice}</p>
        </li>
    }
}
