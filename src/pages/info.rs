//! Content Pages
//!
//! Mostly static marketing pages. Buttons for services that do not exist
//! yet raise a "coming soon" notice.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use petaid_core::{Notice, Route};

use crate::components::NavLink;
use crate::context::use_app;

type Feature = (&'static str, &'static str, &'static str);

fn coming_soon(feature: &str) -> Notice {
    Notice::info(
        "🚧 Feature Coming Soon!",
        format!("The '{}' feature isn't implemented yet. Check back soon! 🚀", feature),
    )
}

fn feature_grid(features: &'static [Feature]) -> impl IntoView {
    view! {
        <div class="feature-grid">
            {features
                .iter()
                .map(|(icon, title, description)| {
                    view! {
                        <div class="feature-card">
                            <span class="feature-icon">{*icon}</span>
                            <h3>{*title}</h3>
                            <p>{*description}</p>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn ComingSoonButton(feature: &'static str, #[prop(optional)] primary: bool) -> impl IntoView {
    let app = use_app();
    view! {
        <button
            class=if primary { "btn-primary" } else { "btn-outline" }
            on:click=move |_| app.notify(coming_soon(feature))
        >
            {feature}
        </button>
    }
}

const HOME_FEATURES: &[Feature] = &[
    ("🩺", "AI Symptom Checker", "Describe what you see and get a preliminary risk assessment in seconds."),
    ("📈", "Health Tracking", "Log weight, activity and notes to spot changes early."),
    ("💊", "Medication Reminders", "Keep every dose and treatment schedule in one list."),
    ("💉", "Vaccination Scheduling", "Know which shots are overdue, due soon, or coming up."),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="hero">
            <h1>"Smart care for the pets you love"</h1>
            <p class="lead">
                "PetAid Hub brings AI symptom checks, health tracking and reminders together for pet parents."
            </p>
            <div class="hero-actions">
                <NavLink route=Route::SymptomChecker label="Check Symptoms" />
                <NavLink route=Route::CareTools label="Explore Care Tools" />
            </div>
        </section>
        <section class="page-section">
            <h2>"Everything your pet needs"</h2>
            {feature_grid(HOME_FEATURES)}
        </section>
    }
}

const VALUES: &[Feature] = &[
    ("❤️", "Compassion", "Every animal deserves kindness and care. We approach our work with empathy and understanding."),
    ("🔬", "Innovation", "We use modern technology to make expert guidance easier to reach."),
    ("🤝", "Community", "Pet parents learn best from each other, and we help them connect."),
];

#[component]
pub fn AboutUsPage() -> impl IntoView {
    view! {
        <section class="page-section">
            <h1>"About PetAid Hub"</h1>
            <p id="mission" class="lead">
                "Our mission is to make quality pet care guidance available to every pet parent, any time."
            </p>
            {feature_grid(VALUES)}
        </section>
        <section id="careers" class="page-section">
            <h2>"Join the team"</h2>
            <p>"We are always looking for vets, engineers and animal lovers."</p>
            <ComingSoonButton feature="Careers" />
        </section>
    }
}

const COMMUNITY: &[Feature] = &[
    ("💬", "Discussion Forums", "Ask questions and share experiences with other pet parents."),
    ("📅", "Local Events", "Find adoption days, training classes and meetups near you."),
    ("📚", "Success Stories", "Read how other pets recovered and thrived."),
];

#[component]
pub fn CommunityPage() -> impl IntoView {
    view! {
        <section class="page-section">
            <h1>"Community"</h1>
            <p class="lead">"Connect with pet parents who understand."</p>
            {feature_grid(COMMUNITY)}
            <div class="hero-actions">
                <ComingSoonButton feature="Join the Forum" primary=true />
                <ComingSoonButton feature="Browse Events" />
            </div>
        </section>
    }
}

const VET_FEATURES: &[Feature] = &[
    ("🎥", "Video Consultations", "High-quality video calls with certified vets from the comfort of your home."),
    ("💬", "Chat Support", "Quick questions? Get text-based advice from veterinary professionals."),
    ("👩‍⚕️", "Expert Veterinarians", "Access a network of experienced and compassionate veterinary doctors."),
];

#[component]
pub fn ConsultVetPage() -> impl IntoView {
    view! {
        <section class="page-section">
            <h1>"Consult a Vet"</h1>
            <p class="lead">"Professional advice without the waiting room."</p>
            {feature_grid(VET_FEATURES)}
            <div class="hero-actions">
                <ComingSoonButton feature="Book a Consultation" primary=true />
                <ComingSoonButton feature="Start a Chat" />
            </div>
        </section>
    }
}

const INSURANCE_FEATURES: &[Feature] = &[
    ("🩹", "Accident & Illness Coverage", "Comprehensive protection for unexpected vet bills due to accidents or illnesses."),
    ("💰", "Financial Peace of Mind", "Reduce the stress of costly treatments and focus on your pet's recovery."),
    ("📝", "Customizable Plans", "Choose coverage levels, deductibles, and reimbursement options that fit your budget."),
    ("🛡️", "Wellness Add-ons", "Optional coverage for routine care like vaccinations, dental cleanings, and check-ups."),
];

#[component]
pub fn PetInsurancePage() -> impl IntoView {
    view! {
        <section class="page-section">
            <h1>"Pet Insurance"</h1>
            <p class="lead">"Protect your pet and your wallet."</p>
            {feature_grid(INSURANCE_FEATURES)}
            <div class="hero-actions">
                <ComingSoonButton feature="Get a Quote" primary=true />
                <ComingSoonButton feature="Compare Plans" />
            </div>
        </section>
    }
}

const INQUIRY_TYPES: &[(&str, &str)] = &[
    ("general", "General Inquiry"),
    ("support", "Technical Support"),
    ("partnership", "Partnership"),
    ("feedback", "Feedback"),
];

/// Contact form. Submission is simulated; nothing leaves the browser.
#[component]
pub fn ContactUsPage() -> impl IntoView {
    let app = use_app();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let subject = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let inquiry = RwSignal::new(String::new());
    let (is_submitting, set_is_submitting) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get_untracked() {
            return;
        }
        let fields = [name, email, subject, message, inquiry];
        if fields.iter().any(|f| f.with_untracked(|v| v.trim().is_empty())) {
            app.notify(Notice::error(
                "Incomplete Form",
                "Please fill out all fields before submitting.",
            ));
            return;
        }
        set_is_submitting.set(true);
        spawn_local(async move {
            TimeoutFuture::new(1500).await;
            for field in fields {
                field.set(String::new());
            }
            set_is_submitting.set(false);
            app.notify(Notice::success(
                "Message Sent!",
                "Thank you for contacting us. We'll get back to you shortly. 🚀",
            ));
        });
    };

    let text_input = move |signal: RwSignal<String>, kind: &'static str, placeholder: &'static str| {
        view! {
            <input
                type=kind
                placeholder=placeholder
                prop:value=move || signal.get()
                on:input=move |ev| signal.set(event_target_value(&ev))
            />
        }
    };

    view! {
        <section class="page-section contact">
            <h1>"Contact Us"</h1>
            <div class="contact-methods">
                <a href="mailto:hello@petaidhub.com">"✉️ hello@petaidhub.com"</a>
                <a href="tel:+15551234567">"📞 +1 (555) 123-4567"</a>
                <span>"📍 123 Pet Street, Animal City, CA 90210"</span>
            </div>
            <form class="contact-form" on:submit=submit>
                {text_input(name, "text", "Your Name")}
                {text_input(email, "email", "Your Email")}
                {text_input(subject, "text", "Subject")}
                <select on:change=move |ev| inquiry.set(event_target_value(&ev))>
                    <option value="" selected=move || inquiry.get().is_empty()>"Inquiry Type"</option>
                    {INQUIRY_TYPES
                        .iter()
                        .map(|(value, label)| {
                            view! {
                                <option value=*value selected=move || inquiry.get() == *value>
                                    {*label}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
                <textarea
                    placeholder="Your Message"
                    prop:value=move || message.get()
                    on:input=move |ev| message.set(event_target_value(&ev))
                />
                <button type="submit" class="btn-primary" disabled=move || is_submitting.get()>
                    {move || if is_submitting.get() { "Sending..." } else { "Send Message" }}
                </button>
            </form>
        </section>
    }
}
