use leptos::prelude::*;

use crate::components::{
    ConfirmCodeForm, ContactsForm, DeliveryAddressForm, EmailPasswordForm, PersonalDataForm,
    PhoneNumberForm,
};
use crate::models::{UserData, WizardState, WizardStep};

/// Six-step registration flow. Owns the wizard state, provides it to the
/// step components via context, and renders the step matching the current
/// state together with the progress indicator.
#[component]
pub fn RegistrationWizard() -> impl IntoView {
    let state = WizardState::new();

    // Provide context to all step components
    provide_context(state);

    view! {
        <div class="min-h-screen bg-white flex justify-center">
            <div class="w-full max-w-xl px-6 pb-16">
                <ProgressDots />
                {move || match state.step.get() {
                    WizardStep::PhoneNumber => view! { <PhoneNumberForm /> }.into_any(),
                    WizardStep::ConfirmCode => view! { <ConfirmCodeForm /> }.into_any(),
                    WizardStep::EmailPassword => view! { <EmailPasswordForm /> }.into_any(),
                    WizardStep::PersonalData => view! { <PersonalDataForm /> }.into_any(),
                    WizardStep::Contacts => view! { <ContactsForm /> }.into_any(),
                    WizardStep::DeliveryAddress => view! { <DeliveryAddressForm /> }.into_any(),
                }}
            </div>
        </div>
    }
}

/// Three dots the six steps cycle through twice.
#[component]
fn ProgressDots() -> impl IntoView {
    let state = use_context::<WizardState>().expect("WizardState context missing");

    view! {
        <div class="flex justify-center space-x-2 mt-8">
            {(1..=3u8)
                .map(|dot| view! {
                    <span class=move || {
                        if state.step.get().progress_dot() == dot {
                            "w-2.5 h-2.5 rounded-full bg-blue-600"
                        } else {
                            "w-2.5 h-2.5 rounded-full bg-gray-300"
                        }
                    } />
                })
                .collect_view()}
        </div>
    }
}

/// Persistence hook for the finished record: log it to the browser console.
pub(crate) fn log_completed_registration(record: &UserData) {
    match serde_wasm_bindgen::to_value(record) {
        Ok(value) => web_sys::console::log_2(&"Completed registration:".into(), &value),
        Err(e) => {
            web_sys::console::error_1(
                &format!("Failed to serialize completed registration: {e}").into(),
            );
        }
    }
}
