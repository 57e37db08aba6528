use leptos::prelude::*;

use crate::components::icons::{self, Icon};
use crate::models::{validation, UserDataPatch, WizardState};

/// Step 3: email and password. Unlike the other steps, both fields
/// re-validate on every change, not only on submit.
#[component]
pub fn EmailPasswordForm() -> impl IntoView {
    let state = use_context::<WizardState>().expect("WizardState context missing");

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let email_error = RwSignal::new(None::<String>);
    let password_error = RwSignal::new(None::<String>);
    let show_password = RwSignal::new(false);
    // Reserved for a real backend call; nothing sets it today.
    let api_error = RwSignal::new(None::<String>);

    let on_email_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        email_error.set(validation::validate_email(&value).err());
        email.set(value);
    };

    let on_password_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        password_error.set(validation::validate_password(&value).err());
        password.set(value);
    };

    let on_submit = move |_| {
        let email_result = validation::validate_email(&email.get());
        let password_result = validation::validate_password(&password.get());
        email_error.set(email_result.clone().err());
        password_error.set(password_result.clone().err());

        if email_result.is_ok() && password_result.is_ok() {
            api_error.set(None);
            state.submit(UserDataPatch::Credentials {
                email: email.get(),
                password: password.get(),
            });
        }
    };

    let confirmed_number = move || {
        let data = state.user_data.get();
        format!(
            "{} {}",
            data.country_code.unwrap_or_else(|| "+1".to_string()),
            data.phone_number.unwrap_or_else(|| "555 555 1234".to_string()),
        )
    };

    let good_password = move || {
        !password.get().is_empty() && validation::validate_password(&password.get()).is_ok()
    };

    view! {
        <div class="w-full bg-white mt-20">
            <h2 class="text-3xl font-bold mb-2">"Registration"</h2>
            <p class="text-gray-400 mb-4 text-sm font-light">
                "Fill in the registration data. It will take a couple of minutes. All you need is a phone number and e-mail"
            </p>

            <div class="mb-7">
                <div class="flex items-center justify-between mb-4 border border-gray-300 p-4 rounded-md">
                    <div>
                        <p class="pb-1 text-gray-700">{confirmed_number}</p>
                        <p class="text-sm text-gray-400">"✓ Number confirmed"</p>
                    </div>
                </div>

                <div class="mb-6 p-8 bg-white border border-gray-300 rounded-md">
                    <label class="block text-sm text-gray-700 mb-2">"Enter your email"</label>
                    <input
                        type="text"
                        class="w-full border-b border-gray-300 px-3 py-2 text-sm focus:outline-none focus:border-b-blue-600"
                        placeholder="alex_manager@gmail.com"
                        prop:value=move || email.get()
                        on:input=on_email_input
                    />
                    {move || email_error.get().map(|message| view! {
                        <p class="text-red-500 text-sm mt-1">{message}</p>
                    })}

                    <label class="block text-sm text-gray-700 mb-2 mt-8">"Set a password"</label>
                    <div class="relative">
                        <input
                            type=move || if show_password.get() { "text" } else { "password" }
                            class="w-full border-b border-gray-300 px-2 py-2 text-sm focus:outline-none focus:border-b-blue-600 pr-10"
                            placeholder="••••••••"
                            prop:value=move || password.get()
                            on:input=on_password_input
                        />
                        <button
                            class="absolute right-3 top-1/2 -translate-y-1/2 text-gray-400"
                            on:click=move |_| show_password.update(|shown| *shown = !*shown)
                        >
                            {move || {
                                let path = if show_password.get() { icons::EYE_OFF } else { icons::EYE };
                                view! { <Icon path=path class="w-4 h-4" /> }
                            }}
                        </button>
                    </div>
                    {move || password_error.get().map(|message| view! {
                        <p class="text-red-500 text-sm mt-1">{message}</p>
                    })}
                    {move || good_password().then(|| view! {
                        <p class="text-green-600 text-xs mt-1">"✓ Good password"</p>
                    })}
                </div>

                {move || api_error.get().map(|message| view! {
                    <p class="text-red-500 text-sm mb-4">{message}</p>
                })}

                <button
                    class="font-medium text-sm bg-blue-600 text-white px-6 py-3 rounded-md hover:bg-blue-700 transition-colors duration-200"
                    on:click=on_submit
                >
                    "Register Now"
                </button>
            </div>
        </div>
    }
}
