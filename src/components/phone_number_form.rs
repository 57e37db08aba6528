use leptos::prelude::*;

use crate::components::icons::{self, Icon};
use crate::models::{validation, UserDataPatch, WizardState};

/// Dial codes offered by the registration flow.
const DIAL_CODES: [(&str, &str); 3] = [("+1", "USA"), ("+44", "UK"), ("+38", "Ukraine")];

/// Step 1: collect the dial code and phone number, then "send" the code.
#[component]
pub fn PhoneNumberForm() -> impl IntoView {
    let state = use_context::<WizardState>().expect("WizardState context missing");

    let phone_number = RwSignal::new(String::new());
    let selected_code = RwSignal::new(DIAL_CODES[0].0);
    let code_list_open = RwSignal::new(false);
    let phone_error = RwSignal::new(None::<String>);
    let show_privacy_notice = RwSignal::new(true);
    // Reserved for a real backend call; nothing sets it today.
    let api_error = RwSignal::new(None::<String>);

    let on_submit = move |_| match validation::validate_phone_number(&phone_number.get()) {
        Ok(()) => {
            phone_error.set(None);
            api_error.set(None);
            state.submit(UserDataPatch::Phone {
                phone_number: phone_number.get(),
                country_code: selected_code.get().to_string(),
            });
        }
        Err(message) => phone_error.set(Some(message)),
    };

    view! {
        <div class="w-full bg-white mt-20">
            <h2 class="text-3xl font-bold mb-2">"Registration"</h2>
            <p class="text-gray-400 mb-4 text-sm font-light">
                "Fill in the registration data. It will take a couple of minutes. All you need is a phone number and e-mail"
            </p>

            <Show when=move || show_privacy_notice.get()>
                <div class="bg-gray-100 p-5 rounded-md text-sm mb-6 flex items-center">
                    <Icon path=icons::LOCK class="w-4 h-5 mr-2 text-gray-500" />
                    <p class="flex-1">
                        "We take privacy issues seriously. You can be sure that your personal data is securely protected."
                    </p>
                    <button
                        class="ml-2 text-gray-400 hover:text-gray-600"
                        on:click=move |_| show_privacy_notice.set(false)
                    >
                        <Icon path=icons::X class="w-4 h-4" />
                    </button>
                </div>
            </Show>

            <div class="mb-7 p-9 border border-gray-200 rounded-md">
                <label class="block text-sm font-medium text-gray-700 mb-2">
                    "Enter your phone number"
                </label>
                <div class="flex items-center space-x-2">
                    <div class="relative">
                        <button
                            class="bg-white border-b border-gray-300 px-3 py-2 text-sm text-gray-700 focus:outline-none flex"
                            on:click=move |_| code_list_open.update(|open| *open = !*open)
                        >
                            {move || selected_code.get()}
                            <Icon path=icons::CHEVRON_DOWN class="ml-2 mt-0.5 w-4 h-4 text-gray-700" />
                        </button>
                        <Show when=move || code_list_open.get()>
                            <ul class="absolute mt-1 w-max border rounded-md bg-white shadow-lg z-10">
                                {DIAL_CODES
                                    .iter()
                                    .map(|&(code, country)| view! {
                                        <li
                                            class="px-4 py-2 hover:bg-gray-100 duration-200 cursor-pointer text-sm"
                                            on:click=move |_| {
                                                selected_code.set(code);
                                                code_list_open.set(false);
                                            }
                                        >
                                            {format!("{code} ({country})")}
                                        </li>
                                    })
                                    .collect_view()}
                            </ul>
                        </Show>
                    </div>

                    <input
                        type="text"
                        class="flex-1 border-b border-gray-300 px-3 py-2 text-sm focus:outline-none focus:ring-1 focus:ring-gray-200"
                        placeholder="555 555 1234"
                        prop:value=move || phone_number.get()
                        on:input=move |ev| phone_number.set(event_target_value(&ev))
                    />
                </div>
                {move || phone_error.get().map(|message| view! {
                    <p class="text-red-500 text-sm mt-1">{message}</p>
                })}
            </div>

            {move || api_error.get().map(|message| view! {
                <p class="text-red-500 text-sm mb-4">{message}</p>
            })}

            <button
                class="text-sm border border-gray-300 px-4 py-2 rounded-md hover:bg-gray-100 transition-colors duration-200"
                on:click=on_submit
            >
                "Send Code"
            </button>
        </div>
    }
}
