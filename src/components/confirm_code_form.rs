use leptos::prelude::*;

use crate::components::icons::{self, Icon};
use crate::models::{validation, UserDataPatch, WizardState};

/// Step 2: confirm the phone number with the code from the "SMS".
/// The shown number can be edited inline without leaving the step.
#[component]
pub fn ConfirmCodeForm() -> impl IntoView {
    let state = use_context::<WizardState>().expect("WizardState context missing");

    let confirmation_code = RwSignal::new(String::new());
    let code_error = RwSignal::new(None::<String>);
    let editing_phone = RwSignal::new(false);
    let edited_phone = RwSignal::new(String::new());
    let phone_error = RwSignal::new(None::<String>);
    // Reserved for a real backend call; nothing sets it today.
    let api_error = RwSignal::new(None::<String>);

    let dial_code = move || {
        state
            .user_data
            .get()
            .country_code
            .unwrap_or_else(|| "+1".to_string())
    };
    let phone_number = move || {
        state
            .user_data
            .get()
            .phone_number
            .unwrap_or_else(|| "555 555 1234".to_string())
    };

    let on_edit = move |_| {
        edited_phone.set(phone_number());
        editing_phone.set(true);
    };

    let on_save_phone = move |_| match validation::validate_phone_number(&edited_phone.get()) {
        Ok(()) => {
            phone_error.set(None);
            state.apply(UserDataPatch::PhoneEdit {
                phone_number: edited_phone.get(),
            });
            editing_phone.set(false);
        }
        Err(message) => phone_error.set(Some(message)),
    };

    let on_send_again = move |_| {
        let number = phone_number();
        web_sys::console::log_1(&format!("Sending code again for {number}").into());
    };

    let on_submit = move |_| match validation::validate_confirmation_code(&confirmation_code.get())
    {
        Ok(()) => {
            code_error.set(None);
            api_error.set(None);
            state.submit(UserDataPatch::Confirmation {
                confirmation_code: confirmation_code.get(),
            });
        }
        Err(message) => code_error.set(Some(message)),
    };

    view! {
        <div class="w-full bg-white mt-20">
            <h2 class="text-3xl font-bold mb-2">"Registration"</h2>
            <p class="text-gray-400 mb-4 text-sm font-light">
                "Fill in the registration data. It will take a couple of minutes. All you need is a phone number and e-mail"
            </p>

            <div class="mb-7">
                <div class="flex items-center justify-between mb-4 border border-gray-300 p-4 rounded-md">
                    <Show
                        when=move || editing_phone.get()
                        fallback=move || view! {
                            <div>
                                <p class="pb-1 text-gray-700">
                                    {move || format!("{} {}", dial_code(), phone_number())}
                                </p>
                                <p class="text-sm text-gray-400">"Number not confirmed yet"</p>
                            </div>
                            <button on:click=on_edit>
                                <Icon path=icons::PENCIL class="w-5 h-5 text-blue-600" />
                            </button>
                        }
                    >
                        <div class="flex items-center space-x-2 flex-1">
                            <span class="text-sm text-gray-700">{dial_code}</span>
                            <div class="relative flex-1">
                                <input
                                    type="text"
                                    class="w-full border border-gray-300 rounded-md px-3 py-2 text-sm focus:outline-none focus:ring-2 focus:ring-gray-500 pr-10"
                                    placeholder="555 555 1234"
                                    prop:value=move || edited_phone.get()
                                    on:input=move |ev| edited_phone.set(event_target_value(&ev))
                                />
                                <button
                                    class="absolute right-3 top-1/2 -translate-y-1/2"
                                    on:click=on_save_phone
                                >
                                    <Icon path=icons::CHECK class="w-5 h-5 text-blue-600" />
                                </button>
                            </div>
                        </div>
                    </Show>
                </div>
                {move || (editing_phone.get()).then(|| phone_error.get()).flatten().map(|message| view! {
                    <p class="text-red-500 text-sm mt-1 mb-4">{message}</p>
                })}

                <label class="block text-sm text-gray-700 mb-2 mt-8">"Confirmation code"</label>
                <div class="flex items-center space-x-2">
                    <input
                        type="text"
                        class="flex-1 border-b border-gray-300 px-3 py-2 text-2xl focus:outline-none focus:border-b-blue-600"
                        placeholder="- - - -"
                        maxlength="4"
                        prop:value=move || confirmation_code.get()
                        on:input=move |ev| confirmation_code.set(event_target_value(&ev))
                    />
                    <button
                        class="font-medium flex items-center text-blue-600 text-sm hover:text-blue-700"
                        on:click=on_send_again
                    >
                        <Icon path=icons::ROTATE_CCW class="w-4 h-4 mr-1" />
                        "Send again"
                    </button>
                </div>
                <p class="text-gray-400 text-xs mt-2">
                    "Confirm phone number with code from SMS message"
                </p>
                {move || code_error.get().map(|message| view! {
                    <p class="text-red-500 text-sm mt-1">{message}</p>
                })}
            </div>

            {move || api_error.get().map(|message| view! {
                <p class="text-red-500 text-sm mb-4">{message}</p>
            })}

            <button
                class="font-medium text-sm border border-gray-300 px-4 py-2 rounded-md hover:bg-gray-100 transition-colors duration-200"
                on:click=on_submit
            >
                "Confirm"
            </button>
        </div>
    }
}
