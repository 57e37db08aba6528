use leptos::prelude::*;

use crate::components::icons::{self, Icon};
use crate::components::CountryCitySelect;
use crate::models::{validation, PlaceSelection, UserDataPatch, WizardState};

/// Step 4: passport data (names, date and place of birth, ITIN) plus the
/// terms-of-use acknowledgment. All fields validate together on submit.
#[component]
pub fn PersonalDataForm() -> impl IntoView {
    let state = use_context::<WizardState>().expect("WizardState context missing");

    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let date_of_birth = RwSignal::new(String::new());
    let itin = RwSignal::new(String::new());
    let terms_accepted = RwSignal::new(false);
    let place = RwSignal::new(PlaceSelection::default());

    let first_name_error = RwSignal::new(None::<String>);
    let last_name_error = RwSignal::new(None::<String>);
    let date_of_birth_error = RwSignal::new(None::<String>);
    let place_error = RwSignal::new(None::<String>);
    let itin_error = RwSignal::new(None::<String>);
    let terms_error = RwSignal::new(None::<String>);

    let on_submit = move |_| {
        let first_name_result =
            validation::validate_required(&first_name.get(), "First name is required");
        let last_name_result =
            validation::validate_required(&last_name.get(), "Second name is required");
        let date_of_birth_result =
            validation::validate_required(&date_of_birth.get(), "Date of Birth is required");
        let place_result = if place.get().has_selection() {
            Ok(())
        } else {
            Err("Place of Birth is required".to_string())
        };
        let itin_result = validation::validate_itin(&itin.get());
        let terms_result = if terms_accepted.get() {
            Ok(())
        } else {
            Err("You must agree with Terms of use".to_string())
        };

        first_name_error.set(first_name_result.clone().err());
        last_name_error.set(last_name_result.clone().err());
        date_of_birth_error.set(date_of_birth_result.clone().err());
        place_error.set(place_result.clone().err());
        itin_error.set(itin_result.clone().err());
        terms_error.set(terms_result.clone().err());

        let all_valid = first_name_result.is_ok()
            && last_name_result.is_ok()
            && date_of_birth_result.is_ok()
            && place_result.is_ok()
            && itin_result.is_ok()
            && terms_result.is_ok();
        if all_valid {
            state.submit(UserDataPatch::Personal {
                first_name: first_name.get(),
                last_name: last_name.get(),
                date_of_birth: date_of_birth.get(),
                place_of_birth: place.get().display_value(),
                itin: itin.get(),
            });
        }
    };

    let good_itin =
        move || !itin.get().is_empty() && validation::validate_itin(&itin.get()).is_ok();

    view! {
        <div class="w-full bg-white mt-20">
            <h2 class="text-3xl font-bold">"Profile info"</h2>
            <p class="text-gray-400 mb-4 text-sm font-light">
                "Fill in the data for profile. It will take a couple of minutes. You only need a passport"
            </p>

            <label class="flex items-center mb-2">
                <input
                    type="checkbox"
                    class="mr-2"
                    prop:checked=move || terms_accepted.get()
                    on:change=move |ev| terms_accepted.set(event_target_checked(&ev))
                />
                <span class="text-sm">
                    "I agree with " <span class="text-blue-600">"Terms of use"</span>
                </span>
            </label>
            {move || terms_error.get().map(|message| view! {
                <p class="text-red-500 text-xs mb-1">{message}</p>
            })}

            <div class="mb-7 px-6 pt-3 bg-white border border-gray-300 rounded-md">
                <h3 class="text-lg font-medium mb-1 mt-1">"Personal data"</h3>
                <p class="text-sm text-gray-500 mb-4">"Specify exactly as in your passport"</p>

                <label class="block text-sm text-gray-700 mb-2">"First name"</label>
                <input
                    type="text"
                    class="w-full border-b border-gray-300 px-3 py-2 text-sm focus:outline-none focus:border-b-blue-600"
                    placeholder="Alexander"
                    prop:value=move || first_name.get()
                    on:input=move |ev| first_name.set(event_target_value(&ev))
                />
                {move || first_name_error.get().map(|message| view! {
                    <p class="text-red-500 text-xs">{message}</p>
                })}

                <label class="block text-sm text-gray-700 mb-2">"Second name"</label>
                <input
                    type="text"
                    class="w-full border-b border-gray-300 px-3 py-2 text-sm focus:outline-none focus:border-b-blue-600"
                    placeholder="Smith"
                    prop:value=move || last_name.get()
                    on:input=move |ev| last_name.set(event_target_value(&ev))
                />
                {move || last_name_error.get().map(|message| view! {
                    <p class="text-red-500 text-xs">{message}</p>
                })}

                <div class="flex space-x-4 mb-4">
                    <div class="w-1/2">
                        <label class="block text-sm text-gray-700 mb-2">"Date of Birth"</label>
                        <input
                            type="date"
                            class="w-full border-b border-gray-300 px-3 py-2 text-sm focus:outline-none focus:border-b-blue-600"
                            prop:value=move || date_of_birth.get()
                            on:input=move |ev| date_of_birth.set(event_target_value(&ev))
                        />
                        {move || date_of_birth_error.get().map(|message| view! {
                            <p class="text-red-500 text-xs">{message}</p>
                        })}
                    </div>
                    <div class="w-1/2">
                        <label class="block text-sm text-gray-700 mb-2">"Place of Birth"</label>
                        <CountryCitySelect selection=place />
                        {move || place_error.get().map(|message| view! {
                            <p class="text-red-500 text-xs">{message}</p>
                        })}
                    </div>
                </div>
            </div>

            <div class="mb-5 px-6 bg-white border border-gray-300 rounded-md">
                <div class="relative mb-4">
                    <input
                        type="text"
                        class="w-full border-b border-gray-300 pt-4 text-sm focus:outline-none focus:border-b-blue-600"
                        placeholder="123-45-678"
                        prop:value=move || itin.get()
                        on:input=move |ev| itin.set(event_target_value(&ev))
                    />
                    {move || itin_error.get().map(|message| view! {
                        <p class="text-red-500 text-xs mt-1">{message}</p>
                    })}
                    {move || good_itin().then(|| view! {
                        <p class="text-green-600 text-xs mt-1">"✓ Your ITIN"</p>
                    })}
                </div>
            </div>

            <button
                class="font-medium text-sm border border-gray-300 pl-4 pr-1 py-2 mb-5 rounded-md hover:bg-gray-100 transition-colors duration-200 flex items-center justify-center"
                on:click=on_submit
            >
                "Go Next" <Icon path=icons::CHEVRON_RIGHT class="w-4 h-4 ml-1" />
            </button>
        </div>
    }
}
