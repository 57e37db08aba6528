use leptos::prelude::*;

use crate::components::icons::{self, Icon};
use crate::components::wizard::log_completed_registration;
use crate::components::CountryCitySelect;
use crate::models::{validation, PlaceSelection, UserDataPatch, WizardState};

/// Step 6: delivery address. Saving completes the flow: the accumulated
/// record is handed to the persistence hook and the wizard resets to the
/// first step.
#[component]
pub fn DeliveryAddressForm() -> impl IntoView {
    let state = use_context::<WizardState>().expect("WizardState context missing");

    // Country and city chosen on an earlier step pre-populate the selector.
    let initial = state.user_data.get();
    let place = RwSignal::new(PlaceSelection::with_defaults(
        initial.country,
        initial.city,
    ));
    let address = RwSignal::new(initial.address.unwrap_or_default());
    let zip_code = RwSignal::new(String::new());

    let country_error = RwSignal::new(None::<String>);
    let city_error = RwSignal::new(None::<String>);
    let address_error = RwSignal::new(None::<String>);
    let zip_code_error = RwSignal::new(None::<String>);
    // Reserved for a real backend call; nothing sets it today.
    let api_error = RwSignal::new(None::<String>);

    let on_submit = move |_| {
        let chosen = place.get();
        let country_result = chosen
            .country
            .clone()
            .ok_or_else(|| "Country is required".to_string());
        let city_result = chosen
            .city
            .clone()
            .ok_or_else(|| "City is required".to_string());
        let address_result = validation::validate_required(&address.get(), "Address is required");
        let zip_code_result =
            validation::validate_required(&zip_code.get(), "Zip Code is required");

        country_error.set(country_result.clone().err());
        city_error.set(city_result.clone().err());
        address_error.set(address_result.clone().err());
        zip_code_error.set(zip_code_result.clone().err());

        if let (Ok(country), Ok(city), Ok(()), Ok(())) = (
            country_result,
            city_result,
            address_result,
            zip_code_result,
        ) {
            api_error.set(None);
            let completed = state.submit(UserDataPatch::Delivery {
                country,
                city,
                address: address.get(),
                zip_code: zip_code.get(),
            });
            if let Some(record) = completed {
                log_completed_registration(&record);
            }
        }
    };

    view! {
        <div class="w-full bg-white mt-20">
            <h2 class="text-3xl font-bold mb-2">"Profile info"</h2>
            <p class="text-gray-400 mb-4 text-sm font-light">
                "Fill in the data for profile. It will take a couple of minutes. You only need a passport"
            </p>

            <div class="mb-7 p-4 bg-white border border-gray-300 rounded-md">
                <h3 class="text-lg font-medium mb-2 mt-2">"Delivery address"</h3>
                <p class="text-sm text-gray-500 mb-4">
                    "Specify the address where the order will be delivered"
                </p>

                <div class="mb-4">
                    <label class="block text-sm text-gray-700 mb-2">"Country and city"</label>
                    <CountryCitySelect selection=place />
                    {move || country_error.get().map(|message| view! {
                        <p class="text-red-500 text-sm mt-1">{message}</p>
                    })}
                    {move || city_error.get().map(|message| view! {
                        <p class="text-red-500 text-sm mt-1">{message}</p>
                    })}
                </div>

                <label class="block text-sm text-gray-700 mb-2">"Address"</label>
                <input
                    type="text"
                    class="w-full border-b border-gray-300 px-3 py-2 text-sm focus:outline-none focus:border-b-blue-600 mb-4"
                    placeholder="Main Street 123"
                    prop:value=move || address.get()
                    on:input=move |ev| address.set(event_target_value(&ev))
                />
                {move || address_error.get().map(|message| view! {
                    <p class="text-red-500 text-sm mt-1">{message}</p>
                })}

                <label class="block text-sm text-gray-700 mb-2">"Zip Code"</label>
                <input
                    type="text"
                    class="w-full border-b border-gray-300 px-3 py-2 text-sm focus:outline-none focus:border-b-blue-600 mb-4"
                    placeholder="12345"
                    prop:value=move || zip_code.get()
                    on:input=move |ev| zip_code.set(event_target_value(&ev))
                />
                {move || zip_code_error.get().map(|message| view! {
                    <p class="text-red-500 text-sm mt-1">{message}</p>
                })}
            </div>

            {move || api_error.get().map(|message| view! {
                <p class="text-red-500 text-sm mb-4">{message}</p>
            })}

            <button
                class="flex items-center justify-center px-6 py-2 bg-blue-600 text-white text-sm font-medium rounded-md hover:bg-blue-700 transition-colors duration-200"
                on:click=on_submit
            >
                <Icon path=icons::CHECK class="w-4 h-4 mr-2" />
                "Save"
            </button>
        </div>
    }
}
