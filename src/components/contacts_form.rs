use leptos::prelude::*;

use crate::components::icons::{self, Icon};
use crate::models::{validation, SocialContact, SocialNetwork, UserDataPatch, WizardState};

/// One row of the social-network list. Signals per row so each dropdown
/// and handle input is independently reactive.
#[derive(Clone, Copy)]
struct SocialRow {
    id: usize,
    network: RwSignal<SocialNetwork>,
    handle: RwSignal<String>,
    error: RwSignal<Option<String>>,
    list_open: RwSignal<bool>,
}

impl SocialRow {
    fn new(id: usize) -> Self {
        Self {
            id,
            network: RwSignal::new(SocialNetwork::default()),
            handle: RwSignal::new(String::new()),
            error: RwSignal::new(None),
            list_open: RwSignal::new(false),
        }
    }
}

/// Step 5: contacts used to inform about orders: email, phone, and an
/// extensible list of social-network handles.
#[component]
pub fn ContactsForm() -> impl IntoView {
    let state = use_context::<WizardState>().expect("WizardState context missing");

    // Defaults carried over from the earlier steps.
    let initial = state.user_data.get();
    let email = RwSignal::new(initial.email.unwrap_or_default());
    let phone = RwSignal::new(initial.phone_number.unwrap_or_default());
    let dial_code = initial.country_code.unwrap_or_else(|| "+1".to_string());

    let email_error = RwSignal::new(None::<String>);
    let phone_error = RwSignal::new(None::<String>);

    let rows = RwSignal::new(vec![SocialRow::new(0)]);
    let next_row_id = StoredValue::new(1_usize);

    let on_add_row = move |_| {
        let id = next_row_id.get_value();
        next_row_id.set_value(id + 1);
        rows.update(|list| list.push(SocialRow::new(id)));
    };

    let on_submit = move |_| {
        let email_result = validation::validate_required(&email.get(), "Email is required");
        let phone_result = validation::validate_required(&phone.get(), "Phone is required");
        email_error.set(email_result.clone().err());
        phone_error.set(phone_result.clone().err());

        let mut rows_valid = true;
        for row in rows.get() {
            let result =
                validation::validate_required(&row.handle.get(), "Social handle is required");
            rows_valid &= result.is_ok();
            row.error.set(result.err());
        }

        if email_result.is_ok() && phone_result.is_ok() && rows_valid {
            let socials = rows
                .get()
                .iter()
                .map(|row| SocialContact {
                    network: row.network.get(),
                    handle: row.handle.get(),
                })
                .collect();
            state.submit(UserDataPatch::Contacts {
                email: email.get(),
                phone_number: phone.get(),
                socials,
            });
        }
    };

    view! {
        <div class="w-full bg-white mt-20">
            <h2 class="text-3xl font-bold mb-2">"Profile info"</h2>
            <p class="text-gray-400 mb-4 text-sm font-light">
                "Fill in the data for profile. It will take a couple of minutes. You only need a passport"
            </p>

            <div class="mb-7 p-6 bg-white border border-gray-300 rounded-md">
                <h3 class="text-lg font-medium mb-2">"Contacts"</h3>
                <p class="text-sm text-gray-500 mb-4">
                    "These contacts are used to inform about orders"
                </p>

                <label class="block text-sm text-gray-700 mb-2">"Email"</label>
                <input
                    type="text"
                    class="w-full border-b border-gray-300 px-3 py-2 text-sm focus:outline-none focus:border-b-blue-600 mb-4"
                    placeholder="alex_manager@gmail.com"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                {move || email_error.get().map(|message| view! {
                    <p class="text-red-500 text-sm mt-1">{message}</p>
                })}

                <label class="block text-sm text-gray-700 mb-2">"Phone"</label>
                <div class="flex items-center w-full border-b border-gray-300 px-3 py-2 text-sm focus-within:border-b-blue-600 mb-4">
                    <span class="text-gray-400 mr-4">{dial_code}</span>
                    <input
                        type="text"
                        class="w-full focus:outline-none"
                        placeholder="123-4567"
                        prop:value=move || phone.get()
                        on:input=move |ev| phone.set(event_target_value(&ev))
                    />
                </div>
                {move || phone_error.get().map(|message| view! {
                    <p class="text-red-500 text-sm mt-1">{message}</p>
                })}

                <h3 class="text-lg font-medium mb-2 mt-4">"Social network"</h3>
                <p class="text-sm text-gray-500 mb-4">
                    "Indicate the desired communication method"
                </p>

                <For
                    each=move || rows.get()
                    key=|row| row.id
                    children=move |row| view! { <SocialRowView row=row /> }
                />

                <button class="text-blue-600 text-sm font-medium mt-2" on:click=on_add_row>
                    "+ Add More"
                </button>
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

/// Network dropdown plus handle input for one social row.
#[component]
fn SocialRowView(row: SocialRow) -> impl IntoView {
    view! {
        <div class="mb-4">
            <div class="flex items-center">
                <div class="relative w-1/3 mr-2">
                    <button
                        class="w-full border-b border-gray-300 px-3 py-2 text-sm text-left focus:outline-none focus:border-b-blue-600 flex items-center"
                        on:click=move |_| row.list_open.update(|open| *open = !*open)
                    >
                        <span class="text-gray-900">{move || row.network.get().label()}</span>
                        <Icon path=icons::CHEVRON_DOWN class="ml-2 w-4 h-4 text-gray-400" />
                    </button>
                    <Show when=move || row.list_open.get()>
                        <ul class="absolute mt-1 max-h-60 w-full overflow-auto rounded-md bg-white py-1 text-sm shadow-lg ring-1 ring-black ring-opacity-5 focus:outline-none z-50">
                            {SocialNetwork::ALL
                                .iter()
                                .map(|&network| view! {
                                    <li
                                        class="relative cursor-pointer select-none py-2 pl-10 pr-4 text-gray-900 hover:bg-blue-100 hover:text-blue-900"
                                        on:click=move |_| {
                                            row.network.set(network);
                                            row.list_open.set(false);
                                        }
                                    >
                                        <span class="block truncate">{network.label()}</span>
                                        <Show when=move || row.network.get() == network>
                                            <span class="absolute inset-y-0 left-0 flex items-center pl-3 text-blue-600">
                                                <Icon path=icons::CHECK class="w-4 h-4" />
                                            </span>
                                        </Show>
                                    </li>
                                })
                                .collect_view()}
                        </ul>
                    </Show>
                </div>
                <input
                    type="text"
                    class="w-2/3 border-b border-gray-300 px-3 py-2 text-sm focus:outline-none focus:border-b-blue-600"
                    placeholder=move || row.network.get().placeholder()
                    prop:value=move || row.handle.get()
                    on:input=move |ev| row.handle.set(event_target_value(&ev))
                />
            </div>
            {move || row.error.get().map(|message| view! {
                <p class="text-red-500 text-sm mt-1">{message}</p>
            })}
        </div>
    }
}
