use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::components::icons::{self, Icon};
use crate::models::{CitiesRequest, CitiesResponse, CountriesResponse, PlaceSelection};

const COUNTRIES_URL: &str = "https://countriesnow.space/api/v0.1/countries";
const CITIES_URL: &str = "https://countriesnow.space/api/v0.1/countries/cities";

/// Two-stage country→city dropdown backed by the geography lookup.
///
/// One list serves both roles: it shows countries until one is chosen,
/// then switches to that country's cities. Choosing a country clears any
/// previously chosen city and refetches the city list. Lookup failures
/// are logged and leave the affected list empty.
#[component]
pub fn CountryCitySelect(selection: RwSignal<PlaceSelection>) -> impl IntoView {
    let countries = RwSignal::new(Vec::<String>::new());
    let cities = RwSignal::new(Vec::<String>::new());
    let list_open = RwSignal::new(false);

    // Fetch the country list on mount - run only once per component instance
    let fetch_setup = std::cell::Cell::new(false);
    Effect::new(move |_| {
        if !fetch_setup.get() {
            fetch_setup.set(true);
            spawn_local(async move {
                match fetch_countries().await {
                    Ok(names) => countries.set(names),
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("Failed to fetch countries: {e:?}").into(),
                        );
                        countries.set(Vec::new());
                    }
                }
            });
            // A country preset from an earlier step needs its cities too.
            if let Some(country) = selection.get().country {
                load_cities(country, cities);
            }
        }
    });

    let on_choose = move |item: String| {
        let mut country_changed = false;
        selection.update(|place| country_changed = place.choose(item.clone()));
        if country_changed {
            cities.set(Vec::new());
            load_cities(item, cities);
        }
        list_open.set(false);
    };

    view! {
        <div class="relative">
            <button
                class="w-full border-b border-gray-300 px-3 py-2 text-sm text-left focus:outline-none focus:border-b-blue-600 flex justify-between items-center"
                on:click=move |_| list_open.update(|open| *open = !*open)
            >
                <span class=move || {
                    if selection.get().has_selection() { "text-gray-900" } else { "text-gray-400" }
                }>
                    {move || selection.get().display_value()}
                </span>
                <Icon path=icons::CHEVRON_DOWN class="w-4 h-4 text-gray-400" />
            </button>
            <Show when=move || list_open.get()>
                <ul class="absolute mt-1 max-h-60 z-50 w-full overflow-auto rounded-md bg-white py-1 text-sm shadow-lg ring-1 ring-black ring-opacity-5 focus:outline-none">
                    <For
                        each=move || {
                            if selection.get().has_selection() { cities.get() } else { countries.get() }
                        }
                        key=Clone::clone
                        children=move |item: String| {
                            let value = item.clone();
                            view! {
                                <li
                                    class="relative cursor-pointer select-none py-2 pl-10 pr-4 text-gray-900 hover:bg-blue-100 hover:text-blue-900"
                                    on:click=move |_| on_choose(value.clone())
                                >
                                    <span class="block truncate">{item}</span>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
            {move || selection.get().needs_city_hint().then(|| view! {
                <p class="text-red-500 text-xs mt-1">"Select city"</p>
            })}
        </div>
    }
}

/// Kick off a city fetch for `country`, writing the result into `cities`.
fn load_cities(country: String, cities: RwSignal<Vec<String>>) {
    spawn_local(async move {
        match fetch_cities(&country).await {
            Ok(names) => cities.set(names),
            Err(e) => {
                web_sys::console::error_1(&format!("Failed to fetch cities: {e:?}").into());
                cities.set(Vec::new());
            }
        }
    });
}

/// Fetch the full country-name list from the geography API.
async fn fetch_countries() -> Result<Vec<String>, JsValue> {
    let json = fetch_json(COUNTRIES_URL, None).await?;
    let response: CountriesResponse = serde_wasm_bindgen::from_value(json)?;
    Ok(response.country_names())
}

/// Fetch the city list for one country; empty when the API has no match.
async fn fetch_cities(country: &str) -> Result<Vec<String>, JsValue> {
    let request = serde_wasm_bindgen::to_value(&CitiesRequest {
        country: country.to_string(),
    })?;
    let body: JsValue = js_sys::JSON::stringify(&request)?.into();
    let json = fetch_json(CITIES_URL, Some(&body)).await?;
    let response: CitiesResponse = serde_wasm_bindgen::from_value(json)?;
    Ok(response.data)
}

/// One fetch round-trip returning the decoded JSON body.
/// GET without a body, POST with the given JSON body.
async fn fetch_json(url: &str, body: Option<&JsValue>) -> Result<JsValue, JsValue> {
    let opts = RequestInit::new();
    if let Some(body) = body {
        opts.set_method("POST");
        opts.set_body(body);
    } else {
        opts.set_method("GET");
    }

    let request = Request::new_with_str_and_init(url, &opts)?;
    if body.is_some() {
        request.headers().set("Content-Type", "application/json")?;
    }

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await?
        .dyn_into()?;
    JsFuture::from(response.json()?).await
}
