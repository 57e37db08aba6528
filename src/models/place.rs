/// Two-stage country→city selection backing the place dropdowns.
///
/// One dropdown serves both roles: while no country is chosen its list
/// shows countries; once a country is chosen the list switches to that
/// country's cities.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceSelection {
    pub country: Option<String>,
    pub city: Option<String>,
}

impl PlaceSelection {
    /// Placeholder shown while nothing is selected.
    pub const PLACEHOLDER: &'static str = "Select a country and city";

    /// Start from values captured on an earlier step, if any.
    pub fn with_defaults(country: Option<String>, city: Option<String>) -> Self {
        // A city without a country cannot be displayed or re-fetched.
        let city = if country.is_some() { city } else { None };
        Self { country, city }
    }

    /// Record a choice from the open list: the first pick becomes the
    /// country, every later pick the city. Returns `true` when the
    /// country changed (the caller must refetch the city list).
    pub fn choose(&mut self, item: String) -> bool {
        if self.country.is_none() {
            self.set_country(item);
            true
        } else {
            self.city = Some(item);
            false
        }
    }

    /// Switch to a new country, discarding any previously chosen city.
    pub fn set_country(&mut self, country: String) {
        self.country = Some(country);
        self.city = None;
    }

    /// Whether a country has been chosen (the list now shows cities).
    pub const fn has_selection(&self) -> bool {
        self.country.is_some()
    }

    /// `"{city}, {country}"` once both are chosen, the country alone
    /// before a city is picked, or the placeholder.
    pub fn display_value(&self) -> String {
        match (&self.country, &self.city) {
            (Some(country), Some(city)) => format!("{city}, {country}"),
            (Some(country), None) => country.clone(),
            _ => Self::PLACEHOLDER.to_string(),
        }
    }

    /// A country is chosen but the city still isn't.
    pub const fn needs_city_hint(&self) -> bool {
        self.country.is_some() && self.city.is_none()
    }
}
