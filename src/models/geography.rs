use serde::{Deserialize, Serialize};

/// One entry of the countries listing. The API returns more per country
/// (cities, ISO codes); only the name is used here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CountryEntry {
    pub country: String,
}

/// Response envelope for `GET /countries`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CountriesResponse {
    #[serde(default)]
    pub error: bool,
    #[serde(default)]
    pub msg: String,
    #[serde(default)]
    pub data: Vec<CountryEntry>,
}

impl CountriesResponse {
    /// Extract the plain country-name list for the selector.
    pub fn country_names(self) -> Vec<String> {
        self.data.into_iter().map(|entry| entry.country).collect()
    }
}

/// Request body for `POST /countries/cities`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CitiesRequest {
    pub country: String,
}

/// Response envelope for `POST /countries/cities`.
/// `data` is absent when the country is unknown; it defaults to empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CitiesResponse {
    #[serde(default)]
    pub error: bool,
    #[serde(default)]
    pub msg: String,
    #[serde(default)]
    pub data: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_countries_response_extracts_names() {
        let json = r#"{
            "error": false,
            "msg": "countries and cities retrieved",
            "data": [
                {"country": "Ukraine", "cities": ["Kyiv", "Lviv"]},
                {"country": "Poland", "cities": ["Warsaw"]}
            ]
        }"#;

        let response: CountriesResponse = serde_json::from_str(json).unwrap();
        assert!(!response.error);
        assert_eq!(response.country_names(), vec!["Ukraine", "Poland"]);
    }

    #[test]
    fn test_cities_response_parses_plain_list() {
        let json = r#"{"error": false, "msg": "cities retrieved", "data": ["Kyiv", "Lviv", "Odesa"]}"#;

        let response: CitiesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.data, vec!["Kyiv", "Lviv", "Odesa"]);
    }

    #[test]
    fn test_cities_error_without_data_defaults_to_empty() {
        let json = r#"{"error": true, "msg": "country not found"}"#;

        let response: CitiesResponse = serde_json::from_str(json).unwrap();
        assert!(response.error);
        assert!(response.data.is_empty());
    }

    #[test]
    fn test_cities_request_serialization() {
        let request = CitiesRequest {
            country: "Ukraine".to_string(),
        };

        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"country":"Ukraine"}"#);
    }
}
