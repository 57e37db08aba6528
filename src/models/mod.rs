pub mod geography;
pub mod place;
pub mod user_data;
pub mod validation;
pub mod wizard;

pub use geography::{CitiesRequest, CitiesResponse, CountriesResponse, CountryEntry};
pub use place::PlaceSelection;
pub use user_data::{SocialContact, SocialNetwork, UserData, UserDataPatch};
pub use wizard::{Transition, WizardState, WizardStep};
