pub mod confirm_code_form;
pub mod contacts_form;
pub mod country_city_select;
pub mod delivery_address_form;
pub mod email_password_form;
pub mod icons;
pub mod landing;
pub mod personal_data_form;
pub mod phone_number_form;
pub mod wizard;

pub use confirm_code_form::ConfirmCodeForm;
pub use contacts_form::ContactsForm;
pub use country_city_select::CountryCitySelect;
pub use delivery_address_form::DeliveryAddressForm;
pub use email_password_form::EmailPasswordForm;
pub use landing::LandingPage;
pub use personal_data_form::PersonalDataForm;
pub use phone_number_form::PhoneNumberForm;
pub use wizard::RegistrationWizard;
