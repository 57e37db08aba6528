use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Social networks offered on the contacts step.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum SocialNetwork {
    #[default]
    Skype,
    Facebook,
    Instagram,
    TikTok,
}

impl SocialNetwork {
    /// All networks, in the order the selector lists them.
    pub const ALL: [Self; 4] = [Self::Skype, Self::Facebook, Self::Instagram, Self::TikTok];

    /// Display label for the selector.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Skype => "Skype",
            Self::Facebook => "Facebook",
            Self::Instagram => "Instagram",
            Self::TikTok => "TikTok",
        }
    }

    /// Lower-cased key the handle is stored under in `UserData::social_handles`.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Skype => "skype",
            Self::Facebook => "facebook",
            Self::Instagram => "instagram",
            Self::TikTok => "tiktok",
        }
    }

    /// Input placeholder for the handle field.
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Skype => "@alex_92",
            Self::Facebook => "@profile",
            Self::Instagram => "@instagram_handle",
            Self::TikTok => "@tiktok_handle",
        }
    }
}

/// One row of the contacts step's social-network list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SocialContact {
    pub network: SocialNetwork,
    pub handle: String,
}

/// The single accumulating registration record, shared by all wizard steps.
///
/// Every field starts unset; each step contributes its own slice via
/// [`UserData::apply`] and never touches fields owned by other steps.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    pub phone_number: Option<String>,
    pub country_code: Option<String>,
    pub confirmation_code: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub date_of_birth: Option<String>,
    pub place_of_birth: Option<String>,
    pub itin: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub zip_code: Option<String>,
    /// Lower-cased network name ("skype", "instagram", ...) to handle.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub social_handles: BTreeMap<String, String>,
}

/// The slice of [`UserData`] one step submits, one variant per step plus
/// one for the inline phone edit on the confirm-code step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserDataPatch {
    Phone {
        phone_number: String,
        country_code: String,
    },
    PhoneEdit {
        phone_number: String,
    },
    Confirmation {
        confirmation_code: String,
    },
    Credentials {
        email: String,
        password: String,
    },
    Personal {
        first_name: String,
        last_name: String,
        date_of_birth: String,
        place_of_birth: String,
        itin: String,
    },
    Contacts {
        email: String,
        phone_number: String,
        socials: Vec<SocialContact>,
    },
    Delivery {
        country: String,
        city: String,
        address: String,
        zip_code: String,
    },
}

impl UserData {
    /// Merge a step's patch into the record. A patch only overwrites the
    /// fields its step owns; everything else is left as-is.
    pub fn apply(&mut self, patch: UserDataPatch) {
        match patch {
            UserDataPatch::Phone {
                phone_number,
                country_code,
            } => {
                self.phone_number = Some(phone_number);
                self.country_code = Some(country_code);
            }
            UserDataPatch::PhoneEdit { phone_number } => {
                self.phone_number = Some(phone_number);
            }
            UserDataPatch::Confirmation { confirmation_code } => {
                self.confirmation_code = Some(confirmation_code);
            }
            UserDataPatch::Credentials { email, password } => {
                self.email = Some(email);
                self.password = Some(password);
            }
            UserDataPatch::Personal {
                first_name,
                last_name,
                date_of_birth,
                place_of_birth,
                itin,
            } => {
                self.first_name = Some(first_name);
                self.last_name = Some(last_name);
                self.date_of_birth = Some(date_of_birth);
                self.place_of_birth = Some(place_of_birth);
                self.itin = Some(itin);
            }
            UserDataPatch::Contacts {
                email,
                phone_number,
                socials,
            } => {
                self.email = Some(email);
                self.phone_number = Some(phone_number);
                for contact in socials {
                    self.social_handles
                        .insert(contact.network.key().to_string(), contact.handle);
                }
            }
            UserDataPatch::Delivery {
                country,
                city,
                address,
                zip_code,
            } => {
                self.country = Some(country);
                self.city = Some(city);
                self.address = Some(address);
                self.zip_code = Some(zip_code);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_patch_sets_number_and_code() {
        let mut data = UserData::default();
        data.apply(UserDataPatch::Phone {
            phone_number: "555 555 1234".to_string(),
            country_code: "+38".to_string(),
        });

        assert_eq!(data.phone_number.as_deref(), Some("555 555 1234"));
        assert_eq!(data.country_code.as_deref(), Some("+38"));
        assert!(data.email.is_none());
    }

    #[test]
    fn test_phone_edit_keeps_country_code() {
        let mut data = UserData::default();
        data.apply(UserDataPatch::Phone {
            phone_number: "555 555 1234".to_string(),
            country_code: "+44".to_string(),
        });
        data.apply(UserDataPatch::PhoneEdit {
            phone_number: "123 456 7890".to_string(),
        });

        assert_eq!(data.phone_number.as_deref(), Some("123 456 7890"));
        assert_eq!(data.country_code.as_deref(), Some("+44"));
    }

    #[test]
    fn test_patches_are_append_only() {
        let mut data = UserData::default();
        data.apply(UserDataPatch::Credentials {
            email: "alex@example.com".to_string(),
            password: "secret1".to_string(),
        });
        data.apply(UserDataPatch::Personal {
            first_name: "Alexander".to_string(),
            last_name: "Smith".to_string(),
            date_of_birth: "1990-01-01".to_string(),
            place_of_birth: "Lviv, Ukraine".to_string(),
            itin: "123-45-678".to_string(),
        });

        // The later patch must not clear the credentials step's fields.
        assert_eq!(data.email.as_deref(), Some("alex@example.com"));
        assert_eq!(data.password.as_deref(), Some("secret1"));
        assert_eq!(data.first_name.as_deref(), Some("Alexander"));
    }

    #[test]
    fn test_contacts_patch_maps_networks_to_lowercase_keys() {
        let mut data = UserData::default();
        data.apply(UserDataPatch::Contacts {
            email: "alex@example.com".to_string(),
            phone_number: "123-4567".to_string(),
            socials: vec![
                SocialContact {
                    network: SocialNetwork::Skype,
                    handle: "@alex_92".to_string(),
                },
                SocialContact {
                    network: SocialNetwork::TikTok,
                    handle: "@alex_tok".to_string(),
                },
            ],
        });

        assert_eq!(data.social_handles.get("skype").map(String::as_str), Some("@alex_92"));
        assert_eq!(data.social_handles.get("tiktok").map(String::as_str), Some("@alex_tok"));
        assert!(data.social_handles.get("facebook").is_none());
    }

    #[test]
    fn test_duplicate_network_rows_last_one_wins() {
        let mut data = UserData::default();
        data.apply(UserDataPatch::Contacts {
            email: "alex@example.com".to_string(),
            phone_number: "123-4567".to_string(),
            socials: vec![
                SocialContact {
                    network: SocialNetwork::Skype,
                    handle: "@first".to_string(),
                },
                SocialContact {
                    network: SocialNetwork::Skype,
                    handle: "@second".to_string(),
                },
            ],
        });

        assert_eq!(data.social_handles.get("skype").map(String::as_str), Some("@second"));
        assert_eq!(data.social_handles.len(), 1);
    }

    #[test]
    fn test_user_data_serializes_camel_case() {
        let mut data = UserData::default();
        data.apply(UserDataPatch::Phone {
            phone_number: "555 555 1234".to_string(),
            country_code: "+1".to_string(),
        });
        data.apply(UserDataPatch::Delivery {
            country: "Ukraine".to_string(),
            city: "Lviv".to_string(),
            address: "Main Street 123".to_string(),
            zip_code: "12345".to_string(),
        });

        let json = serde_json::to_string(&data).unwrap();
        assert!(json.contains("\"phoneNumber\":\"555 555 1234\""));
        assert!(json.contains("\"zipCode\":\"12345\""));

        let deserialized: UserData = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, data);
    }

    #[test]
    fn test_empty_social_handles_are_skipped_in_json() {
        let data = UserData::default();
        let json = serde_json::to_string(&data).unwrap();
        assert!(!json.contains("socialHandles"));
    }

    #[test]
    fn test_social_network_defaults_to_skype() {
        assert_eq!(SocialNetwork::default(), SocialNetwork::Skype);
        assert_eq!(SocialNetwork::ALL[0], SocialNetwork::Skype);
    }
}
