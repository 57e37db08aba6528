use leptos::prelude::*;

use crate::models::{UserData, UserDataPatch};

/// The six wizard screens, in submission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    PhoneNumber,
    ConfirmCode,
    EmailPassword,
    PersonalData,
    Contacts,
    DeliveryAddress,
}

/// Outcome of advancing past a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Move on to the given step.
    Next(WizardStep),
    /// The final step was submitted; the flow is done.
    Complete,
}

impl WizardStep {
    /// The step the wizard starts on (and returns to after completion).
    pub const FIRST: Self = Self::PhoneNumber;

    /// 1-based position of this step in the flow.
    pub const fn index(self) -> u8 {
        match self {
            Self::PhoneNumber => 1,
            Self::ConfirmCode => 2,
            Self::EmailPassword => 3,
            Self::PersonalData => 4,
            Self::Contacts => 5,
            Self::DeliveryAddress => 6,
        }
    }

    /// Which of the three progress dots is lit for this step.
    /// The six steps cycle through the dots twice.
    pub const fn progress_dot(self) -> u8 {
        (self.index() - 1) % 3 + 1
    }

    /// Transition taken when this step submits successfully.
    pub const fn advance(self) -> Transition {
        match self {
            Self::PhoneNumber => Transition::Next(Self::ConfirmCode),
            Self::ConfirmCode => Transition::Next(Self::EmailPassword),
            Self::EmailPassword => Transition::Next(Self::PersonalData),
            Self::PersonalData => Transition::Next(Self::Contacts),
            Self::Contacts => Transition::Next(Self::DeliveryAddress),
            Self::DeliveryAddress => Transition::Complete,
        }
    }
}

/// Frontend-only reactive state (Leptos signals).
/// Shared state accessible to all step components via `use_context()`.
#[derive(Clone, Copy)]
pub struct WizardState {
    /// The step currently shown
    pub step: RwSignal<WizardStep>,
    /// The record accumulated across steps
    pub user_data: RwSignal<UserData>,
}

impl WizardState {
    /// Create a fresh wizard at the first step with an empty record.
    pub fn new() -> Self {
        Self {
            step: RwSignal::new(WizardStep::FIRST),
            user_data: RwSignal::new(UserData::default()),
        }
    }

    /// Merge a patch into the record without advancing.
    /// Used by the confirm-code step's inline phone edit.
    pub fn apply(&self, patch: UserDataPatch) {
        self.user_data.update(|data| data.apply(patch));
    }

    /// Merge a patch, then advance the step.
    ///
    /// On the terminal transition the accumulated record is handed back
    /// exactly once and the wizard resets to the first step with an empty
    /// record; callers pass the returned record to the persistence hook.
    pub fn submit(&self, patch: UserDataPatch) -> Option<UserData> {
        self.apply(patch);
        match self.step.get().advance() {
            Transition::Next(next) => {
                self.step.set(next);
                None
            }
            Transition::Complete => {
                let record = self.user_data.get();
                self.user_data.set(UserData::default());
                self.step.set(WizardStep::FIRST);
                Some(record)
            }
        }
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SocialContact, SocialNetwork};

    #[test]
    fn test_steps_advance_in_order() {
        let mut step = WizardStep::FIRST;
        let mut visited = vec![step];

        while let Transition::Next(next) = step.advance() {
            step = next;
            visited.push(step);
        }

        assert_eq!(
            visited,
            vec![
                WizardStep::PhoneNumber,
                WizardStep::ConfirmCode,
                WizardStep::EmailPassword,
                WizardStep::PersonalData,
                WizardStep::Contacts,
                WizardStep::DeliveryAddress,
            ]
        );
    }

    #[test]
    fn test_indices_count_one_through_six() {
        assert_eq!(WizardStep::PhoneNumber.index(), 1);
        assert_eq!(WizardStep::ConfirmCode.index(), 2);
        assert_eq!(WizardStep::EmailPassword.index(), 3);
        assert_eq!(WizardStep::PersonalData.index(), 4);
        assert_eq!(WizardStep::Contacts.index(), 5);
        assert_eq!(WizardStep::DeliveryAddress.index(), 6);
    }

    #[test]
    fn test_progress_dots_cycle_twice() {
        assert_eq!(WizardStep::PhoneNumber.progress_dot(), 1);
        assert_eq!(WizardStep::ConfirmCode.progress_dot(), 2);
        assert_eq!(WizardStep::EmailPassword.progress_dot(), 3);
        assert_eq!(WizardStep::PersonalData.progress_dot(), 1);
        assert_eq!(WizardStep::Contacts.progress_dot(), 2);
        assert_eq!(WizardStep::DeliveryAddress.progress_dot(), 3);
    }

    #[test]
    fn test_final_step_completes() {
        assert_eq!(WizardStep::DeliveryAddress.advance(), Transition::Complete);
    }

    #[test]
    fn test_submit_advances_without_yielding_a_record() {
        let state = WizardState::new();

        let completed = state.submit(UserDataPatch::Phone {
            phone_number: "555 555 1234".to_string(),
            country_code: "+1".to_string(),
        });

        assert!(completed.is_none());
        assert_eq!(state.step.get(), WizardStep::ConfirmCode);
        assert_eq!(
            state.user_data.get().phone_number.as_deref(),
            Some("555 555 1234")
        );
    }

    #[test]
    fn test_full_flow_yields_complete_record_once_and_resets() {
        let state = WizardState::new();

        assert!(state
            .submit(UserDataPatch::Phone {
                phone_number: "555 555 1234".to_string(),
                country_code: "+38".to_string(),
            })
            .is_none());
        assert!(state
            .submit(UserDataPatch::Confirmation {
                confirmation_code: "1234".to_string(),
            })
            .is_none());
        assert!(state
            .submit(UserDataPatch::Credentials {
                email: "alex@example.com".to_string(),
                password: "secret1".to_string(),
            })
            .is_none());
        assert!(state
            .submit(UserDataPatch::Personal {
                first_name: "Alexander".to_string(),
                last_name: "Smith".to_string(),
                date_of_birth: "1990-01-01".to_string(),
                place_of_birth: "Lviv, Ukraine".to_string(),
                itin: "123-45-678".to_string(),
            })
            .is_none());
        assert!(state
            .submit(UserDataPatch::Contacts {
                email: "alex@example.com".to_string(),
                phone_number: "123-4567".to_string(),
                socials: vec![SocialContact {
                    network: SocialNetwork::Skype,
                    handle: "@alex_92".to_string(),
                }],
            })
            .is_none());

        let completed = state
            .submit(UserDataPatch::Delivery {
                country: "Ukraine".to_string(),
                city: "Lviv".to_string(),
                address: "Main Street 123".to_string(),
                zip_code: "12345".to_string(),
            })
            .expect("final submit must yield the record");

        // Every step's fields survived the transitions.
        assert_eq!(completed.phone_number.as_deref(), Some("123-4567"));
        assert_eq!(completed.country_code.as_deref(), Some("+38"));
        assert_eq!(completed.confirmation_code.as_deref(), Some("1234"));
        assert_eq!(completed.email.as_deref(), Some("alex@example.com"));
        assert_eq!(completed.password.as_deref(), Some("secret1"));
        assert_eq!(completed.first_name.as_deref(), Some("Alexander"));
        assert_eq!(completed.last_name.as_deref(), Some("Smith"));
        assert_eq!(completed.date_of_birth.as_deref(), Some("1990-01-01"));
        assert_eq!(completed.place_of_birth.as_deref(), Some("Lviv, Ukraine"));
        assert_eq!(completed.itin.as_deref(), Some("123-45-678"));
        assert_eq!(completed.country.as_deref(), Some("Ukraine"));
        assert_eq!(completed.city.as_deref(), Some("Lviv"));
        assert_eq!(completed.address.as_deref(), Some("Main Street 123"));
        assert_eq!(completed.zip_code.as_deref(), Some("12345"));
        assert_eq!(
            completed.social_handles.get("skype").map(String::as_str),
            Some("@alex_92")
        );

        // The wizard is back at the start with a fresh record.
        assert_eq!(state.step.get(), WizardStep::FIRST);
        assert_eq!(state.user_data.get(), UserData::default());
    }

    #[test]
    fn test_apply_does_not_advance() {
        let state = WizardState::new();
        state.step.set(WizardStep::ConfirmCode);

        state.apply(UserDataPatch::PhoneEdit {
            phone_number: "999 999 9999".to_string(),
        });

        assert_eq!(state.step.get(), WizardStep::ConfirmCode);
        assert_eq!(
            state.user_data.get().phone_number.as_deref(),
            Some("999 999 9999")
        );
    }
}
