//! Navigation Routes

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Home,
    AboutUs,
    Community,
    CareTools,
    SymptomChecker,
    HealthTracker,
    MedicationReminder,
    VaccinationScheduler,
    ConsultVet,
    PetInsurance,
    ContactUs,
    SignIn,
    MyAccount,
}

impl Route {
    pub const ALL: [Route; 13] = [
        Route::Home,
        Route::AboutUs,
        Route::Community,
        Route::CareTools,
        Route::SymptomChecker,
        Route::HealthTracker,
        Route::MedicationReminder,
        Route::VaccinationScheduler,
        Route::ConsultVet,
        Route::PetInsurance,
        Route::ContactUs,
        Route::SignIn,
        Route::MyAccount,
    ];

    /// Care tools listed on the hub page
    pub const CARE_TOOLS: [Route; 4] = [
        Route::SymptomChecker,
        Route::HealthTracker,
        Route::MedicationReminder,
        Route::VaccinationScheduler,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::AboutUs => "/about-us",
            Route::Community => "/community",
            Route::CareTools => "/care-tools",
            Route::SymptomChecker => "/care-tools/symptom-checker",
            Route::HealthTracker => "/care-tools/health-tracker",
            Route::MedicationReminder => "/care-tools/medication-reminder",
            Route::VaccinationScheduler => "/care-tools/vaccination-scheduler",
            Route::ConsultVet => "/consult-a-vet",
            Route::PetInsurance => "/pet-insurance",
            Route::ContactUs => "/contact-us",
            Route::SignIn => "/signin",
            Route::MyAccount => "/my-account",
        }
    }

    /// Unknown paths fall back to home. Fragments, queries and a trailing
    /// slash are ignored.
    pub fn from_path(path: &str) -> Route {
        let path = path.split(['#', '?']).next().unwrap_or_default();
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };
        Self::ALL
            .into_iter()
            .find(|route| route.path() == path)
            .unwrap_or_default()
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::AboutUs => "About Us",
            Route::Community => "Community",
            Route::CareTools => "Care Tools",
            Route::SymptomChecker => "AI Symptom Checker",
            Route::HealthTracker => "Health Tracker",
            Route::MedicationReminder => "Medication Reminder",
            Route::VaccinationScheduler => "Vaccination Scheduler",
            Route::ConsultVet => "Consult a Vet",
            Route::PetInsurance => "Pet Insurance",
            Route::ContactUs => "Contact Us",
            Route::SignIn => "Sign In",
            Route::MyAccount => "My Account",
        }
    }

    /// Pages that redirect to sign-in when signed out
    pub fn requires_auth(&self) -> bool {
        matches!(self, Route::MyAccount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_round_trip() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }

    #[test]
    fn test_path_normalization() {
        assert_eq!(Route::from_path("/about-us#team"), Route::AboutUs);
        assert_eq!(Route::from_path("/care-tools/"), Route::CareTools);
        assert_eq!(Route::from_path("/nowhere"), Route::Home);
        assert_eq!(Route::from_path(""), Route::Home);
    }
}
