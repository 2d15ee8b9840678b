use serde::Serialize;

use crate::config::BaseUrl;
use crate::error::ConfigError;
use crate::routes;

/// Logical backend endpoints reachable from the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Session,
    GoogleLogin,
    Logout,
    CompleteRegistration,
    UpdateProfile,
    UpdateMedical,
    Responders,
    ChatGroups,
}

impl Endpoint {
    /// Every endpoint, in table order
    pub const ALL: [Endpoint; 8] = [
        Endpoint::Session,
        Endpoint::GoogleLogin,
        Endpoint::Logout,
        Endpoint::CompleteRegistration,
        Endpoint::UpdateProfile,
        Endpoint::UpdateMedical,
        Endpoint::Responders,
        Endpoint::ChatGroups,
    ];

    /// Logical name, as used for the JSON keys
    pub const fn name(self) -> &'static str {
        match self {
            Endpoint::Session => "session",
            Endpoint::GoogleLogin => "googleLogin",
            Endpoint::Logout => "logout",
            Endpoint::CompleteRegistration => "completeRegistration",
            Endpoint::UpdateProfile => "updateProfile",
            Endpoint::UpdateMedical => "updateMedical",
            Endpoint::Responders => "responders",
            Endpoint::ChatGroups => "chatGroups",
        }
    }

    /// Path suffix appended to the base URL
    pub const fn path(self) -> &'static str {
        match self {
            Endpoint::Session => routes::SESSION,
            Endpoint::GoogleLogin => routes::GOOGLE_LOGIN,
            Endpoint::Logout => routes::LOGOUT,
            Endpoint::CompleteRegistration => routes::COMPLETE_REGISTRATION,
            Endpoint::UpdateProfile => routes::UPDATE_PROFILE,
            Endpoint::UpdateMedical => routes::UPDATE_MEDICAL,
            Endpoint::Responders => routes::RESPONDERS,
            Endpoint::ChatGroups => routes::CHAT_GROUPS,
        }
    }

    /// Look up an endpoint by its logical name
    pub fn from_name(name: &str) -> Result<Self, ConfigError> {
        Endpoint::ALL
            .into_iter()
            .find(|endpoint| endpoint.name() == name)
            .ok_or_else(|| ConfigError::UnknownEndpoint(name.to_string()))
    }
}

/// Fully qualified endpoint URLs derived from a single base URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEndpoints {
    pub session: String,
    pub google_login: String,
    pub logout: String,
    pub complete_registration: String,
    pub update_profile: String,
    pub update_medical: String,
    pub responders: String,
    pub chat_groups: String,
}

impl ApiEndpoints {
    /// Derive every endpoint by appending its path to `base`
    pub fn from_base(base: &BaseUrl) -> Self {
        let url = |endpoint: Endpoint| format!("{}{}", base.as_str(), endpoint.path());

        ApiEndpoints {
            session: url(Endpoint::Session),
            google_login: url(Endpoint::GoogleLogin),
            logout: url(Endpoint::Logout),
            complete_registration: url(Endpoint::CompleteRegistration),
            update_profile: url(Endpoint::UpdateProfile),
            update_medical: url(Endpoint::UpdateMedical),
            responders: url(Endpoint::Responders),
            chat_groups: url(Endpoint::ChatGroups),
        }
    }

    pub fn get(&self, endpoint: Endpoint) -> &str {
        match endpoint {
            Endpoint::Session => &self.session,
            Endpoint::GoogleLogin => &self.google_login,
            Endpoint::Logout => &self.logout,
            Endpoint::CompleteRegistration => &self.complete_registration,
            Endpoint::UpdateProfile => &self.update_profile,
            Endpoint::UpdateMedical => &self.update_medical,
            Endpoint::Responders => &self.responders,
            Endpoint::ChatGroups => &self.chat_groups,
        }
    }

    /// `(endpoint, url)` pairs in table order
    pub fn iter(&self) -> impl Iterator<Item = (Endpoint, &str)> + '_ {
        Endpoint::ALL
            .into_iter()
            .map(move |endpoint| (endpoint, self.get(endpoint)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoints() -> ApiEndpoints {
        let base = BaseUrl::parse("https://api.example.com").unwrap();
        ApiEndpoints::from_base(&base)
    }

    #[test]
    fn test_session_and_chat_groups() {
        let endpoints = endpoints();

        assert_eq!(endpoints.session, "https://api.example.com/auth/me");
        assert_eq!(endpoints.chat_groups, "https://api.example.com/api/chat/groups");
    }

    #[test]
    fn test_full_table() {
        let endpoints = endpoints();

        assert_eq!(endpoints.google_login, "https://api.example.com/auth/login");
        assert_eq!(endpoints.logout, "https://api.example.com/auth/logout");
        assert_eq!(
            endpoints.complete_registration,
            "https://api.example.com/users/me/onboarding"
        );
        assert_eq!(endpoints.update_profile, "https://api.example.com/users/me/profile");
        assert_eq!(endpoints.update_medical, "https://api.example.com/users/me/medical");
        assert_eq!(endpoints.responders, "https://api.example.com/api/responders");
    }

    #[test]
    fn test_every_url_is_prefixed_by_base() {
        let endpoints = endpoints();

        for (endpoint, url) in endpoints.iter() {
            assert_eq!(url, format!("https://api.example.com{}", endpoint.path()));
        }
        assert_eq!(endpoints.iter().count(), 8);
    }

    #[test]
    fn test_from_name() {
        for endpoint in Endpoint::ALL {
            assert_eq!(Endpoint::from_name(endpoint.name()).unwrap(), endpoint);
        }

        let error = Endpoint::from_name("google_login").unwrap_err();
        assert!(matches!(error, ConfigError::UnknownEndpoint(ref name) if name == "google_login"));
    }

    #[test]
    fn test_json_keys_match_logical_names() {
        let json = serde_json::to_value(endpoints()).unwrap();
        let object = json.as_object().unwrap();

        assert_eq!(object.len(), Endpoint::ALL.len());
        for endpoint in Endpoint::ALL {
            assert_eq!(object[endpoint.name()], endpoints().get(endpoint));
        }
    }
}
