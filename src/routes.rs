// Endpoint path constants - single source of truth for all backend API paths

pub const SESSION: &str = "/auth/me";
pub const GOOGLE_LOGIN: &str = "/auth/login";
pub const LOGOUT: &str = "/auth/logout";
pub const COMPLETE_REGISTRATION: &str = "/users/me/onboarding";
pub const UPDATE_PROFILE: &str = "/users/me/profile";
pub const UPDATE_MEDICAL: &str = "/users/me/medical";
pub const RESPONDERS: &str = "/api/responders";
pub const CHAT_GROUPS: &str = "/api/chat/groups";
