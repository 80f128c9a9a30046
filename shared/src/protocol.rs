/// Fragment route of the admin UI client view, appended to the configured base URL
pub const UI_CLIENTS_ROUTE: &str = "#/clients";

/// Path segment separating a client from its flows in UI routes
pub const UI_FLOWS_SEGMENT: &str = "flows";

/// Environment variable that overrides the configured admin UI base URL
pub const ADMIN_UI_URL_ENV: &str = "ADMIN_UI_URL";
