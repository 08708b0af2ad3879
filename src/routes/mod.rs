/// Router Module Index
///
/// HTTP routes of the navigation service. Every endpoint is public; access
/// decisions are the payload of the API, not a property of its routes.
pub mod public;
