pub(crate) mod errors;
pub(crate) mod handlers;
pub(crate) mod router;
pub(crate) mod submissions;
pub(crate) mod tests;
pub(crate) mod uploads;
pub(crate) mod users;
pub(crate) mod validation;
