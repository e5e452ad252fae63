//! Domain-level constants.
//!
//! The welcome message is owned by the registration flow, never by the caller.

// =============================================================================
// Welcome Notification
// =============================================================================

/// Display name of the system sender
pub const WELCOME_SENDER_NAME: &str = "The App Team";

/// Address of the system sender
pub const WELCOME_SENDER_ADDRESS: &str = "team@myapp.com";

/// Subject line of the welcome message
pub const WELCOME_SUBJECT: &str = "Welcome to the platform";

/// HTML body of the welcome message
pub const WELCOME_BODY: &str = "<h3> You can now log in to our platform. </h3>";
