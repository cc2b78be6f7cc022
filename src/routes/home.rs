//! Welcome page handler.

use crate::config::WELCOME_MESSAGE;

/// Welcome page handler.
///
/// Returns the fixed plain-text greeting that deployment smoke tests check for.
pub async fn index() -> &'static str {
    WELCOME_MESSAGE
}
