//! Cipher session configuration.

use alloc::string::String;

/// Configuration options for a cipher session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use solrs::CipherOptions;
///
/// let options = CipherOptions::default()
///     .with_key("cryptonomicon")
///     .with_format_message(true);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CipherOptions {
    /// Passphrase applied to the deck when a session starts.
    pub key: Option<String>,
    /// Whether plaintext is run through [`format_str`](crate::format_str)
    /// before encryption.
    pub format_message: bool,
}

impl Default for CipherOptions {
    fn default() -> Self {
        Self {
            key: None,
            format_message: true,
        }
    }
}

impl CipherOptions {
    /// Sets the passphrase.
    ///
    /// # Example
    ///
    /// ```
    /// use solrs::CipherOptions;
    ///
    /// let options = CipherOptions::default().with_key("foo");
    /// assert_eq!(options.key.as_deref(), Some("foo"));
    /// ```
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Sets whether plaintext is formatted before encryption.
    ///
    /// # Example
    ///
    /// ```
    /// use solrs::CipherOptions;
    ///
    /// let options = CipherOptions::default().with_format_message(false);
    /// assert_eq!(options.format_message, false);
    /// ```
    #[must_use]
    pub const fn with_format_message(mut self, format: bool) -> Self {
        self.format_message = format;
        self
    }
}
