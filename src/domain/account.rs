//! Account state as reported by the wallet provider.

// ============================================================================
// Constants
// ============================================================================

/// Number of leading characters kept by [`format_address`].
pub const ADDRESS_PREFIX_LEN: usize = 6;

/// Number of trailing characters kept by [`format_address`].
pub const ADDRESS_SUFFIX_LEN: usize = 4;

/// Separator placed between the kept prefix and suffix.
pub const ADDRESS_SEPARATOR: &str = "...";

// ============================================================================
// Account State
// ============================================================================

/// Snapshot of the provider's account, shaped like the provider exposes it.
///
/// `address` may be present while `is_connected` is false (for example while a
/// session is being torn down); [`ConnectionState`] is the authoritative view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountState {
    /// Chain account identifier, if the provider knows one.
    pub address: Option<String>,
    /// Whether a wallet session is currently established.
    pub is_connected: bool,
}

impl AccountState {
    /// A disconnected account with no address.
    #[must_use]
    pub const fn disconnected() -> Self {
        Self {
            address: None,
            is_connected: false,
        }
    }

    /// A connected account for `address`.
    #[must_use]
    pub fn connected(address: impl Into<String>) -> Self {
        Self {
            address: Some(address.into()),
            is_connected: true,
        }
    }

    /// Derives the connection state from this snapshot.
    #[must_use]
    pub fn connection(&self) -> ConnectionState {
        if self.is_connected {
            ConnectionState::Connected(self.address.clone().unwrap_or_default())
        } else {
            ConnectionState::Disconnected
        }
    }
}

// ============================================================================
// Connection State
// ============================================================================

/// Read-only connection state as seen by the connection widget.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConnectionState {
    /// No wallet session.
    #[default]
    Disconnected,
    /// A session is established for the given address.
    Connected(String),
}

impl ConnectionState {
    /// Returns `true` if a session is established.
    #[must_use]
    pub const fn is_connected(&self) -> bool {
        matches!(self, Self::Connected(_))
    }

    /// Returns the connected address, if any.
    #[must_use]
    pub fn address(&self) -> Option<&str> {
        match self {
            Self::Connected(address) => Some(address.as_str()),
            Self::Disconnected => None,
        }
    }
}

// ============================================================================
// Address Formatting
// ============================================================================

/// Formats an address for display as `0x1234...cdef`.
///
/// Empty input yields an empty string. Slicing is done on `char`s, so inputs
/// shorter than ten characters (or containing multi-byte characters) never
/// panic; the head and tail simply overlap.
///
/// # Example
///
/// ```ignore
/// assert_eq!(format_address("0x1234567890abcdef"), "0x1234...cdef");
/// ```
#[must_use]
pub fn format_address(address: &str) -> String {
    if address.is_empty() {
        return String::new();
    }

    let char_count = address.chars().count();
    let prefix: String = address.chars().take(ADDRESS_PREFIX_LEN).collect();
    let suffix: String = address
        .chars()
        .skip(char_count.saturating_sub(ADDRESS_SUFFIX_LEN))
        .collect();

    format!("{prefix}{ADDRESS_SEPARATOR}{suffix}")
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[test]
    fn test_format_address_empty() {
        assert_eq!(format_address(""), "");
    }

    #[test]
    fn test_format_address_typical() {
        assert_eq!(format_address("0x1234567890abcdef"), "0x1234...cdef");
        assert_eq!(format_address("0xABCDEF1234567890"), "0xABCD...7890");
    }

    #[rstest]
    #[case::exactly_ten("0123456789")]
    #[case::evm_length("0x52908400098527886E0F7030069857D2E4169EE7")]
    #[case::base58_length("7EcDhSYGxXyscszYEp35KHN8vvw3svAuLKTzXwCFLtV")]
    #[case::eleven("abcdefghijk")]
    fn test_format_address_keeps_head_and_tail(#[case] address: &str) {
        let formatted = format_address(address);
        let head = &address[..ADDRESS_PREFIX_LEN];
        let tail = &address[address.len() - ADDRESS_SUFFIX_LEN..];

        assert!(formatted.starts_with(head), "{formatted} should start with {head}");
        assert!(formatted.ends_with(tail), "{formatted} should end with {tail}");
        assert_eq!(formatted, format!("{head}...{tail}"));
    }

    #[rstest]
    #[case::one_char("a", "a...a")]
    #[case::four_chars("0x12", "0x12...0x12")]
    #[case::nine_chars("012345678", "012345...5678")]
    fn test_format_address_short_input_does_not_panic(
        #[case] address: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(format_address(address), expected);
    }

    #[test]
    fn test_format_address_multibyte() {
        let formatted = format_address("ééééééééééééé");
        assert_eq!(formatted, "éééééé...éééé");
    }

    #[test]
    fn test_account_state_connection() {
        assert_eq!(
            AccountState::disconnected().connection(),
            ConnectionState::Disconnected
        );
        assert_eq!(
            AccountState::connected("0xabc").connection(),
            ConnectionState::Connected("0xabc".to_string())
        );

        // Address without a session still reads as disconnected.
        let stale = AccountState {
            address: Some("0xabc".to_string()),
            is_connected: false,
        };
        assert_eq!(stale.connection(), ConnectionState::Disconnected);

        // Session without an address falls back to an empty address.
        let anonymous = AccountState {
            address: None,
            is_connected: true,
        };
        assert_eq!(anonymous.connection(), ConnectionState::Connected(String::new()));
    }

    #[test]
    fn test_connection_state_accessors() {
        let connected = ConnectionState::Connected("0xabc".to_string());
        assert!(connected.is_connected());
        assert_eq!(connected.address(), Some("0xabc"));

        assert!(!ConnectionState::Disconnected.is_connected());
        assert_eq!(ConnectionState::Disconnected.address(), None);
        assert_eq!(ConnectionState::default(), ConnectionState::Disconnected);
    }
}
