//! Call association hooks
//!
//! A DTAP frame is decoded in isolation, but the transport that carries it
//! (SCCP on the A interface) usually tracks a connection. The party-number
//! decoders cache the first number seen on a connection through the
//! [`Association`] trait so the host can show it for the whole call.

/// Which party a number belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartyRole {
    /// Called party BCD number
    Called,
    /// Calling party BCD number
    Calling,
}

/// Read/write access to the host's per-connection state.
pub trait Association {
    /// Returns the number recorded for `role`, if any.
    fn party(&self, role: PartyRole) -> Option<&str>;

    /// Records `digits` for `role`, replacing any previous value.
    fn record_party(&mut self, role: PartyRole, digits: &str);
}

/// Minimal in-memory association used by the CLI and tests.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CallAssociation {
    called: Option<String>,
    calling: Option<String>,
}

impl CallAssociation {
    /// Creates an association with no recorded parties.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Association for CallAssociation {
    fn party(&self, role: PartyRole) -> Option<&str> {
        match role {
            PartyRole::Called => self.called.as_deref(),
            PartyRole::Calling => self.calling.as_deref(),
        }
    }

    fn record_party(&mut self, role: PartyRole, digits: &str) {
        let slot = match role {
            PartyRole::Called => &mut self.called,
            PartyRole::Calling => &mut self.calling,
        };
        *slot = Some(digits.to_owned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_lookup() {
        let mut assoc = CallAssociation::new();
        assert_eq!(assoc.party(PartyRole::Called), None);
        assoc.record_party(PartyRole::Called, "4412345");
        assert_eq!(assoc.party(PartyRole::Called), Some("4412345"));
        assert_eq!(assoc.party(PartyRole::Calling), None);
    }
}
