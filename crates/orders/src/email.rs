//! Mailbox parsing for contact email addresses.
//!
//! Accepts a single RFC 5322 mailbox: either a bare `addr-spec`
//! (`local@domain`) or the `display-name <addr-spec>` form. Comments and
//! folding whitespace inside the address are not supported.

use core::str::FromStr;
use thiserror::Error;

/// Why a string could not be read as a mailbox.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MailboxError {
    #[error("address is empty")]
    Empty,
    #[error("address has no '@'")]
    MissingAt,
    #[error("invalid local part")]
    InvalidLocalPart,
    #[error("invalid domain")]
    InvalidDomain,
    #[error("invalid display name")]
    InvalidDisplayName,
    #[error("unterminated quoted string")]
    UnterminatedQuote,
    #[error("unbalanced angle brackets")]
    UnbalancedAngle,
}

/// A parsed mailbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mailbox {
    display_name: Option<String>,
    local_part: String,
    domain: String,
}

impl Mailbox {
    pub fn parse(input: &str) -> Result<Self, MailboxError> {
        let s = input.trim();
        if s.is_empty() {
            return Err(MailboxError::Empty);
        }

        match split_angle_addr(s)? {
            Some((display, addr)) => {
                let display = display.trim();
                let display_name = if display.is_empty() {
                    None
                } else if is_display_name(display) {
                    Some(display.to_string())
                } else {
                    return Err(MailboxError::InvalidDisplayName);
                };
                let (local_part, domain) = parse_addr_spec(addr)?;
                Ok(Self {
                    display_name,
                    local_part,
                    domain,
                })
            }
            None => {
                let (local_part, domain) = parse_addr_spec(s)?;
                Ok(Self {
                    display_name: None,
                    local_part,
                    domain,
                })
            }
        }
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn local_part(&self) -> &str {
        &self.local_part
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Canonical `local@domain` form, without any display name.
    pub fn address(&self) -> String {
        format!("{}@{}", self.local_part, self.domain)
    }
}

impl FromStr for Mailbox {
    type Err = MailboxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl core::fmt::Display for Mailbox {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match &self.display_name {
            Some(name) => write!(f, "{name} <{}>", self.address()),
            None => f.write_str(&self.address()),
        }
    }
}

/// Whether `email` is acceptable as a contact address on an order.
///
/// The trimmed value must not end with a period and must parse to a mailbox
/// whose canonical address is exactly the trimmed value (so display-name
/// forms are rejected).
pub fn is_valid_email(email: &str) -> bool {
    let trimmed = email.trim();
    if trimmed.ends_with('.') {
        return false;
    }
    match Mailbox::parse(trimmed) {
        Ok(mailbox) => mailbox.address() == trimmed,
        Err(_) => false,
    }
}

/// Splits `display <addr>` into its parts. `None` when there is no angle
/// bracket outside a quoted string.
fn split_angle_addr(s: &str) -> Result<Option<(&str, &str)>, MailboxError> {
    let mut in_quotes = false;
    let mut escaped = false;
    let mut open = None;

    for (i, c) in s.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' if in_quotes => escaped = true,
            '"' => in_quotes = !in_quotes,
            '<' if !in_quotes => {
                if open.is_some() {
                    return Err(MailboxError::UnbalancedAngle);
                }
                open = Some(i);
            }
            '>' if !in_quotes && open.is_none() => return Err(MailboxError::UnbalancedAngle),
            _ => {}
        }
    }
    if in_quotes {
        return Err(MailboxError::UnterminatedQuote);
    }

    let Some(open) = open else {
        return Ok(None);
    };
    let inner = s[open + 1..]
        .strip_suffix('>')
        .ok_or(MailboxError::UnbalancedAngle)?;
    Ok(Some((&s[..open], inner)))
}

fn parse_addr_spec(s: &str) -> Result<(String, String), MailboxError> {
    let (local, domain) = if let Some(rest) = s.strip_prefix('"') {
        let end = quoted_string_end(rest)?;
        let local = &s[..end + 2];
        let domain = s[end + 2..]
            .strip_prefix('@')
            .ok_or(MailboxError::MissingAt)?;
        (local, domain)
    } else {
        let at = s.find('@').ok_or(MailboxError::MissingAt)?;
        let local = &s[..at];
        if !is_dot_atom(local) {
            return Err(MailboxError::InvalidLocalPart);
        }
        (local, &s[at + 1..])
    };

    if !is_domain(domain) {
        return Err(MailboxError::InvalidDomain);
    }
    Ok((local.to_string(), domain.to_string()))
}

/// Byte offset (within `rest`) of the closing quote of a quoted string whose
/// opening quote has already been consumed.
fn quoted_string_end(rest: &str) -> Result<usize, MailboxError> {
    let mut escaped = false;
    for (i, c) in rest.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '"' => return Ok(i),
            '\r' | '\n' => return Err(MailboxError::InvalidLocalPart),
            _ => {}
        }
    }
    Err(MailboxError::UnterminatedQuote)
}

fn is_atext(c: char) -> bool {
    c.is_ascii_alphanumeric() || "!#$%&'*+-/=?^_`{|}~".contains(c) || !c.is_ascii()
}

fn is_dot_atom(s: &str) -> bool {
    !s.is_empty()
        && s
            .split('.')
            .all(|atom| !atom.is_empty() && atom.chars().all(is_atext))
}

fn is_domain(s: &str) -> bool {
    if let Some(literal) = s.strip_prefix('[') {
        return match literal.strip_suffix(']') {
            Some(body) => body
                .chars()
                .all(|c| matches!(c, '!'..='Z' | '^'..='~')),
            None => false,
        };
    }
    is_dot_atom(s)
}

fn is_display_name(s: &str) -> bool {
    if let Some(rest) = s.strip_prefix('"') {
        return matches!(quoted_string_end(rest), Ok(end) if end + 1 == rest.len());
    }
    s.split_whitespace()
        .all(|word| word.chars().all(|c| is_atext(c) || c == '.'))
}
