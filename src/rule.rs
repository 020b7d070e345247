//! Rule-list line records and style tags.

use std::fmt;

/// RuleStyle represents a recognized rule-type tag from a Clash rule list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleStyle {
    /// Exact domain match
    Domain,
    /// Domain suffix match
    DomainSuffix,
    /// Domain keyword match
    DomainKeyword,
    /// Wildcard domain match
    DomainWildcard,
    /// IPv4 CIDR match
    IpCidr,
    /// IPv6 CIDR match
    IpCidr6,
}

impl RuleStyle {
    /// Parse a style tag. Tags are matched exactly; rule lists carry them
    /// uppercase, and anything else is treated as unrecognized.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "DOMAIN" => Some(RuleStyle::Domain),
            "DOMAIN-SUFFIX" => Some(RuleStyle::DomainSuffix),
            "DOMAIN-KEYWORD" => Some(RuleStyle::DomainKeyword),
            "DOMAIN-WILDCARD" => Some(RuleStyle::DomainWildcard),
            "IP-CIDR" => Some(RuleStyle::IpCidr),
            "IP-CIDR6" => Some(RuleStyle::IpCidr6),
            _ => None,
        }
    }

    /// Get the canonical tag string.
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleStyle::Domain => "DOMAIN",
            RuleStyle::DomainSuffix => "DOMAIN-SUFFIX",
            RuleStyle::DomainKeyword => "DOMAIN-KEYWORD",
            RuleStyle::DomainWildcard => "DOMAIN-WILDCARD",
            RuleStyle::IpCidr => "IP-CIDR",
            RuleStyle::IpCidr6 => "IP-CIDR6",
        }
    }
}

impl fmt::Display for RuleStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One parsed rule-list line: the ordered (style, value, option) triple.
///
/// The style is kept as the raw tag so that lines with unrecognized tags
/// survive parsing; the converters drop them, not the parser. Missing
/// trailing fields are empty strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleLine {
    /// Raw rule-type tag, e.g. `DOMAIN-SUFFIX`
    pub style: String,
    /// Match pattern (domain, keyword, wildcard, or CIDR)
    pub value: String,
    /// Optional modifier; only `no-resolve` has meaning
    pub option: String,
}

impl RuleLine {
    /// Create a rule line from its three fields.
    pub fn new(
        style: impl Into<String>,
        value: impl Into<String>,
        option: impl Into<String>,
    ) -> Self {
        Self {
            style: style.into(),
            value: value.into(),
            option: option.into(),
        }
    }

    /// Parse the style tag, if recognized.
    pub fn style(&self) -> Option<RuleStyle> {
        RuleStyle::parse(&self.style)
    }

    /// Whether this line carries the `no-resolve` modifier.
    pub fn is_no_resolve(&self) -> bool {
        self.option == "no-resolve"
    }
}
