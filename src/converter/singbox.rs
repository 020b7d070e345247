//! sing-box rule-set converter.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::layout::RAW_BASE_URL;
use crate::rule::{RuleLine, RuleStyle};
use crate::Result;

use super::RuleGroups;

/// Schema version of the emitted source rule-set documents.
pub const RULESET_VERSION: u32 = 3;

/// A sing-box source rule-set document.
#[derive(Debug, Serialize)]
pub struct RuleSetDocument {
    /// Fixed schema version
    pub version: u32,
    /// One single-key object per populated rule group
    pub rules: Vec<RuleGroup>,
}

/// One rule group, serialized as a single-key JSON object.
#[derive(Debug)]
pub struct RuleGroup {
    /// Output key, e.g. `domain_suffix`
    pub key: &'static str,
    /// Raw values in file order
    pub values: Vec<String>,
}

impl Serialize for RuleGroup {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.key, &self.values)?;
        map.end()
    }
}

/// Converter to the sing-box source rule-set format.
pub struct SingboxConverter;

impl SingboxConverter {
    /// Build the rule-set document for a parsed rule list.
    ///
    /// `IP-CIDR` and `IP-CIDR6` share the `ip_cidr` key and therefore the
    /// same group. Wildcard rules and the `no-resolve` option have no
    /// sing-box counterpart and are dropped.
    pub fn document(rules: &[RuleLine]) -> RuleSetDocument {
        let mut groups = RuleGroups::new();

        for line in rules {
            let key = match line.style().and_then(singbox_key) {
                Some(key) => key,
                None => continue,
            };
            groups.push(key, line.value.clone());
        }

        RuleSetDocument {
            version: RULESET_VERSION,
            rules: groups
                .into_entries()
                .into_iter()
                .map(|(key, values)| RuleGroup { key, values })
                .collect(),
        }
    }

    /// Convert parsed rule lines into the serialized JSON document:
    /// 2-space indentation, non-ASCII left unescaped, trailing newline.
    pub fn convert(rules: &[RuleLine]) -> Result<String> {
        let mut json = serde_json::to_string_pretty(&Self::document(rules))?;
        json.push('\n');
        Ok(json)
    }

    /// Render the sibling readme: a title line, the raw-download URL of
    /// the JSON file, and the URL of the compiled `.srs` sibling (which
    /// this tool does not produce).
    pub fn readme(rule_name: &str, json_path: &str, srs_path: &str) -> String {
        format!(
            "# 🧸 {}\n\n{}{}\n\n{}{}",
            rule_name, RAW_BASE_URL, json_path, RAW_BASE_URL, srs_path
        )
    }
}

/// Map a rule style to its sing-box output key, if it has one.
fn singbox_key(style: RuleStyle) -> Option<&'static str> {
    match style {
        RuleStyle::Domain => Some("domain"),
        RuleStyle::DomainSuffix => Some("domain_suffix"),
        RuleStyle::DomainKeyword => Some("domain_keyword"),
        RuleStyle::IpCidr | RuleStyle::IpCidr6 => Some("ip_cidr"),
        RuleStyle::DomainWildcard => None,
    }
}
