//! Egern rule-file converter.

use crate::layout::RAW_BASE_URL;
use crate::rule::{RuleLine, RuleStyle};

use super::RuleGroups;

/// Output keys whose values are double-quoted.
const QUOTED_KEYS: &[&str] = &["domain_wildcard_set"];

/// Converter to the Egern line-oriented rule format.
pub struct EgernConverter;

impl EgernConverter {
    /// Convert parsed rule lines into an Egern rule document.
    ///
    /// The document carries a two-line header comment (rule name and the
    /// number of emitted list items), an optional `no_resolve: true`
    /// marker, and one indented value list per populated key, in
    /// first-seen style order. Lines with unrecognized tags are dropped
    /// and do not affect the no-resolve marker.
    pub fn convert(rules: &[RuleLine], rule_name: &str) -> String {
        let mut groups = RuleGroups::new();
        let mut no_resolve = false;

        for line in rules {
            let style = match line.style() {
                Some(style) => style,
                None => continue,
            };
            no_resolve |= line.is_no_resolve();

            let key = egern_key(style);
            let value = if QUOTED_KEYS.contains(&key) {
                format!("\"{}\"", line.value)
            } else {
                line.value.clone()
            };
            groups.push(key, value);
        }

        let count: usize = groups.entries().iter().map(|(_, v)| v.len()).sum();

        let mut doc = format!("# 规则名称: {}\n# 规则统计: {}\n\n", rule_name, count);
        if no_resolve {
            doc.push_str("no_resolve: true\n");
        }
        for (key, values) in groups.entries() {
            doc.push_str(key);
            doc.push_str(":\n");
            for value in values {
                doc.push_str("  - ");
                doc.push_str(value);
                doc.push('\n');
            }
        }

        doc
    }

    /// Render the sibling readme: a title line and the raw-download URL of
    /// the converted file. `relative_path` is the file's `/`-separated
    /// path below the repository root, e.g. `Egern/Apple/Apple.yaml`.
    pub fn readme(rule_name: &str, relative_path: &str) -> String {
        format!("# 🧸 {}\n\n{}{}", rule_name, RAW_BASE_URL, relative_path)
    }
}

/// Map a rule style to its Egern output key.
fn egern_key(style: RuleStyle) -> &'static str {
    match style {
        RuleStyle::Domain => "domain_set",
        RuleStyle::DomainSuffix => "domain_suffix_set",
        RuleStyle::DomainKeyword => "domain_keyword_set",
        RuleStyle::DomainWildcard => "domain_wildcard_set",
        RuleStyle::IpCidr => "ip_cidr_set",
        RuleStyle::IpCidr6 => "ip_cidr6_set",
    }
}
