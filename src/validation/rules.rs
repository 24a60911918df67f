use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

fn default_rule_set_name() -> String {
    RuleSet::DEFAULT_NAME.to_string()
}

/// One named check and the arguments it runs with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(setter(into))]
pub struct Rule {
    #[serde(rename = "rule_name")]
    pub name: String,

    #[builder(default)]
    #[serde(default)]
    pub parameters: Map<String, Value>,
}

impl Rule {
    pub fn new(name: impl Into<String>) -> Self {
        Rule {
            name: name.into(),
            parameters: Map::new(),
        }
    }

    pub fn with_parameter(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.parameters.insert(key.into(), value.into());
        self
    }
}

impl RuleBuilder {
    /// Adds a single argument, keeping those set earlier.
    pub fn parameter(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.parameters
            .get_or_insert_with(Map::new)
            .insert(key.into(), value.into());
        self
    }
}

/// An identified, ordered list of rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(setter(into))]
pub struct RuleSet {
    #[builder(default = "default_rule_set_name()")]
    #[serde(default = "default_rule_set_name")]
    pub name: String,

    #[builder(default)]
    #[serde(default)]
    pub rules: Vec<Rule>,
}

impl RuleSet {
    /// Name used when a rule-set does not carry one.
    pub const DEFAULT_NAME: &'static str = "validation_suite";
}

impl RuleSetBuilder {
    /// Appends a rule after those added so far.
    pub fn rule(&mut self, rule: Rule) -> &mut Self {
        self.rules.get_or_insert_with(Vec::new).push(rule);
        self
    }
}

/// Outcome of evaluating one rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleResult {
    pub rule: String,
    pub success: bool,
    #[serde(default)]
    pub details: Map<String, Value>,
}

impl RuleResult {
    pub fn passed(rule: impl Into<String>) -> Self {
        RuleResult {
            rule: rule.into(),
            success: true,
            details: Map::new(),
        }
    }

    pub fn failed(rule: impl Into<String>, details: Map<String, Value>) -> Self {
        RuleResult {
            rule: rule.into(),
            success: false,
            details,
        }
    }
}

/// What the engine reports back for a rule-set.
///
/// `results` holds only the rules that did not pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub rule_set: String,
    pub success: bool,
    pub evaluated: usize,
    pub results: Vec<RuleResult>,
}
