use super::*;
use serde_json::{json, Map, Value};
use std::error::Error;

#[cfg(test)]
mod tests {
    use super::*;

    type Rows = [Map<String, Value>];

    // Engine over a slice of JSON rows supporting two column checks
    struct RowsEngine {
        rows: Vec<Map<String, Value>>,
    }

    impl RowsEngine {
        fn column<'a>(&self, rule: &'a Rule) -> Result<&'a str, ValidationError> {
            rule.parameters
                .get("column")
                .and_then(Value::as_str)
                .ok_or_else(|| ValidationError::failed(format!("{} needs a column", rule.name)))
        }
    }

    impl ExecutionEngine for RowsEngine {
        fn evaluate(&self, rule: &Rule) -> Result<RuleResult, ValidationError> {
            match rule.name.as_str() {
                "expect_column_to_exist" => {
                    let column = self.column(rule)?;
                    if self.rows.iter().all(|row| row.contains_key(column)) {
                        Ok(RuleResult::passed(&rule.name))
                    } else {
                        let mut details = Map::new();
                        details.insert("column".to_string(), json!(column));
                        Ok(RuleResult::failed(&rule.name, details))
                    }
                }
                "expect_column_values_to_not_be_null" => {
                    let column = self.column(rule)?;
                    let nulls = self
                        .rows
                        .iter()
                        .filter(|row| row.get(column).map_or(true, Value::is_null))
                        .count();
                    if nulls == 0 {
                        Ok(RuleResult::passed(&rule.name))
                    } else {
                        let mut details = Map::new();
                        details.insert("unexpected_count".to_string(), json!(nulls));
                        Ok(RuleResult::failed(&rule.name, details))
                    }
                }
                other => Err(ValidationError::UnknownRule(other.to_string())),
            }
        }
    }

    struct RowsValidator;

    impl DataValidator for RowsValidator {
        type Data = Rows;
        type Engine = RowsEngine;

        fn execution_engine(&self, data: &Rows) -> Result<RowsEngine, ValidationError> {
            Ok(RowsEngine {
                rows: data.to_vec(),
            })
        }
    }

    fn rows() -> Vec<Map<String, Value>> {
        let value = json!([
            {"id": 1, "name": "alpha"},
            {"id": 2, "name": null},
        ]);
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_report_keeps_only_failures() {
        let rules = RuleSetBuilder::default()
            .name("users")
            .rule(Rule::new("expect_column_to_exist").with_parameter("column", "id"))
            .rule(Rule::new("expect_column_values_to_not_be_null").with_parameter("column", "name"))
            .build()
            .unwrap();

        let report = RowsValidator.validate(&rows(), &rules).unwrap();

        assert!(!report.success);
        assert_eq!(report.rule_set, "users");
        assert_eq!(report.evaluated, 2);
        assert_eq!(report.results.len(), 1);
        assert_eq!(report.results[0].rule, "expect_column_values_to_not_be_null");
        assert_eq!(report.results[0].details.get("unexpected_count"), Some(&json!(1)));
    }

    #[test]
    fn test_all_rules_passing() {
        let rule = RuleBuilder::default()
            .name("expect_column_to_exist")
            .parameter("column", "name")
            .build()
            .unwrap();
        let rules = RuleSetBuilder::default().rule(rule).build().unwrap();

        let report = RowsValidator.validate(&rows(), &rules).unwrap();

        assert!(report.success);
        assert!(report.results.is_empty());
        assert_eq!(report.rule_set, RuleSet::DEFAULT_NAME);
    }

    #[test]
    fn test_empty_rule_set_succeeds() {
        let rules = RuleSetBuilder::default().build().unwrap();
        let report = RowsValidator.validate(&rows(), &rules).unwrap();

        assert!(report.success);
        assert_eq!(report.evaluated, 0);
    }

    #[test]
    fn test_engine_error_is_wrapped() {
        let rules = RuleSetBuilder::default()
            .rule(Rule::new("expect_table_row_count_to_equal"))
            .build()
            .unwrap();

        let err = RowsValidator.validate(&rows(), &rules).unwrap_err();

        assert_eq!(
            err.to_string(),
            "failed data expectations: unknown rule 'expect_table_row_count_to_equal'"
        );
        let source = err.source().unwrap();
        assert!(source.downcast_ref::<ValidationError>().is_some());
    }

    #[test]
    fn test_rule_without_name_fails_to_build() {
        assert!(RuleBuilder::default().build().is_err());
    }

    #[test]
    fn test_rule_set_from_json_applies_defaults() {
        let rules: RuleSet = serde_json::from_value(json!({
            "rules": [
                {"rule_name": "expect_column_to_exist", "parameters": {"column": "id"}},
                {"rule_name": "expect_table_columns_to_match_set"}
            ]
        }))
        .unwrap();

        assert_eq!(rules.name, "validation_suite");
        assert_eq!(rules.rules.len(), 2);
        assert!(rules.rules[1].parameters.is_empty());
    }

    #[test]
    fn test_report_serializes_success_flag() {
        let report = ValidationReport {
            rule_set: "users".to_string(),
            success: true,
            evaluated: 0,
            results: Vec::new(),
        };
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["success"], json!(true));
        assert_eq!(value["results"], json!([]));
    }
}
