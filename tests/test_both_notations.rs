//! Symbol and English notation must describe the same formulas

use argument_validator::expression::normalize_keywords;
use argument_validator::{Argument, Evaluation, ValidatorConfig, ValidatorError, VariableError};

fn evaluate(english: bool, variables: &[&str], premises: &[&str], conclusion: &str) -> Evaluation {
    let config = ValidatorConfig::default().with_natural_language(english);
    let mut argument = Argument::new(variables.iter().copied(), config).unwrap();
    for premise in premises {
        argument.add_premise(premise).unwrap();
    }
    argument.set_conclusion(conclusion).unwrap();
    argument.evaluate().unwrap()
}

#[test]
fn test_english_matches_symbols() {
    let symbols = evaluate(false, &["p", "q", "r"], &["p & q"], "p & q > ! r");
    let english = evaluate(true, &["p", "q", "r"], &["p and q"], "p and q then not r");
    assert_eq!(symbols, english);
}

#[test]
fn test_keyword_aliases() {
    let vars = ["p", "q"];
    let reference = evaluate(false, &vars, &[], "!p > q");
    for conclusion in ["not p implies q", "no p then q", "NOT P IMPLIES Q", "~p => q"] {
        assert_eq!(
            evaluate(true, &vars, &[], conclusion).table,
            reference.table,
            "{}",
            conclusion
        );
    }
}

#[test]
fn test_doubled_symbols() {
    let vars = ["p", "q"];
    assert_eq!(
        evaluate(true, &vars, &[], "p&&q || !p").table,
        evaluate(false, &vars, &[], "p & q | !p").table
    );
}

#[test]
fn test_multi_letter_names() {
    let evaluation = evaluate(
        true,
        &["rain", "wet"],
        &["rain implies wet", "not wet"],
        "not rain",
    );
    assert!(evaluation.verdict.valid);
    assert!(evaluation.verdict.satisfiable);
    // Both premises hold only where rain and wet are false
    assert_eq!(evaluation.table.formula_values(0).unwrap(), &[true, true, true]);
}

#[test]
fn test_symbol_mode_ignores_keywords() {
    // Without normalization `and` is an undeclared identifier
    let config = ValidatorConfig::default();
    let mut argument = Argument::new(["p", "q"], config).unwrap();
    argument.set_conclusion("p and q").unwrap();
    assert!(matches!(argument.evaluate(), Err(ValidatorError::Table(_))));
}

#[test]
fn test_keywords_cannot_be_variables_in_english() {
    let config = ValidatorConfig::default().with_natural_language(true);
    assert!(matches!(
        Argument::new(["p", "or"], config),
        Err(ValidatorError::Variables(VariableError::ReservedWord { .. }))
    ));
}

#[test]
fn test_normalized_text() {
    assert_eq!(normalize_keywords("(p or q) then not r"), "( p | q ) > ! r");
    assert_eq!(normalize_keywords("  "), "");
}
