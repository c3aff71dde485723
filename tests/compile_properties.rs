use docfilter::model::{Combination, DataType, FilterSpec, Operator, OutputMode};
use docfilter::{coerce, compile_filters, escape_literal, FilterError, TypedValue};
use regex::RegexBuilder;
use serde_json::json;

#[test]
fn numeric_coercion_is_exact_or_fails() {
    for (raw, expected) in [("0", 0.0), ("18", 18.0), ("-7", -7.0), ("3.25", 3.25)] {
        assert_eq!(
            coerce(raw, DataType::Number).unwrap(),
            TypedValue::Number(expected)
        );
    }
    assert!(matches!(
        coerce("eighteen", DataType::Number),
        Err(FilterError::Conversion { .. })
    ));
}

#[test]
fn escaped_literal_matches_only_exact_substring() {
    let text = "a+b (c) [d] $e^ f.g";
    let re = RegexBuilder::new(&escape_literal(text)).build().unwrap();
    assert!(re.is_match(text));
    assert!(re.is_match(&format!(">>{}<<", text)));
    assert!(!re.is_match("aab (c) [d] $e^ fXg"));

    let insensitive = RegexBuilder::new(&escape_literal("Jo.Hn"))
        .case_insensitive(true)
        .build()
        .unwrap();
    assert!(insensitive.is_match("jo.hn"));
    assert!(!insensitive.is_match("joXhn"));
}

#[test]
fn age_and_literal_name_compile_to_and_document() {
    let specs = vec![
        FilterSpec::with_value("age", Operator::Gte, "18").data_type(DataType::Number),
        FilterSpec::with_value("name", Operator::Regex, "Jo.Hn")
            .literal_search(true)
            .case_sensitive(false),
    ];
    let result = compile_filters(&specs, OutputMode::Document, Combination::And).unwrap();
    assert_eq!(
        result.filter,
        json!({"$and": [
            {"age": {"$gte": 18}},
            {"name": {"$regex": "Jo\\.Hn", "$options": "i"}}
        ]})
    );
    assert_eq!(result.count, 2);
    assert_eq!(
        result.description,
        "\"age\" maior ou igual a \"18\" E \"name\" contém \"Jo.Hn\""
    );
}

#[test]
fn single_exists_filter_is_unwrapped() {
    let specs = vec![FilterSpec::new("status", Operator::Exists)];
    let result = compile_filters(&specs, OutputMode::Document, Combination::Or).unwrap();
    assert_eq!(result.filter, json!({"status": {"$exists": true}}));
}

#[test]
fn wrapping_follows_count_and_combination() {
    let two = vec![
        FilterSpec::new("a", Operator::Exists),
        FilterSpec::new("b", Operator::NotExists),
    ];
    let three = {
        let mut v = two.clone();
        v.push(FilterSpec::with_list("c", Operator::In, "x,y"));
        v
    };
    for specs in [&two, &three] {
        let and = compile_filters(specs, OutputMode::Document, Combination::And).unwrap();
        assert_eq!(and.filter["$and"].as_array().unwrap().len(), specs.len());
        let or = compile_filters(specs, OutputMode::Document, Combination::Or).unwrap();
        assert_eq!(or.filter["$or"].as_array().unwrap().len(), specs.len());
    }
}

#[test]
fn contains_ignores_literal_search_while_regex_honors_it() {
    let build = |op: Operator, literal: bool| {
        let spec = FilterSpec::with_value("f", op, "a.b").literal_search(literal);
        compile_filters(&[spec], OutputMode::Document, Combination::And)
            .unwrap()
            .filter
    };
    assert_eq!(build(Operator::Contains, true), build(Operator::Contains, false));
    assert_ne!(build(Operator::Regex, true), build(Operator::Regex, false));
    assert_eq!(build(Operator::Regex, true), build(Operator::Contains, true));
}

#[test]
fn membership_list_parsing_drops_blanks() {
    let spec = FilterSpec::with_list("tags", Operator::In, "a, b ,,c");
    let result = compile_filters(&[spec], OutputMode::Array, Combination::And).unwrap();
    assert_eq!(
        result.filter,
        json!([{"field": "tags", "operator": "in", "value": ["a", "b", "c"]}])
    );
}

#[test]
fn empty_membership_sets_are_valid() {
    let specs = vec![
        FilterSpec::with_list("a", Operator::In, ", ,"),
        FilterSpec::with_list("b", Operator::Nin, ""),
    ];
    let result = compile_filters(&specs, OutputMode::Document, Combination::And).unwrap();
    assert_eq!(
        result.filter,
        json!({"$and": [{"a": {"$in": []}}, {"b": {"$nin": []}}]})
    );
}

#[test]
fn empty_spec_list_fails() {
    let err = compile_filters(&[], OutputMode::Array, Combination::And).unwrap_err();
    assert!(matches!(err, FilterError::EmptyFilterSet));
    assert_eq!(err.kind(), "EmptyFilterSetError");
}
