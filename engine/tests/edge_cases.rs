//! Edge case tests for dynaform-engine
//!
//! These tests cover boundary conditions and unusual inputs.

use dynaform_engine::{
    process_answers, process_formulary, AnswerRecord, Error, FieldSpec, FormBuilder, Formulary,
};
use serde_json::{json, Value};

fn publish(builder: &FormBuilder) -> Value {
    json!({ "uuid": "form-1", "fields": serde_json::to_value(builder.fields()).unwrap() })
}

fn contact_form() -> FormBuilder {
    let mut builder = FormBuilder::new();
    builder
        .add_field(FieldSpec::new("text-field", "Nombre"))
        .add_field(FieldSpec::new("email-field", "Correo").email("info@example.com"))
        .add_field(FieldSpec::new("select-field", "Color").options(["rojo", "azul"]))
        .add_field(FieldSpec::new("link-field", "Sitio").url("https://example.com"));
    builder
}

// ============================================================================
// String Edge Cases
// ============================================================================

#[test]
fn unicode_names() {
    let names = [
        "日本語テスト",
        "Привет мир",
        "مرحبا بالعالم",
        "🎉🚀💯",
        "Correo Electrónico",
    ];

    let mut builder = FormBuilder::new();
    for name in names {
        builder.add_field(FieldSpec::new("text-field", name));
    }

    let formulary = process_formulary(&publish(&builder)).unwrap();
    assert_eq!(formulary.len(), names.len());
    for (i, name) in names.iter().enumerate() {
        assert_eq!(formulary.field_name(i as u32), Some(*name));
    }
}

#[test]
fn names_with_surrounding_whitespace_are_kept_verbatim() {
    let raw = json!({"fields": [{"name": "  Nombre  ", "field": "text", "index": 0}]});
    let formulary = process_formulary(&raw).unwrap();
    assert_eq!(formulary.field_name(0), Some("  Nombre  "));
}

// ============================================================================
// Full Cycle
// ============================================================================

#[test]
fn publish_answer_reconcile_cycle() {
    let builder = contact_form();
    let formulary = process_formulary(&publish(&builder)).unwrap();

    let submitted = [
        AnswerRecord::single("form-1", 2, "azul"),
        AnswerRecord::single("form-1", 0, "Ana"),
    ];
    let stored: Vec<Value> = submitted
        .iter()
        .map(|record| serde_json::to_value(record.to_wire().unwrap()).unwrap())
        .collect();

    let answers = process_answers(&Value::Array(stored), &formulary).unwrap();

    assert_eq!(answers.len(), 2);
    assert_eq!(answers[0].field, "Color");
    assert_eq!(answers[0].answer, json!("azul"));
    assert_eq!(answers[1].field, "Nombre");
    assert_eq!(answers[1].answer, json!("Ana"));
}

#[test]
fn answer_values_keep_their_json_type() {
    let builder = contact_form();
    let formulary = process_formulary(&publish(&builder)).unwrap();

    let values = [json!(42), json!(false), json!(["a", "b"]), json!({"k": 1}), Value::Null];
    let stored: Vec<Value> = values
        .iter()
        .map(|value| {
            let record = AnswerRecord::single("form-1", 0, value.clone());
            serde_json::to_value(record.to_wire().unwrap()).unwrap()
        })
        .collect();

    let answers = process_answers(&Value::Array(stored), &formulary).unwrap();
    for (answer, value) in answers.iter().zip(values.iter()) {
        assert_eq!(&answer.answer, value);
    }
}

// ============================================================================
// Index Edge Cases
// ============================================================================

#[test]
fn middle_field_dropped_keeps_later_answers_aligned() {
    let mut builder = FormBuilder::new();
    builder
        .add_field(FieldSpec::new("text-field", "Primero"))
        .add_field(FieldSpec::new("text-field", " "))
        .add_field(FieldSpec::new("text-field", "Tercero"));

    let formulary = process_formulary(&publish(&builder)).unwrap();
    assert_eq!(formulary.len(), 2);

    let raw = json!([{"fields": "[{\"index\":2,\"value\":\"x\"}]"}]);
    let answers = process_answers(&raw, &formulary).unwrap();
    assert_eq!(answers[0].field, "Tercero");

    let raw = json!([{"fields": "[{\"index\":1,\"value\":\"x\"}]"}]);
    assert_eq!(
        process_answers(&raw, &formulary),
        Err(Error::UnknownFieldIndex(1))
    );
}

#[test]
fn one_bad_answer_fails_the_whole_list() {
    let formulary = process_formulary(&publish(&contact_form())).unwrap();
    let raw = json!([
        {"fields": "[{\"index\":0,\"value\":\"ok\"}]"},
        {"fields": "[{\"index\":99,\"value\":\"bad\"}]"}
    ]);

    assert_eq!(
        process_answers(&raw, &formulary),
        Err(Error::UnknownFieldIndex(99))
    );
}

#[test]
fn many_fields() {
    let mut builder = FormBuilder::new();
    for i in 0..1000 {
        builder.add_field(FieldSpec::new("text-field", format!("campo {}", i)));
    }
    assert_eq!(builder.next_index(), 1000);

    let formulary = process_formulary(&publish(&builder)).unwrap();
    assert_eq!(formulary.field_name(999), Some("campo 999"));
}

#[test]
fn empty_formulary_round_trips_as_empty_list() {
    let formulary = Formulary::default();
    assert!(formulary.is_empty());
    assert_eq!(serde_json::to_value(&formulary).unwrap(), json!([]));
}
