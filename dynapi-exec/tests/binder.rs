use dynapi_core::types::{InputKind, Parameter, ParameterLocation, Schema, SchemaType};
use dynapi_exec::descriptor::{bind_parameter, InputSource, UiHint};
use dynapi_exec::invoke::{Input, OperationInstance};
use serde_json::json;

fn param(name: &str, location: ParameterLocation, ty: Option<&str>) -> Parameter {
    Parameter {
        name: Some(name.to_string()),
        location: Some(location),
        schema: Some(Schema {
            schema_type: ty.map(|t| SchemaType::Single(t.to_string())),
            ..Schema::default()
        }),
        ..Parameter::default()
    }
}

fn blank_instance() -> OperationInstance {
    OperationInstance::new(
        Input::fixed(url::Url::parse("https://api.example.com/").unwrap()),
        Input::fixed("GET".to_string()),
    )
}

#[test]
fn integer_maps_to_number_and_everything_else_to_text() {
    let id = bind_parameter("id", &param("id", ParameterLocation::Path, Some("integer")));
    assert_eq!(id.kind, InputKind::Number);

    for ty in [Some("string"), Some("number"), Some("boolean"), Some("bogus"), None] {
        let p = bind_parameter("x", &param("x", ParameterLocation::Query, ty));
        assert_eq!(p.kind, InputKind::Text, "schema type {ty:?}");
    }

    let no_schema = Parameter {
        name: Some("q".to_string()),
        ..Parameter::default()
    };
    assert_eq!(bind_parameter("q", &no_schema).kind, InputKind::Text);
}

#[test]
fn bound_input_is_browsable_synthetic_and_humanized() {
    let input = bind_parameter("per_page", &param("per_page", ParameterLocation::Query, Some("integer")));

    assert_eq!(input.name, "per_page");
    assert_eq!(input.display_name, "Per page");
    assert_eq!(input.description, "per_page");
    assert_eq!(input.ui_hint, UiHint::SingleLine);
    assert!(input.browsable);
    assert!(input.synthetic);
    assert!(!input.required);
    assert!(matches!(input.source, InputSource::Synthetic(_)));
}

#[test]
fn path_parameters_are_always_required() {
    let input = bind_parameter("id", &param("id", ParameterLocation::Path, None));
    assert!(input.required);
}

#[test]
fn accessor_reads_and_writes_the_property_store() {
    let input = bind_parameter("id", &param("id", ParameterLocation::Path, Some("integer")));
    let accessor = input.accessor().unwrap();
    let mut instance = blank_instance();

    assert_eq!(accessor.get(&instance), None);
    accessor.set(&mut instance, json!(42));
    assert_eq!(accessor.get(&instance), Some(&json!(42)));
    assert_eq!(instance.property("id"), Some(&json!(42)));
}

#[test]
fn instances_do_not_share_property_stores() {
    let input = bind_parameter("id", &param("id", ParameterLocation::Path, None));
    let accessor = input.accessor().unwrap();
    let mut a = blank_instance();
    let b = blank_instance();

    accessor.set(&mut a, json!("1"));
    assert_eq!(accessor.get(&b), None);
}
