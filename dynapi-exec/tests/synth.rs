use dynapi_core::types::InputKind;
use dynapi_core::{parse_document_str, DocumentFormat, SpecDocument};
use dynapi_exec::descriptor::{ActivityKind, HiddenInput, InputSource};
use dynapi_exec::invoke::{InputValue, SEND_HTTP_REQUEST_TYPE};
use dynapi_exec::synth::{build_descriptor, BuildErrorKind};
use dynapi_exec::{synthesize, FailurePolicy, RegistryConfig};
use serde_json::json;

const REGRES: &str = r#"
openapi: 3.0.0
info:
  title: Regres API
  version: 1
servers:
  - url: https://api.example.com
paths:
  /users:
    get:
      summary: List users
      parameters:
        - in: query
          name: page
          schema: { type: integer }
        - in: query
          name: per_page
          schema: { type: integer }
    post:
      summary: Create a user
  /users/{id}:
    get:
      summary: Get a user
      parameters:
        - in: path
          name: id
          schema: { type: integer }
    delete:
      parameters:
        - in: path
          name: id
          schema: { type: string }
"#;

fn doc(yaml: &str) -> SpecDocument {
    parse_document_str(yaml, DocumentFormat::Yaml).unwrap().document
}

fn regres_config() -> RegistryConfig {
    RegistryConfig::default()
}

#[test]
fn one_descriptor_per_path_method_pair() {
    let d = doc(REGRES);
    let out = synthesize(&d, &regres_config()).unwrap();
    assert_eq!(out.descriptors.len(), d.operation_count());
    assert_eq!(out.descriptors.len(), 4);
    assert!(out.skipped.is_empty());
}

#[test]
fn derives_names_and_metadata() {
    let out = synthesize(&doc(REGRES), &regres_config()).unwrap();
    let get_user = &out.descriptors[2];

    assert_eq!(get_user.name, "GetUsersById");
    assert_eq!(get_user.fully_qualified_name, "Regres.RegresAPI.GetUsersById");
    assert_eq!(get_user.namespace, "Api.RegresAPI");
    assert_eq!(get_user.display_name, "Get users by id");
    assert_eq!(get_user.category, "Demo");
    assert_eq!(get_user.kind, ActivityKind::Task);
    assert_eq!(get_user.description.as_deref(), Some("Get a user"));
    assert_eq!(get_user.method, "GET");
    assert_eq!(get_user.path_template, "/users/{id}");

    let names: Vec<&str> = out.descriptors.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["GetUsers", "PostUsers", "GetUsersById", "DeleteUsersById"]);
}

#[test]
fn hidden_inputs_are_not_listed_to_callers() {
    let out = synthesize(&doc(REGRES), &regres_config()).unwrap();
    let list_users = &out.descriptors[0];

    let visible: Vec<&str> = list_users.visible_inputs().map(|i| i.name.as_str()).collect();
    assert_eq!(visible, vec!["page", "per_page"]);

    let hidden: Vec<&str> = list_users.hidden_inputs().map(|i| i.name.as_str()).collect();
    assert_eq!(hidden, vec!["Url", "Method"]);
    assert_eq!(list_users.inputs.len(), 4);

    let summary = list_users.summary();
    assert!(summary.inputs.iter().all(|i| i.name != "Url" && i.name != "Method"));
}

#[test]
fn input_kinds_follow_schema_types() {
    let out = synthesize(&doc(REGRES), &regres_config()).unwrap();
    assert_eq!(out.descriptors[2].input("id").unwrap().kind, InputKind::Number);
    assert_eq!(out.descriptors[3].input("id").unwrap().kind, InputKind::Text);
    assert_eq!(out.descriptors[2].input("Url").unwrap().kind, InputKind::Uri);
}

#[test]
fn url_input_is_computed_and_method_input_is_fixed() {
    let out = synthesize(&doc(REGRES), &regres_config()).unwrap();
    let delete_user = &out.descriptors[3];

    match &delete_user.input("Url").unwrap().source {
        InputSource::Hidden(HiddenInput::Url(i)) => assert!(i.is_computed()),
        other => panic!("unexpected url source: {other:?}"),
    }
    match &delete_user.input("Method").unwrap().source {
        InputSource::Hidden(HiddenInput::Method(i)) => match i.value() {
            InputValue::Fixed(m) => assert_eq!(m, "DELETE"),
            InputValue::Computed(_) => panic!("method should be fixed"),
        },
        other => panic!("unexpected method source: {other:?}"),
    }
}

#[test]
fn constructor_wires_identity_and_hidden_references() {
    let out = synthesize(&doc(REGRES), &regres_config()).unwrap();
    let get_user = &out.descriptors[2];
    let instance = get_user.instantiate();

    assert_ne!(instance.type_name(), SEND_HTTP_REQUEST_TYPE);
    assert_eq!(instance.type_name(), "Regres.RegresAPI.GetUsersById");

    let url_ref = get_user.input("Url").unwrap().hidden().unwrap().reference();
    let method_ref = get_user.input("Method").unwrap().hidden().unwrap().reference();
    assert_eq!(instance.url_input().reference(), url_ref);
    assert_eq!(instance.method_input().reference(), method_ref);
    assert_ne!(url_ref, method_ref);
}

#[test]
fn constructor_yields_independent_instances() {
    let out = synthesize(&doc(REGRES), &regres_config()).unwrap();
    let get_user = &out.descriptors[2];
    let accessor = get_user.input("id").unwrap().accessor().unwrap().clone();

    let mut a = get_user.instantiate();
    let mut b = get_user.instantiate();
    assert_ne!(a.id(), b.id());

    accessor.set(&mut a, json!(1));
    accessor.set(&mut b, json!(2));

    let req_a = a.prepare_request().unwrap();
    let req_b = b.prepare_request().unwrap();
    assert_eq!(req_a.url.as_str(), "https://api.example.com/users/1");
    assert_eq!(req_b.url.as_str(), "https://api.example.com/users/2");
    assert_eq!(req_a.method, "GET");
}

#[test]
fn missing_server_is_deferred_to_invocation() {
    let yaml = REGRES.replace("servers:\n  - url: https://api.example.com\n", "");
    let out = synthesize(&doc(&yaml), &regres_config()).unwrap();
    assert_eq!(out.descriptors.len(), 4);

    let instance = out.descriptors[0].instantiate();
    let err = instance.prepare_request().unwrap_err();
    assert!(err.to_string().contains("no server configured"));
}

const BROKEN: &str = r#"
info: { title: Broken API }
servers: [ { url: "https://api.example.com" } ]
paths:
  /ok:
    get: {}
  /bad:
    x-internal: {}
    post:
      parameters:
        - in: query
  /also-ok:
    put: {}
"#;

#[test]
fn fail_fast_aborts_on_first_bad_pair() {
    let err = synthesize(&doc(BROKEN), &RegistryConfig::default()).unwrap_err();
    assert_eq!(err.path, "/bad");
    assert_eq!(err.method, "x-internal");
    assert_eq!(err.kind, BuildErrorKind::UnsupportedMethod("x-internal".to_string()));
}

#[test]
fn tolerant_mode_skips_bad_pairs() {
    let config = RegistryConfig {
        failure_policy: FailurePolicy::Tolerant,
        ..RegistryConfig::default()
    };
    let out = synthesize(&doc(BROKEN), &config).unwrap();

    let names: Vec<&str> = out.descriptors.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["GetOk", "PutAlso_ok"]);
    assert_eq!(out.skipped.len(), 2);
    assert_eq!(out.skipped[1].kind, BuildErrorKind::UnnamedParameter { index: 0 });

    let report = out.report();
    assert_eq!(report.registered, 2);
    assert!(report.skipped[1].contains("post /bad"));
}

#[test]
fn look_alike_paths_get_their_own_names() {
    let yaml = r#"
info: { title: Regres API }
paths:
  /users/{id}:
    get: {}
  /users/by-id:
    get: {}
  /user_list:
    get: {}
  /userList:
    get: {}
"#;
    let out = synthesize(&doc(yaml), &RegistryConfig::default()).unwrap();
    let names: Vec<&str> = out
        .descriptors
        .iter()
        .map(|d| d.fully_qualified_name.as_str())
        .collect();
    assert_eq!(
        names,
        vec![
            "Regres.RegresAPI.GetUsersById",
            "Regres.RegresAPI.GetUsersBy_id",
            "Regres.RegresAPI.GetUser_list",
            "Regres.RegresAPI.GetUserList",
        ]
    );
}

#[test]
fn custom_prefix_and_namespace_are_independent() {
    let config = RegistryConfig {
        type_prefix: "Users".to_string(),
        namespace: "Svc".to_string(),
        category: "Admin".to_string(),
        ..RegistryConfig::default()
    };
    let out = synthesize(&doc(REGRES), &config).unwrap();
    let get_user = &out.descriptors[2];
    assert_eq!(get_user.fully_qualified_name, "Users.RegresAPI.GetUsersById");
    assert_eq!(get_user.namespace, "Svc.RegresAPI");
    assert_eq!(get_user.category, "Admin");
    assert_eq!(get_user.instantiate().type_name(), "Users.RegresAPI.GetUsersById");
}

#[test]
fn duplicate_names_are_rejected() {
    let yaml = r#"
info: { title: Dup }
paths:
  /users/{id}:
    get: {}
  /users/ById:
    get: {}
"#;
    let err = synthesize(&doc(yaml), &RegistryConfig::default()).unwrap_err();
    assert_eq!(err.path, "/users/ById");
    assert_eq!(
        err.kind,
        BuildErrorKind::DuplicateName("Regres.Dup.GetUsersById".to_string())
    );
}

#[test]
fn title_without_identifier_characters_fails() {
    let d = doc("info: { title: '!!' }\npaths:\n  /x:\n    get: {}\n");
    let op = &d.paths["/x"]["get"];
    let err = build_descriptor(&d, &RegistryConfig::default(), "/x", "get", op).unwrap_err();
    assert!(matches!(err.kind, BuildErrorKind::EmptyApiName { .. }));
}

#[test]
fn rebuilding_produces_equivalent_descriptors() {
    let d = doc(REGRES);
    let first = synthesize(&d, &regres_config()).unwrap().descriptors;
    let second = synthesize(&d, &regres_config()).unwrap().descriptors;

    let summaries = |v: &[dynapi_exec::OperationDescriptor]| {
        v.iter().map(|d| d.summary()).collect::<Vec<_>>()
    };
    assert_eq!(summaries(&first[..]), summaries(&second[..]));

    // Same shape, fresh bindings.
    let r1 = first[0].input("Url").unwrap().hidden().unwrap().reference();
    let r2 = second[0].input("Url").unwrap().hidden().unwrap().reference();
    assert_ne!(r1, r2);
}

#[test]
fn descriptors_can_be_built_from_separate_threads() {
    let d = std::sync::Arc::new(doc(REGRES));
    let config = std::sync::Arc::new(regres_config());

    let handles: Vec<_> = d
        .operations()
        .map(|(p, m, _)| (p.to_string(), m.to_string()))
        .collect::<Vec<_>>()
        .into_iter()
        .map(|(path, method)| {
            let d = d.clone();
            let config = config.clone();
            std::thread::spawn(move || {
                let op = &d.paths[path.as_str()][method.as_str()];
                build_descriptor(&d, &config, &path, &method, op).map(|x| x.fully_qualified_name)
            })
        })
        .collect();

    let names: Vec<String> = handles.into_iter().map(|h| h.join().unwrap().unwrap()).collect();
    assert_eq!(names.len(), 4);
    assert_eq!(names[2], "Regres.RegresAPI.GetUsersById");
}
