//! Policy selection integration tests.
//!
//! These tests verify the configuration-to-policy path end to end:
//! TOML snippet -> NamerConfig -> create_namer -> generated names,
//! plus injection of a fully custom TicketNamer in place of the factory
//! product and the MockNamer host-side testing flow.

use ticketino_core::{
    create_namer, namer_config_from_str, NamerError, Ticket, TicketNamer,
    testing::{fixtures, MockNamer},
};

#[test]
fn test_default_config_produces_underscore_names() {
    let config = namer_config_from_str("").unwrap();
    let namer = create_namer(&config).unwrap();

    let name = namer
        .generate_name(&fixtures::ticket("artf2", "Hello,   World!!"), None)
        .unwrap();
    assert_eq!(name, "artf2_hello_world");
}

#[test]
fn test_id_only_policy_ignores_title() {
    let config = namer_config_from_str(r#"policy = "id_only""#).unwrap();
    let namer = create_namer(&config).unwrap();

    let name = namer
        .generate_name(&fixtures::ticket("artf2", "Hello,   World!!"), None)
        .unwrap();
    assert_eq!(name, "artf2");
}

#[test]
fn test_underscore_knobs_flow_through() {
    let toml = r#"
policy = "underscore"

[underscore]
join = "-"
lowercase = false
"#;
    let config = namer_config_from_str(toml).unwrap();
    let namer = create_namer(&config).unwrap();

    let name = namer
        .generate_name(&fixtures::ticket("artf5", "Hello World!"), None)
        .unwrap();
    assert_eq!(name, "artf5-Hello-World");
}

#[test]
fn test_custom_chars_class_from_toml() {
    let toml = r#"
[underscore]
punctuation = { class = "chars", chars = "[]!" }
"#;
    let config = namer_config_from_str(toml).unwrap();
    let namer = create_namer(&config).unwrap();

    // Only the listed characters are stripped; the colon survives.
    let name = namer
        .generate_name(&fixtures::ticket("artf6", "[tag] keep:this!"), None)
        .unwrap();
    assert_eq!(name, "artf6_tag_keep:this");
}

#[test]
fn test_empty_chars_set_is_a_configuration_error() {
    let toml = r#"
[underscore]
punctuation = { class = "chars", chars = "" }
"#;
    let config = namer_config_from_str(toml).unwrap();
    let result = create_namer(&config);
    assert!(matches!(result, Err(NamerError::Configuration(_))));
}

#[test]
fn test_malformed_toml_is_a_configuration_error() {
    let result = namer_config_from_str("policy = ");
    assert!(matches!(result, Err(NamerError::Configuration(_))));
}

/// A host-written policy that prefixes names with the tracker name.
struct TrackerPrefixNamer;

impl TicketNamer for TrackerPrefixNamer {
    fn policy_name(&self) -> &'static str {
        "tracker_prefix"
    }

    fn generate_name(
        &self,
        ticket: &Ticket,
        base_dir: Option<&str>,
    ) -> Result<String, NamerError> {
        if ticket.id.is_empty() {
            return Err(NamerError::invalid_input("ticket id is required"));
        }
        let tracker = ticket.tracker.as_deref().unwrap_or("untracked");
        let name = format!("{tracker}_{}", ticket.id);
        Ok(match base_dir {
            Some(base) => format!("{base}/{name}"),
            None => name,
        })
    }
}

#[test]
fn test_custom_policy_injection_replaces_factory_product() {
    // A host that wants behavior the built-ins don't cover injects its own
    // trait object where create_namer's product would go.
    let namer: Box<dyn TicketNamer> = Box::new(TrackerPrefixNamer);

    let ticket = fixtures::tracked_ticket("artf7", "whatever", 99);
    let name = namer.generate_name(&ticket, Some("/data")).unwrap();
    assert_eq!(name, "/data/defects_artf7");
}

#[test]
fn test_mock_namer_records_host_calls() {
    let namer = MockNamer::new();
    namer.set_canned_name("canned");

    let ticket = fixtures::ticket("artf8", "a title");
    let name = namer.generate_name(&ticket, None).unwrap();

    assert_eq!(name, "canned");
    assert_eq!(namer.call_count(), 1);
    assert_eq!(namer.recorded_calls()[0].ticket.id, "artf8");
}

#[test]
fn test_host_falls_back_to_id_only_on_failure() {
    // The download orchestrator's documented recovery: if the configured
    // policy fails, retry with the id-only policy.
    let primary = MockNamer::new();
    primary.set_next_error(NamerError::encoding("cannot normalize title"));

    let config = namer_config_from_str(r#"policy = "id_only""#).unwrap();
    let fallback = create_namer(&config).unwrap();

    let ticket = fixtures::ticket("artf9", "a title");
    let name = match primary.generate_name(&ticket, None) {
        Ok(name) => name,
        Err(_) => fallback.generate_name(&ticket, None).unwrap(),
    };
    assert_eq!(name, "artf9");
}
