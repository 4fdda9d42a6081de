// tests/compose_test.rs
use build_version::config::Defaults;
use build_version::{
    compose, parse, ComposeError, ComposeRequest, Field, ReleaseType, ResolutionRule, Template,
    Version,
};

fn template(name: &str) -> Template {
    name.parse().expect("Known template name")
}

fn versions() -> Vec<Version> {
    [
        "1.2.3",
        "v1.2.3",
        "1.2.3-rc",
        "v0.9.12-rc",
        "1.2.3-beta",
        "release-1.2.3-beta-2",
        "1.2.3-abcdef",
        "v1.2.3-0123456789abcdef0123456789abcdef01234567",
        "1.2.3-rc-abc123f",
        "v1.2.3-rc-abc123f",
        "1.2.3-pre-release-1234567",
        "v7.0.0-ABCDEF-abcdef",
    ]
    .iter()
    .map(|s| parse(s).expect("Fixture should parse"))
    .collect()
}

// parse(compose(c, t)) == c for every template t that c satisfies
#[test]
fn test_round_trip_through_satisfied_templates() {
    let defaults = Defaults::default();
    for version in versions() {
        let satisfied: Vec<Template> = Template::ALL
            .iter()
            .copied()
            .filter(|t| t.matches(&version))
            .collect();
        assert_eq!(satisfied.len(), 1, "exactly one template fits {}", version);

        let request = ComposeRequest::from_version(&version).template(satisfied[0]);
        let composed = compose(&request, &defaults).expect("Should compose");
        assert_eq!(parse(&composed.version).unwrap(), version);
        assert!(composed.warnings.is_empty(), "{:?}", composed.warnings);
    }
}

#[test]
fn test_hash_only_infers_dev_template() {
    let composed = compose(
        &ComposeRequest::new(1, 2, 3).hash("abc1234"),
        &Defaults::default(),
    )
    .unwrap();
    assert_eq!(composed.template, template("vX.YY.Z-HASH"));
    assert_eq!(composed.version, "v1.2.3-abc1234");
}

#[test]
fn test_priority_template_over_type() {
    let request = ComposeRequest::new(1, 2, 3)
        .template(template("X.YY.Z-rc"))
        .release_type(ReleaseType::Dev)
        .hash("abc1234");
    let composed = compose(&request, &Defaults::default()).unwrap();
    assert_eq!(composed.version, "1.2.3-rc");
    assert_eq!(composed.rule, ResolutionRule::ExplicitTemplate);
}

#[test]
fn test_priority_type_over_inferred() {
    let request = ComposeRequest::new(1, 2, 3)
        .release_type(ReleaseType::Dev)
        .suffix("rc")
        .hash("abc1234");
    let composed = compose(&request, &Defaults::default()).unwrap();
    assert_eq!(composed.version, "v1.2.3-abc1234");
    assert_eq!(composed.rule, ResolutionRule::ExplicitType);
}

#[test]
fn test_priority_inferred_over_default() {
    let defaults = Defaults {
        template: template("vX.YY.Z-rc"),
        ..Defaults::default()
    };
    let composed = compose(&ComposeRequest::new(1, 2, 3).exclude_prefix(), &defaults).unwrap();
    assert_eq!(composed.version, "1.2.3");
    assert_eq!(composed.rule, ResolutionRule::Inferred);

    let fallback = compose(&ComposeRequest::new(1, 2, 3), &defaults).unwrap();
    assert_eq!(fallback.version, "v1.2.3-rc");
    assert_eq!(fallback.rule, ResolutionRule::Default);
}

#[test]
fn test_default_prefix_is_configurable() {
    let defaults = Defaults {
        prefix: "ver".to_string(),
        ..Defaults::default()
    };
    let composed = compose(
        &ComposeRequest::new(1, 0, 0).release_type(ReleaseType::Rc),
        &defaults,
    )
    .unwrap();
    assert_eq!(composed.version, "ver1.0.0-rc");
}

#[test]
fn test_failures_are_distinct() {
    let defaults = Defaults::default();
    let cases: Vec<(ComposeRequest, ComposeError)> = vec![
        (
            ComposeRequest::default(),
            ComposeError::MissingComponent(Field::Major),
        ),
        (
            ComposeRequest::new(1, 2, 3).release_type(ReleaseType::RcDev),
            ComposeError::MissingHash {
                template: template("vX.YY.Z-rc-HASH"),
            },
        ),
        (
            ComposeRequest::new(1, 2, 3).template(template("X.YY.Z-<suffix>-HASH")).hash("abcdef1"),
            ComposeError::MissingSuffix {
                template: template("X.YY.Z-<suffix>-HASH"),
            },
        ),
        (
            ComposeRequest::new(1, 2, 3).hash("xyz1234"),
            ComposeError::InvalidComponent {
                component: Field::Hash,
                value: "xyz1234".to_string(),
            },
        ),
    ];
    for (request, expected) in cases {
        assert_eq!(compose(&request, &defaults), Err(expected));
    }
}

#[test]
fn test_rc_directive_with_hash_is_legal() {
    let composed = compose(
        &ComposeRequest::new(1, 2, 3)
            .release_type(ReleaseType::Rc)
            .suffix("rc")
            .template(template("vX.YY.Z-rc-HASH"))
            .hash("abc1234"),
        &Defaults::default(),
    )
    .unwrap();
    assert_eq!(composed.version, "v1.2.3-rc-abc1234");
}

#[test]
fn test_custom_suffix_with_rc_type_conflicts() {
    let result = compose(
        &ComposeRequest::new(1, 2, 3)
            .suffix("beta")
            .release_type(ReleaseType::Rc),
        &Defaults::default(),
    );
    assert!(matches!(result, Err(ComposeError::SuffixConflict { .. })));
}
