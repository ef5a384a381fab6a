use super::*;
use crate::errors::ObjectError;
use pretty_assertions::assert_eq;

fn mro_names(ty: &TypeRef) -> Vec<&str> {
    std::iter::once(ty.name())
        .chain(ty.ancestors().iter().map(|t| t.name()))
        .collect()
}

#[test]
fn builtins_share_object_root() {
    let builtins = BuiltinTypes::new();
    assert_eq!(mro_names(&builtins.object), ["object"]);
    assert_eq!(mro_names(&builtins.module), ["module", "object"]);
    assert_eq!(mro_names(&builtins.bool_), ["bool", "int", "object"]);
    assert_eq!(builtins.module.module_name(), "builtins");
}

#[test]
fn subtype_checks_walk_ancestors() {
    let builtins = BuiltinTypes::new();
    assert!(builtins.bool_.is_subtype_of(&builtins.int));
    assert!(builtins.bool_.is_subtype_of(&builtins.object));
    assert!(builtins.int.is_subtype_of(&builtins.int));
    assert!(!builtins.int.is_subtype_of(&builtins.bool_));
    assert!(!builtins.module.is_subtype_of(&builtins.str_));
}

#[test]
fn diamond_linearizes_like_python() {
    let builtins = BuiltinTypes::new();
    let a = StrictType::make_subtype("A", "m", &builtins.object);
    let b = StrictType::make_subtype("B", "m", &a);
    let c = StrictType::make_subtype("C", "m", &a);

    let d = match StrictType::make_type("D", "m", vec![b, c.clone()]) {
        Ok(d) => d,
        Err(err) => panic!("diamond should linearize: {err}"),
    };

    assert_eq!(mro_names(&d), ["D", "B", "C", "A", "object"]);
    assert_eq!(d.bases().len(), 2);
    assert!(d.is_subtype_of(&c));
}

#[test]
fn inconsistent_bases_are_rejected() {
    let builtins = BuiltinTypes::new();
    let a = StrictType::make_subtype("A", "m", &builtins.object);
    let b = StrictType::make_subtype("B", "m", &a);

    let result = StrictType::make_type("Bad", "m", vec![a, b]);
    assert_eq!(
        result.err(),
        Some(ObjectError::InconsistentMro {
            type_name: "Bad".into()
        })
    );
}

#[test]
fn make_type_without_bases_has_no_ancestors() {
    let result = StrictType::make_type("Standalone", "m", Vec::new());
    assert!(result.is_ok_and(|t| t.ancestors().is_empty() && t.bases().is_empty()));
}

#[test]
fn display_and_debug() {
    let builtins = BuiltinTypes::new();
    assert_eq!(builtins.module.display_name(), "<class 'module'>");
    assert_eq!(
        format!("{:?}", builtins.bool_),
        "StrictType { name: \"bool\", module: \"builtins\", bases: [\"int\"] }"
    );
}
