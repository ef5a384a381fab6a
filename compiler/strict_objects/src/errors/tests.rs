use super::*;
use pretty_assertions::assert_eq;

#[test]
fn messages_match_python_wording() {
    assert_eq!(
        no_attribute("Point", "z").to_string(),
        "'Point' object has no attribute 'z'"
    );
    assert_eq!(
        no_module_attribute("os", "nope").to_string(),
        "module 'os' has no attribute 'nope'"
    );
    assert_eq!(
        inconsistent_mro("Bad").to_string(),
        "cannot create a consistent method resolution order (MRO) for type 'Bad'"
    );
}

#[test]
fn frozen_and_duplicate_messages() {
    assert_eq!(
        frozen_module("os", "sep").to_string(),
        "cannot modify attribute 'sep' of frozen module 'os'"
    );
    assert_eq!(
        frozen_object("Point", "x").to_string(),
        "cannot modify attribute 'x' of frozen 'Point' object"
    );
    assert_eq!(
        duplicate_module("os").to_string(),
        "module 'os' is already loaded"
    );
}

#[test]
fn factories_populate_structured_fields() {
    assert_eq!(
        frozen_module("json", "loads"),
        ObjectError::FrozenModule {
            module: "json".into(),
            attr: "loads".into(),
        }
    );
}
