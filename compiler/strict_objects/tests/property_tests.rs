//! Property-based tests for module objects and attribute dictionaries.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use proptest::prelude::*;
use strict_ir::StringInterner;
use strict_objects::{BuiltinTypes, DictType, StrictInstance, StrictModuleObject, Value};

/// Dotted module names such as `os`, `os.path`, `a_b.c1`.
fn module_name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z_][a-z0-9_]{0,8}(\\.[a-z_][a-z0-9_]{0,8}){0,3}")
        .expect("valid regex")
}

proptest! {
    #[test]
    fn module_name_is_returned_verbatim(name in module_name_strategy()) {
        let builtins = BuiltinTypes::new();
        let module = StrictModuleObject::make_strict_module(builtins.module.clone(), name.clone(), None);
        prop_assert_eq!(module.module_name(), name.as_str());
        prop_assert!(module.dict().is_empty());
    }

    #[test]
    fn display_name_is_deterministic_and_mentions_name(name in module_name_strategy()) {
        let builtins = BuiltinTypes::new();
        let module = StrictModuleObject::make_strict_module(builtins.module.clone(), name.clone(), None);
        let first = module.display_name();
        prop_assert_eq!(&first, &module.display_name());
        prop_assert!(first.contains(&name));
    }

    #[test]
    fn different_names_are_distinguishable(
        a in module_name_strategy(),
        b in module_name_strategy(),
    ) {
        prop_assume!(a != b);
        let builtins = BuiltinTypes::new();
        let ma = StrictModuleObject::make_strict_module(builtins.module.clone(), a, None);
        let mb = StrictModuleObject::make_strict_module(builtins.module.clone(), b, None);
        prop_assert_ne!(ma.module_name(), mb.module_name());
    }

    #[test]
    fn dict_keys_follow_first_insertion(keys in prop::collection::vec("[a-e]", 0..20)) {
        let interner = StringInterner::new();
        let mut dict = DictType::new();
        let mut expected: Vec<String> = Vec::new();
        for (i, key) in keys.iter().enumerate() {
            dict.insert(interner.intern(key), Value::int(i64::try_from(i).unwrap()));
            if !expected.contains(key) {
                expected.push(key.clone());
            }
        }

        let actual: Vec<String> = dict.keys().map(|k| interner.lookup(k).to_owned()).collect();
        prop_assert_eq!(actual, expected);
        prop_assert_eq!(dict.len(), dict.iter().count());
    }
}
