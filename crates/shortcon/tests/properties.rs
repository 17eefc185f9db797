use indexmap::IndexMap;
use proptest::collection::{btree_set, vec};
use proptest::prelude::*;
use serde_json::Value;
use shortcon::{
    cons, cons_args, cons_kw, constants, enumcons, ConError, ConsArgs, ConstantsConfig, EnumOptions,
};

fn unique_names(max: usize) -> impl Strategy<Value = Vec<String>> {
    btree_set("[A-Za-z_][A-Za-z0-9_]{0,8}", 1..max).prop_map(|set| set.into_iter().collect())
}

proptest! {
    #[test]
    fn identity_preserves_length_and_order(names in unique_names(12)) {
        let text = names.join(" ");
        for attrs in [text.clone(), format!("  {}\n", names.join("\t"))] {
            let built = constants(attrs, &ConstantsConfig::<Value>::default()).unwrap();
            prop_assert_eq!(built.len(), names.len());
            let pairs: Vec<(String, String)> = built
                .iter()
                .map(|(name, value)| (name.to_string(), value.as_str().unwrap().to_string()))
                .collect();
            let expected: Vec<(String, String)> =
                names.iter().map(|name| (name.clone(), name.clone())).collect();
            prop_assert_eq!(pairs, expected);
        }
        let seq = cons(names.clone()).unwrap();
        prop_assert_eq!(seq.names().collect::<Vec<_>>(), names.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn mapping_round_trips(names in unique_names(12), seed in vec(any::<i32>(), 12)) {
        let map: IndexMap<String, i32> = names.iter().cloned().zip(seed).collect();
        let built = cons_kw(map.clone()).unwrap();
        prop_assert_eq!(built.to_map(), map.clone());
        let rebuilt = cons_kw(built.to_map()).unwrap();
        prop_assert_eq!(rebuilt, built);
    }

    #[test]
    fn enumeration_is_affine(names in unique_names(12), start in -1000i64..1000, step in -100i64..100) {
        let built = enumcons([names.join(" ")], &EnumOptions::new(start, step)).unwrap();
        for (index, (_, value)) in built.iter().enumerate() {
            prop_assert_eq!(*value, start + step * index as i64);
        }
    }

    #[test]
    fn names_and_keywords_never_mix(names in unique_names(4), kws in unique_names(4)) {
        let args = ConsArgs::new().names(names).kws(kws.into_iter().map(|k| (k.clone(), k)));
        let err = cons_args(args).unwrap_err();
        prop_assert!(matches!(err, ConError::MutuallyExclusiveInput(_)));
    }
}
