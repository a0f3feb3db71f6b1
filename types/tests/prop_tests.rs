use proptest::prelude::*;

use consort_types::{ConfigTree, GroupId, NodeId};

proptest! {
    /// GroupId text form parses back to the same id.
    #[test]
    fn group_id_display_parses_back(id in any::<u16>()) {
        let parsed: GroupId = GroupId::new(id).to_string().parse().unwrap();
        prop_assert_eq!(parsed, GroupId::new(id));
    }

    /// Any string that parses as a GroupId is exactly its canonical form.
    #[test]
    fn group_id_parse_is_lossless(s in "[+-]?[0-9]{1,6}") {
        if let Ok(id) = s.parse::<GroupId>() {
            prop_assert_eq!(id.to_string(), s);
        }
    }

    /// NodeId hex form parses back to identical bytes.
    #[test]
    fn node_id_hex_parses_back(bytes in prop::array::uniform32(0u8..)) {
        let id = NodeId::new(bytes);
        let parsed: NodeId = id.to_hex().parse().unwrap();
        prop_assert_eq!(parsed.as_bytes(), &bytes);
    }

    /// Tables built from TOML keep their keys in document order.
    #[test]
    fn config_tree_keeps_key_order(keys in prop::collection::vec("[a-z]{1,8}", 1..10)) {
        let mut unique = Vec::new();
        for k in keys {
            if !unique.contains(&k) {
                unique.push(k);
            }
        }
        let doc: String = unique
            .iter()
            .enumerate()
            .map(|(i, k)| format!("{k} = {i}\n"))
            .collect();
        let tree = ConfigTree::from_toml_str(&doc).unwrap();
        let parsed: Vec<String> = tree.children().map(|(k, _)| k.to_string()).collect();
        prop_assert_eq!(parsed, unique);
    }
}
