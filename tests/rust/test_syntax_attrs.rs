use super::*;

#[test]
fn test_a_list_empty() {
    assert_eq!(a_list(None, NONE), "");
}

#[test]
fn test_attr_list_empty() {
    assert_eq!(attr_list(None, NONE), "");
    assert_eq!(attr_list(None, &UnorderedAttributes::new()), "");
}

#[test]
fn test_attr_list_label_first() {
    assert_eq!(
        attr_list(Some("Hello World"), &[("color", "red")]),
        " [label=\"Hello World\" color=red]"
    );
}

#[test]
fn test_slice_keeps_order() {
    assert_eq!(
        a_list(None, &[("spam", "0"), ("ham", "1"), ("eggs", "2")]),
        "spam=0 ham=1 eggs=2"
    );
}

#[test]
fn test_hashmap_sorted() {
    let mut attrs = HashMap::new();
    attrs.insert("spam", "0");
    attrs.insert("ham", "1");
    attrs.insert("eggs", "2");
    assert_eq!(a_list(None, &attrs), "eggs=2 ham=1 spam=0");
}

#[test]
fn test_btreemap_sorted() {
    let attrs: BTreeMap<String, String> = [("b", "2"), ("a", "1")]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    assert_eq!(a_list(None, &attrs), "a=1 b=2");
}

#[test]
fn test_ordered_attributes_keep_insertion_order() {
    let attrs = OrderedAttributes::new()
        .with("shape", "box")
        .with("color", "blue")
        .with("arrowhead", "none");
    assert_eq!(a_list(None, &attrs), "shape=box color=blue arrowhead=none");
}

#[test]
fn test_ordered_attributes_replace_in_place() {
    let mut attrs = OrderedAttributes::new();
    attrs.set("a", "1").set("b", "2").set("a", "3");
    assert_eq!(attrs.len(), 2);
    assert_eq!(attrs.get("a"), Some("3"));
    assert_eq!(a_list(None, &attrs), "a=3 b=2");
}

#[test]
fn test_unordered_attributes_sorted() {
    let attrs: UnorderedAttributes = [("z", "1"), ("m", "2"), ("a", "3")].into_iter().collect();
    assert_eq!(a_list(None, &attrs), "a=3 m=2 z=1");
    assert_eq!(attrs.get("m"), Some("2"));
    assert!(!attrs.is_empty());
}

#[test]
fn test_values_and_keys_quoted() {
    assert_eq!(
        a_list(None, &[("label", "two words"), ("fontname", "node")]),
        "label=\"two words\" fontname=\"node\""
    );
}

#[test]
fn test_html_value_untouched() {
    assert_eq!(
        attr_list(None, &[("label", "<<i>x</i>>")]),
        " [label=<<i>x</i>>]"
    );
}

#[test]
fn test_rendering_is_deterministic() {
    let mut attrs = HashMap::new();
    for (k, v) in [("k3", "c"), ("k1", "a"), ("k2", "b"), ("k0", "z")] {
        attrs.insert(k.to_string(), v.to_string());
    }
    let first = attr_list(None, &attrs);
    for _ in 0..10 {
        assert_eq!(attr_list(None, &attrs), first);
    }
    assert_eq!(first, " [k0=z k1=a k2=b k3=c]");
}
