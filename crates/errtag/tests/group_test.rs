//! Tests for error groups.

use errtag::{BoxError, Error, Group, MultiError, Tag};
use std::error::Error as StdError;

const FOO: Tag = Tag::new_static("foo");

#[test]
fn empty_group_is_no_error() {
    assert!(Group::new().err().is_none());

    let mut group = Group::new();
    group.add_opt(None::<BoxError>);
    group.add_opt(None::<&str>);
    assert!(group.is_empty());
    assert!(group.err().is_none());
}

#[test]
fn single_error_is_returned_unchanged() {
    let err = FOO.wrap("only");
    let mut group = Group::new();
    group.add(err.clone());

    let back = group.err().unwrap().downcast::<Error>().expect("same type");
    assert!(Error::ptr_eq(&back, &err));
}

#[test]
fn single_foreign_error_keeps_its_allocation() {
    let foreign: BoxError = Box::new(std::io::Error::other("disk full"));
    let original = (foreign.as_ref() as *const dyn StdError).cast::<()>();
    let mut group = Group::new();
    group.add_opt(None::<BoxError>);
    group.add(foreign);

    let back = group.err().unwrap();
    assert_eq!((back.as_ref() as *const dyn StdError).cast::<()>(), original);
}

#[test]
fn terse_joins_with_semicolons() {
    let mut group = Group::new();
    group.add("first");
    group.add("second");
    assert_eq!(group.len(), 2);

    let err = group.err().unwrap();
    assert_eq!(err.to_string(), "first; second");
}

#[test]
fn detailed_has_header_and_markers() {
    let mut group = Group::new();
    group.add(errtag::wrap("first"));
    group.add(errtag::wrap("second"));

    let detailed = format!("{:#}", group.err().unwrap());
    assert!(detailed.starts_with("group:"));
    assert!(detailed.contains("\n--- first"));
    assert!(detailed.contains("\n--- second"));
    assert!(detailed.find("--- first") < detailed.find("--- second"));
}

#[test]
fn detailed_indents_element_stacks() {
    let mut group = Group::new();
    group.add(FOO.wrap("first"));
    group.add("second");

    let detailed = format!("{:#}", group.err().unwrap());
    for line in detailed.lines().skip(1) {
        assert!(
            line.starts_with("--- ") || line.starts_with("    \t"),
            "unexpected line {line:?}"
        );
    }
    assert!(detailed.contains("\n--- foo: first\n    \t"));
    assert!(detailed.ends_with("\n--- second"));
}

#[test]
fn insertion_order_is_kept_without_dedup() {
    let group: Group = ["a", "b", "a"].into_iter().collect();
    assert_eq!(group.err().unwrap().to_string(), "a; b; a");
}

#[test]
fn extend_adds_in_order() {
    let mut group = Group::new();
    group.add("x");
    group.extend(vec![FOO.wrap("y"), FOO.wrap("z")]);
    assert_eq!(group.err().unwrap().to_string(), "x; foo: y; foo: z");
}

#[test]
fn multi_error_exposes_its_errors() {
    let mut group = Group::new();
    group.add("one");
    group.add("two");
    let err = group.err().unwrap();

    let multi = err.downcast_ref::<MultiError>().expect("multi-error");
    assert_eq!(multi.errors().len(), 2);
    assert_eq!(multi.errors()[1].to_string(), "two");
    assert!(multi.source().is_none());
}

#[test]
fn nested_group_marker_uses_terse_text() {
    let inner: Group = ["a", "b"].into_iter().collect();
    let mut outer = Group::new();
    outer.add(inner.err().unwrap());
    outer.add("c");

    let err = outer.err().unwrap();
    assert_eq!(err.to_string(), "a; b; c");
    assert_eq!(
        format!("{err:#}"),
        "group:\n--- a; b\n    group:\n    --- a\n    --- b\n--- c"
    );
}

#[test]
fn multi_error_can_be_tagged() {
    let mut group = Group::new();
    group.add("one");
    group.add("two");

    let err = FOO.wrap(group.err().unwrap());
    assert_eq!(err.to_string(), "foo: one; two");
    assert!(FOO.has(&err));
    assert!(errtag::unwrap(&err).is::<MultiError>());
}

#[test]
fn per_task_groups_merge() {
    let handles: Vec<_> = (0..3)
        .map(|i| {
            std::thread::spawn(move || {
                let mut group = Group::new();
                group.add(errtag::errorf!("task {}", i));
                group
            })
        })
        .collect();

    let mut merged = Group::new();
    for handle in handles {
        if let Some(err) = handle.join().unwrap().err() {
            merged.add(err);
        }
    }
    assert_eq!(merged.err().unwrap().to_string(), "task 0; task 1; task 2");
}
