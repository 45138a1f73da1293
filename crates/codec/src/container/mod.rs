//! Container Factory: turns a container kind (or a name for one) into a
//! fresh, empty, mutable container.
//!
//! | Requested kind        | Built as    | Unrecognized name in the family |
//! |-----------------------|-------------|---------------------------------|
//! | sorted-unique set     | `BTreeSet`  | `HashSet`                       |
//! | ordered-unique set    | `IndexSet`  | `HashSet`                       |
//! | unordered-unique set  | `HashSet`   |                                 |
//! | linked list           | `LinkedList`| `Vec`                           |
//! | random-access list    | `Vec`       |                                 |
//! | sorted map            | `BTreeMap`  | `HashMap`                       |
//! | concurrent-safe map   | `DashMap`   | `HashMap`                       |
//! | insertion-ordered map | `IndexMap`  | `HashMap`                       |
//! | unordered map         | `HashMap`   |                                 |

mod collection;
mod kind;
mod map;

pub use collection::Collection;
pub use kind::{CollectionKind, ContainerKind, MapKind};
pub use map::MapValue;

pub(crate) use kind::base_name;

use crate::value::Value;

/// An empty container produced by the factory
#[derive(Debug, Clone)]
pub enum Container {
    Collection(Collection),
    Map(MapValue),
}

impl Container {
    pub fn kind(&self) -> ContainerKind {
        match self {
            Self::Collection(collection) => ContainerKind::Collection(collection.kind()),
            Self::Map(map) => ContainerKind::Map(map.kind()),
        }
    }

    pub fn into_value(self) -> Value {
        match self {
            Self::Collection(collection) => Value::Collection(collection),
            Self::Map(map) => Value::Map(map),
        }
    }
}

/// Build an empty container of the given kind
pub fn instantiate(kind: ContainerKind) -> Container {
    match kind {
        ContainerKind::Collection(kind) => Container::Collection(Collection::new(kind)),
        ContainerKind::Map(kind) => Container::Map(MapValue::new(kind)),
    }
}

/// Build an empty container for a container type name, if it names one
pub fn instantiate_named(name: &str) -> Option<Container> {
    ContainerKind::from_name(name).map(instantiate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("std::collections::BTreeSet", ContainerKind::Collection(CollectionKind::SortedSet))]
    #[case("alloc::collections::btree::set::BTreeSet<u32>", ContainerKind::Collection(CollectionKind::SortedSet))]
    #[case("java.util.TreeSet", ContainerKind::Collection(CollectionKind::SortedSet))]
    #[case("indexmap::IndexSet", ContainerKind::Collection(CollectionKind::OrderedSet))]
    #[case("java.util.LinkedHashSet", ContainerKind::Collection(CollectionKind::OrderedSet))]
    #[case("std::collections::HashSet", ContainerKind::Collection(CollectionKind::UnorderedSet))]
    #[case("std::collections::LinkedList", ContainerKind::Collection(CollectionKind::LinkedList))]
    #[case("std::vec::Vec", ContainerKind::Collection(CollectionKind::List))]
    #[case("java.util.ArrayList", ContainerKind::Collection(CollectionKind::List))]
    #[case("std::collections::BTreeMap", ContainerKind::Map(MapKind::Sorted))]
    #[case("java.util.TreeMap", ContainerKind::Map(MapKind::Sorted))]
    #[case("dashmap::DashMap", ContainerKind::Map(MapKind::Concurrent))]
    #[case("java.util.concurrent.ConcurrentHashMap", ContainerKind::Map(MapKind::Concurrent))]
    #[case("indexmap::IndexMap", ContainerKind::Map(MapKind::InsertionOrdered))]
    #[case("java.util.LinkedHashMap", ContainerKind::Map(MapKind::InsertionOrdered))]
    #[case(" std::collections::HashMap ", ContainerKind::Map(MapKind::Unordered))]
    fn test_known_names(#[case] name: &str, #[case] expected: ContainerKind) {
        assert_eq!(ContainerKind::from_name(name), Some(expected));
        assert_eq!(instantiate_named(name).map(|c| c.kind()), Some(expected));
    }

    #[rstest]
    #[case("acme::CopyOnWriteArraySet", ContainerKind::Collection(CollectionKind::UnorderedSet))]
    #[case("acme::SkipList", ContainerKind::Collection(CollectionKind::List))]
    #[case("std::collections::VecDeque", ContainerKind::Collection(CollectionKind::List))]
    #[case("acme::IdentityHashMap", ContainerKind::Map(MapKind::Unordered))]
    fn test_unrecognized_names_fall_back_to_family_default(
        #[case] name: &str,
        #[case] expected: ContainerKind,
    ) {
        assert_eq!(ContainerKind::from_name(name), Some(expected));
    }

    #[rstest]
    #[case("acme::Account")]
    #[case("")]
    #[case("   ")]
    #[case("String")]
    #[case("List")]
    #[case("Set")]
    #[case("Vec")]
    #[case("Map")]
    #[case("AllowList")]
    #[case("DataSet")]
    #[case("SiteMap")]
    #[case("TreeSet")]
    #[case(" BTreeSet<u32> ")]
    #[case("::List")]
    #[case("acme::")]
    fn test_non_container_names(#[case] name: &str) {
        assert_eq!(ContainerKind::from_name(name), None);
        assert!(instantiate_named(name).is_none());
    }

    #[test]
    fn test_instantiated_containers_are_empty() {
        for kind in CollectionKind::ALL {
            let container = instantiate(ContainerKind::Collection(kind));
            assert_eq!(container.kind(), ContainerKind::Collection(kind));
            assert!(matches!(container, Container::Collection(c) if c.is_empty()));
        }
        for kind in MapKind::ALL {
            let container = instantiate(ContainerKind::Map(kind));
            assert_eq!(container.kind(), ContainerKind::Map(kind));
            assert!(matches!(container, Container::Map(m) if m.is_empty()));
        }
    }

    #[test]
    fn test_wire_names_resolve_to_themselves() {
        for kind in CollectionKind::ALL {
            assert_eq!(
                ContainerKind::from_name(kind.wire_name()),
                Some(ContainerKind::Collection(kind))
            );
        }
        for kind in MapKind::ALL {
            assert_eq!(ContainerKind::from_name(kind.wire_name()), Some(ContainerKind::Map(kind)));
        }
    }
}
