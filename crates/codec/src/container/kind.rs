//! Container kinds and the names they answer to on the wire

/// Concrete semantics of a sequence container
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CollectionKind {
    /// Index-addressable sequence (`Vec`), the default
    List,
    /// Doubly-linked sequence (`LinkedList`)
    LinkedList,
    /// No ordering guarantee, no duplicates (`HashSet`)
    UnorderedSet,
    /// Insertion order preserved, no duplicates (`IndexSet`)
    OrderedSet,
    /// Natural ordering, no duplicates (`BTreeSet`)
    SortedSet,
}

/// Concrete semantics of a string-keyed map
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MapKind {
    /// No ordering guarantee (`HashMap`), the default
    Unordered,
    /// Iteration follows insertion order (`IndexMap`)
    InsertionOrdered,
    /// Keys in natural order (`BTreeMap`)
    Sorted,
    /// Safe for concurrent mutation (`DashMap`)
    Concurrent,
}

/// Any container kind the factory can build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    Collection(CollectionKind),
    Map(MapKind),
}

impl Default for CollectionKind {
    fn default() -> Self {
        Self::List
    }
}

impl Default for MapKind {
    fn default() -> Self {
        Self::Unordered
    }
}

impl CollectionKind {
    pub const ALL: [CollectionKind; 5] = [
        Self::List,
        Self::LinkedList,
        Self::UnorderedSet,
        Self::OrderedSet,
        Self::SortedSet,
    ];

    /// Canonical name written when this kind is named on the wire
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::List => "std::vec::Vec",
            Self::LinkedList => "std::collections::LinkedList",
            Self::UnorderedSet => "std::collections::HashSet",
            Self::OrderedSet => "indexmap::IndexSet",
            Self::SortedSet => "std::collections::BTreeSet",
        }
    }

    /// Whether the kind rejects duplicate elements
    pub const fn is_set(self) -> bool {
        matches!(self, Self::UnorderedSet | Self::OrderedSet | Self::SortedSet)
    }
}

impl MapKind {
    pub const ALL: [MapKind; 4] = [
        Self::Unordered,
        Self::InsertionOrdered,
        Self::Sorted,
        Self::Concurrent,
    ];

    /// Canonical name written when this kind is named on the wire
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::Unordered => "std::collections::HashMap",
            Self::InsertionOrdered => "indexmap::IndexMap",
            Self::Sorted => "std::collections::BTreeMap",
            Self::Concurrent => "dashmap::DashMap",
        }
    }
}

impl ContainerKind {
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::Collection(kind) => kind.wire_name(),
            Self::Map(kind) => kind.wire_name(),
        }
    }

    /// Resolve a fully-qualified container type name written by any producer.
    ///
    /// Generic arguments are ignored, so
    /// `alloc::collections::btree::set::BTreeSet<u32>` and `java.util.TreeSet`
    /// both name the sorted set. A name without a module or package path
    /// (`List`, `AllowList`) is never a container: such strings are ordinary
    /// data in a legacy array. Qualified names outside the known table still
    /// resolve to their family default when the family is evident from the
    /// last segment (`...Set`, `...List`, `...Map`).
    pub fn from_name(name: &str) -> Option<Self> {
        let simple = qualified_simple_name(base_name(name))?;
        known_kind(simple).or_else(|| family_default(simple))
    }
}

/// Strip whitespace and generic arguments
pub(crate) fn base_name(name: &str) -> &str {
    let name = name.trim();
    name.split('<').next().unwrap_or(name).trim_end()
}

/// Last path segment of a qualified name, `None` for an unqualified one
fn qualified_simple_name(name: &str) -> Option<&str> {
    let (path, simple) = name.rsplit_once(['.', ':', '$'])?;
    let path = path.trim_end_matches([':', '.', '$']);
    (!path.is_empty() && !simple.is_empty()).then_some(simple)
}

fn known_kind(simple: &str) -> Option<ContainerKind> {
    use CollectionKind as C;
    use ContainerKind::{Collection, Map};
    use MapKind as M;

    let kind = match simple {
        "Vec" | "List" | "ArrayList" | "Collection" => Collection(C::List),
        "LinkedList" => Collection(C::LinkedList),
        "HashSet" | "Set" => Collection(C::UnorderedSet),
        "IndexSet" | "LinkedHashSet" => Collection(C::OrderedSet),
        "BTreeSet" | "TreeSet" | "SortedSet" | "NavigableSet" => Collection(C::SortedSet),
        "HashMap" | "Map" => Map(M::Unordered),
        "IndexMap" | "LinkedHashMap" => Map(M::InsertionOrdered),
        "BTreeMap" | "TreeMap" | "SortedMap" | "NavigableMap" => Map(M::Sorted),
        "DashMap" | "ConcurrentHashMap" | "ConcurrentMap" => Map(M::Concurrent),
        _ => return None,
    };
    Some(kind)
}

fn family_default(simple: &str) -> Option<ContainerKind> {
    if simple.ends_with("Set") {
        Some(ContainerKind::Collection(CollectionKind::UnorderedSet))
    } else if simple.ends_with("List") || simple.ends_with("Vec") || simple.ends_with("Deque") {
        Some(ContainerKind::Collection(CollectionKind::List))
    } else if simple.ends_with("Map") {
        Some(ContainerKind::Map(MapKind::Unordered))
    } else {
        None
    }
}
