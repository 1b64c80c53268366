/// An undirected door between two rooms.
///
/// `Edge::new(a, b)` and `Edge::new(b, a)` describe the same connection;
/// the field order only records how the door was supplied, which matters
/// for neighbor ordering in [`Graph`](crate::Graph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge<N> {
    pub a: N,
    pub b: N,
}

impl<N> Edge<N> {
    #[inline]
    pub const fn new(a: N, b: N) -> Self {
        Self { a, b }
    }
}

impl<N: PartialEq> Edge<N> {
    /// Whether this door joins `u` and `v`, in either direction.
    pub fn connects(&self, u: &N, v: &N) -> bool {
        (self.a == *u && self.b == *v) || (self.a == *v && self.b == *u)
    }

    /// Whether the door starts and ends in the same room.
    #[inline]
    pub fn is_loop(&self) -> bool {
        self.a == self.b
    }
}

impl<N> From<(N, N)> for Edge<N> {
    #[inline]
    fn from((a, b): (N, N)) -> Self {
        Self { a, b }
    }
}

impl<N> From<Edge<N>> for (N, N) {
    #[inline]
    fn from(e: Edge<N>) -> Self {
        (e.a, e.b)
    }
}

// Doors are written as two-element sequences: ["Hall", "Gallery"].

#[cfg(feature = "serde")]
impl<N: serde::Serialize> serde::Serialize for Edge<N> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (&self.a, &self.b).serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, N: serde::Deserialize<'de>> serde::Deserialize<'de> for Edge<N> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (a, b) = <(N, N)>::deserialize(deserializer)?;
        Ok(Edge { a, b })
    }
}
