//! The types shared by the graph store and the algorithms.
//!
//! Every algorithm reads the graph through the same two types:
//! [`Neighbor`] is an entry of an adjacency list and [`Edge`] is an undirected edge as reported by
//! [`WeightedGraph::edges`](crate::implementation::WeightedGraph::edges).

use std::fmt::Debug;
use std::ops::Add;

mod weight_implementations;

/// A weight-type usable by all algorithms of this crate.
///
/// Besides addition and comparison, a weight type needs a sentinel for unreachable distances.
/// Floating point types use their IEEE infinity, integer types use their maximum value.
///
/// Since the sentinel is a regular value of the type, an edge weighted with [`Weight::infinity`]
/// cannot be told apart from a missing edge, and shortest path algorithms never use it.
/// Likewise, integer path sums that exceed the range of the type are reported as unreachable.
pub trait Weight: Copy + PartialOrd + Add<Output = Self> + Debug {
    /// The zero value of this type.
    fn zero() -> Self;

    /// The infinity value of this type.
    fn infinity() -> Self;

    /// Returns true if this weight is not the infinity sentinel.
    fn is_finite_weight(self) -> bool {
        self != Self::infinity()
    }

    /// Adds `other` to `self` without overflowing.
    ///
    /// If either summand is infinite, the sum is infinite.
    /// Integer sums clamp to the bounds of the type, so a sum above the maximum becomes infinite.
    fn saturating_weight_add(self, other: Self) -> Self;
}

/// An entry of an adjacency list: the vertex on the other end of an edge and the edge's weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Neighbor<VertexLabel, WeightType> {
    /// The neighboring vertex.
    pub vertex: VertexLabel,
    /// The weight of the edge leading to the neighbor.
    pub weight: WeightType,
}

/// An undirected weighted edge.
///
/// Edges reported by the graph are canonical, i.e. `from <= to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge<VertexLabel, WeightType> {
    /// The smaller endpoint.
    pub from: VertexLabel,
    /// The larger endpoint.
    pub to: VertexLabel,
    /// The weight of the edge.
    pub weight: WeightType,
}

impl<VertexLabel: Ord, WeightType> Edge<VertexLabel, WeightType> {
    /// Creates a new edge, ordering the endpoints such that `from <= to`.
    pub fn new(a: VertexLabel, b: VertexLabel, weight: WeightType) -> Self {
        if a <= b {
            Self {
                from: a,
                to: b,
                weight,
            }
        } else {
            Self {
                from: b,
                to: a,
                weight,
            }
        }
    }
}

impl<VertexLabel, WeightType> From<(VertexLabel, VertexLabel, WeightType)>
    for Edge<VertexLabel, WeightType>
where
    VertexLabel: Ord,
{
    fn from((a, b, weight): (VertexLabel, VertexLabel, WeightType)) -> Self {
        Self::new(a, b, weight)
    }
}

/// Sums the weights of the given edges, starting from zero.
/// Integer sums saturate like [`Weight::saturating_weight_add`].
pub fn total_weight<'a, VertexLabel: 'a, WeightType: 'a + Weight>(
    edges: impl IntoIterator<Item = &'a Edge<VertexLabel, WeightType>>,
) -> WeightType {
    edges
        .into_iter()
        .fold(WeightType::zero(), |sum, edge| {
            sum.saturating_weight_add(edge.weight)
        })
}

#[cfg(test)]
mod tests {
    use super::{total_weight, Edge, Weight};

    #[test]
    fn test_edge_is_canonical() {
        let edge = Edge::new("B", "A", 3);
        assert_eq!(edge.from, "A");
        assert_eq!(edge.to, "B");
        assert_eq!(Edge::from(("A", "B", 3)), edge);
    }

    #[test]
    fn test_saturating_weight_add() {
        assert_eq!(i32::infinity().saturating_weight_add(5), i32::infinity());
        assert_eq!(3i32.saturating_weight_add(-5), -2);
        assert_eq!(0u32.saturating_weight_add(7), 7);
        assert_eq!(2.5f64.saturating_weight_add(0.5), 3.0);
        assert!(f64::infinity().saturating_weight_add(-7.0).is_infinite());
        assert!(!u8::infinity().is_finite_weight());
        assert!(0u8.is_finite_weight());
    }

    #[test]
    fn test_saturating_weight_add_clamps_integers() {
        assert_eq!(200u8.saturating_weight_add(100), u8::infinity());
        assert_eq!(200u8.saturating_weight_add(55), u8::infinity());
        assert_eq!(200u8.saturating_weight_add(54), 254);
        assert_eq!(100i8.saturating_weight_add(100), i8::infinity());
        assert_eq!((-100i8).saturating_weight_add(-100), i8::MIN);
        assert_eq!(i64::MIN.saturating_weight_add(-1), i64::MIN);
        assert_eq!(i32::infinity().saturating_weight_add(i32::MIN), i32::infinity());
        assert_eq!(u128::MAX.saturating_weight_add(0), u128::infinity());
    }

    #[test]
    fn test_total_weight() {
        let edges = vec![Edge::new(1, 2, 4), Edge::new(2, 3, -1)];
        assert_eq!(total_weight(&edges), 3);
        let no_edges: Vec<Edge<u8, f32>> = Vec::new();
        assert_eq!(total_weight(&no_edges), 0.0);
        let heavy = vec![Edge::new(1, 2, 200u8), Edge::new(2, 3, 100)];
        assert_eq!(total_weight(&heavy), u8::infinity());
    }
}
