use super::Cost;

use std::sync::Arc;

/// A sequence of Nodes together with the total Cost of walking it.
///
/// The Path is cheap to clone and to reverse: both share the underlying storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path<P> {
    path: Arc<[P]>,
    cost: Cost,
    is_reversed: bool,
}

impl<P> Path<P> {
    /// Creates a new Path from the given sequence of Nodes and its total Cost.
    pub fn new(path: Vec<P>, cost: Cost) -> Path<P> {
        Path {
            path: path.into(),
            cost,
            is_reversed: false,
        }
    }

    /// Creates a new Path by copying the given Nodes.
    pub fn from_slice(path: &[P], cost: Cost) -> Path<P>
    where
        P: Clone,
    {
        Path {
            path: path.into(),
            cost,
            is_reversed: false,
        }
    }

    /// The total Cost of the Path
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// The number of Nodes in the Path, including both ends.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// `true` if the Path has no Nodes at all.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// The first Node of the Path, if any.
    pub fn first(&self) -> Option<&P> {
        self.iter().next()
    }

    /// The last Node of the Path, if any.
    pub fn last(&self) -> Option<&P> {
        self.iter().next_back()
    }

    /// Returns the same Path walked in the opposite direction.
    ///
    /// Steps on the Grid are symmetric, so the Cost stays the same.
    pub fn reversed(&self) -> Path<P> {
        Path {
            path: self.path.clone(),
            cost: self.cost,
            is_reversed: !self.is_reversed,
        }
    }

    /// Returns an Iterator over the Path
    pub fn iter(&self) -> Iter<P> {
        Iter {
            iter: self.path.iter(),
            reversed: self.is_reversed,
        }
    }

    /// Copies the Nodes into a Vec, in walking order.
    pub fn to_vec(&self) -> Vec<P>
    where
        P: Clone,
    {
        self.iter().cloned().collect()
    }
}

use std::ops::Index;

impl<P> Index<usize> for Path<P> {
    type Output = P;
    fn index(&self, index: usize) -> &P {
        let index = if self.is_reversed {
            self.path.len() - index - 1
        } else {
            index
        };
        &self.path[index]
    }
}

/// Iterator over the Nodes of a [`Path`], returned by [`Path::iter`].
#[derive(Debug)]
pub struct Iter<'a, P> {
    iter: std::slice::Iter<'a, P>,
    reversed: bool,
}

impl<'a, P> Iterator for Iter<'a, P> {
    type Item = &'a P;
    fn next(&mut self) -> Option<Self::Item> {
        if self.reversed {
            self.iter.next_back()
        } else {
            self.iter.next()
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<P> DoubleEndedIterator for Iter<'_, P> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.reversed {
            self.iter.next()
        } else {
            self.iter.next_back()
        }
    }
}
impl<P> ExactSizeIterator for Iter<'_, P> {}
impl<P> std::iter::FusedIterator for Iter<'_, P> {}

impl<P: PartialEq> PartialEq<Vec<P>> for Path<P> {
    fn eq(&self, rhs: &Vec<P>) -> bool {
        // slice equality would ignore the direction
        self.len() == rhs.len() && self.iter().zip(rhs.iter()).all(|(a, b)| a == b)
    }
}

impl<'a, P: PartialEq> PartialEq<&'a [P]> for Path<P> {
    fn eq(&self, rhs: &&'a [P]) -> bool {
        self.len() == rhs.len() && self.iter().zip(rhs.iter()).all(|(a, b)| a == b)
    }
}

use std::cmp::Ordering;

impl<P: Eq> Ord for Path<P> {
    fn cmp(&self, other: &Path<P>) -> Ordering {
        self.cost.cmp(&other.cost)
    }
}

impl<P: PartialEq> PartialOrd for Path<P> {
    fn partial_cmp(&self, other: &Path<P>) -> Option<Ordering> {
        Some(self.cost.cmp(&other.cost))
    }
}

use std::fmt;
impl<P: fmt::Display> fmt::Display for Path<P> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "Path[Cost = {}]: ", self.cost)?;
        let mut iter = self.iter();
        match iter.next() {
            None => write!(fmt, "<empty>"),
            Some(first) => {
                write!(fmt, "{}", first)?;
                for p in iter {
                    write!(fmt, " -> {}", p)?;
                }
                Ok(())
            }
        }
    }
}
