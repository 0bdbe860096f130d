use std::fmt;

use thiserror::Error;

/// The error returned by fallible operations on graphs, union-find structures
/// and graph algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Error {
    /// A vertex or element index outside of `[0, bound)`.
    #[error("index {index} out of range (0..{bound})")]
    IndexOutOfRange { index: usize, bound: usize },

    /// A precondition on an argument was violated.
    #[error("invalid argument: {0}")]
    InvalidArgument(InvalidArgument),

    /// The graph is not bipartite, so there is no two-coloring to query.
    #[error("graph is not bipartite")]
    NotBipartite,
}

impl From<InvalidArgument> for Error {
    fn from(kind: InvalidArgument) -> Self {
        Error::InvalidArgument(kind)
    }
}

/// The violated precondition of an [`Error::InvalidArgument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidArgument {
    /// A count read from external input was negative.
    NegativeCount { what: &'static str, count: i64 },
    /// More edges were requested than the construction can hold.
    TooManyEdges { requested: usize, max: usize },
    /// Fewer edges were requested than the construction requires.
    NotEnoughEdges { requested: usize, min: usize },
    /// Fewer vertices were requested than the construction requires.
    NotEnoughVertices { requested: usize, min: usize },
    /// A probability outside of `[0, 1]`.
    Probability { p: OrderedProbability },
    /// Sum of degrees in a regular graph must be even.
    OddDegreeSum { vertex_count: usize, degree: usize },
    /// Sum of degrees in a regular graph does not fit into `usize`.
    DegreeSumOverflow { vertex_count: usize, degree: usize },
}

/// Bit representation of a probability so that [`InvalidArgument`] can be
/// `Eq` and `Hash`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OrderedProbability(u64);

impl OrderedProbability {
    pub fn new(p: f64) -> Self {
        Self(p.to_bits())
    }

    pub fn get(&self) -> f64 {
        f64::from_bits(self.0)
    }
}

impl fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidArgument::NegativeCount { what, count } => {
                write!(f, "number of {what} must be non-negative ({count} for 0+)")
            }
            InvalidArgument::TooManyEdges { requested, max } => {
                write!(f, "too many edges ({requested} for 0..={max})")
            }
            InvalidArgument::NotEnoughEdges { requested, min } => {
                write!(f, "not enough edges ({requested} for {min}+)")
            }
            InvalidArgument::NotEnoughVertices { requested, min } => {
                write!(f, "not enough vertices ({requested} for {min}+)")
            }
            InvalidArgument::Probability { p } => {
                write!(f, "not a valid probability ({} for 0.0..=1.0)", p.get())
            }
            InvalidArgument::OddDegreeSum {
                vertex_count,
                degree,
            } => write!(
                f,
                "vertex count times degree must be even ({vertex_count} * {degree})"
            ),
            InvalidArgument::DegreeSumOverflow {
                vertex_count,
                degree,
            } => write!(
                f,
                "vertex count times degree overflows ({vertex_count} * {degree})"
            ),
        }
    }
}
