//! Core types shared by the whole crate.

pub mod error;

pub use error::{Error, InvalidArgument};

/// Checks that `index` is a valid index into a collection of `bound` elements.
pub(crate) fn check_index(index: usize, bound: usize) -> Result<usize, Error> {
    if index < bound {
        Ok(index)
    } else {
        Err(Error::IndexOutOfRange { index, bound })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn check_index_bounds() {
        assert_eq!(check_index(0, 1), Ok(0));
        assert_eq!(check_index(4, 5), Ok(4));
        assert_matches!(
            check_index(5, 5),
            Err(Error::IndexOutOfRange { index: 5, bound: 5 })
        );
        assert_matches!(check_index(0, 0), Err(Error::IndexOutOfRange { .. }));
    }
}
