use crate::error::AttributeError;

/// A named array of fixed-width tuples attached to points or cells.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeArray {
    name: String,
    components: usize,
    values: Vec<f64>,
}

impl AttributeArray {
    /// Creates an empty array with `components` values per tuple.
    #[must_use]
    pub fn new(name: impl Into<String>, components: usize) -> Self {
        Self {
            name: name.into(),
            components: components.max(1),
            values: Vec::new(),
        }
    }

    /// Creates an array from flat tuple data.
    ///
    /// # Errors
    ///
    /// Returns [`AttributeError::SizeMismatch`] if `values` does not hold a
    /// whole number of tuples.
    pub fn from_values(
        name: impl Into<String>,
        components: usize,
        values: Vec<f64>,
    ) -> Result<Self, AttributeError> {
        let mut array = Self::new(name, components);
        if !values.len().is_multiple_of(array.components) {
            return Err(AttributeError::SizeMismatch {
                name: array.name,
                expected: values.len().next_multiple_of(array.components),
                actual: values.len(),
            });
        }
        array.values = values;
        Ok(array)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn components(&self) -> usize {
        self.components
    }

    #[must_use]
    pub fn num_tuples(&self) -> usize {
        self.values.len() / self.components
    }

    /// Returns tuple `index`, if it exists.
    #[must_use]
    pub fn tuple(&self, index: usize) -> Option<&[f64]> {
        let start = index.checked_mul(self.components)?;
        self.values.get(start..start + self.components)
    }

    /// Flat view of every value.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Appends one tuple.
    ///
    /// # Errors
    ///
    /// Returns [`AttributeError::SizeMismatch`] if `tuple` has the wrong width.
    pub fn push_tuple(&mut self, tuple: &[f64]) -> Result<(), AttributeError> {
        if tuple.len() != self.components {
            return Err(AttributeError::SizeMismatch {
                name: self.name.clone(),
                expected: self.components,
                actual: tuple.len(),
            });
        }
        self.values.extend_from_slice(tuple);
        Ok(())
    }
}

/// The ordered set of attribute arrays carried by points or cells.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes {
    arrays: Vec<AttributeArray>,
}

impl Attributes {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an array, replacing any array with the same name.
    pub fn insert(&mut self, array: AttributeArray) {
        if let Some(slot) = self.arrays.iter_mut().find(|a| a.name == array.name) {
            *slot = array;
        } else {
            self.arrays.push(array);
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&AttributeArray> {
        self.arrays.iter().find(|a| a.name == name)
    }

    /// Returns the array called `name`.
    ///
    /// # Errors
    ///
    /// Returns [`AttributeError::MissingArray`] if no such array exists.
    pub fn require(&self, name: &str) -> Result<&AttributeArray, AttributeError> {
        self.get(name)
            .ok_or_else(|| AttributeError::MissingArray(name.to_owned()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &AttributeArray> {
        self.arrays.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.arrays.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.arrays.is_empty()
    }

    /// Empty arrays with the same names and widths as `self`.
    #[must_use]
    pub fn empty_like(&self) -> Self {
        Self {
            arrays: self
                .arrays
                .iter()
                .map(|a| AttributeArray::new(a.name.clone(), a.components))
                .collect(),
        }
    }

    /// Checks that every array holds exactly `expected` tuples.
    ///
    /// # Errors
    ///
    /// Returns [`AttributeError::SizeMismatch`] naming the first offending array.
    pub fn check_tuples(&self, expected: usize) -> Result<(), AttributeError> {
        match self.arrays.iter().find(|a| a.num_tuples() != expected) {
            Some(a) => Err(AttributeError::SizeMismatch {
                name: a.name.clone(),
                expected,
                actual: a.num_tuples(),
            }),
            None => Ok(()),
        }
    }

    /// Appends tuple `src_id` of every array in `src` to the matching array
    /// of `self`. Both sets must share a layout, see [`Attributes::empty_like`].
    ///
    /// # Errors
    ///
    /// Returns [`AttributeError::MissingArray`] if `self` lacks one of the
    /// source arrays, [`AttributeError::TupleOutOfRange`] if `src_id` is past
    /// the end of a source array, or [`AttributeError::SizeMismatch`] if the
    /// tuple widths disagree.
    pub fn copy_tuple(&mut self, src: &Attributes, src_id: usize) -> Result<(), AttributeError> {
        for (i, from) in src.arrays.iter().enumerate() {
            let tuple = from.tuple(src_id).ok_or_else(|| AttributeError::TupleOutOfRange {
                name: from.name.clone(),
                index: src_id,
                len: from.num_tuples(),
            })?;
            let to = match self.arrays.get_mut(i) {
                Some(to) if to.name == from.name => to,
                _ => return Err(AttributeError::MissingArray(from.name.clone())),
            };
            to.push_tuple(tuple)?;
        }
        Ok(())
    }
}
