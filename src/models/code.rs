/// Character class of a normalized code, computed once and reused by every
/// grammar check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeClass {
    /// Nothing left after whitespace removal
    Empty,
    /// ASCII digits only
    Numeric,
    /// ASCII letters and digits, at least one letter
    Alphanumeric,
    /// Anything else (punctuation, non-ASCII, ...)
    Other,
}

impl ShapeClass {
    /// Classify a whitespace-free string
    pub fn classify(value: &str) -> Self {
        if value.is_empty() {
            return ShapeClass::Empty;
        }

        let mut has_letter = false;
        for c in value.chars() {
            if c.is_ascii_alphabetic() {
                has_letter = true;
            } else if !c.is_ascii_digit() {
                return ShapeClass::Other;
            }
        }

        if has_letter {
            ShapeClass::Alphanumeric
        } else {
            ShapeClass::Numeric
        }
    }
}

/// Input with every whitespace character removed
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedCode {
    value: String,
    len: usize,
    shape: ShapeClass,
}

impl NormalizedCode {
    /// Build from a string that is already whitespace-free
    pub(crate) fn from_stripped(value: String) -> Self {
        let len = value.chars().count();
        let shape = ShapeClass::classify(&value);
        Self { value, len, shape }
    }

    /// The cleaned code
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Consume into the cleaned string
    pub fn into_string(self) -> String {
        self.value
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when nothing survived normalization
    pub fn is_empty(&self) -> bool {
        self.shape == ShapeClass::Empty
    }

    /// True iff non-empty and every character is an ASCII digit
    pub fn is_all_digits(&self) -> bool {
        self.shape == ShapeClass::Numeric
    }

    /// Character class of the code
    pub fn shape(&self) -> ShapeClass {
        self.shape
    }
}

impl AsRef<str> for NormalizedCode {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for NormalizedCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}
