//! ISBD punctuation helpers shared by every citation layout.
//!
//! ISBD separates description areas with `". – "` and uses fixed punctuation
//! inside areas (`place : publisher, year`, `extent ; dimensions`). A missing
//! element contributes nothing, including its punctuation.

/// Separator between ISBD areas.
pub const AREA_SEPARATOR: &str = ". – ";

/// Publication area: place, publisher and year.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublicationInfo {
    /// Place of publication
    pub place: String,
    /// Publisher
    pub publisher: String,
    /// Publication year, printed as found
    pub year: String,
}

impl PublicationInfo {
    /// Create a new `PublicationInfo`
    #[must_use]
    pub fn new(place: &str, publisher: &str, year: &str) -> Self {
        PublicationInfo {
            place: place.to_string(),
            publisher: publisher.to_string(),
            year: year.to_string(),
        }
    }

    /// Format publication info as a complete statement
    ///
    /// # Examples
    ///
    /// ```
    /// use bibshelf::citation::isbd::PublicationInfo;
    ///
    /// let info = PublicationInfo::new("София", "Наука и изкуство", "1985");
    /// assert_eq!(info.format_statement(), "София : Наука и изкуство, 1985");
    ///
    /// let info = PublicationInfo::new("", "Наука и изкуство", "1985");
    /// assert_eq!(info.format_statement(), "Наука и изкуство, 1985");
    /// ```
    #[must_use]
    pub fn format_statement(&self) -> String {
        let mut statement = self.place.clone();

        if !self.publisher.is_empty() {
            if !statement.is_empty() {
                statement.push_str(" : ");
            }
            statement.push_str(&self.publisher);
        }

        if !self.year.is_empty() {
            if !statement.is_empty() {
                statement.push_str(", ");
            }
            statement.push_str(&self.year);
        }

        statement
    }
}

/// Physical description area: extent and dimensions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhysicalDescription {
    /// Extent, usually a page count
    pub extent: String,
    /// Dimensions or illustration statement
    pub dimensions: String,
}

impl PhysicalDescription {
    /// Create a new `PhysicalDescription`
    #[must_use]
    pub fn new(extent: &str, dimensions: &str) -> Self {
        PhysicalDescription {
            extent: extent.to_string(),
            dimensions: dimensions.to_string(),
        }
    }

    /// Format as `extent ; dimensions`, omitting missing parts.
    #[must_use]
    pub fn format_statement(&self) -> String {
        match (self.extent.is_empty(), self.dimensions.is_empty()) {
            (false, false) => format!("{} ; {}", self.extent, self.dimensions),
            (false, true) => self.extent.clone(),
            (true, false) => self.dimensions.clone(),
            (true, true) => String::new(),
        }
    }
}

/// Growing ISBD description line.
///
/// ```
/// use bibshelf::citation::isbd::IsbdLine;
///
/// let mut line = IsbdLine::new("Title");
/// line.append(" : ", "").append(" / ", "Author").area("2 изд.");
/// assert_eq!(line.as_str(), "Title / Author. – 2 изд.");
/// ```
#[derive(Debug, Clone, Default)]
pub struct IsbdLine {
    text: String,
}

impl IsbdLine {
    /// Start a line with the given text.
    #[must_use]
    pub fn new(start: &str) -> Self {
        IsbdLine {
            text: start.to_string(),
        }
    }

    /// Append `separator` and `value` when `value` is non-empty.
    pub fn append(&mut self, separator: &str, value: &str) -> &mut Self {
        if !value.is_empty() {
            self.text.push_str(separator);
            self.text.push_str(value);
        }
        self
    }

    /// Append a new area (`". – " + value`) when `value` is non-empty.
    pub fn area(&mut self, value: &str) -> &mut Self {
        self.append(AREA_SEPARATOR, value)
    }

    /// Append `prefix + value + suffix` when `value` is non-empty.
    pub fn wrap(&mut self, prefix: &str, value: &str, suffix: &str) -> &mut Self {
        if !value.is_empty() {
            self.text.push_str(prefix);
            self.text.push_str(value);
            self.text.push_str(suffix);
        }
        self
    }

    /// The line so far.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Whether nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Consume the builder.
    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }
}
